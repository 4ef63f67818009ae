//! Module graph loading
//!
//! Turns the resolver's package list into the set of paths whose changes
//! affect the build: every in-module package directory reachable from the
//! entry, plus the module manifest. Packages from other modules and the
//! standard library are treated as stable and never watched.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::domain::entities::{Module, ResolvedPackages};
use crate::domain::ports::PackageResolver;
use crate::domain::value_objects::WatchSet;
use crate::error::{PackError, PackResult};

/// Result of one load: the module, its watch closure and the build directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedGraph {
    pub module: Module,
    pub watch_paths: WatchSet,
    /// Entry package directory, derived from its import path
    pub build_dir: PathBuf,
}

/// Resolves an entry and computes its dependency closure
pub struct ModuleGraphLoader<R> {
    resolver: R,
}

impl<R: PackageResolver> ModuleGraphLoader<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Load `entry` fresh; nothing is cached between calls
    pub fn load(&self, entry: &str) -> PackResult<LoadedGraph> {
        let resolved = self.resolver.resolve(entry)?;
        compute_closure(entry, &resolved)
    }
}

/// Compute the watch closure of an already resolved package list
pub fn compute_closure(entry: &str, resolved: &ResolvedPackages) -> PackResult<LoadedGraph> {
    let root = resolved
        .entry_node()
        .ok_or_else(|| PackError::load(entry, "entry package missing from resolver output"))?;

    let module = root.module.clone().ok_or_else(|| {
        PackError::load(
            entry,
            format!("package {} is not part of a module", root.import_path),
        )
    })?;
    if module.manifest.as_os_str().is_empty() {
        return Err(PackError::load(
            entry,
            format!("module {} has no go.mod", module.import_path),
        ));
    }

    let build_dir = module.package_dir(&root.import_path).ok_or_else(|| {
        PackError::load(
            entry,
            format!(
                "package {} is outside module {}",
                root.import_path, module.import_path
            ),
        )
    })?;

    let mut watch_paths = WatchSet::new();
    watch_paths.insert(module.manifest.clone());

    let mut seen: HashSet<&str> = HashSet::new();
    let mut stack = vec![root.import_path.as_str()];

    while let Some(import_path) = stack.pop() {
        if !seen.insert(import_path) {
            continue;
        }
        let Some(dir) = module.package_dir(import_path) else {
            continue;
        };
        watch_paths.insert(dir);

        let Some(node) = resolved.get(import_path) else {
            crate::debug!("{} imported but not reported by the resolver", import_path);
            continue;
        };
        for import in &node.imports {
            if !seen.contains(import.as_str()) {
                stack.push(import.as_str());
            }
        }
    }

    Ok(LoadedGraph {
        module,
        watch_paths,
        build_dir,
    })
}
