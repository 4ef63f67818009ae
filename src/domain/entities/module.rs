//! Module and package nodes

use std::collections::HashMap;
use std::path::PathBuf;

/// The root unit of compilation
///
/// Re-derived on every load; nothing holds on to it between rebuilds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// Canonical import path, e.g. `github.com/acme/app`
    pub import_path: String,
    /// Directory containing the manifest
    pub root_dir: PathBuf,
    /// Path of `go.mod`
    pub manifest: PathBuf,
}

impl Module {
    pub fn new(
        import_path: impl Into<String>,
        root_dir: impl Into<PathBuf>,
        manifest: impl Into<PathBuf>,
    ) -> Self {
        Self {
            import_path: import_path.into(),
            root_dir: root_dir.into(),
            manifest: manifest.into(),
        }
    }

    /// Whether `import_path` names a package of this module
    ///
    /// Matches whole path segments: `acme/app` owns `acme/app` and
    /// `acme/app/sub`, but not `acme/application`.
    pub fn contains(&self, import_path: &str) -> bool {
        self.relative_import(import_path).is_some()
    }

    /// Directory of an in-module package, derived from its import path
    ///
    /// Returns `None` for packages outside the module. The module's own root
    /// package maps to `root_dir`.
    pub fn package_dir(&self, import_path: &str) -> Option<PathBuf> {
        let rel = self.relative_import(import_path)?;
        if rel.is_empty() {
            return Some(self.root_dir.clone());
        }
        Some(rel.split('/').fold(self.root_dir.clone(), |dir, seg| dir.join(seg)))
    }

    fn relative_import<'a>(&self, import_path: &'a str) -> Option<&'a str> {
        let rest = import_path.strip_prefix(self.import_path.as_str())?;
        if rest.is_empty() {
            Some(rest)
        } else {
            rest.strip_prefix('/')
        }
    }
}

/// A compilable package as reported by the resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageNode {
    pub import_path: String,
    /// Source directory
    pub dir: PathBuf,
    /// Import paths of the packages this one imports
    pub imports: Vec<String>,
    /// Owning module; `None` for the standard library
    pub module: Option<Module>,
}

/// Everything the resolver found for one entry
#[derive(Debug, Clone, Default)]
pub struct ResolvedPackages {
    /// Import path of the entry package
    pub entry: String,
    /// All packages reachable from the entry, keyed by import path
    pub packages: HashMap<String, PackageNode>,
}

impl ResolvedPackages {
    pub fn new(entry: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
            packages: HashMap::new(),
        }
    }

    pub fn insert(&mut self, node: PackageNode) {
        self.packages.insert(node.import_path.clone(), node);
    }

    pub fn get(&self, import_path: &str) -> Option<&PackageNode> {
        self.packages.get(import_path)
    }

    pub fn entry_node(&self) -> Option<&PackageNode> {
        self.get(&self.entry)
    }
}
