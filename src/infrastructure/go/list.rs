//! `go list` as the package resolver

use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::entities::{Module, PackageNode, ResolvedPackages};
use crate::domain::ports::PackageResolver;
use crate::error::{PackError, PackResult};

use super::GoToolchain;

/// The subset of `go list -json` output we read
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ListedPackage {
    import_path: String,
    #[serde(default)]
    dir: PathBuf,
    #[serde(default)]
    imports: Vec<String>,
    #[serde(default)]
    dep_only: bool,
    #[serde(default)]
    module: Option<ListedModule>,
    #[serde(default)]
    error: Option<ListedError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ListedModule {
    path: String,
    #[serde(default)]
    dir: PathBuf,
    #[serde(default)]
    go_mod: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ListedError {
    err: String,
}

impl From<ListedModule> for Module {
    fn from(m: ListedModule) -> Self {
        Module::new(m.path, m.dir, m.go_mod)
    }
}

/// Resolves packages with `go list -deps -json`
#[derive(Debug, Clone, Default)]
pub struct GoListResolver {
    toolchain: GoToolchain,
    working_dir: Option<PathBuf>,
}

impl GoListResolver {
    pub fn new(toolchain: GoToolchain) -> Self {
        Self {
            toolchain,
            working_dir: None,
        }
    }

    /// Resolve relative entries against `dir` instead of the process cwd
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}

impl PackageResolver for GoListResolver {
    fn resolve(&self, entry: &str) -> PackResult<ResolvedPackages> {
        let mut cmd = self.toolchain.wasm_command(["list", "-deps", "-json", "--", entry]);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        let out = cmd.output().map_err(|e| {
            PackError::load(
                entry,
                format!("failed to run {}: {}", self.toolchain.go.display(), e),
            )
        })?;
        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            return Err(PackError::load(entry, stderr.trim_end()));
        }

        parse_package_stream(entry, &out.stdout)
    }
}

/// Parse the concatenated JSON objects printed by `go list -json`
///
/// The entry is the first package not marked `DepOnly`.
pub fn parse_package_stream(entry: &str, stdout: &[u8]) -> PackResult<ResolvedPackages> {
    let stream = serde_json::Deserializer::from_slice(stdout).into_iter::<ListedPackage>();

    let mut resolved = ResolvedPackages::default();
    let mut entry_path: Option<String> = None;

    for item in stream {
        let pkg = item.map_err(|e| PackError::load(entry, format!("bad go list output: {}", e)))?;

        if !pkg.dep_only {
            if let Some(err) = &pkg.error {
                return Err(PackError::load(entry, err.err.clone()));
            }
            match &entry_path {
                None => entry_path = Some(pkg.import_path.clone()),
                Some(first) => {
                    crate::warn!("{} matched several packages; using {}", entry, first)
                }
            }
        }

        resolved.insert(PackageNode {
            import_path: pkg.import_path,
            dir: pkg.dir,
            imports: pkg.imports,
            module: pkg.module.map(Module::from),
        });
    }

    resolved.entry = entry_path
        .ok_or_else(|| PackError::load(entry, "go list reported no package"))?;
    Ok(resolved)
}
