//! In-memory port implementations shared by the application tests

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::domain::entities::{Module, PackageNode, ResolvedPackages};
use crate::domain::ports::{PackageResolver, PathWatcher, WasmCompiler};
use crate::error::{PackError, PackResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Watch(PathBuf),
    Unwatch(PathBuf),
}

/// Records every call; optionally fails for one path
#[derive(Debug, Default)]
pub struct RecordingWatcher {
    pub calls: Vec<Call>,
    pub fail_on: Option<PathBuf>,
    /// Paths the "OS" already forgot about
    pub vanished: HashSet<PathBuf>,
}

impl RecordingWatcher {
    pub fn failing_on(path: &str) -> Self {
        Self {
            fail_on: Some(PathBuf::from(path)),
            ..Self::default()
        }
    }
}

impl PathWatcher for RecordingWatcher {
    fn watch_path(&mut self, path: &Path) -> notify::Result<()> {
        self.calls.push(Call::Watch(path.to_path_buf()));
        if self.fail_on.as_deref() == Some(path) {
            return Err(notify::Error::generic("no space left on device"));
        }
        Ok(())
    }

    fn unwatch_path(&mut self, path: &Path) -> notify::Result<()> {
        self.calls.push(Call::Unwatch(path.to_path_buf()));
        if self.vanished.contains(path) {
            return Err(notify::Error::watch_not_found());
        }
        if self.fail_on.as_deref() == Some(path) {
            return Err(notify::Error::generic("bad file descriptor"));
        }
        Ok(())
    }
}

/// Single-module resolver whose package set can be swapped between loads
#[derive(Clone)]
pub struct SharedResolver {
    inner: Arc<Mutex<Result<ResolvedPackages, String>>>,
}

impl SharedResolver {
    pub fn new(resolved: ResolvedPackages) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Ok(resolved))),
        }
    }

    pub fn set(&self, resolved: ResolvedPackages) {
        *self.inner.lock().unwrap() = Ok(resolved);
    }

    pub fn fail(&self, message: &str) {
        *self.inner.lock().unwrap() = Err(message.to_string());
    }
}

impl PackageResolver for SharedResolver {
    fn resolve(&self, entry: &str) -> PackResult<ResolvedPackages> {
        match &*self.inner.lock().unwrap() {
            Ok(r) => Ok(r.clone()),
            Err(message) => Err(PackError::load(entry, message.clone())),
        }
    }
}

/// Packages of module `example.com/app` rooted at `root`
///
/// `packages` are `(relative dir, imports relative to the module)`; `""` is the
/// module root package and is the entry.
pub fn module_packages(root: &Path, packages: &[(&str, &[&str])]) -> ResolvedPackages {
    let module = Module::new("example.com/app", root, root.join("go.mod"));
    let import = |rel: &str| {
        if rel.is_empty() {
            module.import_path.clone()
        } else {
            format!("{}/{}", module.import_path, rel)
        }
    };

    let mut resolved = ResolvedPackages::new(import(""));
    for (rel, imports) in packages {
        resolved.insert(PackageNode {
            import_path: import(*rel),
            dir: root.join(rel),
            imports: imports.iter().map(|i| import(*i)).collect(),
            module: Some(module.clone()),
        });
    }
    resolved
}

/// Counts builds and the number running at once
#[derive(Debug, Default)]
pub struct BuildCounters {
    pub started: AtomicUsize,
    pub active: AtomicUsize,
    pub max_active: AtomicUsize,
}

/// Writes a fake binary, or fails with a fixed output
#[derive(Clone, Default)]
pub struct FakeCompiler {
    pub counters: Arc<BuildCounters>,
    pub fail_with: Option<String>,
    pub delay: Option<Duration>,
}

impl FakeCompiler {
    pub fn failing(output: &str) -> Self {
        Self {
            fail_with: Some(output.to_string()),
            ..Self::default()
        }
    }
}

impl WasmCompiler for FakeCompiler {
    fn compile(&self, _package_dir: &Path, output: &Path) -> PackResult<()> {
        let c = &self.counters;
        c.started.fetch_add(1, Ordering::SeqCst);
        let now = c.active.fetch_add(1, Ordering::SeqCst) + 1;
        c.max_active.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            thread::sleep(delay);
        }
        let result = match &self.fail_with {
            Some(out) => Err(PackError::Compile {
                status: "exit status: 2".to_string(),
                output: out.clone(),
            }),
            None => std::fs::write(output, b"\0asm\x01\0\0\0").map_err(|source| {
                PackError::ArtifactWrite {
                    path: output.to_path_buf(),
                    source,
                }
            }),
        };

        c.active.fetch_sub(1, Ordering::SeqCst);
        result
    }
}
