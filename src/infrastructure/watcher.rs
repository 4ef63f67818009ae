//! OS filesystem watcher backed by `notify`

use std::path::Path;
use std::sync::mpsc::Sender;

use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::watch::{forward_to, WatchMessage};
use crate::domain::ports::PathWatcher;
use crate::error::{PackError, PackResult};

/// Directories are watched one level deep; subpackages get their own entry
impl PathWatcher for RecommendedWatcher {
    fn watch_path(&mut self, path: &Path) -> notify::Result<()> {
        self.watch(path, RecursiveMode::NonRecursive)
    }

    fn unwatch_path(&mut self, path: &Path) -> notify::Result<()> {
        self.unwatch(path)
    }
}

/// A watcher that forwards every event and error onto `tx`
pub fn create_watcher(tx: Sender<WatchMessage>) -> PackResult<RecommendedWatcher> {
    RecommendedWatcher::new(forward_to(tx), Config::default()).map_err(PackError::Watcher)
}
