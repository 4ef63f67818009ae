//! PathWatcher port - the minimal surface of a filesystem watcher
//!
//! Only register/deregister are needed by the reconciler; events flow through
//! the channel handed to the watcher at construction time.

use std::path::Path;

/// Registers and deregisters single paths
///
/// Implementations:
/// - `notify::RecommendedWatcher` - non-recursive OS watches
pub trait PathWatcher {
    fn watch_path(&mut self, path: &Path) -> notify::Result<()>;

    fn unwatch_path(&mut self, path: &Path) -> notify::Result<()>;
}
