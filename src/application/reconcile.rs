//! Watch set reconciliation
//!
//! Brings a live watcher from the previously registered set to a freshly
//! computed one with the fewest register/deregister calls.

use std::path::PathBuf;

use crate::domain::ports::PathWatcher;
use crate::domain::value_objects::WatchSet;
use crate::error::{PackError, PackResult};

/// What to do when the watcher refuses a register/deregister call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum WatchFailurePolicy {
    /// Stop the watch loop; the process exits non-zero
    #[default]
    Abort,
    /// Log and carry on; a failed registration is retried next cycle
    Skip,
}

/// Calls issued by one reconciliation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub added: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
    /// Paths whose call failed under `Skip`
    pub failed: Vec<PathBuf>,
}

impl ReconcileReport {
    pub fn is_noop(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.failed.is_empty()
    }
}

/// Diff `previous` against `next` and apply it to `watcher`
///
/// Returns the new "currently watched" record. Under `Abort` the first failure
/// is returned as `WatchRegistration` and no record is produced.
pub fn reconcile<W: PathWatcher + ?Sized>(
    watcher: &mut W,
    previous: &WatchSet,
    next: &WatchSet,
    policy: WatchFailurePolicy,
) -> PackResult<(WatchSet, ReconcileReport)> {
    let mut record = next.clone();
    let mut report = ReconcileReport::default();

    for path in next.difference(previous) {
        match watcher.watch_path(path) {
            Ok(()) => report.added.push(path.to_path_buf()),
            Err(source) => {
                let err = PackError::WatchRegistration {
                    path: path.to_path_buf(),
                    source,
                };
                if policy == WatchFailurePolicy::Abort {
                    return Err(err);
                }
                crate::warn!("{}; skipped", err);
                record.remove(path);
                report.failed.push(path.to_path_buf());
            }
        }
    }

    for path in previous.difference(next) {
        match watcher.unwatch_path(path) {
            Ok(()) => report.removed.push(path.to_path_buf()),
            // The OS drops watches on deleted directories by itself
            Err(e) if matches!(e.kind, notify::ErrorKind::WatchNotFound) => {
                report.removed.push(path.to_path_buf())
            }
            Err(source) => {
                let err = PackError::WatchRegistration {
                    path: path.to_path_buf(),
                    source,
                };
                if policy == WatchFailurePolicy::Abort {
                    return Err(err);
                }
                crate::warn!("{}; still watched", err);
                record.insert(path.to_path_buf());
                report.failed.push(path.to_path_buf());
            }
        }
    }

    Ok((record, report))
}

/// A watcher together with the set it currently has registered
///
/// Only the rebuild trigger owns one, so the record is never shared.
pub struct WatchRegistry<W> {
    watcher: W,
    watched: WatchSet,
    policy: WatchFailurePolicy,
}

impl<W: PathWatcher> WatchRegistry<W> {
    pub fn new(watcher: W, policy: WatchFailurePolicy) -> Self {
        Self {
            watcher,
            watched: WatchSet::new(),
            policy,
        }
    }

    /// Reconcile against `next` and replace the record
    pub fn sync(&mut self, next: &WatchSet) -> PackResult<ReconcileReport> {
        let (record, report) = reconcile(&mut self.watcher, &self.watched, next, self.policy)?;
        self.watched = record;
        Ok(report)
    }

    pub fn watched(&self) -> &WatchSet {
        &self.watched
    }

    pub fn watcher(&self) -> &W {
        &self.watcher
    }
}
