//! Watch Set Value Object

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Filesystem paths registered (or to be registered) for change notification
///
/// Ordered so that listings and registration order are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchSet(BTreeSet<PathBuf>);

impl WatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a path; returns `false` if it was already present
    pub fn insert(&mut self, path: impl Into<PathBuf>) -> bool {
        self.0.insert(path.into())
    }

    pub fn remove(&mut self, path: &Path) -> bool {
        self.0.remove(path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.0.contains(path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.0.iter().map(PathBuf::as_path)
    }

    /// Paths in `self` that are not in `other`
    pub fn difference<'a>(&'a self, other: &'a WatchSet) -> impl Iterator<Item = &'a Path> {
        self.0.difference(&other.0).map(PathBuf::as_path)
    }
}

impl FromIterator<PathBuf> for WatchSet {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a WatchSet {
    type Item = &'a PathBuf;
    type IntoIter = std::collections::btree_set::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
