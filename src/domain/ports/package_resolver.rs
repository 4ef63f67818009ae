//! PackageResolver port - the host ecosystem's package loader

use crate::domain::entities::ResolvedPackages;
use crate::error::PackResult;

/// Resolves an entry package and everything it transitively imports
///
/// Implementations:
/// - `GoListResolver` - `go list -deps -json`
pub trait PackageResolver {
    /// Resolve `entry` (a directory or import path)
    ///
    /// Fails with `PackError::Load` when the entry is not a loadable package.
    fn resolve(&self, entry: &str) -> PackResult<ResolvedPackages>;
}

impl<T: PackageResolver + ?Sized> PackageResolver for &T {
    fn resolve(&self, entry: &str) -> PackResult<ResolvedPackages> {
        (**self).resolve(entry)
    }
}
