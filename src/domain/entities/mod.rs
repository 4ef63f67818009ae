//! Domain entities

mod module;

pub use module::{Module, PackageNode, ResolvedPackages};
