//! Domain Layer
//!
//! Types and ports for the watch/build engine, free of process and
//! filesystem I/O.
//!
//! ## Structure
//!
//! - `entities/` - Module and package graph nodes as reported by the resolver
//! - `value_objects/` - Watch sets and build artifact locations
//! - `ports/` - Traits for the external collaborators (resolver, watcher, compiler)

pub mod entities;
pub mod ports;
pub mod value_objects;

pub use entities::{Module, PackageNode, ResolvedPackages};
pub use value_objects::{BuildArtifacts, WatchSet};
