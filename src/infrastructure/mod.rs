//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `go/` - Go toolchain (package listing, wasm compiler, runtime shim)
//! - `watcher` - OS filesystem watcher

pub mod go;
pub mod watcher;

pub use go::{GoCompiler, GoListResolver, GoToolchain};
pub use watcher::create_watcher;
