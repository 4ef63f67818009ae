//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the engine.
//! Infrastructure layer provides concrete implementations.

pub mod package_resolver;
pub mod path_watcher;
pub mod wasm_compiler;

pub use package_resolver::PackageResolver;
pub use path_watcher::PathWatcher;
pub use wasm_compiler::WasmCompiler;
