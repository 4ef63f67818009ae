//! go-wasm-pack - build Go packages into wasm plus an ES module wrapper
//!
//! Resolves an entry package, compiles it with the Go toolchain for the
//! js/wasm target, and writes `bin/index.wasm` and `bin/index.mjs` next to
//! it. In watch mode the module-local dependency closure is watched and
//! rebuilt on every write.

#[macro_use]
pub mod logger;

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    BuildEngine, BuildOptions, BuildPipeline, ModuleGraphLoader, OrchestratorContext,
    RebuildTrigger, RuntimeShim, WatchFailurePolicy,
};
pub use domain::{BuildArtifacts, Module, PackageNode, ResolvedPackages, WatchSet};
pub use error::{PackError, PackResult};
