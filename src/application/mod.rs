//! Application Layer
//!
//! Use cases that orchestrate loading, building and watching.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Never spawns processes or touches the OS watcher directly
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ModuleGraphLoader` - Resolve the entry and compute its watch closure
//! - `BuildPipeline` - Compile the wasm binary and write the wrapper module
//! - `WatchRegistry` - Keep the watcher in step with the closure
//! - `RebuildTrigger` - Load → Reconcile → Build on every relevant write
//!
//! ## Services
//!
//! - `RuntimeShim` - Trimmed copy of the toolchain's JS glue
//! - `render_wrapper` - The ES module that instantiates the binary

pub mod build;
pub mod graph;
pub mod reconcile;
pub mod shim;
pub mod watch;
pub mod wrapper;

#[cfg(test)]
pub(crate) mod testing;

pub use build::{summary_line, BuildOptions, BuildPipeline};
pub use graph::{compute_closure, LoadedGraph, ModuleGraphLoader};
pub use reconcile::{reconcile, ReconcileReport, WatchFailurePolicy, WatchRegistry};
pub use shim::RuntimeShim;
pub use watch::{BuildEngine, OrchestratorContext, RebuildTrigger, TriggerState, WatchMessage};
pub use wrapper::render_wrapper;
