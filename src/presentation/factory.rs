//! Use Case Factory
//!
//! Creates the build engine and rebuild trigger with the Go toolchain and
//! the OS watcher wired in.

use std::sync::mpsc::Sender;

use notify::RecommendedWatcher;

use crate::application::{
    BuildEngine, BuildOptions, BuildPipeline, RebuildTrigger, RuntimeShim, WatchFailurePolicy,
    WatchMessage, WatchRegistry,
};
use crate::error::PackResult;
use crate::infrastructure::{create_watcher, GoCompiler, GoListResolver, GoToolchain};

/// Type alias for the engine backed by `go list` and `go build`
pub type ConcreteBuildEngine = BuildEngine<GoListResolver, GoCompiler>;

/// Type alias for the watch-mode trigger with the OS watcher
pub type ConcreteRebuildTrigger = RebuildTrigger<GoListResolver, GoCompiler, RecommendedWatcher>;

pub fn create_resolver(toolchain: &GoToolchain) -> GoListResolver {
    GoListResolver::new(toolchain.clone())
}

/// Create a build engine for `entry`
pub fn create_build_engine(
    entry: &str,
    toolchain: &GoToolchain,
    shim: RuntimeShim,
    options: BuildOptions,
) -> ConcreteBuildEngine {
    let pipeline = BuildPipeline::new(GoCompiler::new(toolchain.clone()), shim, options);
    BuildEngine::new(entry, create_resolver(toolchain), pipeline)
}

/// Create a rebuild trigger whose watcher feeds `tx`
pub fn create_rebuild_trigger(
    engine: ConcreteBuildEngine,
    tx: Sender<WatchMessage>,
    policy: WatchFailurePolicy,
) -> PackResult<ConcreteRebuildTrigger> {
    let watcher = create_watcher(tx)?;
    Ok(RebuildTrigger::new(engine, WatchRegistry::new(watcher, policy)))
}
