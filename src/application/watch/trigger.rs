//! Rebuild trigger
//!
//! Owns the watcher and runs Load → Reconcile → Build cycles. Messages are
//! consumed one at a time from a single channel, so at most one build is in
//! flight; events arriving during a build wait in the channel and each one
//! produces its own cycle afterwards. Once the stop flag is raised, queued
//! events are dropped and no new cycle starts.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Receiver;
use std::sync::Arc;

use crate::application::build::BuildPipeline;
use crate::application::graph::{LoadedGraph, ModuleGraphLoader};
use crate::application::reconcile::WatchRegistry;
use crate::domain::ports::{PackageResolver, PathWatcher, WasmCompiler};
use crate::domain::value_objects::BuildArtifacts;
use crate::error::PackResult;

use super::event::{is_relevant, WatchMessage};

/// Where the trigger is in its cycle
///
/// `Building` only lasts for the duration of `rebuild`, which holds the
/// trigger mutably, so from outside a cycle the state always reads `Idle`.
/// Entering `Building` is logged at debug level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    Idle,
    Building,
}

/// Entry plus the collaborators needed for one cycle
pub struct BuildEngine<R, C> {
    entry: String,
    loader: ModuleGraphLoader<R>,
    pipeline: BuildPipeline<C>,
}

impl<R: PackageResolver, C: WasmCompiler> BuildEngine<R, C> {
    pub fn new(entry: impl Into<String>, resolver: R, pipeline: BuildPipeline<C>) -> Self {
        Self {
            entry: entry.into(),
            loader: ModuleGraphLoader::new(resolver),
            pipeline,
        }
    }

    pub fn load(&self) -> PackResult<LoadedGraph> {
        self.loader.load(&self.entry)
    }

    pub fn build(&self, graph: &LoadedGraph) -> PackResult<BuildArtifacts> {
        self.pipeline.build(&graph.build_dir)
    }

    /// One-shot mode: a single Load → Build with no watcher
    pub fn run_once(&self) -> PackResult<BuildArtifacts> {
        let graph = self.load()?;
        self.build(&graph)
    }
}

/// Watch-mode orchestrator
pub struct RebuildTrigger<R, C, W> {
    engine: BuildEngine<R, C>,
    registry: WatchRegistry<W>,
    output_dir: Option<PathBuf>,
    state: TriggerState,
    cycles: usize,
    stop: Arc<AtomicBool>,
}

impl<R, C, W> RebuildTrigger<R, C, W>
where
    R: PackageResolver,
    C: WasmCompiler,
    W: PathWatcher,
{
    pub fn new(engine: BuildEngine<R, C>, registry: WatchRegistry<W>) -> Self {
        Self {
            engine,
            registry,
            output_dir: None,
            state: TriggerState::Idle,
            cycles: 0,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Raised to stop the loop without waiting for queued events
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    fn stopping(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn registry(&self) -> &WatchRegistry<W> {
        &self.registry
    }

    /// Cycles started so far, including failed ones
    pub fn cycles(&self) -> usize {
        self.cycles
    }

    /// Initial build, then one cycle per relevant event
    ///
    /// Returns when a `Shutdown` message arrives, the stop flag is raised or
    /// every sender is gone. Only fatal errors (watch registration under the
    /// abort policy) end the loop early.
    pub fn run(mut self, events: Receiver<WatchMessage>) -> PackResult<()> {
        self.rebuild()?;

        for message in events {
            if self.stopping() {
                crate::debug!("rebuild loop stopping");
                break;
            }
            match message {
                WatchMessage::Fs(event) => {
                    if is_relevant(&event, self.output_dir.as_deref()) {
                        crate::debug!("{:?} {:?}", event.kind, event.paths);
                        self.rebuild()?;
                    }
                }
                WatchMessage::WatcherError(err) => crate::error!("watch error: {}", err),
                WatchMessage::Shutdown => {
                    crate::debug!("rebuild loop stopping");
                    break;
                }
            }
        }
        Ok(())
    }

    /// Run one cycle; non-fatal failures are logged and swallowed
    pub fn rebuild(&mut self) -> PackResult<Option<BuildArtifacts>> {
        self.state = TriggerState::Building;
        self.cycles += 1;
        crate::debug!("cycle {}: {:?}", self.cycles, self.state);
        let result = self.cycle();
        self.state = TriggerState::Idle;

        match result {
            Ok(artifacts) => Ok(Some(artifacts)),
            Err(err) if err.is_fatal() => Err(err),
            Err(err) => {
                crate::error!("{}", err);
                Ok(None)
            }
        }
    }

    fn cycle(&mut self) -> PackResult<BuildArtifacts> {
        let graph = self.engine.load()?;

        let report = self.registry.sync(&graph.watch_paths)?;
        if !report.is_noop() {
            crate::debug!(
                "watching {} paths (+{} -{})",
                self.registry.watched().len(),
                report.added.len(),
                report.removed.len()
            );
        }

        self.output_dir = Some(BuildArtifacts::output_dir_of(&graph.build_dir));
        self.engine.build(&graph)
    }
}
