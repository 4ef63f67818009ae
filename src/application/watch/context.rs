//! Orchestrator context
//!
//! Explicit handle on the rebuild loop thread: the channel it consumes, the
//! thread itself, and the termination signal wiring. Dropping the loop drops
//! the watcher it owns.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::domain::ports::{PackageResolver, PathWatcher, WasmCompiler};
use crate::error::PackResult;

use super::event::WatchMessage;
use super::trigger::RebuildTrigger;

/// A running rebuild loop
pub struct OrchestratorContext {
    sender: Sender<WatchMessage>,
    stop: Arc<AtomicBool>,
    handle: JoinHandle<PackResult<()>>,
}

impl OrchestratorContext {
    /// The loop's channel; hand the sender to the watcher before spawning
    pub fn channel() -> (Sender<WatchMessage>, Receiver<WatchMessage>) {
        mpsc::channel()
    }

    /// Start `trigger` on its own thread consuming `events`
    pub fn spawn<R, C, W>(
        trigger: RebuildTrigger<R, C, W>,
        sender: Sender<WatchMessage>,
        events: Receiver<WatchMessage>,
    ) -> Self
    where
        R: PackageResolver + Send + 'static,
        C: WasmCompiler + Send + 'static,
        W: PathWatcher + Send + 'static,
    {
        let stop = trigger.stop_flag();
        let handle = thread::spawn(move || trigger.run(events));
        Self {
            sender,
            stop,
            handle,
        }
    }

    pub fn sender(&self) -> Sender<WatchMessage> {
        self.sender.clone()
    }

    /// Turn SIGINT/SIGTERM into a stop request
    ///
    /// A build already running is allowed to finish; the compiler
    /// subprocess is not killed. Events still queued are dropped.
    pub fn install_signal_handler(&self) -> PackResult<()> {
        let tx = self.sender();
        let stop = Arc::clone(&self.stop);
        ctrlc::set_handler(move || request_stop(&stop, &tx))?;
        Ok(())
    }

    /// Block until the loop ends by itself (signal or fatal error)
    pub fn wait(self) -> PackResult<()> {
        let Self { sender, handle, .. } = self;
        drop(sender);
        match handle.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }

    /// Ask the loop to stop and wait for it
    pub fn shutdown(self) -> PackResult<()> {
        request_stop(&self.stop, &self.sender);
        self.wait()
    }
}

/// Raise the flag first so queued events are skipped, then wake the loop
fn request_stop(stop: &AtomicBool, tx: &Sender<WatchMessage>) {
    stop.store(true, Ordering::SeqCst);
    let _ = tx.send(WatchMessage::Shutdown);
}
