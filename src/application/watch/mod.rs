//! Watch mode
//!
//! Keeps a filesystem watcher in step with the entry's dependency closure
//! and rebuilds on every relevant write.
//!
//! ## Architecture
//!
//! - `RebuildTrigger` - single consumer of the event channel; runs cycles
//! - `BuildEngine` - Load → Build, shared with one-shot mode
//! - `OrchestratorContext` - thread, channel and signal wiring around a trigger
//! - `WatchMessage` - what travels on the channel
//!
//! ## Usage
//!
//! ```ignore
//! let (tx, rx) = OrchestratorContext::channel();
//! let watcher = create_watcher(tx.clone())?;
//! let trigger = RebuildTrigger::new(engine, WatchRegistry::new(watcher, policy));
//! let ctx = OrchestratorContext::spawn(trigger, tx, rx);
//! ctx.install_signal_handler()?;
//! ctx.wait()?;
//! ```

mod context;
mod event;
mod trigger;


pub use context::OrchestratorContext;
pub use event::{forward_to, is_relevant, WatchMessage};
pub use trigger::{BuildEngine, RebuildTrigger, TriggerState};
