//! Messages consumed by the rebuild loop

use std::path::Path;
use std::sync::mpsc::Sender;

use notify::event::ModifyKind;
use notify::{Event, EventKind};

/// One item on the rebuild loop's channel
#[derive(Debug)]
pub enum WatchMessage {
    /// A filesystem event from the watcher
    Fs(Event),
    /// The watcher reported an error; logged, never fatal
    WatcherError(notify::Error),
    /// Stop after the current build
    Shutdown,
}

impl From<notify::Result<Event>> for WatchMessage {
    fn from(res: notify::Result<Event>) -> Self {
        match res {
            Ok(event) => WatchMessage::Fs(event),
            Err(err) => WatchMessage::WatcherError(err),
        }
    }
}

/// Watcher callback that forwards everything onto the loop's channel
///
/// Send failures mean the loop is gone; there is nobody left to tell.
pub fn forward_to(tx: Sender<WatchMessage>) -> impl FnMut(notify::Result<Event>) + Send + 'static {
    move |res| {
        let _ = tx.send(WatchMessage::from(res));
    }
}

/// Whether `event` is a write that should trigger a rebuild
///
/// Creates, removals and content/name changes count, metadata-only changes
/// do not. Events that only touch `output_dir` are our own artifacts being
/// written.
pub fn is_relevant(event: &Event, output_dir: Option<&Path>) -> bool {
    let write = match event.kind {
        EventKind::Create(_) | EventKind::Remove(_) => true,
        EventKind::Modify(ModifyKind::Metadata(_)) => false,
        EventKind::Modify(_) => true,
        _ => false,
    };
    if !write {
        return false;
    }

    match output_dir {
        Some(out) => event.paths.iter().any(|p| !p.starts_with(out)),
        None => !event.paths.is_empty(),
    }
}
