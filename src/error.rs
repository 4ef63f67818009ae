//! Error types for go-wasm-pack
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for go-wasm-pack operations
pub type PackResult<T> = Result<T, PackError>;

/// Main error type for go-wasm-pack operations
#[derive(Error, Debug)]
pub enum PackError {
    /// The entry did not resolve to a loadable package inside a module
    #[error("load {entry} failed: {message}")]
    Load { entry: String, message: String },

    /// The external compiler failed to launch or exited non-zero
    #[error("build wasm failed: {status}: {output}")]
    Compile { status: String, output: String },

    /// A generated artifact could not be written
    #[error("write {path} failed: {source}")]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Registering or deregistering a path with the watcher failed
    #[error("watch {path} failed: {source}")]
    WatchRegistration {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },

    /// The vendored runtime shim is missing or not in the expected shape
    #[error("runtime shim {path}: {message}")]
    Shim { path: PathBuf, message: String },

    /// The filesystem watcher could not be created
    #[error("new fs watcher failed: {0}")]
    Watcher(#[source] notify::Error),

    /// The termination signal handler could not be installed
    #[error("install signal handler failed: {0}")]
    Signal(#[from] ctrlc::Error),
}

impl PackError {
    /// Build a `Load` error for `entry`
    pub fn load(entry: impl Into<String>, message: impl Into<String>) -> Self {
        PackError::Load {
            entry: entry.into(),
            message: message.into(),
        }
    }

    /// Whether the error must stop the watch loop instead of being logged
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            PackError::WatchRegistration { .. } | PackError::Watcher(_) | PackError::Signal(_)
        )
    }
}
