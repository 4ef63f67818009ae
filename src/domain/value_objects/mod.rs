//! Value objects

mod build_artifacts;
mod watch_set;

pub use build_artifacts::{BuildArtifacts, OUTPUT_DIR, WASM_FILE, WRAPPER_FILE};
pub use watch_set::WatchSet;
