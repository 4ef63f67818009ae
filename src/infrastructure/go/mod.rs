//! Go toolchain adapters
//!
//! Everything here shells out to the `go` binary. The wasm target is selected
//! through the environment, on top of the parent's full environment.

mod build;
mod list;
mod root;

pub use build::GoCompiler;
pub use list::{parse_package_stream, GoListResolver};
pub use root::{goroot, load_runtime_shim, locate_runtime_shim};

use std::path::PathBuf;
use std::process::Command;

/// Environment overrides selecting the wasm target
pub const WASM_ENV: [(&str, &str); 2] = [("GOOS", "js"), ("GOARCH", "wasm")];

/// How to invoke the Go toolchain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoToolchain {
    /// The `go` binary
    pub go: PathBuf,
}

impl Default for GoToolchain {
    fn default() -> Self {
        Self {
            go: PathBuf::from("go"),
        }
    }
}

impl GoToolchain {
    pub fn new(go: impl Into<PathBuf>) -> Self {
        Self { go: go.into() }
    }

    /// `go <args>` targeting js/wasm
    pub fn wasm_command<I, S>(&self, args: I) -> Command
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let mut cmd = Command::new(&self.go);
        cmd.args(args).envs(WASM_ENV);
        cmd
    }
}
