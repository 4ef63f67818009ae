//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - There are no subcommands; `--list` and `--watch` select the mode
//! - Boolean flags also accept `--flag=true|false`, the spelling bundler
//!   plugins generate

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::application::WatchFailurePolicy;

/// go-wasm-pack - build a Go package into a wasm binary plus an ES module wrapper
#[derive(Parser, Debug)]
#[command(name = "go-wasm-pack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Package to build (directory like ./app, or an import path)
    pub entry: Option<String>,

    /// Rebuild whenever a source file of the entry's module changes
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub watch: bool,

    /// Print the files to watch as JSON strings, one per line, and exit
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub list: bool,

    /// Suffix appended to the wasm import in index.mjs (e.g. "?url")
    #[arg(long, default_value = "", value_name = "SUFFIX")]
    pub import_wasm_suffix: String,

    /// What to do when a path cannot be (un)registered with the watcher
    #[arg(long, value_enum, default_value_t = WatchFailurePolicy::Abort)]
    pub on_watch_error: WatchFailurePolicy,

    /// Go toolchain binary
    #[arg(long, default_value = "go", value_name = "PATH")]
    pub go: PathBuf,

    /// Print debug log lines
    #[arg(short, long)]
    pub verbose: bool,
}
