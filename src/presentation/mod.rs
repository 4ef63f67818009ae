//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Flag definitions
//! - `factory` - Creates the build engine and trigger (dependency injection)

pub mod cli;
pub mod factory;

pub use cli::Cli;
pub use factory::{create_build_engine, create_rebuild_trigger, create_resolver};
