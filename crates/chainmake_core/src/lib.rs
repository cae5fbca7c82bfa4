//! chainmake core - conversion chain resolution and task execution
//!
//! This crate contains all of chainmake's logic with no CLI dependencies.
//! The binary in `chainmake_cli` only parses arguments and sets up logging.

pub mod chains;
pub mod config;
pub mod executor;
pub mod logging;
pub mod orchestrator;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
