//! Makefile configuration.
//!
//! This module provides:
//! - The serde document ([`MakefileSpec`]) in JSON or TOML
//! - Validation into an immutable [`Makefile`]: tool templates parsed,
//!   chains checked, paths resolved against the makefile's directory
//!
//! # Example
//!
//! ```no_run
//! use chainmake_core::config::MakefileLoader;
//!
//! let makefile = MakefileLoader::new("makefile.json").load().unwrap();
//! for task in makefile.tasks() {
//!     println!("{:?} -> {}", task.input, task.output);
//! }
//! ```

mod loader;
mod makefile;

pub use loader::{ConfigError, ConfigResult, MakefileFormat, MakefileLoader};
pub use makefile::{normalize_path, Makefile, MakefileSpec, StepSpec, Task};
