//! Logging infrastructure for chainmake.
//!
//! This module provides:
//! - `tracing` subscriber setup driven by the `--verbosity` level
//! - The stdout progress-marker stream ([`ProgressSink`])
//!
//! # Example
//!
//! ```no_run
//! use chainmake_core::logging::{init_tracing, Marker, ProgressSink, Verbosity};
//!
//! init_tracing(Verbosity::Debug);
//!
//! let progress = ProgressSink::stdout();
//! progress.mark(Marker::File);
//! progress.mark(Marker::TaskEnd);
//! ```

mod progress;
mod types;

pub use progress::ProgressSink;
pub use types::{Marker, MarkerCallback, Verbosity};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// This sets up a subscriber that:
/// - Respects RUST_LOG environment variable
/// - Falls back to the given verbosity
/// - Outputs to stderr with timestamps, keeping stdout for progress markers
///
/// Should be called once at startup.
pub fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_filter_str(verbosity)));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();
}

/// Initialize tracing for tests (only logs warnings and above).
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

/// Convert Verbosity to filter string.
fn verbosity_to_filter_str(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Critical | Verbosity::Error => "error",
        Verbosity::Warning => "warn",
        Verbosity::Info => "info",
        Verbosity::Debug => "debug",
    }
}
