//! Side-effecting operations of a run.
//!
//! Everything that touches the outside world goes through [`Executor`]:
//! running a tool command, concatenating the final files of a task, and
//! removing intermediates. [`SystemExecutor`] performs them; [`DryRunExecutor`]
//! accepts every request and does nothing, so a dry run follows exactly the
//! same code path as a real one.

mod dry_run;
mod system;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use dry_run::DryRunExecutor;
pub use system::SystemExecutor;

/// Errors from executing operations.
#[derive(Error, Debug)]
pub enum ExecError {
    /// The command could not be started at all.
    #[error("Failed to start '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The command ran and reported failure.
    #[error("{tool} failed with exit code {exit_code}: {command}")]
    CommandFailed {
        tool: String,
        exit_code: i32,
        command: String,
    },

    /// File I/O error.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExecError {
    /// Create a command failed error, naming the tool after the command's first word.
    pub fn command_failed(command: impl Into<String>, exit_code: i32) -> Self {
        let command = command.into();
        let tool = command
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string();
        Self::CommandFailed {
            tool,
            exit_code,
            command,
        }
    }

    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for executor operations.
pub type ExecResult<T> = Result<T, ExecError>;

/// The operations a run performs on the system.
///
/// Implementations do not log; the pipeline steps log every request, so a
/// dry run and a real run produce the same log.
pub trait Executor {
    /// Run a rendered tool command and wait for it to finish.
    fn run_command(&self, command: &str) -> ExecResult<()>;

    /// Write the bytes of `inputs`, in order, into `output`.
    fn concatenate(&self, inputs: &[PathBuf], output: &Path) -> ExecResult<()>;

    /// Best-effort removal of `path`.
    ///
    /// Returns whether the file was removed. Callers are free to ignore it.
    fn remove_file(&self, path: &Path) -> bool;

    /// Whether this executor only simulates.
    fn is_dry_run(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_names_the_tool() {
        let err = ExecError::command_failed("pandoc /a/x.md -o /a/x.html", 2);
        let msg = err.to_string();
        assert!(msg.starts_with("pandoc failed"));
        assert!(msg.contains("exit code 2"));
        assert!(msg.contains("/a/x.html"));
    }

    #[test]
    fn io_error_shows_path() {
        let err = ExecError::io(
            "/tmp/missing.c",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("/tmp/missing.c"));
    }
}
