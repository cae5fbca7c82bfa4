//! Executor that runs commands and touches the file system.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use super::{ExecError, ExecResult, Executor};

/// Runs tool commands through the platform shell.
///
/// Tool output is inherited, so it shows up on the terminal as the tool
/// prints it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl SystemExecutor {
    pub fn new() -> Self {
        Self
    }

    #[cfg(unix)]
    fn shell(command: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    }

    #[cfg(windows)]
    fn shell(command: &str) -> Command {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    }
}

impl Executor for SystemExecutor {
    fn run_command(&self, command: &str) -> ExecResult<()> {
        let status = Self::shell(command)
            .status()
            .map_err(|source| ExecError::SpawnFailed {
                command: command.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(ExecError::command_failed(
                command,
                status.code().unwrap_or(-1),
            ));
        }

        Ok(())
    }

    fn concatenate(&self, inputs: &[PathBuf], output: &Path) -> ExecResult<()> {
        let file = File::create(output).map_err(|e| ExecError::io(output, e))?;
        let mut writer = BufWriter::new(file);

        for input in inputs {
            let mut reader = File::open(input).map_err(|e| ExecError::io(input, e))?;
            io::copy(&mut reader, &mut writer).map_err(|e| ExecError::io(output, e))?;
        }

        writer.flush().map_err(|e| ExecError::io(output, e))?;
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> bool {
        fs::remove_file(path).is_ok()
    }
}
