//! Executor used for `--dryrun`.

use std::path::{Path, PathBuf};

use super::{ExecResult, Executor};

/// Accepts every operation without performing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunExecutor;

impl DryRunExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for DryRunExecutor {
    fn run_command(&self, _command: &str) -> ExecResult<()> {
        Ok(())
    }

    fn concatenate(&self, _inputs: &[PathBuf], _output: &Path) -> ExecResult<()> {
        Ok(())
    }

    fn remove_file(&self, _path: &Path) -> bool {
        false
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn touches_nothing() {
        let dir = tempdir().unwrap();
        let keep = dir.path().join("keep.b");
        let out = dir.path().join("out.c");
        std::fs::write(&keep, "x").unwrap();

        let executor = DryRunExecutor::new();
        executor.run_command("exit 1").unwrap();
        executor.concatenate(&[keep.clone()], &out).unwrap();
        assert!(!executor.remove_file(&keep));

        assert!(keep.exists());
        assert!(!out.exists());
        assert!(executor.is_dry_run());
    }
}
