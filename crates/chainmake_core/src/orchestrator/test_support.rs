//! Shared fixtures for orchestrator tests.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::config::{Makefile, MakefileFormat, Task};
use crate::executor::{DryRunExecutor, ExecError, ExecResult, Executor};
use crate::logging::ProgressSink;

use super::types::RunContext;

/// An operation seen by [`RecordingExecutor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Run(String),
    Concatenate(Vec<PathBuf>, PathBuf),
    Remove(PathBuf),
}

/// Records operations instead of performing them.
pub struct RecordingExecutor {
    ops: Rc<RefCell<Vec<Op>>>,
    /// Commands starting with this fail with exit code 1.
    pub fail_on: Option<String>,
}

impl RecordingExecutor {
    pub fn new() -> (Self, Rc<RefCell<Vec<Op>>>) {
        let ops = Rc::new(RefCell::new(Vec::new()));
        let executor = Self {
            ops: Rc::clone(&ops),
            fail_on: None,
        };
        (executor, ops)
    }
}

impl Executor for RecordingExecutor {
    fn run_command(&self, command: &str) -> ExecResult<()> {
        self.ops.borrow_mut().push(Op::Run(command.to_string()));
        match self.fail_on {
            Some(ref prefix) if command.starts_with(prefix.as_str()) => {
                Err(ExecError::command_failed(command, 1))
            }
            _ => Ok(()),
        }
    }

    fn concatenate(&self, inputs: &[PathBuf], output: &Path) -> ExecResult<()> {
        self.ops
            .borrow_mut()
            .push(Op::Concatenate(inputs.to_vec(), output.to_path_buf()));
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> bool {
        self.ops.borrow_mut().push(Op::Remove(path.to_path_buf()));
        true
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}

/// `.a -> .b -> .c` chain with one task `[x.a, y.c] -> out.c`, based at `/w`.
pub fn abc_makefile() -> Makefile {
    let spec = MakefileFormat::Json
        .parse(
            r#"{
                "chains": [[
                    {"tool": "a2b %s %s", "extension": ".a"},
                    {"tool": "b2c %s %s", "extension": ".b"},
                    {"extension": ".c"}
                ]],
                "tasks": [{"input": ["x.a", "y.c"], "output": "out.c"}]
            }"#,
        )
        .unwrap();
    Makefile::from_spec(spec, "/w/makefile.json").unwrap()
}

fn first_task(makefile: &Makefile) -> Task {
    makefile.tasks()[0].clone()
}

/// Context over [`abc_makefile`] with a recording executor.
pub fn recording_context() -> (RunContext, Task, Rc<RefCell<Vec<Op>>>) {
    let makefile = abc_makefile();
    let task = first_task(&makefile);
    let (executor, ops) = RecordingExecutor::new();
    let run = RunContext::with_executor(makefile, Box::new(executor), ProgressSink::silent());
    (run, task, ops)
}

/// Context over [`abc_makefile`] with the dry-run executor.
pub fn dry_context() -> (RunContext, Task) {
    let makefile = abc_makefile();
    let task = first_task(&makefile);
    let run = RunContext::with_executor(
        makefile,
        Box::new(DryRunExecutor::new()),
        ProgressSink::silent(),
    );
    (run, task)
}
