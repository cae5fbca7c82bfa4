//! Core types for the task pipeline.

use std::path::PathBuf;

use crate::chains::ChainTable;
use crate::config::{Makefile, Task};
use crate::executor::{DryRunExecutor, Executor, SystemExecutor};
use crate::logging::{Marker, ProgressSink};

/// Everything a run needs, built once and shared by every task.
pub struct RunContext {
    /// Validated makefile (chains, tasks, base directory).
    makefile: Makefile,
    /// Performs commands, concatenation and removals.
    executor: Box<dyn Executor>,
    /// Progress marker output.
    progress: ProgressSink,
}

impl RunContext {
    /// Create a context using the system executor, or the dry-run one.
    pub fn new(makefile: Makefile, dry_run: bool, progress: ProgressSink) -> Self {
        let executor: Box<dyn Executor> = if dry_run {
            Box::new(DryRunExecutor::new())
        } else {
            Box::new(SystemExecutor::new())
        };
        Self::with_executor(makefile, executor, progress)
    }

    /// Create a context with a custom executor.
    pub fn with_executor(
        makefile: Makefile,
        executor: Box<dyn Executor>,
        progress: ProgressSink,
    ) -> Self {
        Self {
            makefile,
            executor,
            progress,
        }
    }

    pub fn makefile(&self) -> &Makefile {
        &self.makefile
    }

    pub fn chains(&self) -> &ChainTable {
        self.makefile.chains()
    }

    pub fn executor(&self) -> &dyn Executor {
        self.executor.as_ref()
    }

    pub fn progress(&self) -> &ProgressSink {
        &self.progress
    }

    pub fn is_dry_run(&self) -> bool {
        self.executor.is_dry_run()
    }

    /// Absolute path of a task-relative path.
    pub fn full_path(&self, file_path: &str) -> PathBuf {
        self.makefile.full_path(file_path)
    }
}

/// Read-only context passed to pipeline steps for one task.
pub struct Context<'a> {
    /// The shared run context.
    pub run: &'a RunContext,
    /// The task being processed.
    pub task: &'a Task,
    /// Display name for logs and errors.
    pub task_name: String,
}

impl<'a> Context<'a> {
    pub fn new(run: &'a RunContext, task: &'a Task, task_index: usize) -> Self {
        Self {
            run,
            task,
            task_name: format!("#{} ({})", task_index + 1, task.output),
        }
    }

    /// Emit a progress marker.
    pub fn mark(&self, marker: Marker) {
        self.run.progress().mark(marker);
    }
}

/// Mutable task state that accumulates results from pipeline steps.
///
/// Identical for a dry run and a real run of the same makefile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskState {
    /// Position of the task in the makefile.
    pub task_index: usize,
    /// Rendered tool commands, in execution order (from Convert).
    pub commands: Vec<String>,
    /// Final path of each input, in input order (from Convert).
    pub final_paths: Vec<String>,
    /// Absolute output path once written (from Concatenate).
    pub output: Option<PathBuf>,
    /// Intermediate files removal was attempted on (from Cleanup).
    pub removed: Vec<PathBuf>,
}

impl TaskState {
    pub fn new(task_index: usize) -> Self {
        Self {
            task_index,
            ..Default::default()
        }
    }

    /// Check if every input has been converted.
    pub fn has_conversion(&self, input_count: usize) -> bool {
        self.final_paths.len() == input_count
    }

    /// Check if the output has been written.
    pub fn has_output(&self) -> bool {
        self.output.is_some()
    }
}

/// Result of executing a pipeline step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Step completed successfully.
    Success,
    /// Step had nothing to do (not an error).
    Skipped(String),
}
