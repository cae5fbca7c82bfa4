//! Task runner for processing every task of a makefile.
//!
//! Tasks run one at a time, in makefile order, each through the standard
//! pipeline. The first failing task stops the run.

use crate::config::Task;
use crate::logging::Marker;

use super::errors::PipelineResult;
use super::pipeline::{Pipeline, PipelineRunResult};
use super::types::{Context, RunContext, TaskState};
use super::create_standard_pipeline;

/// Result of processing a single task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskReport {
    /// What the task did.
    pub state: TaskState,
    /// Steps that completed or were skipped.
    pub run: PipelineRunResult,
}

/// Runs tasks through a pipeline.
///
/// # Example
///
/// ```ignore
/// let ctx = RunContext::new(makefile, false, ProgressSink::stdout());
/// let reports = TaskRunner::new().run_all(&ctx)?;
/// ```
pub struct TaskRunner {
    pipeline: Pipeline,
}

impl TaskRunner {
    /// Create a runner with the standard Convert/Concatenate/Cleanup pipeline.
    pub fn new() -> Self {
        Self::with_pipeline(create_standard_pipeline())
    }

    /// Create a runner with a custom pipeline.
    pub fn with_pipeline(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }

    /// Process a single task.
    pub fn run_task(
        &self,
        run: &RunContext,
        task_index: usize,
        task: &Task,
    ) -> PipelineResult<TaskReport> {
        let ctx = Context::new(run, task, task_index);
        let mut state = TaskState::new(task_index);

        tracing::debug!(
            "Task {}: {} input(s) -> {}",
            ctx.task_name,
            task.input.len(),
            task.output
        );

        let result = self.pipeline.run(&ctx, &mut state)?;
        ctx.mark(Marker::TaskEnd);

        Ok(TaskReport { state, run: result })
    }

    /// Process every task of the makefile, in order.
    pub fn run_all(&self, run: &RunContext) -> PipelineResult<Vec<TaskReport>> {
        let tasks = run.makefile().tasks();
        let mut reports = Vec::with_capacity(tasks.len());

        for (index, task) in tasks.iter().enumerate() {
            reports.push(self.run_task(run, index, task)?);
        }

        tracing::info!("Processed {} task(s)", reports.len());
        Ok(reports)
    }
}

impl Default for TaskRunner {
    fn default() -> Self {
        Self::new()
    }
}
