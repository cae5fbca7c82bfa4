//! Convert step - run every input through its conversion plan.

use crate::logging::Marker;
use crate::orchestrator::errors::{StepError, StepResult};
use crate::orchestrator::step::PipelineStep;
use crate::orchestrator::types::{Context, StepOutcome, TaskState};

/// Converts each input of a task, in input order.
///
/// An input whose plan is empty is used as-is, even if it does not exist
/// yet: an earlier input may produce it, and a missing file surfaces when a
/// tool or the concatenation reads it. A failing tool aborts the task; files
/// produced so far are left in place.
pub struct ConvertStep;

impl ConvertStep {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConvertStep {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineStep for ConvertStep {
    fn name(&self) -> &str {
        "Convert"
    }

    fn description(&self) -> &str {
        "Convert inputs through their chains"
    }

    fn validate_input(&self, ctx: &Context<'_>, _state: &TaskState) -> StepResult<()> {
        if ctx.task.input.is_empty() {
            return Err(StepError::invalid_input("Task has no input files"));
        }
        Ok(())
    }

    fn execute(&self, ctx: &Context<'_>, state: &mut TaskState) -> StepResult<StepOutcome> {
        for path_in in &ctx.task.input {
            tracing::debug!("Process {}", path_in);
            ctx.mark(Marker::File);

            let plan = ctx.run.chains().build_plan(path_in);

            for step in plan.steps() {
                tracing::debug!(
                    "Convert {} to {} using {}",
                    step.path_in,
                    step.path_out,
                    step.tool
                );
                ctx.mark(Marker::Step);

                let command = step.tool.render(
                    &ctx.run.full_path(&step.path_in),
                    &ctx.run.full_path(&step.path_out),
                );
                tracing::debug!("$ {}", command);

                ctx.run.executor().run_command(&command)?;
                state.commands.push(command);
            }

            state.final_paths.push(plan.final_path().to_string());
        }

        Ok(StepOutcome::Success)
    }

    fn validate_output(&self, ctx: &Context<'_>, state: &TaskState) -> StepResult<()> {
        if !state.has_conversion(ctx.task.input.len()) {
            return Err(StepError::invalid_output(format!(
                "Expected {} final file(s), recorded {}",
                ctx.task.input.len(),
                state.final_paths.len()
            )));
        }
        Ok(())
    }
}
