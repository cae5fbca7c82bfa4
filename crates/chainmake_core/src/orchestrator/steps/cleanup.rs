//! Cleanup step - remove intermediate files.

use crate::logging::Marker;
use crate::orchestrator::errors::{StepError, StepResult};
use crate::orchestrator::step::PipelineStep;
use crate::orchestrator::types::{Context, StepOutcome, TaskState};

/// Removes every file produced by the inputs' conversion plans.
///
/// Plans are rebuilt from the inputs. Removal is best-effort: files that are
/// missing or cannot be deleted are skipped.
pub struct CleanupStep;

impl CleanupStep {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CleanupStep {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineStep for CleanupStep {
    fn name(&self) -> &str {
        "Cleanup"
    }

    fn description(&self) -> &str {
        "Remove intermediate files"
    }

    fn validate_input(&self, _ctx: &Context<'_>, state: &TaskState) -> StepResult<()> {
        if !state.has_output() {
            return Err(StepError::invalid_input(
                "Output has not been written; intermediates are still needed",
            ));
        }
        Ok(())
    }

    fn execute(&self, ctx: &Context<'_>, state: &mut TaskState) -> StepResult<StepOutcome> {
        for path_in in &ctx.task.input {
            let plan = ctx.run.chains().build_plan(path_in);

            for intermediate in plan.intermediates() {
                let remove_path = ctx.run.full_path(intermediate);
                ctx.mark(Marker::Remove);
                tracing::debug!("Remove {}", intermediate);
                tracing::debug!("Remove path {}", remove_path.display());

                let removed = ctx.run.executor().remove_file(&remove_path);
                if !removed && !ctx.run.is_dry_run() {
                    tracing::debug!("Could not remove {}", remove_path.display());
                }
                state.removed.push(remove_path);
            }
        }

        if state.removed.is_empty() {
            return Ok(StepOutcome::Skipped("No intermediate files".to_string()));
        }
        Ok(StepOutcome::Success)
    }

    fn validate_output(&self, _ctx: &Context<'_>, _state: &TaskState) -> StepResult<()> {
        Ok(())
    }
}
