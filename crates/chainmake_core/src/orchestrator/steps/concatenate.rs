//! Concatenate step - join the final files into the task output.

use std::path::PathBuf;

use crate::logging::Marker;
use crate::orchestrator::errors::{StepError, StepResult};
use crate::orchestrator::step::PipelineStep;
use crate::orchestrator::types::{Context, StepOutcome, TaskState};

/// Writes the bytes of every final file, in input order, to the task output.
pub struct ConcatenateStep;

impl ConcatenateStep {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConcatenateStep {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineStep for ConcatenateStep {
    fn name(&self) -> &str {
        "Concatenate"
    }

    fn description(&self) -> &str {
        "Concatenate final files into the output"
    }

    fn validate_input(&self, ctx: &Context<'_>, state: &TaskState) -> StepResult<()> {
        if !state.has_conversion(ctx.task.input.len()) {
            return Err(StepError::invalid_input(
                "Not every input has been converted",
            ));
        }

        let output = ctx.run.full_path(&ctx.task.output);
        if let Some(clash) = state
            .final_paths
            .iter()
            .find(|path| ctx.run.full_path(path) == output)
        {
            return Err(StepError::invalid_input(format!(
                "Output {} is also an input ({})",
                output.display(),
                clash
            )));
        }

        Ok(())
    }

    fn execute(&self, ctx: &Context<'_>, state: &mut TaskState) -> StepResult<StepOutcome> {
        ctx.mark(Marker::Concatenate);

        let inputs: Vec<PathBuf> = state
            .final_paths
            .iter()
            .map(|path| ctx.run.full_path(path))
            .collect();
        let output = ctx.run.full_path(&ctx.task.output);

        tracing::debug!(
            "Concatenate {} > {}",
            inputs
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(" "),
            output.display()
        );

        ctx.run.executor().concatenate(&inputs, &output)?;
        tracing::info!(
            "Concatenated {} file(s) into {}",
            inputs.len(),
            output.display()
        );
        state.output = Some(output);

        Ok(StepOutcome::Success)
    }

    fn validate_output(&self, ctx: &Context<'_>, state: &TaskState) -> StepResult<()> {
        let output = state
            .output
            .as_ref()
            .ok_or_else(|| StepError::invalid_output("Output path not recorded"))?;

        if !ctx.run.is_dry_run() && !output.exists() {
            return Err(StepError::invalid_output(format!(
                "{} was not written",
                output.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::test_support::{recording_context, Op};

    #[test]
    fn concatenates_final_paths_in_order() {
        let (run, task, ops) = recording_context();
        let ctx = Context::new(&run, &task, 0);
        let mut state = TaskState::new(0);
        state.final_paths = vec!["x.c".to_string(), "y.c".to_string()];

        let step = ConcatenateStep::new();
        step.validate_input(&ctx, &state).unwrap();
        step.execute(&ctx, &mut state).unwrap();

        assert_eq!(state.output, Some(PathBuf::from("/w/out.c")));
        assert_eq!(
            *ops.borrow(),
            vec![Op::Concatenate(
                vec![PathBuf::from("/w/x.c"), PathBuf::from("/w/y.c")],
                PathBuf::from("/w/out.c"),
            )]
        );
    }

    #[test]
    fn refuses_to_overwrite_an_input() {
        let (run, task, _ops) = recording_context();
        let ctx = Context::new(&run, &task, 0);
        let mut state = TaskState::new(0);
        state.final_paths = vec!["x.c".to_string(), "./out.c".to_string()];

        let err = ConcatenateStep::new()
            .validate_input(&ctx, &state)
            .unwrap_err();
        assert!(err.to_string().contains("also an input"));
    }

    #[test]
    fn requires_conversion_first() {
        let (run, task, _ops) = recording_context();
        let ctx = Context::new(&run, &task, 0);
        let state = TaskState::new(0);

        assert!(matches!(
            ConcatenateStep::new().validate_input(&ctx, &state),
            Err(StepError::InvalidInput(_))
        ));
    }
}
