//! Pipeline runner that executes steps in sequence.

use super::errors::{PipelineError, PipelineResult};
use super::step::PipelineStep;
use super::types::{Context, StepOutcome, TaskState};

/// Pipeline that runs a sequence of steps for one task.
///
/// The pipeline executes steps in order, running validation before
/// and after each step. The first failure stops it.
pub struct Pipeline {
    /// Steps to execute in order.
    steps: Vec<Box<dyn PipelineStep>>,
}

impl Pipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Add a step to the pipeline.
    pub fn add_step<S: PipelineStep + 'static>(&mut self, step: S) -> &mut Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Add a step (builder pattern).
    pub fn with_step<S: PipelineStep + 'static>(mut self, step: S) -> Self {
        self.add_step(step);
        self
    }

    /// Run the pipeline with the given context and state.
    ///
    /// Executes each step in order:
    /// 1. Run `validate_input`
    /// 2. Run `execute`
    /// 3. Run `validate_output` (if execute returned Success)
    pub fn run(&self, ctx: &Context<'_>, state: &mut TaskState) -> PipelineResult<PipelineRunResult> {
        let mut result = PipelineRunResult {
            steps_completed: Vec::new(),
            steps_skipped: Vec::new(),
        };

        for step in &self.steps {
            let step_name = step.name();
            tracing::info!("=== Task {}: {} ===", ctx.task_name, step.description());

            tracing::debug!("Validating input for '{}'", step_name);
            if let Err(e) = step.validate_input(ctx, state) {
                tracing::error!("Input validation failed: {}", e);
                return Err(PipelineError::step_failed(&ctx.task_name, step_name, e));
            }

            tracing::debug!("Executing '{}'", step_name);
            let outcome = step.execute(ctx, state).map_err(|e| {
                tracing::error!("Execution failed: {}", e);
                PipelineError::step_failed(&ctx.task_name, step_name, e)
            })?;

            match outcome {
                StepOutcome::Success => {
                    tracing::debug!("Validating output for '{}'", step_name);
                    if let Err(e) = step.validate_output(ctx, state) {
                        tracing::error!("Output validation failed: {}", e);
                        return Err(PipelineError::step_failed(&ctx.task_name, step_name, e));
                    }

                    tracing::debug!("{} completed", step_name);
                    result.steps_completed.push(step_name.to_string());
                }
                StepOutcome::Skipped(reason) => {
                    tracing::info!("{} skipped: {}", step_name, reason);
                    result.steps_skipped.push(step_name.to_string());
                }
            }
        }

        Ok(result)
    }

    /// Get the number of steps in the pipeline.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Get step names in order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineRunResult {
    /// Steps that completed successfully.
    pub steps_completed: Vec<String>,
    /// Steps that were skipped.
    pub steps_skipped: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::errors::{StepError, StepResult};
    use crate::orchestrator::test_support::dry_context;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    // Mock step for testing
    struct CountingStep {
        name: &'static str,
        execute_count: Arc<AtomicUsize>,
        fail_output: bool,
        skip: bool,
    }

    impl CountingStep {
        fn new(name: &'static str, execute_count: &Arc<AtomicUsize>) -> Self {
            Self {
                name,
                execute_count: Arc::clone(execute_count),
                fail_output: false,
                skip: false,
            }
        }
    }

    impl PipelineStep for CountingStep {
        fn name(&self) -> &str {
            self.name
        }

        fn validate_input(&self, _ctx: &Context<'_>, _state: &TaskState) -> StepResult<()> {
            Ok(())
        }

        fn execute(&self, _ctx: &Context<'_>, _state: &mut TaskState) -> StepResult<StepOutcome> {
            self.execute_count.fetch_add(1, Ordering::SeqCst);
            if self.skip {
                Ok(StepOutcome::Skipped("nothing to do".to_string()))
            } else {
                Ok(StepOutcome::Success)
            }
        }

        fn validate_output(&self, _ctx: &Context<'_>, _state: &TaskState) -> StepResult<()> {
            if self.fail_output {
                Err(StepError::invalid_output("missing"))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn pipeline_builds_correctly() {
        let count = Arc::new(AtomicUsize::new(0));
        let pipeline = Pipeline::new()
            .with_step(CountingStep::new("Step1", &count))
            .with_step(CountingStep::new("Step2", &count));

        assert_eq!(pipeline.step_count(), 2);
        assert_eq!(pipeline.step_names(), vec!["Step1", "Step2"]);
    }

    #[test]
    fn runs_steps_in_order_and_records_skips() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut skipping = CountingStep::new("Step2", &count);
        skipping.skip = true;
        let pipeline = Pipeline::new()
            .with_step(CountingStep::new("Step1", &count))
            .with_step(skipping);

        let (run, task) = dry_context();
        let ctx = Context::new(&run, &task, 0);
        let mut state = TaskState::new(0);
        let result = pipeline.run(&ctx, &mut state).unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert_eq!(result.steps_completed, vec!["Step1"]);
        assert_eq!(result.steps_skipped, vec!["Step2"]);
    }

    #[test]
    fn stops_at_first_failure() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut failing = CountingStep::new("Broken", &count);
        failing.fail_output = true;
        let pipeline = Pipeline::new()
            .with_step(failing)
            .with_step(CountingStep::new("Never", &count));

        let (run, task) = dry_context();
        let ctx = Context::new(&run, &task, 0);
        let mut state = TaskState::new(0);
        let err = pipeline.run(&ctx, &mut state).unwrap_err();

        assert_eq!(count.load(Ordering::SeqCst), 1);
        let PipelineError::StepFailed { step_name, .. } = err;
        assert_eq!(step_name, "Broken");
    }
}
