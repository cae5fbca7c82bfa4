//! Pipeline step trait definition.
//!
//! All pipeline steps implement this trait, providing a consistent
//! interface for validation and execution.

use super::errors::StepResult;
use super::types::{Context, StepOutcome, TaskState};

/// Trait for pipeline steps.
///
/// The pipeline runner calls these methods in order:
///
/// 1. `validate_input` - Check preconditions before execution
/// 2. `execute` - Perform the step's work
/// 3. `validate_output` - Verify the step produced valid output
///
/// # Example
///
/// ```ignore
/// struct TouchStep;
///
/// impl PipelineStep for TouchStep {
///     fn name(&self) -> &str { "Touch" }
///
///     fn validate_input(&self, _ctx: &Context, state: &TaskState) -> StepResult<()> {
///         if !state.has_output() {
///             return Err(StepError::invalid_input("Nothing written yet"));
///         }
///         Ok(())
///     }
///
///     fn execute(&self, ctx: &Context, state: &mut TaskState) -> StepResult<StepOutcome> {
///         let command = format!("touch {}", ctx.run.full_path(&ctx.task.output).display());
///         ctx.run.executor().run_command(&command)?;
///         state.commands.push(command);
///         Ok(StepOutcome::Success)
///     }
///
///     fn validate_output(&self, _ctx: &Context, _state: &TaskState) -> StepResult<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait PipelineStep {
    /// Get the step name (for logging and error context).
    fn name(&self) -> &str;

    /// Validate inputs before execution.
    ///
    /// Return `Ok(())` if validation passes, or `Err(StepError)` if not.
    fn validate_input(&self, ctx: &Context<'_>, state: &TaskState) -> StepResult<()>;

    /// Execute the step's main work.
    ///
    /// Should perform the step's processing and record results in `state`.
    /// Returns `StepOutcome::Skipped` if there was nothing to do.
    fn execute(&self, ctx: &Context<'_>, state: &mut TaskState) -> StepResult<StepOutcome>;

    /// Validate outputs after execution.
    ///
    /// Called after `execute` returns `Success`.
    fn validate_output(&self, ctx: &Context<'_>, state: &TaskState) -> StepResult<()>;

    /// Human-readable description of what this step does.
    fn description(&self) -> &str {
        self.name()
    }
}
