//! Task orchestration.
//!
//! Each task of a makefile runs through a pipeline of steps that validate,
//! execute, and record their results in a [`TaskState`].
//!
//! # Architecture
//!
//! ```text
//! TaskRunner (tasks in makefile order)
//!     └── Pipeline
//!         ├── Step: Convert       plan + run tools per input
//!         ├── Step: Concatenate   final files -> output
//!         └── Step: Cleanup       remove intermediates
//! ```
//!
//! # Example
//!
//! ```no_run
//! use chainmake_core::config::MakefileLoader;
//! use chainmake_core::logging::ProgressSink;
//! use chainmake_core::orchestrator::{RunContext, TaskRunner};
//!
//! let makefile = MakefileLoader::new("makefile.json").load().unwrap();
//! let ctx = RunContext::new(makefile, false, ProgressSink::stdout());
//! let reports = TaskRunner::new().run_all(&ctx).unwrap();
//! println!("{} task(s) done", reports.len());
//! ```

mod errors;
mod pipeline;
mod runner;
mod step;
pub mod steps;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use errors::{PipelineError, PipelineResult, StepError, StepResult};
pub use pipeline::{Pipeline, PipelineRunResult};
pub use runner::{TaskReport, TaskRunner};
pub use step::PipelineStep;
pub use steps::{CleanupStep, ConcatenateStep, ConvertStep};
pub use types::{Context, RunContext, StepOutcome, TaskState};

/// Create the standard pipeline with all steps in the correct order.
///
/// 1. Convert - run each input through its conversion plan
/// 2. Concatenate - join the final files into the task output
/// 3. Cleanup - remove intermediate files
pub fn create_standard_pipeline() -> Pipeline {
    Pipeline::new()
        .with_step(ConvertStep::new())
        .with_step(ConcatenateStep::new())
        .with_step(CleanupStep::new())
}
