//! Pipeline step implementations.
//!
//! Each task runs three steps in order:
//! 1. Convert - build each input's plan and run its tools
//! 2. Concatenate - join the final files into the task output
//! 3. Cleanup - remove intermediate files

mod cleanup;
mod concatenate;
mod convert;

pub use cleanup::CleanupStep;
pub use concatenate::ConcatenateStep;
pub use convert::ConvertStep;
