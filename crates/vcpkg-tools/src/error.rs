//! Failure taxonomy shared by the toolchain driver and the front ends.
//!
//! Only cancellation gets its own type. Every other failure is an
//! `anyhow::Error` carrying the toolchain's message and context.

use std::fmt;

/// Exit status for both interruption and toolchain failure.
pub const FAILURE_EXIT_CODE: i32 = -1;

/// Printed to stdout when the operator cancels the run.
pub const INTERRUPTED_NOTICE: &str = "\nInterrupted";

/// The operator cancelled the run (Ctrl-C).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interrupted;

impl fmt::Display for Interrupted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Interrupted")
    }
}

impl std::error::Error for Interrupted {}

/// True if `err`, or anything in its context chain, is an [`Interrupted`].
pub fn is_interrupted(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.is::<Interrupted>())
}
