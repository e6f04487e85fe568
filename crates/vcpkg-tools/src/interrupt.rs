//! Ctrl-C handling.
//!
//! While a child process runs, the handler only records the interrupt: the
//! child receives the same signal, exits, and [`crate::process::run_cmd`]
//! turns its failure into [`crate::Interrupted`]. With no child running (for
//! example at the triplet prompt) the handler prints the notice and exits.

use anyhow::{Context, Result};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{FAILURE_EXIT_CODE, INTERRUPTED_NOTICE};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);
static CHILD_RUNNING: AtomicBool = AtomicBool::new(false);

/// Install the process-wide Ctrl-C handler. Call once, early in `main`.
pub fn install_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        INTERRUPTED.store(true, Ordering::SeqCst);
        if !CHILD_RUNNING.load(Ordering::SeqCst) {
            println!("{INTERRUPTED_NOTICE}");
            std::process::exit(FAILURE_EXIT_CODE);
        }
    })
    .context("Installing Ctrl-C handler")
}

pub fn was_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Marks a child process as running for as long as the guard lives.
pub(crate) struct ChildGuard;

impl ChildGuard {
    pub(crate) fn enter() -> Self {
        CHILD_RUNNING.store(true, Ordering::SeqCst);
        ChildGuard
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        CHILD_RUNNING.store(false, Ordering::SeqCst);
    }
}
