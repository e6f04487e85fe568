//! Spawning toolchain commands.

use anyhow::{bail, Context, Result};
use std::process::{Command, ExitStatus};

use crate::error::Interrupted;
use crate::interrupt::{self, ChildGuard};

/// Run `cmd` to completion with inherited stdio.
///
/// A child that died from Ctrl-C, or any exit at all after the handler saw an
/// interrupt, is reported as [`Interrupted`] so no further step runs.
pub fn run_cmd(cmd: &mut Command) -> Result<()> {
    let program = program_name(cmd);
    log::debug!("$ {}", display_command(cmd));

    let status = {
        let _guard = ChildGuard::enter();
        cmd.status()
            .with_context(|| format!("Spawning {program}"))?
    };

    check_status(&program, status, interrupt::was_interrupted())
}

fn check_status(program: &str, status: ExitStatus, interrupted: bool) -> Result<()> {
    if interrupted || killed_by_interrupt(status) {
        return Err(Interrupted.into());
    }
    if !status.success() {
        bail!("{program} failed with status {status}");
    }
    Ok(())
}

/// Render a command line for logs.
pub fn display_command(cmd: &Command) -> String {
    let mut line = cmd.get_program().to_string_lossy().into_owned();
    for arg in cmd.get_args() {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}

fn program_name(cmd: &Command) -> String {
    cmd.get_program().to_string_lossy().into_owned()
}

#[cfg(unix)]
fn killed_by_interrupt(status: ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;
    const SIGINT: i32 = 2;
    status.signal() == Some(SIGINT)
}

#[cfg(windows)]
fn killed_by_interrupt(status: ExitStatus) -> bool {
    const STATUS_CONTROL_C_EXIT: u32 = 0xC000_013A;
    status.code().map(|code| code as u32) == Some(STATUS_CONTROL_C_EXIT)
}

#[cfg(not(any(unix, windows)))]
fn killed_by_interrupt(_status: ExitStatus) -> bool {
    false
}
