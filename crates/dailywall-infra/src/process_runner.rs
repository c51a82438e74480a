//! External command execution.
//!
//! Backends never spawn processes directly; they go through [`CommandRunner`]
//! so tests can record invocations and script outcomes.

use std::io::ErrorKind;
use std::process::{Command, Stdio};

use dailywall_core::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Success,
    /// Binary ran and exited non-zero (`None` if killed by a signal).
    Failed(Option<i32>),
    /// Binary is not installed / not on `PATH`.
    NotFound,
}

pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<RunOutcome>;
}

/// Spawns real processes and waits for them.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<RunOutcome> {
        tracing::debug!(program, ?args, "run");

        match Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .status()
        {
            Ok(status) if status.success() => Ok(RunOutcome::Success),
            Ok(status) => Ok(RunOutcome::Failed(status.code())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(RunOutcome::NotFound),
            Err(e) => Err(Error::Platform(format!("run {program}: {e}"))),
        }
    }
}

/// Run a command whose failure (or absence) is terminal.
pub fn run_checked(
    runner: &dyn CommandRunner,
    program: &str,
    args: &[&str],
    what: &str,
) -> Result<()> {
    match runner.run(program, args)? {
        RunOutcome::Success => Ok(()),
        RunOutcome::Failed(code) => Err(failed(program, what, code)),
        RunOutcome::NotFound => Err(Error::Platform(format!("{program} not found ({what})"))),
    }
}

pub(crate) fn failed(program: &str, what: &str, code: Option<i32>) -> Error {
    match code {
        Some(c) => Error::Platform(format!("{program} failed ({what}), exit code {c}")),
        None => Error::Platform(format!("{program} failed ({what}), terminated by signal")),
    }
}
