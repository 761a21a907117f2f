//! Process execution behind the [`Executor`] trait.
use anyhow::{Context as _, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Result of a command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecResult {
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Exit code, `None` if the process was killed by a signal.
    pub code: Option<i32>,
}

/// Runs external programs.
///
/// The production implementation is [`SystemExecutor`]; tests substitute a
/// recording fake so no real package manager is ever spawned.
pub trait Executor: Send + Sync + std::fmt::Debug {
    /// Run `program` in `dir` with its output inherited from this process,
    /// so the user sees it live.  A non-zero exit is reported through
    /// [`ExecResult::success`], not as an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if the process cannot be spawned.
    fn run_streaming(&self, dir: &Path, program: &str, args: &[&str]) -> Result<ExecResult>;

    /// Check if a program is available on PATH.
    fn which(&self, program: &str) -> bool;
}

/// [`Executor`] that spawns real processes.
#[derive(Debug, Default)]
pub struct SystemExecutor;

impl SystemExecutor {
    /// Build a [`Command`] for `program`, resolving it on PATH first so that
    /// Windows shims such as `npm.cmd` are found.
    fn command(program: &str) -> Command {
        which::which(program).map_or_else(|_| Command::new(program), Command::new)
    }
}

impl Executor for SystemExecutor {
    fn run_streaming(&self, dir: &Path, program: &str, args: &[&str]) -> Result<ExecResult> {
        let status = Self::command(program)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("failed to execute: {program} in {}", dir.display()))?;
        Ok(ExecResult {
            success: status.success(),
            code: status.code(),
        })
    }

    fn which(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}
