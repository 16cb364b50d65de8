//! DelegationBackend trait: how control is handed to the entry point.
//!
//! - Unix: [`ExecBackend`] replaces the launcher process image, so signals
//!   and the exit status belong to the delegated program directly.
//! - Elsewhere: [`SpawnBackend`] runs a child with inherited stdio and
//!   returns its exit code. Console interrupts reach the child through its
//!   process group.

use crate::error::LaunchError;
use crate::runner::LaunchPlan;

/// Extension point for delegation strategies.
pub trait DelegationBackend: Send + Sync {
    /// Backend name for logging and diagnostics.
    fn name(&self) -> &str;

    /// Run the plan and return the exit code the launcher should exit with.
    fn delegate(&self, plan: &LaunchPlan) -> Result<i32, LaunchError>;
}

/// Replace the current process with the delegated program.
#[cfg(unix)]
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecBackend;

#[cfg(unix)]
impl DelegationBackend for ExecBackend {
    fn name(&self) -> &str {
        "exec"
    }

    /// Returns only if `execvp` failed.
    fn delegate(&self, plan: &LaunchPlan) -> Result<i32, LaunchError> {
        use std::os::unix::process::CommandExt;

        tracing::debug!(program = %plan.program.display(), "Replacing launcher process");
        let source = plan.command().exec();
        Err(LaunchError::Spawn {
            program: plan.program.clone(),
            source,
        })
    }
}

/// Spawn the delegated program as a child and wait for it.
#[cfg(not(unix))]
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnBackend;

#[cfg(not(unix))]
impl DelegationBackend for SpawnBackend {
    fn name(&self) -> &str {
        "spawn"
    }

    fn delegate(&self, plan: &LaunchPlan) -> Result<i32, LaunchError> {
        let mut child = plan.command().spawn().map_err(|source| LaunchError::Spawn {
            program: plan.program.clone(),
            source,
        })?;
        tracing::debug!(pid = child.id(), "Delegated program started");

        let status = child.wait().map_err(LaunchError::Wait)?;
        let code = crate::common::exit_code(status);
        tracing::debug!(exit_code = code, "Delegated program finished");
        Ok(code)
    }
}

/// Platform default: exec on Unix, spawn-and-wait elsewhere.
pub fn default_backend() -> Box<dyn DelegationBackend> {
    #[cfg(unix)]
    return Box::new(ExecBackend);
    #[cfg(not(unix))]
    return Box::new(SpawnBackend);
}
