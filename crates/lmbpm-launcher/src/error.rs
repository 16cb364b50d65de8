//! Launcher errors.
//!
//! Only failures of the launcher itself live here. Whatever the delegated
//! program does after it starts is reported through its exit status.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::common::{EXIT_LAUNCH_FAILED, EXIT_NOT_EXECUTABLE, EXIT_NOT_FOUND};

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Cannot determine the launcher location: {0}")]
    RootResolution(String),

    #[error("Repository root '{}' is not a directory", .0.display())]
    RootNotADirectory(PathBuf),

    #[error("Entry point '{}' not found", .0.display())]
    EntryPointMissing(PathBuf),

    #[error("No Python interpreter found (tried: {tried}); set LMBPM_PYTHON")]
    InterpreterNotFound { tried: String },

    #[error("Failed to start '{}'", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to wait for the delegated program")]
    Wait(#[source] io::Error),
}

impl LaunchError {
    /// Process exit code for a launcher failure, following shell conventions
    /// (127 not found, 126 not executable).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::EntryPointMissing(_) | Self::InterpreterNotFound { .. } => EXIT_NOT_FOUND,
            Self::Spawn { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => EXIT_NOT_FOUND,
                io::ErrorKind::PermissionDenied => EXIT_NOT_EXECUTABLE,
                _ => EXIT_LAUNCH_FAILED,
            },
            _ => EXIT_LAUNCH_FAILED,
        }
    }
}
