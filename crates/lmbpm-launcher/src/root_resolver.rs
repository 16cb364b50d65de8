//! RootResolver trait: how the launcher finds the repository root.
//!
//! The launcher binary lives one directory below the root (`<root>/scripts/`),
//! so the default resolver walks two levels up from the running executable.
//! Tests and embedders substitute [`FixedRoot`].

use std::path::{Path, PathBuf};

use crate::error::LaunchError;

/// Extension point for locating the repository root.
pub trait RootResolver: Send + Sync {
    /// Resolver name for logging and diagnostics.
    fn name(&self) -> &str;

    /// Resolve the repository root. Independent of the caller's working directory.
    fn resolve_root(&self) -> Result<PathBuf, LaunchError>;
}

/// Root derived from the running executable's location.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecutableRoot;

impl RootResolver for ExecutableRoot {
    fn name(&self) -> &str {
        "executable"
    }

    fn resolve_root(&self) -> Result<PathBuf, LaunchError> {
        let exe = std::env::current_exe().map_err(|e| LaunchError::RootResolution(e.to_string()))?;
        root_of_launcher(&exe)
    }
}

/// Parent of the directory containing `launcher`. A relative launcher path
/// is anchored at the current directory first.
pub fn root_of_launcher(launcher: &Path) -> Result<PathBuf, LaunchError> {
    let launcher = if launcher.is_absolute() {
        launcher.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| LaunchError::RootResolution(e.to_string()))?
            .join(launcher)
    };

    launcher
        .parent()
        .and_then(Path::parent)
        .filter(|root| !root.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            LaunchError::RootResolution(format!(
                "'{}' has no parent directory two levels up",
                launcher.display()
            ))
        })
}

/// A root fixed up front.
#[derive(Debug, Clone)]
pub struct FixedRoot(pub PathBuf);

impl RootResolver for FixedRoot {
    fn name(&self) -> &str {
        "fixed"
    }

    fn resolve_root(&self) -> Result<PathBuf, LaunchError> {
        Ok(self.0.clone())
    }
}
