//! Build the child's environment overrides and resolve the interpreter.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use lmbpm_core::config::{env_keys, LauncherConfig};

use crate::common::PYTHON_CANDIDATES;
use crate::error::LaunchError;
use crate::search_path;

/// Environment values merged over the inherited environment at spawn time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    vars: BTreeMap<OsString, OsString>,
}

impl EnvOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> &mut Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars.get(key.as_ref()).map(OsString::as_os_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    /// Apply on top of the inherited environment (no `env_clear`).
    pub fn apply_to(&self, cmd: &mut Command) {
        cmd.envs(self.iter());
    }
}

/// Overrides for the delegated program: `PYTHONPATH` with `root` first.
pub fn build_launch_env(root: &Path, prior_search_path: Option<&OsStr>) -> EnvOverrides {
    let mut env = EnvOverrides::new();
    env.set(env_keys::PYTHONPATH, search_path::prepend(root, prior_search_path));
    env
}

/// Interpreter for the entry point: `LMBPM_PYTHON` if configured, otherwise
/// the first of `python3`, `python` on `PATH`.
pub fn resolve_interpreter(config: &LauncherConfig) -> Result<PathBuf, LaunchError> {
    if let Some(ref python) = config.python {
        tracing::debug!(python = %python, "Using configured interpreter");
        return Ok(PathBuf::from(python));
    }
    for name in PYTHON_CANDIDATES {
        if let Ok(path) = which::which(name) {
            tracing::debug!(python = %path.display(), "Found interpreter on PATH");
            return Ok(path);
        }
    }
    Err(LaunchError::InterpreterNotFound {
        tried: PYTHON_CANDIDATES.join(", "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_are_merged_not_replacing() {
        let mut env = EnvOverrides::new();
        env.set("PYTHONPATH", "/repo");
        let mut cmd = Command::new("true");
        env.apply_to(&mut cmd);
        let envs: Vec<_> = cmd.get_envs().collect();
        assert_eq!(envs, vec![(OsStr::new("PYTHONPATH"), Some(OsStr::new("/repo")))]);
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let mut env = EnvOverrides::new();
        env.set("K", "a").set("K", "b");
        assert_eq!(env.iter().count(), 1);
        assert_eq!(env.get("K"), Some(OsStr::new("b")));
    }

    #[cfg(unix)]
    #[test]
    fn test_build_launch_env() {
        let env = build_launch_env(Path::new("/repo"), Some(OsStr::new("/usr/lib/py")));
        assert_eq!(env.get("PYTHONPATH"), Some(OsStr::new("/repo:/usr/lib/py")));
        assert_eq!(env.iter().count(), 1);
    }

    #[test]
    fn test_configured_interpreter_wins() {
        let config = LauncherConfig {
            python: Some("/opt/venv/bin/python".to_string()),
        };
        assert_eq!(
            resolve_interpreter(&config).unwrap(),
            PathBuf::from("/opt/venv/bin/python")
        );
    }
}
