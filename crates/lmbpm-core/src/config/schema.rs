//! Config structs grouped by concern, loaded from the environment.

use super::env_keys::{launcher as launcher_keys, observability as obv_keys};
use super::loader::{env_bool, env_optional, env_or, process_env, Lookup};

/// Default tracing filter: the launcher stays silent unless something goes wrong.
pub const DEFAULT_LOG_LEVEL: &str = "lm_bpm=warn,lmbpm=warn";

/// Observability config: quiet, log_level, log_json
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl ObservabilityConfig {
    pub fn from_env() -> &'static Self {
        use std::sync::OnceLock;
        static CACHE: OnceLock<ObservabilityConfig> = OnceLock::new();
        CACHE.get_or_init(|| Self::from_lookup(&process_env))
    }

    pub fn from_lookup(lookup: Lookup<'_>) -> Self {
        Self {
            quiet: env_bool(lookup, obv_keys::LMBPM_QUIET, false),
            log_level: env_or(lookup, obv_keys::LMBPM_LOG_LEVEL, || {
                DEFAULT_LOG_LEVEL.to_string()
            }),
            log_json: env_bool(lookup, obv_keys::LMBPM_LOG_JSON, false),
        }
    }

    /// Filter directive actually used by the subscriber.
    pub fn filter_directive(&self) -> &str {
        if self.quiet {
            DEFAULT_LOG_LEVEL
        } else {
            &self.log_level
        }
    }
}

/// Launcher config
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Interpreter override; `None` means search `PATH`.
    pub python: Option<String>,
}

impl LauncherConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(&process_env)
    }

    pub fn from_lookup(lookup: Lookup<'_>) -> Self {
        Self {
            python: env_optional(lookup, launcher_keys::LMBPM_PYTHON),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observability_defaults() {
        let cfg = ObservabilityConfig::from_lookup(&|_: &str| None::<String>);
        assert!(!cfg.quiet);
        assert!(!cfg.log_json);
        assert_eq!(cfg.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_quiet_overrides_log_level() {
        let cfg = ObservabilityConfig::from_lookup(&|k: &str| match k {
            "LMBPM_QUIET" => Some("1".to_string()),
            "LMBPM_LOG_LEVEL" => Some("lmbpm=debug".to_string()),
            _ => None,
        });
        assert_eq!(cfg.log_level, "lmbpm=debug");
        assert_eq!(cfg.filter_directive(), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_blank_quiet_keeps_default() {
        let cfg = ObservabilityConfig::from_lookup(&|k: &str| {
            (k == "LMBPM_QUIET").then(|| "   ".to_string())
        });
        assert!(!cfg.quiet);
    }

    #[test]
    fn test_launcher_python_override() {
        let cfg = LauncherConfig::from_lookup(&|k: &str| {
            (k == "LMBPM_PYTHON").then(|| "/opt/py/bin/python3".to_string())
        });
        assert_eq!(cfg.python.as_deref(), Some("/opt/py/bin/python3"));
        assert_eq!(LauncherConfig::from_lookup(&|_: &str| None::<String>), LauncherConfig::default());
    }
}
