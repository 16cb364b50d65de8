//! Environment variable keys.
//!
//! Launcher settings use the `LMBPM_*` prefix.

/// Module search path handed to the viewer's interpreter.
pub const PYTHONPATH: &str = "PYTHONPATH";

/// Interpreter selection
pub mod launcher {
    /// Explicit interpreter for the entry point (path or bare name).
    pub const LMBPM_PYTHON: &str = "LMBPM_PYTHON";
}

/// Observability and logging
pub mod observability {
    pub const LMBPM_QUIET: &str = "LMBPM_QUIET";
    pub const LMBPM_LOG_LEVEL: &str = "LMBPM_LOG_LEVEL";
    pub const LMBPM_LOG_JSON: &str = "LMBPM_LOG_JSON";
}
