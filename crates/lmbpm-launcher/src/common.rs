//! Shared constants and exit status mapping.

// ============================================================
// Launch layout (single source of truth)
// ============================================================

/// Entry point, relative to the repository root.
pub const ENTRY_POINT: &str = "scripts/viewer_p06.py";

/// Interpreters searched on `PATH` when no override is configured, in order.
pub const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

/// Generic launcher failure.
pub const EXIT_LAUNCH_FAILED: i32 = 1;

/// Target exists but could not be executed.
pub const EXIT_NOT_EXECUTABLE: i32 = 126;

/// Target not found.
pub const EXIT_NOT_FOUND: i32 = 127;

/// Map a child's exit status to the launcher's own exit code.
#[cfg(not(unix))]
pub fn exit_code(status: std::process::ExitStatus) -> i32 {
    status.code().unwrap_or(EXIT_LAUNCH_FAILED)
}
