//! Module search path composition (`PYTHONPATH`).
//!
//! The prior value is kept verbatim after the new first entry, including any
//! empty entries it already had.

use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Platform separator for path-list variables.
#[cfg(windows)]
pub const SEPARATOR: char = ';';
#[cfg(not(windows))]
pub const SEPARATOR: char = ':';

/// Prepend `root` to a prior search path value.
///
/// `root:prior` when prior is non-empty, otherwise exactly `root`. A root
/// containing the separator is still prepended as-is; the interpreter will
/// see it split into several entries.
pub fn prepend(root: &Path, prior: Option<&OsStr>) -> OsString {
    if root.to_string_lossy().contains(SEPARATOR) {
        tracing::warn!(
            root = %root.display(),
            separator = %SEPARATOR,
            "Repository root contains the search path separator; its first entry will be split"
        );
    }

    let mut value = OsString::from(root.as_os_str());
    if let Some(prior) = prior.filter(|p| !p.is_empty()) {
        let mut sep = [0u8; 4];
        value.push(SEPARATOR.encode_utf8(&mut sep));
        value.push(prior);
    }
    value
}
