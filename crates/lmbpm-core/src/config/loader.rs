//! Environment variable loading.
//!
//! Helpers take an explicit lookup so config can be resolved from the process
//! environment or from a map. Values are trimmed, and a value that is empty
//! after trimming counts as unset everywhere, booleans included: `LMBPM_QUIET="  "`
//! falls back to the default instead of reading as true.

/// Lookup function: key → value, `None` when unset.
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Lookup against the process environment.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Read `key`, falling back to `default` when unset or empty.
pub fn env_or<F>(lookup: Lookup<'_>, key: &str, default: F) -> String
where
    F: FnOnce() -> String,
{
    env_optional(lookup, key).unwrap_or_else(default)
}

/// Read `key` as an `Option` (empty counts as unset).
pub fn env_optional(lookup: Lookup<'_>, key: &str) -> Option<String> {
    lookup(key).and_then(|s| {
        let s = s.trim().to_string();
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    })
}

/// Parse a boolean flag: 0/false/no/off are false, any other non-empty value is true.
pub fn env_bool(lookup: Lookup<'_>, key: &str, default: bool) -> bool {
    match env_optional(lookup, key) {
        Some(s) => !matches!(s.to_lowercase().as_str(), "0" | "false" | "no" | "off"),
        None => default,
    }
}
