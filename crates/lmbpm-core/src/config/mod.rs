//! Unified configuration layer.
//!
//! Every environment read goes through this module; the rest of the workspace
//! reads structured config instead of calling `std::env::var` directly.
//!
//! - `loader`: `env_or`, `env_optional`, `env_bool` helpers
//! - `schema`: `ObservabilityConfig`, `LauncherConfig`
//! - `env_keys`: key constants

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use schema::{LauncherConfig, ObservabilityConfig};
