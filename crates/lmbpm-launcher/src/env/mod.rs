//! Launch environment: explicit overrides handed to the spawn call, and
//! interpreter resolution.
//!
//! Nothing here touches the launcher's own process environment.

pub mod builder;

pub use builder::{build_launch_env, resolve_interpreter, EnvOverrides};
