pub mod common;
pub mod delegation_backend;
pub mod env;
pub mod error;
pub mod root_resolver;
pub mod runner;
pub mod search_path;

pub use delegation_backend::{default_backend, DelegationBackend};
#[cfg(unix)]
pub use delegation_backend::ExecBackend;
#[cfg(not(unix))]
pub use delegation_backend::SpawnBackend;
pub use error::LaunchError;
pub use root_resolver::{ExecutableRoot, FixedRoot, RootResolver};
pub use runner::{plan_launch, LaunchPlan};
