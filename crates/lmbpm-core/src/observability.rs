//! Observability: tracing init.
//!
//! Uses config::ObservabilityConfig for LMBPM_QUIET, LMBPM_LOG_LEVEL, LMBPM_LOG_JSON.
//! Output always goes to stderr; stdout belongs to the delegated program.

use tracing_subscriber::{prelude::*, EnvFilter};

/// Initialize tracing. Call once at process startup; later calls are no-ops.
/// `RUST_LOG` takes precedence over `LMBPM_LOG_LEVEL`.
pub fn init_tracing() {
    let cfg = crate::config::ObservabilityConfig::from_env();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.filter_directive()));

    let _ = if cfg.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    };
}
