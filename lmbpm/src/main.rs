mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use lmbpm_core::config::{env_keys, LauncherConfig};
use lmbpm_core::observability;
use lmbpm_launcher::{default_backend, plan_launch, ExecutableRoot, LaunchError};

fn main() {
    observability::init_tracing();
    let cli = Cli::parse();
    if !cli.ignored.is_empty() {
        tracing::debug!(count = cli.ignored.len(), "Ignoring launcher arguments");
    }

    let code = match launch() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("lm_bpm: {:#}", e);
            e.downcast_ref::<LaunchError>()
                .map(LaunchError::exit_code)
                .unwrap_or(1)
        }
    };
    std::process::exit(code);
}

/// Plan, then hand off. With the exec backend this only returns on failure.
fn launch() -> Result<i32> {
    let config = LauncherConfig::from_env();
    let prior = std::env::var_os(env_keys::PYTHONPATH);

    let plan = plan_launch(&ExecutableRoot, &config, prior.as_deref())?;
    let backend = default_backend();
    tracing::info!(
        backend = backend.name(),
        root = %plan.root.display(),
        program = %plan.program.display(),
        "Delegating to viewer entry point"
    );
    Ok(backend.delegate(&plan)?)
}
