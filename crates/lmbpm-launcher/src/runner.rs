use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use lmbpm_core::config::LauncherConfig;

use crate::common::ENTRY_POINT;
use crate::env::{build_launch_env, resolve_interpreter, EnvOverrides};
use crate::error::LaunchError;
use crate::root_resolver::RootResolver;

/// Everything needed to start the delegated program.
///
/// Built by [`plan_launch`]; backends only ever see this value, never the
/// launcher's own arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    /// Repository root
    pub root: PathBuf,
    /// Program to execute (the interpreter)
    pub program: PathBuf,
    /// Arguments to `program`: the entry point, relative to `current_dir`
    pub args: Vec<OsString>,
    /// Working directory of the delegated program (the root)
    pub current_dir: PathBuf,
    /// Overrides merged over the inherited environment
    pub env: EnvOverrides,
}

impl LaunchPlan {
    /// Build the command. Standard streams are inherited unchanged.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .current_dir(&self.current_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        self.env.apply_to(&mut cmd);
        cmd
    }
}

/// Plan the launch of the viewer entry point.
///
/// The entry point is checked before the interpreter is looked up, so a
/// missing script is reported as such even on a host without Python.
/// `prior_search_path` is the inherited `PYTHONPATH`; it is kept after the
/// root in the child's value.
pub fn plan_launch(
    resolver: &dyn RootResolver,
    config: &LauncherConfig,
    prior_search_path: Option<&OsStr>,
) -> Result<LaunchPlan, LaunchError> {
    let root = resolver.resolve_root()?;
    if !root.is_dir() {
        return Err(LaunchError::RootNotADirectory(root));
    }

    let entry = root.join(ENTRY_POINT);
    if !entry.is_file() {
        return Err(LaunchError::EntryPointMissing(entry));
    }

    let program = resolve_interpreter(config)?;
    let env = build_launch_env(&root, prior_search_path);

    tracing::debug!(
        resolver = resolver.name(),
        root = %root.display(),
        program = %program.display(),
        entry_point = ENTRY_POINT,
        "Launch planned"
    );

    Ok(LaunchPlan {
        program,
        args: vec![OsString::from(ENTRY_POINT)],
        current_dir: root.clone(),
        root,
        env,
    })
}
