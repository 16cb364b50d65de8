use std::ffi::OsString;

use clap::Parser;

/// lm_bpm - Launch the LM-screen beam position viewer from the repository root
///
/// No options are recognized. Anything on the command line is accepted and
/// discarded; the viewer always starts without arguments.
#[derive(Parser, Debug)]
#[command(name = "lm_bpm")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Ignored
    #[arg(
        value_name = "IGNORED",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..,
        hide = true
    )]
    pub ignored: Vec<OsString>,
}
