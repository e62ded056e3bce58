use crate::help_details::targets_help::TARGETS_HELP;
use clap::Parser;

/// Defines the command-line interface for `setup-dev-machine`.
/// `#[derive(Parser)]` generates the argument parsing code via `clap`.
#[derive(Parser, Debug)]
#[command(name = "setup-dev-machine", version)]
#[command(about = "Headless installation of several development tools.")]
#[command(long_about = TARGETS_HELP)]
pub struct Cli {
    /// Where to install programs.
    #[arg(short, long, value_name = "PATH", default_value = "/usr/local")]
    pub path: String,

    /// The targets to install, e.g. "vscode,flutter,node,data-science,chromeos".
    /// See the long help (--help) for the full list.
    #[arg(
        short,
        long,
        value_name = "TARGET1,TARGET2,...",
        value_delimiter = ',',
        required_unless_present = "list_targets"
    )]
    pub targets: Vec<String>,

    /// SettingsSync for VS Code will use this GitHub gist ID.
    #[arg(long, value_name = "GIST", requires = "code_settings_token")]
    pub code_settings_gist: Option<String>,

    /// SettingsSync for VS Code will use this auth token.
    #[arg(long, value_name = "TOKEN", requires = "code_settings_gist")]
    pub code_settings_token: Option<String>,

    /// Print what would be done without downloading or running anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Install targets even when they look already installed.
    #[arg(long)]
    pub force: bool,

    /// List the known targets with their sources and exit.
    #[arg(long)]
    pub list_targets: bool,

    /// Enables detailed debug output for troubleshooting.
    #[arg(short, long)]
    pub debug: bool,
}
