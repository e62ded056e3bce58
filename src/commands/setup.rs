// The main flow: plan the requested targets, run their recipes, summarize.

use crate::installers::recipe_for;
use crate::libs::dispatcher::{Dispatch, DryRunDispatcher, ShellDispatcher};
use crate::libs::recipe_runner::{Outcome, RecipeRunner, TargetReport};
use crate::libs::target_selection::plan;
use crate::libs::utilities::misc_utils::{ensure_writable_dir, home_dir};
use crate::schemas::configuration::Configuration;
use crate::{log_debug, log_error, log_info, log_warn};
use anyhow::Context;
use colored::Colorize;
use tempfile::TempDir;

/// Installs every planned target.
///
/// # Returns
/// * `Ok(true)` when every target was installed or skipped.
/// * `Ok(false)` when at least one target failed.
/// * `Err` when the run could not start at all: no home directory, an install
///   path the current user cannot write to, or no work directory.
pub fn run(config: &Configuration) -> anyhow::Result<bool> {
    log_debug!("Entered setup::run() with {:?}", config);

    let targets = plan(config);
    if targets.is_empty() {
        log_warn!("No targets selected, nothing to do.");
        return Ok(true);
    }
    log_info!(
        "Installing into {}: {}",
        config.install_path.display().to_string().cyan(),
        targets
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(", ")
            .bold()
    );

    let home = home_dir()?;

    // Installers write into the prefix as the invoking user.
    if !config.dry_run
        && targets
            .iter()
            .any(|&t| recipe_for(t, config).uses_prefix())
    {
        ensure_writable_dir(&config.install_path)?;
    }
    if std::env::var_os("SUDO_USER").is_some() {
        log_warn!(
            "Running under sudo: shell config, nvm and VS Code settings go to {}",
            home.display().to_string().yellow()
        );
    }

    // Downloads land here and disappear with the directory when the run ends.
    // Dry runs only need a path to print, so nothing is created.
    let work_dir = if config.dry_run {
        None
    } else {
        Some(
            tempfile::Builder::new()
                .prefix("setup-dev-machine-")
                .tempdir()
                .context("creating the download directory")?,
        )
    };
    let work = work_dir
        .as_ref()
        .map(TempDir::path)
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("setup-dev-machine"));

    let mut shell = ShellDispatcher;
    let mut printer = DryRunDispatcher;
    let dispatcher: &mut dyn Dispatch = if config.dry_run {
        &mut printer
    } else {
        &mut shell
    };

    let today = chrono::Local::now().date_naive();
    let reports = RecipeRunner::new(config, dispatcher, &home, &work, today).run_all(&targets);

    print_summary(&reports);
    Ok(reports
        .iter()
        .all(|r| !matches!(r.outcome, Outcome::Failed(_))))
}

fn print_summary(reports: &[TargetReport]) {
    eprintln!("\n{}", "Summary".bright_yellow().bold());
    eprintln!("{}", "=".repeat(7).bright_yellow());
    for report in reports {
        match &report.outcome {
            Outcome::Installed => log_info!("{:16} {}", report.target.name(), "installed".green()),
            Outcome::Skipped => log_info!(
                "{:16} {}",
                report.target.name(),
                "already installed".dimmed()
            ),
            Outcome::Failed(reason) => {
                log_error!("{:16} {} ({})", report.target.name(), "failed".red(), reason)
            }
        }
    }
}
