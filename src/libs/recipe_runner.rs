// Executes recipes: staleness warning, installed-probe, then each step in order.
//
// A failing step ends its target, but the runner always moves on to the next
// target. Nothing is rolled back.

use crate::installers::{recipe_for, vscode};
use crate::libs::dispatcher::Dispatch;
use crate::libs::template::TemplateVars;
use crate::libs::utilities::compression::extract_archive;
use crate::libs::utilities::file_operations::{append_block, download_file, ensure_symlink};
use crate::libs::utilities::misc_utils::{command_available, format_duration};
use crate::schemas::configuration::Configuration;
use crate::schemas::errors::{Result, SetupError};
use crate::schemas::recipe::{Probe, Recipe, Step};
use crate::schemas::targets::Target;
use crate::{log_debug, log_error, log_info, log_step, log_warn};
use chrono::NaiveDate;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Version pins older than this get a warning before they are used.
const STALE_AFTER_DAYS: i64 = 365;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Installed,
    /// The probe found the target already present.
    Skipped,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetReport {
    pub target: Target,
    pub outcome: Outcome,
}

pub struct RecipeRunner<'a> {
    config: &'a Configuration,
    dispatcher: &'a mut dyn Dispatch,
    vars: TemplateVars,
    work: PathBuf,
    today: NaiveDate,
}

impl<'a> RecipeRunner<'a> {
    /// `home` and `work` are substituted into templates as `${home}` and `${work}`.
    pub fn new(
        config: &'a Configuration,
        dispatcher: &'a mut dyn Dispatch,
        home: &Path,
        work: &Path,
        today: NaiveDate,
    ) -> Self {
        RecipeRunner {
            config,
            dispatcher,
            vars: TemplateVars::new(config, home, work),
            work: work.to_path_buf(),
            today,
        }
    }

    /// Runs every target in `targets`, in the given order.
    pub fn run_all(&mut self, targets: &[Target]) -> Vec<TargetReport> {
        targets
            .iter()
            .map(|&target| self.run_target(target))
            .collect()
    }

    pub fn run_target(&mut self, target: Target) -> TargetReport {
        let recipe = recipe_for(target, self.config);
        log_step!("{} ({})", target.name().bold(), recipe.summary);
        if self.config.dry_run {
            println!("[{}] {}", target.name(), recipe.summary);
        }

        warn_if_stale(&recipe, self.today);

        if !self.config.force && self.is_installed(&recipe) {
            log_info!(
                "[{}] Already installed, skipping (use --force to reinstall)",
                target.name().green()
            );
            if self.config.dry_run {
                println!("    skip (already installed)");
            }
            return TargetReport {
                target,
                outcome: Outcome::Skipped,
            };
        }

        let outcome = match self.run_steps(&recipe) {
            Ok(()) => {
                log_info!("[{}] Done", target.name().green());
                Outcome::Installed
            }
            Err(e) => {
                log_error!("[{}] Failed: {}", target.name().red(), e);
                Outcome::Failed(e.to_string())
            }
        };
        TargetReport { target, outcome }
    }

    fn is_installed(&self, recipe: &Recipe) -> bool {
        match &recipe.probe {
            Some(Probe::PathExists(template)) => {
                let path = self.vars.render(template);
                log_debug!("[{}] Probing {}", recipe.target.name(), path.cyan());
                Path::new(&path).exists()
            }
            Some(Probe::CommandAvailable(program)) => command_available(program),
            None => false,
        }
    }

    fn run_steps(&mut self, recipe: &Recipe) -> Result<()> {
        for step in &recipe.steps {
            self.run_step(step)?;
        }
        Ok(())
    }

    fn run_step(&mut self, step: &Step) -> Result<()> {
        let dry_run = self.config.dry_run;
        match step {
            Step::Run(template) => {
                let command = self.vars.render_command(template);
                let status = self.dispatcher.dispatch(&command)?;
                if !status.success() {
                    return Err(SetupError::CommandFailed {
                        command,
                        code: status.code,
                    });
                }
            }
            Step::Download { url, file_name } => {
                let dest = self.work.join(file_name);
                if dry_run {
                    println!("    download {} -> {}", url, dest.display());
                } else {
                    log_info!("[Download] {}", url.cyan());
                    download_file(url, &dest)?;
                }
            }
            Step::Extract { archive, dest } => {
                let archive = self.work.join(archive);
                let dest = PathBuf::from(self.vars.render(dest));
                if dry_run {
                    println!("    extract {} -> {}", archive.display(), dest.display());
                } else {
                    log_info!("[Extract] {}", dest.display().to_string().cyan());
                    extract_archive(&archive, &dest)?;
                }
            }
            Step::AppendLines { file, lines } => {
                let file = PathBuf::from(self.vars.render(file));
                let lines: Vec<String> = lines.iter().map(|l| self.vars.render(l)).collect();
                if dry_run {
                    println!("    append {} line(s) to {}", lines.len(), file.display());
                } else {
                    append_block(&file, &lines)?;
                }
            }
            Step::Symlink { source, link } => {
                let source = PathBuf::from(self.vars.render(source));
                let link = PathBuf::from(self.vars.render(link));
                if dry_run {
                    println!("    link {} -> {}", link.display(), source.display());
                } else {
                    ensure_symlink(&source, &link)?;
                }
            }
            Step::SyncSettings => {
                let Some(credentials) = &self.config.sync else {
                    log_debug!("[VS Code] No Settings Sync credentials given");
                    return Ok(());
                };
                let home = PathBuf::from(self.vars.render("${home}"));
                if dry_run {
                    println!("    configure Settings Sync for gist {}", credentials.gist);
                } else {
                    vscode::write_sync_settings(&home, credentials)?;
                }
            }
        }
        Ok(())
    }
}

/// Warns when a recipe's version pins have not been checked for a long time.
fn warn_if_stale(recipe: &Recipe, today: NaiveDate) {
    let Ok(updated) = NaiveDate::parse_from_str(recipe.info_updated, "%Y-%m-%d") else {
        log_debug!(
            "[{}] No valid last-verified date on recipe",
            recipe.target.name()
        );
        return;
    };
    let age = today.signed_duration_since(updated);
    if age.num_days() > STALE_AFTER_DAYS {
        log_warn!(
            "[{}] Version pins were last verified on {} ({} ago): {}",
            recipe.target.name().yellow(),
            recipe.info_updated,
            format_duration(&age),
            recipe.source_url
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::dispatcher::CommandStatus;
    use std::fs;
    use tempfile::TempDir;

    /// Records every dispatched command and answers with a fixed status.
    struct RecordingDispatcher {
        commands: Vec<String>,
        status: CommandStatus,
    }

    impl RecordingDispatcher {
        fn new(code: i32) -> Self {
            RecordingDispatcher {
                commands: Vec::new(),
                status: CommandStatus { code: Some(code) },
            }
        }
    }

    impl Dispatch for RecordingDispatcher {
        fn dispatch(&mut self, command: &str) -> Result<CommandStatus> {
            self.commands.push(command.to_string());
            Ok(self.status)
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 6, 1).unwrap()
    }

    fn dry_config(targets: &[Target]) -> Configuration {
        Configuration {
            install_path: PathBuf::from("/opt/dev"),
            targets: targets.iter().copied().collect(),
            dry_run: true,
            force: true,
            ..Configuration::default()
        }
    }

    #[test]
    fn vscode_dispatches_only_its_own_recipe() {
        let config = dry_config(&[Target::Vscode]);
        let mut dispatcher = RecordingDispatcher::new(0);
        let reports = {
            let mut runner = RecipeRunner::new(
                &config,
                &mut dispatcher,
                Path::new("/home/dev"),
                Path::new("/tmp/work"),
                today(),
            );
            runner.run_all(&[Target::Vscode])
        };

        assert_eq!(
            reports,
            vec![TargetReport {
                target: Target::Vscode,
                outcome: Outcome::Installed
            }]
        );
        assert_eq!(
            dispatcher.commands,
            vec!["sudo apt-get install -y /tmp/work/code.deb"]
        );
    }

    #[test]
    fn failure_stops_the_target_but_not_the_run() {
        let config = dry_config(&[Target::Flutter, Target::Pip]);
        let mut dispatcher = RecordingDispatcher::new(2);
        let reports = {
            let mut runner = RecipeRunner::new(
                &config,
                &mut dispatcher,
                Path::new("/home/dev"),
                Path::new("/tmp/work"),
                today(),
            );
            runner.run_all(&[Target::Flutter, Target::Pip])
        };

        assert_eq!(reports.len(), 2);
        assert!(matches!(reports[0].outcome, Outcome::Failed(_)));
        assert!(matches!(reports[1].outcome, Outcome::Failed(_)));
        // Flutter stopped after the clone; pip still got its turn.
        assert_eq!(dispatcher.commands.len(), 2);
        assert!(dispatcher.commands[0].starts_with("git clone -b stable"));
        assert!(dispatcher.commands[0].ends_with("/opt/dev/flutter"));
        assert_eq!(dispatcher.commands[1], "sudo apt-get install -y python3-pip");
    }

    #[test]
    fn spaced_prefix_reaches_the_installer_as_one_argument() {
        let config = Configuration {
            install_path: PathBuf::from("/opt/my tools"),
            ..dry_config(&[Target::Flutter])
        };
        let mut dispatcher = RecordingDispatcher::new(0);
        RecipeRunner::new(
            &config,
            &mut dispatcher,
            Path::new("/home/dev"),
            Path::new("/tmp/work"),
            today(),
        )
        .run_target(Target::Flutter);

        let (program, args) = crate::libs::dispatcher::argv(&dispatcher.commands[0]).unwrap();
        assert_eq!(program, "git");
        assert_eq!(args.last().unwrap(), "/opt/my tools/flutter");
        assert_eq!(args.len(), 5);
    }

    #[test]
    fn installed_targets_are_skipped_without_force() {
        let prefix = TempDir::new().unwrap();
        fs::create_dir_all(prefix.path().join("flutter/bin")).unwrap();
        fs::write(prefix.path().join("flutter/bin/flutter"), "").unwrap();

        let config = Configuration {
            install_path: prefix.path().to_path_buf(),
            targets: [Target::Flutter].into_iter().collect(),
            dry_run: true,
            ..Configuration::default()
        };
        let mut dispatcher = RecordingDispatcher::new(0);
        let report = RecipeRunner::new(
            &config,
            &mut dispatcher,
            Path::new("/home/dev"),
            Path::new("/tmp/work"),
            today(),
        )
        .run_target(Target::Flutter);

        assert_eq!(report.outcome, Outcome::Skipped);
        assert!(dispatcher.commands.is_empty());
    }

    #[test]
    fn native_steps_touch_the_filesystem_when_not_dry() {
        let home = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let config = Configuration {
            targets: [Target::Chromeos].into_iter().collect(),
            ..Configuration::default()
        };
        let mut dispatcher = RecordingDispatcher::new(0);
        let report = RecipeRunner::new(&config, &mut dispatcher, home.path(), work.path(), today())
            .run_target(Target::Chromeos);

        assert_eq!(report.outcome, Outcome::Installed);
        let bashrc = fs::read_to_string(home.path().join(".bashrc")).unwrap();
        assert!(bashrc.contains("alias ll='ls -alF'"));
        assert!(bashrc.contains("alias la='ls -A'"));
        assert!(dispatcher.commands.is_empty());
    }

    #[test]
    fn sync_settings_are_written_for_vscode() {
        let home = TempDir::new().unwrap();
        let config = Configuration {
            sync: Some(crate::schemas::configuration::SyncCredentials {
                gist: "g".into(),
                token: "t".into(),
            }),
            ..Configuration::default()
        };
        let mut dispatcher = RecordingDispatcher::new(0);
        let mut runner =
            RecipeRunner::new(&config, &mut dispatcher, home.path(), home.path(), today());
        runner.run_step(&Step::SyncSettings).unwrap();

        assert!(home.path().join(".config/Code/User/syncLocalSettings.json").exists());
    }
}
