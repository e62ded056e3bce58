// Runs recipe commands as child processes.
//
// A command string is tokenized, unquoted token by token and spawned directly,
// with no shell in between. Standard streams are inherited so vendor installers
// can print progress and prompt as they normally would. The dispatcher only
// reports the exit status; deciding whether a non-zero status is fatal is up
// to the caller.

use crate::libs::tokenizer::{tokenize, unquote};
use crate::schemas::errors::{Result, SetupError};
use crate::{log_debug, log_info};
use colored::Colorize;
use std::process::Command;

/// Exit status of a dispatched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// `None` when the child was terminated by a signal.
    pub code: Option<i32>,
}

impl CommandStatus {
    pub const SUCCESS: CommandStatus = CommandStatus { code: Some(0) };

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Something that can execute a command line.
pub trait Dispatch {
    fn dispatch(&mut self, command: &str) -> Result<CommandStatus>;
}

/// Splits `command` into a program and its arguments, ready for `Command::new`.
pub fn argv(command: &str) -> Result<(String, Vec<String>)> {
    let mut tokens = tokenize(command)?.into_iter().map(|t| unquote(&t));
    let program = tokens.next().ok_or(SetupError::EmptyCommand)?;
    Ok((program, tokens.collect()))
}

/// Spawns each command and blocks until it exits.
#[derive(Debug, Default)]
pub struct ShellDispatcher;

impl Dispatch for ShellDispatcher {
    fn dispatch(&mut self, command: &str) -> Result<CommandStatus> {
        let (program, args) = argv(command)?;
        log_info!("[Dispatcher] Executing: {}", command.cyan());
        log_debug!("[Dispatcher] argv: {:?} {:?}", program, args);

        let status = Command::new(&program)
            .args(&args)
            .status()
            .map_err(|source| SetupError::Spawn {
                program: program.clone(),
                source,
            })?;

        log_debug!("[Dispatcher] '{}' exited with {:?}", program, status.code());
        Ok(CommandStatus {
            code: status.code(),
        })
    }
}

/// Prints each command instead of running it. Every command "succeeds".
#[derive(Debug, Default)]
pub struct DryRunDispatcher;

impl Dispatch for DryRunDispatcher {
    fn dispatch(&mut self, command: &str) -> Result<CommandStatus> {
        // Tokenize anyway so malformed templates show up in a dry run too.
        argv(command)?;
        println!("    {} {}", "run".bright_blue(), command);
        Ok(CommandStatus::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argv_unquotes_arguments() {
        let (program, args) = argv(r#"sdkmanager "build-tools;28.0.3" "emulator""#).unwrap();
        assert_eq!(program, "sdkmanager");
        assert_eq!(args, vec!["build-tools;28.0.3", "emulator"]);
    }

    #[test]
    fn empty_command_is_an_error() {
        assert!(matches!(argv("  "), Err(SetupError::EmptyCommand)));
        assert!(matches!(
            ShellDispatcher.dispatch(""),
            Err(SetupError::EmptyCommand)
        ));
    }

    #[test]
    fn succeeding_command_reports_success() {
        let status = ShellDispatcher.dispatch("true").unwrap();
        assert!(status.success());
    }

    #[test]
    fn failing_command_is_not_an_error() {
        let status = ShellDispatcher.dispatch("false").unwrap();
        assert!(!status.success());
        assert_eq!(status.code, Some(1));
    }

    #[test]
    fn quoted_arguments_reach_the_child_intact() {
        let status = ShellDispatcher
            .dispatch(r#"sh -c "test \"$0\" = 'a b'" "a b""#)
            .unwrap();
        assert!(status.success());
        let status = ShellDispatcher.dispatch(r#"sh -c "exit 3""#).unwrap();
        assert_eq!(status.code, Some(3));
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let err = ShellDispatcher
            .dispatch("definitely-not-a-real-program-4711 --help")
            .unwrap_err();
        assert!(matches!(err, SetupError::Spawn { .. }));
    }

    #[test]
    fn dry_run_never_executes() {
        let status = DryRunDispatcher.dispatch("false").unwrap();
        assert!(status.success());
        assert!(DryRunDispatcher.dispatch(r#"echo "unterminated"#).is_err());
    }
}
