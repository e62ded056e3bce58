// The immutable run configuration built once from the parsed command line.

use crate::cli::args::Cli;
use crate::libs::utilities::misc_utils::expand_tilde;
use crate::schemas::errors::Result;
use crate::schemas::targets::Target;
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

/// VS Code Settings Sync credentials. Both halves are required together.
#[derive(Clone, PartialEq, Eq)]
pub struct SyncCredentials {
    pub gist: String,
    pub token: String,
}

// The token never shows up in debug logs.
impl fmt::Debug for SyncCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncCredentials")
            .field("gist", &self.gist)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Install root handed to installers that accept a prefix.
    pub install_path: PathBuf,
    /// Requested targets, deduplicated, with group names already expanded.
    pub targets: BTreeSet<Target>,
    pub sync: Option<SyncCredentials>,
    pub dry_run: bool,
    /// Ignore the "already installed" probes.
    pub force: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            install_path: PathBuf::from("/usr/local"),
            targets: BTreeSet::new(),
            sync: None,
            dry_run: false,
            force: false,
        }
    }
}

impl Configuration {
    /// Validates the parsed arguments and freezes them into a `Configuration`.
    /// Unknown target names are rejected here, before anything runs.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut targets = BTreeSet::new();
        for name in cli.targets.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
            targets.extend(Target::expand_name(name)?);
        }

        let sync = match (&cli.code_settings_gist, &cli.code_settings_token) {
            (Some(gist), Some(token)) => Some(SyncCredentials {
                gist: gist.clone(),
                token: token.clone(),
            }),
            _ => None,
        };

        Ok(Configuration {
            install_path: expand_tilde(&cli.path),
            targets,
            sync,
            dry_run: cli.dry_run,
            force: cli.force,
        })
    }
}
