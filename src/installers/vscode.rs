// Visual Studio Code, optionally with the Settings Sync extension configured.

use crate::schemas::configuration::{Configuration, SyncCredentials};
use crate::schemas::errors::{Result, SetupError};
use crate::schemas::recipe::{Probe, Recipe, Step};
use crate::schemas::targets::Target;
use crate::{log_debug, log_info};
use colored::Colorize;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

const VSCODE_DEB_URL: &str = "https://go.microsoft.com/fwlink/?LinkID=760868";
const VSCODE_SETUP_DOC: &str = "https://code.visualstudio.com/docs/setup/linux";
const VSCODE_INFO_UPDATED: &str = "2019-05-30";
const SETTINGS_SYNC_EXTENSION: &str = "Shan.code-settings-sync";

pub fn recipe(config: &Configuration) -> Recipe {
    let recipe = Recipe::new(Target::Vscode, "Visual Studio Code editor")
        .source(VSCODE_SETUP_DOC, VSCODE_INFO_UPDATED)
        .probe(Probe::CommandAvailable("code"))
        .download(VSCODE_DEB_URL, "code.deb")
        .run("sudo apt-get install -y ${work}/code.deb");

    if config.sync.is_some() {
        recipe
            .run(format!("code --install-extension {SETTINGS_SYNC_EXTENSION}"))
            .step(Step::SyncSettings)
    } else {
        recipe
    }
}

/// Contents of `syncLocalSettings.json`, where the extension keeps its token.
#[derive(Serialize)]
struct SyncLocalSettings<'a> {
    token: &'a str,
}

/// Points Settings Sync at the configured gist and stores the token.
///
/// `settings.json` is merged, not replaced: other user settings survive.
pub fn write_sync_settings(home: &Path, credentials: &SyncCredentials) -> Result<()> {
    let user_dir = home.join(".config").join("Code").join("User");
    fs::create_dir_all(&user_dir)
        .map_err(|e| SetupError::io(format!("creating {}", user_dir.display()), e))?;

    let settings_path = user_dir.join("settings.json");
    let mut settings = read_settings(&settings_path)?;
    settings.insert(
        "sync.gist".to_string(),
        Value::String(credentials.gist.clone()),
    );
    write_json(&settings_path, &settings)?;
    log_debug!(
        "[VS Code] Updated {}",
        settings_path.display().to_string().cyan()
    );

    let local_path = user_dir.join("syncLocalSettings.json");
    write_json(
        &local_path,
        &SyncLocalSettings {
            token: &credentials.token,
        },
    )?;

    log_info!(
        "[VS Code] Settings Sync configured for gist {}",
        credentials.gist.green()
    );
    Ok(())
}

fn read_settings(path: &Path) -> Result<Map<String, Value>> {
    if !path.exists() {
        return Ok(Map::new());
    }
    let raw = fs::read_to_string(path)
        .map_err(|e| SetupError::io(format!("reading {}", path.display()), e))?;
    if raw.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str(&raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Ok(Map::new()),
        Err(source) => Err(SetupError::Json {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let body = serde_json::to_string_pretty(value).map_err(|source| SetupError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, body + "\n")
        .map_err(|e| SetupError::io(format!("writing {}", path.display()), e))
}
