use std::path::PathBuf;

/// Everything that can go wrong while configuring or running a setup.
///
/// A non-zero exit from a child process is *not* an error of the dispatcher;
/// it only becomes [`SetupError::CommandFailed`] once the recipe runner decides
/// the step failed.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("unknown target '{name}' (valid targets: {valid})")]
    UnknownTarget { name: String, valid: String },

    #[error("unbalanced quote in command: {command}")]
    UnbalancedQuote { command: String },

    #[error("empty command")]
    EmptyCommand,

    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command '{command}' exited with {}", describe_code(.code))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("download of {url} failed: {source}")]
    Download {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("could not unpack {}: {source}", .archive.display())]
    Archive {
        archive: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "install path {} is not writable ({source}); pass a writable --path or make it writable first",
        .path.display()
    )]
    PrefixNotWritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not determine the home directory")]
    HomeDirUnavailable,
}

impl SetupError {
    /// Wraps an IO error with a short description of what was being attempted.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        SetupError::Io {
            context: context.into(),
            source,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, SetupError>;
