// Data types describing what a target installs and how.

use crate::schemas::targets::Target;

/// Decides whether a target is already present on the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// Installed when the rendered path exists.
    PathExists(String),
    /// Installed when `<program> --version` can be spawned.
    CommandAvailable(&'static str),
}

/// One unit of work inside a recipe. Templates are rendered with
/// [`crate::libs::template::TemplateVars`] right before the step runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A command line handed to the dispatcher.
    Run(String),
    /// Fetch `url` into the run's work directory as `file_name`.
    Download { url: String, file_name: String },
    /// Unpack an archive from the work directory into `dest`.
    Extract { archive: String, dest: String },
    /// Append `lines` to `file` unless the block is already there.
    AppendLines { file: String, lines: Vec<String> },
    /// Point `link` at `source`. Skipped when `source` does not exist.
    Symlink { source: String, link: String },
    /// Write the VS Code Settings Sync gist and token.
    SyncSettings,
}

/// The install procedure for one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub target: Target,
    pub summary: &'static str,
    /// Where the version pins were taken from.
    pub source_url: &'static str,
    /// When the pins were last checked, `YYYY-MM-DD`.
    pub info_updated: &'static str,
    pub probe: Option<Probe>,
    pub steps: Vec<Step>,
}

impl Recipe {
    pub fn new(target: Target, summary: &'static str) -> Self {
        Recipe {
            target,
            summary,
            source_url: "",
            info_updated: "",
            probe: None,
            steps: Vec::new(),
        }
    }

    pub fn source(mut self, url: &'static str, updated: &'static str) -> Self {
        self.source_url = url;
        self.info_updated = updated;
        self
    }

    pub fn probe(mut self, probe: Probe) -> Self {
        self.probe = Some(probe);
        self
    }

    pub fn run(mut self, command: impl Into<String>) -> Self {
        self.steps.push(Step::Run(command.into()));
        self
    }

    pub fn download(mut self, url: impl Into<String>, file_name: impl Into<String>) -> Self {
        self.steps.push(Step::Download {
            url: url.into(),
            file_name: file_name.into(),
        });
        self
    }

    pub fn extract(mut self, archive: impl Into<String>, dest: impl Into<String>) -> Self {
        self.steps.push(Step::Extract {
            archive: archive.into(),
            dest: dest.into(),
        });
        self
    }

    pub fn append_lines(mut self, file: impl Into<String>, lines: &[&str]) -> Self {
        self.steps.push(Step::AppendLines {
            file: file.into(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
        });
        self
    }

    pub fn symlink(mut self, source: impl Into<String>, link: impl Into<String>) -> Self {
        self.steps.push(Step::Symlink {
            source: source.into(),
            link: link.into(),
        });
        self
    }

    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Whether any step writes below the install root.
    pub fn uses_prefix(&self) -> bool {
        self.steps.iter().any(|step| match step {
            Step::Run(command) => command.contains("${prefix}"),
            Step::Extract { dest, .. } => dest.contains("${prefix}"),
            _ => false,
        })
    }

    /// The command templates of this recipe, in order.
    #[cfg(test)]
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().filter_map(|step| match step {
            Step::Run(command) => Some(command.as_str()),
            _ => None,
        })
    }
}
