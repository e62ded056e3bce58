use crate::schemas::errors::SetupError;
use std::fmt;
use std::str::FromStr;

/// A named install routine.
///
/// The declaration order is the order targets are installed in, which is why
/// `Android` comes before the targets that build on it (`AndroidStudio`, `Flutter`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Target {
    Vscode,
    Android,
    AndroidStudio,
    Flutter,
    Node,
    Anaconda,
    Miniconda,
    Pip,
    Pycharm,
    Chromeos,
}

/// Legacy group name kept for compatibility with older invocations.
pub const DATA_SCIENCE_GROUP: &str = "data-science";

impl Target {
    pub const ALL: [Target; 10] = [
        Target::Vscode,
        Target::Android,
        Target::AndroidStudio,
        Target::Flutter,
        Target::Node,
        Target::Anaconda,
        Target::Miniconda,
        Target::Pip,
        Target::Pycharm,
        Target::Chromeos,
    ];

    /// The name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Target::Vscode => "vscode",
            Target::Android => "android",
            Target::AndroidStudio => "android-studio",
            Target::Flutter => "flutter",
            Target::Node => "node",
            Target::Anaconda => "anaconda",
            Target::Miniconda => "miniconda",
            Target::Pip => "pip",
            Target::Pycharm => "pycharm",
            Target::Chromeos => "chromeos",
        }
    }

    /// Targets that must be installed before this one.
    pub fn implies(self) -> &'static [Target] {
        match self {
            Target::Flutter | Target::AndroidStudio => &[Target::Android],
            _ => &[],
        }
    }

    /// Resolves a command-line name to the targets it stands for.
    /// Plain names map to one target, group names to several.
    pub fn expand_name(name: &str) -> Result<Vec<Target>, SetupError> {
        if name == DATA_SCIENCE_GROUP {
            return Ok(vec![Target::Anaconda, Target::Pycharm]);
        }
        name.parse().map(|target| vec![target])
    }

    /// Every accepted name, comma separated, for error messages.
    pub fn valid_names() -> String {
        let mut names: Vec<&str> = Target::ALL.iter().map(|t| t.name()).collect();
        names.push(DATA_SCIENCE_GROUP);
        names.join(", ")
    }
}

impl FromStr for Target {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::ALL
            .iter()
            .copied()
            .find(|t| t.name() == s)
            .ok_or_else(|| SetupError::UnknownTarget {
                name: s.to_string(),
                valid: Target::valid_names(),
            })
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
