// Our custom logging macros for debugging output.
use crate::log_debug;
use crate::schemas::errors::{Result, SetupError};
// `chrono::Duration` is what the staleness check hands us.
use chrono::Duration;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Resolves paths that start with a tilde `~` into the user's home directory.
/// Paths without a leading `~` are returned unchanged.
///
/// # Arguments
/// * `path`: A string slice representing the path, which might start with `~`.
pub fn expand_tilde(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Returns the current user's home directory or [`SetupError::HomeDirUnavailable`].
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(SetupError::HomeDirUnavailable)
}

/// Makes sure `dir` exists and the current user can create files in it.
///
/// A throwaway file is created and removed again to find out.
pub fn ensure_writable_dir(dir: &Path) -> Result<()> {
    let not_writable = |source: std::io::Error| SetupError::PrefixNotWritable {
        path: dir.to_path_buf(),
        source,
    };
    std::fs::create_dir_all(dir).map_err(not_writable)?;
    tempfile::Builder::new()
        .prefix(".setup-dev-machine-")
        .tempfile_in(dir)
        .map_err(not_writable)?;
    log_debug!("[Utils] {} is writable", dir.display().to_string().cyan());
    Ok(())
}

/// Converts a Chrono `Duration` into a human-readable string, picking the
/// largest unit that fits (days, hours or minutes).
///
/// # Returns
/// - Days for durations ≥ 1 day
/// - Hours for durations ≥ 1 hour but less than 1 day
/// - Minutes for durations ≥ 1 minute but less than 1 hour
/// - "0 minutes" for anything shorter
pub fn format_duration(duration: &Duration) -> String {
    if duration.num_days() > 0 {
        format!("{} days", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{} hours", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{} minutes", duration.num_minutes())
    } else {
        "0 minutes".to_string()
    }
}

/// Checks whether `program` can be started, by running `<program> --version`
/// with all output discarded.
pub fn command_available(program: &str) -> bool {
    let available = Command::new(program)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok();
    log_debug!(
        "[Utils] '{}' available on PATH: {}",
        program.cyan(),
        available
    );
    available
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_is_expanded_to_home() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_tilde("~/tools"), home.join("tools"));
        assert_eq!(expand_tilde("/usr/local"), PathBuf::from("/usr/local"));
    }

    #[test]
    fn writable_dirs_are_created_on_demand() {
        let root = tempfile::TempDir::new().unwrap();
        let prefix = root.path().join("opt").join("dev");
        ensure_writable_dir(&prefix).unwrap();
        assert!(prefix.is_dir());
        assert_eq!(std::fs::read_dir(&prefix).unwrap().count(), 0);
    }

    #[test]
    fn prefix_below_a_file_is_not_writable() {
        let root = tempfile::TempDir::new().unwrap();
        let file = root.path().join("plain-file");
        std::fs::write(&file, "").unwrap();
        let err = ensure_writable_dir(&file.join("dev")).unwrap_err();
        assert!(matches!(err, SetupError::PrefixNotWritable { .. }));
    }

    #[test]
    fn read_only_prefix_is_not_writable() {
        use std::os::unix::fs::PermissionsExt;

        let root = tempfile::TempDir::new().unwrap();
        let prefix = root.path().join("locked");
        std::fs::create_dir(&prefix).unwrap();
        std::fs::set_permissions(&prefix, std::fs::Permissions::from_mode(0o555)).unwrap();
        // Root ignores directory permissions.
        if std::fs::write(prefix.join("x"), "").is_ok() {
            return;
        }
        assert!(matches!(
            ensure_writable_dir(&prefix),
            Err(SetupError::PrefixNotWritable { .. })
        ));
        std::fs::set_permissions(&prefix, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn durations_pick_the_largest_unit() {
        assert_eq!(format_duration(&Duration::days(400)), "400 days");
        assert_eq!(format_duration(&Duration::hours(5)), "5 hours");
        assert_eq!(format_duration(&Duration::minutes(42)), "42 minutes");
        assert_eq!(format_duration(&Duration::seconds(12)), "0 minutes");
    }

    #[test]
    fn missing_programs_are_not_available() {
        assert!(command_available("sh"));
        assert!(!command_available("definitely-not-a-real-program-4711"));
    }
}
