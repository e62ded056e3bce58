use crate::schemas::errors::{Result, SetupError};
use crate::{log_debug, log_info, log_warn};
use colored::Colorize;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Downloads `url` into `dest`, overwriting any existing file.
///
/// # Arguments
/// * `url`: The URL of the installer or archive.
/// * `dest`: The local path where the download is saved.
pub fn download_file(url: &str, dest: &Path) -> Result<()> {
    log_debug!("[Utils] Starting download from URL: {}", url.blue());

    let response = ureq::get(url).call().map_err(|e| SetupError::Download {
        url: url.to_string(),
        source: Box::new(e),
    })?;

    let mut file = File::create(dest)
        .map_err(|e| SetupError::io(format!("creating {}", dest.display()), e))?;
    let mut reader = response.into_reader();
    io::copy(&mut reader, &mut file)
        .map_err(|e| SetupError::io(format!("writing {}", dest.display()), e))?;

    log_debug!(
        "[Utils] File downloaded successfully to {}",
        dest.display().to_string().green()
    );
    Ok(())
}

/// Reads a shell rc file line by line. A missing file reads as empty, and
/// bytes that are not UTF-8 are replaced rather than ending the read.
pub fn read_rc_file(rc_path: &Path) -> Vec<String> {
    if !rc_path.exists() {
        return vec![];
    }

    match fs::read(rc_path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect(),
        Err(err) => {
            log_warn!(
                "[Shell Config] Could not read RC file {}: {}. Treating it as empty.",
                rc_path.display().to_string().red(),
                err.to_string().red()
            );
            vec![]
        }
    }
}

/// Checks whether `needle_lines` appear as one consecutive block in `haystack_lines`.
/// Lines are compared after trimming surrounding whitespace.
pub fn contains_multiline_block(haystack_lines: &[String], needle_lines: &[String]) -> bool {
    if needle_lines.is_empty() {
        return true;
    }
    if haystack_lines.len() < needle_lines.len() {
        return false;
    }

    haystack_lines.windows(needle_lines.len()).any(|window| {
        window
            .iter()
            .zip(needle_lines)
            .all(|(have, want)| have.trim() == want.trim())
    })
}

/// Appends `lines` to the rc file at `rc_path` under a marker comment, unless
/// the exact block is already present.
///
/// # Returns
/// * `Ok(true)` when the block was written, `Ok(false)` when it was already there.
pub fn append_block(rc_path: &Path, lines: &[String]) -> Result<bool> {
    let existing = read_rc_file(rc_path);
    if contains_multiline_block(&existing, lines) {
        log_debug!(
            "[Shell Config] Block already present in {}",
            rc_path.display().to_string().cyan()
        );
        return Ok(false);
    }

    if let Some(parent) = rc_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| SetupError::io(format!("creating {}", parent.display()), e))?;
    }
    let context = || format!("appending to {}", rc_path.display());
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(rc_path)
        .map_err(|e| SetupError::io(context(), e))?;

    writeln!(file, "\n# Added by setup-dev-machine").map_err(|e| SetupError::io(context(), e))?;
    for line in lines {
        writeln!(file, "{line}").map_err(|e| SetupError::io(context(), e))?;
    }

    log_info!(
        "[Shell Config] Added {} line(s) to {}",
        lines.len(),
        rc_path.display().to_string().green()
    );
    Ok(true)
}

/// Creates `link` pointing at `source`.
///
/// Nothing happens when `source` is missing (e.g. the Downloads folder is not
/// shared with Linux) or when `link` already exists.
///
/// # Returns
/// * `Ok(true)` when a link was created.
pub fn ensure_symlink(source: &Path, link: &Path) -> Result<bool> {
    if !source.exists() {
        log_warn!(
            "[Utils] {} does not exist; not linking {}",
            source.display().to_string().yellow(),
            link.display()
        );
        return Ok(false);
    }
    if link.symlink_metadata().is_ok() {
        log_debug!(
            "[Utils] {} already exists; leaving it alone",
            link.display().to_string().cyan()
        );
        return Ok(false);
    }

    std::os::unix::fs::symlink(source, link).map_err(|e| {
        SetupError::io(
            format!("linking {} -> {}", link.display(), source.display()),
            e,
        )
    })?;
    log_info!(
        "[Utils] Linked {} -> {}",
        link.display().to_string().green(),
        source.display()
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn block_detection_requires_consecutive_lines() {
        let haystack = lines(&["a", "  alias ll='ls -alF'", "alias la='ls -A'", "z"]);
        assert!(contains_multiline_block(
            &haystack,
            &lines(&["alias ll='ls -alF'", "alias la='ls -A'"])
        ));
        assert!(!contains_multiline_block(&haystack, &lines(&["a", "z"])));
        assert!(contains_multiline_block(&haystack, &[]));
    }

    #[test]
    fn append_block_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let rc = dir.path().join(".bashrc");
        fs::write(&rc, "export EDITOR=vim\n").unwrap();
        let block = lines(&["alias ll='ls -alF'", "alias la='ls -A'"]);

        assert!(append_block(&rc, &block).unwrap());
        assert!(!append_block(&rc, &block).unwrap());

        let content = fs::read_to_string(&rc).unwrap();
        assert!(content.starts_with("export EDITOR=vim\n"));
        assert_eq!(content.matches("alias ll='ls -alF'").count(), 1);
        assert!(content.contains("# Added by setup-dev-machine"));
    }

    #[test]
    fn invalid_utf8_does_not_hide_later_lines() {
        let dir = TempDir::new().unwrap();
        let rc = dir.path().join(".bashrc");
        let mut content = b"export A=1\n# caf\xe9\n".to_vec();
        content.extend_from_slice(b"alias ll='ls -alF'\n");
        fs::write(&rc, &content).unwrap();

        assert_eq!(read_rc_file(&rc).len(), 3);
        assert!(!append_block(&rc, &lines(&["alias ll='ls -alF'"])).unwrap());
        assert_eq!(fs::read(&rc).unwrap(), content);
    }

    #[test]
    fn append_block_creates_missing_files() {
        let dir = TempDir::new().unwrap();
        let rc = dir.path().join("nested").join(".bashrc");
        assert!(append_block(&rc, &lines(&["export A=1"])).unwrap());
        assert!(fs::read_to_string(&rc).unwrap().contains("export A=1"));
    }

    #[test]
    fn symlink_skips_missing_source_and_existing_link() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("Downloads-shared");
        let link = dir.path().join("Downloads");

        assert!(!ensure_symlink(&source, &link).unwrap());
        assert!(link.symlink_metadata().is_err());

        fs::create_dir(&source).unwrap();
        assert!(ensure_symlink(&source, &link).unwrap());
        assert_eq!(fs::read_link(&link).unwrap(), source);
        assert!(!ensure_symlink(&source, &link).unwrap());
    }
}
