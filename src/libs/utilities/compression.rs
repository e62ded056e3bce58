// Archive extraction for downloaded SDKs and IDEs.

use crate::schemas::errors::{Result, SetupError};
use crate::{log_debug, log_error};
use colored::Colorize;
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::path::Path;
use tar::Archive;
use zip::ZipArchive;

/// The archive formats the recipes download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Zip,
    TarGz,
}

impl ArchiveKind {
    /// Detects the format from the file name.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        if lower.ends_with(".zip") {
            Some(ArchiveKind::Zip)
        } else if lower.ends_with(".tar.gz") || lower.ends_with(".tgz") {
            Some(ArchiveKind::TarGz)
        } else {
            None
        }
    }
}

/// Extracts `src` into `dest`, creating `dest` if needed.
/// Unix permissions stored in the archive are preserved for both formats.
///
/// # Arguments
/// * `src`: The archive to unpack.
/// * `dest`: The directory that receives the archive's top-level entries.
pub fn extract_archive(src: &Path, dest: &Path) -> Result<()> {
    log_debug!(
        "[Utils] Extracting archive {} into {}",
        src.display().to_string().blue(),
        dest.display().to_string().cyan()
    );

    let file_name = src
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let Some(kind) = ArchiveKind::from_file_name(&file_name) else {
        log_error!(
            "[Utils] Unsupported archive type for extraction: {}",
            file_name.red()
        );
        return Err(SetupError::io(
            format!("extracting {}", src.display()),
            std::io::Error::new(std::io::ErrorKind::InvalidData, "unsupported archive type"),
        ));
    };

    fs::create_dir_all(dest)
        .map_err(|e| SetupError::io(format!("creating {}", dest.display()), e))?;
    let file =
        File::open(src).map_err(|e| SetupError::io(format!("opening {}", src.display()), e))?;

    match kind {
        ArchiveKind::Zip => {
            let mut archive = ZipArchive::new(file).map_err(|e| SetupError::Archive {
                archive: src.to_path_buf(),
                source: e,
            })?;
            archive.extract(dest).map_err(|e| SetupError::Archive {
                archive: src.to_path_buf(),
                source: e,
            })?;
        }
        ArchiveKind::TarGz => {
            let mut archive = Archive::new(GzDecoder::new(file));
            archive.set_preserve_permissions(true);
            archive
                .unpack(dest)
                .map_err(|e| SetupError::io(format!("unpacking {}", src.display()), e))?;
        }
    }

    log_debug!(
        "[Utils] Archive contents available at: {}",
        dest.display().to_string().green()
    );
    Ok(())
}
