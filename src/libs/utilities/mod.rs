// Small helpers shared by the recipe runner and the installers.

// Archive extraction (zip, tar.gz).
pub mod compression;
// Downloads, rc-file blocks and symlinks.
pub mod file_operations;
pub mod misc_utils;
