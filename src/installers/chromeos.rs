// Conveniences for the Linux container on ChromeOS.

use crate::schemas::recipe::Recipe;
use crate::schemas::targets::Target;

/// Where ChromeOS mounts the Downloads folder once it is shared with Linux.
const CHROMEOS_DOWNLOADS: &str = "/mnt/chromeos/MyFiles/Downloads";
const CHROMEOS_SETUP_DOC: &str = "https://support.google.com/chromebook/answer/9145439";
const CHROMEOS_INFO_UPDATED: &str = "2019-05-30";

pub fn recipe() -> Recipe {
    // Both steps check before acting, so no probe is needed.
    Recipe::new(Target::Chromeos, "ChromeOS Downloads link and bash aliases")
        .source(CHROMEOS_SETUP_DOC, CHROMEOS_INFO_UPDATED)
        .symlink(CHROMEOS_DOWNLOADS, "${home}/Downloads")
        .append_lines("${home}/.bashrc", &["alias ll='ls -alF'", "alias la='ls -A'"])
}
