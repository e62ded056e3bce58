// PyCharm Community Edition, unpacked below the install root.

use crate::schemas::recipe::{Probe, Recipe};
use crate::schemas::targets::Target;

const PYCHARM_ARCHIVE_URL: &str =
    "https://download.jetbrains.com/python/pycharm-community-2019.1.3.tar.gz";
const PYCHARM_DIR: &str = "pycharm-community-2019.1.3";
const PYCHARM_INFO_UPDATED: &str = "2019-05-30";

pub fn recipe() -> Recipe {
    let alias = format!("alias pycharm='${{prefix}}/{PYCHARM_DIR}/bin/pycharm.sh'");
    Recipe::new(Target::Pycharm, "PyCharm Community Edition")
        .source(PYCHARM_ARCHIVE_URL, PYCHARM_INFO_UPDATED)
        .probe(Probe::PathExists(format!(
            "${{prefix}}/{PYCHARM_DIR}/bin/pycharm.sh"
        )))
        .download(PYCHARM_ARCHIVE_URL, "pycharm.tar.gz")
        .extract("pycharm.tar.gz", "${prefix}")
        .append_lines("${home}/.bashrc", &[alias.as_str()])
}
