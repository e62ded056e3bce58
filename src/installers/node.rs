// nvm plus the latest node/npm.

use crate::schemas::recipe::{Probe, Recipe};
use crate::schemas::targets::Target;

const NVM_SETUP_SCRIPT: &str = "https://raw.githubusercontent.com/nvm-sh/nvm/v0.34.0/install.sh";
const NVM_SETUP_DOC: &str = "https://github.com/nvm-sh/nvm/blob/master/README.md";
const NVM_INFO_UPDATED: &str = "2019-05-30";

pub fn recipe() -> Recipe {
    Recipe::new(Target::Node, "nvm and the latest node/npm")
        .source(NVM_SETUP_DOC, NVM_INFO_UPDATED)
        .probe(Probe::PathExists("${home}/.nvm/nvm.sh".to_string()))
        .download(NVM_SETUP_SCRIPT, "nvm-install.sh")
        .run("bash ${work}/nvm-install.sh")
        // nvm is a shell function, so it only exists inside a shell that sourced it.
        .run(r#"bash -c "source \"${home}/.nvm/nvm.sh\" && nvm install node""#)
}
