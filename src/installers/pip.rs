// pip for Python 3 from the distribution's packages.

use crate::schemas::recipe::{Probe, Recipe};
use crate::schemas::targets::Target;

const PIP_SETUP_DOC: &str = "https://packages.debian.org/stable/python3-pip";
const PIP_INFO_UPDATED: &str = "2019-05-30";

pub fn recipe() -> Recipe {
    Recipe::new(Target::Pip, "pip for Python 3")
        .source(PIP_SETUP_DOC, PIP_INFO_UPDATED)
        .probe(Probe::CommandAvailable("pip3"))
        .run("sudo apt-get install -y python3-pip")
}
