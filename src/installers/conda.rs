// Anaconda and Miniconda, both installed in batch mode below the install root.

use crate::schemas::recipe::{Probe, Recipe};
use crate::schemas::targets::Target;

const ANACONDA_SETUP_SCRIPT: &str =
    "https://repo.anaconda.com/archive/Anaconda3-2019.03-Linux-x86_64.sh";
const ANACONDA_INFO_UPDATED: &str = "2019-05-30";
const MINICONDA_SETUP_SCRIPT: &str =
    "https://repo.anaconda.com/miniconda/Miniconda3-latest-Linux-x86_64.sh";
const MINICONDA_INFO_UPDATED: &str = "2019-05-30";

pub fn anaconda_recipe() -> Recipe {
    conda_recipe(
        Target::Anaconda,
        "Anaconda Python distribution",
        ANACONDA_SETUP_SCRIPT,
        ANACONDA_INFO_UPDATED,
        "anaconda3",
    )
}

pub fn miniconda_recipe() -> Recipe {
    conda_recipe(
        Target::Miniconda,
        "Miniconda (conda without preinstalled packages)",
        MINICONDA_SETUP_SCRIPT,
        MINICONDA_INFO_UPDATED,
        "miniconda3",
    )
}

fn conda_recipe(
    target: Target,
    summary: &'static str,
    script_url: &'static str,
    updated: &'static str,
    dir: &str,
) -> Recipe {
    let script = format!("{dir}-installer.sh");
    let path_line = format!(r#"export PATH="${{prefix}}/{dir}/bin:$PATH""#);
    Recipe::new(target, summary)
        .source(script_url, updated)
        .probe(Probe::PathExists(format!("${{prefix}}/{dir}/bin/conda")))
        .download(script_url, script.clone())
        // -b: batch mode (accept license, no prompts), -p: install prefix.
        .run(format!("bash ${{work}}/{script} -b -p ${{prefix}}/{dir}"))
        .append_lines(
            "${home}/.bashrc",
            &[path_line.as_str()],
        )
}
