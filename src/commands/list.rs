// `--list-targets`: a table of every target and where its pins come from.

use crate::installers::recipe_for;
use crate::schemas::configuration::Configuration;
use crate::schemas::targets::{DATA_SCIENCE_GROUP, Target};
use prettytable::{Table, format, row};

pub fn run() {
    let config = Configuration::default();
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.set_titles(row!["TARGET", "DESCRIPTION", "VERIFIED", "SOURCE"]);

    for target in Target::ALL {
        let recipe = recipe_for(target, &config);
        let implied = target
            .implies()
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>();
        let description = if implied.is_empty() {
            recipe.summary.to_string()
        } else {
            format!("{} (also installs {})", recipe.summary, implied.join(", "))
        };
        table.add_row(row![
            target.name(),
            description,
            recipe.info_updated,
            recipe.source_url
        ]);
    }
    table.add_row(row![
        DATA_SCIENCE_GROUP,
        "Synonym for \"anaconda\" and \"pycharm\"",
        "",
        ""
    ]);

    table.printstd();
}
