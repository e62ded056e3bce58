// One module per target family. Each builds the `Recipe` for its target(s);
// `recipe_for` is the single entry point used by the runner and the listing.

use crate::schemas::configuration::Configuration;
use crate::schemas::recipe::Recipe;
use crate::schemas::targets::Target;

/// Android command line tools and Android Studio.
pub(crate) mod android;
/// ChromeOS Downloads link and shell aliases.
pub(crate) mod chromeos;
/// Anaconda and Miniconda batch installers.
pub(crate) mod conda;
/// Flutter from git.
pub(crate) mod flutter;
/// nvm and node.
pub(crate) mod node;
/// pip for Python 3.
pub(crate) mod pip;
/// PyCharm Community Edition.
pub(crate) mod pycharm;
/// Visual Studio Code and Settings Sync.
pub(crate) mod vscode;

/// Builds the recipe for `target`. Only the vscode recipe depends on the configuration.
pub fn recipe_for(target: Target, config: &Configuration) -> Recipe {
    match target {
        Target::Vscode => vscode::recipe(config),
        Target::Android => android::recipe(),
        Target::AndroidStudio => android::studio_recipe(),
        Target::Flutter => flutter::recipe(),
        Target::Node => node::recipe(),
        Target::Anaconda => conda::anaconda_recipe(),
        Target::Miniconda => conda::miniconda_recipe(),
        Target::Pip => pip::recipe(),
        Target::Pycharm => pycharm::recipe(),
        Target::Chromeos => chromeos::recipe(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::tokenizer::tokenize;
    use chrono::NaiveDate;

    #[test]
    fn every_recipe_matches_its_target() {
        let config = Configuration::default();
        for target in Target::ALL {
            let recipe = recipe_for(target, &config);
            assert_eq!(recipe.target, target);
            assert!(!recipe.steps.is_empty(), "{target} has no steps");
            assert!(!recipe.source_url.is_empty());
            NaiveDate::parse_from_str(recipe.info_updated, "%Y-%m-%d").unwrap();
        }
    }

    #[test]
    fn prefix_writers_are_recognized() {
        let config = Configuration::default();
        let writers: Vec<Target> = Target::ALL
            .into_iter()
            .filter(|&t| recipe_for(t, &config).uses_prefix())
            .collect();
        assert_eq!(
            writers,
            vec![
                Target::Android,
                Target::AndroidStudio,
                Target::Flutter,
                Target::Anaconda,
                Target::Miniconda,
                Target::Pycharm
            ]
        );
    }

    #[test]
    fn every_command_template_tokenizes() {
        let config = Configuration::default();
        for target in Target::ALL {
            for command in recipe_for(target, &config).commands() {
                assert!(!tokenize(command).unwrap().is_empty(), "{command}");
            }
        }
    }
}
