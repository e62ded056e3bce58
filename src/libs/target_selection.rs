// Turns the requested target set into the ordered list of targets to install.

use crate::log_debug;
use crate::schemas::configuration::Configuration;
use crate::schemas::targets::Target;
use colored::Colorize;
use std::collections::BTreeSet;

/// Adds implied targets (e.g. `flutter` pulls in `android`) and returns the
/// result in install order. Each target appears at most once.
pub fn plan(config: &Configuration) -> Vec<Target> {
    let mut selected: BTreeSet<Target> = config.targets.clone();
    let mut pending: Vec<Target> = selected.iter().copied().collect();

    while let Some(target) = pending.pop() {
        for &implied in target.implies() {
            if selected.insert(implied) {
                log_debug!(
                    "[Selection] '{}' implies '{}'",
                    target.name().cyan(),
                    implied.name().cyan()
                );
                pending.push(implied);
            }
        }
    }

    selected.into_iter().collect()
}
