// Core building blocks: tokenizing and dispatching commands, rendering
// templates, selecting targets and running recipes.

// Spawns tokenized commands.
pub mod dispatcher;
// Executes recipes with check-then-act semantics.
pub mod recipe_runner;
// Expands and orders the requested targets.
pub mod target_selection;
// `${var}` substitution for recipe templates.
pub mod template;
// Command-line tokenizer honoring quoted segments.
pub mod tokenizer;
pub mod utilities;
