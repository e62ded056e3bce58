// Data types shared across the application.

// Immutable run configuration.
pub mod configuration;
// Error type returned by every fallible operation.
pub mod errors;
// Recipes, steps and probes.
pub mod recipe;
// The set of installable targets.
pub mod targets;
