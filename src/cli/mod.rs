// Command-line surface of `setup-dev-machine`.
pub mod args;
