// Static help text shown by `--help`.
pub mod targets_help;
