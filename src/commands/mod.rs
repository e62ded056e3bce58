// Top-level flows invoked from `main`.

// Prints the table of known targets.
pub mod list;
// Plans and installs the requested targets.
pub mod setup;
