//! Command handlers.
//!
//! Each submodule implements exactly one subcommand.  Handlers translate CLI
//! arguments into core calls and render the results; no resolution logic
//! lives here.

pub mod check;
pub mod completions;
pub mod generate;
