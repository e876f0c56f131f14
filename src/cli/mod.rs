//! CLI layer: argument parsing and command dispatch for the demo binary

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use args::{Cli, Commands, Format};
pub use error::{CliError, CliResult};
