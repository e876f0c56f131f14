//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Build sample rose trees and print them
#[derive(Parser, Debug)]
#[command(name = "yatree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the sample expression trees
    Demo {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::All)]
        format: Format,
    },

    /// Walk the sample tree with a cursor, printing each position
    Paths,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Pre-order values, space separated
    Prefix,
    /// Parenthesized arithmetic notation
    Infix,
    /// Box-drawing tree
    Tree,
    /// All of the above
    All,
}
