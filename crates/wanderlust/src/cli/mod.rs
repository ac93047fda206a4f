//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the wanderlust binary.

mod commands;
mod explore;
mod generate;
mod parse;

pub use commands::{Cli, Commands, OutputFormat};
pub use explore::explore;
pub use generate::{generate_activity, generate_challenge, generate_quest};
pub use parse::parse_file;
