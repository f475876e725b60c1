//! CLI module for cinedex
//!
//! Provides command-line interface for:
//! - serve: Seed the catalog and serve it over HTTP
//! - dump: Print the seed catalog and exit

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{dump, run, run_command, serve};
pub use errors::{CliError, CliResult};
