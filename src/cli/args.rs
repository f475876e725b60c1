//! CLI argument definitions using clap
//!
//! Commands:
//! - cinedex serve [--config <path>] [--port <port>]
//! - cinedex dump [--genre <name>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cinedex - An in-memory movie catalog served over REST
#[derive(Parser, Debug)]
#[command(name = "cinedex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to bind, overriding the configuration file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the seed catalog as JSON and exit
    Dump {
        /// Keep only movies carrying this genre (case-insensitive)
        #[arg(long)]
        genre: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
