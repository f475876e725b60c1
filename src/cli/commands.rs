//! CLI command implementations
//!
//! Commands are thin: configuration loading and store seeding happen here,
//! everything request-shaped lives in the HTTP server module.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::store::{seed, MovieStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    init_tracing();
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Dump { genre } => dump(genre.as_deref()),
    }
}

/// Start the HTTP server
///
/// 1. Load configuration (file if given, defaults otherwise)
/// 2. Seed the store from the embedded dataset
/// 3. Run the Axum server on the configured address
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }

    let movies = seed::load()
        .map_err(|e| CliError::boot_failed(format!("Seed dataset invalid: {}", e)))?;
    info!(count = movies.len(), "seed dataset loaded");

    let server = HttpServer::with_config(config, MovieStore::from_movies(movies));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Print the seed catalog as JSON and exit
///
/// One-shot inspection of the dataset the server would boot with.
pub fn dump(genre: Option<&str>) -> CliResult<()> {
    let store = MovieStore::seeded()
        .map_err(|e| CliError::boot_failed(format!("Seed dataset invalid: {}", e)))?;
    let movies = store
        .list(genre)
        .map_err(|e| CliError::boot_failed(e.to_string()))?;

    let json = serde_json::to_string_pretty(&movies)
        .map_err(|e| CliError::boot_failed(format!("Failed to encode catalog: {}", e)))?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json)?;

    Ok(())
}

/// Load server configuration from a JSON file, or fall back to defaults when
/// no file is given. Missing fields in the file take their defaults too.
fn load_config(path: Option<&Path>) -> CliResult<HttpServerConfig> {
    match path {
        None => Ok(HttpServerConfig::default()),
        Some(path) => {
            let content = fs::read_to_string(path)
                .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

            let config: HttpServerConfig = serde_json::from_str(&content)
                .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

            Ok(config)
        }
    }
}

/// Install the global tracing subscriber. `RUST_LOG` controls the filter,
/// defaulting to `info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
