//! CLI-specific error types
//!
//! All CLI errors are fatal: the process reports them and exits non-zero.

use thiserror::Error;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file unreadable or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server failed to boot or stopped unexpectedly
    #[error("Boot failed: {0}")]
    Boot(String),

    /// stdout or stderr write failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Boot failed
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::Boot(msg.into())
    }
}
