//! CLI error types.

use buoy_core::BuoyError;
use thiserror::Error;

/// Error raised by a CLI command.
#[derive(Error, Debug)]
pub enum CliError {
    /// The estimator rejected its parameters or broke an invariant.
    #[error(transparent)]
    Estimator(#[from] BuoyError),

    /// A command-line argument could not be used.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing results failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
