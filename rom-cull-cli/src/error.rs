use thiserror::Error;

use rom_cull_lib::{CullError, ParseError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Scan, parse, or delete failure from the cull library
    #[error("{0}")]
    Cull(#[from] CullError),

    /// Invalid region preference
    #[error("{0}")]
    Preferences(#[from] ParseError),

    /// Logger could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
