use std::path::PathBuf;

use rom_cull_core::ParseError;
use thiserror::Error;

/// Errors that abort a cull run.
#[derive(Debug, Error)]
pub enum CullError {
    /// A filename could not be interpreted
    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// Size query, deletion or cache file I/O failed
    #[error("{}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file name that is not valid UTF-8 cannot be tagged or cached
    #[error("{}: file name is not valid UTF-8, rename it", path.display())]
    NonUtf8Name { path: PathBuf },

    /// Directory traversal failed
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Settings file could not be read or parsed
    #[error("Settings error: {0}")]
    Settings(String),
}

impl CullError {
    pub fn parse(path: impl Into<PathBuf>, source: ParseError) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    pub fn non_utf8_name(path: impl Into<PathBuf>) -> Self {
        Self::NonUtf8Name { path: path.into() }
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}
