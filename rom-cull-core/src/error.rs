use thiserror::Error;

/// Errors raised while interpreting ROM filenames and region preferences.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Parentheses or square brackets in the filename do not pair up
    #[error("Unmatched parentheses or square brackets in filename: {filename}")]
    MalformedFilename { filename: String },

    /// A region preference that is neither a known code nor a full region name
    #[error("Invalid region code '{0}' (codes are case sensitive)")]
    InvalidRegionCode(String),

    /// A disc/volume tag whose sequence value is neither numeric nor a single letter
    #[error("Unknown disc sequence in tag '{tag}', rename it to use numbers")]
    UnknownDiscSequence { tag: String },

    /// Scoring was attempted against a region table with no entries
    #[error("Region table is empty")]
    NoRegionMatch,
}

impl ParseError {
    pub fn malformed(filename: impl Into<String>) -> Self {
        Self::MalformedFilename {
            filename: filename.into(),
        }
    }

    pub fn invalid_region(token: impl Into<String>) -> Self {
        Self::InvalidRegionCode(token.into())
    }

    pub fn unknown_disc_sequence(tag: impl Into<String>) -> Self {
        Self::UnknownDiscSequence { tag: tag.into() }
    }
}
