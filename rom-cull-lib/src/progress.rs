/// Progress update sent while scanning, loading and deleting.
///
/// Frontends pass a callback receiving these to drive a spinner.
#[derive(Debug, Clone)]
pub enum CullProgress {
    /// A directory walk found another file
    Scanning {
        /// Files found so far
        found: usize,
    },

    /// Parsing the filename and size of one file
    Loading {
        file_name: String,
        index: usize,
        total: usize,
    },

    /// Removing one file
    Deleting { file_name: String },

    /// The current phase finished
    Done,
}

impl CullProgress {
    pub fn loading(file_name: impl Into<String>, index: usize, total: usize) -> Self {
        Self::Loading {
            file_name: file_name.into(),
            index,
            total,
        }
    }

    pub fn deleting(file_name: impl Into<String>) -> Self {
        Self::Deleting {
            file_name: file_name.into(),
        }
    }

    /// One-line description for status displays.
    pub fn message(&self) -> String {
        match self {
            Self::Scanning { found } => format!("Scanning... {found} files"),
            Self::Loading {
                file_name,
                index,
                total,
            } => format!("[{}/{}] {}", index + 1, total, file_name),
            Self::Deleting { file_name } => format!("Deleting {file_name}"),
            Self::Done => String::new(),
        }
    }
}

/// Callback that ignores all progress.
pub fn no_progress(_: CullProgress) {}
