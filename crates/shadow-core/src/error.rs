//! Error types for shadow-core

use std::path::PathBuf;

/// Result type for shadow-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in shadow-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The public file has no private twin to pull into
    #[error("No private file for {public} (expected {private})")]
    PrivateFileMissing { public: PathBuf, private: PathBuf },

    /// The path is not a private file of the configured layout
    #[error("{path} is not inside a shadow directory")]
    NotShadowed { path: PathBuf },

    /// Line numbers are 1-based
    #[error("Line {line} is out of range for {path} ({lines} lines)")]
    LineOutOfRange {
        path: PathBuf,
        line: usize,
        lines: usize,
    },

    /// Filesystem error from shadow-fs
    #[error(transparent)]
    Fs(#[from] shadow_fs::Error),

    /// Propagation or marker error from shadow-content
    #[error(transparent)]
    Content(#[from] shadow_content::Error),
}

impl Error {
    /// True if this is an internal verification failure rather than a
    /// problem with the inputs.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Content(e) if e.is_verification())
    }
}
