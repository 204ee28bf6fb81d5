//! Error types for shadow-content

use crate::verify::VerifyError;

/// Result type for shadow-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in shadow-content operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid marker prefix {prefix:?}: a marker must be non-blank with no surrounding whitespace")]
    InvalidMarker { prefix: String },

    /// The propagated output failed self-verification.
    ///
    /// This is an internal consistency failure, never a user error.
    #[error(transparent)]
    Verification(#[from] VerifyError),
}

impl Error {
    /// Returns true if this error came from the output verifier.
    pub fn is_verification(&self) -> bool {
        matches!(self, Self::Verification(_))
    }
}
