//! Error types for Caldras core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use thiserror::Error;

/// Result type alias for Caldras operations.
pub type Result<T> = std::result::Result<T, CaldrasError>;

/// Core error type for Caldras operations.
#[derive(Debug, Error)]
pub enum CaldrasError {
    /// Note index outside the vault
    #[error("No note at index {index} (vault holds {len})")]
    Index { index: usize, len: usize },

    /// Missing or mismatched password for a protected note
    #[error("Wrong password")]
    WrongPassword,

    /// Ciphertext failed authentication (wrong key, tampered or truncated)
    #[error("Ciphertext failed authentication")]
    Authentication,

    /// Vault file could not be written (or read, where that is surfaced)
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Cryptographic primitive failure other than authentication
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for CaldrasError {
    fn from(err: std::io::Error) -> Self {
        CaldrasError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for CaldrasError {
    fn from(err: serde_json::Error) -> Self {
        CaldrasError::Persistence(err.to_string())
    }
}
