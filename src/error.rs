//! Error types for lockout configuration.

use thiserror::Error;

/// Common error type for loading lockout configuration.
#[derive(Error, Debug)]
pub enum LockoutError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration was parsed but rejected by an explicit check.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Result type alias for lockout configuration operations.
pub type Result<T> = std::result::Result<T, LockoutError>;
