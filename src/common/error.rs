//! Unified error types for Quince.
use thiserror::Error;

/// Main error type for Quince operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for Quince operations.
pub type Result<T> = std::result::Result<T, Error>;
