//! Error types for inkdown
//!
//! Conversion itself never fails; these cover the I/O and configuration
//! work done around it.

use thiserror::Error;

/// Main error type for inkdown operations
#[derive(Error, Debug)]
pub enum InkdownError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for inkdown operations
pub type Result<T> = std::result::Result<T, InkdownError>;
