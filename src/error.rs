//! Error types for the Augur library.
//!
//! All errors are represented by the [`AugurError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use augur::error::{AugurError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(AugurError::unknown_engine("porter2"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Augur operations.
///
/// This enum represents all possible errors that can occur in the Augur library.
/// It uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for creating specific error types.
#[derive(Error, Debug)]
pub enum AugurError {
    /// I/O errors (training data files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (feature extraction, invalid patterns, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Requested feature-extraction strategy is not registered
    #[error("Unknown classification engine: {0}")]
    UnknownEngine(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with AugurError.
pub type Result<T> = std::result::Result<T, AugurError>;

impl AugurError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        AugurError::Analysis(msg.into())
    }

    /// Create a new unknown-engine error.
    pub fn unknown_engine<S: Into<String>>(name: S) -> Self {
        AugurError::UnknownEngine(name.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        AugurError::Other(msg.into())
    }
}
