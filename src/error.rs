//! Error types for the speller library.
//!
//! All fallible operations return [`Result`], whose error type is
//! [`SpellerError`]. Correcting a word never fails: an unknown word is echoed
//! back unchanged. Errors come from the I/O layer (corpus and fixture files),
//! from configuration validation, and from querying probabilities against an
//! empty model.
//!
//! # Examples
//!
//! ```
//! use speller::error::{Result, SpellerError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpellerError::invalid_config("max_distance must be 1 or 2"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for speller operations.
#[derive(Error, Debug)]
pub enum SpellerError {
    /// I/O errors (corpus files, fixture files, frequency files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Analysis-related errors (tokenizer construction)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A probability was requested from a model with zero total mass.
    #[error("Empty model: probability is undefined when the total count is zero")]
    EmptyModel,

    /// A malformed record in a test-set fixture. Bad frequency-file lines are
    /// skipped with a warning instead.
    #[error("Fixture error at line {line}: {message}")]
    Fixture { line: usize, message: String },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An error wrapped with context about what was being done, such as the
    /// file being loaded. Displays the whole context chain.
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SpellerError.
pub type Result<T> = std::result::Result<T, SpellerError>;

impl SpellerError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SpellerError::Analysis(msg.into())
    }

    /// Create a new fixture error for a 1-based line number.
    pub fn fixture<S: Into<String>>(line: usize, msg: S) -> Self {
        SpellerError::Fixture {
            line,
            message: msg.into(),
        }
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SpellerError::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SpellerError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = SpellerError::fixture(3, "missing ': ' separator");
        assert_eq!(
            error.to_string(),
            "Fixture error at line 3: missing ': ' separator"
        );

        let error = SpellerError::invalid_config("max_distance must be 1 or 2");
        assert_eq!(
            error.to_string(),
            "Invalid configuration: max_distance must be 1 or 2"
        );
    }

    #[test]
    fn test_context_chain_display() {
        use anyhow::Context;

        let result: Result<()> = Err(SpellerError::fixture(2, "bad record"));
        let error = SpellerError::from(result.context("cannot load test set a.txt").unwrap_err());
        assert_eq!(
            error.to_string(),
            "cannot load test set a.txt: Fixture error at line 2: bad record"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let speller_error = SpellerError::from(io_error);

        match speller_error {
            SpellerError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
