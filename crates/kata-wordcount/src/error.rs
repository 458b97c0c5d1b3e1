//! Error types for word counting.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading input or writing reports.
#[derive(Debug, Error)]
pub enum WordCountError {
    /// Text, dictionary or stop-word file could not be read.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading interactive input failed.
    #[error("failed to read input: {source}")]
    Input {
        #[source]
        source: std::io::Error,
    },

    /// Writing a report failed.
    #[error("failed to write output: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },

    /// Encoding the JSON summary failed.
    #[error("failed to encode summary: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for word-count operations.
pub type Result<T> = std::result::Result<T, WordCountError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WordCountError::FileRead {
            path: PathBuf::from("/words/dictionary.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read file /words/dictionary.txt: not found"
        );
    }
}
