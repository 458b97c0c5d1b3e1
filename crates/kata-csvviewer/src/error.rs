//! Error types for the CSV viewer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while paging or rendering a source file.
#[derive(Debug, Error)]
pub enum ViewerError {
    // === File System Errors ===
    /// Source file could not be opened or read.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source file has no header line.
    #[error("source file is empty: {path}")]
    EmptySource { path: PathBuf },

    // === Paging Errors ===
    /// Requested page lies outside `1..=page_count`.
    #[error("page {page} out of range (source has {page_count} pages)")]
    PageOutOfRange { page: usize, page_count: usize },

    // === Terminal Errors ===
    /// Navigation input ended before exit was selected.
    #[error("input closed before exit was selected")]
    InputClosed,

    /// Reading a navigation command failed.
    #[error("failed to read input: {source}")]
    Input {
        #[source]
        source: std::io::Error,
    },

    /// Writing a rendered page failed.
    #[error("failed to write output: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },
}

/// Result type for viewer operations.
pub type Result<T> = std::result::Result<T, ViewerError>;
