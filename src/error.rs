//! Error types for the organizer library.
//!
//! This module defines all error types that can occur while loading,
//! organizing, and writing work-order documents.

/// Result type alias for organizer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document organizing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required section marker was not found in the fragment sequence
    #[error("Section marker not found: '{0}'")]
    SectionNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid glob pattern while discovering input documents
    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}
