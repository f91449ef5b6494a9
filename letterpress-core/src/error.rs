//! Error types for editor operations.

use thiserror::Error;

use crate::BlockId;

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

/// Errors that can occur in editor operations.
///
/// All of these are local to one call. None of them invalidates the
/// editing session.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The referenced block is not in the document.
    #[error("Block not found: {0}")]
    BlockNotFound(BlockId),

    /// A reorder index fell outside the document.
    #[error("Index {index} out of range for document of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the sequence the index was checked against.
        len: usize,
    },

    /// Two blocks in one document share an ID.
    #[error("Duplicate block id: {0}")]
    DuplicateId(BlockId),

    /// A variant tag outside the closed block set.
    #[error("Unknown block variant: {0}")]
    UnknownVariant(String),

    /// Document serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Persistence I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}
