//! Renderer error types.

use thiserror::Error;

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur during rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A stored block carries a variant tag the renderer has no rule for.
    #[error("Unknown block variant: {0:?}")]
    UnknownVariant(String),

    /// A block failed to parse for another reason.
    #[error("Invalid block: {0}")]
    InvalidBlock(String),

    /// The serialized document could not be parsed at all.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
