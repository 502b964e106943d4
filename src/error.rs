//! Error types for scidoc library.

use thiserror::Error;

/// Result type alias for scidoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or rendering documents.
///
/// Absent or empty inputs never show up here: the builder substitutes
/// defaults for them. Errors come from the injected collaborators or from
/// rendering a document that lacks a required container.
#[derive(Error, Debug)]
pub enum Error {
    /// The sentence segmentation collaborator failed.
    #[error("Sentence segmentation error: {0}")]
    Segmentation(String),

    /// The content digest collaborator failed.
    #[error("Digest error: {0}")]
    Digest(String),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A container required for traversal has never been created.
    #[error("Missing document node: {0}")]
    MissingNode(&'static str),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
