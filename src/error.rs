use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, SimilarityError>;

/// Errors raised by the document source, the similarity matrix builder and
/// the matrix exporters.
/// The analytic pipeline itself never fails: empty documents and empty
/// corpora resolve to zero weights.
#[derive(Error, Debug)]
pub enum SimilarityError {
    /// Two documents share the same label under `CollisionPolicy::Strict`
    #[error("duplicate label `{label}`: `{first}` and `{second}`")]
    DuplicateLabel {
        label: String,
        first: String,
        second: String,
    },

    /// Source root does not exist or is not a directory
    #[error("source directory not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("JSON encode failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CBOR encode failed: {0}")]
    Cbor(#[from] serde_cbor::Error),
}
