//! Store error types.

use thiserror::Error;

/// Errors that can occur during document store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database driver reported a failure (unreachable server,
    /// timed out selection, rejected operation).
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// A document could not be encoded into the store's native format.
    #[error("Document encoding error: {0}")]
    Encode(#[from] mongodb::bson::ser::Error),

    /// A stored document could not be decoded back into JSON.
    #[error("Document decoding error: {0}")]
    Decode(#[from] serde_json::Error),
}
