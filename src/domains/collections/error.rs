//! Collection domain errors.

use thiserror::Error;

use crate::core::store::StoreError;
use crate::domains::collections::validate::FieldError;

/// Errors raised while operating on a resource collection.
#[derive(Error, Debug)]
pub enum CollectionError {
    /// A submitted resource failed a field validation rule.
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// No document with the requested id exists in the collection.
    #[error("{kind} with id '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    /// A stored document could not be converted to the resource type.
    #[error("Document codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// The underlying document store failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl CollectionError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}

impl From<FieldError> for CollectionError {
    fn from(err: FieldError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}
