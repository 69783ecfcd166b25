//! Error types and handling for the game data server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and external dependencies, providing consistent error handling
//! across the entire application.

use thiserror::Error;

/// A specialized Result type for game data server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the game data server.
///
/// This enum captures all possible error conditions that can occur during
/// server operation, including domain-specific errors and external failures.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the collections domain.
    #[error("Collection error: {0}")]
    Collection(#[from] crate::domains::collections::CollectionError),

    /// Error originating from the document store.
    #[error("Store error: {0}")]
    Store(#[from] crate::core::store::StoreError),

    /// Error originating from the HTTP listener.
    #[error("HTTP error: {0}")]
    Http(#[from] crate::core::http::HttpError),
}
