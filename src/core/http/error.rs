//! HTTP listener error types.

use thiserror::Error;

/// Result type for HTTP listener operations.
pub type HttpResult<T> = Result<T, HttpError>;

/// Errors that can occur while serving the REST API.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Failed to bind to address.
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop terminated abnormally.
    #[error("Serve error: {0}")]
    Serve(String),
}

impl HttpError {
    /// Create a bind error.
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }

    /// Create a serve error.
    pub fn serve(msg: impl Into<String>) -> Self {
        Self::Serve(msg.into())
    }
}
