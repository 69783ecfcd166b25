//! HTTP response mapping for collection errors.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::{error, warn};

use crate::domains::collections::CollectionError;

/// Wrapper that maps [`CollectionError`] onto HTTP responses.
///
/// Validation failures answer 422 with the offending field, missing
/// documents answer 404, and store or codec failures answer 500.
pub struct ApiError(CollectionError);

impl From<CollectionError> for ApiError {
    fn from(err: CollectionError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            CollectionError::Validation { field, message } => {
                warn!("Validation failed for '{}': {}", field, message);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({
                        "error": "validation",
                        "field": field,
                        "message": message,
                    })),
                )
                    .into_response()
            }
            err @ CollectionError::NotFound { .. } => {
                warn!("{}", err);
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({
                        "error": "not_found",
                        "message": err.to_string(),
                    })),
                )
                    .into_response()
            }
            err => {
                error!("Request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "internal",
                        "message": err.to_string(),
                    })),
                )
                    .into_response()
            }
        }
    }
}
