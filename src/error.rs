//! Service error types with HTTP status code mapping.
//!
//! [`PlaceError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "place not found: 42",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges below).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status               |
/// |-----------|-----------------|---------------------------|
/// | 1000–1999 | Validation      | 400 Bad Request           |
/// | 2000–2999 | Not Found       | 404 Not Found             |
/// | 3000–3999 | Server/Database | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum PlaceError {
    /// Place with the given ID was not found.
    #[error("place not found: {0}")]
    NotFound(String),

    /// Request decoding or validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Database operation failed. The message is logged server-side and
    /// never included in the client response.
    #[error("database error: {0}")]
    Database(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PlaceError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::NotFound(_) => 2001,
            Self::Database(_) => 3001,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the message sent to the client.
    ///
    /// Database and internal errors carry driver/runtime detail that must
    /// not leak to clients; those collapse to a generic message here.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Database(_) => "database operation failed".to_string(),
            Self::Internal(_) => "internal error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<sqlx::Error> for PlaceError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl IntoResponse for PlaceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.client_message(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = PlaceError::NotFound("abc".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), 2001);
    }

    #[test]
    fn invalid_request_maps_to_400() {
        let err = PlaceError::InvalidRequest("bad json".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), 1001);
    }

    #[test]
    fn database_maps_to_500() {
        let err = PlaceError::Database("connection refused".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), 3001);
    }

    #[test]
    fn database_detail_does_not_reach_client() {
        let err = PlaceError::Database("password authentication failed".to_string());
        assert_eq!(err.client_message(), "database operation failed");
    }

    #[test]
    fn not_found_message_names_the_id() {
        let err = PlaceError::NotFound("42".to_string());
        assert_eq!(err.client_message(), "place not found: 42");
    }

    #[tokio::test]
    async fn into_response_carries_error_shape() {
        let err = PlaceError::NotFound("42".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await;
        let Ok(bytes) = bytes else {
            panic!("body read failed");
        };
        let json: serde_json::Value = match serde_json::from_slice(&bytes) {
            Ok(v) => v,
            Err(e) => panic!("invalid JSON body: {e}"),
        };
        assert_eq!(json["error"]["code"], 2001);
        assert_eq!(json["error"]["message"], "place not found: 42");
    }
}
