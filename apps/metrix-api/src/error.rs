//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in metrix                                 │
//! │                                                                         │
//! │  Browser                     Rust Backend                               │
//! │  ───────                     ────────────                               │
//! │                                                                         │
//! │  fetch('/api/convert')                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler: Result<Json<T>, ApiError>                              │  │
//! │  │         │                                                        │  │
//! │  │  Bad JSON? ────── JsonRejection ──────────────────┐              │  │
//! │  │         │                                         │              │  │
//! │  │  Validation? ──── ValidationError ────────────────┤              │  │
//! │  │         │                                         ▼              │  │
//! │  │  Lookup? ──────── ConversionError ─────────── ApiError ─────────►│  │
//! │  │         │                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "success": false, "error": "Invalid unit: xyz",                     │
//! │    "code": "INVALID_UNIT" }                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use metrix_core::{ConversionError, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Message returned for every unexpected fault.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// API error returned from handlers.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status of the response
    pub status: StatusCode,

    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed (400)
    ValidationError,

    /// Unknown category on convert/batch (400)
    InvalidCategory,

    /// Unit not in the category's registry (400)
    InvalidUnit,

    /// Unknown category on unit listing (404)
    CategoryNotFound,

    /// Body could not be parsed (400/415/422)
    BadRequest,

    /// No route matched (404)
    NotFound,

    /// Internal server error (500)
    Internal,
}

/// Failure envelope as serialized.
///
/// ```json
/// { "success": false, "error": "Invalid unit: xyz", "code": "INVALID_UNIT" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    pub code: ErrorCode,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            status,
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error for an unmatched path.
    pub fn route_not_found(path: &str) -> Self {
        ApiError::new(
            StatusCode::NOT_FOUND,
            ErrorCode::NotFound,
            format!("Not found: {}", path),
        )
    }

    /// Creates an internal error.
    ///
    /// The cause is logged; the caller only ever sees a generic message.
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        error!(%cause, "Internal error");
        ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::Internal,
            INTERNAL_ERROR_MESSAGE,
        )
    }
}

/// Converts core errors to API errors.
impl From<ConversionError> for ApiError {
    fn from(err: ConversionError) -> Self {
        let code = match &err {
            ConversionError::Validation(_) => ErrorCode::ValidationError,
            ConversionError::InvalidCategory(_) => ErrorCode::InvalidCategory,
            ConversionError::InvalidUnit(_) => ErrorCode::InvalidUnit,
            ConversionError::CategoryNotFound(_) => ErrorCode::CategoryNotFound,
        };

        match StatusCode::from_u16(err.status_code()) {
            Ok(status) => ApiError::new(status, code, err.to_string()),
            Err(e) => ApiError::internal(e),
        }
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ConversionError::from(err).into()
    }
}

/// Converts body extraction failures to API errors.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(rejection.status(), ErrorCode::BadRequest, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_client_error() {
            warn!(
                status = self.status.as_u16(),
                code = ?self.code,
                message = %self.message,
                "Request failed"
            );
        }

        let body = ErrorBody {
            success: false,
            error: self.message,
            code: self.code,
        };
        (self.status, Json(body)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(response: Response) -> ErrorBody {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_mapping() {
        let err = ApiError::from(ConversionError::InvalidUnit("xyz".into()));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, ErrorCode::InvalidUnit);
        assert_eq!(err.message, "Invalid unit: xyz");

        let err = ApiError::from(ConversionError::InvalidCategory("volume".into()));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, ErrorCode::InvalidCategory);

        let err = ApiError::from(ConversionError::CategoryNotFound("volume".into()));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.code, ErrorCode::CategoryNotFound);
        assert_eq!(err.message, "Category not found: volume");

        let err = ApiError::from(ValidationError::NonFiniteValue);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Value must be a finite number");
    }

    #[test]
    fn test_error_code_wire_names() {
        let cases = [
            (ConversionError::from(ValidationError::EmptyUnit), "VALIDATION_ERROR"),
            (ConversionError::InvalidCategory("x".into()), "INVALID_CATEGORY"),
            (ConversionError::InvalidUnit("x".into()), "INVALID_UNIT"),
            (ConversionError::CategoryNotFound("x".into()), "CATEGORY_NOT_FOUND"),
        ];
        for (err, expected) in cases {
            let code = ApiError::from(err).code;
            assert_eq!(serde_json::to_value(code).unwrap(), expected);
        }
    }

    #[test]
    fn test_internal_hides_cause() {
        let err = ApiError::internal("registry poisoned at 0xdeadbeef");
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, INTERNAL_ERROR_MESSAGE);
        assert!(!err.to_string().contains("deadbeef"));
    }

    #[tokio::test]
    async fn test_envelope() {
        let response = ApiError::from(ConversionError::InvalidUnit("bogus".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_of(response).await;
        assert!(!body.success);
        assert_eq!(body.error, "Invalid unit: bogus");
        assert_eq!(body.code, ErrorCode::InvalidUnit);
    }

    #[tokio::test]
    async fn test_route_not_found_envelope() {
        let response = ApiError::route_not_found("/api/nope").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_of(response).await;
        assert_eq!(body.error, "Not found: /api/nope");
        assert_eq!(body.code, ErrorCode::NotFound);
    }
}
