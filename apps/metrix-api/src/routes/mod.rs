//! # Routes
//!
//! HTTP handlers, grouped by concern.
//!
//! ## Route Map
//! | Route | Handler | File |
//! |-------|---------|------|
//! | `GET /health` | `health_handler` | health.rs |
//! | `GET /api/categories` | `list_categories_handler` | units.rs |
//! | `GET /api/units/{category}` | `list_units_handler` | units.rs |
//! | `POST /api/convert` | `convert_handler` | convert.rs |
//! | `POST /api/convert/batch` | `batch_convert_handler` | convert.rs |

pub mod convert;
pub mod health;
pub mod units;

use std::sync::Arc;

use axum::http::Uri;
use axum::routing::{get, post};
use axum::Router;

use crate::error::ApiError;
use crate::AppState;

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/categories", get(units::list_categories_handler))
        .route("/api/units/{category}", get(units::list_units_handler))
        .route("/api/convert", post(convert::convert_handler))
        .route("/api/convert/batch", post(convert::batch_convert_handler))
        .fallback(not_found_handler)
        .with_state(state)
}

async fn not_found_handler(uri: Uri) -> ApiError {
    ApiError::route_not_found(uri.path())
}

// =============================================================================
// Unit Tests
// =============================================================================
