//! # metrix API
//!
//! HTTP server for unit conversion.
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         metrix API Routes                               │
//! │                                                                         │
//! │  GET  /health                  → { "status": "healthy" }                │
//! │  GET  /api/categories          → known categories                       │
//! │  GET  /api/units/{category}    → units of a category (code + name)      │
//! │  POST /api/convert             → single conversion                      │
//! │  POST /api/convert/batch       → one value into many units              │
//! │                                                                         │
//! │  Success: { "success": true, ...payload }                               │
//! │  Failure: { "success": false, "error": "...", "code": "..." }           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `METRIX_BIND_ADDR` - Bind address (default: 0.0.0.0)
//! - `METRIX_PORT` - HTTP port (default: 8000)
//! - `METRIX_LOG_LEVEL` - Log level when `RUST_LOG` is unset (default: info)
//! - `METRIX_MAX_BATCH_TARGETS` - Longest accepted `to_units` list (default: 64)

pub mod config;
pub mod error;
pub mod routes;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;
pub use routes::router;

/// Shared application state.
///
/// Immutable after startup; unit registries live in `metrix-core` statics.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        AppState { config }
    }
}
