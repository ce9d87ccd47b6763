//! # Conversion Routes
//!
//! Single and batch conversion endpoints.
//!
//! ## Request Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /api/convert                POST /api/convert/batch               │
//! │        │                                  │                             │
//! │        ▼                                  ▼                             │
//! │  Json<ConvertPayload>             Json<BatchConvertPayload>             │
//! │        │   (JsonRejection → 4xx envelope)  │                            │
//! │        ▼                                  ▼                             │
//! │  ConversionRequest::try_from      BatchConversionRequest::try_from      │
//! │        │                           + limit_targets(max_batch_targets)   │
//! │        ▼                                  ▼                             │
//! │  request.execute()                request.execute()                     │
//! │        │                                  │                             │
//! │        ▼                                  ▼                             │
//! │  ConvertResponse                  BatchConvertResponse                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use metrix_core::{
    BatchConversionOutcome, BatchConversionRequest, BatchConvertPayload, Category,
    ConversionRequest, ConvertPayload,
};

use crate::error::ApiError;
use crate::AppState;

/// Successful single conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub success: bool,
    pub result: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub original_value: f64,
    pub category: Category,
}

/// Successful batch conversion, including any per-unit failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConvertResponse {
    pub success: bool,
    #[serde(flatten)]
    pub outcome: BatchConversionOutcome,
}

/// `POST /api/convert`
pub async fn convert_handler(
    payload: Result<Json<ConvertPayload>, JsonRejection>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let Json(payload) = payload?;
    let request = ConversionRequest::try_from(payload)?;
    debug!(
        value = request.value,
        from = %request.from_unit,
        to = %request.to_unit,
        category = %request.category,
        "convert"
    );

    let result = request.execute()?;

    Ok(Json(ConvertResponse {
        success: true,
        result,
        from_unit: request.from_unit,
        to_unit: request.to_unit,
        original_value: request.value,
        category: request.category,
    }))
}

/// `POST /api/convert/batch`
///
/// Unconvertible targets are reported in `failed_units` with a 200 status;
/// only a bad category or source unit fails the whole request.
pub async fn batch_convert_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BatchConvertPayload>, JsonRejection>,
) -> Result<Json<BatchConvertResponse>, ApiError> {
    let Json(payload) = payload?;
    let request = BatchConversionRequest::try_from(payload)?
        .limit_targets(state.config.max_batch_targets)?;
    debug!(
        value = request.value,
        from = %request.from_unit,
        category = %request.category,
        targets = ?request.to_units,
        "batch_convert"
    );

    let outcome = request.execute()?;
    if outcome.has_failures() {
        info!(
            from = %outcome.from_unit,
            failed = ?outcome.failed_units,
            "Batch conversion finished with failed units"
        );
    }

    Ok(Json(BatchConvertResponse {
        success: true,
        outcome,
    }))
}

// =============================================================================
// Unit Tests
// =============================================================================
