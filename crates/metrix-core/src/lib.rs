//! # metrix-core: Pure Conversion Logic for metrix
//!
//! This crate is the **heart** of metrix. It converts numeric values between
//! units of three independent categories (length, weight, temperature) as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        metrix Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Browser client                               │   │
//! │  │    Category ──► Unit dropdowns ──► Convert / Convert all        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON over HTTP                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    metrix-api (axum)                            │   │
//! │  │    /api/units/{category}, /api/convert, /api/convert/batch      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ metrix-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌─────────┐ ┌──────────┐ ┌──────────┐ ┌───────┐ │   │
//! │  │   │validation│►│dispatch │►│ convert  │◄│ registry │ │ batch │ │   │
//! │  │   └──────────┘ └─────────┘ └──────────┘ └──────────┘ └───────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO SHARED MUTABLE STATE                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Category, unit info, batch outcome, wire payloads
//! - [`registry`] - Immutable per-category unit tables
//! - [`convert`] - Length, weight and temperature conversion functions
//! - [`dispatch`] - Category name → registry + conversion function
//! - [`validation`] - Request validation before dispatch
//! - [`batch`] - Multi-target conversion with partial failure
//! - [`error`] - Error taxonomy
//!
//! ## Example Usage
//!
//! ```rust
//! use metrix_core::{batch_convert, convert, list_units};
//!
//! assert_eq!(convert(100.0, "m", "km", "length").unwrap(), 0.1);
//!
//! let units = list_units("temperature").unwrap();
//! assert_eq!(units[0].code, "celsius");
//!
//! let outcome = batch_convert(1.0, "m", "length", None).unwrap();
//! assert_eq!(outcome.results[0].to_unit, "mi");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod batch;
pub mod convert;
pub mod dispatch;
pub mod error;
pub mod registry;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use batch::{batch_convert, TEMPERATURE_SORT_ORDER};
pub use dispatch::{convert, list_units};
pub use error::{ConversionError, CoreResult, ValidationError, ValidationResult};
pub use types::*;
pub use validation::{BatchConversionRequest, ConversionRequest};
