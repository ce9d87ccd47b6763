//! # Domain Types
//!
//! Core domain types used throughout metrix.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    Category     │   │    UnitInfo     │   │  ConversionResult   │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  Length         │   │  code  ("km")   │   │  to_unit            │   │
//! │  │  Weight         │   │  name           │   │  value              │   │
//! │  │  Temperature    │   └─────────────────┘   └─────────────────────┘   │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  Wire payloads (unvalidated)        Outcome                             │
//! │  ┌─────────────────────┐            ┌─────────────────────────────┐    │
//! │  │ ConvertPayload      │            │ BatchConversionOutcome      │    │
//! │  │ BatchConvertPayload │            │ results + failed_units      │    │
//! │  └─────────────────────┘            └─────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Payloads are what the browser sends. They become
//! [`ConversionRequest`](crate::validation::ConversionRequest) and
//! [`BatchConversionRequest`](crate::validation::BatchConversionRequest)
//! only after passing through [`crate::validation`].

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Category
// =============================================================================

/// One of the three independent conversion domains.
///
/// Category names are case-sensitive ASCII tokens on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Base unit: meters.
    Length,
    /// Base unit: grams.
    Weight,
    /// Affine scales pivoting through Celsius.
    Temperature,
}

impl Category {
    /// All categories in definition order.
    pub const ALL: [Category; 3] = [Category::Length, Category::Weight, Category::Temperature];

    /// Wire name of the category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
        }
    }

    /// Looks up a category by its exact wire name.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == name)
    }

    /// Wire names of every category, sorted and comma-joined.
    pub fn valid_names() -> String {
        let mut names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        names.sort_unstable();
        names.join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Unit Info
// =============================================================================

/// A unit code and its display name, as shown in the unit dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnitInfo {
    /// Unit code, unique within its category (`"km"`, `"celsius"`).
    pub code: String,
    /// Localized display name.
    pub name: String,
}

// =============================================================================
// Batch Results
// =============================================================================

/// One successful target of a batch conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConversionResult {
    pub to_unit: String,
    pub value: f64,
}

/// Everything a batch conversion produced.
///
/// `results` is ordered by descending unit magnitude; `failed_units`
/// keeps the order the targets were attempted in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BatchConversionOutcome {
    pub original_value: f64,
    pub from_unit: String,
    pub category: Category,
    pub results: Vec<ConversionResult>,
    pub failed_units: Vec<String>,
}

impl BatchConversionOutcome {
    /// True when at least one target could not be converted.
    pub fn has_failures(&self) -> bool {
        !self.failed_units.is_empty()
    }
}

// =============================================================================
// Wire Payloads
// =============================================================================

/// Body of `POST /api/convert` as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConvertPayload {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub category: String,
}

/// Body of `POST /api/convert/batch` as received.
///
/// When `to_units` is omitted every other unit of the category is targeted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BatchConvertPayload {
    pub value: f64,
    pub from_unit: String,
    pub category: String,
    #[ts(optional)]
    pub to_units: Option<Vec<String>>,
}

// =============================================================================
// Unit Tests
// =============================================================================
