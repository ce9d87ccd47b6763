//! # Category Dispatcher
//!
//! Maps a category name to its registry and conversion function. The
//! table below is the single place that decides which categories exist.
//!
//! ## Lookup Paths
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "length" ──┐                                                           │
//! │  "weight" ──┼──► CATEGORY_TABLE ──► CategoryEntry                       │
//! │  "temp…"  ──┘         │              ├── registry  (units, names)       │
//! │                       │              └── convert   (ConvertFn)          │
//! │                       │                                                 │
//! │  unknown name ────────┴──► convert / batch  → InvalidCategory   (400)   │
//! │                            list units       → CategoryNotFound  (404)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::LazyLock;

use crate::convert::{convert_length, convert_temperature, convert_weight, ConvertFn};
use crate::error::{ConversionError, CoreResult};
use crate::registry::{UnitRegistry, LENGTH, TEMPERATURE, WEIGHT};
use crate::types::{Category, UnitInfo};

// =============================================================================
// Category Table
// =============================================================================

/// Everything the engine needs to know about one category.
pub struct CategoryEntry {
    pub category: Category,
    registry: &'static LazyLock<UnitRegistry>,
    pub convert: ConvertFn,
}

impl CategoryEntry {
    pub fn registry(&self) -> &'static UnitRegistry {
        LazyLock::force(self.registry)
    }
}

/// Indexed by `Category as usize`; keep in declaration order.
static CATEGORY_TABLE: [CategoryEntry; 3] = [
    CategoryEntry {
        category: Category::Length,
        registry: &LENGTH,
        convert: convert_length,
    },
    CategoryEntry {
        category: Category::Weight,
        registry: &WEIGHT,
        convert: convert_weight,
    },
    CategoryEntry {
        category: Category::Temperature,
        registry: &TEMPERATURE,
        convert: convert_temperature,
    },
];

fn lookup(name: &str) -> Option<&'static CategoryEntry> {
    CATEGORY_TABLE
        .iter()
        .find(|entry| entry.category.as_str() == name)
}

/// Resolves a category for a convert or batch operation.
pub fn resolve_category(name: &str) -> CoreResult<Category> {
    lookup(name)
        .map(|entry| entry.category)
        .ok_or_else(|| ConversionError::InvalidCategory(name.to_string()))
}

/// Resolves a category for the unit-listing operation.
pub fn resolve_listing_category(name: &str) -> CoreResult<Category> {
    lookup(name)
        .map(|entry| entry.category)
        .ok_or_else(|| ConversionError::CategoryNotFound(name.to_string()))
}

impl Category {
    /// Dispatcher entry of this category.
    pub fn entry(self) -> &'static CategoryEntry {
        &CATEGORY_TABLE[self as usize]
    }

    pub fn registry(self) -> &'static UnitRegistry {
        self.entry().registry()
    }

    /// Converts `value` between two units of this category.
    pub fn convert(self, value: f64, from_unit: &str, to_unit: &str) -> CoreResult<f64> {
        (self.entry().convert)(value, from_unit, to_unit)
    }

    /// Unit codes in registry definition order.
    pub fn list_units(self) -> Vec<&'static str> {
        self.registry().codes()
    }

    /// Unit codes with display names, in registry definition order.
    pub fn unit_info(self) -> Vec<UnitInfo> {
        self.registry().unit_info()
    }
}

// =============================================================================
// Operations
// =============================================================================

/// Converts `value` from one unit to another within a named category.
///
/// ## Example
/// ```rust
/// use metrix_core::convert;
///
/// assert_eq!(convert(100.0, "m", "km", "length").unwrap(), 0.1);
/// assert!(convert(1.0, "m", "km", "volume").is_err());
/// ```
pub fn convert(value: f64, from_unit: &str, to_unit: &str, category: &str) -> CoreResult<f64> {
    resolve_category(category)?.convert(value, from_unit, to_unit)
}

/// Lists the units of a named category with their display names.
pub fn list_units(category: &str) -> CoreResult<Vec<UnitInfo>> {
    Ok(resolve_listing_category(category)?.unit_info())
}

// =============================================================================
// Unit Tests
// =============================================================================
