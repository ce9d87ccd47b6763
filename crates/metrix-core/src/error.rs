//! # Error Types
//!
//! Domain-specific error types for metrix-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  metrix-core errors (this file)                                        │
//! │  ├── ConversionError  - The error taxonomy callers see                 │
//! │  │   ├── Validation          (400)                                     │
//! │  │   ├── InvalidCategory     (400)                                     │
//! │  │   ├── InvalidUnit         (400)                                     │
//! │  │   └── CategoryNotFound    (404)                                     │
//! │  └── ValidationError  - Field-level cause behind `Validation`          │
//! │                                                                         │
//! │  metrix-api errors (separate crate)                                    │
//! │  └── ApiError         - What the browser sees (JSON envelope)          │
//! │                                                                         │
//! │  Flow: ValidationError → ConversionError → ApiError → Browser          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Conversion functions return the offending unit code inside the error
//! value itself, so the boundary never has to inspect message text to
//! decide which kind of failure occurred.

use thiserror::Error;

// =============================================================================
// Conversion Error
// =============================================================================

/// Errors surfaced by every public conversion operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Malformed input that never reached a registry.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Unknown category on a convert or batch operation.
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Unit code not present in the resolved category's registry.
    ///
    /// ## When This Occurs
    /// - Typo in the unit code (`"kmm"`)
    /// - Unit from another category (`"m"` while converting weight)
    /// - Wrong case (`"KM"`); unit codes are case-sensitive
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    /// Unknown category on the unit-listing operation.
    ///
    /// Same condition as [`ConversionError::InvalidCategory`], but listing
    /// treats the category as a missing resource rather than a bad request.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
}

impl ConversionError {
    /// Nominal HTTP status class for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ConversionError::Validation(_)
            | ConversionError::InvalidCategory(_)
            | ConversionError::InvalidUnit(_) => 400,
            ConversionError::CategoryNotFound(_) => 404,
        }
    }

    /// The unit code carried by an [`ConversionError::InvalidUnit`].
    pub fn invalid_unit(&self) -> Option<&str> {
        match self {
            ConversionError::InvalidUnit(unit) => Some(unit),
            _ => None,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Apart from [`ValidationError::ResultOutOfRange`], these are raised before
/// any category or unit lookup, so a structurally invalid request never
/// reaches the conversion layer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value is NaN or infinite.
    #[error("Value must be a finite number")]
    NonFiniteValue,

    /// Converted value does not fit in a finite `f64`.
    #[error("Result is out of range")]
    ResultOutOfRange,

    /// Category is not one of the known names.
    #[error("Invalid category: {category}. Must be one of: {allowed}")]
    UnknownCategory { category: String, allowed: String },

    /// A `from_unit`/`to_unit` of a single conversion is blank.
    #[error("Unit cannot be empty")]
    EmptyUnit,

    /// A named field is blank after trimming.
    #[error("{field} cannot be empty")]
    Required { field: String },

    /// Explicit batch target list has no entries.
    #[error("to_units must contain at least one unit")]
    EmptyTargetList,

    /// Explicit batch target list contains a blank entry.
    #[error("to_units[{index}] cannot be empty")]
    EmptyTarget { index: usize },

    /// Explicit batch target list exceeds the configured maximum.
    #[error("to_units cannot contain more than {max} units")]
    TooManyTargets { max: usize },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with ConversionError.
pub type CoreResult<T> = Result<T, ConversionError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
