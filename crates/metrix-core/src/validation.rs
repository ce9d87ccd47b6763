//! # Validation Module
//!
//! Request validation for metrix.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Browser client                                               │
//! │  ├── Empty / non-numeric / infinite input checks                       │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: HTTP boundary (metrix-api)                                   │
//! │  └── JSON shape (deserialization into payload types)                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                  │
//! │  ├── value is finite                                                   │
//! │  ├── category is a known name                                          │
//! │  └── unit strings non-empty after trimming                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 4: Registries (unit existence → InvalidUnit)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use metrix_core::validation::ConversionRequest;
//! use metrix_core::ConvertPayload;
//!
//! let payload = ConvertPayload {
//!     value: 100.0,
//!     from_unit: " m ".to_string(),
//!     to_unit: "km".to_string(),
//!     category: "length".to_string(),
//! };
//! let request = ConversionRequest::try_from(payload).unwrap();
//! assert_eq!(request.from_unit, "m");
//! assert_eq!(request.execute().unwrap(), 0.1);
//! ```

use crate::error::{CoreResult, ValidationError, ValidationResult};
use crate::types::{BatchConvertPayload, Category, ConvertPayload};

// =============================================================================
// Validated Requests
// =============================================================================

/// A single conversion that passed validation. Unit strings are trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub category: Category,
}

impl ConversionRequest {
    /// Runs the conversion.
    pub fn execute(&self) -> CoreResult<f64> {
        self.category.convert(self.value, &self.from_unit, &self.to_unit)
    }
}

impl TryFrom<ConvertPayload> for ConversionRequest {
    type Error = ValidationError;

    fn try_from(payload: ConvertPayload) -> ValidationResult<Self> {
        Ok(ConversionRequest {
            value: validate_value(payload.value)?,
            category: validate_category(&payload.category)?,
            from_unit: validate_unit(&payload.from_unit)?,
            to_unit: validate_unit(&payload.to_unit)?,
        })
    }
}

/// A batch conversion that passed validation.
///
/// `to_units` of `None` means "every other unit of the category".
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConversionRequest {
    pub value: f64,
    pub from_unit: String,
    pub category: Category,
    pub to_units: Option<Vec<String>>,
}

impl BatchConversionRequest {
    /// Rejects explicit target lists longer than `max`.
    pub fn limit_targets(self, max: usize) -> ValidationResult<Self> {
        if let Some(units) = &self.to_units {
            validate_target_count(units, max)?;
        }
        Ok(self)
    }
}

impl TryFrom<BatchConvertPayload> for BatchConversionRequest {
    type Error = ValidationError;

    fn try_from(payload: BatchConvertPayload) -> ValidationResult<Self> {
        Ok(BatchConversionRequest {
            value: validate_value(payload.value)?,
            category: validate_category(&payload.category)?,
            from_unit: validate_required("from_unit", &payload.from_unit)?,
            to_units: payload.to_units.map(validate_to_units).transpose()?,
        })
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates that a value is a finite number.
///
/// ## Example
/// ```rust
/// use metrix_core::validation::validate_value;
///
/// assert!(validate_value(-40.0).is_ok());
/// assert!(validate_value(f64::NAN).is_err());
/// assert!(validate_value(f64::INFINITY).is_err());
/// ```
pub fn validate_value(value: f64) -> ValidationResult<f64> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue);
    }
    Ok(value)
}

/// Validates a category name. The name must match exactly.
pub fn validate_category(name: &str) -> ValidationResult<Category> {
    Category::from_name(name).ok_or_else(|| ValidationError::UnknownCategory {
        category: name.to_string(),
        allowed: Category::valid_names(),
    })
}

/// Validates a unit of a single conversion.
///
/// ## Returns
/// The trimmed unit code.
pub fn validate_unit(unit: &str) -> ValidationResult<String> {
    let unit = unit.trim();
    if unit.is_empty() {
        return Err(ValidationError::EmptyUnit);
    }
    Ok(unit.to_string())
}

/// Validates a named required string field.
///
/// ## Returns
/// The trimmed value.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(value.to_string())
}

/// Validates an explicit batch target list.
///
/// ## Rules
/// - The list must not be empty
/// - Every entry must be non-empty after trimming
///
/// ## Returns
/// The trimmed entries, in the order given.
pub fn validate_to_units(units: Vec<String>) -> ValidationResult<Vec<String>> {
    if units.is_empty() {
        return Err(ValidationError::EmptyTargetList);
    }

    units
        .into_iter()
        .enumerate()
        .map(|(index, unit)| {
            let unit = unit.trim();
            if unit.is_empty() {
                return Err(ValidationError::EmptyTarget { index });
            }
            Ok(unit.to_string())
        })
        .collect()
}

/// Validates that an explicit target list does not exceed `max` entries.
pub fn validate_target_count(units: &[String], max: usize) -> ValidationResult<()> {
    if units.len() > max {
        return Err(ValidationError::TooManyTargets { max });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn convert_payload(from_unit: &str, to_unit: &str, category: &str) -> ConvertPayload {
        ConvertPayload {
            value: 1.0,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_validate_value() {
        assert_eq!(validate_value(0.0), Ok(0.0));
        assert_eq!(validate_value(-273.15), Ok(-273.15));
        assert_eq!(validate_value(f64::NAN), Err(ValidationError::NonFiniteValue));
        assert_eq!(validate_value(f64::INFINITY), Err(ValidationError::NonFiniteValue));
        assert_eq!(validate_value(f64::NEG_INFINITY), Err(ValidationError::NonFiniteValue));
    }

    #[test]
    fn test_validate_category() {
        assert_eq!(validate_category("length"), Ok(Category::Length));
        assert_eq!(validate_category("temperature"), Ok(Category::Temperature));

        let err = validate_category("volume").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid category: volume. Must be one of: length, temperature, weight"
        );
        assert!(validate_category(" length").is_err());
    }

    #[test]
    fn test_validate_unit_trims() {
        assert_eq!(validate_unit("  km\t"), Ok("km".to_string()));
        assert_eq!(validate_unit(""), Err(ValidationError::EmptyUnit));
        assert_eq!(validate_unit("   "), Err(ValidationError::EmptyUnit));
    }

    #[test]
    fn test_validate_to_units() {
        assert_eq!(
            validate_to_units(vec![" km".to_string(), "cm ".to_string()]),
            Ok(vec!["km".to_string(), "cm".to_string()])
        );
        assert_eq!(validate_to_units(vec![]), Err(ValidationError::EmptyTargetList));
        assert_eq!(
            validate_to_units(vec!["km".to_string(), "  ".to_string()]),
            Err(ValidationError::EmptyTarget { index: 1 })
        );
    }

    #[test]
    fn test_conversion_request_from_payload() {
        let request = ConversionRequest::try_from(convert_payload(" m", "km ", "length")).unwrap();
        assert_eq!(request.from_unit, "m");
        assert_eq!(request.to_unit, "km");
        assert_eq!(request.category, Category::Length);
        assert_eq!(request.execute().unwrap(), 0.001);
    }

    #[test]
    fn test_conversion_request_rejections() {
        let err = ConversionRequest::try_from(convert_payload("", "km", "length")).unwrap_err();
        assert_eq!(err, ValidationError::EmptyUnit);

        let err = ConversionRequest::try_from(convert_payload("m", "  ", "length")).unwrap_err();
        assert_eq!(err, ValidationError::EmptyUnit);

        let err = ConversionRequest::try_from(convert_payload("m", "km", "volume")).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownCategory { .. }));

        let mut payload = convert_payload("m", "km", "length");
        payload.value = f64::NAN;
        assert_eq!(
            ConversionRequest::try_from(payload).unwrap_err(),
            ValidationError::NonFiniteValue
        );
    }

    #[test]
    fn test_validation_precedes_unit_lookup() {
        // Unknown units pass validation; the registry rejects them later.
        let request = ConversionRequest::try_from(convert_payload("xyz", "km", "length")).unwrap();
        assert_eq!(request.execute().unwrap_err().invalid_unit(), Some("xyz"));
    }

    #[test]
    fn test_batch_request_from_payload() {
        let payload = BatchConvertPayload {
            value: 2.0,
            from_unit: " kg ".to_string(),
            category: "weight".to_string(),
            to_units: Some(vec![" g".to_string(), "lb".to_string()]),
        };
        let request = BatchConversionRequest::try_from(payload).unwrap();
        assert_eq!(request.from_unit, "kg");
        assert_eq!(request.to_units, Some(vec!["g".to_string(), "lb".to_string()]));
    }

    #[test]
    fn test_batch_request_rejections() {
        let base = BatchConvertPayload {
            value: 1.0,
            from_unit: "m".to_string(),
            category: "length".to_string(),
            to_units: None,
        };

        let mut payload = base.clone();
        payload.from_unit = "   ".to_string();
        let err = BatchConversionRequest::try_from(payload).unwrap_err();
        assert_eq!(err.to_string(), "from_unit cannot be empty");

        let mut payload = base.clone();
        payload.to_units = Some(vec![]);
        assert_eq!(
            BatchConversionRequest::try_from(payload).unwrap_err(),
            ValidationError::EmptyTargetList
        );

        let mut payload = base;
        payload.to_units = Some(vec!["".to_string()]);
        assert_eq!(
            BatchConversionRequest::try_from(payload).unwrap_err(),
            ValidationError::EmptyTarget { index: 0 }
        );
    }

    #[test]
    fn test_limit_targets() {
        let request = BatchConversionRequest {
            value: 1.0,
            from_unit: "m".to_string(),
            category: Category::Length,
            to_units: Some(vec!["km".to_string(), "cm".to_string(), "mm".to_string()]),
        };
        assert!(request.clone().limit_targets(3).is_ok());
        assert_eq!(
            request.limit_targets(2).unwrap_err(),
            ValidationError::TooManyTargets { max: 2 }
        );

        let defaults = BatchConversionRequest {
            value: 1.0,
            from_unit: "m".to_string(),
            category: Category::Length,
            to_units: None,
        };
        assert!(defaults.limit_targets(1).is_ok());
    }
}
