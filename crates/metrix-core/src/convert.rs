//! # Conversion Functions
//!
//! Pure functions converting a value between two units of one category.
//!
//! ## Pivot Conversion
//! ```text
//! Linear (length, weight):
//!
//!   value ──× factor[from]──► base unit ──÷ factor[to]──► result
//!
//! Affine (temperature):
//!
//!   value ──to_celsius(from)──► °C ──from_celsius(to)──► result
//! ```
//!
//! Every function checks `from_unit` before `to_unit`; when both are
//! unknown the error names `from_unit`. A result that overflows `f64`
//! fails with [`ValidationError::ResultOutOfRange`] instead of producing
//! an infinity.

use crate::error::{ConversionError, CoreResult, ValidationError};
use crate::registry::{TemperatureScale, UnitRegistry, LENGTH, TEMPERATURE, WEIGHT};

/// Signature shared by every category's conversion function.
pub type ConvertFn = fn(f64, &str, &str) -> CoreResult<f64>;

/// Converts between length units.
///
/// ## Example
/// ```rust
/// use metrix_core::convert::convert_length;
///
/// assert_eq!(convert_length(100.0, "m", "km").unwrap(), 0.1);
/// assert!(convert_length(1.0, "m", "kg").is_err());
/// ```
pub fn convert_length(value: f64, from_unit: &str, to_unit: &str) -> CoreResult<f64> {
    convert_linear(&LENGTH, value, from_unit, to_unit)
}

/// Converts between weight units.
pub fn convert_weight(value: f64, from_unit: &str, to_unit: &str) -> CoreResult<f64> {
    convert_linear(&WEIGHT, value, from_unit, to_unit)
}

/// Converts between temperature scales.
///
/// Identical scales return `value` untouched; the Celsius round trip is
/// not exact in floating point.
///
/// ## Example
/// ```rust
/// use metrix_core::convert::convert_temperature;
///
/// assert_eq!(convert_temperature(0.0, "celsius", "fahrenheit").unwrap(), 32.0);
/// ```
pub fn convert_temperature(value: f64, from_unit: &str, to_unit: &str) -> CoreResult<f64> {
    let from = thermal_scale(&TEMPERATURE, from_unit)?;
    let to = thermal_scale(&TEMPERATURE, to_unit)?;

    if from_unit == to_unit {
        return Ok(value);
    }

    finite(to.from_celsius(from.to_celsius(value)))
}

fn convert_linear(
    registry: &UnitRegistry,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> CoreResult<f64> {
    let from_factor = linear_factor(registry, from_unit)?;
    let to_factor = linear_factor(registry, to_unit)?;

    if from_unit == to_unit {
        return Ok(value);
    }

    let result = value * from_factor / to_factor;
    if result.is_finite() {
        return Ok(result);
    }

    // The base-unit product can overflow even when the answer fits.
    finite(value * (from_factor / to_factor))
}

fn finite(result: f64) -> CoreResult<f64> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(ValidationError::ResultOutOfRange.into())
    }
}

fn linear_factor(registry: &UnitRegistry, code: &str) -> CoreResult<f64> {
    registry
        .require(code)?
        .to_base()
        .ok_or_else(|| ConversionError::InvalidUnit(code.to_string()))
}

fn thermal_scale(registry: &UnitRegistry, code: &str) -> CoreResult<TemperatureScale> {
    registry
        .require(code)?
        .scale()
        .ok_or_else(|| ConversionError::InvalidUnit(code.to_string()))
}

// =============================================================================
// Unit Tests
// =============================================================================
