//! # Batch Conversion
//!
//! Converts one source value to many target units in a single call.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  batch_convert(1, "m", "length", ["km", "bogus"])                       │
//! │       │                                                                 │
//! │       ├── resolve category ────────── unknown → InvalidCategory        │
//! │       ├── from_unit in registry? ──── no      → InvalidUnit (whole     │
//! │       │                                         batch rejected)        │
//! │       ├── targets: explicit list, or every unit except from_unit       │
//! │       │                                                                 │
//! │       ├── for each target:                                              │
//! │       │     Ok(v)  → results       { to_unit: "km", value: 0.001 }     │
//! │       │     Err    → failed_units  ["bogus"]                           │
//! │       │                                                                 │
//! │       └── sort results by descending unit magnitude                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A bad target never aborts the batch; it is recorded and the rest
//! still convert.

use std::cmp::Ordering;

use crate::dispatch::resolve_category;
use crate::error::CoreResult;
use crate::types::{BatchConversionOutcome, Category, ConversionResult};
use crate::validation::BatchConversionRequest;

/// Fixed ranking used to order temperature results.
///
/// Temperature scales have no linear magnitude, so this is an arbitrary
/// but reproducible ranking, not a physical comparison. Higher sorts first.
pub const TEMPERATURE_SORT_ORDER: [(&str, u8); 3] =
    [("kelvin", 3), ("celsius", 2), ("fahrenheit", 1)];

/// Sort key of a unit within its category. Unknown units rank 0.
///
/// Linear units rank by their scale factor into the base unit.
pub fn magnitude_rank(category: Category, unit: &str) -> f64 {
    match category {
        Category::Length | Category::Weight => category
            .registry()
            .get(unit)
            .and_then(|u| u.to_base())
            .unwrap_or(0.0),
        Category::Temperature => TEMPERATURE_SORT_ORDER
            .iter()
            .find(|(code, _)| *code == unit)
            .map(|&(_, rank)| f64::from(rank))
            .unwrap_or(0.0),
    }
}

/// Converts `value` from `from_unit` into several units of `category`.
///
/// ## Example
/// ```rust
/// use metrix_core::batch_convert;
///
/// let targets = vec!["km".to_string(), "bogus".to_string()];
/// let outcome = batch_convert(1.0, "m", "length", Some(&targets)).unwrap();
/// assert_eq!(outcome.results.len(), 1);
/// assert_eq!(outcome.failed_units, vec!["bogus".to_string()]);
/// ```
pub fn batch_convert(
    value: f64,
    from_unit: &str,
    category: &str,
    to_units: Option<&[String]>,
) -> CoreResult<BatchConversionOutcome> {
    let category = resolve_category(category)?;
    convert_all(value, from_unit, category, to_units)
}

impl BatchConversionRequest {
    /// Runs the batch conversion.
    pub fn execute(&self) -> CoreResult<BatchConversionOutcome> {
        convert_all(
            self.value,
            &self.from_unit,
            self.category,
            self.to_units.as_deref(),
        )
    }
}

fn convert_all(
    value: f64,
    from_unit: &str,
    category: Category,
    to_units: Option<&[String]>,
) -> CoreResult<BatchConversionOutcome> {
    let registry = category.registry();
    registry.require(from_unit)?;

    let targets: Vec<String> = match to_units {
        Some(units) => units.to_vec(),
        None => registry
            .codes()
            .into_iter()
            .filter(|code| *code != from_unit)
            .map(str::to_string)
            .collect(),
    };

    let mut results = Vec::with_capacity(targets.len());
    let mut failed_units = Vec::new();

    for to_unit in targets {
        match category.convert(value, from_unit, &to_unit) {
            Ok(converted) => results.push(ConversionResult {
                to_unit,
                value: converted,
            }),
            Err(_) => failed_units.push(to_unit),
        }
    }

    sort_by_magnitude(category, &mut results);

    Ok(BatchConversionOutcome {
        original_value: value,
        from_unit: from_unit.to_string(),
        category,
        results,
        failed_units,
    })
}

/// Descending magnitude; ties keep their relative order.
fn sort_by_magnitude(category: Category, results: &mut [ConversionResult]) {
    results.sort_by(|a, b| {
        let a = magnitude_rank(category, &a.to_unit);
        let b = magnitude_rank(category, &b.to_unit);
        b.partial_cmp(&a).unwrap_or(Ordering::Equal)
    });
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConversionError;

    fn units(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    fn result_codes(outcome: &BatchConversionOutcome) -> Vec<&str> {
        outcome.results.iter().map(|r| r.to_unit.as_str()).collect()
    }

    #[test]
    fn test_partial_failure() {
        let targets = units(&["km", "bogus"]);
        let outcome = batch_convert(1.0, "m", "length", Some(&targets)).unwrap();

        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].to_unit, "km");
        assert_eq!(outcome.results[0].value, 0.001);
        assert_eq!(outcome.failed_units, vec!["bogus".to_string()]);
        assert!(outcome.has_failures());
    }

    #[test]
    fn test_default_targets_exclude_source() {
        let outcome = batch_convert(1.0, "m", "length", None).unwrap();
        let mut codes = result_codes(&outcome);
        codes.sort_unstable();
        assert_eq!(codes, vec!["cm", "ft", "in", "km", "mi", "mm", "yd"]);
        assert!(outcome.failed_units.is_empty());
        assert!(!outcome.has_failures());
    }

    #[test]
    fn test_length_ordering() {
        let outcome = batch_convert(1.0, "m", "length", None).unwrap();
        assert_eq!(
            result_codes(&outcome),
            vec!["mi", "km", "yd", "ft", "in", "cm", "mm"]
        );
    }

    #[test]
    fn test_weight_ordering() {
        let outcome = batch_convert(1.0, "g", "weight", None).unwrap();
        assert_eq!(result_codes(&outcome), vec!["kg", "lb", "oz", "mg"]);
    }

    #[test]
    fn test_temperature_ordering() {
        let outcome = batch_convert(0.0, "fahrenheit", "temperature", None).unwrap();
        assert_eq!(result_codes(&outcome), vec!["kelvin", "celsius"]);

        let targets = units(&["fahrenheit", "celsius", "kelvin"]);
        let outcome = batch_convert(100.0, "celsius", "temperature", Some(&targets)).unwrap();
        assert_eq!(result_codes(&outcome), vec!["kelvin", "celsius", "fahrenheit"]);
        assert_eq!(outcome.results[1].value, 100.0);
    }

    #[test]
    fn test_failed_units_keep_iteration_order() {
        let targets = units(&["zz", "km", "aa", "mm", "mm2"]);
        let outcome = batch_convert(5.0, "m", "length", Some(&targets)).unwrap();
        assert_eq!(outcome.failed_units, units(&["zz", "aa", "mm2"]));
        assert_eq!(result_codes(&outcome), vec!["km", "mm"]);
    }

    #[test]
    fn test_overflowing_targets_are_failed_units() {
        let outcome = batch_convert(f64::MAX, "m", "length", None).unwrap();
        assert_eq!(result_codes(&outcome), vec!["mi", "km"]);
        assert!(outcome.results.iter().all(|r| r.value.is_finite()));
        assert_eq!(outcome.failed_units, units(&["cm", "mm", "in", "ft", "yd"]));
    }

    #[test]
    fn test_invalid_source_rejects_batch() {
        let err = batch_convert(1.0, "bogus", "length", None).unwrap_err();
        assert_eq!(err, ConversionError::InvalidUnit("bogus".to_string()));

        let targets = units(&["km"]);
        let err = batch_convert(1.0, "kg", "length", Some(&targets)).unwrap_err();
        assert_eq!(err.invalid_unit(), Some("kg"));
    }

    #[test]
    fn test_invalid_category() {
        let err = batch_convert(1.0, "m", "volume", None).unwrap_err();
        assert_eq!(err, ConversionError::InvalidCategory("volume".to_string()));
    }

    #[test]
    fn test_outcome_echoes_request() {
        let outcome = batch_convert(2.5, "kg", "weight", None).unwrap();
        assert_eq!(outcome.original_value, 2.5);
        assert_eq!(outcome.from_unit, "kg");
        assert_eq!(outcome.category, Category::Weight);
    }

    #[test]
    fn test_explicit_targets_may_include_source() {
        let targets = units(&["m", "km"]);
        let outcome = batch_convert(3.0, "m", "length", Some(&targets)).unwrap();
        assert_eq!(result_codes(&outcome), vec!["km", "m"]);
        assert_eq!(outcome.results[1].value, 3.0);
    }

    #[test]
    fn test_magnitude_rank() {
        assert_eq!(magnitude_rank(Category::Length, "mi"), 1609.344);
        assert_eq!(magnitude_rank(Category::Weight, "kg"), 1000.0);
        assert_eq!(magnitude_rank(Category::Temperature, "kelvin"), 3.0);
        assert_eq!(magnitude_rank(Category::Temperature, "fahrenheit"), 1.0);
        assert_eq!(magnitude_rank(Category::Temperature, "rankine"), 0.0);
        assert_eq!(magnitude_rank(Category::Length, "furlong"), 0.0);
    }

    #[test]
    fn test_request_execute() {
        let request = BatchConversionRequest {
            value: 1.0,
            from_unit: "kg".to_string(),
            category: Category::Weight,
            to_units: Some(units(&["g", "stone"])),
        };
        let outcome = request.execute().unwrap();
        assert_eq!(outcome.results[0].value, 1000.0);
        assert_eq!(outcome.failed_units, units(&["stone"]));
    }
}
