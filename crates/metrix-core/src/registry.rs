//! # Unit Registries
//!
//! One immutable registry per category, built once on first use and never
//! mutated afterwards. Safe for concurrent reads without locking.
//!
//! ## Registry Contents
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  LENGTH (base: meter)     WEIGHT (base: gram)     TEMPERATURE          │
//! │  ────────────────────     ───────────────────     ────────────────     │
//! │  m    1.0                 g    1.0                celsius    (pivot)   │
//! │  km   1000.0              kg   1000.0             fahrenheit           │
//! │  cm   0.01                mg   0.001              kelvin               │
//! │  mm   0.001               lb   453.59237                               │
//! │  in   0.0254              oz   28.349523125       affine formulas,     │
//! │  ft   0.3048                                      no scale factor      │
//! │  yd   0.9144                                                            │
//! │  mi   1609.344                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Definition order is significant: it is the order of the unit dropdowns
//! and of the default batch target set.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{ConversionError, CoreResult};
use crate::types::{Category, UnitInfo};

// =============================================================================
// Temperature Scales
// =============================================================================

/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// A temperature scale, related to the others through Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    /// Converts a reading on this scale to Celsius.
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => value,
            TemperatureScale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TemperatureScale::Kelvin => value - KELVIN_OFFSET,
        }
    }

    /// Converts a Celsius reading to this scale.
    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => celsius,
            TemperatureScale::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            TemperatureScale::Kelvin => celsius + KELVIN_OFFSET,
        }
    }
}

// =============================================================================
// Unit Definitions
// =============================================================================

/// How a unit relates to the other units of its category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitKind {
    /// `to_base` base units per one of this unit.
    Linear { to_base: f64 },
    /// Affine scale, converted through Celsius.
    Thermal(TemperatureScale),
}

/// A single registry entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDef {
    pub code: &'static str,
    pub name: &'static str,
    pub kind: UnitKind,
}

impl UnitDef {
    const fn linear(code: &'static str, name: &'static str, to_base: f64) -> Self {
        UnitDef {
            code,
            name,
            kind: UnitKind::Linear { to_base },
        }
    }

    const fn thermal(code: &'static str, name: &'static str, scale: TemperatureScale) -> Self {
        UnitDef {
            code,
            name,
            kind: UnitKind::Thermal(scale),
        }
    }

    /// Scale factor into the category's base unit, if the unit is linear.
    pub fn to_base(&self) -> Option<f64> {
        match self.kind {
            UnitKind::Linear { to_base } => Some(to_base),
            UnitKind::Thermal(_) => None,
        }
    }

    /// Temperature scale, if the unit is thermal.
    pub fn scale(&self) -> Option<TemperatureScale> {
        match self.kind {
            UnitKind::Thermal(scale) => Some(scale),
            UnitKind::Linear { .. } => None,
        }
    }

    /// Code and display name.
    pub fn info(&self) -> UnitInfo {
        UnitInfo {
            code: self.code.to_string(),
            name: self.name.to_string(),
        }
    }
}

const LENGTH_UNITS: [UnitDef; 8] = [
    UnitDef::linear("m", "メートル（m）", 1.0),
    UnitDef::linear("km", "キロメートル（km）", 1000.0),
    UnitDef::linear("cm", "センチメートル（cm）", 0.01),
    UnitDef::linear("mm", "ミリメートル（mm）", 0.001),
    UnitDef::linear("in", "インチ（in）", 0.0254),
    UnitDef::linear("ft", "フィート（ft）", 0.3048),
    UnitDef::linear("yd", "ヤード（yd）", 0.9144),
    UnitDef::linear("mi", "マイル（mi）", 1609.344),
];

const WEIGHT_UNITS: [UnitDef; 5] = [
    UnitDef::linear("g", "グラム（g）", 1.0),
    UnitDef::linear("kg", "キログラム（kg）", 1000.0),
    UnitDef::linear("mg", "ミリグラム（mg）", 0.001),
    UnitDef::linear("lb", "ポンド（lb）", 453.59237),
    UnitDef::linear("oz", "オンス（oz）", 28.349523125),
];

const TEMPERATURE_UNITS: [UnitDef; 3] = [
    UnitDef::thermal("celsius", "摂氏（℃）", TemperatureScale::Celsius),
    UnitDef::thermal("fahrenheit", "華氏（℉）", TemperatureScale::Fahrenheit),
    UnitDef::thermal("kelvin", "ケルビン（K）", TemperatureScale::Kelvin),
];

// =============================================================================
// Global Registries
// =============================================================================

/// Length units, base meter.
pub static LENGTH: LazyLock<UnitRegistry> =
    LazyLock::new(|| UnitRegistry::new(Category::Length, &LENGTH_UNITS));

/// Weight units, base gram.
pub static WEIGHT: LazyLock<UnitRegistry> =
    LazyLock::new(|| UnitRegistry::new(Category::Weight, &WEIGHT_UNITS));

/// Temperature scales.
pub static TEMPERATURE: LazyLock<UnitRegistry> =
    LazyLock::new(|| UnitRegistry::new(Category::Temperature, &TEMPERATURE_UNITS));

// =============================================================================
// Unit Registry
// =============================================================================

/// Ordered, indexed set of the valid units of one category.
#[derive(Debug)]
pub struct UnitRegistry {
    category: Category,
    units: Vec<UnitDef>,
    index: HashMap<&'static str, usize>,
}

impl UnitRegistry {
    fn new(category: Category, defs: &[UnitDef]) -> Self {
        let units = defs.to_vec();
        let index = units
            .iter()
            .enumerate()
            .map(|(i, unit)| (unit.code, i))
            .collect::<HashMap<_, _>>();
        debug_assert_eq!(index.len(), units.len(), "duplicate unit code in {category}");

        UnitRegistry {
            category,
            units,
            index,
        }
    }

    /// Category this registry belongs to.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Gets a unit by its exact code.
    pub fn get(&self, code: &str) -> Option<&UnitDef> {
        self.index.get(code).map(|&i| &self.units[i])
    }

    /// Gets a unit by code, failing with [`ConversionError::InvalidUnit`].
    pub fn require(&self, code: &str) -> CoreResult<&UnitDef> {
        self.get(code)
            .ok_or_else(|| ConversionError::InvalidUnit(code.to_string()))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Unit codes in definition order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.units.iter().map(|u| u.code).collect()
    }

    /// Codes and display names in definition order.
    pub fn unit_info(&self) -> Vec<UnitInfo> {
        self.units.iter().map(UnitDef::info).collect()
    }

    pub fn display_name(&self, code: &str) -> Option<&'static str> {
        self.get(code).map(|u| u.name)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
