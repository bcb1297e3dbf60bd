//! # Unit Conversion
//!
//! Quick one-way conversions, selected by [`ConversionCategory`]:
//!
//! | Category    | From | To | Formula              |
//! |-------------|------|----|----------------------|
//! | Length      | m    | ft | `v * 3.28084`        |
//! | Weight      | kg   | lb | `v * 2.20462`        |
//! | Temperature | °C   | °F | `v * 9 / 5 + 32`     |
//!
//! The category names advertise both directions (`m↔ft`), but only the
//! direction in the table is computed.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::conversion::{calculate, ConversionCategory, ConversionInput};
//!
//! let result = calculate(&ConversionInput { category: ConversionCategory::Temperature, value: 100.0 });
//! assert_eq!(result.converted, 212.0);
//! assert_eq!(result.summary(), "100 °C = 212 °F");
//! ```

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::format::format_number;
use crate::input::parse_number;

/// Feet per meter
pub const FEET_PER_METER: f64 = 3.28084;

/// Pounds per kilogram
pub const POUNDS_PER_KILOGRAM: f64 = 2.20462;

/// Conversion category shown in the category picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionCategory {
    #[default]
    Length,
    Weight,
    Temperature,
}

impl ConversionCategory {
    pub const ALL: &'static [ConversionCategory] = &[
        ConversionCategory::Length,
        ConversionCategory::Weight,
        ConversionCategory::Temperature,
    ];

    /// Formula and unit symbols for this category
    pub fn spec(&self) -> &'static ConversionSpec {
        match self {
            ConversionCategory::Length => &CONVERSIONS[0],
            ConversionCategory::Weight => &CONVERSIONS[1],
            ConversionCategory::Temperature => &CONVERSIONS[2],
        }
    }

    /// Picker label, e.g. `Length (m↔ft)`
    pub fn display_name(&self) -> &'static str {
        self.spec().label
    }

    /// Convert a value in the source unit to the target unit
    pub fn convert(&self, value: f64) -> f64 {
        (self.spec().convert)(value)
    }
}

impl std::fmt::Display for ConversionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for ConversionCategory {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "length" => Ok(ConversionCategory::Length),
            "weight" => Ok(ConversionCategory::Weight),
            "temperature" => Ok(ConversionCategory::Temperature),
            _ => Err(CalcError::input_error(Calculator::UnitConversion, "category", s)),
        }
    }
}

/// One row of the conversion table.
#[derive(Debug)]
pub struct ConversionSpec {
    pub label: &'static str,
    pub from_symbol: &'static str,
    pub to_symbol: &'static str,
    pub convert: fn(f64) -> f64,
}

/// Conversion table, in picker order.
pub static CONVERSIONS: [ConversionSpec; 3] = [
    ConversionSpec {
        label: "Length (m↔ft)",
        from_symbol: "m",
        to_symbol: "ft",
        convert: meters_to_feet,
    },
    ConversionSpec {
        label: "Weight (kg↔lb)",
        from_symbol: "kg",
        to_symbol: "lb",
        convert: kilograms_to_pounds,
    },
    ConversionSpec {
        label: "Temperature (°C↔°F)",
        from_symbol: "°C",
        to_symbol: "°F",
        convert: celsius_to_fahrenheit,
    },
];

fn meters_to_feet(m: f64) -> f64 {
    m * FEET_PER_METER
}

fn kilograms_to_pounds(kg: f64) -> f64 {
    kg * POUNDS_PER_KILOGRAM
}

fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

/// Raw text from the value field plus the picker selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionForm {
    pub category: ConversionCategory,
    pub value: String,
}

impl ConversionForm {
    pub fn new(category: ConversionCategory, value: impl Into<String>) -> Self {
        ConversionForm {
            category,
            value: value.into(),
        }
    }

    pub fn parse(&self) -> CalcResult<ConversionInput> {
        Ok(ConversionInput {
            category: self.category,
            value: parse_number(Calculator::UnitConversion, "value", &self.value)?,
        })
    }
}

/// Input parameters for a conversion.
///
/// ## JSON Example
///
/// ```json
/// { "category": "weight", "value": 70.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionInput {
    pub category: ConversionCategory,
    pub value: f64,
}

/// Results from a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub category: ConversionCategory,

    /// Value in the source unit
    pub value: f64,

    /// Value in the target unit
    pub converted: f64,
}

impl ConversionResult {
    /// Display label, e.g. `10 m = 32.808 ft`
    pub fn summary(&self) -> String {
        let spec = self.category.spec();
        format!(
            "{} {} = {} {}",
            format_number(self.value),
            spec.from_symbol,
            format_number(self.converted),
            spec.to_symbol
        )
    }
}

/// Convert the input value according to its category.
pub fn calculate(input: &ConversionInput) -> ConversionResult {
    ConversionResult {
        category: input.category,
        value: input.value,
        converted: input.category.convert(input.value),
    }
}
