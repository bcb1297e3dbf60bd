//! # Electricity Bill Estimate
//!
//! Tiered energy charge plus a fixed charge and a percentage tax.
//!
//! ## Default Tariff
//!
//! | Band            | Units   | Rate / unit |
//! |-----------------|---------|-------------|
//! | First 100 units | 0-100   | 1.50        |
//! | Next 200 units  | 101-300 | 2.50        |
//! | Everything else | 301+    | 3.75        |
//!
//! Bands fill in order, each taking `min(remaining, capacity)`. A zero or
//! negative reading leaves nothing to bill, so the energy charge is `0`.
//!
//! ```text
//! subtotal = energy_charge + fixed_charge
//! tax      = subtotal * tax_percent / 100
//! total    = subtotal + tax
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::electricity::{calculate, ElectricityInput};
//!
//! let result = calculate(&ElectricityInput { units: 100.0, fixed_charge: 75.0, tax_percent: 5.0 });
//! assert_eq!(result.energy_charge, 150.0);
//! assert_eq!(result.total, 236.25);
//! ```

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::format::{format_money, format_number};
use crate::input::parse_number;

/// Default fixed charge added to every bill
pub const DEFAULT_FIXED_CHARGE: f64 = 75.0;

/// Default tax rate in percent
pub const DEFAULT_TAX_PERCENT: f64 = 5.0;

/// One consumption band of a tariff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TariffTier {
    /// Units billed in this band; `None` takes everything left
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,

    /// Price per unit in this band
    pub rate: f64,
}

impl TariffTier {
    pub fn bounded(capacity: f64, rate: f64) -> Self {
        TariffTier {
            capacity: Some(capacity),
            rate,
        }
    }

    pub fn unbounded(rate: f64) -> Self {
        TariffTier { capacity: None, rate }
    }
}

/// Ordered consumption bands, cheapest filled first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffSchedule {
    pub tiers: Vec<TariffTier>,
}

impl Default for TariffSchedule {
    fn default() -> Self {
        TariffSchedule {
            tiers: vec![
                TariffTier::bounded(100.0, 1.5),
                TariffTier::bounded(200.0, 2.5),
                TariffTier::unbounded(3.75),
            ],
        }
    }
}

impl TariffSchedule {
    /// Check that the schedule can bill any reading.
    ///
    /// Every tier but the last needs a positive, finite capacity, the last
    /// tier must be unbounded, and every rate must be finite.
    pub fn validate(&self) -> CalcResult<()> {
        let Some((last, leading)) = self.tiers.split_last() else {
            return Err(CalcError::invalid_settings("tariff has no tiers"));
        };

        for (i, tier) in leading.iter().enumerate() {
            match tier.capacity {
                Some(cap) if cap.is_finite() && cap > 0.0 => {}
                Some(cap) => {
                    return Err(CalcError::invalid_settings(format!(
                        "tier {} capacity must be positive, got {}",
                        i + 1,
                        cap
                    )))
                }
                None => {
                    return Err(CalcError::invalid_settings(format!(
                        "tier {} is unbounded but is not the last tier",
                        i + 1
                    )))
                }
            }
        }

        if last.capacity.is_some() {
            return Err(CalcError::invalid_settings("last tier must be unbounded"));
        }

        if let Some(pos) = self.tiers.iter().position(|t| !t.rate.is_finite()) {
            return Err(CalcError::invalid_settings(format!("tier {} rate is not finite", pos + 1)));
        }

        Ok(())
    }

    /// Energy charge for `units`, with the units and charge of every band.
    ///
    /// Bands after the reading runs out are still listed with zero units.
    pub fn breakdown(&self, units: f64) -> Vec<TierCharge> {
        let mut remaining = units;
        self.tiers
            .iter()
            .map(|tier| {
                let billed = match tier.capacity {
                    Some(cap) => remaining.min(cap),
                    None => remaining,
                }
                .max(0.0);
                remaining -= billed;
                TierCharge {
                    units: billed,
                    rate: tier.rate,
                    charge: billed * tier.rate,
                }
            })
            .collect()
    }

    /// Energy charge for `units`
    pub fn energy_charge(&self, units: f64) -> f64 {
        self.breakdown(units).iter().map(|t| t.charge).sum()
    }
}

/// What one band contributed to the energy charge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierCharge {
    pub units: f64,
    pub rate: f64,
    pub charge: f64,
}

impl TierCharge {
    /// Line for a breakdown listing, e.g. `100 kWh × 1.50 = 150.00`
    pub fn describe(&self) -> String {
        format!(
            "{} kWh × {} = {}",
            format_number(self.units),
            format_money(self.rate),
            format_money(self.charge)
        )
    }
}

/// Raw text from the three fields.
///
/// `Default` prefills the fixed charge and tax fields the way the form
/// first appears.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricityForm {
    pub units: String,
    pub fixed_charge: String,
    pub tax_percent: String,
}

impl Default for ElectricityForm {
    fn default() -> Self {
        ElectricityForm {
            units: String::new(),
            fixed_charge: DEFAULT_FIXED_CHARGE.to_string(),
            tax_percent: DEFAULT_TAX_PERCENT.to_string(),
        }
    }
}

impl ElectricityForm {
    pub fn new(
        units: impl Into<String>,
        fixed_charge: impl Into<String>,
        tax_percent: impl Into<String>,
    ) -> Self {
        ElectricityForm {
            units: units.into(),
            fixed_charge: fixed_charge.into(),
            tax_percent: tax_percent.into(),
        }
    }

    pub fn parse(&self) -> CalcResult<ElectricityInput> {
        let calc = Calculator::Electricity;
        Ok(ElectricityInput {
            units: parse_number(calc, "units", &self.units)?,
            fixed_charge: parse_number(calc, "fixed_charge", &self.fixed_charge)?,
            tax_percent: parse_number(calc, "tax_percent", &self.tax_percent)?,
        })
    }
}

/// Input parameters for a bill estimate.
///
/// ## JSON Example
///
/// ```json
/// { "units": 350.0, "fixed_charge": 75.0, "tax_percent": 5.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElectricityInput {
    /// Units consumed (kWh)
    pub units: f64,

    /// Fixed charge added before tax
    #[serde(default = "default_fixed_charge")]
    pub fixed_charge: f64,

    /// Tax rate in percent, applied to energy plus fixed charge
    #[serde(default = "default_tax_percent")]
    pub tax_percent: f64,
}

fn default_fixed_charge() -> f64 {
    DEFAULT_FIXED_CHARGE
}

fn default_tax_percent() -> f64 {
    DEFAULT_TAX_PERCENT
}

impl ElectricityInput {
    /// Input with the default fixed charge and tax rate
    pub fn with_units(units: f64) -> Self {
        ElectricityInput {
            units,
            fixed_charge: DEFAULT_FIXED_CHARGE,
            tax_percent: DEFAULT_TAX_PERCENT,
        }
    }
}

/// Results from a bill estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricityResult {
    /// Sum of the tier charges
    pub energy_charge: f64,

    /// Energy charge plus fixed charge
    pub subtotal: f64,

    /// Tax on the subtotal
    pub tax: f64,

    /// Amount due
    pub total: f64,

    /// Per-band contribution, in tariff order
    pub tiers: Vec<TierCharge>,
}

impl ElectricityResult {
    /// Display label, e.g. `Energy: 150.00 | Tax: 11.25 | Total: 236.25`
    pub fn summary(&self) -> String {
        format!(
            "Energy: {} | Tax: {} | Total: {}",
            format_money(self.energy_charge),
            format_money(self.tax),
            format_money(self.total)
        )
    }
}

/// Estimate a bill with the default tariff.
pub fn calculate(input: &ElectricityInput) -> ElectricityResult {
    calculate_with_tariff(input, &TariffSchedule::default())
}

/// Estimate a bill with a specific tariff.
pub fn calculate_with_tariff(input: &ElectricityInput, tariff: &TariffSchedule) -> ElectricityResult {
    let tiers = tariff.breakdown(input.units);
    let energy_charge: f64 = tiers.iter().map(|t| t.charge).sum();
    let subtotal = energy_charge + input.fixed_charge;
    let tax = subtotal * input.tax_percent / 100.0;

    ElectricityResult {
        energy_charge,
        subtotal,
        tax,
        total: subtotal + tax,
        tiers,
    }
}
