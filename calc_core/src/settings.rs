//! # Settings
//!
//! Optional TOML file with field defaults and the electricity tariff.
//! Nothing typed into the calculators is ever written back.
//!
//! ## File Format
//!
//! ```toml
//! [defaults]
//! fixed_charge = 75.0
//! tax_percent = 5.0
//! category = "length"
//!
//! [[tariff.tiers]]
//! capacity = 100.0
//! rate = 1.5
//!
//! [[tariff.tiers]]
//! capacity = 200.0
//! rate = 2.5
//!
//! [[tariff.tiers]]
//! rate = 3.75
//! ```
//!
//! Every section is optional. The file lives at
//! `<config dir>/multicalc/config.toml` unless a path is given explicitly.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::electricity::{DEFAULT_FIXED_CHARGE, DEFAULT_TAX_PERCENT};
use crate::calculations::{ConversionCategory, ElectricityForm, TariffSchedule};
use crate::errors::{CalcError, CalcResult};

/// Directory name under the platform config dir
const CONFIG_DIR_NAME: &str = "multicalc";

/// Settings file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Root settings container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Values prefilled into the forms
    pub defaults: FieldDefaults,

    /// Electricity tariff
    pub tariff: TariffSchedule,
}

/// Values prefilled into the forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDefaults {
    /// Electricity fixed charge
    pub fixed_charge: f64,

    /// Electricity tax rate in percent
    pub tax_percent: f64,

    /// Initially selected conversion category
    pub category: ConversionCategory,
}

impl Default for FieldDefaults {
    fn default() -> Self {
        FieldDefaults {
            fixed_charge: DEFAULT_FIXED_CHARGE,
            tax_percent: DEFAULT_TAX_PERCENT,
            category: ConversionCategory::default(),
        }
    }
}

impl FieldDefaults {
    /// Electricity form with the fixed charge and tax fields prefilled.
    ///
    /// Values are written as plain `f64` text so they parse back unchanged.
    pub fn electricity_form(&self) -> ElectricityForm {
        ElectricityForm {
            units: String::new(),
            fixed_charge: self.fixed_charge.to_string(),
            tax_percent: self.tax_percent.to_string(),
        }
    }
}

impl Settings {
    /// Platform-specific settings path.
    ///
    /// - Linux: `~/.config/multicalc/config.toml`
    /// - macOS: `~/Library/Application Support/multicalc/config.toml`
    /// - Windows: `%APPDATA%\multicalc\config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Parse settings from TOML text and validate them.
    pub fn from_toml(text: &str) -> CalcResult<Self> {
        let settings: Settings = toml::from_str(text).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Render settings as TOML.
    pub fn to_toml(&self) -> CalcResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })
    }

    /// Load settings from an explicit path.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        let settings = Self::from_toml(&text)?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Load settings from `path` or, when `None`, from the default location.
    ///
    /// An explicit path must exist. A missing file at the default location
    /// means built-in defaults. A default-location file that cannot be read
    /// or parsed is logged and ignored.
    pub fn load_or_default(path: Option<&Path>) -> CalcResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let Some(path) = Self::default_path() else {
            debug!("no config directory on this platform, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        match Self::load(&path) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unusable settings file");
                Ok(Self::default())
            }
        }
    }

    /// Check defaults and tariff.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.defaults.fixed_charge.is_finite() {
            return Err(CalcError::invalid_settings("defaults.fixed_charge must be finite"));
        }
        if !self.defaults.tax_percent.is_finite() {
            return Err(CalcError::invalid_settings("defaults.tax_percent must be finite"));
        }
        self.tariff.validate()
    }
}
