//! # Calculator Settings
//!
//! Constants the evaluator depends on: the design value of glass and the
//! material partial factors. Defaults are the published values; a JSON
//! settings file can override them (e.g. for a national annex), and every
//! override is validated before use.
//!
//! ## Example
//!
//! ```rust
//! use glass_core::settings::CalculatorSettings;
//! use glass_core::glass_factors::Standard;
//!
//! let settings = CalculatorSettings::from_json_str(r#"{ "gamma_ma_en16612": 2.0 }"#).unwrap();
//! assert_eq!(settings.gamma_ma(Standard::En16612), 2.0);
//! assert_eq!(settings.gamma_ma(Standard::IStructE), 1.6);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{CalcError, CalcResult};
use crate::glass_factors::{Standard, DESIGN_VALUE_GLASS_MPA};

/// Environment variable naming a settings file
pub const SETTINGS_ENV_VAR: &str = "GLASS_SETTINGS";

/// Calculator-wide constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// Characteristic design value of glass f_g;k (N/mm²)
    pub design_value_glass_mpa: f64,

    /// γ_M;A under EN 16612
    pub gamma_ma_en16612: f64,

    /// γ_M;A under the IStructE guide
    pub gamma_ma_istructe: f64,

    /// γ_M;v for the prestress increment (both standards)
    pub gamma_mv: f64,

    /// Decimal places used when displaying strengths
    pub decimal_places: u8,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        CalculatorSettings {
            design_value_glass_mpa: DESIGN_VALUE_GLASS_MPA,
            gamma_ma_en16612: 1.8,
            gamma_ma_istructe: 1.6,
            gamma_mv: 1.2,
            decimal_places: 2,
        }
    }
}

impl CalculatorSettings {
    /// γ_M;A for a standard. Independent of glass category.
    pub fn gamma_ma(&self, standard: Standard) -> f64 {
        match standard {
            Standard::En16612 => self.gamma_ma_en16612,
            Standard::IStructE => self.gamma_ma_istructe,
        }
    }

    /// Parse settings from JSON; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        let settings: CalculatorSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check every constant is positive and finite.
    pub fn validate(&self) -> CalcResult<()> {
        let checks = [
            ("design_value_glass_mpa", self.design_value_glass_mpa),
            ("gamma_ma_en16612", self.gamma_ma_en16612),
            ("gamma_ma_istructe", self.gamma_ma_istructe),
            ("gamma_mv", self.gamma_mv),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::configuration(
                    name,
                    value.to_string(),
                    "Must be a positive finite number",
                ));
            }
        }
        if self.decimal_places > 6 {
            return Err(CalcError::configuration(
                "decimal_places",
                self.decimal_places.to_string(),
                "At most 6 decimal places are displayed",
            ));
        }
        Ok(())
    }

    /// Names of the constants that differ from the published defaults
    pub fn overridden_fields(&self) -> Vec<&'static str> {
        let defaults = CalculatorSettings::default();
        let mut fields = Vec::new();
        if self.design_value_glass_mpa != defaults.design_value_glass_mpa {
            fields.push("design_value_glass_mpa");
        }
        if self.gamma_ma_en16612 != defaults.gamma_ma_en16612 {
            fields.push("gamma_ma_en16612");
        }
        if self.gamma_ma_istructe != defaults.gamma_ma_istructe {
            fields.push("gamma_ma_istructe");
        }
        if self.gamma_mv != defaults.gamma_mv {
            fields.push("gamma_mv");
        }
        fields
    }
}

/// Load settings from a JSON file.
///
/// # Returns
///
/// * `Ok(CalculatorSettings)` - Parsed and validated settings
/// * `Err(CalcError::FileError)` - I/O error
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::Configuration)` - A constant is out of range
pub fn load_settings(path: &Path) -> CalcResult<CalculatorSettings> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read settings", path.display().to_string(), e.to_string()))?;

    let settings: CalculatorSettings =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;
    settings.validate()?;

    let overridden = settings.overridden_fields();
    if !overridden.is_empty() {
        warn!(
            path = %path.display(),
            fields = ?overridden,
            "settings override published partial factors"
        );
    }

    Ok(settings)
}
