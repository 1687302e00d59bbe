//! # Glass Design Strength
//!
//! Evaluates the design strength f_g;d of a glass pane for every
//! load-duration case, per EN 16612 or the IStructE guide.
//!
//! ## Formula selection
//!
//! | Category    | Standard | Formula                                                        |
//! |-------------|----------|----------------------------------------------------------------|
//! | Annealed    | either   | k_e k_mod k_sp k'_sp f_g;k / γ_M;A                              |
//! | Prestressed | EN 16612 | k_e k_mod k_sp k'_sp f_g;k / γ_M;A + k_v (f_b;k − f_g;k) / γ_M;v |
//! | Prestressed | IStructE | (k_mod k_sp k'_sp f_g;k / γ_M;A + k_v (f_b;k − f_g;k) / γ_M;v) k_e |
//!
//! γ_M;A depends on the standard only (1.8 EN 16612, 1.6 IStructE), for both
//! categories. γ_M;v = 1.2 applies to prestressed glass and is never read
//! for annealed glass.
//!
//! ## Assumptions
//!
//! - Factor values come from the closed option tables; the evaluator does
//!   not range-check them.
//! - Partial factors ARE checked: a zero, negative or non-finite γ is a
//!   configuration error, not a design case.
//!
//! ## Example
//!
//! ```rust
//! use glass_core::calculations::design_strength::{calculate, DesignStrengthInput};
//! use glass_core::glass_factors::{GlassProduct, Standard};
//! use glass_core::load_duration::LoadDuration;
//! use glass_core::settings::CalculatorSettings;
//!
//! let input = DesignStrengthInput {
//!     label: "Balustrade infill".to_string(),
//!     standard: Standard::En16612,
//!     glass: GlassProduct::Toughened,
//!     ..Default::default()
//! };
//!
//! let result = calculate(&input, &CalculatorSettings::default()).unwrap();
//! assert_eq!(result.table.len(), 10);
//!
//! let gust = result.table.row(LoadDuration::SingleGust).unwrap();
//! assert!((gust.design_strength_mpa - 87.5).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::registry::Equation;
use crate::errors::{CalcError, CalcResult};
use crate::glass_factors::{
    EdgeFinish, FactorSet, GlassCategory, GlassProduct, Standard, Strengthening, SurfaceFinish, SurfaceProfile,
};
use crate::load_duration::{LoadDuration, LoadDurationTable};
use crate::settings::CalculatorSettings;

/// User selections for one design strength table.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Balustrade infill",
///   "standard": "IStructE",
///   "glass": "Toughened",
///   "surface_profile": "Float",
///   "surface_finish": "None",
///   "strengthening": "Horizontal",
///   "edge": "Polished"
/// }
/// ```
///
/// Only `standard` and `glass` are required; the factor options default
/// to their unit-factor choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignStrengthInput {
    /// User label (e.g., "G-1", "Roof light")
    #[serde(default)]
    pub label: String,

    /// Governing standard
    pub standard: Standard,

    /// Glass product (fixes f_b;k and the glass category)
    pub glass: GlassProduct,

    /// Surface profile (k_sp)
    #[serde(default)]
    pub surface_profile: SurfaceProfile,

    /// Surface finish (k'_sp)
    #[serde(default)]
    pub surface_finish: SurfaceFinish,

    /// Strengthening process (k_v)
    #[serde(default)]
    pub strengthening: Strengthening,

    /// Edge condition (k_e)
    #[serde(default)]
    pub edge: EdgeFinish,
}

impl Default for DesignStrengthInput {
    fn default() -> Self {
        DesignStrengthInput {
            label: String::new(),
            standard: Standard::default(),
            glass: GlassProduct::default(),
            surface_profile: SurfaceProfile::default(),
            surface_finish: SurfaceFinish::default(),
            strengthening: Strengthening::default(),
            edge: EdgeFinish::default(),
        }
    }
}

impl DesignStrengthInput {
    /// Glass category implied by the selected product
    pub fn category(&self) -> GlassCategory {
        self.glass.category()
    }

    /// Resolve the option selections into numeric factors
    pub fn factor_set(&self, settings: &CalculatorSettings) -> FactorSet {
        FactorSet {
            ke: self.edge.factor(),
            kv: self.strengthening.factor(),
            ksp: self.surface_profile.factor(),
            ksp_prime: self.surface_finish.factor(),
            fbk_mpa: self.glass.fbk_mpa(),
            fgk_mpa: settings.design_value_glass_mpa,
        }
    }
}

/// Material partial factors for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyFactors {
    /// γ_M;A, applied to the annealed strength component
    pub gamma_ma: f64,

    /// γ_M;v, applied to the prestress increment. `None` for annealed glass.
    pub gamma_mv: Option<f64>,
}

impl SafetyFactors {
    /// Partial factors for a standard and glass category.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glass_core::calculations::design_strength::SafetyFactors;
    /// use glass_core::glass_factors::{GlassCategory, Standard};
    /// use glass_core::settings::CalculatorSettings;
    ///
    /// let settings = CalculatorSettings::default();
    /// let sf = SafetyFactors::resolve(Standard::En16612, GlassCategory::Prestressed, &settings);
    /// assert_eq!(sf.gamma_ma, 1.8);
    /// assert_eq!(sf.gamma_mv, Some(1.2));
    /// ```
    pub fn resolve(standard: Standard, category: GlassCategory, settings: &CalculatorSettings) -> Self {
        SafetyFactors {
            gamma_ma: settings.gamma_ma(standard),
            gamma_mv: match category {
                GlassCategory::Annealed => None,
                GlassCategory::Prestressed => Some(settings.gamma_mv),
            },
        }
    }

    /// Check the factors needed for `category` are positive and finite.
    ///
    /// Returns the γ_M;v to apply: `None` for annealed glass, whatever
    /// the struct carries.
    pub fn validate(&self, category: GlassCategory) -> CalcResult<Option<f64>> {
        check_partial_factor("gamma_ma", self.gamma_ma)?;
        match category {
            GlassCategory::Annealed => Ok(None),
            GlassCategory::Prestressed => {
                let gamma_mv = self.gamma_mv.ok_or_else(|| {
                    CalcError::configuration("gamma_mv", "none", "Prestressed glass requires γ_M;v")
                })?;
                check_partial_factor("gamma_mv", gamma_mv)?;
                Ok(Some(gamma_mv))
            }
        }
    }
}

fn check_partial_factor(name: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::configuration(
            name,
            value.to_string(),
            "Partial factor must be a positive finite number",
        ));
    }
    Ok(())
}

/// One load-duration row of the results table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Load-duration case
    pub duration: LoadDuration,

    /// Duration label, as displayed
    pub label: String,

    /// Load duration factor k_mod used for this row
    pub kmod: f64,

    /// Design strength f_g;d (N/mm²), full precision
    pub design_strength_mpa: f64,
}

impl ResultRow {
    /// Design strength rounded for display
    pub fn display_strength(&self, decimals: u8) -> String {
        format!("{:.*}", decimals as usize, round_to(self.design_strength_mpa, decimals))
    }
}

/// Ordered results for one evaluation, one row per load-duration entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsTable {
    rows: Vec<ResultRow>,
}

impl ResultsTable {
    /// Rows in load-duration table order
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for a given load duration
    pub fn row(&self, duration: LoadDuration) -> Option<&ResultRow> {
        self.rows.iter().find(|r| r.duration == duration)
    }

    /// Row with the lowest design strength (the governing, longest-duration case)
    pub fn minimum(&self) -> Option<&ResultRow> {
        self.rows
            .iter()
            .min_by(|a, b| a.design_strength_mpa.total_cmp(&b.design_strength_mpa))
    }

    /// Every row, paired with whether it is in `selected`.
    ///
    /// Highlighting never filters: all rows come back in table order.
    pub fn highlighted<'a>(&'a self, selected: &[LoadDuration]) -> Vec<(&'a ResultRow, bool)> {
        self.rows
            .iter()
            .map(|row| (row, selected.contains(&row.duration)))
            .collect()
    }

    /// Format as a plain-text table. Highlighted rows are marked with `>`.
    pub fn format_report(&self, selected: &[LoadDuration], decimals: u8) -> String {
        let mut out = format!("  {:<42} {:>6}  {:>14}\n", "Load duration", "k_mod", "f_g;d (N/mm²)");
        out.push_str(&format!("  {}\n", "-".repeat(64)));
        for (row, is_highlighted) in self.highlighted(selected) {
            out.push_str(&format!(
                "{} {:<42} {:>6.2}  {:>14}\n",
                if is_highlighted { ">" } else { " " },
                row.label,
                row.kmod,
                row.display_strength(decimals),
            ));
        }
        out
    }
}

/// Results from a design strength calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignStrengthResult {
    /// Label copied from the input
    pub label: String,

    /// Standard applied
    pub standard: Standard,

    /// Glass category applied
    pub category: GlassCategory,

    /// Formula variant used for every row
    pub equation: Equation,

    /// Resolved numeric factors
    pub factors: FactorSet,

    /// Resolved partial factors
    pub safety: SafetyFactors,

    /// One row per load duration
    pub table: ResultsTable,
}

impl DesignStrengthResult {
    /// Lowest design strength over all durations (N/mm²)
    pub fn min_design_strength_mpa(&self) -> Option<f64> {
        self.table.minimum().map(|r| r.design_strength_mpa)
    }
}

/// Design strength for a single k_mod.
///
/// # Returns
///
/// * `Ok(f64)` - f_g;d in N/mm²
/// * `Err(CalcError::Configuration)` - A required partial factor is not positive
pub fn design_strength(
    standard: Standard,
    category: GlassCategory,
    factors: &FactorSet,
    safety: &SafetyFactors,
    kmod: f64,
) -> CalcResult<f64> {
    let gamma_mv = safety.validate(category)?;
    Ok(apply_formula(standard, factors, safety.gamma_ma, gamma_mv, kmod))
}

/// `gamma_mv` is `Some` exactly when the glass is prestressed.
fn apply_formula(standard: Standard, f: &FactorSet, gamma_ma: f64, gamma_mv: Option<f64>, kmod: f64) -> f64 {
    match gamma_mv {
        None => (f.ke * kmod * f.ksp * f.ksp_prime * f.fgk_mpa) / gamma_ma,
        Some(gamma_mv) => {
            let prestress = (f.kv * (f.fbk_mpa - f.fgk_mpa)) / gamma_mv;
            match standard {
                Standard::En16612 => (f.ke * kmod * f.ksp * f.ksp_prime * f.fgk_mpa) / gamma_ma + prestress,
                Standard::IStructE => ((kmod * f.ksp * f.ksp_prime * f.fgk_mpa) / gamma_ma + prestress) * f.ke,
            }
        }
    }
}

/// Evaluate the design strength for every entry of a load-duration table.
///
/// # Arguments
///
/// * `standard` - Governing standard
/// * `category` - Annealed or prestressed
/// * `factors` - k_e, k_v, k_sp, k'_sp, f_b;k, f_g;k
/// * `safety` - γ_M;A and (for prestressed glass) γ_M;v
/// * `table` - Load-duration cases, in display order
///
/// # Returns
///
/// * `Ok(ResultsTable)` - One row per table entry, same order
/// * `Err(CalcError::Configuration)` - A required partial factor is not positive
pub fn evaluate(
    standard: Standard,
    category: GlassCategory,
    factors: &FactorSet,
    safety: &SafetyFactors,
    table: &LoadDurationTable,
) -> CalcResult<ResultsTable> {
    let gamma_mv = safety.validate(category)?;

    debug!(
        standard = standard.code(),
        category = category.display_name(),
        gamma_ma = safety.gamma_ma,
        gamma_mv = ?gamma_mv,
        rows = table.len(),
        "evaluating design strength"
    );

    let rows = table
        .entries()
        .iter()
        .map(|entry| ResultRow {
            duration: entry.duration,
            label: entry.duration.label().to_string(),
            kmod: entry.kmod,
            design_strength_mpa: apply_formula(standard, factors, safety.gamma_ma, gamma_mv, entry.kmod),
        })
        .collect();

    Ok(ResultsTable { rows })
}

/// Calculate the design strength table for a set of user selections.
///
/// Resolves the options against `settings`, then evaluates the standard
/// ten-case load-duration table.
///
/// # Returns
///
/// * `Ok(DesignStrengthResult)` - Table plus the resolved factors
/// * `Err(CalcError::Configuration)` - Settings hold an invalid constant
pub fn calculate(input: &DesignStrengthInput, settings: &CalculatorSettings) -> CalcResult<DesignStrengthResult> {
    settings.validate()?;

    let category = input.category();
    let factors = input.factor_set(settings);
    let safety = SafetyFactors::resolve(input.standard, category, settings);
    let table = evaluate(input.standard, category, &factors, &safety, &LoadDurationTable::standard())?;

    Ok(DesignStrengthResult {
        label: input.label.clone(),
        standard: input.standard,
        category,
        equation: Equation::governing(input.standard, category),
        factors,
        safety,
        table,
    })
}

/// Round half away from zero to `decimals` places (display only).
pub fn round_to(value: f64, decimals: u8) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unit_factors() -> FactorSet {
        FactorSet::new()
    }

    fn gamma(gamma_ma: f64, gamma_mv: Option<f64>) -> SafetyFactors {
        SafetyFactors { gamma_ma, gamma_mv }
    }

    #[test]
    fn test_annealed_istructe_single_gust() {
        let f_gd = design_strength(
            Standard::IStructE,
            GlassCategory::Annealed,
            &unit_factors(),
            &gamma(1.6, None),
            1.00,
        )
        .unwrap();
        // (1.0 × 1.00 × 1.0 × 1.0 × 45) / 1.6 = 28.125
        assert_eq!(round_to(f_gd, 2), 28.13);
    }

    #[test]
    fn test_annealed_istructe_permanent() {
        let f_gd = design_strength(
            Standard::IStructE,
            GlassCategory::Annealed,
            &unit_factors(),
            &gamma(1.6, None),
            0.29,
        )
        .unwrap();
        // 45 × 0.29 / 1.6 = 8.156
        assert_eq!(round_to(f_gd, 2), 8.16);
    }

    #[test]
    fn test_prestressed_en16612_single_gust() {
        let factors = unit_factors().with_fbk(120.0);
        let f_gd = design_strength(
            Standard::En16612,
            GlassCategory::Prestressed,
            &factors,
            &gamma(1.8, Some(1.2)),
            1.00,
        )
        .unwrap();
        // 45 / 1.8 + 75 / 1.2 = 25.0 + 62.5
        assert!((f_gd - 87.5).abs() < 1e-9);
    }

    #[test]
    fn test_prestressed_istructe_wind() {
        let factors = unit_factors().with_fbk(120.0);
        let f_gd = design_strength(
            Standard::IStructE,
            GlassCategory::Prestressed,
            &factors,
            &gamma(1.6, Some(1.2)),
            0.74,
        )
        .unwrap();
        // (0.74 × 45 / 1.6 + 75 / 1.2) × 1.0 = 20.8125 + 62.5
        assert_eq!(round_to(f_gd, 2), 83.31);
    }

    #[test]
    fn test_istructe_applies_ke_to_prestress_term() {
        let factors = unit_factors().with_fbk(120.0).with_ke(0.8);
        let safety = gamma(1.6, Some(1.2));
        let istructe = design_strength(Standard::IStructE, GlassCategory::Prestressed, &factors, &safety, 1.0).unwrap();
        let en = design_strength(Standard::En16612, GlassCategory::Prestressed, &factors, &safety, 1.0).unwrap();
        // IStructE: (28.125 + 62.5) × 0.8 = 72.5; EN form: 22.5 + 62.5 = 85.0
        assert!((istructe - 72.5).abs() < 1e-9);
        assert!((en - 85.0).abs() < 1e-9);
    }

    #[test]
    fn test_annealed_ignores_gamma_mv() {
        let factors = unit_factors().with_ke(0.8).with_ksp(0.75);
        let table = LoadDurationTable::standard();
        for standard in Standard::ALL {
            let without = evaluate(standard, GlassCategory::Annealed, &factors, &gamma(1.6, None), &table).unwrap();
            let with = evaluate(standard, GlassCategory::Annealed, &factors, &gamma(1.6, Some(1.2)), &table).unwrap();
            let broken = evaluate(standard, GlassCategory::Annealed, &factors, &gamma(1.6, Some(-3.0)), &table).unwrap();
            assert_eq!(without, with);
            assert_eq!(without, broken);
        }
    }

    #[test]
    fn test_gamma_ma_by_standard_not_category() {
        let settings = CalculatorSettings::default();
        for category in [GlassCategory::Annealed, GlassCategory::Prestressed] {
            assert_eq!(SafetyFactors::resolve(Standard::IStructE, category, &settings).gamma_ma, 1.6);
            assert_eq!(SafetyFactors::resolve(Standard::En16612, category, &settings).gamma_ma, 1.8);
        }
        assert_eq!(
            SafetyFactors::resolve(Standard::En16612, GlassCategory::Annealed, &settings).gamma_mv,
            None
        );
    }

    #[test]
    fn test_zero_gamma_ma_is_configuration_error() {
        let err = design_strength(
            Standard::En16612,
            GlassCategory::Annealed,
            &unit_factors(),
            &gamma(0.0, None),
            1.0,
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    }

    #[test]
    fn test_prestressed_requires_positive_gamma_mv() {
        let table = LoadDurationTable::standard();
        let factors = unit_factors().with_fbk(70.0);
        for bad in [None, Some(0.0), Some(-1.2), Some(f64::NAN)] {
            let result = evaluate(Standard::IStructE, GlassCategory::Prestressed, &factors, &gamma(1.6, bad), &table);
            assert!(matches!(result, Err(CalcError::Configuration { .. })), "{:?}", bad);
        }
    }

    #[test]
    fn test_table_has_ten_rows_in_order() {
        let input = DesignStrengthInput {
            glass: GlassProduct::HeatStrengthened,
            ..Default::default()
        };
        let result = calculate(&input, &CalculatorSettings::default()).unwrap();
        assert_eq!(result.table.len(), 10);
        let durations: Vec<_> = result.table.rows().iter().map(|r| r.duration).collect();
        assert_eq!(durations, LoadDuration::ALL.to_vec());
        assert_eq!(result.table.rows()[3].label, "10 minutes – Multiple gust / Wind");
    }

    #[test]
    fn test_highlighting_is_an_overlay() {
        let result = calculate(&DesignStrengthInput::default(), &CalculatorSettings::default()).unwrap();
        let selected = [LoadDuration::Permanent, LoadDuration::MultipleGust];
        let rows = result.table.highlighted(&selected);
        assert_eq!(rows.len(), 10);
        let marked: Vec<_> = rows.iter().filter(|(_, h)| *h).map(|(r, _)| r.duration).collect();
        assert_eq!(marked, vec![LoadDuration::MultipleGust, LoadDuration::Permanent]);
    }

    #[test]
    fn test_idempotent() {
        let input = DesignStrengthInput {
            standard: Standard::En16612,
            glass: GlassProduct::ToughenedPatterned,
            surface_profile: SurfaceProfile::Patterned,
            surface_finish: SurfaceFinish::SandBlasted,
            strengthening: Strengthening::Vertical,
            edge: EdgeFinish::AsCut,
            ..Default::default()
        };
        let settings = CalculatorSettings::default();
        let first = calculate(&input, &settings).unwrap();
        let second = calculate(&input, &settings).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_calculate_records_governing_equation() {
        let settings = CalculatorSettings::default();
        let annealed = calculate(&DesignStrengthInput::default(), &settings).unwrap();
        assert_eq!(annealed.equation, Equation::AnnealedDesignStrength);
        assert_eq!(annealed.category, GlassCategory::Annealed);

        let toughened = DesignStrengthInput {
            standard: Standard::En16612,
            glass: GlassProduct::Toughened,
            ..Default::default()
        };
        let result = calculate(&toughened, &settings).unwrap();
        assert_eq!(result.equation, Equation::PrestressedDesignStrengthEn16612);
        assert_eq!(result.safety.gamma_mv, Some(1.2));
    }

    #[test]
    fn test_minimum_is_permanent_case() {
        let result = calculate(&DesignStrengthInput::default(), &CalculatorSettings::default()).unwrap();
        let min = result.table.minimum().unwrap();
        assert_eq!(min.duration, LoadDuration::Permanent);
        assert_eq!(round_to(result.min_design_strength_mpa().unwrap(), 2), 8.16);
    }

    #[test]
    fn test_calculate_rejects_invalid_settings() {
        let settings = CalculatorSettings {
            gamma_mv: 0.0,
            ..Default::default()
        };
        assert!(calculate(&DesignStrengthInput::default(), &settings).is_err());
    }

    #[test]
    fn test_format_report_marks_highlighted_rows() {
        let result = calculate(&DesignStrengthInput::default(), &CalculatorSettings::default()).unwrap();
        let report = result.table.format_report(&[LoadDuration::SingleGust], 2);
        let gust_line = report.lines().find(|l| l.contains("Single gust")).unwrap();
        assert!(gust_line.starts_with('>'));
        assert!(gust_line.ends_with("28.13"));
        let permanent_line = report.lines().find(|l| l.contains("Permanent")).unwrap();
        assert!(permanent_line.starts_with(' '));
        assert!(permanent_line.ends_with("8.16"));
    }

    #[test]
    fn test_input_json_defaults() {
        let input: DesignStrengthInput =
            serde_json::from_str(r#"{ "standard": "En16612", "glass": "Toughened" }"#).unwrap();
        assert_eq!(input.edge, EdgeFinish::Surface);
        assert_eq!(input.surface_finish, SurfaceFinish::None);
        assert!(input.label.is_empty());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(28.125, 2), 28.13);
        assert_eq!(round_to(83.3125, 2), 83.31);
        assert_eq!(round_to(87.5, 0), 88.0);
    }

    fn standard_strategy() -> impl Strategy<Value = Standard> {
        prop_oneof![Just(Standard::En16612), Just(Standard::IStructE)]
    }

    fn category_strategy() -> impl Strategy<Value = GlassCategory> {
        prop_oneof![Just(GlassCategory::Annealed), Just(GlassCategory::Prestressed)]
    }

    proptest! {
        #[test]
        fn prop_non_decreasing_in_kmod(
            standard in standard_strategy(),
            category in category_strategy(),
            ke in 0.5f64..=1.0,
            kv in 0.6f64..=1.0,
            ksp in 0.6f64..=1.0,
            ksp_prime in 0.6f64..=1.0,
            fbk in 45.0f64..=150.0,
            k1 in 0.01f64..=1.0,
            k2 in 0.01f64..=1.0,
        ) {
            let factors = FactorSet::new()
                .with_ke(ke)
                .with_kv(kv)
                .with_ksp(ksp)
                .with_ksp_prime(ksp_prime)
                .with_fbk(fbk);
            let safety = SafetyFactors::resolve(standard, category, &CalculatorSettings::default());
            let (lo, hi) = if k1 <= k2 { (k1, k2) } else { (k2, k1) };
            let f_lo = design_strength(standard, category, &factors, &safety, lo).unwrap();
            let f_hi = design_strength(standard, category, &factors, &safety, hi).unwrap();
            prop_assert!(f_lo <= f_hi);
        }

        #[test]
        fn prop_annealed_independent_of_gamma_mv(
            standard in standard_strategy(),
            gamma_mv in prop::option::of(-5.0f64..5.0),
            kmod in 0.01f64..=1.0,
        ) {
            let factors = FactorSet::new();
            let plain = design_strength(standard, GlassCategory::Annealed, &factors, &gamma(1.6, None), kmod).unwrap();
            let other = design_strength(standard, GlassCategory::Annealed, &factors, &gamma(1.6, gamma_mv), kmod).unwrap();
            prop_assert_eq!(plain, other);
        }
    }
}
