//! # Glass Strength Factors
//!
//! Option tables for structural glass design strength per EN 16612 and the
//! IStructE *Structural Use of Glass in Buildings* guide.
//!
//! ## Overview
//!
//! The design strength f_g;d is built from a characteristic strength and a
//! handful of dimensionless modification factors:
//!
//! ```text
//! Annealed:            f_g;d = k_e k_mod k_sp k'_sp f_g;k / γ_M;A
//! Prestressed EN16612: f_g;d = k_e k_mod k_sp k'_sp f_g;k / γ_M;A + k_v (f_b;k - f_g;k) / γ_M;v
//! Prestressed IStructE:f_g;d = (k_mod k_sp k'_sp f_g;k / γ_M;A + k_v (f_b;k - f_g;k) / γ_M;v) k_e
//! ```
//!
//! ## Factor Summary
//!
//! | Factor | Description              | Values            |
//! |--------|--------------------------|-------------------|
//! | f_b;k  | Characteristic bending   | 45 - 150 N/mm²    |
//! | k_sp   | Surface profile          | 0.6 - 1.0         |
//! | k'_sp  | Surface finish           | 0.6 - 1.0         |
//! | k_v    | Strengthening process    | 0.6 or 1.0        |
//! | k_e    | Edge strength            | 0.8 or 1.0        |
//! | k_mod  | Load duration            | see [`crate::load_duration`] |
//!
//! Every option is a closed enum, so a selection can never name a value
//! that is missing from its table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Code References
// ============================================================================

/// Clause references for the factors and formulas, used in reports.
pub mod code_ref {
    /// EN 16612 design strength of annealed glass
    pub const EN_ANNEALED: &str = "EN 16612:2019 Eq. (6)";
    /// EN 16612 design strength of prestressed glass
    pub const EN_PRESTRESSED: &str = "EN 16612:2019 Eq. (7)";
    /// EN 16612 material partial factors
    pub const EN_PARTIAL_FACTORS: &str = "EN 16612:2019 Table 5";
    /// EN 16612 load duration factor
    pub const EN_K_MOD: &str = "EN 16612:2019 Eq. (C.1)";
    /// EN 16612 surface profile factor
    pub const EN_K_SP: &str = "EN 16612:2019 Table 8";
    /// EN 16612 strengthening factor
    pub const EN_K_V: &str = "EN 16612:2019 Table 9";
    /// EN 16612 edge strength factor
    pub const EN_K_E: &str = "EN 16612:2019 Table 10";
    /// IStructE design strength (annealed and prestressed)
    pub const ISTRUCTE_DESIGN_STRENGTH: &str = "IStructE SUGB (2014) Section 6.3";
    /// IStructE material partial factors
    pub const ISTRUCTE_PARTIAL_FACTORS: &str = "IStructE SUGB (2014) Table 6.2";
}

/// Characteristic design value of glass f_g;k (N/mm²).
pub const DESIGN_VALUE_GLASS_MPA: f64 = 45.0;

/// Parse an option code against a closed table.
///
/// Codes match case-insensitively and accept `_` or spaces in place of `-`.
fn parse_code<T: Copy>(all: &[T], code_of: fn(&T) -> &'static str, table: &str, s: &str) -> CalcResult<T> {
    let wanted = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
    all.iter()
        .find(|option| code_of(option) == wanted)
        .copied()
        .ok_or_else(|| CalcError::option_not_found(table, s.trim()))
}

// ============================================================================
// Standard
// ============================================================================

/// Design standard governing the formula and partial factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Standard {
    /// EN 16612: Glass in building, determination of lateral load resistance
    En16612,

    /// IStructE: Structural Use of Glass in Buildings (UK institutional guide)
    #[default]
    IStructE,
}

impl Standard {
    /// All standards for UI selection
    pub const ALL: [Standard; 2] = [Standard::IStructE, Standard::En16612];

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Standard::En16612 => "EN 16612",
            Standard::IStructE => "IStructE Structural Use of Glass in Buildings",
        }
    }

    /// Short code for command-line selection
    pub fn code(&self) -> &'static str {
        match self {
            Standard::En16612 => "en16612",
            Standard::IStructE => "istructe",
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Standard {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        parse_code(&Self::ALL, Self::code, "standard", s)
    }
}

// ============================================================================
// Glass Category / Product (f_b;k)
// ============================================================================

/// Glass category: selects the formula family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlassCategory {
    /// Untreated float or patterned glass
    Annealed,
    /// Heat strengthened, toughened or chemically strengthened glass
    Prestressed,
}

impl GlassCategory {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            GlassCategory::Annealed => "Annealed",
            GlassCategory::Prestressed => "Prestressed",
        }
    }

    /// Whether the prestress term (and γ_M;v) participates
    pub fn is_prestressed(&self) -> bool {
        matches!(self, GlassCategory::Prestressed)
    }
}

impl fmt::Display for GlassCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Glass product, which fixes the characteristic bending strength f_b;k
/// and the glass category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GlassProduct {
    /// Annealed float glass (EN 572-1): 45 N/mm²
    #[default]
    Annealed,
    /// Heat strengthened float (EN 1863-1): 70 N/mm²
    HeatStrengthened,
    /// Heat strengthened patterned (EN 1863-1): 55 N/mm²
    HeatStrengthenedPatterned,
    /// Heat strengthened enamelled (EN 1863-1): 45 N/mm²
    HeatStrengthenedEnamelled,
    /// Thermally toughened float (EN 12150-1): 120 N/mm²
    Toughened,
    /// Thermally toughened patterned (EN 12150-1): 90 N/mm²
    ToughenedPatterned,
    /// Thermally toughened enamelled (EN 12150-1): 75 N/mm²
    ToughenedEnamelled,
    /// Chemically strengthened float (EN 12337-1): 150 N/mm²
    ChemicallyStrengthened,
    /// Chemically strengthened patterned (EN 12337-1): 100 N/mm²
    ChemicallyStrengthenedPatterned,
}

impl GlassProduct {
    /// All glass products for UI selection
    pub const ALL: [GlassProduct; 9] = [
        GlassProduct::Annealed,
        GlassProduct::HeatStrengthened,
        GlassProduct::HeatStrengthenedPatterned,
        GlassProduct::HeatStrengthenedEnamelled,
        GlassProduct::Toughened,
        GlassProduct::ToughenedPatterned,
        GlassProduct::ToughenedEnamelled,
        GlassProduct::ChemicallyStrengthened,
        GlassProduct::ChemicallyStrengthenedPatterned,
    ];

    /// Characteristic bending strength f_b;k (N/mm²)
    pub fn fbk_mpa(&self) -> f64 {
        match self {
            GlassProduct::Annealed => 45.0,
            GlassProduct::HeatStrengthened => 70.0,
            GlassProduct::HeatStrengthenedPatterned => 55.0,
            GlassProduct::HeatStrengthenedEnamelled => 45.0,
            GlassProduct::Toughened => 120.0,
            GlassProduct::ToughenedPatterned => 90.0,
            GlassProduct::ToughenedEnamelled => 75.0,
            GlassProduct::ChemicallyStrengthened => 150.0,
            GlassProduct::ChemicallyStrengthenedPatterned => 100.0,
        }
    }

    /// Glass category implied by the product
    pub fn category(&self) -> GlassCategory {
        match self {
            GlassProduct::Annealed => GlassCategory::Annealed,
            _ => GlassCategory::Prestressed,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            GlassProduct::Annealed => "Annealed (EN 572-1, 45 N/mm²)",
            GlassProduct::HeatStrengthened => "Heat strengthened (EN 1863-1, 70 N/mm²)",
            GlassProduct::HeatStrengthenedPatterned => "Heat strengthened patterned (EN 1863-1, 55 N/mm²)",
            GlassProduct::HeatStrengthenedEnamelled => "Heat strengthened enamelled (EN 1863-1, 45 N/mm²)",
            GlassProduct::Toughened => "Thermally toughened (EN 12150-1, 120 N/mm²)",
            GlassProduct::ToughenedPatterned => "Thermally toughened patterned (EN 12150-1, 90 N/mm²)",
            GlassProduct::ToughenedEnamelled => "Thermally toughened enamelled (EN 12150-1, 75 N/mm²)",
            GlassProduct::ChemicallyStrengthened => "Chemically strengthened (EN 12337-1, 150 N/mm²)",
            GlassProduct::ChemicallyStrengthenedPatterned => {
                "Chemically strengthened patterned (EN 12337-1, 100 N/mm²)"
            }
        }
    }

    /// Short code for command-line selection
    pub fn code(&self) -> &'static str {
        match self {
            GlassProduct::Annealed => "annealed",
            GlassProduct::HeatStrengthened => "heat-strengthened",
            GlassProduct::HeatStrengthenedPatterned => "heat-strengthened-patterned",
            GlassProduct::HeatStrengthenedEnamelled => "heat-strengthened-enamelled",
            GlassProduct::Toughened => "toughened",
            GlassProduct::ToughenedPatterned => "toughened-patterned",
            GlassProduct::ToughenedEnamelled => "toughened-enamelled",
            GlassProduct::ChemicallyStrengthened => "chemically-strengthened",
            GlassProduct::ChemicallyStrengthenedPatterned => "chemically-strengthened-patterned",
        }
    }
}

impl fmt::Display for GlassProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for GlassProduct {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        parse_code(&Self::ALL, Self::code, "glass product", s)
    }
}

// ============================================================================
// Surface Profile (k_sp)
// ============================================================================

/// Glass surface profile for the k_sp factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SurfaceProfile {
    /// Float glass: k_sp = 1.0
    #[default]
    Float,
    /// Drawn sheet glass: k_sp = 1.0
    DrawnSheet,
    /// Enamelled float or drawn sheet: k_sp = 1.0
    EnamelledFloat,
    /// Patterned glass: k_sp = 0.75
    Patterned,
    /// Enamelled patterned glass: k_sp = 0.75
    EnamelledPatterned,
    /// Polished wired glass: k_sp = 0.75
    PolishedWired,
    /// Patterned wired glass: k_sp = 0.6
    PatternedWired,
}

impl SurfaceProfile {
    /// All surface profiles for UI selection
    pub const ALL: [SurfaceProfile; 7] = [
        SurfaceProfile::Float,
        SurfaceProfile::DrawnSheet,
        SurfaceProfile::EnamelledFloat,
        SurfaceProfile::Patterned,
        SurfaceProfile::EnamelledPatterned,
        SurfaceProfile::PolishedWired,
        SurfaceProfile::PatternedWired,
    ];

    /// Get k_sp factor
    pub fn factor(&self) -> f64 {
        match self {
            SurfaceProfile::Float | SurfaceProfile::DrawnSheet | SurfaceProfile::EnamelledFloat => 1.0,
            SurfaceProfile::Patterned | SurfaceProfile::EnamelledPatterned | SurfaceProfile::PolishedWired => 0.75,
            SurfaceProfile::PatternedWired => 0.6,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            SurfaceProfile::Float => "Float glass",
            SurfaceProfile::DrawnSheet => "Drawn sheet glass",
            SurfaceProfile::EnamelledFloat => "Enamelled float or drawn sheet glass",
            SurfaceProfile::Patterned => "Patterned glass",
            SurfaceProfile::EnamelledPatterned => "Enamelled patterned glass",
            SurfaceProfile::PolishedWired => "Polished wired glass",
            SurfaceProfile::PatternedWired => "Patterned wired glass",
        }
    }

    /// Short code for command-line selection
    pub fn code(&self) -> &'static str {
        match self {
            SurfaceProfile::Float => "float",
            SurfaceProfile::DrawnSheet => "drawn-sheet",
            SurfaceProfile::EnamelledFloat => "enamelled-float",
            SurfaceProfile::Patterned => "patterned",
            SurfaceProfile::EnamelledPatterned => "enamelled-patterned",
            SurfaceProfile::PolishedWired => "polished-wired",
            SurfaceProfile::PatternedWired => "patterned-wired",
        }
    }
}

impl fmt::Display for SurfaceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for SurfaceProfile {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        parse_code(&Self::ALL, Self::code, "surface profile", s)
    }
}

// ============================================================================
// Surface Finish (k'_sp)
// ============================================================================

/// Surface finish treatment for the k'_sp factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SurfaceFinish {
    /// No surface treatment: k'_sp = 1.0
    #[default]
    None,
    /// Sand blasted: k'_sp = 0.6
    SandBlasted,
    /// Acid etched: k'_sp = 1.0
    AcidEtched,
}

impl SurfaceFinish {
    /// All surface finishes for UI selection
    pub const ALL: [SurfaceFinish; 3] = [SurfaceFinish::None, SurfaceFinish::SandBlasted, SurfaceFinish::AcidEtched];

    /// Get k'_sp factor
    pub fn factor(&self) -> f64 {
        match self {
            SurfaceFinish::None => 1.0,
            SurfaceFinish::SandBlasted => 0.6,
            SurfaceFinish::AcidEtched => 1.0,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            SurfaceFinish::None => "None",
            SurfaceFinish::SandBlasted => "Sand blasted",
            SurfaceFinish::AcidEtched => "Acid etched",
        }
    }

    /// Short code for command-line selection
    pub fn code(&self) -> &'static str {
        match self {
            SurfaceFinish::None => "none",
            SurfaceFinish::SandBlasted => "sand-blasted",
            SurfaceFinish::AcidEtched => "acid-etched",
        }
    }
}

impl fmt::Display for SurfaceFinish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for SurfaceFinish {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        parse_code(&Self::ALL, Self::code, "surface finish", s)
    }
}

// ============================================================================
// Strengthening (k_v)
// ============================================================================

/// Toughening process orientation for the k_v factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Strengthening {
    /// Horizontal toughening (roller hearth): k_v = 1.0
    #[default]
    Horizontal,
    /// Vertical toughening (tong marks): k_v = 0.6
    Vertical,
}

impl Strengthening {
    /// All strengthening processes for UI selection
    pub const ALL: [Strengthening; 2] = [Strengthening::Horizontal, Strengthening::Vertical];

    /// Get k_v factor
    pub fn factor(&self) -> f64 {
        match self {
            Strengthening::Horizontal => 1.0,
            Strengthening::Vertical => 0.6,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Strengthening::Horizontal => "Horizontal toughening",
            Strengthening::Vertical => "Vertical toughening",
        }
    }

    /// Short code for command-line selection
    pub fn code(&self) -> &'static str {
        match self {
            Strengthening::Horizontal => "horizontal",
            Strengthening::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Strengthening {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Strengthening {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        parse_code(&Self::ALL, Self::code, "strengthening", s)
    }
}

// ============================================================================
// Edge Strength (k_e)
// ============================================================================

/// Edge condition for the k_e factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EdgeFinish {
    /// Stress governed away from the edge (plate bending): k_e = 1.0
    #[default]
    Surface,
    /// Polished edges: k_e = 1.0
    Polished,
    /// Ground or arrissed edges: k_e = 0.8
    GroundArrissed,
    /// As-cut edges: k_e = 0.8
    AsCut,
}

impl EdgeFinish {
    /// All edge conditions for UI selection
    pub const ALL: [EdgeFinish; 4] = [
        EdgeFinish::Surface,
        EdgeFinish::Polished,
        EdgeFinish::GroundArrissed,
        EdgeFinish::AsCut,
    ];

    /// Get k_e factor
    pub fn factor(&self) -> f64 {
        match self {
            EdgeFinish::Surface | EdgeFinish::Polished => 1.0,
            EdgeFinish::GroundArrissed | EdgeFinish::AsCut => 0.8,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            EdgeFinish::Surface => "No edge stress (surface)",
            EdgeFinish::Polished => "Polished edges",
            EdgeFinish::GroundArrissed => "Ground or arrissed edges",
            EdgeFinish::AsCut => "As-cut edges",
        }
    }

    /// Short code for command-line selection
    pub fn code(&self) -> &'static str {
        match self {
            EdgeFinish::Surface => "surface",
            EdgeFinish::Polished => "polished",
            EdgeFinish::GroundArrissed => "ground",
            EdgeFinish::AsCut => "as-cut",
        }
    }
}

impl fmt::Display for EdgeFinish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for EdgeFinish {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        parse_code(&Self::ALL, Self::code, "edge finish", s)
    }
}

// ============================================================================
// Factor Set
// ============================================================================

/// Numeric factors for one evaluation (everything except k_mod, which
/// varies per load-duration row).
///
/// Values are taken as given. Selecting them from the option tables is
/// the caller's job; the evaluator does not range-check them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorSet {
    /// Edge strength factor k_e
    pub ke: f64,
    /// Strengthening factor k_v
    pub kv: f64,
    /// Surface profile factor k_sp
    pub ksp: f64,
    /// Surface finish factor k'_sp
    pub ksp_prime: f64,
    /// Characteristic bending strength f_b;k (N/mm²)
    pub fbk_mpa: f64,
    /// Characteristic design value of glass f_g;k (N/mm²)
    pub fgk_mpa: f64,
}

impl Default for FactorSet {
    fn default() -> Self {
        Self {
            ke: 1.0,
            kv: 1.0,
            ksp: 1.0,
            ksp_prime: 1.0,
            fbk_mpa: DESIGN_VALUE_GLASS_MPA,
            fgk_mpa: DESIGN_VALUE_GLASS_MPA,
        }
    }
}

impl FactorSet {
    /// Unit factors with f_b;k = f_g;k = 45 N/mm²
    pub fn new() -> Self {
        Self::default()
    }

    /// Set edge strength factor
    pub fn with_ke(mut self, ke: f64) -> Self {
        self.ke = ke;
        self
    }

    /// Set strengthening factor
    pub fn with_kv(mut self, kv: f64) -> Self {
        self.kv = kv;
        self
    }

    /// Set surface profile factor
    pub fn with_ksp(mut self, ksp: f64) -> Self {
        self.ksp = ksp;
        self
    }

    /// Set surface finish factor
    pub fn with_ksp_prime(mut self, ksp_prime: f64) -> Self {
        self.ksp_prime = ksp_prime;
        self
    }

    /// Set characteristic bending strength
    pub fn with_fbk(mut self, fbk_mpa: f64) -> Self {
        self.fbk_mpa = fbk_mpa;
        self
    }

    /// Set characteristic design value of glass
    pub fn with_fgk(mut self, fgk_mpa: f64) -> Self {
        self.fgk_mpa = fgk_mpa;
        self
    }

    /// Prestress increment f_b;k - f_g;k (N/mm²)
    pub fn prestress_increment_mpa(&self) -> f64 {
        self.fbk_mpa - self.fgk_mpa
    }

    /// Format as a multi-line string for reports
    pub fn format_report(&self) -> String {
        format!(
            "Glass Strength Factors\n\
             ================================================\n\
             f_b;k (Char. bending)   = {:.1} N/mm²\n\
             f_g;k (Design value)    = {:.1} N/mm²\n\
             k_sp  (Surface profile) = {:.2}    {}\n\
             k'_sp (Surface finish)  = {:.2}\n\
             k_v   (Strengthening)   = {:.2}    {}\n\
             k_e   (Edge strength)   = {:.2}    {}",
            self.fbk_mpa,
            self.fgk_mpa,
            self.ksp, code_ref::EN_K_SP,
            self.ksp_prime,
            self.kv, code_ref::EN_K_V,
            self.ke, code_ref::EN_K_E,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glass_product_strengths() {
        assert_eq!(GlassProduct::Annealed.fbk_mpa(), 45.0);
        assert_eq!(GlassProduct::HeatStrengthened.fbk_mpa(), 70.0);
        assert_eq!(GlassProduct::Toughened.fbk_mpa(), 120.0);
        assert_eq!(GlassProduct::ChemicallyStrengthened.fbk_mpa(), 150.0);
    }

    #[test]
    fn test_glass_product_strengths_from_fixed_set() {
        let allowed = [45.0, 55.0, 70.0, 75.0, 90.0, 100.0, 120.0, 150.0];
        for product in GlassProduct::ALL {
            assert!(allowed.contains(&product.fbk_mpa()), "{:?}", product);
        }
    }

    #[test]
    fn test_only_annealed_is_annealed() {
        let annealed: Vec<_> = GlassProduct::ALL
            .iter()
            .filter(|p| p.category() == GlassCategory::Annealed)
            .collect();
        assert_eq!(annealed, vec![&GlassProduct::Annealed]);
        assert!(GlassProduct::HeatStrengthenedEnamelled.category().is_prestressed());
    }

    #[test]
    fn test_surface_profile_factors() {
        assert_eq!(SurfaceProfile::Float.factor(), 1.0);
        assert_eq!(SurfaceProfile::Patterned.factor(), 0.75);
        assert_eq!(SurfaceProfile::PatternedWired.factor(), 0.6);
    }

    #[test]
    fn test_surface_finish_factors() {
        assert_eq!(SurfaceFinish::default().factor(), 1.0);
        assert_eq!(SurfaceFinish::SandBlasted.factor(), 0.6);
        assert_eq!(SurfaceFinish::AcidEtched.factor(), 1.0);
    }

    #[test]
    fn test_strengthening_and_edge_factors() {
        assert_eq!(Strengthening::Horizontal.factor(), 1.0);
        assert_eq!(Strengthening::Vertical.factor(), 0.6);
        assert_eq!(EdgeFinish::Polished.factor(), 1.0);
        assert_eq!(EdgeFinish::AsCut.factor(), 0.8);
    }

    #[test]
    fn test_codes_parse_back() {
        for product in GlassProduct::ALL {
            assert_eq!(product.code().parse::<GlassProduct>().unwrap(), product);
        }
        for profile in SurfaceProfile::ALL {
            assert_eq!(profile.code().parse::<SurfaceProfile>().unwrap(), profile);
        }
        for edge in EdgeFinish::ALL {
            assert_eq!(edge.code().parse::<EdgeFinish>().unwrap(), edge);
        }
    }

    #[test]
    fn test_code_parsing_is_lenient() {
        assert_eq!("EN16612".parse::<Standard>().unwrap(), Standard::En16612);
        assert_eq!("sand_blasted".parse::<SurfaceFinish>().unwrap(), SurfaceFinish::SandBlasted);
        assert_eq!(" Heat Strengthened ".parse::<GlassProduct>().unwrap(), GlassProduct::HeatStrengthened);
    }

    #[test]
    fn test_unknown_code() {
        let err = "frosted".parse::<SurfaceFinish>().unwrap_err();
        assert_eq!(err, CalcError::option_not_found("surface finish", "frosted"));
    }

    #[test]
    fn test_factor_set_builder() {
        let factors = FactorSet::new().with_fbk(120.0).with_ke(0.8).with_kv(0.6);
        assert_eq!(factors.prestress_increment_mpa(), 75.0);
        assert_eq!(factors.ke, 0.8);
        assert_eq!(factors.ksp_prime, 1.0);
        assert!(factors.format_report().contains("120.0 N/mm²"));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&GlassProduct::ToughenedPatterned).unwrap();
        assert_eq!(json, "\"ToughenedPatterned\"");

        let parsed: Standard = serde_json::from_str("\"En16612\"").unwrap();
        assert_eq!(parsed, Standard::En16612);
    }
}
