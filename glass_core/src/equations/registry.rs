//! # Equation Registry
//!
//! Central registry of the glass design equations. Each equation carries
//! the metadata needed to print it in a report or in the reference
//! documentation: formulas, code reference, variables and assumptions.
//!
//! ## Usage
//!
//! ```rust
//! use glass_core::equations::registry::Equation;
//! use glass_core::glass_factors::{GlassCategory, Standard};
//!
//! let eq = Equation::governing(Standard::IStructE, GlassCategory::Prestressed);
//! let meta = eq.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! ```

use serde::{Deserialize, Serialize};

use crate::glass_factors::{code_ref, GlassCategory, Standard};

// ============================================================================
// Code References
// ============================================================================

/// Reference to the standard an equation is taken from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CodeReference {
    /// EN 16612 clause or table
    En16612 { clause: &'static str },
    /// IStructE Structural Use of Glass in Buildings
    IStructE { section: &'static str },
    /// Same expression in both standards
    Both {
        en16612: &'static str,
        istructe: &'static str,
    },
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::En16612 { clause } => clause.to_string(),
            CodeReference::IStructE { section } => section.to_string(),
            CodeReference::Both { en16612, istructe } => format!("{}; {}", en16612, istructe),
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol in Typst math notation (e.g., `k_"mod"`)
    pub symbol: &'static str,
    /// Plain-text symbol (e.g., "k_mod")
    pub symbol_plain: &'static str,
    /// Description
    pub description: &'static str,
    /// Units ("-" for dimensionless)
    pub units: &'static str,
}

impl Variable {
    pub const fn new(
        symbol: &'static str,
        symbol_plain: &'static str,
        description: &'static str,
        units: &'static str,
    ) -> Self {
        Self { symbol, symbol_plain, description, units }
    }
}

const F_GD: Variable = Variable::new(r#"f_("g;d")"#, "f_g;d", "Design strength", "N/mm²");
const F_GK: Variable = Variable::new(r#"f_("g;k")"#, "f_g;k", "Characteristic design value of glass (45)", "N/mm²");
const F_BK: Variable = Variable::new(r#"f_("b;k")"#, "f_b;k", "Characteristic bending strength", "N/mm²");
const K_E: Variable = Variable::new("k_e", "k_e", "Edge strength factor", "-");
const K_MOD: Variable = Variable::new(r#"k_"mod""#, "k_mod", "Load duration factor", "-");
const K_SP: Variable = Variable::new(r#"k_"sp""#, "k_sp", "Glass surface profile factor", "-");
const K_SP_PRIME: Variable = Variable::new(r#"k'_"sp""#, "k'_sp", "Surface finish factor", "-");
const K_V: Variable = Variable::new("k_v", "k_v", "Strengthening factor", "-");
const GAMMA_MA: Variable = Variable::new(r#"gamma_("M;A")"#, "γ_M;A", "Material partial factor, annealed glass", "-");
const GAMMA_MV: Variable = Variable::new(r#"gamma_("M;v")"#, "γ_M;v", "Material partial factor, surface prestress", "-");

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for a design equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in Typst math notation for PDF rendering
    pub formula_typst: &'static str,
    /// The formula in plain text for markdown
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Function implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used by the design strength calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equation {
    /// f_g;d = k_e k_mod k_sp k'_sp f_g;k / γ_M;A
    AnnealedDesignStrength,
    /// EN 16612 prestressed glass: annealed term plus k_v (f_b;k − f_g;k) / γ_M;v
    PrestressedDesignStrengthEn16612,
    /// IStructE prestressed glass: (annealed term + prestress term) × k_e
    PrestressedDesignStrengthIStructE,
    /// γ_M;A and γ_M;v values per standard
    MaterialPartialFactors,
    /// k_mod = 0.663 t^(-1/16)
    LoadDurationFactor,
}

/// Every equation, in documentation order
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::AnnealedDesignStrength,
    Equation::PrestressedDesignStrengthEn16612,
    Equation::PrestressedDesignStrengthIStructE,
    Equation::MaterialPartialFactors,
    Equation::LoadDurationFactor,
];

impl Equation {
    /// Design strength formula that applies to a standard and glass category
    pub fn governing(standard: Standard, category: GlassCategory) -> Equation {
        match (category, standard) {
            (GlassCategory::Annealed, _) => Equation::AnnealedDesignStrength,
            (GlassCategory::Prestressed, Standard::En16612) => Equation::PrestressedDesignStrengthEn16612,
            (GlassCategory::Prestressed, Standard::IStructE) => Equation::PrestressedDesignStrengthIStructE,
        }
    }

    /// Equations a report for this selection should list in its appendix
    pub fn for_report(standard: Standard, category: GlassCategory) -> Vec<Equation> {
        vec![
            Equation::governing(standard, category),
            Equation::MaterialPartialFactors,
            Equation::LoadDurationFactor,
        ]
    }

    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::AnnealedDesignStrength => EquationMetadata {
                name: "Design Strength of Annealed Glass",
                description: "Design bending strength of annealed glass for one load duration",
                formula_typst: r#"$f_("g;d") = (k_e k_"mod" k_"sp" k'_"sp" f_("g;k")) / gamma_("M;A")$"#,
                formula_plain: "f_g;d = (k_e · k_mod · k_sp · k'_sp · f_g;k) / γ_M;A",
                reference: CodeReference::Both {
                    en16612: code_ref::EN_ANNEALED,
                    istructe: code_ref::ISTRUCTE_DESIGN_STRENGTH,
                },
                variables: vec![F_GD, K_E, K_MOD, K_SP, K_SP_PRIME, F_GK, GAMMA_MA],
                assumptions: vec![
                    "Applies to both standards; only γ_M;A differs",
                    "γ_M;v does not participate",
                ],
                source_function: "calculations::design_strength::evaluate",
            },
            Equation::PrestressedDesignStrengthEn16612 => EquationMetadata {
                name: "Design Strength of Prestressed Glass (EN 16612)",
                description: "Annealed strength component plus the surface prestress increment",
                formula_typst: r#"$f_("g;d") = (k_e k_"mod" k_"sp" k'_"sp" f_("g;k")) / gamma_("M;A") + (k_v (f_("b;k") - f_("g;k"))) / gamma_("M;v")$"#,
                formula_plain: "f_g;d = (k_e · k_mod · k_sp · k'_sp · f_g;k) / γ_M;A + k_v · (f_b;k − f_g;k) / γ_M;v",
                reference: CodeReference::En16612 { clause: code_ref::EN_PRESTRESSED },
                variables: vec![F_GD, K_E, K_MOD, K_SP, K_SP_PRIME, F_GK, F_BK, K_V, GAMMA_MA, GAMMA_MV],
                assumptions: vec![
                    "Edge factor k_e reduces the annealed component only",
                    "Prestress increment is not reduced for load duration",
                ],
                source_function: "calculations::design_strength::evaluate",
            },
            Equation::PrestressedDesignStrengthIStructE => EquationMetadata {
                name: "Design Strength of Prestressed Glass (IStructE)",
                description: "Annealed and prestress components, both reduced by the edge factor",
                formula_typst: r#"$f_("g;d") = ((k_"mod" k_"sp" k'_"sp" f_("g;k")) / gamma_("M;A") + (k_v (f_("b;k") - f_("g;k"))) / gamma_("M;v")) k_e$"#,
                formula_plain: "f_g;d = ((k_mod · k_sp · k'_sp · f_g;k) / γ_M;A + k_v · (f_b;k − f_g;k) / γ_M;v) · k_e",
                reference: CodeReference::IStructE { section: code_ref::ISTRUCTE_DESIGN_STRENGTH },
                variables: vec![F_GD, K_E, K_MOD, K_SP, K_SP_PRIME, F_GK, F_BK, K_V, GAMMA_MA, GAMMA_MV],
                assumptions: vec!["Edge factor k_e multiplies the whole strength"],
                source_function: "calculations::design_strength::evaluate",
            },
            Equation::MaterialPartialFactors => EquationMetadata {
                name: "Material Partial Factors",
                description: "Partial factors for the annealed component and the prestress increment",
                formula_typst: r#"$gamma_("M;A") = 1.8 "(EN 16612)", 1.6 "(IStructE)", quad gamma_("M;v") = 1.2 quad "(published values)"$"#,
                formula_plain: "γ_M;A = 1.8 (EN 16612), 1.6 (IStructE); γ_M;v = 1.2 (published values)",
                reference: CodeReference::Both {
                    en16612: code_ref::EN_PARTIAL_FACTORS,
                    istructe: code_ref::ISTRUCTE_PARTIAL_FACTORS,
                },
                variables: vec![GAMMA_MA, GAMMA_MV],
                assumptions: vec![
                    "γ_M;A depends on the standard only, not on the glass category",
                    "γ_M;v applies to prestressed glass only",
                    "A settings file may override the published values; reports list the factors actually applied",
                ],
                source_function: "calculations::design_strength::SafetyFactors::resolve",
            },
            Equation::LoadDurationFactor => EquationMetadata {
                name: "Load Duration Factor",
                description: "Static fatigue reduction for the cumulative load duration t (hours)",
                formula_typst: r#"$k_"mod" = 0.663 t^(-1/16), quad 0.25 <= k_"mod" <= 1.0$"#,
                formula_plain: "k_mod = 0.663 · t^(-1/16), 0.25 ≤ k_mod ≤ 1.0",
                reference: CodeReference::En16612 { clause: code_ref::EN_K_MOD },
                variables: vec![K_MOD, Variable::new("t", "t", "Load duration", "h")],
                assumptions: vec!["Tabulated values are rounded to two decimal places"],
                source_function: "load_duration::LoadDuration::kmod",
            },
        }
    }
}

/// Escape a plain string for use inside Typst markup.
///
/// `/` is always escaped so `//` and `/*` cannot open a comment. List and
/// enum markers (`-`, `+`, `1.`) only act at the start of a line, so they
/// are escaped there and nowhere else.
pub(crate) fn escape_typst(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    // Only whitespace seen since the line began
    let mut at_line_start = true;
    // Only digits seen since the line began (and at least one)
    let mut leading_digits = false;

    for c in s.chars() {
        let always = matches!(
            c,
            '*' | '_' | '#' | '$' | '@' | '<' | '>' | '\\' | '`' | '[' | ']' | '~' | '=' | '/'
        );
        let marker = (at_line_start && matches!(c, '-' | '+')) || (leading_digits && c == '.');
        if always || marker {
            out.push('\\');
        }
        out.push(c);

        if c == '\n' {
            at_line_start = true;
            leading_digits = false;
        } else if c.is_ascii_digit() && (at_line_start || leading_digits) {
            at_line_start = false;
            leading_digits = true;
        } else if !(c.is_whitespace() && at_line_start) {
            at_line_start = false;
            leading_digits = false;
        }
    }
    out
}

/// Generate the "List of Equations" appendix for a report, in Typst markup.
///
/// # Example
///
/// ```rust
/// use glass_core::equations::registry::{generate_appendix_typst, Equation};
///
/// let typst = generate_appendix_typst(&[Equation::AnnealedDesignStrength]);
/// assert!(typst.contains("Design Strength of Annealed Glass"));
/// ```
pub fn generate_appendix_typst(equations: &[Equation]) -> String {
    let mut output = String::from(
        r##"
#pagebreak()

#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 12pt, radius: 4pt)[
    #text(size: 16pt, weight: "bold")[Appendix: List of Equations]
  ]
]

#v(12pt)
"##,
    );

    if equations.is_empty() {
        output.push_str("#text(style: \"italic\")[No equations recorded.]\n");
        return output;
    }

    for equation in equations {
        let meta = equation.metadata();

        output.push_str(&format!("== {}\n\n", meta.name));
        output.push_str(&format!("#text(size: 10pt)[{}]\n\n", escape_typst(meta.description)));
        output.push_str(&format!("*Formula:* {}\n\n", meta.formula_typst));
        output.push_str(&format!("*Reference:* {}\n\n", escape_typst(&meta.reference.citation())));

        if !meta.variables.is_empty() {
            output.push_str("#table(\n");
            output.push_str("  columns: (auto, 1fr, auto),\n");
            output.push_str("  inset: 5pt,\n");
            output.push_str("  stroke: 0.5pt,\n");
            output.push_str("  table.header([*Symbol*], [*Description*], [*Units*]),\n");
            for var in &meta.variables {
                output.push_str(&format!(
                    "  [${}$], [{}], [#\"{}\"],\n",
                    var.symbol,
                    escape_typst(var.description),
                    var.units
                ));
            }
            output.push_str(")\n\n");
        }

        if !meta.assumptions.is_empty() {
            output.push_str("*Assumptions:*\n");
            for assumption in &meta.assumptions {
                output.push_str(&format!("- {}\n", escape_typst(assumption)));
            }
            output.push('\n');
        }

        output.push_str("#line(length: 100%, stroke: 0.25pt + gray)\n#v(6pt)\n\n");
    }

    output
}

/// Generate the equations reference document as markdown.
///
/// This is the calculator's documentation page: every formula, its
/// variables, the partial factors and the notes on which formula applies.
///
/// # Example
///
/// ```rust
/// use glass_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("γ_M;A"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(
        r#"# Glass Design Strength Equations

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

Design strength of structural glass per EN 16612 and the IStructE guide
*Structural Use of Glass in Buildings*. One formula applies per selection:

| Glass category | Standard | Equation |
|----------------|----------|----------|
"#,
    );

    for category in [GlassCategory::Annealed, GlassCategory::Prestressed] {
        for standard in Standard::ALL {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                category.display_name(),
                standard.display_name(),
                Equation::governing(standard, category).metadata().name
            ));
        }
    }
    output.push_str("\n---\n\n");

    for equation in ALL_EQUATIONS {
        let meta = equation.metadata();

        output.push_str(&format!("## {}\n\n", meta.name));
        output.push_str(&format!("{}\n\n", meta.description));
        output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));
        output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));

        if !meta.variables.is_empty() {
            output.push_str("**Variables:**\n\n");
            output.push_str("| Symbol | Description | Units |\n");
            output.push_str("|--------|-------------|-------|\n");
            for var in &meta.variables {
                output.push_str(&format!("| {} | {} | {} |\n", var.symbol_plain, var.description, var.units));
            }
            output.push('\n');
        }

        if !meta.assumptions.is_empty() {
            output.push_str("**Assumptions:**\n\n");
            for assumption in &meta.assumptions {
                output.push_str(&format!("- {}\n", assumption));
            }
            output.push('\n');
        }

        output.push_str(&format!("**Source:** `{}`\n\n---\n\n", meta.source_function));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_governing_equation_selection() {
        for standard in Standard::ALL {
            assert_eq!(
                Equation::governing(standard, GlassCategory::Annealed),
                Equation::AnnealedDesignStrength
            );
        }
        assert_eq!(
            Equation::governing(Standard::En16612, GlassCategory::Prestressed),
            Equation::PrestressedDesignStrengthEn16612
        );
        assert_eq!(
            Equation::governing(Standard::IStructE, GlassCategory::Prestressed),
            Equation::PrestressedDesignStrengthIStructE
        );
    }

    #[test]
    fn test_all_equations_have_metadata() {
        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty());
            assert!(meta.formula_typst.starts_with('$') && meta.formula_typst.ends_with('$'));
            assert!(!meta.variables.is_empty());
        }
    }

    #[test]
    fn test_annealed_formula_has_no_prestress_term() {
        let meta = Equation::AnnealedDesignStrength.metadata();
        assert!(!meta.formula_plain.contains("γ_M;v"));
        assert!(meta.formula_plain.contains("k'_sp"));
    }

    #[test]
    fn test_partial_factor_values_marked_as_published() {
        let meta = Equation::MaterialPartialFactors.metadata();
        assert!(meta.formula_plain.contains("published values"));
        assert!(meta.formula_typst.contains("published values"));
        assert!(meta.assumptions.iter().any(|a| a.contains("override")));
    }

    #[test]
    fn test_report_equations() {
        let eqs = Equation::for_report(Standard::IStructE, GlassCategory::Prestressed);
        assert_eq!(eqs[0], Equation::PrestressedDesignStrengthIStructE);
        assert!(eqs.contains(&Equation::MaterialPartialFactors));
    }

    #[test]
    fn test_markdown_generation() {
        let markdown = generate_equations_markdown();
        assert!(markdown.contains("# Glass Design Strength Equations"));
        assert!(markdown.contains("Design Strength of Prestressed Glass (IStructE)"));
        assert!(markdown.contains("| k_mod | Load duration factor | - |"));
    }

    #[test]
    fn test_checked_in_reference_is_current() {
        // Regenerate with `cargo run --bin gen-equations` when this fails
        assert_eq!(include_str!("EQUATIONS.md"), generate_equations_markdown());
    }

    #[test]
    fn test_appendix_typst() {
        let typst = generate_appendix_typst(&[Equation::LoadDurationFactor]);
        assert!(typst.contains("== Load Duration Factor"));
        assert!(typst.contains("EN 16612:2019 Eq. (C.1)"));
        assert!(generate_appendix_typst(&[]).contains("No equations recorded"));
    }

    #[test]
    fn test_escape_typst() {
        assert_eq!(escape_typst("G-1 #2 [roof]"), "G-1 \\#2 \\[roof\\]");
        assert_eq!(escape_typst("plain"), "plain");
    }

    #[test]
    fn test_escape_typst_comment_markers() {
        assert_eq!(escape_typst("a // b"), "a \\/\\/ b");
        assert_eq!(escape_typst("x /* y */"), "x \\/\\* y \\*\\/");
        assert_eq!(escape_typst("N/mm²"), "N\\/mm²");
    }

    #[test]
    fn test_escape_typst_line_start_markers() {
        assert_eq!(escape_typst("- north"), "\\- north");
        assert_eq!(escape_typst("  + east"), "  \\+ east");
        assert_eq!(escape_typst("2. floor"), "2\\. floor");
        assert_eq!(escape_typst("12.5 m span"), "12\\.5 m span");
        assert_eq!(escape_typst("a\n- b"), "a\n\\- b");
        // Mid-line markers stay as typed
        assert_eq!(escape_typst("G-1 + G-2, v1.2"), "G-1 + G-2, v1.2");
    }
}
