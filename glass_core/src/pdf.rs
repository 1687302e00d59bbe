//! # PDF Generation Module
//!
//! Generates design strength reports using Typst.
//!
//! ## Architecture
//!
//! - The report template is embedded as a string constant
//! - Data is injected via string replacement before compilation
//! - Only the fonts bundled with `typst-assets` are used, so nothing is read from disk
//! - Output is raw PDF bytes (`Vec<u8>`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use glass_core::calculations::design_strength::{calculate, DesignStrengthInput};
//! use glass_core::load_duration::LoadDuration;
//! use glass_core::pdf::{render_design_strength_pdf, ReportInfo};
//! use glass_core::settings::CalculatorSettings;
//!
//! let input = DesignStrengthInput::default();
//! let result = calculate(&input, &CalculatorSettings::default()).unwrap();
//! let info = ReportInfo::new("J. Engineer", "25-001", "Acme Facades");
//!
//! let pdf = render_design_strength_pdf(&input, &result, &info, &[LoadDuration::MultipleGust]).unwrap();
//! std::fs::write("design_strength.pdf", pdf).unwrap();
//! ```

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::calculations::design_strength::{DesignStrengthInput, DesignStrengthResult, SafetyFactors};
use crate::equations::registry::{escape_typst, generate_appendix_typst, Equation};
use crate::errors::{CalcError, CalcResult};
use crate::load_duration::LoadDuration;
use crate::settings::CalculatorSettings;

/// Fill colour of highlighted result cells
const HIGHLIGHT_FILL: &str = "#eb8c71";

// ============================================================================
// Typst World Implementation
// ============================================================================

/// A minimal Typst world for compiling documents without external files.
struct PdfWorld {
    /// The main source document
    main: Source,
    /// Font book
    book: LazyHash<FontBook>,
    /// Available fonts
    fonts: Vec<Font>,
    /// Library (standard functions)
    library: LazyHash<Library>,
    /// Date reported to `datetime.today()`
    today: DateTime<Utc>,
}

impl PdfWorld {
    fn new(source: String, today: DateTime<Utc>) -> Self {
        let fonts = Self::load_fonts();
        let book = FontBook::from_fonts(&fonts);

        PdfWorld {
            main: Source::detached(source),
            book: LazyHash::new(book),
            fonts,
            library: LazyHash::new(Library::default()),
            today,
        }
    }

    fn load_fonts() -> Vec<Font> {
        let mut fonts = Vec::new();
        for font_bytes in typst_assets::fonts() {
            let buffer = Bytes::new(font_bytes.to_vec());
            for font in Font::iter(buffer) {
                fonts.push(font);
            }
        }
        fonts
    }
}

impl World for PdfWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.fonts.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        Datetime::from_ymd(
            self.today.year(),
            u8::try_from(self.today.month()).ok()?,
            u8::try_from(self.today.day()).ok()?,
        )
    }
}

// ============================================================================
// Report metadata
// ============================================================================

/// Project block printed at the top of every report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportInfo {
    /// Engineer responsible
    pub engineer: String,
    /// Job number
    pub job_id: String,
    /// Client name
    pub client: String,
    /// Generation timestamp
    pub generated: DateTime<Utc>,
    /// Decimal places for printed strengths
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u8,
}

fn default_decimal_places() -> u8 {
    2
}

impl ReportInfo {
    /// Report metadata stamped with the current time
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>, client: impl Into<String>) -> Self {
        ReportInfo {
            engineer: engineer.into(),
            job_id: job_id.into(),
            client: client.into(),
            generated: Utc::now(),
            decimal_places: default_decimal_places(),
        }
    }

    /// Print strengths with `decimal_places` places (usually the settings value)
    pub fn with_decimal_places(mut self, decimal_places: u8) -> Self {
        self.decimal_places = decimal_places;
        self
    }
}

impl Default for ReportInfo {
    fn default() -> Self {
        ReportInfo::new("", "", "")
    }
}

// ============================================================================
// PDF Template
// ============================================================================

/// Typst template for the design strength report
const DESIGN_STRENGTH_TEMPLATE: &str = r##"
#set page(
  paper: "a4",
  margin: (top: 25mm, bottom: 25mm, left: 20mm, right: 20mm),
  header: align(right)[
    #text(size: 9pt, fill: gray)[Structural Glass Design Strength]
  ],
  footer: context [
    #line(length: 100%, stroke: 0.5pt + gray)
    #v(4pt)
    #grid(
      columns: (1fr, 1fr, 1fr),
      align(left)[#text(size: 9pt)[Job: {{JOB_ID}}]],
      align(center)[#text(size: 9pt)[Page #counter(page).display()]],
      align(right)[#text(size: 9pt)[{{DATE}}]],
    )
  ]
)

#set text(font: "Libertinus Serif", size: 11pt)

#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 12pt, radius: 4pt)[
    #text(size: 18pt, weight: "bold")[Glass Design Strength]
    #v(4pt)
    #text(size: 14pt)[{{LABEL}}]
  ]
]

#v(12pt)

#grid(
  columns: (1fr, 1fr),
  gutter: 20pt,
  [
    *Project Information*
    #v(4pt)
    #table(
      columns: (auto, 1fr),
      stroke: none,
      row-gutter: 4pt,
      [Engineer:], [{{ENGINEER}}],
      [Job ID:], [{{JOB_ID}}],
      [Client:], [{{CLIENT}}],
      [Date:], [{{DATE}}],
    )
  ],
  [
    *Code Reference*
    #v(4pt)
    {{STANDARD}}
  ]
)

#v(12pt)

== Input Parameters

#table(
  columns: (auto, 1fr, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, left, right),
  table.header([*Parameter*], [*Selection*], [*Value*]),
{{INPUT_ROWS}}
)

#v(12pt)

== Partial Factors

#table(
  columns: (1fr, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right),
  [Material partial factor $gamma_("M;A")$], [{{GAMMA_MA}}],
  [Surface prestress partial factor $gamma_("M;v")$], [{{GAMMA_MV}}],
)

{{FACTOR_NOTE}}

#v(12pt)

== Design Strength

{{FORMULA}}

#v(8pt)

#table(
  columns: (1fr, auto, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right, right),
  table.header([*Load Duration*], [*$k_"mod"$*], [*$f_("g;d")$ (N/mm²)*]),
{{RESULT_ROWS}}
)

#v(8pt)

#block(width: 100%, stroke: 1pt, inset: 10pt)[
  *Minimum design strength:* {{MIN_STRENGTH}} N/mm² ({{MIN_LABEL}})
]

#v(24pt)
#text(size: 9pt, fill: gray)[
  Design strengths should be verified by a qualified structural engineer.
]
"##;

/// Render a design strength report to PDF bytes.
///
/// Rows whose duration is in `highlighted` get a coloured fill; every row
/// is printed regardless.
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - PDF file as bytes
/// * `Err(CalcError::Internal)` - Typst compilation or PDF rendering failed
pub fn render_design_strength_pdf(
    input: &DesignStrengthInput,
    result: &DesignStrengthResult,
    report: &ReportInfo,
    highlighted: &[LoadDuration],
) -> CalcResult<Vec<u8>> {
    let date = report.generated.format("%Y-%m-%d").to_string();
    let decimals = report.decimal_places;
    let (min_strength, min_label) = match result.table.minimum() {
        Some(row) => (row.display_strength(decimals), escape_typst(&row.label)),
        None => ("-".to_string(), "no load durations".to_string()),
    };
    let gamma_mv = match result.safety.gamma_mv {
        Some(g) => format!("{:.2}", g),
        None => "n/a".to_string(),
    };

    let mut source = DESIGN_STRENGTH_TEMPLATE
        .replace("{{LABEL}}", &escape_typst(&result.label))
        .replace("{{ENGINEER}}", &escape_typst(&report.engineer))
        .replace("{{JOB_ID}}", &escape_typst(&report.job_id))
        .replace("{{CLIENT}}", &escape_typst(&report.client))
        .replace("{{DATE}}", &date)
        .replace("{{STANDARD}}", result.standard.display_name())
        .replace("{{INPUT_ROWS}}", &build_input_rows(input, result))
        .replace("{{GAMMA_MA}}", &format!("{:.2}", result.safety.gamma_ma))
        .replace("{{GAMMA_MV}}", &gamma_mv)
        .replace("{{FACTOR_NOTE}}", partial_factor_note(result))
        .replace("{{FORMULA}}", result.equation.metadata().formula_typst)
        .replace("{{RESULT_ROWS}}", &build_result_rows(result, highlighted, decimals))
        .replace("{{MIN_STRENGTH}}", &min_strength)
        .replace("{{MIN_LABEL}}", &min_label);

    source.push_str(&generate_appendix_typst(&Equation::for_report(
        result.standard,
        result.category,
    )));

    let world = PdfWorld::new(source, report.generated);

    let warned = typst::compile(&world);

    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::Internal {
            message: format!("Typst compilation failed: {}", error_msgs.join("; ")),
        }
    })?;

    let pdf_bytes = typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::Internal {
            message: format!("PDF rendering failed: {}", error_msgs.join("; ")),
        }
    })?;

    info!(label = %result.label, bytes = pdf_bytes.len(), "rendered design strength report");

    Ok(pdf_bytes)
}

/// Parameter / selection / value rows for the input table
fn build_input_rows(input: &DesignStrengthInput, result: &DesignStrengthResult) -> String {
    let factors = &result.factors;
    let rows = [
        ("Glass type", input.glass.display_name().to_string(), format!("{:.0} N/mm²", factors.fbk_mpa)),
        ("Glass category", result.category.display_name().to_string(), String::new()),
        ("Surface profile", input.surface_profile.display_name().to_string(), format!("{:.2}", factors.ksp)),
        ("Surface finish", input.surface_finish.display_name().to_string(), format!("{:.2}", factors.ksp_prime)),
        ("Strengthening", input.strengthening.display_name().to_string(), format!("{:.2}", factors.kv)),
        ("Edge finish", input.edge.display_name().to_string(), format!("{:.2}", factors.ke)),
        ("Design value of glass", String::new(), format!("{:.0} N/mm²", factors.fgk_mpa)),
    ];

    rows.iter()
        .map(|(parameter, selection, value)| {
            format!(
                "  [{}], [{}], [{}],",
                parameter,
                escape_typst(selection),
                value
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Flag partial factors that differ from the published values.
///
/// The appendix always quotes the published values, so an override has to
/// be called out next to the factors actually applied.
fn partial_factor_note(result: &DesignStrengthResult) -> &'static str {
    let published = SafetyFactors::resolve(result.standard, result.category, &CalculatorSettings::default());
    if result.safety == published {
        ""
    } else {
        "#text(size: 9pt, style: \"italic\")[Partial factors differ from the published values; the values above were applied.]"
    }
}

/// Result rows, with highlighted durations filled
fn build_result_rows(result: &DesignStrengthResult, highlighted: &[LoadDuration], decimals: u8) -> String {
    result
        .table
        .highlighted(highlighted)
        .into_iter()
        .map(|(row, is_highlighted)| {
            let cells = [
                escape_typst(&row.label),
                format!("{:.2}", row.kmod),
                row.display_strength(decimals),
            ];
            cells
                .iter()
                .map(|cell| {
                    if is_highlighted {
                        format!("table.cell(fill: rgb(\"{}\"))[{}]", HIGHLIGHT_FILL, cell)
                    } else {
                        format!("[{}]", cell)
                    }
                })
                .collect::<Vec<_>>()
                .join(", ")
        })
        .map(|line| format!("  {},", line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::design_strength::calculate;
    use crate::glass_factors::{GlassProduct, Standard};

    fn toughened_input() -> DesignStrengthInput {
        DesignStrengthInput {
            label: "Balustrade infill_1 #A".to_string(),
            standard: Standard::En16612,
            glass: GlassProduct::Toughened,
            ..DesignStrengthInput::default()
        }
    }

    #[test]
    fn test_highlighted_rows_are_filled() {
        let input = toughened_input();
        let result = calculate(&input, &CalculatorSettings::default()).unwrap();
        let rows = build_result_rows(&result, &[LoadDuration::MultipleGust], 2);

        let lines: Vec<&str> = rows.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[3].contains(HIGHLIGHT_FILL));
        assert_eq!(lines.iter().filter(|l| l.contains("table.cell")).count(), 1);
    }

    #[test]
    fn test_result_rows_use_requested_decimals() {
        let input = toughened_input();
        let result = calculate(&input, &CalculatorSettings::default()).unwrap();

        let first = build_result_rows(&result, &[], 3);
        assert!(first.lines().next().unwrap().contains("[87.500]"));
        let first = build_result_rows(&result, &[], 0);
        assert!(first.lines().next().unwrap().contains("[88]"));
    }

    #[test]
    fn test_report_info_decimal_places() {
        let info = ReportInfo::new("A", "B", "C");
        assert_eq!(info.decimal_places, 2);
        assert_eq!(info.with_decimal_places(4).decimal_places, 4);

        let json = r#"{"engineer":"A","job_id":"B","client":"C","generated":"2026-01-01T00:00:00Z"}"#;
        let parsed: ReportInfo = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.decimal_places, 2);
    }

    #[test]
    fn test_partial_factor_note_only_when_overridden() {
        let input = toughened_input();
        let published = calculate(&input, &CalculatorSettings::default()).unwrap();
        assert_eq!(partial_factor_note(&published), "");

        let settings = CalculatorSettings {
            gamma_ma_en16612: 2.0,
            ..CalculatorSettings::default()
        };
        let overridden = calculate(&input, &settings).unwrap();
        assert!(partial_factor_note(&overridden).contains("differ from the published values"));
    }

    #[test]
    fn test_pdf_with_comment_like_user_text() {
        let input = DesignStrengthInput {
            label: "Roof light // north /* pane".to_string(),
            ..toughened_input()
        };
        let result = calculate(&input, &CalculatorSettings::default()).unwrap();
        let info = ReportInfo::new("- J. Engineer", "1. 25/001", "+ Client // Ltd").with_decimal_places(3);

        let pdf = render_design_strength_pdf(&input, &result, &info, &[LoadDuration::Permanent]);
        assert!(pdf.is_ok(), "PDF generation failed: {:?}", pdf.err());
        assert!(pdf.unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn test_input_rows_list_selections() {
        let input = toughened_input();
        let result = calculate(&input, &CalculatorSettings::default()).unwrap();
        let rows = build_input_rows(&input, &result);

        assert!(rows.contains(GlassProduct::Toughened.display_name()));
        assert!(rows.contains("120 N/mm²"));
    }

    #[test]
    fn test_pdf_generation() {
        let input = toughened_input();
        let result = calculate(&input, &CalculatorSettings::default()).unwrap();
        let info = ReportInfo::new("Test Engineer <qa>", "TEST-001", "Client [A]");

        let pdf = render_design_strength_pdf(&input, &result, &info, &[LoadDuration::MultipleGust]);
        assert!(pdf.is_ok(), "PDF generation failed: {:?}", pdf.err());

        let pdf_bytes = pdf.unwrap();
        assert!(pdf_bytes.starts_with(b"%PDF"), "Output is not a valid PDF");
        assert!(pdf_bytes.len() > 1000, "PDF seems too small");
    }

    #[test]
    fn test_annealed_pdf_generation() {
        let input = DesignStrengthInput::default();
        let result = calculate(&input, &CalculatorSettings::default()).unwrap();

        let pdf = render_design_strength_pdf(&input, &result, &ReportInfo::default(), &[]).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }
}
