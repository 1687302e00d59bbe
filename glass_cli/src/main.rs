//! # Glass Design Strength CLI
//!
//! Terminal interface for the glass design strength tables.
//!
//! With no arguments the CLI walks through the selections with numbered
//! menus. `glass_cli calc` evaluates a selection given by flags or a JSON
//! input file, printing a table or JSON and optionally writing a PDF.

mod args;
mod logging;

use std::env;
use std::fmt;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use glass_core::calculations::design_strength::{calculate, DesignStrengthInput, DesignStrengthResult};
use glass_core::equations::generate_equations_markdown;
use glass_core::errors::{CalcError, CalcResult};
use glass_core::glass_factors::{EdgeFinish, GlassProduct, Standard, Strengthening, SurfaceFinish, SurfaceProfile};
use glass_core::load_duration::LoadDuration;
use glass_core::pdf::{render_design_strength_pdf, ReportInfo};
use glass_core::settings::{load_settings, CalculatorSettings, SETTINGS_ENV_VAR};
use tracing::{debug, info};

use crate::args::{parse_args, CalcArgs, Command, USAGE};

fn main() {
    logging::init_tracing();

    let outcome = parse_args(env::args().skip(1)).and_then(|command| match command {
        Command::Interactive => run_interactive(),
        Command::Calc(calc) => run_calc(&calc),
        Command::Options => {
            print_options();
            Ok(())
        }
        Command::Docs => {
            print!("{}", generate_equations_markdown());
            Ok(())
        }
        Command::Help => {
            print!("{}", USAGE);
            Ok(())
        }
    });

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}

// ============================================================================
// Settings and input resolution
// ============================================================================

/// `--settings`, then `$GLASS_SETTINGS`, then the published defaults.
fn resolve_settings(flag: Option<&Path>) -> CalcResult<CalculatorSettings> {
    let path = match flag {
        Some(p) => Some(p.to_path_buf()),
        None => env::var_os(SETTINGS_ENV_VAR).map(PathBuf::from),
    };

    match path {
        Some(p) => {
            debug!(path = %p.display(), "loading settings");
            load_settings(&p)
        }
        None => Ok(CalculatorSettings::default()),
    }
}

fn load_input(path: &Path) -> CalcResult<DesignStrengthInput> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read input", path.display().to_string(), e.to_string()))?;
    Ok(serde_json::from_str(&contents)?)
}

// ============================================================================
// calc
// ============================================================================

fn run_calc(calc: &CalcArgs) -> CalcResult<()> {
    let settings = resolve_settings(calc.settings.as_deref())?;

    let base = match &calc.input {
        Some(path) => load_input(path)?,
        None => DesignStrengthInput::default(),
    };
    let input = calc.apply(base);

    let result = calculate(&input, &settings)?;

    if calc.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&input, &result, &calc.highlight, settings.decimal_places);
    }

    if let Some(pdf_path) = &calc.pdf {
        let report = ReportInfo::new(
            calc.engineer.clone().unwrap_or_default(),
            calc.job.clone().unwrap_or_default(),
            calc.client.clone().unwrap_or_default(),
        )
        .with_decimal_places(settings.decimal_places);
        write_pdf(pdf_path, &input, &result, &report, &calc.highlight)?;
        if !calc.json {
            println!("PDF written to {}", pdf_path.display());
        }
    }

    Ok(())
}

fn write_pdf(
    path: &Path,
    input: &DesignStrengthInput,
    result: &DesignStrengthResult,
    report: &ReportInfo,
    highlighted: &[LoadDuration],
) -> CalcResult<()> {
    let bytes = render_design_strength_pdf(input, result, report, highlighted)?;
    fs::write(path, &bytes)
        .map_err(|e| CalcError::file_error("write pdf", path.display().to_string(), e.to_string()))?;
    info!(path = %path.display(), bytes = bytes.len(), "pdf written");
    Ok(())
}

fn print_result(input: &DesignStrengthInput, result: &DesignStrengthResult, highlighted: &[LoadDuration], decimals: u8) {
    let meta = result.equation.metadata();

    println!("═══════════════════════════════════════════════════════════════════");
    if result.label.is_empty() {
        println!("  GLASS DESIGN STRENGTH");
    } else {
        println!("  GLASS DESIGN STRENGTH: {}", result.label);
    }
    println!("═══════════════════════════════════════════════════════════════════");
    println!();
    println!("Standard:      {}", result.standard);
    println!("Glass:         {}", input.glass);
    println!("Category:      {}", result.category.display_name());
    println!("Profile:       {}", input.surface_profile);
    println!("Finish:        {}", input.surface_finish);
    println!("Strengthening: {}", input.strengthening);
    println!("Edge:          {}", input.edge);
    println!();
    println!("{}", result.factors.format_report());
    println!();
    match result.safety.gamma_mv {
        Some(g) => println!("γ_M;A = {:.2}   γ_M;v = {:.2}", result.safety.gamma_ma, g),
        None => println!("γ_M;A = {:.2}", result.safety.gamma_ma),
    }
    println!("{}", meta.formula_plain);
    println!("({})", meta.reference.citation());
    println!();
    print!("{}", result.table.format_report(highlighted, decimals));
    println!();
    if let Some(row) = result.table.minimum() {
        println!("Min. design strength: {} N/mm² ({})", row.display_strength(decimals), row.label);
    }
}

// ============================================================================
// options
// ============================================================================

fn print_options() {
    println!("Standards (--standard)");
    for s in Standard::ALL {
        println!("  {:<36} {}", s.code(), s.display_name());
    }

    println!("\nGlass products (--glass)            f_b;k");
    for g in GlassProduct::ALL {
        println!("  {:<36} {:>5.0}  {}", g.code(), g.fbk_mpa(), g.display_name());
    }

    println!("\nSurface profiles (--profile)        k_sp");
    for p in SurfaceProfile::ALL {
        println!("  {:<36} {:>5.2}  {}", p.code(), p.factor(), p.display_name());
    }

    println!("\nSurface finishes (--finish)         k'_sp");
    for f in SurfaceFinish::ALL {
        println!("  {:<36} {:>5.2}  {}", f.code(), f.factor(), f.display_name());
    }

    println!("\nStrengthening (--strengthening)     k_v");
    for s in Strengthening::ALL {
        println!("  {:<36} {:>5.2}  {}", s.code(), s.factor(), s.display_name());
    }

    println!("\nEdge finishes (--edge)              k_e");
    for e in EdgeFinish::ALL {
        println!("  {:<36} {:>5.2}  {}", e.code(), e.factor(), e.display_name());
    }

    println!("\nLoad durations (--highlight)        k_mod");
    for d in LoadDuration::ALL {
        println!("  {:<36} {:>5.2}  {}", d.code(), d.kmod(), d.label());
    }
}

// ============================================================================
// Interactive mode
// ============================================================================

fn read_line() -> Option<String> {
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn prompt_string(prompt: &str) -> String {
    print!("{}", prompt);
    read_line().unwrap_or_default()
}

/// Numbered menu. Enter, or anything out of range, keeps the default.
fn prompt_choice<T: Copy + PartialEq + fmt::Display>(title: &str, options: &[T], default: T) -> T {
    println!("{}:", title);
    let mut default_index = 1;
    for (i, option) in options.iter().enumerate() {
        if *option == default {
            default_index = i + 1;
        }
        println!("  {:>2}) {}", i + 1, option);
    }
    print!("Select [{}]: ", default_index);

    let choice = read_line()
        .and_then(|s| s.parse::<usize>().ok())
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| options.get(i).copied())
        .unwrap_or(default);
    println!();
    choice
}

fn run_interactive() -> CalcResult<()> {
    println!("Glass Design Strength Calculator");
    println!("================================");
    println!();

    let settings = resolve_settings(None)?;

    let label = prompt_string("Label [none]: ");
    println!();
    let standard = prompt_choice("Standard", &Standard::ALL, Standard::default());
    let glass = prompt_choice("Glass type", &GlassProduct::ALL, GlassProduct::default());
    let surface_profile = prompt_choice("Surface profile", &SurfaceProfile::ALL, SurfaceProfile::default());
    let surface_finish = prompt_choice("Surface finish", &SurfaceFinish::ALL, SurfaceFinish::default());
    let strengthening = if glass.category().is_prestressed() {
        prompt_choice("Strengthening", &Strengthening::ALL, Strengthening::default())
    } else {
        Strengthening::default()
    };
    let edge = prompt_choice("Edge", &EdgeFinish::ALL, EdgeFinish::default());

    let input = DesignStrengthInput {
        label,
        standard,
        glass,
        surface_profile,
        surface_finish,
        strengthening,
        edge,
    };

    let highlighted = LoadDuration::parse_list(&prompt_string(
        "Highlight load durations (comma-separated codes, e.g. wind,snow-short) [none]: ",
    ))?;
    println!();

    let result = calculate(&input, &settings)?;
    print_result(&input, &result, &highlighted, settings.decimal_places);

    println!();
    let pdf_path = prompt_string("Write PDF report to (Enter to skip): ");
    if !pdf_path.is_empty() {
        let report = ReportInfo::new(
            prompt_string("Engineer: "),
            prompt_string("Job ID: "),
            prompt_string("Client: "),
        )
        .with_decimal_places(settings.decimal_places);
        let path = PathBuf::from(pdf_path);
        write_pdf(&path, &input, &result, &report, &highlighted)?;
        println!("PDF written to {}", path.display());
    }

    Ok(())
}
