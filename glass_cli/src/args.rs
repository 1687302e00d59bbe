//! Command-line argument parsing.
//!
//! Flags take their value as the next argument (`--glass toughened`).
//! Option values are the short codes listed by `glass_cli options`.

use std::path::PathBuf;

use glass_core::calculations::design_strength::DesignStrengthInput;
use glass_core::errors::{CalcError, CalcResult};
use glass_core::glass_factors::{EdgeFinish, GlassProduct, Standard, Strengthening, SurfaceFinish, SurfaceProfile};
use glass_core::load_duration::LoadDuration;

pub const USAGE: &str = "\
Glass Design Strength Calculator

Usage:
  glass_cli                    Interactive prompts
  glass_cli calc [flags]       Evaluate one selection
  glass_cli options            List option codes and factor values
  glass_cli docs               Print the equations reference (markdown)
  glass_cli help               Show this message

calc flags:
  --standard <code>            en16612 | istructe
  --glass <code>               Glass product (e.g. toughened)
  --profile <code>             Surface profile (k_sp)
  --finish <code>              Surface finish (k'_sp)
  --strengthening <code>       horizontal | vertical (k_v)
  --edge <code>                Edge finish (k_e)
  --label <text>               Label for the result
  --highlight <codes>          Comma-separated load durations to highlight
  --input <file.json>          Base input; flags override its fields
  --settings <file.json>       Partial factor overrides (else $GLASS_SETTINGS)
  --json                       Print the result as JSON
  --pdf <path>                 Write a PDF report
  --engineer <name>            Report: engineer
  --job <id>                   Report: job number
  --client <name>              Report: client

Logging: set GLASS_LOG (e.g. GLASS_LOG=debug). Logs go to stderr.
";

/// Top-level command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Interactive,
    Calc(CalcArgs),
    Options,
    Docs,
    Help,
}

/// Flags for `calc`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalcArgs {
    pub standard: Option<Standard>,
    pub glass: Option<GlassProduct>,
    pub profile: Option<SurfaceProfile>,
    pub finish: Option<SurfaceFinish>,
    pub strengthening: Option<Strengthening>,
    pub edge: Option<EdgeFinish>,
    pub label: Option<String>,
    pub highlight: Vec<LoadDuration>,
    pub input: Option<PathBuf>,
    pub settings: Option<PathBuf>,
    pub json: bool,
    pub pdf: Option<PathBuf>,
    pub engineer: Option<String>,
    pub job: Option<String>,
    pub client: Option<String>,
}

impl CalcArgs {
    /// Overlay the explicit flags onto a base input.
    pub fn apply(&self, mut input: DesignStrengthInput) -> DesignStrengthInput {
        if let Some(standard) = self.standard {
            input.standard = standard;
        }
        if let Some(glass) = self.glass {
            input.glass = glass;
        }
        if let Some(profile) = self.profile {
            input.surface_profile = profile;
        }
        if let Some(finish) = self.finish {
            input.surface_finish = finish;
        }
        if let Some(strengthening) = self.strengthening {
            input.strengthening = strengthening;
        }
        if let Some(edge) = self.edge {
            input.edge = edge;
        }
        if let Some(label) = &self.label {
            input.label = label.clone();
        }
        input
    }
}

/// Parse the arguments after the program name.
pub fn parse_args<I>(args: I) -> CalcResult<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let command = match args.next() {
        None => return Ok(Command::Interactive),
        Some(c) => c,
    };

    match command.as_str() {
        "calc" => parse_calc(args).map(Command::Calc),
        "options" => Ok(Command::Options),
        "docs" => Ok(Command::Docs),
        "help" | "--help" | "-h" => Ok(Command::Help),
        "interactive" => Ok(Command::Interactive),
        other => Err(CalcError::invalid_input(
            "command",
            other,
            "Expected one of: calc, options, docs, help",
        )),
    }
}

fn parse_calc(mut args: impl Iterator<Item = String>) -> CalcResult<CalcArgs> {
    let mut calc = CalcArgs::default();

    while let Some(flag) = args.next() {
        if flag == "--json" {
            calc.json = true;
            continue;
        }

        let value = args.next().ok_or_else(|| CalcError::missing_field(flag.clone()))?;
        match flag.as_str() {
            "--standard" => calc.standard = Some(value.parse()?),
            "--glass" => calc.glass = Some(value.parse()?),
            "--profile" => calc.profile = Some(value.parse()?),
            "--finish" => calc.finish = Some(value.parse()?),
            "--strengthening" => calc.strengthening = Some(value.parse()?),
            "--edge" => calc.edge = Some(value.parse()?),
            "--label" => calc.label = Some(value),
            "--highlight" => calc.highlight = LoadDuration::parse_list(&value)?,
            "--input" => calc.input = Some(PathBuf::from(value)),
            "--settings" => calc.settings = Some(PathBuf::from(value)),
            "--pdf" => calc.pdf = Some(PathBuf::from(value)),
            "--engineer" => calc.engineer = Some(value),
            "--job" => calc.job = Some(value),
            "--client" => calc.client = Some(value),
            _ => return Err(CalcError::invalid_input("flag", flag, "Unknown flag; see `glass_cli help`")),
        }
    }

    Ok(calc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CalcResult<Command> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_arguments_is_interactive() {
        assert_eq!(parse(&[]).unwrap(), Command::Interactive);
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse(&["options"]).unwrap(), Command::Options);
        assert_eq!(parse(&["docs"]).unwrap(), Command::Docs);
        assert_eq!(parse(&["--help"]).unwrap(), Command::Help);
    }

    #[test]
    fn test_calc_flags() {
        let command = parse(&[
            "calc",
            "--standard",
            "en16612",
            "--glass",
            "toughened",
            "--edge",
            "as-cut",
            "--highlight",
            "wind,permanent",
            "--json",
        ])
        .unwrap();

        let Command::Calc(calc) = command else {
            panic!("expected calc command");
        };
        assert_eq!(calc.standard, Some(Standard::En16612));
        assert_eq!(calc.glass, Some(GlassProduct::Toughened));
        assert_eq!(calc.edge, Some(EdgeFinish::AsCut));
        assert_eq!(calc.highlight, vec![LoadDuration::MultipleGust, LoadDuration::Permanent]);
        assert!(calc.json);
        assert_eq!(calc.pdf, None);
    }

    #[test]
    fn test_flags_override_input() {
        let calc = CalcArgs {
            glass: Some(GlassProduct::HeatStrengthened),
            label: Some("G-2".to_string()),
            ..CalcArgs::default()
        };
        let base = DesignStrengthInput {
            label: "from file".to_string(),
            standard: Standard::En16612,
            edge: EdgeFinish::Polished,
            ..DesignStrengthInput::default()
        };

        let input = calc.apply(base);
        assert_eq!(input.glass, GlassProduct::HeatStrengthened);
        assert_eq!(input.label, "G-2");
        assert_eq!(input.standard, Standard::En16612);
        assert_eq!(input.edge, EdgeFinish::Polished);
    }

    #[test]
    fn test_unknown_option_code() {
        let err = parse(&["calc", "--glass", "unobtainium"]).unwrap_err();
        assert_eq!(err.error_code(), "OPTION_NOT_FOUND");
    }

    #[test]
    fn test_missing_flag_value() {
        let err = parse(&["calc", "--glass"]).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_unknown_flag_and_command() {
        assert_eq!(parse(&["calc", "--colour", "blue"]).unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(parse(&["bake"]).unwrap_err().error_code(), "INVALID_INPUT");
    }
}
