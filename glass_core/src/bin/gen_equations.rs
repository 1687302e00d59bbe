//! Write the glass equations reference, `EQUATIONS.md`, from the registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-equations                 # regenerate the checked-in file
//! cargo run --bin gen-equations -- --check      # exit 1 if it is stale
//! cargo run --bin gen-equations -- docs/eq.md   # write somewhere else
//! ```
//!
//! Paths are relative to the workspace root.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use glass_core::equations::generate_equations_markdown;

const DEFAULT_OUTPUT: &str = "glass_core/src/equations/EQUATIONS.md";

fn main() -> ExitCode {
    let mut check = false;
    let mut output = PathBuf::from(DEFAULT_OUTPUT);
    for arg in std::env::args().skip(1) {
        if arg == "--check" {
            check = true;
        } else {
            output = PathBuf::from(arg);
        }
    }

    let markdown = generate_equations_markdown();

    if check {
        return match fs::read_to_string(&output) {
            Ok(current) if current == markdown => {
                println!("{} is up to date", output.display());
                ExitCode::SUCCESS
            }
            Ok(_) => {
                eprintln!("{} is stale; run `cargo run --bin gen-equations`", output.display());
                ExitCode::FAILURE
            }
            Err(e) => {
                eprintln!("Error reading {}: {}", output.display(), e);
                ExitCode::FAILURE
            }
        };
    }

    match fs::write(&output, &markdown) {
        Ok(()) => {
            println!("Wrote {} bytes to {}", markdown.len(), output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error writing {}: {}", output.display(), e);
            ExitCode::FAILURE
        }
    }
}
