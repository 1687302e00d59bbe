//! # glass_core - Structural Glass Design Strength Engine
//!
//! `glass_core` computes the design bending strength f_g;d of structural glass
//! under EN 16612 and the IStructE guide, for every load-duration case at once.
//! All inputs and outputs are JSON-serializable, so the same types drive the
//! CLI, the PDF report and any machine client.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Closed Options**: Every selectable factor is an enum, never a free string
//!
//! ## Quick Start
//!
//! ```rust
//! use glass_core::calculations::design_strength::{calculate, DesignStrengthInput};
//! use glass_core::glass_factors::{GlassProduct, Standard};
//! use glass_core::load_duration::LoadDuration;
//! use glass_core::settings::CalculatorSettings;
//!
//! let input = DesignStrengthInput {
//!     label: "Balustrade".to_string(),
//!     standard: Standard::IStructE,
//!     glass: GlassProduct::Toughened,
//!     ..DesignStrengthInput::default()
//! };
//!
//! let result = calculate(&input, &CalculatorSettings::default()).unwrap();
//! let wind = result.table.row(LoadDuration::MultipleGust).unwrap();
//! assert_eq!(wind.display_strength(2), "83.31");
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The design strength evaluator
//! - [`glass_factors`] - Option tables: standards, products, surface, strengthening, edge
//! - [`load_duration`] - Load-duration cases and k_mod
//! - [`settings`] - Design value of glass and partial factors
//! - [`equations`] - Equation registry and reference documentation
//! - [`pdf`] - Typst PDF report
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod glass_factors;
pub mod load_duration;
pub mod pdf;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use calculations::design_strength::{calculate, DesignStrengthInput, DesignStrengthResult, ResultsTable};
pub use errors::{CalcError, CalcResult};
pub use glass_factors::{GlassCategory, GlassProduct, Standard};
pub use load_duration::{LoadDuration, LoadDurationTable};
pub use settings::CalculatorSettings;
