//! # Glass Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - User selections (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, settings) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`design_strength`] - Design bending strength per load duration (EN 16612 / IStructE)

pub mod design_strength;

// Re-export commonly used types
pub use design_strength::{
    calculate, design_strength, evaluate, round_to, DesignStrengthInput, DesignStrengthResult, ResultRow,
    ResultsTable, SafetyFactors,
};
