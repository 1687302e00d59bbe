//! # Glass Design Equations
//!
//! Metadata for every formula the calculator evaluates, kept in one place so
//! the PDF appendix and the equations reference stay in step with the code.
//!
//! ## Modules
//!
//! - [`registry`] - Equation metadata, report appendix and markdown reference
//!
//! ## References
//!
//! - EN 16612:2019 Glass in building. Determination of the lateral load
//!   resistance of glass panes by calculation
//! - IStructE (2014) Structural Use of Glass in Buildings, 2nd edition

pub mod registry;

pub use registry::{
    CodeReference,
    Equation,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
    generate_appendix_typst,
    generate_equations_markdown,
};
