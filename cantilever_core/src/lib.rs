//! # cantilever_core - Cantilever Beam Analysis Engine
//!
//! `cantilever_core` computes the response of a cantilever beam to a single
//! transverse point load: shear, bending moment, outer-fiber stress,
//! deflection and slope along the beam axis. All inputs and outputs are
//! JSON-serializable.
//!
//! Every evaluator is a pure function of its inputs and the shared axis
//! sample, so runs are reproducible and can be evaluated in any order.
//! Quantities are SI (m, N, Pa, N·m) everywhere; [`units`] holds the
//! conversions used for display. Failures come back as a [`CalcError`]
//! naming the offending field.
//!
//! ## Quick Start
//!
//! ```rust
//! use cantilever_core::{analyze, CantileverInput};
//!
//! // 1 m steel bar, 20 x 40 mm, 1 kN at 0.7 m
//! let result = analyze(&CantileverInput::default()).unwrap();
//!
//! assert!((result.summary.fixed_end_moment_nm + 700.0).abs() < 1e-9);
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`model`] - Beam, section, load and axis sampling
//! - [`calculations`] - Section resolver, evaluators and [`analyze`]
//! - [`equations`] - Closed-form formulas and the equation registry
//! - [`materials`] - Elastic materials and presets
//! - [`units`] - SI newtypes and display conversions
//! - [`errors`] - [`CalcError`] and [`CalcResult`]
//! - [`project`] - Analysis file container
//! - [`file_io`] - `.cbm` save/load and advisory locks

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod materials;
pub mod model;
pub mod project;
pub mod units;

pub use calculations::{
    analyze, CantileverInput, CantileverResult, ResponseFields, ResponseSummary,
    SectionProperties,
};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_analysis_file, load_input, save_analysis_file, FileLock};
pub use materials::{Material, MaterialPreset};
pub use model::{BeamAxisSample, BeamSpec, LoadCase, Section};
pub use project::{AnalysisFile, FileMetadata};
