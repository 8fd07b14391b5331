//! # Cantilever Calculations
//!
//! Array evaluators over a sampled beam axis, and the orchestration that
//! chains them. The top-level entry point follows the pattern:
//!
//! - [`CantileverInput`] - Input parameters (JSON-serializable)
//! - [`CantileverResult`] - Calculation results (JSON-serializable)
//! - [`analyze`] - `analyze(&input) -> Result<CantileverResult, CalcError>`
//!
//! Each evaluator is also usable on its own:
//!
//! - [`section`] - I, c, A, S from rectangular dimensions
//! - [`internal_forces`] - V(x), M(x)
//! - [`stress`] - σ(x) = M(x)c/I
//! - [`deflection`] - y(x) and θ(x)
//!
//! Data flows resolver → internal forces → {stress, deflection}. All
//! evaluators are pure; their outputs are aligned index-for-index with the
//! [`BeamAxisSample`](crate::model::BeamAxisSample) they were given.

pub mod analysis;
pub mod deflection;
pub mod internal_forces;
pub mod section;
pub mod stress;

pub use analysis::{analyze, CantileverInput, CantileverResult, ResponseFields, ResponseSummary};
pub use deflection::{deflection, slope};
pub use internal_forces::{internal_forces, InternalForces};
pub use section::{resolve_section, SectionProperties};
pub use stress::bending_stress;
