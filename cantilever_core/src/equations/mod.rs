//! # Beam Mechanics Equations
//!
//! Scalar closed-form expressions, each a function of one position `x`.
//! The evaluators in [`calculations`](crate::calculations) map these over
//! the axis sample; interior and tip loads share one formula family.
//!
//! ## Modules
//!
//! - [`section`] - Rectangular cross-section properties (A, I, c, S)
//! - [`cantilever`] - Cantilever point-load formulas (V, M, θ, y, σ)
//! - [`registry`] - Equation metadata for results and EQUATIONS.md
//!
//! ## Sign Conventions
//!
//! A positive `F` pushes the beam down. With that load:
//!
//! - shear is `-F` from the wall up to and including `x = a`
//! - hogging moment (top fiber in tension) is negative
//! - downward deflection and clockwise slope are negative
//! - the wall reaction `R = F` acts upward
//!
//! Formulas follow Roark (8th ed., Table 8.1) and Gere & Goodno
//! (9th ed., Appendix G).

pub mod cantilever;
pub mod registry;
pub mod section;

pub use cantilever::{
    cantilever_point_deflection,
    cantilever_point_moment,
    cantilever_point_reactions,
    cantilever_point_shear,
    cantilever_point_slope,
    cantilever_tip_load_max_deflection,
    outer_fiber_stress,
    rectangular_max_shear_stress,
};

pub use section::{
    outer_fiber_distance,
    rectangular_area,
    rectangular_moment_of_inertia,
    rectangular_section_modulus,
    rectangular_shear_area,
};

pub use registry::{
    cantilever_analysis_equations,
    generate_equations_markdown,
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
};
