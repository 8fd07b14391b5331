//! # Cantilever Point-Load Analysis
//!
//! Runs the full pipeline for one cantilever under a single point load:
//! section resolver, axis sampling, internal forces, then stress, deflection
//! and slope, and finally a summary of the governing values.
//!
//! ## Assumptions
//!
//! - Fixed at x = 0, free at x = L
//! - One transverse point load, positive downward, anywhere on `[0, L]`
//! - Solid rectangular section, linear-elastic, Euler–Bernoulli theory
//! - Small deflections
//!
//! ## Example
//!
//! ```rust
//! use cantilever_core::calculations::analysis::{analyze, CantileverInput};
//! use cantilever_core::materials::Material;
//! use cantilever_core::model::{BeamSpec, LoadCase, Section};
//!
//! let beam = BeamSpec::new(1.0);
//! let input = CantileverInput {
//!     label: "Tip load".to_string(),
//!     beam,
//!     section: Section::rectangular(0.02, 0.04),
//!     material: Material::new(210e9),
//!     load: LoadCase::at_tip(1000.0, &beam),
//!     sample_points: 300,
//! };
//!
//! let result = analyze(&input).unwrap();
//!
//! println!("M(0) = {:.1} N·m", result.summary.fixed_end_moment_nm);
//! println!("y(L) = {:.3e} m", result.summary.tip_deflection_m);
//! assert!((result.summary.fixed_end_stress_pa + 1.875e8).abs() < 1e3);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::cantilever::{
    cantilever_point_deflection, cantilever_point_reactions, cantilever_tip_load_max_deflection,
    rectangular_max_shear_stress,
};
use crate::equations::registry::{cantilever_analysis_equations, Equation};
use crate::errors::CalcResult;
use crate::materials::Material;
use crate::model::{
    validate_sample_points, BeamAxisSample, BeamSpec, LoadCase, Section, DEFAULT_SAMPLE_POINTS,
};

use super::deflection::{deflection, slope};
use super::internal_forces::internal_forces;
use super::section::{resolve_section, SectionProperties};
use super::stress::bending_stress;

fn default_sample_points() -> usize {
    DEFAULT_SAMPLE_POINTS
}

/// Input parameters for one cantilever analysis.
///
/// All quantities are SI (m, N, Pa).
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Bracket arm",
///   "beam": { "length_m": 1.0 },
///   "section": { "width_m": 0.02, "height_m": 0.04 },
///   "material": { "name": "Structural Steel", "modulus_pa": 210000000000.0 },
///   "load": { "magnitude_n": 1000.0, "position_m": 0.7 },
///   "sample_points": 300
/// }
/// ```
///
/// `label` and `sample_points` may be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CantileverInput {
    /// User label for this run (e.g., "C-1", "Bracket arm")
    #[serde(default)]
    pub label: String,

    /// Span
    pub beam: BeamSpec,

    /// Rectangular cross-section
    pub section: Section,

    /// Elastic material
    pub material: Material,

    /// Point load magnitude and position
    pub load: LoadCase,

    /// Number of evenly spaced samples over `[0, L]`, from 2 to 100 000
    #[serde(default = "default_sample_points")]
    pub sample_points: usize,
}

impl CantileverInput {
    /// Validate every parameter before any evaluation runs.
    ///
    /// The span is checked first since the load position and the axis are
    /// validated against it.
    pub fn validate(&self) -> CalcResult<()> {
        self.beam.validate()?;
        self.section.validate()?;
        self.material.validate()?;
        self.load.validate(&self.beam)?;
        validate_sample_points(self.sample_points)
    }

    /// Whether the load acts at the free end
    pub fn is_tip_load(&self) -> bool {
        self.load.is_tip_load(&self.beam)
    }
}

impl Default for CantileverInput {
    /// 1 m steel bar, 20 x 40 mm, 1 kN at 0.7 m
    fn default() -> Self {
        CantileverInput {
            label: "Cantilever".to_string(),
            beam: BeamSpec::default(),
            section: Section::default(),
            material: Material::default(),
            load: LoadCase::default(),
            sample_points: DEFAULT_SAMPLE_POINTS,
        }
    }
}

/// Response sequences, aligned index-for-index with the axis samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseFields {
    /// Shear force V(x) (N)
    pub shear_n: Vec<f64>,
    /// Bending moment M(x) (N·m)
    pub moment_nm: Vec<f64>,
    /// Outer-fiber bending stress σ(x) (Pa)
    pub stress_pa: Vec<f64>,
    /// Deflection y(x) (m, negative downward)
    pub deflection_m: Vec<f64>,
    /// Slope θ(x) (rad)
    pub slope_rad: Vec<f64>,
}

/// Governing values of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSummary {
    /// Vertical reaction at the fixed end (N, positive upward)
    pub reaction_n: f64,
    /// Fixed-end moment M(0) = -F·a (N·m)
    pub fixed_end_moment_nm: f64,
    /// Outer-fiber stress at the fixed end σ(0) (Pa)
    pub fixed_end_stress_pa: f64,
    /// Free-end deflection y(L) (m)
    pub tip_deflection_m: f64,
    /// Free-end slope θ(L) (rad)
    pub tip_slope_rad: f64,
    /// Deflection under the load y(a) (m)
    pub load_point_deflection_m: f64,
    /// Maximum transverse shear stress in the loaded segment, 3|F| / 2A (Pa)
    pub max_shear_stress_pa: f64,
    /// Closed-form |y(L)| = |F|·L³ / 3EI, present only for a tip load (m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip_load_deflection_m: Option<f64>,
}

/// Complete result of [`analyze`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CantileverResult {
    /// Label copied from the input
    pub label: String,
    /// Sample coordinates the fields are evaluated at
    pub axis: BeamAxisSample,
    /// V, M, σ, y, θ over the axis
    pub fields: ResponseFields,
    /// Resolved section properties
    pub section: SectionProperties,
    /// Governing values
    pub summary: ResponseSummary,
    /// Equations applied in this run
    pub equations_used: Vec<Equation>,
}

impl CantileverResult {
    /// Largest |y| over the samples (m)
    pub fn max_abs_deflection_m(&self) -> f64 {
        self.fields
            .deflection_m
            .iter()
            .fold(0.0_f64, |acc, &y| acc.max(y.abs()))
    }

    /// Largest |σ| over the samples (Pa)
    pub fn max_abs_stress_pa(&self) -> f64 {
        self.fields
            .stress_pa
            .iter()
            .fold(0.0_f64, |acc, &s| acc.max(s.abs()))
    }
}

/// Analyze a cantilever under a point load.
///
/// Every input is validated before evaluation begins: the call returns either
/// the complete result or the first invalid-input error.
pub fn analyze(input: &CantileverInput) -> CalcResult<CantileverResult> {
    input.validate()?;

    let beam = &input.beam;
    let load = &input.load;
    let material = &input.material;

    let props = resolve_section(&input.section)?;

    let axis = BeamAxisSample::new(beam, input.sample_points)?;
    log::debug!(
        "axis: {} samples over L = {} m, dx = {:.4e} m",
        axis.len(),
        beam.length_m,
        axis.spacing()
    );

    let forces = internal_forces(beam, load, &axis)?;
    let stress_pa = bending_stress(&forces.moment_nm, &props)?;
    log::debug!("stress: {} samples", stress_pa.len());
    let deflection_m = deflection(beam, load, material, &props, &axis)?;
    let slope_rad = slope(beam, load, material, &props, &axis)?;

    let fields = ResponseFields {
        shear_n: forces.shear_n,
        moment_nm: forces.moment_nm,
        stress_pa,
        deflection_m,
        slope_rad,
    };

    let summary = summarize(input, &props, &fields);
    let tip_load = input.is_tip_load();

    log::info!(
        "{}: R = {:.1} N, M(0) = {:.1} N·m, σ(0) = {:.4e} Pa, y(L) = {:.4e} m",
        display_label(&input.label),
        summary.reaction_n,
        summary.fixed_end_moment_nm,
        summary.fixed_end_stress_pa,
        summary.tip_deflection_m
    );

    Ok(CantileverResult {
        label: input.label.clone(),
        axis,
        fields,
        section: props,
        summary,
        equations_used: cantilever_analysis_equations(tip_load),
    })
}

fn display_label(label: &str) -> &str {
    if label.is_empty() {
        "cantilever"
    } else {
        label
    }
}

/// Boundary values are read at the first and last samples, which coincide
/// with x = 0 and x = L exactly.
fn summarize(
    input: &CantileverInput,
    props: &SectionProperties,
    fields: &ResponseFields,
) -> ResponseSummary {
    let f = input.load.magnitude_n;
    let a = input.load.position_m;
    let l = input.beam.length_m;
    let e = input.material.modulus_pa;
    let i = props.moment_of_inertia_m4;
    let last = fields.deflection_m.len() - 1;

    let (reaction_n, _) = cantilever_point_reactions(f, a);

    ResponseSummary {
        reaction_n,
        fixed_end_moment_nm: fields.moment_nm[0],
        fixed_end_stress_pa: fields.stress_pa[0],
        tip_deflection_m: fields.deflection_m[last],
        tip_slope_rad: fields.slope_rad[last],
        load_point_deflection_m: cantilever_point_deflection(f, a, a, e, i),
        max_shear_stress_pa: rectangular_max_shear_stress(
            f.abs(),
            input.section.width_m,
            input.section.height_m,
        ),
        tip_load_deflection_m: input
            .is_tip_load()
            .then(|| cantilever_tip_load_max_deflection(f.abs(), l, e, i)),
    }
}
