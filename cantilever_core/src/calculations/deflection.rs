//! Elastic-curve evaluator.
//!
//! Deflection y(x) and slope θ(x) from the closed-form Euler–Bernoulli
//! solution. Both are zero at the fixed end and negative (downward) for a
//! downward load. Beyond the load the beam carries no moment, so the curve
//! continues as a straight line with slope θ(a).

use crate::equations::cantilever::{cantilever_point_deflection, cantilever_point_slope};
use crate::errors::{require_positive, CalcResult};
use crate::materials::Material;
use crate::model::{BeamAxisSample, BeamSpec, LoadCase};

use super::section::SectionProperties;

/// Checks shared by both elastic-curve evaluators
fn validate_stiffness(
    beam: &BeamSpec,
    load: &LoadCase,
    material: &Material,
    props: &SectionProperties,
    axis: &BeamAxisSample,
) -> CalcResult<(f64, f64)> {
    beam.validate()?;
    axis.check_span(beam)?;
    load.validate(beam)?;
    material.validate()?;
    require_positive(
        "moment_of_inertia_m4",
        props.moment_of_inertia_m4,
        "Second moment of area must be positive",
    )?;
    Ok((material.modulus_pa, props.moment_of_inertia_m4))
}

/// Deflection at each axis sample (m, negative downward).
///
/// - x ≤ a: `y = -F x² (3a - x) / (6EI)`
/// - x > a: `y = -F a² (3x - a) / (6EI)`
///
/// # Errors
/// `InvalidInput` if E or I is not positive, if the beam or load is
/// invalid, or if `axis` was sampled over a different span.
///
/// # Example
/// ```rust
/// use cantilever_core::calculations::deflection::deflection;
/// use cantilever_core::calculations::section::resolve_section;
/// use cantilever_core::materials::Material;
/// use cantilever_core::model::{BeamAxisSample, BeamSpec, LoadCase, Section};
///
/// let beam = BeamSpec::new(1.0);
/// let axis = BeamAxisSample::new(&beam, 100).unwrap();
/// let props = resolve_section(&Section::rectangular(0.02, 0.04)).unwrap();
/// let load = LoadCase::at_tip(1000.0, &beam);
/// let y = deflection(&beam, &load, &Material::new(210e9), &props, &axis).unwrap();
///
/// assert_eq!(y[0], 0.0);
/// assert!((y[99] + 1.4881e-2).abs() < 1e-5);
/// ```
pub fn deflection(
    beam: &BeamSpec,
    load: &LoadCase,
    material: &Material,
    props: &SectionProperties,
    axis: &BeamAxisSample,
) -> CalcResult<Vec<f64>> {
    let (e, i) = validate_stiffness(beam, load, material, props, axis)?;
    let p = load.magnitude_n;
    let a = load.position_m;

    let y = axis.map(|x| cantilever_point_deflection(p, a, x, e, i));
    log::debug!("deflection: EI = {:.4e} N·m², {} samples", e * i, y.len());
    Ok(y)
}

/// Slope of the elastic curve at each axis sample (rad).
///
/// - x ≤ a: `θ = -F x (2a - x) / (2EI)`
/// - x > a: `θ = -F a² / (2EI)`
///
/// # Errors
/// Same conditions as [`deflection`].
pub fn slope(
    beam: &BeamSpec,
    load: &LoadCase,
    material: &Material,
    props: &SectionProperties,
    axis: &BeamAxisSample,
) -> CalcResult<Vec<f64>> {
    let (e, i) = validate_stiffness(beam, load, material, props, axis)?;
    let p = load.magnitude_n;
    let a = load.position_m;

    Ok(axis.map(|x| cantilever_point_slope(p, a, x, e, i)))
}
