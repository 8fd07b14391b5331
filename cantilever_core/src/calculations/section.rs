//! Geometry/section resolver.
//!
//! Turns a [`Section`] into the properties the stress and deflection
//! evaluators need. The resolver is the only place section dimensions are
//! validated, so any [`SectionProperties`] it returns has strictly positive
//! `I` and `c`.

use serde::{Deserialize, Serialize};

use crate::equations::section::{
    outer_fiber_distance, rectangular_area, rectangular_moment_of_inertia,
    rectangular_section_modulus,
};
use crate::errors::CalcResult;
use crate::model::Section;

/// Derived properties of a rectangular cross-section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Second moment of area about the neutral axis, I = bh³/12 (m⁴)
    pub moment_of_inertia_m4: f64,
    /// Neutral axis to outer fiber, c = h/2 (m)
    pub outer_fiber_m: f64,
    /// Cross-sectional area, A = bh (m²)
    pub area_m2: f64,
    /// Elastic section modulus, S = I/c (m³)
    pub section_modulus_m3: f64,
}

/// Resolve section properties from rectangular dimensions.
///
/// # Errors
/// `InvalidInput` if the width or height is not a positive finite number.
///
/// # Example
/// ```rust
/// use cantilever_core::calculations::section::resolve_section;
/// use cantilever_core::model::Section;
///
/// let props = resolve_section(&Section::rectangular(0.02, 0.04)).unwrap();
/// assert_eq!(props.outer_fiber_m, 0.02);
/// assert!((props.moment_of_inertia_m4 - 1.0667e-7).abs() / 1.0667e-7 < 1e-3);
/// ```
pub fn resolve_section(section: &Section) -> CalcResult<SectionProperties> {
    section.validate()?;

    let b = section.width_m;
    let h = section.height_m;

    let props = SectionProperties {
        moment_of_inertia_m4: rectangular_moment_of_inertia(b, h),
        outer_fiber_m: outer_fiber_distance(h),
        area_m2: rectangular_area(b, h),
        section_modulus_m3: rectangular_section_modulus(b, h),
    };

    log::debug!(
        "resolved section {} x {} m: I = {:.4e} m^4, c = {} m",
        b,
        h,
        props.moment_of_inertia_m4,
        props.outer_fiber_m
    );

    Ok(props)
}
