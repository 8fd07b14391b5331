//! Outer-fiber bending stress, σ(x) = M(x)·c / I.

use crate::equations::cantilever::outer_fiber_stress;
use crate::errors::{require_positive, CalcResult};

use super::section::SectionProperties;

/// Bending stress at the outer fiber for each moment sample.
///
/// The output is aligned element-for-element with `moments_nm`. Sign follows
/// the moment: the hogging moments of a downward load give negative stress.
///
/// # Errors
/// `InvalidInput` if `I` or `c` is not positive. Properties built by
/// [`resolve_section`](super::section::resolve_section) always pass; this
/// guards hand-built [`SectionProperties`].
pub fn bending_stress(moments_nm: &[f64], props: &SectionProperties) -> CalcResult<Vec<f64>> {
    require_positive(
        "moment_of_inertia_m4",
        props.moment_of_inertia_m4,
        "Second moment of area must be positive",
    )?;
    require_positive(
        "outer_fiber_m",
        props.outer_fiber_m,
        "Outer fiber distance must be positive",
    )?;

    let c = props.outer_fiber_m;
    let i = props.moment_of_inertia_m4;

    Ok(moments_nm
        .iter()
        .map(|&m| outer_fiber_stress(m, c, i))
        .collect())
}
