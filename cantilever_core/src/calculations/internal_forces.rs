//! Internal-force evaluator.
//!
//! Shear V(x) and moment M(x) at every axis sample for a point load at
//! distance `a` from the fixed support. The tip load is not a separate
//! branch: it is the same piecewise formula with `a = L`, where every sample
//! falls on the support side of the load.

use serde::{Deserialize, Serialize};

use crate::equations::cantilever::{cantilever_point_moment, cantilever_point_shear};
use crate::errors::CalcResult;
use crate::model::{BeamAxisSample, BeamSpec, LoadCase};

/// Shear and moment sequences aligned with a [`BeamAxisSample`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalForces {
    /// V(x_i) (N)
    pub shear_n: Vec<f64>,
    /// M(x_i) (N·m)
    pub moment_nm: Vec<f64>,
}

/// Evaluate V(x) and M(x) over the axis.
///
/// - x ≤ a: `V = -F`, `M = -F(a - x)`
/// - x > a: `V = 0`, `M = 0`
///
/// # Errors
/// `InvalidInput` if the span is invalid, the load lies outside `[0, L]`,
/// or `axis` was sampled over a different span.
///
/// # Example
/// ```rust
/// use cantilever_core::calculations::internal_forces::internal_forces;
/// use cantilever_core::model::{BeamAxisSample, BeamSpec, LoadCase};
///
/// let beam = BeamSpec::new(1.0);
/// let axis = BeamAxisSample::new(&beam, 11).unwrap();
/// let forces = internal_forces(&beam, &LoadCase::new(1000.0, 0.7), &axis).unwrap();
///
/// assert!((forces.moment_nm[0] + 700.0).abs() < 1e-9);
/// assert_eq!(forces.shear_n[10], 0.0);
/// ```
pub fn internal_forces(
    beam: &BeamSpec,
    load: &LoadCase,
    axis: &BeamAxisSample,
) -> CalcResult<InternalForces> {
    beam.validate()?;
    axis.check_span(beam)?;
    load.validate(beam)?;

    let p = load.magnitude_n;
    let a = load.position_m;

    let forces = InternalForces {
        shear_n: axis.map(|x| cantilever_point_shear(p, a, x)),
        moment_nm: axis.map(|x| cantilever_point_moment(p, a, x)),
    };

    log::debug!(
        "internal forces: {} samples, F = {} N at a = {} m",
        axis.len(),
        p,
        a
    );

    Ok(forces)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(l: f64, f: f64, a: f64, n: usize) -> (BeamAxisSample, InternalForces) {
        let beam = BeamSpec::new(l);
        let axis = BeamAxisSample::new(&beam, n).unwrap();
        let forces = internal_forces(&beam, &LoadCase::new(f, a), &axis).unwrap();
        (axis, forces)
    }

    #[test]
    fn test_interior_load_reference_case() {
        let (axis, forces) = evaluate(1.0, 1000.0, 0.7, 300);

        assert!((forces.moment_nm[0] + 700.0).abs() < 1e-9, "M(0) = {}", forces.moment_nm[0]);
        for (i, &x) in axis.positions().iter().enumerate() {
            if x <= 0.7 {
                assert_eq!(forces.shear_n[i], -1000.0, "V({}) should be -F", x);
            } else {
                assert_eq!(forces.shear_n[i], 0.0, "V({}) should be 0", x);
                assert_eq!(forces.moment_nm[i], 0.0, "M({}) should be 0", x);
            }
        }
    }

    #[test]
    fn test_tip_load_single_branch() {
        let (axis, forces) = evaluate(1.0, 1000.0, 1.0, 200);
        assert!(forces.shear_n.iter().all(|&v| v == -1000.0));
        for (i, &x) in axis.positions().iter().enumerate() {
            assert!((forces.moment_nm[i] + 1000.0 * (1.0 - x)).abs() < 1e-9);
        }
        assert_eq!(forces.moment_nm[199], 0.0);
    }

    #[test]
    fn test_load_at_support() {
        let (_, forces) = evaluate(1.0, 1000.0, 0.0, 50);
        // Only the x = 0 sample sits on the support side
        assert_eq!(forces.shear_n[0], -1000.0);
        assert_eq!(forces.moment_nm[0], 0.0);
        assert!(forces.shear_n[1..].iter().all(|&v| v == 0.0));
        assert!(forces.moment_nm[1..].iter().all(|&m| m == 0.0));
    }

    #[test]
    fn test_load_on_sample_point_is_support_side() {
        // a = 0.5 on an 11-point axis lands on x_5 exactly
        let (axis, forces) = evaluate(1.0, 200.0, 0.5, 11);
        assert_eq!(axis.positions()[5], 0.5);
        assert_eq!(forces.shear_n[5], -200.0);
        assert_eq!(forces.shear_n[6], 0.0);
    }

    #[test]
    fn test_outputs_aligned_with_axis() {
        let (axis, forces) = evaluate(3.0, 10.0, 1.2, 2);
        assert_eq!(forces.shear_n.len(), axis.len());
        assert_eq!(forces.moment_nm.len(), axis.len());
    }

    #[test]
    fn test_rejects_load_off_beam() {
        let beam = BeamSpec::new(1.0);
        let axis = BeamAxisSample::new(&beam, 10).unwrap();
        assert!(internal_forces(&beam, &LoadCase::new(1000.0, 1.2), &axis).is_err());
        assert!(internal_forces(&beam, &LoadCase::new(1000.0, -0.1), &axis).is_err());
    }

    #[test]
    fn test_rejects_axis_of_other_span() {
        let beam = BeamSpec::new(1.0);
        let longer = BeamAxisSample::new(&BeamSpec::new(3.0), 4).unwrap();
        let err = internal_forces(&beam, &LoadCase::new(1000.0, 1.0), &longer).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let shorter = BeamAxisSample::new(&BeamSpec::new(0.5), 4).unwrap();
        assert!(internal_forces(&beam, &LoadCase::new(1000.0, 0.2), &shorter).is_err());
    }
}
