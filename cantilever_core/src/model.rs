//! # Analysis Model
//!
//! Immutable parameter structures for one cantilever analysis:
//!
//! ```text
//!   fixed end                          free end
//!   x = 0                               x = L
//!   ▐█═══════════════════╤═══════════════╡
//!   ▐█                   ↓ F             │
//!   ▐█ ←──────── a ─────→ ←─── L - a ───→
//! ```
//!
//! - [`BeamSpec`] - span length
//! - [`Section`] - rectangular cross-section dimensions
//! - [`LoadCase`] - point load magnitude and position
//! - [`BeamAxisSample`] - the shared discretization of `[0, L]`
//!
//! All lengths are meters and forces newtons. Each type validates its own
//! invariants; [`LoadCase`] and [`BeamAxisSample`] validate against a
//! [`BeamSpec`] because their domain depends on the span.

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};

/// Default number of axis samples
pub const DEFAULT_SAMPLE_POINTS: usize = 300;

/// Minimum number of axis samples (both ends)
pub const MIN_SAMPLE_POINTS: usize = 2;

/// Maximum number of axis samples per field
pub const MAX_SAMPLE_POINTS: usize = 100_000;

/// Check an axis sample count against `[MIN_SAMPLE_POINTS, MAX_SAMPLE_POINTS]`.
pub fn validate_sample_points(points: usize) -> CalcResult<()> {
    if (MIN_SAMPLE_POINTS..=MAX_SAMPLE_POINTS).contains(&points) {
        Ok(())
    } else {
        Err(CalcError::invalid_input(
            "sample_points",
            points.to_string(),
            format!(
                "Between {} and {} sample points are required",
                MIN_SAMPLE_POINTS, MAX_SAMPLE_POINTS
            ),
        ))
    }
}

/// Cantilever span, fixed at x = 0 and free at x = L
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamSpec {
    /// Span length L (m)
    pub length_m: f64,
}

impl BeamSpec {
    pub fn new(length_m: f64) -> Self {
        BeamSpec { length_m }
    }

    /// Validate the span (finite and strictly positive)
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("length_m", self.length_m, "Beam length must be positive")
    }
}

impl Default for BeamSpec {
    fn default() -> Self {
        BeamSpec { length_m: 1.0 }
    }
}

/// Solid rectangular cross-section, bending about the strong (width) axis
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │ ════════│ ← neutral axis at h/2
///     │         │
///     └─────────┘
///          b
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Width b (m)
    pub width_m: f64,
    /// Height h (m), measured in the plane of bending
    pub height_m: f64,
}

impl Section {
    pub fn rectangular(width_m: f64, height_m: f64) -> Self {
        Section { width_m, height_m }
    }

    /// Validate both dimensions (finite and strictly positive)
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("width_m", self.width_m, "Section width must be positive")?;
        require_positive("height_m", self.height_m, "Section height must be positive")
    }
}

impl Default for Section {
    fn default() -> Self {
        Section {
            width_m: 0.02,
            height_m: 0.04,
        }
    }
}

/// Transverse point load
///
/// `magnitude_n` is positive downward. `position_m` is measured from the
/// fixed support and must lie in `[0, L]`; `position_m == L` is a tip load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// Load magnitude F (N), positive downward
    pub magnitude_n: f64,
    /// Distance a from the fixed support to the load (m)
    pub position_m: f64,
}

impl LoadCase {
    pub fn new(magnitude_n: f64, position_m: f64) -> Self {
        LoadCase {
            magnitude_n,
            position_m,
        }
    }

    /// Load acting at the free end (a = L)
    pub fn at_tip(magnitude_n: f64, beam: &BeamSpec) -> Self {
        LoadCase {
            magnitude_n,
            position_m: beam.length_m,
        }
    }

    /// Validate the load against the span it is applied to
    pub fn validate(&self, beam: &BeamSpec) -> CalcResult<()> {
        if !self.magnitude_n.is_finite() {
            return Err(CalcError::invalid_input(
                "magnitude_n",
                self.magnitude_n.to_string(),
                "Load magnitude must be a finite number",
            ));
        }
        let a = self.position_m;
        if !a.is_finite() || a < 0.0 || a > beam.length_m {
            return Err(CalcError::invalid_input(
                "position_m",
                self.position_m.to_string(),
                format!("Load position must lie within [0, {}] m", beam.length_m),
            ));
        }
        Ok(())
    }

    /// Distance from the load to the free end, L - a
    pub fn remaining_length(&self, beam: &BeamSpec) -> f64 {
        beam.length_m - self.position_m
    }

    /// Whether the load acts at the free end
    pub fn is_tip_load(&self, beam: &BeamSpec) -> bool {
        self.position_m == beam.length_m
    }
}

impl Default for LoadCase {
    fn default() -> Self {
        LoadCase {
            magnitude_n: 1000.0,
            position_m: 0.7,
        }
    }
}

/// Evenly spaced sample coordinates over `[0, L]`.
///
/// Built once per analysis and shared read-only by every evaluator. The
/// first sample is exactly the fixed end and the last exactly the free end,
/// so boundary values are read at index 0 and `len() - 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AxisRecord")]
pub struct BeamAxisSample {
    positions_m: Vec<f64>,
}

/// Unchecked wire form of [`BeamAxisSample`]
#[derive(Deserialize)]
struct AxisRecord {
    positions_m: Vec<f64>,
}

impl TryFrom<AxisRecord> for BeamAxisSample {
    type Error = CalcError;

    fn try_from(record: AxisRecord) -> CalcResult<Self> {
        let positions_m = record.positions_m;
        validate_sample_points(positions_m.len())?;

        let reject = |reason: &str| {
            CalcError::invalid_input("positions_m", format!("{:?}", positions_m), reason)
        };
        if positions_m.first() != Some(&0.0) {
            return Err(reject("axis must start at the fixed end (x = 0)"));
        }
        if !positions_m.iter().all(|x| x.is_finite()) {
            return Err(reject("axis positions must be finite"));
        }
        if !positions_m.windows(2).all(|w| w[1] > w[0]) {
            return Err(reject("axis positions must be strictly increasing"));
        }

        Ok(BeamAxisSample { positions_m })
    }
}

impl BeamAxisSample {
    /// Discretize the beam into `points` evenly spaced coordinates.
    ///
    /// # Example
    /// ```rust
    /// use cantilever_core::model::{BeamAxisSample, BeamSpec};
    ///
    /// let axis = BeamAxisSample::new(&BeamSpec::new(2.0), 5).unwrap();
    /// assert_eq!(axis.positions(), &[0.0, 0.5, 1.0, 1.5, 2.0]);
    /// ```
    pub fn new(beam: &BeamSpec, points: usize) -> CalcResult<Self> {
        beam.validate()?;
        validate_sample_points(points)?;

        let l = beam.length_m;
        let last = points - 1;
        let positions_m = (0..points)
            .map(|i| if i == last { l } else { l * i as f64 / last as f64 })
            .collect();

        Ok(BeamAxisSample { positions_m })
    }

    /// Fails unless this axis ends exactly at the free end of `beam`.
    pub fn check_span(&self, beam: &BeamSpec) -> CalcResult<()> {
        match self.positions_m.last() {
            Some(&end) if end == beam.length_m => Ok(()),
            end => Err(CalcError::invalid_input(
                "axis",
                format!("{:?}", end),
                format!("axis was not sampled over a beam of length {} m", beam.length_m),
            )),
        }
    }

    /// Sample coordinates (m), increasing from the fixed end
    pub fn positions(&self) -> &[f64] {
        &self.positions_m
    }

    pub fn len(&self) -> usize {
        self.positions_m.len()
    }

    /// Always false for a constructed axis
    pub fn is_empty(&self) -> bool {
        self.positions_m.is_empty()
    }

    /// Spacing between adjacent samples (m)
    pub fn spacing(&self) -> f64 {
        match self.positions_m.as_slice() {
            [first, .., last] => (last - first) / (self.positions_m.len() - 1) as f64,
            _ => 0.0,
        }
    }

    /// Evaluate a pure function of x at every sample
    pub fn map<F>(&self, f: F) -> Vec<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.positions_m.iter().map(|&x| f(x)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beam_validation() {
        assert!(BeamSpec::new(1.0).validate().is_ok());
        assert!(BeamSpec::new(0.0).validate().is_err());
        assert!(BeamSpec::new(-3.0).validate().is_err());
    }

    #[test]
    fn test_section_validation() {
        assert!(Section::rectangular(0.02, 0.04).validate().is_ok());

        let err = Section::rectangular(0.0, 0.04).validate().unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "width_m"));

        let err = Section::rectangular(0.02, -0.04).validate().unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "height_m"));
    }

    #[test]
    fn test_load_position_bounds() {
        let beam = BeamSpec::new(1.0);
        assert!(LoadCase::new(1000.0, 0.0).validate(&beam).is_ok());
        assert!(LoadCase::new(1000.0, 0.7).validate(&beam).is_ok());
        assert!(LoadCase::new(1000.0, 1.0).validate(&beam).is_ok());
        assert!(LoadCase::new(1000.0, -0.01).validate(&beam).is_err());
        assert!(LoadCase::new(1000.0, 1.01).validate(&beam).is_err());
        assert!(LoadCase::new(f64::NAN, 0.5).validate(&beam).is_err());
    }

    #[test]
    fn test_tip_load() {
        let beam = BeamSpec::new(2.5);
        let load = LoadCase::at_tip(500.0, &beam);
        assert!(load.is_tip_load(&beam));
        assert_eq!(load.remaining_length(&beam), 0.0);

        let interior = LoadCase::new(500.0, 1.0);
        assert!(!interior.is_tip_load(&beam));
        assert_eq!(interior.remaining_length(&beam), 1.5);
    }

    #[test]
    fn test_axis_endpoints_exact() {
        let beam = BeamSpec::new(0.7);
        let axis = BeamAxisSample::new(&beam, 301).unwrap();
        assert_eq!(axis.len(), 301);
        assert_eq!(axis.positions()[0], 0.0);
        assert_eq!(axis.positions()[300], 0.7);
        assert!(axis.positions().windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_axis_minimum_points() {
        let beam = BeamSpec::new(1.0);
        let axis = BeamAxisSample::new(&beam, 2).unwrap();
        assert_eq!(axis.positions(), &[0.0, 1.0]);
        assert_eq!(axis.spacing(), 1.0);

        assert!(BeamAxisSample::new(&beam, 1).is_err());
        assert!(BeamAxisSample::new(&beam, 0).is_err());
        assert!(BeamAxisSample::new(&BeamSpec::new(0.0), 10).is_err());
    }

    #[test]
    fn test_axis_maximum_points() {
        let beam = BeamSpec::new(1.0);
        let axis = BeamAxisSample::new(&beam, MAX_SAMPLE_POINTS).unwrap();
        assert_eq!(axis.len(), MAX_SAMPLE_POINTS);

        let err = BeamAxisSample::new(&beam, MAX_SAMPLE_POINTS + 1).unwrap_err();
        assert!(matches!(
            err,
            CalcError::InvalidInput { ref field, .. } if field == "sample_points"
        ));
        assert!(BeamAxisSample::new(&beam, usize::MAX).is_err());
    }

    #[test]
    fn test_axis_check_span() {
        let axis = BeamAxisSample::new(&BeamSpec::new(3.0), 4).unwrap();
        assert!(axis.check_span(&BeamSpec::new(3.0)).is_ok());

        let err = axis.check_span(&BeamSpec::new(1.0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_axis_deserialize_checks_shape() {
        let axis = BeamAxisSample::new(&BeamSpec::new(1.0), 5).unwrap();
        let json = serde_json::to_string(&axis).unwrap();
        let back: BeamAxisSample = serde_json::from_str(&json).unwrap();
        assert_eq!(back, axis);

        for bad in [
            r#"{"positions_m": [0.0]}"#,
            r#"{"positions_m": [0.1, 0.5, 1.0]}"#,
            r#"{"positions_m": [0.0, 0.6, 0.5, 1.0]}"#,
            r#"{"positions_m": [0.0, 0.5, 0.5]}"#,
        ] {
            assert!(serde_json::from_str::<BeamAxisSample>(bad).is_err(), "{} accepted", bad);
        }
    }

    #[test]
    fn test_axis_map() {
        let axis = BeamAxisSample::new(&BeamSpec::new(1.0), 3).unwrap();
        assert_eq!(axis.map(|x| 2.0 * x), vec![0.0, 1.0, 2.0]);
    }
}
