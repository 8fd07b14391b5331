//! # Cross-Section Property Formulas
//!
//! Geometric properties of a solid rectangular cross-section, used in the
//! stress and deflection evaluators.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Second moment of area about the neutral axis
//! - `c` = Distance from the neutral axis to the extreme fiber
//! - `S` = Elastic section modulus (I/c)
//! - `b` = Width of section
//! - `h` = Height of section (in the plane of bending)
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table A.1
//! - Gere & Goodno, Mechanics of Materials, Chapter 5

// =============================================================================
// RECTANGULAR SECTION PROPERTIES
// =============================================================================

/// Calculate cross-sectional area for rectangular section
///
/// # Formula
/// A = b × h
///
/// # Example
/// ```rust
/// use cantilever_core::equations::section::rectangular_area;
///
/// let area = rectangular_area(0.02, 0.04);
/// assert!((area - 8.0e-4).abs() < 1e-12);
/// ```
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Calculate second moment of area for rectangular section about its centroidal axis
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │ ════════│ ← neutral axis at h/2
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// I = bh³/12
///
/// # Arguments
/// * `b` - Width of section (perpendicular to the plane of bending)
/// * `h` - Height of section (in the plane of bending)
///
/// # Returns
/// Second moment of area in fourth power of input units (m⁴)
///
/// # Example
/// ```rust
/// use cantilever_core::equations::section::rectangular_moment_of_inertia;
///
/// // 20 mm x 40 mm bar
/// let i = rectangular_moment_of_inertia(0.02, 0.04);
/// // I = 0.02 × 0.04³ / 12 = 1.0667e-7 m⁴
/// assert!((i - 1.0667e-7).abs() / 1.0667e-7 < 1e-3);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

/// Distance from the neutral axis to the outer fiber of a symmetric section
///
/// # Formula
/// c = h/2
#[inline]
pub fn outer_fiber_distance(h: f64) -> f64 {
    h / 2.0
}

/// Calculate elastic section modulus for rectangular section
///
/// Relates bending moment to outer-fiber stress: σ = M/S.
///
/// # Formula
/// S = I/c = bh³/12 ÷ h/2 = bh²/6
///
/// # Example
/// ```rust
/// use cantilever_core::equations::section::rectangular_section_modulus;
///
/// let s = rectangular_section_modulus(0.02, 0.04);
/// assert!((s - 5.3333e-6).abs() / 5.3333e-6 < 1e-3);
/// ```
#[inline]
pub fn rectangular_section_modulus(b: f64, h: f64) -> f64 {
    b * h.powi(2) / 6.0
}

/// Calculate effective shear area for rectangular section
///
/// The maximum shear stress occurs at the neutral axis and is 1.5× the
/// average: τ_max = 1.5 × V/A = V/A_shear.
///
/// # Formula
/// A_shear = 2bh/3
#[inline]
pub fn rectangular_shear_area(b: f64, h: f64) -> f64 {
    2.0 * b * h / 3.0
}

// =============================================================================
// UNIT TESTS
// =============================================================================
