//! # Cantilever Point-Load Formulas
//!
//! Closed-form Euler–Bernoulli solution for a cantilever fixed at x = 0 and
//! free at x = L, loaded by a single transverse point load P at distance `a`
//! from the support. A tip load is the case a = L; there is no separate
//! formula for it.
//!
//! ## Notation
//!
//! - `L` = Span length
//! - `x` = Position along beam from the fixed support
//! - `a` = Load position from the fixed support
//! - `P` = Point load magnitude (positive downward)
//! - `V` = Shear force, `M` = Bending moment
//! - `θ` = Slope of the elastic curve, `y` = Deflection
//! - `E` = Young's modulus, `I` = Second moment of area
//!
//! ## Sign Conventions
//!
//! - Loads: Positive downward
//! - Shear: A downward load gives V = -P between the support and the load
//! - Moment: Hogging moment is negative, M(0) = -Pa
//! - Deflection and slope: Negative downward
//! - Reactions: Positive upward
//!
//! The boundary x = a belongs to the support-side segment.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1, Case 1a (cantilever)
//! - Gere & Goodno, Mechanics of Materials, Appendix G, Table G-1

use super::section::rectangular_shear_area;

// =============================================================================
// REACTIONS AND INTERNAL FORCES
// =============================================================================

/// Support reactions for point load P at distance a from the fixed end
///
/// ```text
///        a         P
///   ▐█←──────────→ ↓
///   ▐█═════════════╤═══════
///   ▐█
///   R, M_A
/// ```
///
/// # Formulas
/// - R = P (upward)
/// - M_A = -Pa
///
/// # Returns
/// (R, M_A) - vertical reaction and fixed-end moment
#[inline]
pub fn cantilever_point_reactions(p: f64, a: f64) -> (f64, f64) {
    (p, -p * a)
}

/// Shear at position x for point load P at position a
///
/// # Formulas
/// - V(x) = -P     for x ≤ a
/// - V(x) = 0      for x > a
#[inline]
pub fn cantilever_point_shear(p: f64, a: f64, x: f64) -> f64 {
    if x <= a {
        -p
    } else {
        0.0
    }
}

/// Moment at position x for point load P at position a
///
/// # Formulas
/// - M(x) = -P(a - x)   for x ≤ a
/// - M(x) = 0           for x > a
///
/// With a = L this is the tip-load moment M(x) = -P(L - x).
#[inline]
pub fn cantilever_point_moment(p: f64, a: f64, x: f64) -> f64 {
    if x <= a {
        -p * (a - x)
    } else {
        0.0
    }
}

// =============================================================================
// ELASTIC CURVE
// =============================================================================

/// Slope of the elastic curve at position x for point load P at position a
///
/// # Formulas
/// - θ(x) = -Px(2a - x) / (2EI)   for x ≤ a
/// - θ(x) = -Pa² / (2EI)          for x > a
///
/// Beyond the load the beam is moment-free and stays straight.
#[inline]
pub fn cantilever_point_slope(p: f64, a: f64, x: f64, e: f64, i: f64) -> f64 {
    let ei = e * i;
    if x <= a {
        -p * x * (2.0 * a - x) / (2.0 * ei)
    } else {
        -p * a * a / (2.0 * ei)
    }
}

/// Deflection at position x for point load P at position a
///
/// # Formulas
///
/// For x ≤ a:
/// ```text
/// y(x) = -Px²(3a - x) / (6EI)
/// ```
///
/// For x > a:
/// ```text
/// y(x) = -Pa²(3x - a) / (6EI)
/// ```
///
/// With a = L the first branch covers the whole span and equals the
/// tip-load curve y(x) = Px²(x - 3L) / (6EI).
///
/// # Arguments
/// * `p` - Point load (positive downward)
/// * `a` - Distance from the fixed support to the load
/// * `x` - Position to calculate deflection
/// * `e` - Young's modulus
/// * `i` - Second moment of area
///
/// # Returns
/// Deflection (negative downward)
///
/// # Example
/// ```rust
/// use cantilever_core::equations::cantilever::cantilever_point_deflection;
///
/// // 1 m steel bar, 1 kN at the tip
/// let i = 0.02 * 0.04_f64.powi(3) / 12.0;
/// let y_tip = cantilever_point_deflection(1000.0, 1.0, 1.0, 210e9, i);
/// assert!((y_tip + 1000.0 / (3.0 * 210e9 * i)).abs() < 1e-12);
/// ```
#[inline]
pub fn cantilever_point_deflection(p: f64, a: f64, x: f64, e: f64, i: f64) -> f64 {
    let ei = e * i;
    if x <= a {
        -p * x * x * (3.0 * a - x) / (6.0 * ei)
    } else {
        -p * a * a * (3.0 * x - a) / (6.0 * ei)
    }
}

/// Magnitude of the free-end deflection for a tip load
///
/// # Formula
/// δ_max = PL³ / (3EI)
#[inline]
pub fn cantilever_tip_load_max_deflection(p: f64, l: f64, e: f64, i: f64) -> f64 {
    p * l.powi(3) / (3.0 * e * i)
}

// =============================================================================
// STRESSES
// =============================================================================

/// Bending stress at the outer fiber
///
/// # Formula
/// σ = Mc / I
///
/// Sign follows M: a hogging (negative) moment gives negative σ on the
/// fiber at +c.
#[inline]
pub fn outer_fiber_stress(m: f64, c: f64, i: f64) -> f64 {
    m * c / i
}

/// Maximum transverse shear stress for a rectangular section
///
/// # Formula
/// τ_max = 3V / (2bh) = V / A_shear
#[inline]
pub fn rectangular_max_shear_stress(v: f64, b: f64, h: f64) -> f64 {
    v / rectangular_shear_area(b, h)
}

// =============================================================================
// UNIT TESTS
// =============================================================================
