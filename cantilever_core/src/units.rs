//! # Unit Types
//!
//! Type-safe wrappers for SI engineering units (just f64 newtypes).
//!
//! The analysis itself works in base SI units throughout: meters, newtons,
//! pascals and newton-meters. Nothing in the calculation path converts. The
//! scaled units here (millimeters, kilonewtons, megapascals, gigapascals)
//! exist for presenting results and for writing material constants the way
//! datasheets quote them; every conversion is an explicit `From`.
//!
//! ## Example
//!
//! ```rust
//! use cantilever_core::units::{Megapascals, Meters, Millimeters, Pascals};
//!
//! let tip = Meters(-0.0149);
//! let tip_mm: Millimeters = tip.into();
//! assert!((tip_mm.0 + 14.9).abs() < 1e-9);
//!
//! let stress: Megapascals = Pascals(-1.875e8).into();
//! assert!((stress.0 + 187.5).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// Length Units

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// Force Units

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

impl From<Newtons> for Kilonewtons {
    fn from(n: Newtons) -> Self {
        Kilonewtons(n.0 / 1000.0)
    }
}

impl From<Kilonewtons> for Newtons {
    fn from(kn: Kilonewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

// Moment Units

/// Moment in newton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMeters(pub f64);

/// Moment in kilonewton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilonewtonMeters(pub f64);

impl From<NewtonMeters> for KilonewtonMeters {
    fn from(nm: NewtonMeters) -> Self {
        KilonewtonMeters(nm.0 / 1000.0)
    }
}

impl From<KilonewtonMeters> for NewtonMeters {
    fn from(knm: KilonewtonMeters) -> Self {
        NewtonMeters(knm.0 * 1000.0)
    }
}

// Stress / Modulus Units

/// Stress or modulus in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Stress in megapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

/// Modulus in gigapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gigapascals(pub f64);

impl From<Pascals> for Megapascals {
    fn from(pa: Pascals) -> Self {
        Megapascals(pa.0 / 1.0e6)
    }
}

impl From<Megapascals> for Pascals {
    fn from(mpa: Megapascals) -> Self {
        Pascals(mpa.0 * 1.0e6)
    }
}

impl From<Pascals> for Gigapascals {
    fn from(pa: Pascals) -> Self {
        Gigapascals(pa.0 / 1.0e9)
    }
}

impl From<Gigapascals> for Pascals {
    fn from(gpa: Gigapascals) -> Self {
        Pascals(gpa.0 * 1.0e9)
    }
}

// Second moment of area

/// Second moment of area in meters^4
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct M4(pub f64);

/// Second moment of area in millimeters^4
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm4(pub f64);

impl From<M4> for Mm4 {
    fn from(m4: M4) -> Self {
        Mm4(m4.0 * 1.0e12)
    }
}

impl From<Mm4> for M4 {
    fn from(mm4: Mm4) -> Self {
        M4(mm4.0 / 1.0e12)
    }
}

// Shared arithmetic and accessors

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Magnitude in this unit
            pub fn value(self) -> f64 {
                self.0
            }

            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(Newtons);
impl_arithmetic!(Kilonewtons);
impl_arithmetic!(NewtonMeters);
impl_arithmetic!(KilonewtonMeters);
impl_arithmetic!(Pascals);
impl_arithmetic!(Megapascals);
impl_arithmetic!(Gigapascals);
impl_arithmetic!(M4);
impl_arithmetic!(Mm4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_millimeters() {
        let m = Meters(0.04);
        let mm: Millimeters = m.into();
        assert!((mm.0 - 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_gigapascals_to_pascals() {
        let pa: Pascals = Gigapascals(210.0).into();
        assert_eq!(pa.0, 210e9);
    }

    #[test]
    fn test_stress_to_megapascals() {
        let mpa: Megapascals = Pascals(-1.875e8).into();
        assert!((mpa.0 + 187.5).abs() < 1e-9);
    }

    #[test]
    fn test_second_moment_scaling() {
        let mm4: Mm4 = M4(1.0e-7).into();
        assert!((mm4.0 - 1.0e5).abs() < 1e-6);
    }

    #[test]
    fn test_arithmetic() {
        let a = Newtons(1000.0);
        let b = Newtons(250.0);
        assert_eq!((a + b).0, 1250.0);
        assert_eq!((a - b).0, 750.0);
        assert_eq!((a * 2.0).0, 2000.0);
        assert_eq!((a / 4.0).value(), 250.0);
    }

    #[test]
    fn test_serialization() {
        let m = Meters(0.7);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "0.7");

        let roundtrip: Meters = serde_json::from_str(&json).unwrap();
        assert_eq!(m, roundtrip);
    }
}
