/* ************************************************************************ **
** This file is part of lina, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};
#[cfg(feature = "serde")]
use std::convert::TryFrom;

use lina_assert_close::Tolerances;

/// Absolute tolerance shared by every comparison unless another is supplied.
pub const DEFAULT_EPS: f64 = 1e-6;

/// Absolute tolerance for float comparisons.
///
/// Two numbers are considered equal when `|a - b| < eps` (strictly).
/// Every equality and null test in this crate goes through one of these;
/// the methods without a `_with` suffix use `Tolerance::default()`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTolerance", into = "RawTolerance"))]
pub struct Tolerance {
    // invariant: eps >= 0 (and not NaN)
    eps: f64,
}

impl Default for Tolerance {
    fn default() -> Self { Tolerance { eps: DEFAULT_EPS } }
}

impl Tolerance {
    pub fn new(eps: f64) -> Self {
        Tolerance::checked_new(eps)
            .unwrap_or_else(|| panic!("tolerance must be non-negative (got {})", eps))
    }

    /// `None` if `eps` is negative or NaN.
    pub fn checked_new(eps: f64) -> Option<Self> {
        match eps >= 0.0 {
            true => Some(Tolerance { eps }),
            false => None,
        }
    }

    #[inline]
    pub fn eps(self) -> f64 { self.eps }

    #[inline]
    pub fn is_close(self, a: f64, b: f64) -> bool
    { lina_assert_close::is_close(a, b, self.as_tolerances()) }

    #[inline]
    pub fn is_zero(self, x: f64) -> bool
    { self.is_close(x, 0.0) }

    /// True if every element is within tolerance of zero.
    ///
    /// This is the null-vector test, shared by `Vector` and by the rows and
    /// columns inspected during determinant evaluation.
    pub fn is_null(self, xs: &[f64]) -> bool
    { xs.iter().all(|&x| self.is_zero(x)) }

    /// Elementwise comparison of two equal-length slices.
    ///
    /// Slices of differing length are never close.
    pub fn all_close(self, a: &[f64], b: &[f64]) -> bool
    { a.len() == b.len() && a.iter().zip(b).all(|(&a, &b)| self.is_close(a, b)) }

    /// Round to the nearest multiple of `eps`, as an integer count of `eps`.
    ///
    /// Values within tolerance of each other usually quantize to the same
    /// integer, but not always (they can straddle a rounding boundary).
    pub fn quantize(self, x: f64) -> i64 {
        if self.eps == 0.0 {
            // `+ 0.0` turns -0.0 into 0.0, which `is_close` considers equal
            return (x + 0.0).to_bits() as i64;
        }
        // `as` saturates for huge values and sends NaN to zero
        (x / self.eps).round() as i64
    }

    /// The same tolerance in the form `lina_assert_close` understands.
    pub fn as_tolerances(self) -> Tolerances
    { Tolerances::abs(self.eps) }
}

/// Serialized form of `Tolerance`, validated on the way in.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct RawTolerance {
    eps: f64,
}

#[cfg(feature = "serde")]
impl Default for RawTolerance {
    fn default() -> Self { RawTolerance { eps: DEFAULT_EPS } }
}

#[cfg(feature = "serde")]
impl TryFrom<RawTolerance> for Tolerance {
    type Error = String;

    fn try_from(raw: RawTolerance) -> Result<Self, String> {
        Tolerance::checked_new(raw.eps)
            .ok_or_else(|| format!("tolerance must be non-negative (got {})", raw.eps))
    }
}

#[cfg(feature = "serde")]
impl From<Tolerance> for RawTolerance {
    fn from(tol: Tolerance) -> Self { RawTolerance { eps: tol.eps } }
}

/// Hashable, exactly-comparable digest of a vector or matrix.
///
/// `Vector` and `Matrix` compare with a tolerance, which is not transitive,
/// so they implement neither `Eq` nor `Hash`.  A `QuantizedKey` can stand in
/// for them as a map key when bucketing by approximate value is wanted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuantizedKey {
    pub shape: (usize, usize),
    pub cells: Vec<i64>,
}

impl QuantizedKey {
    pub(crate) fn new(shape: (usize, usize), data: &[f64], tol: Tolerance) -> Self {
        let cells = data.iter().map(|&x| tol.quantize(x)).collect();
        QuantizedKey { shape, cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_in_a_million() {
        let tol = Tolerance::default();
        assert_eq!(tol.eps(), 1e-6);
        assert!(tol.is_close(1.0, 1.0 + 5e-7));
        assert!(!tol.is_close(1.0, 1.0 + 2e-6));
        assert!(tol.is_zero(-9e-7));
    }

    #[test]
    fn null_and_all_close() {
        let tol = Tolerance::default();
        assert!(tol.is_null(&[0.0, 1e-8, -1e-8]));
        assert!(!tol.is_null(&[0.0, 1e-3]));
        assert!(tol.is_null(&[]));

        assert!(tol.all_close(&[1.0, 2.0], &[1.0, 2.0 + 1e-9]));
        assert!(!tol.all_close(&[1.0, 2.0], &[1.0]));
    }

    #[test]
    fn quantize() {
        let tol = Tolerance::new(0.5);
        assert_eq!(tol.quantize(1.1), 2);
        assert_eq!(tol.quantize(-1.1), -2);
        assert_eq!(tol.quantize(0.1), 0);

        let a = QuantizedKey::new((1, 2), &[1.0, 2.0], Tolerance::default());
        let b = QuantizedKey::new((1, 2), &[1.0 + 1e-9, 2.0 - 1e-9], Tolerance::default());
        assert_eq!(a, b);
    }

    #[test]
    fn signed_zeros_share_a_key_without_tolerance() {
        let tol = Tolerance::new(0.0);
        assert!(tol.is_close(0.0, -0.0));
        assert_eq!(tol.quantize(0.0), tol.quantize(-0.0));
        assert_ne!(tol.quantize(0.0), tol.quantize(1e-300));

        let a = QuantizedKey::new((2, 1), &[0.0, 1.5], tol);
        let b = QuantizedKey::new((2, 1), &[-0.0, 1.5], tol);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic]
    fn negative_eps() {
        Tolerance::new(-1.0);
    }

    #[test]
    fn checked_new() {
        assert_eq!(Tolerance::checked_new(0.0).map(Tolerance::eps), Some(0.0));
        assert!(Tolerance::checked_new(-1e-9).is_none());
        assert!(Tolerance::checked_new(std::f64::NAN).is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_with_default() {
        let tol: Tolerance = serde_json::from_str("{}").unwrap();
        assert_eq!(tol, Tolerance::default());
        let tol: Tolerance = serde_json::from_str(r#"{"eps": 0.01}"#).unwrap();
        assert_eq!(tol.eps(), 0.01);

        assert!(serde_json::from_str::<Tolerance>(r#"{"eps": -0.5}"#).is_err());
        assert_eq!(serde_json::to_string(&Tolerance::new(0.25)).unwrap(), r#"{"eps":0.25}"#);
    }
}
