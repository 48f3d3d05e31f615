/* ************************************************************************ **
** This file is part of lina, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::errors::LinalgError;
use crate::tolerance::{Tolerance, QuantizedKey};

use itertools::Itertools;
use lina_assert_close::{CheckClose, CheckCloseError, Tolerances};
use std::iter::FromIterator;
use std::ops::{Add, Mul, Neg, Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

/// Dense vector of fixed dimension.
///
/// Components may be reassigned in place, but the dimension is fixed at
/// construction.  Equality is approximate (see `Tolerance`), and vectors of
/// different dimension are never equal.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<f64>", into = "Vec<f64>"))]
pub struct Vector {
    // invariant: length never changes after construction
    coords: Vec<f64>,
}

impl Vector {
    /// The zero vector of dimension `dim`.
    pub fn zeros(dim: usize) -> Self
    { Vector { coords: vec![0.0; dim] } }

    /// Build a vector from its components.
    ///
    /// An empty list produces the scalar zero, a one-component vector `(0)`.
    pub fn new(coords: Vec<f64>) -> Self {
        match coords.is_empty() {
            true => Vector { coords: vec![0.0] },
            false => Vector { coords },
        }
    }

    /// The zero vector with the same dimension as `other`.
    pub fn zeros_like(other: &Vector) -> Self
    { Vector::zeros(other.dim()) }

    pub fn dim(&self) -> usize { self.coords.len() }
    pub fn as_slice(&self) -> &[f64] { &self.coords }
    pub fn as_mut_slice(&mut self) -> &mut [f64] { &mut self.coords }
    pub fn into_inner(self) -> Vec<f64> { self.coords }
    pub fn iter(&self) -> std::slice::Iter<'_, f64> { self.coords.iter() }

    fn check_same_dim(&self, other: &Vector, what: &str) -> Result<(), LinalgError> {
        match self.dim() == other.dim() {
            true => Ok(()),
            false => Err(LinalgError::dimension_mismatch(format!(
                "cannot {} vectors of dimension {} and {}", what, self.dim(), other.dim(),
            ))),
        }
    }

    /// Componentwise sum.
    pub fn checked_add(&self, other: &Vector) -> Result<Vector, LinalgError> {
        self.check_same_dim(other, "add")?;
        Ok(self.coords.iter().zip_eq(&other.coords).map(|(a, b)| a + b).collect())
    }

    /// Multiply every component by `scalar`.
    pub fn scale(&self, scalar: f64) -> Vector
    { Vector { coords: self.coords.iter().map(|x| scalar * x).collect() } }

    pub fn dot(&self, other: &Vector) -> Result<f64, LinalgError> {
        self.check_same_dim(other, "take the dot product of")?;
        Ok(dot(&self.coords, &other.coords))
    }

    /// Euclidean norm, or exactly zero for a null vector.
    pub fn length(&self) -> f64
    { self.length_with(Tolerance::default()) }

    pub fn length_with(&self, tol: Tolerance) -> f64 {
        if self.is_null_with(tol) {
            return 0.0;
        }
        dot(&self.coords, &self.coords).sqrt()
    }

    /// Rescale to unit length in place.  Null vectors are left alone.
    pub fn normalize(&mut self)
    { self.normalize_with(Tolerance::default()) }

    pub fn normalize_with(&mut self, tol: Tolerance) {
        if self.is_null_with(tol) {
            return;
        }
        let length = self.length_with(tol);
        for x in &mut self.coords {
            *x /= length;
        }
    }

    /// True if every component is within tolerance of zero.
    pub fn is_null(&self) -> bool
    { self.is_null_with(Tolerance::default()) }

    pub fn is_null_with(&self, tol: Tolerance) -> bool
    { tol.is_null(&self.coords) }

    /// Approximate equality.  False when the dimensions differ.
    pub fn approx_eq(&self, other: &Vector, tol: Tolerance) -> bool
    { tol.all_close(&self.coords, &other.coords) }

    pub fn quantized(&self, tol: Tolerance) -> QuantizedKey
    { QuantizedKey::new((self.dim(), 1), &self.coords, tol) }
}

// callers check lengths
pub(crate) fn dot(a: &[f64], b: &[f64]) -> f64
{ a.iter().zip_eq(b).map(|(a, b)| a * b).sum() }

impl Default for Vector {
    /// The scalar zero.
    fn default() -> Self { Vector::new(vec![]) }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Vector) -> bool
    { self.approx_eq(other, Tolerance::default()) }
}

impl From<Vec<f64>> for Vector {
    fn from(coords: Vec<f64>) -> Self { Vector::new(coords) }
}

impl<'a> From<&'a [f64]> for Vector {
    fn from(coords: &'a [f64]) -> Self { Vector::new(coords.to_vec()) }
}

impl From<Vector> for Vec<f64> {
    fn from(v: Vector) -> Self { v.coords }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item=f64>>(iter: I) -> Self
    { Vector::new(iter.into_iter().collect()) }
}

impl Index<usize> for Vector {
    type Output = f64;

    #[inline(always)]
    fn index(&self, i: usize) -> &f64 { &self.coords[i] }
}

impl IndexMut<usize> for Vector {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut f64 { &mut self.coords[i] }
}

impl CheckClose for Vector {
    fn check_close(&self, other: &Vector, tol: Tolerances) -> Result<(), CheckCloseError>
    { self.as_slice().check_close(other.as_slice(), tol) }
}

// ---------------------------------------------------------------------------
// operators
//
// These panic on a dimension mismatch; use the `checked_` methods to get a
// `LinalgError` instead.

impl<'a, 'b> Add<&'b Vector> for &'a Vector {
    type Output = Vector;

    fn add(self, other: &'b Vector) -> Vector
    { self.checked_add(other).unwrap_or_else(|e| panic!("{}", e)) }
}

impl Add<Vector> for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector { &self + &other }
}

impl<'a> Mul<&'a Vector> for f64 {
    type Output = Vector;

    fn mul(self, vector: &'a Vector) -> Vector { vector.scale(self) }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, vector: Vector) -> Vector { vector.scale(self) }
}

impl<'a> Mul<f64> for &'a Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector { self.scale(scalar) }
}

impl<'a> Neg for &'a Vector {
    type Output = Vector;

    fn neg(self) -> Vector { self.scale(-1.0) }
}
