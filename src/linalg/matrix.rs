/* ************************************************************************ **
** This file is part of lina, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::errors::{Axis, LinalgError};
use crate::tolerance::{Tolerance, QuantizedKey};
use crate::vector::{self, Vector};

use itertools::Itertools;
use lina_assert_close::{CheckClose, CheckCloseError, Tolerances};
use std::convert::TryFrom;
use std::ops::{Add, Mul, Neg, Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

/// Owned dense matrix with C layout.
///
/// Both dimensions are at least 1 and never change after construction.
/// Entries may be reassigned freely through `IndexMut`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>"))]
pub struct Matrix {
    // c-contiguous, row-contiguous data
    data: Vec<f64>,
    // invariant: height * width == data.len()
    // invariant: height >= 1 && width >= 1
    height: usize,
    width: usize,
}

pub type Rows<'a> = std::slice::Chunks<'a, f64>;
pub type RowsMut<'a> = std::slice::ChunksMut<'a, f64>;

/// Validate a shape, returning the number of entries it holds.
fn checked_len(height: usize, width: usize) -> Result<usize, LinalgError> {
    if height == 0 || width == 0 {
        return Err(LinalgError::dimension_mismatch(format!(
            "matrix dimensions must be positive (got {}x{})", height, width,
        )));
    }
    height.checked_mul(width).ok_or_else(|| LinalgError::dimension_mismatch(format!(
        "matrix dimensions are too large (got {}x{})", height, width,
    )))
}

impl Matrix {
    /// The `height x width` zero matrix.
    pub fn zeros(height: usize, width: usize) -> Result<Self, LinalgError> {
        let len = checked_len(height, width)?;
        Ok(Matrix { data: vec![0.0; len], height, width })
    }

    /// The `rank x rank` identity matrix.
    pub fn identity(rank: usize) -> Result<Self, LinalgError> {
        let mut eye = Matrix::zeros(rank, rank)?;
        for i in 0..rank {
            eye[(i, i)] = 1.0;
        }
        Ok(eye)
    }

    /// Build a matrix from a non-empty list of equal-length, non-empty rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, LinalgError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        checked_len(height, width)?;

        if let Some((r, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(LinalgError::dimension_mismatch(format!(
                "row {} has length {}, but row 0 has length {}", r, row.len(), width,
            )));
        }
        let data = Iterator::flatten(rows.into_iter()).collect();
        Ok(Matrix { data, height, width })
    }

    pub fn from_row_major_data((height, width): (usize, usize), data: Vec<f64>) -> Result<Self, LinalgError> {
        if data.len() != checked_len(height, width)? {
            return Err(LinalgError::dimension_mismatch(format!(
                "{} values cannot fill a {}x{} matrix", data.len(), height, width,
            )));
        }
        Ok(Matrix { data, height, width })
    }

    pub fn height(&self) -> usize { self.height }
    pub fn width(&self) -> usize { self.width }
    /// `(height, width)`
    pub fn dims(&self) -> (usize, usize) { (self.height, self.width) }
    pub fn is_square(&self) -> bool { self.height == self.width }

    pub fn row_major_data(&self) -> &[f64] { &self.data }
    pub fn row_major_data_mut(&mut self) -> &mut [f64] { &mut self.data }
    pub fn rows(&self) -> Rows<'_> { self.data.chunks(self.width) }
    pub fn rows_mut(&mut self) -> RowsMut<'_> { self.data.chunks_mut(self.width) }

    pub fn to_rows(&self) -> Vec<Vec<f64>>
    { self.rows().map(|row| row.to_vec()).collect() }

    /// Copy of row `r`.
    pub fn row(&self, r: usize) -> Result<Vec<f64>, LinalgError> {
        LinalgError::check_index(Axis::Row, r, self.height)?;
        Ok(self.row_unchecked(r).to_vec())
    }

    /// Copy of column `c`.
    pub fn column(&self, c: usize) -> Result<Vec<f64>, LinalgError> {
        LinalgError::check_index(Axis::Column, c, self.width)?;
        Ok(self.column_unchecked(c))
    }

    pub(crate) fn row_unchecked(&self, r: usize) -> &[f64]
    { &self.data[r * self.width..(r + 1) * self.width] }

    pub(crate) fn column_unchecked(&self, c: usize) -> Vec<f64>
    { self.data.iter().skip(c).step_by(self.width).cloned().collect() }

    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.width {
            data.extend(self.data.iter().skip(c).step_by(self.width));
        }
        Matrix { data, height: self.width, width: self.height }
    }

    /// Componentwise sum.
    pub fn checked_add(&self, other: &Matrix) -> Result<Matrix, LinalgError> {
        if self.dims() != other.dims() {
            return Err(LinalgError::dimension_mismatch(format!(
                "cannot add a {}x{} matrix to a {}x{} matrix",
                other.height, other.width, self.height, self.width,
            )));
        }
        let data = self.data.iter().zip_eq(&other.data).map(|(a, b)| a + b).collect();
        Ok(Matrix { data, ..*self })
    }

    /// Multiply every entry by `scalar`.
    pub fn scale(&self, scalar: f64) -> Matrix {
        let data = self.data.iter().map(|x| scalar * x).collect();
        Matrix { data, ..*self }
    }

    /// Matrix product `self * other`.
    pub fn checked_mul(&self, other: &Matrix) -> Result<Matrix, LinalgError> {
        if self.width != other.height {
            return Err(LinalgError::undefined(format!(
                "matrix multiplication not defined for these matrices ({}x{} times {}x{})",
                self.height, self.width, other.height, other.width,
            )));
        }

        // this is suboptimal.  who cares.
        let other_t = other.transpose();
        let mut data = Vec::with_capacity(self.height * other.width);
        for self_row in self.rows() {
            for other_col in other_t.rows() {
                data.push(vector::dot(self_row, other_col));
            }
        }
        Ok(Matrix { data, height: self.height, width: other.width })
    }

    /// Matrix-vector product `self * v`, with `v` as a column.
    pub fn checked_mul_vector(&self, v: &Vector) -> Result<Vector, LinalgError> {
        if self.width != v.dim() {
            return Err(LinalgError::dimension_mismatch(format!(
                "cannot multiply a {}x{} matrix by a vector of dimension {}",
                self.height, self.width, v.dim(),
            )));
        }
        Ok(self.rows().map(|row| vector::dot(row, v.as_slice())).collect())
    }

    /// Approximate equality.  False when the shapes differ.
    pub fn approx_eq(&self, other: &Matrix, tol: Tolerance) -> bool
    { self.dims() == other.dims() && tol.all_close(&self.data, &other.data) }

    pub fn quantized(&self, tol: Tolerance) -> QuantizedKey
    { QuantizedKey::new(self.dims(), &self.data, tol) }
}

impl Default for Matrix {
    /// The 1x1 zero matrix.
    fn default() -> Self { Matrix { data: vec![0.0], height: 1, width: 1 } }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool
    { self.approx_eq(other, Tolerance::default()) }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = LinalgError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, LinalgError>
    { Matrix::from_rows(rows) }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self { m.to_rows() }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline(always)] // inlining should often remove bounds checks
    fn index(&self, (r, c): (usize, usize)) -> &f64 {
        assert!(r < self.height && c < self.width, "index ({}, {}) out of bounds for {}x{} matrix", r, c, self.height, self.width);
        &self.data[r * self.width + c]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline(always)]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut f64 {
        assert!(r < self.height && c < self.width, "index ({}, {}) out of bounds for {}x{} matrix", r, c, self.height, self.width);
        &mut self.data[r * self.width + c]
    }
}

impl CheckClose for Matrix {
    fn check_close(&self, other: &Matrix, tol: Tolerances) -> Result<(), CheckCloseError> {
        if self.dims() != other.dims() {
            return Err(CheckCloseError::Shape {
                left: vec![self.height, self.width],
                right: vec![other.height, other.width],
            });
        }
        self.data.check_close(&other.data, tol)
    }
}

// ---------------------------------------------------------------------------
// operators
//
// Like the vector operators, these panic where the `checked_` methods
// would return an error.

impl<'a, 'b> Add<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn add(self, other: &'b Matrix) -> Matrix
    { self.checked_add(other).unwrap_or_else(|e| panic!("{}", e)) }
}

impl<'a, 'b> Mul<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, other: &'b Matrix) -> Matrix
    { self.checked_mul(other).unwrap_or_else(|e| panic!("{}", e)) }
}

impl<'a, 'b> Mul<&'b Vector> for &'a Matrix {
    type Output = Vector;

    fn mul(self, v: &'b Vector) -> Vector
    { self.checked_mul_vector(v).unwrap_or_else(|e| panic!("{}", e)) }
}

impl<'a> Mul<&'a Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, m: &'a Matrix) -> Matrix { m.scale(self) }
}

impl<'a> Mul<f64> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix { self.scale(scalar) }
}

impl<'a> Neg for &'a Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix { self.scale(-1.0) }
}
