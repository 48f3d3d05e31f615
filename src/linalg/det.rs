/* ************************************************************************ **
** This file is part of lina, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Submatrices and the cofactor-expansion determinant.
//!
//! The determinant is computed by Laplace expansion along the first row,
//! which costs `O(n!)` in the worst case.  Two things keep it usable on
//! the small matrices it is meant for:
//!
//! * 1x1 and 2x2 matrices are evaluated directly.
//! * Any matrix with a row or column that is null (within tolerance) has
//!   determinant zero, and the expansion stops there.  This prunes most of
//!   the tree for sparse inputs; the 100x100 identity is quick.

use crate::errors::{Axis, LinalgError};
use crate::matrix::Matrix;
use crate::tolerance::Tolerance;

impl Matrix {
    /// The matrix with row `row` and column `col` deleted.
    ///
    /// The remaining entries keep their relative order.  Undefined for a
    /// matrix with only one row or only one column.
    pub fn submatrix(&self, row: usize, col: usize) -> Result<Matrix, LinalgError> {
        let (height, width) = self.dims();
        if height == 1 || width == 1 {
            return Err(LinalgError::undefined(format!(
                "submatrix of a {}x{} matrix is undefined (both dimensions must exceed 1)",
                height, width,
            )));
        }
        LinalgError::check_index(Axis::Row, row, height)?;
        LinalgError::check_index(Axis::Column, col, width)?;

        let mut data = Vec::with_capacity((height - 1) * (width - 1));
        for (r, values) in self.rows().enumerate() {
            if r == row {
                continue;
            }
            data.extend(values.iter().enumerate().filter(|&(c, _)| c != col).map(|(_, &x)| x));
        }
        Matrix::from_row_major_data((height - 1, width - 1), data)
    }

    /// Determinant, comparing against zero with the default tolerance.
    pub fn determinant(&self) -> Result<f64, LinalgError>
    { self.determinant_with(Tolerance::default()) }

    /// Determinant, using `tol` to decide which rows and columns are null.
    pub fn determinant_with(&self, tol: Tolerance) -> Result<f64, LinalgError> {
        if !self.is_square() {
            return Err(LinalgError::undefined(format!(
                "the determinant of a non-square matrix is not defined (got {}x{})",
                self.height(), self.width(),
            )));
        }
        trace!("Computing determinant of {}x{} matrix by cofactor expansion.", self.height(), self.width());
        cofactor_expansion(self, tol)
    }
}

// precondition: square
fn cofactor_expansion(m: &Matrix, tol: Tolerance) -> Result<f64, LinalgError> {
    match m.height() {
        1 => return Ok(m[(0, 0)]),
        2 => return Ok(det_ad_bc(m[(0, 0)], m[(1, 1)], m[(0, 1)], m[(1, 0)])),
        _ => {},
    }

    if has_null_line(m, tol) {
        return Ok(0.0);
    }

    let mut sum = 0.0;
    for (i, &value) in m.row_unchecked(0).iter().enumerate() {
        let sign = match i % 2 {
            0 => 1.0,
            _ => -1.0,
        };
        sum += sign * value * cofactor_expansion(&m.submatrix(0, i)?, tol)?;
    }
    Ok(sum)
}

fn det_ad_bc(a: f64, d: f64, b: f64, c: f64) -> f64
{ a * d - b * c }

/// Is any full row or full column a null vector?
fn has_null_line(m: &Matrix, tol: Tolerance) -> bool {
    m.rows().any(|row| tol.is_null(row))
        || (0..m.width()).any(|c| tol.is_null(&m.column_unchecked(c)))
}
