/* ************************************************************************ **
** This file is part of lina, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Dense vectors and matrices over `f64`.
//!
//! Shapes are checked eagerly: every fallible operation returns a
//! `LinalgError` before doing any work.  The arithmetic operators (`+`, `*`,
//! unary `-`) are thin wrappers that panic on those same errors.
//!
//! Equality is approximate.  Comparisons use a `Tolerance` (absolute, 1e-6
//! by default) and never consider values of different shape equal.

#[macro_use] extern crate failure;
#[macro_use] extern crate log;
#[cfg_attr(test, macro_use)]
extern crate lina_assert_close;

mod errors;
mod tolerance;
mod vector;
mod matrix;
mod det;

pub use crate::errors::{Axis, ErrorKind, LinalgError};
pub use crate::tolerance::{Tolerance, QuantizedKey, DEFAULT_EPS};
pub use crate::vector::Vector;
pub use crate::matrix::{Matrix, Rows, RowsMut};

#[cfg(test)]
mod test_matrices {
    use super::Matrix;

    fn sqrt(x: f64) -> f64 { x.sqrt() }

    pub fn zero(n: usize) -> Matrix { Matrix::zeros(n, n).unwrap() }

    fn rows(rows: Vec<Vec<f64>>) -> Matrix { Matrix::from_rows(rows).unwrap() }

    pub fn m11_pi() -> Matrix { rows(vec![vec![std::f64::consts::PI]]) }

    pub fn m22_sqrts() -> Matrix {
        rows(vec![
            vec![sqrt(2.0), sqrt(3.0)],
            vec![sqrt(5.0), sqrt(6.0)],
        ])
    }

    pub fn m33() -> Matrix {
        rows(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
    }

    pub fn m33_sqrts() -> Matrix {
        rows(vec![
            vec![sqrt(2.0), sqrt(3.0), sqrt(5.0)],
            vec![sqrt(6.0), sqrt(7.0), sqrt(8.0)],
            vec![sqrt(10.0), sqrt(11.0), sqrt(12.0)],
        ])
    }

    pub fn m33_zero_row() -> Matrix {
        use std::f64::consts::{E, PI};
        rows(vec![
            vec![E, E.powi(2), E.powi(3)],
            vec![0.0, 0.0, 0.0],
            vec![PI, PI.powi(2), PI.powi(3)],
        ])
    }

    pub fn m33_zero_col() -> Matrix {
        use std::f64::consts::{E, PI};
        rows(vec![
            vec![E, 0.0, E.powi(3)],
            vec![E.powi(2), 0.0, PI.powi(2)],
            vec![PI, 0.0, PI.powi(3)],
        ])
    }

    pub fn m12_ones() -> Matrix { rows(vec![vec![1.0, 1.0]]) }
    pub fn m21_ones() -> Matrix { rows(vec![vec![1.0], vec![1.0]]) }
}
