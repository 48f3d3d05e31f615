/* ************************************************************************ **
** This file is part of lina, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small geometric types built on `lina_linalg::Vector`.

#[macro_use] extern crate failure;
#[cfg(test)]
#[macro_use] extern crate lina_assert_close;

use lina_linalg::LinalgError;

mod simplex;
mod interval;

pub use crate::simplex::Simplex;
pub use crate::interval::{Interval, IntervalBox};

#[derive(Debug, Clone, PartialEq, Fail)]
pub enum GeometryError {
    #[fail(display = "{} must have dimension at least {} (got {})", what, min, got)]
    DimensionTooSmall { what: &'static str, min: usize, got: usize },

    #[fail(display = "expected dimension {}, got {}", expected, got)]
    DimensionMismatch { expected: usize, got: usize },

    #[fail(display = "interval bounds are inverted: [{}, {}]", low, high)]
    Inverted { low: f64, high: f64 },

    #[fail(display = "{}", _0)]
    Linalg(#[cause] LinalgError),
}

impl From<LinalgError> for GeometryError {
    fn from(e: LinalgError) -> Self { GeometryError::Linalg(e) }
}
