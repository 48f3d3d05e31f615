/* ************************************************************************ **
** This file is part of lina, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::GeometryError;
use lina_linalg::Vector;

#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

/// Closed interval `[low, high]`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval {
    low: f64,
    high: f64,
}

impl Interval {
    pub fn new(low: f64, high: f64) -> Result<Self, GeometryError> {
        // written this way so that NaN bounds are rejected too
        if !(low <= high) {
            return Err(GeometryError::Inverted { low, high });
        }
        Ok(Interval { low, high })
    }

    /// `[0, 1]`
    pub fn unit() -> Self { Interval { low: 0.0, high: 1.0 } }

    pub fn low(&self) -> f64 { self.low }
    pub fn high(&self) -> f64 { self.high }
    pub fn length(&self) -> f64 { self.high - self.low }
    pub fn contains(&self, x: f64) -> bool { self.low <= x && x <= self.high }
}

/// Axis-aligned box: the product of one interval per axis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntervalBox {
    // invariant: non-empty
    axes: Vec<Interval>,
}

impl IntervalBox {
    pub fn new(axes: Vec<Interval>) -> Result<Self, GeometryError> {
        if axes.is_empty() {
            return Err(GeometryError::DimensionTooSmall { what: "interval box", min: 1, got: 0 });
        }
        Ok(IntervalBox { axes })
    }

    /// `[0, 1]^dim`
    pub fn unit_cube(dim: usize) -> Result<Self, GeometryError>
    { IntervalBox::new(vec![Interval::unit(); dim]) }

    pub fn dim(&self) -> usize { self.axes.len() }
    pub fn axes(&self) -> &[Interval] { &self.axes }

    pub fn lower_corner(&self) -> Vector
    { self.axes.iter().map(Interval::low).collect() }

    pub fn upper_corner(&self) -> Vector
    { self.axes.iter().map(Interval::high).collect() }

    pub fn center(&self) -> Result<Vector, GeometryError>
    { Ok(self.lower_corner().checked_add(&self.upper_corner())?.scale(0.5)) }

    pub fn contains(&self, point: &Vector) -> Result<bool, GeometryError> {
        if point.dim() != self.dim() {
            return Err(GeometryError::DimensionMismatch { expected: self.dim(), got: point.dim() });
        }
        Ok(self.axes.iter().zip(point.iter()).all(|(axis, &x)| axis.contains(x)))
    }
}

impl Default for IntervalBox {
    /// The unit square in the first quadrant.
    fn default() -> Self { IntervalBox { axes: vec![Interval::unit(); 2] } }
}
