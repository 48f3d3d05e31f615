/* ************************************************************************ **
** This file is part of lina, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::GeometryError;
use lina_linalg::Vector;

/// A simplex, stored as its list of vertices.
///
/// The dimension of a simplex here is its number of vertices, which for
/// the standard simplex is also the dimension of the space it lives in.
#[derive(Debug, Clone, PartialEq)]
pub struct Simplex {
    // invariant: at least 2 vertices, all of the same dimension
    vertices: Vec<Vector>,
}

const MIN_DIM: usize = 2;

impl Simplex {
    /// The standard simplex in R^dim, whose vertices are the unit vectors.
    pub fn new(dim: usize) -> Result<Self, GeometryError> {
        if dim < MIN_DIM {
            return Err(GeometryError::DimensionTooSmall { what: "simplex", min: MIN_DIM, got: dim });
        }
        Ok(Simplex::standard(dim))
    }

    pub fn from_vertices(vertices: Vec<Vector>) -> Result<Self, GeometryError> {
        if vertices.len() < MIN_DIM {
            return Err(GeometryError::DimensionTooSmall { what: "simplex", min: MIN_DIM, got: vertices.len() });
        }
        let expected = vertices[0].dim();
        if let Some(bad) = vertices.iter().find(|v| v.dim() != expected) {
            return Err(GeometryError::DimensionMismatch { expected, got: bad.dim() });
        }
        Ok(Simplex { vertices })
    }

    fn standard(dim: usize) -> Self {
        let vertices = (0..dim).map(|i| {
            let mut v = Vector::zeros(dim);
            v[i] = 1.0;
            v
        }).collect();
        Simplex { vertices }
    }

    pub fn dim(&self) -> usize { self.vertices.len() }
    pub fn vertices(&self) -> &[Vector] { &self.vertices }

    /// Mean of the vertices.
    pub fn centroid(&self) -> Result<Vector, GeometryError> {
        let mut sum = Vector::zeros_like(&self.vertices[0]);
        for v in &self.vertices {
            sum = sum.checked_add(v)?;
        }
        Ok(sum.scale(1.0 / self.vertices.len() as f64))
    }
}

impl Default for Simplex {
    /// The triangle with vertices `(1, 0)` and `(0, 1)`.
    fn default() -> Self { Simplex::standard(MIN_DIM) }
}
