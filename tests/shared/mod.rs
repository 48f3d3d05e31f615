#![allow(dead_code)] // each test binary uses a different subset

use lina::linalg::{Matrix, Vector};
use rand::Rng;

/// Entries are drawn uniformly from `[-1, 1)`.
pub fn random_matrix(height: usize, width: usize) -> Matrix {
    let mut rng = rand::thread_rng();
    let data = (0..height * width).map(|_| rng.gen_range(-1.0, 1.0)).collect();
    Matrix::from_row_major_data((height, width), data).unwrap()
}

pub fn random_vector(dim: usize) -> Vector {
    let mut rng = rand::thread_rng();
    (0..dim).map(|_| rng.gen_range(-1.0, 1.0)).collect()
}

pub fn random_dim(lo: usize, hi: usize) -> usize
{ rand::thread_rng().gen_range(lo, hi) }
