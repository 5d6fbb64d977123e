//! `Matrix` — a two-dimensional matrix of reals.
//!
//! A thin newtype around `nalgebra::DMatrix<f64>` exposing what the
//! correlation machinery needs: construction, indexing, transpose, and
//! matrix-vector / matrix-matrix products.

use crate::array::Array;
use nalgebra::DMatrix;
use qmc_core::Real;
use std::ops::{Index, IndexMut, Mul};

/// A dynamically-sized 2-D matrix of `Real` values (row-major access).
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix(DMatrix<Real>);

impl Matrix {
    /// Create a zero-filled `rows × cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self(DMatrix::zeros(rows, cols))
    }

    /// Create an identity matrix of size `n × n`.
    pub fn identity(n: usize) -> Self {
        Self(DMatrix::identity(n, n))
    }

    /// Create from a row-major data slice.
    pub fn from_row_slice(rows: usize, cols: usize, data: &[Real]) -> Self {
        Self(DMatrix::from_row_slice(rows, cols, data))
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.0.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.0.ncols()
    }

    /// Return `true` if the matrix is square.
    pub fn is_square(&self) -> bool {
        self.0.nrows() == self.0.ncols()
    }

    /// Transpose.
    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    /// Matrix-vector product `M · v`.
    pub fn mul_vec(&self, v: &Array) -> Array {
        Array::from((&self.0 * v.inner()).clone_owned())
    }

    /// Borrow the inner `DMatrix`.
    pub fn inner(&self) -> &DMatrix<Real> {
        &self.0
    }

    /// Consume and return the inner `DMatrix`.
    pub fn into_inner(self) -> DMatrix<Real> {
        self.0
    }
}

impl From<DMatrix<Real>> for Matrix {
    fn from(m: DMatrix<Real>) -> Self {
        Self(m)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Real;
    fn index(&self, ij: (usize, usize)) -> &Real {
        &self.0[ij]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, ij: (usize, usize)) -> &mut Real {
        &mut self.0[ij]
    }
}

impl Mul for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: &Matrix) -> Matrix {
        Matrix(&self.0 * &rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_times_vector() {
        let m = Matrix::identity(3);
        let v = Array::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(m.mul_vec(&v).as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn row_major_construction() {
        let m = Matrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(1, 0)], 3.0);
    }

    #[test]
    fn transpose_product() {
        let m = Matrix::from_row_slice(2, 2, &[1.0, 2.0, 0.0, 1.0]);
        let mt = m.transpose();
        let p = &m * &mt;
        assert_eq!(p[(0, 0)], 5.0);
        assert_eq!(p[(1, 1)], 1.0);
    }
}
