//! Matrix factorizations used by the correlation machinery.
//!
//! Correlated path generation factorizes a correlation matrix C once into
//! a mixing matrix L with `L·Lᵗ ≈ C`. [`cholesky_decomposition`] is exact
//! but requires positive definiteness; [`pseudo_sqrt`] tolerates merely
//! positive-semidefinite input by clipping negative eigenvalues to zero.

use crate::array::Array;
use crate::matrix::Matrix;
use nalgebra::DMatrix;
use qmc_core::{
    errors::{Error, Result},
    Real,
};

/// Cholesky decomposition of a symmetric positive-definite matrix.
///
/// Returns the lower-triangular factor `L` such that `A = L · Lᵗ`.
pub fn cholesky_decomposition(m: &Matrix) -> Result<Matrix> {
    if !m.is_square() {
        return Err(Error::InvalidArgument("matrix must be square".into()));
    }
    match m.inner().clone().cholesky() {
        Some(chol) => Ok(Matrix::from(chol.l())),
        None => Err(Error::Runtime(
            "Cholesky decomposition failed — matrix is not positive-definite".into(),
        )),
    }
}

/// Eigenvalue decomposition of a symmetric real matrix.
///
/// Returns `(eigenvalues, eigenvectors)`; each column of the eigenvector
/// matrix corresponds to the eigenvalue at the same index.
pub fn symmetric_eigen(m: &Matrix) -> Result<(Array, Matrix)> {
    if !m.is_square() {
        return Err(Error::InvalidArgument("matrix must be square".into()));
    }
    let eigen = m.inner().clone().symmetric_eigen();
    Ok((
        Array::from(eigen.eigenvalues.clone_owned()),
        Matrix::from(eigen.eigenvectors),
    ))
}

/// Pseudo square root of a symmetric positive-semidefinite matrix.
///
/// Computes `S` such that `S · Sᵗ ≈ M` from the eigenvalue decomposition,
/// zeroing out negative eigenvalues. Rounding can push the eigenvalues of
/// a valid correlation matrix slightly below zero; those modes carry no
/// variance and are dropped.
pub fn pseudo_sqrt(m: &Matrix) -> Result<Matrix> {
    let (eigenvalues, eigenvectors) = symmetric_eigen(m)?;
    let n = eigenvalues.len();
    let mut diag = DMatrix::<Real>::zeros(n, n);
    for i in 0..n {
        let ev = eigenvalues[i];
        diag[(i, i)] = if ev > 0.0 { ev.sqrt() } else { 0.0 };
    }
    let result = eigenvectors.into_inner() * diag;
    Ok(Matrix::from(result))
}
