//! # qmc-math
//!
//! Mathematical support for the path-generation core: `Array`/`Matrix`
//! newtypes over nalgebra, matrix factorizations, the normal distribution
//! (via statrs), a 1-D root-finder, and random number / random sequence
//! generation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// One-dimensional vector of reals.
pub mod array;

/// Floating-point comparison utilities.
pub mod comparison;

/// Probability distributions.
pub mod distributions;

/// Two-dimensional matrix of reals.
pub mod matrix;

/// Matrix factorizations: Cholesky and the pseudo square root.
pub mod matrix_utilities;

/// Random number and random sequence generators.
pub mod random_numbers;

/// 1-D root-finding solvers.
pub mod solvers1d;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use array::Array;
pub use comparison::{close, close_enough};
pub use distributions::{normal_cdf, normal_cdf_inverse, normal_pdf};
pub use matrix::Matrix;
pub use matrix_utilities::{cholesky_decomposition, pseudo_sqrt};
