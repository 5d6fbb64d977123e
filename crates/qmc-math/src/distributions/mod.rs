//! Probability distributions, delegating to the `statrs` crate.

/// Normal (Gaussian) distribution functions.
pub mod normal;

pub use normal::{normal_cdf, normal_cdf_inverse, normal_pdf};
