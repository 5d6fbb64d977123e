//! Standard normal distribution functions.
//!
//! Wraps the `statrs` implementation behind free functions so callers
//! don't carry the distribution object around.

use qmc_core::Real;
use statrs::distribution::{Continuous, ContinuousCDF, Normal};

fn standard_normal() -> Normal {
    // Unit parameters cannot fail validation.
    Normal::new(0.0, 1.0).expect("standard normal parameters")
}

/// The standard normal probability density function `φ(x)`.
#[inline]
pub fn normal_pdf(x: Real) -> Real {
    standard_normal().pdf(x)
}

/// The standard normal cumulative distribution function `Φ(x)`.
#[inline]
pub fn normal_cdf(x: Real) -> Real {
    standard_normal().cdf(x)
}

/// The inverse standard normal CDF (probit function).
///
/// # Panics
/// Panics if `p` is outside the open interval (0, 1).
#[inline]
pub fn normal_cdf_inverse(p: Real) -> Real {
    assert!(p > 0.0 && p < 1.0, "p must be in (0, 1), got {p}");
    standard_normal().inverse_cdf(p)
}
