//! Geometric Brownian motion in price space.
//!
//! ```text
//! dS = μ·S dt + σ·S dW
//! ```
//!
//! State-proportional coefficients with additive aggregation; stepping is
//! Euler. For the exact log-space scheme see
//! [`BlackScholesProcess`](crate::BlackScholesProcess).

use crate::stochastic_process::StochasticProcess1D;
use qmc_core::{Real, Time};

/// Geometric Brownian motion with constant drift and volatility.
#[derive(Debug, Clone)]
pub struct GeometricBrownianMotionProcess {
    x0: Real,
    mu: Real,
    sigma: Real,
}

impl GeometricBrownianMotionProcess {
    /// Create a new GBM process.
    ///
    /// # Panics
    /// Panics if `x0` is not positive or `sigma` is negative.
    pub fn new(x0: Real, mu: Real, sigma: Real) -> Self {
        assert!(x0 > 0.0, "initial value must be positive, got {x0}");
        assert!(sigma >= 0.0, "volatility must be non-negative, got {sigma}");
        Self { x0, mu, sigma }
    }
}

impl StochasticProcess1D for GeometricBrownianMotionProcess {
    fn x0(&self) -> Real {
        self.x0
    }

    fn drift_1d(&self, _t: Time, x: Real) -> Real {
        self.mu * x
    }

    fn diffusion_1d(&self, _t: Time, x: Real) -> Real {
        self.sigma * x
    }
}
