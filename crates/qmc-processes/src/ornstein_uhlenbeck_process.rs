//! Ornstein-Uhlenbeck mean-reverting process.
//!
//! ```text
//! dX = a(b − X) dt + σ dW
//! ```
//!
//! The conditional mean and variance are known in closed form, so
//! `expectation_1d` and `std_deviation_1d` are overridden with the exact
//! expressions rather than their Euler defaults.

use crate::stochastic_process::StochasticProcess1D;
use qmc_core::{Real, Time};

/// An Ornstein-Uhlenbeck process: `dX = speed·(level − X) dt + σ dW`.
#[derive(Debug, Clone)]
pub struct OrnsteinUhlenbeckProcess {
    speed: Real,
    volatility: Real,
    x0: Real,
    level: Real,
}

impl OrnsteinUhlenbeckProcess {
    /// Create a new process.
    ///
    /// # Panics
    /// Panics if `speed` or `volatility` is negative.
    pub fn new(speed: Real, volatility: Real, x0: Real, level: Real) -> Self {
        assert!(speed >= 0.0, "mean-reversion speed must be non-negative, got {speed}");
        assert!(
            volatility >= 0.0,
            "volatility must be non-negative, got {volatility}"
        );
        Self {
            speed,
            volatility,
            x0,
            level,
        }
    }
}

impl StochasticProcess1D for OrnsteinUhlenbeckProcess {
    fn x0(&self) -> Real {
        self.x0
    }

    fn drift_1d(&self, _t: Time, x: Real) -> Real {
        self.speed * (self.level - x)
    }

    fn diffusion_1d(&self, _t: Time, _x: Real) -> Real {
        self.volatility
    }

    fn expectation_1d(&self, _t: Time, x: Real, dt: Time) -> Real {
        self.level + (x - self.level) * (-self.speed * dt).exp()
    }

    fn std_deviation_1d(&self, _t: Time, _x: Real, dt: Time) -> Real {
        if self.speed < 1e-15 {
            // No mean reversion: plain Brownian motion.
            return self.volatility * dt.sqrt();
        }
        self.volatility * ((1.0 - (-2.0 * self.speed * dt).exp()) / (2.0 * self.speed)).sqrt()
    }
}
