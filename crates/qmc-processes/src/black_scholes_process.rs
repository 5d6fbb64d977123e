//! Constant-coefficient Black-Scholes process in log space.
//!
//! ```text
//! d(ln S) = (r − q − σ²/2) dt + σ dW
//! ```
//!
//! Drift and diffusion are stated for the logarithm of the asset price,
//! and the aggregation rule is log-additive: increments multiply the
//! state through `x·exp(dx)`. With the default stepping this yields the
//! exact lognormal transition, not an Euler approximation.

use crate::stochastic_process::StochasticProcess1D;
use qmc_core::{Rate, Real, Time, Volatility};

/// Black-Scholes dynamics with flat risk-free rate, dividend yield, and
/// volatility.
#[derive(Debug, Clone)]
pub struct BlackScholesProcess {
    x0: Real,
    risk_free_rate: Rate,
    dividend_yield: Rate,
    volatility: Volatility,
}

impl BlackScholesProcess {
    /// Create a new process.
    ///
    /// # Panics
    /// Panics if `x0` is not positive or `volatility` is negative.
    pub fn new(x0: Real, risk_free_rate: Rate, dividend_yield: Rate, volatility: Volatility) -> Self {
        assert!(x0 > 0.0, "initial value must be positive, got {x0}");
        assert!(
            volatility >= 0.0,
            "volatility must be non-negative, got {volatility}"
        );
        Self {
            x0,
            risk_free_rate,
            dividend_yield,
            volatility,
        }
    }
}

impl StochasticProcess1D for BlackScholesProcess {
    fn x0(&self) -> Real {
        self.x0
    }

    fn drift_1d(&self, _t: Time, _x: Real) -> Real {
        self.risk_free_rate - self.dividend_yield - 0.5 * self.volatility * self.volatility
    }

    fn diffusion_1d(&self, _t: Time, _x: Real) -> Real {
        self.volatility
    }

    // log-additive aggregation
    fn apply_1d(&self, x: Real, dx: Real) -> Real {
        x * dx.exp()
    }
}
