//! Black-Scholes-Merton valuation of a single-asset European option.

use qmc_core::{
    errors::Result,
    Rate, Real, Time, Volatility,
};
use qmc_math::solvers1d::brent;
use qmc_math::{normal_cdf, normal_pdf};

/// Lower bracket of the implied-volatility search.
pub const MIN_VOLATILITY: Volatility = 1.0e-4;

/// Upper bracket of the implied-volatility search.
pub const MAX_VOLATILITY: Volatility = 4.0;

/// Plain-vanilla exercise styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
    /// A call and a put at the same strike.
    Straddle,
}

/// Payoff at exercise for a given underlying price and strike.
pub fn exercise_payoff(option_type: OptionType, price: Real, strike: Real) -> Real {
    match option_type {
        OptionType::Call => (price - strike).max(0.0),
        OptionType::Put => (strike - price).max(0.0),
        OptionType::Straddle => (price - strike).abs(),
    }
}

/// A European option under constant-coefficient Black-Scholes-Merton
/// dynamics, valued in closed form.
///
/// The volatility and rate setters exist so that calibration loops (the
/// implied-volatility search in particular) can re-price a mutated copy
/// without rebuilding the option.
#[derive(Debug, Clone)]
pub struct EuropeanOption {
    option_type: OptionType,
    underlying: Real,
    strike: Real,
    dividend_yield: Rate,
    risk_free_rate: Rate,
    residual_time: Time,
    volatility: Volatility,
}

impl EuropeanOption {
    /// Create a new option.
    ///
    /// # Panics
    /// Panics if `underlying`, `strike`, `residual_time`, or `volatility`
    /// is not positive.
    pub fn new(
        option_type: OptionType,
        underlying: Real,
        strike: Real,
        dividend_yield: Rate,
        risk_free_rate: Rate,
        residual_time: Time,
        volatility: Volatility,
    ) -> Self {
        assert!(underlying > 0.0, "underlying must be positive, got {underlying}");
        assert!(strike > 0.0, "strike must be positive, got {strike}");
        assert!(
            residual_time > 0.0,
            "residual time must be positive, got {residual_time}"
        );
        assert!(volatility > 0.0, "volatility must be positive, got {volatility}");
        Self {
            option_type,
            underlying,
            strike,
            dividend_yield,
            risk_free_rate,
            residual_time,
            volatility,
        }
    }

    /// Replace the volatility.
    pub fn set_volatility(&mut self, volatility: Volatility) {
        assert!(volatility > 0.0, "volatility must be positive, got {volatility}");
        self.volatility = volatility;
    }

    /// Replace the risk-free rate.
    pub fn set_risk_free_rate(&mut self, rate: Rate) {
        self.risk_free_rate = rate;
    }

    /// Replace the dividend yield.
    pub fn set_dividend_yield(&mut self, yield_: Rate) {
        self.dividend_yield = yield_;
    }

    fn d1(&self) -> Real {
        let sigma_sqrt_t = self.volatility * self.residual_time.sqrt();
        ((self.underlying / self.strike).ln()
            + (self.risk_free_rate - self.dividend_yield
                + 0.5 * self.volatility * self.volatility)
                * self.residual_time)
            / sigma_sqrt_t
    }

    fn d2(&self) -> Real {
        self.d1() - self.volatility * self.residual_time.sqrt()
    }

    fn growth_discount(&self) -> Real {
        (-self.dividend_yield * self.residual_time).exp()
    }

    fn rate_discount(&self) -> Real {
        (-self.risk_free_rate * self.residual_time).exp()
    }

    fn call_value(&self) -> Real {
        self.underlying * self.growth_discount() * normal_cdf(self.d1())
            - self.strike * self.rate_discount() * normal_cdf(self.d2())
    }

    fn put_value(&self) -> Real {
        self.strike * self.rate_discount() * normal_cdf(-self.d2())
            - self.underlying * self.growth_discount() * normal_cdf(-self.d1())
    }

    /// Present value.
    pub fn value(&self) -> Real {
        match self.option_type {
            OptionType::Call => self.call_value(),
            OptionType::Put => self.put_value(),
            OptionType::Straddle => self.call_value() + self.put_value(),
        }
    }

    /// Sensitivity to the underlying price.
    pub fn delta(&self) -> Real {
        let n_d1 = normal_cdf(self.d1());
        let g = self.growth_discount();
        match self.option_type {
            OptionType::Call => g * n_d1,
            OptionType::Put => g * (n_d1 - 1.0),
            OptionType::Straddle => g * (2.0 * n_d1 - 1.0),
        }
    }

    /// Second-order sensitivity to the underlying price.
    pub fn gamma(&self) -> Real {
        let single = self.growth_discount() * normal_pdf(self.d1())
            / (self.underlying * self.volatility * self.residual_time.sqrt());
        match self.option_type {
            OptionType::Straddle => 2.0 * single,
            _ => single,
        }
    }

    /// Sensitivity to the passage of time (per year, decreasing
    /// residual time).
    pub fn theta(&self) -> Real {
        let sqrt_t = self.residual_time.sqrt();
        let decay = -self.underlying * self.growth_discount() * normal_pdf(self.d1())
            * self.volatility
            / (2.0 * sqrt_t);
        let call_carry = self.dividend_yield
            * self.underlying
            * self.growth_discount()
            * normal_cdf(self.d1())
            - self.risk_free_rate * self.strike * self.rate_discount() * normal_cdf(self.d2());
        let put_carry = -self.dividend_yield
            * self.underlying
            * self.growth_discount()
            * normal_cdf(-self.d1())
            + self.risk_free_rate * self.strike * self.rate_discount() * normal_cdf(-self.d2());
        match self.option_type {
            OptionType::Call => decay + call_carry,
            OptionType::Put => decay + put_carry,
            OptionType::Straddle => 2.0 * decay + call_carry + put_carry,
        }
    }

    /// Sensitivity to the volatility.
    pub fn vega(&self) -> Real {
        let single = self.underlying
            * self.growth_discount()
            * normal_pdf(self.d1())
            * self.residual_time.sqrt();
        match self.option_type {
            OptionType::Straddle => 2.0 * single,
            _ => single,
        }
    }

    /// Sensitivity to the risk-free rate.
    pub fn rho(&self) -> Real {
        let k_t_df = self.strike * self.residual_time * self.rate_discount();
        match self.option_type {
            OptionType::Call => k_t_df * normal_cdf(self.d2()),
            OptionType::Put => -k_t_df * normal_cdf(-self.d2()),
            OptionType::Straddle => k_t_df * (normal_cdf(self.d2()) - normal_cdf(-self.d2())),
        }
    }

    /// Sensitivity to the dividend yield.
    pub fn dividend_rho(&self) -> Real {
        let s_t_g = self.underlying * self.residual_time * self.growth_discount();
        match self.option_type {
            OptionType::Call => -s_t_g * normal_cdf(self.d1()),
            OptionType::Put => s_t_g * normal_cdf(-self.d1()),
            OptionType::Straddle => s_t_g * (normal_cdf(-self.d1()) - normal_cdf(self.d1())),
        }
    }

    /// Volatility at which this option would be worth `target_value`.
    ///
    /// Wraps a clone of the option in the scalar objective
    /// `vol ↦ value(vol) − target_value` and hands it to the Brent solver
    /// bracketed on [[`MIN_VOLATILITY`], [`MAX_VOLATILITY`]]. Fails if the
    /// target is unattainable inside the bracket or the solver runs out
    /// of evaluations.
    pub fn implied_volatility(
        &self,
        target_value: Real,
        accuracy: Real,
        max_evaluations: u32,
    ) -> Result<Volatility> {
        let objective = |vol: Volatility| {
            let mut option = self.clone();
            option.set_volatility(vol);
            option.value() - target_value
        };
        brent(objective, MIN_VOLATILITY, MAX_VOLATILITY, accuracy, max_evaluations)
    }
}
