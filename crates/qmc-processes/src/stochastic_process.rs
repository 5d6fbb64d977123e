//! Base traits for stochastic processes.
//!
//! A process `dX = μ(t,X) dt + σ(t,X) dW` is described to the path
//! generator either in decomposed form (drift, per-factor diffusion
//! scaling, and an aggregation rule) or in fused form (a one-step
//! `evolve` transition that may use an exact, non-Euler scheme).

use qmc_core::{Real, Size, Time};
use qmc_math::Array;

/// A multi-dimensional stochastic process of `size()` correlated factors.
pub trait StochasticProcess: std::fmt::Debug + Send + Sync {
    /// Number of factors.
    fn size(&self) -> Size;

    /// Initial state vector (length `size()`).
    fn initial_values(&self) -> Array;

    /// Drift vector `μ(t, x)`.
    fn drift(&self, t: Time, x: &Array) -> Array;

    /// Per-factor diffusion scaling over a step of length `dt`,
    /// typically `σ(t, x) · √dt`.
    fn std_deviation(&self, t: Time, x: &Array, dt: Time) -> Array;

    /// Aggregation rule combining a state with an increment: additive for
    /// arithmetic processes, log-additive for geometric ones. Entirely
    /// the process's business; callers never assume a particular rule.
    fn apply(&self, x: &Array, dx: &Array) -> Array;

    /// Transform a vector of independent draws into the process's driving
    /// noise. Identity for atomic processes; correlated composites
    /// premultiply by their mixing matrix.
    fn correlate(&self, dw: &Array) -> Array {
        dw.clone()
    }

    /// Fused one-step transition from `x` at `t` over `dt`, driven by the
    /// independent draws `dw`.
    ///
    /// The default composes the decomposed primitives into an Euler step;
    /// processes with a known transition law override it.
    fn evolve(&self, t: Time, x: &Array, dt: Time, dw: &Array) -> Array {
        let drift = &self.drift(t, x) * dt;
        let diffusion = self
            .std_deviation(t, x, dt)
            .component_mul(&self.correlate(dw));
        self.apply(x, &(&drift + &diffusion))
    }
}

/// A 1-dimensional stochastic process `dX = μ(t,X) dt + σ(t,X) dW`,
/// described through scalar primitives.
pub trait StochasticProcess1D: std::fmt::Debug + Send + Sync {
    /// Initial value of the process.
    fn x0(&self) -> Real;

    /// Drift `μ(t, x)`.
    fn drift_1d(&self, t: Time, x: Real) -> Real;

    /// Diffusion coefficient `σ(t, x)`.
    fn diffusion_1d(&self, t: Time, x: Real) -> Real;

    /// Aggregation rule; additive unless overridden.
    fn apply_1d(&self, x: Real, dx: Real) -> Real {
        x + dx
    }

    /// Expected value `E[x(t+dt) | x(t) = x]`; first-order Euler unless
    /// the process knows its conditional mean exactly.
    fn expectation_1d(&self, t: Time, x: Real, dt: Time) -> Real {
        self.apply_1d(x, self.drift_1d(t, x) * dt)
    }

    /// Standard deviation over `dt`; `σ(t,x) · √dt` unless the process
    /// knows its conditional variance exactly.
    fn std_deviation_1d(&self, t: Time, x: Real, dt: Time) -> Real {
        self.diffusion_1d(t, x) * dt.sqrt()
    }

    /// One-step transition: `apply(E[x(t+dt)], std · dw)`.
    fn evolve_1d(&self, t: Time, x: Real, dt: Time, dw: Real) -> Real {
        self.apply_1d(
            self.expectation_1d(t, x, dt),
            self.std_deviation_1d(t, x, dt) * dw,
        )
    }
}

/// Any 1-D process is also a 1-factor multi-dimensional process.
impl<T: StochasticProcess1D> StochasticProcess for T {
    fn size(&self) -> Size {
        1
    }

    fn initial_values(&self) -> Array {
        Array::from_vec(vec![self.x0()])
    }

    fn drift(&self, t: Time, x: &Array) -> Array {
        Array::from_vec(vec![self.drift_1d(t, x[0])])
    }

    fn std_deviation(&self, t: Time, x: &Array, dt: Time) -> Array {
        Array::from_vec(vec![self.std_deviation_1d(t, x[0], dt)])
    }

    fn apply(&self, x: &Array, dx: &Array) -> Array {
        Array::from_vec(vec![self.apply_1d(x[0], dx[0])])
    }

    fn evolve(&self, t: Time, x: &Array, dt: Time, dw: &Array) -> Array {
        Array::from_vec(vec![self.evolve_1d(t, x[0], dt, dw[0])])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// dX = μ dt + σ dW with constant coefficients.
    #[derive(Debug)]
    struct ConstantProcess {
        x0: Real,
        mu: Real,
        sigma: Real,
    }

    impl StochasticProcess1D for ConstantProcess {
        fn x0(&self) -> Real {
            self.x0
        }

        fn drift_1d(&self, _t: Time, _x: Real) -> Real {
            self.mu
        }

        fn diffusion_1d(&self, _t: Time, _x: Real) -> Real {
            self.sigma
        }
    }

    fn process() -> ConstantProcess {
        ConstantProcess {
            x0: 100.0,
            mu: 0.05,
            sigma: 0.20,
        }
    }

    #[test]
    fn lifted_process_has_one_factor() {
        let p = process();
        assert_eq!(StochasticProcess::size(&p), 1);
        let iv = p.initial_values();
        assert_eq!(iv.len(), 1);
        assert_abs_diff_eq!(iv[0], 100.0, epsilon = 1e-15);
    }

    #[test]
    fn default_euler_step() {
        let p = process();
        // 100 + 0.05·1 + 0.20·√1·1 = 100.25
        assert_abs_diff_eq!(p.evolve_1d(0.0, 100.0, 1.0, 1.0), 100.25, epsilon = 1e-12);
    }

    #[test]
    fn default_correlate_is_identity() {
        let p = process();
        let dw = Array::from_slice(&[0.7]);
        assert_eq!(p.correlate(&dw), dw);
    }

    #[test]
    fn vector_evolve_matches_scalar() {
        let p = process();
        let x = Array::from_slice(&[100.0]);
        let dw = Array::from_slice(&[-0.4]);
        let stepped = StochasticProcess::evolve(&p, 0.0, &x, 0.25, &dw);
        assert_abs_diff_eq!(
            stepped[0],
            p.evolve_1d(0.0, 100.0, 0.25, -0.4),
            epsilon = 1e-12
        );
    }
}
