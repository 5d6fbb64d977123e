//! Correlated aggregate of independent 1-D processes.

use std::sync::Arc;

use qmc_core::{
    errors::{Error, Result},
    Size, Time,
};
use qmc_math::{close, pseudo_sqrt, Array, Matrix};

use crate::stochastic_process::{StochasticProcess, StochasticProcess1D};

/// A multi-factor process assembled from independent 1-D processes plus a
/// correlation matrix.
///
/// The correlation matrix is factorized once, at construction, into a
/// mixing matrix L with `L·Lᵗ ≈ correlation`; every incoming draw vector
/// is premultiplied by L, which turns independent noise into noise with
/// the requested correlation structure. Each factor then follows its own
/// 1-D dynamics.
#[derive(Debug)]
pub struct StochasticProcessArray {
    processes: Vec<Arc<dyn StochasticProcess1D>>,
    sqrt_correlation: Matrix,
}

impl StochasticProcessArray {
    /// Build the aggregate from `processes` and their `correlation`.
    ///
    /// Fails with [`Error::Configuration`] if no process is given, if the
    /// matrix is not square of matching order, or if its diagonal is not
    /// unit.
    pub fn new(
        processes: Vec<Arc<dyn StochasticProcess1D>>,
        correlation: &Matrix,
    ) -> Result<Self> {
        let n = processes.len();
        if n == 0 {
            return Err(Error::Configuration(
                "at least one process is required".into(),
            ));
        }
        if correlation.rows() != n || correlation.cols() != n {
            return Err(Error::Configuration(format!(
                "correlation matrix is {}x{}, expected {n}x{n}",
                correlation.rows(),
                correlation.cols()
            )));
        }
        for i in 0..n {
            if !close(correlation[(i, i)], 1.0, 1e-12) {
                return Err(Error::Configuration(format!(
                    "correlation matrix diagonal element ({i},{i}) is {}, expected 1",
                    correlation[(i, i)]
                )));
            }
        }

        let sqrt_correlation = pseudo_sqrt(correlation)?;
        Ok(Self {
            processes,
            sqrt_correlation,
        })
    }

    /// The `i`-th component process.
    pub fn process(&self, i: Size) -> &Arc<dyn StochasticProcess1D> {
        &self.processes[i]
    }

    /// The mixing matrix L obtained from the correlation factorization.
    pub fn sqrt_correlation(&self) -> &Matrix {
        &self.sqrt_correlation
    }
}

impl StochasticProcess for StochasticProcessArray {
    fn size(&self) -> Size {
        self.processes.len()
    }

    fn initial_values(&self) -> Array {
        Array::from_vec(self.processes.iter().map(|p| p.x0()).collect())
    }

    fn drift(&self, t: Time, x: &Array) -> Array {
        Array::from_vec(
            self.processes
                .iter()
                .enumerate()
                .map(|(i, p)| p.drift_1d(t, x[i]))
                .collect(),
        )
    }

    fn std_deviation(&self, t: Time, x: &Array, dt: Time) -> Array {
        Array::from_vec(
            self.processes
                .iter()
                .enumerate()
                .map(|(i, p)| p.std_deviation_1d(t, x[i], dt))
                .collect(),
        )
    }

    fn apply(&self, x: &Array, dx: &Array) -> Array {
        Array::from_vec(
            self.processes
                .iter()
                .enumerate()
                .map(|(i, p)| p.apply_1d(x[i], dx[i]))
                .collect(),
        )
    }

    fn correlate(&self, dw: &Array) -> Array {
        self.sqrt_correlation.mul_vec(dw)
    }

    fn evolve(&self, t: Time, x: &Array, dt: Time, dw: &Array) -> Array {
        let dz = self.correlate(dw);
        Array::from_vec(
            self.processes
                .iter()
                .enumerate()
                .map(|(i, p)| p.evolve_1d(t, x[i], dt, dz[i]))
                .collect(),
        )
    }
}
