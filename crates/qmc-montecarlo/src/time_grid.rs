//! Time discretization of the simulation horizon.

use qmc_core::{
    errors::{Error, Result},
    Size, Time,
};
use std::ops::Index;

/// An ordered, strictly increasing sequence of simulation instants.
///
/// Immutable once built. Components that share a grid (generator, paths)
/// hold it behind an `Arc`. A grid may consist of a single instant;
/// simulating over it requires at least two, which the generator checks
/// at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    times: Vec<Time>,
}

impl TimeGrid {
    /// Build a grid from explicit instants.
    ///
    /// Fails with [`Error::Configuration`] if `times` is empty or not
    /// strictly increasing.
    pub fn from_times(times: &[Time]) -> Result<Self> {
        if times.is_empty() {
            return Err(Error::Configuration("no times given".into()));
        }
        for w in times.windows(2) {
            if w[1] <= w[0] {
                return Err(Error::Configuration(format!(
                    "times must be strictly increasing: {} follows {}",
                    w[1], w[0]
                )));
            }
        }
        Ok(Self {
            times: times.to_vec(),
        })
    }

    /// Build a regular grid of `steps` equal intervals on `[0, end]`.
    pub fn regular(end: Time, steps: Size) -> Result<Self> {
        if end <= 0.0 {
            return Err(Error::Configuration(format!(
                "horizon must be positive, got {end}"
            )));
        }
        if steps == 0 {
            return Err(Error::Configuration("at least one step is required".into()));
        }
        let dt = end / steps as Time;
        let times = (0..=steps).map(|i| i as Time * dt).collect();
        Ok(Self { times })
    }

    /// Number of instants (including t₀).
    pub fn len(&self) -> Size {
        self.times.len()
    }

    /// Whether the grid is empty (never true for a constructed grid).
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// The instants as a slice.
    pub fn times(&self) -> &[Time] {
        &self.times
    }

    /// Duration of the `i`-th step, `t_{i+1} − t_i`.
    pub fn dt(&self, i: Size) -> Time {
        self.times[i + 1] - self.times[i]
    }

    /// The first instant.
    pub fn first(&self) -> Time {
        self.times[0]
    }

    /// The last instant.
    pub fn last(&self) -> Time {
        self.times[self.times.len() - 1]
    }
}

impl Index<Size> for TimeGrid {
    type Output = Time;
    fn index(&self, i: Size) -> &Time {
        &self.times[i]
    }
}
