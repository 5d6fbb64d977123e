//! A single factor's simulated trajectory.

use crate::time_grid::TimeGrid;
use qmc_core::{Real, Size};
use std::ops::Index;
use std::sync::Arc;

/// One factor's value at every grid instant, optionally carrying the
/// per-step drift and diffusion contributions that produced it.
///
/// The diagnostics are recorded only by the decomposed generation scheme;
/// downstream control-variate or sensitivity logic reads them through
/// [`drift`](Path::drift) and [`diffusion`](Path::diffusion). Their length
/// is one less than the value count, aligned to time steps.
#[derive(Debug, Clone)]
pub struct Path {
    time_grid: Arc<TimeGrid>,
    pub(crate) values: Vec<Real>,
    pub(crate) drift: Option<Vec<Real>>,
    pub(crate) diffusion: Option<Vec<Real>>,
}

impl Path {
    /// Create a zeroed path over `time_grid`, with or without per-step
    /// diagnostic arrays.
    pub fn new(time_grid: Arc<TimeGrid>, with_diagnostics: bool) -> Self {
        let m = time_grid.len();
        let steps = m.saturating_sub(1);
        let (drift, diffusion) = if with_diagnostics {
            (Some(vec![0.0; steps]), Some(vec![0.0; steps]))
        } else {
            (None, None)
        };
        Self {
            time_grid,
            values: vec![0.0; m],
            drift,
            diffusion,
        }
    }

    /// Number of points, one per grid instant.
    pub fn len(&self) -> Size {
        self.values.len()
    }

    /// Whether the path holds no points.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The grid this path is defined on.
    pub fn time_grid(&self) -> &Arc<TimeGrid> {
        &self.time_grid
    }

    /// All values, one per grid instant.
    pub fn values(&self) -> &[Real] {
        &self.values
    }

    /// The initial value.
    pub fn front(&self) -> Real {
        self.values[0]
    }

    /// The final value.
    pub fn back(&self) -> Real {
        self.values[self.values.len() - 1]
    }

    /// Per-step drift contributions, if recorded.
    pub fn drift(&self) -> Option<&[Real]> {
        self.drift.as_deref()
    }

    /// Per-step diffusion contributions, if recorded.
    pub fn diffusion(&self) -> Option<&[Real]> {
        self.diffusion.as_deref()
    }
}

impl Index<Size> for Path {
    type Output = Real;
    fn index(&self, i: Size) -> &Real {
        &self.values[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Arc<TimeGrid> {
        Arc::new(TimeGrid::from_times(&[0.0, 0.5, 1.0]).unwrap())
    }

    #[test]
    fn path_spans_the_grid() {
        let p = Path::new(grid(), false);
        assert_eq!(p.len(), 3);
        assert!(p.drift().is_none());
        assert!(p.diffusion().is_none());
    }

    #[test]
    fn diagnostics_align_to_steps() {
        let p = Path::new(grid(), true);
        assert_eq!(p.drift().unwrap().len(), 2);
        assert_eq!(p.diffusion().unwrap().len(), 2);
    }
}
