//! All factors' trajectories for one simulation.

use crate::path::Path;
use crate::time_grid::TimeGrid;
use qmc_core::Size;
use std::ops::Index;
use std::sync::Arc;

/// A fixed-size collection of [`Path`]s, one per factor, all sharing one
/// [`TimeGrid`].
///
/// Invariant: every contained path has exactly `time_grid().len()`
/// points.
#[derive(Debug, Clone)]
pub struct MultiPath {
    time_grid: Arc<TimeGrid>,
    pub(crate) paths: Vec<Path>,
}

impl MultiPath {
    /// Create `asset_count` zeroed paths over `time_grid`.
    pub fn new(asset_count: Size, time_grid: Arc<TimeGrid>, with_diagnostics: bool) -> Self {
        let paths = (0..asset_count)
            .map(|_| Path::new(time_grid.clone(), with_diagnostics))
            .collect();
        Self { time_grid, paths }
    }

    /// Number of factors.
    pub fn asset_count(&self) -> Size {
        self.paths.len()
    }

    /// Number of points in every contained path.
    pub fn path_len(&self) -> Size {
        self.time_grid.len()
    }

    /// The shared grid.
    pub fn time_grid(&self) -> &Arc<TimeGrid> {
        &self.time_grid
    }

    /// Iterate over the contained paths.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter()
    }
}

impl Index<Size> for MultiPath {
    type Output = Path;
    fn index(&self, j: Size) -> &Path {
        &self.paths[j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_path_spans_the_grid() {
        let grid = Arc::new(TimeGrid::regular(1.0, 4).unwrap());
        let mp = MultiPath::new(3, grid, false);
        assert_eq!(mp.asset_count(), 3);
        for path in mp.iter() {
            assert_eq!(path.len(), mp.path_len());
        }
    }
}
