//! The multi-asset path generator.
//!
//! Couples a [`StochasticProcess`], a [`TimeGrid`], and a
//! [`SequenceGenerator`] into a source of weighted [`MultiPath`] samples,
//! one per call. Antithetic sampling reuses the source's last draw with
//! every component sign-negated.

use std::sync::Arc;

use qmc_core::{
    errors::{Error, Result},
    Sample, Size,
};
use qmc_math::{random_numbers::SequenceGenerator, Array, Matrix};
use qmc_processes::{StochasticProcess, StochasticProcess1D, StochasticProcessArray};

use crate::multi_path::MultiPath;
use crate::time_grid::TimeGrid;

/// Strategy used to advance the paths through the time grid.
///
/// Chosen once at construction; the two schemes deliberately keep their
/// distinct step-indexing conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationScheme {
    /// Drift and diffusion are computed separately at every step through
    /// `drift`, `std_deviation`, and `apply`, and recorded into the
    /// paths' diagnostic arrays. Advances from grid index 0.
    Decomposed,
    /// Each step is a single `evolve` transition owned by the process,
    /// which may use an exact, non-Euler scheme. Grid index 0 is seeded
    /// from the initial state; no per-step diagnostics are kept.
    Fused,
}

/// Generates multi-factor paths from a random-sequence source.
///
/// The generator owns one output buffer, sized at construction and
/// overwritten in place on every call; [`next`](Self::next) and
/// [`antithetic`](Self::antithetic) return a reference into it that is
/// valid until the following call. Callers that need to retain a sample
/// must clone it first. A single instance is strictly sequential: the
/// k-th `antithetic()` pairs with the k-th `next()`'s draw, and calling
/// `antithetic()` without a preceding `next()` yields a stale,
/// unspecified result — the pairing discipline is the caller's.
pub struct MultiPathGenerator<G: SequenceGenerator> {
    process: Arc<dyn StochasticProcess>,
    time_grid: Arc<TimeGrid>,
    generator: G,
    scheme: GenerationScheme,
    brownian_bridge: bool,
    next: Sample<MultiPath>,
}

impl<G: SequenceGenerator> MultiPathGenerator<G> {
    /// Create a generator for `process` over `time_grid`, drawing from
    /// `generator`.
    ///
    /// Fails with [`Error::Configuration`] if the grid has fewer than two
    /// instants, or if the source's dimension does not equal
    /// `process.size() * (time_grid.len() - 1)`. The `brownian_bridge`
    /// flag is accepted here but unsupported: generation calls on a
    /// bridged generator fail with [`Error::UnsupportedFeature`].
    pub fn new(
        process: Arc<dyn StochasticProcess>,
        time_grid: Arc<TimeGrid>,
        generator: G,
        scheme: GenerationScheme,
        brownian_bridge: bool,
    ) -> Result<Self> {
        if time_grid.len() <= 1 {
            return Err(Error::Configuration(
                "time grid must contain at least two instants".into(),
            ));
        }
        let factors = process.size();
        let steps = time_grid.len() - 1;
        if generator.dimension() != factors * steps {
            return Err(Error::Configuration(format!(
                "sequence dimension ({}) is not equal to the number of factors ({factors}) \
                 times the number of time steps ({steps})",
                generator.dimension()
            )));
        }

        let with_diagnostics = scheme == GenerationScheme::Decomposed;
        let next = Sample::new(
            MultiPath::new(factors, time_grid.clone(), with_diagnostics),
            1.0,
        );
        Ok(Self {
            process,
            time_grid,
            generator,
            scheme,
            brownian_bridge,
            next,
        })
    }

    /// Create a generator for independent 1-D processes tied together by
    /// a correlation matrix; the matrix is factorized once, here.
    pub fn with_correlation(
        processes: Vec<Arc<dyn StochasticProcess1D>>,
        correlation: &Matrix,
        time_grid: Arc<TimeGrid>,
        generator: G,
        scheme: GenerationScheme,
        brownian_bridge: bool,
    ) -> Result<Self> {
        let process = Arc::new(StochasticProcessArray::new(processes, correlation)?);
        Self::new(process, time_grid, generator, scheme, brownian_bridge)
    }

    /// Generate a path sample from a fresh draw.
    pub fn next(&mut self) -> Result<&Sample<MultiPath>> {
        self.generate(false)
    }

    /// Generate the antithetic companion of the previous draw: the same
    /// sequence with every component sign-negated.
    pub fn antithetic(&mut self) -> Result<&Sample<MultiPath>> {
        self.generate(true)
    }

    fn generate(&mut self, antithetic: bool) -> Result<&Sample<MultiPath>> {
        if self.brownian_bridge {
            return Err(Error::UnsupportedFeature(
                "Brownian-bridge path generation is not implemented".into(),
            ));
        }

        let sequence = if antithetic {
            self.generator.last_sequence()
        } else {
            self.generator.next_sequence()
        };

        let factors = self.process.size();
        let points = self.time_grid.len();
        self.next.weight = sequence.weight;

        let mut asset = self.process.initial_values();
        for j in 0..factors {
            self.next.value.paths[j].values[0] = asset[j];
        }

        let mut draw = Array::zeros(factors);
        match self.scheme {
            GenerationScheme::Decomposed => {
                for i in 0..points - 1 {
                    let t = self.time_grid[i];
                    let dt = self.time_grid.dt(i);
                    let offset = i * factors;

                    for j in 0..factors {
                        let z = sequence.value[offset + j];
                        draw[j] = if antithetic { -z } else { z };
                    }
                    let dz = self.process.correlate(&draw);
                    let drift = &self.process.drift(t, &asset) * dt;
                    let scale = self.process.std_deviation(t, &asset, dt);

                    let mut change = Array::zeros(factors);
                    for j in 0..factors {
                        let diffusion = scale[j] * dz[j];
                        let path = &mut self.next.value.paths[j];
                        if let Some(d) = path.drift.as_mut() {
                            d[i] = drift[j];
                        }
                        if let Some(d) = path.diffusion.as_mut() {
                            d[i] = diffusion;
                        }
                        change[j] = drift[j] + diffusion;
                    }

                    asset = self.process.apply(&asset, &change);
                    for j in 0..factors {
                        self.next.value.paths[j].values[i + 1] = asset[j];
                    }
                }
            }
            GenerationScheme::Fused => {
                for i in 1..points {
                    let t = self.time_grid[i - 1];
                    let dt = self.time_grid.dt(i - 1);
                    let offset = (i - 1) * factors;

                    for j in 0..factors {
                        let z = sequence.value[offset + j];
                        draw[j] = if antithetic { -z } else { z };
                    }

                    asset = self.process.evolve(t, &asset, dt, &draw);
                    for j in 0..factors {
                        self.next.value.paths[j].values[i] = asset[j];
                    }
                }
            }
        }

        Ok(&self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use qmc_core::Real;
    use qmc_math::random_numbers::MtGaussianSequenceGenerator;
    use qmc_processes::{BlackScholesProcess, GeometricBrownianMotionProcess};

    /// A source that replays one fixed sequence forever.
    struct FixedSequenceGenerator {
        sequence: Sample<Array>,
    }

    impl FixedSequenceGenerator {
        fn new(values: &[Real], weight: Real) -> Self {
            Self {
                sequence: Sample::new(Array::from_slice(values), weight),
            }
        }
    }

    impl SequenceGenerator for FixedSequenceGenerator {
        fn dimension(&self) -> Size {
            self.sequence.value.len()
        }

        fn next_sequence(&mut self) -> &Sample<Array> {
            &self.sequence
        }

        fn last_sequence(&self) -> &Sample<Array> {
            &self.sequence
        }
    }

    /// Arithmetic Brownian motion with constant coefficients and additive
    /// aggregation.
    #[derive(Debug)]
    struct ArithmeticProcess {
        x0: Real,
        mu: Real,
        sigma: Real,
    }

    impl StochasticProcess1D for ArithmeticProcess {
        fn x0(&self) -> Real {
            self.x0
        }

        fn drift_1d(&self, _t: f64, _x: Real) -> Real {
            self.mu
        }

        fn diffusion_1d(&self, _t: f64, _x: Real) -> Real {
            self.sigma
        }
    }

    fn three_instant_grid() -> Arc<TimeGrid> {
        Arc::new(TimeGrid::from_times(&[0.0, 0.5, 1.0]).unwrap())
    }

    #[test]
    fn dimension_mismatch_fails_construction() {
        let process = Arc::new(ArithmeticProcess { x0: 0.0, mu: 0.0, sigma: 0.2 });
        // Two steps, one factor: dimension must be 2, not 3.
        let source = FixedSequenceGenerator::new(&[0.1, 0.2, 0.3], 1.0);
        let result = MultiPathGenerator::new(
            process,
            three_instant_grid(),
            source,
            GenerationScheme::Decomposed,
            false,
        );
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn single_instant_grid_fails_construction() {
        let process = Arc::new(ArithmeticProcess { x0: 0.0, mu: 0.0, sigma: 0.2 });
        let grid = Arc::new(TimeGrid::from_times(&[0.0]).unwrap());
        let source = FixedSequenceGenerator::new(&[0.1], 1.0);
        let result =
            MultiPathGenerator::new(process, grid, source, GenerationScheme::Fused, false);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn brownian_bridge_fails_at_first_generation() {
        let process = Arc::new(ArithmeticProcess { x0: 0.0, mu: 0.0, sigma: 0.2 });
        let source = FixedSequenceGenerator::new(&[1.0, -1.0], 1.0);
        let mut generator = MultiPathGenerator::new(
            process,
            three_instant_grid(),
            source,
            GenerationScheme::Decomposed,
            true,
        )
        .unwrap();
        assert!(matches!(
            generator.next(),
            Err(Error::UnsupportedFeature(_))
        ));
        assert!(matches!(
            generator.antithetic(),
            Err(Error::UnsupportedFeature(_))
        ));
    }

    #[test]
    fn antithetic_negates_diffusion_and_keeps_drift() {
        let process = Arc::new(ArithmeticProcess {
            x0: 100.0,
            mu: 0.05,
            sigma: 0.2,
        });
        let source = MtGaussianSequenceGenerator::from_seed(2, 42).unwrap();
        let mut generator = MultiPathGenerator::new(
            process,
            three_instant_grid(),
            source,
            GenerationScheme::Decomposed,
            false,
        )
        .unwrap();

        let straight = generator.next().unwrap().clone();
        let mirrored = generator.antithetic().unwrap();

        let drift_a = straight.value[0].drift().unwrap();
        let drift_b = mirrored.value[0].drift().unwrap();
        let diff_a = straight.value[0].diffusion().unwrap();
        let diff_b = mirrored.value[0].diffusion().unwrap();
        for i in 0..2 {
            assert_abs_diff_eq!(drift_a[i], drift_b[i], epsilon = 1e-14);
            assert_abs_diff_eq!(diff_a[i], -diff_b[i], epsilon = 1e-14);
        }
    }

    #[test]
    fn weight_passes_through_unchanged() {
        for scheme in [GenerationScheme::Decomposed, GenerationScheme::Fused] {
            let process = Arc::new(ArithmeticProcess { x0: 0.0, mu: 0.0, sigma: 0.2 });
            let source = FixedSequenceGenerator::new(&[1.0, -1.0], 0.75);
            let mut generator =
                MultiPathGenerator::new(process, three_instant_grid(), source, scheme, false)
                    .unwrap();
            assert_eq!(generator.next().unwrap().weight, 0.75);
            assert_eq!(generator.antithetic().unwrap().weight, 0.75);
        }
    }

    #[test]
    fn every_path_spans_the_grid() {
        let processes: Vec<Arc<dyn StochasticProcess1D>> = vec![
            Arc::new(GeometricBrownianMotionProcess::new(100.0, 0.05, 0.2)),
            Arc::new(ArithmeticProcess { x0: 0.0, mu: 0.0, sigma: 0.3 }),
        ];
        let grid = Arc::new(TimeGrid::regular(1.0, 3).unwrap());
        for scheme in [GenerationScheme::Decomposed, GenerationScheme::Fused] {
            let source = MtGaussianSequenceGenerator::from_seed(6, 7).unwrap();
            let mut generator = MultiPathGenerator::with_correlation(
                processes.clone(),
                &Matrix::identity(2),
                grid.clone(),
                source,
                scheme,
                false,
            )
            .unwrap();
            let sample = generator.next().unwrap();
            assert_eq!(sample.value.asset_count(), 2);
            for path in sample.value.iter() {
                assert_eq!(path.len(), grid.len());
            }
        }
    }

    #[test]
    fn identically_seeded_generators_reproduce() {
        let build = || {
            let process = Arc::new(BlackScholesProcess::new(100.0, 0.05, 0.01, 0.2));
            let source = MtGaussianSequenceGenerator::from_seed(12, 2024).unwrap();
            MultiPathGenerator::new(
                process,
                Arc::new(TimeGrid::regular(1.0, 12).unwrap()),
                source,
                GenerationScheme::Fused,
                false,
            )
            .unwrap()
        };
        let mut a = build();
        let mut b = build();
        for _ in 0..10 {
            let pa = a.next().unwrap().value[0].values().to_vec();
            let pb = b.next().unwrap().value[0].values().to_vec();
            assert_eq!(pa, pb);
        }
    }

    #[test]
    fn fused_scheme_seeds_initial_state_and_drops_diagnostics() {
        let process = Arc::new(BlackScholesProcess::new(100.0, 0.05, 0.0, 0.2));
        let source = MtGaussianSequenceGenerator::from_seed(2, 1).unwrap();
        let mut generator = MultiPathGenerator::new(
            process,
            three_instant_grid(),
            source,
            GenerationScheme::Fused,
            false,
        )
        .unwrap();
        let sample = generator.next().unwrap();
        assert_abs_diff_eq!(sample.value[0].front(), 100.0, epsilon = 1e-15);
        assert!(sample.value[0].drift().is_none());
        assert!(sample.value[0].diffusion().is_none());
    }

    #[test]
    fn perfectly_correlated_factors_move_in_lockstep() {
        let processes: Vec<Arc<dyn StochasticProcess1D>> = vec![
            Arc::new(GeometricBrownianMotionProcess::new(50.0, 0.02, 0.3)),
            Arc::new(GeometricBrownianMotionProcess::new(50.0, 0.02, 0.3)),
        ];
        let correlation = Matrix::from_row_slice(2, 2, &[1.0, 1.0, 1.0, 1.0]);
        let grid = Arc::new(TimeGrid::regular(1.0, 4).unwrap());
        let source = MtGaussianSequenceGenerator::from_seed(8, 31).unwrap();
        let mut generator = MultiPathGenerator::with_correlation(
            processes,
            &correlation,
            grid,
            source,
            GenerationScheme::Fused,
            false,
        )
        .unwrap();
        let sample = generator.next().unwrap();
        for i in 0..sample.value.path_len() {
            assert_abs_diff_eq!(
                sample.value[0][i],
                sample.value[1][i],
                epsilon = 1e-10
            );
        }
    }

    #[test]
    fn fixed_draws_produce_the_expected_increments() {
        let sigma = 0.2;
        let process = Arc::new(ArithmeticProcess { x0: 0.0, mu: 0.0, sigma });
        let source = FixedSequenceGenerator::new(&[1.0, -1.0], 1.0);
        let mut generator = MultiPathGenerator::new(
            process,
            three_instant_grid(),
            source,
            GenerationScheme::Decomposed,
            false,
        )
        .unwrap();

        let step = sigma * 0.5_f64.sqrt();

        let sample = generator.next().unwrap();
        let path = &sample.value[0];
        assert_abs_diff_eq!(path[1] - path[0], step, epsilon = 1e-14);
        assert_abs_diff_eq!(path[2] - path[1], -step, epsilon = 1e-14);
        // Zero-drift process: the drift diagnostics vanish.
        for &d in path.drift().unwrap() {
            assert_abs_diff_eq!(d, 0.0, epsilon = 1e-15);
        }

        let mirrored = generator.antithetic().unwrap();
        let path = &mirrored.value[0];
        assert_abs_diff_eq!(path[1] - path[0], -step, epsilon = 1e-14);
        assert_abs_diff_eq!(path[2] - path[1], step, epsilon = 1e-14);
    }

    #[test]
    fn buffer_is_overwritten_by_the_following_call() {
        let process = Arc::new(BlackScholesProcess::new(100.0, 0.05, 0.0, 0.2));
        let source = MtGaussianSequenceGenerator::from_seed(2, 5).unwrap();
        let mut generator = MultiPathGenerator::new(
            process,
            three_instant_grid(),
            source,
            GenerationScheme::Fused,
            false,
        )
        .unwrap();
        let first = generator.next().unwrap().value[0].values().to_vec();
        let second = generator.next().unwrap().value[0].values().to_vec();
        assert_ne!(first, second);
    }
}
