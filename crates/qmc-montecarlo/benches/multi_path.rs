//! Generator hot-path benchmarks: one daily-stepped year per call.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use qmc_math::random_numbers::MtGaussianSequenceGenerator;
use qmc_math::Matrix;
use qmc_montecarlo::{GenerationScheme, MultiPathGenerator, TimeGrid};
use qmc_processes::{BlackScholesProcess, GeometricBrownianMotionProcess, StochasticProcess1D};

const STEPS: usize = 252;

fn single_factor(c: &mut Criterion) {
    let grid = Arc::new(TimeGrid::regular(1.0, STEPS).unwrap());

    for (name, scheme) in [
        ("decomposed_1_factor", GenerationScheme::Decomposed),
        ("fused_1_factor", GenerationScheme::Fused),
    ] {
        let process = Arc::new(BlackScholesProcess::new(100.0, 0.05, 0.0, 0.2));
        let source = MtGaussianSequenceGenerator::from_seed(STEPS, 42).unwrap();
        let mut generator =
            MultiPathGenerator::new(process, grid.clone(), source, scheme, false).unwrap();
        c.bench_function(name, |b| {
            b.iter(|| black_box(generator.next().unwrap().value[0].back()))
        });
    }
}

fn correlated_basket(c: &mut Criterion) {
    let grid = Arc::new(TimeGrid::regular(1.0, STEPS).unwrap());
    let processes: Vec<Arc<dyn StochasticProcess1D>> = (0..3)
        .map(|i| {
            Arc::new(GeometricBrownianMotionProcess::new(
                100.0 + 10.0 * i as f64,
                0.03,
                0.15 + 0.05 * i as f64,
            )) as Arc<dyn StochasticProcess1D>
        })
        .collect();
    let correlation =
        Matrix::from_row_slice(3, 3, &[1.0, 0.5, 0.25, 0.5, 1.0, 0.5, 0.25, 0.5, 1.0]);
    let source = MtGaussianSequenceGenerator::from_seed(3 * STEPS, 42).unwrap();
    let mut generator = MultiPathGenerator::with_correlation(
        processes,
        &correlation,
        grid,
        source,
        GenerationScheme::Fused,
        false,
    )
    .unwrap();

    c.bench_function("fused_3_factor_correlated", |b| {
        b.iter(|| black_box(generator.next().unwrap().value[2].back()))
    });
}

criterion_group!(benches, single_factor, correlated_basket);
criterion_main!(benches);
