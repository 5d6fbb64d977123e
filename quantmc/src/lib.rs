//! # quantmc
//!
//! Monte Carlo path generation for quantitative finance.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the
//! individual `qmc-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use quantmc::math::random_numbers::MtGaussianSequenceGenerator;
//! use quantmc::montecarlo::{GenerationScheme, MultiPathGenerator, TimeGrid};
//! use quantmc::processes::BlackScholesProcess;
//!
//! let process = Arc::new(BlackScholesProcess::new(100.0, 0.05, 0.0, 0.2));
//! let grid = Arc::new(TimeGrid::regular(1.0, 12).unwrap());
//! let source = MtGaussianSequenceGenerator::from_seed(12, 42).unwrap();
//! let mut generator =
//!     MultiPathGenerator::new(process, grid, source, GenerationScheme::Fused, false).unwrap();
//!
//! let sample = generator.next().unwrap();
//! assert_eq!(sample.value[0].len(), 13);
//! assert!(sample.value[0].back() > 0.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use qmc_core as core;

/// Mathematical utilities: linear algebra, distributions, solvers, RNG.
pub use qmc_math as math;

/// Stochastic process definitions.
pub use qmc_processes as processes;

/// Time grids, path containers, and the multi-path generator.
pub use qmc_montecarlo as montecarlo;

/// Closed-form option valuation and implied volatility.
pub use qmc_pricers as pricers;
