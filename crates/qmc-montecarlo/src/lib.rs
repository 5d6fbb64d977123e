//! # qmc-montecarlo
//!
//! Monte Carlo path generation: the time grid, the path containers, and
//! the multi-path generator.
//!
//! # Overview
//!
//! * [`TimeGrid`] — ordered discretization of the simulation horizon
//! * [`Path`] — one factor's values at every grid instant, with optional
//!   per-step drift/diffusion diagnostics
//! * [`MultiPath`] — all factors' paths for one simulation
//! * [`MultiPathGenerator`] — produces one weighted [`MultiPath`] sample
//!   per call from a stochastic process and a random-sequence source

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod multi_path;
pub mod multi_path_generator;
pub mod path;
pub mod time_grid;

pub use multi_path::MultiPath;
pub use multi_path_generator::{GenerationScheme, MultiPathGenerator};
pub use path::Path;
pub use time_grid::TimeGrid;
