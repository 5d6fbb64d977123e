//! # qmc-processes
//!
//! Stochastic process abstractions and a small set of concrete models.
//!
//! The [`StochasticProcess`] trait is what the path generator drives:
//! drift, diffusion scaling, an aggregation rule, and a fused one-step
//! transition. [`StochasticProcessArray`] assembles independent 1-D
//! processes into a correlated multi-factor process.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod black_scholes_process;
pub mod geometric_brownian_motion;
pub mod ornstein_uhlenbeck_process;
pub mod stochastic_process;
pub mod stochastic_process_array;

pub use black_scholes_process::BlackScholesProcess;
pub use geometric_brownian_motion::GeometricBrownianMotionProcess;
pub use ornstein_uhlenbeck_process::OrnsteinUhlenbeckProcess;
pub use stochastic_process::{StochasticProcess, StochasticProcess1D};
pub use stochastic_process_array::StochasticProcessArray;
