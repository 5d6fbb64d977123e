//! # qmc-pricers
//!
//! Closed-form single-asset option valuation: Black-Scholes values and
//! Greeks, plus the implied-volatility search that feeds a scalar
//! objective function to the 1-D solver.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod single_asset_option;

pub use single_asset_option::{
    exercise_payoff, EuropeanOption, OptionType, MAX_VOLATILITY, MIN_VOLATILITY,
};
