//! # qmc-core
//!
//! Core types and error definitions for quantmc.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – scalar type aliases, the error
//! taxonomy, and the weighted [`Sample`] container used by random-sequence
//! sources and path generators alike.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Weighted sample container.
pub mod sample;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A time measurement in years.
pub type Time = Real;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A price or value.
pub type Price = Real;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use sample::Sample;
