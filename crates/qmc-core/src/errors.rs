//! Error types for quantmc.
//!
//! The whole workspace shares a single `thiserror`-derived enum. Setup
//! mistakes (mismatched dimensions, degenerate grids) surface as
//! [`Error::Configuration`] and are never retried; features that are
//! accepted at construction but have no implementation surface as
//! [`Error::UnsupportedFeature`] at first use.

use thiserror::Error;

/// The top-level error type used throughout quantmc.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Invalid setup detected at construction. Fatal; the caller must fix
    /// the configuration and rebuild the object.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A feature that is accepted by a constructor but has no
    /// implementation was exercised.
    #[error("unsupported feature: {0}")]
    UnsupportedFeature(String),

    /// Precondition violated (maps to the `ensure!` macro).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// General runtime error (maps to the `fail!` macro).
    #[error("{0}")]
    Runtime(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout quantmc.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use qmc_core::ensure;
/// fn positive(x: f64) -> qmc_core::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use qmc_core::fail;
/// fn always_err() -> qmc_core::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
