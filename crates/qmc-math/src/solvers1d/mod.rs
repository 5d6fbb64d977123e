//! 1-D root-finding solvers.
//!
//! The implied-volatility boundary hands a scalar objective function
//! (`Fn(Real) -> Real`) to [`brent`]; nothing here knows about options or
//! volatilities.

use qmc_core::{ensure, errors::Result, fail, Real};

/// Default absolute accuracy when the caller passes a non-positive one.
const DEFAULT_ACCURACY: Real = 1.0e-11;

/// Brent's method for finding a root of `f` in `[x_min, x_max]`.
///
/// Combines bisection, the secant method, and inverse quadratic
/// interpolation. `f(x_min)` and `f(x_max)` must bracket the root, i.e.
/// have opposite signs.
pub fn brent<F>(
    f: F,
    x_min: Real,
    x_max: Real,
    accuracy: Real,
    max_evaluations: u32,
) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    let acc = if accuracy > 0.0 {
        accuracy
    } else {
        DEFAULT_ACCURACY
    };

    let mut a = x_min;
    let mut b = x_max;
    let mut fa = f(a);
    let mut fb = f(b);

    if fa == 0.0 {
        return Ok(a);
    }
    if fb == 0.0 {
        return Ok(b);
    }
    ensure!(
        fa * fb < 0.0,
        "root not bracketed: f({a}) = {fa}, f({b}) = {fb}"
    );

    let mut c = b;
    let mut fc = fb;
    let mut d = b - a;
    let mut e = d;

    for _ in 0..max_evaluations {
        if fb * fc > 0.0 {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol = 2.0 * f64::EPSILON * b.abs() + 0.5 * acc;
        let xm = 0.5 * (c - b);
        if xm.abs() <= tol || fb == 0.0 {
            return Ok(b);
        }

        if e.abs() >= tol && fa.abs() > fb.abs() {
            // Interpolation step: secant if only two points are distinct,
            // inverse quadratic otherwise.
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                (2.0 * xm * s, 1.0 - s)
            } else {
                let q = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * xm * q * (q - r) - (b - a) * (r - 1.0)),
                    (q - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            if p > 0.0 {
                q = -q;
            } else {
                p = -p;
            }
            if 2.0 * p < (3.0 * xm * q - (tol * q).abs()) && 2.0 * p < (e * q).abs() {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }

        a = b;
        fa = fb;
        b += if d.abs() > tol {
            d
        } else if xm > 0.0 {
            tol
        } else {
            -tol
        };
        fb = f(b);
    }

    fail!("Brent solver: no root to accuracy {acc} within {max_evaluations} evaluations")
}
