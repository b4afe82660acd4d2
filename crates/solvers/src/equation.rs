//! Solvers for scalar equations — finding `x` such that `f(x) = 0`.
//!
//! # Solvers
//!
//! - [`bisection`] — guaranteed convergence on a sign-changing bracket
//! - [`newton`] — quadratic convergence from a nearby guess, given `f'`
//!
//! Both return a [`Solution`] carrying the root estimate, a [`Status`] and an
//! [`IterationTrace`] with one record per iteration. Running out of
//! iterations is not an error: the solution reports [`Status::MaxIters`] and
//! the caller decides whether that is fatal.

mod metric;
mod solution;
mod trace;

pub mod bisection;
pub mod newton;

pub use metric::ErrorMetric;
pub use solution::{Solution, Status};
pub use trace::{IterationTrace, TraceRecord};

/// Returns true if `a` and `b` have strictly opposite signs.
///
/// Zero has no sign, so `opposite_signs(0.0, x)` is false for every `x`.
fn opposite_signs(a: f64, b: f64) -> bool {
    (a < 0.0 && b > 0.0) || (a > 0.0 && b < 0.0)
}
