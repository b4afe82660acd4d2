//! Newton–Raphson root finder.
//!
//! Iterates `x_{k+1} = x_k - f(x_k) / f'(x_k)` from a caller-supplied guess.
//! Convergence is quadratic near a simple root; there is no damping or line
//! search, so poor guesses or multiple roots may diverge or converge slowly.
//!
//! The solver is stateless. When solving a family of equations over a
//! slowly varying parameter, seed each solve with the previous root; see
//! [`crate::batch::warm_started`].
//!
//! # Example
//!
//! ```
//! use strand_solvers::equation::newton;
//!
//! let solution = newton::solve_unobserved(
//!     &|x: f64| x * x - 2.0,
//!     &|x: f64| 2.0 * x,
//!     1.5,
//!     &newton::Config::default(),
//! )?;
//!
//! assert!(solution.converged());
//! assert!((solution.root - 2f64.sqrt()).abs() < 1e-12);
//! # Ok::<(), newton::Error>(())
//! ```

mod config;
mod error;
mod event;

pub use config::Config;
pub use error::Error;
pub use event::{Action, Event};

use log::{debug, trace, warn};
use strand_core::{Observer, ScalarFunction};

use crate::equation::{ErrorMetric, IterationTrace, Solution, Status};

/// Finds a root of `function` starting from `initial_guess`.
///
/// Each iteration evaluates `function` and `derivative` exactly once at the
/// current iterate `x`, then steps to `x1 = x - f(x) / f'(x)`. The solve
/// converges when `|x1 - x| < config.tol` and reports `x1` as the root.
/// Running out of iterations returns [`Status::MaxIters`] with the last
/// iterate.
///
/// # Observer
///
/// The observer receives an [`Event`] after every step and may return
/// [`Action::StopEarly`] to finish with the newest iterate.
///
/// # Errors
///
/// Returns [`Error::SingularDerivative`] if the derivative is exactly zero at
/// an iterate. Also errors on invalid configs, a non-finite guess, and
/// non-finite function values, derivatives or iterates.
pub fn solve<F, D, Obs>(
    function: &F,
    derivative: &D,
    initial_guess: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarFunction + ?Sized,
    D: ScalarFunction + ?Sized,
    Obs: Observer<Event, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    if !initial_guess.is_finite() {
        return Err(Error::NonFiniteGuess {
            value: initial_guess,
        });
    }

    let mut trace = IterationTrace::with_capacity(config.max_iters.min(64));
    let mut x = initial_guess;

    for iter in 1..=config.max_iters {
        let value = function.value(x);
        ensure_finite("function value", x, value, iter)?;

        let slope = derivative.value(x);
        ensure_finite("derivative", x, slope, iter)?;

        #[allow(clippy::float_cmp)]
        if slope == 0.0 {
            return Err(Error::SingularDerivative { x, iter });
        }

        let next = x - value / slope;
        ensure_finite("iterate", x, next, iter)?;

        let step = (next - x).abs();
        trace!("newton iter {iter}: x = {x}, f = {value}, f' = {slope}, next = {next}");

        let error = match config.metric {
            ErrorMetric::Progress => step,
            ErrorMetric::Residual => value.abs(),
            ErrorMetric::DistanceTo(reference) => (next - reference).abs(),
        };
        trace.push(iter, next, error);

        let event = Event {
            iter,
            x,
            value,
            derivative: slope,
            next,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!("newton stopped by observer at iter {iter}, x = {next}");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                root: next,
                iters: iter,
                trace,
            });
        }

        if step < config.tol {
            debug!("newton converged after {iter} iterations: x = {next}");
            return Ok(Solution {
                status: Status::Converged,
                root: next,
                iters: iter,
                trace,
            });
        }

        x = next;
    }

    warn!(
        "newton reached max_iters = {} without converging; last iterate {x}",
        config.max_iters
    );
    Ok(Solution {
        status: Status::MaxIters,
        root: x,
        iters: config.max_iters,
        trace,
    })
}

/// Runs Newton–Raphson without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F, D>(
    function: &F,
    derivative: &D,
    initial_guess: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    F: ScalarFunction + ?Sized,
    D: ScalarFunction + ?Sized,
{
    solve(function, derivative, initial_guess, config, ())
}

fn ensure_finite(what: &'static str, x: f64, value: f64, iter: usize) -> Result<(), Error> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteValue {
            what,
            x,
            value,
            iter,
        })
    }
}
