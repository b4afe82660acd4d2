//! Bisection root finder.
//!
//! Halves a sign-changing bracket `[a, b]` until its half-width drops below
//! the tolerance or the midpoint is an exact root. Convergence is linear
//! (one bit per iteration) but guaranteed once the bracket is valid.
//!
//! # Example
//!
//! ```
//! use strand_solvers::equation::bisection;
//!
//! let solution = bisection::solve_unobserved(
//!     &|x: f64| x * x - 2.0,
//!     [0.0, 2.0],
//!     &bisection::Config::default(),
//! )?;
//!
//! assert!(solution.converged());
//! assert!((solution.root - 2f64.sqrt()).abs() < 1e-10);
//! # Ok::<(), bisection::Error>(())
//! ```

mod bracket;
mod config;
mod error;
mod event;

pub use config::Config;
pub use error::Error;
pub use event::{Action, Event};

use log::{debug, trace, warn};
use strand_core::{Observer, ScalarFunction};

use crate::equation::{ErrorMetric, IterationTrace, Solution, Status, opposite_signs};

use bracket::{Bounds, Bracket};

/// Finds a root of `function` inside `bracket` using bisection.
///
/// # Algorithm
///
/// 1. Validate the config and the bracket, then evaluate both endpoints.
///    An endpoint that is an exact root is returned immediately with zero
///    iterations.
/// 2. For each iteration, evaluate the midpoint `c`, record a trace entry
///    and emit an [`Event`].
/// 3. Stop with [`Status::Converged`] if `f(c) == 0` or the half-width is
///    below `config.tol`.
/// 4. If `f(c)` and `f(a)` have strictly opposite signs set `b = c`,
///    otherwise set `a = c`.
///
/// Running out of iterations returns [`Status::MaxIters`] with the last
/// midpoint as the root estimate.
///
/// # Observer
///
/// The observer receives an [`Event`] for every midpoint and may return
/// [`Action::StopEarly`] to finish with the current midpoint.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if `f` has the same strict sign at both
/// endpoints, and other [`Error`] variants for invalid configs, degenerate
/// brackets, or non-finite function values.
pub fn solve<F, Obs>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarFunction + ?Sized,
    Obs: Observer<Event, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let bounds = Bounds::new(bracket)?;
    let left_value = finite_value(function, bounds.left)?;
    let right_value = finite_value(function, bounds.right)?;

    #[allow(clippy::float_cmp)]
    for (x, value) in [(bounds.left, left_value), (bounds.right, right_value)] {
        if value == 0.0 {
            debug!("bisection: bracket endpoint {x} is an exact root");
            return Ok(Solution {
                status: Status::Converged,
                root: x,
                iters: 0,
                trace: IterationTrace::default(),
            });
        }
    }

    if !opposite_signs(left_value, right_value) {
        return Err(Error::InvalidBracket {
            left: bounds.left,
            right: bounds.right,
            left_value,
            right_value,
        });
    }

    let mut bracket = Bracket::new(bounds, left_value);
    let mut trace = IterationTrace::with_capacity(config.max_iters.min(128));
    let mut root = bracket.midpoint();

    for iter in 1..=config.max_iters {
        let half_width = bracket.half_width();
        let mid = bracket.midpoint();
        let mid_value = finite_value(function, mid)?;
        root = mid;

        trace!("bisection iter {iter}: bracket {:?}, f({mid}) = {mid_value}", bracket.as_array());

        let error = match config.metric {
            ErrorMetric::Progress => half_width,
            ErrorMetric::Residual => mid_value.abs(),
            ErrorMetric::DistanceTo(reference) => (mid - reference).abs(),
        };
        trace.push(iter, mid, error);

        let event = Event {
            iter,
            bracket: bracket.as_array(),
            x: mid,
            value: mid_value,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!("bisection stopped by observer at iter {iter}, x = {mid}");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                root,
                iters: iter,
                trace,
            });
        }

        #[allow(clippy::float_cmp)]
        if mid_value == 0.0 || half_width < config.tol {
            debug!("bisection converged after {iter} iterations: x = {mid}");
            return Ok(Solution {
                status: Status::Converged,
                root,
                iters: iter,
                trace,
            });
        }

        bracket.shrink(mid, mid_value);
    }

    warn!(
        "bisection reached max_iters = {} without converging; last midpoint {root}",
        config.max_iters
    );
    Ok(Solution {
        status: Status::MaxIters,
        root,
        iters: config.max_iters,
        trace,
    })
}

/// Runs bisection without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    F: ScalarFunction + ?Sized,
{
    solve(function, bracket, config, ())
}

/// Evaluates `function` at `x`, rejecting NaN and infinite values.
fn finite_value<F>(function: &F, x: f64) -> Result<f64, Error>
where
    F: ScalarFunction + ?Sized,
{
    let value = function.value(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteValue { x, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use approx::assert_relative_eq;

    fn square_minus_two(x: f64) -> f64 {
        x * x - 2.0
    }

    #[test]
    fn finds_square_root_of_two() {
        let solution = solve_unobserved(&square_minus_two, [0.0, 2.0], &Config::default())
            .expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert!(solution.converged());
        assert_relative_eq!(solution.root, 2f64.sqrt(), epsilon = 1e-10);
        assert_eq!(solution.trace.len(), solution.iters);
    }

    #[test]
    fn half_width_never_increases() {
        let solution = solve_unobserved(&square_minus_two, [0.0, 2.0], &Config::default())
            .expect("should solve");

        let widths: Vec<f64> = solution.trace.errors().collect();
        assert!(!widths.is_empty());
        assert!(widths.windows(2).all(|pair| pair[1] <= pair[0]));
        assert_relative_eq!(widths[0], 1.0);
    }

    #[test]
    fn rejects_bracket_without_sign_change() {
        let result = solve_unobserved(&square_minus_two, [3.0, 4.0], &Config::default());

        assert!(matches!(result, Err(Error::InvalidBracket { .. })));
    }

    #[test]
    fn invalid_bracket_is_detected_before_iterating() {
        let calls = Cell::new(0);
        let counted = |x: f64| {
            calls.set(calls.get() + 1);
            square_minus_two(x)
        };

        let result = solve_unobserved(&counted, [3.0, 4.0], &Config::default());

        assert!(result.is_err());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn normalizes_reversed_bracket() {
        let solution = solve_unobserved(&square_minus_two, [2.0, 0.0], &Config::default())
            .expect("should solve with reversed bracket");

        assert_relative_eq!(solution.root, 2f64.sqrt(), epsilon = 1e-10);
    }

    #[test]
    fn endpoint_root_returns_immediately() {
        let solution = solve_unobserved(&|x: f64| x - 1.0, [1.0, 5.0], &Config::default())
            .expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 0);
        assert!(solution.trace.is_empty());
        assert_relative_eq!(solution.root, 1.0);

        let solution = solve_unobserved(&|x: f64| x - 5.0, [1.0, 5.0], &Config::default())
            .expect("should solve");
        assert_relative_eq!(solution.root, 5.0);
    }

    #[test]
    fn exact_midpoint_root_stops_iteration() {
        let solution = solve_unobserved(&|x: f64| x - 1.0, [0.0, 2.0], &Config::default())
            .expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.root, 1.0);
    }

    #[test]
    fn one_evaluation_per_iteration() {
        let calls = Cell::new(0usize);
        let counted = |x: f64| {
            calls.set(calls.get() + 1);
            square_minus_two(x)
        };

        let solution = solve_unobserved(&counted, [0.0, 2.0], &Config::default())
            .expect("should solve");

        assert_eq!(calls.get(), solution.iters + 2);
    }

    #[test]
    fn exhausting_iterations_is_not_an_error() {
        let config = Config {
            max_iters: 5,
            ..Config::default()
        };

        let solution =
            solve_unobserved(&square_minus_two, [0.0, 2.0], &config).expect("should return");

        assert_eq!(solution.status, Status::MaxIters);
        assert!(!solution.converged());
        assert_eq!(solution.iters, 5);
        assert_eq!(solution.trace.len(), 5);
        // Bracket half-width after five halvings of [0, 2].
        assert!((solution.root - 2f64.sqrt()).abs() <= 1.0 / 16.0);
    }

    #[test]
    fn residual_metric_records_function_magnitude() {
        let config = Config {
            metric: ErrorMetric::Residual,
            ..Config::default()
        };

        let solution =
            solve_unobserved(&square_minus_two, [0.0, 2.0], &config).expect("should solve");

        // First midpoint is 1.0 where |1 - 2| = 1.
        assert_relative_eq!(solution.trace.records()[0].error, 1.0);
        for record in &solution.trace {
            assert_relative_eq!(record.error, square_minus_two(record.x).abs());
        }
    }

    #[test]
    fn distance_metric_uses_reference_root() {
        let reference = 2f64.sqrt();
        let config = Config {
            metric: ErrorMetric::DistanceTo(reference),
            ..Config::default()
        };

        let solution =
            solve_unobserved(&square_minus_two, [0.0, 2.0], &config).expect("should solve");

        for record in &solution.trace {
            assert_relative_eq!(record.error, (record.x - reference).abs());
        }
    }

    #[test]
    fn observer_can_stop_iteration() {
        let mut calls = 0usize;
        let observer = |event: &Event| {
            calls += 1;
            if event.iter >= 3 {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let solution = solve(&square_minus_two, [0.0, 2.0], &Config::default(), observer)
            .expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 3);
        assert_eq!(solution.trace.len(), 3);
        assert_eq!(calls, 3);
    }

    #[test]
    fn observer_sees_shrinking_brackets() {
        let mut brackets = Vec::new();
        solve(&square_minus_two, [0.0, 2.0], &Config::default(), |event: &Event| {
            brackets.push(event.bracket);
            None::<Action>
        })
        .expect("should solve");

        assert_eq!(brackets[0], [0.0, 2.0]);
        assert_eq!(brackets[1], [1.0, 2.0]);
        assert_eq!(brackets[2], [1.0, 1.5]);
    }

    #[test]
    fn errors_on_zero_width_bracket() {
        let result = solve_unobserved(&square_minus_two, [5.0, 5.0], &Config::default());

        assert!(matches!(result, Err(Error::ZeroWidthBracket { .. })));
    }

    #[test]
    fn errors_on_non_finite_bracket() {
        let result = solve_unobserved(&square_minus_two, [f64::NAN, 10.0], &Config::default());
        assert!(matches!(result, Err(Error::NonFiniteBracket { .. })));

        let result = solve_unobserved(&square_minus_two, [0.0, f64::INFINITY], &Config::default());
        assert!(matches!(result, Err(Error::NonFiniteBracket { .. })));
    }

    #[test]
    fn errors_on_non_finite_value() {
        // Pole at x = 1, which is the first midpoint.
        let result = solve_unobserved(&|x: f64| 1.0 / (x - 1.0), [0.0, 2.0], &Config::default());

        assert!(matches!(result, Err(Error::NonFiniteValue { .. })));
    }

    #[test]
    fn errors_on_invalid_config() {
        let config = Config {
            tol: -1.0,
            ..Config::default()
        };
        let result = solve_unobserved(&square_minus_two, [0.0, 2.0], &config);

        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }
}
