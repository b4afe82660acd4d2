//! Helpers for parameter sweeps built from independent solves.
//!
//! The solvers keep no state between calls, so a sweep is just a loop. Two
//! shapes come up often enough to be worth naming:
//!
//! - [`warm_started`] runs the solves in order and seeds each one with the
//!   previous converged root, which pays off when neighbouring parameters
//!   have neighbouring roots.
//! - [`map_ordered`] runs fully independent solves and returns the results
//!   in input order. With the `parallel` feature the calls are spread across
//!   a `rayon` thread pool.
//!
//! # Example
//!
//! ```
//! use strand_solvers::{batch, equation::newton};
//!
//! // Kepler's equation E - e sin E = M for increasing mean anomaly.
//! let eccentricity = 0.3;
//! let anomalies = [0.5, 0.6, 0.7, 0.8];
//! let config = newton::Config::default();
//!
//! let solutions = batch::warm_started(&anomalies, 0.5, |&mean, guess| {
//!     newton::solve_unobserved(
//!         &|e: f64| e - eccentricity * e.sin() - mean,
//!         &|e: f64| 1.0 - eccentricity * e.cos(),
//!         guess,
//!         &config,
//!     )
//! })?;
//!
//! assert!(solutions.iter().all(|solution| solution.converged()));
//! # Ok::<(), batch::SweepError<newton::Error>>(())
//! ```

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use thiserror::Error;

use crate::equation::Solution;

/// A solve within a sweep failed.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("solve failed for parameter at index {index}")]
pub struct SweepError<E> {
    /// Position of the failing parameter in the input slice.
    pub index: usize,
    /// The solver's error.
    #[source]
    pub source: E,
}

/// Solves once per parameter, chaining each converged root into the next
/// solve's initial guess.
///
/// `solve` receives the parameter and the guess to start from. The first
/// solve, and any solve following one that did not converge, starts from
/// `initial_guess`.
///
/// # Errors
///
/// Stops at the first failing solve and returns its error together with the
/// index of its parameter.
pub fn warm_started<P, E, S>(
    params: &[P],
    initial_guess: f64,
    mut solve: S,
) -> Result<Vec<Solution>, SweepError<E>>
where
    S: FnMut(&P, f64) -> Result<Solution, E>,
{
    let mut solutions = Vec::with_capacity(params.len());
    let mut guess = initial_guess;

    for (index, param) in params.iter().enumerate() {
        let solution = solve(param, guess).map_err(|source| SweepError { index, source })?;

        guess = if solution.converged() {
            solution.root
        } else {
            debug!(
                "sweep: parameter {index} ended with {:?}, restarting from {initial_guess}",
                solution.status
            );
            initial_guess
        };

        solutions.push(solution);
    }

    Ok(solutions)
}

/// Applies `f` to every input and returns the results in input order.
///
/// Runs on the `rayon` global thread pool when the `parallel` feature is
/// enabled and sequentially otherwise.
#[cfg(feature = "parallel")]
pub fn map_ordered<T, R, F>(inputs: &[T], f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    inputs.par_iter().map(f).collect()
}

/// Applies `f` to every input and returns the results in input order.
///
/// Runs on the `rayon` global thread pool when the `parallel` feature is
/// enabled and sequentially otherwise.
#[cfg(not(feature = "parallel"))]
pub fn map_ordered<T, R, F>(inputs: &[T], f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    inputs.iter().map(f).collect()
}
