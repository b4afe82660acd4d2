use strand_core::Observer;

use crate::traits::{CanStopEarly, HasIteration, HasResidual};

/// Stops a solver once the residual magnitude falls below a threshold.
///
/// Useful when `|f(x)|` matters more than the solver's own progress
/// criterion. Events from the first `min_iters` iterations are ignored.
///
/// # Example
///
/// ```
/// use strand_observers::ResidualBelow;
/// use strand_solvers::equation::{Status, bisection};
///
/// let solution = bisection::solve(
///     &|x: f64| x * x - 2.0,
///     [0.0, 2.0],
///     &bisection::Config::default(),
///     ResidualBelow::new(1e-3),
/// )?;
///
/// assert_eq!(solution.status, Status::StoppedByObserver);
/// assert!((solution.root * solution.root - 2.0).abs() < 1e-3);
/// # Ok::<(), bisection::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualBelow {
    tolerance: f64,
    min_iters: usize,
}

impl ResidualBelow {
    /// Creates an observer that stops once `|residual| < tolerance`.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            min_iters: 0,
        }
    }

    /// Ignores events from the first `min_iters` iterations.
    #[must_use]
    pub fn after(mut self, min_iters: usize) -> Self {
        self.min_iters = min_iters;
        self
    }
}

impl<E, A> Observer<E, A> for ResidualBelow
where
    E: HasResidual + HasIteration,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.iteration() > self.min_iters && event.residual().abs() < self.tolerance {
            return Some(A::stop_early());
        }
        None
    }
}
