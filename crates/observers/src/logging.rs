use std::fmt::Debug;

use log::{Level, log};
use strand_core::Observer;

/// An observer that writes every event to the `log` facade.
///
/// Events are formatted with [`Debug`] at the configured level under the
/// given target, so they can be filtered like any other log output. The
/// observer never returns an action.
///
/// # Example
///
/// ```
/// use log::Level;
/// use strand_observers::LogObserver;
/// use strand_solvers::equation::bisection;
///
/// let solution = bisection::solve(
///     &|x: f64| x * x - 2.0,
///     [0.0, 2.0],
///     &bisection::Config::default(),
///     LogObserver::new("sqrt2", Level::Debug),
/// )?;
/// assert!(solution.converged());
/// # Ok::<(), bisection::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct LogObserver {
    target: String,
    level: Level,
    events: usize,
}

impl LogObserver {
    /// Creates an observer logging at `level` under `target`.
    pub fn new(target: impl Into<String>, level: Level) -> Self {
        Self {
            target: target.into(),
            level,
            events: 0,
        }
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn events(&self) -> usize {
        self.events
    }
}

impl<E: Debug, A> Observer<E, A> for LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.events += 1;
        log!(target: self.target.as_str(), self.level, "{event:?}");
        None
    }
}

/// Allows `&mut LogObserver` to be passed to solvers that take an observer
/// by value, so the event count can be read after the solve.
impl<E: Debug, A> Observer<E, A> for &mut LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use strand_core::TimeGrid;
    use strand_solvers::{equation::newton, transient::euler};

    #[test]
    fn never_returns_an_action() {
        let mut observer = LogObserver::new("test", Level::Trace);

        let action: Option<()> = observer.observe(&42);

        assert!(action.is_none());
        assert_eq!(observer.events(), 1);
    }

    #[test]
    fn counts_every_newton_iteration() {
        let mut observer = LogObserver::new("newton", Level::Info);

        let solution = newton::solve(
            &|x: f64| x * x - 2.0,
            &|x: f64| 2.0 * x,
            1.5,
            &newton::Config::default(),
            &mut observer,
        )
        .expect("should solve");

        assert_eq!(observer.events(), solution.iters);
    }

    #[test]
    fn sees_every_integration_state() {
        let grid = TimeGrid::uniform(0.0, 1.0, 0.25).expect("valid grid");
        let mut observer = LogObserver::new("euler", Level::Trace);

        euler::solve(&|y: &[f64], _t: f64| vec![-y[0]], &[1.0], &grid, &mut observer)
            .expect("should integrate");

        assert_eq!(observer.events(), grid.len());
    }
}
