//! Forward Euler integrator.
//!
//! Steps the state forward using the derivative at the start of each step:
//!
//! ```text
//! y[i] = y[i-1] + (t[i] - t[i-1]) * f(y[i-1], t[i-1])
//! ```
//!
//! First-order accurate: local error O(dt²), global error O(dt). There is no
//! stability safeguard, so oscillatory systems gain energy every step and a
//! step that is large relative to the system's time scale diverges.
//!
//! # Example
//!
//! ```
//! use strand_core::TimeGrid;
//! use strand_solvers::transient::euler;
//!
//! let decay = |y: &[f64], _t: f64| vec![-y[0]];
//! let grid = TimeGrid::uniform(0.0, 1.0, 0.001)?;
//!
//! let trajectory = euler::solve_unobserved(&decay, &[1.0], &grid)?;
//!
//! let y_end = trajectory.last_state().unwrap()[0];
//! assert!((y_end - (-1.0f64).exp()).abs() < 1e-3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use strand_core::{Observer, TimeGrid, VectorField};

use super::{
    Action, Error, Event, Trajectory,
    stepper::{Stepper, evaluate, integrate, offset},
};

/// Integrates `field` from `y0` across `grid` using forward Euler.
///
/// Evaluates `field` exactly once per step.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial state and after every
/// step, and may return [`Action::StopEarly`] to end the integration.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if `field` returns a derivative whose
/// length differs from the state's.
pub fn solve<F, Obs>(
    field: &F,
    y0: &[f64],
    grid: &TimeGrid,
    observer: Obs,
) -> Result<Trajectory, Error>
where
    F: VectorField + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let stepper = Euler {
        field,
        state: y0.to_vec(),
    };
    integrate("euler", stepper, y0, grid, observer)
}

/// Integrates using forward Euler without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F>(field: &F, y0: &[f64], grid: &TimeGrid) -> Result<Trajectory, Error>
where
    F: VectorField + ?Sized,
{
    solve(field, y0, grid, ())
}

struct Euler<'f, F: ?Sized> {
    field: &'f F,
    state: Vec<f64>,
}

impl<F> Stepper for Euler<'_, F>
where
    F: VectorField + ?Sized,
{
    fn advance(&mut self, t0: f64, t1: f64) -> Result<Vec<f64>, Error> {
        let slope = evaluate(self.field, &self.state, t0)?;
        self.state = offset(&self.state, t1 - t0, &slope);
        Ok(self.state.clone())
    }
}
