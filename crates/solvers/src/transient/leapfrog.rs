//! Leapfrog integrator for second-order systems: staggered drift-kick steps
//! with an opening half kick.
//!
//! The state is laid out as `[q_1..q_n, v_1..v_n]` and the second half of the
//! field's output is read as the acceleration. Velocities are carried half a
//! step ahead of positions:
//!
//! ```text
//! v_{1/2}   = v_0 + a(q_0, v_0, t_0) * dt/2
//! q_{i+1}   = q_i + v_{i+1/2} * dt
//! v_{i+3/2} = v_{i+1/2} + a(q_{i+1}, v_{i+1/2}, t_{i+1}) * dt
//! ```
//!
//! The scheme is symplectic for velocity-independent forces, so energy-like
//! invariants oscillate within a fixed band instead of drifting. It requires
//! a uniform grid.
//!
//! See [`Convention`] for how velocities are reported.

mod config;

use log::debug;
use strand_core::{Observer, TimeGrid, VectorField};

use super::{
    Action, Error, Event, Trajectory,
    stepper::{Stepper, evaluate, integrate, offset},
};

pub use config::{Config, Convention};

/// Relative deviation from the first step tolerated across the grid.
const UNIFORM_STEP_TOLERANCE: f64 = 1e-6;

/// Integrates `field` from `y0` across `grid` using leapfrog.
///
/// Evaluates `field` once at the initial state, then once per step.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial state and after every
/// step, and may return [`Action::StopEarly`] to end the integration.
///
/// # Errors
///
/// Returns an error if:
/// - `y0` has odd length ([`Error::OddStateLength`]),
/// - any grid step differs from the first ([`Error::NonUniformGrid`]),
/// - `field` returns a derivative of the wrong length
///   ([`Error::DimensionMismatch`]).
pub fn solve<F, Obs>(
    field: &F,
    y0: &[f64],
    grid: &TimeGrid,
    config: &Config,
    observer: Obs,
) -> Result<Trajectory, Error>
where
    F: VectorField + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    if y0.len() % 2 != 0 {
        return Err(Error::OddStateLength { len: y0.len() });
    }

    let dt = uniform_step(grid)?;
    debug!(
        "leapfrog: {} steps of dt = {dt}, {:?} velocities",
        grid.len() - 1,
        config.convention
    );

    let (positions, velocities) = y0.split_at(y0.len() / 2);
    let stepper = Leapfrog {
        field,
        convention: config.convention,
        dt,
        positions: positions.to_vec(),
        velocities: velocities.to_vec(),
        primed: false,
    };

    integrate("leapfrog", stepper, y0, grid, observer)
}

/// Integrates using leapfrog without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F>(
    field: &F,
    y0: &[f64],
    grid: &TimeGrid,
    config: &Config,
) -> Result<Trajectory, Error>
where
    F: VectorField + ?Sized,
{
    solve(field, y0, grid, config, ())
}

/// Returns the first step, checking every other step against it.
///
/// A single-point grid has no steps and yields zero.
fn uniform_step(grid: &TimeGrid) -> Result<f64, Error> {
    let mut steps = grid.steps();
    let Some(expected) = steps.next() else {
        return Ok(0.0);
    };

    for (i, step) in steps.enumerate() {
        if (step - expected).abs() > UNIFORM_STEP_TOLERANCE * expected {
            return Err(Error::NonUniformGrid {
                index: i + 2,
                step,
                expected,
            });
        }
    }

    Ok(expected)
}

struct Leapfrog<'f, F: ?Sized> {
    field: &'f F,
    convention: Convention,
    dt: f64,
    positions: Vec<f64>,
    /// Full-step velocities until primed, half-step velocities after.
    velocities: Vec<f64>,
    primed: bool,
}

impl<F> Leapfrog<'_, F>
where
    F: VectorField + ?Sized,
{
    fn acceleration(&self, t: f64) -> Result<Vec<f64>, Error> {
        let state = [self.positions.as_slice(), self.velocities.as_slice()].concat();
        let mut derivative = evaluate(self.field, &state, t)?;
        Ok(derivative.split_off(self.positions.len()))
    }
}

impl<F> Stepper for Leapfrog<'_, F>
where
    F: VectorField + ?Sized,
{
    fn advance(&mut self, t0: f64, t1: f64) -> Result<Vec<f64>, Error> {
        let dt = self.dt;

        if !self.primed {
            let initial = self.acceleration(t0)?;
            self.velocities = offset(&self.velocities, 0.5 * dt, &initial);
            self.primed = true;
        }

        self.positions = offset(&self.positions, dt, &self.velocities);
        let acceleration = self.acceleration(t1)?;
        let next = offset(&self.velocities, dt, &acceleration);

        let reported = match self.convention {
            Convention::Synchronized => offset(&self.velocities, 0.5 * dt, &acceleration),
            Convention::Staggered => next.clone(),
        };
        self.velocities = next;

        Ok([self.positions.as_slice(), reported.as_slice()].concat())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use approx::assert_relative_eq;

    use crate::transient::Status;

    fn oscillator(y: &[f64], _t: f64) -> Vec<f64> {
        vec![y[1], -y[0]]
    }

    fn energy(state: &[f64]) -> f64 {
        state[0] * state[0] + state[1] * state[1]
    }

    fn max_energy_error(end: f64, config: &Config) -> f64 {
        let grid = TimeGrid::uniform(0.0, end, 0.01).expect("valid grid");
        let trajectory =
            solve_unobserved(&oscillator, &[1.0, 0.0], &grid, config).expect("should integrate");

        trajectory
            .states()
            .iter()
            .map(|state| (energy(state) - 1.0).abs())
            .fold(0.0, f64::max)
    }

    #[test]
    fn synchronized_tracks_cosine() {
        let grid = TimeGrid::uniform(0.0, 10.0, 0.01).expect("valid grid");

        let trajectory = solve_unobserved(&oscillator, &[1.0, 0.0], &grid, &Config::default())
            .expect("should integrate");

        assert_eq!(trajectory.len(), grid.len());
        assert_eq!(trajectory.state(0), Some(&[1.0, 0.0][..]));
        for (t, state) in trajectory.iter() {
            assert!((state[0] - t.cos()).abs() < 1e-3, "position at t = {t}");
            assert!((state[1] + t.sin()).abs() < 1e-3, "velocity at t = {t}");
        }
    }

    #[test]
    fn staggered_velocity_leads_by_half_step() {
        let dt = 0.01;
        let grid = TimeGrid::uniform(0.0, 5.0, dt).expect("valid grid");

        let trajectory = solve_unobserved(&oscillator, &[1.0, 0.0], &grid, &Config::staggered())
            .expect("should integrate");

        assert_eq!(trajectory.state(0), Some(&[1.0, 0.0][..]));
        for (t, state) in trajectory.iter().skip(1) {
            assert!((state[0] - t.cos()).abs() < 1e-3, "position at t = {t}");
            assert!(
                (state[1] + (t + 0.5 * dt).sin()).abs() < 1e-3,
                "velocity at t = {t}"
            );
        }
    }

    #[test]
    fn conventions_share_positions() {
        let grid = TimeGrid::uniform(0.0, 2.0, 0.1).expect("valid grid");

        let synchronized = solve_unobserved(&oscillator, &[1.0, 0.0], &grid, &Config::default())
            .expect("should integrate");
        let staggered = solve_unobserved(&oscillator, &[1.0, 0.0], &grid, &Config::staggered())
            .expect("should integrate");

        let a: Vec<f64> = synchronized.component(0).collect();
        let b: Vec<f64> = staggered.component(0).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn first_step_matches_formula() {
        let grid = TimeGrid::new(vec![0.0, 0.5]).expect("valid grid");

        let trajectory = solve_unobserved(&oscillator, &[1.0, 0.0], &grid, &Config::default())
            .expect("should integrate");

        // v_half = 0 - 1 * 0.25, q1 = 1 - 0.25 * 0.5, a1 = -q1, v1 = v_half + a1 * 0.25
        let q1 = 0.875;
        let v1 = -0.25 - q1 * 0.25;
        let state = trajectory.state(1).unwrap();
        assert_relative_eq!(state[0], q1);
        assert_relative_eq!(state[1], v1);
    }

    #[test]
    fn energy_band_does_not_grow() {
        for config in [Config::default(), Config::staggered()] {
            let short = max_energy_error(100.0, &config);
            let long = max_energy_error(1000.0, &config);

            let bound = match config.convention {
                Convention::Synchronized => 1e-3,
                Convention::Staggered => 2e-2,
            };
            assert!(short < bound, "{config:?}: {short}");
            assert!(long < bound, "{config:?}: {long}");
            assert!(long < 1.5 * short, "{config:?}: {short} -> {long}");
        }
    }

    #[test]
    fn one_evaluation_per_step_plus_initial() {
        let calls = Cell::new(0usize);
        let field = |y: &[f64], t: f64| {
            calls.set(calls.get() + 1);
            oscillator(y, t)
        };
        let grid = TimeGrid::uniform(0.0, 1.0, 0.1).expect("valid grid");

        solve_unobserved(&field, &[1.0, 0.0], &grid, &Config::default())
            .expect("should integrate");

        assert_eq!(calls.get(), 11);
    }

    #[test]
    fn single_point_grid_returns_initial_state() {
        let calls = Cell::new(0usize);
        let field = |y: &[f64], t: f64| {
            calls.set(calls.get() + 1);
            oscillator(y, t)
        };
        let grid = TimeGrid::new(vec![3.0]).expect("valid grid");

        let trajectory = solve_unobserved(&field, &[1.0, 2.0], &grid, &Config::default())
            .expect("should integrate");

        assert_eq!(trajectory.states(), &[vec![1.0, 2.0]]);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn two_dimensional_orbit_stays_circular() {
        // Unit circular orbit under an inverse-square central force.
        let gravity = |y: &[f64], _t: f64| {
            let r3 = (y[0] * y[0] + y[1] * y[1]).powf(1.5);
            vec![y[2], y[3], -y[0] / r3, -y[1] / r3]
        };
        let grid = TimeGrid::uniform(0.0, 50.0, 0.01).expect("valid grid");

        let trajectory = solve_unobserved(&gravity, &[1.0, 0.0, 0.0, 1.0], &grid, &Config::default())
            .expect("should integrate");

        for state in trajectory.states() {
            let radius = state[0].hypot(state[1]);
            assert!((radius - 1.0).abs() < 1e-3, "radius {radius}");
        }
    }

    #[test]
    fn observer_can_stop_early() {
        let grid = TimeGrid::uniform(0.0, 1.0, 0.1).expect("valid grid");
        let observer = |event: &Event<'_>| (event.state[0] < 0.9).then_some(Action::StopEarly);

        let trajectory = solve(&oscillator, &[1.0, 0.0], &grid, &Config::default(), observer)
            .expect("should stop");

        assert_eq!(trajectory.status, Status::StoppedByObserver);
        assert!(trajectory.last_state().unwrap()[0] < 0.9);
        assert!(trajectory.len() < grid.len());
    }

    #[test]
    fn rejects_odd_state_length() {
        let grid = TimeGrid::uniform(0.0, 1.0, 0.1).expect("valid grid");
        let field = |y: &[f64], _t: f64| vec![0.0; y.len()];

        let result = solve_unobserved(&field, &[1.0, 0.0, 2.0], &grid, &Config::default());

        assert_eq!(result, Err(Error::OddStateLength { len: 3 }));
    }

    #[test]
    fn rejects_non_uniform_grid() {
        let grid = TimeGrid::new(vec![0.0, 0.1, 0.2, 0.4]).expect("valid grid");

        let result = solve_unobserved(&oscillator, &[1.0, 0.0], &grid, &Config::default());

        assert!(matches!(
            result,
            Err(Error::NonUniformGrid { index: 3, .. })
        ));
    }

    #[test]
    fn accepts_linspace_rounding() {
        let grid = TimeGrid::linspace(0.0, 1.0, 301).expect("valid grid");

        let result = solve_unobserved(&oscillator, &[1.0, 0.0], &grid, &Config::default());

        assert!(result.is_ok());
    }
}
