//! Fixed-step integrators for `dy/dt = f(y, t)`.
//!
//! Every integrator advances a state vector across a [`TimeGrid`], producing
//! one state per grid point. The first state is `y0` itself, so a completed
//! [`Trajectory`] always has `grid.len()` states.
//!
//! # Integrators
//!
//! - [`euler`]: forward Euler, first order, one evaluation per step
//! - [`rk4`]: classical Runge–Kutta, fourth order, four evaluations per step
//! - [`leapfrog`]: staggered kick-drift scheme for second-order systems,
//!   bounded energy error over long integrations
//!
//! None of them adapts the step size or guards against instability: a step
//! that is too large for the system simply produces a diverging trajectory.
//!
//! [`TimeGrid`]: strand_core::TimeGrid

mod error;
mod event;
mod stepper;
mod trajectory;

pub mod euler;
pub mod leapfrog;
pub mod rk4;

pub use error::Error;
pub use event::{Action, Event};
pub use trajectory::{Status, Trajectory};
