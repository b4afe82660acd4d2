//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so one
//! observer can drive several solvers.
//!
//! # Event traits
//!
//! - [`HasResidual`] — events that carry a function value at the current
//!   estimate
//! - [`HasIteration`] — events that carry an iteration or step counter
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use strand_core::Observer;
//! use strand_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use strand_solvers::{
    equation::{bisection, newton},
    transient,
};

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the function value at the solver's current estimate.
    fn residual(&self) -> f64;
}

/// An event that carries an iteration or step counter.
pub trait HasIteration {
    /// Returns the iteration (root finders, 1-based) or step (integrators,
    /// 0 for the initial state) that produced this event.
    fn iteration(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasResidual for bisection::Event {
    fn residual(&self) -> f64 {
        self.value
    }
}

impl HasResidual for newton::Event {
    fn residual(&self) -> f64 {
        self.value
    }
}

impl HasIteration for bisection::Event {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasIteration for newton::Event {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasIteration for transient::Event<'_> {
    fn iteration(&self) -> usize {
        self.step
    }
}

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for transient::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
