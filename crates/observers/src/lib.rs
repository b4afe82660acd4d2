//! Reusable observers for strand solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the root finders and integrators in `strand-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasIteration`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`] — forwards every event to the `log` facade
//! - [`ResidualBelow`] — stops a root finder once `|f(x)|` is small enough
//! - [`SeriesObserver`] — collects `(x, y)` series for later plotting
//!
//! [`Observer`]: strand_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasIteration`]: traits::HasIteration
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod logging;
mod residual;
mod series;

pub use logging::LogObserver;
pub use residual::ResidualBelow;
pub use series::{Plottable, SeriesObserver};
