//! Core traits and types for strand.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`ScalarFunction`] — a real-valued function of one real variable
//! - [`VectorField`] — the time derivative of a state vector
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`TimeGrid`] — a validated, strictly increasing sequence of evaluation times

mod field;
mod function;
mod grid;
mod observer;

pub use field::VectorField;
pub use function::ScalarFunction;
pub use grid::{GridError, TimeGrid};
pub use observer::Observer;
