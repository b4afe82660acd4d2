//! Root finders and fixed-step ODE integrators for strand.
//!
//! # Modules
//!
//! - [`equation`] — scalar root finding ([`equation::bisection`],
//!   [`equation::newton`])
//! - [`transient`] — fixed-step integration of `dy/dt = f(y, t)` over a
//!   [`TimeGrid`] ([`transient::euler`], [`transient::rk4`],
//!   [`transient::leapfrog`])
//! - [`batch`] — helpers for parameter sweeps built from independent solves
//!
//! Every solver is a pure function of its arguments. Each one comes in two
//! flavours: `solve`, which reports progress to an [`Observer`], and
//! `solve_unobserved`, which doesn't.
//!
//! # Features
//!
//! - `parallel` — [`batch::map_ordered`] dispatches on a `rayon` thread pool.
//! - `serde` — configs, traces, solutions and trajectories derive
//!   `Serialize` and `Deserialize`.
//!
//! [`TimeGrid`]: strand_core::TimeGrid
//! [`Observer`]: strand_core::Observer

pub mod batch;
pub mod equation;
pub mod transient;
