use thiserror::Error;

/// Errors that can occur during integration.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// The vector field returned a derivative of the wrong length.
    #[error("vector field returned {found} components for a state of {expected} at t = {t}")]
    DimensionMismatch { t: f64, expected: usize, found: usize },

    /// Leapfrog needs a state split evenly into positions and velocities.
    #[error("leapfrog state must have even length, got {len}")]
    OddStateLength { len: usize },

    /// Leapfrog needs evenly spaced grid points.
    #[error("grid step {step} at index {index} differs from the first step {expected}")]
    NonUniformGrid {
        index: usize,
        step: f64,
        expected: f64,
    },
}
