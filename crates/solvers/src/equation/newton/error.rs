use thiserror::Error;

/// Errors that can occur during Newton–Raphson solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("initial guess must be finite, got {value}")]
    NonFiniteGuess { value: f64 },

    /// The derivative is exactly zero, so the Newton step is undefined.
    #[error("derivative is zero at x = {x} (iteration {iter})")]
    SingularDerivative { x: f64, iter: usize },

    #[error("non-finite {what} {value} at x = {x} (iteration {iter})")]
    NonFiniteValue {
        what: &'static str,
        x: f64,
        value: f64,
        iter: usize,
    },
}
