use thiserror::Error;

/// Errors that can occur during bisection solving.
///
/// All of these are detected before or at the evaluation that triggers
/// them; the solver never retries.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("bracket has zero width: left and right are both {value}")]
    ZeroWidthBracket { value: f64 },

    #[error("bracket contains non-finite value: {value}")]
    NonFiniteBracket { value: f64 },

    #[error("no sign change in bracket: f({left})={left_value}, f({right})={right_value}")]
    InvalidBracket {
        left: f64,
        right: f64,
        left_value: f64,
        right_value: f64,
    },

    #[error("non-finite function value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },
}
