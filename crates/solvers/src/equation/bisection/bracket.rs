use crate::equation::opposite_signs;

use super::Error;

/// Ordered finite bounds for a bisection bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    pub(super) left: f64,
    pub(super) right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint is non-finite or the width is zero.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, Error> {
        let [left, right] = bracket;

        for value in [left, right] {
            if !value.is_finite() {
                return Err(Error::NonFiniteBracket { value });
            }
        }

        #[allow(clippy::float_cmp)]
        if left == right {
            return Err(Error::ZeroWidthBracket { value: left });
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }
}

/// Current bracket and the function value at its left end.
///
/// Only the left value is tracked: the update rule compares each midpoint
/// against the left end alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    left: f64,
    right: f64,
    left_value: f64,
}

impl Bracket {
    pub(super) fn new(bounds: Bounds, left_value: f64) -> Self {
        Self {
            left: bounds.left,
            right: bounds.right,
            left_value,
        }
    }

    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    pub(super) fn half_width(&self) -> f64 {
        0.5 * (self.right - self.left)
    }

    /// Replaces one end of the bracket with the midpoint `x`.
    ///
    /// If `value` and the left value have strictly opposite signs the root
    /// lies in the left half and `x` becomes the right end; otherwise `x`
    /// becomes the left end.
    pub(super) fn shrink(&mut self, x: f64, value: f64) {
        if opposite_signs(value, self.left_value) {
            self.right = x;
        } else {
            self.left = x;
            self.left_value = value;
        }
    }
}
