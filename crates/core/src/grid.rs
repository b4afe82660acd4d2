use thiserror::Error;

/// Errors that can occur when constructing a [`TimeGrid`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GridError {
    /// The grid has no points.
    #[error("time grid is empty")]
    Empty,

    /// A grid point is NaN or infinite.
    #[error("non-finite time {value} at index {index}")]
    NonFinite { index: usize, value: f64 },

    /// A grid point does not exceed its predecessor.
    #[error("time grid is not strictly increasing at index {index}: {previous} then {value}")]
    NotIncreasing {
        index: usize,
        previous: f64,
        value: f64,
    },

    /// The step passed to [`TimeGrid::uniform`] is not finite and positive.
    #[error("step must be finite and positive, got {step}")]
    InvalidStep { step: f64 },

    /// The interval endpoints are non-finite or out of order.
    #[error("invalid span: start {start}, end {end}")]
    InvalidSpan { start: f64, end: f64 },

    /// [`TimeGrid::linspace`] needs at least two points.
    #[error("linspace needs at least 2 points, got {points}")]
    TooFewPoints { points: usize },
}

/// A non-empty, finite, strictly increasing sequence of evaluation times.
///
/// Integrators produce one state per grid point, so the grid fixes both the
/// step sizes and the length of the resulting trajectory. Validation happens
/// once at construction; a `TimeGrid` can't be malformed afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct TimeGrid {
    times: Vec<f64>,
}

impl TimeGrid {
    /// Creates a grid from explicit times.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if `times` is empty, contains a non-finite
    /// value, or is not strictly increasing.
    pub fn new(times: Vec<f64>) -> Result<Self, GridError> {
        if times.is_empty() {
            return Err(GridError::Empty);
        }

        for (index, &value) in times.iter().enumerate() {
            if !value.is_finite() {
                return Err(GridError::NonFinite { index, value });
            }
            if index > 0 {
                let previous = times[index - 1];
                if value <= previous {
                    return Err(GridError::NotIncreasing {
                        index,
                        previous,
                        value,
                    });
                }
            }
        }

        Ok(Self { times })
    }

    /// Creates an evenly spaced grid `start, start + step, ...` covering `end`.
    ///
    /// Points are computed as `start + i * step` rather than by accumulation.
    /// The number of intervals is `(end - start) / step` rounded to the
    /// nearest integer, so the last point lies within half a step of `end`
    /// and round-off never adds a spurious extra point. When `end == start`
    /// the grid holds the single point `start`.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if `step` is not finite and positive, if the
    /// endpoints are non-finite or `end < start`, or if `step` is too small
    /// to separate neighbouring points or yields more points than can be
    /// allocated.
    pub fn uniform(start: f64, end: f64, step: f64) -> Result<Self, GridError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(GridError::InvalidStep { step });
        }
        if !start.is_finite() || !end.is_finite() || end < start {
            return Err(GridError::InvalidSpan { start, end });
        }

        // Neighbouring points must stay distinct at both ends of the span.
        let unresolved = start + step <= start || end - step >= end;

        let intervals = ((end - start) / step).round();
        #[allow(clippy::cast_precision_loss)]
        let limit = usize::MAX as f64;
        if unresolved || !intervals.is_finite() || intervals >= limit {
            return Err(GridError::InvalidStep { step });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let intervals = intervals as usize;

        let mut times = Vec::new();
        if times.try_reserve_exact(intervals + 1).is_err() {
            return Err(GridError::InvalidStep { step });
        }

        #[allow(clippy::cast_precision_loss)]
        let points = (0..=intervals).map(|i| start + i as f64 * step);
        times.extend(points);

        Self::new(times)
    }

    /// Creates `points` evenly spaced times from `start` to `end` inclusive.
    ///
    /// The last point equals `end` exactly.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if `points < 2`, or if the endpoints are
    /// non-finite or not increasing.
    pub fn linspace(start: f64, end: f64, points: usize) -> Result<Self, GridError> {
        if points < 2 {
            return Err(GridError::TooFewPoints { points });
        }
        if !start.is_finite() || !end.is_finite() || end <= start {
            return Err(GridError::InvalidSpan { start, end });
        }

        #[allow(clippy::cast_precision_loss)]
        let last = (points - 1) as f64;
        let width = end - start;

        #[allow(clippy::cast_precision_loss)]
        let times = (0..points)
            .map(|i| {
                if i == points - 1 {
                    end
                } else {
                    start + width * (i as f64 / last)
                }
            })
            .collect();

        Self::new(times)
    }

    /// Returns the number of grid points (always at least one).
    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns the first time.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.times[0]
    }

    /// Returns the last time.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.times[self.times.len() - 1]
    }

    /// Returns the grid times as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.times
    }

    /// Returns the step sizes `t[i] - t[i-1]`, one per interval.
    pub fn steps(&self) -> impl Iterator<Item = f64> + '_ {
        self.times.windows(2).map(|pair| pair[1] - pair[0])
    }
}

impl TryFrom<Vec<f64>> for TimeGrid {
    type Error = GridError;

    fn try_from(times: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(times)
    }
}

impl From<TimeGrid> for Vec<f64> {
    fn from(grid: TimeGrid) -> Self {
        grid.times
    }
}

impl AsRef<[f64]> for TimeGrid {
    fn as_ref(&self) -> &[f64] {
        &self.times
    }
}
