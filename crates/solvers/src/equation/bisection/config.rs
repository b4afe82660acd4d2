use crate::equation::ErrorMetric;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Maximum number of midpoint evaluations.
    pub max_iters: usize,
    /// Converged once the bracket half-width drops below this value.
    pub tol: f64,
    /// Error measure recorded in the trace.
    pub metric: ErrorMetric,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 1000,
            tol: 1e-10,
            metric: ErrorMetric::Progress,
        }
    }
}

impl Config {
    /// Validates the tolerance and iteration limit.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is not finite and positive or if
    /// `max_iters` is zero.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.tol.is_finite() || self.tol <= 0.0 {
            return Err("tol must be finite and positive");
        }
        if self.max_iters == 0 {
            return Err("max_iters must be positive");
        }
        if let ErrorMetric::DistanceTo(reference) = self.metric {
            if !reference.is_finite() {
                return Err("reference root must be finite");
            }
        }
        Ok(())
    }
}
