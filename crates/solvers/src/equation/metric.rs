/// The error measure recorded in an [`IterationTrace`](super::IterationTrace).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorMetric {
    /// The solver's own progress measure.
    ///
    /// Bisection records the bracket half-width, Newton the step length
    /// `|x_{k+1} - x_k|`. Both are available without knowing the root.
    #[default]
    Progress,

    /// Magnitude of the function at the point evaluated in the iteration.
    ///
    /// For bisection that is the midpoint, for Newton the iterate the step
    /// was taken from.
    Residual,

    /// Distance from the new estimate to a known reference root.
    ///
    /// Only meaningful when the root is known in advance, e.g. when
    /// characterizing convergence rates on a test problem.
    DistanceTo(f64),
}
