/// Iteration event emitted by the bisection solver.
///
/// Emitted once per midpoint evaluation, before the convergence check and
/// the bracket update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Bracket that was bisected, as `[left, right]`.
    pub bracket: [f64; 2],
    /// The midpoint.
    pub x: f64,
    /// Function value at the midpoint.
    pub value: f64,
}

impl Event {
    /// Returns half the width of the bisected bracket.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        0.5 * (self.bracket[1] - self.bracket[0])
    }
}

/// Control actions supported by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the current midpoint.
    StopEarly,
}
