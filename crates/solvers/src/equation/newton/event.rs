/// Iteration event emitted by the Newton–Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Iterate the step was taken from.
    pub x: f64,
    /// Function value at `x`.
    pub value: f64,
    /// Derivative at `x`.
    pub derivative: f64,
    /// The new iterate `x - value / derivative`.
    pub next: f64,
}

impl Event {
    /// Returns the step length `|next - x|`.
    #[must_use]
    pub fn step(&self) -> f64 {
        (self.next - self.x).abs()
    }
}

/// Control actions supported by the Newton–Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the newest iterate.
    StopEarly,
}
