/// Event emitted by an integrator for each reported state.
///
/// Step 0 is the initial state before any integration.
/// Steps `1..N` are emitted after each integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<'a> {
    /// The step number (0 for the initial state).
    pub step: usize,
    /// Grid time of the reported state.
    pub t: f64,
    /// The reported state.
    pub state: &'a [f64],
}

/// Control actions supported by the integrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop integrating and return the trajectory so far.
    StopEarly,
}
