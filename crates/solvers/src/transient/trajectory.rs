/// Indicates how the integrator terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Reached the last grid point.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The states produced by an integration, one per visited grid point.
///
/// The caller owns the trajectory outright; integrators keep no reference
/// to it once they return.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trajectory {
    /// How the integrator terminated.
    pub status: Status,
    times: Vec<f64>,
    states: Vec<Vec<f64>>,
}

impl Trajectory {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            status: Status::Complete,
            times: Vec::with_capacity(capacity),
            states: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, t: f64, state: Vec<f64>) {
        self.times.push(t);
        self.states.push(state);
    }

    /// Returns the number of stored states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true if no states are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns the grid times of the stored states.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the stored states in time order.
    #[must_use]
    pub fn states(&self) -> &[Vec<f64>] {
        &self.states
    }

    /// Returns the state at index `i`, if present.
    #[must_use]
    pub fn state(&self, i: usize) -> Option<&[f64]> {
        self.states.get(i).map(Vec::as_slice)
    }

    /// Returns the last stored state, if any.
    #[must_use]
    pub fn last_state(&self) -> Option<&[f64]> {
        self.states.last().map(Vec::as_slice)
    }

    /// Returns component `j` of every state, e.g. the position history.
    ///
    /// # Panics
    ///
    /// Panics if `j` is out of bounds for the state dimension.
    pub fn component(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        self.states.iter().map(move |state| state[j])
    }

    /// Returns `(t, state)` pairs in time order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &[f64])> + '_ {
        self.times
            .iter()
            .zip(&self.states)
            .map(|(&t, state)| (t, state.as_slice()))
    }

    /// Consumes the trajectory and returns its states.
    #[must_use]
    pub fn into_states(self) -> Vec<Vec<f64>> {
        self.states
    }
}
