/// A single iteration of a root-finding solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceRecord {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Root estimate produced by the iteration (midpoint or new iterate).
    pub x: f64,
    /// Error measure selected by the solver's [`ErrorMetric`](super::ErrorMetric).
    pub error: f64,
}

/// The ordered, append-only record of a solve's iterations.
///
/// Solvers push exactly one record per completed iteration, so the trace
/// never holds more than `max_iters` records.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationTrace {
    records: Vec<TraceRecord>,
}

impl IterationTrace {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, iter: usize, x: f64, error: f64) {
        self.records.push(TraceRecord { iter, x, error });
    }

    /// Returns the number of recorded iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no iterations were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the records in iteration order.
    #[must_use]
    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    /// Returns the most recent record, if any.
    #[must_use]
    pub fn last(&self) -> Option<&TraceRecord> {
        self.records.last()
    }

    /// Returns the recorded error measures in iteration order.
    pub fn errors(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|record| record.error)
    }

    /// Returns the recorded root estimates in iteration order.
    pub fn estimates(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|record| record.x)
    }
}

impl<'a> IntoIterator for &'a IterationTrace {
    type Item = &'a TraceRecord;
    type IntoIter = std::slice::Iter<'a, TraceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
