//! Series collection for plotting solver behavior.
//!
//! See [`SeriesObserver`] and [`Plottable`] for usage.

use strand_core::Observer;
use strand_solvers::{
    equation::{bisection, newton},
    transient,
};

/// Extracts plottable data from a solver event.
///
/// Return `None` from [`x`][Plottable::x] to skip the event entirely; return
/// `None` in a trace slot to skip that trace for the event.
///
/// Implemented for the strand solver events:
///
/// - `bisection::Event` and `newton::Event` as `Plottable<2>`: iteration
///   against `[estimate, |f(estimate)|]`
/// - `transient::Event` as `Plottable<N>` for any `N`: time against the
///   first `N` state components
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    ///
    /// `None` in a slot skips that trace for this event while leaving others
    /// unaffected.
    fn traces(&self) -> [Option<f64>; N];
}

/// An observer that collects `N` named `(x, y)` series during a solve.
///
/// Record data by either:
///
/// - **Direct path** — pass `&mut SeriesObserver` as the solver observer.
///   Works for any event implementing [`Plottable<N>`][Plottable].
/// - **Closure path** — wrap `&mut SeriesObserver` in a closure and call
///   [`record`][SeriesObserver::record] with whatever the event carries.
///
/// The collected points can then be handed to any plotting or export tool.
///
/// # Example
///
/// ```
/// use strand_core::TimeGrid;
/// use strand_observers::SeriesObserver;
/// use strand_solvers::transient::rk4;
///
/// let oscillator = |y: &[f64], _t: f64| vec![y[1], -y[0]];
/// let grid = TimeGrid::uniform(0.0, 1.0, 0.1)?;
/// let mut series = SeriesObserver::<2>::new(["position", "velocity"]);
///
/// rk4::solve(&oscillator, &[1.0, 0.0], &grid, &mut series)?;
///
/// assert_eq!(series.points(0).len(), grid.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct SeriesObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> SeriesObserver<N> {
    /// Creates a new `SeriesObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Returns the trace names.
    #[must_use]
    pub fn names(&self) -> &[String; N] {
        &self.names
    }

    /// Returns the points recorded for trace `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= N`.
    #[must_use]
    pub fn points(&self, i: usize) -> &[[f64; 2]] {
        &self.data[i]
    }

    /// Consumes the observer and returns `(name, points)` for every trace.
    #[must_use]
    pub fn into_series(self) -> Vec<(String, Vec<[f64; 2]>)> {
        self.names.into_iter().zip(self.data).collect()
    }
}

impl<const N: usize, E, A> Observer<E, A> for SeriesObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut SeriesObserver<N>` to be passed to solvers that take an
/// observer by value, so the series can be read after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut SeriesObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[allow(clippy::cast_precision_loss)]
impl Plottable<2> for bisection::Event {
    fn x(&self) -> Option<f64> {
        Some(self.iter as f64)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(self.x), Some(self.value.abs())]
    }
}

#[allow(clippy::cast_precision_loss)]
impl Plottable<2> for newton::Event {
    fn x(&self) -> Option<f64> {
        Some(self.iter as f64)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(self.x), Some(self.value.abs())]
    }
}

impl<const N: usize> Plottable<N> for transient::Event<'_> {
    fn x(&self) -> Option<f64> {
        Some(self.t)
    }

    fn traces(&self) -> [Option<f64>; N] {
        std::array::from_fn(|i| self.state.get(i).copied())
    }
}
