use log::{debug, trace};
use strand_core::{Observer, TimeGrid, VectorField};

use super::{Action, Error, Event, Status, Trajectory};

/// A fixed-step scheme that owns its working state.
pub(super) trait Stepper {
    /// Advances from `t0` to `t1` and returns the state to report at `t1`.
    fn advance(&mut self, t0: f64, t1: f64) -> Result<Vec<f64>, Error>;
}

/// Drives `stepper` across `grid`, recording and observing every state.
///
/// The initial state is recorded as a copy of `y0` and emitted as step 0
/// before the stepper is asked for anything.
pub(super) fn integrate<S, Obs>(
    method: &str,
    mut stepper: S,
    y0: &[f64],
    grid: &TimeGrid,
    mut observer: Obs,
) -> Result<Trajectory, Error>
where
    S: Stepper,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let times = grid.as_slice();
    let mut trajectory = Trajectory::with_capacity(times.len());

    let event = Event {
        step: 0,
        t: times[0],
        state: y0,
    };
    let action = observer.observe(&event);
    trajectory.push(times[0], y0.to_vec());

    if let Some(Action::StopEarly) = action {
        debug!("{method} stopped by observer at step 0");
        trajectory.status = Status::StoppedByObserver;
        return Ok(trajectory);
    }

    for (index, pair) in times.windows(2).enumerate() {
        let step = index + 1;
        let (t0, t1) = (pair[0], pair[1]);

        let state = stepper.advance(t0, t1)?;
        trace!("{method} step {step}: t = {t1}, y = {state:?}");

        let event = Event {
            step,
            t: t1,
            state: &state,
        };
        let action = observer.observe(&event);
        trajectory.push(t1, state);

        if let Some(Action::StopEarly) = action {
            debug!("{method} stopped by observer at step {step}, t = {t1}");
            trajectory.status = Status::StoppedByObserver;
            return Ok(trajectory);
        }
    }

    debug!(
        "{method} integrated {} steps to t = {}",
        times.len() - 1,
        grid.end()
    );
    Ok(trajectory)
}

/// Evaluates `field` and checks that the derivative matches the state length.
pub(super) fn evaluate<F>(field: &F, y: &[f64], t: f64) -> Result<Vec<f64>, Error>
where
    F: VectorField + ?Sized,
{
    let derivative = field.derivative(y, t);
    if derivative.len() == y.len() {
        Ok(derivative)
    } else {
        Err(Error::DimensionMismatch {
            t,
            expected: y.len(),
            found: derivative.len(),
        })
    }
}

/// Returns `y + scale * direction`.
pub(super) fn offset(y: &[f64], scale: f64, direction: &[f64]) -> Vec<f64> {
    y.iter()
        .zip(direction)
        .map(|(value, slope)| value + scale * slope)
        .collect()
}
