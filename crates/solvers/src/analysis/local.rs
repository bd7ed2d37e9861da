use odestep_core::{ExactSolution, Trajectory};

use super::ErrorSeries;

/// Computes `exact(x_i) - y_i` at every point of a trajectory.
#[must_use]
pub fn pointwise_error<E>(exact: &E, trajectory: &Trajectory) -> ErrorSeries<f64>
where
    E: ExactSolution + ?Sized,
{
    trajectory
        .iter()
        .map(|point| (point.x, exact.exact(point.x) - point.y))
        .collect()
}

/// Computes the local (per-step) error along a trajectory.
///
/// With `e_i = exact(x_i) - y_i` the pointwise error:
///
/// ```text
/// local(x_0) = 0
/// local(x_i) = e_i - e_{i-1}    for i > 0
/// ```
///
/// An empty trajectory yields an empty series.
#[must_use]
pub fn local_error<E>(exact: &E, trajectory: &Trajectory) -> ErrorSeries<f64>
where
    E: ExactSolution + ?Sized,
{
    let pointwise = pointwise_error(exact, trajectory);

    let mut previous: Option<f64> = None;
    pointwise
        .iter()
        .map(|sample| {
            let local = previous.map_or(0.0, |prev| sample.error - prev);
            previous = Some(sample.error);
            (sample.at, local)
        })
        .collect()
}
