use odestep_core::{Observer, Point};
use tracing::debug;

use crate::traits::{CanStopEarly, HasPoint};

/// Stops integration at the first non-finite point.
///
/// The integrator itself never traps NaN or infinite values returned by a
/// derivative. Passing `&mut FiniteGuard` as the observer halts the run as
/// soon as one appears, and records where it happened for inspection
/// afterwards. The offending point is still the last point of the returned
/// trajectory.
///
/// # Example
///
/// ```
/// use odestep_core::Config;
/// use odestep_observers::FiniteGuard;
/// use odestep_solvers::{fixed_step, methods::Method};
///
/// let config = Config::with_steps(-1.0, 1.0, 1.0, 4).unwrap();
/// let mut guard = FiniteGuard::new();
///
/// fixed_step::solve(&Method::Euler, &|x: f64, y: f64| y / x, &config, &mut guard);
///
/// assert_eq!(guard.tripped().map(|(step, _)| step), Some(3));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FiniteGuard {
    tripped: Option<(usize, Point)>,
}

impl FiniteGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the step and point where the first non-finite value appeared.
    #[must_use]
    pub fn tripped(&self) -> Option<(usize, Point)> {
        self.tripped
    }

    /// Returns `true` if no non-finite point has been observed.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.tripped.is_none()
    }

    fn check<E: HasPoint, A: CanStopEarly>(&mut self, event: &E) -> Option<A> {
        let point = event.point();
        if point.is_finite() {
            return None;
        }

        debug!(step = event.step(), x = point.x, y = point.y, "non-finite point, stopping");
        self.tripped.get_or_insert((event.step(), point));
        Some(A::stop_early())
    }
}

impl<E: HasPoint, A: CanStopEarly> Observer<E, A> for FiniteGuard {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.check(event)
    }
}

impl<E: HasPoint, A: CanStopEarly> Observer<E, A> for &mut FiniteGuard {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.check(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use odestep_core::Config;
    use odestep_solvers::{
        fixed_step::{self, Status},
        methods::Method,
    };

    #[test]
    fn stays_clear_for_finite_runs() {
        let config = Config::with_steps(1.0, 2.0, 10.0, 20).unwrap();
        let mut guard = FiniteGuard::new();

        let solution = fixed_step::solve(
            &Method::RungeKutta4,
            &|x: f64, y: f64| 1.0 + 2.0 * y / x,
            &config,
            &mut guard,
        );

        assert_eq!(solution.status, Status::Complete);
        assert!(guard.is_clear());
    }

    #[test]
    fn stops_at_first_non_finite_point() {
        // The derivative is singular at x = 0, reached after two steps.
        let config = Config::with_steps(-1.0, 1.0, 1.0, 4).unwrap();
        let mut guard = FiniteGuard::new();

        let solution = fixed_step::solve(
            &Method::Euler,
            &|x: f64, y: f64| y / x,
            &config,
            &mut guard,
        );

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 3);

        let (step, point) = guard.tripped().expect("guard should trip");
        assert_eq!(step, 3);
        assert!(point.y.is_nan());
        assert_eq!(solution.trajectory.last().map(|last| last.x), Some(point.x));
    }
}
