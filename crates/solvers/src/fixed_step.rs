//! Fixed-step integration of `y' = f(x, y)` across a domain.
//!
//! Starting from `(x0, y0)`, the integrator repeatedly applies a [`Stepper`]
//! with a constant step `h` until the domain endpoint `X` is reached:
//!
//! ```text
//! (x, y) = (x0, y0)
//! while x has not reached X:
//!     (x, y) = step(x, y, h)
//! ```
//!
//! The `i`-th point sits at `x0 + i·h`, computed from the step index so
//! rounding does not accumulate. A point within a few ULPs of `X` is snapped
//! onto `X`. With `N` steps across the domain the trajectory therefore has
//! exactly `N + 1` points and ends exactly at `X`. Otherwise the last point
//! satisfies `X <= x < X + h`.
//!
//! # Example
//!
//! ```
//! use odestep_core::Config;
//! use odestep_solvers::{fixed_step, methods::Method};
//!
//! let config = Config::with_steps(1.0, 2.0, 10.0, 90).unwrap();
//! let f = |x: f64, y: f64| 1.0 + 2.0 * y / x;
//!
//! let solution = fixed_step::solve_unobserved(&Method::Euler, &f, &config);
//!
//! assert_eq!(solution.trajectory.len(), 91);
//! ```

mod action;
mod event;
mod solution;

pub use action::Action;
pub use event::Event;
pub use solution::{Solution, Status};

use odestep_core::{Config, Derivative, Observer, Point, Stepper, Trajectory};
use tracing::warn;

/// Distance from the endpoint, in ULPs of the domain's magnitude, within which
/// a point is snapped onto it.
const SNAP_ULPS: f64 = 16.0;

/// Integrates across the config's domain with the given method.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial point and after each
/// integration step, and may return [`Action::StopEarly`] to terminate early.
///
/// Non-finite values returned by `f` are not trapped; they propagate into the
/// trajectory. Use [`Trajectory::is_finite`] (or an observer) to detect them.
pub fn solve<S, F, Obs>(stepper: &S, f: &F, config: &Config, mut observer: Obs) -> Solution
where
    S: Stepper + ?Sized,
    F: Derivative + ?Sized,
    Obs: Observer<Event, Action>,
{
    let h = config.h();
    let x_end = config.x_end();
    let start = config.start();

    let mut trajectory = Trajectory::with_capacity(expected_len(start.x, x_end, h));
    trajectory.push(start);

    let event = Event {
        step: 0,
        point: start,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Solution {
            status: Status::StoppedByObserver,
            trajectory,
            steps: 0,
        };
    }

    let slack = SNAP_ULPS * f64::EPSILON * start.x.abs().max(x_end.abs());
    let mut current = start;
    let mut step = 0;

    while current.x < x_end {
        let stepped = stepper.step(f, current, h);
        #[allow(clippy::cast_precision_loss)]
        let x = start.x + (step + 1) as f64 * h;

        if x.partial_cmp(&current.x) != Some(std::cmp::Ordering::Greater) {
            warn!(
                method = stepper.name(),
                x = current.x,
                h,
                "step did not advance x, stopping"
            );
            return Solution {
                status: Status::Stalled,
                trajectory,
                steps: step,
            };
        }

        let x = if (x - x_end).abs() <= slack { x_end } else { x };
        let next = Point::new(x, stepped.y);

        step += 1;
        trajectory.push(next);

        let event = Event { step, point: next };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Solution {
                status: Status::StoppedByObserver,
                trajectory,
                steps: step,
            };
        }

        current = next;
    }

    Solution {
        status: Status::Complete,
        trajectory,
        steps: step,
    }
}

/// Integrates across the config's domain without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
pub fn solve_unobserved<S, F>(stepper: &S, f: &F, config: &Config) -> Solution
where
    S: Stepper + ?Sized,
    F: Derivative + ?Sized,
{
    solve(stepper, f, config, ())
}

/// Integrates from `start` to `x_end` with step `h`, without validation.
///
/// This is the permissive entry point for callers holding raw parameters:
///
/// - A step that is zero (or negative, or not finite) yields an empty
///   trajectory rather than an error.
/// - An endpoint at or before `start.x` yields just the initial point. This
///   includes `x_end == start.x`, where a literal `while x <= X` loop would
///   still take one step past the endpoint.
///
/// Prefer [`solve`] with a validated [`Config`] when bad input should be
/// reported instead.
#[must_use]
pub fn integrate<S, F>(stepper: &S, f: &F, start: Point, x_end: f64, h: f64) -> Trajectory
where
    S: Stepper + ?Sized,
    F: Derivative + ?Sized,
{
    if !(h.is_finite() && h > 0.0) {
        return Trajectory::new();
    }

    match Config::with_step(start.x, start.y, x_end, h) {
        Ok(config) => solve_unobserved(stepper, f, &config).trajectory,
        Err(_) => Trajectory::from(vec![start]),
    }
}

/// Number of points the trajectory is expected to hold, for preallocation.
fn expected_len(x0: f64, x_end: f64, h: f64) -> usize {
    let steps = ((x_end - x0) / h).ceil();
    if steps.is_finite() && steps >= 0.0 && steps < 1e7 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = steps as usize;
        steps + 1
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::methods::{Euler, Heun, Method, RungeKutta4};

    fn reference_problem(x: f64, y: f64) -> f64 {
        1.0 + 2.0 * y / x
    }

    #[test]
    fn second_point_is_one_euler_step() {
        let config = Config::with_step(1.0, 2.0, 10.0, 0.1).unwrap();

        let solution = solve_unobserved(&Euler, &reference_problem, &config);

        let second = solution.trajectory.points()[1];
        assert_relative_eq!(second.x, 1.1);
        assert_relative_eq!(second.y, 2.5);
    }

    #[test]
    fn step_count_gives_n_plus_one_points() {
        for n in [1, 7, 20, 90, 333] {
            let config = Config::with_steps(1.0, 2.0, 10.0, n).unwrap();

            let solution = solve_unobserved(&Method::Heun, &reference_problem, &config);

            assert_eq!(solution.status, Status::Complete);
            assert_eq!(solution.steps, n);
            assert_eq!(solution.trajectory.len(), n + 1);
            let last = solution.trajectory.last().unwrap();
            assert_relative_eq!(last.x, 10.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn endpoint_overshoots_by_less_than_h() {
        let h = 0.4;
        let config = Config::with_step(1.0, 2.0, 10.0, h).unwrap();

        let solution = solve_unobserved(&Euler, &reference_problem, &config);

        let last = solution.trajectory.last().unwrap();
        assert!(last.x >= 10.0);
        assert!(last.x < 10.0 + h);
        assert_eq!(solution.trajectory.len(), 24);
    }

    #[test]
    fn step_count_ends_exactly_at_endpoint() {
        for n in 1..=300 {
            let config = Config::with_steps(1.0, 2.0, 10.0, n).unwrap();

            let trajectory = solve_unobserved(&Euler, &reference_problem, &config).trajectory;

            assert_eq!(trajectory.len(), n + 1, "n = {n}");
            assert_eq!(trajectory.last().map(|last| last.x), Some(10.0), "n = {n}");
        }
    }

    #[test]
    fn endpoint_is_covered() {
        for h in [0.1, 0.3, 0.45, 0.7, 1.0, 2.5, 9.0, 0.123_456_7] {
            let config = Config::with_step(1.0, 2.0, 10.0, h).unwrap();

            let trajectory = solve_unobserved(&RungeKutta4, &reference_problem, &config).trajectory;

            let last = trajectory.last().unwrap();
            assert!(last.x >= 10.0 && last.x < 10.0 + h, "h = {h}, x = {}", last.x);
        }
    }

    #[test]
    fn endpoint_just_past_a_grid_point_takes_another_step() {
        let h = 0.3;
        let x_end = 1.0 + 30.0 * h + 3e-8;

        let trajectory = integrate(&Euler, &reference_problem, Point::new(1.0, 2.0), x_end, h);

        let last = trajectory.last().unwrap();
        assert_eq!(trajectory.len(), 32);
        assert!(last.x >= x_end && last.x < x_end + h, "x = {}", last.x);
    }

    #[test]
    fn points_sit_on_the_step_grid() {
        let config = Config::with_step(1.0, 2.0, 10.0, 0.1).unwrap();

        let trajectory = solve_unobserved(&Heun, &reference_problem, &config).trajectory;

        assert_eq!(trajectory.len(), 91);
        for (i, point) in trajectory.iter().enumerate().skip(1).take(89) {
            assert_relative_eq!(point.x, 1.0 + i as f64 * 0.1, max_relative = 1e-15);
        }
    }

    #[test]
    fn zero_step_returns_empty_trajectory() {
        let trajectory = integrate(&Euler, &reference_problem, Point::new(1.0, 2.0), 10.0, 0.0);

        assert!(trajectory.is_empty());
    }

    #[test]
    fn negative_or_nan_step_returns_empty_trajectory() {
        let start = Point::new(1.0, 2.0);

        assert!(integrate(&Euler, &reference_problem, start, 10.0, -0.1).is_empty());
        assert!(integrate(&Euler, &reference_problem, start, 10.0, f64::NAN).is_empty());
    }

    #[test]
    fn endpoint_before_start_returns_initial_point() {
        let start = Point::new(1.0, 2.0);

        let trajectory = integrate(&Euler, &reference_problem, start, 0.5, 0.1);

        assert_eq!(trajectory.points(), &[start]);
    }

    #[test]
    fn endpoint_at_start_takes_no_step() {
        let start = Point::new(1.0, 2.0);

        let trajectory = integrate(&Euler, &reference_problem, start, 1.0, 0.1);

        assert_eq!(trajectory.points(), &[start]);
    }

    #[test]
    fn permissive_path_matches_validated_path() {
        let config = Config::with_step(1.0, 2.0, 10.0, 0.25).unwrap();

        let validated = solve_unobserved(&Method::RungeKutta4, &reference_problem, &config);
        let permissive = integrate(
            &Method::RungeKutta4,
            &reference_problem,
            config.start(),
            10.0,
            0.25,
        );

        assert_eq!(validated.trajectory, permissive);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let config = Config::with_steps(1.0, 2.0, 10.0, 50).unwrap();

        for method in Method::ALL {
            let first = solve_unobserved(&method, &reference_problem, &config);
            let second = solve_unobserved(&method, &reference_problem, &config);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn observer_can_stop_early() {
        let config = Config::with_steps(0.0, 1.0, 1.0, 100).unwrap();

        let observer = |event: &Event| {
            if event.step >= 5 {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let solution = solve(&Euler, &|_x: f64, y: f64| y, &config, observer);

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 5);
        assert_eq!(solution.trajectory.len(), 6);
    }

    #[test]
    fn step_numbers_start_at_zero() {
        let config = Config::with_steps(0.0, 0.0, 1.0, 4).unwrap();

        let mut steps = Vec::new();
        solve(&Euler, &|_x: f64, _y: f64| 1.0, &config, |event: &Event| {
            steps.push(event.step);
            None
        });

        assert_eq!(steps, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn non_finite_values_propagate() {
        let config = Config::with_steps(-1.0, 1.0, 1.0, 4).unwrap();

        // Singular at x = 0, which is the third point.
        let solution = solve_unobserved(&Euler, &|x: f64, y: f64| y / x, &config);

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.trajectory.len(), 5);
        assert!(solution.trajectory.points()[..3].iter().all(Point::is_finite));
        assert!(!solution.trajectory.is_finite());
    }

    #[test]
    fn stalls_when_step_is_below_resolution() {
        let config = Config::with_step(1e17, 0.0, 1e17 + 64.0, 1.0).unwrap();

        let solution = solve_unobserved(&Euler, &|_x: f64, _y: f64| 1.0, &config);

        assert_eq!(solution.status, Status::Stalled);
        assert_eq!(solution.trajectory.len(), 1);
    }
}
