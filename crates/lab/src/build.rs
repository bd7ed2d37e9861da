use odestep_core::{Config, ConfigError, Derivative, ExactSolution, Point, Stepper, Trajectory};
use odestep_observers::TraceObserver;
use odestep_solvers::{
    analysis::{global_error, local_error},
    fixed_step::{self, Status},
    methods::Method,
};
use tracing::{debug, warn};

use crate::{Approximations, Error, GlobalErrors, LocalErrors, Preset, Results};

/// Runs a full build for a preset problem.
///
/// Every series is recomputed from scratch; nothing is carried over from
/// earlier builds, so identical inputs always give identical results.
///
/// # Errors
///
/// Returns an error if the preset is undefined at the config's start point, or
/// if the domain cannot be re-keyed for the global error sweep.
pub fn build(
    problem: Preset,
    config: &Config,
    methods: &[Method],
    n_max: usize,
) -> Result<Results, Error> {
    let df = problem.function(config.start())?;
    debug!(%problem, h = config.h(), n_max, "building");

    let approximations = approximations(&df, config, methods);
    let global = global_errors(&df, config, methods, n_max)?;
    let local = local_errors(&df, &approximations);

    Ok(Results {
        approximations,
        global,
        local,
    })
}

/// Integrates each method across the config's domain and evaluates the exact
/// solution over the same x-values.
///
/// Trajectories containing non-finite points are kept as they are; a warning
/// is logged so the caller can decide whether the data is usable.
pub fn approximations<D>(df: &D, config: &Config, methods: &[Method]) -> Approximations
where
    D: Derivative + ExactSolution + ?Sized,
{
    let domain = domain(config);
    let exact = domain
        .iter()
        .map(|&x| Point::new(x, df.exact(x)))
        .collect();

    let trajectories = methods
        .iter()
        .map(|&method| {
            let observer = TraceObserver::new(method.name());
            let solution = fixed_step::solve(&method, df, config, observer);
            if solution.status != Status::Complete {
                warn!(%method, status = ?solution.status, "integration did not complete");
            }
            if !solution.trajectory.is_finite() {
                warn!(%method, "trajectory contains non-finite values");
            }
            (method, solution.trajectory)
        })
        .collect();

    Approximations {
        config: *config,
        domain,
        exact,
        trajectories,
    }
}

/// Computes the endpoint error for `N = 1..=n_max` for each method.
///
/// # Errors
///
/// Returns an error if the domain cannot be split into `N` positive steps.
pub fn global_errors<D>(
    df: &D,
    config: &Config,
    methods: &[Method],
    n_max: usize,
) -> Result<GlobalErrors, ConfigError>
where
    D: Derivative + ExactSolution + ?Sized,
{
    let series = methods
        .iter()
        .map(|&method| global_error(&method, df, config, n_max).map(|series| (method, series)))
        .collect::<Result<_, _>>()?;

    Ok(GlobalErrors {
        config: *config,
        n_max,
        series,
    })
}

/// Computes the local error along each trajectory of a build.
pub fn local_errors<E>(exact: &E, approximations: &Approximations) -> LocalErrors
where
    E: ExactSolution + ?Sized,
{
    let series = approximations
        .trajectories
        .iter()
        .map(|(&method, trajectory)| (method, local_error(exact, trajectory)))
        .collect();

    LocalErrors {
        config: approximations.config,
        series,
    }
}

/// The x-values the integrator visits for this config.
///
/// Every method visits the same `x0 + i·h` grid, so integrating a zero slope
/// yields the shared domain.
fn domain(config: &Config) -> Vec<f64> {
    let flat = |_x: f64, _y: f64| 0.0;
    let trajectory: Trajectory =
        fixed_step::solve_unobserved(&Method::Euler, &flat, config).trajectory;
    trajectory.xs()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn reference_config() -> Config {
        Config::with_step(1.0, 2.0, 10.0, 0.1).unwrap()
    }

    #[test]
    fn domain_is_shared_by_every_method() {
        let results = build(Preset::Linear, &reference_config(), &Method::ALL, 10).unwrap();
        let approximations = &results.approximations;

        assert_eq!(approximations.domain.len(), 91);
        assert_eq!(approximations.exact.xs(), approximations.domain);
        for trajectory in approximations.trajectories.values() {
            assert_eq!(trajectory.xs(), approximations.domain);
        }
    }

    #[test]
    fn exact_curve_passes_through_start() {
        let results = build(Preset::Linear, &reference_config(), &Method::ALL, 10).unwrap();

        let first = results.approximations.exact.first().unwrap();
        assert_relative_eq!(first.y, 2.0);
    }

    #[test]
    fn series_follow_enabled_methods() {
        let methods = [Method::RungeKutta4, Method::Euler];

        let results = build(Preset::Exponential, &reference_config(), &methods, 5).unwrap();

        let keys: Vec<Method> = results.global.series.keys().copied().collect();
        assert_eq!(keys, vec![Method::Euler, Method::RungeKutta4]);
        assert_eq!(results.local.series.len(), 2);
        assert_eq!(results.approximations.trajectories.len(), 2);
    }

    #[test]
    fn local_series_cover_each_trajectory() {
        let results = build(Preset::Logistic, &reference_config(), &Method::ALL, 4).unwrap();

        for (method, series) in &results.local.series {
            let trajectory = &results.approximations.trajectories[method];
            assert_eq!(series.len(), trajectory.len());
            assert_eq!(series.first().map(|sample| sample.error), Some(0.0));
        }
    }

    #[test]
    fn singular_preset_aborts_build() {
        let config = Config::with_steps(0.0, 1.0, 1.0, 10).unwrap();

        let result = build(Preset::Linear, &config, &Method::ALL, 10);

        assert!(matches!(result, Err(Error::Problem(_))));
    }
}
