use odestep_core::{Config, ConfigError, Derivative, ExactSolution, StepSize, Stepper};

use crate::fixed_step;

use super::ErrorSeries;

/// Computes the global error at the domain endpoint for `N = 1..=n_max`.
///
/// For each `N`, the config is re-keyed to `N` steps across the same domain,
/// the method is integrated, and `exact(X) - y_last` is recorded. The step
/// size the config was built with is ignored.
///
/// An `n_max` of zero yields an empty series.
///
/// # Errors
///
/// Returns an error if re-keying the config to `N` steps fails, which happens
/// only when the domain is too narrow for `h` to stay positive.
pub fn global_error<S, D>(
    stepper: &S,
    df: &D,
    config: &Config,
    n_max: usize,
) -> Result<ErrorSeries<usize>, ConfigError>
where
    S: Stepper + ?Sized,
    D: Derivative + ExactSolution + ?Sized,
{
    let exact_end = df.exact(config.x_end());

    (1..=n_max)
        .map(|n| {
            let config = config.with_step_size(StepSize::Count(n))?;
            let solution = fixed_step::solve_unobserved(stepper, df, &config);
            let y_end = solution.trajectory.last().map_or(f64::NAN, |point| point.y);
            Ok::<_, ConfigError>((n, exact_end - y_end))
        })
        .collect()
}

/// Estimates the empirical convergence order from a global error series.
///
/// Compares the error at `n` steps with the error at `2n` steps:
///
/// ```text
/// order ≈ log2(|e(n)| / |e(2n)|)
/// ```
///
/// Returns `None` if either entry is missing, zero, or non-finite.
#[must_use]
pub fn observed_order(series: &ErrorSeries<usize>, n: usize) -> Option<f64> {
    let coarse = series.get(&n)?.abs();
    let fine = series.get(&n.checked_mul(2)?)?.abs();

    let order = (coarse / fine).log2();
    (coarse > 0.0 && fine > 0.0 && order.is_finite()).then_some(order)
}
