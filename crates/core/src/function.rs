/// The right-hand side `f(x, y)` of an ODE in explicit form `y' = f(x, y)`.
///
/// Closures of the form `Fn(f64, f64) -> f64` implement this trait, so most
/// callers never implement it by hand.
pub trait Derivative {
    /// Evaluates `f(x, y)`.
    fn derivative(&self, x: f64, y: f64) -> f64;
}

impl<F> Derivative for F
where
    F: Fn(f64, f64) -> f64,
{
    fn derivative(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// A closed-form solution `y(x)` used as the reference for error analysis.
pub trait ExactSolution {
    /// Evaluates `y(x)`.
    fn exact(&self, x: f64) -> f64;
}

impl<F> ExactSolution for F
where
    F: Fn(f64) -> f64,
{
    fn exact(&self, x: f64) -> f64 {
        self(x)
    }
}

/// An ODE paired with its exact solution.
///
/// Both callables are trusted: no validation is performed on what they
/// return, and NaN or infinite values propagate unmodified into trajectories
/// and error series.
///
/// # Example
///
/// ```
/// use odestep_core::{Derivative, DifferentialFunction, ExactSolution};
///
/// // y' = 1 + 2y/x through (1, 2) has the solution y = 3x² - x.
/// let df = DifferentialFunction::new(|x: f64| 3.0 * x * x - x, |x: f64, y: f64| 1.0 + 2.0 * y / x);
///
/// assert_eq!(df.exact(2.0), 10.0);
/// assert_eq!(df.derivative(1.0, 2.0), 5.0);
/// ```
#[derive(Clone, Copy)]
pub struct DifferentialFunction<E, D> {
    exact: E,
    derivative: D,
}

impl<E, D> DifferentialFunction<E, D>
where
    E: Fn(f64) -> f64,
    D: Fn(f64, f64) -> f64,
{
    pub fn new(exact: E, derivative: D) -> Self {
        Self { exact, derivative }
    }
}

impl<E, D> Derivative for DifferentialFunction<E, D>
where
    D: Fn(f64, f64) -> f64,
{
    fn derivative(&self, x: f64, y: f64) -> f64 {
        (self.derivative)(x, y)
    }
}

impl<E, D> ExactSolution for DifferentialFunction<E, D>
where
    E: Fn(f64) -> f64,
{
    fn exact(&self, x: f64) -> f64 {
        (self.exact)(x)
    }
}

impl<E, D> std::fmt::Debug for DifferentialFunction<E, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DifferentialFunction").finish_non_exhaustive()
    }
}
