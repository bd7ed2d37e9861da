use odestep_core::{Derivative, Point, Stepper};

/// Heun's method (improved Euler).
///
/// A predictor-corrector method that averages the slope at the start of the
/// interval with the slope at an Euler-predicted endpoint.
///
/// # Algorithm
///
/// ```text
/// k1 = f(x, y)
/// k2 = f(x + h, y + h * k1)
/// y' = y + (h / 2) * (k1 + k2)
/// x' = x + h
/// ```
///
/// Second-order accurate with two slope evaluations per step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Heun;

impl Stepper for Heun {
    fn step<F>(&self, f: &F, point: Point, h: f64) -> Point
    where
        F: Derivative + ?Sized,
    {
        let Point { x, y } = point;

        let k1 = f.derivative(x, y);
        let k2 = f.derivative(x + h, y + h * k1);

        Point::new(x + h, y + 0.5 * h * (k1 + k2))
    }

    fn name(&self) -> &'static str {
        "heun"
    }

    fn order(&self) -> u32 {
        2
    }
}
