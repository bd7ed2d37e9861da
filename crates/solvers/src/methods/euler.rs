use odestep_core::{Derivative, Point, Stepper};

/// Explicit (forward) Euler method.
///
/// Steps along the slope at the start of the interval:
///
/// ```text
/// y_{n+1} = y_n + h * f(x_n, y_n)
/// x_{n+1} = x_n + h
/// ```
///
/// First-order accurate: halving `h` roughly halves the global error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euler;

impl Stepper for Euler {
    fn step<F>(&self, f: &F, point: Point, h: f64) -> Point
    where
        F: Derivative + ?Sized,
    {
        let Point { x, y } = point;
        Point::new(x + h, y + h * f.derivative(x, y))
    }

    fn name(&self) -> &'static str {
        "euler"
    }

    fn order(&self) -> u32 {
        1
    }
}
