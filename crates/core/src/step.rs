use crate::{Derivative, Point};

/// A single-step method for `y' = f(x, y)`.
///
/// Implementations are pure and stateless: given the current point and a step
/// size `h`, they return the next point with `x' = x + h`. Methods differ only
/// in how they combine slope evaluations to form `y'`.
pub trait Stepper {
    /// Returns the point reached by taking one step of size `h` from `point`.
    #[must_use]
    fn step<F>(&self, f: &F, point: Point, h: f64) -> Point
    where
        F: Derivative + ?Sized;

    /// The canonical name of the method.
    fn name(&self) -> &'static str;

    /// The order of accuracy of the method's global error.
    fn order(&self) -> u32;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Steps with the slope at the start point, ignoring `y`.
    struct Forward;

    impl Stepper for Forward {
        fn step<F>(&self, f: &F, point: Point, h: f64) -> Point
        where
            F: Derivative + ?Sized,
        {
            Point::new(point.x + h, point.y + h * f.derivative(point.x, point.y))
        }

        fn name(&self) -> &'static str {
            "forward"
        }

        fn order(&self) -> u32 {
            1
        }
    }

    #[test]
    fn step_with_closure_derivative() {
        let next = Forward.step(&|x: f64, _y: f64| 2.0 * x, Point::new(1.0, 0.0), 0.5);

        assert_eq!(next, Point::new(1.5, 1.0));
    }

    #[test]
    fn step_with_trait_object_derivative() {
        let f: &dyn Derivative = &|_x: f64, y: f64| y;
        let next = Forward.step(f, Point::new(0.0, 2.0), 0.25);

        assert_eq!(next, Point::new(0.25, 2.5));
    }
}
