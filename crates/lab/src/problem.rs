use std::fmt;

use odestep_core::{DifferentialFunction, Point};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A differential function built at runtime from boxed callables.
pub type BoxedFunction =
    DifferentialFunction<Box<dyn Fn(f64) -> f64>, Box<dyn Fn(f64, f64) -> f64>>;

/// Built-in problems with closed-form solutions.
///
/// Each exact solution is parameterised by the initial condition, so the
/// exact curve always passes through `(x0, y0)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// `y' = 1 + 2y/x`, solved by `y = C·x² - x` with `C = (y0 + x0) / x0²`.
    #[default]
    Linear,

    /// `y' = y`, solved by `y = y0·e^(x - x0)`.
    Exponential,

    /// `y' = y(1 - y)`, solved by `y = 1 / (1 + ((1 - y0) / y0)·e^-(x - x0))`.
    Logistic,
}

/// Errors that can occur when instantiating a preset.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ProblemError {
    #[error("the {preset} problem is singular at x0 = 0")]
    SingularStart { preset: Preset },
}

impl Preset {
    /// The equation in readable form.
    #[must_use]
    pub fn equation(&self) -> &'static str {
        match self {
            Self::Linear => "y' = 1 + 2y/x",
            Self::Exponential => "y' = y",
            Self::Logistic => "y' = y(1 - y)",
        }
    }

    /// Builds the derivative and the exact solution through `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if the exact solution is undefined for this start,
    /// which happens for [`Preset::Linear`] when `x0 = 0`.
    pub fn function(&self, start: Point) -> Result<BoxedFunction, ProblemError> {
        let Point { x: x0, y: y0 } = start;

        match self {
            Self::Linear => {
                if x0 == 0.0 {
                    return Err(ProblemError::SingularStart { preset: *self });
                }
                let c = (y0 + x0) / (x0 * x0);
                Ok(boxed(move |x: f64| c * x * x - x, |x: f64, y: f64| {
                    1.0 + 2.0 * y / x
                }))
            }
            Self::Exponential => Ok(boxed(move |x: f64| y0 * (x - x0).exp(), |_x: f64, y: f64| y)),
            Self::Logistic => {
                let ratio = (1.0 - y0) / y0;
                let exact = move |x: f64| {
                    if y0 == 0.0 {
                        0.0
                    } else {
                        1.0 / (1.0 + ratio * (x0 - x).exp())
                    }
                };
                Ok(boxed(exact, |_x: f64, y: f64| y * (1.0 - y)))
            }
        }
    }
}

fn boxed<E, D>(exact: E, derivative: D) -> BoxedFunction
where
    E: Fn(f64) -> f64 + 'static,
    D: Fn(f64, f64) -> f64 + 'static,
{
    let exact: Box<dyn Fn(f64) -> f64> = Box::new(exact);
    let derivative: Box<dyn Fn(f64, f64) -> f64> = Box::new(derivative);
    DifferentialFunction::new(exact, derivative)
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Linear => "linear",
            Self::Exponential => "exponential",
            Self::Logistic => "logistic",
        })
    }
}
