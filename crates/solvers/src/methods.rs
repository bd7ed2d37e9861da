//! Single-step methods for `y' = f(x, y)`.
//!
//! Each method is a zero-sized type implementing [`Stepper`]. [`Method`] is a
//! tagged selector over the three, for callers that choose a method at
//! runtime (from settings, for example).
//!
//! | Method          | Order | Slope evaluations per step |
//! |-----------------|-------|----------------------------|
//! | [`Euler`]       | 1     | 1                          |
//! | [`Heun`]        | 2     | 2                          |
//! | [`RungeKutta4`] | 4     | 4                          |

mod euler;
mod heun;
mod runge_kutta;

use std::{fmt, str::FromStr};

use odestep_core::{Derivative, Point, Stepper};
use thiserror::Error;

pub use euler::Euler;
pub use heun::Heun;
pub use runge_kutta::RungeKutta4;

/// A runtime choice among the fixed-step methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    #[cfg_attr(feature = "serde", serde(rename = "euler", alias = "explicit_euler"))]
    Euler,

    #[cfg_attr(feature = "serde", serde(rename = "heun", alias = "improved_euler"))]
    Heun,

    #[cfg_attr(
        feature = "serde",
        serde(rename = "rk4", alias = "runge_kutta", alias = "runge_kutta_4")
    )]
    RungeKutta4,
}

impl Method {
    /// All methods, in increasing order of accuracy.
    pub const ALL: [Method; 3] = [Method::Euler, Method::Heun, Method::RungeKutta4];
}

impl Stepper for Method {
    fn step<F>(&self, f: &F, point: Point, h: f64) -> Point
    where
        F: Derivative + ?Sized,
    {
        match self {
            Self::Euler => Euler.step(f, point, h),
            Self::Heun => Heun.step(f, point, h),
            Self::RungeKutta4 => RungeKutta4.step(f, point, h),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Euler => Euler.name(),
            Self::Heun => Heun.name(),
            Self::RungeKutta4 => RungeKutta4.name(),
        }
    }

    fn order(&self) -> u32 {
        match self {
            Self::Euler => Euler.order(),
            Self::Heun => Heun.order(),
            Self::RungeKutta4 => RungeKutta4.order(),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a method name is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown method `{0}` (expected euler, heun, or rk4)")]
pub struct ParseMethodError(String);

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "euler" | "explicit_euler" => Ok(Self::Euler),
            "heun" | "improved_euler" => Ok(Self::Heun),
            "rk4" | "runge_kutta" | "runge_kutta_4" => Ok(Self::RungeKutta4),
            _ => Err(ParseMethodError(s.to_owned())),
        }
    }
}
