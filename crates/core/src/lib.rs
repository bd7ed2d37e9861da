//! Core traits and types for fixed-step ODE approximation.
//!
//! This crate defines the shared abstractions that step methods, the
//! integrator, and the error analyzer build on:
//!
//! - [`Point`] and [`Trajectory`]: samples of an approximate or exact solution
//! - [`Config`]: a validated domain, initial value, and step size
//! - [`Derivative`], [`ExactSolution`], [`DifferentialFunction`]: the
//!   right-hand side `f(x, y)` of `y' = f(x, y)` and its closed-form solution
//! - [`Stepper`]: the "can take a step" capability shared by all methods
//! - [`Observer`]: receives solver events and optionally returns control actions

mod config;
mod function;
mod observer;
mod point;
mod step;
mod trajectory;

pub use config::{Config, ConfigError, StepSize};
pub use function::{Derivative, DifferentialFunction, ExactSolution};
pub use observer::Observer;
pub use point::Point;
pub use step::Stepper;
pub use trajectory::Trajectory;
