//! Approximate a first-order ODE with three fixed-step methods and measure
//! how far each strays from the exact solution.
//!
//! A [`Lab`] owns the current [`Config`], the chosen [`Preset`] problem, and
//! the results of the last successful build. Each rebuild recomputes, from
//! scratch:
//!
//! 1. [`Approximations`]: the domain, the exact solution, and one trajectory
//!    per enabled method
//! 2. [`GlobalErrors`]: the endpoint error as a function of step count
//! 3. [`LocalErrors`]: the per-step error along each trajectory
//!
//! and then notifies subscribed [`Listener`]s in that order. A failed build
//! leaves the previous config and results in place.
//!
//! [`Config`]: odestep_core::Config

mod build;
mod error;
mod lab;
mod listeners;
mod payload;
mod problem;
mod settings;

pub use build::{approximations, build, global_errors, local_errors};
pub use error::{Error, Field};
pub use lab::{ConfigUpdate, Lab};
pub use listeners::{Listener, Listeners, Update};
pub use payload::{Approximations, GlobalErrors, LocalErrors, Results};
pub use problem::{BoxedFunction, Preset, ProblemError};
pub use settings::{AnalysisSettings, DEFAULT_STEPS, DomainSettings, Settings, SettingsError};
