//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across solvers.
//!
//! # Example
//!
//! ```rust
//! use odestep_core::Observer;
//! use odestep_observers::traits::{CanStopEarly, HasPoint};
//!
//! struct StopPast {
//!     y_max: f64,
//! }
//!
//! impl<E: HasPoint, A: CanStopEarly> Observer<E, A> for StopPast {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.point().y > self.y_max).then(A::stop_early)
//!     }
//! }
//! ```

use odestep_core::Point;
use odestep_solvers::fixed_step;

/// An event that carries the point reached at a step.
pub trait HasPoint {
    /// Returns the step index, with 0 for the initial point.
    fn step(&self) -> usize;

    /// Returns the point reached at this step.
    fn point(&self) -> Point;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasPoint for fixed_step::Event {
    fn step(&self) -> usize {
        self.step
    }

    fn point(&self) -> Point {
        self.point
    }
}

impl CanStopEarly for fixed_step::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
