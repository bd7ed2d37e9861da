use odestep_core::Point;

/// Event emitted by the fixed-step integrator for each point.
///
/// Step 0 is the initial point before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number (0 for the initial point).
    pub step: usize,

    /// The point reached at this step.
    pub point: Point,
}
