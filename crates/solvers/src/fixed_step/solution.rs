use odestep_core::Trajectory;

/// Indicates how the integrator terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the end of the domain.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,

    /// A step failed to advance `x`, so the end of the domain could not be reached.
    Stalled,
}

/// The result of a fixed-step integration.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the integrator terminated.
    pub status: Status,

    /// Every point visited, starting with the initial point.
    pub trajectory: Trajectory,

    /// Number of integration steps completed.
    pub steps: usize,
}
