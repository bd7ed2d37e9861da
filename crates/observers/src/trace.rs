use odestep_core::Observer;
use tracing::trace;

use crate::traits::HasPoint;

/// An observer that logs every event at `trace` level and never intervenes.
///
/// The `label` is attached to each record, so several integrations can be
/// told apart in the same log.
#[derive(Debug, Clone, Copy)]
pub struct TraceObserver {
    label: &'static str,
}

impl TraceObserver {
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    fn record<E: HasPoint>(&self, event: &E) {
        let point = event.point();
        trace!(label = self.label, step = event.step(), x = point.x, y = point.y, "step");
    }
}

impl<E: HasPoint, A> Observer<E, A> for TraceObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

impl<E: HasPoint, A> Observer<E, A> for &mut TraceObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use odestep_core::Config;
    use odestep_solvers::{
        fixed_step::{self, Status},
        methods::Method,
    };

    #[test]
    fn never_stops_the_integrator() {
        let config = Config::with_steps(0.0, 1.0, 1.0, 10).unwrap();

        let solution = fixed_step::solve(
            &Method::Heun,
            &|_x: f64, y: f64| -y,
            &config,
            TraceObserver::new("decay"),
        );

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.trajectory.len(), 11);
    }

    #[test]
    fn usable_by_reference() {
        let config = Config::with_steps(0.0, 1.0, 1.0, 3).unwrap();
        let mut observer = TraceObserver::new("by-ref");

        let solution = fixed_step::solve(&Method::Euler, &|_x: f64, y: f64| y, &config, &mut observer);

        assert_eq!(solution.steps, 3);
        assert_eq!(observer.label(), "by-ref");
    }
}
