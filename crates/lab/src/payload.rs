use std::collections::BTreeMap;

use odestep_core::{Config, Trajectory};
use odestep_solvers::{analysis::ErrorSeries, methods::Method};
use serde::Serialize;

/// The approximations produced by one build, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Approximations {
    /// The config the build used.
    pub config: Config,

    /// The x-values visited by the integrator, shared by every method.
    pub domain: Vec<f64>,

    /// The exact solution evaluated over the domain.
    pub exact: Trajectory,

    /// One trajectory per enabled method.
    pub trajectories: BTreeMap<Method, Trajectory>,
}

/// Endpoint error against step count, one series per enabled method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalErrors {
    pub config: Config,

    /// The largest step count in each series.
    pub n_max: usize,

    pub series: BTreeMap<Method, ErrorSeries<usize>>,
}

/// Per-step error along each method's trajectory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalErrors {
    pub config: Config,
    pub series: BTreeMap<Method, ErrorSeries<f64>>,
}

/// Everything one successful build produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Results {
    pub approximations: Approximations,
    pub global: GlobalErrors,
    pub local: LocalErrors,
}
