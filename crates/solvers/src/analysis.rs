//! Error analysis against an exact solution.
//!
//! Two error series are derived from the integrator, both recomputed from
//! scratch on every call:
//!
//! - **Global error** ([`global_error`]): for each step count `N = 1..=n_max`,
//!   the difference `y(X) - y_N` between the exact solution and the
//!   approximation at the domain endpoint. Plotting it against `N` shows the
//!   empirical convergence order of a method, which [`observed_order`]
//!   estimates.
//! - **Local error** ([`local_error`]): for a single trajectory, the change in
//!   pointwise error from one point to the next, with the first entry fixed at
//!   zero since there is no earlier step to compare against.
//!
//! All errors are signed as `exact - approximate`.

mod global;
mod local;
mod series;

pub use global::{global_error, observed_order};
pub use local::{local_error, pointwise_error};
pub use series::{ErrorSeries, Sample};
