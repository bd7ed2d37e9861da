//! Fixed-step solvers for first-order ODEs.
//!
//! - [`methods`]: the single-step formulas ([`Euler`], [`Heun`],
//!   [`RungeKutta4`]) and the [`Method`] selector
//! - [`fixed_step`]: drives a method across a domain to produce a trajectory
//! - [`analysis`]: global and local error series against an exact solution
//!
//! [`Euler`]: methods::Euler
//! [`Heun`]: methods::Heun
//! [`RungeKutta4`]: methods::RungeKutta4
//! [`Method`]: methods::Method

pub mod analysis;
pub mod fixed_step;
pub mod methods;
