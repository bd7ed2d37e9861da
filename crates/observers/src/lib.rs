//! Reusable observers for the odestep integrator.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver whose events and actions implement them.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasPoint`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TraceObserver`]: logs every event through `tracing`
//! - [`FiniteGuard`]: stops at the first non-finite point
//!
//! [`Observer`]: odestep_core::Observer
//! [`HasPoint`]: traits::HasPoint
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod finite;
mod trace;

pub use finite::FiniteGuard;
pub use trace::TraceObserver;
