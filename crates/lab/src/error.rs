use std::fmt;

use odestep_core::ConfigError;
use thiserror::Error;

use crate::{ProblemError, SettingsError};

/// Errors that abort a build or a config update.
///
/// When any of these is returned, the lab's previous config and results are
/// left untouched.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: Field, value: f64 },

    #[error(transparent)]
    Problem(#[from] ProblemError),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// An inbound config field, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    X0,
    Y0,
    XEnd,
    Step,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X0 => "x0",
            Self::Y0 => "y0",
            Self::XEnd => "x_end",
            Self::Step => "step",
        })
    }
}
