use thiserror::Error;

use crate::Point;

/// How the step size is specified: directly, or as a number of steps across
/// the domain.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepSize {
    /// A fixed step width `h`.
    #[cfg_attr(feature = "serde", serde(rename = "step"))]
    Width(f64),

    /// A step count `N`, giving `h = (X - x0) / N`.
    #[cfg_attr(feature = "serde", serde(rename = "steps"))]
    Count(usize),
}

/// The domain, initial value, and step size for one build.
///
/// A `Config` can only be created through its validating constructors, so a
/// value of this type always satisfies `x_end > x0` and `h > 0` with every
/// field finite.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Config {
    x0: f64,
    y0: f64,
    x_end: f64,
    step: StepSize,
    h: f64,
}

/// Errors that can occur when validating a [`Config`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("x0 must be finite, got {0}")]
    X0(f64),

    #[error("y0 must be finite, got {0}")]
    Y0(f64),

    #[error("x_end must be finite, got {0}")]
    XEnd(f64),

    #[error("x_end ({x_end}) must be greater than x0 ({x0})")]
    EmptyDomain { x0: f64, x_end: f64 },

    #[error("step must be finite and positive, got {0}")]
    NonPositiveStep(f64),

    #[error("step count must be at least 1")]
    ZeroSteps,
}

impl Config {
    /// Creates a new config from a domain, initial value, and step size.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is non-finite, if `x_end <= x0`, or if
    /// the step size does not resolve to a positive finite `h`.
    pub fn new(x0: f64, y0: f64, x_end: f64, step: StepSize) -> Result<Self, ConfigError> {
        if !x0.is_finite() {
            return Err(ConfigError::X0(x0));
        }
        if !y0.is_finite() {
            return Err(ConfigError::Y0(y0));
        }
        if !x_end.is_finite() {
            return Err(ConfigError::XEnd(x_end));
        }
        if x_end <= x0 {
            return Err(ConfigError::EmptyDomain { x0, x_end });
        }

        let h = match step {
            StepSize::Width(h) => h,
            StepSize::Count(0) => return Err(ConfigError::ZeroSteps),
            #[allow(clippy::cast_precision_loss)]
            StepSize::Count(n) => (x_end - x0) / n as f64,
        };
        if !h.is_finite() || h <= 0.0 {
            return Err(ConfigError::NonPositiveStep(h));
        }

        Ok(Self {
            x0,
            y0,
            x_end,
            step,
            h,
        })
    }

    /// Creates a config with a fixed step width `h`.
    ///
    /// # Errors
    ///
    /// See [`Config::new`].
    pub fn with_step(x0: f64, y0: f64, x_end: f64, h: f64) -> Result<Self, ConfigError> {
        Self::new(x0, y0, x_end, StepSize::Width(h))
    }

    /// Creates a config with `n` steps across `[x0, x_end]`.
    ///
    /// # Errors
    ///
    /// See [`Config::new`].
    pub fn with_steps(x0: f64, y0: f64, x_end: f64, n: usize) -> Result<Self, ConfigError> {
        Self::new(x0, y0, x_end, StepSize::Count(n))
    }

    /// Returns a config over the same domain and initial value with a new step size.
    ///
    /// # Errors
    ///
    /// See [`Config::new`].
    pub fn with_step_size(&self, step: StepSize) -> Result<Self, ConfigError> {
        Self::new(self.x0, self.y0, self.x_end, step)
    }

    #[must_use]
    pub fn x0(&self) -> f64 {
        self.x0
    }

    #[must_use]
    pub fn y0(&self) -> f64 {
        self.y0
    }

    #[must_use]
    pub fn x_end(&self) -> f64 {
        self.x_end
    }

    /// Returns the step size as it was specified.
    #[must_use]
    pub fn step(&self) -> StepSize {
        self.step
    }

    /// Returns the resolved step width.
    #[must_use]
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Returns the initial point `(x0, y0)`.
    #[must_use]
    pub fn start(&self) -> Point {
        Point::new(self.x0, self.y0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn step_count_resolves_width() {
        let config = Config::with_steps(1.0, 2.0, 10.0, 90).expect("valid config");

        assert_relative_eq!(config.h(), 0.1);
        assert_eq!(config.step(), StepSize::Count(90));
        assert_eq!(config.start(), Point::new(1.0, 2.0));
    }

    #[test]
    fn explicit_width_is_kept() {
        let config = Config::with_step(0.0, 1.0, 1.0, 0.25).expect("valid config");

        assert_relative_eq!(config.h(), 0.25);
        assert_eq!(config.step(), StepSize::Width(0.25));
    }

    #[test]
    fn rejects_non_positive_step() {
        assert_eq!(
            Config::with_step(0.0, 1.0, 1.0, 0.0),
            Err(ConfigError::NonPositiveStep(0.0))
        );
        assert_eq!(
            Config::with_step(0.0, 1.0, 1.0, -0.1),
            Err(ConfigError::NonPositiveStep(-0.1))
        );
        assert_eq!(
            Config::with_steps(0.0, 1.0, 1.0, 0),
            Err(ConfigError::ZeroSteps)
        );
    }

    #[test]
    fn rejects_empty_domain() {
        assert_eq!(
            Config::with_steps(2.0, 1.0, 2.0, 10),
            Err(ConfigError::EmptyDomain { x0: 2.0, x_end: 2.0 })
        );
        assert!(matches!(
            Config::with_steps(3.0, 1.0, 2.0, 10),
            Err(ConfigError::EmptyDomain { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_fields() {
        assert!(matches!(
            Config::with_steps(f64::NAN, 1.0, 2.0, 10),
            Err(ConfigError::X0(_))
        ));
        assert!(matches!(
            Config::with_steps(0.0, f64::INFINITY, 2.0, 10),
            Err(ConfigError::Y0(_))
        ));
        assert!(matches!(
            Config::with_steps(0.0, 1.0, f64::NEG_INFINITY, 10),
            Err(ConfigError::XEnd(_))
        ));
        assert!(matches!(
            Config::with_step(0.0, 1.0, 2.0, f64::NAN),
            Err(ConfigError::NonPositiveStep(_))
        ));
    }

    #[test]
    fn rekeys_step_size_over_same_domain() {
        let config = Config::with_step(1.0, 2.0, 10.0, 0.5).expect("valid config");
        let rekeyed = config
            .with_step_size(StepSize::Count(3))
            .expect("valid config");

        assert_relative_eq!(rekeyed.h(), 3.0);
        assert_relative_eq!(rekeyed.x_end(), 10.0);
        assert_relative_eq!(rekeyed.y0(), 2.0);
    }
}
