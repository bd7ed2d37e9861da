use std::{
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use odestep_core::{Config, StepSize};
use odestep_solvers::methods::Method;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::{Error, Preset};

/// Step count used when the settings give neither `steps` nor `step`.
pub const DEFAULT_STEPS: usize = 90;

/// Everything needed to set up a [`Lab`](crate::Lab), as read from TOML.
///
/// ```toml
/// problem = "linear"
///
/// [domain]
/// x0 = 1.0
/// y0 = 2.0
/// x_end = 10.0
/// steps = 90      # or `step = 0.1`, not both
///
/// [analysis]
/// n_max = 50
/// methods = ["euler", "heun", "rk4"]
/// ```
///
/// Missing keys take their default values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub problem: Preset,
    pub domain: DomainSettings,
    pub analysis: AnalysisSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainSettings {
    pub x0: f64,
    pub y0: f64,
    pub x_end: f64,

    /// Number of steps across the domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<usize>,

    /// Fixed step width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

impl Default for DomainSettings {
    fn default() -> Self {
        Self {
            x0: 1.0,
            y0: 2.0,
            x_end: 10.0,
            steps: None,
            step: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Largest step count in the global error sweep.
    pub n_max: usize,

    /// Methods to run.
    pub methods: Vec<Method>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            n_max: 50,
            methods: Method::ALL.to_vec(),
        }
    }
}

/// Errors that can occur when reading or writing settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to serialize settings")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write {}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("domain sets both steps = {steps} and step = {step}")]
    ConflictingStep { steps: usize, step: f64 },
}

impl Settings {
    /// Reads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid settings.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse().map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads settings from a TOML file, falling back to defaults if the file
    /// is missing or invalid.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                info!("Settings file {} not found. Using defaults.", path.display());
                Self::default()
            }
            Err(error) => {
                let reason = std::error::Error::source(&error)
                    .map_or_else(String::new, ToString::to_string);
                warn!("{error}: {reason}. Using defaults.");
                Self::default()
            }
        }
    }

    /// Writes settings to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be serialized or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The step size described by the domain settings.
    ///
    /// # Errors
    ///
    /// Returns an error if both `steps` and `step` are set.
    pub fn step_size(&self) -> Result<StepSize, SettingsError> {
        match (self.domain.steps, self.domain.step) {
            (Some(steps), Some(step)) => Err(SettingsError::ConflictingStep { steps, step }),
            (Some(steps), None) => Ok(StepSize::Count(steps)),
            (None, Some(step)) => Ok(StepSize::Width(step)),
            (None, None) => Ok(StepSize::Count(DEFAULT_STEPS)),
        }
    }

    /// Builds a validated config from the domain settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the step size is ambiguous or the config is invalid.
    pub fn config(&self) -> Result<Config, Error> {
        let DomainSettings { x0, y0, x_end, .. } = self.domain;
        Ok(Config::new(x0, y0, x_end, self.step_size()?)?)
    }
}

impl FromStr for Settings {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn empty_file_gives_defaults() {
        let settings: Settings = "".parse().unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.step_size().unwrap(), StepSize::Count(DEFAULT_STEPS));
    }

    #[test]
    fn default_config_is_the_reference_problem() {
        let config = Settings::default().config().unwrap();

        assert_relative_eq!(config.x0(), 1.0);
        assert_relative_eq!(config.y0(), 2.0);
        assert_relative_eq!(config.x_end(), 10.0);
        assert_relative_eq!(config.h(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn parses_step_width() {
        let settings: Settings = "
            problem = \"logistic\"

            [domain]
            x0 = 0.0
            y0 = 0.5
            x_end = 4.0
            step = 0.25
        "
        .parse()
        .unwrap();

        assert_eq!(settings.problem, Preset::Logistic);
        assert_eq!(settings.step_size().unwrap(), StepSize::Width(0.25));
        assert_eq!(settings.analysis, AnalysisSettings::default());
    }

    #[test]
    fn parses_methods_by_name() {
        let settings: Settings = "
            [analysis]
            n_max = 8
            methods = [\"rk4\", \"euler\"]
        "
        .parse()
        .unwrap();

        assert_eq!(settings.analysis.n_max, 8);
        assert_eq!(settings.analysis.methods, vec![Method::RungeKutta4, Method::Euler]);
    }

    #[test]
    fn conflicting_step_is_rejected() {
        let settings: Settings = "
            [domain]
            steps = 10
            step = 0.5
        "
        .parse()
        .unwrap();

        assert!(matches!(
            settings.config(),
            Err(Error::Settings(SettingsError::ConflictingStep { steps: 10, .. }))
        ));
    }

    #[test]
    fn unknown_problem_fails_to_parse() {
        assert!("problem = \"cubic\"".parse::<Settings>().is_err());
    }
}
