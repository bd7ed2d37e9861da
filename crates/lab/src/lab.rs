use std::fmt;

use odestep_core::{Config, StepSize};
use odestep_solvers::methods::Method;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::{Error, Field, Listener, Listeners, Preset, Results, Settings, Update, build};

/// Owns the current inputs, the last successful results, and the listeners
/// that are told about each rebuild.
pub struct Lab {
    problem: Preset,
    config: Config,
    n_max: usize,
    methods: Vec<Method>,
    results: Option<Results>,
    listeners: Listeners,
}

/// A partial config change.
///
/// Missing fields keep their current value. Present fields must be finite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigUpdate {
    pub x0: Option<f64>,
    pub y0: Option<f64>,
    pub x_end: Option<f64>,
    #[serde(flatten)]
    pub step: Option<StepSize>,
}

impl ConfigUpdate {
    /// Merges this update over `current` and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFinite`] if a present field is NaN or infinite, or
    /// a config error if the merged values are not a valid config.
    pub fn merge(&self, current: &Config) -> Result<Config, Error> {
        let x0 = finite(Field::X0, self.x0)?.unwrap_or(current.x0());
        let y0 = finite(Field::Y0, self.y0)?.unwrap_or(current.y0());
        let x_end = finite(Field::XEnd, self.x_end)?.unwrap_or(current.x_end());

        let step = match self.step {
            Some(StepSize::Width(h)) if !h.is_finite() => {
                return Err(Error::NonFinite {
                    field: Field::Step,
                    value: h,
                });
            }
            Some(step) => step,
            None => current.step(),
        };

        Ok(Config::new(x0, y0, x_end, step)?)
    }
}

fn finite(field: Field, value: Option<f64>) -> Result<Option<f64>, Error> {
    match value {
        Some(value) if !value.is_finite() => Err(Error::NonFinite { field, value }),
        _ => Ok(value),
    }
}

impl Lab {
    /// Creates a lab from settings without building anything yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings do not describe a valid config, or if
    /// the problem is undefined at the config's start point.
    pub fn new(settings: &Settings) -> Result<Self, Error> {
        let config = settings.config()?;
        settings.problem.function(config.start())?;

        let mut methods = settings.analysis.methods.clone();
        methods.sort_unstable();
        methods.dedup();
        if methods.is_empty() {
            warn!("no methods enabled, only the exact solution will be produced");
        }

        Ok(Self {
            problem: settings.problem,
            config,
            n_max: settings.analysis.n_max,
            methods,
            results: None,
            listeners: Listeners::new(),
        })
    }

    /// Adds a listener that is notified after every successful rebuild.
    pub fn subscribe<L: Listener + 'static>(&mut self, listener: L) {
        self.listeners.subscribe(listener);
    }

    #[must_use]
    pub fn problem(&self) -> Preset {
        self.problem
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn n_max(&self) -> usize {
        self.n_max
    }

    /// The enabled methods, in canonical order.
    #[must_use]
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// The results of the last successful rebuild, if any.
    #[must_use]
    pub fn results(&self) -> Option<&Results> {
        self.results.as_ref()
    }

    /// Recomputes every series from the current inputs and notifies listeners.
    ///
    /// # Errors
    ///
    /// Returns an error if the build fails, in which case previous results
    /// are kept and no listener is notified.
    pub fn rebuild(&mut self) -> Result<&Results, Error> {
        let results = build(self.problem, &self.config, &self.methods, self.n_max)?;
        Ok(self.publish(results))
    }

    /// Applies a partial config change and rebuilds.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged config is invalid or the build fails.
    /// Either way the current config and previous results are left untouched.
    pub fn apply(&mut self, update: ConfigUpdate) -> Result<&Results, Error> {
        let config = update.merge(&self.config).inspect_err(|error| {
            warn!(%error, "rejected config update");
        })?;

        let results = build(self.problem, &config, &self.methods, self.n_max)?;
        info!(
            x0 = config.x0(),
            y0 = config.y0(),
            x_end = config.x_end(),
            h = config.h(),
            "config updated"
        );
        self.config = config;
        Ok(self.publish(results))
    }

    /// Switches to another problem and rebuilds.
    ///
    /// # Errors
    ///
    /// Returns an error if the problem is undefined at the current start
    /// point, in which case the current problem is kept.
    pub fn set_problem(&mut self, problem: Preset) -> Result<&Results, Error> {
        let results = build(problem, &self.config, &self.methods, self.n_max)?;
        info!(%problem, "problem changed");
        self.problem = problem;
        Ok(self.publish(results))
    }

    fn publish(&mut self, results: Results) -> &Results {
        debug!(listeners = self.listeners.len(), "publishing results");
        let results = self.results.insert(results);

        self.listeners
            .notify(Update::Approximations(&results.approximations));
        self.listeners.notify(Update::GlobalError(&results.global));
        self.listeners.notify(Update::LocalError(&results.local));

        results
    }
}

impl fmt::Debug for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lab")
            .field("problem", &self.problem)
            .field("config", &self.config)
            .field("n_max", &self.n_max)
            .field("methods", &self.methods)
            .field("built", &self.results.is_some())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
