//! Builds approximations and error series for one settings file and prints
//! the results as JSON.
//!
//! # Usage
//!
//! ```text
//! odestep                  # reads ./odestep.toml, or defaults if missing
//! odestep lab.toml         # reads lab.toml, failing if it is missing
//! RUST_LOG=debug odestep   # more detail on stderr
//! ```

use std::error::Error;

use odestep::{Lab, Settings, Update};
use odestep_solvers::analysis::observed_order;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_SETTINGS: &str = "odestep.toml";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path)?,
        None => Settings::load_or_default(DEFAULT_SETTINGS),
    };

    let mut lab = Lab::new(&settings)?;
    info!(
        problem = %lab.problem(),
        equation = lab.problem().equation(),
        h = lab.config().h(),
        "lab ready"
    );

    lab.subscribe(log_convergence);
    let results = lab.rebuild()?;

    println!("{}", serde_json::to_string_pretty(results)?);
    Ok(())
}

/// Logs the observed convergence order of each method at the middle of the sweep.
fn log_convergence(update: Update<'_>) {
    let Update::GlobalError(global) = update else {
        return;
    };

    let n = global.n_max / 2;
    for (method, series) in &global.series {
        match observed_order(series, n) {
            Some(order) => info!(%method, n, order = %format!("{order:.2}"), "observed order"),
            None => info!(%method, n, "observed order unavailable"),
        }
    }
}
