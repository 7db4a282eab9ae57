//! Truck factor: how many authors can leave before most files are orphaned.

pub mod analyzer;
mod report;

use std::error::Error;
use std::path::Path;

use crate::config::Config;
use crate::doa::doa_for_path;
use crate::error::Result;
use analyzer::{TruckFactor, solve};
use report::{print_json, print_report};

/// Full truck factor analysis of the repository at `path`.
pub fn analyze(path: &Path, config: &Config, reference: Option<&str>) -> Result<TruckFactor> {
    config.validate()?;
    let table = doa_for_path(path, config, reference)?;
    let tf = solve(
        &table,
        config.authorship_threshold,
        config.orphan_threshold,
    )?;
    log::info!(
        "truck factor {} ({} owners, {} owned files)",
        tf.factor,
        tf.owners,
        tf.owned_files
    );
    Ok(tf)
}

/// Truck factor of the repository at `path` with default settings
/// apart from the two thresholds.
pub fn compute_truck_factor(
    path: &Path,
    authorship_threshold: f64,
    orphan_threshold: f64,
) -> Result<usize> {
    let config = Config {
        authorship_threshold,
        orphan_threshold,
        ..Config::default()
    };
    analyze(path, &config, None).map(|tf| tf.factor)
}

pub fn run(
    path: &Path,
    config: &Config,
    reference: Option<&str>,
    json: bool,
) -> std::result::Result<(), Box<dyn Error>> {
    let tf = analyze(path, config, reference)?;
    if json {
        print_json(&tf, config)?;
    } else {
        print_report(&tf, config);
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
