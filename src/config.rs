/// Analysis settings: thresholds, worker count and alias tables.
///
/// Values come from a TOML file (`--config`, or `.truckfactor.toml` in the
/// analyzed directory) layered under command-line overrides.
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, TruckFactorError};

/// File looked up in the analyzed directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = ".truckfactor.toml";

/// Upper bound on concurrent git/parse workers.
pub const MAX_WORKERS: usize = 32;

pub const DEFAULT_AUTHORSHIP_THRESHOLD: f64 = 0.75;
pub const DEFAULT_ORPHAN_THRESHOLD: f64 = 0.5;
pub const DEFAULT_LANGUAGE_THRESHOLD: f64 = 0.35;

/// `min(32, available cores)`.
pub fn default_workers() -> usize {
    num_cpus::get().clamp(1, MAX_WORKERS)
}

/// Rewrite tables applied to every contribution record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Aliases {
    /// Historical path -> canonical path.
    pub files: BTreeMap<String, String>,
    /// Alternate author name -> canonical author name.
    pub authors: BTreeMap<String, String>,
}

impl Aliases {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.authors.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub authorship_threshold: f64,
    pub orphan_threshold: f64,
    pub language_threshold: f64,
    pub workers: usize,
    pub aliases: Aliases,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            authorship_threshold: DEFAULT_AUTHORSHIP_THRESHOLD,
            orphan_threshold: DEFAULT_ORPHAN_THRESHOLD,
            language_threshold: DEFAULT_LANGUAGE_THRESHOLD,
            workers: default_workers(),
            aliases: Aliases::default(),
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub authorship_threshold: Option<f64>,
    pub orphan_threshold: Option<f64>,
    pub language_threshold: Option<f64>,
    pub workers: Option<usize>,
}

impl Config {
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|e| TruckFactorError::Config {
            path: origin.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| TruckFactorError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml(&text, path)
    }

    /// Load an explicit config file, or `dir/.truckfactor.toml` when present,
    /// or the defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            log::debug!("loading configuration from {}", candidate.display());
            return Self::from_file(&candidate);
        }
        Ok(Self::default())
    }

    pub fn apply(mut self, overrides: &Overrides) -> Self {
        if let Some(v) = overrides.authorship_threshold {
            self.authorship_threshold = v;
        }
        if let Some(v) = overrides.orphan_threshold {
            self.orphan_threshold = v;
        }
        if let Some(v) = overrides.language_threshold {
            self.language_threshold = v;
        }
        if let Some(v) = overrides.workers {
            self.workers = v;
        }
        self
    }

    /// Reject settings the pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        validate_threshold("authorship threshold", self.authorship_threshold)?;
        validate_threshold("orphan threshold", self.orphan_threshold)?;
        validate_threshold("language threshold", self.language_threshold)?;
        if self.workers == 0 {
            return Err(TruckFactorError::Validation(
                "workers must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Thresholds live in (0, 1]; NaN is rejected too.
pub fn validate_threshold(name: &str, value: f64) -> Result<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(TruckFactorError::Validation(format!(
            "{name} must be in (0, 1], got {value}"
        )))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
