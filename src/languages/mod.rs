//! Which extensions count as the project's source code, and why.

mod report;

use std::error::Error;
use std::path::Path;

use serde::Serialize;

use crate::config::Config;
use crate::contrib::language::{ExtensionShare, extension_shares, languages_for};
use crate::contrib::{BuildOptions, collect_tracked_contributions, open_repository};
use crate::error::Result;
use report::{print_json, print_report};

/// Outcome of language inference for one extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Selection {
    /// Frequent enough and a known programming language.
    Selected,
    /// Frequent enough but not a programming language.
    NotCode,
    BelowThreshold,
}

impl Selection {
    pub fn label(&self) -> &'static str {
        match self {
            Selection::Selected => "selected",
            Selection::NotCode => "not code",
            Selection::BelowThreshold => "too rare",
        }
    }
}

pub struct ExtensionReport {
    pub share: ExtensionShare,
    pub languages: Vec<&'static str>,
    pub selection: Selection,
}

pub fn classify(shares: Vec<ExtensionShare>, threshold: f64) -> Vec<ExtensionReport> {
    shares
        .into_iter()
        .map(|share| {
            let languages = languages_for(&share.extension);
            let selection = if share.share < threshold {
                Selection::BelowThreshold
            } else if languages.is_empty() {
                Selection::NotCode
            } else {
                Selection::Selected
            };
            ExtensionReport {
                share,
                languages,
                selection,
            }
        })
        .collect()
}

/// Extension breakdown for the files tracked in the repository at `path`.
pub fn languages_for_path(
    path: &Path,
    config: &Config,
    reference: Option<&str>,
) -> Result<Vec<ExtensionReport>> {
    config.validate()?;
    let git = open_repository(path)?;
    let records =
        collect_tracked_contributions(&git, &BuildOptions::from_config(config, reference))?;
    let shares = extension_shares(records.iter().map(|r| r.fname.as_str()));
    Ok(classify(shares, config.language_threshold))
}

pub fn run(
    path: &Path,
    config: &Config,
    reference: Option<&str>,
    json: bool,
) -> std::result::Result<(), Box<dyn Error>> {
    let reports = languages_for_path(path, config, reference)?;
    if json {
        print_json(&reports)?;
    } else {
        print_report(&reports, config.language_threshold);
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
