//! Contribution dataset: who changed which source file, when, and by how much.
//!
//! Pipeline: extract the log, parse it into records, apply aliases, drop
//! files no longer tracked at HEAD, keep only the dominant programming
//! language extensions, and sort chronologically.

pub mod extractor;
pub mod language;
pub mod parser;

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use chrono::NaiveDate;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::Serialize;

use crate::config::{Aliases, Config};
use crate::error::{Result, TruckFactorError};
use crate::git::{Backend, GitCli};
use extractor::LogExtractor;
use language::{extension_of, infer_programming_language, resolve_programming_languages};
use parser::BlockParser;

/// One changed file in one commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContributionRecord {
    pub author: String,
    pub date: NaiveDate,
    pub fname: String,
    pub inserted: u64,
    pub deleted: u64,
    /// `inserted + deleted`.
    pub total: u64,
}

/// Settings for [`build_contributions`].
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Starting reference; HEAD when `None`.
    pub reference: Option<String>,
    pub workers: usize,
    pub language_threshold: f64,
    pub aliases: Aliases,
}

impl BuildOptions {
    pub fn from_config(config: &Config, reference: Option<&str>) -> Self {
        Self {
            reference: reference.map(str::to_string),
            workers: config.workers,
            language_threshold: config.language_threshold,
            aliases: config.aliases.clone(),
        }
    }
}

pub(crate) fn build_pool(workers: usize) -> Result<ThreadPool> {
    ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("tf-worker-{i}"))
        .build()
        .map_err(|e| TruckFactorError::Environment(format!("cannot start worker pool: {e}")))
}

/// Check the path argument, then open the repository containing it.
pub fn open_repository(path: &Path) -> Result<GitCli> {
    if !path.is_dir() {
        return Err(TruckFactorError::Validation(format!(
            "{} is not a directory",
            path.display()
        )));
    }
    GitCli::open(path)
}

/// Rewrite aliased paths and authors to their canonical names.
/// Values with no alias entry are left alone.
pub fn resolve_aliases(records: &mut [ContributionRecord], aliases: &Aliases) {
    if aliases.is_empty() {
        return;
    }
    for record in records.iter_mut() {
        if let Some(canonical) = aliases.files.get(&record.fname) {
            record.fname.clone_from(canonical);
        }
        if let Some(canonical) = aliases.authors.get(&record.author) {
            record.author.clone_from(canonical);
        }
    }
}

/// Keep only records whose file is still tracked.
pub fn filter_dead_files(
    records: Vec<ContributionRecord>,
    current_files: &HashSet<String>,
) -> Vec<ContributionRecord> {
    records
        .into_iter()
        .filter(|r| current_files.contains(&r.fname))
        .collect()
}

/// Keep only records whose extension is a dominant programming language.
/// Returns the surviving records and the extensions that qualified.
pub fn filter_files_of_interest(
    records: Vec<ContributionRecord>,
    threshold: f64,
) -> (Vec<ContributionRecord>, BTreeSet<String>) {
    let inferred = infer_programming_language(records.iter().map(|r| r.fname.as_str()), threshold);
    let extensions = resolve_programming_languages(&inferred);
    log::debug!("inferred extensions {inferred:?}, resolved {extensions:?}");

    let kept = records
        .into_iter()
        .filter(|r| extension_of(&r.fname).is_some_and(|ext| extensions.contains(&ext)))
        .collect();
    (kept, extensions)
}

/// Extract, parse, alias and drop dead files: every record for a path
/// tracked at HEAD, before any language filtering.
pub fn collect_tracked_contributions<B: Backend + ?Sized>(
    backend: &B,
    options: &BuildOptions,
) -> Result<Vec<ContributionRecord>> {
    let raw = LogExtractor::new(backend, options.workers).extract(options.reference.as_deref())?;
    let mut records = BlockParser::new(options.workers).parse(&raw)?;
    log::info!("parsed {} contribution records", records.len());

    resolve_aliases(&mut records, &options.aliases);

    let current_files: HashSet<String> = backend.tracked_files()?.into_iter().collect();
    let records = filter_dead_files(records, &current_files);
    log::debug!("{} records touch files tracked at HEAD", records.len());
    Ok(records)
}

/// Build the filtered, chronologically sorted contribution dataset.
pub fn build_contributions<B: Backend + ?Sized>(
    backend: &B,
    options: &BuildOptions,
) -> Result<Vec<ContributionRecord>> {
    let records = collect_tracked_contributions(backend, options)?;
    let (mut records, extensions) = filter_files_of_interest(records, options.language_threshold);

    if records.is_empty() {
        return Err(TruckFactorError::Domain(
            "no qualifying source files found in the repository history".into(),
        ));
    }

    // stable: same-day records keep their log order
    records.sort_by(|a, b| a.date.cmp(&b.date));
    log::info!(
        "{} records across {} source extensions",
        records.len(),
        extensions.len()
    );
    Ok(records)
}

/// Build the contribution dataset for the repository at `path`.
pub fn contributions_for_path(
    path: &Path,
    config: &Config,
    reference: Option<&str>,
) -> Result<Vec<ContributionRecord>> {
    config.validate()?;
    let git = open_repository(path)?;
    build_contributions(&git, &BuildOptions::from_config(config, reference))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
