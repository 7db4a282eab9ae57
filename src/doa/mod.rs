//! Degree of Authorship table for a repository.

pub mod analyzer;
mod report;

use std::error::Error;
use std::path::Path;

use crate::config::Config;
use crate::contrib::contributions_for_path;
use crate::error::Result;
use crate::report_helpers;
use analyzer::{AuthorFileDoa, DoaTable, compute_doa};
use report::{print_json, print_report};

/// Build the contribution dataset for `path` and score it.
pub fn doa_for_path(path: &Path, config: &Config, reference: Option<&str>) -> Result<DoaTable> {
    let records = contributions_for_path(path, config, reference)?;
    let table = compute_doa(&records);
    log::info!(
        "computed DOA for {} author/file pairs over {} files",
        table.len(),
        table.file_count()
    );
    Ok(table)
}

/// Print the DOA table, strongest authorship first.
pub fn run(
    path: &Path,
    config: &Config,
    reference: Option<&str>,
    json: bool,
    top: usize,
) -> std::result::Result<(), Box<dyn Error>> {
    let table = doa_for_path(path, config, reference)?;

    let mut rows: Vec<AuthorFileDoa> = table.rows().cloned().collect();
    rows.sort_by(|a, b| {
        b.doa
            .partial_cmp(&a.doa)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.fname.cmp(&b.fname))
    });

    let total = rows.len();
    report_helpers::output_results(&mut rows, top, json, print_json, |shown| {
        print_report(shown, total)
    })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
