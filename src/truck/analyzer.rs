//! Greedy truck factor search over authorship scores.
//!
//! An author owns a file when their normalized DOA reaches the authorship
//! threshold. Authors are removed one at a time, always the one owning the
//! most files, until the files still owned by someone drop to the quorum
//! (owned files x orphan threshold) or nobody is left. The number of
//! removals is the truck factor.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::config::validate_threshold;
use crate::doa::analyzer::DoaTable;
use crate::error::Result;

/// An author removed by the search and how many files they owned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovedAuthor {
    pub author: String,
    pub files: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TruckFactor {
    pub factor: usize,
    /// Distinct files with at least one owner before any removal.
    pub owned_files: usize,
    /// Distinct authors owning at least one file.
    pub owners: usize,
    /// Owned-file count at which the search stops.
    pub quorum: f64,
    /// Removed authors, in removal order.
    pub removed: Vec<RemovedAuthor>,
}

/// Author -> owned files; pruned as the search removes authors.
type Ownership<'a> = BTreeMap<&'a str, BTreeSet<&'a str>>;

fn ownership(table: &DoaTable, authorship_threshold: f64) -> Ownership<'_> {
    let mut owned: Ownership = BTreeMap::new();
    for row in table.rows().filter(|r| r.doa >= authorship_threshold) {
        owned
            .entry(row.author.as_str())
            .or_default()
            .insert(row.fname.as_str());
    }
    owned
}

fn covered_files(owned: &Ownership) -> usize {
    owned.values().flatten().collect::<BTreeSet<_>>().len()
}

/// Author owning the most files; ties go to the lexicographically first name.
fn top_author<'a>(owned: &Ownership<'a>) -> Option<(&'a str, usize)> {
    owned
        .iter()
        .max_by(|a, b| match a.1.len().cmp(&b.1.len()) {
            Ordering::Equal => b.0.cmp(a.0),
            other => other,
        })
        .map(|(author, files)| (*author, files.len()))
}

/// Run the greedy search. Both thresholds must lie in (0, 1].
pub fn solve(
    table: &DoaTable,
    authorship_threshold: f64,
    orphan_threshold: f64,
) -> Result<TruckFactor> {
    validate_threshold("authorship threshold", authorship_threshold)?;
    validate_threshold("orphan threshold", orphan_threshold)?;

    let mut owned = ownership(table, authorship_threshold);
    let owned_files = covered_files(&owned);
    let owners = owned.len();
    let quorum = owned_files as f64 * orphan_threshold;
    log::debug!("{owners} authors own {owned_files} files, quorum {quorum:.2}");

    let mut removed = Vec::new();
    let mut remaining = owned_files;
    while remaining as f64 > quorum {
        let Some((author, files)) = top_author(&owned) else {
            break;
        };
        owned.remove(author);
        remaining = covered_files(&owned);
        log::debug!("removed {author} ({files} files), {remaining} files still owned");
        removed.push(RemovedAuthor {
            author: author.to_string(),
            files,
        });
    }

    Ok(TruckFactor {
        factor: removed.len(),
        owned_files,
        owners,
        quorum,
        removed,
    })
}

/// The truck factor alone.
pub fn truck_factor(
    table: &DoaTable,
    authorship_threshold: f64,
    orphan_threshold: f64,
) -> Result<usize> {
    solve(table, authorship_threshold, orphan_threshold).map(|tf| tf.factor)
}

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod tests;
