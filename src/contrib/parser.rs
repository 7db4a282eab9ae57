//! Block parser: raw `git log --numstat` text to contribution records.
//!
//! A commit block is an `author|date` header followed by zero or more
//! `<inserted>\t<deleted>\t<path>` lines. Blocks are separated by blank
//! lines and are independent of each other, so parsing runs in batches on
//! a worker pool without affecting the result.

use chrono::NaiveDate;
use rayon::prelude::*;

use super::{ContributionRecord, build_pool};
use crate::error::Result;

/// Split a raw log stream into commit blocks, dropping empty ones.
pub fn split_blocks(raw: &str) -> impl Iterator<Item = &str> {
    raw.split("\n\n")
        .map(|block| block.trim_matches('\n'))
        .filter(|block| !block.is_empty())
}

fn parse_header(header: &str) -> Option<(&str, NaiveDate)> {
    // Author names may contain '|', dates never do.
    let (author, date) = header.rsplit_once('|')?;
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    Some((author, date))
}

/// Binary files report `-` for both counts; anything non-numeric counts as 0.
fn parse_count(field: &str) -> u64 {
    field.trim().parse().unwrap_or(0)
}

/// Parse one commit block into its per-file contribution records.
///
/// Lines that do not split into exactly three tab-separated fields are
/// skipped. A block whose header cannot be read yields nothing.
pub fn parse_block(block: &str) -> Vec<ContributionRecord> {
    let Some((header, stats)) = block.split_once('\n') else {
        return Vec::new();
    };
    let Some((author, date)) = parse_header(header) else {
        log::warn!("skipping commit block with malformed header: {header:?}");
        return Vec::new();
    };

    stats
        .lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split('\t').collect();
            let [inserted, deleted, fname] = fields.as_slice() else {
                return None;
            };
            let inserted = parse_count(inserted);
            let deleted = parse_count(deleted);
            Some(ContributionRecord {
                author: author.to_string(),
                date,
                fname: fname.to_string(),
                inserted,
                deleted,
                total: inserted + deleted,
            })
        })
        .collect()
}

/// Parses a whole log stream on a fixed-size worker pool.
pub struct BlockParser {
    workers: usize,
}

impl BlockParser {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// Parse every block in `raw`. Records come out in stream order.
    pub fn parse(&self, raw: &str) -> Result<Vec<ContributionRecord>> {
        let blocks: Vec<&str> = split_blocks(raw).collect();
        let batch_size = blocks.len().div_ceil(self.workers).max(1);
        log::debug!(
            "parsing {} blocks in batches of {batch_size} on {} workers",
            blocks.len(),
            self.workers
        );

        let pool = build_pool(self.workers)?;
        let records: Vec<ContributionRecord> = pool.install(|| {
            blocks
                .par_chunks(batch_size)
                .flat_map_iter(|batch| batch.iter().flat_map(|block| parse_block(block)))
                .collect()
        });
        Ok(records)
    }
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
