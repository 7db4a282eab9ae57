//! Log extractor: pulls the full commit history out of the backend.
//!
//! The commit range is cut into contiguous `(skip, max_count)` slices, one
//! per worker, and each slice is fetched by its own backend call. All calls
//! finish before the pages are merged; the first failure aborts the stage.

use rayon::prelude::*;

use super::build_pool;
use super::parser::split_blocks;
use crate::error::Result;
use crate::git::Backend;

/// One page of the log: skip `skip` commits, then take `max_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub skip: usize,
    pub max_count: usize,
}

/// Partition `count` commits into at most `workers` contiguous slices of
/// `ceil(count / workers)` commits; the last slice takes what is left.
/// Slices never overlap and together cover exactly `count` commits.
pub fn plan_slices(count: usize, workers: usize) -> Vec<Slice> {
    let size = count.div_ceil(workers.max(1));
    let mut slices = Vec::new();
    let mut skip = 0;
    while skip < count {
        let max_count = size.min(count - skip);
        slices.push(Slice { skip, max_count });
        skip += max_count;
    }
    slices
}

pub struct LogExtractor<'a, B: Backend + ?Sized> {
    backend: &'a B,
    workers: usize,
}

impl<'a, B: Backend + ?Sized> LogExtractor<'a, B> {
    pub fn new(backend: &'a B, workers: usize) -> Self {
        Self {
            backend,
            workers: workers.max(1),
        }
    }

    /// Fetch the whole history reachable from `reference` (HEAD when
    /// `None`) as one stream of commit blocks separated by blank lines.
    pub fn extract(&self, reference: Option<&str>) -> Result<String> {
        let reference = match reference {
            Some(r) => r.to_string(),
            None => self.backend.head_commit()?,
        };
        let count = self.backend.count_commits(&reference)?;
        let slices = plan_slices(count, self.workers);
        log::debug!(
            "extracting {count} commits from {reference} in {} slices",
            slices.len()
        );

        let pool = build_pool(self.workers)?;
        let pages: Vec<String> = pool.install(|| {
            slices
                .par_iter()
                .map(|s| self.backend.log_page(&reference, s.skip, s.max_count))
                .collect::<Result<Vec<String>>>()
        })?;

        let blocks: Vec<&str> = pages.iter().flat_map(|page| split_blocks(page)).collect();
        log::info!("extracted {} commit blocks ({count} commits)", blocks.len());
        Ok(blocks.join("\n\n"))
    }
}

#[cfg(test)]
#[path = "extractor_test.rs"]
mod tests;
