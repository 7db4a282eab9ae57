//! Degree of Authorship (DOA) per file and author.
//!
//! DOA = 3.293 + 1.098 * FA + 0.164 * DL - 0.321 * ln(1 + AC)
//!
//! FA is 1 when the author made the first change to the file, DL is the
//! author's own churn on it and AC the churn of everybody else. Scores are
//! normalized per file by the file's highest score, so the top author of
//! every file sits at exactly 1.0.

use std::collections::{BTreeMap, HashMap};
use std::collections::hash_map::Entry;

use chrono::NaiveDate;
use serde::Serialize;

use crate::contrib::ContributionRecord;

pub const DOA_INTERCEPT: f64 = 3.293;
pub const FIRST_AUTHOR_WEIGHT: f64 = 1.098;
pub const DELIVERIES_WEIGHT: f64 = 0.164;
pub const ACCEPTANCES_WEIGHT: f64 = 0.321;

/// Un-normalized DOA for one author on one file.
pub fn raw_doa(first_author: bool, deliveries: u64, acceptances: u64) -> f64 {
    let fa = if first_author { 1.0 } else { 0.0 };
    DOA_INTERCEPT + FIRST_AUTHOR_WEIGHT * fa + DELIVERIES_WEIGHT * deliveries as f64
        - ACCEPTANCES_WEIGHT * (acceptances as f64).ln_1p()
}

/// Authorship of one author over one file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorFileDoa {
    pub fname: String,
    pub author: String,
    /// DL: lines added plus deleted by this author.
    pub churn: u64,
    /// AC: churn by all other authors.
    pub others_churn: u64,
    pub first_author: bool,
    pub raw_doa: f64,
    /// Normalized so the file's top author scores 1.0.
    pub doa: f64,
}

/// DOA rows keyed by `(fname, author)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoaTable {
    rows: BTreeMap<(String, String), AuthorFileDoa>,
}

impl DoaTable {
    pub fn get(&self, fname: &str, author: &str) -> Option<&AuthorFileDoa> {
        self.rows.get(&(fname.to_string(), author.to_string()))
    }

    /// Rows ordered by file, then author.
    pub fn rows(&self) -> impl Iterator<Item = &AuthorFileDoa> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn file_count(&self) -> usize {
        let mut count = 0;
        let mut last: Option<&str> = None;
        for (fname, _) in self.rows.keys() {
            if last != Some(fname.as_str()) {
                count += 1;
                last = Some(fname.as_str());
            }
        }
        count
    }
}

impl FromIterator<AuthorFileDoa> for DoaTable {
    fn from_iter<I: IntoIterator<Item = AuthorFileDoa>>(iter: I) -> Self {
        let rows = iter
            .into_iter()
            .map(|row| ((row.fname.clone(), row.author.clone()), row))
            .collect();
        Self { rows }
    }
}

/// Churn of one author on one file on one day.
struct DayRow<'a> {
    fname: &'a str,
    author: &'a str,
    date: NaiveDate,
    total: u64,
}

/// Compute normalized DOA for every `(fname, author)` pair in `records`.
pub fn compute_doa(records: &[ContributionRecord]) -> DoaTable {
    // Same-day commits by one author on one file collapse into one row.
    // Rows keep first-appearance order, which breaks first-author ties.
    let mut day_rows: Vec<DayRow> = Vec::new();
    let mut day_index: HashMap<(&str, &str, NaiveDate), usize> = HashMap::new();
    for r in records {
        match day_index.entry((r.fname.as_str(), r.author.as_str(), r.date)) {
            Entry::Occupied(e) => day_rows[*e.get()].total += r.total,
            Entry::Vacant(e) => {
                e.insert(day_rows.len());
                day_rows.push(DayRow {
                    fname: &r.fname,
                    author: &r.author,
                    date: r.date,
                    total: r.total,
                });
            }
        }
    }
    day_rows.retain(|row| row.total > 0);

    let mut first_authors: HashMap<&str, (NaiveDate, &str)> = HashMap::new();
    for row in &day_rows {
        first_authors
            .entry(row.fname)
            .and_modify(|first| {
                if row.date < first.0 {
                    *first = (row.date, row.author);
                }
            })
            .or_insert((row.date, row.author));
    }

    let mut deliveries: BTreeMap<(&str, &str), u64> = BTreeMap::new();
    let mut file_churn: HashMap<&str, u64> = HashMap::new();
    for row in &day_rows {
        *deliveries.entry((row.fname, row.author)).or_insert(0) += row.total;
        *file_churn.entry(row.fname).or_insert(0) += row.total;
    }

    let mut max_doa: HashMap<&str, f64> = HashMap::new();
    let mut scored: Vec<AuthorFileDoa> = Vec::with_capacity(deliveries.len());
    for (&(fname, author), &dl) in &deliveries {
        let first_author = first_authors.get(fname).is_some_and(|(_, fa)| *fa == author);
        let ac = file_churn[fname] - dl;
        let raw = raw_doa(first_author, dl, ac);
        max_doa
            .entry(fname)
            .and_modify(|m| *m = m.max(raw))
            .or_insert(raw);
        scored.push(AuthorFileDoa {
            fname: fname.to_string(),
            author: author.to_string(),
            churn: dl,
            others_churn: ac,
            first_author,
            raw_doa: raw,
            doa: 0.0,
        });
    }

    for row in &mut scored {
        row.doa = normalize(row.raw_doa, max_doa[row.fname.as_str()]);
    }
    scored.into_iter().collect()
}

/// Scale by the file's maximum. A non-positive maximum means nobody has a
/// meaningful claim; the top author(s) still get 1.0, everyone else 0.0.
fn normalize(raw: f64, max: f64) -> f64 {
    if max > 0.0 {
        raw / max
    } else if raw >= max {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod tests;
