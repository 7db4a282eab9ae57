/// Report formatters for Degree of Authorship.
///
/// One row per (file, author) with churn, first-author flag and the
/// normalized score.
use serde::Serialize;

use super::analyzer::AuthorFileDoa;
use crate::report_helpers;

/// Print a table of authorship scores.
pub fn print_report(rows: &[AuthorFileDoa], total: usize) {
    if rows.is_empty() {
        println!("No authorship data found.");
        return;
    }

    let file_w = report_helpers::max_width(rows.iter().map(|r| r.fname.as_str()), 4);
    let author_w = report_helpers::max_width(rows.iter().map(|r| r.author.as_str()), 6);
    let separator = report_helpers::separator((file_w + author_w + 36).max(60));

    println!("Degree of Authorship");
    println!("{separator}");
    println!(
        " {:<fw$}  {:<aw$}  {:>8}  {:>8}  {:>3}  {:>6}",
        "File",
        "Author",
        "Churn",
        "Others",
        "FA",
        "DOA",
        fw = file_w,
        aw = author_w,
    );
    println!("{separator}");

    for r in rows {
        println!(
            " {:<fw$}  {:<aw$}  {:>8}  {:>8}  {:>3}  {:>6.3}",
            r.fname,
            r.author,
            r.churn,
            r.others_churn,
            if r.first_author { "yes" } else { "" },
            r.doa,
            fw = file_w,
            aw = author_w,
        );
    }

    println!("{separator}");
    if total > rows.len() {
        println!();
        println!("{total} author/file pairs ({shown} shown).", shown = rows.len());
    }
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    file: &'a str,
    author: &'a str,
    churn: u64,
    others_churn: u64,
    first_author: bool,
    doa: f64,
}

/// Serialize authorship rows as pretty-printed JSON to stdout.
pub fn print_json(rows: &[AuthorFileDoa]) -> Result<(), Box<dyn std::error::Error>> {
    let entries: Vec<JsonEntry> = rows
        .iter()
        .map(|r| JsonEntry {
            file: &r.fname,
            author: &r.author,
            churn: r.churn,
            others_churn: r.others_churn,
            first_author: r.first_author,
            doa: report_helpers::round3(r.doa),
        })
        .collect();

    report_helpers::print_json_stdout(&entries)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
