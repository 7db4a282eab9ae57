/// Report formatters for the truck factor.
///
/// Shows the factor, the quorum it was measured against, and the authors
/// whose departure orphans the codebase, in removal order.
use serde::Serialize;

use super::analyzer::{RemovedAuthor, TruckFactor};
use crate::config::Config;
use crate::report_helpers;

pub fn print_report(tf: &TruckFactor, config: &Config) {
    println!("Truck Factor: {}", tf.factor);
    println!(
        "  {} files owned by {} authors (authorship >= {:.2})",
        tf.owned_files, tf.owners, config.authorship_threshold
    );
    println!(
        "  search stops at <= {:.1} owned files (orphan threshold {:.2})",
        tf.quorum, config.orphan_threshold
    );

    if tf.removed.is_empty() {
        return;
    }

    let name_w = report_helpers::max_width(tf.removed.iter().map(|r| r.author.as_str()), 6);
    let separator = report_helpers::separator((name_w + 18).max(40));
    println!();
    println!("{separator}");
    println!(" {:>3}  {:<nw$}  {:>10}", "#", "Author", "Owned", nw = name_w);
    println!("{separator}");
    for (i, r) in tf.removed.iter().enumerate() {
        println!(" {:>3}  {:<nw$}  {:>10}", i + 1, r.author, r.files, nw = name_w);
    }
    println!("{separator}");
}

#[derive(Serialize)]
struct JsonReport<'a> {
    truck_factor: usize,
    owned_files: usize,
    owners: usize,
    quorum: f64,
    authorship_threshold: f64,
    orphan_threshold: f64,
    removed: &'a [RemovedAuthor],
}

pub fn print_json(tf: &TruckFactor, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(&JsonReport {
        truck_factor: tf.factor,
        owned_files: tf.owned_files,
        owners: tf.owners,
        quorum: report_helpers::round3(tf.quorum),
        authorship_threshold: config.authorship_threshold,
        orphan_threshold: config.orphan_threshold,
        removed: &tf.removed,
    })
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
