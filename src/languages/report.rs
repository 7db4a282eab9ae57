/// Report formatters for the extension breakdown.
use serde::Serialize;

use super::ExtensionReport;
use crate::report_helpers;

pub fn print_report(reports: &[ExtensionReport], threshold: f64) {
    if reports.is_empty() {
        println!("No tracked files with history found.");
        return;
    }

    let ext_w = report_helpers::max_width(reports.iter().map(|r| r.share.extension.as_str()), 9);
    let separator = report_helpers::separator((ext_w + 50).max(60));

    println!("Source Extensions (threshold {:.0}%)", threshold * 100.0);
    println!("{separator}");
    println!(
        " {:<ew$}  {:>6}  {:>6}  {:<10}  Languages",
        "Extension",
        "Files",
        "Share",
        "Status",
        ew = ext_w
    );
    println!("{separator}");
    for r in reports {
        println!(
            " {:<ew$}  {:>6}  {:>5.1}%  {:<10}  {}",
            r.share.extension,
            r.share.files,
            r.share.share * 100.0,
            r.selection.label(),
            r.languages.join(", "),
            ew = ext_w
        );
    }
    println!("{separator}");
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    extension: &'a str,
    files: usize,
    share: f64,
    languages: &'a [&'static str],
    status: &'static str,
}

pub fn print_json(reports: &[ExtensionReport]) -> Result<(), Box<dyn std::error::Error>> {
    let entries: Vec<JsonEntry> = reports
        .iter()
        .map(|r| JsonEntry {
            extension: &r.share.extension,
            files: r.share.files,
            share: report_helpers::round3(r.share.share),
            languages: &r.languages,
            status: r.selection.label(),
        })
        .collect();
    report_helpers::print_json_stdout(&entries)
}
