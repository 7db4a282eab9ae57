use super::*;
use crate::test_support::{BASE_EPOCH, commit_as, create_test_repo, git_available};

fn share(ext: &str, files: usize, share: f64) -> ExtensionShare {
    ExtensionShare {
        extension: ext.to_string(),
        files,
        share,
    }
}

#[test]
fn test_classify() {
    let reports = classify(
        vec![
            share(".py", 5, 0.5),
            share(".json", 4, 0.4),
            share(".md", 1, 0.1),
        ],
        0.35,
    );
    let selections: Vec<Selection> = reports.iter().map(|r| r.selection).collect();
    assert_eq!(
        selections,
        vec![Selection::Selected, Selection::NotCode, Selection::BelowThreshold]
    );
    assert_eq!(reports[0].languages, vec!["Python"]);
}

#[test]
fn test_reports_print() {
    let reports = classify(vec![share(".rs", 3, 0.75), share(".toml", 1, 0.25)], 0.35);
    report::print_report(&reports, 0.35);
    report::print_report(&[], 0.35);
    report::print_json(&reports).unwrap();
}

#[test]
fn integration_languages_for_path() {
    if !git_available() {
        return;
    }
    let (dir, repo) = create_test_repo();
    commit_as(
        &repo,
        "Alice",
        &[
            ("src/a.rs", "fn a() {}\n"),
            ("src/b.rs", "fn b() {}\n"),
            ("Cargo.toml", "[package]\n"),
        ],
        BASE_EPOCH,
    );
    let reports = languages_for_path(dir.path(), &Config::default(), None).unwrap();
    assert_eq!(reports[0].share.extension, ".rs");
    assert_eq!(reports[0].selection, Selection::Selected);
    assert_eq!(reports[1].share.extension, ".toml");
    assert_eq!(reports[1].selection, Selection::BelowThreshold);
}
