use super::*;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_parse_block_basic() {
    let block = "Alice|2023-01-02\n3\t1\tsrc/a.rs\n0\t2\tsrc/b.rs";
    let records = parse_block(block);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].author, "Alice");
    assert_eq!(records[0].date, date("2023-01-02"));
    assert_eq!(records[0].fname, "src/a.rs");
    assert_eq!(records[0].inserted, 3);
    assert_eq!(records[0].deleted, 1);
    assert_eq!(records[0].total, 4);
    assert_eq!(records[1].fname, "src/b.rs");
    assert_eq!(records[1].total, 2);
}

#[test]
fn test_header_only_block() {
    assert!(parse_block("Alice|2023-01-02").is_empty());
}

#[test]
fn test_binary_marker_counts_zero() {
    let records = parse_block("Alice|2023-01-02\n-\t-\tlogo.png");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].inserted, 0);
    assert_eq!(records[0].deleted, 0);
    assert_eq!(records[0].total, 0);
}

#[test]
fn test_malformed_line_skipped() {
    let block = "Alice|2023-01-02\n5\t5\tsrc/a.rs\nBinary files differ\n1\t2\n2\t0\tsrc/b.rs";
    let records = parse_block(block);
    let names: Vec<&str> = records.iter().map(|r| r.fname.as_str()).collect();
    assert_eq!(names, vec!["src/a.rs", "src/b.rs"]);
    assert_eq!(records[0].total, 10);
    assert_eq!(records[1].total, 2);
}

#[test]
fn test_extra_tab_field_skipped() {
    let records = parse_block("Alice|2023-01-02\n1\t1\ta.rs\textra\n1\t0\tb.rs");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].fname, "b.rs");
}

#[test]
fn test_author_with_pipe() {
    let records = parse_block("Team|Bot|2023-01-02\n1\t0\ta.rs");
    assert_eq!(records[0].author, "Team|Bot");
}

#[test]
fn test_malformed_header_yields_nothing() {
    assert!(parse_block("Alice 2023-01-02\n1\t0\ta.rs").is_empty());
    assert!(parse_block("Alice|yesterday\n1\t0\ta.rs").is_empty());
}

#[test]
fn test_parse_is_idempotent() {
    let block = "Alice|2023-01-02\n3\t1\tsrc/a.rs\n-\t-\tbin.dat";
    assert_eq!(parse_block(block), parse_block(block));
}

#[test]
fn test_split_blocks_tolerates_extra_blank_lines() {
    let raw = "\nA|2023-01-01\n1\t0\ta.rs\n\n\nB|2023-01-02\n\nC|2023-01-03\n2\t0\tc.rs\n";
    let blocks: Vec<&str> = split_blocks(raw).collect();
    assert_eq!(
        blocks,
        vec!["A|2023-01-01\n1\t0\ta.rs", "B|2023-01-02", "C|2023-01-03\n2\t0\tc.rs"]
    );
}

#[test]
fn test_block_parser_matches_sequential() {
    let raw: String = (0..50)
        .map(|i| format!("Dev{}|2023-01-{:02}\n{i}\t1\tf{i}.rs\n1\t{i}\tg.rs", i % 3, i % 28 + 1))
        .collect::<Vec<_>>()
        .join("\n\n");
    let expected: Vec<ContributionRecord> =
        split_blocks(&raw).flat_map(parse_block).collect();
    assert_eq!(expected.len(), 100);

    for workers in [1, 3, 7, 32] {
        let parsed = BlockParser::new(workers).parse(&raw).unwrap();
        assert_eq!(parsed, expected, "workers = {workers}");
    }
}

#[test]
fn test_block_parser_empty_input() {
    assert!(BlockParser::new(4).parse("").unwrap().is_empty());
}
