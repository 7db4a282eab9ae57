use super::*;

fn sample_rows() -> Vec<AuthorFileDoa> {
    vec![
        AuthorFileDoa {
            fname: "src/auth/jwt.rs".into(),
            author: "Alice".into(),
            churn: 120,
            others_churn: 14,
            first_author: true,
            raw_doa: 24.1,
            doa: 1.0,
        },
        AuthorFileDoa {
            fname: "src/auth/jwt.rs".into(),
            author: "Bob".into(),
            churn: 14,
            others_churn: 120,
            first_author: false,
            raw_doa: 4.05,
            doa: 0.168,
        },
    ]
}

#[test]
fn print_report_does_not_panic() {
    print_report(&sample_rows(), 10);
}

#[test]
fn print_report_empty() {
    print_report(&[], 0);
}

#[test]
fn print_json_does_not_panic() {
    print_json(&sample_rows()).unwrap();
}

#[test]
fn print_json_empty() {
    print_json(&[]).unwrap();
}
