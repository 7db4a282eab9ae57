use super::*;
use crate::error::ErrorKind;
use crate::test_support::{
    BASE_EPOCH, DAY, commit_as, create_test_repo, delete_as, git_available, lines,
};

#[test]
fn test_open_not_repo() {
    if !git_available() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("not_a_repo");
    std::fs::create_dir_all(&sub).unwrap();
    // A tempdir may sit inside some outer checkout; only assert the kind
    // when the open really failed.
    if let Err(err) = GitCli::open(&sub) {
        assert_eq!(err.kind(), ErrorKind::Environment);
    }
}

#[test]
fn test_head_commit() {
    if !git_available() {
        return;
    }
    let (dir, repo) = create_test_repo();
    let oid = commit_as(&repo, "Alice", &[("a.rs", "fn a() {}\n")], BASE_EPOCH);

    let git = GitCli::open(dir.path()).unwrap();
    assert_eq!(git.head_commit().unwrap(), oid.to_string());
}

#[test]
fn test_head_commit_empty_repo() {
    if !git_available() {
        return;
    }
    let (dir, _repo) = create_test_repo();
    let git = GitCli::open(dir.path()).unwrap();
    let err = git.head_commit().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Environment);
}

#[test]
fn test_count_commits() {
    if !git_available() {
        return;
    }
    let (dir, repo) = create_test_repo();
    for i in 0..5 {
        commit_as(
            &repo,
            "Alice",
            &[("a.rs", &lines(i + 1, "a"))],
            BASE_EPOCH + i as i64 * DAY,
        );
    }
    let git = GitCli::open(dir.path()).unwrap();
    assert_eq!(git.count_commits("HEAD").unwrap(), 5);
}

#[test]
fn test_log_page_format() {
    if !git_available() {
        return;
    }
    let (dir, repo) = create_test_repo();
    commit_as(&repo, "Alice", &[("a.rs", &lines(3, "a"))], BASE_EPOCH);
    commit_as(&repo, "Bob", &[("b.rs", &lines(2, "b"))], BASE_EPOCH + DAY);

    let git = GitCli::open(dir.path()).unwrap();
    let page = git.log_page("HEAD", 0, 10).unwrap();
    assert!(page.contains("Bob|2023-11-15\n2\t0\tb.rs"), "got: {page:?}");
    assert!(page.contains("Alice|2023-11-14\n3\t0\ta.rs"), "got: {page:?}");

    // newest first, so skipping one leaves only Alice
    let tail = git.log_page("HEAD", 1, 10).unwrap();
    assert!(!tail.contains("Bob"));
    assert!(tail.contains("Alice"));
}

#[test]
fn test_tracked_files_excludes_deleted() {
    if !git_available() {
        return;
    }
    let (dir, repo) = create_test_repo();
    commit_as(
        &repo,
        "Alice",
        &[("src/a.rs", "a\n"), ("src/gone.rs", "g\n")],
        BASE_EPOCH,
    );
    delete_as(&repo, "Alice", "src/gone.rs", BASE_EPOCH + DAY);

    let git = GitCli::open(dir.path()).unwrap();
    let files = git.tracked_files().unwrap();
    assert_eq!(files, vec!["src/a.rs".to_string()]);
}

#[test]
fn test_bad_reference_is_backend_error() {
    if !git_available() {
        return;
    }
    let (dir, repo) = create_test_repo();
    commit_as(&repo, "Alice", &[("a.rs", "a\n")], BASE_EPOCH);
    let git = GitCli::open(dir.path()).unwrap();
    let err = git.count_commits("no-such-ref").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Backend);
}
