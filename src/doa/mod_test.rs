use super::*;
use crate::error::{ErrorKind, TruckFactorError};
use crate::test_support::{BASE_EPOCH, DAY, commit_as, create_test_repo, git_available, lines};

#[test]
fn run_on_missing_dir() {
    let dir = tempfile::tempdir().unwrap();
    let err = run(&dir.path().join("nope"), &Config::default(), None, false, 20).unwrap_err();
    let err = err.downcast::<TruckFactorError>().unwrap();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn integration_doa_for_path() {
    if !git_available() {
        return;
    }
    let (dir, repo) = create_test_repo();
    commit_as(&repo, "Alice", &[("src/a.rs", &lines(10, "a"))], BASE_EPOCH);
    commit_as(
        &repo,
        "Bob",
        &[("src/a.rs", &(lines(10, "a") + &lines(30, "b")))],
        BASE_EPOCH + DAY,
    );
    commit_as(&repo, "Bob", &[("src/b.rs", &lines(5, "b"))], BASE_EPOCH + 2 * DAY);

    let table = doa_for_path(dir.path(), &Config::default(), None).unwrap();
    assert_eq!(table.file_count(), 2);

    let alice = table.get("src/a.rs", "Alice").unwrap();
    let bob = table.get("src/a.rs", "Bob").unwrap();
    assert!(alice.first_author);
    assert_eq!(alice.churn, 10);
    assert_eq!(bob.churn, 30);
    assert_eq!(bob.doa, 1.0);
    assert!(alice.doa < 1.0);
    assert_eq!(table.get("src/b.rs", "Bob").unwrap().doa, 1.0);

    assert!(run(dir.path(), &Config::default(), None, true, 5).is_ok());
    assert!(run(dir.path(), &Config::default(), None, false, 1).is_ok());
}
