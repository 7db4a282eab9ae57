//! Fixture repositories for tests that exercise the real git backend.

use std::fs;
use std::path::Path;

use git2::{Oid, Repository, Signature, Time};

use crate::git::GitCli;

/// 2023-11-14, a day boundary away from any timezone surprises.
pub const BASE_EPOCH: i64 = 1_700_000_000;
pub const DAY: i64 = 86_400;

/// Tests that shell out to git return early when it is missing.
pub fn git_available() -> bool {
    GitCli::is_available()
}

pub fn create_test_repo() -> (tempfile::TempDir, Repository) {
    let dir = tempfile::tempdir().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Test").unwrap();
    config.set_str("user.email", "test@test.com").unwrap();
    (dir, repo)
}

fn write_commit(repo: &Repository, author: &str, message: &str, epoch: i64) -> Oid {
    let email = format!("{}@test.com", author.to_lowercase().replace(' ', "."));
    let sig = Signature::new(author, &email, &Time::new(epoch, 0)).unwrap();
    let mut index = repo.index().unwrap();
    index.write().unwrap();
    let tree_oid = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_oid).unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap()
}

/// Write `files` and commit them as `author` at `epoch`.
pub fn commit_as(repo: &Repository, author: &str, files: &[(&str, &str)], epoch: i64) -> Oid {
    let mut index = repo.index().unwrap();
    for (path, content) in files {
        let full_path = repo.workdir().unwrap().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        index.add_path(Path::new(path)).unwrap();
    }
    index.write().unwrap();
    write_commit(repo, author, "change", epoch)
}

/// Delete `path` from the tree and commit the removal.
pub fn delete_as(repo: &Repository, author: &str, path: &str, epoch: i64) -> Oid {
    let mut index = repo.index().unwrap();
    fs::remove_file(repo.workdir().unwrap().join(path)).unwrap();
    index.remove_path(Path::new(path)).unwrap();
    index.write().unwrap();
    write_commit(repo, author, "delete", epoch)
}

/// `n` lines of filler so churn counts are predictable.
pub fn lines(n: usize, tag: &str) -> String {
    (0..n).map(|i| format!("{tag} {i}\n")).collect()
}
