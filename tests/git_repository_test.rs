//! Repository edge cases: fresh repos, unborn HEAD, odd file names.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use ai_terminal_rs::error::{AiTermError, Result};
use ai_terminal_rs::git::{GitOperations, GitRepository};

fn init_git_repo(path: &Path) -> Result<git2::Repository> {
    git2::Repository::init(path).map_err(AiTermError::from)
}

fn create_test_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    fs::write(repo_path.join(filename), content)?;
    Ok(())
}

fn add_file_to_index(repo: &git2::Repository, filename: &str) -> Result<()> {
    let mut index = repo.index()?;
    index.add_path(Path::new(filename))?;
    index.write()?;
    Ok(())
}

fn create_commit(repo: &git2::Repository, message: &str) -> Result<git2::Oid> {
    let mut index = repo.index()?;
    let tree_id = index.write_tree()?;
    let tree = repo.find_tree(tree_id)?;
    let sig = git2::Signature::now("Test User", "test@example.com")?;

    let head = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = head.iter().collect();

    Ok(repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)?)
}

#[test]
fn staged_diff_on_unborn_head() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let repo = init_git_repo(temp_dir.path())?;

    create_test_file(temp_dir.path(), "test.txt", "content\n")?;
    add_file_to_index(&repo, "test.txt")?;

    let git_repo = GitRepository::open_at(temp_dir.path())?;
    let diff = git_repo.get_staged_diff()?;

    assert!(diff.contains("test.txt"));
    assert!(diff.contains("+content"));
    Ok(())
}

#[test]
fn staged_diff_against_existing_head() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let repo = init_git_repo(temp_dir.path())?;

    create_test_file(temp_dir.path(), "test.txt", "old\n")?;
    add_file_to_index(&repo, "test.txt")?;
    create_commit(&repo, "initial")?;

    create_test_file(temp_dir.path(), "test.txt", "new\n")?;
    add_file_to_index(&repo, "test.txt")?;

    let git_repo = GitRepository::open_at(temp_dir.path())?;
    let diff = git_repo.get_staged_diff()?;

    assert!(diff.contains("-old"));
    assert!(diff.contains("+new"));
    Ok(())
}

#[test]
fn has_staged_changes_true_and_false() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let repo = init_git_repo(temp_dir.path())?;

    let git_repo = GitRepository::open_at(temp_dir.path())?;
    assert!(!git_repo.has_staged_changes()?);

    create_test_file(temp_dir.path(), "test.txt", "content\n")?;
    add_file_to_index(&repo, "test.txt")?;
    assert!(git_repo.has_staged_changes()?);
    Ok(())
}

#[test]
fn unstaged_working_tree_changes_are_not_reported() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let repo = init_git_repo(temp_dir.path())?;

    create_test_file(temp_dir.path(), "test.txt", "committed\n")?;
    add_file_to_index(&repo, "test.txt")?;
    create_commit(&repo, "initial")?;

    // Modified but never staged.
    create_test_file(temp_dir.path(), "test.txt", "dirty\n")?;

    let git_repo = GitRepository::open_at(temp_dir.path())?;
    assert!(!git_repo.has_staged_changes()?);
    Ok(())
}

#[test]
fn paths_with_spaces_survive() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let repo = init_git_repo(temp_dir.path())?;

    create_test_file(temp_dir.path(), "file with spaces.txt", "content\n")?;
    add_file_to_index(&repo, "file with spaces.txt")?;

    let git_repo = GitRepository::open_at(temp_dir.path())?;
    let diff = git_repo.get_staged_diff()?;
    assert!(diff.contains("file with spaces.txt"));
    Ok(())
}

#[test]
fn open_at_outside_a_repo_fails() {
    let temp_dir = TempDir::new().unwrap();
    let result = GitRepository::open_at(temp_dir.path());
    assert!(matches!(result, Err(AiTermError::Git(_))));
}
