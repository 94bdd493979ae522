//! Git operations used by the commit and review flows.

pub mod commit;
pub mod diff;
pub mod repository;

use crate::error::Result;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Summary statistics for a diff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Changed file names, relative to the repository root.
    pub files_changed: Vec<String>,
    pub insertions: usize,
    pub deletions: usize,
}

/// Interface over the local repository.
///
/// Implemented by [`GitRepository`](repository::GitRepository); mocked in
/// tests so command flows can run against canned diffs.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait GitOperations {
    /// Whether the index holds any staged changes.
    fn has_staged_changes(&self) -> Result<bool>;

    /// The staged diff (HEAD tree vs index), equivalent to
    /// `git diff --cached`. May be empty.
    fn get_staged_diff(&self) -> Result<String>;
}

pub use commit::commit_changes;
pub use repository::GitRepository;
