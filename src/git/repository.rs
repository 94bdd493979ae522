use std::io::Write;
use std::path::Path;

use git2::{DiffOptions, Repository};

use crate::error::Result;
use crate::git::GitOperations;

/// Repository access through libgit2.
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Opens the repository containing the current directory.
    pub fn open() -> Result<Self> {
        let repo = Repository::discover(".")?;
        Ok(Self { repo })
    }

    /// Opens the repository at an explicit path. Used by tests.
    pub fn open_at(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(Self { repo })
    }

    fn is_empty(&self) -> Result<bool> {
        Ok(self.repo.is_empty()?)
    }

    fn staged_diff(&self) -> Result<git2::Diff<'_>> {
        let index = self.repo.index()?;
        let mut opts = DiffOptions::new();

        // Unborn HEAD: diff the empty tree against the index.
        if self.is_empty()? {
            return Ok(self
                .repo
                .diff_tree_to_index(None, Some(&index), Some(&mut opts))?);
        }

        let head_tree = self.repo.head()?.peel_to_tree()?;
        Ok(self
            .repo
            .diff_tree_to_index(Some(&head_tree), Some(&index), Some(&mut opts))?)
    }

    fn diff_to_string(diff: &git2::Diff) -> Result<String> {
        let mut output = Vec::new();
        diff.print(git2::DiffFormat::Patch, |_delta, _hunk, line| {
            // Prepend the origin marker for content lines; headers carry
            // their own prefixes.
            match line.origin() {
                '+' | '-' | ' ' => {
                    let _ = output.write_all(&[line.origin() as u8]);
                }
                _ => {}
            }
            let _ = output.write_all(line.content());
            true
        })?;
        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

impl GitOperations for GitRepository {
    fn has_staged_changes(&self) -> Result<bool> {
        let diff = self.staged_diff()?;
        Ok(diff.deltas().len() > 0)
    }

    fn get_staged_diff(&self) -> Result<String> {
        let diff = self.staged_diff()?;
        Self::diff_to_string(&diff)
    }
}
