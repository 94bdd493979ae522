use std::process::Command;

use crate::error::{AiTermError, Result};

/// Executes `git commit -m <message>`.
///
/// Uses the git CLI rather than libgit2 so GPG signing, commit hooks and
/// all other user git config keep working.
pub fn commit_changes(message: &str) -> Result<()> {
    let output = Command::new("git")
        .args(["commit", "-m", message])
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let error_msg = if stderr.trim().is_empty() {
            // Some git errors land on stdout instead of stderr.
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        } else {
            stderr.trim().to_string()
        };
        return Err(AiTermError::GitCommand(error_msg));
    }

    Ok(())
}
