//! `review`: asks the model to review the staged diff and writes the
//! findings to `code_review.md`.

use std::path::Path;

use crate::config::ConfigStore;
use crate::error::{AiTermError, Result};
use crate::git::diff::filter_diff;
use crate::git::{GitOperations, GitRepository};
use crate::ollama::{ChatRequest, GenerationOptions, Message, OllamaClient};
use crate::prompt::review_system_prompt;
use crate::ui;

const REVIEW_FILE: &str = "code_review.md";

pub async fn run(store: &ConfigStore, colored: bool) -> Result<()> {
    let repo = GitRepository::open()?;
    let client = OllamaClient::from_store(store)?;
    run_with_deps(&repo, &client, store, Path::new("."), colored).await
}

/// Testable entry point; `out_dir` is where the review file lands.
pub async fn run_with_deps(
    repo: &dyn GitOperations,
    client: &OllamaClient,
    store: &ConfigStore,
    out_dir: &Path,
    colored: bool,
) -> Result<()> {
    if !repo.has_staged_changes()? {
        return Err(AiTermError::NoStagedChanges);
    }

    let raw_diff = repo.get_staged_diff()?;
    let (diff, stats) = filter_diff(&raw_diff);
    if diff.trim().is_empty() {
        return Err(AiTermError::NoStagedChanges);
    }

    ui::step("1/2", &ui::format_diff_stats(&stats, false), colored);

    let model = store.resolve_model()?;
    let request = ChatRequest::new(
        model,
        vec![
            Message::system(review_system_prompt()),
            Message::user(diff),
        ],
    )
    .with_options(GenerationOptions::focused());

    let spinner = ui::Spinner::new("Reviewing staged changes...");
    let response = client.chat(&request).await;
    spinner.finish_and_clear();

    let review = response?.message.content;
    let out_path = out_dir.join(REVIEW_FILE);
    std::fs::write(&out_path, &review)?;

    ui::step("2/2", "Review complete.", colored);
    ui::success(
        &format!("Review written to {}", out_path.display()),
        colored,
    );
    Ok(())
}
