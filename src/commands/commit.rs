//! `commit`: generates a conventional commit message for the staged diff.

use colored::Colorize;

use crate::commands::CommitOptions;
use crate::config::ConfigStore;
use crate::error::{AiTermError, Result};
use crate::git::{commit_changes, GitOperations, GitRepository};
use crate::git::diff::filter_diff;
use crate::ollama::{ChatRequest, GenerationOptions, Message, OllamaClient};
use crate::prompt::{commit_system_prompt, CommitPromptOptions};
use crate::scaffold::strip_emphasis;
use crate::ui;

pub async fn run(store: &ConfigStore, options: CommitOptions, colored: bool) -> Result<()> {
    let repo = GitRepository::open()?;
    let client = OllamaClient::from_store(store)?;
    run_with_deps(&repo, &client, store, options, colored).await
}

/// Testable entry point taking the repository as a trait object.
pub async fn run_with_deps(
    repo: &dyn GitOperations,
    client: &OllamaClient,
    store: &ConfigStore,
    options: CommitOptions,
    colored: bool,
) -> Result<()> {
    if !repo.has_staged_changes()? {
        return Err(AiTermError::NoStagedChanges);
    }

    let raw_diff = repo.get_staged_diff()?;
    let (diff, stats) = filter_diff(&raw_diff);
    if diff.trim().is_empty() {
        ui::warning(
            "All staged changes are auto-generated files; nothing to describe.",
            colored,
        );
        return Err(AiTermError::NoStagedChanges);
    }

    ui::step("1/3", &ui::format_diff_stats(&stats, false), colored);

    let message = generate_message(client, store, &diff).await?;
    display_message(&message, colored);

    if options.dry_run {
        return Ok(());
    }

    let message = if options.yes {
        message
    } else if ui::confirm("Commit with this message?", true)? {
        message
    } else {
        // Declining the generated message falls back to manual entry.
        let manual = ui::text("Enter a commit message:", None)?;
        if manual.trim().is_empty() {
            return Err(AiTermError::UserCancelled);
        }
        manual
    };

    ui::step("3/3", "Creating commit...", colored);
    commit_changes(&message)?;
    ui::success("Commit created successfully!", colored);
    Ok(())
}

async fn generate_message(
    client: &OllamaClient,
    store: &ConfigStore,
    diff: &str,
) -> Result<String> {
    let model = store.resolve_model()?;
    let request = ChatRequest::new(
        model,
        vec![
            Message::system(commit_system_prompt(&CommitPromptOptions::default())),
            Message::user(diff),
        ],
    )
    .with_options(GenerationOptions::focused());

    let spinner = ui::Spinner::new("Generating commit message...");
    let response = client.chat(&request).await;
    spinner.finish_and_clear();

    let message = strip_emphasis(&response?.message.content);
    if message.is_empty() {
        return Err(AiTermError::Other(
            "The model returned an empty commit message".to_string(),
        ));
    }
    Ok(message)
}

fn display_message(message: &str, colored: bool) {
    ui::step("2/3", "Generated commit message:", colored);
    if colored {
        println!("\n{}\n", message.yellow());
    } else {
        println!("\n{}\n", message);
    }
}
