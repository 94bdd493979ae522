//! `hooks`: generates a custom hook under `src/hooks/`.

use std::path::Path;

use crate::config::ConfigStore;
use crate::error::{AiTermError, Result};
use crate::ollama::{ChatRequest, GenerationOptions, Message, OllamaClient};
use crate::prompt::{hook_prompt, HookSelection};
use crate::scaffold::{extract_code_blocks, write_hook, writer::validate_name};
use crate::ui;

pub async fn run(store: &ConfigStore, name: &str, colored: bool) -> Result<()> {
    let client = OllamaClient::from_store(store)?;
    run_with_deps(&client, store, Path::new("."), name, colored).await
}

pub async fn run_with_deps(
    client: &OllamaClient,
    store: &ConfigStore,
    root: &Path,
    name: &str,
    colored: bool,
) -> Result<()> {
    validate_name(name)?;

    let framework = ui::select(
        "Framework:",
        vec!["React".to_string(), "Vue".to_string()],
    )?;
    let language = ui::select(
        "Language:",
        vec!["TypeScript".to_string(), "JavaScript".to_string()],
    )?;
    let description = ui::text("Describe the hook:", None)?;
    if description.trim().is_empty() {
        return Err(AiTermError::InvalidInput(
            "a hook description is required".to_string(),
        ));
    }

    let selection = HookSelection {
        framework,
        language: language.clone(),
        description,
    };

    let model = store.resolve_model()?;
    let request = ChatRequest::new(model, vec![Message::user(hook_prompt(&selection))])
        .with_options(GenerationOptions::creative());

    let spinner = ui::Spinner::new(&format!("Generating hook {}...", name));
    let response = client.chat(&request).await;
    spinner.finish_and_clear();

    let blocks = extract_code_blocks(&response?.message.content);
    let path = write_hook(root, name, &language, &blocks)?;

    ui::success(&format!("Hook written to {}", path.display()), colored);
    Ok(())
}
