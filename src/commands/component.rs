//! `component`: generates a UI component and writes it into the project.

use std::path::Path;

use crate::config::ConfigStore;
use crate::error::{AiTermError, Result};
use crate::ollama::{ChatRequest, GenerationOptions, Message, OllamaClient};
use crate::prompt::{component_prompt, ComponentSelection};
use crate::scaffold::{extract_code_blocks, validate_name_and_path, write_component};
use crate::ui;

pub async fn run(
    store: &ConfigStore,
    name: &str,
    custom_path: Option<&str>,
    colored: bool,
) -> Result<()> {
    let client = OllamaClient::from_store(store)?;
    run_with_deps(&client, store, Path::new("."), name, custom_path, colored).await
}

pub async fn run_with_deps(
    client: &OllamaClient,
    store: &ConfigStore,
    root: &Path,
    name: &str,
    custom_path: Option<&str>,
    colored: bool,
) -> Result<()> {
    // Validate before prompting so bad input fails before any typing.
    validate_name_and_path(root, name, custom_path)?;

    let framework = ui::select(
        "Framework:",
        vec!["React".to_string(), "Vue".to_string()],
    )?;
    let language = ui::select(
        "Language:",
        vec!["TypeScript".to_string(), "JavaScript".to_string()],
    )?;
    let css_flavor = ui::select(
        "Styling:",
        vec!["css".to_string(), "less".to_string(), "scss".to_string()],
    )?;
    let description = ui::text("Describe the component:", None)?;
    if description.trim().is_empty() {
        return Err(AiTermError::InvalidInput(
            "a component description is required".to_string(),
        ));
    }

    let selection = ComponentSelection {
        framework: framework.clone(),
        language: language.clone(),
        css_flavor: css_flavor.clone(),
        description,
    };

    let model = store.resolve_model()?;
    let request = ChatRequest::new(model, vec![Message::user(component_prompt(&selection))])
        .with_options(GenerationOptions::creative());

    let spinner = ui::Spinner::new(&format!("Generating component {}...", name));
    let response = client.chat(&request).await;
    spinner.finish_and_clear();

    let blocks = extract_code_blocks(&response?.message.content);
    let files = write_component(
        root,
        name,
        custom_path,
        &framework,
        &language,
        &css_flavor,
        &blocks,
    )?;

    ui::success(
        &format!("Component written to {}", files.component.display()),
        colored,
    );
    if let Some(style) = files.style {
        ui::success(&format!("Styles written to {}", style.display()), colored);
    }
    Ok(())
}
