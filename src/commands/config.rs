//! Config subcommands: set, get, set-host and set-model.

use crate::config::{ConfigKey, ConfigStore, SetOutcome};
use crate::constants::config::DEFAULT_HOST;
use crate::error::{AiTermError, Result};
use crate::ollama::OllamaClient;
use crate::ui;

/// `set <key> <value>`: writes one recognized key.
///
/// An unrecognized key is reported and ignored; the file is left as-is.
pub fn set(store: &ConfigStore, key: &str, value: &str, colored: bool) -> Result<()> {
    match store.set(key, value)? {
        SetOutcome::Updated => {
            ui::success(&format!("Set {} = {}", key, value), colored);
        }
        SetOutcome::Rejected { key } => {
            ui::warning(
                &format!("Unrecognized config key '{}'; nothing was changed", key),
                colored,
            );
        }
    }
    Ok(())
}

/// `get <key>`: prints the stored value.
pub fn get(store: &ConfigStore, key: &str, colored: bool) -> Result<()> {
    match store.get(key)? {
        Some(value) => println!("{}", value),
        None => {
            ui::warning(&format!("Unrecognized config key '{}'", key), colored);
        }
    }
    Ok(())
}

/// `set-host [host]`: records the Ollama endpoint, prompting when the
/// argument is omitted.
pub fn set_host(store: &ConfigStore, host: Option<&str>, colored: bool) -> Result<()> {
    let host = match host {
        Some(host) => host.to_string(),
        None => ui::text("Ollama host:", Some(DEFAULT_HOST))?,
    };

    validate_host(&host)?;
    store.set_key(ConfigKey::Host, &host)?;
    ui::success(&format!("Host set to {}", host), colored);
    Ok(())
}

/// `set-model`: picks the default model from those installed locally.
pub async fn set_model(store: &ConfigStore, client: &OllamaClient, colored: bool) -> Result<()> {
    let models = client.list_models().await?;
    if models.is_empty() {
        return Err(AiTermError::Config(
            "No models are installed. Pull one first, e.g. 'ollama pull llama3.2'".to_string(),
        ));
    }

    let names: Vec<String> = models.into_iter().map(|m| m.name).collect();
    let choice = ui::select("Select the default model:", names)?;

    store.set_key(ConfigKey::Model, &choice)?;
    ui::success(&format!("Default model set to {}", choice), colored);
    Ok(())
}

fn validate_host(host: &str) -> Result<()> {
    if host.starts_with("http://") || host.starts_with("https://") {
        Ok(())
    } else {
        Err(AiTermError::InvalidInput(format!(
            "invalid host '{}': expected an http:// or https:// URL",
            host
        )))
    }
}
