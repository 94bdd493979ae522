use crate::config::ConfigStore;
use crate::error::Result;
use crate::ui;

/// Creates the config file and checks for a usable `ollama` binary.
pub fn run(store: &ConfigStore, colored: bool) -> Result<()> {
    let created = store.ensure_exists()?;

    if created {
        ui::success(
            &format!("Created config file at {}", store.path().display()),
            colored,
        );
    } else {
        ui::info(
            &format!("Config file already exists at {}", store.path().display()),
            colored,
        );
    }

    match which::which("ollama") {
        Ok(path) => {
            ui::success(&format!("Found ollama at {}", path.display()), colored);
        }
        Err(_) => {
            ui::warning(
                "Could not find 'ollama' on PATH. Install it from https://ollama.com/download",
                colored,
            );
        }
    }

    Ok(())
}
