use inquire::{Confirm, InquireError, Select, Text};

use crate::error::{AiTermError, Result};

fn map_inquire_error(err: InquireError) -> AiTermError {
    match err {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            AiTermError::UserCancelled
        }
        other => AiTermError::Prompt(other),
    }
}

/// Yes/no confirmation.
pub fn confirm(message: &str, default: bool) -> Result<bool> {
    Confirm::new(message)
        .with_default(default)
        .prompt()
        .map_err(map_inquire_error)
}

/// Single choice from a fixed list.
pub fn select(message: &str, options: Vec<String>) -> Result<String> {
    Select::new(message, options)
        .prompt()
        .map_err(map_inquire_error)
}

/// Free-form text input with an optional pre-filled default.
pub fn text(message: &str, default: Option<&str>) -> Result<String> {
    let mut prompt = Text::new(message);
    if let Some(default) = default {
        prompt = prompt.with_default(default);
    }
    prompt.prompt().map_err(map_inquire_error)
}
