use thiserror::Error;

pub type Result<T> = std::result::Result<T, AiTermError>;

#[derive(Error, Debug)]
pub enum AiTermError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response from the Ollama API. The status code is kept so
    /// callers and logs can distinguish auth failures from server errors.
    #[error("Ollama API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Git command failed: {0}")]
    GitCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("No staged changes found")]
    NoStagedChanges,

    #[error("Operation cancelled by user")]
    UserCancelled,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Catch-all for errors that fit no other category.
    #[error("{0}")]
    Other(String),
}

impl AiTermError {
    /// Returns a short hint telling the operator how to resolve the error.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            AiTermError::NoStagedChanges => {
                Some("Run 'git add <files>' to stage your changes first")
            }
            AiTermError::Config(msg) if msg.contains("No model selected") => {
                Some("Run 'ai-terminal set-model' to pick an installed model")
            }
            AiTermError::Network(_) => {
                Some("Check that the Ollama server is running ('ollama serve') and the configured host is reachable")
            }
            AiTermError::Api { status: 401, .. } | AiTermError::Api { status: 403, .. } => {
                Some("The Ollama host rejected the request. Check the configured host and any proxy in front of it")
            }
            AiTermError::Api { status: 404, .. } => {
                Some("Model not found on the server. Run 'ollama pull <model>' or 'ai-terminal set-model'")
            }
            AiTermError::Api { status, .. } if *status >= 500 => {
                Some("The Ollama server reported an internal error. Check 'ollama serve' logs and try again")
            }
            _ => None,
        }
    }
}
