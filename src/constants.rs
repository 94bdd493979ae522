//! Global constants.

/// Config file related constants.
pub mod config {
    /// Config file name, created directly under the user's home directory.
    pub const CONFIG_FILE_NAME: &str = "ai_terminal.config.json";

    /// Default Ollama host written on first run.
    pub const DEFAULT_HOST: &str = "http://127.0.0.1:11434";
}

/// Ollama API related constants.
pub mod api {
    /// Chat endpoint suffix (`POST {host}/api/chat`).
    pub const CHAT_SUFFIX: &str = "/api/chat";

    /// Installed-model listing suffix (`GET {host}/api/tags`).
    pub const TAGS_SUFFIX: &str = "/api/tags";

    /// Request timeout in seconds. Local models can be slow to load,
    /// but a single generation should never take longer than this.
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;

    /// Public model catalog page, used by `list available`.
    pub const LIBRARY_URL: &str = "https://ollama.com/library";

    /// Catalog cache file name under the user's home directory.
    pub const CATALOG_CACHE_FILE: &str = "ollama_models.json";
}

/// Generation option defaults shared by commit/review/scaffold requests.
pub mod generation {
    pub const TOP_P: f32 = 0.9;
    pub const TEMPERATURE: f32 = 0.6;
    pub const NUM_PREDICT: u32 = 256;
    pub const REPEAT_PENALTY: f32 = 1.2;
    pub const TOP_K: u32 = 50;
}

/// Commit prompt defaults.
pub mod commit {
    /// Default language for generated commit messages.
    pub const DEFAULT_LOCALE: &str = "en";

    /// Maximum commit message length handed to the model.
    pub const MAX_MESSAGE_LENGTH: usize = 200;
}
