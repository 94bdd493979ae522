use std::path::{Path, PathBuf};
use std::str::FromStr;

use directories::UserDirs;
use serde::{Deserialize, Serialize};

use crate::constants::config::{CONFIG_FILE_NAME, DEFAULT_HOST};
use crate::error::{AiTermError, Result};

/// Recognized configuration keys.
///
/// The persisted document contains exactly these keys and nothing else.
/// Anything that fails to parse here is rejected before it can touch the
/// file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// Base URL of the Ollama server.
    Host,
    /// Identifier of the selected model.
    Model,
}

impl ConfigKey {
    /// All recognized keys, in document order.
    pub const ALL: [ConfigKey; 2] = [ConfigKey::Host, ConfigKey::Model];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::Host => "host",
            ConfigKey::Model => "model",
        }
    }
}

impl std::fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "host" => Ok(ConfigKey::Host),
            "model" => Ok(ConfigKey::Model),
            _ => Err(format!("Unrecognized config key: '{}'", s)),
        }
    }
}

/// The persisted configuration document.
///
/// `deny_unknown_fields` keeps hand-edited files honest: a document that
/// grew extra keys is reported as corrupt instead of silently rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigDocument {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default)]
    pub model: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self {
            host: default_host(),
            model: String::new(),
        }
    }
}

/// Outcome of a [`ConfigStore::set`] call.
///
/// An unrecognized key is an expected, recoverable condition, so it is a
/// tagged result rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetOutcome {
    /// Value stored; the full document was rewritten.
    Updated,
    /// Key not recognized; the document on disk was left untouched.
    Rejected { key: String },
}

/// Single source of truth for user-level persistent settings.
///
/// Concurrent CLI invocations against the same file may race; the last
/// writer wins. Acceptable for a single-shot, human-driven tool.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Opens the store at the default location under the user's home.
    pub fn new() -> Result<Self> {
        let dirs = UserDirs::new().ok_or_else(|| {
            AiTermError::Config("Could not determine the user home directory".to_string())
        })?;
        Ok(Self {
            path: dirs.home_dir().join(CONFIG_FILE_NAME),
        })
    }

    /// Opens the store at an explicit path. Used by tests.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the config file with defaults if it does not exist yet.
    ///
    /// Returns `true` if the file was created, `false` if it already
    /// existed. Idempotent; safe to call on every invocation.
    pub fn ensure_exists(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        let document = ConfigDocument::default();
        self.write_document(&document)?;
        tracing::info!("Created default config file at {}", self.path.display());
        Ok(true)
    }

    /// Returns the value for `key`, or `Ok(None)` if the key is not
    /// recognized. Creates the file with defaults on first access.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let key = match ConfigKey::from_str(key) {
            Ok(key) => key,
            Err(msg) => {
                tracing::warn!("{}", msg);
                return Ok(None);
            }
        };

        self.ensure_exists()?;
        let document = self.read_document()?;
        Ok(Some(self.value_of(&document, key)))
    }

    /// Typed variant of [`get`](Self::get) for internal callers that
    /// already hold a [`ConfigKey`].
    pub fn get_key(&self, key: ConfigKey) -> Result<String> {
        self.ensure_exists()?;
        let document = self.read_document()?;
        Ok(self.value_of(&document, key))
    }

    /// Stores `value` under `key`, rewriting the whole document.
    ///
    /// An unrecognized key yields [`SetOutcome::Rejected`] and leaves the
    /// persisted document unchanged.
    pub fn set(&self, key: &str, value: &str) -> Result<SetOutcome> {
        let key = match ConfigKey::from_str(key) {
            Ok(key) => key,
            Err(msg) => {
                tracing::warn!("{}", msg);
                return Ok(SetOutcome::Rejected {
                    key: key.to_string(),
                });
            }
        };

        self.set_key(key, value)?;
        Ok(SetOutcome::Updated)
    }

    /// Typed variant of [`set`](Self::set).
    pub fn set_key(&self, key: ConfigKey, value: &str) -> Result<()> {
        self.ensure_exists()?;
        let mut document = self.read_document()?;
        match key {
            ConfigKey::Host => document.host = value.to_string(),
            ConfigKey::Model => document.model = value.to_string(),
        }
        self.write_document(&document)?;
        tracing::debug!("Config set: {} = {}", key, value);
        Ok(())
    }

    /// Resolves the Ollama host, falling back to the default when the
    /// stored value is empty.
    pub fn resolve_host(&self) -> Result<String> {
        let host = self.get_key(ConfigKey::Host)?;
        if host.trim().is_empty() {
            Ok(DEFAULT_HOST.to_string())
        } else {
            Ok(host)
        }
    }

    /// Resolves the selected model. An empty model is a configuration
    /// error for commands that need one.
    pub fn resolve_model(&self) -> Result<String> {
        let model = self.get_key(ConfigKey::Model)?;
        if model.trim().is_empty() {
            return Err(AiTermError::Config(
                "No model selected in the config file".to_string(),
            ));
        }
        Ok(model)
    }

    fn value_of(&self, document: &ConfigDocument, key: ConfigKey) -> String {
        match key {
            ConfigKey::Host => document.host.clone(),
            ConfigKey::Model => document.model.clone(),
        }
    }

    fn read_document(&self) -> Result<ConfigDocument> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            tracing::error!("Failed to read config file {}: {}", self.path.display(), e);
            AiTermError::Io(e)
        })?;
        serde_json::from_str(&content).map_err(|e| {
            tracing::error!(
                "Config file {} is corrupt or has unknown keys: {}",
                self.path.display(),
                e
            );
            AiTermError::Config(format!(
                "Config file {} is corrupt: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn write_document(&self, document: &ConfigDocument) -> Result<()> {
        let content = serde_json::to_string_pretty(document)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ConfigStore {
        ConfigStore::with_path(dir.path().join(CONFIG_FILE_NAME))
    }

    #[test]
    fn test_config_key_parsing() {
        assert_eq!("host".parse::<ConfigKey>().unwrap(), ConfigKey::Host);
        assert_eq!("model".parse::<ConfigKey>().unwrap(), ConfigKey::Model);
        assert!("HOST".parse::<ConfigKey>().is_err());
        // Prototype-era key spellings are superseded, not supported.
        assert!("OLLAMA_HOST".parse::<ConfigKey>().is_err());
        assert!("END_POINT".parse::<ConfigKey>().is_err());
        assert!("USE_OLLAMA_MODEL".parse::<ConfigKey>().is_err());
    }

    #[test]
    fn test_default_document() {
        let doc = ConfigDocument::default();
        assert_eq!(doc.host, DEFAULT_HOST);
        assert_eq!(doc.model, "");
    }

    #[test]
    fn test_ensure_exists_creates_then_noop() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.ensure_exists().unwrap());
        let first = std::fs::read_to_string(store.path()).unwrap();

        assert!(!store.ensure_exists().unwrap());
        let second = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(first, second);

        let doc: ConfigDocument = serde_json::from_str(&first).unwrap();
        assert_eq!(doc, ConfigDocument::default());
    }

    #[test]
    fn test_resolve_host_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.resolve_host().unwrap(), DEFAULT_HOST);

        store.set_key(ConfigKey::Host, "http://10.0.0.2:11434").unwrap();
        assert_eq!(store.resolve_host().unwrap(), "http://10.0.0.2:11434");
    }

    #[test]
    fn test_resolve_model_requires_selection() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let err = store.resolve_model().unwrap_err();
        assert!(matches!(err, AiTermError::Config(_)));

        store.set_key(ConfigKey::Model, "llama3.2").unwrap();
        assert_eq!(store.resolve_model().unwrap(), "llama3.2");
    }

    #[test]
    fn test_corrupt_file_reports_config_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{not json").unwrap();

        let err = store.get("host").unwrap_err();
        assert!(matches!(err, AiTermError::Config(_)));
    }

    #[test]
    fn test_unknown_field_in_file_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(
            store.path(),
            r#"{"host": "http://127.0.0.1:11434", "model": "", "extra": 1}"#,
        )
        .unwrap();

        assert!(store.get("model").is_err());
    }
}
