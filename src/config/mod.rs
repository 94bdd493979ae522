//! Persistent user settings.
//!
//! A single JSON document at `<home>/ai_terminal.config.json` holds the
//! Ollama host and the selected model. [`ConfigStore`] is the only writer.

pub mod store;

pub use store::{ConfigDocument, ConfigKey, ConfigStore, SetOutcome};
