//! Request/response records for the Ollama API.
//!
//! Every endpoint gets an explicit tagged record; unrecognized shapes are
//! rejected at the boundary by serde instead of trusted structurally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::generation;

/// One chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Sampling parameters forwarded to the model.
///
/// Only set fields are serialized; the server applies its own defaults
/// for the rest.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
}

impl GenerationOptions {
    /// Options tuned for deterministic, non-repetitive code/commit output.
    pub fn focused() -> Self {
        Self {
            top_p: Some(generation::TOP_P),
            temperature: Some(generation::TEMPERATURE),
            num_predict: Some(generation::NUM_PREDICT),
            repeat_penalty: Some(generation::REPEAT_PENALTY),
            top_k: Some(generation::TOP_K),
            stop: None,
        }
    }

    /// Looser sampling for free-form scaffolding output.
    pub fn creative() -> Self {
        Self {
            top_p: Some(0.7),
            temperature: Some(0.7),
            ..Default::default()
        }
    }
}

/// Body of `POST /api/chat`. Immutable once built; constructed per call.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    /// Always `false`; this client does not consume streamed responses.
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerationOptions>,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            stream: false,
            options: None,
        }
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = Some(options);
        self
    }
}

/// Response of `POST /api/chat`.
///
/// Treated as opaque except for `message.content`; the timing fields are
/// surfaced for debug logging only.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub model: String,
    pub created_at: DateTime<Utc>,
    pub message: Message,
    pub done: bool,
    #[serde(default)]
    pub done_reason: Option<String>,
    #[serde(default)]
    pub total_duration: Option<u64>,
    #[serde(default)]
    pub load_duration: Option<u64>,
    #[serde(default)]
    pub prompt_eval_count: Option<u64>,
    #[serde(default)]
    pub eval_count: Option<u64>,
    #[serde(default)]
    pub eval_duration: Option<u64>,
}

/// Response of `GET /api/tags`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListModelsResponse {
    pub models: Vec<ModelInfo>,
}

/// One installed model; a read-only snapshot of server state.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub size: u64,
    pub modified_at: DateTime<Utc>,
    #[serde(default)]
    pub digest: Option<String>,
    #[serde(default)]
    pub details: Option<ModelDetails>,
}

impl ModelInfo {
    /// Model family prefix, i.e. the name up to the first `:` tag.
    pub fn family(&self) -> &str {
        self.name.split(':').next().unwrap_or(&self.name)
    }

    /// Human-readable size (`512.0 MB`, `4.7 GB`).
    pub fn human_size(&self) -> String {
        let mb = self.size as f64 / (1024.0 * 1024.0);
        if mb < 1024.0 {
            format!("{:.1} MB", mb)
        } else {
            format!("{:.1} GB", mb / 1024.0)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelDetails {
    #[serde(default)]
    pub parent_model: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub parameter_size: Option<String>,
    #[serde(default)]
    pub quantization_level: Option<String>,
}
