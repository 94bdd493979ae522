use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ConfigStore;
use crate::constants::api::{CHAT_SUFFIX, REQUEST_TIMEOUT_SECS, TAGS_SUFFIX};
use crate::error::{AiTermError, Result};
use crate::ollama::types::{ChatRequest, ChatResponse, ListModelsResponse, ModelInfo};

/// Thin typed RPC layer over the Ollama chat and model-listing endpoints.
///
/// Built explicitly and passed to the command that needs it; the host is
/// resolved from the config store at construction time, so a config change
/// is picked up by the next invocation, never cached across them.
///
/// Each call is independent: requests are sent exactly once, with no
/// retry, batching or deduplication. If the server only supports one
/// in-flight generation, concurrent callers queue at the server.
pub struct OllamaClient {
    client: Client,
    host: String,
}

impl OllamaClient {
    /// Builds a client bound to the host recorded in `store`.
    pub fn from_store(store: &ConfigStore) -> Result<Self> {
        let host = store.resolve_host()?;
        Self::with_host(host)
    }

    /// Builds a client bound to an explicit host. Used by tests and by
    /// callers that already resolved the host themselves.
    pub fn with_host(host: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(AiTermError::Network)?;

        Ok(Self {
            client,
            host: host.into().trim_end_matches('/').to_string(),
        })
    }

    /// The host this client is bound to.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Sends one chat request and returns the parsed response.
    ///
    /// The request is issued exactly once; a timeout after 60 s surfaces
    /// as a network error to the caller.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let url = format!("{}{}", self.host, CHAT_SUFFIX);
        tracing::debug!(
            "POST {} (model={}, messages={})",
            url,
            request.model,
            request.messages.len()
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| self.classify_transport_error(e))?;

        let chat: ChatResponse = self.parse_response(response, "chat").await?;
        tracing::debug!(
            "chat done: done_reason={:?}, eval_count={:?}, total_duration={:?}",
            chat.done_reason,
            chat.eval_count,
            chat.total_duration
        );
        Ok(chat)
    }

    /// Returns every installed model, unfiltered, in server order.
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        let url = format!("{}{}", self.host, TAGS_SUFFIX);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify_transport_error(e))?;

        let list: ListModelsResponse = self.parse_response(response, "tags").await?;
        Ok(list.models)
    }

    fn classify_transport_error(&self, e: reqwest::Error) -> AiTermError {
        if e.is_timeout() {
            tracing::error!("Request to {} timed out: {}", self.host, e);
        } else if e.is_connect() {
            tracing::error!("Could not connect to {}: {}", self.host, e);
        } else {
            tracing::error!("Network error talking to {}: {}", self.host, e);
        }
        AiTermError::Network(e)
    }

    /// Reads the body, classifying HTTP failures by status code for
    /// diagnostics. The classification only changes the log line; the
    /// failure itself is re-signalled to the caller unchanged.
    async fn parse_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        endpoint: &str,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            match status {
                StatusCode::UNAUTHORIZED => {
                    tracing::error!("Unauthorized error from {} endpoint: {}", endpoint, body);
                }
                StatusCode::FORBIDDEN => {
                    tracing::warn!("Forbidden error from {} endpoint: {}", endpoint, body);
                }
                StatusCode::INTERNAL_SERVER_ERROR => {
                    tracing::error!("Internal server error from {} endpoint: {}", endpoint, body);
                }
                _ => {
                    tracing::error!("Error {} from {} endpoint: {}", status, endpoint, body);
                }
            }
            return Err(AiTermError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse {} response: {}", endpoint, e);
            AiTermError::Other(format!(
                "Failed to parse {} response: {}. Raw response: {}",
                endpoint, e, body
            ))
        })
    }
}
