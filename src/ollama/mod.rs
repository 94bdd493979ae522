//! Typed client for the Ollama REST API.
//!
//! [`OllamaClient`] dispatches chat and model-listing requests against the
//! host recorded in the config store. [`catalog`] covers the public model
//! library used by `list available`.

pub mod catalog;
pub mod client;
pub mod types;

pub use catalog::{CatalogModel, ModelCatalog};
pub use client::OllamaClient;
pub use types::{
    ChatRequest, ChatResponse, GenerationOptions, ListModelsResponse, Message, ModelDetails,
    ModelInfo,
};
