//! Terminal assistant backed by a local Ollama server.
//!
//! Generates commit messages and code reviews from the staged git diff,
//! and scaffolds frontend components and hooks from a short description.
//! Configuration lives in a small JSON file in the user's home directory.

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod git;
pub mod ollama;
pub mod prompt;
pub mod scaffold;
pub mod ui;
