//! `ollama-agent` — blocking driver for a local Ollama server.
//!
//! Wraps the non-streaming `/api/chat` endpoint with typed request and
//! response structs. Knows nothing about agents, tasks, or the coach
//! domain; callers compose prompts and interpret replies.

pub mod client;
pub mod error;
pub mod types;

pub use client::OllamaClient;
pub use error::{OllamaError, Result};
