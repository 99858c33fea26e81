use crate::error::{OllamaError, Result};
use crate::types::{ChatMessage, ChatRequest, ChatResponse};

/// Blocking client for one Ollama model behind one base URL.
///
/// One request per call, no retries, no timeout beyond reqwest's defaults;
/// callers decide what a failure means.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    model: String,
    http: reqwest::blocking::Client,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Send one chat turn and return the assistant's text.
    pub fn chat(&self, system: Option<&str>, prompt: &str) -> Result<String> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system {
            messages.push(ChatMessage::system(system));
        }
        messages.push(ChatMessage::user(prompt));

        let url = format!("{}/api/chat", self.base_url);
        tracing::debug!(model = %self.model, %url, "sending chat request");

        let response = self
            .http
            .post(&url)
            .json(&ChatRequest {
                model: self.model.clone(),
                messages,
                stream: false,
            })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(OllamaError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json()?;
        let content = parsed
            .message
            .map(|m| m.content)
            .filter(|c| !c.is_empty())
            .ok_or(OllamaError::EmptyResponse)?;
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_returns_assistant_content() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/chat")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "model": "test-model",
                "stream": false,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"model":"test-model","message":{"role":"assistant","content":"ten questions"},"done":true}"#,
            )
            .create();

        let client = OllamaClient::new(server.url(), "test-model");
        let out = client.chat(Some("you are a coach"), "ask intake questions").unwrap();

        assert_eq!(out, "ten questions");
        mock.assert();
    }

    #[test]
    fn chat_surfaces_api_errors() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/api/chat")
            .with_status(404)
            .with_body(r#"{"error":"model not found"}"#)
            .create();

        let client = OllamaClient::new(server.url(), "missing-model");
        match client.chat(None, "hi") {
            Err(OllamaError::Api { status, body }) => {
                assert_eq!(status, 404);
                assert!(body.contains("model not found"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn chat_rejects_empty_message() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/api/chat")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"model":"m","done":true}"#)
            .create();

        let client = OllamaClient::new(server.url(), "m");
        assert!(matches!(
            client.chat(None, "hi"),
            Err(OllamaError::EmptyResponse)
        ));
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client = OllamaClient::new("http://localhost:11434/", "m");
        assert_eq!(client.base_url, "http://localhost:11434");
    }
}
