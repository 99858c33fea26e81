use thiserror::Error;

#[derive(Debug, Error)]
pub enum OllamaError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("ollama returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("ollama returned an empty message")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, OllamaError>;
