//! LLM client error types.

use thiserror::Error;

pub type LlmResult<T> = Result<T, LlmError>;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error(
        "OPENAI_API_KEY not set. Export it in your shell or add it to a .env file."
    )]
    MissingApiKey,

    #[error("Chat completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("OpenAI API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("No content in chat completion response")]
    EmptyResponse,
}
