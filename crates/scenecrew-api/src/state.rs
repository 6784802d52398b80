//! Application state.

use std::sync::Arc;

use scenecrew_llm::{LlmError, OpenAiClient};

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub llm: Arc<OpenAiClient>,
}

impl AppState {
    /// Create new application state with a client built from the environment.
    ///
    /// Fails when `OPENAI_API_KEY` is not set.
    pub fn from_env(config: ApiConfig) -> Result<Self, LlmError> {
        let llm = OpenAiClient::from_env()?;
        Ok(Self::new(config, llm))
    }

    /// Create application state with an explicit client (test seam).
    pub fn new(config: ApiConfig, llm: OpenAiClient) -> Self {
        Self {
            config,
            llm: Arc::new(llm),
        }
    }
}
