use async_trait::async_trait;

/// A text-generation provider that answers in strict JSON mode.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends a system/user instruction pair and returns the raw completion
    /// text, which the provider guarantees to be a JSON document.
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("missing credentials: {0}")]
    MissingCredentials(&'static str),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
