use async_trait::async_trait;

use crate::domain::{AudioUpload, TranscriptionOptions};

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        audio: &AudioUpload,
        options: &TranscriptionOptions,
    ) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("missing credentials: {0}")]
    MissingCredentials(&'static str),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
