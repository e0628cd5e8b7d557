use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{AudioUpload, TranscriptionOptions, TranscriptionResponse};

/// Reported as `language` when the provider picked the language itself.
pub const AUTO_DETECTED_LANGUAGE: &str = "auto";

pub struct TranscriptionService<E>
where
    E: TranscriptionEngine + ?Sized,
{
    engine: Arc<E>,
}

impl<E> TranscriptionService<E>
where
    E: TranscriptionEngine + ?Sized,
{
    pub fn new(engine: Arc<E>) -> Self {
        Self { engine }
    }

    pub async fn transcribe(
        &self,
        audio: &AudioUpload,
        options: &TranscriptionOptions,
    ) -> Result<TranscriptionResponse, TranscriptionError> {
        let transcript = self.engine.transcribe(audio, options).await?;

        Ok(TranscriptionResponse {
            transcript,
            model_used: options.model_id().to_string(),
            language: options
                .language_code()
                .unwrap_or(AUTO_DETECTED_LANGUAGE)
                .to_string(),
        })
    }
}
