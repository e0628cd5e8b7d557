use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{AudioUpload, TranscriptionOptions};
use crate::presentation::config::TranscriptionSettings;

pub struct ElevenLabsEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Deserialize)]
struct SpeechToTextResponse {
    text: String,
}

impl ElevenLabsEngine {
    pub fn new(settings: &TranscriptionSettings) -> Result<Self, TranscriptionError> {
        let api_key = settings
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(TranscriptionError::MissingCredentials(
                "ELEVENLABS_API_KEY is not set",
            ))?;

        Ok(Self {
            client: reqwest::Client::new(),
            api_key: api_key.to_string(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl TranscriptionEngine for ElevenLabsEngine {
    async fn transcribe(
        &self,
        audio: &AudioUpload,
        options: &TranscriptionOptions,
    ) -> Result<String, TranscriptionError> {
        let url = format!("{}/v1/speech-to-text", self.base_url);

        // `Bytes` clones share the upload buffer.
        let file_part =
            multipart::Part::stream_with_length(audio.data().clone(), audio.len() as u64)
                .file_name(audio.file_name().to_string())
                .mime_str(audio.content_type())
                .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {}", e)))?;

        let mut form = multipart::Form::new()
            .part("file", file_part)
            .text("model_id", options.model_id().to_string())
            .text("diarize", options.diarize.to_string())
            .text("tag_audio_events", options.tag_audio_events.to_string());

        // Omitted entirely so the provider auto-detects.
        if let Some(language_code) = options.language_code() {
            form = form.text("language_code", language_code.to_string());
        }

        tracing::debug!(
            model_id = %options.model_id(),
            language_code = ?options.language_code(),
            bytes = audio.len(),
            "Sending audio to ElevenLabs speech-to-text"
        );

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: SpeechToTextResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(e.to_string()))?;

        tracing::info!(
            chars = result.text.len(),
            "ElevenLabs transcription completed"
        );

        Ok(result.text)
    }
}
