use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::DomainError;

pub const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;
pub const DEFAULT_MODEL_ID: &str = "scribe_v1";
pub const DEFAULT_LANGUAGE_CODE: &str = "eng";

/// Raw audio received from a client, guaranteed to be within the upload limit.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    data: Bytes,
    file_name: Option<String>,
    content_type: Option<String>,
}

impl AudioUpload {
    pub fn new(
        data: Bytes,
        file_name: Option<String>,
        content_type: Option<String>,
    ) -> Result<Self, DomainError> {
        Self::ensure_within_limit(data.len())?;
        if data.is_empty() {
            return Err(DomainError::EmptyUpload);
        }
        Ok(Self {
            data,
            file_name,
            content_type,
        })
    }

    /// Checks a byte count against [`MAX_UPLOAD_BYTES`]; usable while an
    /// upload is still streaming in.
    pub fn ensure_within_limit(len: usize) -> Result<(), DomainError> {
        if len > MAX_UPLOAD_BYTES {
            return Err(DomainError::UploadTooLarge {
                actual: len,
                limit: MAX_UPLOAD_BYTES,
            });
        }
        Ok(())
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn file_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or("audio")
    }

    pub fn content_type(&self) -> &str {
        self.content_type
            .as_deref()
            .unwrap_or("application/octet-stream")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionOptions {
    model_id: String,
    language_code: Option<String>,
    pub diarize: bool,
    pub tag_audio_events: bool,
}

impl TranscriptionOptions {
    /// An empty `language_code` means "let the provider detect it".
    pub fn new(
        model_id: impl Into<String>,
        language_code: Option<String>,
        diarize: bool,
        tag_audio_events: bool,
    ) -> Result<Self, DomainError> {
        let model_id = model_id.into().trim().to_string();
        if model_id.is_empty() {
            return Err(DomainError::EmptyField("model_id"));
        }
        let language_code = language_code
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty());

        Ok(Self {
            model_id,
            language_code,
            diarize,
            tag_audio_events,
        })
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn language_code(&self) -> Option<&str> {
        self.language_code.as_deref()
    }
}

impl Default for TranscriptionOptions {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            language_code: Some(DEFAULT_LANGUAGE_CODE.to_string()),
            diarize: true,
            tag_audio_events: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    pub transcript: String,
    pub model_used: String,
    /// The requested language code, or `"auto"` when none was sent and the
    /// provider detected the language itself.
    pub language: String,
}
