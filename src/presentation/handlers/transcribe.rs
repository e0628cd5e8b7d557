use axum::Json;
use axum::extract::multipart::{Field, MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bytes::{Bytes, BytesMut};

use crate::application::ports::{LlmClient, TranscriptionEngine};
use crate::domain::{
    AudioUpload, DEFAULT_LANGUAGE_CODE, DEFAULT_MODEL_ID, DomainError, TranscriptionOptions,
};
use crate::presentation::state::AppState;

use super::error_response::error_response;

#[derive(Debug, thiserror::Error)]
pub enum TranscribeFormError {
    #[error("No audio file uploaded; expected a multipart field named \"file\"")]
    MissingFile,
    #[error("Invalid boolean for {field}: {value:?}")]
    InvalidBoolean { field: &'static str, value: String },
    #[error(transparent)]
    Invalid(#[from] DomainError),
    #[error("Failed to read multipart: {0}")]
    Multipart(#[from] MultipartError),
    #[error("{0}")]
    Rejected(#[from] MultipartRejection),
}

impl TranscribeFormError {
    pub fn status(&self) -> StatusCode {
        match self {
            TranscribeFormError::Invalid(DomainError::UploadTooLarge { .. }) => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            TranscribeFormError::Multipart(e) => e.status(),
            TranscribeFormError::Rejected(e) => e.status(),
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for TranscribeFormError {
    fn into_response(self) -> Response {
        error_response(self.status(), self.to_string())
    }
}

struct TranscribeForm {
    audio: AudioUpload,
    options: TranscriptionOptions,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_audio_handler<L, E>(
    State(state): State<AppState<L, E>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response
where
    L: LlmClient + 'static,
    E: TranscriptionEngine + ?Sized + 'static,
{
    let form = match read_form(multipart).await {
        Ok(form) => form,
        Err(e) => {
            tracing::warn!(error = %e, status = %e.status(), "Rejected transcription upload");
            return e.into_response();
        }
    };

    tracing::debug!(
        bytes = form.audio.len(),
        file_name = %form.audio.file_name(),
        model_id = %form.options.model_id(),
        "Audio upload received"
    );

    match state
        .transcription_service
        .transcribe(&form.audio, &form.options)
        .await
    {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Transcription failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error transcribing audio: {}", e),
            )
        }
    }
}

async fn read_form(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<TranscribeForm, TranscribeFormError> {
    let mut multipart = multipart?;

    let mut file: Option<(Bytes, Option<String>, Option<String>)> = None;
    let mut model_id = DEFAULT_MODEL_ID.to_string();
    let mut language_code = Some(DEFAULT_LANGUAGE_CODE.to_string());
    let mut diarize = true;
    let mut tag_audio_events = true;

    while let Some(mut field) = multipart.next_field().await? {
        let name = field.name().map(String::from);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().map(String::from);
                let content_type = field.content_type().map(String::from);
                let data = read_limited(&mut field).await?;
                file = Some((data, file_name, content_type));
            }
            Some("model_id") => model_id = field.text().await?,
            Some("language_code") => language_code = Some(field.text().await?),
            Some("diarize") => diarize = parse_form_bool("diarize", &field.text().await?)?,
            Some("tag_audio_events") => {
                tag_audio_events = parse_form_bool("tag_audio_events", &field.text().await?)?
            }
            _ => {}
        }
    }

    let (data, file_name, content_type) = file.ok_or(TranscribeFormError::MissingFile)?;

    Ok(TranscribeForm {
        audio: AudioUpload::new(data, file_name, content_type)?,
        options: TranscriptionOptions::new(model_id, language_code, diarize, tag_audio_events)?,
    })
}

/// Buffers a file field, bailing out as soon as it crosses the upload limit.
async fn read_limited(field: &mut Field<'_>) -> Result<Bytes, TranscribeFormError> {
    let mut buffer = BytesMut::new();
    while let Some(chunk) = field.chunk().await? {
        AudioUpload::ensure_within_limit(buffer.len() + chunk.len())?;
        buffer.extend_from_slice(&chunk);
    }
    Ok(buffer.freeze())
}

pub fn parse_form_bool(field: &'static str, value: &str) -> Result<bool, TranscribeFormError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(TranscribeFormError::InvalidBoolean {
            field,
            value: value.to_string(),
        }),
    }
}
