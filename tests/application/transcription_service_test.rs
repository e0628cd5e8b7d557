use std::sync::Arc;

use bytes::Bytes;

use speakwise::application::ports::TranscriptionError;
use speakwise::application::services::{AUTO_DETECTED_LANGUAGE, TranscriptionService};
use speakwise::domain::{AudioUpload, TranscriptionOptions};

use crate::helpers::MockTranscriptionEngine;

fn upload() -> AudioUpload {
    AudioUpload::new(Bytes::from_static(b"audio"), Some("a.wav".to_string()), None).unwrap()
}

#[tokio::test]
async fn given_engine_text_when_transcribing_then_returns_it_unmodified() {
    let engine = Arc::new(MockTranscriptionEngine::returning("  um, hello  (laughter) "));
    let service = TranscriptionService::new(Arc::clone(&engine));

    let response = service
        .transcribe(&upload(), &TranscriptionOptions::default())
        .await
        .unwrap();

    assert_eq!(response.transcript, "  um, hello  (laughter) ");
    assert_eq!(response.model_used, "scribe_v1");
    assert_eq!(response.language, "eng");
    assert_eq!(engine.call_count(), 1);
}

#[tokio::test]
async fn given_no_language_code_when_transcribing_then_reports_auto_detection() {
    let service = TranscriptionService::new(Arc::new(MockTranscriptionEngine::returning("hi")));
    let options = TranscriptionOptions::new("scribe_v1", None, false, false).unwrap();

    let response = service.transcribe(&upload(), &options).await.unwrap();

    assert_eq!(response.language, AUTO_DETECTED_LANGUAGE);
}

#[tokio::test]
async fn given_engine_failure_when_transcribing_then_propagates_error() {
    let service = TranscriptionService::new(Arc::new(MockTranscriptionEngine::failing("503")));

    let result = service
        .transcribe(&upload(), &TranscriptionOptions::default())
        .await;

    assert!(matches!(result, Err(TranscriptionError::ApiRequestFailed(_))));
}
