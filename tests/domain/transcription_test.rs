use bytes::Bytes;

use speakwise::domain::{AudioUpload, DomainError, MAX_UPLOAD_BYTES, TranscriptionOptions};

#[test]
fn given_upload_exactly_at_limit_when_constructing_then_accepts() {
    let upload = AudioUpload::new(Bytes::from(vec![0u8; MAX_UPLOAD_BYTES]), None, None).unwrap();

    assert_eq!(upload.len(), 25 * 1024 * 1024);
}

#[test]
fn given_upload_one_byte_over_limit_when_constructing_then_rejects() {
    let result = AudioUpload::new(Bytes::from(vec![0u8; MAX_UPLOAD_BYTES + 1]), None, None);

    assert!(matches!(
        result,
        Err(DomainError::UploadTooLarge {
            actual,
            limit: MAX_UPLOAD_BYTES,
        }) if actual == MAX_UPLOAD_BYTES + 1
    ));
}

#[test]
fn given_empty_upload_when_constructing_then_rejects() {
    let result = AudioUpload::new(Bytes::new(), Some("empty.mp3".to_string()), None);

    assert!(matches!(result, Err(DomainError::EmptyUpload)));
}

#[test]
fn given_upload_without_metadata_when_reading_then_falls_back_to_generic_names() {
    let upload = AudioUpload::new(Bytes::from_static(b"abc"), None, None).unwrap();

    assert_eq!(upload.file_name(), "audio");
    assert_eq!(upload.content_type(), "application/octet-stream");
}

#[test]
fn given_default_options_then_match_documented_defaults() {
    let options = TranscriptionOptions::default();

    assert_eq!(options.model_id(), "scribe_v1");
    assert_eq!(options.language_code(), Some("eng"));
    assert!(options.diarize);
    assert!(options.tag_audio_events);
}

#[test]
fn given_blank_language_code_when_building_options_then_maps_to_provider_default() {
    let options =
        TranscriptionOptions::new("scribe_v1", Some("  ".to_string()), true, false).unwrap();

    assert_eq!(options.language_code(), None);
    assert!(!options.tag_audio_events);
}

#[test]
fn given_blank_model_id_when_building_options_then_fails() {
    let result = TranscriptionOptions::new(" ", None, true, true);

    assert_eq!(result, Err(DomainError::EmptyField("model_id")));
}
