#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("pitch_transcript must not be empty")]
    EmptyTranscript,
    #[error("score value {0} is outside the allowed range 0-10")]
    ScoreOutOfRange(i64),
    #[error("practice_attempt must be at least 1, got {0}")]
    InvalidPracticeAttempt(i64),
    #[error("audio file is {actual} bytes, exceeding the {limit} byte upload limit")]
    UploadTooLarge { actual: usize, limit: usize },
    #[error("audio file is empty")]
    EmptyUpload,
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}
