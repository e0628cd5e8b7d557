mod context;
mod domain_error;
mod pitch_analysis;
mod score;
mod session_info;
mod transcription;

pub use context::{Context, ContextField};
pub use domain_error::DomainError;
pub use pitch_analysis::{PitchAnalysisRequest, PitchAnalysisResponse, PitchTranscript};
pub use score::{MAX_SCORE, MIN_SCORE, Score, ScoreDimension, Scores};
pub use session_info::{PracticeAttempt, SessionInfo};
pub use transcription::{
    AudioUpload, DEFAULT_LANGUAGE_CODE, DEFAULT_MODEL_ID, MAX_UPLOAD_BYTES, TranscriptionOptions,
    TranscriptionResponse,
};
