use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Context, DomainError, Scores, SessionInfo};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PitchTranscript(String);

impl PitchTranscript {
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.is_empty() {
            return Err(DomainError::EmptyTranscript);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PitchTranscript {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PitchTranscript> for String {
    fn from(transcript: PitchTranscript) -> Self {
        transcript.0
    }
}

/// A validated request for pitch feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchAnalysisRequest {
    pitch_transcript: PitchTranscript,
    #[serde(default)]
    context: Option<Context>,
    #[serde(default)]
    session_info: Option<SessionInfo>,
}

impl PitchAnalysisRequest {
    pub fn new(
        pitch_transcript: PitchTranscript,
        context: Option<Context>,
        session_info: Option<SessionInfo>,
    ) -> Self {
        Self {
            pitch_transcript,
            context,
            session_info,
        }
    }

    pub fn pitch_transcript(&self) -> &PitchTranscript {
        &self.pitch_transcript
    }

    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    pub fn session_info(&self) -> Option<&SessionInfo> {
        self.session_info.as_ref()
    }

    pub fn wants_deploy_suggestions(&self) -> bool {
        self.session_info
            .as_ref()
            .is_some_and(|s| s.wants_deploy_suggestions)
    }
}

/// Structured coaching feedback for one pitch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchAnalysisResponse {
    pub quick_summary: String,
    pub scores: Scores,
    pub context_check: String,
    pub what_you_did_well: Vec<String>,
    pub what_to_improve: Vec<String>,
    pub improved_pitch: String,
    pub alternative_openings: Vec<String>,
    pub alternative_closings: Vec<String>,
    pub delivery_tips: Vec<String>,
    pub next_practice_exercise: String,
    #[serde(default)]
    pub deploy_suggestions: Option<Map<String, Value>>,
}
