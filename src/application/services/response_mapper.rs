use serde_json::{Map, Value, json};

use crate::domain::{PitchAnalysisRequest, PitchAnalysisResponse, ScoreDimension};

pub const DEFAULT_QUICK_SUMMARY: &str = "Analysis pending";
pub const DEFAULT_SCORE_VALUE: i64 = 5;
pub const DEFAULT_SCORE_REASON: &str = "Not analyzed";

const SCORES_KEY: &str = "scores";
const DEPLOY_SUGGESTIONS_KEY: &str = "deploy_suggestions";

/// What a missing top-level field is replaced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    Text(&'static str),
    List,
    /// Every missing dimension becomes `{value: 5, reason: "Not analyzed"}`.
    Scores,
}

impl FieldDefault {
    fn value(&self) -> Value {
        match self {
            FieldDefault::Text(text) => Value::String((*text).to_string()),
            FieldDefault::List => Value::Array(Vec::new()),
            FieldDefault::Scores => Value::Object(Map::new()),
        }
    }
}

pub const RESPONSE_DEFAULTS: [(&str, FieldDefault); 10] = [
    ("quick_summary", FieldDefault::Text(DEFAULT_QUICK_SUMMARY)),
    (SCORES_KEY, FieldDefault::Scores),
    ("context_check", FieldDefault::Text("")),
    ("what_you_did_well", FieldDefault::List),
    ("what_to_improve", FieldDefault::List),
    ("improved_pitch", FieldDefault::Text("")),
    ("alternative_openings", FieldDefault::List),
    ("alternative_closings", FieldDefault::List),
    ("delivery_tips", FieldDefault::List),
    ("next_practice_exercise", FieldDefault::Text("")),
];

#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("completion is not valid JSON: {0}")]
    MalformedJson(serde_json::Error),
    #[error("completion JSON is not an object")]
    NotAnObject,
    #[error("completion does not match the response schema: {0}")]
    SchemaMismatch(serde_json::Error),
}

/// Turns a raw model completion into a response, filling documented defaults
/// for absent (or `null`) fields and dropping deploy suggestions the request
/// did not ask for.
pub fn map_completion(
    raw: &str,
    request: &PitchAnalysisRequest,
) -> Result<PitchAnalysisResponse, MappingError> {
    let parsed: Value = serde_json::from_str(raw).map_err(MappingError::MalformedJson)?;
    let Value::Object(mut fields) = parsed else {
        return Err(MappingError::NotAnObject);
    };

    for (key, default) in RESPONSE_DEFAULTS {
        if is_missing(fields.get(key)) {
            fields.insert(key.to_string(), default.value());
        }
        if default == FieldDefault::Scores {
            if let Some(Value::Object(scores)) = fields.get_mut(key) {
                fill_missing_scores(scores);
            }
        }
    }

    if !request.wants_deploy_suggestions() {
        fields.remove(DEPLOY_SUGGESTIONS_KEY);
    }

    serde_json::from_value(Value::Object(fields)).map_err(MappingError::SchemaMismatch)
}

fn fill_missing_scores(scores: &mut Map<String, Value>) {
    for dimension in ScoreDimension::ALL {
        if is_missing(scores.get(dimension.key())) {
            scores.insert(
                dimension.key().to_string(),
                json!({ "value": DEFAULT_SCORE_VALUE, "reason": DEFAULT_SCORE_REASON }),
            );
        }
    }
}

fn is_missing(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}
