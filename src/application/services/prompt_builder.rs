use std::sync::LazyLock;

use crate::domain::{PitchAnalysisRequest, ScoreDimension};

/// Version tag of the coach instruction template.
pub const PROMPT_VERSION: &str = "coach-system-v1";

const SYSTEM_TEMPLATE: &str = include_str!("prompts/coach_system_v1.txt");
const SCORE_FIELDS_PLACEHOLDER: &str = "{score_fields}";

const TASK_HEADER: &str =
    "Analyze this pitch and provide comprehensive feedback following the exact structure required.";
const CLOSING_INSTRUCTION: &str = "Provide your analysis in the exact JSON format specified.";

static SYSTEM_PROMPT: LazyLock<String> = LazyLock::new(|| {
    SYSTEM_TEMPLATE.replace(SCORE_FIELDS_PLACEHOLDER, &render_score_fields())
});

/// The fixed coach instruction, rendered once per process.
pub fn system_prompt() -> &'static str {
    &SYSTEM_PROMPT
}

fn render_score_fields() -> String {
    ScoreDimension::ALL
        .iter()
        .map(|dimension| {
            format!(
                r#"    "{}": {{"value": 0-10, "reason": "{}"}}"#,
                dimension.key(),
                dimension.reason_hint()
            )
        })
        .collect::<Vec<_>>()
        .join(",\n")
}

/// Renders the per-request instruction. Output is a pure function of the
/// request.
pub fn build_user_prompt(request: &PitchAnalysisRequest) -> String {
    let mut lines: Vec<String> = vec![
        TASK_HEADER.to_string(),
        String::new(),
        "PITCH TRANSCRIPT:".to_string(),
        request.pitch_transcript().as_str().to_string(),
        String::new(),
    ];

    if let Some(context) = request.context() {
        lines.push("CONTEXT:".to_string());
        lines.extend(
            context
                .present_fields()
                .map(|(field, value)| format!("- {}: {}", field.label(), value)),
        );
        lines.push(String::new());
    }

    if let Some(session) = request.session_info() {
        lines.push("SESSION INFO:".to_string());
        if let Some(attempt) = session.practice_attempt {
            lines.push(format!("- Practice Attempt: {}", attempt));
        }
        if session.wants_deploy_suggestions {
            lines.push("- Wants Deploy Suggestions: true".to_string());
        }
        lines.push(String::new());
    }

    lines.push(CLOSING_INSTRUCTION.to_string());
    lines.join("\n")
}
