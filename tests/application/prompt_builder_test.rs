use speakwise::application::services::{build_user_prompt, system_prompt};
use speakwise::domain::{
    Context, PitchAnalysisRequest, PitchTranscript, PracticeAttempt, ScoreDimension, SessionInfo,
};

fn request(
    transcript: &str,
    context: Option<Context>,
    session_info: Option<SessionInfo>,
) -> PitchAnalysisRequest {
    PitchAnalysisRequest::new(PitchTranscript::new(transcript).unwrap(), context, session_info)
}

fn block<'a>(prompt: &'a str, header: &str) -> Vec<&'a str> {
    prompt
        .lines()
        .skip_while(|line| *line != header)
        .skip(1)
        .take_while(|line| !line.is_empty())
        .collect()
}

#[test]
fn given_transcript_only_when_building_user_prompt_then_renders_exact_text() {
    let prompt = build_user_prompt(&request("Hi, we built an app.", None, None));

    assert_eq!(
        prompt,
        "Analyze this pitch and provide comprehensive feedback following the exact structure required.\n\
         \n\
         PITCH TRANSCRIPT:\n\
         Hi, we built an app.\n\
         \n\
         Provide your analysis in the exact JSON format specified."
    );
}

#[test]
fn given_audience_and_duration_when_building_user_prompt_then_context_has_exactly_two_lines() {
    let context = Context {
        audience: Some("investors".to_string()),
        duration: Some("30 seconds".to_string()),
        ..Context::default()
    };

    let prompt = build_user_prompt(&request("Hi, we built an app.", Some(context), None));

    assert_eq!(
        block(&prompt, "CONTEXT:"),
        vec!["- Audience: investors", "- Duration: 30 seconds"]
    );
    assert!(!prompt.contains("SESSION INFO:"));
}

#[test]
fn given_full_context_when_building_user_prompt_then_lines_follow_fixed_order() {
    let context = Context {
        notes_from_user: Some("nervous".to_string()),
        constraints: Some("no jargon".to_string()),
        tone_style: Some("friendly".to_string()),
        english_level: Some("B2".to_string()),
        scenario: Some("demo day".to_string()),
        duration: Some("1 minute".to_string()),
        goal: Some("raise seed".to_string()),
        audience: Some("VCs".to_string()),
    };

    let prompt = build_user_prompt(&request("Pitch", Some(context), None));

    assert_eq!(
        block(&prompt, "CONTEXT:"),
        vec![
            "- Audience: VCs",
            "- Goal: raise seed",
            "- Duration: 1 minute",
            "- Scenario: demo day",
            "- English Level: B2",
            "- Tone/Style: friendly",
            "- Constraints: no jargon",
            "- Notes from User: nervous",
        ]
    );
}

#[test]
fn given_empty_context_object_when_building_user_prompt_then_header_has_no_lines() {
    let prompt = build_user_prompt(&request("Pitch", Some(Context::default()), None));

    assert!(prompt.contains("CONTEXT:\n\n"));
    assert!(block(&prompt, "CONTEXT:").is_empty());
}

#[test]
fn given_session_with_deploy_request_when_building_user_prompt_then_renders_marker_line() {
    let session = SessionInfo {
        practice_attempt: Some(PracticeAttempt::new(3).unwrap()),
        wants_deploy_suggestions: true,
    };

    let prompt = build_user_prompt(&request("Pitch", None, Some(session)));

    assert_eq!(
        block(&prompt, "SESSION INFO:"),
        vec!["- Practice Attempt: 3", "- Wants Deploy Suggestions: true"]
    );
    assert!(!prompt.contains("CONTEXT:"));
}

#[test]
fn given_session_without_deploy_request_when_building_user_prompt_then_omits_marker_line() {
    let prompt = build_user_prompt(&request("Pitch", None, Some(SessionInfo::default())));

    assert_eq!(block(&prompt, "SESSION INFO:"), vec!["- Practice Attempt: 1"]);
    assert!(!prompt.contains("Wants Deploy Suggestions"));
}

#[test]
fn given_context_and_session_when_building_user_prompt_then_context_precedes_session() {
    let context = Context {
        goal: Some("hire".to_string()),
        ..Context::default()
    };

    let prompt = build_user_prompt(&request("Pitch", Some(context), Some(SessionInfo::default())));

    let context_at = prompt.find("CONTEXT:").unwrap();
    let session_at = prompt.find("SESSION INFO:").unwrap();
    assert!(context_at < session_at);
    assert!(prompt.ends_with("Provide your analysis in the exact JSON format specified."));
}

#[test]
fn given_identical_requests_when_building_user_prompt_then_output_is_byte_identical() {
    let make = || {
        request(
            "Same pitch",
            Some(Context {
                audience: Some("students".to_string()),
                tone_style: Some("calm".to_string()),
                ..Context::default()
            }),
            Some(SessionInfo::default()),
        )
    };

    assert_eq!(build_user_prompt(&make()), build_user_prompt(&make()));
}

#[test]
fn given_system_prompt_then_lists_every_score_dimension_once() {
    let prompt = system_prompt();

    for dimension in ScoreDimension::ALL {
        let key = format!("\"{}\": {{\"value\": 0-10", dimension.key());
        assert_eq!(prompt.matches(&key).count(), 1, "dimension {}", dimension);
    }
    assert!(!prompt.contains("{score_fields}"));
    assert!(prompt.contains("(estimate from word choice and style only)"));
}

#[test]
fn given_repeated_calls_then_system_prompt_is_the_same_static_text() {
    assert!(std::ptr::eq(system_prompt(), system_prompt()));
    assert!(system_prompt().starts_with("You are \"SpeakWise Real\""));
}
