use std::sync::Arc;

use speakwise::application::services::{
    CoachingError, CoachingService, MappingError, build_user_prompt, system_prompt,
};
use speakwise::domain::{Context, PitchAnalysisRequest, PitchTranscript};

use crate::helpers::{MockLlmClient, full_completion_json};

fn investor_request() -> PitchAnalysisRequest {
    PitchAnalysisRequest::new(
        PitchTranscript::new("Hi, we built an app.").unwrap(),
        Some(Context {
            audience: Some("investors".to_string()),
            ..Context::default()
        }),
        None,
    )
}

#[tokio::test]
async fn given_request_when_analyzing_then_sends_system_and_rendered_user_prompt() {
    let llm_client = Arc::new(MockLlmClient::returning(full_completion_json(false)));
    let service = CoachingService::new(Arc::clone(&llm_client));
    let request = investor_request();

    let response = service.analyze(&request).await.unwrap();

    assert_eq!(response.scores.clarity.value(), 7);
    let prompts = llm_client.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].0, system_prompt());
    assert_eq!(prompts[0].1, build_user_prompt(&request));
}

#[tokio::test]
async fn given_provider_error_when_analyzing_then_propagates_completion_error() {
    let service = CoachingService::new(Arc::new(MockLlmClient::failing("timeout")));

    let result = service.analyze(&investor_request()).await;

    let error = result.unwrap_err();
    assert!(matches!(error, CoachingError::Completion(_)));
    assert!(error.to_string().contains("timeout"));
}

#[tokio::test]
async fn given_malformed_completion_when_analyzing_then_propagates_mapping_error() {
    let service = CoachingService::new(Arc::new(MockLlmClient::returning("{\"quick_summary\"")));

    let result = service.analyze(&investor_request()).await;

    assert!(matches!(
        result,
        Err(CoachingError::Mapping(MappingError::MalformedJson(_)))
    ));
}
