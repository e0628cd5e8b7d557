use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{PitchAnalysisRequest, PitchAnalysisResponse};
use crate::infrastructure::observability::log_preview;

use super::prompt_builder::{build_user_prompt, system_prompt};
use super::response_mapper::{MappingError, map_completion};

pub struct CoachingService<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
}

impl<L> CoachingService<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }

    pub async fn analyze(
        &self,
        request: &PitchAnalysisRequest,
    ) -> Result<PitchAnalysisResponse, CoachingError> {
        let user_prompt = build_user_prompt(request);

        tracing::debug!(
            transcript = %log_preview(request.pitch_transcript().as_str()),
            has_context = request.context().is_some(),
            wants_deploy_suggestions = request.wants_deploy_suggestions(),
            "Requesting pitch analysis"
        );

        let completion = self
            .llm_client
            .complete(system_prompt(), &user_prompt)
            .await?;

        tracing::debug!(chars = completion.len(), "Completion received");

        Ok(map_completion(&completion, request)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoachingError {
    #[error("completion: {0}")]
    Completion(#[from] LlmClientError),
    #[error("response: {0}")]
    Mapping(#[from] MappingError),
}
