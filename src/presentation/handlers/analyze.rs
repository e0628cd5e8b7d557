use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::ports::{LlmClient, TranscriptionEngine};
use crate::domain::PitchAnalysisRequest;
use crate::presentation::state::AppState;

use super::error_response::error_response;

#[tracing::instrument(skip(state, payload))]
pub async fn analyze_pitch_handler<L, E>(
    State(state): State<AppState<L, E>>,
    payload: Result<Json<PitchAnalysisRequest>, JsonRejection>,
) -> Response
where
    L: LlmClient + 'static,
    E: TranscriptionEngine + ?Sized + 'static,
{
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Rejected pitch analysis request");
            return error_response(rejection.status(), rejection.body_text());
        }
    };

    match state.coaching_service.analyze(&request).await {
        Ok(response) => {
            tracing::info!(
                wants_deploy_suggestions = request.wants_deploy_suggestions(),
                "Pitch analysis completed"
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Pitch analysis failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error analyzing pitch: {}", e),
            )
        }
    }
}
