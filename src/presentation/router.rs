use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{LlmClient, TranscriptionEngine};
use crate::domain::MAX_UPLOAD_BYTES;
use crate::infrastructure::observability::{
    make_request_span, propagate_request_id_layer, set_request_id_layer,
};
use crate::presentation::config::CorsSettings;
use crate::presentation::handlers::{
    analyze_pitch_handler, health_handler, service_info_handler, transcribe_audio_handler,
};
use crate::presentation::state::AppState;

/// Headroom above the file limit for multipart boundaries and the text fields,
/// so an oversized file is rejected by the handler with a precise message.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

const WILDCARD_ORIGIN: &str = "*";

pub fn create_router<L, E>(state: AppState<L, E>, cors: &CorsSettings) -> Router
where
    L: LlmClient + 'static,
    E: TranscriptionEngine + ?Sized + 'static,
{
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(make_request_span)
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(service_info_handler))
        .route("/health", get(health_handler))
        .route("/api/analyze-pitch", post(analyze_pitch_handler::<L, E>))
        .route(
            "/api/transcribe-audio",
            post(transcribe_audio_handler::<L, E>)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD_BYTES)),
        )
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id_layer())
                .layer(trace_layer)
                .layer(propagate_request_id_layer())
                .layer(cors_layer(cors)),
        )
        .with_state(state)
}

/// Credentialed CORS for the configured origins. Methods and headers are
/// mirrored because wildcards are not allowed alongside credentials; a `*`
/// origin entry mirrors the request origin for the same reason.
pub fn cors_layer(cors: &CorsSettings) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins(&cors.origins()))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

fn allowed_origins(origins: &[String]) -> AllowOrigin {
    if origins.iter().any(|origin| origin == WILDCARD_ORIGIN) {
        tracing::warn!("Wildcard CORS origin configured; mirroring any request origin");
        return AllowOrigin::mirror_request();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    AllowOrigin::list(origins)
}
