use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context as _;
use tokio::net::TcpListener;

use speakwise::application::services::{CoachingService, PROMPT_VERSION, TranscriptionService};
use speakwise::infrastructure::audio::ElevenLabsEngine;
use speakwise::infrastructure::llm::OpenAiClient;
use speakwise::infrastructure::observability::init_tracing;
use speakwise::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&settings.logging, environment);

    // Missing provider credentials abort startup here rather than failing per request.
    let llm_client =
        Arc::new(OpenAiClient::new(&settings.llm).context("Failed to configure LLM client")?);
    let transcription_engine = Arc::new(
        ElevenLabsEngine::new(&settings.transcription)
            .context("Failed to configure transcription engine")?,
    );

    tracing::info!(
        model = %llm_client.model(),
        prompt_version = PROMPT_VERSION,
        "Providers configured"
    );

    let state = AppState {
        coaching_service: Arc::new(CoachingService::new(llm_client)),
        transcription_service: Arc::new(TranscriptionService::new(transcription_engine)),
    };

    let router = create_router(state, &settings.cors);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server host/port")?;
    tracing::info!(
        %addr,
        allowed_origins = ?settings.cors.origins(),
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
