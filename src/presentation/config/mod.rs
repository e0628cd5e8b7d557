mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    CorsSettings, DEFAULT_ALLOWED_ORIGINS, DEFAULT_LLM_MODEL, LlmSettings, LoggingSettings,
    ServerSettings, Settings, TranscriptionSettings,
};
