use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File};
use serde::Deserialize;

use super::Environment;

pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";
pub const DEFAULT_LLM_MODEL: &str = "gpt-4-turbo-preview";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub transcription: TranscriptionSettings,
    pub cors: CorsSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub api_key: Option<String>,
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Comma-separated list of origins.
    pub allowed_origins: String,
}

impl CorsSettings {
    pub fn origins(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json_format: bool,
}

impl Settings {
    /// Layers, lowest precedence first: built-in defaults, the optional
    /// `appsettings.<env>` file, `APP__SECTION__KEY` variables, then the
    /// well-known provider variables (`OPENAI_API_KEY`, `ALLOWED_ORIGINS`, ...).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let log_format_json = env_var("LOG_FORMAT").map(|v| v.eq_ignore_ascii_case("json"));

        defaults()?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option("server.port", env_var("SERVER_PORT"))?
            .set_override_option("llm.api_key", env_var("OPENAI_API_KEY"))?
            .set_override_option("llm.model", env_var("OPENAI_MODEL"))?
            .set_override_option("llm.base_url", env_var("OPENAI_BASE_URL"))?
            .set_override_option("transcription.api_key", env_var("ELEVENLABS_API_KEY"))?
            .set_override_option("transcription.base_url", env_var("ELEVENLABS_BASE_URL"))?
            .set_override_option("cors.allowed_origins", env_var("ALLOWED_ORIGINS"))?
            .set_override_option("logging.json_format", log_format_json)?
            .build()?
            .try_deserialize()
    }

    /// Built-in defaults only, ignoring files and the process environment.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        defaults()?.build()?.try_deserialize()
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("llm.base_url", "https://api.openai.com/v1")?
        .set_default("llm.model", DEFAULT_LLM_MODEL)?
        .set_default("transcription.base_url", "https://api.elevenlabs.io")?
        .set_default("cors.allowed_origins", DEFAULT_ALLOWED_ORIGINS)?
        .set_default("logging.level", "info,speakwise=debug,tower_http=debug")?
        .set_default("logging.json_format", false)
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
