mod coaching_service;
pub mod prompt_builder;
pub mod response_mapper;
mod transcription_service;

pub use coaching_service::{CoachingError, CoachingService};
pub use prompt_builder::{PROMPT_VERSION, build_user_prompt, system_prompt};
pub use response_mapper::{MappingError, map_completion};
pub use transcription_service::{AUTO_DETECTED_LANGUAGE, TranscriptionService};
