mod analyze;
mod error_response;
mod health;
mod transcribe;

pub use analyze::analyze_pitch_handler;
pub use error_response::{ErrorResponse, error_response};
pub use health::{SERVICE_NAME, health_handler, service_info_handler};
pub use transcribe::{TranscribeFormError, parse_form_bool, transcribe_audio_handler};
