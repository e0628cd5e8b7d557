mod coaching_service_test;
mod prompt_builder_test;
mod transcription_service_test;
