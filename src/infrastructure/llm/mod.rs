mod openai_client;

pub use openai_client::{COMPLETION_TEMPERATURE, OpenAiClient};
