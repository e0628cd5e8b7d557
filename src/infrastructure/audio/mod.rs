mod elevenlabs_engine;

pub use elevenlabs_engine::ElevenLabsEngine;
