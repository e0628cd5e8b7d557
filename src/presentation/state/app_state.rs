use std::sync::Arc;

use crate::application::ports::{LlmClient, TranscriptionEngine};
use crate::application::services::{CoachingService, TranscriptionService};

pub struct AppState<L, E>
where
    L: LlmClient,
    E: TranscriptionEngine + ?Sized,
{
    pub coaching_service: Arc<CoachingService<L>>,
    pub transcription_service: Arc<TranscriptionService<E>>,
}

impl<L, E> Clone for AppState<L, E>
where
    L: LlmClient,
    E: TranscriptionEngine + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            coaching_service: Arc::clone(&self.coaching_service),
            transcription_service: Arc::clone(&self.transcription_service),
        }
    }
}
