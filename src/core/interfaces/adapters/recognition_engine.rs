use async_trait::async_trait;

use crate::core::models::{RecognitionOutput, RecognitionResult};

/// Hands out recognition workers bound to one language.
#[async_trait]
pub trait RecognitionEngine: Send + Sync {
    async fn create_worker(&self, language: &str) -> RecognitionResult<Box<dyn RecognitionWorker>>;
}

/// One worker serves one recognition call and must be terminated afterwards.
#[async_trait]
pub trait RecognitionWorker: Send {
    async fn recognize(&mut self, image_bytes: &[u8]) -> RecognitionResult<RecognitionOutput>;

    async fn terminate(self: Box<Self>) -> anyhow::Result<()>;
}
