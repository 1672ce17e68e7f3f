use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionOutput {
    pub text: String,
}

impl RecognitionOutput {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Every engine-side failure lands in this one category; the variants only
/// exist for diagnostics.
#[derive(Debug, Error)]
pub enum RecognitionError {
    #[error("failed to start recognition worker for language '{language}': {source}")]
    WorkerStart {
        language: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("failed to decode image: {0}")]
    ImageDecode(String),
    #[error("recognition engine failed: {0}")]
    Engine(String),
}

pub type RecognitionResult<T> = std::result::Result<T, RecognitionError>;
