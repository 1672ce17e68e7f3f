use crate::core::interfaces::adapters::RecognitionEngine;
use crate::core::models::{RecognitionOutput, RecognitionResult};

/// Runs one recognition on a fresh worker.
///
/// The worker is terminated whether recognition succeeded or not. A failed
/// termination is logged and never replaces the recognition outcome.
pub async fn run_recognition(
    engine: &dyn RecognitionEngine,
    image_bytes: &[u8],
    language: &str,
) -> RecognitionResult<RecognitionOutput> {
    log::debug!(
        "[RECOGNITION] Creating worker for language '{}' ({} bytes)",
        language,
        image_bytes.len()
    );
    let mut worker = engine.create_worker(language).await?;

    let outcome = worker.recognize(image_bytes).await;

    if let Err(e) = worker.terminate().await {
        log::warn!("[RECOGNITION] Failed to terminate worker: {:#}", e);
    }

    match &outcome {
        Ok(output) => log::info!(
            "[RECOGNITION] Recognized {} characters",
            output.text.len()
        ),
        Err(e) => log::error!("[RECOGNITION] Recognition failed: {}", e),
    }

    outcome
}
