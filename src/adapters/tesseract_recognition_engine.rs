use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};
use async_trait::async_trait;
use rusty_tesseract::{Args, Image as TesseractImage};

use crate::core::interfaces::adapters::{RecognitionEngine, RecognitionWorker};
use crate::core::models::{RecognitionError, RecognitionOutput, RecognitionResult};

static WORKER_SEQUENCE: AtomicU64 = AtomicU64::new(0);

pub struct TesseractRecognitionEngine {
    version: String,
}

impl TesseractRecognitionEngine {
    pub fn build() -> Result<Self> {
        log::info!("[TESSERACT_OCR] Initializing Tesseract recognition engine");

        let version = rusty_tesseract::get_tesseract_version()
            .context("Tesseract is not installed or not on PATH")?;

        log::info!("[TESSERACT_OCR] Found Tesseract {}", version.trim());
        Ok(Self { version })
    }

    pub fn version(&self) -> &str {
        self.version.trim()
    }

    fn ensure_language_available(language: &str) -> Result<()> {
        let installed = rusty_tesseract::get_tesseract_langs()
            .context("Failed to list installed Tesseract languages")?;

        let missing = missing_languages(language, &installed);
        if !missing.is_empty() {
            anyhow::bail!(
                "Tesseract language data not installed: {}",
                missing.join(", ")
            );
        }
        Ok(())
    }
}

/// Codes from a `eng+deu` style language string that are absent from `installed`.
fn missing_languages(language: &str, installed: &[String]) -> Vec<String> {
    language
        .split('+')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .filter(|code| !installed.iter().any(|known| known.as_str() == *code))
        .map(str::to_string)
        .collect()
}

#[async_trait]
impl RecognitionEngine for TesseractRecognitionEngine {
    async fn create_worker(&self, language: &str) -> RecognitionResult<Box<dyn RecognitionWorker>> {
        let language = language.to_string();

        let checked_language = language.clone();
        tokio::task::spawn_blocking(move || Self::ensure_language_available(&checked_language))
            .await
            .map_err(|e| RecognitionError::WorkerStart {
                language: language.clone(),
                source: anyhow::Error::new(e),
            })?
            .map_err(|source| RecognitionError::WorkerStart {
                language: language.clone(),
                source,
            })?;

        let sequence = WORKER_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let scratch_path = std::env::temp_dir().join(format!(
            "image-text-extractor-{}-{}.png",
            std::process::id(),
            sequence
        ));

        log::debug!(
            "[TESSERACT_OCR] Worker {} ready for '{}', scratch file {:?}",
            sequence,
            language,
            scratch_path
        );

        Ok(Box::new(TesseractWorker {
            args: Args {
                lang: language,
                ..Args::default()
            },
            scratch_path: Some(scratch_path),
        }))
    }
}

struct TesseractWorker {
    args: Args,
    scratch_path: Option<PathBuf>,
}

impl TesseractWorker {
    fn recognize_blocking(
        image_bytes: Vec<u8>,
        scratch_path: PathBuf,
        args: Args,
    ) -> RecognitionResult<RecognitionOutput> {
        let decoded = image::load_from_memory(&image_bytes)
            .map_err(|e| RecognitionError::ImageDecode(e.to_string()))?;

        log::debug!(
            "[TESSERACT_OCR] Image dimensions: {}x{}",
            decoded.width(),
            decoded.height()
        );

        decoded
            .save_with_format(&scratch_path, image::ImageFormat::Png)
            .map_err(|e| RecognitionError::Engine(format!("failed to stage image: {}", e)))?;

        let tesseract_image = TesseractImage::from_path(&scratch_path)
            .map_err(|e| RecognitionError::Engine(e.to_string()))?;

        let text = rusty_tesseract::image_to_string(&tesseract_image, &args)
            .map_err(|e| RecognitionError::Engine(e.to_string()))?;

        log::info!(
            "[TESSERACT_OCR] Text extraction complete. Extracted {} characters",
            text.len()
        );

        Ok(RecognitionOutput::new(text))
    }

    fn remove_scratch_file(&mut self) -> Result<()> {
        if let Some(path) = self.scratch_path.take() {
            if path.exists() {
                std::fs::remove_file(&path)
                    .with_context(|| format!("Failed to remove scratch file {:?}", path))?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl RecognitionWorker for TesseractWorker {
    async fn recognize(&mut self, image_bytes: &[u8]) -> RecognitionResult<RecognitionOutput> {
        log::info!("[TESSERACT_OCR] Starting text extraction");

        let scratch_path = self
            .scratch_path
            .clone()
            .ok_or_else(|| RecognitionError::Engine("worker already terminated".to_string()))?;
        let image_bytes = image_bytes.to_vec();
        let args = self.args.clone();

        tokio::task::spawn_blocking(move || {
            Self::recognize_blocking(image_bytes, scratch_path, args)
        })
        .await
        .map_err(|e| RecognitionError::Engine(format!("recognition task panicked: {}", e)))?
    }

    async fn terminate(mut self: Box<Self>) -> Result<()> {
        log::debug!("[TESSERACT_OCR] Terminating worker");
        self.remove_scratch_file()
    }
}

impl Drop for TesseractWorker {
    fn drop(&mut self) {
        if let Err(e) = self.remove_scratch_file() {
            log::warn!("[TESSERACT_OCR] {:#}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn installed(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|code| code.to_string()).collect()
    }

    #[test]
    fn test_missing_languages_empty_when_all_installed() {
        let missing = missing_languages("eng+deu", &installed(&["deu", "eng", "osd"]));
        assert!(missing.is_empty());
    }

    #[test]
    fn test_missing_languages_lists_absent_codes() {
        let missing = missing_languages("eng+jpn+fra", &installed(&["eng"]));
        assert_eq!(missing, vec!["jpn".to_string(), "fra".to_string()]);
    }

    #[test]
    fn test_missing_languages_ignores_blank_segments() {
        let missing = missing_languages("eng+ ", &installed(&["eng"]));
        assert!(missing.is_empty());
    }

    #[test]
    fn test_recognize_blocking_rejects_undecodable_bytes() {
        let scratch_path = std::env::temp_dir().join("image-text-extractor-undecodable.png");

        let result = TesseractWorker::recognize_blocking(
            b"definitely not an image".to_vec(),
            scratch_path.clone(),
            Args::default(),
        );

        assert!(matches!(result, Err(RecognitionError::ImageDecode(_))));
        assert!(!scratch_path.exists());
    }

    #[tokio::test]
    async fn test_terminate_removes_scratch_file() {
        let scratch_path = std::env::temp_dir().join("image-text-extractor-terminate.png");
        std::fs::write(&scratch_path, b"staged").unwrap();

        let worker = Box::new(TesseractWorker {
            args: Args::default(),
            scratch_path: Some(scratch_path.clone()),
        });
        worker.terminate().await.unwrap();

        assert!(!scratch_path.exists());
    }
}
