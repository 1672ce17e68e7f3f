use std::sync::Arc;

use async_trait::async_trait;
use iced::window::{self, Id};
use iced::{Element, Task};

use crate::adapters::{
    RfdFailureNotifier, RfdImagePicker, RfdTextExporter, TesseractRecognitionEngine,
};
use crate::core::interfaces::adapters::{RecognitionEngine, RecognitionWorker};
use crate::core::models::{RecognitionError, RecognitionResult, UserSettings};
use crate::core::orchestrators::extractor_orchestrator::{
    ExtractorOrchestrator, OrchestratorMessage,
};
use crate::global_constants;

/// Stands in until Tesseract has been located.
struct PendingRecognitionEngine;

#[async_trait]
impl RecognitionEngine for PendingRecognitionEngine {
    async fn create_worker(&self, language: &str) -> RecognitionResult<Box<dyn RecognitionWorker>> {
        Err(RecognitionError::WorkerStart {
            language: language.to_string(),
            source: anyhow::anyhow!("OCR engine not initialized yet"),
        })
    }
}

pub struct ExtractorApp {
    orchestrator: ExtractorOrchestrator,
}

impl ExtractorApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("[APP] Initializing application");

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("[APP] Failed to load settings: {}, using defaults", e);
            UserSettings::default()
        });

        let orchestrator = ExtractorOrchestrator::build(
            Arc::new(PendingRecognitionEngine),
            Arc::new(RfdImagePicker::new()),
            Arc::new(RfdTextExporter::new()),
            Arc::new(RfdFailureNotifier::new()),
            settings,
        );

        let engine_task = Task::future(async {
            let built = tokio::task::spawn_blocking(TesseractRecognitionEngine::build).await;
            match built {
                Ok(Ok(engine)) => {
                    log::info!(
                        "[APP] Tesseract {} initialized successfully",
                        engine.version()
                    );
                    OrchestratorMessage::EngineReady(
                        Arc::new(engine) as Arc<dyn RecognitionEngine>
                    )
                }
                Ok(Err(e)) => {
                    log::error!("[APP] Failed to initialize Tesseract: {:#}", e);
                    OrchestratorMessage::EngineFailed(format!("{:#}", e))
                }
                Err(e) => {
                    log::error!("[APP] Tesseract initialization task failed: {}", e);
                    OrchestratorMessage::EngineFailed(e.to_string())
                }
            }
        });

        (
            Self { orchestrator },
            Task::batch(vec![
                Task::done(OrchestratorMessage::OpenMainWindow),
                engine_task,
            ]),
        )
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view(window_id)
    }

    pub fn window_title(&self, _window_id: Id) -> String {
        global_constants::APPLICATION_TITLE.to_string()
    }

    pub fn handle_subscription(&self) -> iced::Subscription<OrchestratorMessage> {
        iced::event::listen_with(|event, _status, id| match event {
            iced::Event::Window(window::Event::FileHovered(_)) => {
                Some(OrchestratorMessage::FileHovered)
            }
            iced::Event::Window(window::Event::FilesHoveredLeft) => {
                Some(OrchestratorMessage::FilesHoveredLeft)
            }
            iced::Event::Window(window::Event::FileDropped(path)) => {
                Some(OrchestratorMessage::FileDropped(path))
            }
            iced::Event::Window(window::Event::Closed) => {
                Some(OrchestratorMessage::WindowClosed(id))
            }
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pending_engine_refuses_to_create_workers() {
        let result = PendingRecognitionEngine.create_worker("eng").await;

        match result {
            Err(RecognitionError::WorkerStart { language, .. }) => assert_eq!(language, "eng"),
            Err(other) => panic!("Expected WorkerStart, got {}", other),
            Ok(_) => panic!("Expected an error"),
        }
    }
}
