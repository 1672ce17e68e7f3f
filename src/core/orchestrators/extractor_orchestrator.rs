use std::path::PathBuf;
use std::sync::Arc;

use iced::window::{self, Id};
use iced::{Element, Size, Task};

use crate::adapters::load_image_from_path;
use crate::core::interfaces::adapters::{
    FailureNotifier, ImagePicker, RecognitionEngine, TextExporter,
};
use crate::core::models::{
    ExtractorEffect, ExtractorState, ImageReference, RecognitionOutput, TextExport, ThemeMode,
    UserSettings,
};
use crate::core::orchestrators::recognition_cycle::run_recognition;
use crate::global_constants;
use crate::presentation::{ExtractorView, ExtractorViewMessage};

#[derive(Clone)]
pub enum OrchestratorMessage {
    OpenMainWindow,
    EngineReady(Arc<dyn RecognitionEngine>),
    EngineFailed(String),
    View(ExtractorViewMessage),
    ImagePicked(Result<Option<ImageReference>, String>),
    FileHovered,
    FilesHoveredLeft,
    FileDropped(PathBuf),
    DroppedFileLoaded(Result<ImageReference, String>),
    RecognitionFinished(u64, Result<RecognitionOutput, String>),
    FailureAcknowledged,
    ExportFinished(Result<Option<PathBuf>, String>),
    WindowClosed(Id),
}

impl std::fmt::Debug for OrchestratorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrchestratorMessage::OpenMainWindow => write!(f, "OpenMainWindow"),
            OrchestratorMessage::EngineReady(_) => write!(f, "EngineReady"),
            OrchestratorMessage::EngineFailed(e) => write!(f, "EngineFailed({})", e),
            OrchestratorMessage::View(msg) => write!(f, "View({:?})", msg),
            OrchestratorMessage::ImagePicked(result) => match result {
                Ok(Some(image)) => write!(f, "ImagePicked({})", image.source_name),
                Ok(None) => write!(f, "ImagePicked(cancelled)"),
                Err(e) => write!(f, "ImagePicked(error: {})", e),
            },
            OrchestratorMessage::FileHovered => write!(f, "FileHovered"),
            OrchestratorMessage::FilesHoveredLeft => write!(f, "FilesHoveredLeft"),
            OrchestratorMessage::FileDropped(path) => write!(f, "FileDropped({:?})", path),
            OrchestratorMessage::DroppedFileLoaded(result) => {
                write!(f, "DroppedFileLoaded({:?})", result.is_ok())
            }
            OrchestratorMessage::RecognitionFinished(cycle, result) => {
                write!(f, "RecognitionFinished({}, {:?})", cycle, result.is_ok())
            }
            OrchestratorMessage::FailureAcknowledged => write!(f, "FailureAcknowledged"),
            OrchestratorMessage::ExportFinished(result) => {
                write!(f, "ExportFinished({:?})", result)
            }
            OrchestratorMessage::WindowClosed(id) => write!(f, "WindowClosed({:?})", id),
        }
    }
}

pub struct ExtractorOrchestrator {
    recognition_engine: Arc<dyn RecognitionEngine>,
    image_picker: Arc<dyn ImagePicker>,
    text_exporter: Arc<dyn TextExporter>,
    failure_notifier: Arc<dyn FailureNotifier>,
    state: ExtractorState,
    settings: UserSettings,
    main_window_id: Option<Id>,
}

impl ExtractorOrchestrator {
    pub fn build(
        recognition_engine: Arc<dyn RecognitionEngine>,
        image_picker: Arc<dyn ImagePicker>,
        text_exporter: Arc<dyn TextExporter>,
        failure_notifier: Arc<dyn FailureNotifier>,
        settings: UserSettings,
    ) -> Self {
        Self {
            recognition_engine,
            image_picker,
            text_exporter,
            failure_notifier,
            state: ExtractorState::default(),
            settings,
            main_window_id: None,
        }
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Received message: {:?}", message);

        match message {
            OrchestratorMessage::OpenMainWindow => self.handle_open_main_window(),
            OrchestratorMessage::EngineReady(engine) => self.handle_engine_ready(engine),
            OrchestratorMessage::EngineFailed(error) => self.handle_engine_failed(error),
            OrchestratorMessage::View(ExtractorViewMessage::ChooseImage) => {
                self.handle_choose_image()
            }
            OrchestratorMessage::View(ExtractorViewMessage::DownloadText) => {
                let effect = self.state.request_export();
                self.run_effect(effect)
            }
            OrchestratorMessage::View(ExtractorViewMessage::ToggleTheme) => {
                self.handle_toggle_theme()
            }
            OrchestratorMessage::ImagePicked(result) => self.handle_image_picked(result),
            OrchestratorMessage::FileHovered => {
                self.state.begin_drag();
                Task::none()
            }
            OrchestratorMessage::FilesHoveredLeft => {
                self.state.end_drag();
                Task::none()
            }
            OrchestratorMessage::FileDropped(path) => self.handle_file_dropped(path),
            OrchestratorMessage::DroppedFileLoaded(result) => {
                self.handle_dropped_file_loaded(result)
            }
            OrchestratorMessage::RecognitionFinished(cycle, result) => {
                let effect = self.state.complete_recognition(cycle, result);
                self.run_effect(effect)
            }
            OrchestratorMessage::FailureAcknowledged => {
                log::debug!("[ORCHESTRATOR] Failure dialog dismissed");
                Task::none()
            }
            OrchestratorMessage::ExportFinished(result) => self.handle_export_finished(result),
            OrchestratorMessage::WindowClosed(id) => self.handle_window_closed(id),
        }
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        if Some(window_id) != self.main_window_id {
            return iced::widget::text("Loading...").into();
        }

        ExtractorView::new(&self.state, &self.settings.theme_mode)
            .render_ui()
            .map(OrchestratorMessage::View)
    }

    fn handle_open_main_window(&mut self) -> Task<OrchestratorMessage> {
        if self.main_window_id.is_some() {
            log::warn!("[ORCHESTRATOR] Main window already open");
            return Task::none();
        }

        let (id, task) = window::open(window::Settings {
            size: Size::new(820.0, 760.0),
            position: window::Position::Centered,
            ..Default::default()
        });

        self.main_window_id = Some(id);
        log::info!("[ORCHESTRATOR] Main window created with ID: {:?}", id);
        task.discard()
    }

    fn handle_engine_ready(&mut self, engine: Arc<dyn RecognitionEngine>) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Recognition engine is ready");
        self.recognition_engine = engine;
        self.state.mark_engine_ready();
        Task::none()
    }

    fn handle_engine_failed(&mut self, error: String) -> Task<OrchestratorMessage> {
        log::error!(
            "[ORCHESTRATOR] Recognition engine initialization failed: {}",
            error
        );
        self.state.mark_engine_failed(&error);
        Task::none()
    }

    fn handle_choose_image(&mut self) -> Task<OrchestratorMessage> {
        if !self.state.can_accept_image() {
            log::debug!("[ORCHESTRATOR] Ignoring image dialog request, intake is closed");
            return Task::none();
        }

        let image_picker = Arc::clone(&self.image_picker);
        Task::future(async move {
            let result = image_picker
                .pick_image()
                .await
                .map_err(|e| format!("{:#}", e));
            OrchestratorMessage::ImagePicked(result)
        })
    }

    fn handle_image_picked(
        &mut self,
        result: Result<Option<ImageReference>, String>,
    ) -> Task<OrchestratorMessage> {
        match result {
            Ok(Some(image)) => {
                let effect = self.state.accept_image(image);
                self.run_effect(effect)
            }
            Ok(None) => Task::none(),
            Err(e) => {
                log::error!("[ORCHESTRATOR] Failed to load picked image: {}", e);
                self.state.set_status(format!("Could not open image: {}", e));
                Task::none()
            }
        }
    }

    fn handle_file_dropped(&mut self, path: PathBuf) -> Task<OrchestratorMessage> {
        if !self.state.take_drop() {
            log::debug!("[ORCHESTRATOR] Not reading dropped file {:?}", path);
            return Task::none();
        }

        Task::future(async move {
            let result = load_image_from_path(&path)
                .await
                .map_err(|e| format!("{:#}", e));
            OrchestratorMessage::DroppedFileLoaded(result)
        })
    }

    fn handle_dropped_file_loaded(
        &mut self,
        result: Result<ImageReference, String>,
    ) -> Task<OrchestratorMessage> {
        match result {
            Ok(candidate) => {
                let effect = self.state.accept_drop(candidate);
                self.run_effect(effect)
            }
            Err(e) => {
                log::error!("[ORCHESTRATOR] Failed to read dropped file: {}", e);
                self.state.set_status(format!("Could not open dropped file: {}", e));
                Task::none()
            }
        }
    }

    fn handle_export_finished(
        &mut self,
        result: Result<Option<PathBuf>, String>,
    ) -> Task<OrchestratorMessage> {
        match result {
            Ok(Some(path)) => {
                self.state.set_status(format!("Saved {}", path.display()));

                let export_directory = path.parent().map(|dir| dir.to_path_buf());
                if export_directory.is_some()
                    && export_directory != self.settings.last_export_directory
                {
                    self.settings.last_export_directory = export_directory;
                    if let Err(e) = self.settings.save() {
                        log::error!("[ORCHESTRATOR] Failed to save export directory: {}", e);
                    }
                }
            }
            Ok(None) => {}
            Err(e) => {
                log::error!("[ORCHESTRATOR] Export failed: {}", e);
                self.state.set_status(format!("Could not save text: {}", e));
            }
        }
        Task::none()
    }

    fn handle_toggle_theme(&mut self) -> Task<OrchestratorMessage> {
        self.settings.theme_mode = match self.settings.theme_mode {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        };
        log::info!("[ORCHESTRATOR] Theme switched to {}", self.settings.theme_mode);

        if let Err(e) = self.settings.save() {
            log::error!("[ORCHESTRATOR] Failed to save theme setting: {}", e);
        }
        Task::none()
    }

    fn handle_window_closed(&mut self, id: Id) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Window closed: {:?}", id);

        if Some(id) == self.main_window_id {
            self.main_window_id = None;
            log::info!("[ORCHESTRATOR] Main window closed, exiting");
            return iced::exit();
        }
        Task::none()
    }

    fn run_effect(&mut self, effect: ExtractorEffect) -> Task<OrchestratorMessage> {
        match effect {
            ExtractorEffect::None => Task::none(),
            ExtractorEffect::StartRecognition { cycle, image } => {
                let engine = Arc::clone(&self.recognition_engine);
                let language = self.settings.recognition_language.clone();
                Task::future(recognize_image(engine, cycle, image, language))
            }
            ExtractorEffect::NotifyFailure(message) => {
                let notifier = Arc::clone(&self.failure_notifier);
                Task::future(notify_recognition_failure(notifier, message))
            }
            ExtractorEffect::ExportText(export) => {
                let exporter = Arc::clone(&self.text_exporter);
                let suggested_directory = self.settings.last_export_directory.clone();
                Task::future(export_recognized_text(exporter, export, suggested_directory))
            }
        }
    }
}

async fn recognize_image(
    engine: Arc<dyn RecognitionEngine>,
    cycle: u64,
    image: ImageReference,
    language: String,
) -> OrchestratorMessage {
    let image_bytes = image.raw_bytes();
    let result = run_recognition(engine.as_ref(), &image_bytes, &language)
        .await
        .map_err(|e| e.to_string());
    OrchestratorMessage::RecognitionFinished(cycle, result)
}

async fn notify_recognition_failure(
    notifier: Arc<dyn FailureNotifier>,
    message: String,
) -> OrchestratorMessage {
    notifier
        .notify_failure(global_constants::RECOGNITION_FAILURE_TITLE, &message)
        .await;
    OrchestratorMessage::FailureAcknowledged
}

async fn export_recognized_text(
    exporter: Arc<dyn TextExporter>,
    export: TextExport,
    suggested_directory: Option<PathBuf>,
) -> OrchestratorMessage {
    let result = exporter
        .export_text(&export, suggested_directory.as_deref())
        .await
        .map_err(|e| format!("{:#}", e));
    OrchestratorMessage::ExportFinished(result)
}
