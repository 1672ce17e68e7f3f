use crate::core::models::{ImageReference, RecognitionOutput, TextExport};
use crate::global_constants;

/// What the caller has to do after a state transition.
#[derive(Debug, Clone)]
pub enum ExtractorEffect {
    None,
    StartRecognition { cycle: u64, image: ImageReference },
    NotifyFailure(String),
    ExportText(TextExport),
}

impl ExtractorEffect {
    #[cfg(test)]
    pub fn is_none(&self) -> bool {
        matches!(self, ExtractorEffect::None)
    }
}

/// UI state of the extractor window.
///
/// Every user or engine event goes through one of the transition methods
/// below. None of them touch the UI toolkit, so the whole intake, recognize,
/// display and export cycle can be driven from tests.
#[derive(Debug)]
pub struct ExtractorState {
    loading: bool,
    drag_active: bool,
    drop_armed: bool,
    engine_ready: bool,
    image: Option<ImageReference>,
    text: Option<String>,
    status: String,
    cycle: u64,
}

impl Default for ExtractorState {
    fn default() -> Self {
        Self {
            loading: false,
            drag_active: false,
            drop_armed: false,
            engine_ready: false,
            image: None,
            text: None,
            status: global_constants::STATUS_ENGINE_STARTING.to_string(),
            cycle: 0,
        }
    }
}

impl ExtractorState {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    /// Whether a new image would be taken right now.
    pub fn can_accept_image(&self) -> bool {
        self.engine_ready && !self.loading
    }

    pub fn image(&self) -> Option<&ImageReference> {
        self.image.as_ref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn has_text(&self) -> bool {
        self.text.as_deref().is_some_and(|text| !text.is_empty())
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    #[cfg(test)]
    pub fn current_cycle(&self) -> u64 {
        self.cycle
    }

    pub fn mark_engine_ready(&mut self) {
        self.engine_ready = true;
        if !self.loading {
            self.status = global_constants::STATUS_READY.to_string();
        }
    }

    pub fn mark_engine_failed(&mut self, error: &str) {
        self.engine_ready = false;
        self.status = format!("OCR engine unavailable: {}", error);
    }

    /// Drag-enter and drag-over. Arms the gesture for a single drop.
    pub fn begin_drag(&mut self) {
        self.drag_active = true;
        self.drop_armed = true;
    }

    /// Drag-leave.
    pub fn end_drag(&mut self) {
        self.drag_active = false;
        self.drop_armed = false;
    }

    /// Claims the drop of the current gesture.
    ///
    /// Only the first file of a multi-file drop is taken. Drops arriving
    /// without a preceding hover, or while an image cannot be accepted, are
    /// refused before anything is read from disk.
    pub fn take_drop(&mut self) -> bool {
        self.drag_active = false;
        if !std::mem::take(&mut self.drop_armed) {
            log::debug!("[STATE] Ignoring extra file of the same drop");
            return false;
        }

        if !self.engine_ready {
            log::warn!("[STATE] Ignoring drop before the OCR engine is ready");
            return false;
        }

        if self.loading {
            log::warn!("[STATE] Ignoring drop while cycle {} is running", self.cycle);
            self.status = global_constants::STATUS_BUSY.to_string();
            return false;
        }

        true
    }

    pub fn accept_drop(&mut self, candidate: ImageReference) -> ExtractorEffect {
        self.drag_active = false;

        if !candidate.is_image() {
            log::warn!(
                "[STATE] Ignoring dropped file {} with media type {:?}",
                candidate.source_name,
                candidate.media_type
            );
            self.status = format!("{} is not an image", candidate.source_name);
            return ExtractorEffect::None;
        }

        self.accept_image(candidate)
    }

    pub fn accept_image(&mut self, image: ImageReference) -> ExtractorEffect {
        if !self.engine_ready {
            log::warn!(
                "[STATE] Rejecting {} before the OCR engine is ready",
                image.source_name
            );
            return ExtractorEffect::None;
        }

        if self.loading {
            log::warn!(
                "[STATE] Rejecting {} while cycle {} is still running",
                image.source_name,
                self.cycle
            );
            self.status = global_constants::STATUS_BUSY.to_string();
            return ExtractorEffect::None;
        }

        self.cycle += 1;
        self.loading = true;
        self.status = global_constants::STATUS_PROCESSING.to_string();
        log::info!(
            "[STATE] Cycle {} started for {} ({} bytes)",
            self.cycle,
            image.source_name,
            image.byte_len()
        );

        // Replacing the reference drops the previous image.
        self.image = Some(image.clone());

        ExtractorEffect::StartRecognition {
            cycle: self.cycle,
            image,
        }
    }

    pub fn complete_recognition(
        &mut self,
        cycle: u64,
        result: Result<RecognitionOutput, String>,
    ) -> ExtractorEffect {
        if cycle != self.cycle || !self.loading {
            log::warn!(
                "[STATE] Ignoring completion of cycle {} (current cycle {}, loading={})",
                cycle,
                self.cycle,
                self.loading
            );
            return ExtractorEffect::None;
        }

        self.loading = false;

        match result {
            Ok(output) => {
                log::info!(
                    "[STATE] Cycle {} produced {} characters",
                    cycle,
                    output.text.len()
                );
                self.status = if output.text.trim().is_empty() {
                    "No text found in image".to_string()
                } else {
                    "Text extracted".to_string()
                };
                self.text = Some(output.text);
                ExtractorEffect::None
            }
            Err(error) => {
                log::error!("[STATE] Cycle {} failed: {}", cycle, error);
                self.status = "Text extraction failed".to_string();
                ExtractorEffect::NotifyFailure(
                    global_constants::RECOGNITION_FAILURE_MESSAGE.to_string(),
                )
            }
        }
    }

    pub fn request_export(&self) -> ExtractorEffect {
        match TextExport::from_text(self.text()) {
            Some(export) => ExtractorEffect::ExportText(export),
            None => {
                log::debug!("[STATE] Export requested without text, nothing to do");
                ExtractorEffect::None
            }
        }
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn png_reference(name: &str) -> ImageReference {
        ImageReference::build_from_path(&PathBuf::from(name), vec![0u8; 8])
    }

    fn ready_state() -> ExtractorState {
        let mut state = ExtractorState::default();
        state.mark_engine_ready();
        state
    }

    fn start_cycle(state: &mut ExtractorState, name: &str) -> u64 {
        match state.accept_image(png_reference(name)) {
            ExtractorEffect::StartRecognition { cycle, .. } => cycle,
            other => panic!("Expected StartRecognition, got {:?}", other),
        }
    }

    #[test]
    fn test_default_state_is_idle_and_waits_for_engine() {
        let state = ExtractorState::default();

        assert!(!state.is_loading());
        assert!(!state.is_drag_active());
        assert!(!state.can_accept_image());
        assert!(state.image().is_none());
        assert!(state.text().is_none());
        assert_eq!(state.status(), global_constants::STATUS_ENGINE_STARTING);
    }

    #[test]
    fn test_image_before_engine_ready_is_rejected() {
        let mut state = ExtractorState::default();

        let effect = state.accept_image(png_reference("early.png"));

        assert!(effect.is_none());
        assert!(!state.is_loading());
        assert!(state.image().is_none());
        assert_eq!(state.current_cycle(), 0);
    }

    #[test]
    fn test_engine_ready_keeps_processing_status_of_running_cycle() {
        let mut state = ready_state();
        start_cycle(&mut state, "scan.png");

        state.mark_engine_ready();

        assert!(state.is_loading());
        assert_eq!(state.status(), global_constants::STATUS_PROCESSING);
    }

    #[test]
    fn test_engine_failure_blocks_intake() {
        let mut state = ready_state();

        state.mark_engine_failed("tesseract not found");

        assert!(!state.can_accept_image());
        assert!(state.status().contains("tesseract not found"));
    }

    #[test]
    fn test_take_drop_claims_only_first_file_of_gesture() {
        let mut state = ready_state();
        state.begin_drag();
        state.begin_drag();

        assert!(state.take_drop());
        assert!(!state.is_drag_active());
        assert!(!state.take_drop());

        state.begin_drag();
        assert!(state.take_drop());
    }

    #[test]
    fn test_take_drop_without_hover_is_refused() {
        let mut state = ready_state();
        assert!(!state.take_drop());
    }

    #[test]
    fn test_take_drop_after_drag_leave_is_refused() {
        let mut state = ready_state();
        state.begin_drag();
        state.end_drag();

        assert!(!state.take_drop());
    }

    #[test]
    fn test_take_drop_while_loading_is_refused() {
        let mut state = ready_state();
        start_cycle(&mut state, "first.png");
        state.begin_drag();

        assert!(!state.take_drop());
        assert_eq!(state.status(), global_constants::STATUS_BUSY);
        assert_eq!(state.image().unwrap().source_name, "first.png");
    }

    #[test]
    fn test_take_drop_before_engine_ready_is_refused() {
        let mut state = ExtractorState::default();
        state.begin_drag();

        assert!(!state.take_drop());
    }

    #[test]
    fn test_drag_enter_and_over_set_indicator() {
        let mut state = ready_state();

        state.begin_drag();
        assert!(state.is_drag_active());

        state.begin_drag();
        assert!(state.is_drag_active());
    }

    #[test]
    fn test_drag_leave_clears_indicator() {
        let mut state = ready_state();
        state.begin_drag();

        state.end_drag();

        assert!(!state.is_drag_active());
    }

    #[test]
    fn test_drop_clears_indicator_and_starts_recognition() {
        let mut state = ready_state();
        state.begin_drag();

        let effect = state.accept_drop(png_reference("scan.png"));

        assert!(!state.is_drag_active());
        assert!(state.is_loading());
        assert!(matches!(
            effect,
            ExtractorEffect::StartRecognition { cycle: 1, .. }
        ));
        assert_eq!(state.image().unwrap().source_name, "scan.png");
    }

    #[test]
    fn test_drop_of_non_image_does_not_start_recognition() {
        let mut state = ready_state();
        state.begin_drag();

        let candidate = ImageReference::build_from_path(&PathBuf::from("notes.txt"), vec![1, 2]);
        let effect = state.accept_drop(candidate);

        assert!(effect.is_none());
        assert!(!state.is_drag_active());
        assert!(!state.is_loading());
        assert!(state.image().is_none());
        assert_eq!(state.current_cycle(), 0);
    }

    #[test]
    fn test_successful_recognition_displays_engine_text_exactly() {
        let mut state = ready_state();
        let cycle = start_cycle(&mut state, "scan.png");

        let effect = state.complete_recognition(
            cycle,
            Ok(RecognitionOutput::new("Invoice #42\n\n  Total: 10.00\n")),
        );

        assert!(effect.is_none());
        assert!(!state.is_loading());
        assert_eq!(state.text(), Some("Invoice #42\n\n  Total: 10.00\n"));
    }

    #[test]
    fn test_failed_recognition_resets_loading_and_keeps_previous_text() {
        let mut state = ready_state();
        let first = start_cycle(&mut state, "first.png");
        state.complete_recognition(first, Ok(RecognitionOutput::new("first text")));

        let second = start_cycle(&mut state, "second.png");
        let effect = state.complete_recognition(second, Err("engine crashed".to_string()));

        assert!(!state.is_loading());
        assert_eq!(state.text(), Some("first text"));
        match effect {
            ExtractorEffect::NotifyFailure(message) => {
                assert_eq!(message, global_constants::RECOGNITION_FAILURE_MESSAGE)
            }
            other => panic!("Expected NotifyFailure, got {:?}", other),
        }
    }

    #[test]
    fn test_intake_while_loading_is_rejected() {
        let mut state = ready_state();
        let cycle = start_cycle(&mut state, "first.png");

        let effect = state.accept_image(png_reference("second.png"));

        assert!(effect.is_none());
        assert_eq!(state.current_cycle(), cycle);
        assert_eq!(state.image().unwrap().source_name, "first.png");
        assert_eq!(state.status(), global_constants::STATUS_BUSY);
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut state = ready_state();
        let first = start_cycle(&mut state, "first.png");
        state.complete_recognition(first, Ok(RecognitionOutput::new("first")));
        let _second = start_cycle(&mut state, "second.png");

        let effect = state.complete_recognition(first, Ok(RecognitionOutput::new("stale")));

        assert!(effect.is_none());
        assert!(state.is_loading());
        assert_eq!(state.text(), Some("first"));
    }

    #[test]
    fn test_new_upload_replaces_image() {
        let mut state = ready_state();
        let first = start_cycle(&mut state, "first.png");
        state.complete_recognition(first, Ok(RecognitionOutput::new("first")));

        start_cycle(&mut state, "second.png");

        assert_eq!(state.image().unwrap().source_name, "second.png");
    }

    #[test]
    fn test_export_without_text_produces_nothing() {
        let state = ready_state();
        assert!(state.request_export().is_none());
    }

    #[test]
    fn test_export_after_empty_recognition_produces_nothing() {
        let mut state = ready_state();
        let cycle = start_cycle(&mut state, "blank.png");
        state.complete_recognition(cycle, Ok(RecognitionOutput::new("")));

        assert!(!state.has_text());
        assert!(state.request_export().is_none());
    }

    #[test]
    fn test_export_of_recognized_text_is_byte_exact() {
        let mut state = ready_state();
        let cycle = start_cycle(&mut state, "hello.png");
        state.complete_recognition(cycle, Ok(RecognitionOutput::new("Hello\nWorld")));

        match state.request_export() {
            ExtractorEffect::ExportText(export) => {
                assert_eq!(export.file_name, "extracted-text.txt");
                assert_eq!(export.contents, "Hello\nWorld");
            }
            other => panic!("Expected ExportText, got {:?}", other),
        }
    }
}
