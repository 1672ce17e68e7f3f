mod failure_notifier;
mod image_picker;
mod recognition_engine;
mod text_exporter;

pub use failure_notifier::FailureNotifier;
pub use image_picker::ImagePicker;
pub use recognition_engine::{RecognitionEngine, RecognitionWorker};
pub use text_exporter::TextExporter;
