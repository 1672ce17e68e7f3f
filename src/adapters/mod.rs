mod file_image_loader;
mod rfd_failure_notifier;
mod rfd_image_picker;
mod rfd_text_exporter;
mod tesseract_recognition_engine;

pub use file_image_loader::load_image_from_path;
pub use rfd_failure_notifier::RfdFailureNotifier;
pub use rfd_image_picker::RfdImagePicker;
pub use rfd_text_exporter::RfdTextExporter;
pub use tesseract_recognition_engine::TesseractRecognitionEngine;
