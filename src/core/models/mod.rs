mod extractor_state;
mod image_reference;
mod recognition;
mod text_export;
mod user_settings;

pub use extractor_state::{ExtractorEffect, ExtractorState};
pub use image_reference::ImageReference;
pub use recognition::{RecognitionError, RecognitionOutput, RecognitionResult};
pub use text_export::TextExport;
pub use user_settings::{ThemeMode, UserSettings};
