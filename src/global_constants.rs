pub const APPLICATION_TITLE: &str = "Image Text Extractor";
pub const APPLICATION_SUBTITLE: &str = "Upload an image or drag and drop to extract text";
pub const APPLICATION_CONFIG_DIR_NAME: &str = "image-text-extractor";

pub const DEFAULT_RECOGNITION_LANGUAGE: &str = "eng";

pub const EXPORT_FILE_NAME: &str = "extracted-text.txt";
pub const EXPORT_FILTER_NAME: &str = "Text";
pub const EXPORT_FILTER_EXTENSIONS: &[&str] = &["txt"];

pub const IMAGE_FILTER_NAME: &str = "Images";
pub const IMAGE_FILTER_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "pnm", "pbm", "pgm", "ppm",
];

pub const IMAGE_MEDIA_TYPE_PREFIX: &str = "image/";

pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const RECOGNITION_FAILURE_TITLE: &str = "Text extraction failed";
pub const RECOGNITION_FAILURE_MESSAGE: &str =
    "Error extracting text from image. Please try again.";

pub const STATUS_ENGINE_STARTING: &str = "Starting OCR engine...";
pub const STATUS_READY: &str = "Ready - choose an image or drop one here";
pub const STATUS_PROCESSING: &str = "Processing...";
pub const STATUS_BUSY: &str = "Still processing the previous image";
