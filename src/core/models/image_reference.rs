use std::path::Path;
use std::sync::Arc;

use iced::widget::image;

use crate::global_constants;

/// An uploaded image held in memory for display and recognition.
///
/// Clones share the raw bytes through an `Arc`. The display handle owns a
/// separate copy, and the recognition worker copies the bytes again onto its
/// blocking thread. Dropping the last clone releases the raw bytes and the
/// handle.
#[derive(Clone)]
pub struct ImageReference {
    pub source_name: String,
    pub media_type: Option<String>,
    pub image_handle: image::Handle,
    raw_bytes: Arc<Vec<u8>>,
}

impl std::fmt::Debug for ImageReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageReference")
            .field("source_name", &self.source_name)
            .field("media_type", &self.media_type)
            .field("byte_len", &self.raw_bytes.len())
            .finish()
    }
}

impl ImageReference {
    pub fn build_from_bytes(source_name: String, media_type: Option<String>, raw_bytes: Vec<u8>) -> Self {
        log::debug!(
            "[IMAGE_REFERENCE] building reference for {} ({} bytes, {:?})",
            source_name,
            raw_bytes.len(),
            media_type
        );

        Self {
            source_name,
            media_type,
            image_handle: image::Handle::from_bytes(raw_bytes.clone()),
            raw_bytes: Arc::new(raw_bytes),
        }
    }

    pub fn build_from_path(path: &Path, raw_bytes: Vec<u8>) -> Self {
        let source_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let media_type = media_type_for(path, &raw_bytes);

        Self::build_from_bytes(source_name, media_type, raw_bytes)
    }

    pub fn raw_bytes(&self) -> Arc<Vec<u8>> {
        Arc::clone(&self.raw_bytes)
    }

    pub fn byte_len(&self) -> usize {
        self.raw_bytes.len()
    }

    pub fn is_image(&self) -> bool {
        self.media_type
            .as_deref()
            .map(is_image_media_type)
            .unwrap_or(false)
    }
}

pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with(global_constants::IMAGE_MEDIA_TYPE_PREFIX)
}

/// Media type from the file extension, falling back to sniffing the bytes
/// when the extension is unknown.
pub fn media_type_for(path: &Path, raw_bytes: &[u8]) -> Option<String> {
    if let Ok(format) = ::image::ImageFormat::from_path(path) {
        return Some(format.to_mime_type().to_string());
    }

    if path.extension().is_some() {
        return None;
    }

    ::image::guess_format(raw_bytes)
        .ok()
        .map(|format| format.to_mime_type().to_string())
}
