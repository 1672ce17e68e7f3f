use std::path::Path;

use anyhow::{Context, Result};

use crate::core::models::ImageReference;

pub async fn load_image_from_path(path: &Path) -> Result<ImageReference> {
    log::debug!("[INTAKE] Reading image from {:?}", path);

    let raw_bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let reference = ImageReference::build_from_path(path, raw_bytes);
    log::info!(
        "[INTAKE] Loaded {} ({} bytes, media type {:?})",
        reference.source_name,
        reference.byte_len(),
        reference.media_type
    );

    Ok(reference)
}
