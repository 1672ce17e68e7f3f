use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::adapters::TextExporter;
use crate::core::models::TextExport;
use crate::global_constants;

pub struct RfdTextExporter;

impl RfdTextExporter {
    pub fn new() -> Self {
        Self
    }
}

pub async fn write_export(path: &Path, export: &TextExport) -> Result<()> {
    tokio::fs::write(path, export.as_bytes())
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!(
        "[EXPORT] Wrote {} bytes to {:?}",
        export.as_bytes().len(),
        path
    );
    Ok(())
}

#[async_trait]
impl TextExporter for RfdTextExporter {
    async fn export_text(
        &self,
        export: &TextExport,
        suggested_directory: Option<&Path>,
    ) -> Result<Option<PathBuf>> {
        let mut dialog = rfd::AsyncFileDialog::new()
            .set_title("Save extracted text")
            .set_file_name(export.file_name.as_str())
            .add_filter(
                global_constants::EXPORT_FILTER_NAME,
                global_constants::EXPORT_FILTER_EXTENSIONS,
            );

        if let Some(directory) = suggested_directory.filter(|dir| dir.is_dir()) {
            dialog = dialog.set_directory(directory);
        }

        let Some(handle) = dialog.save_file().await else {
            log::info!("[EXPORT] Save dialog dismissed");
            return Ok(None);
        };

        let path = handle.path().to_path_buf();
        write_export(&path, export).await?;
        Ok(Some(path))
    }
}
