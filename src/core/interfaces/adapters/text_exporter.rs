use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::TextExport;

#[async_trait]
pub trait TextExporter: Send + Sync {
    /// Writes the export and returns where it landed, or `Ok(None)` when the
    /// user cancelled.
    async fn export_text(
        &self,
        export: &TextExport,
        suggested_directory: Option<&Path>,
    ) -> Result<Option<PathBuf>>;
}
