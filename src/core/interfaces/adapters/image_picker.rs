use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::ImageReference;

#[async_trait]
pub trait ImagePicker: Send + Sync {
    /// `Ok(None)` when the user dismissed the dialog.
    async fn pick_image(&self) -> Result<Option<ImageReference>>;
}
