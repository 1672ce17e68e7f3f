use anyhow::Result;
use async_trait::async_trait;

use crate::adapters::file_image_loader::load_image_from_path;
use crate::core::interfaces::adapters::ImagePicker;
use crate::core::models::ImageReference;
use crate::global_constants;

pub struct RfdImagePicker;

impl RfdImagePicker {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ImagePicker for RfdImagePicker {
    async fn pick_image(&self) -> Result<Option<ImageReference>> {
        log::debug!("[PICKER] Opening image dialog");

        let picked = rfd::AsyncFileDialog::new()
            .set_title("Choose Image")
            .add_filter(
                global_constants::IMAGE_FILTER_NAME,
                global_constants::IMAGE_FILTER_EXTENSIONS,
            )
            .pick_file()
            .await;

        let Some(handle) = picked else {
            log::info!("[PICKER] Image dialog dismissed");
            return Ok(None);
        };

        load_image_from_path(handle.path()).await.map(Some)
    }
}
