use async_trait::async_trait;

use crate::core::interfaces::adapters::FailureNotifier;

pub struct RfdFailureNotifier;

impl RfdFailureNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FailureNotifier for RfdFailureNotifier {
    async fn notify_failure(&self, title: &str, message: &str) {
        log::debug!("[NOTIFIER] Showing failure dialog: {}", message);

        rfd::AsyncMessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show()
            .await;
    }
}
