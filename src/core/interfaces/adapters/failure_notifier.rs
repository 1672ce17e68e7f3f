use async_trait::async_trait;

#[async_trait]
pub trait FailureNotifier: Send + Sync {
    /// Blocks until the user acknowledges the message.
    async fn notify_failure(&self, title: &str, message: &str);
}
