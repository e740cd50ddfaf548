use crate::utils::error::Result;
use async_trait::async_trait;

/// Publish seam. The orchestrator only needs "send subject/message to a
/// topic", so tests can swap the SNS client for an in-memory recorder.
#[async_trait]
pub trait Notify: Send + Sync {
    async fn publish(&self, topic_arn: &str, subject: &str, message: &str) -> Result<String>;
}
