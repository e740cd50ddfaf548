use crate::config::ProbeConfig;
use crate::domain::ports::Notify;
use crate::utils::error::{ProbeError, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sns::config::Region;
use aws_sdk_sns::Client as SnsClient;

#[derive(Debug, Clone)]
pub struct SnsNotifier {
    client: SnsClient,
}

impl SnsNotifier {
    /// Builds the SNS client once from the explicit config. The client is
    /// cheap to clone and shared for the life of the process.
    pub async fn new(config: &ProbeConfig) -> Self {
        let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;

        let mut builder = aws_sdk_sns::config::Builder::from(&aws_config);
        if let Some(region) = &config.aws_region {
            builder = builder.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = &config.sns_endpoint {
            builder = builder.endpoint_url(endpoint.as_str());
        }

        Self {
            client: SnsClient::from_conf(builder.build()),
        }
    }
}

#[async_trait]
impl Notify for SnsNotifier {
    async fn publish(&self, topic_arn: &str, subject: &str, message: &str) -> Result<String> {
        let result = self
            .client
            .publish()
            .topic_arn(topic_arn)
            .subject(subject)
            .message(message)
            .send()
            .await;

        match result {
            Ok(output) => Ok(format!("{:?}", output)),
            Err(e) => {
                tracing::error!(%topic_arn, "error publishing to SNS: {}", e);
                Err(ProbeError::Publish {
                    message: e.to_string(),
                })
            }
        }
    }
}
