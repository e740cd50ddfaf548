use crate::utils::error::Result;
use crate::utils::validation::{validate_aws_region, validate_non_empty_string, validate_url, Validate};
use std::env;

/// Runtime configuration, read once at process start and passed explicitly to
/// the prober and notifier constructors. Credentials still come from the SDK
/// default chain; everything else is spelled out here instead of being
/// rediscovered on every invocation.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub aws_region: Option<String>,
    pub sns_endpoint: Option<String>,
    pub http_user_agent: String,
}

impl ProbeConfig {
    pub fn from_env() -> Self {
        Self {
            aws_region: env::var("AWS_REGION").ok(),
            sns_endpoint: env::var("SNS_ENDPOINT_URL").ok(),
            http_user_agent: env::var("HTTP_USER_AGENT")
                .unwrap_or_else(|_| concat!("url-probe/", env!("CARGO_PKG_VERSION")).to_string()),
        }
    }
}

impl Validate for ProbeConfig {
    fn validate(&self) -> Result<()> {
        if let Some(region) = &self.aws_region {
            validate_aws_region("aws_region", region)?;
        }

        if let Some(endpoint) = &self.sns_endpoint {
            validate_url("sns_endpoint", endpoint)?;
        }

        validate_non_empty_string("http_user_agent", &self.http_user_agent)?;

        tracing::info!("configuration validation passed");
        Ok(())
    }
}
