use crate::config::ProbeConfig;
use crate::domain::model::ProbeOutcome;
use crate::utils::error::{ProbeError, Result};
use reqwest::Client;
use std::collections::HashMap;
use url::Url;

/// GET prober over a shared `reqwest::Client`. Built once at process start
/// and reused across invocations. Timeouts, redirects and retries stay at the
/// client defaults on purpose.
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    pub fn new(config: &ProbeConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.http_user_agent.clone())
            .build()
            .map_err(|e| ProbeError::ConfigError {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    pub async fn get_data(&self, url: &str) -> Result<ProbeOutcome> {
        tracing::debug!(%url, "GetData");
        self.get_data_with_headers(url, None).await
    }

    /// Issues the GET and returns the status line and body. Failures map to
    /// the probe error taxonomy; a body-read failure keeps the status the
    /// server actually sent.
    pub async fn get_data_with_headers(
        &self,
        url: &str,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<ProbeOutcome> {
        tracing::debug!(%url, ?headers, "GetDataWithHeaders");

        let target = Url::parse(url).map_err(|e| ProbeError::RequestBuild {
            url: url.to_string(),
            source: e,
        })?;

        let mut request = self.client.get(target);
        if let Some(headers) = headers {
            for (name, value) in headers {
                request = request.header(name.as_str(), value.as_str());
            }
        }

        let response = request.send().await.map_err(|e| ProbeError::HttpSend {
            url: url.to_string(),
            source: e,
        })?;

        let status = response.status().to_string();

        let body = response.text().await.map_err(|e| ProbeError::BodyRead {
            url: url.to_string(),
            status: status.clone(),
            source: e,
        })?;

        tracing::debug!("GET call response: {}", body);
        Ok(ProbeOutcome { status, body })
    }
}
