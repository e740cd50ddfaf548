use thiserror::Error;

/// Status marker reported when a probe fails before any response status
/// exists (bad URL, connection failure).
pub const PROBE_ERROR_STATUS: &str = "501";

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Error in creating GET request for url {url}")]
    RequestBuild {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Error in GET call for url {url}")]
    HttpSend {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Error in reading GET call response from url {url}")]
    BodyRead {
        url: String,
        status: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Publish Error: {message}")]
    Publish { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ProbeError>;

impl ProbeError {
    /// Status text embedded in the notification when the probe itself failed.
    /// Body-read failures keep the status the server actually sent.
    pub fn probe_status(&self) -> &str {
        match self {
            ProbeError::BodyRead { status, .. } => status,
            _ => PROBE_ERROR_STATUS,
        }
    }
}
