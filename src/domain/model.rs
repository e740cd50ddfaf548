use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// SQS event payload as delivered by the Lambda runtime. Field names follow
/// the wire format, so this deserializes straight from the invocation JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SqsEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<SqsRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqsRecord {
    #[serde(default)]
    pub message_id: String,
    #[serde(default)]
    pub receipt_handle: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
    #[serde(default)]
    pub message_attributes: HashMap<String, SqsMessageAttribute>,
    #[serde(default)]
    pub md5_of_body: String,
    #[serde(default)]
    pub event_source: String,
    #[serde(rename = "eventSourceARN", default)]
    pub event_source_arn: String,
    #[serde(default)]
    pub aws_region: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqsMessageAttribute {
    #[serde(default)]
    pub string_value: Option<String>,
    #[serde(default)]
    pub binary_value: Option<String>,
    #[serde(default)]
    pub data_type: String,
}

/// Status line and body of one GET probe. Both are always populated; when the
/// probe fails the error text stands in for the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub status: String,
    pub body: String,
}

/// Invocation result returned to the Lambda runtime.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeResponse {
    pub target_url: String,
    pub probe_status: String,
    pub publish_receipt: String,
}
