use crate::domain::model::{SqsEvent, SqsMessageAttribute};
use serde_json::Value;
use std::collections::HashMap;

/// Flattens an SQS batch into a single field map.
///
/// Batch contract: last record wins. The map is rebuilt for every record, so
/// with more than one record only the final record's parsed fields (plus its
/// `msgId` and `eventSource`) survive. Senders that need per-record handling
/// must deliver single-record batches.
pub fn read_event_message(event: &SqsEvent) -> HashMap<String, Value> {
    let empty: HashMap<String, SqsMessageAttribute> = HashMap::new();
    let mut fields = HashMap::new();
    let mut attributes = &empty;

    for record in &event.records {
        attributes = &record.message_attributes;

        fields = match serde_json::from_str(&record.body) {
            Ok(Value::Object(body)) => body.into_iter().collect(),
            Ok(_) => {
                tracing::warn!(
                    message_id = %record.message_id,
                    "SQS message body is not a JSON object"
                );
                HashMap::new()
            }
            Err(e) => {
                tracing::warn!(
                    message_id = %record.message_id,
                    "error unmarshalling SQS message body: {}", e
                );
                HashMap::new()
            }
        };

        fields.insert(
            "msgId".to_string(),
            Value::String(record.message_id.clone()),
        );
        fields.insert(
            "eventSource".to_string(),
            Value::String(record.event_source.clone()),
        );
    }

    tracing::debug!("message attributes: {:?}", attributes);
    fields
}

/// Renders an extracted field the way the notification templates expect:
/// strings without surrounding quotes, other JSON values in their canonical
/// form, missing keys as the `<nil>` placeholder.
pub fn field_to_string(fields: &HashMap<String, Value>, key: &str) -> String {
    match fields.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "<nil>".to_string(),
    }
}
