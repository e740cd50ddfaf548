use serde_json::json;
use std::collections::HashMap;
use url_probe::core::extractor::field_to_string;
use url_probe::{read_event_message, SqsEvent, SqsRecord};

fn record(message_id: &str, body: &str) -> SqsRecord {
    SqsRecord {
        message_id: message_id.to_string(),
        body: body.to_string(),
        event_source: "aws:sqs".to_string(),
        ..Default::default()
    }
}

#[test]
fn single_record_extracts_url_topic_and_system_fields() {
    let event = SqsEvent {
        records: vec![record(
            "m-1",
            r#"{"targetUrl":"http://x/ok","topicArn":"arn:1"}"#,
        )],
    };

    let fields = read_event_message(&event);

    assert_eq!(fields["targetUrl"], json!("http://x/ok"));
    assert_eq!(fields["topicArn"], json!("arn:1"));
    assert_eq!(fields["msgId"], json!("m-1"));
    assert_eq!(fields["eventSource"], json!("aws:sqs"));
}

#[test]
fn empty_batch_yields_empty_map_and_nil_placeholders() {
    let fields = read_event_message(&SqsEvent::default());

    assert!(fields.is_empty());
    assert_eq!(field_to_string(&fields, "targetUrl"), "<nil>");
    assert_eq!(field_to_string(&fields, "topicArn"), "<nil>");
}

#[test]
fn last_record_wins_in_multi_record_batches() {
    let event = SqsEvent {
        records: vec![
            record("m-1", r#"{"targetUrl":"http://first","extra":"dropped"}"#),
            record("m-2", r#"{"targetUrl":"http://second","topicArn":"arn:2"}"#),
        ],
    };

    let fields = read_event_message(&event);

    assert_eq!(fields["targetUrl"], json!("http://second"));
    assert_eq!(fields["topicArn"], json!("arn:2"));
    assert_eq!(fields["msgId"], json!("m-2"));
    assert!(!fields.contains_key("extra"));
}

#[test]
fn unparseable_body_keeps_only_system_fields() {
    let event = SqsEvent {
        records: vec![record("m-3", "not json at all")],
    };

    let fields = read_event_message(&event);

    assert_eq!(fields.len(), 2);
    assert_eq!(fields["msgId"], json!("m-3"));
    assert_eq!(fields["eventSource"], json!("aws:sqs"));
}

#[test]
fn non_object_body_is_treated_like_a_parse_failure() {
    let event = SqsEvent {
        records: vec![record("m-4", r#"["targetUrl","topicArn"]"#)],
    };

    let fields = read_event_message(&event);

    assert!(!fields.contains_key("targetUrl"));
    assert_eq!(fields["msgId"], json!("m-4"));
}

#[test]
fn non_string_fields_render_canonically() {
    let mut fields = HashMap::new();
    fields.insert("count".to_string(), json!(7));
    fields.insert("flag".to_string(), json!(true));

    assert_eq!(field_to_string(&fields, "count"), "7");
    assert_eq!(field_to_string(&fields, "flag"), "true");
}

#[test]
fn sqs_event_deserializes_from_lambda_wire_format() {
    let raw = r#"{
        "Records": [{
            "messageId": "059f36b4-87a3-44ab-83d2-661975830a7d",
            "receiptHandle": "AQEBwJnKyrHigUMZj6rYigCgxlaS3SLy0a",
            "body": "{\"targetUrl\":\"http://x/ok\",\"topicArn\":\"arn:1\"}",
            "attributes": {"ApproximateReceiveCount": "1"},
            "messageAttributes": {"trace": {"stringValue": "abc", "dataType": "String"}},
            "md5OfBody": "e4e68fb7bd0e697a0ae8f1bb342846b3",
            "eventSource": "aws:sqs",
            "eventSourceARN": "arn:aws:sqs:us-east-1:123456789012:probe-queue",
            "awsRegion": "us-east-1"
        }]
    }"#;

    let event: SqsEvent = serde_json::from_str(raw).unwrap();
    assert_eq!(event.records.len(), 1);
    assert_eq!(
        event.records[0].event_source_arn,
        "arn:aws:sqs:us-east-1:123456789012:probe-queue"
    );

    let fields = read_event_message(&event);
    assert_eq!(fields["targetUrl"], json!("http://x/ok"));
    assert_eq!(fields["topicArn"], json!("arn:1"));
}
