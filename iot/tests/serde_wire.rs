/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Wire-shape tests: shapes serialize to camelCase JSON omitting unset
//! fields, deserialize back to equal values, and tolerate enum tokens added
//! server-side after code generation.

use iot::input::UpdateThingInput;
use iot::model::{AbortCriteria, AttributePayload, JobStatus, MqttContext, ViolationEvent};
use iot::output::DescribeJobOutput;
use sdk_types::{Blob, Instant};

#[test]
fn unset_fields_are_omitted_from_json() {
    let criteria = AbortCriteria::builder()
        .failure_type("FAILED")
        .threshold_percentage(10.5)
        .build();
    let json = serde_json::to_string(&criteria).unwrap();
    assert_eq!(json, r#"{"failureType":"FAILED","thresholdPercentage":10.5}"#);
}

#[test]
fn missing_fields_deserialize_as_unset() {
    let criteria: AbortCriteria = serde_json::from_str(r#"{"action":"CANCEL"}"#).unwrap();
    assert_eq!(criteria.failure_type, None);
    assert_eq!(criteria.threshold_percentage, None);
    assert_eq!(criteria.min_number_of_executed_things, None);
    assert_eq!(criteria.action.unwrap().as_str(), "CANCEL");
}

#[test]
fn round_trip_preserves_equality() {
    let input = UpdateThingInput::builder()
        .thing_name("thermostat-17")
        .attribute_payload(
            AttributePayload::builder()
                .attributes("firmware", "1.4.2")
                .unwrap()
                .merge(true)
                .build(),
        )
        .expected_version(7)
        .build();
    let json = serde_json::to_string(&input).unwrap();
    let back: UpdateThingInput = serde_json::from_str(&json).unwrap();
    assert_eq!(back, input);
}

#[test]
fn unrecognized_enum_tokens_deserialize_leniently() {
    let json = r#"{"job":{"jobId":"j-1","status":"SCHEDULED"}}"#;
    let output: DescribeJobOutput = serde_json::from_str(json).unwrap();
    let job = output.job.unwrap();
    assert_eq!(job.status, Some(JobStatus::Unknown("SCHEDULED".to_string())));
    // and the raw token survives re-serialization
    let reserialized = serde_json::to_string(&job).unwrap();
    assert_eq!(reserialized, r#"{"jobId":"j-1","status":"SCHEDULED"}"#);
}

#[test]
fn timestamps_travel_as_epoch_seconds() {
    let event = ViolationEvent::builder()
        .violation_id("v-1")
        .violation_event_time(Instant::from_epoch_seconds(1576540098))
        .build();
    let json = serde_json::to_string(&event).unwrap();
    assert_eq!(json, r#"{"violationId":"v-1","violationEventTime":1576540098}"#);
    let back: ViolationEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
}

#[test]
fn binary_fields_travel_as_base64() {
    let context = MqttContext::builder()
        .client_id("client-1")
        .password(Blob::new("secret"))
        .build();
    let json = serde_json::to_string(&context).unwrap();
    assert_eq!(json, r#"{"password":"c2VjcmV0","clientId":"client-1"}"#);
    let back: MqttContext = serde_json::from_str(&json).unwrap();
    assert_eq!(back, context);
}
