/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Behavioral tests for the generated shape contract: builders, structural
//! equality and hashing, diagnostic rendering, strict map inserts, and enum
//! coercion.

use iot::input::{CreateJobInput, UpdateThingInput};
use iot::model::{
    AbortAction, AbortConfig, AbortCriteria, AlertTargetType, AttributePayload,
    ComparisonOperator, JobExecutionFailureType, JobStatus, TargetSelection, ViolationEventType,
};
use iot::output::UpdateThingOutput;
use proptest::prelude::*;
use sdk_types::StructuralHash;
use std::str::FromStr;

#[test]
fn abort_criteria_renders_present_fields_in_declaration_order() {
    let criteria = AbortCriteria::builder()
        .failure_type("FAILED")
        .action("CANCEL")
        .threshold_percentage(10.5)
        .build();
    assert_eq!(
        criteria.to_string(),
        "{failureType: FAILED,action: CANCEL,thresholdPercentage: 10.5}"
    );
}

#[test]
fn identically_built_shapes_are_equal_and_hash_equal() {
    let first = AbortCriteria::builder()
        .failure_type("FAILED")
        .action("CANCEL")
        .threshold_percentage(10.5)
        .build();
    let second = AbortCriteria::builder()
        .failure_type(JobExecutionFailureType::Failed)
        .action(AbortAction::Cancel)
        .threshold_percentage(10.5)
        .build();
    assert_eq!(first, second);
    assert_eq!(first.structural_hash(), second.structural_hash());
}

#[test]
fn setting_an_extra_field_breaks_equality() {
    let first = AbortCriteria::builder()
        .failure_type("FAILED")
        .action("CANCEL")
        .threshold_percentage(10.5)
        .build();
    let third = AbortCriteria::builder()
        .failure_type("FAILED")
        .action("CANCEL")
        .threshold_percentage(10.5)
        .min_number_of_executed_things(5)
        .build();
    assert_ne!(first, third);
}

#[test]
fn absent_field_never_equals_zero_value() {
    let unset = CreateJobInput::builder().job_id("j1").build();
    let empty_description = CreateJobInput::builder().job_id("j1").description("").build();
    let empty_targets = CreateJobInput::builder()
        .job_id("j1")
        .set_targets(Some(vec![]))
        .build();
    assert_ne!(unset, empty_description);
    assert_ne!(unset, empty_targets);

    let no_flag = UpdateThingInput::builder().thing_name("t").build();
    let false_flag = UpdateThingInput::builder()
        .thing_name("t")
        .remove_thing_type(false)
        .build();
    assert_ne!(no_flag, false_flag);
}

#[test]
fn shapes_differing_only_in_which_field_is_set_hash_apart() {
    let name_only = UpdateThingInput::builder().thing_name("x").build();
    let type_only = UpdateThingInput::builder().thing_type_name("x").build();
    assert_ne!(name_only, type_only);
    assert_ne!(name_only.structural_hash(), type_only.structural_hash());
}

#[test]
fn set_methods_clear_fields_explicitly() {
    let input = UpdateThingInput::builder()
        .thing_name("thermostat")
        .set_thing_name(None)
        .build();
    assert_eq!(input.thing_name, None);
    assert_eq!(input, UpdateThingInput::builder().build());
}

#[test]
fn list_builder_methods_append_in_call_order() {
    let input = CreateJobInput::builder()
        .targets("arn:aws:iot:us-east-1:123456789012:thing/one")
        .targets("arn:aws:iot:us-east-1:123456789012:thing/two")
        .targets("arn:aws:iot:us-east-1:123456789012:thing/three")
        .build();
    assert_eq!(
        input.targets,
        Some(vec![
            "arn:aws:iot:us-east-1:123456789012:thing/one".to_string(),
            "arn:aws:iot:us-east-1:123456789012:thing/two".to_string(),
            "arn:aws:iot:us-east-1:123456789012:thing/three".to_string(),
        ])
    );
}

#[test]
fn set_list_replaces_appended_items() {
    let input = CreateJobInput::builder()
        .targets("old")
        .set_targets(Some(vec!["new".to_string()]))
        .build();
    assert_eq!(input.targets, Some(vec!["new".to_string()]));
}

#[test]
fn stored_collections_are_not_aliased_to_caller_collections() {
    let mut targets = vec!["thing-one".to_string()];
    let input = CreateJobInput::builder()
        .set_targets(Some(targets.clone()))
        .build();
    targets.push("thing-two".to_string());
    assert_eq!(input.targets, Some(vec!["thing-one".to_string()]));
}

#[test]
fn map_insert_is_strict() {
    let builder = AttributePayload::builder().attributes("color", "red").unwrap();
    let err = builder.clone().attributes("color", "blue").unwrap_err();
    assert_eq!(err.field(), "attributes");
    assert_eq!(err.key(), "color");
    assert_eq!(
        err.to_string(),
        "duplicate key `color` inserted into map field `attributes`"
    );

    // the surviving builder still carries the original entry only
    let payload = builder.build();
    let attributes = payload.attributes.unwrap();
    assert_eq!(attributes.len(), 1);
    assert_eq!(attributes.get("color"), Some(&"red".to_string()));
}

#[test]
fn map_fields_support_explicit_clearing() {
    let payload = AttributePayload::builder()
        .attributes("color", "red")
        .unwrap()
        .clear_attributes()
        .build();
    assert_eq!(payload.attributes, None);
}

#[test]
fn shape_valued_map_insert_is_strict_and_keyed_by_target_type() {
    use iot::input::CreateSecurityProfileInput;
    use iot::model::AlertTarget;

    let builder = CreateSecurityProfileInput::builder()
        .security_profile_name("profile-1")
        .alert_targets(
            "SNS",
            AlertTarget::builder()
                .alert_target_arn("arn:aws:sns:us-east-1:123456789012:alerts")
                .build(),
        )
        .unwrap();
    let err = builder
        .clone()
        .alert_targets("SNS", AlertTarget::builder().build())
        .unwrap_err();
    assert_eq!(err.field(), "alertTargets");
    assert_eq!(err.key(), "SNS");

    let input = builder.build();
    let alert_targets = input.alert_targets.unwrap();
    assert_eq!(alert_targets.len(), 1);
    assert_eq!(
        alert_targets["SNS"].alert_target_arn.as_deref(),
        Some("arn:aws:sns:us-east-1:123456789012:alerts")
    );
}

#[test]
fn empty_output_shape_renders_empty_braces() {
    let output = UpdateThingOutput::builder().build();
    assert_eq!(output.to_string(), "{}");
    assert_eq!(output, UpdateThingOutput::builder().build());
}

#[test]
fn nested_shapes_render_recursively() {
    let config = AbortConfig::builder()
        .criteria_list(
            AbortCriteria::builder()
                .failure_type("REJECTED")
                .threshold_percentage(20.0)
                .build(),
        )
        .build();
    assert_eq!(
        config.to_string(),
        "{criteriaList: [{failureType: REJECTED,thresholdPercentage: 20}]}"
    );
}

#[test]
fn enum_tokens_round_trip_through_strict_coercion() {
    for token in JobExecutionFailureType::values() {
        assert_eq!(JobExecutionFailureType::from_str(token).unwrap().as_str(), *token);
    }
    for token in JobStatus::values() {
        assert_eq!(JobStatus::from_str(token).unwrap().as_str(), *token);
    }
    for token in ComparisonOperator::values() {
        assert_eq!(ComparisonOperator::from_str(token).unwrap().as_str(), *token);
    }
    for token in ViolationEventType::values() {
        assert_eq!(ViolationEventType::from_str(token).unwrap().as_str(), *token);
    }
    for token in TargetSelection::values() {
        assert_eq!(TargetSelection::from_str(token).unwrap().as_str(), *token);
    }
    for token in AbortAction::values() {
        assert_eq!(AbortAction::from_str(token).unwrap().as_str(), *token);
    }
    for token in AlertTargetType::values() {
        assert_eq!(AlertTargetType::from_str(token).unwrap().as_str(), *token);
    }
}

#[test]
fn strict_coercion_rejects_unrecognized_tokens() {
    let err = AbortAction::from_str("PAUSE").unwrap_err();
    assert_eq!(err.enum_name(), "AbortAction");
    assert_eq!(err.value(), "PAUSE");
    assert_eq!(err.to_string(), "unrecognized value `PAUSE` for enum `AbortAction`");
}

#[test]
fn lenient_coercion_preserves_unrecognized_tokens() {
    let status = JobStatus::from("SCHEDULED");
    assert_eq!(status, JobStatus::Unknown("SCHEDULED".to_string()));
    assert_eq!(status.as_str(), "SCHEDULED");
}

fn arb_criteria() -> impl Strategy<Value = AbortCriteria> {
    (
        proptest::option::of(prop_oneof![
            Just(JobExecutionFailureType::Failed),
            Just(JobExecutionFailureType::Rejected),
            Just(JobExecutionFailureType::TimedOut),
            Just(JobExecutionFailureType::All),
        ]),
        proptest::option::of(Just(AbortAction::Cancel)),
        proptest::option::of(0.0..100.0f64),
        proptest::option::of(any::<i32>()),
    )
        .prop_map(|(failure_type, action, threshold, min_executed)| {
            AbortCriteria::builder()
                .set_failure_type(failure_type)
                .set_action(action)
                .set_threshold_percentage(threshold)
                .set_min_number_of_executed_things(min_executed)
                .build()
        })
}

proptest! {
    #[test]
    fn equality_is_reflexive_and_symmetric(a in arb_criteria(), b in arb_criteria()) {
        prop_assert_eq!(&a, &a);
        prop_assert_eq!(a == b, b == a);
    }

    #[test]
    fn equal_shapes_hash_equal(a in arb_criteria()) {
        let rebuilt = a.clone();
        prop_assert_eq!(a.structural_hash(), rebuilt.structural_hash());
    }

    #[test]
    fn rendering_never_mentions_unset_fields(a in arb_criteria()) {
        let rendered = a.to_string();
        if a.min_number_of_executed_things.is_none() {
            prop_assert!(!rendered.contains("minNumberOfExecutedThings"));
        }
        if a.failure_type.is_none() {
            prop_assert!(!rendered.contains("failureType"));
        }
        prop_assert!(!rendered.contains(",}"), "rendered output contains a trailing comma before closing brace");
        prop_assert!(!rendered.starts_with("{,"), "rendered output starts with a leading comma");
    }

    #[test]
    fn unrecognized_tokens_fail_strict_and_survive_lenient(token in "[a-z]{1,12}") {
        prop_assume!(!ViolationEventType::values().contains(&token.as_str()));
        prop_assert!(ViolationEventType::from_str(&token).is_err());
        let lenient = ViolationEventType::from(token.as_str());
        prop_assert_eq!(lenient.as_str(), token.as_str());
    }
}
