/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Contract tests for the data types: builder round-trips, structural
//! equality, list semantics, and closed-enum parsing.

use pretty_assertions::assert_eq;
use rds::input::CreateDbInstanceInput;
use rds::model::{
    DbInstance, Endpoint, ProcessorFeature, Range, Tag, TargetHealthReason, TargetState,
    TargetType,
};

#[test]
fn builder_set_then_read_round_trips() {
    let instance = DbInstance::builder()
        .db_instance_identifier("database-1")
        .engine("mysql")
        .allocated_storage(200)
        .multi_az(false)
        .build();
    assert_eq!(instance.db_instance_identifier.as_deref(), Some("database-1"));
    assert_eq!(instance.engine.as_deref(), Some("mysql"));
    assert_eq!(instance.allocated_storage, Some(200));
    assert_eq!(instance.multi_az, Some(false));
    assert_eq!(instance.engine_version, None);
}

#[test]
fn fluent_and_set_setters_build_equal_values() {
    let fluent = CreateDbInstanceInput::builder()
        .db_instance_identifier("database-1")
        .engine("postgres")
        .port(5432)
        .build();
    let explicit = CreateDbInstanceInput::builder()
        .set_db_instance_identifier(Some("database-1".to_string()))
        .set_engine(Some("postgres".to_string()))
        .set_port(Some(5432))
        .build();
    assert_eq!(fluent, explicit);
}

#[test]
fn equality_is_structural_and_sensitive_to_every_field() {
    let base = Endpoint::builder()
        .address("db.example.com")
        .port(5432)
        .hosted_zone_id("Z2R2ITUGPM61AM")
        .build();
    assert_eq!(base, base.clone());

    let different_port = Endpoint::builder()
        .address("db.example.com")
        .port(5433)
        .hosted_zone_id("Z2R2ITUGPM61AM")
        .build();
    assert_ne!(base, different_port);

    let missing_zone = Endpoint::builder()
        .address("db.example.com")
        .port(5432)
        .build();
    assert_ne!(base, missing_zone);
}

#[test]
fn unset_lists_are_none_not_empty() {
    let no_features = DbInstance::builder().build();
    assert_eq!(no_features.processor_features, None);

    let with_features = DbInstance::builder()
        .processor_features(
            ProcessorFeature::builder()
                .name("coreCount")
                .value("4")
                .build(),
        )
        .processor_features(
            ProcessorFeature::builder()
                .name("threadsPerCore")
                .value("2")
                .build(),
        )
        .build();
    let features = with_features.processor_features.as_deref().unwrap();
    assert_eq!(features.len(), 2);
    assert_eq!(features[0].name.as_deref(), Some("coreCount"));
    assert_eq!(features[1].name.as_deref(), Some("threadsPerCore"));

    let explicit_empty = DbInstance::builder()
        .set_processor_features(Some(Vec::new()))
        .build();
    assert_eq!(explicit_empty.processor_features.as_deref(), Some(&[][..]));
    assert_ne!(no_features, explicit_empty);
}

#[test]
fn range_example_reads_back_exact_values() {
    let range = Range::builder().from(5000).to(10000).step(1000).build();
    assert_eq!(range.from, Some(5000));
    assert_eq!(range.to, Some(10000));
    assert_eq!(range.step, Some(1000));
    let rendered = format!("{:?}", range);
    assert!(rendered.contains("from: Some(5000)"));
    assert!(rendered.contains("to: Some(10000)"));
    assert!(rendered.contains("step: Some(1000)"));
}

#[test]
fn closed_enums_parse_known_values_and_reject_the_rest() {
    for value in TargetState::values() {
        assert_eq!(value.parse::<TargetState>().unwrap().as_str(), *value);
    }
    for value in TargetHealthReason::values() {
        assert_eq!(value.parse::<TargetHealthReason>().unwrap().as_str(), *value);
    }
    for value in TargetType::values() {
        assert_eq!(value.parse::<TargetType>().unwrap().as_str(), *value);
    }

    let err = "available".parse::<TargetState>().unwrap_err();
    assert_eq!(err.shape(), "TargetState");
    assert_eq!(err.value(), "available");
    assert!("".parse::<TargetType>().is_err());
}

#[test]
fn tags_compare_and_clone_cleanly() {
    let a = Tag::builder().key("env").value("prod").build();
    let b = Tag::builder().key("env").value("prod").build();
    let c = Tag::builder().key("env").value("staging").build();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.clone(), a);
}
