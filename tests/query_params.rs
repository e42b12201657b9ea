/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Golden request-body tests for the Query protocol serializers.

use aws_smithy_protocol_test::{assert_ok, validate_body, MediaType};
use aws_types::region::Region;
use rds::input::{
    AddTagsToResourceInput, CreateDbClusterInput, CreateDbInstanceInput,
    DescribeDbInstancesInput, ModifyDbClusterEndpointInput, RemoveTagsFromResourceInput,
    RestoreDbClusterToPointInTimeInput,
};
use rds::model::{ScalingConfiguration, Tag};
use rds::{Config, DateTime};

fn config() -> Config {
    Config::builder().region(Region::new("us-east-1")).build()
}

#[test]
fn describe_db_instances_minimal() {
    let request = DescribeDbInstancesInput::builder()
        .db_instance_identifier("database-1")
        .max_records(50)
        .marker("page-2")
        .build()
        .make_request(&config())
        .expect("request builds");
    assert_ok(validate_body(
        request.body().as_bytes(),
        "Action=DescribeDBInstances\
         &Version=2014-10-31\
         &DBInstanceIdentifier=database-1\
         &MaxRecords=50\
         &Marker=page-2",
        MediaType::from("application/x-www-form-urlencoded"),
    ));
}

#[test]
fn add_tags_numbers_list_members() {
    let request = AddTagsToResourceInput::builder()
        .resource_name("arn:aws:rds:us-east-1:123456789012:db:database-1")
        .tags(Tag::builder().key("env").value("prod").build())
        .tags(Tag::builder().key("team").value("data").build())
        .build()
        .make_request(&config())
        .expect("request builds");
    let body = request.body();
    // Tag list members are numbered from 1 under the `Tag` member name.
    assert!(body.contains("Tags.Tag.1.Key=env"));
    assert!(body.contains("Tags.Tag.1.Value=prod"));
    assert!(body.contains("Tags.Tag.2.Key=team"));
    assert!(body.contains("Tags.Tag.2.Value=data"));
    // The ARN's colons are percent-encoded.
    assert!(body.contains("ResourceName=arn%3Aaws%3Ards"));
}

#[test]
fn remove_tags_uses_default_member_name() {
    let request = RemoveTagsFromResourceInput::builder()
        .resource_name("resource")
        .tag_keys("env")
        .tag_keys("team")
        .build()
        .make_request(&config())
        .expect("request builds");
    let body = request.body();
    assert!(body.contains("TagKeys.member.1=env"));
    assert!(body.contains("TagKeys.member.2=team"));
}

#[test]
fn create_db_instance_omits_unset_fields() {
    let request = CreateDbInstanceInput::builder()
        .db_instance_identifier("database-1")
        .db_instance_class("db.m5.large")
        .engine("postgres")
        .allocated_storage(100)
        .multi_az(true)
        .build()
        .make_request(&config())
        .expect("request builds");
    assert_ok(validate_body(
        request.body().as_bytes(),
        "Action=CreateDBInstance\
         &Version=2014-10-31\
         &DBInstanceIdentifier=database-1\
         &AllocatedStorage=100\
         &DBInstanceClass=db.m5.large\
         &Engine=postgres\
         &MultiAZ=true",
        MediaType::from("application/x-www-form-urlencoded"),
    ));
}

#[test]
fn create_db_cluster_serializes_nested_scaling_configuration() {
    let request = CreateDbClusterInput::builder()
        .db_cluster_identifier("aurora-1")
        .engine("aurora-mysql")
        .engine_mode("serverless")
        .scaling_configuration(
            ScalingConfiguration::builder()
                .min_capacity(2)
                .max_capacity(16)
                .auto_pause(true)
                .seconds_until_auto_pause(300)
                .build(),
        )
        .availability_zones("us-east-1a")
        .availability_zones("us-east-1b")
        .build()
        .make_request(&config())
        .expect("request builds");
    let body = request.body();
    assert!(body.contains("ScalingConfiguration.MinCapacity=2"));
    assert!(body.contains("ScalingConfiguration.MaxCapacity=16"));
    assert!(body.contains("ScalingConfiguration.AutoPause=true"));
    assert!(body.contains("ScalingConfiguration.SecondsUntilAutoPause=300"));
    assert!(body.contains("AvailabilityZones.AvailabilityZone.1=us-east-1a"));
    assert!(body.contains("AvailabilityZones.AvailabilityZone.2=us-east-1b"));
}

#[test]
fn restore_to_point_in_time_renders_rfc3339_timestamp() {
    let request = RestoreDbClusterToPointInTimeInput::builder()
        .db_cluster_identifier("aurora-restored")
        .source_db_cluster_identifier("aurora-1")
        .restore_to_time(DateTime::from_secs(1576540098))
        .build()
        .make_request(&config())
        .expect("request builds");
    let body = request.body();
    // 2019-12-16T23:48:18Z, with `:` percent-encoded.
    assert!(body.contains("RestoreToTime=2019-12-16T23%3A48%3A18Z"));
}

#[test]
fn modify_db_cluster_endpoint_members() {
    let request = ModifyDbClusterEndpointInput::builder()
        .db_cluster_endpoint_identifier("reporting")
        .endpoint_type("READER")
        .static_members("aurora-instance-1")
        .static_members("aurora-instance-2")
        .build()
        .make_request(&config())
        .expect("request builds");
    assert_ok(validate_body(
        request.body().as_bytes(),
        "Action=ModifyDBClusterEndpoint\
         &Version=2014-10-31\
         &DBClusterEndpointIdentifier=reporting\
         &EndpointType=READER\
         &StaticMembers.member.1=aurora-instance-1\
         &StaticMembers.member.2=aurora-instance-2",
        MediaType::from("application/x-www-form-urlencoded"),
    ));
}
