/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Response-parsing tests against recorded-style XML fixtures.

use bytes::Bytes;
use pretty_assertions::assert_eq;
use rds::error::{DeleteDbClusterErrorKind, ListTagsForResourceErrorKind};
use rds::model::TargetState;
use rds::operation::{
    DeleteDbCluster, DescribeDbInstances, DescribeDbProxyTargets,
    DescribeValidDbInstanceModifications, ListTagsForResource, ModifyDbClusterEndpoint,
};
use rds::operation::ParseStrictResponse;
use rds::DateTime;

fn response(status: u16, body: &str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(status)
        .body(Bytes::copy_from_slice(body.as_bytes()))
        .expect("valid response")
}

#[test]
fn describe_db_instances_parses_nested_structures() {
    let body = r#"<DescribeDBInstancesResponse xmlns="http://rds.amazonaws.com/doc/2014-10-31/">
  <DescribeDBInstancesResult>
    <DBInstances>
      <DBInstance>
        <DBInstanceIdentifier>database-1</DBInstanceIdentifier>
        <DBInstanceClass>db.m5.large</DBInstanceClass>
        <Engine>postgres</Engine>
        <DBInstanceStatus>available</DBInstanceStatus>
        <MasterUsername>postgres</MasterUsername>
        <Endpoint>
          <Address>database-1.abc123.us-east-1.rds.amazonaws.com</Address>
          <Port>5432</Port>
          <HostedZoneId>Z2R2ITUGPM61AM</HostedZoneId>
        </Endpoint>
        <AllocatedStorage>100</AllocatedStorage>
        <InstanceCreateTime>2019-12-16T23:48:18Z</InstanceCreateTime>
        <BackupRetentionPeriod>7</BackupRetentionPeriod>
        <VpcSecurityGroups>
          <VpcSecurityGroupMembership>
            <VpcSecurityGroupId>sg-0123456789abcdef0</VpcSecurityGroupId>
            <Status>active</Status>
          </VpcSecurityGroupMembership>
        </VpcSecurityGroups>
        <DBSubnetGroup>
          <DBSubnetGroupName>default-vpc</DBSubnetGroupName>
          <VpcId>vpc-0abc</VpcId>
          <SubnetGroupStatus>Complete</SubnetGroupStatus>
          <Subnets>
            <Subnet>
              <SubnetIdentifier>subnet-0a</SubnetIdentifier>
              <SubnetAvailabilityZone><Name>us-east-1a</Name></SubnetAvailabilityZone>
              <SubnetStatus>Active</SubnetStatus>
            </Subnet>
            <Subnet>
              <SubnetIdentifier>subnet-0b</SubnetIdentifier>
              <SubnetAvailabilityZone><Name>us-east-1b</Name></SubnetAvailabilityZone>
              <SubnetStatus>Active</SubnetStatus>
            </Subnet>
          </Subnets>
        </DBSubnetGroup>
        <MultiAZ>true</MultiAZ>
        <StorageEncrypted>true</StorageEncrypted>
        <EnabledCloudwatchLogsExports>
          <member>postgresql</member>
          <member>upgrade</member>
        </EnabledCloudwatchLogsExports>
        <DeletionProtection>false</DeletionProtection>
      </DBInstance>
    </DBInstances>
    <Marker>next-page</Marker>
  </DescribeDBInstancesResult>
  <ResponseMetadata>
    <RequestId>523e3218-afc7-11c3-90f5-f90431260ab4</RequestId>
  </ResponseMetadata>
</DescribeDBInstancesResponse>"#;

    let output = DescribeDbInstances
        .parse(&response(200, body))
        .expect("parses");
    assert_eq!(output.marker.as_deref(), Some("next-page"));
    let instances = output.db_instances.as_deref().expect("instances");
    assert_eq!(instances.len(), 1);
    let instance = &instances[0];
    assert_eq!(instance.db_instance_identifier.as_deref(), Some("database-1"));
    assert_eq!(
        instance.instance_create_time,
        Some(DateTime::from_secs(1576540098))
    );
    let endpoint = instance.endpoint.as_ref().expect("endpoint");
    assert_eq!(endpoint.port, Some(5432));
    let subnet_group = instance.db_subnet_group.as_ref().expect("subnet group");
    let subnets = subnet_group.subnets.as_deref().expect("subnets");
    assert_eq!(subnets.len(), 2);
    assert_eq!(
        subnets[1]
            .subnet_availability_zone
            .as_ref()
            .and_then(|az| az.name.as_deref()),
        Some("us-east-1b")
    );
    assert_eq!(
        instance.enabled_cloudwatch_logs_exports.as_deref(),
        Some(&["postgresql".to_string(), "upgrade".to_string()][..])
    );
    assert_eq!(instance.multi_az, Some(true));
    assert_eq!(instance.deletion_protection, Some(false));
}

#[test]
fn list_tags_parses_tag_list() {
    let body = r#"<ListTagsForResourceResponse>
  <ListTagsForResourceResult>
    <TagList>
      <Tag><Key>env</Key><Value>prod</Value></Tag>
      <Tag><Key>team</Key><Value>data</Value></Tag>
    </TagList>
  </ListTagsForResourceResult>
</ListTagsForResourceResponse>"#;
    let output = ListTagsForResource
        .parse(&response(200, body))
        .expect("parses");
    let tags = output.tag_list.as_deref().expect("tags");
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].key.as_deref(), Some("env"));
    assert_eq!(tags[1].value.as_deref(), Some("data"));
}

#[test]
fn valid_modifications_parse_ranges() {
    let body = r#"<DescribeValidDBInstanceModificationsResponse>
  <DescribeValidDBInstanceModificationsResult>
    <ValidDBInstanceModificationsMessage>
      <Storage>
        <ValidStorageOptions>
          <StorageType>io1</StorageType>
          <StorageSize>
            <Range><From>100</From><To>6144</To></Range>
          </StorageSize>
          <ProvisionedIops>
            <Range><From>5000</From><To>10000</To><Step>1000</Step></Range>
          </ProvisionedIops>
          <IopsToStorageRatio>
            <DoubleRange><From>0.5</From><To>50</To></DoubleRange>
          </IopsToStorageRatio>
          <SupportsStorageAutoscaling>true</SupportsStorageAutoscaling>
        </ValidStorageOptions>
      </Storage>
    </ValidDBInstanceModificationsMessage>
  </DescribeValidDBInstanceModificationsResult>
</DescribeValidDBInstanceModificationsResponse>"#;
    let output = DescribeValidDbInstanceModifications
        .parse(&response(200, body))
        .expect("parses");
    let message = output
        .valid_db_instance_modifications_message
        .expect("message");
    let storage = message.storage.as_deref().expect("storage");
    let iops = storage[0].provisioned_iops.as_deref().expect("iops");
    assert_eq!(iops[0].from, Some(5000));
    assert_eq!(iops[0].to, Some(10000));
    assert_eq!(iops[0].step, Some(1000));
    let ratio = storage[0]
        .iops_to_storage_ratio
        .as_deref()
        .expect("ratios");
    assert_eq!(ratio[0].from, Some(0.5));
}

#[test]
fn proxy_targets_parse_closed_enums() {
    let body = r#"<DescribeDBProxyTargetsResponse>
  <DescribeDBProxyTargetsResult>
    <Targets>
      <member>
        <TargetArn>arn:aws:rds:us-east-1:123456789012:db:database-1</TargetArn>
        <Endpoint>database-1.abc123.us-east-1.rds.amazonaws.com</Endpoint>
        <RdsResourceId>db-ABCDEFGH</RdsResourceId>
        <Port>5432</Port>
        <Type>RDS_INSTANCE</Type>
        <TargetHealth>
          <State>AVAILABLE</State>
        </TargetHealth>
      </member>
    </Targets>
  </DescribeDBProxyTargetsResult>
</DescribeDBProxyTargetsResponse>"#;
    let output = DescribeDbProxyTargets
        .parse(&response(200, body))
        .expect("parses");
    let targets = output.targets.as_deref().expect("targets");
    let health = targets[0].target_health.as_ref().expect("health");
    assert_eq!(health.state, Some(TargetState::Available));
}

#[test]
fn proxy_target_with_unrecognized_state_fails_to_parse() {
    let body = r#"<DescribeDBProxyTargetsResponse>
  <DescribeDBProxyTargetsResult>
    <Targets>
      <member>
        <TargetHealth><State>SORT_OF_OKAY</State></TargetHealth>
      </member>
    </Targets>
  </DescribeDBProxyTargetsResult>
</DescribeDBProxyTargetsResponse>"#;
    let err = DescribeDbProxyTargets
        .parse(&response(200, body))
        .expect_err("unknown enum value is rejected");
    assert!(err.to_string().contains("SORT_OF_OKAY"));
}

#[test]
fn modify_db_cluster_endpoint_reads_flattened_result() {
    let body = r#"<ModifyDBClusterEndpointResponse>
  <ModifyDBClusterEndpointResult>
    <DBClusterEndpointIdentifier>reporting</DBClusterEndpointIdentifier>
    <DBClusterIdentifier>aurora-1</DBClusterIdentifier>
    <Endpoint>reporting.cluster-custom-abc123.us-east-1.rds.amazonaws.com</Endpoint>
    <Status>modifying</Status>
    <EndpointType>CUSTOM</EndpointType>
    <CustomEndpointType>READER</CustomEndpointType>
    <StaticMembers>
      <member>aurora-instance-1</member>
    </StaticMembers>
  </ModifyDBClusterEndpointResult>
</ModifyDBClusterEndpointResponse>"#;
    let output = ModifyDbClusterEndpoint
        .parse(&response(200, body))
        .expect("parses");
    assert_eq!(output.db_cluster_endpoint_identifier.as_deref(), Some("reporting"));
    assert_eq!(output.custom_endpoint_type.as_deref(), Some("READER"));
    assert_eq!(
        output.static_members.as_deref(),
        Some(&["aurora-instance-1".to_string()][..])
    );
}

#[test]
fn cluster_error_codes_map_to_faults() {
    let body = r#"<ErrorResponse>
  <Error>
    <Type>Sender</Type>
    <Code>DBClusterNotFoundFault</Code>
    <Message>DBCluster aurora-9 not found.</Message>
  </Error>
  <RequestId>87ab3350-06c6-11e8-a43b-c35b7b4a5a4e</RequestId>
</ErrorResponse>"#;
    let err = DeleteDbCluster
        .parse(&response(404, body))
        .expect_err("error response");
    match &err.kind {
        DeleteDbClusterErrorKind::DbClusterNotFoundFault(fault) => {
            assert_eq!(
                fault.message.as_deref(),
                Some("DBCluster aurora-9 not found.")
            );
        }
        other => panic!("expected DBClusterNotFoundFault, got {:?}", other),
    }
}

#[test]
fn unmodeled_error_code_is_preserved_in_metadata() {
    let body = r#"<ErrorResponse>
  <Error><Code>ThrottlingException</Code><Message>Rate exceeded</Message></Error>
</ErrorResponse>"#;
    let err = ListTagsForResource
        .parse(&response(400, body))
        .expect_err("error response");
    assert!(matches!(
        err.kind,
        ListTagsForResourceErrorKind::Unhandled(_)
    ));
    assert_eq!(err.code(), Some("ThrottlingException"));
    assert_eq!(err.message(), Some("Rate exceeded"));
}
