/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation shapes and the response-parsing seam.
//!
//! Each operation is a unit struct implementing [`ParseStrictResponse`]: the
//! transport client that dispatched the request hands back the full HTTP
//! response and receives the typed output or error. Request construction is
//! the input type's job ([`crate::input`]); nothing here performs I/O.

use crate::error::*;
use crate::output::*;
use bytes::Bytes;
use http::Response;

/// Parses a fully loaded HTTP response into an operation's typed result.
///
/// This is the contract between this crate and a transport client: the
/// client reads the response body to completion and delegates
/// interpretation here. Streaming responses are not needed for this service,
/// so the loaded-body form is the only one.
pub trait ParseStrictResponse {
    /// Parsed result, typically `Result<XxxOutput, XxxError>`.
    type Output;

    /// Parses the response.
    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}

macro_rules! operation {
    ($(#[$docs:meta])* $name:ident, $input:ty, $builder:ty, $output:ty, $error:ty, $parse:path) => {
        $(#[$docs])*
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl $name {
            /// Returns a builder for the operation's input.
            pub fn builder() -> $builder {
                <$input>::builder()
            }
        }

        impl ParseStrictResponse for $name {
            type Output = Result<$output, $error>;

            fn parse(&self, response: &Response<Bytes>) -> Self::Output {
                if !response.status().is_success() {
                    return Err(classify_error::<$error>(response));
                }
                $parse(response.body().as_ref()).map_err(<$error>::unhandled)
            }
        }
    };
    ($(#[$docs:meta])* $name:ident, $input:ty, $builder:ty, $output:ty, $error:ty) => {
        $(#[$docs])*
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl $name {
            /// Returns a builder for the operation's input.
            pub fn builder() -> $builder {
                <$input>::builder()
            }
        }

        impl ParseStrictResponse for $name {
            type Output = Result<$output, $error>;

            fn parse(&self, response: &Response<Bytes>) -> Self::Output {
                if !response.status().is_success() {
                    return Err(classify_error::<$error>(response));
                }
                Ok(<$output>::builder().build())
            }
        }
    };
}

/// Shared error-path handling: parse the error envelope and match the code
/// against the operation's modeled faults.
fn classify_error<E>(response: &Response<Bytes>) -> E
where
    E: OperationError,
{
    tracing::debug!(status = %response.status(), "classifying service error response");
    match crate::xml_deser::parse_error_metadata(response.body().as_ref()) {
        Ok(meta) => E::from_error_metadata(meta),
        Err(err) => E::from_unparseable_body(err),
    }
}

/// Internal hook that lets [`classify_error`] stay generic over the
/// macro-generated error types.
trait OperationError {
    fn from_error_metadata(meta: aws_smithy_types::error::metadata::ErrorMetadata) -> Self;
    fn from_unparseable_body(err: aws_smithy_xml::decode::XmlDecodeError) -> Self;
}

macro_rules! impl_operation_error {
    ($($error:ty),* $(,)?) => {
        $(
            impl OperationError for $error {
                fn from_error_metadata(
                    meta: aws_smithy_types::error::metadata::ErrorMetadata,
                ) -> Self {
                    Self::from_metadata(meta)
                }

                fn from_unparseable_body(
                    err: aws_smithy_xml::decode::XmlDecodeError,
                ) -> Self {
                    Self::unhandled(err)
                }
            }
        )*
    };
}

impl_operation_error!(
    AddTagsToResourceError,
    RemoveTagsFromResourceError,
    ListTagsForResourceError,
    CreateDbInstanceError,
    DescribeDbInstancesError,
    ModifyDbInstanceError,
    DeleteDbInstanceError,
    RebootDbInstanceError,
    StartDbInstanceError,
    StopDbInstanceError,
    RestoreDbInstanceFromDbSnapshotError,
    RestoreDbInstanceFromS3Error,
    CreateDbClusterError,
    DescribeDbClustersError,
    ModifyDbClusterError,
    DeleteDbClusterError,
    RestoreDbClusterFromSnapshotError,
    RestoreDbClusterFromS3Error,
    RestoreDbClusterToPointInTimeError,
    CreateDbSnapshotError,
    DeleteDbSnapshotError,
    DescribeDbSnapshotsError,
    CreateDbClusterSnapshotError,
    CopyDbClusterSnapshotError,
    DeleteDbClusterSnapshotError,
    DescribeDbClusterSnapshotsError,
    CreateDbClusterEndpointError,
    DescribeDbClusterEndpointsError,
    ModifyDbClusterEndpointError,
    DeleteDbClusterEndpointError,
    DescribeOrderableDbInstanceOptionsError,
    DescribeValidDbInstanceModificationsError,
    DescribeDbSecurityGroupsError,
    DescribeDbProxyTargetsError,
    DescribeCustomAvailabilityZonesError,
);

operation!(
    /// The `AddTagsToResource` operation.
    AddTagsToResource,
    crate::input::AddTagsToResourceInput,
    crate::input::AddTagsToResourceInputBuilder,
    AddTagsToResourceOutput,
    AddTagsToResourceError
);
operation!(
    /// The `RemoveTagsFromResource` operation.
    RemoveTagsFromResource,
    crate::input::RemoveTagsFromResourceInput,
    crate::input::RemoveTagsFromResourceInputBuilder,
    RemoveTagsFromResourceOutput,
    RemoveTagsFromResourceError
);
operation!(
    /// The `ListTagsForResource` operation.
    ListTagsForResource,
    crate::input::ListTagsForResourceInput,
    crate::input::ListTagsForResourceInputBuilder,
    ListTagsForResourceOutput,
    ListTagsForResourceError,
    crate::xml_deser::parse_list_tags_for_resource
);
operation!(
    /// The `CreateDBInstance` operation.
    CreateDbInstance,
    crate::input::CreateDbInstanceInput,
    crate::input::CreateDbInstanceInputBuilder,
    CreateDbInstanceOutput,
    CreateDbInstanceError,
    crate::xml_deser::parse_create_db_instance
);
operation!(
    /// The `DescribeDBInstances` operation.
    DescribeDbInstances,
    crate::input::DescribeDbInstancesInput,
    crate::input::DescribeDbInstancesInputBuilder,
    DescribeDbInstancesOutput,
    DescribeDbInstancesError,
    crate::xml_deser::parse_describe_db_instances
);
operation!(
    /// The `ModifyDBInstance` operation.
    ModifyDbInstance,
    crate::input::ModifyDbInstanceInput,
    crate::input::ModifyDbInstanceInputBuilder,
    ModifyDbInstanceOutput,
    ModifyDbInstanceError,
    crate::xml_deser::parse_modify_db_instance
);
operation!(
    /// The `DeleteDBInstance` operation.
    DeleteDbInstance,
    crate::input::DeleteDbInstanceInput,
    crate::input::DeleteDbInstanceInputBuilder,
    DeleteDbInstanceOutput,
    DeleteDbInstanceError,
    crate::xml_deser::parse_delete_db_instance
);
operation!(
    /// The `RebootDBInstance` operation.
    RebootDbInstance,
    crate::input::RebootDbInstanceInput,
    crate::input::RebootDbInstanceInputBuilder,
    RebootDbInstanceOutput,
    RebootDbInstanceError,
    crate::xml_deser::parse_reboot_db_instance
);
operation!(
    /// The `StartDBInstance` operation.
    StartDbInstance,
    crate::input::StartDbInstanceInput,
    crate::input::StartDbInstanceInputBuilder,
    StartDbInstanceOutput,
    StartDbInstanceError,
    crate::xml_deser::parse_start_db_instance
);
operation!(
    /// The `StopDBInstance` operation.
    StopDbInstance,
    crate::input::StopDbInstanceInput,
    crate::input::StopDbInstanceInputBuilder,
    StopDbInstanceOutput,
    StopDbInstanceError,
    crate::xml_deser::parse_stop_db_instance
);
operation!(
    /// The `RestoreDBInstanceFromDBSnapshot` operation.
    RestoreDbInstanceFromDbSnapshot,
    crate::input::RestoreDbInstanceFromDbSnapshotInput,
    crate::input::RestoreDbInstanceFromDbSnapshotInputBuilder,
    RestoreDbInstanceFromDbSnapshotOutput,
    RestoreDbInstanceFromDbSnapshotError,
    crate::xml_deser::parse_restore_db_instance_from_db_snapshot
);
operation!(
    /// The `RestoreDBInstanceFromS3` operation.
    RestoreDbInstanceFromS3,
    crate::input::RestoreDbInstanceFromS3Input,
    crate::input::RestoreDbInstanceFromS3InputBuilder,
    RestoreDbInstanceFromS3Output,
    RestoreDbInstanceFromS3Error,
    crate::xml_deser::parse_restore_db_instance_from_s3
);
operation!(
    /// The `CreateDBCluster` operation.
    CreateDbCluster,
    crate::input::CreateDbClusterInput,
    crate::input::CreateDbClusterInputBuilder,
    CreateDbClusterOutput,
    CreateDbClusterError,
    crate::xml_deser::parse_create_db_cluster
);
operation!(
    /// The `DescribeDBClusters` operation.
    DescribeDbClusters,
    crate::input::DescribeDbClustersInput,
    crate::input::DescribeDbClustersInputBuilder,
    DescribeDbClustersOutput,
    DescribeDbClustersError,
    crate::xml_deser::parse_describe_db_clusters
);
operation!(
    /// The `ModifyDBCluster` operation.
    ModifyDbCluster,
    crate::input::ModifyDbClusterInput,
    crate::input::ModifyDbClusterInputBuilder,
    ModifyDbClusterOutput,
    ModifyDbClusterError,
    crate::xml_deser::parse_modify_db_cluster
);
operation!(
    /// The `DeleteDBCluster` operation.
    DeleteDbCluster,
    crate::input::DeleteDbClusterInput,
    crate::input::DeleteDbClusterInputBuilder,
    DeleteDbClusterOutput,
    DeleteDbClusterError,
    crate::xml_deser::parse_delete_db_cluster
);
operation!(
    /// The `RestoreDBClusterFromSnapshot` operation.
    RestoreDbClusterFromSnapshot,
    crate::input::RestoreDbClusterFromSnapshotInput,
    crate::input::RestoreDbClusterFromSnapshotInputBuilder,
    RestoreDbClusterFromSnapshotOutput,
    RestoreDbClusterFromSnapshotError,
    crate::xml_deser::parse_restore_db_cluster_from_snapshot
);
operation!(
    /// The `RestoreDBClusterFromS3` operation.
    RestoreDbClusterFromS3,
    crate::input::RestoreDbClusterFromS3Input,
    crate::input::RestoreDbClusterFromS3InputBuilder,
    RestoreDbClusterFromS3Output,
    RestoreDbClusterFromS3Error,
    crate::xml_deser::parse_restore_db_cluster_from_s3
);
operation!(
    /// The `RestoreDBClusterToPointInTime` operation.
    RestoreDbClusterToPointInTime,
    crate::input::RestoreDbClusterToPointInTimeInput,
    crate::input::RestoreDbClusterToPointInTimeInputBuilder,
    RestoreDbClusterToPointInTimeOutput,
    RestoreDbClusterToPointInTimeError,
    crate::xml_deser::parse_restore_db_cluster_to_point_in_time
);
operation!(
    /// The `CreateDBSnapshot` operation.
    CreateDbSnapshot,
    crate::input::CreateDbSnapshotInput,
    crate::input::CreateDbSnapshotInputBuilder,
    CreateDbSnapshotOutput,
    CreateDbSnapshotError,
    crate::xml_deser::parse_create_db_snapshot
);
operation!(
    /// The `DeleteDBSnapshot` operation.
    DeleteDbSnapshot,
    crate::input::DeleteDbSnapshotInput,
    crate::input::DeleteDbSnapshotInputBuilder,
    DeleteDbSnapshotOutput,
    DeleteDbSnapshotError,
    crate::xml_deser::parse_delete_db_snapshot
);
operation!(
    /// The `DescribeDBSnapshots` operation.
    DescribeDbSnapshots,
    crate::input::DescribeDbSnapshotsInput,
    crate::input::DescribeDbSnapshotsInputBuilder,
    DescribeDbSnapshotsOutput,
    DescribeDbSnapshotsError,
    crate::xml_deser::parse_describe_db_snapshots
);
operation!(
    /// The `CreateDBClusterSnapshot` operation.
    CreateDbClusterSnapshot,
    crate::input::CreateDbClusterSnapshotInput,
    crate::input::CreateDbClusterSnapshotInputBuilder,
    CreateDbClusterSnapshotOutput,
    CreateDbClusterSnapshotError,
    crate::xml_deser::parse_create_db_cluster_snapshot
);
operation!(
    /// The `CopyDBClusterSnapshot` operation.
    CopyDbClusterSnapshot,
    crate::input::CopyDbClusterSnapshotInput,
    crate::input::CopyDbClusterSnapshotInputBuilder,
    CopyDbClusterSnapshotOutput,
    CopyDbClusterSnapshotError,
    crate::xml_deser::parse_copy_db_cluster_snapshot
);
operation!(
    /// The `DeleteDBClusterSnapshot` operation.
    DeleteDbClusterSnapshot,
    crate::input::DeleteDbClusterSnapshotInput,
    crate::input::DeleteDbClusterSnapshotInputBuilder,
    DeleteDbClusterSnapshotOutput,
    DeleteDbClusterSnapshotError,
    crate::xml_deser::parse_delete_db_cluster_snapshot
);
operation!(
    /// The `DescribeDBClusterSnapshots` operation.
    DescribeDbClusterSnapshots,
    crate::input::DescribeDbClusterSnapshotsInput,
    crate::input::DescribeDbClusterSnapshotsInputBuilder,
    DescribeDbClusterSnapshotsOutput,
    DescribeDbClusterSnapshotsError,
    crate::xml_deser::parse_describe_db_cluster_snapshots
);
operation!(
    /// The `CreateDBClusterEndpoint` operation.
    CreateDbClusterEndpoint,
    crate::input::CreateDbClusterEndpointInput,
    crate::input::CreateDbClusterEndpointInputBuilder,
    CreateDbClusterEndpointOutput,
    CreateDbClusterEndpointError,
    crate::xml_deser::parse_create_db_cluster_endpoint
);
operation!(
    /// The `DescribeDBClusterEndpoints` operation.
    DescribeDbClusterEndpoints,
    crate::input::DescribeDbClusterEndpointsInput,
    crate::input::DescribeDbClusterEndpointsInputBuilder,
    DescribeDbClusterEndpointsOutput,
    DescribeDbClusterEndpointsError,
    crate::xml_deser::parse_describe_db_cluster_endpoints
);
operation!(
    /// The `ModifyDBClusterEndpoint` operation.
    ModifyDbClusterEndpoint,
    crate::input::ModifyDbClusterEndpointInput,
    crate::input::ModifyDbClusterEndpointInputBuilder,
    ModifyDbClusterEndpointOutput,
    ModifyDbClusterEndpointError,
    crate::xml_deser::parse_modify_db_cluster_endpoint
);
operation!(
    /// The `DeleteDBClusterEndpoint` operation.
    DeleteDbClusterEndpoint,
    crate::input::DeleteDbClusterEndpointInput,
    crate::input::DeleteDbClusterEndpointInputBuilder,
    DeleteDbClusterEndpointOutput,
    DeleteDbClusterEndpointError,
    crate::xml_deser::parse_delete_db_cluster_endpoint
);
operation!(
    /// The `DescribeOrderableDBInstanceOptions` operation.
    DescribeOrderableDbInstanceOptions,
    crate::input::DescribeOrderableDbInstanceOptionsInput,
    crate::input::DescribeOrderableDbInstanceOptionsInputBuilder,
    DescribeOrderableDbInstanceOptionsOutput,
    DescribeOrderableDbInstanceOptionsError,
    crate::xml_deser::parse_describe_orderable_db_instance_options
);
operation!(
    /// The `DescribeValidDBInstanceModifications` operation.
    DescribeValidDbInstanceModifications,
    crate::input::DescribeValidDbInstanceModificationsInput,
    crate::input::DescribeValidDbInstanceModificationsInputBuilder,
    DescribeValidDbInstanceModificationsOutput,
    DescribeValidDbInstanceModificationsError,
    crate::xml_deser::parse_describe_valid_db_instance_modifications
);
operation!(
    /// The `DescribeDBSecurityGroups` operation.
    DescribeDbSecurityGroups,
    crate::input::DescribeDbSecurityGroupsInput,
    crate::input::DescribeDbSecurityGroupsInputBuilder,
    DescribeDbSecurityGroupsOutput,
    DescribeDbSecurityGroupsError,
    crate::xml_deser::parse_describe_db_security_groups
);
operation!(
    /// The `DescribeDBProxyTargets` operation.
    DescribeDbProxyTargets,
    crate::input::DescribeDbProxyTargetsInput,
    crate::input::DescribeDbProxyTargetsInputBuilder,
    DescribeDbProxyTargetsOutput,
    DescribeDbProxyTargetsError,
    crate::xml_deser::parse_describe_db_proxy_targets
);
operation!(
    /// The `DescribeCustomAvailabilityZones` operation.
    DescribeCustomAvailabilityZones,
    crate::input::DescribeCustomAvailabilityZonesInput,
    crate::input::DescribeCustomAvailabilityZonesInputBuilder,
    DescribeCustomAvailabilityZonesOutput,
    DescribeCustomAvailabilityZonesError,
    crate::xml_deser::parse_describe_custom_availability_zones
);

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::DescribeDbInstancesErrorKind;

    fn response(status: u16, body: &str) -> Response<Bytes> {
        Response::builder()
            .status(status)
            .body(Bytes::copy_from_slice(body.as_bytes()))
            .expect("valid response")
    }

    #[test]
    fn empty_output_operations_ignore_the_body() {
        let parsed = AddTagsToResource.parse(&response(
            200,
            "<AddTagsToResourceResponse><ResponseMetadata/></AddTagsToResourceResponse>",
        ));
        assert!(parsed.is_ok());
    }

    #[test]
    fn error_status_is_classified_against_modeled_faults() {
        let body = "<ErrorResponse>\
            <Error><Type>Sender</Type><Code>DBInstanceNotFound</Code>\
            <Message>database-1 not found</Message></Error>\
            <RequestId>52a47394-06c6-11e8-a43b-c35b7b4a5a4e</RequestId>\
            </ErrorResponse>";
        let err = DescribeDbInstances
            .parse(&response(404, body))
            .expect_err("error response");
        assert!(matches!(
            err.kind,
            DescribeDbInstancesErrorKind::DbInstanceNotFoundFault(_)
        ));
        assert_eq!(
            err.meta().extra("request_id"),
            Some("52a47394-06c6-11e8-a43b-c35b7b4a5a4e")
        );
    }

    #[test]
    fn garbage_error_body_becomes_unhandled() {
        let err = DescribeDbInstances
            .parse(&response(500, "not xml at all"))
            .expect_err("error response");
        assert!(matches!(
            err.kind,
            DescribeDbInstancesErrorKind::Unhandled(_)
        ));
    }
}
