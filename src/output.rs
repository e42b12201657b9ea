/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation outputs.
//!
//! Outputs are built by the XML deserializers in `xml_deser`; the builders
//! are public so tests and callers stubbing a transport can construct
//! expected values.

use crate::model::{
    CustomAvailabilityZone, DbCluster, DbClusterEndpoint, DbClusterSnapshot, DbInstance,
    DbProxyTarget, DbSecurityGroup, DbSnapshot, OrderableDbInstanceOption, Tag,
    ValidDbInstanceModificationsMessage,
};

/// Output of `AddTagsToResource`. The operation returns no data.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct AddTagsToResourceOutput {}

impl AddTagsToResourceOutput {
    /// Returns a builder for `AddTagsToResourceOutput`.
    pub fn builder() -> AddTagsToResourceOutputBuilder {
        AddTagsToResourceOutputBuilder::default()
    }
}

/// Builder for [`AddTagsToResourceOutput`].
#[derive(Clone, Debug, Default)]
pub struct AddTagsToResourceOutputBuilder {}

impl AddTagsToResourceOutputBuilder {
    /// Builds the [`AddTagsToResourceOutput`].
    pub fn build(self) -> AddTagsToResourceOutput {
        AddTagsToResourceOutput {}
    }
}

/// Output of `RemoveTagsFromResource`. The operation returns no data.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RemoveTagsFromResourceOutput {}

impl RemoveTagsFromResourceOutput {
    /// Returns a builder for `RemoveTagsFromResourceOutput`.
    pub fn builder() -> RemoveTagsFromResourceOutputBuilder {
        RemoveTagsFromResourceOutputBuilder::default()
    }
}

/// Builder for [`RemoveTagsFromResourceOutput`].
#[derive(Clone, Debug, Default)]
pub struct RemoveTagsFromResourceOutputBuilder {}

impl RemoveTagsFromResourceOutputBuilder {
    /// Builds the [`RemoveTagsFromResourceOutput`].
    pub fn build(self) -> RemoveTagsFromResourceOutput {
        RemoveTagsFromResourceOutput {}
    }
}

/// Output of `ListTagsForResource`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListTagsForResourceOutput {
    /// Tags attached to the resource.
    pub tag_list: Option<Vec<Tag>>,
}

impl ListTagsForResourceOutput {
    /// Returns a builder for `ListTagsForResourceOutput`.
    pub fn builder() -> ListTagsForResourceOutputBuilder {
        ListTagsForResourceOutputBuilder::default()
    }
}

/// Builder for [`ListTagsForResourceOutput`].
#[derive(Clone, Debug, Default)]
pub struct ListTagsForResourceOutputBuilder {
    tag_list: Option<Vec<Tag>>,
}

impl ListTagsForResourceOutputBuilder {
    /// Appends a tag.
    pub fn tag_list(mut self, input: Tag) -> Self {
        self.tag_list.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the tags.
    pub fn set_tag_list(mut self, input: Option<Vec<Tag>>) -> Self {
        self.tag_list = input;
        self
    }

    /// Builds the [`ListTagsForResourceOutput`].
    pub fn build(self) -> ListTagsForResourceOutput {
        ListTagsForResourceOutput {
            tag_list: self.tag_list,
        }
    }
}

macro_rules! db_instance_output {
    ($(#[$docs:meta])* $name:ident, $builder:ident) => {
        $(#[$docs])*
        #[derive(Clone, Debug, Default, PartialEq)]
        #[non_exhaustive]
        pub struct $name {
            /// The DB instance the operation acted on.
            pub db_instance: Option<DbInstance>,
        }

        impl $name {
            /// Returns a builder for the output.
            pub fn builder() -> $builder {
                $builder::default()
            }
        }

        /// Builder for the output.
        #[derive(Clone, Debug, Default)]
        pub struct $builder {
            db_instance: Option<DbInstance>,
        }

        impl $builder {
            /// Sets the DB instance.
            pub fn db_instance(mut self, input: DbInstance) -> Self {
                self.db_instance = Some(input);
                self
            }

            /// Sets or clears the DB instance.
            pub fn set_db_instance(mut self, input: Option<DbInstance>) -> Self {
                self.db_instance = input;
                self
            }

            /// Builds the output.
            pub fn build(self) -> $name {
                $name {
                    db_instance: self.db_instance,
                }
            }
        }
    };
}

db_instance_output!(
    /// Output of `CreateDBInstance`.
    CreateDbInstanceOutput,
    CreateDbInstanceOutputBuilder
);
db_instance_output!(
    /// Output of `ModifyDBInstance`.
    ModifyDbInstanceOutput,
    ModifyDbInstanceOutputBuilder
);
db_instance_output!(
    /// Output of `DeleteDBInstance`.
    DeleteDbInstanceOutput,
    DeleteDbInstanceOutputBuilder
);
db_instance_output!(
    /// Output of `RebootDBInstance`.
    RebootDbInstanceOutput,
    RebootDbInstanceOutputBuilder
);
db_instance_output!(
    /// Output of `StartDBInstance`.
    StartDbInstanceOutput,
    StartDbInstanceOutputBuilder
);
db_instance_output!(
    /// Output of `StopDBInstance`.
    StopDbInstanceOutput,
    StopDbInstanceOutputBuilder
);
db_instance_output!(
    /// Output of `RestoreDBInstanceFromDBSnapshot`.
    RestoreDbInstanceFromDbSnapshotOutput,
    RestoreDbInstanceFromDbSnapshotOutputBuilder
);
db_instance_output!(
    /// Output of `RestoreDBInstanceFromS3`.
    RestoreDbInstanceFromS3Output,
    RestoreDbInstanceFromS3OutputBuilder
);

macro_rules! db_cluster_output {
    ($(#[$docs:meta])* $name:ident, $builder:ident) => {
        $(#[$docs])*
        #[derive(Clone, Debug, Default, PartialEq)]
        #[non_exhaustive]
        pub struct $name {
            /// The DB cluster the operation acted on.
            pub db_cluster: Option<DbCluster>,
        }

        impl $name {
            /// Returns a builder for the output.
            pub fn builder() -> $builder {
                $builder::default()
            }
        }

        /// Builder for the output.
        #[derive(Clone, Debug, Default)]
        pub struct $builder {
            db_cluster: Option<DbCluster>,
        }

        impl $builder {
            /// Sets the DB cluster.
            pub fn db_cluster(mut self, input: DbCluster) -> Self {
                self.db_cluster = Some(input);
                self
            }

            /// Sets or clears the DB cluster.
            pub fn set_db_cluster(mut self, input: Option<DbCluster>) -> Self {
                self.db_cluster = input;
                self
            }

            /// Builds the output.
            pub fn build(self) -> $name {
                $name {
                    db_cluster: self.db_cluster,
                }
            }
        }
    };
}

db_cluster_output!(
    /// Output of `CreateDBCluster`.
    CreateDbClusterOutput,
    CreateDbClusterOutputBuilder
);
db_cluster_output!(
    /// Output of `ModifyDBCluster`.
    ModifyDbClusterOutput,
    ModifyDbClusterOutputBuilder
);
db_cluster_output!(
    /// Output of `DeleteDBCluster`.
    DeleteDbClusterOutput,
    DeleteDbClusterOutputBuilder
);
db_cluster_output!(
    /// Output of `RestoreDBClusterFromSnapshot`.
    RestoreDbClusterFromSnapshotOutput,
    RestoreDbClusterFromSnapshotOutputBuilder
);
db_cluster_output!(
    /// Output of `RestoreDBClusterFromS3`.
    RestoreDbClusterFromS3Output,
    RestoreDbClusterFromS3OutputBuilder
);
db_cluster_output!(
    /// Output of `RestoreDBClusterToPointInTime`.
    RestoreDbClusterToPointInTimeOutput,
    RestoreDbClusterToPointInTimeOutputBuilder
);

macro_rules! db_snapshot_output {
    ($(#[$docs:meta])* $name:ident, $builder:ident) => {
        $(#[$docs])*
        #[derive(Clone, Debug, Default, PartialEq)]
        #[non_exhaustive]
        pub struct $name {
            /// The DB snapshot the operation acted on.
            pub db_snapshot: Option<DbSnapshot>,
        }

        impl $name {
            /// Returns a builder for the output.
            pub fn builder() -> $builder {
                $builder::default()
            }
        }

        /// Builder for the output.
        #[derive(Clone, Debug, Default)]
        pub struct $builder {
            db_snapshot: Option<DbSnapshot>,
        }

        impl $builder {
            /// Sets the DB snapshot.
            pub fn db_snapshot(mut self, input: DbSnapshot) -> Self {
                self.db_snapshot = Some(input);
                self
            }

            /// Sets or clears the DB snapshot.
            pub fn set_db_snapshot(mut self, input: Option<DbSnapshot>) -> Self {
                self.db_snapshot = input;
                self
            }

            /// Builds the output.
            pub fn build(self) -> $name {
                $name {
                    db_snapshot: self.db_snapshot,
                }
            }
        }
    };
}

db_snapshot_output!(
    /// Output of `CreateDBSnapshot`.
    CreateDbSnapshotOutput,
    CreateDbSnapshotOutputBuilder
);
db_snapshot_output!(
    /// Output of `DeleteDBSnapshot`.
    DeleteDbSnapshotOutput,
    DeleteDbSnapshotOutputBuilder
);

macro_rules! db_cluster_snapshot_output {
    ($(#[$docs:meta])* $name:ident, $builder:ident) => {
        $(#[$docs])*
        #[derive(Clone, Debug, Default, PartialEq)]
        #[non_exhaustive]
        pub struct $name {
            /// The DB cluster snapshot the operation acted on.
            pub db_cluster_snapshot: Option<DbClusterSnapshot>,
        }

        impl $name {
            /// Returns a builder for the output.
            pub fn builder() -> $builder {
                $builder::default()
            }
        }

        /// Builder for the output.
        #[derive(Clone, Debug, Default)]
        pub struct $builder {
            db_cluster_snapshot: Option<DbClusterSnapshot>,
        }

        impl $builder {
            /// Sets the DB cluster snapshot.
            pub fn db_cluster_snapshot(mut self, input: DbClusterSnapshot) -> Self {
                self.db_cluster_snapshot = Some(input);
                self
            }

            /// Sets or clears the DB cluster snapshot.
            pub fn set_db_cluster_snapshot(mut self, input: Option<DbClusterSnapshot>) -> Self {
                self.db_cluster_snapshot = input;
                self
            }

            /// Builds the output.
            pub fn build(self) -> $name {
                $name {
                    db_cluster_snapshot: self.db_cluster_snapshot,
                }
            }
        }
    };
}

db_cluster_snapshot_output!(
    /// Output of `CreateDBClusterSnapshot`.
    CreateDbClusterSnapshotOutput,
    CreateDbClusterSnapshotOutputBuilder
);
db_cluster_snapshot_output!(
    /// Output of `CopyDBClusterSnapshot`.
    CopyDbClusterSnapshotOutput,
    CopyDbClusterSnapshotOutputBuilder
);
db_cluster_snapshot_output!(
    /// Output of `DeleteDBClusterSnapshot`.
    DeleteDbClusterSnapshotOutput,
    DeleteDbClusterSnapshotOutputBuilder
);

macro_rules! db_cluster_endpoint_output {
    ($(#[$docs:meta])* $name:ident, $builder:ident) => {
        $(#[$docs])*
        ///
        /// The endpoint's fields are returned at the top level of the result.
        #[derive(Clone, Debug, Default, PartialEq)]
        #[non_exhaustive]
        pub struct $name {
            /// User-supplied endpoint identifier.
            pub db_cluster_endpoint_identifier: Option<String>,
            /// Cluster the endpoint belongs to.
            pub db_cluster_identifier: Option<String>,
            /// Region-unique identifier of the endpoint resource.
            pub db_cluster_endpoint_resource_identifier: Option<String>,
            /// DNS address of the endpoint.
            pub endpoint: Option<String>,
            /// Endpoint status.
            pub status: Option<String>,
            /// `READER`, `WRITER`, or `CUSTOM`.
            pub endpoint_type: Option<String>,
            /// `READER` or `ANY`, for custom endpoints.
            pub custom_endpoint_type: Option<String>,
            /// Instances served by the endpoint.
            pub static_members: Option<Vec<String>>,
            /// Instances excluded from the endpoint.
            pub excluded_members: Option<Vec<String>>,
            /// ARN of the endpoint.
            pub db_cluster_endpoint_arn: Option<String>,
        }

        impl $name {
            /// Returns a builder for the output.
            pub fn builder() -> $builder {
                $builder::default()
            }
        }

        /// Builder for the output.
        #[derive(Clone, Debug, Default)]
        pub struct $builder {
            db_cluster_endpoint_identifier: Option<String>,
            db_cluster_identifier: Option<String>,
            db_cluster_endpoint_resource_identifier: Option<String>,
            endpoint: Option<String>,
            status: Option<String>,
            endpoint_type: Option<String>,
            custom_endpoint_type: Option<String>,
            static_members: Option<Vec<String>>,
            excluded_members: Option<Vec<String>>,
            db_cluster_endpoint_arn: Option<String>,
        }

        impl $builder {
            /// Sets the endpoint identifier.
            pub fn db_cluster_endpoint_identifier(mut self, input: impl Into<String>) -> Self {
                self.db_cluster_endpoint_identifier = Some(input.into());
                self
            }

            /// Sets or clears the endpoint identifier.
            pub fn set_db_cluster_endpoint_identifier(mut self, input: Option<String>) -> Self {
                self.db_cluster_endpoint_identifier = input;
                self
            }

            /// Sets the cluster identifier.
            pub fn db_cluster_identifier(mut self, input: impl Into<String>) -> Self {
                self.db_cluster_identifier = Some(input.into());
                self
            }

            /// Sets or clears the cluster identifier.
            pub fn set_db_cluster_identifier(mut self, input: Option<String>) -> Self {
                self.db_cluster_identifier = input;
                self
            }

            /// Sets the endpoint resource identifier.
            pub fn db_cluster_endpoint_resource_identifier(
                mut self,
                input: impl Into<String>,
            ) -> Self {
                self.db_cluster_endpoint_resource_identifier = Some(input.into());
                self
            }

            /// Sets or clears the endpoint resource identifier.
            pub fn set_db_cluster_endpoint_resource_identifier(
                mut self,
                input: Option<String>,
            ) -> Self {
                self.db_cluster_endpoint_resource_identifier = input;
                self
            }

            /// Sets the DNS address.
            pub fn endpoint(mut self, input: impl Into<String>) -> Self {
                self.endpoint = Some(input.into());
                self
            }

            /// Sets or clears the DNS address.
            pub fn set_endpoint(mut self, input: Option<String>) -> Self {
                self.endpoint = input;
                self
            }

            /// Sets the endpoint status.
            pub fn status(mut self, input: impl Into<String>) -> Self {
                self.status = Some(input.into());
                self
            }

            /// Sets or clears the endpoint status.
            pub fn set_status(mut self, input: Option<String>) -> Self {
                self.status = input;
                self
            }

            /// Sets the endpoint type.
            pub fn endpoint_type(mut self, input: impl Into<String>) -> Self {
                self.endpoint_type = Some(input.into());
                self
            }

            /// Sets or clears the endpoint type.
            pub fn set_endpoint_type(mut self, input: Option<String>) -> Self {
                self.endpoint_type = input;
                self
            }

            /// Sets the custom endpoint type.
            pub fn custom_endpoint_type(mut self, input: impl Into<String>) -> Self {
                self.custom_endpoint_type = Some(input.into());
                self
            }

            /// Sets or clears the custom endpoint type.
            pub fn set_custom_endpoint_type(mut self, input: Option<String>) -> Self {
                self.custom_endpoint_type = input;
                self
            }

            /// Appends a static member.
            pub fn static_members(mut self, input: impl Into<String>) -> Self {
                self.static_members
                    .get_or_insert_with(Vec::new)
                    .push(input.into());
                self
            }

            /// Replaces the static members.
            pub fn set_static_members(mut self, input: Option<Vec<String>>) -> Self {
                self.static_members = input;
                self
            }

            /// Appends an excluded member.
            pub fn excluded_members(mut self, input: impl Into<String>) -> Self {
                self.excluded_members
                    .get_or_insert_with(Vec::new)
                    .push(input.into());
                self
            }

            /// Replaces the excluded members.
            pub fn set_excluded_members(mut self, input: Option<Vec<String>>) -> Self {
                self.excluded_members = input;
                self
            }

            /// Sets the endpoint ARN.
            pub fn db_cluster_endpoint_arn(mut self, input: impl Into<String>) -> Self {
                self.db_cluster_endpoint_arn = Some(input.into());
                self
            }

            /// Sets or clears the endpoint ARN.
            pub fn set_db_cluster_endpoint_arn(mut self, input: Option<String>) -> Self {
                self.db_cluster_endpoint_arn = input;
                self
            }

            /// Builds the output.
            pub fn build(self) -> $name {
                $name {
                    db_cluster_endpoint_identifier: self.db_cluster_endpoint_identifier,
                    db_cluster_identifier: self.db_cluster_identifier,
                    db_cluster_endpoint_resource_identifier: self
                        .db_cluster_endpoint_resource_identifier,
                    endpoint: self.endpoint,
                    status: self.status,
                    endpoint_type: self.endpoint_type,
                    custom_endpoint_type: self.custom_endpoint_type,
                    static_members: self.static_members,
                    excluded_members: self.excluded_members,
                    db_cluster_endpoint_arn: self.db_cluster_endpoint_arn,
                }
            }
        }
    };
}

db_cluster_endpoint_output!(
    /// Output of `CreateDBClusterEndpoint`.
    CreateDbClusterEndpointOutput,
    CreateDbClusterEndpointOutputBuilder
);
db_cluster_endpoint_output!(
    /// Output of `ModifyDBClusterEndpoint`.
    ModifyDbClusterEndpointOutput,
    ModifyDbClusterEndpointOutputBuilder
);
db_cluster_endpoint_output!(
    /// Output of `DeleteDBClusterEndpoint`.
    DeleteDbClusterEndpointOutput,
    DeleteDbClusterEndpointOutputBuilder
);

macro_rules! paginated_list_output {
    (
        $(#[$docs:meta])* $name:ident, $builder:ident,
        $field:ident, $append:ident, $set:ident, $item:ty
    ) => {
        $(#[$docs])*
        #[derive(Clone, Debug, Default, PartialEq)]
        #[non_exhaustive]
        pub struct $name {
            /// Pagination token to pass to a subsequent call; `None` on the
            /// last page.
            pub marker: Option<String>,
            /// Records on this page.
            pub $field: Option<Vec<$item>>,
        }

        impl $name {
            /// Returns a builder for the output.
            pub fn builder() -> $builder {
                $builder::default()
            }
        }

        /// Builder for the output.
        #[derive(Clone, Debug, Default)]
        pub struct $builder {
            marker: Option<String>,
            $field: Option<Vec<$item>>,
        }

        impl $builder {
            /// Sets the pagination marker.
            pub fn marker(mut self, input: impl Into<String>) -> Self {
                self.marker = Some(input.into());
                self
            }

            /// Sets or clears the pagination marker.
            pub fn set_marker(mut self, input: Option<String>) -> Self {
                self.marker = input;
                self
            }

            /// Appends a record.
            pub fn $append(mut self, input: $item) -> Self {
                self.$field.get_or_insert_with(Vec::new).push(input);
                self
            }

            /// Replaces the records.
            pub fn $set(mut self, input: Option<Vec<$item>>) -> Self {
                self.$field = input;
                self
            }

            /// Builds the output.
            pub fn build(self) -> $name {
                $name {
                    marker: self.marker,
                    $field: self.$field,
                }
            }
        }
    };
}

paginated_list_output!(
    /// Output of `DescribeDBInstances`.
    DescribeDbInstancesOutput,
    DescribeDbInstancesOutputBuilder,
    db_instances,
    db_instances,
    set_db_instances,
    DbInstance
);
paginated_list_output!(
    /// Output of `DescribeDBClusters`.
    DescribeDbClustersOutput,
    DescribeDbClustersOutputBuilder,
    db_clusters,
    db_clusters,
    set_db_clusters,
    DbCluster
);
paginated_list_output!(
    /// Output of `DescribeDBSnapshots`.
    DescribeDbSnapshotsOutput,
    DescribeDbSnapshotsOutputBuilder,
    db_snapshots,
    db_snapshots,
    set_db_snapshots,
    DbSnapshot
);
paginated_list_output!(
    /// Output of `DescribeDBClusterSnapshots`.
    DescribeDbClusterSnapshotsOutput,
    DescribeDbClusterSnapshotsOutputBuilder,
    db_cluster_snapshots,
    db_cluster_snapshots,
    set_db_cluster_snapshots,
    DbClusterSnapshot
);
paginated_list_output!(
    /// Output of `DescribeDBClusterEndpoints`.
    DescribeDbClusterEndpointsOutput,
    DescribeDbClusterEndpointsOutputBuilder,
    db_cluster_endpoints,
    db_cluster_endpoints,
    set_db_cluster_endpoints,
    DbClusterEndpoint
);
paginated_list_output!(
    /// Output of `DescribeOrderableDBInstanceOptions`.
    DescribeOrderableDbInstanceOptionsOutput,
    DescribeOrderableDbInstanceOptionsOutputBuilder,
    orderable_db_instance_options,
    orderable_db_instance_options,
    set_orderable_db_instance_options,
    OrderableDbInstanceOption
);
paginated_list_output!(
    /// Output of `DescribeDBSecurityGroups`.
    DescribeDbSecurityGroupsOutput,
    DescribeDbSecurityGroupsOutputBuilder,
    db_security_groups,
    db_security_groups,
    set_db_security_groups,
    DbSecurityGroup
);
paginated_list_output!(
    /// Output of `DescribeDBProxyTargets`.
    DescribeDbProxyTargetsOutput,
    DescribeDbProxyTargetsOutputBuilder,
    targets,
    targets,
    set_targets,
    DbProxyTarget
);
paginated_list_output!(
    /// Output of `DescribeCustomAvailabilityZones`.
    DescribeCustomAvailabilityZonesOutput,
    DescribeCustomAvailabilityZonesOutputBuilder,
    custom_availability_zones,
    custom_availability_zones,
    set_custom_availability_zones,
    CustomAvailabilityZone
);

/// Output of `DescribeValidDBInstanceModifications`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeValidDbInstanceModificationsOutput {
    /// The modifications the instance currently supports.
    pub valid_db_instance_modifications_message: Option<ValidDbInstanceModificationsMessage>,
}

impl DescribeValidDbInstanceModificationsOutput {
    /// Returns a builder for `DescribeValidDbInstanceModificationsOutput`.
    pub fn builder() -> DescribeValidDbInstanceModificationsOutputBuilder {
        DescribeValidDbInstanceModificationsOutputBuilder::default()
    }
}

/// Builder for [`DescribeValidDbInstanceModificationsOutput`].
#[derive(Clone, Debug, Default)]
pub struct DescribeValidDbInstanceModificationsOutputBuilder {
    valid_db_instance_modifications_message: Option<ValidDbInstanceModificationsMessage>,
}

impl DescribeValidDbInstanceModificationsOutputBuilder {
    /// Sets the valid modifications message.
    pub fn valid_db_instance_modifications_message(
        mut self,
        input: ValidDbInstanceModificationsMessage,
    ) -> Self {
        self.valid_db_instance_modifications_message = Some(input);
        self
    }

    /// Sets or clears the valid modifications message.
    pub fn set_valid_db_instance_modifications_message(
        mut self,
        input: Option<ValidDbInstanceModificationsMessage>,
    ) -> Self {
        self.valid_db_instance_modifications_message = input;
        self
    }

    /// Builds the [`DescribeValidDbInstanceModificationsOutput`].
    pub fn build(self) -> DescribeValidDbInstanceModificationsOutput {
        DescribeValidDbInstanceModificationsOutput {
            valid_db_instance_modifications_message: self.valid_db_instance_modifications_message,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{DbInstance, Range, ValidStorageOptions};

    #[test]
    fn paginated_output_carries_marker_and_records() {
        let output = DescribeDbInstancesOutput::builder()
            .marker("next-page")
            .db_instances(
                DbInstance::builder()
                    .db_instance_identifier("database-1")
                    .build(),
            )
            .db_instances(
                DbInstance::builder()
                    .db_instance_identifier("database-2")
                    .build(),
            )
            .build();
        assert_eq!(output.marker.as_deref(), Some("next-page"));
        let instances = output.db_instances.as_deref().unwrap();
        assert_eq!(instances.len(), 2);
        assert_eq!(
            instances[1].db_instance_identifier.as_deref(),
            Some("database-2")
        );
    }

    #[test]
    fn valid_modifications_output_nests_ranges() {
        let output = DescribeValidDbInstanceModificationsOutput::builder()
            .valid_db_instance_modifications_message(
                ValidDbInstanceModificationsMessage::builder()
                    .storage(
                        ValidStorageOptions::builder()
                            .storage_type("io1")
                            .storage_size(Range::builder().from(100).to(6144).build())
                            .build(),
                    )
                    .build(),
            )
            .build();
        let message = output.valid_db_instance_modifications_message.unwrap();
        let storage = message.storage.as_deref().unwrap();
        assert_eq!(storage[0].storage_type.as_deref(), Some("io1"));
    }
}
