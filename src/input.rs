/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation inputs.
//!
//! Each input is a record with a fluent builder, plus [`make_request`], which
//! serializes the input into a ready-to-sign `POST /` request against the
//! configured endpoint. Signing and dispatch belong to the transport client.
//!
//! [`make_request`]: DescribeDbInstancesInput::make_request

use crate::config::Config;
use crate::model::{
    CloudwatchLogsExportConfiguration, Filter, ProcessorFeature, ScalingConfiguration, Tag,
};
use aws_smithy_types::DateTime;

/// Error constructing an HTTP request from an operation input.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Neither a region nor an endpoint override is configured.
    #[error("cannot build request: no endpoint (configure a region or an endpoint override)")]
    MissingEndpoint,
    /// A timestamp field could not be rendered in the wire format.
    #[error("cannot serialize request body")]
    Serialization(#[from] aws_smithy_types::date_time::DateTimeFormatError),
    /// The assembled parts were rejected by `http`.
    #[error("cannot construct http request")]
    Http(#[from] http::Error),
}

/// Assembles the Query-protocol HTTP request shared by every operation.
fn build_query_request(
    config: &Config,
    body: String,
) -> Result<http::Request<String>, BuildError> {
    let uri = config
        .resolve_endpoint()
        .ok_or(BuildError::MissingEndpoint)?;
    http::Request::builder()
        .method(http::Method::POST)
        .uri(uri)
        .header(
            http::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(body)
        .map_err(BuildError::from)
}

/// Input for `AddTagsToResource`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct AddTagsToResourceInput {
    /// ARN of the resource to tag.
    pub resource_name: Option<String>,
    /// Tags to attach.
    pub tags: Option<Vec<Tag>>,
}

impl AddTagsToResourceInput {
    /// Returns a builder for `AddTagsToResourceInput`.
    pub fn builder() -> AddTagsToResourceInputBuilder {
        AddTagsToResourceInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_add_tags_to_resource(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`AddTagsToResourceInput`].
#[derive(Clone, Debug, Default)]
pub struct AddTagsToResourceInputBuilder {
    resource_name: Option<String>,
    tags: Option<Vec<Tag>>,
}

impl AddTagsToResourceInputBuilder {
    /// Sets the resource ARN.
    pub fn resource_name(mut self, input: impl Into<String>) -> Self {
        self.resource_name = Some(input.into());
        self
    }

    /// Sets or clears the resource ARN.
    pub fn set_resource_name(mut self, input: Option<String>) -> Self {
        self.resource_name = input;
        self
    }

    /// Appends a tag.
    pub fn tags(mut self, input: Tag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the tags.
    pub fn set_tags(mut self, input: Option<Vec<Tag>>) -> Self {
        self.tags = input;
        self
    }

    /// Builds the [`AddTagsToResourceInput`].
    pub fn build(self) -> AddTagsToResourceInput {
        AddTagsToResourceInput {
            resource_name: self.resource_name,
            tags: self.tags,
        }
    }
}

/// Input for `RemoveTagsFromResource`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RemoveTagsFromResourceInput {
    /// ARN of the resource to untag.
    pub resource_name: Option<String>,
    /// Keys of the tags to remove.
    pub tag_keys: Option<Vec<String>>,
}

impl RemoveTagsFromResourceInput {
    /// Returns a builder for `RemoveTagsFromResourceInput`.
    pub fn builder() -> RemoveTagsFromResourceInputBuilder {
        RemoveTagsFromResourceInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_remove_tags_from_resource(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`RemoveTagsFromResourceInput`].
#[derive(Clone, Debug, Default)]
pub struct RemoveTagsFromResourceInputBuilder {
    resource_name: Option<String>,
    tag_keys: Option<Vec<String>>,
}

impl RemoveTagsFromResourceInputBuilder {
    /// Sets the resource ARN.
    pub fn resource_name(mut self, input: impl Into<String>) -> Self {
        self.resource_name = Some(input.into());
        self
    }

    /// Sets or clears the resource ARN.
    pub fn set_resource_name(mut self, input: Option<String>) -> Self {
        self.resource_name = input;
        self
    }

    /// Appends a tag key to remove.
    pub fn tag_keys(mut self, input: impl Into<String>) -> Self {
        self.tag_keys.get_or_insert_with(Vec::new).push(input.into());
        self
    }

    /// Replaces the tag keys to remove.
    pub fn set_tag_keys(mut self, input: Option<Vec<String>>) -> Self {
        self.tag_keys = input;
        self
    }

    /// Builds the [`RemoveTagsFromResourceInput`].
    pub fn build(self) -> RemoveTagsFromResourceInput {
        RemoveTagsFromResourceInput {
            resource_name: self.resource_name,
            tag_keys: self.tag_keys,
        }
    }
}

/// Input for `ListTagsForResource`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListTagsForResourceInput {
    /// ARN of the resource whose tags to list.
    pub resource_name: Option<String>,
    /// Not currently supported by the service; accepted for forward
    /// compatibility.
    pub filters: Option<Vec<Filter>>,
}

impl ListTagsForResourceInput {
    /// Returns a builder for `ListTagsForResourceInput`.
    pub fn builder() -> ListTagsForResourceInputBuilder {
        ListTagsForResourceInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_list_tags_for_resource(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`ListTagsForResourceInput`].
#[derive(Clone, Debug, Default)]
pub struct ListTagsForResourceInputBuilder {
    resource_name: Option<String>,
    filters: Option<Vec<Filter>>,
}

impl ListTagsForResourceInputBuilder {
    /// Sets the resource ARN.
    pub fn resource_name(mut self, input: impl Into<String>) -> Self {
        self.resource_name = Some(input.into());
        self
    }

    /// Sets or clears the resource ARN.
    pub fn set_resource_name(mut self, input: Option<String>) -> Self {
        self.resource_name = input;
        self
    }

    /// Appends a filter.
    pub fn filters(mut self, input: Filter) -> Self {
        self.filters.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the filters.
    pub fn set_filters(mut self, input: Option<Vec<Filter>>) -> Self {
        self.filters = input;
        self
    }

    /// Builds the [`ListTagsForResourceInput`].
    pub fn build(self) -> ListTagsForResourceInput {
        ListTagsForResourceInput {
            resource_name: self.resource_name,
            filters: self.filters,
        }
    }
}

/// Input for `DescribeDBInstances`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeDbInstancesInput {
    /// Restrict the description to a single instance.
    pub db_instance_identifier: Option<String>,
    /// Filters such as `db-cluster-id` or `engine`.
    pub filters: Option<Vec<Filter>>,
    /// Page size, between 20 and 100.
    pub max_records: Option<i32>,
    /// Pagination token from a previous call.
    pub marker: Option<String>,
}

impl DescribeDbInstancesInput {
    /// Returns a builder for `DescribeDbInstancesInput`.
    pub fn builder() -> DescribeDbInstancesInputBuilder {
        DescribeDbInstancesInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_describe_db_instances(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`DescribeDbInstancesInput`].
#[derive(Clone, Debug, Default)]
pub struct DescribeDbInstancesInputBuilder {
    db_instance_identifier: Option<String>,
    filters: Option<Vec<Filter>>,
    max_records: Option<i32>,
    marker: Option<String>,
}

impl DescribeDbInstancesInputBuilder {
    /// Sets the instance identifier.
    pub fn db_instance_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(input.into());
        self
    }

    /// Sets or clears the instance identifier.
    pub fn set_db_instance_identifier(mut self, input: Option<String>) -> Self {
        self.db_instance_identifier = input;
        self
    }

    /// Appends a filter.
    pub fn filters(mut self, input: Filter) -> Self {
        self.filters.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the filters.
    pub fn set_filters(mut self, input: Option<Vec<Filter>>) -> Self {
        self.filters = input;
        self
    }

    /// Sets the page size.
    pub fn max_records(mut self, input: i32) -> Self {
        self.max_records = Some(input);
        self
    }

    /// Sets or clears the page size.
    pub fn set_max_records(mut self, input: Option<i32>) -> Self {
        self.max_records = input;
        self
    }

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

    /// Builds the [`DescribeDbInstancesInput`].
    pub fn build(self) -> DescribeDbInstancesInput {
        DescribeDbInstancesInput {
            db_instance_identifier: self.db_instance_identifier,
            filters: self.filters,
            max_records: self.max_records,
            marker: self.marker,
        }
    }
}

/// Input for `DescribeDBClusters`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeDbClustersInput {
    /// Restrict the description to a single cluster.
    pub db_cluster_identifier: Option<String>,
    /// Filters such as `db-cluster-id` or `engine`.
    pub filters: Option<Vec<Filter>>,
    /// Page size, between 20 and 100.
    pub max_records: Option<i32>,
    /// Pagination token from a previous call.
    pub marker: Option<String>,
    /// Also describe clusters shared from other accounts.
    pub include_shared: Option<bool>,
}

impl DescribeDbClustersInput {
    /// Returns a builder for `DescribeDbClustersInput`.
    pub fn builder() -> DescribeDbClustersInputBuilder {
        DescribeDbClustersInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_describe_db_clusters(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`DescribeDbClustersInput`].
#[derive(Clone, Debug, Default)]
pub struct DescribeDbClustersInputBuilder {
    db_cluster_identifier: Option<String>,
    filters: Option<Vec<Filter>>,
    max_records: Option<i32>,
    marker: Option<String>,
    include_shared: Option<bool>,
}

impl DescribeDbClustersInputBuilder {
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

    /// Appends a filter.
    pub fn filters(mut self, input: Filter) -> Self {
        self.filters.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the filters.
    pub fn set_filters(mut self, input: Option<Vec<Filter>>) -> Self {
        self.filters = input;
        self
    }

    /// Sets the page size.
    pub fn max_records(mut self, input: i32) -> Self {
        self.max_records = Some(input);
        self
    }

    /// Sets or clears the page size.
    pub fn set_max_records(mut self, input: Option<i32>) -> Self {
        self.max_records = input;
        self
    }

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

    /// Sets whether shared clusters are included.
    pub fn include_shared(mut self, input: bool) -> Self {
        self.include_shared = Some(input);
        self
    }

    /// Sets or clears the shared-cluster flag.
    pub fn set_include_shared(mut self, input: Option<bool>) -> Self {
        self.include_shared = input;
        self
    }

    /// Builds the [`DescribeDbClustersInput`].
    pub fn build(self) -> DescribeDbClustersInput {
        DescribeDbClustersInput {
            db_cluster_identifier: self.db_cluster_identifier,
            filters: self.filters,
            max_records: self.max_records,
            marker: self.marker,
            include_shared: self.include_shared,
        }
    }
}

/// Input for `DescribeOrderableDBInstanceOptions`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeOrderableDbInstanceOptionsInput {
    /// Engine to describe offerings for; required by the service.
    pub engine: Option<String>,
    /// Restrict to one engine version.
    pub engine_version: Option<String>,
    /// Restrict to one instance class.
    pub db_instance_class: Option<String>,
    /// Restrict to one license model.
    pub license_model: Option<String>,
    /// Restrict to VPC or non-VPC offerings.
    pub vpc: Option<bool>,
    /// Not currently supported by the service.
    pub filters: Option<Vec<Filter>>,
    /// Page size, between 20 and 100.
    pub max_records: Option<i32>,
    /// Pagination token from a previous call.
    pub marker: Option<String>,
}

impl DescribeOrderableDbInstanceOptionsInput {
    /// Returns a builder for `DescribeOrderableDbInstanceOptionsInput`.
    pub fn builder() -> DescribeOrderableDbInstanceOptionsInputBuilder {
        DescribeOrderableDbInstanceOptionsInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_describe_orderable_db_instance_options(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`DescribeOrderableDbInstanceOptionsInput`].
#[derive(Clone, Debug, Default)]
pub struct DescribeOrderableDbInstanceOptionsInputBuilder {
    engine: Option<String>,
    engine_version: Option<String>,
    db_instance_class: Option<String>,
    license_model: Option<String>,
    vpc: Option<bool>,
    filters: Option<Vec<Filter>>,
    max_records: Option<i32>,
    marker: Option<String>,
}

impl DescribeOrderableDbInstanceOptionsInputBuilder {
    /// Sets the engine.
    pub fn engine(mut self, input: impl Into<String>) -> Self {
        self.engine = Some(input.into());
        self
    }

    /// Sets or clears the engine.
    pub fn set_engine(mut self, input: Option<String>) -> Self {
        self.engine = input;
        self
    }

    /// Sets the engine version.
    pub fn engine_version(mut self, input: impl Into<String>) -> Self {
        self.engine_version = Some(input.into());
        self
    }

    /// Sets or clears the engine version.
    pub fn set_engine_version(mut self, input: Option<String>) -> Self {
        self.engine_version = input;
        self
    }

    /// Sets the instance class.
    pub fn db_instance_class(mut self, input: impl Into<String>) -> Self {
        self.db_instance_class = Some(input.into());
        self
    }

    /// Sets or clears the instance class.
    pub fn set_db_instance_class(mut self, input: Option<String>) -> Self {
        self.db_instance_class = input;
        self
    }

    /// Sets the license model.
    pub fn license_model(mut self, input: impl Into<String>) -> Self {
        self.license_model = Some(input.into());
        self
    }

    /// Sets or clears the license model.
    pub fn set_license_model(mut self, input: Option<String>) -> Self {
        self.license_model = input;
        self
    }

    /// Sets the VPC restriction.
    pub fn vpc(mut self, input: bool) -> Self {
        self.vpc = Some(input);
        self
    }

    /// Sets or clears the VPC restriction.
    pub fn set_vpc(mut self, input: Option<bool>) -> Self {
        self.vpc = input;
        self
    }

    /// Appends a filter.
    pub fn filters(mut self, input: Filter) -> Self {
        self.filters.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the filters.
    pub fn set_filters(mut self, input: Option<Vec<Filter>>) -> Self {
        self.filters = input;
        self
    }

    /// Sets the page size.
    pub fn max_records(mut self, input: i32) -> Self {
        self.max_records = Some(input);
        self
    }

    /// Sets or clears the page size.
    pub fn set_max_records(mut self, input: Option<i32>) -> Self {
        self.max_records = input;
        self
    }

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

    /// Builds the [`DescribeOrderableDbInstanceOptionsInput`].
    pub fn build(self) -> DescribeOrderableDbInstanceOptionsInput {
        DescribeOrderableDbInstanceOptionsInput {
            engine: self.engine,
            engine_version: self.engine_version,
            db_instance_class: self.db_instance_class,
            license_model: self.license_model,
            vpc: self.vpc,
            filters: self.filters,
            max_records: self.max_records,
            marker: self.marker,
        }
    }
}

/// Input for `DescribeValidDBInstanceModifications`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeValidDbInstanceModificationsInput {
    /// Instance to describe valid modifications for.
    pub db_instance_identifier: Option<String>,
}

impl DescribeValidDbInstanceModificationsInput {
    /// Returns a builder for `DescribeValidDbInstanceModificationsInput`.
    pub fn builder() -> DescribeValidDbInstanceModificationsInputBuilder {
        DescribeValidDbInstanceModificationsInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_describe_valid_db_instance_modifications(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`DescribeValidDbInstanceModificationsInput`].
#[derive(Clone, Debug, Default)]
pub struct DescribeValidDbInstanceModificationsInputBuilder {
    db_instance_identifier: Option<String>,
}

impl DescribeValidDbInstanceModificationsInputBuilder {
    /// Sets the instance identifier.
    pub fn db_instance_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(input.into());
        self
    }

    /// Sets or clears the instance identifier.
    pub fn set_db_instance_identifier(mut self, input: Option<String>) -> Self {
        self.db_instance_identifier = input;
        self
    }

    /// Builds the [`DescribeValidDbInstanceModificationsInput`].
    pub fn build(self) -> DescribeValidDbInstanceModificationsInput {
        DescribeValidDbInstanceModificationsInput {
            db_instance_identifier: self.db_instance_identifier,
        }
    }
}

/// Input for `DescribeDBSecurityGroups`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeDbSecurityGroupsInput {
    /// Restrict the description to a single group.
    pub db_security_group_name: Option<String>,
    /// Not currently supported by the service.
    pub filters: Option<Vec<Filter>>,
    /// Page size, between 20 and 100.
    pub max_records: Option<i32>,
    /// Pagination token from a previous call.
    pub marker: Option<String>,
}

impl DescribeDbSecurityGroupsInput {
    /// Returns a builder for `DescribeDbSecurityGroupsInput`.
    pub fn builder() -> DescribeDbSecurityGroupsInputBuilder {
        DescribeDbSecurityGroupsInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_describe_db_security_groups(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`DescribeDbSecurityGroupsInput`].
#[derive(Clone, Debug, Default)]
pub struct DescribeDbSecurityGroupsInputBuilder {
    db_security_group_name: Option<String>,
    filters: Option<Vec<Filter>>,
    max_records: Option<i32>,
    marker: Option<String>,
}

impl DescribeDbSecurityGroupsInputBuilder {
    /// Sets the group name.
    pub fn db_security_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_security_group_name = Some(input.into());
        self
    }

    /// Sets or clears the group name.
    pub fn set_db_security_group_name(mut self, input: Option<String>) -> Self {
        self.db_security_group_name = input;
        self
    }

    /// Appends a filter.
    pub fn filters(mut self, input: Filter) -> Self {
        self.filters.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the filters.
    pub fn set_filters(mut self, input: Option<Vec<Filter>>) -> Self {
        self.filters = input;
        self
    }

    /// Sets the page size.
    pub fn max_records(mut self, input: i32) -> Self {
        self.max_records = Some(input);
        self
    }

    /// Sets or clears the page size.
    pub fn set_max_records(mut self, input: Option<i32>) -> Self {
        self.max_records = input;
        self
    }

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

    /// Builds the [`DescribeDbSecurityGroupsInput`].
    pub fn build(self) -> DescribeDbSecurityGroupsInput {
        DescribeDbSecurityGroupsInput {
            db_security_group_name: self.db_security_group_name,
            filters: self.filters,
            max_records: self.max_records,
            marker: self.marker,
        }
    }
}

/// Input for `DescribeDBProxyTargets`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeDbProxyTargetsInput {
    /// Proxy whose targets to describe.
    pub db_proxy_name: Option<String>,
    /// Restrict to one target group.
    pub target_group_name: Option<String>,
    /// Not currently supported by the service.
    pub filters: Option<Vec<Filter>>,
    /// Pagination token from a previous call.
    pub marker: Option<String>,
    /// Page size, between 20 and 100.
    pub max_records: Option<i32>,
}

impl DescribeDbProxyTargetsInput {
    /// Returns a builder for `DescribeDbProxyTargetsInput`.
    pub fn builder() -> DescribeDbProxyTargetsInputBuilder {
        DescribeDbProxyTargetsInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_describe_db_proxy_targets(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`DescribeDbProxyTargetsInput`].
#[derive(Clone, Debug, Default)]
pub struct DescribeDbProxyTargetsInputBuilder {
    db_proxy_name: Option<String>,
    target_group_name: Option<String>,
    filters: Option<Vec<Filter>>,
    marker: Option<String>,
    max_records: Option<i32>,
}

impl DescribeDbProxyTargetsInputBuilder {
    /// Sets the proxy name.
    pub fn db_proxy_name(mut self, input: impl Into<String>) -> Self {
        self.db_proxy_name = Some(input.into());
        self
    }

    /// Sets or clears the proxy name.
    pub fn set_db_proxy_name(mut self, input: Option<String>) -> Self {
        self.db_proxy_name = input;
        self
    }

    /// Sets the target group name.
    pub fn target_group_name(mut self, input: impl Into<String>) -> Self {
        self.target_group_name = Some(input.into());
        self
    }

    /// Sets or clears the target group name.
    pub fn set_target_group_name(mut self, input: Option<String>) -> Self {
        self.target_group_name = input;
        self
    }

    /// Appends a filter.
    pub fn filters(mut self, input: Filter) -> Self {
        self.filters.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the filters.
    pub fn set_filters(mut self, input: Option<Vec<Filter>>) -> Self {
        self.filters = input;
        self
    }

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

    /// Sets the page size.
    pub fn max_records(mut self, input: i32) -> Self {
        self.max_records = Some(input);
        self
    }

    /// Sets or clears the page size.
    pub fn set_max_records(mut self, input: Option<i32>) -> Self {
        self.max_records = input;
        self
    }

    /// Builds the [`DescribeDbProxyTargetsInput`].
    pub fn build(self) -> DescribeDbProxyTargetsInput {
        DescribeDbProxyTargetsInput {
            db_proxy_name: self.db_proxy_name,
            target_group_name: self.target_group_name,
            filters: self.filters,
            marker: self.marker,
            max_records: self.max_records,
        }
    }
}

/// Input for `DescribeCustomAvailabilityZones`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeCustomAvailabilityZonesInput {
    /// Restrict the description to a single custom AZ.
    pub custom_availability_zone_id: Option<String>,
    /// Not currently supported by the service.
    pub filters: Option<Vec<Filter>>,
    /// Page size, between 20 and 100.
    pub max_records: Option<i32>,
    /// Pagination token from a previous call.
    pub marker: Option<String>,
}

impl DescribeCustomAvailabilityZonesInput {
    /// Returns a builder for `DescribeCustomAvailabilityZonesInput`.
    pub fn builder() -> DescribeCustomAvailabilityZonesInputBuilder {
        DescribeCustomAvailabilityZonesInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_describe_custom_availability_zones(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`DescribeCustomAvailabilityZonesInput`].
#[derive(Clone, Debug, Default)]
pub struct DescribeCustomAvailabilityZonesInputBuilder {
    custom_availability_zone_id: Option<String>,
    filters: Option<Vec<Filter>>,
    max_records: Option<i32>,
    marker: Option<String>,
}

impl DescribeCustomAvailabilityZonesInputBuilder {
    /// Sets the custom AZ identifier.
    pub fn custom_availability_zone_id(mut self, input: impl Into<String>) -> Self {
        self.custom_availability_zone_id = Some(input.into());
        self
    }

    /// Sets or clears the custom AZ identifier.
    pub fn set_custom_availability_zone_id(mut self, input: Option<String>) -> Self {
        self.custom_availability_zone_id = input;
        self
    }

    /// Appends a filter.
    pub fn filters(mut self, input: Filter) -> Self {
        self.filters.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the filters.
    pub fn set_filters(mut self, input: Option<Vec<Filter>>) -> Self {
        self.filters = input;
        self
    }

    /// Sets the page size.
    pub fn max_records(mut self, input: i32) -> Self {
        self.max_records = Some(input);
        self
    }

    /// Sets or clears the page size.
    pub fn set_max_records(mut self, input: Option<i32>) -> Self {
        self.max_records = input;
        self
    }

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

    /// Builds the [`DescribeCustomAvailabilityZonesInput`].
    pub fn build(self) -> DescribeCustomAvailabilityZonesInput {
        DescribeCustomAvailabilityZonesInput {
            custom_availability_zone_id: self.custom_availability_zone_id,
            filters: self.filters,
            max_records: self.max_records,
            marker: self.marker,
        }
    }
}

/// Input for `DeleteDBInstance`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteDbInstanceInput {
    /// Instance to delete.
    pub db_instance_identifier: Option<String>,
    /// Skip the final snapshot; when `false`, `final_db_snapshot_identifier`
    /// must be set.
    pub skip_final_snapshot: Option<bool>,
    /// Identifier for the final snapshot.
    pub final_db_snapshot_identifier: Option<String>,
    /// Remove automated backups immediately after deletion.
    pub delete_automated_backups: Option<bool>,
}

impl DeleteDbInstanceInput {
    /// Returns a builder for `DeleteDbInstanceInput`.
    pub fn builder() -> DeleteDbInstanceInputBuilder {
        DeleteDbInstanceInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_delete_db_instance(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`DeleteDbInstanceInput`].
#[derive(Clone, Debug, Default)]
pub struct DeleteDbInstanceInputBuilder {
    db_instance_identifier: Option<String>,
    skip_final_snapshot: Option<bool>,
    final_db_snapshot_identifier: Option<String>,
    delete_automated_backups: Option<bool>,
}

impl DeleteDbInstanceInputBuilder {
    /// Sets the instance identifier.
    pub fn db_instance_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(input.into());
        self
    }

    /// Sets or clears the instance identifier.
    pub fn set_db_instance_identifier(mut self, input: Option<String>) -> Self {
        self.db_instance_identifier = input;
        self
    }

    /// Sets the skip-final-snapshot flag.
    pub fn skip_final_snapshot(mut self, input: bool) -> Self {
        self.skip_final_snapshot = Some(input);
        self
    }

    /// Sets or clears the skip-final-snapshot flag.
    pub fn set_skip_final_snapshot(mut self, input: Option<bool>) -> Self {
        self.skip_final_snapshot = input;
        self
    }

    /// Sets the final snapshot identifier.
    pub fn final_db_snapshot_identifier(mut self, input: impl Into<String>) -> Self {
        self.final_db_snapshot_identifier = Some(input.into());
        self
    }

    /// Sets or clears the final snapshot identifier.
    pub fn set_final_db_snapshot_identifier(mut self, input: Option<String>) -> Self {
        self.final_db_snapshot_identifier = input;
        self
    }

    /// Sets the delete-automated-backups flag.
    pub fn delete_automated_backups(mut self, input: bool) -> Self {
        self.delete_automated_backups = Some(input);
        self
    }

    /// Sets or clears the delete-automated-backups flag.
    pub fn set_delete_automated_backups(mut self, input: Option<bool>) -> Self {
        self.delete_automated_backups = input;
        self
    }

    /// Builds the [`DeleteDbInstanceInput`].
    pub fn build(self) -> DeleteDbInstanceInput {
        DeleteDbInstanceInput {
            db_instance_identifier: self.db_instance_identifier,
            skip_final_snapshot: self.skip_final_snapshot,
            final_db_snapshot_identifier: self.final_db_snapshot_identifier,
            delete_automated_backups: self.delete_automated_backups,
        }
    }
}

/// Input for `RebootDBInstance`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RebootDbInstanceInput {
    /// Instance to reboot.
    pub db_instance_identifier: Option<String>,
    /// Reboot through a Multi-AZ failover.
    pub force_failover: Option<bool>,
}

impl RebootDbInstanceInput {
    /// Returns a builder for `RebootDbInstanceInput`.
    pub fn builder() -> RebootDbInstanceInputBuilder {
        RebootDbInstanceInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_reboot_db_instance(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`RebootDbInstanceInput`].
#[derive(Clone, Debug, Default)]
pub struct RebootDbInstanceInputBuilder {
    db_instance_identifier: Option<String>,
    force_failover: Option<bool>,
}

impl RebootDbInstanceInputBuilder {
    /// Sets the instance identifier.
    pub fn db_instance_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(input.into());
        self
    }

    /// Sets or clears the instance identifier.
    pub fn set_db_instance_identifier(mut self, input: Option<String>) -> Self {
        self.db_instance_identifier = input;
        self
    }

    /// Sets the forced failover flag.
    pub fn force_failover(mut self, input: bool) -> Self {
        self.force_failover = Some(input);
        self
    }

    /// Sets or clears the forced failover flag.
    pub fn set_force_failover(mut self, input: Option<bool>) -> Self {
        self.force_failover = input;
        self
    }

    /// Builds the [`RebootDbInstanceInput`].
    pub fn build(self) -> RebootDbInstanceInput {
        RebootDbInstanceInput {
            db_instance_identifier: self.db_instance_identifier,
            force_failover: self.force_failover,
        }
    }
}

/// Input for `StartDBInstance`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct StartDbInstanceInput {
    /// Instance to start.
    pub db_instance_identifier: Option<String>,
}

impl StartDbInstanceInput {
    /// Returns a builder for `StartDbInstanceInput`.
    pub fn builder() -> StartDbInstanceInputBuilder {
        StartDbInstanceInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_start_db_instance(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`StartDbInstanceInput`].
#[derive(Clone, Debug, Default)]
pub struct StartDbInstanceInputBuilder {
    db_instance_identifier: Option<String>,
}

impl StartDbInstanceInputBuilder {
    /// Sets the instance identifier.
    pub fn db_instance_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(input.into());
        self
    }

    /// Sets or clears the instance identifier.
    pub fn set_db_instance_identifier(mut self, input: Option<String>) -> Self {
        self.db_instance_identifier = input;
        self
    }

    /// Builds the [`StartDbInstanceInput`].
    pub fn build(self) -> StartDbInstanceInput {
        StartDbInstanceInput {
            db_instance_identifier: self.db_instance_identifier,
        }
    }
}

/// Input for `StopDBInstance`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct StopDbInstanceInput {
    /// Instance to stop.
    pub db_instance_identifier: Option<String>,
    /// Snapshot to take before stopping.
    pub db_snapshot_identifier: Option<String>,
}

impl StopDbInstanceInput {
    /// Returns a builder for `StopDbInstanceInput`.
    pub fn builder() -> StopDbInstanceInputBuilder {
        StopDbInstanceInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_stop_db_instance(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`StopDbInstanceInput`].
#[derive(Clone, Debug, Default)]
pub struct StopDbInstanceInputBuilder {
    db_instance_identifier: Option<String>,
    db_snapshot_identifier: Option<String>,
}

impl StopDbInstanceInputBuilder {
    /// Sets the instance identifier.
    pub fn db_instance_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(input.into());
        self
    }

    /// Sets or clears the instance identifier.
    pub fn set_db_instance_identifier(mut self, input: Option<String>) -> Self {
        self.db_instance_identifier = input;
        self
    }

    /// Sets the pre-stop snapshot identifier.
    pub fn db_snapshot_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_snapshot_identifier = Some(input.into());
        self
    }

    /// Sets or clears the pre-stop snapshot identifier.
    pub fn set_db_snapshot_identifier(mut self, input: Option<String>) -> Self {
        self.db_snapshot_identifier = input;
        self
    }

    /// Builds the [`StopDbInstanceInput`].
    pub fn build(self) -> StopDbInstanceInput {
        StopDbInstanceInput {
            db_instance_identifier: self.db_instance_identifier,
            db_snapshot_identifier: self.db_snapshot_identifier,
        }
    }
}

/// Input for `CreateDBSnapshot`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateDbSnapshotInput {
    /// Identifier for the new snapshot.
    pub db_snapshot_identifier: Option<String>,
    /// Instance to snapshot.
    pub db_instance_identifier: Option<String>,
    /// Tags to attach to the snapshot.
    pub tags: Option<Vec<Tag>>,
}

impl CreateDbSnapshotInput {
    /// Returns a builder for `CreateDbSnapshotInput`.
    pub fn builder() -> CreateDbSnapshotInputBuilder {
        CreateDbSnapshotInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_create_db_snapshot(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`CreateDbSnapshotInput`].
#[derive(Clone, Debug, Default)]
pub struct CreateDbSnapshotInputBuilder {
    db_snapshot_identifier: Option<String>,
    db_instance_identifier: Option<String>,
    tags: Option<Vec<Tag>>,
}

impl CreateDbSnapshotInputBuilder {
    /// Sets the snapshot identifier.
    pub fn db_snapshot_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_snapshot_identifier = Some(input.into());
        self
    }

    /// Sets or clears the snapshot identifier.
    pub fn set_db_snapshot_identifier(mut self, input: Option<String>) -> Self {
        self.db_snapshot_identifier = input;
        self
    }

    /// Sets the instance identifier.
    pub fn db_instance_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(input.into());
        self
    }

    /// Sets or clears the instance identifier.
    pub fn set_db_instance_identifier(mut self, input: Option<String>) -> Self {
        self.db_instance_identifier = input;
        self
    }

    /// Appends a tag.
    pub fn tags(mut self, input: Tag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the tags.
    pub fn set_tags(mut self, input: Option<Vec<Tag>>) -> Self {
        self.tags = input;
        self
    }

    /// Builds the [`CreateDbSnapshotInput`].
    pub fn build(self) -> CreateDbSnapshotInput {
        CreateDbSnapshotInput {
            db_snapshot_identifier: self.db_snapshot_identifier,
            db_instance_identifier: self.db_instance_identifier,
            tags: self.tags,
        }
    }
}

/// Input for `DeleteDBSnapshot`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteDbSnapshotInput {
    /// Snapshot to delete; must be in the `available` state.
    pub db_snapshot_identifier: Option<String>,
}

impl DeleteDbSnapshotInput {
    /// Returns a builder for `DeleteDbSnapshotInput`.
    pub fn builder() -> DeleteDbSnapshotInputBuilder {
        DeleteDbSnapshotInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_delete_db_snapshot(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`DeleteDbSnapshotInput`].
#[derive(Clone, Debug, Default)]
pub struct DeleteDbSnapshotInputBuilder {
    db_snapshot_identifier: Option<String>,
}

impl DeleteDbSnapshotInputBuilder {
    /// Sets the snapshot identifier.
    pub fn db_snapshot_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_snapshot_identifier = Some(input.into());
        self
    }

    /// Sets or clears the snapshot identifier.
    pub fn set_db_snapshot_identifier(mut self, input: Option<String>) -> Self {
        self.db_snapshot_identifier = input;
        self
    }

    /// Builds the [`DeleteDbSnapshotInput`].
    pub fn build(self) -> DeleteDbSnapshotInput {
        DeleteDbSnapshotInput {
            db_snapshot_identifier: self.db_snapshot_identifier,
        }
    }
}

/// Input for `DescribeDBSnapshots`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeDbSnapshotsInput {
    /// Restrict to snapshots of one instance.
    pub db_instance_identifier: Option<String>,
    /// Restrict to a single snapshot.
    pub db_snapshot_identifier: Option<String>,
    /// `automated`, `manual`, `shared`, `public`, or `awsbackup`.
    pub snapshot_type: Option<String>,
    /// Filters such as `db-snapshot-id` or `engine`.
    pub filters: Option<Vec<Filter>>,
    /// Page size, between 20 and 100.
    pub max_records: Option<i32>,
    /// Pagination token from a previous call.
    pub marker: Option<String>,
    /// Include snapshots shared from other accounts.
    pub include_shared: Option<bool>,
    /// Include public snapshots.
    pub include_public: Option<bool>,
    /// Restrict to snapshots of the instance with this resource ID.
    pub dbi_resource_id: Option<String>,
}

impl DescribeDbSnapshotsInput {
    /// Returns a builder for `DescribeDbSnapshotsInput`.
    pub fn builder() -> DescribeDbSnapshotsInputBuilder {
        DescribeDbSnapshotsInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_describe_db_snapshots(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`DescribeDbSnapshotsInput`].
#[derive(Clone, Debug, Default)]
pub struct DescribeDbSnapshotsInputBuilder {
    db_instance_identifier: Option<String>,
    db_snapshot_identifier: Option<String>,
    snapshot_type: Option<String>,
    filters: Option<Vec<Filter>>,
    max_records: Option<i32>,
    marker: Option<String>,
    include_shared: Option<bool>,
    include_public: Option<bool>,
    dbi_resource_id: Option<String>,
}

impl DescribeDbSnapshotsInputBuilder {
    /// Sets the instance identifier.
    pub fn db_instance_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(input.into());
        self
    }

    /// Sets or clears the instance identifier.
    pub fn set_db_instance_identifier(mut self, input: Option<String>) -> Self {
        self.db_instance_identifier = input;
        self
    }

    /// Sets the snapshot identifier.
    pub fn db_snapshot_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_snapshot_identifier = Some(input.into());
        self
    }

    /// Sets or clears the snapshot identifier.
    pub fn set_db_snapshot_identifier(mut self, input: Option<String>) -> Self {
        self.db_snapshot_identifier = input;
        self
    }

    /// Sets the snapshot type.
    pub fn snapshot_type(mut self, input: impl Into<String>) -> Self {
        self.snapshot_type = Some(input.into());
        self
    }

    /// Sets or clears the snapshot type.
    pub fn set_snapshot_type(mut self, input: Option<String>) -> Self {
        self.snapshot_type = input;
        self
    }

    /// Appends a filter.
    pub fn filters(mut self, input: Filter) -> Self {
        self.filters.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the filters.
    pub fn set_filters(mut self, input: Option<Vec<Filter>>) -> Self {
        self.filters = input;
        self
    }

    /// Sets the page size.
    pub fn max_records(mut self, input: i32) -> Self {
        self.max_records = Some(input);
        self
    }

    /// Sets or clears the page size.
    pub fn set_max_records(mut self, input: Option<i32>) -> Self {
        self.max_records = input;
        self
    }

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

    /// Sets whether shared snapshots are included.
    pub fn include_shared(mut self, input: bool) -> Self {
        self.include_shared = Some(input);
        self
    }

    /// Sets or clears the shared-snapshot flag.
    pub fn set_include_shared(mut self, input: Option<bool>) -> Self {
        self.include_shared = input;
        self
    }

    /// Sets whether public snapshots are included.
    pub fn include_public(mut self, input: bool) -> Self {
        self.include_public = Some(input);
        self
    }

    /// Sets or clears the public-snapshot flag.
    pub fn set_include_public(mut self, input: Option<bool>) -> Self {
        self.include_public = input;
        self
    }

    /// Sets the resource ID restriction.
    pub fn dbi_resource_id(mut self, input: impl Into<String>) -> Self {
        self.dbi_resource_id = Some(input.into());
        self
    }

    /// Sets or clears the resource ID restriction.
    pub fn set_dbi_resource_id(mut self, input: Option<String>) -> Self {
        self.dbi_resource_id = input;
        self
    }

    /// Builds the [`DescribeDbSnapshotsInput`].
    pub fn build(self) -> DescribeDbSnapshotsInput {
        DescribeDbSnapshotsInput {
            db_instance_identifier: self.db_instance_identifier,
            db_snapshot_identifier: self.db_snapshot_identifier,
            snapshot_type: self.snapshot_type,
            filters: self.filters,
            max_records: self.max_records,
            marker: self.marker,
            include_shared: self.include_shared,
            include_public: self.include_public,
            dbi_resource_id: self.dbi_resource_id,
        }
    }
}

/// Input for `CreateDBClusterSnapshot`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateDbClusterSnapshotInput {
    /// Identifier for the new snapshot.
    pub db_cluster_snapshot_identifier: Option<String>,
    /// Cluster to snapshot.
    pub db_cluster_identifier: Option<String>,
    /// Tags to attach to the snapshot.
    pub tags: Option<Vec<Tag>>,
}

impl CreateDbClusterSnapshotInput {
    /// Returns a builder for `CreateDbClusterSnapshotInput`.
    pub fn builder() -> CreateDbClusterSnapshotInputBuilder {
        CreateDbClusterSnapshotInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_create_db_cluster_snapshot(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`CreateDbClusterSnapshotInput`].
#[derive(Clone, Debug, Default)]
pub struct CreateDbClusterSnapshotInputBuilder {
    db_cluster_snapshot_identifier: Option<String>,
    db_cluster_identifier: Option<String>,
    tags: Option<Vec<Tag>>,
}

impl CreateDbClusterSnapshotInputBuilder {
    /// Sets the snapshot identifier.
    pub fn db_cluster_snapshot_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_snapshot_identifier = Some(input.into());
        self
    }

    /// Sets or clears the snapshot identifier.
    pub fn set_db_cluster_snapshot_identifier(mut self, input: Option<String>) -> Self {
        self.db_cluster_snapshot_identifier = input;
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

    /// Appends a tag.
    pub fn tags(mut self, input: Tag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the tags.
    pub fn set_tags(mut self, input: Option<Vec<Tag>>) -> Self {
        self.tags = input;
        self
    }

    /// Builds the [`CreateDbClusterSnapshotInput`].
    pub fn build(self) -> CreateDbClusterSnapshotInput {
        CreateDbClusterSnapshotInput {
            db_cluster_snapshot_identifier: self.db_cluster_snapshot_identifier,
            db_cluster_identifier: self.db_cluster_identifier,
            tags: self.tags,
        }
    }
}

/// Input for `CopyDBClusterSnapshot`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CopyDbClusterSnapshotInput {
    /// Snapshot to copy; for cross-region copies, the ARN of the source.
    pub source_db_cluster_snapshot_identifier: Option<String>,
    /// Identifier for the copy.
    pub target_db_cluster_snapshot_identifier: Option<String>,
    /// KMS key for the copy; required when copying an encrypted snapshot
    /// across regions.
    pub kms_key_id: Option<String>,
    /// Presigned `CopyDBClusterSnapshot` request; required for cross-region
    /// copies of encrypted snapshots.
    pub pre_signed_url: Option<String>,
    /// Copy the source snapshot's tags to the copy.
    pub copy_tags: Option<bool>,
    /// Tags to attach to the copy.
    pub tags: Option<Vec<Tag>>,
}

impl CopyDbClusterSnapshotInput {
    /// Returns a builder for `CopyDbClusterSnapshotInput`.
    pub fn builder() -> CopyDbClusterSnapshotInputBuilder {
        CopyDbClusterSnapshotInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_copy_db_cluster_snapshot(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`CopyDbClusterSnapshotInput`].
#[derive(Clone, Debug, Default)]
pub struct CopyDbClusterSnapshotInputBuilder {
    source_db_cluster_snapshot_identifier: Option<String>,
    target_db_cluster_snapshot_identifier: Option<String>,
    kms_key_id: Option<String>,
    pre_signed_url: Option<String>,
    copy_tags: Option<bool>,
    tags: Option<Vec<Tag>>,
}

impl CopyDbClusterSnapshotInputBuilder {
    /// Sets the source snapshot identifier.
    pub fn source_db_cluster_snapshot_identifier(mut self, input: impl Into<String>) -> Self {
        self.source_db_cluster_snapshot_identifier = Some(input.into());
        self
    }

    /// Sets or clears the source snapshot identifier.
    pub fn set_source_db_cluster_snapshot_identifier(mut self, input: Option<String>) -> Self {
        self.source_db_cluster_snapshot_identifier = input;
        self
    }

    /// Sets the target snapshot identifier.
    pub fn target_db_cluster_snapshot_identifier(mut self, input: impl Into<String>) -> Self {
        self.target_db_cluster_snapshot_identifier = Some(input.into());
        self
    }

    /// Sets or clears the target snapshot identifier.
    pub fn set_target_db_cluster_snapshot_identifier(mut self, input: Option<String>) -> Self {
        self.target_db_cluster_snapshot_identifier = input;
        self
    }

    /// Sets the KMS key for the copy.
    pub fn kms_key_id(mut self, input: impl Into<String>) -> Self {
        self.kms_key_id = Some(input.into());
        self
    }

    /// Sets or clears the KMS key for the copy.
    pub fn set_kms_key_id(mut self, input: Option<String>) -> Self {
        self.kms_key_id = input;
        self
    }

    /// Sets the presigned URL.
    pub fn pre_signed_url(mut self, input: impl Into<String>) -> Self {
        self.pre_signed_url = Some(input.into());
        self
    }

    /// Sets or clears the presigned URL.
    pub fn set_pre_signed_url(mut self, input: Option<String>) -> Self {
        self.pre_signed_url = input;
        self
    }

    /// Sets the copy-tags flag.
    pub fn copy_tags(mut self, input: bool) -> Self {
        self.copy_tags = Some(input);
        self
    }

    /// Sets or clears the copy-tags flag.
    pub fn set_copy_tags(mut self, input: Option<bool>) -> Self {
        self.copy_tags = input;
        self
    }

    /// Appends a tag.
    pub fn tags(mut self, input: Tag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the tags.
    pub fn set_tags(mut self, input: Option<Vec<Tag>>) -> Self {
        self.tags = input;
        self
    }

    /// Builds the [`CopyDbClusterSnapshotInput`].
    pub fn build(self) -> CopyDbClusterSnapshotInput {
        CopyDbClusterSnapshotInput {
            source_db_cluster_snapshot_identifier: self.source_db_cluster_snapshot_identifier,
            target_db_cluster_snapshot_identifier: self.target_db_cluster_snapshot_identifier,
            kms_key_id: self.kms_key_id,
            pre_signed_url: self.pre_signed_url,
            copy_tags: self.copy_tags,
            tags: self.tags,
        }
    }
}

/// Input for `DeleteDBClusterSnapshot`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteDbClusterSnapshotInput {
    /// Snapshot to delete; must be in the `available` state.
    pub db_cluster_snapshot_identifier: Option<String>,
}

impl DeleteDbClusterSnapshotInput {
    /// Returns a builder for `DeleteDbClusterSnapshotInput`.
    pub fn builder() -> DeleteDbClusterSnapshotInputBuilder {
        DeleteDbClusterSnapshotInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_delete_db_cluster_snapshot(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`DeleteDbClusterSnapshotInput`].
#[derive(Clone, Debug, Default)]
pub struct DeleteDbClusterSnapshotInputBuilder {
    db_cluster_snapshot_identifier: Option<String>,
}

impl DeleteDbClusterSnapshotInputBuilder {
    /// Sets the snapshot identifier.
    pub fn db_cluster_snapshot_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_snapshot_identifier = Some(input.into());
        self
    }

    /// Sets or clears the snapshot identifier.
    pub fn set_db_cluster_snapshot_identifier(mut self, input: Option<String>) -> Self {
        self.db_cluster_snapshot_identifier = input;
        self
    }

    /// Builds the [`DeleteDbClusterSnapshotInput`].
    pub fn build(self) -> DeleteDbClusterSnapshotInput {
        DeleteDbClusterSnapshotInput {
            db_cluster_snapshot_identifier: self.db_cluster_snapshot_identifier,
        }
    }
}

/// Input for `DescribeDBClusterSnapshots`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeDbClusterSnapshotsInput {
    /// Restrict to snapshots of one cluster.
    pub db_cluster_identifier: Option<String>,
    /// Restrict to a single snapshot.
    pub db_cluster_snapshot_identifier: Option<String>,
    /// `automated`, `manual`, `shared`, or `public`.
    pub snapshot_type: Option<String>,
    /// Filters such as `db-cluster-snapshot-id` or `engine`.
    pub filters: Option<Vec<Filter>>,
    /// Page size, between 20 and 100.
    pub max_records: Option<i32>,
    /// Pagination token from a previous call.
    pub marker: Option<String>,
    /// Include snapshots shared from other accounts.
    pub include_shared: Option<bool>,
    /// Include public snapshots.
    pub include_public: Option<bool>,
}

impl DescribeDbClusterSnapshotsInput {
    /// Returns a builder for `DescribeDbClusterSnapshotsInput`.
    pub fn builder() -> DescribeDbClusterSnapshotsInputBuilder {
        DescribeDbClusterSnapshotsInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_describe_db_cluster_snapshots(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`DescribeDbClusterSnapshotsInput`].
#[derive(Clone, Debug, Default)]
pub struct DescribeDbClusterSnapshotsInputBuilder {
    db_cluster_identifier: Option<String>,
    db_cluster_snapshot_identifier: Option<String>,
    snapshot_type: Option<String>,
    filters: Option<Vec<Filter>>,
    max_records: Option<i32>,
    marker: Option<String>,
    include_shared: Option<bool>,
    include_public: Option<bool>,
}

impl DescribeDbClusterSnapshotsInputBuilder {
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

    /// Sets the snapshot identifier.
    pub fn db_cluster_snapshot_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_snapshot_identifier = Some(input.into());
        self
    }

    /// Sets or clears the snapshot identifier.
    pub fn set_db_cluster_snapshot_identifier(mut self, input: Option<String>) -> Self {
        self.db_cluster_snapshot_identifier = input;
        self
    }

    /// Sets the snapshot type.
    pub fn snapshot_type(mut self, input: impl Into<String>) -> Self {
        self.snapshot_type = Some(input.into());
        self
    }

    /// Sets or clears the snapshot type.
    pub fn set_snapshot_type(mut self, input: Option<String>) -> Self {
        self.snapshot_type = input;
        self
    }

    /// Appends a filter.
    pub fn filters(mut self, input: Filter) -> Self {
        self.filters.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the filters.
    pub fn set_filters(mut self, input: Option<Vec<Filter>>) -> Self {
        self.filters = input;
        self
    }

    /// Sets the page size.
    pub fn max_records(mut self, input: i32) -> Self {
        self.max_records = Some(input);
        self
    }

    /// Sets or clears the page size.
    pub fn set_max_records(mut self, input: Option<i32>) -> Self {
        self.max_records = input;
        self
    }

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

    /// Sets whether shared snapshots are included.
    pub fn include_shared(mut self, input: bool) -> Self {
        self.include_shared = Some(input);
        self
    }

    /// Sets or clears the shared-snapshot flag.
    pub fn set_include_shared(mut self, input: Option<bool>) -> Self {
        self.include_shared = input;
        self
    }

    /// Sets whether public snapshots are included.
    pub fn include_public(mut self, input: bool) -> Self {
        self.include_public = Some(input);
        self
    }

    /// Sets or clears the public-snapshot flag.
    pub fn set_include_public(mut self, input: Option<bool>) -> Self {
        self.include_public = input;
        self
    }

    /// Builds the [`DescribeDbClusterSnapshotsInput`].
    pub fn build(self) -> DescribeDbClusterSnapshotsInput {
        DescribeDbClusterSnapshotsInput {
            db_cluster_identifier: self.db_cluster_identifier,
            db_cluster_snapshot_identifier: self.db_cluster_snapshot_identifier,
            snapshot_type: self.snapshot_type,
            filters: self.filters,
            max_records: self.max_records,
            marker: self.marker,
            include_shared: self.include_shared,
            include_public: self.include_public,
        }
    }
}

/// Input for `DeleteDBCluster`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteDbClusterInput {
    /// Cluster to delete.
    pub db_cluster_identifier: Option<String>,
    /// Skip the final snapshot; when `false`, `final_db_snapshot_identifier`
    /// must be set.
    pub skip_final_snapshot: Option<bool>,
    /// Identifier for the final snapshot.
    pub final_db_snapshot_identifier: Option<String>,
}

impl DeleteDbClusterInput {
    /// Returns a builder for `DeleteDbClusterInput`.
    pub fn builder() -> DeleteDbClusterInputBuilder {
        DeleteDbClusterInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_delete_db_cluster(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`DeleteDbClusterInput`].
#[derive(Clone, Debug, Default)]
pub struct DeleteDbClusterInputBuilder {
    db_cluster_identifier: Option<String>,
    skip_final_snapshot: Option<bool>,
    final_db_snapshot_identifier: Option<String>,
}

impl DeleteDbClusterInputBuilder {
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

    /// Sets the skip-final-snapshot flag.
    pub fn skip_final_snapshot(mut self, input: bool) -> Self {
        self.skip_final_snapshot = Some(input);
        self
    }

    /// Sets or clears the skip-final-snapshot flag.
    pub fn set_skip_final_snapshot(mut self, input: Option<bool>) -> Self {
        self.skip_final_snapshot = input;
        self
    }

    /// Sets the final snapshot identifier.
    pub fn final_db_snapshot_identifier(mut self, input: impl Into<String>) -> Self {
        self.final_db_snapshot_identifier = Some(input.into());
        self
    }

    /// Sets or clears the final snapshot identifier.
    pub fn set_final_db_snapshot_identifier(mut self, input: Option<String>) -> Self {
        self.final_db_snapshot_identifier = input;
        self
    }

    /// Builds the [`DeleteDbClusterInput`].
    pub fn build(self) -> DeleteDbClusterInput {
        DeleteDbClusterInput {
            db_cluster_identifier: self.db_cluster_identifier,
            skip_final_snapshot: self.skip_final_snapshot,
            final_db_snapshot_identifier: self.final_db_snapshot_identifier,
        }
    }
}

/// Input for `CreateDBClusterEndpoint`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateDbClusterEndpointInput {
    /// Cluster the endpoint belongs to.
    pub db_cluster_identifier: Option<String>,
    /// Identifier for the new endpoint.
    pub db_cluster_endpoint_identifier: Option<String>,
    /// `READER` or `ANY`.
    pub endpoint_type: Option<String>,
    /// Instances served by the endpoint.
    pub static_members: Option<Vec<String>>,
    /// Instances excluded from the endpoint when no static members are set.
    pub excluded_members: Option<Vec<String>>,
    /// Tags to attach to the endpoint.
    pub tags: Option<Vec<Tag>>,
}

impl CreateDbClusterEndpointInput {
    /// Returns a builder for `CreateDbClusterEndpointInput`.
    pub fn builder() -> CreateDbClusterEndpointInputBuilder {
        CreateDbClusterEndpointInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_create_db_cluster_endpoint(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`CreateDbClusterEndpointInput`].
#[derive(Clone, Debug, Default)]
pub struct CreateDbClusterEndpointInputBuilder {
    db_cluster_identifier: Option<String>,
    db_cluster_endpoint_identifier: Option<String>,
    endpoint_type: Option<String>,
    static_members: Option<Vec<String>>,
    excluded_members: Option<Vec<String>>,
    tags: Option<Vec<Tag>>,
}

impl CreateDbClusterEndpointInputBuilder {
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

    /// Appends a tag.
    pub fn tags(mut self, input: Tag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the tags.
    pub fn set_tags(mut self, input: Option<Vec<Tag>>) -> Self {
        self.tags = input;
        self
    }

    /// Builds the [`CreateDbClusterEndpointInput`].
    pub fn build(self) -> CreateDbClusterEndpointInput {
        CreateDbClusterEndpointInput {
            db_cluster_identifier: self.db_cluster_identifier,
            db_cluster_endpoint_identifier: self.db_cluster_endpoint_identifier,
            endpoint_type: self.endpoint_type,
            static_members: self.static_members,
            excluded_members: self.excluded_members,
            tags: self.tags,
        }
    }
}

/// Input for `DescribeDBClusterEndpoints`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeDbClusterEndpointsInput {
    /// Restrict to endpoints of one cluster.
    pub db_cluster_identifier: Option<String>,
    /// Restrict to a single endpoint.
    pub db_cluster_endpoint_identifier: Option<String>,
    /// Filters such as `db-cluster-endpoint-type`.
    pub filters: Option<Vec<Filter>>,
    /// Page size, between 20 and 100.
    pub max_records: Option<i32>,
    /// Pagination token from a previous call.
    pub marker: Option<String>,
}

impl DescribeDbClusterEndpointsInput {
    /// Returns a builder for `DescribeDbClusterEndpointsInput`.
    pub fn builder() -> DescribeDbClusterEndpointsInputBuilder {
        DescribeDbClusterEndpointsInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_describe_db_cluster_endpoints(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`DescribeDbClusterEndpointsInput`].
#[derive(Clone, Debug, Default)]
pub struct DescribeDbClusterEndpointsInputBuilder {
    db_cluster_identifier: Option<String>,
    db_cluster_endpoint_identifier: Option<String>,
    filters: Option<Vec<Filter>>,
    max_records: Option<i32>,
    marker: Option<String>,
}

impl DescribeDbClusterEndpointsInputBuilder {
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

    /// Appends a filter.
    pub fn filters(mut self, input: Filter) -> Self {
        self.filters.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the filters.
    pub fn set_filters(mut self, input: Option<Vec<Filter>>) -> Self {
        self.filters = input;
        self
    }

    /// Sets the page size.
    pub fn max_records(mut self, input: i32) -> Self {
        self.max_records = Some(input);
        self
    }

    /// Sets or clears the page size.
    pub fn set_max_records(mut self, input: Option<i32>) -> Self {
        self.max_records = input;
        self
    }

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

    /// Builds the [`DescribeDbClusterEndpointsInput`].
    pub fn build(self) -> DescribeDbClusterEndpointsInput {
        DescribeDbClusterEndpointsInput {
            db_cluster_identifier: self.db_cluster_identifier,
            db_cluster_endpoint_identifier: self.db_cluster_endpoint_identifier,
            filters: self.filters,
            max_records: self.max_records,
            marker: self.marker,
        }
    }
}

/// Input for `ModifyDBClusterEndpoint`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ModifyDbClusterEndpointInput {
    /// Endpoint to modify.
    pub db_cluster_endpoint_identifier: Option<String>,
    /// `READER` or `ANY`.
    pub endpoint_type: Option<String>,
    /// Instances served by the endpoint.
    pub static_members: Option<Vec<String>>,
    /// Instances excluded from the endpoint when no static members are set.
    pub excluded_members: Option<Vec<String>>,
}

impl ModifyDbClusterEndpointInput {
    /// Returns a builder for `ModifyDbClusterEndpointInput`.
    pub fn builder() -> ModifyDbClusterEndpointInputBuilder {
        ModifyDbClusterEndpointInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_modify_db_cluster_endpoint(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`ModifyDbClusterEndpointInput`].
#[derive(Clone, Debug, Default)]
pub struct ModifyDbClusterEndpointInputBuilder {
    db_cluster_endpoint_identifier: Option<String>,
    endpoint_type: Option<String>,
    static_members: Option<Vec<String>>,
    excluded_members: Option<Vec<String>>,
}

impl ModifyDbClusterEndpointInputBuilder {
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

    /// Builds the [`ModifyDbClusterEndpointInput`].
    pub fn build(self) -> ModifyDbClusterEndpointInput {
        ModifyDbClusterEndpointInput {
            db_cluster_endpoint_identifier: self.db_cluster_endpoint_identifier,
            endpoint_type: self.endpoint_type,
            static_members: self.static_members,
            excluded_members: self.excluded_members,
        }
    }
}

/// Input for `DeleteDBClusterEndpoint`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteDbClusterEndpointInput {
    /// Endpoint to delete.
    pub db_cluster_endpoint_identifier: Option<String>,
}

impl DeleteDbClusterEndpointInput {
    /// Returns a builder for `DeleteDbClusterEndpointInput`.
    pub fn builder() -> DeleteDbClusterEndpointInputBuilder {
        DeleteDbClusterEndpointInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_delete_db_cluster_endpoint(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`DeleteDbClusterEndpointInput`].
#[derive(Clone, Debug, Default)]
pub struct DeleteDbClusterEndpointInputBuilder {
    db_cluster_endpoint_identifier: Option<String>,
}

impl DeleteDbClusterEndpointInputBuilder {
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

    /// Builds the [`DeleteDbClusterEndpointInput`].
    pub fn build(self) -> DeleteDbClusterEndpointInput {
        DeleteDbClusterEndpointInput {
            db_cluster_endpoint_identifier: self.db_cluster_endpoint_identifier,
        }
    }
}

/// Input for `CreateDBInstance`.
///
/// `Debug` redacts the master and TDE passwords.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateDbInstanceInput {
    /// Meaning depends on the engine: initial database name, or Oracle SID.
    pub db_name: Option<String>,
    /// Identifier for the new instance.
    pub db_instance_identifier: Option<String>,
    /// Storage to allocate, in gibibytes.
    pub allocated_storage: Option<i32>,
    /// Compute and memory class, e.g. `db.m5.large`.
    pub db_instance_class: Option<String>,
    /// Database engine.
    pub engine: Option<String>,
    /// Master username.
    pub master_username: Option<String>,
    /// Master password.
    pub master_user_password: Option<String>,
    /// Classic DB security groups to associate.
    pub db_security_groups: Option<Vec<String>>,
    /// VPC security groups to associate.
    pub vpc_security_group_ids: Option<Vec<String>>,
    /// Availability Zone to place the instance in.
    pub availability_zone: Option<String>,
    /// Subnet group for the instance.
    pub db_subnet_group_name: Option<String>,
    /// Weekly maintenance window.
    pub preferred_maintenance_window: Option<String>,
    /// Parameter group to apply.
    pub db_parameter_group_name: Option<String>,
    /// Days to retain automated backups; 0 disables them.
    pub backup_retention_period: Option<i32>,
    /// Daily backup window.
    pub preferred_backup_window: Option<String>,
    /// Port the engine listens on.
    pub port: Option<i32>,
    /// Create a Multi-AZ deployment.
    pub multi_az: Option<bool>,
    /// Engine version.
    pub engine_version: Option<String>,
    /// Apply minor engine upgrades automatically.
    pub auto_minor_version_upgrade: Option<bool>,
    /// License model.
    pub license_model: Option<String>,
    /// Provisioned IOPS.
    pub iops: Option<i32>,
    /// Option group to associate.
    pub option_group_name: Option<String>,
    /// Character set, for engines that support one.
    pub character_set_name: Option<String>,
    /// Give the instance a public DNS name.
    pub publicly_accessible: Option<bool>,
    /// Tags to attach.
    pub tags: Option<Vec<Tag>>,
    /// Cluster the instance joins, for Aurora.
    pub db_cluster_identifier: Option<String>,
    /// Storage type.
    pub storage_type: Option<String>,
    /// ARN of the key store for TDE encryption.
    pub tde_credential_arn: Option<String>,
    /// Password for the TDE key store.
    pub tde_credential_password: Option<String>,
    /// Encrypt storage at rest.
    pub storage_encrypted: Option<bool>,
    /// KMS key for storage encryption.
    pub kms_key_id: Option<String>,
    /// Active Directory domain to join.
    pub domain: Option<String>,
    /// Copy tags to snapshots.
    pub copy_tags_to_snapshot: Option<bool>,
    /// Enhanced Monitoring interval, in seconds.
    pub monitoring_interval: Option<i32>,
    /// IAM role that publishes Enhanced Monitoring metrics.
    pub monitoring_role_arn: Option<String>,
    /// IAM role used when joining the domain.
    pub domain_iam_role_name: Option<String>,
    /// Failover priority; lower values fail over first.
    pub promotion_tier: Option<i32>,
    /// Time zone, for engines that support setting one.
    pub timezone: Option<String>,
    /// Enable IAM database authentication.
    pub enable_iam_database_authentication: Option<bool>,
    /// Enable Performance Insights.
    pub enable_performance_insights: Option<bool>,
    /// KMS key encrypting Performance Insights data.
    pub performance_insights_kms_key_id: Option<String>,
    /// Days to retain Performance Insights data.
    pub performance_insights_retention_period: Option<i32>,
    /// Log types to export to CloudWatch Logs.
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,
    /// Processor features of the instance class.
    pub processor_features: Option<Vec<ProcessorFeature>>,
    /// Enable deletion protection.
    pub deletion_protection: Option<bool>,
    /// Storage autoscaling ceiling, in gibibytes.
    pub max_allocated_storage: Option<i32>,
}

impl CreateDbInstanceInput {
    /// Returns a builder for `CreateDbInstanceInput`.
    pub fn builder() -> CreateDbInstanceInputBuilder {
        CreateDbInstanceInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_create_db_instance(self)?;
        build_query_request(config, body)
    }
}

impl std::fmt::Debug for CreateDbInstanceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateDbInstanceInput")
            .field("db_name", &self.db_name)
            .field("db_instance_identifier", &self.db_instance_identifier)
            .field("allocated_storage", &self.allocated_storage)
            .field("db_instance_class", &self.db_instance_class)
            .field("engine", &self.engine)
            .field("master_username", &self.master_username)
            .field("master_user_password", &"*** Sensitive Data Redacted ***")
            .field("db_security_groups", &self.db_security_groups)
            .field("vpc_security_group_ids", &self.vpc_security_group_ids)
            .field("availability_zone", &self.availability_zone)
            .field("db_subnet_group_name", &self.db_subnet_group_name)
            .field(
                "preferred_maintenance_window",
                &self.preferred_maintenance_window,
            )
            .field("db_parameter_group_name", &self.db_parameter_group_name)
            .field("backup_retention_period", &self.backup_retention_period)
            .field("preferred_backup_window", &self.preferred_backup_window)
            .field("port", &self.port)
            .field("multi_az", &self.multi_az)
            .field("engine_version", &self.engine_version)
            .field("auto_minor_version_upgrade", &self.auto_minor_version_upgrade)
            .field("license_model", &self.license_model)
            .field("iops", &self.iops)
            .field("option_group_name", &self.option_group_name)
            .field("character_set_name", &self.character_set_name)
            .field("publicly_accessible", &self.publicly_accessible)
            .field("tags", &self.tags)
            .field("db_cluster_identifier", &self.db_cluster_identifier)
            .field("storage_type", &self.storage_type)
            .field("tde_credential_arn", &self.tde_credential_arn)
            .field("tde_credential_password", &"*** Sensitive Data Redacted ***")
            .field("storage_encrypted", &self.storage_encrypted)
            .field("kms_key_id", &self.kms_key_id)
            .field("domain", &self.domain)
            .field("copy_tags_to_snapshot", &self.copy_tags_to_snapshot)
            .field("monitoring_interval", &self.monitoring_interval)
            .field("monitoring_role_arn", &self.monitoring_role_arn)
            .field("domain_iam_role_name", &self.domain_iam_role_name)
            .field("promotion_tier", &self.promotion_tier)
            .field("timezone", &self.timezone)
            .field(
                "enable_iam_database_authentication",
                &self.enable_iam_database_authentication,
            )
            .field(
                "enable_performance_insights",
                &self.enable_performance_insights,
            )
            .field(
                "performance_insights_kms_key_id",
                &self.performance_insights_kms_key_id,
            )
            .field(
                "performance_insights_retention_period",
                &self.performance_insights_retention_period,
            )
            .field(
                "enable_cloudwatch_logs_exports",
                &self.enable_cloudwatch_logs_exports,
            )
            .field("processor_features", &self.processor_features)
            .field("deletion_protection", &self.deletion_protection)
            .field("max_allocated_storage", &self.max_allocated_storage)
            .finish()
    }
}

/// Builder for [`CreateDbInstanceInput`].
#[derive(Clone, Default)]
pub struct CreateDbInstanceInputBuilder {
    db_name: Option<String>,
    db_instance_identifier: Option<String>,
    allocated_storage: Option<i32>,
    db_instance_class: Option<String>,
    engine: Option<String>,
    master_username: Option<String>,
    master_user_password: Option<String>,
    db_security_groups: Option<Vec<String>>,
    vpc_security_group_ids: Option<Vec<String>>,
    availability_zone: Option<String>,
    db_subnet_group_name: Option<String>,
    preferred_maintenance_window: Option<String>,
    db_parameter_group_name: Option<String>,
    backup_retention_period: Option<i32>,
    preferred_backup_window: Option<String>,
    port: Option<i32>,
    multi_az: Option<bool>,
    engine_version: Option<String>,
    auto_minor_version_upgrade: Option<bool>,
    license_model: Option<String>,
    iops: Option<i32>,
    option_group_name: Option<String>,
    character_set_name: Option<String>,
    publicly_accessible: Option<bool>,
    tags: Option<Vec<Tag>>,
    db_cluster_identifier: Option<String>,
    storage_type: Option<String>,
    tde_credential_arn: Option<String>,
    tde_credential_password: Option<String>,
    storage_encrypted: Option<bool>,
    kms_key_id: Option<String>,
    domain: Option<String>,
    copy_tags_to_snapshot: Option<bool>,
    monitoring_interval: Option<i32>,
    monitoring_role_arn: Option<String>,
    domain_iam_role_name: Option<String>,
    promotion_tier: Option<i32>,
    timezone: Option<String>,
    enable_iam_database_authentication: Option<bool>,
    enable_performance_insights: Option<bool>,
    performance_insights_kms_key_id: Option<String>,
    performance_insights_retention_period: Option<i32>,
    enable_cloudwatch_logs_exports: Option<Vec<String>>,
    processor_features: Option<Vec<ProcessorFeature>>,
    deletion_protection: Option<bool>,
    max_allocated_storage: Option<i32>,
}

impl std::fmt::Debug for CreateDbInstanceInputBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateDbInstanceInputBuilder")
            .field("db_instance_identifier", &self.db_instance_identifier)
            .field("master_user_password", &"*** Sensitive Data Redacted ***")
            .field("tde_credential_password", &"*** Sensitive Data Redacted ***")
            .finish_non_exhaustive()
    }
}

impl CreateDbInstanceInputBuilder {
    /// Sets the database name.
    pub fn db_name(mut self, input: impl Into<String>) -> Self {
        self.db_name = Some(input.into());
        self
    }

    /// Sets or clears the database name.
    pub fn set_db_name(mut self, input: Option<String>) -> Self {
        self.db_name = input;
        self
    }

    /// Sets the instance identifier.
    pub fn db_instance_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(input.into());
        self
    }

    /// Sets or clears the instance identifier.
    pub fn set_db_instance_identifier(mut self, input: Option<String>) -> Self {
        self.db_instance_identifier = input;
        self
    }

    /// Sets the allocated storage.
    pub fn allocated_storage(mut self, input: i32) -> Self {
        self.allocated_storage = Some(input);
        self
    }

    /// Sets or clears the allocated storage.
    pub fn set_allocated_storage(mut self, input: Option<i32>) -> Self {
        self.allocated_storage = input;
        self
    }

    /// Sets the instance class.
    pub fn db_instance_class(mut self, input: impl Into<String>) -> Self {
        self.db_instance_class = Some(input.into());
        self
    }

    /// Sets or clears the instance class.
    pub fn set_db_instance_class(mut self, input: Option<String>) -> Self {
        self.db_instance_class = input;
        self
    }

    /// Sets the engine.
    pub fn engine(mut self, input: impl Into<String>) -> Self {
        self.engine = Some(input.into());
        self
    }

    /// Sets or clears the engine.
    pub fn set_engine(mut self, input: Option<String>) -> Self {
        self.engine = input;
        self
    }

    /// Sets the master username.
    pub fn master_username(mut self, input: impl Into<String>) -> Self {
        self.master_username = Some(input.into());
        self
    }

    /// Sets or clears the master username.
    pub fn set_master_username(mut self, input: Option<String>) -> Self {
        self.master_username = input;
        self
    }

    /// Sets the master password.
    pub fn master_user_password(mut self, input: impl Into<String>) -> Self {
        self.master_user_password = Some(input.into());
        self
    }

    /// Sets or clears the master password.
    pub fn set_master_user_password(mut self, input: Option<String>) -> Self {
        self.master_user_password = input;
        self
    }

    /// Appends a classic DB security group.
    pub fn db_security_groups(mut self, input: impl Into<String>) -> Self {
        self.db_security_groups
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the classic DB security groups.
    pub fn set_db_security_groups(mut self, input: Option<Vec<String>>) -> Self {
        self.db_security_groups = input;
        self
    }

    /// Appends a VPC security group ID.
    pub fn vpc_security_group_ids(mut self, input: impl Into<String>) -> Self {
        self.vpc_security_group_ids
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the VPC security group IDs.
    pub fn set_vpc_security_group_ids(mut self, input: Option<Vec<String>>) -> Self {
        self.vpc_security_group_ids = input;
        self
    }

    /// Sets the Availability Zone.
    pub fn availability_zone(mut self, input: impl Into<String>) -> Self {
        self.availability_zone = Some(input.into());
        self
    }

    /// Sets or clears the Availability Zone.
    pub fn set_availability_zone(mut self, input: Option<String>) -> Self {
        self.availability_zone = input;
        self
    }

    /// Sets the subnet group name.
    pub fn db_subnet_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(input.into());
        self
    }

    /// Sets or clears the subnet group name.
    pub fn set_db_subnet_group_name(mut self, input: Option<String>) -> Self {
        self.db_subnet_group_name = input;
        self
    }

    /// Sets the maintenance window.
    pub fn preferred_maintenance_window(mut self, input: impl Into<String>) -> Self {
        self.preferred_maintenance_window = Some(input.into());
        self
    }

    /// Sets or clears the maintenance window.
    pub fn set_preferred_maintenance_window(mut self, input: Option<String>) -> Self {
        self.preferred_maintenance_window = input;
        self
    }

    /// Sets the parameter group name.
    pub fn db_parameter_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_parameter_group_name = Some(input.into());
        self
    }

    /// Sets or clears the parameter group name.
    pub fn set_db_parameter_group_name(mut self, input: Option<String>) -> Self {
        self.db_parameter_group_name = input;
        self
    }

    /// Sets the backup retention period.
    pub fn backup_retention_period(mut self, input: i32) -> Self {
        self.backup_retention_period = Some(input);
        self
    }

    /// Sets or clears the backup retention period.
    pub fn set_backup_retention_period(mut self, input: Option<i32>) -> Self {
        self.backup_retention_period = input;
        self
    }

    /// Sets the backup window.
    pub fn preferred_backup_window(mut self, input: impl Into<String>) -> Self {
        self.preferred_backup_window = Some(input.into());
        self
    }

    /// Sets or clears the backup window.
    pub fn set_preferred_backup_window(mut self, input: Option<String>) -> Self {
        self.preferred_backup_window = input;
        self
    }

    /// Sets the port.
    pub fn port(mut self, input: i32) -> Self {
        self.port = Some(input);
        self
    }

    /// Sets or clears the port.
    pub fn set_port(mut self, input: Option<i32>) -> Self {
        self.port = input;
        self
    }

    /// Sets the Multi-AZ flag.
    pub fn multi_az(mut self, input: bool) -> Self {
        self.multi_az = Some(input);
        self
    }

    /// Sets or clears the Multi-AZ flag.
    pub fn set_multi_az(mut self, input: Option<bool>) -> Self {
        self.multi_az = input;
        self
    }

    /// Sets the engine version.
    pub fn engine_version(mut self, input: impl Into<String>) -> Self {
        self.engine_version = Some(input.into());
        self
    }

    /// Sets or clears the engine version.
    pub fn set_engine_version(mut self, input: Option<String>) -> Self {
        self.engine_version = input;
        self
    }

    /// Sets the auto minor version upgrade flag.
    pub fn auto_minor_version_upgrade(mut self, input: bool) -> Self {
        self.auto_minor_version_upgrade = Some(input);
        self
    }

    /// Sets or clears the auto minor version upgrade flag.
    pub fn set_auto_minor_version_upgrade(mut self, input: Option<bool>) -> Self {
        self.auto_minor_version_upgrade = input;
        self
    }

    /// Sets the license model.
    pub fn license_model(mut self, input: impl Into<String>) -> Self {
        self.license_model = Some(input.into());
        self
    }

    /// Sets or clears the license model.
    pub fn set_license_model(mut self, input: Option<String>) -> Self {
        self.license_model = input;
        self
    }

    /// Sets the provisioned IOPS.
    pub fn iops(mut self, input: i32) -> Self {
        self.iops = Some(input);
        self
    }

    /// Sets or clears the provisioned IOPS.
    pub fn set_iops(mut self, input: Option<i32>) -> Self {
        self.iops = input;
        self
    }

    /// Sets the option group name.
    pub fn option_group_name(mut self, input: impl Into<String>) -> Self {
        self.option_group_name = Some(input.into());
        self
    }

    /// Sets or clears the option group name.
    pub fn set_option_group_name(mut self, input: Option<String>) -> Self {
        self.option_group_name = input;
        self
    }

    /// Sets the character set name.
    pub fn character_set_name(mut self, input: impl Into<String>) -> Self {
        self.character_set_name = Some(input.into());
        self
    }

    /// Sets or clears the character set name.
    pub fn set_character_set_name(mut self, input: Option<String>) -> Self {
        self.character_set_name = input;
        self
    }

    /// Sets the public accessibility flag.
    pub fn publicly_accessible(mut self, input: bool) -> Self {
        self.publicly_accessible = Some(input);
        self
    }

    /// Sets or clears the public accessibility flag.
    pub fn set_publicly_accessible(mut self, input: Option<bool>) -> Self {
        self.publicly_accessible = input;
        self
    }

    /// Appends a tag.
    pub fn tags(mut self, input: Tag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the tags.
    pub fn set_tags(mut self, input: Option<Vec<Tag>>) -> Self {
        self.tags = input;
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

    /// Sets the storage type.
    pub fn storage_type(mut self, input: impl Into<String>) -> Self {
        self.storage_type = Some(input.into());
        self
    }

    /// Sets or clears the storage type.
    pub fn set_storage_type(mut self, input: Option<String>) -> Self {
        self.storage_type = input;
        self
    }

    /// Sets the TDE credential ARN.
    pub fn tde_credential_arn(mut self, input: impl Into<String>) -> Self {
        self.tde_credential_arn = Some(input.into());
        self
    }

    /// Sets or clears the TDE credential ARN.
    pub fn set_tde_credential_arn(mut self, input: Option<String>) -> Self {
        self.tde_credential_arn = input;
        self
    }

    /// Sets the TDE key store password.
    pub fn tde_credential_password(mut self, input: impl Into<String>) -> Self {
        self.tde_credential_password = Some(input.into());
        self
    }

    /// Sets or clears the TDE key store password.
    pub fn set_tde_credential_password(mut self, input: Option<String>) -> Self {
        self.tde_credential_password = input;
        self
    }

    /// Sets the storage encryption flag.
    pub fn storage_encrypted(mut self, input: bool) -> Self {
        self.storage_encrypted = Some(input);
        self
    }

    /// Sets or clears the storage encryption flag.
    pub fn set_storage_encrypted(mut self, input: Option<bool>) -> Self {
        self.storage_encrypted = input;
        self
    }

    /// Sets the KMS key ID.
    pub fn kms_key_id(mut self, input: impl Into<String>) -> Self {
        self.kms_key_id = Some(input.into());
        self
    }

    /// Sets or clears the KMS key ID.
    pub fn set_kms_key_id(mut self, input: Option<String>) -> Self {
        self.kms_key_id = input;
        self
    }

    /// Sets the domain.
    pub fn domain(mut self, input: impl Into<String>) -> Self {
        self.domain = Some(input.into());
        self
    }

    /// Sets or clears the domain.
    pub fn set_domain(mut self, input: Option<String>) -> Self {
        self.domain = input;
        self
    }

    /// Sets the copy-tags-to-snapshot flag.
    pub fn copy_tags_to_snapshot(mut self, input: bool) -> Self {
        self.copy_tags_to_snapshot = Some(input);
        self
    }

    /// Sets or clears the copy-tags-to-snapshot flag.
    pub fn set_copy_tags_to_snapshot(mut self, input: Option<bool>) -> Self {
        self.copy_tags_to_snapshot = input;
        self
    }

    /// Sets the monitoring interval.
    pub fn monitoring_interval(mut self, input: i32) -> Self {
        self.monitoring_interval = Some(input);
        self
    }

    /// Sets or clears the monitoring interval.
    pub fn set_monitoring_interval(mut self, input: Option<i32>) -> Self {
        self.monitoring_interval = input;
        self
    }

    /// Sets the monitoring role ARN.
    pub fn monitoring_role_arn(mut self, input: impl Into<String>) -> Self {
        self.monitoring_role_arn = Some(input.into());
        self
    }

    /// Sets or clears the monitoring role ARN.
    pub fn set_monitoring_role_arn(mut self, input: Option<String>) -> Self {
        self.monitoring_role_arn = input;
        self
    }

    /// Sets the domain IAM role name.
    pub fn domain_iam_role_name(mut self, input: impl Into<String>) -> Self {
        self.domain_iam_role_name = Some(input.into());
        self
    }

    /// Sets or clears the domain IAM role name.
    pub fn set_domain_iam_role_name(mut self, input: Option<String>) -> Self {
        self.domain_iam_role_name = input;
        self
    }

    /// Sets the promotion tier.
    pub fn promotion_tier(mut self, input: i32) -> Self {
        self.promotion_tier = Some(input);
        self
    }

    /// Sets or clears the promotion tier.
    pub fn set_promotion_tier(mut self, input: Option<i32>) -> Self {
        self.promotion_tier = input;
        self
    }

    /// Sets the time zone.
    pub fn timezone(mut self, input: impl Into<String>) -> Self {
        self.timezone = Some(input.into());
        self
    }

    /// Sets or clears the time zone.
    pub fn set_timezone(mut self, input: Option<String>) -> Self {
        self.timezone = input;
        self
    }

    /// Sets the IAM database authentication flag.
    pub fn enable_iam_database_authentication(mut self, input: bool) -> Self {
        self.enable_iam_database_authentication = Some(input);
        self
    }

    /// Sets or clears the IAM database authentication flag.
    pub fn set_enable_iam_database_authentication(mut self, input: Option<bool>) -> Self {
        self.enable_iam_database_authentication = input;
        self
    }

    /// Sets the Performance Insights flag.
    pub fn enable_performance_insights(mut self, input: bool) -> Self {
        self.enable_performance_insights = Some(input);
        self
    }

    /// Sets or clears the Performance Insights flag.
    pub fn set_enable_performance_insights(mut self, input: Option<bool>) -> Self {
        self.enable_performance_insights = input;
        self
    }

    /// Sets the Performance Insights KMS key ID.
    pub fn performance_insights_kms_key_id(mut self, input: impl Into<String>) -> Self {
        self.performance_insights_kms_key_id = Some(input.into());
        self
    }

    /// Sets or clears the Performance Insights KMS key ID.
    pub fn set_performance_insights_kms_key_id(mut self, input: Option<String>) -> Self {
        self.performance_insights_kms_key_id = input;
        self
    }

    /// Sets the Performance Insights retention period.
    pub fn performance_insights_retention_period(mut self, input: i32) -> Self {
        self.performance_insights_retention_period = Some(input);
        self
    }

    /// Sets or clears the Performance Insights retention period.
    pub fn set_performance_insights_retention_period(mut self, input: Option<i32>) -> Self {
        self.performance_insights_retention_period = input;
        self
    }

    /// Appends a log type to export.
    pub fn enable_cloudwatch_logs_exports(mut self, input: impl Into<String>) -> Self {
        self.enable_cloudwatch_logs_exports
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the log types to export.
    pub fn set_enable_cloudwatch_logs_exports(mut self, input: Option<Vec<String>>) -> Self {
        self.enable_cloudwatch_logs_exports = input;
        self
    }

    /// Appends a processor feature.
    pub fn processor_features(mut self, input: ProcessorFeature) -> Self {
        self.processor_features
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// Replaces the processor features.
    pub fn set_processor_features(mut self, input: Option<Vec<ProcessorFeature>>) -> Self {
        self.processor_features = input;
        self
    }

    /// Sets the deletion protection flag.
    pub fn deletion_protection(mut self, input: bool) -> Self {
        self.deletion_protection = Some(input);
        self
    }

    /// Sets or clears the deletion protection flag.
    pub fn set_deletion_protection(mut self, input: Option<bool>) -> Self {
        self.deletion_protection = input;
        self
    }

    /// Sets the storage autoscaling ceiling.
    pub fn max_allocated_storage(mut self, input: i32) -> Self {
        self.max_allocated_storage = Some(input);
        self
    }

    /// Sets or clears the storage autoscaling ceiling.
    pub fn set_max_allocated_storage(mut self, input: Option<i32>) -> Self {
        self.max_allocated_storage = input;
        self
    }

    /// Builds the [`CreateDbInstanceInput`].
    pub fn build(self) -> CreateDbInstanceInput {
        CreateDbInstanceInput {
            db_name: self.db_name,
            db_instance_identifier: self.db_instance_identifier,
            allocated_storage: self.allocated_storage,
            db_instance_class: self.db_instance_class,
            engine: self.engine,
            master_username: self.master_username,
            master_user_password: self.master_user_password,
            db_security_groups: self.db_security_groups,
            vpc_security_group_ids: self.vpc_security_group_ids,
            availability_zone: self.availability_zone,
            db_subnet_group_name: self.db_subnet_group_name,
            preferred_maintenance_window: self.preferred_maintenance_window,
            db_parameter_group_name: self.db_parameter_group_name,
            backup_retention_period: self.backup_retention_period,
            preferred_backup_window: self.preferred_backup_window,
            port: self.port,
            multi_az: self.multi_az,
            engine_version: self.engine_version,
            auto_minor_version_upgrade: self.auto_minor_version_upgrade,
            license_model: self.license_model,
            iops: self.iops,
            option_group_name: self.option_group_name,
            character_set_name: self.character_set_name,
            publicly_accessible: self.publicly_accessible,
            tags: self.tags,
            db_cluster_identifier: self.db_cluster_identifier,
            storage_type: self.storage_type,
            tde_credential_arn: self.tde_credential_arn,
            tde_credential_password: self.tde_credential_password,
            storage_encrypted: self.storage_encrypted,
            kms_key_id: self.kms_key_id,
            domain: self.domain,
            copy_tags_to_snapshot: self.copy_tags_to_snapshot,
            monitoring_interval: self.monitoring_interval,
            monitoring_role_arn: self.monitoring_role_arn,
            domain_iam_role_name: self.domain_iam_role_name,
            promotion_tier: self.promotion_tier,
            timezone: self.timezone,
            enable_iam_database_authentication: self.enable_iam_database_authentication,
            enable_performance_insights: self.enable_performance_insights,
            performance_insights_kms_key_id: self.performance_insights_kms_key_id,
            performance_insights_retention_period: self.performance_insights_retention_period,
            enable_cloudwatch_logs_exports: self.enable_cloudwatch_logs_exports,
            processor_features: self.processor_features,
            deletion_protection: self.deletion_protection,
            max_allocated_storage: self.max_allocated_storage,
        }
    }
}

/// Input for `ModifyDBInstance`.
///
/// `Debug` redacts the master and TDE passwords.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct ModifyDbInstanceInput {
    /// Instance to modify.
    pub db_instance_identifier: Option<String>,
    /// New allocated storage, in gibibytes.
    pub allocated_storage: Option<i32>,
    /// New instance class.
    pub db_instance_class: Option<String>,
    /// New subnet group.
    pub db_subnet_group_name: Option<String>,
    /// Classic DB security groups to associate.
    pub db_security_groups: Option<Vec<String>>,
    /// VPC security groups to associate.
    pub vpc_security_group_ids: Option<Vec<String>>,
    /// Apply changes now rather than in the next maintenance window.
    pub apply_immediately: Option<bool>,
    /// New master password.
    pub master_user_password: Option<String>,
    /// New parameter group.
    pub db_parameter_group_name: Option<String>,
    /// New backup retention period.
    pub backup_retention_period: Option<i32>,
    /// New backup window.
    pub preferred_backup_window: Option<String>,
    /// New maintenance window.
    pub preferred_maintenance_window: Option<String>,
    /// Convert to or from Multi-AZ.
    pub multi_az: Option<bool>,
    /// New engine version.
    pub engine_version: Option<String>,
    /// Allow upgrades that change the major engine version.
    pub allow_major_version_upgrade: Option<bool>,
    /// Apply minor engine upgrades automatically.
    pub auto_minor_version_upgrade: Option<bool>,
    /// New license model.
    pub license_model: Option<String>,
    /// New provisioned IOPS.
    pub iops: Option<i32>,
    /// New option group.
    pub option_group_name: Option<String>,
    /// Rename the instance.
    pub new_db_instance_identifier: Option<String>,
    /// New storage type.
    pub storage_type: Option<String>,
    /// ARN of the key store for TDE encryption.
    pub tde_credential_arn: Option<String>,
    /// Password for the TDE key store.
    pub tde_credential_password: Option<String>,
    /// New CA certificate.
    pub ca_certificate_identifier: Option<String>,
    /// Active Directory domain to move the instance to.
    pub domain: Option<String>,
    /// Copy tags to snapshots.
    pub copy_tags_to_snapshot: Option<bool>,
    /// Enhanced Monitoring interval, in seconds.
    pub monitoring_interval: Option<i32>,
    /// New port.
    pub db_port_number: Option<i32>,
    /// Give or remove the public DNS name.
    pub publicly_accessible: Option<bool>,
    /// IAM role that publishes Enhanced Monitoring metrics.
    pub monitoring_role_arn: Option<String>,
    /// IAM role used when joining the domain.
    pub domain_iam_role_name: Option<String>,
    /// Failover priority; lower values fail over first.
    pub promotion_tier: Option<i32>,
    /// Enable IAM database authentication.
    pub enable_iam_database_authentication: Option<bool>,
    /// Enable Performance Insights.
    pub enable_performance_insights: Option<bool>,
    /// KMS key encrypting Performance Insights data.
    pub performance_insights_kms_key_id: Option<String>,
    /// Days to retain Performance Insights data.
    pub performance_insights_retention_period: Option<i32>,
    /// Log types to start or stop exporting.
    pub cloudwatch_logs_export_configuration: Option<CloudwatchLogsExportConfiguration>,
    /// New processor features.
    pub processor_features: Option<Vec<ProcessorFeature>>,
    /// Revert to the instance class's default processor features.
    pub use_default_processor_features: Option<bool>,
    /// Enable deletion protection.
    pub deletion_protection: Option<bool>,
    /// Storage autoscaling ceiling, in gibibytes.
    pub max_allocated_storage: Option<i32>,
}

impl ModifyDbInstanceInput {
    /// Returns a builder for `ModifyDbInstanceInput`.
    pub fn builder() -> ModifyDbInstanceInputBuilder {
        ModifyDbInstanceInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_modify_db_instance(self)?;
        build_query_request(config, body)
    }
}

impl std::fmt::Debug for ModifyDbInstanceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModifyDbInstanceInput")
            .field("db_instance_identifier", &self.db_instance_identifier)
            .field("allocated_storage", &self.allocated_storage)
            .field("db_instance_class", &self.db_instance_class)
            .field("db_subnet_group_name", &self.db_subnet_group_name)
            .field("db_security_groups", &self.db_security_groups)
            .field("vpc_security_group_ids", &self.vpc_security_group_ids)
            .field("apply_immediately", &self.apply_immediately)
            .field("master_user_password", &"*** Sensitive Data Redacted ***")
            .field("db_parameter_group_name", &self.db_parameter_group_name)
            .field("backup_retention_period", &self.backup_retention_period)
            .field("preferred_backup_window", &self.preferred_backup_window)
            .field(
                "preferred_maintenance_window",
                &self.preferred_maintenance_window,
            )
            .field("multi_az", &self.multi_az)
            .field("engine_version", &self.engine_version)
            .field("allow_major_version_upgrade", &self.allow_major_version_upgrade)
            .field("auto_minor_version_upgrade", &self.auto_minor_version_upgrade)
            .field("license_model", &self.license_model)
            .field("iops", &self.iops)
            .field("option_group_name", &self.option_group_name)
            .field("new_db_instance_identifier", &self.new_db_instance_identifier)
            .field("storage_type", &self.storage_type)
            .field("tde_credential_arn", &self.tde_credential_arn)
            .field("tde_credential_password", &"*** Sensitive Data Redacted ***")
            .field("ca_certificate_identifier", &self.ca_certificate_identifier)
            .field("domain", &self.domain)
            .field("copy_tags_to_snapshot", &self.copy_tags_to_snapshot)
            .field("monitoring_interval", &self.monitoring_interval)
            .field("db_port_number", &self.db_port_number)
            .field("publicly_accessible", &self.publicly_accessible)
            .field("monitoring_role_arn", &self.monitoring_role_arn)
            .field("domain_iam_role_name", &self.domain_iam_role_name)
            .field("promotion_tier", &self.promotion_tier)
            .field(
                "enable_iam_database_authentication",
                &self.enable_iam_database_authentication,
            )
            .field(
                "enable_performance_insights",
                &self.enable_performance_insights,
            )
            .field(
                "performance_insights_kms_key_id",
                &self.performance_insights_kms_key_id,
            )
            .field(
                "performance_insights_retention_period",
                &self.performance_insights_retention_period,
            )
            .field(
                "cloudwatch_logs_export_configuration",
                &self.cloudwatch_logs_export_configuration,
            )
            .field("processor_features", &self.processor_features)
            .field(
                "use_default_processor_features",
                &self.use_default_processor_features,
            )
            .field("deletion_protection", &self.deletion_protection)
            .field("max_allocated_storage", &self.max_allocated_storage)
            .finish()
    }
}

/// Builder for [`ModifyDbInstanceInput`].
#[derive(Clone, Default)]
pub struct ModifyDbInstanceInputBuilder {
    db_instance_identifier: Option<String>,
    allocated_storage: Option<i32>,
    db_instance_class: Option<String>,
    db_subnet_group_name: Option<String>,
    db_security_groups: Option<Vec<String>>,
    vpc_security_group_ids: Option<Vec<String>>,
    apply_immediately: Option<bool>,
    master_user_password: Option<String>,
    db_parameter_group_name: Option<String>,
    backup_retention_period: Option<i32>,
    preferred_backup_window: Option<String>,
    preferred_maintenance_window: Option<String>,
    multi_az: Option<bool>,
    engine_version: Option<String>,
    allow_major_version_upgrade: Option<bool>,
    auto_minor_version_upgrade: Option<bool>,
    license_model: Option<String>,
    iops: Option<i32>,
    option_group_name: Option<String>,
    new_db_instance_identifier: Option<String>,
    storage_type: Option<String>,
    tde_credential_arn: Option<String>,
    tde_credential_password: Option<String>,
    ca_certificate_identifier: Option<String>,
    domain: Option<String>,
    copy_tags_to_snapshot: Option<bool>,
    monitoring_interval: Option<i32>,
    db_port_number: Option<i32>,
    publicly_accessible: Option<bool>,
    monitoring_role_arn: Option<String>,
    domain_iam_role_name: Option<String>,
    promotion_tier: Option<i32>,
    enable_iam_database_authentication: Option<bool>,
    enable_performance_insights: Option<bool>,
    performance_insights_kms_key_id: Option<String>,
    performance_insights_retention_period: Option<i32>,
    cloudwatch_logs_export_configuration: Option<CloudwatchLogsExportConfiguration>,
    processor_features: Option<Vec<ProcessorFeature>>,
    use_default_processor_features: Option<bool>,
    deletion_protection: Option<bool>,
    max_allocated_storage: Option<i32>,
}

impl std::fmt::Debug for ModifyDbInstanceInputBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModifyDbInstanceInputBuilder")
            .field("db_instance_identifier", &self.db_instance_identifier)
            .field("master_user_password", &"*** Sensitive Data Redacted ***")
            .field("tde_credential_password", &"*** Sensitive Data Redacted ***")
            .finish_non_exhaustive()
    }
}

impl ModifyDbInstanceInputBuilder {
    /// Sets the instance identifier.
    pub fn db_instance_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(input.into());
        self
    }

    /// Sets or clears the instance identifier.
    pub fn set_db_instance_identifier(mut self, input: Option<String>) -> Self {
        self.db_instance_identifier = input;
        self
    }

    /// Sets the allocated storage.
    pub fn allocated_storage(mut self, input: i32) -> Self {
        self.allocated_storage = Some(input);
        self
    }

    /// Sets or clears the allocated storage.
    pub fn set_allocated_storage(mut self, input: Option<i32>) -> Self {
        self.allocated_storage = input;
        self
    }

    /// Sets the instance class.
    pub fn db_instance_class(mut self, input: impl Into<String>) -> Self {
        self.db_instance_class = Some(input.into());
        self
    }

    /// Sets or clears the instance class.
    pub fn set_db_instance_class(mut self, input: Option<String>) -> Self {
        self.db_instance_class = input;
        self
    }

    /// Sets the subnet group name.
    pub fn db_subnet_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(input.into());
        self
    }

    /// Sets or clears the subnet group name.
    pub fn set_db_subnet_group_name(mut self, input: Option<String>) -> Self {
        self.db_subnet_group_name = input;
        self
    }

    /// Appends a classic DB security group.
    pub fn db_security_groups(mut self, input: impl Into<String>) -> Self {
        self.db_security_groups
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the classic DB security groups.
    pub fn set_db_security_groups(mut self, input: Option<Vec<String>>) -> Self {
        self.db_security_groups = input;
        self
    }

    /// Appends a VPC security group ID.
    pub fn vpc_security_group_ids(mut self, input: impl Into<String>) -> Self {
        self.vpc_security_group_ids
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the VPC security group IDs.
    pub fn set_vpc_security_group_ids(mut self, input: Option<Vec<String>>) -> Self {
        self.vpc_security_group_ids = input;
        self
    }

    /// Sets the apply-immediately flag.
    pub fn apply_immediately(mut self, input: bool) -> Self {
        self.apply_immediately = Some(input);
        self
    }

    /// Sets or clears the apply-immediately flag.
    pub fn set_apply_immediately(mut self, input: Option<bool>) -> Self {
        self.apply_immediately = input;
        self
    }

    /// Sets the master password.
    pub fn master_user_password(mut self, input: impl Into<String>) -> Self {
        self.master_user_password = Some(input.into());
        self
    }

    /// Sets or clears the master password.
    pub fn set_master_user_password(mut self, input: Option<String>) -> Self {
        self.master_user_password = input;
        self
    }

    /// Sets the parameter group name.
    pub fn db_parameter_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_parameter_group_name = Some(input.into());
        self
    }

    /// Sets or clears the parameter group name.
    pub fn set_db_parameter_group_name(mut self, input: Option<String>) -> Self {
        self.db_parameter_group_name = input;
        self
    }

    /// Sets the backup retention period.
    pub fn backup_retention_period(mut self, input: i32) -> Self {
        self.backup_retention_period = Some(input);
        self
    }

    /// Sets or clears the backup retention period.
    pub fn set_backup_retention_period(mut self, input: Option<i32>) -> Self {
        self.backup_retention_period = input;
        self
    }

    /// Sets the backup window.
    pub fn preferred_backup_window(mut self, input: impl Into<String>) -> Self {
        self.preferred_backup_window = Some(input.into());
        self
    }

    /// Sets or clears the backup window.
    pub fn set_preferred_backup_window(mut self, input: Option<String>) -> Self {
        self.preferred_backup_window = input;
        self
    }

    /// Sets the maintenance window.
    pub fn preferred_maintenance_window(mut self, input: impl Into<String>) -> Self {
        self.preferred_maintenance_window = Some(input.into());
        self
    }

    /// Sets or clears the maintenance window.
    pub fn set_preferred_maintenance_window(mut self, input: Option<String>) -> Self {
        self.preferred_maintenance_window = input;
        self
    }

    /// Sets the Multi-AZ flag.
    pub fn multi_az(mut self, input: bool) -> Self {
        self.multi_az = Some(input);
        self
    }

    /// Sets or clears the Multi-AZ flag.
    pub fn set_multi_az(mut self, input: Option<bool>) -> Self {
        self.multi_az = input;
        self
    }

    /// Sets the engine version.
    pub fn engine_version(mut self, input: impl Into<String>) -> Self {
        self.engine_version = Some(input.into());
        self
    }

    /// Sets or clears the engine version.
    pub fn set_engine_version(mut self, input: Option<String>) -> Self {
        self.engine_version = input;
        self
    }

    /// Sets the major version upgrade flag.
    pub fn allow_major_version_upgrade(mut self, input: bool) -> Self {
        self.allow_major_version_upgrade = Some(input);
        self
    }

    /// Sets or clears the major version upgrade flag.
    pub fn set_allow_major_version_upgrade(mut self, input: Option<bool>) -> Self {
        self.allow_major_version_upgrade = input;
        self
    }

    /// Sets the auto minor version upgrade flag.
    pub fn auto_minor_version_upgrade(mut self, input: bool) -> Self {
        self.auto_minor_version_upgrade = Some(input);
        self
    }

    /// Sets or clears the auto minor version upgrade flag.
    pub fn set_auto_minor_version_upgrade(mut self, input: Option<bool>) -> Self {
        self.auto_minor_version_upgrade = input;
        self
    }

    /// Sets the license model.
    pub fn license_model(mut self, input: impl Into<String>) -> Self {
        self.license_model = Some(input.into());
        self
    }

    /// Sets or clears the license model.
    pub fn set_license_model(mut self, input: Option<String>) -> Self {
        self.license_model = input;
        self
    }

    /// Sets the provisioned IOPS.
    pub fn iops(mut self, input: i32) -> Self {
        self.iops = Some(input);
        self
    }

    /// Sets or clears the provisioned IOPS.
    pub fn set_iops(mut self, input: Option<i32>) -> Self {
        self.iops = input;
        self
    }

    /// Sets the option group name.
    pub fn option_group_name(mut self, input: impl Into<String>) -> Self {
        self.option_group_name = Some(input.into());
        self
    }

    /// Sets or clears the option group name.
    pub fn set_option_group_name(mut self, input: Option<String>) -> Self {
        self.option_group_name = input;
        self
    }

    /// Sets the new instance identifier.
    pub fn new_db_instance_identifier(mut self, input: impl Into<String>) -> Self {
        self.new_db_instance_identifier = Some(input.into());
        self
    }

    /// Sets or clears the new instance identifier.
    pub fn set_new_db_instance_identifier(mut self, input: Option<String>) -> Self {
        self.new_db_instance_identifier = input;
        self
    }

    /// Sets the storage type.
    pub fn storage_type(mut self, input: impl Into<String>) -> Self {
        self.storage_type = Some(input.into());
        self
    }

    /// Sets or clears the storage type.
    pub fn set_storage_type(mut self, input: Option<String>) -> Self {
        self.storage_type = input;
        self
    }

    /// Sets the TDE credential ARN.
    pub fn tde_credential_arn(mut self, input: impl Into<String>) -> Self {
        self.tde_credential_arn = Some(input.into());
        self
    }

    /// Sets or clears the TDE credential ARN.
    pub fn set_tde_credential_arn(mut self, input: Option<String>) -> Self {
        self.tde_credential_arn = input;
        self
    }

    /// Sets the TDE key store password.
    pub fn tde_credential_password(mut self, input: impl Into<String>) -> Self {
        self.tde_credential_password = Some(input.into());
        self
    }

    /// Sets or clears the TDE key store password.
    pub fn set_tde_credential_password(mut self, input: Option<String>) -> Self {
        self.tde_credential_password = input;
        self
    }

    /// Sets the CA certificate identifier.
    pub fn ca_certificate_identifier(mut self, input: impl Into<String>) -> Self {
        self.ca_certificate_identifier = Some(input.into());
        self
    }

    /// Sets or clears the CA certificate identifier.
    pub fn set_ca_certificate_identifier(mut self, input: Option<String>) -> Self {
        self.ca_certificate_identifier = input;
        self
    }

    /// Sets the domain.
    pub fn domain(mut self, input: impl Into<String>) -> Self {
        self.domain = Some(input.into());
        self
    }

    /// Sets or clears the domain.
    pub fn set_domain(mut self, input: Option<String>) -> Self {
        self.domain = input;
        self
    }

    /// Sets the copy-tags-to-snapshot flag.
    pub fn copy_tags_to_snapshot(mut self, input: bool) -> Self {
        self.copy_tags_to_snapshot = Some(input);
        self
    }

    /// Sets or clears the copy-tags-to-snapshot flag.
    pub fn set_copy_tags_to_snapshot(mut self, input: Option<bool>) -> Self {
        self.copy_tags_to_snapshot = input;
        self
    }

    /// Sets the monitoring interval.
    pub fn monitoring_interval(mut self, input: i32) -> Self {
        self.monitoring_interval = Some(input);
        self
    }

    /// Sets or clears the monitoring interval.
    pub fn set_monitoring_interval(mut self, input: Option<i32>) -> Self {
        self.monitoring_interval = input;
        self
    }

    /// Sets the new port.
    pub fn db_port_number(mut self, input: i32) -> Self {
        self.db_port_number = Some(input);
        self
    }

    /// Sets or clears the new port.
    pub fn set_db_port_number(mut self, input: Option<i32>) -> Self {
        self.db_port_number = input;
        self
    }

    /// Sets the public accessibility flag.
    pub fn publicly_accessible(mut self, input: bool) -> Self {
        self.publicly_accessible = Some(input);
        self
    }

    /// Sets or clears the public accessibility flag.
    pub fn set_publicly_accessible(mut self, input: Option<bool>) -> Self {
        self.publicly_accessible = input;
        self
    }

    /// Sets the monitoring role ARN.
    pub fn monitoring_role_arn(mut self, input: impl Into<String>) -> Self {
        self.monitoring_role_arn = Some(input.into());
        self
    }

    /// Sets or clears the monitoring role ARN.
    pub fn set_monitoring_role_arn(mut self, input: Option<String>) -> Self {
        self.monitoring_role_arn = input;
        self
    }

    /// Sets the domain IAM role name.
    pub fn domain_iam_role_name(mut self, input: impl Into<String>) -> Self {
        self.domain_iam_role_name = Some(input.into());
        self
    }

    /// Sets or clears the domain IAM role name.
    pub fn set_domain_iam_role_name(mut self, input: Option<String>) -> Self {
        self.domain_iam_role_name = input;
        self
    }

    /// Sets the promotion tier.
    pub fn promotion_tier(mut self, input: i32) -> Self {
        self.promotion_tier = Some(input);
        self
    }

    /// Sets or clears the promotion tier.
    pub fn set_promotion_tier(mut self, input: Option<i32>) -> Self {
        self.promotion_tier = input;
        self
    }

    /// Sets the IAM database authentication flag.
    pub fn enable_iam_database_authentication(mut self, input: bool) -> Self {
        self.enable_iam_database_authentication = Some(input);
        self
    }

    /// Sets or clears the IAM database authentication flag.
    pub fn set_enable_iam_database_authentication(mut self, input: Option<bool>) -> Self {
        self.enable_iam_database_authentication = input;
        self
    }

    /// Sets the Performance Insights flag.
    pub fn enable_performance_insights(mut self, input: bool) -> Self {
        self.enable_performance_insights = Some(input);
        self
    }

    /// Sets or clears the Performance Insights flag.
    pub fn set_enable_performance_insights(mut self, input: Option<bool>) -> Self {
        self.enable_performance_insights = input;
        self
    }

    /// Sets the Performance Insights KMS key ID.
    pub fn performance_insights_kms_key_id(mut self, input: impl Into<String>) -> Self {
        self.performance_insights_kms_key_id = Some(input.into());
        self
    }

    /// Sets or clears the Performance Insights KMS key ID.
    pub fn set_performance_insights_kms_key_id(mut self, input: Option<String>) -> Self {
        self.performance_insights_kms_key_id = input;
        self
    }

    /// Sets the Performance Insights retention period.
    pub fn performance_insights_retention_period(mut self, input: i32) -> Self {
        self.performance_insights_retention_period = Some(input);
        self
    }

    /// Sets or clears the Performance Insights retention period.
    pub fn set_performance_insights_retention_period(mut self, input: Option<i32>) -> Self {
        self.performance_insights_retention_period = input;
        self
    }

    /// Sets the CloudWatch Logs export changes.
    pub fn cloudwatch_logs_export_configuration(
        mut self,
        input: CloudwatchLogsExportConfiguration,
    ) -> Self {
        self.cloudwatch_logs_export_configuration = Some(input);
        self
    }

    /// Sets or clears the CloudWatch Logs export changes.
    pub fn set_cloudwatch_logs_export_configuration(
        mut self,
        input: Option<CloudwatchLogsExportConfiguration>,
    ) -> Self {
        self.cloudwatch_logs_export_configuration = input;
        self
    }

    /// Appends a processor feature.
    pub fn processor_features(mut self, input: ProcessorFeature) -> Self {
        self.processor_features
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// Replaces the processor features.
    pub fn set_processor_features(mut self, input: Option<Vec<ProcessorFeature>>) -> Self {
        self.processor_features = input;
        self
    }

    /// Sets the default processor features flag.
    pub fn use_default_processor_features(mut self, input: bool) -> Self {
        self.use_default_processor_features = Some(input);
        self
    }

    /// Sets or clears the default processor features flag.
    pub fn set_use_default_processor_features(mut self, input: Option<bool>) -> Self {
        self.use_default_processor_features = input;
        self
    }

    /// Sets the deletion protection flag.
    pub fn deletion_protection(mut self, input: bool) -> Self {
        self.deletion_protection = Some(input);
        self
    }

    /// Sets or clears the deletion protection flag.
    pub fn set_deletion_protection(mut self, input: Option<bool>) -> Self {
        self.deletion_protection = input;
        self
    }

    /// Sets the storage autoscaling ceiling.
    pub fn max_allocated_storage(mut self, input: i32) -> Self {
        self.max_allocated_storage = Some(input);
        self
    }

    /// Sets or clears the storage autoscaling ceiling.
    pub fn set_max_allocated_storage(mut self, input: Option<i32>) -> Self {
        self.max_allocated_storage = input;
        self
    }

    /// Builds the [`ModifyDbInstanceInput`].
    pub fn build(self) -> ModifyDbInstanceInput {
        ModifyDbInstanceInput {
            db_instance_identifier: self.db_instance_identifier,
            allocated_storage: self.allocated_storage,
            db_instance_class: self.db_instance_class,
            db_subnet_group_name: self.db_subnet_group_name,
            db_security_groups: self.db_security_groups,
            vpc_security_group_ids: self.vpc_security_group_ids,
            apply_immediately: self.apply_immediately,
            master_user_password: self.master_user_password,
            db_parameter_group_name: self.db_parameter_group_name,
            backup_retention_period: self.backup_retention_period,
            preferred_backup_window: self.preferred_backup_window,
            preferred_maintenance_window: self.preferred_maintenance_window,
            multi_az: self.multi_az,
            engine_version: self.engine_version,
            allow_major_version_upgrade: self.allow_major_version_upgrade,
            auto_minor_version_upgrade: self.auto_minor_version_upgrade,
            license_model: self.license_model,
            iops: self.iops,
            option_group_name: self.option_group_name,
            new_db_instance_identifier: self.new_db_instance_identifier,
            storage_type: self.storage_type,
            tde_credential_arn: self.tde_credential_arn,
            tde_credential_password: self.tde_credential_password,
            ca_certificate_identifier: self.ca_certificate_identifier,
            domain: self.domain,
            copy_tags_to_snapshot: self.copy_tags_to_snapshot,
            monitoring_interval: self.monitoring_interval,
            db_port_number: self.db_port_number,
            publicly_accessible: self.publicly_accessible,
            monitoring_role_arn: self.monitoring_role_arn,
            domain_iam_role_name: self.domain_iam_role_name,
            promotion_tier: self.promotion_tier,
            enable_iam_database_authentication: self.enable_iam_database_authentication,
            enable_performance_insights: self.enable_performance_insights,
            performance_insights_kms_key_id: self.performance_insights_kms_key_id,
            performance_insights_retention_period: self.performance_insights_retention_period,
            cloudwatch_logs_export_configuration: self.cloudwatch_logs_export_configuration,
            processor_features: self.processor_features,
            use_default_processor_features: self.use_default_processor_features,
            deletion_protection: self.deletion_protection,
            max_allocated_storage: self.max_allocated_storage,
        }
    }
}

/// Input for `RestoreDBInstanceFromDBSnapshot`.
///
/// `Debug` redacts the TDE password.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct RestoreDbInstanceFromDbSnapshotInput {
    /// Identifier for the restored instance.
    pub db_instance_identifier: Option<String>,
    /// Snapshot to restore from.
    pub db_snapshot_identifier: Option<String>,
    /// Instance class for the restored instance; defaults to the source's.
    pub db_instance_class: Option<String>,
    /// Port for the restored instance.
    pub port: Option<i32>,
    /// Availability Zone to place the instance in.
    pub availability_zone: Option<String>,
    /// Subnet group for the instance.
    pub db_subnet_group_name: Option<String>,
    /// Restore as a Multi-AZ deployment.
    pub multi_az: Option<bool>,
    /// Give the instance a public DNS name.
    pub publicly_accessible: Option<bool>,
    /// Apply minor engine upgrades automatically.
    pub auto_minor_version_upgrade: Option<bool>,
    /// License model.
    pub license_model: Option<String>,
    /// Database name, for engines that support renaming on restore.
    pub db_name: Option<String>,
    /// Engine; must be compatible with the snapshot's.
    pub engine: Option<String>,
    /// Provisioned IOPS.
    pub iops: Option<i32>,
    /// Option group to associate.
    pub option_group_name: Option<String>,
    /// Tags to attach.
    pub tags: Option<Vec<Tag>>,
    /// Storage type.
    pub storage_type: Option<String>,
    /// ARN of the key store for TDE encryption.
    pub tde_credential_arn: Option<String>,
    /// Password for the TDE key store.
    pub tde_credential_password: Option<String>,
    /// VPC security groups to associate.
    pub vpc_security_group_ids: Option<Vec<String>>,
    /// Active Directory domain to join.
    pub domain: Option<String>,
    /// Copy tags to snapshots.
    pub copy_tags_to_snapshot: Option<bool>,
    /// IAM role used when joining the domain.
    pub domain_iam_role_name: Option<String>,
    /// Enable IAM database authentication.
    pub enable_iam_database_authentication: Option<bool>,
    /// Log types to export to CloudWatch Logs.
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,
    /// Processor features of the instance class.
    pub processor_features: Option<Vec<ProcessorFeature>>,
    /// Revert to the instance class's default processor features.
    pub use_default_processor_features: Option<bool>,
    /// Parameter group to apply; defaults to the engine default.
    pub db_parameter_group_name: Option<String>,
    /// Enable deletion protection.
    pub deletion_protection: Option<bool>,
}

impl RestoreDbInstanceFromDbSnapshotInput {
    /// Returns a builder for `RestoreDbInstanceFromDbSnapshotInput`.
    pub fn builder() -> RestoreDbInstanceFromDbSnapshotInputBuilder {
        RestoreDbInstanceFromDbSnapshotInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_restore_db_instance_from_db_snapshot(self)?;
        build_query_request(config, body)
    }
}

impl std::fmt::Debug for RestoreDbInstanceFromDbSnapshotInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestoreDbInstanceFromDbSnapshotInput")
            .field("db_instance_identifier", &self.db_instance_identifier)
            .field("db_snapshot_identifier", &self.db_snapshot_identifier)
            .field("db_instance_class", &self.db_instance_class)
            .field("port", &self.port)
            .field("availability_zone", &self.availability_zone)
            .field("db_subnet_group_name", &self.db_subnet_group_name)
            .field("multi_az", &self.multi_az)
            .field("publicly_accessible", &self.publicly_accessible)
            .field("auto_minor_version_upgrade", &self.auto_minor_version_upgrade)
            .field("license_model", &self.license_model)
            .field("db_name", &self.db_name)
            .field("engine", &self.engine)
            .field("iops", &self.iops)
            .field("option_group_name", &self.option_group_name)
            .field("tags", &self.tags)
            .field("storage_type", &self.storage_type)
            .field("tde_credential_arn", &self.tde_credential_arn)
            .field("tde_credential_password", &"*** Sensitive Data Redacted ***")
            .field("vpc_security_group_ids", &self.vpc_security_group_ids)
            .field("domain", &self.domain)
            .field("copy_tags_to_snapshot", &self.copy_tags_to_snapshot)
            .field("domain_iam_role_name", &self.domain_iam_role_name)
            .field(
                "enable_iam_database_authentication",
                &self.enable_iam_database_authentication,
            )
            .field(
                "enable_cloudwatch_logs_exports",
                &self.enable_cloudwatch_logs_exports,
            )
            .field("processor_features", &self.processor_features)
            .field(
                "use_default_processor_features",
                &self.use_default_processor_features,
            )
            .field("db_parameter_group_name", &self.db_parameter_group_name)
            .field("deletion_protection", &self.deletion_protection)
            .finish()
    }
}

/// Builder for [`RestoreDbInstanceFromDbSnapshotInput`].
#[derive(Clone, Default)]
pub struct RestoreDbInstanceFromDbSnapshotInputBuilder {
    db_instance_identifier: Option<String>,
    db_snapshot_identifier: Option<String>,
    db_instance_class: Option<String>,
    port: Option<i32>,
    availability_zone: Option<String>,
    db_subnet_group_name: Option<String>,
    multi_az: Option<bool>,
    publicly_accessible: Option<bool>,
    auto_minor_version_upgrade: Option<bool>,
    license_model: Option<String>,
    db_name: Option<String>,
    engine: Option<String>,
    iops: Option<i32>,
    option_group_name: Option<String>,
    tags: Option<Vec<Tag>>,
    storage_type: Option<String>,
    tde_credential_arn: Option<String>,
    tde_credential_password: Option<String>,
    vpc_security_group_ids: Option<Vec<String>>,
    domain: Option<String>,
    copy_tags_to_snapshot: Option<bool>,
    domain_iam_role_name: Option<String>,
    enable_iam_database_authentication: Option<bool>,
    enable_cloudwatch_logs_exports: Option<Vec<String>>,
    processor_features: Option<Vec<ProcessorFeature>>,
    use_default_processor_features: Option<bool>,
    db_parameter_group_name: Option<String>,
    deletion_protection: Option<bool>,
}

impl std::fmt::Debug for RestoreDbInstanceFromDbSnapshotInputBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestoreDbInstanceFromDbSnapshotInputBuilder")
            .field("db_instance_identifier", &self.db_instance_identifier)
            .field("tde_credential_password", &"*** Sensitive Data Redacted ***")
            .finish_non_exhaustive()
    }
}

impl RestoreDbInstanceFromDbSnapshotInputBuilder {
    /// Sets the instance identifier.
    pub fn db_instance_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(input.into());
        self
    }

    /// Sets or clears the instance identifier.
    pub fn set_db_instance_identifier(mut self, input: Option<String>) -> Self {
        self.db_instance_identifier = input;
        self
    }

    /// Sets the snapshot identifier.
    pub fn db_snapshot_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_snapshot_identifier = Some(input.into());
        self
    }

    /// Sets or clears the snapshot identifier.
    pub fn set_db_snapshot_identifier(mut self, input: Option<String>) -> Self {
        self.db_snapshot_identifier = input;
        self
    }

    /// Sets the instance class.
    pub fn db_instance_class(mut self, input: impl Into<String>) -> Self {
        self.db_instance_class = Some(input.into());
        self
    }

    /// Sets or clears the instance class.
    pub fn set_db_instance_class(mut self, input: Option<String>) -> Self {
        self.db_instance_class = input;
        self
    }

    /// Sets the port.
    pub fn port(mut self, input: i32) -> Self {
        self.port = Some(input);
        self
    }

    /// Sets or clears the port.
    pub fn set_port(mut self, input: Option<i32>) -> Self {
        self.port = input;
        self
    }

    /// Sets the Availability Zone.
    pub fn availability_zone(mut self, input: impl Into<String>) -> Self {
        self.availability_zone = Some(input.into());
        self
    }

    /// Sets or clears the Availability Zone.
    pub fn set_availability_zone(mut self, input: Option<String>) -> Self {
        self.availability_zone = input;
        self
    }

    /// Sets the subnet group name.
    pub fn db_subnet_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(input.into());
        self
    }

    /// Sets or clears the subnet group name.
    pub fn set_db_subnet_group_name(mut self, input: Option<String>) -> Self {
        self.db_subnet_group_name = input;
        self
    }

    /// Sets the Multi-AZ flag.
    pub fn multi_az(mut self, input: bool) -> Self {
        self.multi_az = Some(input);
        self
    }

    /// Sets or clears the Multi-AZ flag.
    pub fn set_multi_az(mut self, input: Option<bool>) -> Self {
        self.multi_az = input;
        self
    }

    /// Sets the public accessibility flag.
    pub fn publicly_accessible(mut self, input: bool) -> Self {
        self.publicly_accessible = Some(input);
        self
    }

    /// Sets or clears the public accessibility flag.
    pub fn set_publicly_accessible(mut self, input: Option<bool>) -> Self {
        self.publicly_accessible = input;
        self
    }

    /// Sets the auto minor version upgrade flag.
    pub fn auto_minor_version_upgrade(mut self, input: bool) -> Self {
        self.auto_minor_version_upgrade = Some(input);
        self
    }

    /// Sets or clears the auto minor version upgrade flag.
    pub fn set_auto_minor_version_upgrade(mut self, input: Option<bool>) -> Self {
        self.auto_minor_version_upgrade = input;
        self
    }

    /// Sets the license model.
    pub fn license_model(mut self, input: impl Into<String>) -> Self {
        self.license_model = Some(input.into());
        self
    }

    /// Sets or clears the license model.
    pub fn set_license_model(mut self, input: Option<String>) -> Self {
        self.license_model = input;
        self
    }

    /// Sets the database name.
    pub fn db_name(mut self, input: impl Into<String>) -> Self {
        self.db_name = Some(input.into());
        self
    }

    /// Sets or clears the database name.
    pub fn set_db_name(mut self, input: Option<String>) -> Self {
        self.db_name = input;
        self
    }

    /// Sets the engine.
    pub fn engine(mut self, input: impl Into<String>) -> Self {
        self.engine = Some(input.into());
        self
    }

    /// Sets or clears the engine.
    pub fn set_engine(mut self, input: Option<String>) -> Self {
        self.engine = input;
        self
    }

    /// Sets the provisioned IOPS.
    pub fn iops(mut self, input: i32) -> Self {
        self.iops = Some(input);
        self
    }

    /// Sets or clears the provisioned IOPS.
    pub fn set_iops(mut self, input: Option<i32>) -> Self {
        self.iops = input;
        self
    }

    /// Sets the option group name.
    pub fn option_group_name(mut self, input: impl Into<String>) -> Self {
        self.option_group_name = Some(input.into());
        self
    }

    /// Sets or clears the option group name.
    pub fn set_option_group_name(mut self, input: Option<String>) -> Self {
        self.option_group_name = input;
        self
    }

    /// Appends a tag.
    pub fn tags(mut self, input: Tag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the tags.
    pub fn set_tags(mut self, input: Option<Vec<Tag>>) -> Self {
        self.tags = input;
        self
    }

    /// Sets the storage type.
    pub fn storage_type(mut self, input: impl Into<String>) -> Self {
        self.storage_type = Some(input.into());
        self
    }

    /// Sets or clears the storage type.
    pub fn set_storage_type(mut self, input: Option<String>) -> Self {
        self.storage_type = input;
        self
    }

    /// Sets the TDE credential ARN.
    pub fn tde_credential_arn(mut self, input: impl Into<String>) -> Self {
        self.tde_credential_arn = Some(input.into());
        self
    }

    /// Sets or clears the TDE credential ARN.
    pub fn set_tde_credential_arn(mut self, input: Option<String>) -> Self {
        self.tde_credential_arn = input;
        self
    }

    /// Sets the TDE key store password.
    pub fn tde_credential_password(mut self, input: impl Into<String>) -> Self {
        self.tde_credential_password = Some(input.into());
        self
    }

    /// Sets or clears the TDE key store password.
    pub fn set_tde_credential_password(mut self, input: Option<String>) -> Self {
        self.tde_credential_password = input;
        self
    }

    /// Appends a VPC security group ID.
    pub fn vpc_security_group_ids(mut self, input: impl Into<String>) -> Self {
        self.vpc_security_group_ids
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the VPC security group IDs.
    pub fn set_vpc_security_group_ids(mut self, input: Option<Vec<String>>) -> Self {
        self.vpc_security_group_ids = input;
        self
    }

    /// Sets the domain.
    pub fn domain(mut self, input: impl Into<String>) -> Self {
        self.domain = Some(input.into());
        self
    }

    /// Sets or clears the domain.
    pub fn set_domain(mut self, input: Option<String>) -> Self {
        self.domain = input;
        self
    }

    /// Sets the copy-tags-to-snapshot flag.
    pub fn copy_tags_to_snapshot(mut self, input: bool) -> Self {
        self.copy_tags_to_snapshot = Some(input);
        self
    }

    /// Sets or clears the copy-tags-to-snapshot flag.
    pub fn set_copy_tags_to_snapshot(mut self, input: Option<bool>) -> Self {
        self.copy_tags_to_snapshot = input;
        self
    }

    /// Sets the domain IAM role name.
    pub fn domain_iam_role_name(mut self, input: impl Into<String>) -> Self {
        self.domain_iam_role_name = Some(input.into());
        self
    }

    /// Sets or clears the domain IAM role name.
    pub fn set_domain_iam_role_name(mut self, input: Option<String>) -> Self {
        self.domain_iam_role_name = input;
        self
    }

    /// Sets the IAM database authentication flag.
    pub fn enable_iam_database_authentication(mut self, input: bool) -> Self {
        self.enable_iam_database_authentication = Some(input);
        self
    }

    /// Sets or clears the IAM database authentication flag.
    pub fn set_enable_iam_database_authentication(mut self, input: Option<bool>) -> Self {
        self.enable_iam_database_authentication = input;
        self
    }

    /// Appends a log type to export.
    pub fn enable_cloudwatch_logs_exports(mut self, input: impl Into<String>) -> Self {
        self.enable_cloudwatch_logs_exports
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the log types to export.
    pub fn set_enable_cloudwatch_logs_exports(mut self, input: Option<Vec<String>>) -> Self {
        self.enable_cloudwatch_logs_exports = input;
        self
    }

    /// Appends a processor feature.
    pub fn processor_features(mut self, input: ProcessorFeature) -> Self {
        self.processor_features
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// Replaces the processor features.
    pub fn set_processor_features(mut self, input: Option<Vec<ProcessorFeature>>) -> Self {
        self.processor_features = input;
        self
    }

    /// Sets the default processor features flag.
    pub fn use_default_processor_features(mut self, input: bool) -> Self {
        self.use_default_processor_features = Some(input);
        self
    }

    /// Sets or clears the default processor features flag.
    pub fn set_use_default_processor_features(mut self, input: Option<bool>) -> Self {
        self.use_default_processor_features = input;
        self
    }

    /// Sets the parameter group name.
    pub fn db_parameter_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_parameter_group_name = Some(input.into());
        self
    }

    /// Sets or clears the parameter group name.
    pub fn set_db_parameter_group_name(mut self, input: Option<String>) -> Self {
        self.db_parameter_group_name = input;
        self
    }

    /// Sets the deletion protection flag.
    pub fn deletion_protection(mut self, input: bool) -> Self {
        self.deletion_protection = Some(input);
        self
    }

    /// Sets or clears the deletion protection flag.
    pub fn set_deletion_protection(mut self, input: Option<bool>) -> Self {
        self.deletion_protection = input;
        self
    }

    /// Builds the [`RestoreDbInstanceFromDbSnapshotInput`].
    pub fn build(self) -> RestoreDbInstanceFromDbSnapshotInput {
        RestoreDbInstanceFromDbSnapshotInput {
            db_instance_identifier: self.db_instance_identifier,
            db_snapshot_identifier: self.db_snapshot_identifier,
            db_instance_class: self.db_instance_class,
            port: self.port,
            availability_zone: self.availability_zone,
            db_subnet_group_name: self.db_subnet_group_name,
            multi_az: self.multi_az,
            publicly_accessible: self.publicly_accessible,
            auto_minor_version_upgrade: self.auto_minor_version_upgrade,
            license_model: self.license_model,
            db_name: self.db_name,
            engine: self.engine,
            iops: self.iops,
            option_group_name: self.option_group_name,
            tags: self.tags,
            storage_type: self.storage_type,
            tde_credential_arn: self.tde_credential_arn,
            tde_credential_password: self.tde_credential_password,
            vpc_security_group_ids: self.vpc_security_group_ids,
            domain: self.domain,
            copy_tags_to_snapshot: self.copy_tags_to_snapshot,
            domain_iam_role_name: self.domain_iam_role_name,
            enable_iam_database_authentication: self.enable_iam_database_authentication,
            enable_cloudwatch_logs_exports: self.enable_cloudwatch_logs_exports,
            processor_features: self.processor_features,
            use_default_processor_features: self.use_default_processor_features,
            db_parameter_group_name: self.db_parameter_group_name,
            deletion_protection: self.deletion_protection,
        }
    }
}

/// Input for `RestoreDBInstanceFromS3`: create an instance from a MySQL
/// backup staged in an S3 bucket.
///
/// `Debug` redacts the master password.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct RestoreDbInstanceFromS3Input {
    /// Database name.
    pub db_name: Option<String>,
    /// Identifier for the restored instance.
    pub db_instance_identifier: Option<String>,
    /// Storage to allocate, in gibibytes.
    pub allocated_storage: Option<i32>,
    /// Instance class.
    pub db_instance_class: Option<String>,
    /// Engine; only MySQL is supported by the service.
    pub engine: Option<String>,
    /// Master username.
    pub master_username: Option<String>,
    /// Master password.
    pub master_user_password: Option<String>,
    /// Classic DB security groups to associate.
    pub db_security_groups: Option<Vec<String>>,
    /// VPC security groups to associate.
    pub vpc_security_group_ids: Option<Vec<String>>,
    /// Availability Zone to place the instance in.
    pub availability_zone: Option<String>,
    /// Subnet group for the instance.
    pub db_subnet_group_name: Option<String>,
    /// Weekly maintenance window.
    pub preferred_maintenance_window: Option<String>,
    /// Parameter group to apply.
    pub db_parameter_group_name: Option<String>,
    /// Days to retain automated backups.
    pub backup_retention_period: Option<i32>,
    /// Daily backup window.
    pub preferred_backup_window: Option<String>,
    /// Port the engine listens on.
    pub port: Option<i32>,
    /// Create a Multi-AZ deployment.
    pub multi_az: Option<bool>,
    /// Engine version.
    pub engine_version: Option<String>,
    /// Apply minor engine upgrades automatically.
    pub auto_minor_version_upgrade: Option<bool>,
    /// License model.
    pub license_model: Option<String>,
    /// Provisioned IOPS.
    pub iops: Option<i32>,
    /// Option group to associate.
    pub option_group_name: Option<String>,
    /// Give the instance a public DNS name.
    pub publicly_accessible: Option<bool>,
    /// Tags to attach.
    pub tags: Option<Vec<Tag>>,
    /// Storage type.
    pub storage_type: Option<String>,
    /// Encrypt storage at rest.
    pub storage_encrypted: Option<bool>,
    /// KMS key for storage encryption.
    pub kms_key_id: Option<String>,
    /// Copy tags to snapshots.
    pub copy_tags_to_snapshot: Option<bool>,
    /// Enhanced Monitoring interval, in seconds.
    pub monitoring_interval: Option<i32>,
    /// IAM role that publishes Enhanced Monitoring metrics.
    pub monitoring_role_arn: Option<String>,
    /// Enable IAM database authentication.
    pub enable_iam_database_authentication: Option<bool>,
    /// Engine of the source backup; only `mysql` is supported.
    pub source_engine: Option<String>,
    /// Version of the source backup's engine.
    pub source_engine_version: Option<String>,
    /// Bucket holding the backup.
    pub s3_bucket_name: Option<String>,
    /// Key prefix of the backup within the bucket.
    pub s3_prefix: Option<String>,
    /// IAM role RDS assumes to read the bucket.
    pub s3_ingestion_role_arn: Option<String>,
    /// Enable Performance Insights.
    pub enable_performance_insights: Option<bool>,
    /// KMS key encrypting Performance Insights data.
    pub performance_insights_kms_key_id: Option<String>,
    /// Days to retain Performance Insights data.
    pub performance_insights_retention_period: Option<i32>,
    /// Log types to export to CloudWatch Logs.
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,
    /// Processor features of the instance class.
    pub processor_features: Option<Vec<ProcessorFeature>>,
    /// Revert to the instance class's default processor features.
    pub use_default_processor_features: Option<bool>,
    /// Enable deletion protection.
    pub deletion_protection: Option<bool>,
}

impl RestoreDbInstanceFromS3Input {
    /// Returns a builder for `RestoreDbInstanceFromS3Input`.
    pub fn builder() -> RestoreDbInstanceFromS3InputBuilder {
        RestoreDbInstanceFromS3InputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_restore_db_instance_from_s3(self)?;
        build_query_request(config, body)
    }
}

impl std::fmt::Debug for RestoreDbInstanceFromS3Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestoreDbInstanceFromS3Input")
            .field("db_name", &self.db_name)
            .field("db_instance_identifier", &self.db_instance_identifier)
            .field("allocated_storage", &self.allocated_storage)
            .field("db_instance_class", &self.db_instance_class)
            .field("engine", &self.engine)
            .field("master_username", &self.master_username)
            .field("master_user_password", &"*** Sensitive Data Redacted ***")
            .field("db_security_groups", &self.db_security_groups)
            .field("vpc_security_group_ids", &self.vpc_security_group_ids)
            .field("availability_zone", &self.availability_zone)
            .field("db_subnet_group_name", &self.db_subnet_group_name)
            .field(
                "preferred_maintenance_window",
                &self.preferred_maintenance_window,
            )
            .field("db_parameter_group_name", &self.db_parameter_group_name)
            .field("backup_retention_period", &self.backup_retention_period)
            .field("preferred_backup_window", &self.preferred_backup_window)
            .field("port", &self.port)
            .field("multi_az", &self.multi_az)
            .field("engine_version", &self.engine_version)
            .field("auto_minor_version_upgrade", &self.auto_minor_version_upgrade)
            .field("license_model", &self.license_model)
            .field("iops", &self.iops)
            .field("option_group_name", &self.option_group_name)
            .field("publicly_accessible", &self.publicly_accessible)
            .field("tags", &self.tags)
            .field("storage_type", &self.storage_type)
            .field("storage_encrypted", &self.storage_encrypted)
            .field("kms_key_id", &self.kms_key_id)
            .field("copy_tags_to_snapshot", &self.copy_tags_to_snapshot)
            .field("monitoring_interval", &self.monitoring_interval)
            .field("monitoring_role_arn", &self.monitoring_role_arn)
            .field(
                "enable_iam_database_authentication",
                &self.enable_iam_database_authentication,
            )
            .field("source_engine", &self.source_engine)
            .field("source_engine_version", &self.source_engine_version)
            .field("s3_bucket_name", &self.s3_bucket_name)
            .field("s3_prefix", &self.s3_prefix)
            .field("s3_ingestion_role_arn", &self.s3_ingestion_role_arn)
            .field(
                "enable_performance_insights",
                &self.enable_performance_insights,
            )
            .field(
                "performance_insights_kms_key_id",
                &self.performance_insights_kms_key_id,
            )
            .field(
                "performance_insights_retention_period",
                &self.performance_insights_retention_period,
            )
            .field(
                "enable_cloudwatch_logs_exports",
                &self.enable_cloudwatch_logs_exports,
            )
            .field("processor_features", &self.processor_features)
            .field(
                "use_default_processor_features",
                &self.use_default_processor_features,
            )
            .field("deletion_protection", &self.deletion_protection)
            .finish()
    }
}

/// Builder for [`RestoreDbInstanceFromS3Input`].
#[derive(Clone, Default)]
pub struct RestoreDbInstanceFromS3InputBuilder {
    db_name: Option<String>,
    db_instance_identifier: Option<String>,
    allocated_storage: Option<i32>,
    db_instance_class: Option<String>,
    engine: Option<String>,
    master_username: Option<String>,
    master_user_password: Option<String>,
    db_security_groups: Option<Vec<String>>,
    vpc_security_group_ids: Option<Vec<String>>,
    availability_zone: Option<String>,
    db_subnet_group_name: Option<String>,
    preferred_maintenance_window: Option<String>,
    db_parameter_group_name: Option<String>,
    backup_retention_period: Option<i32>,
    preferred_backup_window: Option<String>,
    port: Option<i32>,
    multi_az: Option<bool>,
    engine_version: Option<String>,
    auto_minor_version_upgrade: Option<bool>,
    license_model: Option<String>,
    iops: Option<i32>,
    option_group_name: Option<String>,
    publicly_accessible: Option<bool>,
    tags: Option<Vec<Tag>>,
    storage_type: Option<String>,
    storage_encrypted: Option<bool>,
    kms_key_id: Option<String>,
    copy_tags_to_snapshot: Option<bool>,
    monitoring_interval: Option<i32>,
    monitoring_role_arn: Option<String>,
    enable_iam_database_authentication: Option<bool>,
    source_engine: Option<String>,
    source_engine_version: Option<String>,
    s3_bucket_name: Option<String>,
    s3_prefix: Option<String>,
    s3_ingestion_role_arn: Option<String>,
    enable_performance_insights: Option<bool>,
    performance_insights_kms_key_id: Option<String>,
    performance_insights_retention_period: Option<i32>,
    enable_cloudwatch_logs_exports: Option<Vec<String>>,
    processor_features: Option<Vec<ProcessorFeature>>,
    use_default_processor_features: Option<bool>,
    deletion_protection: Option<bool>,
}

impl std::fmt::Debug for RestoreDbInstanceFromS3InputBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestoreDbInstanceFromS3InputBuilder")
            .field("db_instance_identifier", &self.db_instance_identifier)
            .field("master_user_password", &"*** Sensitive Data Redacted ***")
            .finish_non_exhaustive()
    }
}

impl RestoreDbInstanceFromS3InputBuilder {
    /// Sets the database name.
    pub fn db_name(mut self, input: impl Into<String>) -> Self {
        self.db_name = Some(input.into());
        self
    }

    /// Sets or clears the database name.
    pub fn set_db_name(mut self, input: Option<String>) -> Self {
        self.db_name = input;
        self
    }

    /// Sets the instance identifier.
    pub fn db_instance_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(input.into());
        self
    }

    /// Sets or clears the instance identifier.
    pub fn set_db_instance_identifier(mut self, input: Option<String>) -> Self {
        self.db_instance_identifier = input;
        self
    }

    /// Sets the allocated storage.
    pub fn allocated_storage(mut self, input: i32) -> Self {
        self.allocated_storage = Some(input);
        self
    }

    /// Sets or clears the allocated storage.
    pub fn set_allocated_storage(mut self, input: Option<i32>) -> Self {
        self.allocated_storage = input;
        self
    }

    /// Sets the instance class.
    pub fn db_instance_class(mut self, input: impl Into<String>) -> Self {
        self.db_instance_class = Some(input.into());
        self
    }

    /// Sets or clears the instance class.
    pub fn set_db_instance_class(mut self, input: Option<String>) -> Self {
        self.db_instance_class = input;
        self
    }

    /// Sets the engine.
    pub fn engine(mut self, input: impl Into<String>) -> Self {
        self.engine = Some(input.into());
        self
    }

    /// Sets or clears the engine.
    pub fn set_engine(mut self, input: Option<String>) -> Self {
        self.engine = input;
        self
    }

    /// Sets the master username.
    pub fn master_username(mut self, input: impl Into<String>) -> Self {
        self.master_username = Some(input.into());
        self
    }

    /// Sets or clears the master username.
    pub fn set_master_username(mut self, input: Option<String>) -> Self {
        self.master_username = input;
        self
    }

    /// Sets the master password.
    pub fn master_user_password(mut self, input: impl Into<String>) -> Self {
        self.master_user_password = Some(input.into());
        self
    }

    /// Sets or clears the master password.
    pub fn set_master_user_password(mut self, input: Option<String>) -> Self {
        self.master_user_password = input;
        self
    }

    /// Appends a classic DB security group.
    pub fn db_security_groups(mut self, input: impl Into<String>) -> Self {
        self.db_security_groups
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the classic DB security groups.
    pub fn set_db_security_groups(mut self, input: Option<Vec<String>>) -> Self {
        self.db_security_groups = input;
        self
    }

    /// Appends a VPC security group ID.
    pub fn vpc_security_group_ids(mut self, input: impl Into<String>) -> Self {
        self.vpc_security_group_ids
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the VPC security group IDs.
    pub fn set_vpc_security_group_ids(mut self, input: Option<Vec<String>>) -> Self {
        self.vpc_security_group_ids = input;
        self
    }

    /// Sets the Availability Zone.
    pub fn availability_zone(mut self, input: impl Into<String>) -> Self {
        self.availability_zone = Some(input.into());
        self
    }

    /// Sets or clears the Availability Zone.
    pub fn set_availability_zone(mut self, input: Option<String>) -> Self {
        self.availability_zone = input;
        self
    }

    /// Sets the subnet group name.
    pub fn db_subnet_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(input.into());
        self
    }

    /// Sets or clears the subnet group name.
    pub fn set_db_subnet_group_name(mut self, input: Option<String>) -> Self {
        self.db_subnet_group_name = input;
        self
    }

    /// Sets the maintenance window.
    pub fn preferred_maintenance_window(mut self, input: impl Into<String>) -> Self {
        self.preferred_maintenance_window = Some(input.into());
        self
    }

    /// Sets or clears the maintenance window.
    pub fn set_preferred_maintenance_window(mut self, input: Option<String>) -> Self {
        self.preferred_maintenance_window = input;
        self
    }

    /// Sets the parameter group name.
    pub fn db_parameter_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_parameter_group_name = Some(input.into());
        self
    }

    /// Sets or clears the parameter group name.
    pub fn set_db_parameter_group_name(mut self, input: Option<String>) -> Self {
        self.db_parameter_group_name = input;
        self
    }

    /// Sets the backup retention period.
    pub fn backup_retention_period(mut self, input: i32) -> Self {
        self.backup_retention_period = Some(input);
        self
    }

    /// Sets or clears the backup retention period.
    pub fn set_backup_retention_period(mut self, input: Option<i32>) -> Self {
        self.backup_retention_period = input;
        self
    }

    /// Sets the backup window.
    pub fn preferred_backup_window(mut self, input: impl Into<String>) -> Self {
        self.preferred_backup_window = Some(input.into());
        self
    }

    /// Sets or clears the backup window.
    pub fn set_preferred_backup_window(mut self, input: Option<String>) -> Self {
        self.preferred_backup_window = input;
        self
    }

    /// Sets the port.
    pub fn port(mut self, input: i32) -> Self {
        self.port = Some(input);
        self
    }

    /// Sets or clears the port.
    pub fn set_port(mut self, input: Option<i32>) -> Self {
        self.port = input;
        self
    }

    /// Sets the Multi-AZ flag.
    pub fn multi_az(mut self, input: bool) -> Self {
        self.multi_az = Some(input);
        self
    }

    /// Sets or clears the Multi-AZ flag.
    pub fn set_multi_az(mut self, input: Option<bool>) -> Self {
        self.multi_az = input;
        self
    }

    /// Sets the engine version.
    pub fn engine_version(mut self, input: impl Into<String>) -> Self {
        self.engine_version = Some(input.into());
        self
    }

    /// Sets or clears the engine version.
    pub fn set_engine_version(mut self, input: Option<String>) -> Self {
        self.engine_version = input;
        self
    }

    /// Sets the auto minor version upgrade flag.
    pub fn auto_minor_version_upgrade(mut self, input: bool) -> Self {
        self.auto_minor_version_upgrade = Some(input);
        self
    }

    /// Sets or clears the auto minor version upgrade flag.
    pub fn set_auto_minor_version_upgrade(mut self, input: Option<bool>) -> Self {
        self.auto_minor_version_upgrade = input;
        self
    }

    /// Sets the license model.
    pub fn license_model(mut self, input: impl Into<String>) -> Self {
        self.license_model = Some(input.into());
        self
    }

    /// Sets or clears the license model.
    pub fn set_license_model(mut self, input: Option<String>) -> Self {
        self.license_model = input;
        self
    }

    /// Sets the provisioned IOPS.
    pub fn iops(mut self, input: i32) -> Self {
        self.iops = Some(input);
        self
    }

    /// Sets or clears the provisioned IOPS.
    pub fn set_iops(mut self, input: Option<i32>) -> Self {
        self.iops = input;
        self
    }

    /// Sets the option group name.
    pub fn option_group_name(mut self, input: impl Into<String>) -> Self {
        self.option_group_name = Some(input.into());
        self
    }

    /// Sets or clears the option group name.
    pub fn set_option_group_name(mut self, input: Option<String>) -> Self {
        self.option_group_name = input;
        self
    }

    /// Sets the public accessibility flag.
    pub fn publicly_accessible(mut self, input: bool) -> Self {
        self.publicly_accessible = Some(input);
        self
    }

    /// Sets or clears the public accessibility flag.
    pub fn set_publicly_accessible(mut self, input: Option<bool>) -> Self {
        self.publicly_accessible = input;
        self
    }

    /// Appends a tag.
    pub fn tags(mut self, input: Tag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the tags.
    pub fn set_tags(mut self, input: Option<Vec<Tag>>) -> Self {
        self.tags = input;
        self
    }

    /// Sets the storage type.
    pub fn storage_type(mut self, input: impl Into<String>) -> Self {
        self.storage_type = Some(input.into());
        self
    }

    /// Sets or clears the storage type.
    pub fn set_storage_type(mut self, input: Option<String>) -> Self {
        self.storage_type = input;
        self
    }

    /// Sets the storage encryption flag.
    pub fn storage_encrypted(mut self, input: bool) -> Self {
        self.storage_encrypted = Some(input);
        self
    }

    /// Sets or clears the storage encryption flag.
    pub fn set_storage_encrypted(mut self, input: Option<bool>) -> Self {
        self.storage_encrypted = input;
        self
    }

    /// Sets the KMS key ID.
    pub fn kms_key_id(mut self, input: impl Into<String>) -> Self {
        self.kms_key_id = Some(input.into());
        self
    }

    /// Sets or clears the KMS key ID.
    pub fn set_kms_key_id(mut self, input: Option<String>) -> Self {
        self.kms_key_id = input;
        self
    }

    /// Sets the copy-tags-to-snapshot flag.
    pub fn copy_tags_to_snapshot(mut self, input: bool) -> Self {
        self.copy_tags_to_snapshot = Some(input);
        self
    }

    /// Sets or clears the copy-tags-to-snapshot flag.
    pub fn set_copy_tags_to_snapshot(mut self, input: Option<bool>) -> Self {
        self.copy_tags_to_snapshot = input;
        self
    }

    /// Sets the monitoring interval.
    pub fn monitoring_interval(mut self, input: i32) -> Self {
        self.monitoring_interval = Some(input);
        self
    }

    /// Sets or clears the monitoring interval.
    pub fn set_monitoring_interval(mut self, input: Option<i32>) -> Self {
        self.monitoring_interval = input;
        self
    }

    /// Sets the monitoring role ARN.
    pub fn monitoring_role_arn(mut self, input: impl Into<String>) -> Self {
        self.monitoring_role_arn = Some(input.into());
        self
    }

    /// Sets or clears the monitoring role ARN.
    pub fn set_monitoring_role_arn(mut self, input: Option<String>) -> Self {
        self.monitoring_role_arn = input;
        self
    }

    /// Sets the IAM database authentication flag.
    pub fn enable_iam_database_authentication(mut self, input: bool) -> Self {
        self.enable_iam_database_authentication = Some(input);
        self
    }

    /// Sets or clears the IAM database authentication flag.
    pub fn set_enable_iam_database_authentication(mut self, input: Option<bool>) -> Self {
        self.enable_iam_database_authentication = input;
        self
    }

    /// Sets the source engine.
    pub fn source_engine(mut self, input: impl Into<String>) -> Self {
        self.source_engine = Some(input.into());
        self
    }

    /// Sets or clears the source engine.
    pub fn set_source_engine(mut self, input: Option<String>) -> Self {
        self.source_engine = input;
        self
    }

    /// Sets the source engine version.
    pub fn source_engine_version(mut self, input: impl Into<String>) -> Self {
        self.source_engine_version = Some(input.into());
        self
    }

    /// Sets or clears the source engine version.
    pub fn set_source_engine_version(mut self, input: Option<String>) -> Self {
        self.source_engine_version = input;
        self
    }

    /// Sets the S3 bucket name.
    pub fn s3_bucket_name(mut self, input: impl Into<String>) -> Self {
        self.s3_bucket_name = Some(input.into());
        self
    }

    /// Sets or clears the S3 bucket name.
    pub fn set_s3_bucket_name(mut self, input: Option<String>) -> Self {
        self.s3_bucket_name = input;
        self
    }

    /// Sets the S3 key prefix.
    pub fn s3_prefix(mut self, input: impl Into<String>) -> Self {
        self.s3_prefix = Some(input.into());
        self
    }

    /// Sets or clears the S3 key prefix.
    pub fn set_s3_prefix(mut self, input: Option<String>) -> Self {
        self.s3_prefix = input;
        self
    }

    /// Sets the S3 ingestion role ARN.
    pub fn s3_ingestion_role_arn(mut self, input: impl Into<String>) -> Self {
        self.s3_ingestion_role_arn = Some(input.into());
        self
    }

    /// Sets or clears the S3 ingestion role ARN.
    pub fn set_s3_ingestion_role_arn(mut self, input: Option<String>) -> Self {
        self.s3_ingestion_role_arn = input;
        self
    }

    /// Sets the Performance Insights flag.
    pub fn enable_performance_insights(mut self, input: bool) -> Self {
        self.enable_performance_insights = Some(input);
        self
    }

    /// Sets or clears the Performance Insights flag.
    pub fn set_enable_performance_insights(mut self, input: Option<bool>) -> Self {
        self.enable_performance_insights = input;
        self
    }

    /// Sets the Performance Insights KMS key ID.
    pub fn performance_insights_kms_key_id(mut self, input: impl Into<String>) -> Self {
        self.performance_insights_kms_key_id = Some(input.into());
        self
    }

    /// Sets or clears the Performance Insights KMS key ID.
    pub fn set_performance_insights_kms_key_id(mut self, input: Option<String>) -> Self {
        self.performance_insights_kms_key_id = input;
        self
    }

    /// Sets the Performance Insights retention period.
    pub fn performance_insights_retention_period(mut self, input: i32) -> Self {
        self.performance_insights_retention_period = Some(input);
        self
    }

    /// Sets or clears the Performance Insights retention period.
    pub fn set_performance_insights_retention_period(mut self, input: Option<i32>) -> Self {
        self.performance_insights_retention_period = input;
        self
    }

    /// Appends a log type to export.
    pub fn enable_cloudwatch_logs_exports(mut self, input: impl Into<String>) -> Self {
        self.enable_cloudwatch_logs_exports
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the log types to export.
    pub fn set_enable_cloudwatch_logs_exports(mut self, input: Option<Vec<String>>) -> Self {
        self.enable_cloudwatch_logs_exports = input;
        self
    }

    /// Appends a processor feature.
    pub fn processor_features(mut self, input: ProcessorFeature) -> Self {
        self.processor_features
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// Replaces the processor features.
    pub fn set_processor_features(mut self, input: Option<Vec<ProcessorFeature>>) -> Self {
        self.processor_features = input;
        self
    }

    /// Sets the default processor features flag.
    pub fn use_default_processor_features(mut self, input: bool) -> Self {
        self.use_default_processor_features = Some(input);
        self
    }

    /// Sets or clears the default processor features flag.
    pub fn set_use_default_processor_features(mut self, input: Option<bool>) -> Self {
        self.use_default_processor_features = input;
        self
    }

    /// Sets the deletion protection flag.
    pub fn deletion_protection(mut self, input: bool) -> Self {
        self.deletion_protection = Some(input);
        self
    }

    /// Sets or clears the deletion protection flag.
    pub fn set_deletion_protection(mut self, input: Option<bool>) -> Self {
        self.deletion_protection = input;
        self
    }

    /// Builds the [`RestoreDbInstanceFromS3Input`].
    pub fn build(self) -> RestoreDbInstanceFromS3Input {
        RestoreDbInstanceFromS3Input {
            db_name: self.db_name,
            db_instance_identifier: self.db_instance_identifier,
            allocated_storage: self.allocated_storage,
            db_instance_class: self.db_instance_class,
            engine: self.engine,
            master_username: self.master_username,
            master_user_password: self.master_user_password,
            db_security_groups: self.db_security_groups,
            vpc_security_group_ids: self.vpc_security_group_ids,
            availability_zone: self.availability_zone,
            db_subnet_group_name: self.db_subnet_group_name,
            preferred_maintenance_window: self.preferred_maintenance_window,
            db_parameter_group_name: self.db_parameter_group_name,
            backup_retention_period: self.backup_retention_period,
            preferred_backup_window: self.preferred_backup_window,
            port: self.port,
            multi_az: self.multi_az,
            engine_version: self.engine_version,
            auto_minor_version_upgrade: self.auto_minor_version_upgrade,
            license_model: self.license_model,
            iops: self.iops,
            option_group_name: self.option_group_name,
            publicly_accessible: self.publicly_accessible,
            tags: self.tags,
            storage_type: self.storage_type,
            storage_encrypted: self.storage_encrypted,
            kms_key_id: self.kms_key_id,
            copy_tags_to_snapshot: self.copy_tags_to_snapshot,
            monitoring_interval: self.monitoring_interval,
            monitoring_role_arn: self.monitoring_role_arn,
            enable_iam_database_authentication: self.enable_iam_database_authentication,
            source_engine: self.source_engine,
            source_engine_version: self.source_engine_version,
            s3_bucket_name: self.s3_bucket_name,
            s3_prefix: self.s3_prefix,
            s3_ingestion_role_arn: self.s3_ingestion_role_arn,
            enable_performance_insights: self.enable_performance_insights,
            performance_insights_kms_key_id: self.performance_insights_kms_key_id,
            performance_insights_retention_period: self.performance_insights_retention_period,
            enable_cloudwatch_logs_exports: self.enable_cloudwatch_logs_exports,
            processor_features: self.processor_features,
            use_default_processor_features: self.use_default_processor_features,
            deletion_protection: self.deletion_protection,
        }
    }
}

/// Input for `CreateDBCluster`.
///
/// `Debug` redacts the master password.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateDbClusterInput {
    /// Availability Zones the cluster's storage spans.
    pub availability_zones: Option<Vec<String>>,
    /// Days to retain automated backups.
    pub backup_retention_period: Option<i32>,
    /// Character set, for engines that support one.
    pub character_set_name: Option<String>,
    /// Name of the initial database to create.
    pub database_name: Option<String>,
    /// Identifier for the new cluster.
    pub db_cluster_identifier: Option<String>,
    /// Cluster parameter group to apply.
    pub db_cluster_parameter_group_name: Option<String>,
    /// VPC security groups to associate.
    pub vpc_security_group_ids: Option<Vec<String>>,
    /// Subnet group for the cluster.
    pub db_subnet_group_name: Option<String>,
    /// Database engine.
    pub engine: Option<String>,
    /// Engine version.
    pub engine_version: Option<String>,
    /// Port the engine listens on.
    pub port: Option<i32>,
    /// Master username.
    pub master_username: Option<String>,
    /// Master password.
    pub master_user_password: Option<String>,
    /// Option group to associate.
    pub option_group_name: Option<String>,
    /// Daily backup window.
    pub preferred_backup_window: Option<String>,
    /// Weekly maintenance window.
    pub preferred_maintenance_window: Option<String>,
    /// Source identifier when creating a read replica cluster.
    pub replication_source_identifier: Option<String>,
    /// Tags to attach.
    pub tags: Option<Vec<Tag>>,
    /// Encrypt storage at rest.
    pub storage_encrypted: Option<bool>,
    /// KMS key for storage encryption.
    pub kms_key_id: Option<String>,
    /// Presigned source-region request, for cross-region encrypted
    /// replicas.
    pub pre_signed_url: Option<String>,
    /// Enable IAM database authentication.
    pub enable_iam_database_authentication: Option<bool>,
    /// Backtrack window, in seconds; 0 disables backtracking.
    pub backtrack_window: Option<i64>,
    /// Log types to export to CloudWatch Logs.
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,
    /// Engine mode: `provisioned`, `serverless`, `parallelquery`, `global`,
    /// or `multimaster`.
    pub engine_mode: Option<String>,
    /// Scaling configuration for a serverless cluster.
    pub scaling_configuration: Option<ScalingConfiguration>,
    /// Enable deletion protection.
    pub deletion_protection: Option<bool>,
    /// Global cluster the new cluster joins.
    pub global_cluster_identifier: Option<String>,
    /// Enable the HTTP endpoint (Data API) for a serverless cluster.
    pub enable_http_endpoint: Option<bool>,
    /// Copy tags to snapshots.
    pub copy_tags_to_snapshot: Option<bool>,
    /// Active Directory domain to join.
    pub domain: Option<String>,
    /// IAM role used when joining the domain.
    pub domain_iam_role_name: Option<String>,
}

impl CreateDbClusterInput {
    /// Returns a builder for `CreateDbClusterInput`.
    pub fn builder() -> CreateDbClusterInputBuilder {
        CreateDbClusterInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_create_db_cluster(self)?;
        build_query_request(config, body)
    }
}

impl std::fmt::Debug for CreateDbClusterInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateDbClusterInput")
            .field("availability_zones", &self.availability_zones)
            .field("backup_retention_period", &self.backup_retention_period)
            .field("character_set_name", &self.character_set_name)
            .field("database_name", &self.database_name)
            .field("db_cluster_identifier", &self.db_cluster_identifier)
            .field(
                "db_cluster_parameter_group_name",
                &self.db_cluster_parameter_group_name,
            )
            .field("vpc_security_group_ids", &self.vpc_security_group_ids)
            .field("db_subnet_group_name", &self.db_subnet_group_name)
            .field("engine", &self.engine)
            .field("engine_version", &self.engine_version)
            .field("port", &self.port)
            .field("master_username", &self.master_username)
            .field("master_user_password", &"*** Sensitive Data Redacted ***")
            .field("option_group_name", &self.option_group_name)
            .field("preferred_backup_window", &self.preferred_backup_window)
            .field(
                "preferred_maintenance_window",
                &self.preferred_maintenance_window,
            )
            .field(
                "replication_source_identifier",
                &self.replication_source_identifier,
            )
            .field("tags", &self.tags)
            .field("storage_encrypted", &self.storage_encrypted)
            .field("kms_key_id", &self.kms_key_id)
            .field("pre_signed_url", &self.pre_signed_url)
            .field(
                "enable_iam_database_authentication",
                &self.enable_iam_database_authentication,
            )
            .field("backtrack_window", &self.backtrack_window)
            .field(
                "enable_cloudwatch_logs_exports",
                &self.enable_cloudwatch_logs_exports,
            )
            .field("engine_mode", &self.engine_mode)
            .field("scaling_configuration", &self.scaling_configuration)
            .field("deletion_protection", &self.deletion_protection)
            .field("global_cluster_identifier", &self.global_cluster_identifier)
            .field("enable_http_endpoint", &self.enable_http_endpoint)
            .field("copy_tags_to_snapshot", &self.copy_tags_to_snapshot)
            .field("domain", &self.domain)
            .field("domain_iam_role_name", &self.domain_iam_role_name)
            .finish()
    }
}

/// Builder for [`CreateDbClusterInput`].
#[derive(Clone, Default)]
pub struct CreateDbClusterInputBuilder {
    availability_zones: Option<Vec<String>>,
    backup_retention_period: Option<i32>,
    character_set_name: Option<String>,
    database_name: Option<String>,
    db_cluster_identifier: Option<String>,
    db_cluster_parameter_group_name: Option<String>,
    vpc_security_group_ids: Option<Vec<String>>,
    db_subnet_group_name: Option<String>,
    engine: Option<String>,
    engine_version: Option<String>,
    port: Option<i32>,
    master_username: Option<String>,
    master_user_password: Option<String>,
    option_group_name: Option<String>,
    preferred_backup_window: Option<String>,
    preferred_maintenance_window: Option<String>,
    replication_source_identifier: Option<String>,
    tags: Option<Vec<Tag>>,
    storage_encrypted: Option<bool>,
    kms_key_id: Option<String>,
    pre_signed_url: Option<String>,
    enable_iam_database_authentication: Option<bool>,
    backtrack_window: Option<i64>,
    enable_cloudwatch_logs_exports: Option<Vec<String>>,
    engine_mode: Option<String>,
    scaling_configuration: Option<ScalingConfiguration>,
    deletion_protection: Option<bool>,
    global_cluster_identifier: Option<String>,
    enable_http_endpoint: Option<bool>,
    copy_tags_to_snapshot: Option<bool>,
    domain: Option<String>,
    domain_iam_role_name: Option<String>,
}

impl std::fmt::Debug for CreateDbClusterInputBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateDbClusterInputBuilder")
            .field("db_cluster_identifier", &self.db_cluster_identifier)
            .field("master_user_password", &"*** Sensitive Data Redacted ***")
            .finish_non_exhaustive()
    }
}

impl CreateDbClusterInputBuilder {
    /// Appends an Availability Zone.
    pub fn availability_zones(mut self, input: impl Into<String>) -> Self {
        self.availability_zones
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the Availability Zones.
    pub fn set_availability_zones(mut self, input: Option<Vec<String>>) -> Self {
        self.availability_zones = input;
        self
    }

    /// Sets the backup retention period.
    pub fn backup_retention_period(mut self, input: i32) -> Self {
        self.backup_retention_period = Some(input);
        self
    }

    /// Sets or clears the backup retention period.
    pub fn set_backup_retention_period(mut self, input: Option<i32>) -> Self {
        self.backup_retention_period = input;
        self
    }

    /// Sets the character set name.
    pub fn character_set_name(mut self, input: impl Into<String>) -> Self {
        self.character_set_name = Some(input.into());
        self
    }

    /// Sets or clears the character set name.
    pub fn set_character_set_name(mut self, input: Option<String>) -> Self {
        self.character_set_name = input;
        self
    }

    /// Sets the initial database name.
    pub fn database_name(mut self, input: impl Into<String>) -> Self {
        self.database_name = Some(input.into());
        self
    }

    /// Sets or clears the initial database name.
    pub fn set_database_name(mut self, input: Option<String>) -> Self {
        self.database_name = input;
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

    /// Sets the cluster parameter group name.
    pub fn db_cluster_parameter_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_parameter_group_name = Some(input.into());
        self
    }

    /// Sets or clears the cluster parameter group name.
    pub fn set_db_cluster_parameter_group_name(mut self, input: Option<String>) -> Self {
        self.db_cluster_parameter_group_name = input;
        self
    }

    /// Appends a VPC security group ID.
    pub fn vpc_security_group_ids(mut self, input: impl Into<String>) -> Self {
        self.vpc_security_group_ids
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the VPC security group IDs.
    pub fn set_vpc_security_group_ids(mut self, input: Option<Vec<String>>) -> Self {
        self.vpc_security_group_ids = input;
        self
    }

    /// Sets the subnet group name.
    pub fn db_subnet_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(input.into());
        self
    }

    /// Sets or clears the subnet group name.
    pub fn set_db_subnet_group_name(mut self, input: Option<String>) -> Self {
        self.db_subnet_group_name = input;
        self
    }

    /// Sets the engine.
    pub fn engine(mut self, input: impl Into<String>) -> Self {
        self.engine = Some(input.into());
        self
    }

    /// Sets or clears the engine.
    pub fn set_engine(mut self, input: Option<String>) -> Self {
        self.engine = input;
        self
    }

    /// Sets the engine version.
    pub fn engine_version(mut self, input: impl Into<String>) -> Self {
        self.engine_version = Some(input.into());
        self
    }

    /// Sets or clears the engine version.
    pub fn set_engine_version(mut self, input: Option<String>) -> Self {
        self.engine_version = input;
        self
    }

    /// Sets the port.
    pub fn port(mut self, input: i32) -> Self {
        self.port = Some(input);
        self
    }

    /// Sets or clears the port.
    pub fn set_port(mut self, input: Option<i32>) -> Self {
        self.port = input;
        self
    }

    /// Sets the master username.
    pub fn master_username(mut self, input: impl Into<String>) -> Self {
        self.master_username = Some(input.into());
        self
    }

    /// Sets or clears the master username.
    pub fn set_master_username(mut self, input: Option<String>) -> Self {
        self.master_username = input;
        self
    }

    /// Sets the master password.
    pub fn master_user_password(mut self, input: impl Into<String>) -> Self {
        self.master_user_password = Some(input.into());
        self
    }

    /// Sets or clears the master password.
    pub fn set_master_user_password(mut self, input: Option<String>) -> Self {
        self.master_user_password = input;
        self
    }

    /// Sets the option group name.
    pub fn option_group_name(mut self, input: impl Into<String>) -> Self {
        self.option_group_name = Some(input.into());
        self
    }

    /// Sets or clears the option group name.
    pub fn set_option_group_name(mut self, input: Option<String>) -> Self {
        self.option_group_name = input;
        self
    }

    /// Sets the backup window.
    pub fn preferred_backup_window(mut self, input: impl Into<String>) -> Self {
        self.preferred_backup_window = Some(input.into());
        self
    }

    /// Sets or clears the backup window.
    pub fn set_preferred_backup_window(mut self, input: Option<String>) -> Self {
        self.preferred_backup_window = input;
        self
    }

    /// Sets the maintenance window.
    pub fn preferred_maintenance_window(mut self, input: impl Into<String>) -> Self {
        self.preferred_maintenance_window = Some(input.into());
        self
    }

    /// Sets or clears the maintenance window.
    pub fn set_preferred_maintenance_window(mut self, input: Option<String>) -> Self {
        self.preferred_maintenance_window = input;
        self
    }

    /// Sets the replication source identifier.
    pub fn replication_source_identifier(mut self, input: impl Into<String>) -> Self {
        self.replication_source_identifier = Some(input.into());
        self
    }

    /// Sets or clears the replication source identifier.
    pub fn set_replication_source_identifier(mut self, input: Option<String>) -> Self {
        self.replication_source_identifier = input;
        self
    }

    /// Appends a tag.
    pub fn tags(mut self, input: Tag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the tags.
    pub fn set_tags(mut self, input: Option<Vec<Tag>>) -> Self {
        self.tags = input;
        self
    }

    /// Sets the storage encryption flag.
    pub fn storage_encrypted(mut self, input: bool) -> Self {
        self.storage_encrypted = Some(input);
        self
    }

    /// Sets or clears the storage encryption flag.
    pub fn set_storage_encrypted(mut self, input: Option<bool>) -> Self {
        self.storage_encrypted = input;
        self
    }

    /// Sets the KMS key ID.
    pub fn kms_key_id(mut self, input: impl Into<String>) -> Self {
        self.kms_key_id = Some(input.into());
        self
    }

    /// Sets or clears the KMS key ID.
    pub fn set_kms_key_id(mut self, input: Option<String>) -> Self {
        self.kms_key_id = input;
        self
    }

    /// Sets the presigned URL.
    pub fn pre_signed_url(mut self, input: impl Into<String>) -> Self {
        self.pre_signed_url = Some(input.into());
        self
    }

    /// Sets or clears the presigned URL.
    pub fn set_pre_signed_url(mut self, input: Option<String>) -> Self {
        self.pre_signed_url = input;
        self
    }

    /// Sets the IAM database authentication flag.
    pub fn enable_iam_database_authentication(mut self, input: bool) -> Self {
        self.enable_iam_database_authentication = Some(input);
        self
    }

    /// Sets or clears the IAM database authentication flag.
    pub fn set_enable_iam_database_authentication(mut self, input: Option<bool>) -> Self {
        self.enable_iam_database_authentication = input;
        self
    }

    /// Sets the backtrack window.
    pub fn backtrack_window(mut self, input: i64) -> Self {
        self.backtrack_window = Some(input);
        self
    }

    /// Sets or clears the backtrack window.
    pub fn set_backtrack_window(mut self, input: Option<i64>) -> Self {
        self.backtrack_window = input;
        self
    }

    /// Appends a log type to export.
    pub fn enable_cloudwatch_logs_exports(mut self, input: impl Into<String>) -> Self {
        self.enable_cloudwatch_logs_exports
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the log types to export.
    pub fn set_enable_cloudwatch_logs_exports(mut self, input: Option<Vec<String>>) -> Self {
        self.enable_cloudwatch_logs_exports = input;
        self
    }

    /// Sets the engine mode.
    pub fn engine_mode(mut self, input: impl Into<String>) -> Self {
        self.engine_mode = Some(input.into());
        self
    }

    /// Sets or clears the engine mode.
    pub fn set_engine_mode(mut self, input: Option<String>) -> Self {
        self.engine_mode = input;
        self
    }

    /// Sets the scaling configuration.
    pub fn scaling_configuration(mut self, input: ScalingConfiguration) -> Self {
        self.scaling_configuration = Some(input);
        self
    }

    /// Sets or clears the scaling configuration.
    pub fn set_scaling_configuration(mut self, input: Option<ScalingConfiguration>) -> Self {
        self.scaling_configuration = input;
        self
    }

    /// Sets the deletion protection flag.
    pub fn deletion_protection(mut self, input: bool) -> Self {
        self.deletion_protection = Some(input);
        self
    }

    /// Sets or clears the deletion protection flag.
    pub fn set_deletion_protection(mut self, input: Option<bool>) -> Self {
        self.deletion_protection = input;
        self
    }

    /// Sets the global cluster identifier.
    pub fn global_cluster_identifier(mut self, input: impl Into<String>) -> Self {
        self.global_cluster_identifier = Some(input.into());
        self
    }

    /// Sets or clears the global cluster identifier.
    pub fn set_global_cluster_identifier(mut self, input: Option<String>) -> Self {
        self.global_cluster_identifier = input;
        self
    }

    /// Sets the HTTP endpoint flag.
    pub fn enable_http_endpoint(mut self, input: bool) -> Self {
        self.enable_http_endpoint = Some(input);
        self
    }

    /// Sets or clears the HTTP endpoint flag.
    pub fn set_enable_http_endpoint(mut self, input: Option<bool>) -> Self {
        self.enable_http_endpoint = input;
        self
    }

    /// Sets the copy-tags-to-snapshot flag.
    pub fn copy_tags_to_snapshot(mut self, input: bool) -> Self {
        self.copy_tags_to_snapshot = Some(input);
        self
    }

    /// Sets or clears the copy-tags-to-snapshot flag.
    pub fn set_copy_tags_to_snapshot(mut self, input: Option<bool>) -> Self {
        self.copy_tags_to_snapshot = input;
        self
    }

    /// Sets the domain.
    pub fn domain(mut self, input: impl Into<String>) -> Self {
        self.domain = Some(input.into());
        self
    }

    /// Sets or clears the domain.
    pub fn set_domain(mut self, input: Option<String>) -> Self {
        self.domain = input;
        self
    }

    /// Sets the domain IAM role name.
    pub fn domain_iam_role_name(mut self, input: impl Into<String>) -> Self {
        self.domain_iam_role_name = Some(input.into());
        self
    }

    /// Sets or clears the domain IAM role name.
    pub fn set_domain_iam_role_name(mut self, input: Option<String>) -> Self {
        self.domain_iam_role_name = input;
        self
    }

    /// Builds the [`CreateDbClusterInput`].
    pub fn build(self) -> CreateDbClusterInput {
        CreateDbClusterInput {
            availability_zones: self.availability_zones,
            backup_retention_period: self.backup_retention_period,
            character_set_name: self.character_set_name,
            database_name: self.database_name,
            db_cluster_identifier: self.db_cluster_identifier,
            db_cluster_parameter_group_name: self.db_cluster_parameter_group_name,
            vpc_security_group_ids: self.vpc_security_group_ids,
            db_subnet_group_name: self.db_subnet_group_name,
            engine: self.engine,
            engine_version: self.engine_version,
            port: self.port,
            master_username: self.master_username,
            master_user_password: self.master_user_password,
            option_group_name: self.option_group_name,
            preferred_backup_window: self.preferred_backup_window,
            preferred_maintenance_window: self.preferred_maintenance_window,
            replication_source_identifier: self.replication_source_identifier,
            tags: self.tags,
            storage_encrypted: self.storage_encrypted,
            kms_key_id: self.kms_key_id,
            pre_signed_url: self.pre_signed_url,
            enable_iam_database_authentication: self.enable_iam_database_authentication,
            backtrack_window: self.backtrack_window,
            enable_cloudwatch_logs_exports: self.enable_cloudwatch_logs_exports,
            engine_mode: self.engine_mode,
            scaling_configuration: self.scaling_configuration,
            deletion_protection: self.deletion_protection,
            global_cluster_identifier: self.global_cluster_identifier,
            enable_http_endpoint: self.enable_http_endpoint,
            copy_tags_to_snapshot: self.copy_tags_to_snapshot,
            domain: self.domain,
            domain_iam_role_name: self.domain_iam_role_name,
        }
    }
}

/// Input for `ModifyDBCluster`.
///
/// `Debug` redacts the master password.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct ModifyDbClusterInput {
    /// Cluster to modify.
    pub db_cluster_identifier: Option<String>,
    /// Rename the cluster.
    pub new_db_cluster_identifier: Option<String>,
    /// Apply changes now rather than in the next maintenance window.
    pub apply_immediately: Option<bool>,
    /// New backup retention period.
    pub backup_retention_period: Option<i32>,
    /// New cluster parameter group.
    pub db_cluster_parameter_group_name: Option<String>,
    /// VPC security groups to associate.
    pub vpc_security_group_ids: Option<Vec<String>>,
    /// New port.
    pub port: Option<i32>,
    /// New master password.
    pub master_user_password: Option<String>,
    /// New option group.
    pub option_group_name: Option<String>,
    /// New backup window.
    pub preferred_backup_window: Option<String>,
    /// New maintenance window.
    pub preferred_maintenance_window: Option<String>,
    /// Enable IAM database authentication.
    pub enable_iam_database_authentication: Option<bool>,
    /// Backtrack window, in seconds; 0 disables backtracking.
    pub backtrack_window: Option<i64>,
    /// Log types to start or stop exporting.
    pub cloudwatch_logs_export_configuration: Option<CloudwatchLogsExportConfiguration>,
    /// New engine version.
    pub engine_version: Option<String>,
    /// Allow upgrades that change the major engine version.
    pub allow_major_version_upgrade: Option<bool>,
    /// Parameter group applied to instances during a major version upgrade.
    pub db_instance_parameter_group_name: Option<String>,
    /// Active Directory domain to move the cluster to.
    pub domain: Option<String>,
    /// IAM role used when joining the domain.
    pub domain_iam_role_name: Option<String>,
    /// Scaling configuration for a serverless cluster.
    pub scaling_configuration: Option<ScalingConfiguration>,
    /// Enable deletion protection.
    pub deletion_protection: Option<bool>,
    /// Enable the HTTP endpoint (Data API) for a serverless cluster.
    pub enable_http_endpoint: Option<bool>,
    /// Copy tags to snapshots.
    pub copy_tags_to_snapshot: Option<bool>,
}

impl ModifyDbClusterInput {
    /// Returns a builder for `ModifyDbClusterInput`.
    pub fn builder() -> ModifyDbClusterInputBuilder {
        ModifyDbClusterInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_modify_db_cluster(self)?;
        build_query_request(config, body)
    }
}

impl std::fmt::Debug for ModifyDbClusterInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModifyDbClusterInput")
            .field("db_cluster_identifier", &self.db_cluster_identifier)
            .field("new_db_cluster_identifier", &self.new_db_cluster_identifier)
            .field("apply_immediately", &self.apply_immediately)
            .field("backup_retention_period", &self.backup_retention_period)
            .field(
                "db_cluster_parameter_group_name",
                &self.db_cluster_parameter_group_name,
            )
            .field("vpc_security_group_ids", &self.vpc_security_group_ids)
            .field("port", &self.port)
            .field("master_user_password", &"*** Sensitive Data Redacted ***")
            .field("option_group_name", &self.option_group_name)
            .field("preferred_backup_window", &self.preferred_backup_window)
            .field(
                "preferred_maintenance_window",
                &self.preferred_maintenance_window,
            )
            .field(
                "enable_iam_database_authentication",
                &self.enable_iam_database_authentication,
            )
            .field("backtrack_window", &self.backtrack_window)
            .field(
                "cloudwatch_logs_export_configuration",
                &self.cloudwatch_logs_export_configuration,
            )
            .field("engine_version", &self.engine_version)
            .field("allow_major_version_upgrade", &self.allow_major_version_upgrade)
            .field(
                "db_instance_parameter_group_name",
                &self.db_instance_parameter_group_name,
            )
            .field("domain", &self.domain)
            .field("domain_iam_role_name", &self.domain_iam_role_name)
            .field("scaling_configuration", &self.scaling_configuration)
            .field("deletion_protection", &self.deletion_protection)
            .field("enable_http_endpoint", &self.enable_http_endpoint)
            .field("copy_tags_to_snapshot", &self.copy_tags_to_snapshot)
            .finish()
    }
}

/// Builder for [`ModifyDbClusterInput`].
#[derive(Clone, Default)]
pub struct ModifyDbClusterInputBuilder {
    db_cluster_identifier: Option<String>,
    new_db_cluster_identifier: Option<String>,
    apply_immediately: Option<bool>,
    backup_retention_period: Option<i32>,
    db_cluster_parameter_group_name: Option<String>,
    vpc_security_group_ids: Option<Vec<String>>,
    port: Option<i32>,
    master_user_password: Option<String>,
    option_group_name: Option<String>,
    preferred_backup_window: Option<String>,
    preferred_maintenance_window: Option<String>,
    enable_iam_database_authentication: Option<bool>,
    backtrack_window: Option<i64>,
    cloudwatch_logs_export_configuration: Option<CloudwatchLogsExportConfiguration>,
    engine_version: Option<String>,
    allow_major_version_upgrade: Option<bool>,
    db_instance_parameter_group_name: Option<String>,
    domain: Option<String>,
    domain_iam_role_name: Option<String>,
    scaling_configuration: Option<ScalingConfiguration>,
    deletion_protection: Option<bool>,
    enable_http_endpoint: Option<bool>,
    copy_tags_to_snapshot: Option<bool>,
}

impl std::fmt::Debug for ModifyDbClusterInputBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModifyDbClusterInputBuilder")
            .field("db_cluster_identifier", &self.db_cluster_identifier)
            .field("master_user_password", &"*** Sensitive Data Redacted ***")
            .finish_non_exhaustive()
    }
}

impl ModifyDbClusterInputBuilder {
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

    /// Sets the new cluster identifier.
    pub fn new_db_cluster_identifier(mut self, input: impl Into<String>) -> Self {
        self.new_db_cluster_identifier = Some(input.into());
        self
    }

    /// Sets or clears the new cluster identifier.
    pub fn set_new_db_cluster_identifier(mut self, input: Option<String>) -> Self {
        self.new_db_cluster_identifier = input;
        self
    }

    /// Sets the apply-immediately flag.
    pub fn apply_immediately(mut self, input: bool) -> Self {
        self.apply_immediately = Some(input);
        self
    }

    /// Sets or clears the apply-immediately flag.
    pub fn set_apply_immediately(mut self, input: Option<bool>) -> Self {
        self.apply_immediately = input;
        self
    }

    /// Sets the backup retention period.
    pub fn backup_retention_period(mut self, input: i32) -> Self {
        self.backup_retention_period = Some(input);
        self
    }

    /// Sets or clears the backup retention period.
    pub fn set_backup_retention_period(mut self, input: Option<i32>) -> Self {
        self.backup_retention_period = input;
        self
    }

    /// Sets the cluster parameter group name.
    pub fn db_cluster_parameter_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_parameter_group_name = Some(input.into());
        self
    }

    /// Sets or clears the cluster parameter group name.
    pub fn set_db_cluster_parameter_group_name(mut self, input: Option<String>) -> Self {
        self.db_cluster_parameter_group_name = input;
        self
    }

    /// Appends a VPC security group ID.
    pub fn vpc_security_group_ids(mut self, input: impl Into<String>) -> Self {
        self.vpc_security_group_ids
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the VPC security group IDs.
    pub fn set_vpc_security_group_ids(mut self, input: Option<Vec<String>>) -> Self {
        self.vpc_security_group_ids = input;
        self
    }

    /// Sets the port.
    pub fn port(mut self, input: i32) -> Self {
        self.port = Some(input);
        self
    }

    /// Sets or clears the port.
    pub fn set_port(mut self, input: Option<i32>) -> Self {
        self.port = input;
        self
    }

    /// Sets the master password.
    pub fn master_user_password(mut self, input: impl Into<String>) -> Self {
        self.master_user_password = Some(input.into());
        self
    }

    /// Sets or clears the master password.
    pub fn set_master_user_password(mut self, input: Option<String>) -> Self {
        self.master_user_password = input;
        self
    }

    /// Sets the option group name.
    pub fn option_group_name(mut self, input: impl Into<String>) -> Self {
        self.option_group_name = Some(input.into());
        self
    }

    /// Sets or clears the option group name.
    pub fn set_option_group_name(mut self, input: Option<String>) -> Self {
        self.option_group_name = input;
        self
    }

    /// Sets the backup window.
    pub fn preferred_backup_window(mut self, input: impl Into<String>) -> Self {
        self.preferred_backup_window = Some(input.into());
        self
    }

    /// Sets or clears the backup window.
    pub fn set_preferred_backup_window(mut self, input: Option<String>) -> Self {
        self.preferred_backup_window = input;
        self
    }

    /// Sets the maintenance window.
    pub fn preferred_maintenance_window(mut self, input: impl Into<String>) -> Self {
        self.preferred_maintenance_window = Some(input.into());
        self
    }

    /// Sets or clears the maintenance window.
    pub fn set_preferred_maintenance_window(mut self, input: Option<String>) -> Self {
        self.preferred_maintenance_window = input;
        self
    }

    /// Sets the IAM database authentication flag.
    pub fn enable_iam_database_authentication(mut self, input: bool) -> Self {
        self.enable_iam_database_authentication = Some(input);
        self
    }

    /// Sets or clears the IAM database authentication flag.
    pub fn set_enable_iam_database_authentication(mut self, input: Option<bool>) -> Self {
        self.enable_iam_database_authentication = input;
        self
    }

    /// Sets the backtrack window.
    pub fn backtrack_window(mut self, input: i64) -> Self {
        self.backtrack_window = Some(input);
        self
    }

    /// Sets or clears the backtrack window.
    pub fn set_backtrack_window(mut self, input: Option<i64>) -> Self {
        self.backtrack_window = input;
        self
    }

    /// Sets the CloudWatch Logs export changes.
    pub fn cloudwatch_logs_export_configuration(
        mut self,
        input: CloudwatchLogsExportConfiguration,
    ) -> Self {
        self.cloudwatch_logs_export_configuration = Some(input);
        self
    }

    /// Sets or clears the CloudWatch Logs export changes.
    pub fn set_cloudwatch_logs_export_configuration(
        mut self,
        input: Option<CloudwatchLogsExportConfiguration>,
    ) -> Self {
        self.cloudwatch_logs_export_configuration = input;
        self
    }

    /// Sets the engine version.
    pub fn engine_version(mut self, input: impl Into<String>) -> Self {
        self.engine_version = Some(input.into());
        self
    }

    /// Sets or clears the engine version.
    pub fn set_engine_version(mut self, input: Option<String>) -> Self {
        self.engine_version = input;
        self
    }

    /// Sets the major version upgrade flag.
    pub fn allow_major_version_upgrade(mut self, input: bool) -> Self {
        self.allow_major_version_upgrade = Some(input);
        self
    }

    /// Sets or clears the major version upgrade flag.
    pub fn set_allow_major_version_upgrade(mut self, input: Option<bool>) -> Self {
        self.allow_major_version_upgrade = input;
        self
    }

    /// Sets the instance parameter group used during major upgrades.
    pub fn db_instance_parameter_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_instance_parameter_group_name = Some(input.into());
        self
    }

    /// Sets or clears the instance parameter group used during major
    /// upgrades.
    pub fn set_db_instance_parameter_group_name(mut self, input: Option<String>) -> Self {
        self.db_instance_parameter_group_name = input;
        self
    }

    /// Sets the domain.
    pub fn domain(mut self, input: impl Into<String>) -> Self {
        self.domain = Some(input.into());
        self
    }

    /// Sets or clears the domain.
    pub fn set_domain(mut self, input: Option<String>) -> Self {
        self.domain = input;
        self
    }

    /// Sets the domain IAM role name.
    pub fn domain_iam_role_name(mut self, input: impl Into<String>) -> Self {
        self.domain_iam_role_name = Some(input.into());
        self
    }

    /// Sets or clears the domain IAM role name.
    pub fn set_domain_iam_role_name(mut self, input: Option<String>) -> Self {
        self.domain_iam_role_name = input;
        self
    }

    /// Sets the scaling configuration.
    pub fn scaling_configuration(mut self, input: ScalingConfiguration) -> Self {
        self.scaling_configuration = Some(input);
        self
    }

    /// Sets or clears the scaling configuration.
    pub fn set_scaling_configuration(mut self, input: Option<ScalingConfiguration>) -> Self {
        self.scaling_configuration = input;
        self
    }

    /// Sets the deletion protection flag.
    pub fn deletion_protection(mut self, input: bool) -> Self {
        self.deletion_protection = Some(input);
        self
    }

    /// Sets or clears the deletion protection flag.
    pub fn set_deletion_protection(mut self, input: Option<bool>) -> Self {
        self.deletion_protection = input;
        self
    }

    /// Sets the HTTP endpoint flag.
    pub fn enable_http_endpoint(mut self, input: bool) -> Self {
        self.enable_http_endpoint = Some(input);
        self
    }

    /// Sets or clears the HTTP endpoint flag.
    pub fn set_enable_http_endpoint(mut self, input: Option<bool>) -> Self {
        self.enable_http_endpoint = input;
        self
    }

    /// Sets the copy-tags-to-snapshot flag.
    pub fn copy_tags_to_snapshot(mut self, input: bool) -> Self {
        self.copy_tags_to_snapshot = Some(input);
        self
    }

    /// Sets or clears the copy-tags-to-snapshot flag.
    pub fn set_copy_tags_to_snapshot(mut self, input: Option<bool>) -> Self {
        self.copy_tags_to_snapshot = input;
        self
    }

    /// Builds the [`ModifyDbClusterInput`].
    pub fn build(self) -> ModifyDbClusterInput {
        ModifyDbClusterInput {
            db_cluster_identifier: self.db_cluster_identifier,
            new_db_cluster_identifier: self.new_db_cluster_identifier,
            apply_immediately: self.apply_immediately,
            backup_retention_period: self.backup_retention_period,
            db_cluster_parameter_group_name: self.db_cluster_parameter_group_name,
            vpc_security_group_ids: self.vpc_security_group_ids,
            port: self.port,
            master_user_password: self.master_user_password,
            option_group_name: self.option_group_name,
            preferred_backup_window: self.preferred_backup_window,
            preferred_maintenance_window: self.preferred_maintenance_window,
            enable_iam_database_authentication: self.enable_iam_database_authentication,
            backtrack_window: self.backtrack_window,
            cloudwatch_logs_export_configuration: self.cloudwatch_logs_export_configuration,
            engine_version: self.engine_version,
            allow_major_version_upgrade: self.allow_major_version_upgrade,
            db_instance_parameter_group_name: self.db_instance_parameter_group_name,
            domain: self.domain,
            domain_iam_role_name: self.domain_iam_role_name,
            scaling_configuration: self.scaling_configuration,
            deletion_protection: self.deletion_protection,
            enable_http_endpoint: self.enable_http_endpoint,
            copy_tags_to_snapshot: self.copy_tags_to_snapshot,
        }
    }
}

/// Input for `RestoreDBClusterFromSnapshot`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RestoreDbClusterFromSnapshotInput {
    /// Availability Zones for the restored cluster.
    pub availability_zones: Option<Vec<String>>,
    /// Identifier for the restored cluster.
    pub db_cluster_identifier: Option<String>,
    /// Cluster snapshot or DB snapshot to restore from.
    pub snapshot_identifier: Option<String>,
    /// Engine; must be compatible with the snapshot's.
    pub engine: Option<String>,
    /// Engine version.
    pub engine_version: Option<String>,
    /// Port the engine listens on.
    pub port: Option<i32>,
    /// Subnet group for the cluster.
    pub db_subnet_group_name: Option<String>,
    /// Database name for the restored cluster.
    pub database_name: Option<String>,
    /// Option group to associate.
    pub option_group_name: Option<String>,
    /// VPC security groups to associate.
    pub vpc_security_group_ids: Option<Vec<String>>,
    /// Tags to attach.
    pub tags: Option<Vec<Tag>>,
    /// KMS key to re-encrypt the restored cluster with.
    pub kms_key_id: Option<String>,
    /// Enable IAM database authentication.
    pub enable_iam_database_authentication: Option<bool>,
    /// Backtrack window, in seconds; 0 disables backtracking.
    pub backtrack_window: Option<i64>,
    /// Log types to export to CloudWatch Logs.
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,
    /// Engine mode of the restored cluster.
    pub engine_mode: Option<String>,
    /// Scaling configuration for a serverless cluster.
    pub scaling_configuration: Option<ScalingConfiguration>,
    /// Cluster parameter group to apply.
    pub db_cluster_parameter_group_name: Option<String>,
    /// Enable deletion protection.
    pub deletion_protection: Option<bool>,
    /// Copy tags to snapshots.
    pub copy_tags_to_snapshot: Option<bool>,
    /// Active Directory domain to join.
    pub domain: Option<String>,
    /// IAM role used when joining the domain.
    pub domain_iam_role_name: Option<String>,
}

impl RestoreDbClusterFromSnapshotInput {
    /// Returns a builder for `RestoreDbClusterFromSnapshotInput`.
    pub fn builder() -> RestoreDbClusterFromSnapshotInputBuilder {
        RestoreDbClusterFromSnapshotInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_restore_db_cluster_from_snapshot(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`RestoreDbClusterFromSnapshotInput`].
#[derive(Clone, Debug, Default)]
pub struct RestoreDbClusterFromSnapshotInputBuilder {
    availability_zones: Option<Vec<String>>,
    db_cluster_identifier: Option<String>,
    snapshot_identifier: Option<String>,
    engine: Option<String>,
    engine_version: Option<String>,
    port: Option<i32>,
    db_subnet_group_name: Option<String>,
    database_name: Option<String>,
    option_group_name: Option<String>,
    vpc_security_group_ids: Option<Vec<String>>,
    tags: Option<Vec<Tag>>,
    kms_key_id: Option<String>,
    enable_iam_database_authentication: Option<bool>,
    backtrack_window: Option<i64>,
    enable_cloudwatch_logs_exports: Option<Vec<String>>,
    engine_mode: Option<String>,
    scaling_configuration: Option<ScalingConfiguration>,
    db_cluster_parameter_group_name: Option<String>,
    deletion_protection: Option<bool>,
    copy_tags_to_snapshot: Option<bool>,
    domain: Option<String>,
    domain_iam_role_name: Option<String>,
}

impl RestoreDbClusterFromSnapshotInputBuilder {
    /// Appends an Availability Zone.
    pub fn availability_zones(mut self, input: impl Into<String>) -> Self {
        self.availability_zones
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the Availability Zones.
    pub fn set_availability_zones(mut self, input: Option<Vec<String>>) -> Self {
        self.availability_zones = input;
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

    /// Sets the snapshot identifier.
    pub fn snapshot_identifier(mut self, input: impl Into<String>) -> Self {
        self.snapshot_identifier = Some(input.into());
        self
    }

    /// Sets or clears the snapshot identifier.
    pub fn set_snapshot_identifier(mut self, input: Option<String>) -> Self {
        self.snapshot_identifier = input;
        self
    }

    /// Sets the engine.
    pub fn engine(mut self, input: impl Into<String>) -> Self {
        self.engine = Some(input.into());
        self
    }

    /// Sets or clears the engine.
    pub fn set_engine(mut self, input: Option<String>) -> Self {
        self.engine = input;
        self
    }

    /// Sets the engine version.
    pub fn engine_version(mut self, input: impl Into<String>) -> Self {
        self.engine_version = Some(input.into());
        self
    }

    /// Sets or clears the engine version.
    pub fn set_engine_version(mut self, input: Option<String>) -> Self {
        self.engine_version = input;
        self
    }

    /// Sets the port.
    pub fn port(mut self, input: i32) -> Self {
        self.port = Some(input);
        self
    }

    /// Sets or clears the port.
    pub fn set_port(mut self, input: Option<i32>) -> Self {
        self.port = input;
        self
    }

    /// Sets the subnet group name.
    pub fn db_subnet_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(input.into());
        self
    }

    /// Sets or clears the subnet group name.
    pub fn set_db_subnet_group_name(mut self, input: Option<String>) -> Self {
        self.db_subnet_group_name = input;
        self
    }

    /// Sets the database name.
    pub fn database_name(mut self, input: impl Into<String>) -> Self {
        self.database_name = Some(input.into());
        self
    }

    /// Sets or clears the database name.
    pub fn set_database_name(mut self, input: Option<String>) -> Self {
        self.database_name = input;
        self
    }

    /// Sets the option group name.
    pub fn option_group_name(mut self, input: impl Into<String>) -> Self {
        self.option_group_name = Some(input.into());
        self
    }

    /// Sets or clears the option group name.
    pub fn set_option_group_name(mut self, input: Option<String>) -> Self {
        self.option_group_name = input;
        self
    }

    /// Appends a VPC security group ID.
    pub fn vpc_security_group_ids(mut self, input: impl Into<String>) -> Self {
        self.vpc_security_group_ids
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the VPC security group IDs.
    pub fn set_vpc_security_group_ids(mut self, input: Option<Vec<String>>) -> Self {
        self.vpc_security_group_ids = input;
        self
    }

    /// Appends a tag.
    pub fn tags(mut self, input: Tag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the tags.
    pub fn set_tags(mut self, input: Option<Vec<Tag>>) -> Self {
        self.tags = input;
        self
    }

    /// Sets the KMS key ID.
    pub fn kms_key_id(mut self, input: impl Into<String>) -> Self {
        self.kms_key_id = Some(input.into());
        self
    }

    /// Sets or clears the KMS key ID.
    pub fn set_kms_key_id(mut self, input: Option<String>) -> Self {
        self.kms_key_id = input;
        self
    }

    /// Sets the IAM database authentication flag.
    pub fn enable_iam_database_authentication(mut self, input: bool) -> Self {
        self.enable_iam_database_authentication = Some(input);
        self
    }

    /// Sets or clears the IAM database authentication flag.
    pub fn set_enable_iam_database_authentication(mut self, input: Option<bool>) -> Self {
        self.enable_iam_database_authentication = input;
        self
    }

    /// Sets the backtrack window.
    pub fn backtrack_window(mut self, input: i64) -> Self {
        self.backtrack_window = Some(input);
        self
    }

    /// Sets or clears the backtrack window.
    pub fn set_backtrack_window(mut self, input: Option<i64>) -> Self {
        self.backtrack_window = input;
        self
    }

    /// Appends a log type to export.
    pub fn enable_cloudwatch_logs_exports(mut self, input: impl Into<String>) -> Self {
        self.enable_cloudwatch_logs_exports
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the log types to export.
    pub fn set_enable_cloudwatch_logs_exports(mut self, input: Option<Vec<String>>) -> Self {
        self.enable_cloudwatch_logs_exports = input;
        self
    }

    /// Sets the engine mode.
    pub fn engine_mode(mut self, input: impl Into<String>) -> Self {
        self.engine_mode = Some(input.into());
        self
    }

    /// Sets or clears the engine mode.
    pub fn set_engine_mode(mut self, input: Option<String>) -> Self {
        self.engine_mode = input;
        self
    }

    /// Sets the scaling configuration.
    pub fn scaling_configuration(mut self, input: ScalingConfiguration) -> Self {
        self.scaling_configuration = Some(input);
        self
    }

    /// Sets or clears the scaling configuration.
    pub fn set_scaling_configuration(mut self, input: Option<ScalingConfiguration>) -> Self {
        self.scaling_configuration = input;
        self
    }

    /// Sets the cluster parameter group name.
    pub fn db_cluster_parameter_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_parameter_group_name = Some(input.into());
        self
    }

    /// Sets or clears the cluster parameter group name.
    pub fn set_db_cluster_parameter_group_name(mut self, input: Option<String>) -> Self {
        self.db_cluster_parameter_group_name = input;
        self
    }

    /// Sets the deletion protection flag.
    pub fn deletion_protection(mut self, input: bool) -> Self {
        self.deletion_protection = Some(input);
        self
    }

    /// Sets or clears the deletion protection flag.
    pub fn set_deletion_protection(mut self, input: Option<bool>) -> Self {
        self.deletion_protection = input;
        self
    }

    /// Sets the copy-tags-to-snapshot flag.
    pub fn copy_tags_to_snapshot(mut self, input: bool) -> Self {
        self.copy_tags_to_snapshot = Some(input);
        self
    }

    /// Sets or clears the copy-tags-to-snapshot flag.
    pub fn set_copy_tags_to_snapshot(mut self, input: Option<bool>) -> Self {
        self.copy_tags_to_snapshot = input;
        self
    }

    /// Sets the domain.
    pub fn domain(mut self, input: impl Into<String>) -> Self {
        self.domain = Some(input.into());
        self
    }

    /// Sets or clears the domain.
    pub fn set_domain(mut self, input: Option<String>) -> Self {
        self.domain = input;
        self
    }

    /// Sets the domain IAM role name.
    pub fn domain_iam_role_name(mut self, input: impl Into<String>) -> Self {
        self.domain_iam_role_name = Some(input.into());
        self
    }

    /// Sets or clears the domain IAM role name.
    pub fn set_domain_iam_role_name(mut self, input: Option<String>) -> Self {
        self.domain_iam_role_name = input;
        self
    }

    /// Builds the [`RestoreDbClusterFromSnapshotInput`].
    pub fn build(self) -> RestoreDbClusterFromSnapshotInput {
        RestoreDbClusterFromSnapshotInput {
            availability_zones: self.availability_zones,
            db_cluster_identifier: self.db_cluster_identifier,
            snapshot_identifier: self.snapshot_identifier,
            engine: self.engine,
            engine_version: self.engine_version,
            port: self.port,
            db_subnet_group_name: self.db_subnet_group_name,
            database_name: self.database_name,
            option_group_name: self.option_group_name,
            vpc_security_group_ids: self.vpc_security_group_ids,
            tags: self.tags,
            kms_key_id: self.kms_key_id,
            enable_iam_database_authentication: self.enable_iam_database_authentication,
            backtrack_window: self.backtrack_window,
            enable_cloudwatch_logs_exports: self.enable_cloudwatch_logs_exports,
            engine_mode: self.engine_mode,
            scaling_configuration: self.scaling_configuration,
            db_cluster_parameter_group_name: self.db_cluster_parameter_group_name,
            deletion_protection: self.deletion_protection,
            copy_tags_to_snapshot: self.copy_tags_to_snapshot,
            domain: self.domain,
            domain_iam_role_name: self.domain_iam_role_name,
        }
    }
}

/// Input for `RestoreDBClusterFromS3`: create an Aurora cluster from a MySQL
/// backup staged in an S3 bucket.
///
/// `Debug` redacts the master password.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct RestoreDbClusterFromS3Input {
    /// Availability Zones for the restored cluster.
    pub availability_zones: Option<Vec<String>>,
    /// Days to retain automated backups.
    pub backup_retention_period: Option<i32>,
    /// Character set, for engines that support one.
    pub character_set_name: Option<String>,
    /// Name of the initial database to create.
    pub database_name: Option<String>,
    /// Identifier for the restored cluster.
    pub db_cluster_identifier: Option<String>,
    /// Cluster parameter group to apply.
    pub db_cluster_parameter_group_name: Option<String>,
    /// VPC security groups to associate.
    pub vpc_security_group_ids: Option<Vec<String>>,
    /// Subnet group for the cluster.
    pub db_subnet_group_name: Option<String>,
    /// Database engine; only `aurora` variants are supported.
    pub engine: Option<String>,
    /// Engine version.
    pub engine_version: Option<String>,
    /// Port the engine listens on.
    pub port: Option<i32>,
    /// Master username.
    pub master_username: Option<String>,
    /// Master password.
    pub master_user_password: Option<String>,
    /// Option group to associate.
    pub option_group_name: Option<String>,
    /// Daily backup window.
    pub preferred_backup_window: Option<String>,
    /// Weekly maintenance window.
    pub preferred_maintenance_window: Option<String>,
    /// Tags to attach.
    pub tags: Option<Vec<Tag>>,
    /// Encrypt storage at rest.
    pub storage_encrypted: Option<bool>,
    /// KMS key for storage encryption.
    pub kms_key_id: Option<String>,
    /// Enable IAM database authentication.
    pub enable_iam_database_authentication: Option<bool>,
    /// Engine of the source backup; only `mysql` is supported.
    pub source_engine: Option<String>,
    /// Version of the source backup's engine.
    pub source_engine_version: Option<String>,
    /// Bucket holding the backup.
    pub s3_bucket_name: Option<String>,
    /// Key prefix of the backup within the bucket.
    pub s3_prefix: Option<String>,
    /// IAM role RDS assumes to read the bucket.
    pub s3_ingestion_role_arn: Option<String>,
    /// Backtrack window, in seconds; 0 disables backtracking.
    pub backtrack_window: Option<i64>,
    /// Log types to export to CloudWatch Logs.
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,
    /// Enable deletion protection.
    pub deletion_protection: Option<bool>,
    /// Copy tags to snapshots.
    pub copy_tags_to_snapshot: Option<bool>,
    /// Active Directory domain to join.
    pub domain: Option<String>,
    /// IAM role used when joining the domain.
    pub domain_iam_role_name: Option<String>,
}

impl RestoreDbClusterFromS3Input {
    /// Returns a builder for `RestoreDbClusterFromS3Input`.
    pub fn builder() -> RestoreDbClusterFromS3InputBuilder {
        RestoreDbClusterFromS3InputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_restore_db_cluster_from_s3(self)?;
        build_query_request(config, body)
    }
}

impl std::fmt::Debug for RestoreDbClusterFromS3Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestoreDbClusterFromS3Input")
            .field("availability_zones", &self.availability_zones)
            .field("backup_retention_period", &self.backup_retention_period)
            .field("character_set_name", &self.character_set_name)
            .field("database_name", &self.database_name)
            .field("db_cluster_identifier", &self.db_cluster_identifier)
            .field(
                "db_cluster_parameter_group_name",
                &self.db_cluster_parameter_group_name,
            )
            .field("vpc_security_group_ids", &self.vpc_security_group_ids)
            .field("db_subnet_group_name", &self.db_subnet_group_name)
            .field("engine", &self.engine)
            .field("engine_version", &self.engine_version)
            .field("port", &self.port)
            .field("master_username", &self.master_username)
            .field("master_user_password", &"*** Sensitive Data Redacted ***")
            .field("option_group_name", &self.option_group_name)
            .field("preferred_backup_window", &self.preferred_backup_window)
            .field(
                "preferred_maintenance_window",
                &self.preferred_maintenance_window,
            )
            .field("tags", &self.tags)
            .field("storage_encrypted", &self.storage_encrypted)
            .field("kms_key_id", &self.kms_key_id)
            .field(
                "enable_iam_database_authentication",
                &self.enable_iam_database_authentication,
            )
            .field("source_engine", &self.source_engine)
            .field("source_engine_version", &self.source_engine_version)
            .field("s3_bucket_name", &self.s3_bucket_name)
            .field("s3_prefix", &self.s3_prefix)
            .field("s3_ingestion_role_arn", &self.s3_ingestion_role_arn)
            .field("backtrack_window", &self.backtrack_window)
            .field(
                "enable_cloudwatch_logs_exports",
                &self.enable_cloudwatch_logs_exports,
            )
            .field("deletion_protection", &self.deletion_protection)
            .field("copy_tags_to_snapshot", &self.copy_tags_to_snapshot)
            .field("domain", &self.domain)
            .field("domain_iam_role_name", &self.domain_iam_role_name)
            .finish()
    }
}

/// Builder for [`RestoreDbClusterFromS3Input`].
#[derive(Clone, Default)]
pub struct RestoreDbClusterFromS3InputBuilder {
    availability_zones: Option<Vec<String>>,
    backup_retention_period: Option<i32>,
    character_set_name: Option<String>,
    database_name: Option<String>,
    db_cluster_identifier: Option<String>,
    db_cluster_parameter_group_name: Option<String>,
    vpc_security_group_ids: Option<Vec<String>>,
    db_subnet_group_name: Option<String>,
    engine: Option<String>,
    engine_version: Option<String>,
    port: Option<i32>,
    master_username: Option<String>,
    master_user_password: Option<String>,
    option_group_name: Option<String>,
    preferred_backup_window: Option<String>,
    preferred_maintenance_window: Option<String>,
    tags: Option<Vec<Tag>>,
    storage_encrypted: Option<bool>,
    kms_key_id: Option<String>,
    enable_iam_database_authentication: Option<bool>,
    source_engine: Option<String>,
    source_engine_version: Option<String>,
    s3_bucket_name: Option<String>,
    s3_prefix: Option<String>,
    s3_ingestion_role_arn: Option<String>,
    backtrack_window: Option<i64>,
    enable_cloudwatch_logs_exports: Option<Vec<String>>,
    deletion_protection: Option<bool>,
    copy_tags_to_snapshot: Option<bool>,
    domain: Option<String>,
    domain_iam_role_name: Option<String>,
}

impl std::fmt::Debug for RestoreDbClusterFromS3InputBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestoreDbClusterFromS3InputBuilder")
            .field("db_cluster_identifier", &self.db_cluster_identifier)
            .field("master_user_password", &"*** Sensitive Data Redacted ***")
            .finish_non_exhaustive()
    }
}

impl RestoreDbClusterFromS3InputBuilder {
    /// Appends an Availability Zone.
    pub fn availability_zones(mut self, input: impl Into<String>) -> Self {
        self.availability_zones
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the Availability Zones.
    pub fn set_availability_zones(mut self, input: Option<Vec<String>>) -> Self {
        self.availability_zones = input;
        self
    }

    /// Sets the backup retention period.
    pub fn backup_retention_period(mut self, input: i32) -> Self {
        self.backup_retention_period = Some(input);
        self
    }

    /// Sets or clears the backup retention period.
    pub fn set_backup_retention_period(mut self, input: Option<i32>) -> Self {
        self.backup_retention_period = input;
        self
    }

    /// Sets the character set name.
    pub fn character_set_name(mut self, input: impl Into<String>) -> Self {
        self.character_set_name = Some(input.into());
        self
    }

    /// Sets or clears the character set name.
    pub fn set_character_set_name(mut self, input: Option<String>) -> Self {
        self.character_set_name = input;
        self
    }

    /// Sets the initial database name.
    pub fn database_name(mut self, input: impl Into<String>) -> Self {
        self.database_name = Some(input.into());
        self
    }

    /// Sets or clears the initial database name.
    pub fn set_database_name(mut self, input: Option<String>) -> Self {
        self.database_name = input;
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

    /// Sets the cluster parameter group name.
    pub fn db_cluster_parameter_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_parameter_group_name = Some(input.into());
        self
    }

    /// Sets or clears the cluster parameter group name.
    pub fn set_db_cluster_parameter_group_name(mut self, input: Option<String>) -> Self {
        self.db_cluster_parameter_group_name = input;
        self
    }

    /// Appends a VPC security group ID.
    pub fn vpc_security_group_ids(mut self, input: impl Into<String>) -> Self {
        self.vpc_security_group_ids
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the VPC security group IDs.
    pub fn set_vpc_security_group_ids(mut self, input: Option<Vec<String>>) -> Self {
        self.vpc_security_group_ids = input;
        self
    }

    /// Sets the subnet group name.
    pub fn db_subnet_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(input.into());
        self
    }

    /// Sets or clears the subnet group name.
    pub fn set_db_subnet_group_name(mut self, input: Option<String>) -> Self {
        self.db_subnet_group_name = input;
        self
    }

    /// Sets the engine.
    pub fn engine(mut self, input: impl Into<String>) -> Self {
        self.engine = Some(input.into());
        self
    }

    /// Sets or clears the engine.
    pub fn set_engine(mut self, input: Option<String>) -> Self {
        self.engine = input;
        self
    }

    /// Sets the engine version.
    pub fn engine_version(mut self, input: impl Into<String>) -> Self {
        self.engine_version = Some(input.into());
        self
    }

    /// Sets or clears the engine version.
    pub fn set_engine_version(mut self, input: Option<String>) -> Self {
        self.engine_version = input;
        self
    }

    /// Sets the port.
    pub fn port(mut self, input: i32) -> Self {
        self.port = Some(input);
        self
    }

    /// Sets or clears the port.
    pub fn set_port(mut self, input: Option<i32>) -> Self {
        self.port = input;
        self
    }

    /// Sets the master username.
    pub fn master_username(mut self, input: impl Into<String>) -> Self {
        self.master_username = Some(input.into());
        self
    }

    /// Sets or clears the master username.
    pub fn set_master_username(mut self, input: Option<String>) -> Self {
        self.master_username = input;
        self
    }

    /// Sets the master password.
    pub fn master_user_password(mut self, input: impl Into<String>) -> Self {
        self.master_user_password = Some(input.into());
        self
    }

    /// Sets or clears the master password.
    pub fn set_master_user_password(mut self, input: Option<String>) -> Self {
        self.master_user_password = input;
        self
    }

    /// Sets the option group name.
    pub fn option_group_name(mut self, input: impl Into<String>) -> Self {
        self.option_group_name = Some(input.into());
        self
    }

    /// Sets or clears the option group name.
    pub fn set_option_group_name(mut self, input: Option<String>) -> Self {
        self.option_group_name = input;
        self
    }

    /// Sets the backup window.
    pub fn preferred_backup_window(mut self, input: impl Into<String>) -> Self {
        self.preferred_backup_window = Some(input.into());
        self
    }

    /// Sets or clears the backup window.
    pub fn set_preferred_backup_window(mut self, input: Option<String>) -> Self {
        self.preferred_backup_window = input;
        self
    }

    /// Sets the maintenance window.
    pub fn preferred_maintenance_window(mut self, input: impl Into<String>) -> Self {
        self.preferred_maintenance_window = Some(input.into());
        self
    }

    /// Sets or clears the maintenance window.
    pub fn set_preferred_maintenance_window(mut self, input: Option<String>) -> Self {
        self.preferred_maintenance_window = input;
        self
    }

    /// Appends a tag.
    pub fn tags(mut self, input: Tag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the tags.
    pub fn set_tags(mut self, input: Option<Vec<Tag>>) -> Self {
        self.tags = input;
        self
    }

    /// Sets the storage encryption flag.
    pub fn storage_encrypted(mut self, input: bool) -> Self {
        self.storage_encrypted = Some(input);
        self
    }

    /// Sets or clears the storage encryption flag.
    pub fn set_storage_encrypted(mut self, input: Option<bool>) -> Self {
        self.storage_encrypted = input;
        self
    }

    /// Sets the KMS key ID.
    pub fn kms_key_id(mut self, input: impl Into<String>) -> Self {
        self.kms_key_id = Some(input.into());
        self
    }

    /// Sets or clears the KMS key ID.
    pub fn set_kms_key_id(mut self, input: Option<String>) -> Self {
        self.kms_key_id = input;
        self
    }

    /// Sets the IAM database authentication flag.
    pub fn enable_iam_database_authentication(mut self, input: bool) -> Self {
        self.enable_iam_database_authentication = Some(input);
        self
    }

    /// Sets or clears the IAM database authentication flag.
    pub fn set_enable_iam_database_authentication(mut self, input: Option<bool>) -> Self {
        self.enable_iam_database_authentication = input;
        self
    }

    /// Sets the source engine.
    pub fn source_engine(mut self, input: impl Into<String>) -> Self {
        self.source_engine = Some(input.into());
        self
    }

    /// Sets or clears the source engine.
    pub fn set_source_engine(mut self, input: Option<String>) -> Self {
        self.source_engine = input;
        self
    }

    /// Sets the source engine version.
    pub fn source_engine_version(mut self, input: impl Into<String>) -> Self {
        self.source_engine_version = Some(input.into());
        self
    }

    /// Sets or clears the source engine version.
    pub fn set_source_engine_version(mut self, input: Option<String>) -> Self {
        self.source_engine_version = input;
        self
    }

    /// Sets the S3 bucket name.
    pub fn s3_bucket_name(mut self, input: impl Into<String>) -> Self {
        self.s3_bucket_name = Some(input.into());
        self
    }

    /// Sets or clears the S3 bucket name.
    pub fn set_s3_bucket_name(mut self, input: Option<String>) -> Self {
        self.s3_bucket_name = input;
        self
    }

    /// Sets the S3 key prefix.
    pub fn s3_prefix(mut self, input: impl Into<String>) -> Self {
        self.s3_prefix = Some(input.into());
        self
    }

    /// Sets or clears the S3 key prefix.
    pub fn set_s3_prefix(mut self, input: Option<String>) -> Self {
        self.s3_prefix = input;
        self
    }

    /// Sets the S3 ingestion role ARN.
    pub fn s3_ingestion_role_arn(mut self, input: impl Into<String>) -> Self {
        self.s3_ingestion_role_arn = Some(input.into());
        self
    }

    /// Sets or clears the S3 ingestion role ARN.
    pub fn set_s3_ingestion_role_arn(mut self, input: Option<String>) -> Self {
        self.s3_ingestion_role_arn = input;
        self
    }

    /// Sets the backtrack window.
    pub fn backtrack_window(mut self, input: i64) -> Self {
        self.backtrack_window = Some(input);
        self
    }

    /// Sets or clears the backtrack window.
    pub fn set_backtrack_window(mut self, input: Option<i64>) -> Self {
        self.backtrack_window = input;
        self
    }

    /// Appends a log type to export.
    pub fn enable_cloudwatch_logs_exports(mut self, input: impl Into<String>) -> Self {
        self.enable_cloudwatch_logs_exports
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the log types to export.
    pub fn set_enable_cloudwatch_logs_exports(mut self, input: Option<Vec<String>>) -> Self {
        self.enable_cloudwatch_logs_exports = input;
        self
    }

    /// Sets the deletion protection flag.
    pub fn deletion_protection(mut self, input: bool) -> Self {
        self.deletion_protection = Some(input);
        self
    }

    /// Sets or clears the deletion protection flag.
    pub fn set_deletion_protection(mut self, input: Option<bool>) -> Self {
        self.deletion_protection = input;
        self
    }

    /// Sets the copy-tags-to-snapshot flag.
    pub fn copy_tags_to_snapshot(mut self, input: bool) -> Self {
        self.copy_tags_to_snapshot = Some(input);
        self
    }

    /// Sets or clears the copy-tags-to-snapshot flag.
    pub fn set_copy_tags_to_snapshot(mut self, input: Option<bool>) -> Self {
        self.copy_tags_to_snapshot = input;
        self
    }

    /// Sets the domain.
    pub fn domain(mut self, input: impl Into<String>) -> Self {
        self.domain = Some(input.into());
        self
    }

    /// Sets or clears the domain.
    pub fn set_domain(mut self, input: Option<String>) -> Self {
        self.domain = input;
        self
    }

    /// Sets the domain IAM role name.
    pub fn domain_iam_role_name(mut self, input: impl Into<String>) -> Self {
        self.domain_iam_role_name = Some(input.into());
        self
    }

    /// Sets or clears the domain IAM role name.
    pub fn set_domain_iam_role_name(mut self, input: Option<String>) -> Self {
        self.domain_iam_role_name = input;
        self
    }

    /// Builds the [`RestoreDbClusterFromS3Input`].
    pub fn build(self) -> RestoreDbClusterFromS3Input {
        RestoreDbClusterFromS3Input {
            availability_zones: self.availability_zones,
            backup_retention_period: self.backup_retention_period,
            character_set_name: self.character_set_name,
            database_name: self.database_name,
            db_cluster_identifier: self.db_cluster_identifier,
            db_cluster_parameter_group_name: self.db_cluster_parameter_group_name,
            vpc_security_group_ids: self.vpc_security_group_ids,
            db_subnet_group_name: self.db_subnet_group_name,
            engine: self.engine,
            engine_version: self.engine_version,
            port: self.port,
            master_username: self.master_username,
            master_user_password: self.master_user_password,
            option_group_name: self.option_group_name,
            preferred_backup_window: self.preferred_backup_window,
            preferred_maintenance_window: self.preferred_maintenance_window,
            tags: self.tags,
            storage_encrypted: self.storage_encrypted,
            kms_key_id: self.kms_key_id,
            enable_iam_database_authentication: self.enable_iam_database_authentication,
            source_engine: self.source_engine,
            source_engine_version: self.source_engine_version,
            s3_bucket_name: self.s3_bucket_name,
            s3_prefix: self.s3_prefix,
            s3_ingestion_role_arn: self.s3_ingestion_role_arn,
            backtrack_window: self.backtrack_window,
            enable_cloudwatch_logs_exports: self.enable_cloudwatch_logs_exports,
            deletion_protection: self.deletion_protection,
            copy_tags_to_snapshot: self.copy_tags_to_snapshot,
            domain: self.domain,
            domain_iam_role_name: self.domain_iam_role_name,
        }
    }
}

/// Input for `RestoreDBClusterToPointInTime`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RestoreDbClusterToPointInTimeInput {
    /// Identifier for the restored cluster.
    pub db_cluster_identifier: Option<String>,
    /// `full-copy` or `copy-on-write`.
    pub restore_type: Option<String>,
    /// Cluster to restore from.
    pub source_db_cluster_identifier: Option<String>,
    /// Point in time to restore to; mutually exclusive with
    /// `use_latest_restorable_time`.
    pub restore_to_time: Option<DateTime>,
    /// Restore to the latest backtrack-able time.
    pub use_latest_restorable_time: Option<bool>,
    /// Port the engine listens on.
    pub port: Option<i32>,
    /// Subnet group for the cluster.
    pub db_subnet_group_name: Option<String>,
    /// Option group to associate.
    pub option_group_name: Option<String>,
    /// VPC security groups to associate.
    pub vpc_security_group_ids: Option<Vec<String>>,
    /// Tags to attach.
    pub tags: Option<Vec<Tag>>,
    /// KMS key to re-encrypt the restored cluster with.
    pub kms_key_id: Option<String>,
    /// Enable IAM database authentication.
    pub enable_iam_database_authentication: Option<bool>,
    /// Backtrack window, in seconds; 0 disables backtracking.
    pub backtrack_window: Option<i64>,
    /// Log types to export to CloudWatch Logs.
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,
    /// Cluster parameter group to apply.
    pub db_cluster_parameter_group_name: Option<String>,
    /// Enable deletion protection.
    pub deletion_protection: Option<bool>,
    /// Copy tags to snapshots.
    pub copy_tags_to_snapshot: Option<bool>,
    /// Active Directory domain to join.
    pub domain: Option<String>,
    /// IAM role used when joining the domain.
    pub domain_iam_role_name: Option<String>,
}

impl RestoreDbClusterToPointInTimeInput {
    /// Returns a builder for `RestoreDbClusterToPointInTimeInput`.
    pub fn builder() -> RestoreDbClusterToPointInTimeInputBuilder {
        RestoreDbClusterToPointInTimeInputBuilder::default()
    }

    /// Assembles the HTTP request for this operation.
    pub fn make_request(&self, config: &Config) -> Result<http::Request<String>, BuildError> {
        let body = crate::query_ser::serialize_restore_db_cluster_to_point_in_time(self)?;
        build_query_request(config, body)
    }
}

/// Builder for [`RestoreDbClusterToPointInTimeInput`].
#[derive(Clone, Debug, Default)]
pub struct RestoreDbClusterToPointInTimeInputBuilder {
    db_cluster_identifier: Option<String>,
    restore_type: Option<String>,
    source_db_cluster_identifier: Option<String>,
    restore_to_time: Option<DateTime>,
    use_latest_restorable_time: Option<bool>,
    port: Option<i32>,
    db_subnet_group_name: Option<String>,
    option_group_name: Option<String>,
    vpc_security_group_ids: Option<Vec<String>>,
    tags: Option<Vec<Tag>>,
    kms_key_id: Option<String>,
    enable_iam_database_authentication: Option<bool>,
    backtrack_window: Option<i64>,
    enable_cloudwatch_logs_exports: Option<Vec<String>>,
    db_cluster_parameter_group_name: Option<String>,
    deletion_protection: Option<bool>,
    copy_tags_to_snapshot: Option<bool>,
    domain: Option<String>,
    domain_iam_role_name: Option<String>,
}

impl RestoreDbClusterToPointInTimeInputBuilder {
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

    /// Sets the restore type.
    pub fn restore_type(mut self, input: impl Into<String>) -> Self {
        self.restore_type = Some(input.into());
        self
    }

    /// Sets or clears the restore type.
    pub fn set_restore_type(mut self, input: Option<String>) -> Self {
        self.restore_type = input;
        self
    }

    /// Sets the source cluster identifier.
    pub fn source_db_cluster_identifier(mut self, input: impl Into<String>) -> Self {
        self.source_db_cluster_identifier = Some(input.into());
        self
    }

    /// Sets or clears the source cluster identifier.
    pub fn set_source_db_cluster_identifier(mut self, input: Option<String>) -> Self {
        self.source_db_cluster_identifier = input;
        self
    }

    /// Sets the restore target time.
    pub fn restore_to_time(mut self, input: DateTime) -> Self {
        self.restore_to_time = Some(input);
        self
    }

    /// Sets or clears the restore target time.
    pub fn set_restore_to_time(mut self, input: Option<DateTime>) -> Self {
        self.restore_to_time = input;
        self
    }

    /// Sets the use-latest-restorable-time flag.
    pub fn use_latest_restorable_time(mut self, input: bool) -> Self {
        self.use_latest_restorable_time = Some(input);
        self
    }

    /// Sets or clears the use-latest-restorable-time flag.
    pub fn set_use_latest_restorable_time(mut self, input: Option<bool>) -> Self {
        self.use_latest_restorable_time = input;
        self
    }

    /// Sets the port.
    pub fn port(mut self, input: i32) -> Self {
        self.port = Some(input);
        self
    }

    /// Sets or clears the port.
    pub fn set_port(mut self, input: Option<i32>) -> Self {
        self.port = input;
        self
    }

    /// Sets the subnet group name.
    pub fn db_subnet_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(input.into());
        self
    }

    /// Sets or clears the subnet group name.
    pub fn set_db_subnet_group_name(mut self, input: Option<String>) -> Self {
        self.db_subnet_group_name = input;
        self
    }

    /// Sets the option group name.
    pub fn option_group_name(mut self, input: impl Into<String>) -> Self {
        self.option_group_name = Some(input.into());
        self
    }

    /// Sets or clears the option group name.
    pub fn set_option_group_name(mut self, input: Option<String>) -> Self {
        self.option_group_name = input;
        self
    }

    /// Appends a VPC security group ID.
    pub fn vpc_security_group_ids(mut self, input: impl Into<String>) -> Self {
        self.vpc_security_group_ids
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the VPC security group IDs.
    pub fn set_vpc_security_group_ids(mut self, input: Option<Vec<String>>) -> Self {
        self.vpc_security_group_ids = input;
        self
    }

    /// Appends a tag.
    pub fn tags(mut self, input: Tag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the tags.
    pub fn set_tags(mut self, input: Option<Vec<Tag>>) -> Self {
        self.tags = input;
        self
    }

    /// Sets the KMS key ID.
    pub fn kms_key_id(mut self, input: impl Into<String>) -> Self {
        self.kms_key_id = Some(input.into());
        self
    }

    /// Sets or clears the KMS key ID.
    pub fn set_kms_key_id(mut self, input: Option<String>) -> Self {
        self.kms_key_id = input;
        self
    }

    /// Sets the IAM database authentication flag.
    pub fn enable_iam_database_authentication(mut self, input: bool) -> Self {
        self.enable_iam_database_authentication = Some(input);
        self
    }

    /// Sets or clears the IAM database authentication flag.
    pub fn set_enable_iam_database_authentication(mut self, input: Option<bool>) -> Self {
        self.enable_iam_database_authentication = input;
        self
    }

    /// Sets the backtrack window.
    pub fn backtrack_window(mut self, input: i64) -> Self {
        self.backtrack_window = Some(input);
        self
    }

    /// Sets or clears the backtrack window.
    pub fn set_backtrack_window(mut self, input: Option<i64>) -> Self {
        self.backtrack_window = input;
        self
    }

    /// Appends a log type to export.
    pub fn enable_cloudwatch_logs_exports(mut self, input: impl Into<String>) -> Self {
        self.enable_cloudwatch_logs_exports
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the log types to export.
    pub fn set_enable_cloudwatch_logs_exports(mut self, input: Option<Vec<String>>) -> Self {
        self.enable_cloudwatch_logs_exports = input;
        self
    }

    /// Sets the cluster parameter group name.
    pub fn db_cluster_parameter_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_parameter_group_name = Some(input.into());
        self
    }

    /// Sets or clears the cluster parameter group name.
    pub fn set_db_cluster_parameter_group_name(mut self, input: Option<String>) -> Self {
        self.db_cluster_parameter_group_name = input;
        self
    }

    /// Sets the deletion protection flag.
    pub fn deletion_protection(mut self, input: bool) -> Self {
        self.deletion_protection = Some(input);
        self
    }

    /// Sets or clears the deletion protection flag.
    pub fn set_deletion_protection(mut self, input: Option<bool>) -> Self {
        self.deletion_protection = input;
        self
    }

    /// Sets the copy-tags-to-snapshot flag.
    pub fn copy_tags_to_snapshot(mut self, input: bool) -> Self {
        self.copy_tags_to_snapshot = Some(input);
        self
    }

    /// Sets or clears the copy-tags-to-snapshot flag.
    pub fn set_copy_tags_to_snapshot(mut self, input: Option<bool>) -> Self {
        self.copy_tags_to_snapshot = input;
        self
    }

    /// Sets the domain.
    pub fn domain(mut self, input: impl Into<String>) -> Self {
        self.domain = Some(input.into());
        self
    }

    /// Sets or clears the domain.
    pub fn set_domain(mut self, input: Option<String>) -> Self {
        self.domain = input;
        self
    }

    /// Sets the domain IAM role name.
    pub fn domain_iam_role_name(mut self, input: impl Into<String>) -> Self {
        self.domain_iam_role_name = Some(input.into());
        self
    }

    /// Sets or clears the domain IAM role name.
    pub fn set_domain_iam_role_name(mut self, input: Option<String>) -> Self {
        self.domain_iam_role_name = input;
        self
    }

    /// Builds the [`RestoreDbClusterToPointInTimeInput`].
    pub fn build(self) -> RestoreDbClusterToPointInTimeInput {
        RestoreDbClusterToPointInTimeInput {
            db_cluster_identifier: self.db_cluster_identifier,
            restore_type: self.restore_type,
            source_db_cluster_identifier: self.source_db_cluster_identifier,
            restore_to_time: self.restore_to_time,
            use_latest_restorable_time: self.use_latest_restorable_time,
            port: self.port,
            db_subnet_group_name: self.db_subnet_group_name,
            option_group_name: self.option_group_name,
            vpc_security_group_ids: self.vpc_security_group_ids,
            tags: self.tags,
            kms_key_id: self.kms_key_id,
            enable_iam_database_authentication: self.enable_iam_database_authentication,
            backtrack_window: self.backtrack_window,
            enable_cloudwatch_logs_exports: self.enable_cloudwatch_logs_exports,
            db_cluster_parameter_group_name: self.db_cluster_parameter_group_name,
            deletion_protection: self.deletion_protection,
            copy_tags_to_snapshot: self.copy_tags_to_snapshot,
            domain: self.domain,
            domain_iam_role_name: self.domain_iam_role_name,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::Tag;
    use aws_types::region::Region;

    fn config() -> Config {
        Config::builder().region(Region::new("us-east-1")).build()
    }

    #[test]
    fn make_request_posts_form_body_to_regional_endpoint() {
        let request = DescribeDbInstancesInput::builder()
            .db_instance_identifier("database-1")
            .build()
            .make_request(&config())
            .expect("request builds");
        assert_eq!(request.method(), http::Method::POST);
        assert_eq!(request.uri(), "https://rds.us-east-1.amazonaws.com/");
        assert_eq!(
            request.headers()[http::header::CONTENT_TYPE],
            "application/x-www-form-urlencoded"
        );
        assert!(request.body().contains("Action=DescribeDBInstances"));
        assert!(request.body().contains("Version=2014-10-31"));
    }

    #[test]
    fn make_request_without_endpoint_fails() {
        let err = StartDbInstanceInput::builder()
            .db_instance_identifier("database-1")
            .build()
            .make_request(&Config::default())
            .unwrap_err();
        assert!(matches!(err, BuildError::MissingEndpoint));
    }

    #[test]
    fn passwords_never_reach_debug_output() {
        let input = CreateDbInstanceInput::builder()
            .db_instance_identifier("database-1")
            .master_user_password("hunter2")
            .tde_credential_password("hunter3")
            .build();
        let rendered = format!("{:?}", input);
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("hunter3"));
        assert!(rendered.contains("database-1"));
    }

    #[test]
    fn list_setters_accumulate_in_order() {
        let input = AddTagsToResourceInput::builder()
            .resource_name("arn:aws:rds:us-east-1:123456789012:db:database-1")
            .tags(Tag::builder().key("env").value("prod").build())
            .tags(Tag::builder().key("team").value("data").build())
            .build();
        let tags = input.tags.as_deref().expect("tags set");
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].key.as_deref(), Some("env"));
        assert_eq!(tags[1].key.as_deref(), Some("team"));
    }
}
