/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Shared value types of the RDS API.
//!
//! Every type here is a plain record: optional fields, a fluent builder,
//! structural equality, and nothing else. Records are populated either by a
//! caller (request side) or by the XML deserializer (response side); no
//! invariants are enforced beyond what the wire shape requires.

use aws_smithy_types::DateTime;
use std::str::FromStr;

/// Error returned when a string does not name a member of a closed enum.
///
/// The RDS API models several fields as closed string sets. Lookup by wire
/// value fails loudly rather than admitting unrecognized values.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("`{value}` is not a valid `{shape}` value")]
pub struct InvalidEnumValue {
    shape: &'static str,
    value: String,
}

impl InvalidEnumValue {
    fn new(shape: &'static str, value: impl Into<String>) -> Self {
        Self {
            shape,
            value: value.into(),
        }
    }

    /// The name of the enum that rejected the value.
    pub fn shape(&self) -> &'static str {
        self.shape
    }

    /// The rejected value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Registration state of a DB proxy target.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[non_exhaustive]
pub enum TargetState {
    /// The target is in the process of being registered with the proxy.
    Registering,
    /// The target is available to serve connections.
    Available,
    /// The target is registered but cannot serve connections.
    Unavailable,
}

impl TargetState {
    /// Returns the wire value of this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetState::Registering => "REGISTERING",
            TargetState::Available => "AVAILABLE",
            TargetState::Unavailable => "UNAVAILABLE",
        }
    }

    /// All wire values for this enum.
    pub const fn values() -> &'static [&'static str] {
        &["AVAILABLE", "REGISTERING", "UNAVAILABLE"]
    }
}

impl FromStr for TargetState {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "REGISTERING" => Ok(TargetState::Registering),
            "AVAILABLE" => Ok(TargetState::Available),
            "UNAVAILABLE" => Ok(TargetState::Unavailable),
            other => Err(InvalidEnumValue::new("TargetState", other)),
        }
    }
}

/// Why a DB proxy target is in its current health state.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[non_exhaustive]
pub enum TargetHealthReason {
    /// The proxy cannot reach the target.
    Unreachable,
    /// The proxy established a network path but the connection failed.
    ConnectionFailed,
    /// The proxy could not authenticate against the target.
    AuthFailure,
    /// The proxy is waiting for capacity to track the target.
    PendingProxyCapacity,
}

impl TargetHealthReason {
    /// Returns the wire value of this reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetHealthReason::Unreachable => "UNREACHABLE",
            TargetHealthReason::ConnectionFailed => "CONNECTION_FAILED",
            TargetHealthReason::AuthFailure => "AUTH_FAILURE",
            TargetHealthReason::PendingProxyCapacity => "PENDING_PROXY_CAPACITY",
        }
    }

    /// All wire values for this enum.
    pub const fn values() -> &'static [&'static str] {
        &[
            "AUTH_FAILURE",
            "CONNECTION_FAILED",
            "PENDING_PROXY_CAPACITY",
            "UNREACHABLE",
        ]
    }
}

impl FromStr for TargetHealthReason {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNREACHABLE" => Ok(TargetHealthReason::Unreachable),
            "CONNECTION_FAILED" => Ok(TargetHealthReason::ConnectionFailed),
            "AUTH_FAILURE" => Ok(TargetHealthReason::AuthFailure),
            "PENDING_PROXY_CAPACITY" => Ok(TargetHealthReason::PendingProxyCapacity),
            other => Err(InvalidEnumValue::new("TargetHealthReason", other)),
        }
    }
}

/// What kind of resource a DB proxy target tracks.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[non_exhaustive]
pub enum TargetType {
    /// A standalone DB instance.
    RdsInstance,
    /// A serverless cluster endpoint.
    RdsServerlessEndpoint,
    /// A cluster whose membership the proxy tracks.
    TrackedCluster,
}

impl TargetType {
    /// Returns the wire value of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::RdsInstance => "RDS_INSTANCE",
            TargetType::RdsServerlessEndpoint => "RDS_SERVERLESS_ENDPOINT",
            TargetType::TrackedCluster => "TRACKED_CLUSTER",
        }
    }

    /// All wire values for this enum.
    pub const fn values() -> &'static [&'static str] {
        &["RDS_INSTANCE", "RDS_SERVERLESS_ENDPOINT", "TRACKED_CLUSTER"]
    }
}

impl FromStr for TargetType {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RDS_INSTANCE" => Ok(TargetType::RdsInstance),
            "RDS_SERVERLESS_ENDPOINT" => Ok(TargetType::RdsServerlessEndpoint),
            "TRACKED_CLUSTER" => Ok(TargetType::TrackedCluster),
            other => Err(InvalidEnumValue::new("TargetType", other)),
        }
    }
}

/// A key/value pair attached to an RDS resource.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Tag {
    /// Tag key. Up to 128 characters, must not begin with `aws:`.
    pub key: Option<String>,
    /// Tag value. Up to 256 characters.
    pub value: Option<String>,
}

impl Tag {
    /// Returns a builder for `Tag`.
    pub fn builder() -> TagBuilder {
        TagBuilder::default()
    }
}

/// Builder for [`Tag`].
#[derive(Clone, Debug, Default)]
pub struct TagBuilder {
    key: Option<String>,
    value: Option<String>,
}

impl TagBuilder {
    /// Sets the tag key.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Sets or clears the tag key.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Sets the tag value.
    pub fn value(mut self, input: impl Into<String>) -> Self {
        self.value = Some(input.into());
        self
    }

    /// Sets or clears the tag value.
    pub fn set_value(mut self, input: Option<String>) -> Self {
        self.value = input;
        self
    }

    /// Builds the [`Tag`].
    pub fn build(self) -> Tag {
        Tag {
            key: self.key,
            value: self.value,
        }
    }
}

/// A named filter applied to a describe operation.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Filter {
    /// Filter name, e.g. `db-instance-id` or `engine`.
    pub name: Option<String>,
    /// Values the named attribute is matched against.
    pub values: Option<Vec<String>>,
}

impl Filter {
    /// Returns a builder for `Filter`.
    pub fn builder() -> FilterBuilder {
        FilterBuilder::default()
    }
}

/// Builder for [`Filter`].
#[derive(Clone, Debug, Default)]
pub struct FilterBuilder {
    name: Option<String>,
    values: Option<Vec<String>>,
}

impl FilterBuilder {
    /// Sets the filter name.
    pub fn name(mut self, input: impl Into<String>) -> Self {
        self.name = Some(input.into());
        self
    }

    /// Sets or clears the filter name.
    pub fn set_name(mut self, input: Option<String>) -> Self {
        self.name = input;
        self
    }

    /// Appends a single filter value.
    pub fn values(mut self, input: impl Into<String>) -> Self {
        self.values.get_or_insert_with(Vec::new).push(input.into());
        self
    }

    /// Replaces the filter values wholesale.
    pub fn set_values(mut self, input: Option<Vec<String>>) -> Self {
        self.values = input;
        self
    }

    /// Builds the [`Filter`].
    pub fn build(self) -> Filter {
        Filter {
            name: self.name,
            values: self.values,
        }
    }
}

/// Connection endpoint of a DB instance.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Endpoint {
    /// DNS address of the instance.
    pub address: Option<String>,
    /// Port the database engine listens on.
    pub port: Option<i32>,
    /// Route 53 hosted zone ID of the endpoint.
    pub hosted_zone_id: Option<String>,
}

impl Endpoint {
    /// Returns a builder for `Endpoint`.
    pub fn builder() -> EndpointBuilder {
        EndpointBuilder::default()
    }
}

/// Builder for [`Endpoint`].
#[derive(Clone, Debug, Default)]
pub struct EndpointBuilder {
    address: Option<String>,
    port: Option<i32>,
    hosted_zone_id: Option<String>,
}

impl EndpointBuilder {
    /// Sets the DNS address.
    pub fn address(mut self, input: impl Into<String>) -> Self {
        self.address = Some(input.into());
        self
    }

    /// Sets or clears the DNS address.
    pub fn set_address(mut self, input: Option<String>) -> Self {
        self.address = input;
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

    /// Sets the hosted zone ID.
    pub fn hosted_zone_id(mut self, input: impl Into<String>) -> Self {
        self.hosted_zone_id = Some(input.into());
        self
    }

    /// Sets or clears the hosted zone ID.
    pub fn set_hosted_zone_id(mut self, input: Option<String>) -> Self {
        self.hosted_zone_id = input;
        self
    }

    /// Builds the [`Endpoint`].
    pub fn build(self) -> Endpoint {
        Endpoint {
            address: self.address,
            port: self.port,
            hosted_zone_id: self.hosted_zone_id,
        }
    }
}

/// An Availability Zone.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct AvailabilityZone {
    /// Zone name, e.g. `us-east-1a`.
    pub name: Option<String>,
}

impl AvailabilityZone {
    /// Returns a builder for `AvailabilityZone`.
    pub fn builder() -> AvailabilityZoneBuilder {
        AvailabilityZoneBuilder::default()
    }
}

/// Builder for [`AvailabilityZone`].
#[derive(Clone, Debug, Default)]
pub struct AvailabilityZoneBuilder {
    name: Option<String>,
}

impl AvailabilityZoneBuilder {
    /// Sets the zone name.
    pub fn name(mut self, input: impl Into<String>) -> Self {
        self.name = Some(input.into());
        self
    }

    /// Sets or clears the zone name.
    pub fn set_name(mut self, input: Option<String>) -> Self {
        self.name = input;
        self
    }

    /// Builds the [`AvailabilityZone`].
    pub fn build(self) -> AvailabilityZone {
        AvailabilityZone { name: self.name }
    }
}

/// A subnet within a DB subnet group.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Subnet {
    /// Subnet identifier.
    pub subnet_identifier: Option<String>,
    /// The Availability Zone of the subnet.
    pub subnet_availability_zone: Option<AvailabilityZone>,
    /// Subnet status.
    pub subnet_status: Option<String>,
}

impl Subnet {
    /// Returns a builder for `Subnet`.
    pub fn builder() -> SubnetBuilder {
        SubnetBuilder::default()
    }
}

/// Builder for [`Subnet`].
#[derive(Clone, Debug, Default)]
pub struct SubnetBuilder {
    subnet_identifier: Option<String>,
    subnet_availability_zone: Option<AvailabilityZone>,
    subnet_status: Option<String>,
}

impl SubnetBuilder {
    /// Sets the subnet identifier.
    pub fn subnet_identifier(mut self, input: impl Into<String>) -> Self {
        self.subnet_identifier = Some(input.into());
        self
    }

    /// Sets or clears the subnet identifier.
    pub fn set_subnet_identifier(mut self, input: Option<String>) -> Self {
        self.subnet_identifier = input;
        self
    }

    /// Sets the Availability Zone.
    pub fn subnet_availability_zone(mut self, input: AvailabilityZone) -> Self {
        self.subnet_availability_zone = Some(input);
        self
    }

    /// Sets or clears the Availability Zone.
    pub fn set_subnet_availability_zone(mut self, input: Option<AvailabilityZone>) -> Self {
        self.subnet_availability_zone = input;
        self
    }

    /// Sets the subnet status.
    pub fn subnet_status(mut self, input: impl Into<String>) -> Self {
        self.subnet_status = Some(input.into());
        self
    }

    /// Sets or clears the subnet status.
    pub fn set_subnet_status(mut self, input: Option<String>) -> Self {
        self.subnet_status = input;
        self
    }

    /// Builds the [`Subnet`].
    pub fn build(self) -> Subnet {
        Subnet {
            subnet_identifier: self.subnet_identifier,
            subnet_availability_zone: self.subnet_availability_zone,
            subnet_status: self.subnet_status,
        }
    }
}

/// Membership of a DB instance in a (classic) DB security group.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DbSecurityGroupMembership {
    /// Name of the DB security group.
    pub db_security_group_name: Option<String>,
    /// Membership status.
    pub status: Option<String>,
}

impl DbSecurityGroupMembership {
    /// Returns a builder for `DbSecurityGroupMembership`.
    pub fn builder() -> DbSecurityGroupMembershipBuilder {
        DbSecurityGroupMembershipBuilder::default()
    }
}

/// Builder for [`DbSecurityGroupMembership`].
#[derive(Clone, Debug, Default)]
pub struct DbSecurityGroupMembershipBuilder {
    db_security_group_name: Option<String>,
    status: Option<String>,
}

impl DbSecurityGroupMembershipBuilder {
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

    /// Sets the membership status.
    pub fn status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }

    /// Sets or clears the membership status.
    pub fn set_status(mut self, input: Option<String>) -> Self {
        self.status = input;
        self
    }

    /// Builds the [`DbSecurityGroupMembership`].
    pub fn build(self) -> DbSecurityGroupMembership {
        DbSecurityGroupMembership {
            db_security_group_name: self.db_security_group_name,
            status: self.status,
        }
    }
}

/// Membership of a DB instance or cluster in a VPC security group.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct VpcSecurityGroupMembership {
    /// VPC security group ID.
    pub vpc_security_group_id: Option<String>,
    /// Membership status.
    pub status: Option<String>,
}

impl VpcSecurityGroupMembership {
    /// Returns a builder for `VpcSecurityGroupMembership`.
    pub fn builder() -> VpcSecurityGroupMembershipBuilder {
        VpcSecurityGroupMembershipBuilder::default()
    }
}

/// Builder for [`VpcSecurityGroupMembership`].
#[derive(Clone, Debug, Default)]
pub struct VpcSecurityGroupMembershipBuilder {
    vpc_security_group_id: Option<String>,
    status: Option<String>,
}

impl VpcSecurityGroupMembershipBuilder {
    /// Sets the VPC security group ID.
    pub fn vpc_security_group_id(mut self, input: impl Into<String>) -> Self {
        self.vpc_security_group_id = Some(input.into());
        self
    }

    /// Sets or clears the VPC security group ID.
    pub fn set_vpc_security_group_id(mut self, input: Option<String>) -> Self {
        self.vpc_security_group_id = input;
        self
    }

    /// Sets the membership status.
    pub fn status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }

    /// Sets or clears the membership status.
    pub fn set_status(mut self, input: Option<String>) -> Self {
        self.status = input;
        self
    }

    /// Builds the [`VpcSecurityGroupMembership`].
    pub fn build(self) -> VpcSecurityGroupMembership {
        VpcSecurityGroupMembership {
            vpc_security_group_id: self.vpc_security_group_id,
            status: self.status,
        }
    }
}

/// Status of a DB parameter group applied to a DB instance.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DbParameterGroupStatus {
    /// Name of the parameter group.
    pub db_parameter_group_name: Option<String>,
    /// Parameter apply status, e.g. `in-sync` or `pending-reboot`.
    pub parameter_apply_status: Option<String>,
}

impl DbParameterGroupStatus {
    /// Returns a builder for `DbParameterGroupStatus`.
    pub fn builder() -> DbParameterGroupStatusBuilder {
        DbParameterGroupStatusBuilder::default()
    }
}

/// Builder for [`DbParameterGroupStatus`].
#[derive(Clone, Debug, Default)]
pub struct DbParameterGroupStatusBuilder {
    db_parameter_group_name: Option<String>,
    parameter_apply_status: Option<String>,
}

impl DbParameterGroupStatusBuilder {
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

    /// Sets the apply status.
    pub fn parameter_apply_status(mut self, input: impl Into<String>) -> Self {
        self.parameter_apply_status = Some(input.into());
        self
    }

    /// Sets or clears the apply status.
    pub fn set_parameter_apply_status(mut self, input: Option<String>) -> Self {
        self.parameter_apply_status = input;
        self
    }

    /// Builds the [`DbParameterGroupStatus`].
    pub fn build(self) -> DbParameterGroupStatus {
        DbParameterGroupStatus {
            db_parameter_group_name: self.db_parameter_group_name,
            parameter_apply_status: self.parameter_apply_status,
        }
    }
}

/// Membership of a DB instance in an option group.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct OptionGroupMembership {
    /// Name of the option group.
    pub option_group_name: Option<String>,
    /// Membership status.
    pub status: Option<String>,
}

impl OptionGroupMembership {
    /// Returns a builder for `OptionGroupMembership`.
    pub fn builder() -> OptionGroupMembershipBuilder {
        OptionGroupMembershipBuilder::default()
    }
}

/// Builder for [`OptionGroupMembership`].
#[derive(Clone, Debug, Default)]
pub struct OptionGroupMembershipBuilder {
    option_group_name: Option<String>,
    status: Option<String>,
}

impl OptionGroupMembershipBuilder {
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

    /// Sets the membership status.
    pub fn status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }

    /// Sets or clears the membership status.
    pub fn set_status(mut self, input: Option<String>) -> Self {
        self.status = input;
        self
    }

    /// Builds the [`OptionGroupMembership`].
    pub fn build(self) -> OptionGroupMembership {
        OptionGroupMembership {
            option_group_name: self.option_group_name,
            status: self.status,
        }
    }
}

/// Status detail of a DB instance, used by read replicas to surface
/// replication errors.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DbInstanceStatusInfo {
    /// Status type; currently always `read replication`.
    pub status_type: Option<String>,
    /// Whether the instance is operating normally.
    pub normal: Option<bool>,
    /// Status of the DB instance.
    pub status: Option<String>,
    /// Error details when the status is `error`.
    pub message: Option<String>,
}

impl DbInstanceStatusInfo {
    /// Returns a builder for `DbInstanceStatusInfo`.
    pub fn builder() -> DbInstanceStatusInfoBuilder {
        DbInstanceStatusInfoBuilder::default()
    }
}

/// Builder for [`DbInstanceStatusInfo`].
#[derive(Clone, Debug, Default)]
pub struct DbInstanceStatusInfoBuilder {
    status_type: Option<String>,
    normal: Option<bool>,
    status: Option<String>,
    message: Option<String>,
}

impl DbInstanceStatusInfoBuilder {
    /// Sets the status type.
    pub fn status_type(mut self, input: impl Into<String>) -> Self {
        self.status_type = Some(input.into());
        self
    }

    /// Sets or clears the status type.
    pub fn set_status_type(mut self, input: Option<String>) -> Self {
        self.status_type = input;
        self
    }

    /// Sets whether the instance is operating normally.
    pub fn normal(mut self, input: bool) -> Self {
        self.normal = Some(input);
        self
    }

    /// Sets or clears the normal flag.
    pub fn set_normal(mut self, input: Option<bool>) -> Self {
        self.normal = input;
        self
    }

    /// Sets the status.
    pub fn status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }

    /// Sets or clears the status.
    pub fn set_status(mut self, input: Option<String>) -> Self {
        self.status = input;
        self
    }

    /// Sets the error message.
    pub fn message(mut self, input: impl Into<String>) -> Self {
        self.message = Some(input.into());
        self
    }

    /// Sets or clears the error message.
    pub fn set_message(mut self, input: Option<String>) -> Self {
        self.message = input;
        self
    }

    /// Builds the [`DbInstanceStatusInfo`].
    pub fn build(self) -> DbInstanceStatusInfo {
        DbInstanceStatusInfo {
            status_type: self.status_type,
            normal: self.normal,
            status: self.status,
            message: self.message,
        }
    }
}

/// Active Directory domain membership of a DB instance or cluster.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DomainMembership {
    /// Directory Service domain identifier.
    pub domain: Option<String>,
    /// Membership status, e.g. `joined` or `pending-join`.
    pub status: Option<String>,
    /// Fully qualified domain name of the directory.
    pub fqdn: Option<String>,
    /// IAM role used when joining the domain.
    pub iam_role_name: Option<String>,
}

impl DomainMembership {
    /// Returns a builder for `DomainMembership`.
    pub fn builder() -> DomainMembershipBuilder {
        DomainMembershipBuilder::default()
    }
}

/// Builder for [`DomainMembership`].
#[derive(Clone, Debug, Default)]
pub struct DomainMembershipBuilder {
    domain: Option<String>,
    status: Option<String>,
    fqdn: Option<String>,
    iam_role_name: Option<String>,
}

impl DomainMembershipBuilder {
    /// Sets the domain identifier.
    pub fn domain(mut self, input: impl Into<String>) -> Self {
        self.domain = Some(input.into());
        self
    }

    /// Sets or clears the domain identifier.
    pub fn set_domain(mut self, input: Option<String>) -> Self {
        self.domain = input;
        self
    }

    /// Sets the membership status.
    pub fn status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }

    /// Sets or clears the membership status.
    pub fn set_status(mut self, input: Option<String>) -> Self {
        self.status = input;
        self
    }

    /// Sets the fully qualified domain name.
    pub fn fqdn(mut self, input: impl Into<String>) -> Self {
        self.fqdn = Some(input.into());
        self
    }

    /// Sets or clears the fully qualified domain name.
    pub fn set_fqdn(mut self, input: Option<String>) -> Self {
        self.fqdn = input;
        self
    }

    /// Sets the IAM role name.
    pub fn iam_role_name(mut self, input: impl Into<String>) -> Self {
        self.iam_role_name = Some(input.into());
        self
    }

    /// Sets or clears the IAM role name.
    pub fn set_iam_role_name(mut self, input: Option<String>) -> Self {
        self.iam_role_name = input;
        self
    }

    /// Builds the [`DomainMembership`].
    pub fn build(self) -> DomainMembership {
        DomainMembership {
            domain: self.domain,
            status: self.status,
            fqdn: self.fqdn,
            iam_role_name: self.iam_role_name,
        }
    }
}

/// An IAM role associated with a DB instance.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DbInstanceRole {
    /// ARN of the IAM role.
    pub role_arn: Option<String>,
    /// Feature the role is associated with.
    pub feature_name: Option<String>,
    /// Association status.
    pub status: Option<String>,
}

impl DbInstanceRole {
    /// Returns a builder for `DbInstanceRole`.
    pub fn builder() -> DbInstanceRoleBuilder {
        DbInstanceRoleBuilder::default()
    }
}

/// Builder for [`DbInstanceRole`].
#[derive(Clone, Debug, Default)]
pub struct DbInstanceRoleBuilder {
    role_arn: Option<String>,
    feature_name: Option<String>,
    status: Option<String>,
}

impl DbInstanceRoleBuilder {
    /// Sets the role ARN.
    pub fn role_arn(mut self, input: impl Into<String>) -> Self {
        self.role_arn = Some(input.into());
        self
    }

    /// Sets or clears the role ARN.
    pub fn set_role_arn(mut self, input: Option<String>) -> Self {
        self.role_arn = input;
        self
    }

    /// Sets the feature name.
    pub fn feature_name(mut self, input: impl Into<String>) -> Self {
        self.feature_name = Some(input.into());
        self
    }

    /// Sets or clears the feature name.
    pub fn set_feature_name(mut self, input: Option<String>) -> Self {
        self.feature_name = input;
        self
    }

    /// Sets the association status.
    pub fn status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }

    /// Sets or clears the association status.
    pub fn set_status(mut self, input: Option<String>) -> Self {
        self.status = input;
        self
    }

    /// Builds the [`DbInstanceRole`].
    pub fn build(self) -> DbInstanceRole {
        DbInstanceRole {
            role_arn: self.role_arn,
            feature_name: self.feature_name,
            status: self.status,
        }
    }
}

/// An IAM role associated with a DB cluster.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DbClusterRole {
    /// ARN of the IAM role.
    pub role_arn: Option<String>,
    /// Association status.
    pub status: Option<String>,
    /// Feature the role is associated with.
    pub feature_name: Option<String>,
}

impl DbClusterRole {
    /// Returns a builder for `DbClusterRole`.
    pub fn builder() -> DbClusterRoleBuilder {
        DbClusterRoleBuilder::default()
    }
}

/// Builder for [`DbClusterRole`].
#[derive(Clone, Debug, Default)]
pub struct DbClusterRoleBuilder {
    role_arn: Option<String>,
    status: Option<String>,
    feature_name: Option<String>,
}

impl DbClusterRoleBuilder {
    /// Sets the role ARN.
    pub fn role_arn(mut self, input: impl Into<String>) -> Self {
        self.role_arn = Some(input.into());
        self
    }

    /// Sets or clears the role ARN.
    pub fn set_role_arn(mut self, input: Option<String>) -> Self {
        self.role_arn = input;
        self
    }

    /// Sets the association status.
    pub fn status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }

    /// Sets or clears the association status.
    pub fn set_status(mut self, input: Option<String>) -> Self {
        self.status = input;
        self
    }

    /// Sets the feature name.
    pub fn feature_name(mut self, input: impl Into<String>) -> Self {
        self.feature_name = Some(input.into());
        self
    }

    /// Sets or clears the feature name.
    pub fn set_feature_name(mut self, input: Option<String>) -> Self {
        self.feature_name = input;
        self
    }

    /// Builds the [`DbClusterRole`].
    pub fn build(self) -> DbClusterRole {
        DbClusterRole {
            role_arn: self.role_arn,
            status: self.status,
            feature_name: self.feature_name,
        }
    }
}

/// A DB instance that is a member of a DB cluster.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DbClusterMember {
    /// Instance identifier of the member.
    pub db_instance_identifier: Option<String>,
    /// Whether the member is the writer for its cluster.
    pub is_cluster_writer: Option<bool>,
    /// Status of the cluster parameter group for this member.
    pub db_cluster_parameter_group_status: Option<String>,
    /// Failover priority; lower values fail over first.
    pub promotion_tier: Option<i32>,
}

impl DbClusterMember {
    /// Returns a builder for `DbClusterMember`.
    pub fn builder() -> DbClusterMemberBuilder {
        DbClusterMemberBuilder::default()
    }
}

/// Builder for [`DbClusterMember`].
#[derive(Clone, Debug, Default)]
pub struct DbClusterMemberBuilder {
    db_instance_identifier: Option<String>,
    is_cluster_writer: Option<bool>,
    db_cluster_parameter_group_status: Option<String>,
    promotion_tier: Option<i32>,
}

impl DbClusterMemberBuilder {
    /// Sets the member instance identifier.
    pub fn db_instance_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(input.into());
        self
    }

    /// Sets or clears the member instance identifier.
    pub fn set_db_instance_identifier(mut self, input: Option<String>) -> Self {
        self.db_instance_identifier = input;
        self
    }

    /// Sets whether the member is the cluster writer.
    pub fn is_cluster_writer(mut self, input: bool) -> Self {
        self.is_cluster_writer = Some(input);
        self
    }

    /// Sets or clears the writer flag.
    pub fn set_is_cluster_writer(mut self, input: Option<bool>) -> Self {
        self.is_cluster_writer = input;
        self
    }

    /// Sets the cluster parameter group status.
    pub fn db_cluster_parameter_group_status(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_parameter_group_status = Some(input.into());
        self
    }

    /// Sets or clears the cluster parameter group status.
    pub fn set_db_cluster_parameter_group_status(mut self, input: Option<String>) -> Self {
        self.db_cluster_parameter_group_status = input;
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

    /// Builds the [`DbClusterMember`].
    pub fn build(self) -> DbClusterMember {
        DbClusterMember {
            db_instance_identifier: self.db_instance_identifier,
            is_cluster_writer: self.is_cluster_writer,
            db_cluster_parameter_group_status: self.db_cluster_parameter_group_status,
            promotion_tier: self.promotion_tier,
        }
    }
}

/// Membership of a DB cluster in an option group.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DbClusterOptionGroupStatus {
    /// Name of the option group.
    pub db_cluster_option_group_name: Option<String>,
    /// Membership status.
    pub status: Option<String>,
}

impl DbClusterOptionGroupStatus {
    /// Returns a builder for `DbClusterOptionGroupStatus`.
    pub fn builder() -> DbClusterOptionGroupStatusBuilder {
        DbClusterOptionGroupStatusBuilder::default()
    }
}

/// Builder for [`DbClusterOptionGroupStatus`].
#[derive(Clone, Debug, Default)]
pub struct DbClusterOptionGroupStatusBuilder {
    db_cluster_option_group_name: Option<String>,
    status: Option<String>,
}

impl DbClusterOptionGroupStatusBuilder {
    /// Sets the option group name.
    pub fn db_cluster_option_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_option_group_name = Some(input.into());
        self
    }

    /// Sets or clears the option group name.
    pub fn set_db_cluster_option_group_name(mut self, input: Option<String>) -> Self {
        self.db_cluster_option_group_name = input;
        self
    }

    /// Sets the membership status.
    pub fn status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }

    /// Sets or clears the membership status.
    pub fn set_status(mut self, input: Option<String>) -> Self {
        self.status = input;
        self
    }

    /// Builds the [`DbClusterOptionGroupStatus`].
    pub fn build(self) -> DbClusterOptionGroupStatus {
        DbClusterOptionGroupStatus {
            db_cluster_option_group_name: self.db_cluster_option_group_name,
            status: self.status,
        }
    }
}

/// A processor feature of a DB instance class, e.g. `coreCount` or
/// `threadsPerCore`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ProcessorFeature {
    /// Feature name.
    pub name: Option<String>,
    /// Feature value.
    pub value: Option<String>,
}

impl ProcessorFeature {
    /// Returns a builder for `ProcessorFeature`.
    pub fn builder() -> ProcessorFeatureBuilder {
        ProcessorFeatureBuilder::default()
    }
}

/// Builder for [`ProcessorFeature`].
#[derive(Clone, Debug, Default)]
pub struct ProcessorFeatureBuilder {
    name: Option<String>,
    value: Option<String>,
}

impl ProcessorFeatureBuilder {
    /// Sets the feature name.
    pub fn name(mut self, input: impl Into<String>) -> Self {
        self.name = Some(input.into());
        self
    }

    /// Sets or clears the feature name.
    pub fn set_name(mut self, input: Option<String>) -> Self {
        self.name = input;
        self
    }

    /// Sets the feature value.
    pub fn value(mut self, input: impl Into<String>) -> Self {
        self.value = Some(input.into());
        self
    }

    /// Sets or clears the feature value.
    pub fn set_value(mut self, input: Option<String>) -> Self {
        self.value = input;
        self
    }

    /// Builds the [`ProcessorFeature`].
    pub fn build(self) -> ProcessorFeature {
        ProcessorFeature {
            name: self.name,
            value: self.value,
        }
    }
}

/// A processor feature available on an orderable DB instance class, with its
/// default and allowed values.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct AvailableProcessorFeature {
    /// Feature name.
    pub name: Option<String>,
    /// Default value of the feature for the instance class.
    pub default_value: Option<String>,
    /// Allowed values, as a comma-separated range list.
    pub allowed_values: Option<String>,
}

impl AvailableProcessorFeature {
    /// Returns a builder for `AvailableProcessorFeature`.
    pub fn builder() -> AvailableProcessorFeatureBuilder {
        AvailableProcessorFeatureBuilder::default()
    }
}

/// Builder for [`AvailableProcessorFeature`].
#[derive(Clone, Debug, Default)]
pub struct AvailableProcessorFeatureBuilder {
    name: Option<String>,
    default_value: Option<String>,
    allowed_values: Option<String>,
}

impl AvailableProcessorFeatureBuilder {
    /// Sets the feature name.
    pub fn name(mut self, input: impl Into<String>) -> Self {
        self.name = Some(input.into());
        self
    }

    /// Sets or clears the feature name.
    pub fn set_name(mut self, input: Option<String>) -> Self {
        self.name = input;
        self
    }

    /// Sets the default value.
    pub fn default_value(mut self, input: impl Into<String>) -> Self {
        self.default_value = Some(input.into());
        self
    }

    /// Sets or clears the default value.
    pub fn set_default_value(mut self, input: Option<String>) -> Self {
        self.default_value = input;
        self
    }

    /// Sets the allowed values.
    pub fn allowed_values(mut self, input: impl Into<String>) -> Self {
        self.allowed_values = Some(input.into());
        self
    }

    /// Sets or clears the allowed values.
    pub fn set_allowed_values(mut self, input: Option<String>) -> Self {
        self.allowed_values = input;
        self
    }

    /// Builds the [`AvailableProcessorFeature`].
    pub fn build(self) -> AvailableProcessorFeature {
        AvailableProcessorFeature {
            name: self.name,
            default_value: self.default_value,
            allowed_values: self.allowed_values,
        }
    }
}

/// Log types whose export to CloudWatch Logs is being enabled or disabled.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct PendingCloudwatchLogsExports {
    /// Log types that are being activated.
    pub log_types_to_enable: Option<Vec<String>>,
    /// Log types that are being deactivated.
    pub log_types_to_disable: Option<Vec<String>>,
}

impl PendingCloudwatchLogsExports {
    /// Returns a builder for `PendingCloudwatchLogsExports`.
    pub fn builder() -> PendingCloudwatchLogsExportsBuilder {
        PendingCloudwatchLogsExportsBuilder::default()
    }
}

/// Builder for [`PendingCloudwatchLogsExports`].
#[derive(Clone, Debug, Default)]
pub struct PendingCloudwatchLogsExportsBuilder {
    log_types_to_enable: Option<Vec<String>>,
    log_types_to_disable: Option<Vec<String>>,
}

impl PendingCloudwatchLogsExportsBuilder {
    /// Appends a log type being activated.
    pub fn log_types_to_enable(mut self, input: impl Into<String>) -> Self {
        self.log_types_to_enable
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the log types being activated.
    pub fn set_log_types_to_enable(mut self, input: Option<Vec<String>>) -> Self {
        self.log_types_to_enable = input;
        self
    }

    /// Appends a log type being deactivated.
    pub fn log_types_to_disable(mut self, input: impl Into<String>) -> Self {
        self.log_types_to_disable
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the log types being deactivated.
    pub fn set_log_types_to_disable(mut self, input: Option<Vec<String>>) -> Self {
        self.log_types_to_disable = input;
        self
    }

    /// Builds the [`PendingCloudwatchLogsExports`].
    pub fn build(self) -> PendingCloudwatchLogsExports {
        PendingCloudwatchLogsExports {
            log_types_to_enable: self.log_types_to_enable,
            log_types_to_disable: self.log_types_to_disable,
        }
    }
}

/// Request-side counterpart of [`PendingCloudwatchLogsExports`]: which log
/// types to start or stop exporting.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CloudwatchLogsExportConfiguration {
    /// Log types to start exporting.
    pub enable_log_types: Option<Vec<String>>,
    /// Log types to stop exporting.
    pub disable_log_types: Option<Vec<String>>,
}

impl CloudwatchLogsExportConfiguration {
    /// Returns a builder for `CloudwatchLogsExportConfiguration`.
    pub fn builder() -> CloudwatchLogsExportConfigurationBuilder {
        CloudwatchLogsExportConfigurationBuilder::default()
    }
}

/// Builder for [`CloudwatchLogsExportConfiguration`].
#[derive(Clone, Debug, Default)]
pub struct CloudwatchLogsExportConfigurationBuilder {
    enable_log_types: Option<Vec<String>>,
    disable_log_types: Option<Vec<String>>,
}

impl CloudwatchLogsExportConfigurationBuilder {
    /// Appends a log type to start exporting.
    pub fn enable_log_types(mut self, input: impl Into<String>) -> Self {
        self.enable_log_types
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the log types to start exporting.
    pub fn set_enable_log_types(mut self, input: Option<Vec<String>>) -> Self {
        self.enable_log_types = input;
        self
    }

    /// Appends a log type to stop exporting.
    pub fn disable_log_types(mut self, input: impl Into<String>) -> Self {
        self.disable_log_types
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the log types to stop exporting.
    pub fn set_disable_log_types(mut self, input: Option<Vec<String>>) -> Self {
        self.disable_log_types = input;
        self
    }

    /// Builds the [`CloudwatchLogsExportConfiguration`].
    pub fn build(self) -> CloudwatchLogsExportConfiguration {
        CloudwatchLogsExportConfiguration {
            enable_log_types: self.enable_log_types,
            disable_log_types: self.disable_log_types,
        }
    }
}

/// Changes to a DB instance that are pending application.
///
/// `Debug` redacts the pending master password.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct PendingModifiedValues {
    /// Pending instance class.
    pub db_instance_class: Option<String>,
    /// Pending allocated storage, in gibibytes.
    pub allocated_storage: Option<i32>,
    /// Pending master password.
    pub master_user_password: Option<String>,
    /// Pending port.
    pub port: Option<i32>,
    /// Pending backup retention period, in days.
    pub backup_retention_period: Option<i32>,
    /// Pending Multi-AZ setting.
    pub multi_az: Option<bool>,
    /// Pending engine version.
    pub engine_version: Option<String>,
    /// Pending license model.
    pub license_model: Option<String>,
    /// Pending provisioned IOPS.
    pub iops: Option<i32>,
    /// Pending instance identifier (a rename).
    pub db_instance_identifier: Option<String>,
    /// Pending storage type.
    pub storage_type: Option<String>,
    /// Pending CA certificate identifier.
    pub ca_certificate_identifier: Option<String>,
    /// Pending DB subnet group.
    pub db_subnet_group_name: Option<String>,
    /// Pending CloudWatch Logs export changes.
    pub pending_cloudwatch_logs_exports: Option<PendingCloudwatchLogsExports>,
    /// Pending processor features.
    pub processor_features: Option<Vec<ProcessorFeature>>,
}

impl PendingModifiedValues {
    /// Returns a builder for `PendingModifiedValues`.
    pub fn builder() -> PendingModifiedValuesBuilder {
        PendingModifiedValuesBuilder::default()
    }
}

impl std::fmt::Debug for PendingModifiedValues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingModifiedValues")
            .field("db_instance_class", &self.db_instance_class)
            .field("allocated_storage", &self.allocated_storage)
            .field("master_user_password", &"*** Sensitive Data Redacted ***")
            .field("port", &self.port)
            .field("backup_retention_period", &self.backup_retention_period)
            .field("multi_az", &self.multi_az)
            .field("engine_version", &self.engine_version)
            .field("license_model", &self.license_model)
            .field("iops", &self.iops)
            .field("db_instance_identifier", &self.db_instance_identifier)
            .field("storage_type", &self.storage_type)
            .field("ca_certificate_identifier", &self.ca_certificate_identifier)
            .field("db_subnet_group_name", &self.db_subnet_group_name)
            .field(
                "pending_cloudwatch_logs_exports",
                &self.pending_cloudwatch_logs_exports,
            )
            .field("processor_features", &self.processor_features)
            .finish()
    }
}

/// Builder for [`PendingModifiedValues`].
#[derive(Clone, Default)]
pub struct PendingModifiedValuesBuilder {
    db_instance_class: Option<String>,
    allocated_storage: Option<i32>,
    master_user_password: Option<String>,
    port: Option<i32>,
    backup_retention_period: Option<i32>,
    multi_az: Option<bool>,
    engine_version: Option<String>,
    license_model: Option<String>,
    iops: Option<i32>,
    db_instance_identifier: Option<String>,
    storage_type: Option<String>,
    ca_certificate_identifier: Option<String>,
    db_subnet_group_name: Option<String>,
    pending_cloudwatch_logs_exports: Option<PendingCloudwatchLogsExports>,
    processor_features: Option<Vec<ProcessorFeature>>,
}

impl std::fmt::Debug for PendingModifiedValuesBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingModifiedValuesBuilder")
            .field("master_user_password", &"*** Sensitive Data Redacted ***")
            .finish_non_exhaustive()
    }
}

impl PendingModifiedValuesBuilder {
    /// Sets the pending instance class.
    pub fn db_instance_class(mut self, input: impl Into<String>) -> Self {
        self.db_instance_class = Some(input.into());
        self
    }

    /// Sets or clears the pending instance class.
    pub fn set_db_instance_class(mut self, input: Option<String>) -> Self {
        self.db_instance_class = input;
        self
    }

    /// Sets the pending allocated storage.
    pub fn allocated_storage(mut self, input: i32) -> Self {
        self.allocated_storage = Some(input);
        self
    }

    /// Sets or clears the pending allocated storage.
    pub fn set_allocated_storage(mut self, input: Option<i32>) -> Self {
        self.allocated_storage = input;
        self
    }

    /// Sets the pending master password.
    pub fn master_user_password(mut self, input: impl Into<String>) -> Self {
        self.master_user_password = Some(input.into());
        self
    }

    /// Sets or clears the pending master password.
    pub fn set_master_user_password(mut self, input: Option<String>) -> Self {
        self.master_user_password = input;
        self
    }

    /// Sets the pending port.
    pub fn port(mut self, input: i32) -> Self {
        self.port = Some(input);
        self
    }

    /// Sets or clears the pending port.
    pub fn set_port(mut self, input: Option<i32>) -> Self {
        self.port = input;
        self
    }

    /// Sets the pending backup retention period.
    pub fn backup_retention_period(mut self, input: i32) -> Self {
        self.backup_retention_period = Some(input);
        self
    }

    /// Sets or clears the pending backup retention period.
    pub fn set_backup_retention_period(mut self, input: Option<i32>) -> Self {
        self.backup_retention_period = input;
        self
    }

    /// Sets the pending Multi-AZ setting.
    pub fn multi_az(mut self, input: bool) -> Self {
        self.multi_az = Some(input);
        self
    }

    /// Sets or clears the pending Multi-AZ setting.
    pub fn set_multi_az(mut self, input: Option<bool>) -> Self {
        self.multi_az = input;
        self
    }

    /// Sets the pending engine version.
    pub fn engine_version(mut self, input: impl Into<String>) -> Self {
        self.engine_version = Some(input.into());
        self
    }

    /// Sets or clears the pending engine version.
    pub fn set_engine_version(mut self, input: Option<String>) -> Self {
        self.engine_version = input;
        self
    }

    /// Sets the pending license model.
    pub fn license_model(mut self, input: impl Into<String>) -> Self {
        self.license_model = Some(input.into());
        self
    }

    /// Sets or clears the pending license model.
    pub fn set_license_model(mut self, input: Option<String>) -> Self {
        self.license_model = input;
        self
    }

    /// Sets the pending provisioned IOPS.
    pub fn iops(mut self, input: i32) -> Self {
        self.iops = Some(input);
        self
    }

    /// Sets or clears the pending provisioned IOPS.
    pub fn set_iops(mut self, input: Option<i32>) -> Self {
        self.iops = input;
        self
    }

    /// Sets the pending instance identifier.
    pub fn db_instance_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(input.into());
        self
    }

    /// Sets or clears the pending instance identifier.
    pub fn set_db_instance_identifier(mut self, input: Option<String>) -> Self {
        self.db_instance_identifier = input;
        self
    }

    /// Sets the pending storage type.
    pub fn storage_type(mut self, input: impl Into<String>) -> Self {
        self.storage_type = Some(input.into());
        self
    }

    /// Sets or clears the pending storage type.
    pub fn set_storage_type(mut self, input: Option<String>) -> Self {
        self.storage_type = input;
        self
    }

    /// Sets the pending CA certificate identifier.
    pub fn ca_certificate_identifier(mut self, input: impl Into<String>) -> Self {
        self.ca_certificate_identifier = Some(input.into());
        self
    }

    /// Sets or clears the pending CA certificate identifier.
    pub fn set_ca_certificate_identifier(mut self, input: Option<String>) -> Self {
        self.ca_certificate_identifier = input;
        self
    }

    /// Sets the pending DB subnet group name.
    pub fn db_subnet_group_name(mut self, input: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(input.into());
        self
    }

    /// Sets or clears the pending DB subnet group name.
    pub fn set_db_subnet_group_name(mut self, input: Option<String>) -> Self {
        self.db_subnet_group_name = input;
        self
    }

    /// Sets the pending CloudWatch Logs export changes.
    pub fn pending_cloudwatch_logs_exports(mut self, input: PendingCloudwatchLogsExports) -> Self {
        self.pending_cloudwatch_logs_exports = Some(input);
        self
    }

    /// Sets or clears the pending CloudWatch Logs export changes.
    pub fn set_pending_cloudwatch_logs_exports(
        mut self,
        input: Option<PendingCloudwatchLogsExports>,
    ) -> Self {
        self.pending_cloudwatch_logs_exports = input;
        self
    }

    /// Appends a pending processor feature.
    pub fn processor_features(mut self, input: ProcessorFeature) -> Self {
        self.processor_features
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// Replaces the pending processor features.
    pub fn set_processor_features(mut self, input: Option<Vec<ProcessorFeature>>) -> Self {
        self.processor_features = input;
        self
    }

    /// Builds the [`PendingModifiedValues`].
    pub fn build(self) -> PendingModifiedValues {
        PendingModifiedValues {
            db_instance_class: self.db_instance_class,
            allocated_storage: self.allocated_storage,
            master_user_password: self.master_user_password,
            port: self.port,
            backup_retention_period: self.backup_retention_period,
            multi_az: self.multi_az,
            engine_version: self.engine_version,
            license_model: self.license_model,
            iops: self.iops,
            db_instance_identifier: self.db_instance_identifier,
            storage_type: self.storage_type,
            ca_certificate_identifier: self.ca_certificate_identifier,
            db_subnet_group_name: self.db_subnet_group_name,
            pending_cloudwatch_logs_exports: self.pending_cloudwatch_logs_exports,
            processor_features: self.processor_features,
        }
    }
}

/// Serverless scaling configuration of a DB cluster (request side).
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ScalingConfiguration {
    /// Minimum capacity, in Aurora capacity units.
    pub min_capacity: Option<i32>,
    /// Maximum capacity, in Aurora capacity units.
    pub max_capacity: Option<i32>,
    /// Whether the cluster may pause when idle.
    pub auto_pause: Option<bool>,
    /// Idle time before the cluster pauses, in seconds.
    pub seconds_until_auto_pause: Option<i32>,
    /// What to do when a scaling point cannot be found:
    /// `ForceApplyCapacityChange` or `RollbackCapacityChange`.
    pub timeout_action: Option<String>,
}

impl ScalingConfiguration {
    /// Returns a builder for `ScalingConfiguration`.
    pub fn builder() -> ScalingConfigurationBuilder {
        ScalingConfigurationBuilder::default()
    }
}

/// Builder for [`ScalingConfiguration`].
#[derive(Clone, Debug, Default)]
pub struct ScalingConfigurationBuilder {
    min_capacity: Option<i32>,
    max_capacity: Option<i32>,
    auto_pause: Option<bool>,
    seconds_until_auto_pause: Option<i32>,
    timeout_action: Option<String>,
}

impl ScalingConfigurationBuilder {
    /// Sets the minimum capacity.
    pub fn min_capacity(mut self, input: i32) -> Self {
        self.min_capacity = Some(input);
        self
    }

    /// Sets or clears the minimum capacity.
    pub fn set_min_capacity(mut self, input: Option<i32>) -> Self {
        self.min_capacity = input;
        self
    }

    /// Sets the maximum capacity.
    pub fn max_capacity(mut self, input: i32) -> Self {
        self.max_capacity = Some(input);
        self
    }

    /// Sets or clears the maximum capacity.
    pub fn set_max_capacity(mut self, input: Option<i32>) -> Self {
        self.max_capacity = input;
        self
    }

    /// Sets whether the cluster may pause when idle.
    pub fn auto_pause(mut self, input: bool) -> Self {
        self.auto_pause = Some(input);
        self
    }

    /// Sets or clears the auto-pause flag.
    pub fn set_auto_pause(mut self, input: Option<bool>) -> Self {
        self.auto_pause = input;
        self
    }

    /// Sets the idle time before pausing.
    pub fn seconds_until_auto_pause(mut self, input: i32) -> Self {
        self.seconds_until_auto_pause = Some(input);
        self
    }

    /// Sets or clears the idle time before pausing.
    pub fn set_seconds_until_auto_pause(mut self, input: Option<i32>) -> Self {
        self.seconds_until_auto_pause = input;
        self
    }

    /// Sets the timeout action.
    pub fn timeout_action(mut self, input: impl Into<String>) -> Self {
        self.timeout_action = Some(input.into());
        self
    }

    /// Sets or clears the timeout action.
    pub fn set_timeout_action(mut self, input: Option<String>) -> Self {
        self.timeout_action = input;
        self
    }

    /// Builds the [`ScalingConfiguration`].
    pub fn build(self) -> ScalingConfiguration {
        ScalingConfiguration {
            min_capacity: self.min_capacity,
            max_capacity: self.max_capacity,
            auto_pause: self.auto_pause,
            seconds_until_auto_pause: self.seconds_until_auto_pause,
            timeout_action: self.timeout_action,
        }
    }
}

/// Serverless scaling configuration of a DB cluster (response side).
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ScalingConfigurationInfo {
    /// Minimum capacity, in Aurora capacity units.
    pub min_capacity: Option<i32>,
    /// Maximum capacity, in Aurora capacity units.
    pub max_capacity: Option<i32>,
    /// Whether the cluster may pause when idle.
    pub auto_pause: Option<bool>,
    /// Idle time before the cluster pauses, in seconds.
    pub seconds_until_auto_pause: Option<i32>,
    /// Action taken when a scaling point cannot be found.
    pub timeout_action: Option<String>,
}

impl ScalingConfigurationInfo {
    /// Returns a builder for `ScalingConfigurationInfo`.
    pub fn builder() -> ScalingConfigurationInfoBuilder {
        ScalingConfigurationInfoBuilder::default()
    }
}

/// Builder for [`ScalingConfigurationInfo`].
#[derive(Clone, Debug, Default)]
pub struct ScalingConfigurationInfoBuilder {
    min_capacity: Option<i32>,
    max_capacity: Option<i32>,
    auto_pause: Option<bool>,
    seconds_until_auto_pause: Option<i32>,
    timeout_action: Option<String>,
}

impl ScalingConfigurationInfoBuilder {
    /// Sets the minimum capacity.
    pub fn min_capacity(mut self, input: i32) -> Self {
        self.min_capacity = Some(input);
        self
    }

    /// Sets or clears the minimum capacity.
    pub fn set_min_capacity(mut self, input: Option<i32>) -> Self {
        self.min_capacity = input;
        self
    }

    /// Sets the maximum capacity.
    pub fn max_capacity(mut self, input: i32) -> Self {
        self.max_capacity = Some(input);
        self
    }

    /// Sets or clears the maximum capacity.
    pub fn set_max_capacity(mut self, input: Option<i32>) -> Self {
        self.max_capacity = input;
        self
    }

    /// Sets whether the cluster may pause when idle.
    pub fn auto_pause(mut self, input: bool) -> Self {
        self.auto_pause = Some(input);
        self
    }

    /// Sets or clears the auto-pause flag.
    pub fn set_auto_pause(mut self, input: Option<bool>) -> Self {
        self.auto_pause = input;
        self
    }

    /// Sets the idle time before pausing.
    pub fn seconds_until_auto_pause(mut self, input: i32) -> Self {
        self.seconds_until_auto_pause = Some(input);
        self
    }

    /// Sets or clears the idle time before pausing.
    pub fn set_seconds_until_auto_pause(mut self, input: Option<i32>) -> Self {
        self.seconds_until_auto_pause = input;
        self
    }

    /// Sets the timeout action.
    pub fn timeout_action(mut self, input: impl Into<String>) -> Self {
        self.timeout_action = Some(input.into());
        self
    }

    /// Sets or clears the timeout action.
    pub fn set_timeout_action(mut self, input: Option<String>) -> Self {
        self.timeout_action = input;
        self
    }

    /// Builds the [`ScalingConfigurationInfo`].
    pub fn build(self) -> ScalingConfigurationInfo {
        ScalingConfigurationInfo {
            min_capacity: self.min_capacity,
            max_capacity: self.max_capacity,
            auto_pause: self.auto_pause,
            seconds_until_auto_pause: self.seconds_until_auto_pause,
            timeout_action: self.timeout_action,
        }
    }
}

/// A DB subnet group: the subnets a DB instance may occupy within a VPC.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DbSubnetGroup {
    /// Name of the subnet group.
    pub db_subnet_group_name: Option<String>,
    /// Description of the subnet group.
    pub db_subnet_group_description: Option<String>,
    /// VPC the subnets belong to.
    pub vpc_id: Option<String>,
    /// Status of the subnet group.
    pub subnet_group_status: Option<String>,
    /// Subnets in the group.
    pub subnets: Option<Vec<Subnet>>,
    /// ARN of the subnet group.
    pub db_subnet_group_arn: Option<String>,
}

impl DbSubnetGroup {
    /// Returns a builder for `DbSubnetGroup`.
    pub fn builder() -> DbSubnetGroupBuilder {
        DbSubnetGroupBuilder::default()
    }
}

/// Builder for [`DbSubnetGroup`].
#[derive(Clone, Debug, Default)]
pub struct DbSubnetGroupBuilder {
    db_subnet_group_name: Option<String>,
    db_subnet_group_description: Option<String>,
    vpc_id: Option<String>,
    subnet_group_status: Option<String>,
    subnets: Option<Vec<Subnet>>,
    db_subnet_group_arn: Option<String>,
}

impl DbSubnetGroupBuilder {
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

    /// Sets the description.
    pub fn db_subnet_group_description(mut self, input: impl Into<String>) -> Self {
        self.db_subnet_group_description = Some(input.into());
        self
    }

    /// Sets or clears the description.
    pub fn set_db_subnet_group_description(mut self, input: Option<String>) -> Self {
        self.db_subnet_group_description = input;
        self
    }

    /// Sets the VPC ID.
    pub fn vpc_id(mut self, input: impl Into<String>) -> Self {
        self.vpc_id = Some(input.into());
        self
    }

    /// Sets or clears the VPC ID.
    pub fn set_vpc_id(mut self, input: Option<String>) -> Self {
        self.vpc_id = input;
        self
    }

    /// Sets the subnet group status.
    pub fn subnet_group_status(mut self, input: impl Into<String>) -> Self {
        self.subnet_group_status = Some(input.into());
        self
    }

    /// Sets or clears the subnet group status.
    pub fn set_subnet_group_status(mut self, input: Option<String>) -> Self {
        self.subnet_group_status = input;
        self
    }

    /// Appends a subnet.
    pub fn subnets(mut self, input: Subnet) -> Self {
        self.subnets.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the subnets.
    pub fn set_subnets(mut self, input: Option<Vec<Subnet>>) -> Self {
        self.subnets = input;
        self
    }

    /// Sets the subnet group ARN.
    pub fn db_subnet_group_arn(mut self, input: impl Into<String>) -> Self {
        self.db_subnet_group_arn = Some(input.into());
        self
    }

    /// Sets or clears the subnet group ARN.
    pub fn set_db_subnet_group_arn(mut self, input: Option<String>) -> Self {
        self.db_subnet_group_arn = input;
        self
    }

    /// Builds the [`DbSubnetGroup`].
    pub fn build(self) -> DbSubnetGroup {
        DbSubnetGroup {
            db_subnet_group_name: self.db_subnet_group_name,
            db_subnet_group_description: self.db_subnet_group_description,
            vpc_id: self.vpc_id,
            subnet_group_status: self.subnet_group_status,
            subnets: self.subnets,
            db_subnet_group_arn: self.db_subnet_group_arn,
        }
    }
}

/// An inclusive integer range with an optional step, e.g. valid storage
/// sizes for an instance class.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Range {
    /// Minimum value in the range.
    pub from: Option<i32>,
    /// Maximum value in the range.
    pub to: Option<i32>,
    /// Step between values; a step of 1 means every value in the range is
    /// valid.
    pub step: Option<i32>,
}

impl Range {
    /// Returns a builder for `Range`.
    pub fn builder() -> RangeBuilder {
        RangeBuilder::default()
    }
}

/// Builder for [`Range`].
#[derive(Clone, Debug, Default)]
pub struct RangeBuilder {
    from: Option<i32>,
    to: Option<i32>,
    step: Option<i32>,
}

impl RangeBuilder {
    /// Sets the minimum value.
    pub fn from(mut self, input: i32) -> Self {
        self.from = Some(input);
        self
    }

    /// Sets or clears the minimum value.
    pub fn set_from(mut self, input: Option<i32>) -> Self {
        self.from = input;
        self
    }

    /// Sets the maximum value.
    pub fn to(mut self, input: i32) -> Self {
        self.to = Some(input);
        self
    }

    /// Sets or clears the maximum value.
    pub fn set_to(mut self, input: Option<i32>) -> Self {
        self.to = input;
        self
    }

    /// Sets the step.
    pub fn step(mut self, input: i32) -> Self {
        self.step = Some(input);
        self
    }

    /// Sets or clears the step.
    pub fn set_step(mut self, input: Option<i32>) -> Self {
        self.step = input;
        self
    }

    /// Builds the [`Range`].
    pub fn build(self) -> Range {
        Range {
            from: self.from,
            to: self.to,
            step: self.step,
        }
    }
}

/// An inclusive floating-point range.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DoubleRange {
    /// Minimum value in the range.
    pub from: Option<f64>,
    /// Maximum value in the range.
    pub to: Option<f64>,
}

impl DoubleRange {
    /// Returns a builder for `DoubleRange`.
    pub fn builder() -> DoubleRangeBuilder {
        DoubleRangeBuilder::default()
    }
}

/// Builder for [`DoubleRange`].
#[derive(Clone, Debug, Default)]
pub struct DoubleRangeBuilder {
    from: Option<f64>,
    to: Option<f64>,
}

impl DoubleRangeBuilder {
    /// Sets the minimum value.
    pub fn from(mut self, input: f64) -> Self {
        self.from = Some(input);
        self
    }

    /// Sets or clears the minimum value.
    pub fn set_from(mut self, input: Option<f64>) -> Self {
        self.from = input;
        self
    }

    /// Sets the maximum value.
    pub fn to(mut self, input: f64) -> Self {
        self.to = Some(input);
        self
    }

    /// Sets or clears the maximum value.
    pub fn set_to(mut self, input: Option<f64>) -> Self {
        self.to = input;
        self
    }

    /// Builds the [`DoubleRange`].
    pub fn build(self) -> DoubleRange {
        DoubleRange {
            from: self.from,
            to: self.to,
        }
    }
}

/// Valid storage settings for one storage type of a DB instance class.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ValidStorageOptions {
    /// Storage type, e.g. `gp2` or `io1`.
    pub storage_type: Option<String>,
    /// Valid storage sizes, in gibibytes.
    pub storage_size: Option<Vec<Range>>,
    /// Valid provisioned IOPS settings.
    pub provisioned_iops: Option<Vec<Range>>,
    /// Valid ratios of provisioned IOPS to storage size.
    pub iops_to_storage_ratio: Option<Vec<DoubleRange>>,
    /// Whether storage autoscaling is available for this storage type.
    pub supports_storage_autoscaling: Option<bool>,
}

impl ValidStorageOptions {
    /// Returns a builder for `ValidStorageOptions`.
    pub fn builder() -> ValidStorageOptionsBuilder {
        ValidStorageOptionsBuilder::default()
    }
}

/// Builder for [`ValidStorageOptions`].
#[derive(Clone, Debug, Default)]
pub struct ValidStorageOptionsBuilder {
    storage_type: Option<String>,
    storage_size: Option<Vec<Range>>,
    provisioned_iops: Option<Vec<Range>>,
    iops_to_storage_ratio: Option<Vec<DoubleRange>>,
    supports_storage_autoscaling: Option<bool>,
}

impl ValidStorageOptionsBuilder {
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

    /// Appends a valid storage size range.
    pub fn storage_size(mut self, input: Range) -> Self {
        self.storage_size.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the valid storage size ranges.
    pub fn set_storage_size(mut self, input: Option<Vec<Range>>) -> Self {
        self.storage_size = input;
        self
    }

    /// Appends a valid provisioned IOPS range.
    pub fn provisioned_iops(mut self, input: Range) -> Self {
        self.provisioned_iops
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// Replaces the valid provisioned IOPS ranges.
    pub fn set_provisioned_iops(mut self, input: Option<Vec<Range>>) -> Self {
        self.provisioned_iops = input;
        self
    }

    /// Appends a valid IOPS-to-storage ratio range.
    pub fn iops_to_storage_ratio(mut self, input: DoubleRange) -> Self {
        self.iops_to_storage_ratio
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// Replaces the valid IOPS-to-storage ratio ranges.
    pub fn set_iops_to_storage_ratio(mut self, input: Option<Vec<DoubleRange>>) -> Self {
        self.iops_to_storage_ratio = input;
        self
    }

    /// Sets whether storage autoscaling is supported.
    pub fn supports_storage_autoscaling(mut self, input: bool) -> Self {
        self.supports_storage_autoscaling = Some(input);
        self
    }

    /// Sets or clears the storage autoscaling flag.
    pub fn set_supports_storage_autoscaling(mut self, input: Option<bool>) -> Self {
        self.supports_storage_autoscaling = input;
        self
    }

    /// Builds the [`ValidStorageOptions`].
    pub fn build(self) -> ValidStorageOptions {
        ValidStorageOptions {
            storage_type: self.storage_type,
            storage_size: self.storage_size,
            provisioned_iops: self.provisioned_iops,
            iops_to_storage_ratio: self.iops_to_storage_ratio,
            supports_storage_autoscaling: self.supports_storage_autoscaling,
        }
    }
}

/// The modifications a particular DB instance currently supports.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ValidDbInstanceModificationsMessage {
    /// Valid storage options, per storage type.
    pub storage: Option<Vec<ValidStorageOptions>>,
    /// Valid processor features for the instance class.
    pub valid_processor_features: Option<Vec<AvailableProcessorFeature>>,
}

impl ValidDbInstanceModificationsMessage {
    /// Returns a builder for `ValidDbInstanceModificationsMessage`.
    pub fn builder() -> ValidDbInstanceModificationsMessageBuilder {
        ValidDbInstanceModificationsMessageBuilder::default()
    }
}

/// Builder for [`ValidDbInstanceModificationsMessage`].
#[derive(Clone, Debug, Default)]
pub struct ValidDbInstanceModificationsMessageBuilder {
    storage: Option<Vec<ValidStorageOptions>>,
    valid_processor_features: Option<Vec<AvailableProcessorFeature>>,
}

impl ValidDbInstanceModificationsMessageBuilder {
    /// Appends a storage option entry.
    pub fn storage(mut self, input: ValidStorageOptions) -> Self {
        self.storage.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the storage option entries.
    pub fn set_storage(mut self, input: Option<Vec<ValidStorageOptions>>) -> Self {
        self.storage = input;
        self
    }

    /// Appends a valid processor feature.
    pub fn valid_processor_features(mut self, input: AvailableProcessorFeature) -> Self {
        self.valid_processor_features
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// Replaces the valid processor features.
    pub fn set_valid_processor_features(
        mut self,
        input: Option<Vec<AvailableProcessorFeature>>,
    ) -> Self {
        self.valid_processor_features = input;
        self
    }

    /// Builds the [`ValidDbInstanceModificationsMessage`].
    pub fn build(self) -> ValidDbInstanceModificationsMessage {
        ValidDbInstanceModificationsMessage {
            storage: self.storage,
            valid_processor_features: self.valid_processor_features,
        }
    }
}

/// An EC2 security group granted ingress to a DB security group.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Ec2SecurityGroup {
    /// Authorization status: `authorizing`, `authorized`, `revoking`, or
    /// `revoked`.
    pub status: Option<String>,
    /// Name of the EC2 security group.
    pub ec2_security_group_name: Option<String>,
    /// ID of the EC2 security group.
    pub ec2_security_group_id: Option<String>,
    /// AWS account ID that owns the EC2 security group.
    pub ec2_security_group_owner_id: Option<String>,
}

impl Ec2SecurityGroup {
    /// Returns a builder for `Ec2SecurityGroup`.
    pub fn builder() -> Ec2SecurityGroupBuilder {
        Ec2SecurityGroupBuilder::default()
    }
}

/// Builder for [`Ec2SecurityGroup`].
#[derive(Clone, Debug, Default)]
pub struct Ec2SecurityGroupBuilder {
    status: Option<String>,
    ec2_security_group_name: Option<String>,
    ec2_security_group_id: Option<String>,
    ec2_security_group_owner_id: Option<String>,
}

impl Ec2SecurityGroupBuilder {
    /// Sets the authorization status.
    pub fn status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }

    /// Sets or clears the authorization status.
    pub fn set_status(mut self, input: Option<String>) -> Self {
        self.status = input;
        self
    }

    /// Sets the EC2 security group name.
    pub fn ec2_security_group_name(mut self, input: impl Into<String>) -> Self {
        self.ec2_security_group_name = Some(input.into());
        self
    }

    /// Sets or clears the EC2 security group name.
    pub fn set_ec2_security_group_name(mut self, input: Option<String>) -> Self {
        self.ec2_security_group_name = input;
        self
    }

    /// Sets the EC2 security group ID.
    pub fn ec2_security_group_id(mut self, input: impl Into<String>) -> Self {
        self.ec2_security_group_id = Some(input.into());
        self
    }

    /// Sets or clears the EC2 security group ID.
    pub fn set_ec2_security_group_id(mut self, input: Option<String>) -> Self {
        self.ec2_security_group_id = input;
        self
    }

    /// Sets the owning account ID.
    pub fn ec2_security_group_owner_id(mut self, input: impl Into<String>) -> Self {
        self.ec2_security_group_owner_id = Some(input.into());
        self
    }

    /// Sets or clears the owning account ID.
    pub fn set_ec2_security_group_owner_id(mut self, input: Option<String>) -> Self {
        self.ec2_security_group_owner_id = input;
        self
    }

    /// Builds the [`Ec2SecurityGroup`].
    pub fn build(self) -> Ec2SecurityGroup {
        Ec2SecurityGroup {
            status: self.status,
            ec2_security_group_name: self.ec2_security_group_name,
            ec2_security_group_id: self.ec2_security_group_id,
            ec2_security_group_owner_id: self.ec2_security_group_owner_id,
        }
    }
}

/// An IP range granted ingress to a DB security group.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct IpRange {
    /// Authorization status: `authorizing`, `authorized`, `revoking`, or
    /// `revoked`.
    pub status: Option<String>,
    /// The IP range, in CIDR notation.
    pub cidrip: Option<String>,
}

impl IpRange {
    /// Returns a builder for `IpRange`.
    pub fn builder() -> IpRangeBuilder {
        IpRangeBuilder::default()
    }
}

/// Builder for [`IpRange`].
#[derive(Clone, Debug, Default)]
pub struct IpRangeBuilder {
    status: Option<String>,
    cidrip: Option<String>,
}

impl IpRangeBuilder {
    /// Sets the authorization status.
    pub fn status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }

    /// Sets or clears the authorization status.
    pub fn set_status(mut self, input: Option<String>) -> Self {
        self.status = input;
        self
    }

    /// Sets the CIDR range.
    pub fn cidrip(mut self, input: impl Into<String>) -> Self {
        self.cidrip = Some(input.into());
        self
    }

    /// Sets or clears the CIDR range.
    pub fn set_cidrip(mut self, input: Option<String>) -> Self {
        self.cidrip = input;
        self
    }

    /// Builds the [`IpRange`].
    pub fn build(self) -> IpRange {
        IpRange {
            status: self.status,
            cidrip: self.cidrip,
        }
    }
}

/// A (classic, EC2-Classic era) DB security group.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DbSecurityGroup {
    /// AWS account ID that owns the group.
    pub owner_id: Option<String>,
    /// Name of the group.
    pub db_security_group_name: Option<String>,
    /// Description of the group.
    pub db_security_group_description: Option<String>,
    /// VPC the group belongs to, if any.
    pub vpc_id: Option<String>,
    /// EC2 security groups granted ingress.
    pub ec2_security_groups: Option<Vec<Ec2SecurityGroup>>,
    /// IP ranges granted ingress.
    pub ip_ranges: Option<Vec<IpRange>>,
    /// ARN of the group.
    pub db_security_group_arn: Option<String>,
}

impl DbSecurityGroup {
    /// Returns a builder for `DbSecurityGroup`.
    pub fn builder() -> DbSecurityGroupBuilder {
        DbSecurityGroupBuilder::default()
    }
}

/// Builder for [`DbSecurityGroup`].
#[derive(Clone, Debug, Default)]
pub struct DbSecurityGroupBuilder {
    owner_id: Option<String>,
    db_security_group_name: Option<String>,
    db_security_group_description: Option<String>,
    vpc_id: Option<String>,
    ec2_security_groups: Option<Vec<Ec2SecurityGroup>>,
    ip_ranges: Option<Vec<IpRange>>,
    db_security_group_arn: Option<String>,
}

impl DbSecurityGroupBuilder {
    /// Sets the owning account ID.
    pub fn owner_id(mut self, input: impl Into<String>) -> Self {
        self.owner_id = Some(input.into());
        self
    }

    /// Sets or clears the owning account ID.
    pub fn set_owner_id(mut self, input: Option<String>) -> Self {
        self.owner_id = input;
        self
    }

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

    /// Sets the description.
    pub fn db_security_group_description(mut self, input: impl Into<String>) -> Self {
        self.db_security_group_description = Some(input.into());
        self
    }

    /// Sets or clears the description.
    pub fn set_db_security_group_description(mut self, input: Option<String>) -> Self {
        self.db_security_group_description = input;
        self
    }

    /// Sets the VPC ID.
    pub fn vpc_id(mut self, input: impl Into<String>) -> Self {
        self.vpc_id = Some(input.into());
        self
    }

    /// Sets or clears the VPC ID.
    pub fn set_vpc_id(mut self, input: Option<String>) -> Self {
        self.vpc_id = input;
        self
    }

    /// Appends an EC2 security group grant.
    pub fn ec2_security_groups(mut self, input: Ec2SecurityGroup) -> Self {
        self.ec2_security_groups
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// Replaces the EC2 security group grants.
    pub fn set_ec2_security_groups(mut self, input: Option<Vec<Ec2SecurityGroup>>) -> Self {
        self.ec2_security_groups = input;
        self
    }

    /// Appends an IP range grant.
    pub fn ip_ranges(mut self, input: IpRange) -> Self {
        self.ip_ranges.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the IP range grants.
    pub fn set_ip_ranges(mut self, input: Option<Vec<IpRange>>) -> Self {
        self.ip_ranges = input;
        self
    }

    /// Sets the group ARN.
    pub fn db_security_group_arn(mut self, input: impl Into<String>) -> Self {
        self.db_security_group_arn = Some(input.into());
        self
    }

    /// Sets or clears the group ARN.
    pub fn set_db_security_group_arn(mut self, input: Option<String>) -> Self {
        self.db_security_group_arn = input;
        self
    }

    /// Builds the [`DbSecurityGroup`].
    pub fn build(self) -> DbSecurityGroup {
        DbSecurityGroup {
            owner_id: self.owner_id,
            db_security_group_name: self.db_security_group_name,
            db_security_group_description: self.db_security_group_description,
            vpc_id: self.vpc_id,
            ec2_security_groups: self.ec2_security_groups,
            ip_ranges: self.ip_ranges,
            db_security_group_arn: self.db_security_group_arn,
        }
    }
}

/// Health of a DB proxy target.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct TargetHealth {
    /// Current registration state.
    pub state: Option<TargetState>,
    /// Reason for the current state, when unhealthy.
    pub reason: Option<TargetHealthReason>,
    /// Human-readable detail about the state.
    pub description: Option<String>,
}

impl TargetHealth {
    /// Returns a builder for `TargetHealth`.
    pub fn builder() -> TargetHealthBuilder {
        TargetHealthBuilder::default()
    }
}

/// Builder for [`TargetHealth`].
#[derive(Clone, Debug, Default)]
pub struct TargetHealthBuilder {
    state: Option<TargetState>,
    reason: Option<TargetHealthReason>,
    description: Option<String>,
}

impl TargetHealthBuilder {
    /// Sets the registration state.
    pub fn state(mut self, input: TargetState) -> Self {
        self.state = Some(input);
        self
    }

    /// Sets or clears the registration state.
    pub fn set_state(mut self, input: Option<TargetState>) -> Self {
        self.state = input;
        self
    }

    /// Sets the reason.
    pub fn reason(mut self, input: TargetHealthReason) -> Self {
        self.reason = Some(input);
        self
    }

    /// Sets or clears the reason.
    pub fn set_reason(mut self, input: Option<TargetHealthReason>) -> Self {
        self.reason = input;
        self
    }

    /// Sets the description.
    pub fn description(mut self, input: impl Into<String>) -> Self {
        self.description = Some(input.into());
        self
    }

    /// Sets or clears the description.
    pub fn set_description(mut self, input: Option<String>) -> Self {
        self.description = input;
        self
    }

    /// Builds the [`TargetHealth`].
    pub fn build(self) -> TargetHealth {
        TargetHealth {
            state: self.state,
            reason: self.reason,
            description: self.description,
        }
    }
}

/// A resource a DB proxy forwards connections to.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DbProxyTarget {
    /// ARN of the target resource.
    pub target_arn: Option<String>,
    /// Writer endpoint of the target.
    pub endpoint: Option<String>,
    /// Cluster identifier, when the target is tracked through a cluster.
    pub tracked_cluster_id: Option<String>,
    /// Resource ID of the target.
    pub rds_resource_id: Option<String>,
    /// Port the target listens on.
    pub port: Option<i32>,
    /// Kind of resource the target is.
    pub target_type: Option<TargetType>,
    /// Health of the target as seen by the proxy.
    pub target_health: Option<TargetHealth>,
}

impl DbProxyTarget {
    /// Returns a builder for `DbProxyTarget`.
    pub fn builder() -> DbProxyTargetBuilder {
        DbProxyTargetBuilder::default()
    }
}

/// Builder for [`DbProxyTarget`].
#[derive(Clone, Debug, Default)]
pub struct DbProxyTargetBuilder {
    target_arn: Option<String>,
    endpoint: Option<String>,
    tracked_cluster_id: Option<String>,
    rds_resource_id: Option<String>,
    port: Option<i32>,
    target_type: Option<TargetType>,
    target_health: Option<TargetHealth>,
}

impl DbProxyTargetBuilder {
    /// Sets the target ARN.
    pub fn target_arn(mut self, input: impl Into<String>) -> Self {
        self.target_arn = Some(input.into());
        self
    }

    /// Sets or clears the target ARN.
    pub fn set_target_arn(mut self, input: Option<String>) -> Self {
        self.target_arn = input;
        self
    }

    /// Sets the endpoint.
    pub fn endpoint(mut self, input: impl Into<String>) -> Self {
        self.endpoint = Some(input.into());
        self
    }

    /// Sets or clears the endpoint.
    pub fn set_endpoint(mut self, input: Option<String>) -> Self {
        self.endpoint = input;
        self
    }

    /// Sets the tracked cluster identifier.
    pub fn tracked_cluster_id(mut self, input: impl Into<String>) -> Self {
        self.tracked_cluster_id = Some(input.into());
        self
    }

    /// Sets or clears the tracked cluster identifier.
    pub fn set_tracked_cluster_id(mut self, input: Option<String>) -> Self {
        self.tracked_cluster_id = input;
        self
    }

    /// Sets the resource ID.
    pub fn rds_resource_id(mut self, input: impl Into<String>) -> Self {
        self.rds_resource_id = Some(input.into());
        self
    }

    /// Sets or clears the resource ID.
    pub fn set_rds_resource_id(mut self, input: Option<String>) -> Self {
        self.rds_resource_id = input;
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

    /// Sets the target type.
    pub fn target_type(mut self, input: TargetType) -> Self {
        self.target_type = Some(input);
        self
    }

    /// Sets or clears the target type.
    pub fn set_target_type(mut self, input: Option<TargetType>) -> Self {
        self.target_type = input;
        self
    }

    /// Sets the target health.
    pub fn target_health(mut self, input: TargetHealth) -> Self {
        self.target_health = Some(input);
        self
    }

    /// Sets or clears the target health.
    pub fn set_target_health(mut self, input: Option<TargetHealth>) -> Self {
        self.target_health = input;
        self
    }

    /// Builds the [`DbProxyTarget`].
    pub fn build(self) -> DbProxyTarget {
        DbProxyTarget {
            target_arn: self.target_arn,
            endpoint: self.endpoint,
            tracked_cluster_id: self.tracked_cluster_id,
            rds_resource_id: self.rds_resource_id,
            port: self.port,
            target_type: self.target_type,
            target_health: self.target_health,
        }
    }
}

/// VPN tunnel details for an on-premises custom Availability Zone.
///
/// `Debug` redacts the preshared key.
#[derive(Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct VpnDetails {
    /// ID of the VPN.
    pub vpn_id: Option<String>,
    /// IP address of network traffic from the on-premises data center.
    pub vpn_tunnel_originator_ip: Option<String>,
    /// IP address of network traffic from AWS to the data center.
    pub vpn_gateway_ip: Option<String>,
    /// Preshared key of the VPN.
    pub vpn_psk: Option<String>,
    /// Name of the VPN.
    pub vpn_name: Option<String>,
    /// State of the VPN.
    pub vpn_state: Option<String>,
}

impl VpnDetails {
    /// Returns a builder for `VpnDetails`.
    pub fn builder() -> VpnDetailsBuilder {
        VpnDetailsBuilder::default()
    }
}

impl std::fmt::Debug for VpnDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VpnDetails")
            .field("vpn_id", &self.vpn_id)
            .field("vpn_tunnel_originator_ip", &self.vpn_tunnel_originator_ip)
            .field("vpn_gateway_ip", &self.vpn_gateway_ip)
            .field("vpn_psk", &"*** Sensitive Data Redacted ***")
            .field("vpn_name", &self.vpn_name)
            .field("vpn_state", &self.vpn_state)
            .finish()
    }
}

/// Builder for [`VpnDetails`].
#[derive(Clone, Default)]
pub struct VpnDetailsBuilder {
    vpn_id: Option<String>,
    vpn_tunnel_originator_ip: Option<String>,
    vpn_gateway_ip: Option<String>,
    vpn_psk: Option<String>,
    vpn_name: Option<String>,
    vpn_state: Option<String>,
}

impl std::fmt::Debug for VpnDetailsBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VpnDetailsBuilder")
            .field("vpn_psk", &"*** Sensitive Data Redacted ***")
            .finish_non_exhaustive()
    }
}

impl VpnDetailsBuilder {
    /// Sets the VPN ID.
    pub fn vpn_id(mut self, input: impl Into<String>) -> Self {
        self.vpn_id = Some(input.into());
        self
    }

    /// Sets or clears the VPN ID.
    pub fn set_vpn_id(mut self, input: Option<String>) -> Self {
        self.vpn_id = input;
        self
    }

    /// Sets the tunnel originator IP.
    pub fn vpn_tunnel_originator_ip(mut self, input: impl Into<String>) -> Self {
        self.vpn_tunnel_originator_ip = Some(input.into());
        self
    }

    /// Sets or clears the tunnel originator IP.
    pub fn set_vpn_tunnel_originator_ip(mut self, input: Option<String>) -> Self {
        self.vpn_tunnel_originator_ip = input;
        self
    }

    /// Sets the gateway IP.
    pub fn vpn_gateway_ip(mut self, input: impl Into<String>) -> Self {
        self.vpn_gateway_ip = Some(input.into());
        self
    }

    /// Sets or clears the gateway IP.
    pub fn set_vpn_gateway_ip(mut self, input: Option<String>) -> Self {
        self.vpn_gateway_ip = input;
        self
    }

    /// Sets the preshared key.
    pub fn vpn_psk(mut self, input: impl Into<String>) -> Self {
        self.vpn_psk = Some(input.into());
        self
    }

    /// Sets or clears the preshared key.
    pub fn set_vpn_psk(mut self, input: Option<String>) -> Self {
        self.vpn_psk = input;
        self
    }

    /// Sets the VPN name.
    pub fn vpn_name(mut self, input: impl Into<String>) -> Self {
        self.vpn_name = Some(input.into());
        self
    }

    /// Sets or clears the VPN name.
    pub fn set_vpn_name(mut self, input: Option<String>) -> Self {
        self.vpn_name = input;
        self
    }

    /// Sets the VPN state.
    pub fn vpn_state(mut self, input: impl Into<String>) -> Self {
        self.vpn_state = Some(input.into());
        self
    }

    /// Sets or clears the VPN state.
    pub fn set_vpn_state(mut self, input: Option<String>) -> Self {
        self.vpn_state = input;
        self
    }

    /// Builds the [`VpnDetails`].
    pub fn build(self) -> VpnDetails {
        VpnDetails {
            vpn_id: self.vpn_id,
            vpn_tunnel_originator_ip: self.vpn_tunnel_originator_ip,
            vpn_gateway_ip: self.vpn_gateway_ip,
            vpn_psk: self.vpn_psk,
            vpn_name: self.vpn_name,
            vpn_state: self.vpn_state,
        }
    }
}

/// A custom Availability Zone: an on-premises zone associated with a VMware
/// vSphere cluster.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CustomAvailabilityZone {
    /// Identifier of the custom AZ.
    pub custom_availability_zone_id: Option<String>,
    /// Name of the custom AZ.
    pub custom_availability_zone_name: Option<String>,
    /// Deployment status of the custom AZ.
    pub custom_availability_zone_status: Option<String>,
    /// VPN tunnel between the custom AZ and its region.
    pub vpn_details: Option<VpnDetails>,
}

impl CustomAvailabilityZone {
    /// Returns a builder for `CustomAvailabilityZone`.
    pub fn builder() -> CustomAvailabilityZoneBuilder {
        CustomAvailabilityZoneBuilder::default()
    }
}

/// Builder for [`CustomAvailabilityZone`].
#[derive(Clone, Debug, Default)]
pub struct CustomAvailabilityZoneBuilder {
    custom_availability_zone_id: Option<String>,
    custom_availability_zone_name: Option<String>,
    custom_availability_zone_status: Option<String>,
    vpn_details: Option<VpnDetails>,
}

impl CustomAvailabilityZoneBuilder {
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

    /// Sets the custom AZ name.
    pub fn custom_availability_zone_name(mut self, input: impl Into<String>) -> Self {
        self.custom_availability_zone_name = Some(input.into());
        self
    }

    /// Sets or clears the custom AZ name.
    pub fn set_custom_availability_zone_name(mut self, input: Option<String>) -> Self {
        self.custom_availability_zone_name = input;
        self
    }

    /// Sets the custom AZ status.
    pub fn custom_availability_zone_status(mut self, input: impl Into<String>) -> Self {
        self.custom_availability_zone_status = Some(input.into());
        self
    }

    /// Sets or clears the custom AZ status.
    pub fn set_custom_availability_zone_status(mut self, input: Option<String>) -> Self {
        self.custom_availability_zone_status = input;
        self
    }

    /// Sets the VPN details.
    pub fn vpn_details(mut self, input: VpnDetails) -> Self {
        self.vpn_details = Some(input);
        self
    }

    /// Sets or clears the VPN details.
    pub fn set_vpn_details(mut self, input: Option<VpnDetails>) -> Self {
        self.vpn_details = input;
        self
    }

    /// Builds the [`CustomAvailabilityZone`].
    pub fn build(self) -> CustomAvailabilityZone {
        CustomAvailabilityZone {
            custom_availability_zone_id: self.custom_availability_zone_id,
            custom_availability_zone_name: self.custom_availability_zone_name,
            custom_availability_zone_status: self.custom_availability_zone_status,
            vpn_details: self.vpn_details,
        }
    }
}

/// A DB instance: an isolated database environment running in the cloud.
///
/// This is the central description type of the API; nearly every instance
/// lifecycle operation returns one.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DbInstance {
    /// User-supplied database identifier; unique per account and region.
    pub db_instance_identifier: Option<String>,
    /// Compute and memory class of the instance, e.g. `db.m5.large`.
    pub db_instance_class: Option<String>,
    /// Database engine, e.g. `mysql` or `aurora-postgresql`.
    pub engine: Option<String>,
    /// Current lifecycle state, e.g. `available` or `backing-up`.
    pub db_instance_status: Option<String>,
    /// Master username of the instance.
    pub master_username: Option<String>,
    /// Meaning depends on the engine: initial database name (MySQL,
    /// PostgreSQL), or Oracle SID.
    pub db_name: Option<String>,
    /// Connection endpoint.
    pub endpoint: Option<Endpoint>,
    /// Allocated storage, in gibibytes.
    pub allocated_storage: Option<i32>,
    /// When the instance was created.
    pub instance_create_time: Option<DateTime>,
    /// Daily window during which automated backups are taken.
    pub preferred_backup_window: Option<String>,
    /// Days automated backups are retained.
    pub backup_retention_period: Option<i32>,
    /// Classic DB security group memberships.
    pub db_security_groups: Option<Vec<DbSecurityGroupMembership>>,
    /// VPC security group memberships.
    pub vpc_security_groups: Option<Vec<VpcSecurityGroupMembership>>,
    /// DB parameter groups applied to the instance.
    pub db_parameter_groups: Option<Vec<DbParameterGroupStatus>>,
    /// Availability Zone the instance runs in.
    pub availability_zone: Option<String>,
    /// Subnet group of the instance, including its subnets.
    pub db_subnet_group: Option<DbSubnetGroup>,
    /// Weekly window during which maintenance may occur.
    pub preferred_maintenance_window: Option<String>,
    /// Configuration changes awaiting application.
    pub pending_modified_values: Option<PendingModifiedValues>,
    /// Latest time a point-in-time restore can target.
    pub latest_restorable_time: Option<DateTime>,
    /// Whether the instance is a Multi-AZ deployment.
    pub multi_az: Option<bool>,
    /// Engine version.
    pub engine_version: Option<String>,
    /// Whether minor engine upgrades apply automatically.
    pub auto_minor_version_upgrade: Option<bool>,
    /// Source identifier when this instance is a read replica.
    pub read_replica_source_db_instance_identifier: Option<String>,
    /// Identifiers of read replicas of this instance.
    pub read_replica_db_instance_identifiers: Option<Vec<String>>,
    /// Identifiers of Aurora clusters that are read replicas of this
    /// instance.
    pub read_replica_db_cluster_identifiers: Option<Vec<String>>,
    /// License model.
    pub license_model: Option<String>,
    /// Provisioned IOPS.
    pub iops: Option<i32>,
    /// Option group memberships.
    pub option_group_memberships: Option<Vec<OptionGroupMembership>>,
    /// Character set, for engines that support one.
    pub character_set_name: Option<String>,
    /// Secondary AZ of a Multi-AZ deployment.
    pub secondary_availability_zone: Option<String>,
    /// Whether the instance has a public DNS name.
    pub publicly_accessible: Option<bool>,
    /// Read-replica status details.
    pub status_infos: Option<Vec<DbInstanceStatusInfo>>,
    /// Storage type.
    pub storage_type: Option<String>,
    /// ARN of the key store for TDE encryption, if any.
    pub tde_credential_arn: Option<String>,
    /// Port the instance listens on.
    pub db_instance_port: Option<i32>,
    /// Cluster the instance belongs to, if any.
    pub db_cluster_identifier: Option<String>,
    /// Whether storage is encrypted.
    pub storage_encrypted: Option<bool>,
    /// KMS key used for storage encryption.
    pub kms_key_id: Option<String>,
    /// Region-unique, immutable resource identifier.
    pub dbi_resource_id: Option<String>,
    /// CA certificate for the instance.
    pub ca_certificate_identifier: Option<String>,
    /// Active Directory domain memberships.
    pub domain_memberships: Option<Vec<DomainMembership>>,
    /// Whether tags are copied to snapshots.
    pub copy_tags_to_snapshot: Option<bool>,
    /// Enhanced Monitoring interval, in seconds; 0 when disabled.
    pub monitoring_interval: Option<i32>,
    /// CloudWatch Logs stream receiving Enhanced Monitoring metrics.
    pub enhanced_monitoring_resource_arn: Option<String>,
    /// IAM role that publishes Enhanced Monitoring metrics.
    pub monitoring_role_arn: Option<String>,
    /// Failover priority; lower values fail over first.
    pub promotion_tier: Option<i32>,
    /// ARN of the instance.
    pub db_instance_arn: Option<String>,
    /// Time zone, for engines that set one.
    pub timezone: Option<String>,
    /// Whether IAM database authentication is enabled.
    pub iam_database_authentication_enabled: Option<bool>,
    /// Whether Performance Insights is enabled.
    pub performance_insights_enabled: Option<bool>,
    /// KMS key encrypting Performance Insights data.
    pub performance_insights_kms_key_id: Option<String>,
    /// Days Performance Insights data is retained.
    pub performance_insights_retention_period: Option<i32>,
    /// Log types exported to CloudWatch Logs.
    pub enabled_cloudwatch_logs_exports: Option<Vec<String>>,
    /// Processor features of the instance class.
    pub processor_features: Option<Vec<ProcessorFeature>>,
    /// Whether deletion protection is enabled.
    pub deletion_protection: Option<bool>,
    /// IAM roles associated with the instance.
    pub associated_roles: Option<Vec<DbInstanceRole>>,
    /// Listener endpoint of an Oracle RAC instance.
    pub listener_endpoint: Option<Endpoint>,
    /// Storage autoscaling ceiling, in gibibytes.
    pub max_allocated_storage: Option<i32>,
}

impl DbInstance {
    /// Returns a builder for `DbInstance`.
    pub fn builder() -> DbInstanceBuilder {
        DbInstanceBuilder::default()
    }
}

/// Builder for [`DbInstance`].
#[derive(Clone, Debug, Default)]
pub struct DbInstanceBuilder {
    db_instance_identifier: Option<String>,
    db_instance_class: Option<String>,
    engine: Option<String>,
    db_instance_status: Option<String>,
    master_username: Option<String>,
    db_name: Option<String>,
    endpoint: Option<Endpoint>,
    allocated_storage: Option<i32>,
    instance_create_time: Option<DateTime>,
    preferred_backup_window: Option<String>,
    backup_retention_period: Option<i32>,
    db_security_groups: Option<Vec<DbSecurityGroupMembership>>,
    vpc_security_groups: Option<Vec<VpcSecurityGroupMembership>>,
    db_parameter_groups: Option<Vec<DbParameterGroupStatus>>,
    availability_zone: Option<String>,
    db_subnet_group: Option<DbSubnetGroup>,
    preferred_maintenance_window: Option<String>,
    pending_modified_values: Option<PendingModifiedValues>,
    latest_restorable_time: Option<DateTime>,
    multi_az: Option<bool>,
    engine_version: Option<String>,
    auto_minor_version_upgrade: Option<bool>,
    read_replica_source_db_instance_identifier: Option<String>,
    read_replica_db_instance_identifiers: Option<Vec<String>>,
    read_replica_db_cluster_identifiers: Option<Vec<String>>,
    license_model: Option<String>,
    iops: Option<i32>,
    option_group_memberships: Option<Vec<OptionGroupMembership>>,
    character_set_name: Option<String>,
    secondary_availability_zone: Option<String>,
    publicly_accessible: Option<bool>,
    status_infos: Option<Vec<DbInstanceStatusInfo>>,
    storage_type: Option<String>,
    tde_credential_arn: Option<String>,
    db_instance_port: Option<i32>,
    db_cluster_identifier: Option<String>,
    storage_encrypted: Option<bool>,
    kms_key_id: Option<String>,
    dbi_resource_id: Option<String>,
    ca_certificate_identifier: Option<String>,
    domain_memberships: Option<Vec<DomainMembership>>,
    copy_tags_to_snapshot: Option<bool>,
    monitoring_interval: Option<i32>,
    enhanced_monitoring_resource_arn: Option<String>,
    monitoring_role_arn: Option<String>,
    promotion_tier: Option<i32>,
    db_instance_arn: Option<String>,
    timezone: Option<String>,
    iam_database_authentication_enabled: Option<bool>,
    performance_insights_enabled: Option<bool>,
    performance_insights_kms_key_id: Option<String>,
    performance_insights_retention_period: Option<i32>,
    enabled_cloudwatch_logs_exports: Option<Vec<String>>,
    processor_features: Option<Vec<ProcessorFeature>>,
    deletion_protection: Option<bool>,
    associated_roles: Option<Vec<DbInstanceRole>>,
    listener_endpoint: Option<Endpoint>,
    max_allocated_storage: Option<i32>,
}

impl DbInstanceBuilder {
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

    /// Sets the instance status.
    pub fn db_instance_status(mut self, input: impl Into<String>) -> Self {
        self.db_instance_status = Some(input.into());
        self
    }

    /// Sets or clears the instance status.
    pub fn set_db_instance_status(mut self, input: Option<String>) -> Self {
        self.db_instance_status = input;
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

    /// Sets the connection endpoint.
    pub fn endpoint(mut self, input: Endpoint) -> Self {
        self.endpoint = Some(input);
        self
    }

    /// Sets or clears the connection endpoint.
    pub fn set_endpoint(mut self, input: Option<Endpoint>) -> Self {
        self.endpoint = input;
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

    /// Sets the creation time.
    pub fn instance_create_time(mut self, input: DateTime) -> Self {
        self.instance_create_time = Some(input);
        self
    }

    /// Sets or clears the creation time.
    pub fn set_instance_create_time(mut self, input: Option<DateTime>) -> Self {
        self.instance_create_time = input;
        self
    }

    /// Sets the preferred backup window.
    pub fn preferred_backup_window(mut self, input: impl Into<String>) -> Self {
        self.preferred_backup_window = Some(input.into());
        self
    }

    /// Sets or clears the preferred backup window.
    pub fn set_preferred_backup_window(mut self, input: Option<String>) -> Self {
        self.preferred_backup_window = input;
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

    /// Appends a DB security group membership.
    pub fn db_security_groups(mut self, input: DbSecurityGroupMembership) -> Self {
        self.db_security_groups
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// Replaces the DB security group memberships.
    pub fn set_db_security_groups(
        mut self,
        input: Option<Vec<DbSecurityGroupMembership>>,
    ) -> Self {
        self.db_security_groups = input;
        self
    }

    /// Appends a VPC security group membership.
    pub fn vpc_security_groups(mut self, input: VpcSecurityGroupMembership) -> Self {
        self.vpc_security_groups
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// Replaces the VPC security group memberships.
    pub fn set_vpc_security_groups(
        mut self,
        input: Option<Vec<VpcSecurityGroupMembership>>,
    ) -> Self {
        self.vpc_security_groups = input;
        self
    }

    /// Appends a DB parameter group status.
    pub fn db_parameter_groups(mut self, input: DbParameterGroupStatus) -> Self {
        self.db_parameter_groups
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// Replaces the DB parameter group statuses.
    pub fn set_db_parameter_groups(mut self, input: Option<Vec<DbParameterGroupStatus>>) -> Self {
        self.db_parameter_groups = input;
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

    /// Sets the subnet group.
    pub fn db_subnet_group(mut self, input: DbSubnetGroup) -> Self {
        self.db_subnet_group = Some(input);
        self
    }

    /// Sets or clears the subnet group.
    pub fn set_db_subnet_group(mut self, input: Option<DbSubnetGroup>) -> Self {
        self.db_subnet_group = input;
        self
    }

    /// Sets the preferred maintenance window.
    pub fn preferred_maintenance_window(mut self, input: impl Into<String>) -> Self {
        self.preferred_maintenance_window = Some(input.into());
        self
    }

    /// Sets or clears the preferred maintenance window.
    pub fn set_preferred_maintenance_window(mut self, input: Option<String>) -> Self {
        self.preferred_maintenance_window = input;
        self
    }

    /// Sets the pending modified values.
    pub fn pending_modified_values(mut self, input: PendingModifiedValues) -> Self {
        self.pending_modified_values = Some(input);
        self
    }

    /// Sets or clears the pending modified values.
    pub fn set_pending_modified_values(mut self, input: Option<PendingModifiedValues>) -> Self {
        self.pending_modified_values = input;
        self
    }

    /// Sets the latest restorable time.
    pub fn latest_restorable_time(mut self, input: DateTime) -> Self {
        self.latest_restorable_time = Some(input);
        self
    }

    /// Sets or clears the latest restorable time.
    pub fn set_latest_restorable_time(mut self, input: Option<DateTime>) -> Self {
        self.latest_restorable_time = input;
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

    /// Sets the replication source identifier.
    pub fn read_replica_source_db_instance_identifier(
        mut self,
        input: impl Into<String>,
    ) -> Self {
        self.read_replica_source_db_instance_identifier = Some(input.into());
        self
    }

    /// Sets or clears the replication source identifier.
    pub fn set_read_replica_source_db_instance_identifier(
        mut self,
        input: Option<String>,
    ) -> Self {
        self.read_replica_source_db_instance_identifier = input;
        self
    }

    /// Appends a read replica instance identifier.
    pub fn read_replica_db_instance_identifiers(mut self, input: impl Into<String>) -> Self {
        self.read_replica_db_instance_identifiers
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the read replica instance identifiers.
    pub fn set_read_replica_db_instance_identifiers(
        mut self,
        input: Option<Vec<String>>,
    ) -> Self {
        self.read_replica_db_instance_identifiers = input;
        self
    }

    /// Appends a read replica cluster identifier.
    pub fn read_replica_db_cluster_identifiers(mut self, input: impl Into<String>) -> Self {
        self.read_replica_db_cluster_identifiers
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the read replica cluster identifiers.
    pub fn set_read_replica_db_cluster_identifiers(mut self, input: Option<Vec<String>>) -> Self {
        self.read_replica_db_cluster_identifiers = input;
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

    /// Appends an option group membership.
    pub fn option_group_memberships(mut self, input: OptionGroupMembership) -> Self {
        self.option_group_memberships
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// Replaces the option group memberships.
    pub fn set_option_group_memberships(
        mut self,
        input: Option<Vec<OptionGroupMembership>>,
    ) -> Self {
        self.option_group_memberships = input;
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

    /// Sets the secondary Availability Zone.
    pub fn secondary_availability_zone(mut self, input: impl Into<String>) -> Self {
        self.secondary_availability_zone = Some(input.into());
        self
    }

    /// Sets or clears the secondary Availability Zone.
    pub fn set_secondary_availability_zone(mut self, input: Option<String>) -> Self {
        self.secondary_availability_zone = input;
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

    /// Appends a status info entry.
    pub fn status_infos(mut self, input: DbInstanceStatusInfo) -> Self {
        self.status_infos.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Replaces the status info entries.
    pub fn set_status_infos(mut self, input: Option<Vec<DbInstanceStatusInfo>>) -> Self {
        self.status_infos = input;
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

    /// Sets the instance port.
    pub fn db_instance_port(mut self, input: i32) -> Self {
        self.db_instance_port = Some(input);
        self
    }

    /// Sets or clears the instance port.
    pub fn set_db_instance_port(mut self, input: Option<i32>) -> Self {
        self.db_instance_port = input;
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

    /// Sets the resource ID.
    pub fn dbi_resource_id(mut self, input: impl Into<String>) -> Self {
        self.dbi_resource_id = Some(input.into());
        self
    }

    /// Sets or clears the resource ID.
    pub fn set_dbi_resource_id(mut self, input: Option<String>) -> Self {
        self.dbi_resource_id = input;
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

    /// Appends a domain membership.
    pub fn domain_memberships(mut self, input: DomainMembership) -> Self {
        self.domain_memberships
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// Replaces the domain memberships.
    pub fn set_domain_memberships(mut self, input: Option<Vec<DomainMembership>>) -> Self {
        self.domain_memberships = input;
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

    /// Sets the Enhanced Monitoring resource ARN.
    pub fn enhanced_monitoring_resource_arn(mut self, input: impl Into<String>) -> Self {
        self.enhanced_monitoring_resource_arn = Some(input.into());
        self
    }

    /// Sets or clears the Enhanced Monitoring resource ARN.
    pub fn set_enhanced_monitoring_resource_arn(mut self, input: Option<String>) -> Self {
        self.enhanced_monitoring_resource_arn = input;
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

    /// Sets the instance ARN.
    pub fn db_instance_arn(mut self, input: impl Into<String>) -> Self {
        self.db_instance_arn = Some(input.into());
        self
    }

    /// Sets or clears the instance ARN.
    pub fn set_db_instance_arn(mut self, input: Option<String>) -> Self {
        self.db_instance_arn = input;
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
    pub fn iam_database_authentication_enabled(mut self, input: bool) -> Self {
        self.iam_database_authentication_enabled = Some(input);
        self
    }

    /// Sets or clears the IAM database authentication flag.
    pub fn set_iam_database_authentication_enabled(mut self, input: Option<bool>) -> Self {
        self.iam_database_authentication_enabled = input;
        self
    }

    /// Sets the Performance Insights flag.
    pub fn performance_insights_enabled(mut self, input: bool) -> Self {
        self.performance_insights_enabled = Some(input);
        self
    }

    /// Sets or clears the Performance Insights flag.
    pub fn set_performance_insights_enabled(mut self, input: Option<bool>) -> Self {
        self.performance_insights_enabled = input;
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

    /// Appends an exported log type.
    pub fn enabled_cloudwatch_logs_exports(mut self, input: impl Into<String>) -> Self {
        self.enabled_cloudwatch_logs_exports
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the exported log types.
    pub fn set_enabled_cloudwatch_logs_exports(mut self, input: Option<Vec<String>>) -> Self {
        self.enabled_cloudwatch_logs_exports = input;
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

    /// Appends an associated IAM role.
    pub fn associated_roles(mut self, input: DbInstanceRole) -> Self {
        self.associated_roles
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// Replaces the associated IAM roles.
    pub fn set_associated_roles(mut self, input: Option<Vec<DbInstanceRole>>) -> Self {
        self.associated_roles = input;
        self
    }

    /// Sets the listener endpoint.
    pub fn listener_endpoint(mut self, input: Endpoint) -> Self {
        self.listener_endpoint = Some(input);
        self
    }

    /// Sets or clears the listener endpoint.
    pub fn set_listener_endpoint(mut self, input: Option<Endpoint>) -> Self {
        self.listener_endpoint = input;
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

    /// Builds the [`DbInstance`].
    pub fn build(self) -> DbInstance {
        DbInstance {
            db_instance_identifier: self.db_instance_identifier,
            db_instance_class: self.db_instance_class,
            engine: self.engine,
            db_instance_status: self.db_instance_status,
            master_username: self.master_username,
            db_name: self.db_name,
            endpoint: self.endpoint,
            allocated_storage: self.allocated_storage,
            instance_create_time: self.instance_create_time,
            preferred_backup_window: self.preferred_backup_window,
            backup_retention_period: self.backup_retention_period,
            db_security_groups: self.db_security_groups,
            vpc_security_groups: self.vpc_security_groups,
            db_parameter_groups: self.db_parameter_groups,
            availability_zone: self.availability_zone,
            db_subnet_group: self.db_subnet_group,
            preferred_maintenance_window: self.preferred_maintenance_window,
            pending_modified_values: self.pending_modified_values,
            latest_restorable_time: self.latest_restorable_time,
            multi_az: self.multi_az,
            engine_version: self.engine_version,
            auto_minor_version_upgrade: self.auto_minor_version_upgrade,
            read_replica_source_db_instance_identifier: self
                .read_replica_source_db_instance_identifier,
            read_replica_db_instance_identifiers: self.read_replica_db_instance_identifiers,
            read_replica_db_cluster_identifiers: self.read_replica_db_cluster_identifiers,
            license_model: self.license_model,
            iops: self.iops,
            option_group_memberships: self.option_group_memberships,
            character_set_name: self.character_set_name,
            secondary_availability_zone: self.secondary_availability_zone,
            publicly_accessible: self.publicly_accessible,
            status_infos: self.status_infos,
            storage_type: self.storage_type,
            tde_credential_arn: self.tde_credential_arn,
            db_instance_port: self.db_instance_port,
            db_cluster_identifier: self.db_cluster_identifier,
            storage_encrypted: self.storage_encrypted,
            kms_key_id: self.kms_key_id,
            dbi_resource_id: self.dbi_resource_id,
            ca_certificate_identifier: self.ca_certificate_identifier,
            domain_memberships: self.domain_memberships,
            copy_tags_to_snapshot: self.copy_tags_to_snapshot,
            monitoring_interval: self.monitoring_interval,
            enhanced_monitoring_resource_arn: self.enhanced_monitoring_resource_arn,
            monitoring_role_arn: self.monitoring_role_arn,
            promotion_tier: self.promotion_tier,
            db_instance_arn: self.db_instance_arn,
            timezone: self.timezone,
            iam_database_authentication_enabled: self.iam_database_authentication_enabled,
            performance_insights_enabled: self.performance_insights_enabled,
            performance_insights_kms_key_id: self.performance_insights_kms_key_id,
            performance_insights_retention_period: self.performance_insights_retention_period,
            enabled_cloudwatch_logs_exports: self.enabled_cloudwatch_logs_exports,
            processor_features: self.processor_features,
            deletion_protection: self.deletion_protection,
            associated_roles: self.associated_roles,
            listener_endpoint: self.listener_endpoint,
            max_allocated_storage: self.max_allocated_storage,
        }
    }
}

/// An Aurora DB cluster.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DbCluster {
    /// Allocated storage, in gibibytes; `1` for Aurora, whose storage grows
    /// automatically.
    pub allocated_storage: Option<i32>,
    /// Availability Zones the cluster's storage spans.
    pub availability_zones: Option<Vec<String>>,
    /// Days automated backups are retained.
    pub backup_retention_period: Option<i32>,
    /// Character set, for engines that support one.
    pub character_set_name: Option<String>,
    /// Name of the initial database, if one was created.
    pub database_name: Option<String>,
    /// User-supplied cluster identifier.
    pub db_cluster_identifier: Option<String>,
    /// Cluster parameter group of the cluster.
    pub db_cluster_parameter_group: Option<String>,
    /// Subnet group name of the cluster.
    pub db_subnet_group: Option<String>,
    /// Current lifecycle state.
    pub status: Option<String>,
    /// Progress of the operation as a percentage.
    pub percent_progress: Option<String>,
    /// Earliest time a point-in-time restore can target.
    pub earliest_restorable_time: Option<DateTime>,
    /// Writer endpoint of the cluster.
    pub endpoint: Option<String>,
    /// Load-balanced reader endpoint of the cluster.
    pub reader_endpoint: Option<String>,
    /// Custom endpoints associated with the cluster.
    pub custom_endpoints: Option<Vec<String>>,
    /// Whether the cluster has instances in multiple Availability Zones.
    pub multi_az: Option<bool>,
    /// Database engine.
    pub engine: Option<String>,
    /// Engine version.
    pub engine_version: Option<String>,
    /// Latest time a point-in-time restore can target.
    pub latest_restorable_time: Option<DateTime>,
    /// Port the engine listens on.
    pub port: Option<i32>,
    /// Master username of the cluster.
    pub master_username: Option<String>,
    /// Option group memberships.
    pub db_cluster_option_group_memberships: Option<Vec<DbClusterOptionGroupStatus>>,
    /// Daily window during which automated backups are taken.
    pub preferred_backup_window: Option<String>,
    /// Weekly window during which maintenance may occur.
    pub preferred_maintenance_window: Option<String>,
    /// Source identifier when the cluster is a read replica.
    pub replication_source_identifier: Option<String>,
    /// Identifiers of read replicas of this cluster.
    pub read_replica_identifiers: Option<Vec<String>>,
    /// Instances belonging to the cluster.
    pub db_cluster_members: Option<Vec<DbClusterMember>>,
    /// VPC security group memberships.
    pub vpc_security_groups: Option<Vec<VpcSecurityGroupMembership>>,
    /// Route 53 hosted zone ID of the endpoints.
    pub hosted_zone_id: Option<String>,
    /// Whether storage is encrypted.
    pub storage_encrypted: Option<bool>,
    /// KMS key used for storage encryption.
    pub kms_key_id: Option<String>,
    /// Region-unique, immutable resource identifier.
    pub db_cluster_resource_id: Option<String>,
    /// ARN of the cluster.
    pub db_cluster_arn: Option<String>,
    /// IAM roles associated with the cluster.
    pub associated_roles: Option<Vec<DbClusterRole>>,
    /// Whether IAM database authentication is enabled.
    pub iam_database_authentication_enabled: Option<bool>,
    /// Clone group the cluster belongs to.
    pub clone_group_id: Option<String>,
    /// When the cluster was created.
    pub cluster_create_time: Option<DateTime>,
    /// Backtrack window, in seconds; 0 when backtracking is disabled.
    pub backtrack_window: Option<i64>,
    /// Number of change records stored for backtracking.
    pub backtrack_consumed_change_records: Option<i64>,
    /// Log types exported to CloudWatch Logs.
    pub enabled_cloudwatch_logs_exports: Option<Vec<String>>,
    /// Current capacity of a serverless cluster; `None` for provisioned
    /// clusters.
    pub capacity: Option<i32>,
    /// Engine mode: `provisioned`, `serverless`, `parallelquery`, `global`,
    /// or `multimaster`.
    pub engine_mode: Option<String>,
    /// Scaling configuration of a serverless cluster.
    pub scaling_configuration_info: Option<ScalingConfigurationInfo>,
    /// Whether deletion protection is enabled.
    pub deletion_protection: Option<bool>,
    /// Whether the HTTP endpoint (Data API) is enabled.
    pub http_endpoint_enabled: Option<bool>,
    /// Whether tags are copied to snapshots.
    pub copy_tags_to_snapshot: Option<bool>,
    /// Whether the cluster is a cross-account clone.
    pub cross_account_clone: Option<bool>,
    /// Active Directory domain memberships.
    pub domain_memberships: Option<Vec<DomainMembership>>,
}

impl DbCluster {
    /// Returns a builder for `DbCluster`.
    pub fn builder() -> DbClusterBuilder {
        DbClusterBuilder::default()
    }
}

/// Builder for [`DbCluster`].
#[derive(Clone, Debug, Default)]
pub struct DbClusterBuilder {
    allocated_storage: Option<i32>,
    availability_zones: Option<Vec<String>>,
    backup_retention_period: Option<i32>,
    character_set_name: Option<String>,
    database_name: Option<String>,
    db_cluster_identifier: Option<String>,
    db_cluster_parameter_group: Option<String>,
    db_subnet_group: Option<String>,
    status: Option<String>,
    percent_progress: Option<String>,
    earliest_restorable_time: Option<DateTime>,
    endpoint: Option<String>,
    reader_endpoint: Option<String>,
    custom_endpoints: Option<Vec<String>>,
    multi_az: Option<bool>,
    engine: Option<String>,
    engine_version: Option<String>,
    latest_restorable_time: Option<DateTime>,
    port: Option<i32>,
    master_username: Option<String>,
    db_cluster_option_group_memberships: Option<Vec<DbClusterOptionGroupStatus>>,
    preferred_backup_window: Option<String>,
    preferred_maintenance_window: Option<String>,
    replication_source_identifier: Option<String>,
    read_replica_identifiers: Option<Vec<String>>,
    db_cluster_members: Option<Vec<DbClusterMember>>,
    vpc_security_groups: Option<Vec<VpcSecurityGroupMembership>>,
    hosted_zone_id: Option<String>,
    storage_encrypted: Option<bool>,
    kms_key_id: Option<String>,
    db_cluster_resource_id: Option<String>,
    db_cluster_arn: Option<String>,
    associated_roles: Option<Vec<DbClusterRole>>,
    iam_database_authentication_enabled: Option<bool>,
    clone_group_id: Option<String>,
    cluster_create_time: Option<DateTime>,
    backtrack_window: Option<i64>,
    backtrack_consumed_change_records: Option<i64>,
    enabled_cloudwatch_logs_exports: Option<Vec<String>>,
    capacity: Option<i32>,
    engine_mode: Option<String>,
    scaling_configuration_info: Option<ScalingConfigurationInfo>,
    deletion_protection: Option<bool>,
    http_endpoint_enabled: Option<bool>,
    copy_tags_to_snapshot: Option<bool>,
    cross_account_clone: Option<bool>,
    domain_memberships: Option<Vec<DomainMembership>>,
}

impl DbClusterBuilder {
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

    /// Sets the cluster parameter group.
    pub fn db_cluster_parameter_group(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_parameter_group = Some(input.into());
        self
    }

    /// Sets or clears the cluster parameter group.
    pub fn set_db_cluster_parameter_group(mut self, input: Option<String>) -> Self {
        self.db_cluster_parameter_group = input;
        self
    }

    /// Sets the subnet group name.
    pub fn db_subnet_group(mut self, input: impl Into<String>) -> Self {
        self.db_subnet_group = Some(input.into());
        self
    }

    /// Sets or clears the subnet group name.
    pub fn set_db_subnet_group(mut self, input: Option<String>) -> Self {
        self.db_subnet_group = input;
        self
    }

    /// Sets the cluster status.
    pub fn status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }

    /// Sets or clears the cluster status.
    pub fn set_status(mut self, input: Option<String>) -> Self {
        self.status = input;
        self
    }

    /// Sets the progress percentage.
    pub fn percent_progress(mut self, input: impl Into<String>) -> Self {
        self.percent_progress = Some(input.into());
        self
    }

    /// Sets or clears the progress percentage.
    pub fn set_percent_progress(mut self, input: Option<String>) -> Self {
        self.percent_progress = input;
        self
    }

    /// Sets the earliest restorable time.
    pub fn earliest_restorable_time(mut self, input: DateTime) -> Self {
        self.earliest_restorable_time = Some(input);
        self
    }

    /// Sets or clears the earliest restorable time.
    pub fn set_earliest_restorable_time(mut self, input: Option<DateTime>) -> Self {
        self.earliest_restorable_time = input;
        self
    }

    /// Sets the writer endpoint.
    pub fn endpoint(mut self, input: impl Into<String>) -> Self {
        self.endpoint = Some(input.into());
        self
    }

    /// Sets or clears the writer endpoint.
    pub fn set_endpoint(mut self, input: Option<String>) -> Self {
        self.endpoint = input;
        self
    }

    /// Sets the reader endpoint.
    pub fn reader_endpoint(mut self, input: impl Into<String>) -> Self {
        self.reader_endpoint = Some(input.into());
        self
    }

    /// Sets or clears the reader endpoint.
    pub fn set_reader_endpoint(mut self, input: Option<String>) -> Self {
        self.reader_endpoint = input;
        self
    }

    /// Appends a custom endpoint.
    pub fn custom_endpoints(mut self, input: impl Into<String>) -> Self {
        self.custom_endpoints
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the custom endpoints.
    pub fn set_custom_endpoints(mut self, input: Option<Vec<String>>) -> Self {
        self.custom_endpoints = input;
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

    /// Sets the latest restorable time.
    pub fn latest_restorable_time(mut self, input: DateTime) -> Self {
        self.latest_restorable_time = Some(input);
        self
    }

    /// Sets or clears the latest restorable time.
    pub fn set_latest_restorable_time(mut self, input: Option<DateTime>) -> Self {
        self.latest_restorable_time = input;
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

    /// Appends an option group membership.
    pub fn db_cluster_option_group_memberships(
        mut self,
        input: DbClusterOptionGroupStatus,
    ) -> Self {
        self.db_cluster_option_group_memberships
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// Replaces the option group memberships.
    pub fn set_db_cluster_option_group_memberships(
        mut self,
        input: Option<Vec<DbClusterOptionGroupStatus>>,
    ) -> Self {
        self.db_cluster_option_group_memberships = input;
        self
    }

    /// Sets the preferred backup window.
    pub fn preferred_backup_window(mut self, input: impl Into<String>) -> Self {
        self.preferred_backup_window = Some(input.into());
        self
    }

    /// Sets or clears the preferred backup window.
    pub fn set_preferred_backup_window(mut self, input: Option<String>) -> Self {
        self.preferred_backup_window = input;
        self
    }

    /// Sets the preferred maintenance window.
    pub fn preferred_maintenance_window(mut self, input: impl Into<String>) -> Self {
        self.preferred_maintenance_window = Some(input.into());
        self
    }

    /// Sets or clears the preferred maintenance window.
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

    /// Appends a read replica identifier.
    pub fn read_replica_identifiers(mut self, input: impl Into<String>) -> Self {
        self.read_replica_identifiers
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the read replica identifiers.
    pub fn set_read_replica_identifiers(mut self, input: Option<Vec<String>>) -> Self {
        self.read_replica_identifiers = input;
        self
    }

    /// Appends a cluster member.
    pub fn db_cluster_members(mut self, input: DbClusterMember) -> Self {
        self.db_cluster_members
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// Replaces the cluster members.
    pub fn set_db_cluster_members(mut self, input: Option<Vec<DbClusterMember>>) -> Self {
        self.db_cluster_members = input;
        self
    }

    /// Appends a VPC security group membership.
    pub fn vpc_security_groups(mut self, input: VpcSecurityGroupMembership) -> Self {
        self.vpc_security_groups
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// Replaces the VPC security group memberships.
    pub fn set_vpc_security_groups(
        mut self,
        input: Option<Vec<VpcSecurityGroupMembership>>,
    ) -> Self {
        self.vpc_security_groups = input;
        self
    }

    /// Sets the hosted zone ID.
    pub fn hosted_zone_id(mut self, input: impl Into<String>) -> Self {
        self.hosted_zone_id = Some(input.into());
        self
    }

    /// Sets or clears the hosted zone ID.
    pub fn set_hosted_zone_id(mut self, input: Option<String>) -> Self {
        self.hosted_zone_id = input;
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

    /// Sets the cluster resource ID.
    pub fn db_cluster_resource_id(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_resource_id = Some(input.into());
        self
    }

    /// Sets or clears the cluster resource ID.
    pub fn set_db_cluster_resource_id(mut self, input: Option<String>) -> Self {
        self.db_cluster_resource_id = input;
        self
    }

    /// Sets the cluster ARN.
    pub fn db_cluster_arn(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_arn = Some(input.into());
        self
    }

    /// Sets or clears the cluster ARN.
    pub fn set_db_cluster_arn(mut self, input: Option<String>) -> Self {
        self.db_cluster_arn = input;
        self
    }

    /// Appends an associated IAM role.
    pub fn associated_roles(mut self, input: DbClusterRole) -> Self {
        self.associated_roles
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// Replaces the associated IAM roles.
    pub fn set_associated_roles(mut self, input: Option<Vec<DbClusterRole>>) -> Self {
        self.associated_roles = input;
        self
    }

    /// Sets the IAM database authentication flag.
    pub fn iam_database_authentication_enabled(mut self, input: bool) -> Self {
        self.iam_database_authentication_enabled = Some(input);
        self
    }

    /// Sets or clears the IAM database authentication flag.
    pub fn set_iam_database_authentication_enabled(mut self, input: Option<bool>) -> Self {
        self.iam_database_authentication_enabled = input;
        self
    }

    /// Sets the clone group ID.
    pub fn clone_group_id(mut self, input: impl Into<String>) -> Self {
        self.clone_group_id = Some(input.into());
        self
    }

    /// Sets or clears the clone group ID.
    pub fn set_clone_group_id(mut self, input: Option<String>) -> Self {
        self.clone_group_id = input;
        self
    }

    /// Sets the creation time.
    pub fn cluster_create_time(mut self, input: DateTime) -> Self {
        self.cluster_create_time = Some(input);
        self
    }

    /// Sets or clears the creation time.
    pub fn set_cluster_create_time(mut self, input: Option<DateTime>) -> Self {
        self.cluster_create_time = input;
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

    /// Sets the consumed backtrack change records.
    pub fn backtrack_consumed_change_records(mut self, input: i64) -> Self {
        self.backtrack_consumed_change_records = Some(input);
        self
    }

    /// Sets or clears the consumed backtrack change records.
    pub fn set_backtrack_consumed_change_records(mut self, input: Option<i64>) -> Self {
        self.backtrack_consumed_change_records = input;
        self
    }

    /// Appends an exported log type.
    pub fn enabled_cloudwatch_logs_exports(mut self, input: impl Into<String>) -> Self {
        self.enabled_cloudwatch_logs_exports
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the exported log types.
    pub fn set_enabled_cloudwatch_logs_exports(mut self, input: Option<Vec<String>>) -> Self {
        self.enabled_cloudwatch_logs_exports = input;
        self
    }

    /// Sets the serverless capacity.
    pub fn capacity(mut self, input: i32) -> Self {
        self.capacity = Some(input);
        self
    }

    /// Sets or clears the serverless capacity.
    pub fn set_capacity(mut self, input: Option<i32>) -> Self {
        self.capacity = input;
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

    /// Sets the scaling configuration info.
    pub fn scaling_configuration_info(mut self, input: ScalingConfigurationInfo) -> Self {
        self.scaling_configuration_info = Some(input);
        self
    }

    /// Sets or clears the scaling configuration info.
    pub fn set_scaling_configuration_info(
        mut self,
        input: Option<ScalingConfigurationInfo>,
    ) -> Self {
        self.scaling_configuration_info = input;
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
    pub fn http_endpoint_enabled(mut self, input: bool) -> Self {
        self.http_endpoint_enabled = Some(input);
        self
    }

    /// Sets or clears the HTTP endpoint flag.
    pub fn set_http_endpoint_enabled(mut self, input: Option<bool>) -> Self {
        self.http_endpoint_enabled = input;
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

    /// Sets the cross-account clone flag.
    pub fn cross_account_clone(mut self, input: bool) -> Self {
        self.cross_account_clone = Some(input);
        self
    }

    /// Sets or clears the cross-account clone flag.
    pub fn set_cross_account_clone(mut self, input: Option<bool>) -> Self {
        self.cross_account_clone = input;
        self
    }

    /// Appends a domain membership.
    pub fn domain_memberships(mut self, input: DomainMembership) -> Self {
        self.domain_memberships
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// Replaces the domain memberships.
    pub fn set_domain_memberships(mut self, input: Option<Vec<DomainMembership>>) -> Self {
        self.domain_memberships = input;
        self
    }

    /// Builds the [`DbCluster`].
    pub fn build(self) -> DbCluster {
        DbCluster {
            allocated_storage: self.allocated_storage,
            availability_zones: self.availability_zones,
            backup_retention_period: self.backup_retention_period,
            character_set_name: self.character_set_name,
            database_name: self.database_name,
            db_cluster_identifier: self.db_cluster_identifier,
            db_cluster_parameter_group: self.db_cluster_parameter_group,
            db_subnet_group: self.db_subnet_group,
            status: self.status,
            percent_progress: self.percent_progress,
            earliest_restorable_time: self.earliest_restorable_time,
            endpoint: self.endpoint,
            reader_endpoint: self.reader_endpoint,
            custom_endpoints: self.custom_endpoints,
            multi_az: self.multi_az,
            engine: self.engine,
            engine_version: self.engine_version,
            latest_restorable_time: self.latest_restorable_time,
            port: self.port,
            master_username: self.master_username,
            db_cluster_option_group_memberships: self.db_cluster_option_group_memberships,
            preferred_backup_window: self.preferred_backup_window,
            preferred_maintenance_window: self.preferred_maintenance_window,
            replication_source_identifier: self.replication_source_identifier,
            read_replica_identifiers: self.read_replica_identifiers,
            db_cluster_members: self.db_cluster_members,
            vpc_security_groups: self.vpc_security_groups,
            hosted_zone_id: self.hosted_zone_id,
            storage_encrypted: self.storage_encrypted,
            kms_key_id: self.kms_key_id,
            db_cluster_resource_id: self.db_cluster_resource_id,
            db_cluster_arn: self.db_cluster_arn,
            associated_roles: self.associated_roles,
            iam_database_authentication_enabled: self.iam_database_authentication_enabled,
            clone_group_id: self.clone_group_id,
            cluster_create_time: self.cluster_create_time,
            backtrack_window: self.backtrack_window,
            backtrack_consumed_change_records: self.backtrack_consumed_change_records,
            enabled_cloudwatch_logs_exports: self.enabled_cloudwatch_logs_exports,
            capacity: self.capacity,
            engine_mode: self.engine_mode,
            scaling_configuration_info: self.scaling_configuration_info,
            deletion_protection: self.deletion_protection,
            http_endpoint_enabled: self.http_endpoint_enabled,
            copy_tags_to_snapshot: self.copy_tags_to_snapshot,
            cross_account_clone: self.cross_account_clone,
            domain_memberships: self.domain_memberships,
        }
    }
}

/// A point-in-time snapshot of a DB instance.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DbSnapshot {
    /// Snapshot identifier.
    pub db_snapshot_identifier: Option<String>,
    /// Identifier of the instance the snapshot was taken from.
    pub db_instance_identifier: Option<String>,
    /// When the snapshot was taken.
    pub snapshot_create_time: Option<DateTime>,
    /// Database engine.
    pub engine: Option<String>,
    /// Allocated storage at snapshot time, in gibibytes.
    pub allocated_storage: Option<i32>,
    /// Snapshot status.
    pub status: Option<String>,
    /// Port of the source instance at snapshot time.
    pub port: Option<i32>,
    /// Availability Zone of the source instance at snapshot time.
    pub availability_zone: Option<String>,
    /// VPC of the source instance at snapshot time.
    pub vpc_id: Option<String>,
    /// When the source instance was created.
    pub instance_create_time: Option<DateTime>,
    /// Master username of the source instance.
    pub master_username: Option<String>,
    /// Engine version of the source instance.
    pub engine_version: Option<String>,
    /// License model of the source instance.
    pub license_model: Option<String>,
    /// `manual` or `automated`.
    pub snapshot_type: Option<String>,
    /// Provisioned IOPS of the source instance at snapshot time.
    pub iops: Option<i32>,
    /// Option group of the source instance.
    pub option_group_name: Option<String>,
    /// Progress of the snapshot as a percentage.
    pub percent_progress: Option<i32>,
    /// Region the snapshot was copied from, for cross-region copies.
    pub source_region: Option<String>,
    /// ARN of the snapshot this one was copied from.
    pub source_db_snapshot_identifier: Option<String>,
    /// Storage type of the snapshot.
    pub storage_type: Option<String>,
    /// ARN of the key store for TDE encryption, if any.
    pub tde_credential_arn: Option<String>,
    /// Whether the snapshot is encrypted.
    pub encrypted: Option<bool>,
    /// KMS key of an encrypted snapshot.
    pub kms_key_id: Option<String>,
    /// ARN of the snapshot.
    pub db_snapshot_arn: Option<String>,
    /// Time zone of the snapshot, for engines that set one.
    pub timezone: Option<String>,
    /// Whether IAM database authentication is enabled.
    pub iam_database_authentication_enabled: Option<bool>,
    /// Processor features of the source instance at snapshot time.
    pub processor_features: Option<Vec<ProcessorFeature>>,
    /// Resource ID of the source instance.
    pub dbi_resource_id: Option<String>,
}

impl DbSnapshot {
    /// Returns a builder for `DbSnapshot`.
    pub fn builder() -> DbSnapshotBuilder {
        DbSnapshotBuilder::default()
    }
}

/// Builder for [`DbSnapshot`].
#[derive(Clone, Debug, Default)]
pub struct DbSnapshotBuilder {
    db_snapshot_identifier: Option<String>,
    db_instance_identifier: Option<String>,
    snapshot_create_time: Option<DateTime>,
    engine: Option<String>,
    allocated_storage: Option<i32>,
    status: Option<String>,
    port: Option<i32>,
    availability_zone: Option<String>,
    vpc_id: Option<String>,
    instance_create_time: Option<DateTime>,
    master_username: Option<String>,
    engine_version: Option<String>,
    license_model: Option<String>,
    snapshot_type: Option<String>,
    iops: Option<i32>,
    option_group_name: Option<String>,
    percent_progress: Option<i32>,
    source_region: Option<String>,
    source_db_snapshot_identifier: Option<String>,
    storage_type: Option<String>,
    tde_credential_arn: Option<String>,
    encrypted: Option<bool>,
    kms_key_id: Option<String>,
    db_snapshot_arn: Option<String>,
    timezone: Option<String>,
    iam_database_authentication_enabled: Option<bool>,
    processor_features: Option<Vec<ProcessorFeature>>,
    dbi_resource_id: Option<String>,
}

impl DbSnapshotBuilder {
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

    /// Sets the source instance identifier.
    pub fn db_instance_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(input.into());
        self
    }

    /// Sets or clears the source instance identifier.
    pub fn set_db_instance_identifier(mut self, input: Option<String>) -> Self {
        self.db_instance_identifier = input;
        self
    }

    /// Sets the snapshot creation time.
    pub fn snapshot_create_time(mut self, input: DateTime) -> Self {
        self.snapshot_create_time = Some(input);
        self
    }

    /// Sets or clears the snapshot creation time.
    pub fn set_snapshot_create_time(mut self, input: Option<DateTime>) -> Self {
        self.snapshot_create_time = input;
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

    /// Sets the snapshot status.
    pub fn status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }

    /// Sets or clears the snapshot status.
    pub fn set_status(mut self, input: Option<String>) -> Self {
        self.status = input;
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

    /// Sets the VPC ID.
    pub fn vpc_id(mut self, input: impl Into<String>) -> Self {
        self.vpc_id = Some(input.into());
        self
    }

    /// Sets or clears the VPC ID.
    pub fn set_vpc_id(mut self, input: Option<String>) -> Self {
        self.vpc_id = input;
        self
    }

    /// Sets the source instance creation time.
    pub fn instance_create_time(mut self, input: DateTime) -> Self {
        self.instance_create_time = Some(input);
        self
    }

    /// Sets or clears the source instance creation time.
    pub fn set_instance_create_time(mut self, input: Option<DateTime>) -> Self {
        self.instance_create_time = input;
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

    /// Sets the progress percentage.
    pub fn percent_progress(mut self, input: i32) -> Self {
        self.percent_progress = Some(input);
        self
    }

    /// Sets or clears the progress percentage.
    pub fn set_percent_progress(mut self, input: Option<i32>) -> Self {
        self.percent_progress = input;
        self
    }

    /// Sets the source region.
    pub fn source_region(mut self, input: impl Into<String>) -> Self {
        self.source_region = Some(input.into());
        self
    }

    /// Sets or clears the source region.
    pub fn set_source_region(mut self, input: Option<String>) -> Self {
        self.source_region = input;
        self
    }

    /// Sets the source snapshot identifier.
    pub fn source_db_snapshot_identifier(mut self, input: impl Into<String>) -> Self {
        self.source_db_snapshot_identifier = Some(input.into());
        self
    }

    /// Sets or clears the source snapshot identifier.
    pub fn set_source_db_snapshot_identifier(mut self, input: Option<String>) -> Self {
        self.source_db_snapshot_identifier = input;
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

    /// Sets the encryption flag.
    pub fn encrypted(mut self, input: bool) -> Self {
        self.encrypted = Some(input);
        self
    }

    /// Sets or clears the encryption flag.
    pub fn set_encrypted(mut self, input: Option<bool>) -> Self {
        self.encrypted = input;
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

    /// Sets the snapshot ARN.
    pub fn db_snapshot_arn(mut self, input: impl Into<String>) -> Self {
        self.db_snapshot_arn = Some(input.into());
        self
    }

    /// Sets or clears the snapshot ARN.
    pub fn set_db_snapshot_arn(mut self, input: Option<String>) -> Self {
        self.db_snapshot_arn = input;
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
    pub fn iam_database_authentication_enabled(mut self, input: bool) -> Self {
        self.iam_database_authentication_enabled = Some(input);
        self
    }

    /// Sets or clears the IAM database authentication flag.
    pub fn set_iam_database_authentication_enabled(mut self, input: Option<bool>) -> Self {
        self.iam_database_authentication_enabled = input;
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

    /// Sets the source resource ID.
    pub fn dbi_resource_id(mut self, input: impl Into<String>) -> Self {
        self.dbi_resource_id = Some(input.into());
        self
    }

    /// Sets or clears the source resource ID.
    pub fn set_dbi_resource_id(mut self, input: Option<String>) -> Self {
        self.dbi_resource_id = input;
        self
    }

    /// Builds the [`DbSnapshot`].
    pub fn build(self) -> DbSnapshot {
        DbSnapshot {
            db_snapshot_identifier: self.db_snapshot_identifier,
            db_instance_identifier: self.db_instance_identifier,
            snapshot_create_time: self.snapshot_create_time,
            engine: self.engine,
            allocated_storage: self.allocated_storage,
            status: self.status,
            port: self.port,
            availability_zone: self.availability_zone,
            vpc_id: self.vpc_id,
            instance_create_time: self.instance_create_time,
            master_username: self.master_username,
            engine_version: self.engine_version,
            license_model: self.license_model,
            snapshot_type: self.snapshot_type,
            iops: self.iops,
            option_group_name: self.option_group_name,
            percent_progress: self.percent_progress,
            source_region: self.source_region,
            source_db_snapshot_identifier: self.source_db_snapshot_identifier,
            storage_type: self.storage_type,
            tde_credential_arn: self.tde_credential_arn,
            encrypted: self.encrypted,
            kms_key_id: self.kms_key_id,
            db_snapshot_arn: self.db_snapshot_arn,
            timezone: self.timezone,
            iam_database_authentication_enabled: self.iam_database_authentication_enabled,
            processor_features: self.processor_features,
            dbi_resource_id: self.dbi_resource_id,
        }
    }
}

/// A point-in-time snapshot of a DB cluster.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DbClusterSnapshot {
    /// Availability Zones the source cluster spanned.
    pub availability_zones: Option<Vec<String>>,
    /// Snapshot identifier.
    pub db_cluster_snapshot_identifier: Option<String>,
    /// Identifier of the cluster the snapshot was taken from.
    pub db_cluster_identifier: Option<String>,
    /// When the snapshot was taken.
    pub snapshot_create_time: Option<DateTime>,
    /// Database engine.
    pub engine: Option<String>,
    /// Allocated storage at snapshot time, in gibibytes.
    pub allocated_storage: Option<i32>,
    /// Snapshot status.
    pub status: Option<String>,
    /// Port of the source cluster at snapshot time.
    pub port: Option<i32>,
    /// VPC of the source cluster.
    pub vpc_id: Option<String>,
    /// When the source cluster was created.
    pub cluster_create_time: Option<DateTime>,
    /// Master username of the source cluster.
    pub master_username: Option<String>,
    /// Engine version of the source cluster.
    pub engine_version: Option<String>,
    /// License model of the source cluster.
    pub license_model: Option<String>,
    /// `manual` or `automated`.
    pub snapshot_type: Option<String>,
    /// Progress of the snapshot as a percentage.
    pub percent_progress: Option<i32>,
    /// Whether the snapshot is encrypted.
    pub storage_encrypted: Option<bool>,
    /// KMS key of an encrypted snapshot.
    pub kms_key_id: Option<String>,
    /// ARN of the snapshot.
    pub db_cluster_snapshot_arn: Option<String>,
    /// ARN of the snapshot this one was copied from, when a copy.
    pub source_db_cluster_snapshot_arn: Option<String>,
    /// Whether IAM database authentication is enabled.
    pub iam_database_authentication_enabled: Option<bool>,
}

impl DbClusterSnapshot {
    /// Returns a builder for `DbClusterSnapshot`.
    pub fn builder() -> DbClusterSnapshotBuilder {
        DbClusterSnapshotBuilder::default()
    }
}

/// Builder for [`DbClusterSnapshot`].
#[derive(Clone, Debug, Default)]
pub struct DbClusterSnapshotBuilder {
    availability_zones: Option<Vec<String>>,
    db_cluster_snapshot_identifier: Option<String>,
    db_cluster_identifier: Option<String>,
    snapshot_create_time: Option<DateTime>,
    engine: Option<String>,
    allocated_storage: Option<i32>,
    status: Option<String>,
    port: Option<i32>,
    vpc_id: Option<String>,
    cluster_create_time: Option<DateTime>,
    master_username: Option<String>,
    engine_version: Option<String>,
    license_model: Option<String>,
    snapshot_type: Option<String>,
    percent_progress: Option<i32>,
    storage_encrypted: Option<bool>,
    kms_key_id: Option<String>,
    db_cluster_snapshot_arn: Option<String>,
    source_db_cluster_snapshot_arn: Option<String>,
    iam_database_authentication_enabled: Option<bool>,
}

impl DbClusterSnapshotBuilder {
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

    /// Sets the source cluster identifier.
    pub fn db_cluster_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_identifier = Some(input.into());
        self
    }

    /// Sets or clears the source cluster identifier.
    pub fn set_db_cluster_identifier(mut self, input: Option<String>) -> Self {
        self.db_cluster_identifier = input;
        self
    }

    /// Sets the snapshot creation time.
    pub fn snapshot_create_time(mut self, input: DateTime) -> Self {
        self.snapshot_create_time = Some(input);
        self
    }

    /// Sets or clears the snapshot creation time.
    pub fn set_snapshot_create_time(mut self, input: Option<DateTime>) -> Self {
        self.snapshot_create_time = input;
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

    /// Sets the snapshot status.
    pub fn status(mut self, input: impl Into<String>) -> Self {
        self.status = Some(input.into());
        self
    }

    /// Sets or clears the snapshot status.
    pub fn set_status(mut self, input: Option<String>) -> Self {
        self.status = input;
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

    /// Sets the VPC ID.
    pub fn vpc_id(mut self, input: impl Into<String>) -> Self {
        self.vpc_id = Some(input.into());
        self
    }

    /// Sets or clears the VPC ID.
    pub fn set_vpc_id(mut self, input: Option<String>) -> Self {
        self.vpc_id = input;
        self
    }

    /// Sets the source cluster creation time.
    pub fn cluster_create_time(mut self, input: DateTime) -> Self {
        self.cluster_create_time = Some(input);
        self
    }

    /// Sets or clears the source cluster creation time.
    pub fn set_cluster_create_time(mut self, input: Option<DateTime>) -> Self {
        self.cluster_create_time = input;
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

    /// Sets the progress percentage.
    pub fn percent_progress(mut self, input: i32) -> Self {
        self.percent_progress = Some(input);
        self
    }

    /// Sets or clears the progress percentage.
    pub fn set_percent_progress(mut self, input: Option<i32>) -> Self {
        self.percent_progress = input;
        self
    }

    /// Sets the encryption flag.
    pub fn storage_encrypted(mut self, input: bool) -> Self {
        self.storage_encrypted = Some(input);
        self
    }

    /// Sets or clears the encryption flag.
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

    /// Sets the snapshot ARN.
    pub fn db_cluster_snapshot_arn(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_snapshot_arn = Some(input.into());
        self
    }

    /// Sets or clears the snapshot ARN.
    pub fn set_db_cluster_snapshot_arn(mut self, input: Option<String>) -> Self {
        self.db_cluster_snapshot_arn = input;
        self
    }

    /// Sets the source snapshot ARN.
    pub fn source_db_cluster_snapshot_arn(mut self, input: impl Into<String>) -> Self {
        self.source_db_cluster_snapshot_arn = Some(input.into());
        self
    }

    /// Sets or clears the source snapshot ARN.
    pub fn set_source_db_cluster_snapshot_arn(mut self, input: Option<String>) -> Self {
        self.source_db_cluster_snapshot_arn = input;
        self
    }

    /// Sets the IAM database authentication flag.
    pub fn iam_database_authentication_enabled(mut self, input: bool) -> Self {
        self.iam_database_authentication_enabled = Some(input);
        self
    }

    /// Sets or clears the IAM database authentication flag.
    pub fn set_iam_database_authentication_enabled(mut self, input: Option<bool>) -> Self {
        self.iam_database_authentication_enabled = input;
        self
    }

    /// Builds the [`DbClusterSnapshot`].
    pub fn build(self) -> DbClusterSnapshot {
        DbClusterSnapshot {
            availability_zones: self.availability_zones,
            db_cluster_snapshot_identifier: self.db_cluster_snapshot_identifier,
            db_cluster_identifier: self.db_cluster_identifier,
            snapshot_create_time: self.snapshot_create_time,
            engine: self.engine,
            allocated_storage: self.allocated_storage,
            status: self.status,
            port: self.port,
            vpc_id: self.vpc_id,
            cluster_create_time: self.cluster_create_time,
            master_username: self.master_username,
            engine_version: self.engine_version,
            license_model: self.license_model,
            snapshot_type: self.snapshot_type,
            percent_progress: self.percent_progress,
            storage_encrypted: self.storage_encrypted,
            kms_key_id: self.kms_key_id,
            db_cluster_snapshot_arn: self.db_cluster_snapshot_arn,
            source_db_cluster_snapshot_arn: self.source_db_cluster_snapshot_arn,
            iam_database_authentication_enabled: self.iam_database_authentication_enabled,
        }
    }
}

/// A custom endpoint of an Aurora DB cluster.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DbClusterEndpoint {
    /// User-supplied endpoint identifier.
    pub db_cluster_endpoint_identifier: Option<String>,
    /// Cluster the endpoint belongs to.
    pub db_cluster_identifier: Option<String>,
    /// Region-unique identifier of the endpoint resource.
    pub db_cluster_endpoint_resource_identifier: Option<String>,
    /// DNS address of the endpoint.
    pub endpoint: Option<String>,
    /// Endpoint status: `available`, `creating`, `deleting`, or `modifying`.
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

impl DbClusterEndpoint {
    /// Returns a builder for `DbClusterEndpoint`.
    pub fn builder() -> DbClusterEndpointBuilder {
        DbClusterEndpointBuilder::default()
    }
}

/// Builder for [`DbClusterEndpoint`].
#[derive(Clone, Debug, Default)]
pub struct DbClusterEndpointBuilder {
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

impl DbClusterEndpointBuilder {
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
    pub fn db_cluster_endpoint_resource_identifier(mut self, input: impl Into<String>) -> Self {
        self.db_cluster_endpoint_resource_identifier = Some(input.into());
        self
    }

    /// Sets or clears the endpoint resource identifier.
    pub fn set_db_cluster_endpoint_resource_identifier(mut self, input: Option<String>) -> Self {
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

    /// Builds the [`DbClusterEndpoint`].
    pub fn build(self) -> DbClusterEndpoint {
        DbClusterEndpoint {
            db_cluster_endpoint_identifier: self.db_cluster_endpoint_identifier,
            db_cluster_identifier: self.db_cluster_identifier,
            db_cluster_endpoint_resource_identifier: self.db_cluster_endpoint_resource_identifier,
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

/// A DB instance configuration that can be ordered: an engine, engine
/// version, instance class, license model, and the capabilities that
/// combination supports.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct OrderableDbInstanceOption {
    /// Database engine.
    pub engine: Option<String>,
    /// Engine version.
    pub engine_version: Option<String>,
    /// Instance class.
    pub db_instance_class: Option<String>,
    /// License model.
    pub license_model: Option<String>,
    /// Availability Zones the configuration is offered in.
    pub availability_zones: Option<Vec<AvailabilityZone>>,
    /// Whether Multi-AZ deployments are supported.
    pub multi_az_capable: Option<bool>,
    /// Whether read replicas are supported.
    pub read_replica_capable: Option<bool>,
    /// Whether the configuration is VPC-only.
    pub vpc: Option<bool>,
    /// Whether storage encryption is supported.
    pub supports_storage_encryption: Option<bool>,
    /// Storage type.
    pub storage_type: Option<String>,
    /// Whether provisioned IOPS are supported.
    pub supports_iops: Option<bool>,
    /// Whether Enhanced Monitoring at intervals under 60 seconds is
    /// supported.
    pub supports_enhanced_monitoring: Option<bool>,
    /// Whether IAM database authentication is supported.
    pub supports_iam_database_authentication: Option<bool>,
    /// Whether Performance Insights is supported.
    pub supports_performance_insights: Option<bool>,
    /// Minimum storage, in gibibytes.
    pub min_storage_size: Option<i32>,
    /// Maximum storage, in gibibytes.
    pub max_storage_size: Option<i32>,
    /// Minimum provisioned IOPS per instance.
    pub min_iops_per_db_instance: Option<i32>,
    /// Maximum provisioned IOPS per instance.
    pub max_iops_per_db_instance: Option<i32>,
    /// Minimum provisioned IOPS per GiB of storage.
    pub min_iops_per_gib: Option<f64>,
    /// Maximum provisioned IOPS per GiB of storage.
    pub max_iops_per_gib: Option<f64>,
    /// Processor features available for the instance class.
    pub available_processor_features: Option<Vec<AvailableProcessorFeature>>,
    /// Engine modes the configuration supports.
    pub supported_engine_modes: Option<Vec<String>>,
    /// Whether storage autoscaling is supported.
    pub supports_storage_autoscaling: Option<bool>,
    /// Whether Kerberos authentication is supported.
    pub supports_kerberos_authentication: Option<bool>,
}

impl OrderableDbInstanceOption {
    /// Returns a builder for `OrderableDbInstanceOption`.
    pub fn builder() -> OrderableDbInstanceOptionBuilder {
        OrderableDbInstanceOptionBuilder::default()
    }
}

/// Builder for [`OrderableDbInstanceOption`].
#[derive(Clone, Debug, Default)]
pub struct OrderableDbInstanceOptionBuilder {
    engine: Option<String>,
    engine_version: Option<String>,
    db_instance_class: Option<String>,
    license_model: Option<String>,
    availability_zones: Option<Vec<AvailabilityZone>>,
    multi_az_capable: Option<bool>,
    read_replica_capable: Option<bool>,
    vpc: Option<bool>,
    supports_storage_encryption: Option<bool>,
    storage_type: Option<String>,
    supports_iops: Option<bool>,
    supports_enhanced_monitoring: Option<bool>,
    supports_iam_database_authentication: Option<bool>,
    supports_performance_insights: Option<bool>,
    min_storage_size: Option<i32>,
    max_storage_size: Option<i32>,
    min_iops_per_db_instance: Option<i32>,
    max_iops_per_db_instance: Option<i32>,
    min_iops_per_gib: Option<f64>,
    max_iops_per_gib: Option<f64>,
    available_processor_features: Option<Vec<AvailableProcessorFeature>>,
    supported_engine_modes: Option<Vec<String>>,
    supports_storage_autoscaling: Option<bool>,
    supports_kerberos_authentication: Option<bool>,
}

impl OrderableDbInstanceOptionBuilder {
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

    /// Appends an Availability Zone.
    pub fn availability_zones(mut self, input: AvailabilityZone) -> Self {
        self.availability_zones
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// Replaces the Availability Zones.
    pub fn set_availability_zones(mut self, input: Option<Vec<AvailabilityZone>>) -> Self {
        self.availability_zones = input;
        self
    }

    /// Sets the Multi-AZ capability flag.
    pub fn multi_az_capable(mut self, input: bool) -> Self {
        self.multi_az_capable = Some(input);
        self
    }

    /// Sets or clears the Multi-AZ capability flag.
    pub fn set_multi_az_capable(mut self, input: Option<bool>) -> Self {
        self.multi_az_capable = input;
        self
    }

    /// Sets the read replica capability flag.
    pub fn read_replica_capable(mut self, input: bool) -> Self {
        self.read_replica_capable = Some(input);
        self
    }

    /// Sets or clears the read replica capability flag.
    pub fn set_read_replica_capable(mut self, input: Option<bool>) -> Self {
        self.read_replica_capable = input;
        self
    }

    /// Sets the VPC-only flag.
    pub fn vpc(mut self, input: bool) -> Self {
        self.vpc = Some(input);
        self
    }

    /// Sets or clears the VPC-only flag.
    pub fn set_vpc(mut self, input: Option<bool>) -> Self {
        self.vpc = input;
        self
    }

    /// Sets the storage encryption support flag.
    pub fn supports_storage_encryption(mut self, input: bool) -> Self {
        self.supports_storage_encryption = Some(input);
        self
    }

    /// Sets or clears the storage encryption support flag.
    pub fn set_supports_storage_encryption(mut self, input: Option<bool>) -> Self {
        self.supports_storage_encryption = input;
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

    /// Sets the IOPS support flag.
    pub fn supports_iops(mut self, input: bool) -> Self {
        self.supports_iops = Some(input);
        self
    }

    /// Sets or clears the IOPS support flag.
    pub fn set_supports_iops(mut self, input: Option<bool>) -> Self {
        self.supports_iops = input;
        self
    }

    /// Sets the Enhanced Monitoring support flag.
    pub fn supports_enhanced_monitoring(mut self, input: bool) -> Self {
        self.supports_enhanced_monitoring = Some(input);
        self
    }

    /// Sets or clears the Enhanced Monitoring support flag.
    pub fn set_supports_enhanced_monitoring(mut self, input: Option<bool>) -> Self {
        self.supports_enhanced_monitoring = input;
        self
    }

    /// Sets the IAM database authentication support flag.
    pub fn supports_iam_database_authentication(mut self, input: bool) -> Self {
        self.supports_iam_database_authentication = Some(input);
        self
    }

    /// Sets or clears the IAM database authentication support flag.
    pub fn set_supports_iam_database_authentication(mut self, input: Option<bool>) -> Self {
        self.supports_iam_database_authentication = input;
        self
    }

    /// Sets the Performance Insights support flag.
    pub fn supports_performance_insights(mut self, input: bool) -> Self {
        self.supports_performance_insights = Some(input);
        self
    }

    /// Sets or clears the Performance Insights support flag.
    pub fn set_supports_performance_insights(mut self, input: Option<bool>) -> Self {
        self.supports_performance_insights = input;
        self
    }

    /// Sets the minimum storage size.
    pub fn min_storage_size(mut self, input: i32) -> Self {
        self.min_storage_size = Some(input);
        self
    }

    /// Sets or clears the minimum storage size.
    pub fn set_min_storage_size(mut self, input: Option<i32>) -> Self {
        self.min_storage_size = input;
        self
    }

    /// Sets the maximum storage size.
    pub fn max_storage_size(mut self, input: i32) -> Self {
        self.max_storage_size = Some(input);
        self
    }

    /// Sets or clears the maximum storage size.
    pub fn set_max_storage_size(mut self, input: Option<i32>) -> Self {
        self.max_storage_size = input;
        self
    }

    /// Sets the minimum IOPS per instance.
    pub fn min_iops_per_db_instance(mut self, input: i32) -> Self {
        self.min_iops_per_db_instance = Some(input);
        self
    }

    /// Sets or clears the minimum IOPS per instance.
    pub fn set_min_iops_per_db_instance(mut self, input: Option<i32>) -> Self {
        self.min_iops_per_db_instance = input;
        self
    }

    /// Sets the maximum IOPS per instance.
    pub fn max_iops_per_db_instance(mut self, input: i32) -> Self {
        self.max_iops_per_db_instance = Some(input);
        self
    }

    /// Sets or clears the maximum IOPS per instance.
    pub fn set_max_iops_per_db_instance(mut self, input: Option<i32>) -> Self {
        self.max_iops_per_db_instance = input;
        self
    }

    /// Sets the minimum IOPS per GiB.
    pub fn min_iops_per_gib(mut self, input: f64) -> Self {
        self.min_iops_per_gib = Some(input);
        self
    }

    /// Sets or clears the minimum IOPS per GiB.
    pub fn set_min_iops_per_gib(mut self, input: Option<f64>) -> Self {
        self.min_iops_per_gib = input;
        self
    }

    /// Sets the maximum IOPS per GiB.
    pub fn max_iops_per_gib(mut self, input: f64) -> Self {
        self.max_iops_per_gib = Some(input);
        self
    }

    /// Sets or clears the maximum IOPS per GiB.
    pub fn set_max_iops_per_gib(mut self, input: Option<f64>) -> Self {
        self.max_iops_per_gib = input;
        self
    }

    /// Appends an available processor feature.
    pub fn available_processor_features(mut self, input: AvailableProcessorFeature) -> Self {
        self.available_processor_features
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// Replaces the available processor features.
    pub fn set_available_processor_features(
        mut self,
        input: Option<Vec<AvailableProcessorFeature>>,
    ) -> Self {
        self.available_processor_features = input;
        self
    }

    /// Appends a supported engine mode.
    pub fn supported_engine_modes(mut self, input: impl Into<String>) -> Self {
        self.supported_engine_modes
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    /// Replaces the supported engine modes.
    pub fn set_supported_engine_modes(mut self, input: Option<Vec<String>>) -> Self {
        self.supported_engine_modes = input;
        self
    }

    /// Sets the storage autoscaling support flag.
    pub fn supports_storage_autoscaling(mut self, input: bool) -> Self {
        self.supports_storage_autoscaling = Some(input);
        self
    }

    /// Sets or clears the storage autoscaling support flag.
    pub fn set_supports_storage_autoscaling(mut self, input: Option<bool>) -> Self {
        self.supports_storage_autoscaling = input;
        self
    }

    /// Sets the Kerberos authentication support flag.
    pub fn supports_kerberos_authentication(mut self, input: bool) -> Self {
        self.supports_kerberos_authentication = Some(input);
        self
    }

    /// Sets or clears the Kerberos authentication support flag.
    pub fn set_supports_kerberos_authentication(mut self, input: Option<bool>) -> Self {
        self.supports_kerberos_authentication = input;
        self
    }

    /// Builds the [`OrderableDbInstanceOption`].
    pub fn build(self) -> OrderableDbInstanceOption {
        OrderableDbInstanceOption {
            engine: self.engine,
            engine_version: self.engine_version,
            db_instance_class: self.db_instance_class,
            license_model: self.license_model,
            availability_zones: self.availability_zones,
            multi_az_capable: self.multi_az_capable,
            read_replica_capable: self.read_replica_capable,
            vpc: self.vpc,
            supports_storage_encryption: self.supports_storage_encryption,
            storage_type: self.storage_type,
            supports_iops: self.supports_iops,
            supports_enhanced_monitoring: self.supports_enhanced_monitoring,
            supports_iam_database_authentication: self.supports_iam_database_authentication,
            supports_performance_insights: self.supports_performance_insights,
            min_storage_size: self.min_storage_size,
            max_storage_size: self.max_storage_size,
            min_iops_per_db_instance: self.min_iops_per_db_instance,
            max_iops_per_db_instance: self.max_iops_per_db_instance,
            min_iops_per_gib: self.min_iops_per_gib,
            max_iops_per_gib: self.max_iops_per_gib,
            available_processor_features: self.available_processor_features,
            supported_engine_modes: self.supported_engine_modes,
            supports_storage_autoscaling: self.supports_storage_autoscaling,
            supports_kerberos_authentication: self.supports_kerberos_authentication,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn range_round_trips_the_documented_example() {
        let range = Range::builder().from(5000).to(10000).step(1000).build();
        assert_eq!(range.from, Some(5000));
        assert_eq!(range.to, Some(10000));
        assert_eq!(range.step, Some(1000));
        let rendered = format!("{:?}", range);
        assert!(rendered.contains("5000"));
        assert!(rendered.contains("10000"));
        assert!(rendered.contains("1000"));
    }

    #[test]
    fn target_state_parses_wire_values() {
        assert_eq!("AVAILABLE".parse(), Ok(TargetState::Available));
        assert_eq!("REGISTERING".parse(), Ok(TargetState::Registering));
        assert_eq!("UNAVAILABLE".parse(), Ok(TargetState::Unavailable));
        for value in TargetState::values() {
            assert_eq!(value.parse::<TargetState>().unwrap().as_str(), *value);
        }
    }

    #[test]
    fn target_state_rejects_unknown_and_empty_values() {
        let err = "available".parse::<TargetState>().unwrap_err();
        assert_eq!(err.shape(), "TargetState");
        assert_eq!(err.value(), "available");
        assert!("".parse::<TargetState>().is_err());
    }

    #[test]
    fn fluent_and_set_style_setters_agree() {
        let fluent = Tag::builder().key("Name").value("prod").build();
        let explicit = Tag::builder()
            .set_key(Some("Name".to_string()))
            .set_value(Some("prod".to_string()))
            .build();
        assert_eq!(fluent, explicit);
    }

    #[test]
    fn equality_is_structural_and_per_field() {
        let a = Endpoint::builder().address("db.example.com").port(5432).build();
        let b = a.clone();
        assert_eq!(a, b);
        let c = Endpoint::builder().address("db.example.com").port(5433).build();
        assert_ne!(a, c);
    }

    #[test]
    fn unset_list_stays_none_and_appends_keep_order() {
        let unset = Filter::builder().name("engine").build();
        assert_eq!(unset.values, None);

        let built = Filter::builder()
            .name("engine")
            .values("aurora")
            .values("mysql")
            .build();
        assert_eq!(
            built.values,
            Some(vec!["aurora".to_string(), "mysql".to_string()])
        );

        let cleared = Filter::builder()
            .values("aurora")
            .set_values(None)
            .build();
        assert_eq!(cleared.values, None);
    }

    #[test]
    fn sensitive_fields_are_redacted_in_debug() {
        let pending = PendingModifiedValues::builder()
            .master_user_password("hunter2")
            .build();
        let rendered = format!("{:?}", pending);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("Sensitive"));

        let vpn = VpnDetails::builder().vpn_psk("shared-secret").build();
        let rendered = format!("{:?}", vpn);
        assert!(!rendered.contains("shared-secret"));
    }

    #[test]
    fn enum_hash_is_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(TargetState::Available);
        set.insert("AVAILABLE".parse::<TargetState>().unwrap());
        assert_eq!(set.len(), 1);
    }
}
