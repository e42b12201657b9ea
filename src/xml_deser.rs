/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! XML deserialization of Query-protocol responses.
//!
//! Result envelopes follow the `<XxxResponse><XxxResult>…` shape; error
//! responses carry `<ErrorResponse><Error><Code/><Message/>`. Unrecognized
//! elements are skipped so new service fields do not break parsing.

use crate::model::*;
use crate::output::*;
use aws_smithy_types::date_time::Format;
use aws_smithy_types::error::metadata::ErrorMetadata;
use aws_smithy_types::primitive::Parse;
use aws_smithy_types::DateTime;
use aws_smithy_xml::decode::{try_data, Document, ScopedDecoder, XmlDecodeError};

fn data_string(tag: &mut ScopedDecoder<'_, '_>) -> Result<String, XmlDecodeError> {
    Ok(try_data(tag)?.as_ref().to_owned())
}

fn data_i32(tag: &mut ScopedDecoder<'_, '_>) -> Result<i32, XmlDecodeError> {
    let text = try_data(tag)?;
    <i32 as Parse>::parse_smithy_primitive(text.as_ref())
        .map_err(|_| XmlDecodeError::custom("expected an integer"))
}

fn data_i64(tag: &mut ScopedDecoder<'_, '_>) -> Result<i64, XmlDecodeError> {
    let text = try_data(tag)?;
    <i64 as Parse>::parse_smithy_primitive(text.as_ref())
        .map_err(|_| XmlDecodeError::custom("expected a long"))
}

fn data_f64(tag: &mut ScopedDecoder<'_, '_>) -> Result<f64, XmlDecodeError> {
    let text = try_data(tag)?;
    <f64 as Parse>::parse_smithy_primitive(text.as_ref())
        .map_err(|_| XmlDecodeError::custom("expected a double"))
}

fn data_bool(tag: &mut ScopedDecoder<'_, '_>) -> Result<bool, XmlDecodeError> {
    let text = try_data(tag)?;
    <bool as Parse>::parse_smithy_primitive(text.as_ref())
        .map_err(|_| XmlDecodeError::custom("expected a boolean"))
}

fn data_timestamp(tag: &mut ScopedDecoder<'_, '_>) -> Result<DateTime, XmlDecodeError> {
    let text = try_data(tag)?;
    DateTime::from_str(text.as_ref(), Format::DateTime)
        .map_err(|_| XmlDecodeError::custom("expected an RFC 3339 timestamp"))
}

/// Collects `<member>`-style string list entries regardless of the member
/// element name.
fn deser_string_list(list: &mut ScopedDecoder<'_, '_>) -> Result<Vec<String>, XmlDecodeError> {
    let mut items = Vec::new();
    while let Some(mut member) = list.next_tag() {
        items.push(data_string(&mut member)?);
    }
    Ok(items)
}

/// Parses the Query error envelope into generic error metadata.
pub(crate) fn parse_error_metadata(body: &[u8]) -> Result<ErrorMetadata, XmlDecodeError> {
    let mut doc = Document::try_from(body)?;
    let mut root = doc.root_element()?;
    if !root.start_el().matches("ErrorResponse") {
        return Err(XmlDecodeError::custom("expected ErrorResponse root"));
    }
    let mut builder = ErrorMetadata::builder();
    while let Some(mut tag) = root.next_tag() {
        if tag.start_el().matches("Error") {
            while let Some(mut field) = tag.next_tag() {
                if field.start_el().matches("Code") {
                    builder = builder.code(data_string(&mut field)?);
                } else if field.start_el().matches("Message") {
                    builder = builder.message(data_string(&mut field)?);
                }
            }
        } else if tag.start_el().matches("RequestId") {
            builder = builder.custom("request_id", data_string(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_tag(decoder: &mut ScopedDecoder<'_, '_>) -> Result<Tag, XmlDecodeError> {
    let mut builder = Tag::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("Key") {
            builder = builder.key(data_string(&mut tag)?);
        } else if tag.start_el().matches("Value") {
            builder = builder.value(data_string(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_endpoint(decoder: &mut ScopedDecoder<'_, '_>) -> Result<Endpoint, XmlDecodeError> {
    let mut builder = Endpoint::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("Address") {
            builder = builder.address(data_string(&mut tag)?);
        } else if tag.start_el().matches("Port") {
            builder = builder.port(data_i32(&mut tag)?);
        } else if tag.start_el().matches("HostedZoneId") {
            builder = builder.hosted_zone_id(data_string(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_availability_zone(decoder: &mut ScopedDecoder<'_, '_>) -> Result<AvailabilityZone, XmlDecodeError> {
    let mut builder = AvailabilityZone::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("Name") {
            builder = builder.name(data_string(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_subnet(decoder: &mut ScopedDecoder<'_, '_>) -> Result<Subnet, XmlDecodeError> {
    let mut builder = Subnet::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("SubnetIdentifier") {
            builder = builder.subnet_identifier(data_string(&mut tag)?);
        } else if tag.start_el().matches("SubnetAvailabilityZone") {
            builder = builder.subnet_availability_zone(deser_availability_zone(&mut tag)?);
        } else if tag.start_el().matches("SubnetStatus") {
            builder = builder.subnet_status(data_string(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_db_subnet_group(decoder: &mut ScopedDecoder<'_, '_>) -> Result<DbSubnetGroup, XmlDecodeError> {
    let mut builder = DbSubnetGroup::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("DBSubnetGroupName") {
            builder = builder.db_subnet_group_name(data_string(&mut tag)?);
        } else if tag.start_el().matches("DBSubnetGroupDescription") {
            builder = builder.db_subnet_group_description(data_string(&mut tag)?);
        } else if tag.start_el().matches("VpcId") {
            builder = builder.vpc_id(data_string(&mut tag)?);
        } else if tag.start_el().matches("SubnetGroupStatus") {
            builder = builder.subnet_group_status(data_string(&mut tag)?);
        } else if tag.start_el().matches("Subnets") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("Subnet") {
                    builder = builder.subnets(deser_subnet(&mut member)?);
                }
            }
        } else if tag.start_el().matches("DBSubnetGroupArn") {
            builder = builder.db_subnet_group_arn(data_string(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_db_security_group_membership(
    decoder: &mut ScopedDecoder<'_, '_>,
) -> Result<DbSecurityGroupMembership, XmlDecodeError> {
    let mut builder = DbSecurityGroupMembership::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("DBSecurityGroupName") {
            builder = builder.db_security_group_name(data_string(&mut tag)?);
        } else if tag.start_el().matches("Status") {
            builder = builder.status(data_string(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_vpc_security_group_membership(
    decoder: &mut ScopedDecoder<'_, '_>,
) -> Result<VpcSecurityGroupMembership, XmlDecodeError> {
    let mut builder = VpcSecurityGroupMembership::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("VpcSecurityGroupId") {
            builder = builder.vpc_security_group_id(data_string(&mut tag)?);
        } else if tag.start_el().matches("Status") {
            builder = builder.status(data_string(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_db_parameter_group_status(
    decoder: &mut ScopedDecoder<'_, '_>,
) -> Result<DbParameterGroupStatus, XmlDecodeError> {
    let mut builder = DbParameterGroupStatus::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("DBParameterGroupName") {
            builder = builder.db_parameter_group_name(data_string(&mut tag)?);
        } else if tag.start_el().matches("ParameterApplyStatus") {
            builder = builder.parameter_apply_status(data_string(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_option_group_membership(
    decoder: &mut ScopedDecoder<'_, '_>,
) -> Result<OptionGroupMembership, XmlDecodeError> {
    let mut builder = OptionGroupMembership::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("OptionGroupName") {
            builder = builder.option_group_name(data_string(&mut tag)?);
        } else if tag.start_el().matches("Status") {
            builder = builder.status(data_string(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_db_instance_status_info(
    decoder: &mut ScopedDecoder<'_, '_>,
) -> Result<DbInstanceStatusInfo, XmlDecodeError> {
    let mut builder = DbInstanceStatusInfo::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("StatusType") {
            builder = builder.status_type(data_string(&mut tag)?);
        } else if tag.start_el().matches("Normal") {
            builder = builder.normal(data_bool(&mut tag)?);
        } else if tag.start_el().matches("Status") {
            builder = builder.status(data_string(&mut tag)?);
        } else if tag.start_el().matches("Message") {
            builder = builder.message(data_string(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_domain_membership(decoder: &mut ScopedDecoder<'_, '_>) -> Result<DomainMembership, XmlDecodeError> {
    let mut builder = DomainMembership::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("Domain") {
            builder = builder.domain(data_string(&mut tag)?);
        } else if tag.start_el().matches("Status") {
            builder = builder.status(data_string(&mut tag)?);
        } else if tag.start_el().matches("FQDN") {
            builder = builder.fqdn(data_string(&mut tag)?);
        } else if tag.start_el().matches("IAMRoleName") {
            builder = builder.iam_role_name(data_string(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_db_instance_role(decoder: &mut ScopedDecoder<'_, '_>) -> Result<DbInstanceRole, XmlDecodeError> {
    let mut builder = DbInstanceRole::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("RoleArn") {
            builder = builder.role_arn(data_string(&mut tag)?);
        } else if tag.start_el().matches("FeatureName") {
            builder = builder.feature_name(data_string(&mut tag)?);
        } else if tag.start_el().matches("Status") {
            builder = builder.status(data_string(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_db_cluster_role(decoder: &mut ScopedDecoder<'_, '_>) -> Result<DbClusterRole, XmlDecodeError> {
    let mut builder = DbClusterRole::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("RoleArn") {
            builder = builder.role_arn(data_string(&mut tag)?);
        } else if tag.start_el().matches("Status") {
            builder = builder.status(data_string(&mut tag)?);
        } else if tag.start_el().matches("FeatureName") {
            builder = builder.feature_name(data_string(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_db_cluster_member(decoder: &mut ScopedDecoder<'_, '_>) -> Result<DbClusterMember, XmlDecodeError> {
    let mut builder = DbClusterMember::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("DBInstanceIdentifier") {
            builder = builder.db_instance_identifier(data_string(&mut tag)?);
        } else if tag.start_el().matches("IsClusterWriter") {
            builder = builder.is_cluster_writer(data_bool(&mut tag)?);
        } else if tag.start_el().matches("DBClusterParameterGroupStatus") {
            builder = builder.db_cluster_parameter_group_status(data_string(&mut tag)?);
        } else if tag.start_el().matches("PromotionTier") {
            builder = builder.promotion_tier(data_i32(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_db_cluster_option_group_status(
    decoder: &mut ScopedDecoder<'_, '_>,
) -> Result<DbClusterOptionGroupStatus, XmlDecodeError> {
    let mut builder = DbClusterOptionGroupStatus::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("DBClusterOptionGroupName") {
            builder = builder.db_cluster_option_group_name(data_string(&mut tag)?);
        } else if tag.start_el().matches("Status") {
            builder = builder.status(data_string(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_processor_feature(decoder: &mut ScopedDecoder<'_, '_>) -> Result<ProcessorFeature, XmlDecodeError> {
    let mut builder = ProcessorFeature::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("Name") {
            builder = builder.name(data_string(&mut tag)?);
        } else if tag.start_el().matches("Value") {
            builder = builder.value(data_string(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_available_processor_feature(
    decoder: &mut ScopedDecoder<'_, '_>,
) -> Result<AvailableProcessorFeature, XmlDecodeError> {
    let mut builder = AvailableProcessorFeature::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("Name") {
            builder = builder.name(data_string(&mut tag)?);
        } else if tag.start_el().matches("DefaultValue") {
            builder = builder.default_value(data_string(&mut tag)?);
        } else if tag.start_el().matches("AllowedValues") {
            builder = builder.allowed_values(data_string(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_pending_cloudwatch_logs_exports(
    decoder: &mut ScopedDecoder<'_, '_>,
) -> Result<PendingCloudwatchLogsExports, XmlDecodeError> {
    let mut builder = PendingCloudwatchLogsExports::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("LogTypesToEnable") {
            builder = builder.set_log_types_to_enable(Some(deser_string_list(&mut tag)?));
        } else if tag.start_el().matches("LogTypesToDisable") {
            builder = builder.set_log_types_to_disable(Some(deser_string_list(&mut tag)?));
        }
    }
    Ok(builder.build())
}

fn deser_pending_modified_values(
    decoder: &mut ScopedDecoder<'_, '_>,
) -> Result<PendingModifiedValues, XmlDecodeError> {
    let mut builder = PendingModifiedValues::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("DBInstanceClass") {
            builder = builder.db_instance_class(data_string(&mut tag)?);
        } else if tag.start_el().matches("AllocatedStorage") {
            builder = builder.allocated_storage(data_i32(&mut tag)?);
        } else if tag.start_el().matches("MasterUserPassword") {
            builder = builder.master_user_password(data_string(&mut tag)?);
        } else if tag.start_el().matches("Port") {
            builder = builder.port(data_i32(&mut tag)?);
        } else if tag.start_el().matches("BackupRetentionPeriod") {
            builder = builder.backup_retention_period(data_i32(&mut tag)?);
        } else if tag.start_el().matches("MultiAZ") {
            builder = builder.multi_az(data_bool(&mut tag)?);
        } else if tag.start_el().matches("EngineVersion") {
            builder = builder.engine_version(data_string(&mut tag)?);
        } else if tag.start_el().matches("LicenseModel") {
            builder = builder.license_model(data_string(&mut tag)?);
        } else if tag.start_el().matches("Iops") {
            builder = builder.iops(data_i32(&mut tag)?);
        } else if tag.start_el().matches("DBInstanceIdentifier") {
            builder = builder.db_instance_identifier(data_string(&mut tag)?);
        } else if tag.start_el().matches("StorageType") {
            builder = builder.storage_type(data_string(&mut tag)?);
        } else if tag.start_el().matches("CACertificateIdentifier") {
            builder = builder.ca_certificate_identifier(data_string(&mut tag)?);
        } else if tag.start_el().matches("DBSubnetGroupName") {
            builder = builder.db_subnet_group_name(data_string(&mut tag)?);
        } else if tag.start_el().matches("PendingCloudwatchLogsExports") {
            builder = builder
                .pending_cloudwatch_logs_exports(deser_pending_cloudwatch_logs_exports(&mut tag)?);
        } else if tag.start_el().matches("ProcessorFeatures") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("ProcessorFeature") {
                    builder = builder.processor_features(deser_processor_feature(&mut member)?);
                }
            }
        }
    }
    Ok(builder.build())
}

fn deser_scaling_configuration_info(
    decoder: &mut ScopedDecoder<'_, '_>,
) -> Result<ScalingConfigurationInfo, XmlDecodeError> {
    let mut builder = ScalingConfigurationInfo::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("MinCapacity") {
            builder = builder.min_capacity(data_i32(&mut tag)?);
        } else if tag.start_el().matches("MaxCapacity") {
            builder = builder.max_capacity(data_i32(&mut tag)?);
        } else if tag.start_el().matches("AutoPause") {
            builder = builder.auto_pause(data_bool(&mut tag)?);
        } else if tag.start_el().matches("SecondsUntilAutoPause") {
            builder = builder.seconds_until_auto_pause(data_i32(&mut tag)?);
        } else if tag.start_el().matches("TimeoutAction") {
            builder = builder.timeout_action(data_string(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_range(decoder: &mut ScopedDecoder<'_, '_>) -> Result<Range, XmlDecodeError> {
    let mut builder = Range::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("From") {
            builder = builder.from(data_i32(&mut tag)?);
        } else if tag.start_el().matches("To") {
            builder = builder.to(data_i32(&mut tag)?);
        } else if tag.start_el().matches("Step") {
            builder = builder.step(data_i32(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_double_range(decoder: &mut ScopedDecoder<'_, '_>) -> Result<DoubleRange, XmlDecodeError> {
    let mut builder = DoubleRange::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("From") {
            builder = builder.from(data_f64(&mut tag)?);
        } else if tag.start_el().matches("To") {
            builder = builder.to(data_f64(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_valid_storage_options(
    decoder: &mut ScopedDecoder<'_, '_>,
) -> Result<ValidStorageOptions, XmlDecodeError> {
    let mut builder = ValidStorageOptions::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("StorageType") {
            builder = builder.storage_type(data_string(&mut tag)?);
        } else if tag.start_el().matches("StorageSize") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("Range") {
                    builder = builder.storage_size(deser_range(&mut member)?);
                }
            }
        } else if tag.start_el().matches("ProvisionedIops") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("Range") {
                    builder = builder.provisioned_iops(deser_range(&mut member)?);
                }
            }
        } else if tag.start_el().matches("IopsToStorageRatio") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("DoubleRange") {
                    builder = builder.iops_to_storage_ratio(deser_double_range(&mut member)?);
                }
            }
        } else if tag.start_el().matches("SupportsStorageAutoscaling") {
            builder = builder.supports_storage_autoscaling(data_bool(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_valid_db_instance_modifications_message(
    decoder: &mut ScopedDecoder<'_, '_>,
) -> Result<ValidDbInstanceModificationsMessage, XmlDecodeError> {
    let mut builder = ValidDbInstanceModificationsMessage::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("Storage") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("ValidStorageOptions") {
                    builder = builder.storage(deser_valid_storage_options(&mut member)?);
                }
            }
        } else if tag.start_el().matches("ValidProcessorFeatures") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("AvailableProcessorFeature") {
                    builder = builder
                        .valid_processor_features(deser_available_processor_feature(&mut member)?);
                }
            }
        }
    }
    Ok(builder.build())
}

fn deser_ec2_security_group(decoder: &mut ScopedDecoder<'_, '_>) -> Result<Ec2SecurityGroup, XmlDecodeError> {
    let mut builder = Ec2SecurityGroup::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("Status") {
            builder = builder.status(data_string(&mut tag)?);
        } else if tag.start_el().matches("EC2SecurityGroupName") {
            builder = builder.ec2_security_group_name(data_string(&mut tag)?);
        } else if tag.start_el().matches("EC2SecurityGroupId") {
            builder = builder.ec2_security_group_id(data_string(&mut tag)?);
        } else if tag.start_el().matches("EC2SecurityGroupOwnerId") {
            builder = builder.ec2_security_group_owner_id(data_string(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_ip_range(decoder: &mut ScopedDecoder<'_, '_>) -> Result<IpRange, XmlDecodeError> {
    let mut builder = IpRange::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("Status") {
            builder = builder.status(data_string(&mut tag)?);
        } else if tag.start_el().matches("CIDRIP") {
            builder = builder.cidrip(data_string(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_db_security_group(decoder: &mut ScopedDecoder<'_, '_>) -> Result<DbSecurityGroup, XmlDecodeError> {
    let mut builder = DbSecurityGroup::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("OwnerId") {
            builder = builder.owner_id(data_string(&mut tag)?);
        } else if tag.start_el().matches("DBSecurityGroupName") {
            builder = builder.db_security_group_name(data_string(&mut tag)?);
        } else if tag.start_el().matches("DBSecurityGroupDescription") {
            builder = builder.db_security_group_description(data_string(&mut tag)?);
        } else if tag.start_el().matches("VpcId") {
            builder = builder.vpc_id(data_string(&mut tag)?);
        } else if tag.start_el().matches("EC2SecurityGroups") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("EC2SecurityGroup") {
                    builder = builder.ec2_security_groups(deser_ec2_security_group(&mut member)?);
                }
            }
        } else if tag.start_el().matches("IPRanges") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("IPRange") {
                    builder = builder.ip_ranges(deser_ip_range(&mut member)?);
                }
            }
        } else if tag.start_el().matches("DBSecurityGroupArn") {
            builder = builder.db_security_group_arn(data_string(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_target_health(decoder: &mut ScopedDecoder<'_, '_>) -> Result<TargetHealth, XmlDecodeError> {
    let mut builder = TargetHealth::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("State") {
            let state = data_string(&mut tag)?
                .parse::<TargetState>()
                .map_err(|err| XmlDecodeError::custom(err.to_string()))?;
            builder = builder.state(state);
        } else if tag.start_el().matches("Reason") {
            let reason = data_string(&mut tag)?
                .parse::<TargetHealthReason>()
                .map_err(|err| XmlDecodeError::custom(err.to_string()))?;
            builder = builder.reason(reason);
        } else if tag.start_el().matches("Description") {
            builder = builder.description(data_string(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_db_proxy_target(decoder: &mut ScopedDecoder<'_, '_>) -> Result<DbProxyTarget, XmlDecodeError> {
    let mut builder = DbProxyTarget::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("TargetArn") {
            builder = builder.target_arn(data_string(&mut tag)?);
        } else if tag.start_el().matches("Endpoint") {
            builder = builder.endpoint(data_string(&mut tag)?);
        } else if tag.start_el().matches("TrackedClusterId") {
            builder = builder.tracked_cluster_id(data_string(&mut tag)?);
        } else if tag.start_el().matches("RdsResourceId") {
            builder = builder.rds_resource_id(data_string(&mut tag)?);
        } else if tag.start_el().matches("Port") {
            builder = builder.port(data_i32(&mut tag)?);
        } else if tag.start_el().matches("Type") {
            let target_type = data_string(&mut tag)?
                .parse::<TargetType>()
                .map_err(|err| XmlDecodeError::custom(err.to_string()))?;
            builder = builder.target_type(target_type);
        } else if tag.start_el().matches("TargetHealth") {
            builder = builder.target_health(deser_target_health(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_vpn_details(decoder: &mut ScopedDecoder<'_, '_>) -> Result<VpnDetails, XmlDecodeError> {
    let mut builder = VpnDetails::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("VpnId") {
            builder = builder.vpn_id(data_string(&mut tag)?);
        } else if tag.start_el().matches("VpnTunnelOriginatorIP") {
            builder = builder.vpn_tunnel_originator_ip(data_string(&mut tag)?);
        } else if tag.start_el().matches("VpnGatewayIp") {
            builder = builder.vpn_gateway_ip(data_string(&mut tag)?);
        } else if tag.start_el().matches("VpnPSK") {
            builder = builder.vpn_psk(data_string(&mut tag)?);
        } else if tag.start_el().matches("VpnName") {
            builder = builder.vpn_name(data_string(&mut tag)?);
        } else if tag.start_el().matches("VpnState") {
            builder = builder.vpn_state(data_string(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_custom_availability_zone(
    decoder: &mut ScopedDecoder<'_, '_>,
) -> Result<CustomAvailabilityZone, XmlDecodeError> {
    let mut builder = CustomAvailabilityZone::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("CustomAvailabilityZoneId") {
            builder = builder.custom_availability_zone_id(data_string(&mut tag)?);
        } else if tag.start_el().matches("CustomAvailabilityZoneName") {
            builder = builder.custom_availability_zone_name(data_string(&mut tag)?);
        } else if tag.start_el().matches("CustomAvailabilityZoneStatus") {
            builder = builder.custom_availability_zone_status(data_string(&mut tag)?);
        } else if tag.start_el().matches("VpnDetails") {
            builder = builder.vpn_details(deser_vpn_details(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_orderable_db_instance_option(
    decoder: &mut ScopedDecoder<'_, '_>,
) -> Result<OrderableDbInstanceOption, XmlDecodeError> {
    let mut builder = OrderableDbInstanceOption::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("Engine") {
            builder = builder.engine(data_string(&mut tag)?);
        } else if tag.start_el().matches("EngineVersion") {
            builder = builder.engine_version(data_string(&mut tag)?);
        } else if tag.start_el().matches("DBInstanceClass") {
            builder = builder.db_instance_class(data_string(&mut tag)?);
        } else if tag.start_el().matches("LicenseModel") {
            builder = builder.license_model(data_string(&mut tag)?);
        } else if tag.start_el().matches("AvailabilityZones") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("AvailabilityZone") {
                    builder = builder.availability_zones(deser_availability_zone(&mut member)?);
                }
            }
        } else if tag.start_el().matches("MultiAZCapable") {
            builder = builder.multi_az_capable(data_bool(&mut tag)?);
        } else if tag.start_el().matches("ReadReplicaCapable") {
            builder = builder.read_replica_capable(data_bool(&mut tag)?);
        } else if tag.start_el().matches("Vpc") {
            builder = builder.vpc(data_bool(&mut tag)?);
        } else if tag.start_el().matches("SupportsStorageEncryption") {
            builder = builder.supports_storage_encryption(data_bool(&mut tag)?);
        } else if tag.start_el().matches("StorageType") {
            builder = builder.storage_type(data_string(&mut tag)?);
        } else if tag.start_el().matches("SupportsIops") {
            builder = builder.supports_iops(data_bool(&mut tag)?);
        } else if tag.start_el().matches("SupportsEnhancedMonitoring") {
            builder = builder.supports_enhanced_monitoring(data_bool(&mut tag)?);
        } else if tag.start_el().matches("SupportsIAMDatabaseAuthentication") {
            builder = builder.supports_iam_database_authentication(data_bool(&mut tag)?);
        } else if tag.start_el().matches("SupportsPerformanceInsights") {
            builder = builder.supports_performance_insights(data_bool(&mut tag)?);
        } else if tag.start_el().matches("MinStorageSize") {
            builder = builder.min_storage_size(data_i32(&mut tag)?);
        } else if tag.start_el().matches("MaxStorageSize") {
            builder = builder.max_storage_size(data_i32(&mut tag)?);
        } else if tag.start_el().matches("MinIopsPerDbInstance") {
            builder = builder.min_iops_per_db_instance(data_i32(&mut tag)?);
        } else if tag.start_el().matches("MaxIopsPerDbInstance") {
            builder = builder.max_iops_per_db_instance(data_i32(&mut tag)?);
        } else if tag.start_el().matches("MinIopsPerGib") {
            builder = builder.min_iops_per_gib(data_f64(&mut tag)?);
        } else if tag.start_el().matches("MaxIopsPerGib") {
            builder = builder.max_iops_per_gib(data_f64(&mut tag)?);
        } else if tag.start_el().matches("AvailableProcessorFeatures") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("AvailableProcessorFeature") {
                    builder = builder
                        .available_processor_features(deser_available_processor_feature(&mut member)?);
                }
            }
        } else if tag.start_el().matches("SupportedEngineModes") {
            builder = builder.set_supported_engine_modes(Some(deser_string_list(&mut tag)?));
        } else if tag.start_el().matches("SupportsStorageAutoscaling") {
            builder = builder.supports_storage_autoscaling(data_bool(&mut tag)?);
        } else if tag.start_el().matches("SupportsKerberosAuthentication") {
            builder = builder.supports_kerberos_authentication(data_bool(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_db_instance(decoder: &mut ScopedDecoder<'_, '_>) -> Result<DbInstance, XmlDecodeError> {
    let mut builder = DbInstance::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("DBInstanceIdentifier") {
            builder = builder.db_instance_identifier(data_string(&mut tag)?);
        } else if tag.start_el().matches("DBInstanceClass") {
            builder = builder.db_instance_class(data_string(&mut tag)?);
        } else if tag.start_el().matches("Engine") {
            builder = builder.engine(data_string(&mut tag)?);
        } else if tag.start_el().matches("DBInstanceStatus") {
            builder = builder.db_instance_status(data_string(&mut tag)?);
        } else if tag.start_el().matches("MasterUsername") {
            builder = builder.master_username(data_string(&mut tag)?);
        } else if tag.start_el().matches("DBName") {
            builder = builder.db_name(data_string(&mut tag)?);
        } else if tag.start_el().matches("Endpoint") {
            builder = builder.endpoint(deser_endpoint(&mut tag)?);
        } else if tag.start_el().matches("AllocatedStorage") {
            builder = builder.allocated_storage(data_i32(&mut tag)?);
        } else if tag.start_el().matches("InstanceCreateTime") {
            builder = builder.instance_create_time(data_timestamp(&mut tag)?);
        } else if tag.start_el().matches("PreferredBackupWindow") {
            builder = builder.preferred_backup_window(data_string(&mut tag)?);
        } else if tag.start_el().matches("BackupRetentionPeriod") {
            builder = builder.backup_retention_period(data_i32(&mut tag)?);
        } else if tag.start_el().matches("DBSecurityGroups") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("DBSecurityGroup") {
                    builder =
                        builder.db_security_groups(deser_db_security_group_membership(&mut member)?);
                }
            }
        } else if tag.start_el().matches("VpcSecurityGroups") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("VpcSecurityGroupMembership") {
                    builder = builder
                        .vpc_security_groups(deser_vpc_security_group_membership(&mut member)?);
                }
            }
        } else if tag.start_el().matches("DBParameterGroups") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("DBParameterGroup") {
                    builder =
                        builder.db_parameter_groups(deser_db_parameter_group_status(&mut member)?);
                }
            }
        } else if tag.start_el().matches("AvailabilityZone") {
            builder = builder.availability_zone(data_string(&mut tag)?);
        } else if tag.start_el().matches("DBSubnetGroup") {
            builder = builder.db_subnet_group(deser_db_subnet_group(&mut tag)?);
        } else if tag.start_el().matches("PreferredMaintenanceWindow") {
            builder = builder.preferred_maintenance_window(data_string(&mut tag)?);
        } else if tag.start_el().matches("PendingModifiedValues") {
            builder = builder.pending_modified_values(deser_pending_modified_values(&mut tag)?);
        } else if tag.start_el().matches("LatestRestorableTime") {
            builder = builder.latest_restorable_time(data_timestamp(&mut tag)?);
        } else if tag.start_el().matches("MultiAZ") {
            builder = builder.multi_az(data_bool(&mut tag)?);
        } else if tag.start_el().matches("EngineVersion") {
            builder = builder.engine_version(data_string(&mut tag)?);
        } else if tag.start_el().matches("AutoMinorVersionUpgrade") {
            builder = builder.auto_minor_version_upgrade(data_bool(&mut tag)?);
        } else if tag.start_el().matches("ReadReplicaSourceDBInstanceIdentifier") {
            builder = builder.read_replica_source_db_instance_identifier(data_string(&mut tag)?);
        } else if tag.start_el().matches("ReadReplicaDBInstanceIdentifiers") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("ReadReplicaDBInstanceIdentifier") {
                    builder =
                        builder.read_replica_db_instance_identifiers(data_string(&mut member)?);
                }
            }
        } else if tag.start_el().matches("ReadReplicaDBClusterIdentifiers") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("ReadReplicaDBClusterIdentifier") {
                    builder =
                        builder.read_replica_db_cluster_identifiers(data_string(&mut member)?);
                }
            }
        } else if tag.start_el().matches("LicenseModel") {
            builder = builder.license_model(data_string(&mut tag)?);
        } else if tag.start_el().matches("Iops") {
            builder = builder.iops(data_i32(&mut tag)?);
        } else if tag.start_el().matches("OptionGroupMemberships") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("OptionGroupMembership") {
                    builder =
                        builder.option_group_memberships(deser_option_group_membership(&mut member)?);
                }
            }
        } else if tag.start_el().matches("CharacterSetName") {
            builder = builder.character_set_name(data_string(&mut tag)?);
        } else if tag.start_el().matches("SecondaryAvailabilityZone") {
            builder = builder.secondary_availability_zone(data_string(&mut tag)?);
        } else if tag.start_el().matches("PubliclyAccessible") {
            builder = builder.publicly_accessible(data_bool(&mut tag)?);
        } else if tag.start_el().matches("StatusInfos") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("DBInstanceStatusInfo") {
                    builder = builder.status_infos(deser_db_instance_status_info(&mut member)?);
                }
            }
        } else if tag.start_el().matches("StorageType") {
            builder = builder.storage_type(data_string(&mut tag)?);
        } else if tag.start_el().matches("TdeCredentialArn") {
            builder = builder.tde_credential_arn(data_string(&mut tag)?);
        } else if tag.start_el().matches("DbInstancePort") {
            builder = builder.db_instance_port(data_i32(&mut tag)?);
        } else if tag.start_el().matches("DBClusterIdentifier") {
            builder = builder.db_cluster_identifier(data_string(&mut tag)?);
        } else if tag.start_el().matches("StorageEncrypted") {
            builder = builder.storage_encrypted(data_bool(&mut tag)?);
        } else if tag.start_el().matches("KmsKeyId") {
            builder = builder.kms_key_id(data_string(&mut tag)?);
        } else if tag.start_el().matches("DbiResourceId") {
            builder = builder.dbi_resource_id(data_string(&mut tag)?);
        } else if tag.start_el().matches("CACertificateIdentifier") {
            builder = builder.ca_certificate_identifier(data_string(&mut tag)?);
        } else if tag.start_el().matches("DomainMemberships") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("DomainMembership") {
                    builder = builder.domain_memberships(deser_domain_membership(&mut member)?);
                }
            }
        } else if tag.start_el().matches("CopyTagsToSnapshot") {
            builder = builder.copy_tags_to_snapshot(data_bool(&mut tag)?);
        } else if tag.start_el().matches("MonitoringInterval") {
            builder = builder.monitoring_interval(data_i32(&mut tag)?);
        } else if tag.start_el().matches("EnhancedMonitoringResourceArn") {
            builder = builder.enhanced_monitoring_resource_arn(data_string(&mut tag)?);
        } else if tag.start_el().matches("MonitoringRoleArn") {
            builder = builder.monitoring_role_arn(data_string(&mut tag)?);
        } else if tag.start_el().matches("PromotionTier") {
            builder = builder.promotion_tier(data_i32(&mut tag)?);
        } else if tag.start_el().matches("DBInstanceArn") {
            builder = builder.db_instance_arn(data_string(&mut tag)?);
        } else if tag.start_el().matches("Timezone") {
            builder = builder.timezone(data_string(&mut tag)?);
        } else if tag.start_el().matches("IAMDatabaseAuthenticationEnabled") {
            builder = builder.iam_database_authentication_enabled(data_bool(&mut tag)?);
        } else if tag.start_el().matches("PerformanceInsightsEnabled") {
            builder = builder.performance_insights_enabled(data_bool(&mut tag)?);
        } else if tag.start_el().matches("PerformanceInsightsKMSKeyId") {
            builder = builder.performance_insights_kms_key_id(data_string(&mut tag)?);
        } else if tag.start_el().matches("PerformanceInsightsRetentionPeriod") {
            builder = builder.performance_insights_retention_period(data_i32(&mut tag)?);
        } else if tag.start_el().matches("EnabledCloudwatchLogsExports") {
            builder = builder.set_enabled_cloudwatch_logs_exports(Some(deser_string_list(&mut tag)?));
        } else if tag.start_el().matches("ProcessorFeatures") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("ProcessorFeature") {
                    builder = builder.processor_features(deser_processor_feature(&mut member)?);
                }
            }
        } else if tag.start_el().matches("DeletionProtection") {
            builder = builder.deletion_protection(data_bool(&mut tag)?);
        } else if tag.start_el().matches("AssociatedRoles") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("DBInstanceRole") {
                    builder = builder.associated_roles(deser_db_instance_role(&mut member)?);
                }
            }
        } else if tag.start_el().matches("ListenerEndpoint") {
            builder = builder.listener_endpoint(deser_endpoint(&mut tag)?);
        } else if tag.start_el().matches("MaxAllocatedStorage") {
            builder = builder.max_allocated_storage(data_i32(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_db_cluster(decoder: &mut ScopedDecoder<'_, '_>) -> Result<DbCluster, XmlDecodeError> {
    let mut builder = DbCluster::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("AllocatedStorage") {
            builder = builder.allocated_storage(data_i32(&mut tag)?);
        } else if tag.start_el().matches("AvailabilityZones") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("AvailabilityZone") {
                    builder = builder.availability_zones(data_string(&mut member)?);
                }
            }
        } else if tag.start_el().matches("BackupRetentionPeriod") {
            builder = builder.backup_retention_period(data_i32(&mut tag)?);
        } else if tag.start_el().matches("CharacterSetName") {
            builder = builder.character_set_name(data_string(&mut tag)?);
        } else if tag.start_el().matches("DatabaseName") {
            builder = builder.database_name(data_string(&mut tag)?);
        } else if tag.start_el().matches("DBClusterIdentifier") {
            builder = builder.db_cluster_identifier(data_string(&mut tag)?);
        } else if tag.start_el().matches("DBClusterParameterGroup") {
            builder = builder.db_cluster_parameter_group(data_string(&mut tag)?);
        } else if tag.start_el().matches("DBSubnetGroup") {
            builder = builder.db_subnet_group(data_string(&mut tag)?);
        } else if tag.start_el().matches("Status") {
            builder = builder.status(data_string(&mut tag)?);
        } else if tag.start_el().matches("PercentProgress") {
            builder = builder.percent_progress(data_string(&mut tag)?);
        } else if tag.start_el().matches("EarliestRestorableTime") {
            builder = builder.earliest_restorable_time(data_timestamp(&mut tag)?);
        } else if tag.start_el().matches("Endpoint") {
            builder = builder.endpoint(data_string(&mut tag)?);
        } else if tag.start_el().matches("ReaderEndpoint") {
            builder = builder.reader_endpoint(data_string(&mut tag)?);
        } else if tag.start_el().matches("CustomEndpoints") {
            builder = builder.set_custom_endpoints(Some(deser_string_list(&mut tag)?));
        } else if tag.start_el().matches("MultiAZ") {
            builder = builder.multi_az(data_bool(&mut tag)?);
        } else if tag.start_el().matches("Engine") {
            builder = builder.engine(data_string(&mut tag)?);
        } else if tag.start_el().matches("EngineVersion") {
            builder = builder.engine_version(data_string(&mut tag)?);
        } else if tag.start_el().matches("LatestRestorableTime") {
            builder = builder.latest_restorable_time(data_timestamp(&mut tag)?);
        } else if tag.start_el().matches("Port") {
            builder = builder.port(data_i32(&mut tag)?);
        } else if tag.start_el().matches("MasterUsername") {
            builder = builder.master_username(data_string(&mut tag)?);
        } else if tag.start_el().matches("DBClusterOptionGroupMemberships") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("DBClusterOptionGroup") {
                    builder = builder.db_cluster_option_group_memberships(
                        deser_db_cluster_option_group_status(&mut member)?,
                    );
                }
            }
        } else if tag.start_el().matches("PreferredBackupWindow") {
            builder = builder.preferred_backup_window(data_string(&mut tag)?);
        } else if tag.start_el().matches("PreferredMaintenanceWindow") {
            builder = builder.preferred_maintenance_window(data_string(&mut tag)?);
        } else if tag.start_el().matches("ReplicationSourceIdentifier") {
            builder = builder.replication_source_identifier(data_string(&mut tag)?);
        } else if tag.start_el().matches("ReadReplicaIdentifiers") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("ReadReplicaIdentifier") {
                    builder = builder.read_replica_identifiers(data_string(&mut member)?);
                }
            }
        } else if tag.start_el().matches("DBClusterMembers") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("DBClusterMember") {
                    builder = builder.db_cluster_members(deser_db_cluster_member(&mut member)?);
                }
            }
        } else if tag.start_el().matches("VpcSecurityGroups") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("VpcSecurityGroupMembership") {
                    builder = builder
                        .vpc_security_groups(deser_vpc_security_group_membership(&mut member)?);
                }
            }
        } else if tag.start_el().matches("HostedZoneId") {
            builder = builder.hosted_zone_id(data_string(&mut tag)?);
        } else if tag.start_el().matches("StorageEncrypted") {
            builder = builder.storage_encrypted(data_bool(&mut tag)?);
        } else if tag.start_el().matches("KmsKeyId") {
            builder = builder.kms_key_id(data_string(&mut tag)?);
        } else if tag.start_el().matches("DbClusterResourceId") {
            builder = builder.db_cluster_resource_id(data_string(&mut tag)?);
        } else if tag.start_el().matches("DBClusterArn") {
            builder = builder.db_cluster_arn(data_string(&mut tag)?);
        } else if tag.start_el().matches("AssociatedRoles") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("DBClusterRole") {
                    builder = builder.associated_roles(deser_db_cluster_role(&mut member)?);
                }
            }
        } else if tag.start_el().matches("IAMDatabaseAuthenticationEnabled") {
            builder = builder.iam_database_authentication_enabled(data_bool(&mut tag)?);
        } else if tag.start_el().matches("CloneGroupId") {
            builder = builder.clone_group_id(data_string(&mut tag)?);
        } else if tag.start_el().matches("ClusterCreateTime") {
            builder = builder.cluster_create_time(data_timestamp(&mut tag)?);
        } else if tag.start_el().matches("BacktrackWindow") {
            builder = builder.backtrack_window(data_i64(&mut tag)?);
        } else if tag.start_el().matches("BacktrackConsumedChangeRecords") {
            builder = builder.backtrack_consumed_change_records(data_i64(&mut tag)?);
        } else if tag.start_el().matches("EnabledCloudwatchLogsExports") {
            builder = builder.set_enabled_cloudwatch_logs_exports(Some(deser_string_list(&mut tag)?));
        } else if tag.start_el().matches("Capacity") {
            builder = builder.capacity(data_i32(&mut tag)?);
        } else if tag.start_el().matches("EngineMode") {
            builder = builder.engine_mode(data_string(&mut tag)?);
        } else if tag.start_el().matches("ScalingConfigurationInfo") {
            builder =
                builder.scaling_configuration_info(deser_scaling_configuration_info(&mut tag)?);
        } else if tag.start_el().matches("DeletionProtection") {
            builder = builder.deletion_protection(data_bool(&mut tag)?);
        } else if tag.start_el().matches("HttpEndpointEnabled") {
            builder = builder.http_endpoint_enabled(data_bool(&mut tag)?);
        } else if tag.start_el().matches("CopyTagsToSnapshot") {
            builder = builder.copy_tags_to_snapshot(data_bool(&mut tag)?);
        } else if tag.start_el().matches("CrossAccountClone") {
            builder = builder.cross_account_clone(data_bool(&mut tag)?);
        } else if tag.start_el().matches("DomainMemberships") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("DomainMembership") {
                    builder = builder.domain_memberships(deser_domain_membership(&mut member)?);
                }
            }
        }
    }
    Ok(builder.build())
}

fn deser_db_snapshot(decoder: &mut ScopedDecoder<'_, '_>) -> Result<DbSnapshot, XmlDecodeError> {
    let mut builder = DbSnapshot::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("DBSnapshotIdentifier") {
            builder = builder.db_snapshot_identifier(data_string(&mut tag)?);
        } else if tag.start_el().matches("DBInstanceIdentifier") {
            builder = builder.db_instance_identifier(data_string(&mut tag)?);
        } else if tag.start_el().matches("SnapshotCreateTime") {
            builder = builder.snapshot_create_time(data_timestamp(&mut tag)?);
        } else if tag.start_el().matches("Engine") {
            builder = builder.engine(data_string(&mut tag)?);
        } else if tag.start_el().matches("AllocatedStorage") {
            builder = builder.allocated_storage(data_i32(&mut tag)?);
        } else if tag.start_el().matches("Status") {
            builder = builder.status(data_string(&mut tag)?);
        } else if tag.start_el().matches("Port") {
            builder = builder.port(data_i32(&mut tag)?);
        } else if tag.start_el().matches("AvailabilityZone") {
            builder = builder.availability_zone(data_string(&mut tag)?);
        } else if tag.start_el().matches("VpcId") {
            builder = builder.vpc_id(data_string(&mut tag)?);
        } else if tag.start_el().matches("InstanceCreateTime") {
            builder = builder.instance_create_time(data_timestamp(&mut tag)?);
        } else if tag.start_el().matches("MasterUsername") {
            builder = builder.master_username(data_string(&mut tag)?);
        } else if tag.start_el().matches("EngineVersion") {
            builder = builder.engine_version(data_string(&mut tag)?);
        } else if tag.start_el().matches("LicenseModel") {
            builder = builder.license_model(data_string(&mut tag)?);
        } else if tag.start_el().matches("SnapshotType") {
            builder = builder.snapshot_type(data_string(&mut tag)?);
        } else if tag.start_el().matches("Iops") {
            builder = builder.iops(data_i32(&mut tag)?);
        } else if tag.start_el().matches("OptionGroupName") {
            builder = builder.option_group_name(data_string(&mut tag)?);
        } else if tag.start_el().matches("PercentProgress") {
            builder = builder.percent_progress(data_i32(&mut tag)?);
        } else if tag.start_el().matches("SourceRegion") {
            builder = builder.source_region(data_string(&mut tag)?);
        } else if tag.start_el().matches("SourceDBSnapshotIdentifier") {
            builder = builder.source_db_snapshot_identifier(data_string(&mut tag)?);
        } else if tag.start_el().matches("StorageType") {
            builder = builder.storage_type(data_string(&mut tag)?);
        } else if tag.start_el().matches("TdeCredentialArn") {
            builder = builder.tde_credential_arn(data_string(&mut tag)?);
        } else if tag.start_el().matches("Encrypted") {
            builder = builder.encrypted(data_bool(&mut tag)?);
        } else if tag.start_el().matches("KmsKeyId") {
            builder = builder.kms_key_id(data_string(&mut tag)?);
        } else if tag.start_el().matches("DBSnapshotArn") {
            builder = builder.db_snapshot_arn(data_string(&mut tag)?);
        } else if tag.start_el().matches("Timezone") {
            builder = builder.timezone(data_string(&mut tag)?);
        } else if tag.start_el().matches("IAMDatabaseAuthenticationEnabled") {
            builder = builder.iam_database_authentication_enabled(data_bool(&mut tag)?);
        } else if tag.start_el().matches("ProcessorFeatures") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("ProcessorFeature") {
                    builder = builder.processor_features(deser_processor_feature(&mut member)?);
                }
            }
        } else if tag.start_el().matches("DbiResourceId") {
            builder = builder.dbi_resource_id(data_string(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_db_cluster_snapshot(decoder: &mut ScopedDecoder<'_, '_>) -> Result<DbClusterSnapshot, XmlDecodeError> {
    let mut builder = DbClusterSnapshot::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("AvailabilityZones") {
            while let Some(mut member) = tag.next_tag() {
                if member.start_el().matches("AvailabilityZone") {
                    builder = builder.availability_zones(data_string(&mut member)?);
                }
            }
        } else if tag.start_el().matches("DBClusterSnapshotIdentifier") {
            builder = builder.db_cluster_snapshot_identifier(data_string(&mut tag)?);
        } else if tag.start_el().matches("DBClusterIdentifier") {
            builder = builder.db_cluster_identifier(data_string(&mut tag)?);
        } else if tag.start_el().matches("SnapshotCreateTime") {
            builder = builder.snapshot_create_time(data_timestamp(&mut tag)?);
        } else if tag.start_el().matches("Engine") {
            builder = builder.engine(data_string(&mut tag)?);
        } else if tag.start_el().matches("AllocatedStorage") {
            builder = builder.allocated_storage(data_i32(&mut tag)?);
        } else if tag.start_el().matches("Status") {
            builder = builder.status(data_string(&mut tag)?);
        } else if tag.start_el().matches("Port") {
            builder = builder.port(data_i32(&mut tag)?);
        } else if tag.start_el().matches("VpcId") {
            builder = builder.vpc_id(data_string(&mut tag)?);
        } else if tag.start_el().matches("ClusterCreateTime") {
            builder = builder.cluster_create_time(data_timestamp(&mut tag)?);
        } else if tag.start_el().matches("MasterUsername") {
            builder = builder.master_username(data_string(&mut tag)?);
        } else if tag.start_el().matches("EngineVersion") {
            builder = builder.engine_version(data_string(&mut tag)?);
        } else if tag.start_el().matches("LicenseModel") {
            builder = builder.license_model(data_string(&mut tag)?);
        } else if tag.start_el().matches("SnapshotType") {
            builder = builder.snapshot_type(data_string(&mut tag)?);
        } else if tag.start_el().matches("PercentProgress") {
            builder = builder.percent_progress(data_i32(&mut tag)?);
        } else if tag.start_el().matches("StorageEncrypted") {
            builder = builder.storage_encrypted(data_bool(&mut tag)?);
        } else if tag.start_el().matches("KmsKeyId") {
            builder = builder.kms_key_id(data_string(&mut tag)?);
        } else if tag.start_el().matches("DBClusterSnapshotArn") {
            builder = builder.db_cluster_snapshot_arn(data_string(&mut tag)?);
        } else if tag.start_el().matches("SourceDBClusterSnapshotArn") {
            builder = builder.source_db_cluster_snapshot_arn(data_string(&mut tag)?);
        } else if tag.start_el().matches("IAMDatabaseAuthenticationEnabled") {
            builder = builder.iam_database_authentication_enabled(data_bool(&mut tag)?);
        }
    }
    Ok(builder.build())
}

fn deser_db_cluster_endpoint(decoder: &mut ScopedDecoder<'_, '_>) -> Result<DbClusterEndpoint, XmlDecodeError> {
    let mut builder = DbClusterEndpoint::builder();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("DBClusterEndpointIdentifier") {
            builder = builder.db_cluster_endpoint_identifier(data_string(&mut tag)?);
        } else if tag.start_el().matches("DBClusterIdentifier") {
            builder = builder.db_cluster_identifier(data_string(&mut tag)?);
        } else if tag.start_el().matches("DBClusterEndpointResourceIdentifier") {
            builder = builder.db_cluster_endpoint_resource_identifier(data_string(&mut tag)?);
        } else if tag.start_el().matches("Endpoint") {
            builder = builder.endpoint(data_string(&mut tag)?);
        } else if tag.start_el().matches("Status") {
            builder = builder.status(data_string(&mut tag)?);
        } else if tag.start_el().matches("EndpointType") {
            builder = builder.endpoint_type(data_string(&mut tag)?);
        } else if tag.start_el().matches("CustomEndpointType") {
            builder = builder.custom_endpoint_type(data_string(&mut tag)?);
        } else if tag.start_el().matches("StaticMembers") {
            builder = builder.set_static_members(Some(deser_string_list(&mut tag)?));
        } else if tag.start_el().matches("ExcludedMembers") {
            builder = builder.set_excluded_members(Some(deser_string_list(&mut tag)?));
        } else if tag.start_el().matches("DBClusterEndpointArn") {
            builder = builder.db_cluster_endpoint_arn(data_string(&mut tag)?);
        }
    }
    Ok(builder.build())
}

/// Opens the `<XxxResponse>` root and returns an error when the name does
/// not match.
fn open_response<'inp, 'a>(
    doc: &'a mut Document<'inp>,
    response_name: &str,
) -> Result<ScopedDecoder<'inp, 'a>, XmlDecodeError> {
    let root = doc.root_element()?;
    if !root.start_el().matches(response_name) {
        return Err(XmlDecodeError::custom(format!(
            "invalid root, expected {}",
            response_name
        )));
    }
    Ok(root)
}

/// Stamps out a parser for operations whose result wraps a single record
/// element.
macro_rules! parse_single_record_response {
    ($fn_name:ident, $response:literal, $result:literal, $element:literal,
     $output:ty, $setter:ident, $deser:ident) => {
        pub(crate) fn $fn_name(body: &[u8]) -> Result<$output, XmlDecodeError> {
            let mut doc = Document::try_from(body)?;
            let mut root = open_response(&mut doc, $response)?;
            let mut builder = <$output>::builder();
            while let Some(mut result) = root.next_tag() {
                if result.start_el().matches($result) {
                    while let Some(mut tag) = result.next_tag() {
                        if tag.start_el().matches($element) {
                            builder = builder.$setter($deser(&mut tag)?);
                        }
                    }
                }
            }
            Ok(builder.build())
        }
    };
}

parse_single_record_response!(
    parse_create_db_instance, "CreateDBInstanceResponse", "CreateDBInstanceResult",
    "DBInstance", CreateDbInstanceOutput, db_instance, deser_db_instance);
parse_single_record_response!(
    parse_modify_db_instance, "ModifyDBInstanceResponse", "ModifyDBInstanceResult",
    "DBInstance", ModifyDbInstanceOutput, db_instance, deser_db_instance);
parse_single_record_response!(
    parse_delete_db_instance, "DeleteDBInstanceResponse", "DeleteDBInstanceResult",
    "DBInstance", DeleteDbInstanceOutput, db_instance, deser_db_instance);
parse_single_record_response!(
    parse_reboot_db_instance, "RebootDBInstanceResponse", "RebootDBInstanceResult",
    "DBInstance", RebootDbInstanceOutput, db_instance, deser_db_instance);
parse_single_record_response!(
    parse_start_db_instance, "StartDBInstanceResponse", "StartDBInstanceResult",
    "DBInstance", StartDbInstanceOutput, db_instance, deser_db_instance);
parse_single_record_response!(
    parse_stop_db_instance, "StopDBInstanceResponse", "StopDBInstanceResult",
    "DBInstance", StopDbInstanceOutput, db_instance, deser_db_instance);
parse_single_record_response!(
    parse_restore_db_instance_from_db_snapshot, "RestoreDBInstanceFromDBSnapshotResponse",
    "RestoreDBInstanceFromDBSnapshotResult", "DBInstance",
    RestoreDbInstanceFromDbSnapshotOutput, db_instance, deser_db_instance);
parse_single_record_response!(
    parse_restore_db_instance_from_s3, "RestoreDBInstanceFromS3Response",
    "RestoreDBInstanceFromS3Result", "DBInstance",
    RestoreDbInstanceFromS3Output, db_instance, deser_db_instance);
parse_single_record_response!(
    parse_create_db_cluster, "CreateDBClusterResponse", "CreateDBClusterResult",
    "DBCluster", CreateDbClusterOutput, db_cluster, deser_db_cluster);
parse_single_record_response!(
    parse_modify_db_cluster, "ModifyDBClusterResponse", "ModifyDBClusterResult",
    "DBCluster", ModifyDbClusterOutput, db_cluster, deser_db_cluster);
parse_single_record_response!(
    parse_delete_db_cluster, "DeleteDBClusterResponse", "DeleteDBClusterResult",
    "DBCluster", DeleteDbClusterOutput, db_cluster, deser_db_cluster);
parse_single_record_response!(
    parse_restore_db_cluster_from_snapshot, "RestoreDBClusterFromSnapshotResponse",
    "RestoreDBClusterFromSnapshotResult", "DBCluster",
    RestoreDbClusterFromSnapshotOutput, db_cluster, deser_db_cluster);
parse_single_record_response!(
    parse_restore_db_cluster_from_s3, "RestoreDBClusterFromS3Response",
    "RestoreDBClusterFromS3Result", "DBCluster",
    RestoreDbClusterFromS3Output, db_cluster, deser_db_cluster);
parse_single_record_response!(
    parse_restore_db_cluster_to_point_in_time, "RestoreDBClusterToPointInTimeResponse",
    "RestoreDBClusterToPointInTimeResult", "DBCluster",
    RestoreDbClusterToPointInTimeOutput, db_cluster, deser_db_cluster);
parse_single_record_response!(
    parse_create_db_snapshot, "CreateDBSnapshotResponse", "CreateDBSnapshotResult",
    "DBSnapshot", CreateDbSnapshotOutput, db_snapshot, deser_db_snapshot);
parse_single_record_response!(
    parse_delete_db_snapshot, "DeleteDBSnapshotResponse", "DeleteDBSnapshotResult",
    "DBSnapshot", DeleteDbSnapshotOutput, db_snapshot, deser_db_snapshot);
parse_single_record_response!(
    parse_create_db_cluster_snapshot, "CreateDBClusterSnapshotResponse",
    "CreateDBClusterSnapshotResult", "DBClusterSnapshot",
    CreateDbClusterSnapshotOutput, db_cluster_snapshot, deser_db_cluster_snapshot);
parse_single_record_response!(
    parse_copy_db_cluster_snapshot, "CopyDBClusterSnapshotResponse",
    "CopyDBClusterSnapshotResult", "DBClusterSnapshot",
    CopyDbClusterSnapshotOutput, db_cluster_snapshot, deser_db_cluster_snapshot);
parse_single_record_response!(
    parse_delete_db_cluster_snapshot, "DeleteDBClusterSnapshotResponse",
    "DeleteDBClusterSnapshotResult", "DBClusterSnapshot",
    DeleteDbClusterSnapshotOutput, db_cluster_snapshot, deser_db_cluster_snapshot);

/// Stamps out a parser for marker-paginated list results.
macro_rules! parse_paginated_list_response {
    ($fn_name:ident, $response:literal, $result:literal, $list:literal, $member:literal,
     $output:ty, $append:ident, $deser:ident) => {
        pub(crate) fn $fn_name(body: &[u8]) -> Result<$output, XmlDecodeError> {
            let mut doc = Document::try_from(body)?;
            let mut root = open_response(&mut doc, $response)?;
            let mut builder = <$output>::builder();
            while let Some(mut result) = root.next_tag() {
                if result.start_el().matches($result) {
                    while let Some(mut tag) = result.next_tag() {
                        if tag.start_el().matches($list) {
                            while let Some(mut member) = tag.next_tag() {
                                if member.start_el().matches($member) {
                                    builder = builder.$append($deser(&mut member)?);
                                }
                            }
                        } else if tag.start_el().matches("Marker") {
                            builder = builder.marker(data_string(&mut tag)?);
                        }
                    }
                }
            }
            Ok(builder.build())
        }
    };
}

parse_paginated_list_response!(
    parse_describe_db_instances, "DescribeDBInstancesResponse", "DescribeDBInstancesResult",
    "DBInstances", "DBInstance", DescribeDbInstancesOutput, db_instances, deser_db_instance);
parse_paginated_list_response!(
    parse_describe_db_clusters, "DescribeDBClustersResponse", "DescribeDBClustersResult",
    "DBClusters", "DBCluster", DescribeDbClustersOutput, db_clusters, deser_db_cluster);
parse_paginated_list_response!(
    parse_describe_db_snapshots, "DescribeDBSnapshotsResponse", "DescribeDBSnapshotsResult",
    "DBSnapshots", "DBSnapshot", DescribeDbSnapshotsOutput, db_snapshots, deser_db_snapshot);
parse_paginated_list_response!(
    parse_describe_db_cluster_snapshots, "DescribeDBClusterSnapshotsResponse",
    "DescribeDBClusterSnapshotsResult", "DBClusterSnapshots", "DBClusterSnapshot",
    DescribeDbClusterSnapshotsOutput, db_cluster_snapshots, deser_db_cluster_snapshot);
parse_paginated_list_response!(
    parse_describe_db_cluster_endpoints, "DescribeDBClusterEndpointsResponse",
    "DescribeDBClusterEndpointsResult", "DBClusterEndpoints", "DBClusterEndpointList",
    DescribeDbClusterEndpointsOutput, db_cluster_endpoints, deser_db_cluster_endpoint);
parse_paginated_list_response!(
    parse_describe_orderable_db_instance_options, "DescribeOrderableDBInstanceOptionsResponse",
    "DescribeOrderableDBInstanceOptionsResult", "OrderableDBInstanceOptions",
    "OrderableDBInstanceOption", DescribeOrderableDbInstanceOptionsOutput,
    orderable_db_instance_options, deser_orderable_db_instance_option);
parse_paginated_list_response!(
    parse_describe_db_security_groups, "DescribeDBSecurityGroupsResponse",
    "DescribeDBSecurityGroupsResult", "DBSecurityGroups", "DBSecurityGroup",
    DescribeDbSecurityGroupsOutput, db_security_groups, deser_db_security_group);
parse_paginated_list_response!(
    parse_describe_db_proxy_targets, "DescribeDBProxyTargetsResponse",
    "DescribeDBProxyTargetsResult", "Targets", "member",
    DescribeDbProxyTargetsOutput, targets, deser_db_proxy_target);
parse_paginated_list_response!(
    parse_describe_custom_availability_zones, "DescribeCustomAvailabilityZonesResponse",
    "DescribeCustomAvailabilityZonesResult", "CustomAvailabilityZones",
    "CustomAvailabilityZone", DescribeCustomAvailabilityZonesOutput,
    custom_availability_zones, deser_custom_availability_zone);

pub(crate) fn parse_list_tags_for_resource(
    body: &[u8],
) -> Result<ListTagsForResourceOutput, XmlDecodeError> {
    let mut doc = Document::try_from(body)?;
    let mut root = open_response(&mut doc, "ListTagsForResourceResponse")?;
    let mut builder = ListTagsForResourceOutput::builder();
    while let Some(mut result) = root.next_tag() {
        if result.start_el().matches("ListTagsForResourceResult") {
            while let Some(mut tag) = result.next_tag() {
                if tag.start_el().matches("TagList") {
                    while let Some(mut member) = tag.next_tag() {
                        if member.start_el().matches("Tag") {
                            builder = builder.tag_list(deser_tag(&mut member)?);
                        }
                    }
                }
            }
        }
    }
    Ok(builder.build())
}

pub(crate) fn parse_describe_valid_db_instance_modifications(
    body: &[u8],
) -> Result<DescribeValidDbInstanceModificationsOutput, XmlDecodeError> {
    let mut doc = Document::try_from(body)?;
    let mut root = open_response(&mut doc, "DescribeValidDBInstanceModificationsResponse")?;
    let mut builder = DescribeValidDbInstanceModificationsOutput::builder();
    while let Some(mut result) = root.next_tag() {
        if result
            .start_el()
            .matches("DescribeValidDBInstanceModificationsResult")
        {
            while let Some(mut tag) = result.next_tag() {
                if tag.start_el().matches("ValidDBInstanceModificationsMessage") {
                    builder = builder.valid_db_instance_modifications_message(
                        deser_valid_db_instance_modifications_message(&mut tag)?,
                    );
                }
            }
        }
    }
    Ok(builder.build())
}

/// Stamps out a parser for cluster-endpoint operations, whose result element
/// carries the endpoint's fields directly.
macro_rules! parse_db_cluster_endpoint_response {
    ($fn_name:ident, $response:literal, $result:literal, $output:ty) => {
        pub(crate) fn $fn_name(body: &[u8]) -> Result<$output, XmlDecodeError> {
            let mut doc = Document::try_from(body)?;
            let mut root = open_response(&mut doc, $response)?;
            let mut endpoint = DbClusterEndpoint::default();
            while let Some(mut result) = root.next_tag() {
                if result.start_el().matches($result) {
                    endpoint = deser_db_cluster_endpoint(&mut result)?;
                }
            }
            Ok(<$output>::builder()
                .set_db_cluster_endpoint_identifier(endpoint.db_cluster_endpoint_identifier)
                .set_db_cluster_identifier(endpoint.db_cluster_identifier)
                .set_db_cluster_endpoint_resource_identifier(
                    endpoint.db_cluster_endpoint_resource_identifier,
                )
                .set_endpoint(endpoint.endpoint)
                .set_status(endpoint.status)
                .set_endpoint_type(endpoint.endpoint_type)
                .set_custom_endpoint_type(endpoint.custom_endpoint_type)
                .set_static_members(endpoint.static_members)
                .set_excluded_members(endpoint.excluded_members)
                .set_db_cluster_endpoint_arn(endpoint.db_cluster_endpoint_arn)
                .build())
        }
    };
}

parse_db_cluster_endpoint_response!(
    parse_create_db_cluster_endpoint, "CreateDBClusterEndpointResponse",
    "CreateDBClusterEndpointResult", CreateDbClusterEndpointOutput);
parse_db_cluster_endpoint_response!(
    parse_modify_db_cluster_endpoint, "ModifyDBClusterEndpointResponse",
    "ModifyDBClusterEndpointResult", ModifyDbClusterEndpointOutput);
parse_db_cluster_endpoint_response!(
    parse_delete_db_cluster_endpoint, "DeleteDBClusterEndpointResponse",
    "DeleteDBClusterEndpointResult", DeleteDbClusterEndpointOutput);
