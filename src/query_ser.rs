/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! AWS Query protocol serialization of operation inputs.
//!
//! Every serializer renders an `Action=…&Version=2014-10-31&…` form body.
//! Members keep their wire names (`DBInstanceIdentifier`), lists are numbered
//! under the member name the service expects (`Tags.Tag.1.Key`), and unset
//! fields are omitted entirely.

use crate::input::*;
use crate::model::{
    CloudwatchLogsExportConfiguration, Filter, ProcessorFeature, ScalingConfiguration, Tag,
};
use aws_smithy_query::{QueryValueWriter, QueryWriter};
use aws_smithy_types::date_time::{DateTimeFormatError, Format};
use aws_smithy_types::Number;

const API_VERSION: &str = "2014-10-31";

fn write_i32(writer: QueryValueWriter<'_>, value: i32) {
    writer.number(Number::NegInt(i64::from(value)));
}

fn write_i64(writer: QueryValueWriter<'_>, value: i64) {
    writer.number(Number::NegInt(value));
}

fn write_string_list(writer: QueryValueWriter<'_>, items: &[String], member: Option<&str>) {
    let mut list = writer.start_list(false, member);
    for item in items {
        list.entry().string(item);
    }
    list.finish();
}

fn write_tag(mut writer: QueryValueWriter<'_>, tag: &Tag) {
    if let Some(key) = &tag.key {
        writer.prefix("Key").string(key);
    }
    if let Some(value) = &tag.value {
        writer.prefix("Value").string(value);
    }
}

fn write_tags(writer: QueryValueWriter<'_>, tags: &[Tag]) {
    let mut list = writer.start_list(false, Some("Tag"));
    for tag in tags {
        write_tag(list.entry(), tag);
    }
    list.finish();
}

fn write_filter(mut writer: QueryValueWriter<'_>, filter: &Filter) {
    if let Some(name) = &filter.name {
        writer.prefix("Name").string(name);
    }
    if let Some(values) = &filter.values {
        write_string_list(writer.prefix("Values"), values, Some("Value"));
    }
}

fn write_filters(writer: QueryValueWriter<'_>, filters: &[Filter]) {
    let mut list = writer.start_list(false, Some("Filter"));
    for filter in filters {
        write_filter(list.entry(), filter);
    }
    list.finish();
}

fn write_processor_feature(mut writer: QueryValueWriter<'_>, feature: &ProcessorFeature) {
    if let Some(name) = &feature.name {
        writer.prefix("Name").string(name);
    }
    if let Some(value) = &feature.value {
        writer.prefix("Value").string(value);
    }
}

fn write_processor_features(writer: QueryValueWriter<'_>, features: &[ProcessorFeature]) {
    let mut list = writer.start_list(false, Some("ProcessorFeature"));
    for feature in features {
        write_processor_feature(list.entry(), feature);
    }
    list.finish();
}

fn write_logs_export_configuration(
    mut writer: QueryValueWriter<'_>,
    config: &CloudwatchLogsExportConfiguration,
) {
    if let Some(enable) = &config.enable_log_types {
        write_string_list(writer.prefix("EnableLogTypes"), enable, None);
    }
    if let Some(disable) = &config.disable_log_types {
        write_string_list(writer.prefix("DisableLogTypes"), disable, None);
    }
}

fn write_scaling_configuration(mut writer: QueryValueWriter<'_>, config: &ScalingConfiguration) {
    if let Some(min_capacity) = config.min_capacity {
        write_i32(writer.prefix("MinCapacity"), min_capacity);
    }
    if let Some(max_capacity) = config.max_capacity {
        write_i32(writer.prefix("MaxCapacity"), max_capacity);
    }
    if let Some(auto_pause) = config.auto_pause {
        writer.prefix("AutoPause").boolean(auto_pause);
    }
    if let Some(seconds) = config.seconds_until_auto_pause {
        write_i32(writer.prefix("SecondsUntilAutoPause"), seconds);
    }
    if let Some(action) = &config.timeout_action {
        writer.prefix("TimeoutAction").string(action);
    }
}

pub(crate) fn serialize_add_tags_to_resource(
    input: &AddTagsToResourceInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "AddTagsToResource", API_VERSION);
    if let Some(resource_name) = &input.resource_name {
        writer.prefix("ResourceName").string(resource_name);
    }
    if let Some(tags) = &input.tags {
        write_tags(writer.prefix("Tags"), tags);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_remove_tags_from_resource(
    input: &RemoveTagsFromResourceInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "RemoveTagsFromResource", API_VERSION);
    if let Some(resource_name) = &input.resource_name {
        writer.prefix("ResourceName").string(resource_name);
    }
    if let Some(tag_keys) = &input.tag_keys {
        write_string_list(writer.prefix("TagKeys"), tag_keys, None);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_list_tags_for_resource(
    input: &ListTagsForResourceInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "ListTagsForResource", API_VERSION);
    if let Some(resource_name) = &input.resource_name {
        writer.prefix("ResourceName").string(resource_name);
    }
    if let Some(filters) = &input.filters {
        write_filters(writer.prefix("Filters"), filters);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_describe_db_instances(
    input: &DescribeDbInstancesInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "DescribeDBInstances", API_VERSION);
    if let Some(id) = &input.db_instance_identifier {
        writer.prefix("DBInstanceIdentifier").string(id);
    }
    if let Some(filters) = &input.filters {
        write_filters(writer.prefix("Filters"), filters);
    }
    if let Some(max_records) = input.max_records {
        write_i32(writer.prefix("MaxRecords"), max_records);
    }
    if let Some(marker) = &input.marker {
        writer.prefix("Marker").string(marker);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_describe_db_clusters(
    input: &DescribeDbClustersInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "DescribeDBClusters", API_VERSION);
    if let Some(id) = &input.db_cluster_identifier {
        writer.prefix("DBClusterIdentifier").string(id);
    }
    if let Some(filters) = &input.filters {
        write_filters(writer.prefix("Filters"), filters);
    }
    if let Some(max_records) = input.max_records {
        write_i32(writer.prefix("MaxRecords"), max_records);
    }
    if let Some(marker) = &input.marker {
        writer.prefix("Marker").string(marker);
    }
    if let Some(include_shared) = input.include_shared {
        writer.prefix("IncludeShared").boolean(include_shared);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_create_db_instance(
    input: &CreateDbInstanceInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "CreateDBInstance", API_VERSION);
    if let Some(db_name) = &input.db_name {
        writer.prefix("DBName").string(db_name);
    }
    if let Some(id) = &input.db_instance_identifier {
        writer.prefix("DBInstanceIdentifier").string(id);
    }
    if let Some(storage) = input.allocated_storage {
        write_i32(writer.prefix("AllocatedStorage"), storage);
    }
    if let Some(class) = &input.db_instance_class {
        writer.prefix("DBInstanceClass").string(class);
    }
    if let Some(engine) = &input.engine {
        writer.prefix("Engine").string(engine);
    }
    if let Some(username) = &input.master_username {
        writer.prefix("MasterUsername").string(username);
    }
    if let Some(password) = &input.master_user_password {
        writer.prefix("MasterUserPassword").string(password);
    }
    if let Some(groups) = &input.db_security_groups {
        write_string_list(
            writer.prefix("DBSecurityGroups"),
            groups,
            Some("DBSecurityGroupName"),
        );
    }
    if let Some(ids) = &input.vpc_security_group_ids {
        write_string_list(
            writer.prefix("VpcSecurityGroupIds"),
            ids,
            Some("VpcSecurityGroupId"),
        );
    }
    if let Some(az) = &input.availability_zone {
        writer.prefix("AvailabilityZone").string(az);
    }
    if let Some(name) = &input.db_subnet_group_name {
        writer.prefix("DBSubnetGroupName").string(name);
    }
    if let Some(window) = &input.preferred_maintenance_window {
        writer.prefix("PreferredMaintenanceWindow").string(window);
    }
    if let Some(name) = &input.db_parameter_group_name {
        writer.prefix("DBParameterGroupName").string(name);
    }
    if let Some(period) = input.backup_retention_period {
        write_i32(writer.prefix("BackupRetentionPeriod"), period);
    }
    if let Some(window) = &input.preferred_backup_window {
        writer.prefix("PreferredBackupWindow").string(window);
    }
    if let Some(port) = input.port {
        write_i32(writer.prefix("Port"), port);
    }
    if let Some(multi_az) = input.multi_az {
        writer.prefix("MultiAZ").boolean(multi_az);
    }
    if let Some(version) = &input.engine_version {
        writer.prefix("EngineVersion").string(version);
    }
    if let Some(upgrade) = input.auto_minor_version_upgrade {
        writer.prefix("AutoMinorVersionUpgrade").boolean(upgrade);
    }
    if let Some(model) = &input.license_model {
        writer.prefix("LicenseModel").string(model);
    }
    if let Some(iops) = input.iops {
        write_i32(writer.prefix("Iops"), iops);
    }
    if let Some(name) = &input.option_group_name {
        writer.prefix("OptionGroupName").string(name);
    }
    if let Some(charset) = &input.character_set_name {
        writer.prefix("CharacterSetName").string(charset);
    }
    if let Some(public) = input.publicly_accessible {
        writer.prefix("PubliclyAccessible").boolean(public);
    }
    if let Some(tags) = &input.tags {
        write_tags(writer.prefix("Tags"), tags);
    }
    if let Some(id) = &input.db_cluster_identifier {
        writer.prefix("DBClusterIdentifier").string(id);
    }
    if let Some(storage_type) = &input.storage_type {
        writer.prefix("StorageType").string(storage_type);
    }
    if let Some(arn) = &input.tde_credential_arn {
        writer.prefix("TdeCredentialArn").string(arn);
    }
    if let Some(password) = &input.tde_credential_password {
        writer.prefix("TdeCredentialPassword").string(password);
    }
    if let Some(encrypted) = input.storage_encrypted {
        writer.prefix("StorageEncrypted").boolean(encrypted);
    }
    if let Some(key) = &input.kms_key_id {
        writer.prefix("KmsKeyId").string(key);
    }
    if let Some(domain) = &input.domain {
        writer.prefix("Domain").string(domain);
    }
    if let Some(copy) = input.copy_tags_to_snapshot {
        writer.prefix("CopyTagsToSnapshot").boolean(copy);
    }
    if let Some(interval) = input.monitoring_interval {
        write_i32(writer.prefix("MonitoringInterval"), interval);
    }
    if let Some(arn) = &input.monitoring_role_arn {
        writer.prefix("MonitoringRoleArn").string(arn);
    }
    if let Some(role) = &input.domain_iam_role_name {
        writer.prefix("DomainIAMRoleName").string(role);
    }
    if let Some(tier) = input.promotion_tier {
        write_i32(writer.prefix("PromotionTier"), tier);
    }
    if let Some(timezone) = &input.timezone {
        writer.prefix("Timezone").string(timezone);
    }
    if let Some(enable) = input.enable_iam_database_authentication {
        writer
            .prefix("EnableIAMDatabaseAuthentication")
            .boolean(enable);
    }
    if let Some(enable) = input.enable_performance_insights {
        writer.prefix("EnablePerformanceInsights").boolean(enable);
    }
    if let Some(key) = &input.performance_insights_kms_key_id {
        writer.prefix("PerformanceInsightsKMSKeyId").string(key);
    }
    if let Some(period) = input.performance_insights_retention_period {
        write_i32(writer.prefix("PerformanceInsightsRetentionPeriod"), period);
    }
    if let Some(exports) = &input.enable_cloudwatch_logs_exports {
        write_string_list(writer.prefix("EnableCloudwatchLogsExports"), exports, None);
    }
    if let Some(features) = &input.processor_features {
        write_processor_features(writer.prefix("ProcessorFeatures"), features);
    }
    if let Some(protection) = input.deletion_protection {
        writer.prefix("DeletionProtection").boolean(protection);
    }
    if let Some(max) = input.max_allocated_storage {
        write_i32(writer.prefix("MaxAllocatedStorage"), max);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_modify_db_instance(
    input: &ModifyDbInstanceInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "ModifyDBInstance", API_VERSION);
    if let Some(id) = &input.db_instance_identifier {
        writer.prefix("DBInstanceIdentifier").string(id);
    }
    if let Some(storage) = input.allocated_storage {
        write_i32(writer.prefix("AllocatedStorage"), storage);
    }
    if let Some(class) = &input.db_instance_class {
        writer.prefix("DBInstanceClass").string(class);
    }
    if let Some(name) = &input.db_subnet_group_name {
        writer.prefix("DBSubnetGroupName").string(name);
    }
    if let Some(groups) = &input.db_security_groups {
        write_string_list(
            writer.prefix("DBSecurityGroups"),
            groups,
            Some("DBSecurityGroupName"),
        );
    }
    if let Some(ids) = &input.vpc_security_group_ids {
        write_string_list(
            writer.prefix("VpcSecurityGroupIds"),
            ids,
            Some("VpcSecurityGroupId"),
        );
    }
    if let Some(apply) = input.apply_immediately {
        writer.prefix("ApplyImmediately").boolean(apply);
    }
    if let Some(password) = &input.master_user_password {
        writer.prefix("MasterUserPassword").string(password);
    }
    if let Some(name) = &input.db_parameter_group_name {
        writer.prefix("DBParameterGroupName").string(name);
    }
    if let Some(period) = input.backup_retention_period {
        write_i32(writer.prefix("BackupRetentionPeriod"), period);
    }
    if let Some(window) = &input.preferred_backup_window {
        writer.prefix("PreferredBackupWindow").string(window);
    }
    if let Some(window) = &input.preferred_maintenance_window {
        writer.prefix("PreferredMaintenanceWindow").string(window);
    }
    if let Some(multi_az) = input.multi_az {
        writer.prefix("MultiAZ").boolean(multi_az);
    }
    if let Some(version) = &input.engine_version {
        writer.prefix("EngineVersion").string(version);
    }
    if let Some(allow) = input.allow_major_version_upgrade {
        writer.prefix("AllowMajorVersionUpgrade").boolean(allow);
    }
    if let Some(upgrade) = input.auto_minor_version_upgrade {
        writer.prefix("AutoMinorVersionUpgrade").boolean(upgrade);
    }
    if let Some(model) = &input.license_model {
        writer.prefix("LicenseModel").string(model);
    }
    if let Some(iops) = input.iops {
        write_i32(writer.prefix("Iops"), iops);
    }
    if let Some(name) = &input.option_group_name {
        writer.prefix("OptionGroupName").string(name);
    }
    if let Some(id) = &input.new_db_instance_identifier {
        writer.prefix("NewDBInstanceIdentifier").string(id);
    }
    if let Some(storage_type) = &input.storage_type {
        writer.prefix("StorageType").string(storage_type);
    }
    if let Some(arn) = &input.tde_credential_arn {
        writer.prefix("TdeCredentialArn").string(arn);
    }
    if let Some(password) = &input.tde_credential_password {
        writer.prefix("TdeCredentialPassword").string(password);
    }
    if let Some(ca) = &input.ca_certificate_identifier {
        writer.prefix("CACertificateIdentifier").string(ca);
    }
    if let Some(domain) = &input.domain {
        writer.prefix("Domain").string(domain);
    }
    if let Some(copy) = input.copy_tags_to_snapshot {
        writer.prefix("CopyTagsToSnapshot").boolean(copy);
    }
    if let Some(interval) = input.monitoring_interval {
        write_i32(writer.prefix("MonitoringInterval"), interval);
    }
    if let Some(port) = input.db_port_number {
        write_i32(writer.prefix("DBPortNumber"), port);
    }
    if let Some(public) = input.publicly_accessible {
        writer.prefix("PubliclyAccessible").boolean(public);
    }
    if let Some(arn) = &input.monitoring_role_arn {
        writer.prefix("MonitoringRoleArn").string(arn);
    }
    if let Some(role) = &input.domain_iam_role_name {
        writer.prefix("DomainIAMRoleName").string(role);
    }
    if let Some(tier) = input.promotion_tier {
        write_i32(writer.prefix("PromotionTier"), tier);
    }
    if let Some(enable) = input.enable_iam_database_authentication {
        writer
            .prefix("EnableIAMDatabaseAuthentication")
            .boolean(enable);
    }
    if let Some(enable) = input.enable_performance_insights {
        writer.prefix("EnablePerformanceInsights").boolean(enable);
    }
    if let Some(key) = &input.performance_insights_kms_key_id {
        writer.prefix("PerformanceInsightsKMSKeyId").string(key);
    }
    if let Some(period) = input.performance_insights_retention_period {
        write_i32(writer.prefix("PerformanceInsightsRetentionPeriod"), period);
    }
    if let Some(config) = &input.cloudwatch_logs_export_configuration {
        write_logs_export_configuration(
            writer.prefix("CloudwatchLogsExportConfiguration"),
            config,
        );
    }
    if let Some(features) = &input.processor_features {
        write_processor_features(writer.prefix("ProcessorFeatures"), features);
    }
    if let Some(use_default) = input.use_default_processor_features {
        writer
            .prefix("UseDefaultProcessorFeatures")
            .boolean(use_default);
    }
    if let Some(protection) = input.deletion_protection {
        writer.prefix("DeletionProtection").boolean(protection);
    }
    if let Some(max) = input.max_allocated_storage {
        write_i32(writer.prefix("MaxAllocatedStorage"), max);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_delete_db_instance(
    input: &DeleteDbInstanceInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "DeleteDBInstance", API_VERSION);
    if let Some(id) = &input.db_instance_identifier {
        writer.prefix("DBInstanceIdentifier").string(id);
    }
    if let Some(skip) = input.skip_final_snapshot {
        writer.prefix("SkipFinalSnapshot").boolean(skip);
    }
    if let Some(id) = &input.final_db_snapshot_identifier {
        writer.prefix("FinalDBSnapshotIdentifier").string(id);
    }
    if let Some(delete) = input.delete_automated_backups {
        writer.prefix("DeleteAutomatedBackups").boolean(delete);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_reboot_db_instance(
    input: &RebootDbInstanceInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "RebootDBInstance", API_VERSION);
    if let Some(id) = &input.db_instance_identifier {
        writer.prefix("DBInstanceIdentifier").string(id);
    }
    if let Some(force) = input.force_failover {
        writer.prefix("ForceFailover").boolean(force);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_start_db_instance(
    input: &StartDbInstanceInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "StartDBInstance", API_VERSION);
    if let Some(id) = &input.db_instance_identifier {
        writer.prefix("DBInstanceIdentifier").string(id);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_stop_db_instance(
    input: &StopDbInstanceInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "StopDBInstance", API_VERSION);
    if let Some(id) = &input.db_instance_identifier {
        writer.prefix("DBInstanceIdentifier").string(id);
    }
    if let Some(id) = &input.db_snapshot_identifier {
        writer.prefix("DBSnapshotIdentifier").string(id);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_restore_db_instance_from_db_snapshot(
    input: &RestoreDbInstanceFromDbSnapshotInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "RestoreDBInstanceFromDBSnapshot", API_VERSION);
    if let Some(id) = &input.db_instance_identifier {
        writer.prefix("DBInstanceIdentifier").string(id);
    }
    if let Some(id) = &input.db_snapshot_identifier {
        writer.prefix("DBSnapshotIdentifier").string(id);
    }
    if let Some(class) = &input.db_instance_class {
        writer.prefix("DBInstanceClass").string(class);
    }
    if let Some(port) = input.port {
        write_i32(writer.prefix("Port"), port);
    }
    if let Some(az) = &input.availability_zone {
        writer.prefix("AvailabilityZone").string(az);
    }
    if let Some(name) = &input.db_subnet_group_name {
        writer.prefix("DBSubnetGroupName").string(name);
    }
    if let Some(multi_az) = input.multi_az {
        writer.prefix("MultiAZ").boolean(multi_az);
    }
    if let Some(public) = input.publicly_accessible {
        writer.prefix("PubliclyAccessible").boolean(public);
    }
    if let Some(upgrade) = input.auto_minor_version_upgrade {
        writer.prefix("AutoMinorVersionUpgrade").boolean(upgrade);
    }
    if let Some(model) = &input.license_model {
        writer.prefix("LicenseModel").string(model);
    }
    if let Some(db_name) = &input.db_name {
        writer.prefix("DBName").string(db_name);
    }
    if let Some(engine) = &input.engine {
        writer.prefix("Engine").string(engine);
    }
    if let Some(iops) = input.iops {
        write_i32(writer.prefix("Iops"), iops);
    }
    if let Some(name) = &input.option_group_name {
        writer.prefix("OptionGroupName").string(name);
    }
    if let Some(tags) = &input.tags {
        write_tags(writer.prefix("Tags"), tags);
    }
    if let Some(storage_type) = &input.storage_type {
        writer.prefix("StorageType").string(storage_type);
    }
    if let Some(arn) = &input.tde_credential_arn {
        writer.prefix("TdeCredentialArn").string(arn);
    }
    if let Some(password) = &input.tde_credential_password {
        writer.prefix("TdeCredentialPassword").string(password);
    }
    if let Some(ids) = &input.vpc_security_group_ids {
        write_string_list(
            writer.prefix("VpcSecurityGroupIds"),
            ids,
            Some("VpcSecurityGroupId"),
        );
    }
    if let Some(domain) = &input.domain {
        writer.prefix("Domain").string(domain);
    }
    if let Some(copy) = input.copy_tags_to_snapshot {
        writer.prefix("CopyTagsToSnapshot").boolean(copy);
    }
    if let Some(role) = &input.domain_iam_role_name {
        writer.prefix("DomainIAMRoleName").string(role);
    }
    if let Some(enable) = input.enable_iam_database_authentication {
        writer
            .prefix("EnableIAMDatabaseAuthentication")
            .boolean(enable);
    }
    if let Some(exports) = &input.enable_cloudwatch_logs_exports {
        write_string_list(writer.prefix("EnableCloudwatchLogsExports"), exports, None);
    }
    if let Some(features) = &input.processor_features {
        write_processor_features(writer.prefix("ProcessorFeatures"), features);
    }
    if let Some(use_default) = input.use_default_processor_features {
        writer
            .prefix("UseDefaultProcessorFeatures")
            .boolean(use_default);
    }
    if let Some(name) = &input.db_parameter_group_name {
        writer.prefix("DBParameterGroupName").string(name);
    }
    if let Some(protection) = input.deletion_protection {
        writer.prefix("DeletionProtection").boolean(protection);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_restore_db_instance_from_s3(
    input: &RestoreDbInstanceFromS3Input,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "RestoreDBInstanceFromS3", API_VERSION);
    if let Some(db_name) = &input.db_name {
        writer.prefix("DBName").string(db_name);
    }
    if let Some(id) = &input.db_instance_identifier {
        writer.prefix("DBInstanceIdentifier").string(id);
    }
    if let Some(storage) = input.allocated_storage {
        write_i32(writer.prefix("AllocatedStorage"), storage);
    }
    if let Some(class) = &input.db_instance_class {
        writer.prefix("DBInstanceClass").string(class);
    }
    if let Some(engine) = &input.engine {
        writer.prefix("Engine").string(engine);
    }
    if let Some(username) = &input.master_username {
        writer.prefix("MasterUsername").string(username);
    }
    if let Some(password) = &input.master_user_password {
        writer.prefix("MasterUserPassword").string(password);
    }
    if let Some(groups) = &input.db_security_groups {
        write_string_list(
            writer.prefix("DBSecurityGroups"),
            groups,
            Some("DBSecurityGroupName"),
        );
    }
    if let Some(ids) = &input.vpc_security_group_ids {
        write_string_list(
            writer.prefix("VpcSecurityGroupIds"),
            ids,
            Some("VpcSecurityGroupId"),
        );
    }
    if let Some(az) = &input.availability_zone {
        writer.prefix("AvailabilityZone").string(az);
    }
    if let Some(name) = &input.db_subnet_group_name {
        writer.prefix("DBSubnetGroupName").string(name);
    }
    if let Some(window) = &input.preferred_maintenance_window {
        writer.prefix("PreferredMaintenanceWindow").string(window);
    }
    if let Some(name) = &input.db_parameter_group_name {
        writer.prefix("DBParameterGroupName").string(name);
    }
    if let Some(period) = input.backup_retention_period {
        write_i32(writer.prefix("BackupRetentionPeriod"), period);
    }
    if let Some(window) = &input.preferred_backup_window {
        writer.prefix("PreferredBackupWindow").string(window);
    }
    if let Some(port) = input.port {
        write_i32(writer.prefix("Port"), port);
    }
    if let Some(multi_az) = input.multi_az {
        writer.prefix("MultiAZ").boolean(multi_az);
    }
    if let Some(version) = &input.engine_version {
        writer.prefix("EngineVersion").string(version);
    }
    if let Some(upgrade) = input.auto_minor_version_upgrade {
        writer.prefix("AutoMinorVersionUpgrade").boolean(upgrade);
    }
    if let Some(model) = &input.license_model {
        writer.prefix("LicenseModel").string(model);
    }
    if let Some(iops) = input.iops {
        write_i32(writer.prefix("Iops"), iops);
    }
    if let Some(name) = &input.option_group_name {
        writer.prefix("OptionGroupName").string(name);
    }
    if let Some(public) = input.publicly_accessible {
        writer.prefix("PubliclyAccessible").boolean(public);
    }
    if let Some(tags) = &input.tags {
        write_tags(writer.prefix("Tags"), tags);
    }
    if let Some(storage_type) = &input.storage_type {
        writer.prefix("StorageType").string(storage_type);
    }
    if let Some(encrypted) = input.storage_encrypted {
        writer.prefix("StorageEncrypted").boolean(encrypted);
    }
    if let Some(key) = &input.kms_key_id {
        writer.prefix("KmsKeyId").string(key);
    }
    if let Some(copy) = input.copy_tags_to_snapshot {
        writer.prefix("CopyTagsToSnapshot").boolean(copy);
    }
    if let Some(interval) = input.monitoring_interval {
        write_i32(writer.prefix("MonitoringInterval"), interval);
    }
    if let Some(arn) = &input.monitoring_role_arn {
        writer.prefix("MonitoringRoleArn").string(arn);
    }
    if let Some(enable) = input.enable_iam_database_authentication {
        writer
            .prefix("EnableIAMDatabaseAuthentication")
            .boolean(enable);
    }
    if let Some(engine) = &input.source_engine {
        writer.prefix("SourceEngine").string(engine);
    }
    if let Some(version) = &input.source_engine_version {
        writer.prefix("SourceEngineVersion").string(version);
    }
    if let Some(bucket) = &input.s3_bucket_name {
        writer.prefix("S3BucketName").string(bucket);
    }
    if let Some(prefix) = &input.s3_prefix {
        writer.prefix("S3Prefix").string(prefix);
    }
    if let Some(arn) = &input.s3_ingestion_role_arn {
        writer.prefix("S3IngestionRoleArn").string(arn);
    }
    if let Some(enable) = input.enable_performance_insights {
        writer.prefix("EnablePerformanceInsights").boolean(enable);
    }
    if let Some(key) = &input.performance_insights_kms_key_id {
        writer.prefix("PerformanceInsightsKMSKeyId").string(key);
    }
    if let Some(period) = input.performance_insights_retention_period {
        write_i32(writer.prefix("PerformanceInsightsRetentionPeriod"), period);
    }
    if let Some(exports) = &input.enable_cloudwatch_logs_exports {
        write_string_list(writer.prefix("EnableCloudwatchLogsExports"), exports, None);
    }
    if let Some(features) = &input.processor_features {
        write_processor_features(writer.prefix("ProcessorFeatures"), features);
    }
    if let Some(use_default) = input.use_default_processor_features {
        writer
            .prefix("UseDefaultProcessorFeatures")
            .boolean(use_default);
    }
    if let Some(protection) = input.deletion_protection {
        writer.prefix("DeletionProtection").boolean(protection);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_create_db_cluster(
    input: &CreateDbClusterInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "CreateDBCluster", API_VERSION);
    if let Some(zones) = &input.availability_zones {
        write_string_list(
            writer.prefix("AvailabilityZones"),
            zones,
            Some("AvailabilityZone"),
        );
    }
    if let Some(period) = input.backup_retention_period {
        write_i32(writer.prefix("BackupRetentionPeriod"), period);
    }
    if let Some(charset) = &input.character_set_name {
        writer.prefix("CharacterSetName").string(charset);
    }
    if let Some(name) = &input.database_name {
        writer.prefix("DatabaseName").string(name);
    }
    if let Some(id) = &input.db_cluster_identifier {
        writer.prefix("DBClusterIdentifier").string(id);
    }
    if let Some(name) = &input.db_cluster_parameter_group_name {
        writer.prefix("DBClusterParameterGroupName").string(name);
    }
    if let Some(ids) = &input.vpc_security_group_ids {
        write_string_list(
            writer.prefix("VpcSecurityGroupIds"),
            ids,
            Some("VpcSecurityGroupId"),
        );
    }
    if let Some(name) = &input.db_subnet_group_name {
        writer.prefix("DBSubnetGroupName").string(name);
    }
    if let Some(engine) = &input.engine {
        writer.prefix("Engine").string(engine);
    }
    if let Some(version) = &input.engine_version {
        writer.prefix("EngineVersion").string(version);
    }
    if let Some(port) = input.port {
        write_i32(writer.prefix("Port"), port);
    }
    if let Some(username) = &input.master_username {
        writer.prefix("MasterUsername").string(username);
    }
    if let Some(password) = &input.master_user_password {
        writer.prefix("MasterUserPassword").string(password);
    }
    if let Some(name) = &input.option_group_name {
        writer.prefix("OptionGroupName").string(name);
    }
    if let Some(window) = &input.preferred_backup_window {
        writer.prefix("PreferredBackupWindow").string(window);
    }
    if let Some(window) = &input.preferred_maintenance_window {
        writer.prefix("PreferredMaintenanceWindow").string(window);
    }
    if let Some(id) = &input.replication_source_identifier {
        writer.prefix("ReplicationSourceIdentifier").string(id);
    }
    if let Some(tags) = &input.tags {
        write_tags(writer.prefix("Tags"), tags);
    }
    if let Some(encrypted) = input.storage_encrypted {
        writer.prefix("StorageEncrypted").boolean(encrypted);
    }
    if let Some(key) = &input.kms_key_id {
        writer.prefix("KmsKeyId").string(key);
    }
    if let Some(url) = &input.pre_signed_url {
        writer.prefix("PreSignedUrl").string(url);
    }
    if let Some(enable) = input.enable_iam_database_authentication {
        writer
            .prefix("EnableIAMDatabaseAuthentication")
            .boolean(enable);
    }
    if let Some(window) = input.backtrack_window {
        write_i64(writer.prefix("BacktrackWindow"), window);
    }
    if let Some(exports) = &input.enable_cloudwatch_logs_exports {
        write_string_list(writer.prefix("EnableCloudwatchLogsExports"), exports, None);
    }
    if let Some(mode) = &input.engine_mode {
        writer.prefix("EngineMode").string(mode);
    }
    if let Some(config) = &input.scaling_configuration {
        write_scaling_configuration(writer.prefix("ScalingConfiguration"), config);
    }
    if let Some(protection) = input.deletion_protection {
        writer.prefix("DeletionProtection").boolean(protection);
    }
    if let Some(id) = &input.global_cluster_identifier {
        writer.prefix("GlobalClusterIdentifier").string(id);
    }
    if let Some(enable) = input.enable_http_endpoint {
        writer.prefix("EnableHttpEndpoint").boolean(enable);
    }
    if let Some(copy) = input.copy_tags_to_snapshot {
        writer.prefix("CopyTagsToSnapshot").boolean(copy);
    }
    if let Some(domain) = &input.domain {
        writer.prefix("Domain").string(domain);
    }
    if let Some(role) = &input.domain_iam_role_name {
        writer.prefix("DomainIAMRoleName").string(role);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_modify_db_cluster(
    input: &ModifyDbClusterInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "ModifyDBCluster", API_VERSION);
    if let Some(id) = &input.db_cluster_identifier {
        writer.prefix("DBClusterIdentifier").string(id);
    }
    if let Some(id) = &input.new_db_cluster_identifier {
        writer.prefix("NewDBClusterIdentifier").string(id);
    }
    if let Some(apply) = input.apply_immediately {
        writer.prefix("ApplyImmediately").boolean(apply);
    }
    if let Some(period) = input.backup_retention_period {
        write_i32(writer.prefix("BackupRetentionPeriod"), period);
    }
    if let Some(name) = &input.db_cluster_parameter_group_name {
        writer.prefix("DBClusterParameterGroupName").string(name);
    }
    if let Some(ids) = &input.vpc_security_group_ids {
        write_string_list(
            writer.prefix("VpcSecurityGroupIds"),
            ids,
            Some("VpcSecurityGroupId"),
        );
    }
    if let Some(port) = input.port {
        write_i32(writer.prefix("Port"), port);
    }
    if let Some(password) = &input.master_user_password {
        writer.prefix("MasterUserPassword").string(password);
    }
    if let Some(name) = &input.option_group_name {
        writer.prefix("OptionGroupName").string(name);
    }
    if let Some(window) = &input.preferred_backup_window {
        writer.prefix("PreferredBackupWindow").string(window);
    }
    if let Some(window) = &input.preferred_maintenance_window {
        writer.prefix("PreferredMaintenanceWindow").string(window);
    }
    if let Some(enable) = input.enable_iam_database_authentication {
        writer
            .prefix("EnableIAMDatabaseAuthentication")
            .boolean(enable);
    }
    if let Some(window) = input.backtrack_window {
        write_i64(writer.prefix("BacktrackWindow"), window);
    }
    if let Some(config) = &input.cloudwatch_logs_export_configuration {
        write_logs_export_configuration(
            writer.prefix("CloudwatchLogsExportConfiguration"),
            config,
        );
    }
    if let Some(version) = &input.engine_version {
        writer.prefix("EngineVersion").string(version);
    }
    if let Some(allow) = input.allow_major_version_upgrade {
        writer.prefix("AllowMajorVersionUpgrade").boolean(allow);
    }
    if let Some(name) = &input.db_instance_parameter_group_name {
        writer.prefix("DBInstanceParameterGroupName").string(name);
    }
    if let Some(domain) = &input.domain {
        writer.prefix("Domain").string(domain);
    }
    if let Some(role) = &input.domain_iam_role_name {
        writer.prefix("DomainIAMRoleName").string(role);
    }
    if let Some(config) = &input.scaling_configuration {
        write_scaling_configuration(writer.prefix("ScalingConfiguration"), config);
    }
    if let Some(protection) = input.deletion_protection {
        writer.prefix("DeletionProtection").boolean(protection);
    }
    if let Some(enable) = input.enable_http_endpoint {
        writer.prefix("EnableHttpEndpoint").boolean(enable);
    }
    if let Some(copy) = input.copy_tags_to_snapshot {
        writer.prefix("CopyTagsToSnapshot").boolean(copy);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_delete_db_cluster(
    input: &DeleteDbClusterInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "DeleteDBCluster", API_VERSION);
    if let Some(id) = &input.db_cluster_identifier {
        writer.prefix("DBClusterIdentifier").string(id);
    }
    if let Some(skip) = input.skip_final_snapshot {
        writer.prefix("SkipFinalSnapshot").boolean(skip);
    }
    if let Some(id) = &input.final_db_snapshot_identifier {
        writer.prefix("FinalDBSnapshotIdentifier").string(id);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_restore_db_cluster_from_snapshot(
    input: &RestoreDbClusterFromSnapshotInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "RestoreDBClusterFromSnapshot", API_VERSION);
    if let Some(zones) = &input.availability_zones {
        write_string_list(
            writer.prefix("AvailabilityZones"),
            zones,
            Some("AvailabilityZone"),
        );
    }
    if let Some(id) = &input.db_cluster_identifier {
        writer.prefix("DBClusterIdentifier").string(id);
    }
    if let Some(id) = &input.snapshot_identifier {
        writer.prefix("SnapshotIdentifier").string(id);
    }
    if let Some(engine) = &input.engine {
        writer.prefix("Engine").string(engine);
    }
    if let Some(version) = &input.engine_version {
        writer.prefix("EngineVersion").string(version);
    }
    if let Some(port) = input.port {
        write_i32(writer.prefix("Port"), port);
    }
    if let Some(name) = &input.db_subnet_group_name {
        writer.prefix("DBSubnetGroupName").string(name);
    }
    if let Some(name) = &input.database_name {
        writer.prefix("DatabaseName").string(name);
    }
    if let Some(name) = &input.option_group_name {
        writer.prefix("OptionGroupName").string(name);
    }
    if let Some(ids) = &input.vpc_security_group_ids {
        write_string_list(
            writer.prefix("VpcSecurityGroupIds"),
            ids,
            Some("VpcSecurityGroupId"),
        );
    }
    if let Some(tags) = &input.tags {
        write_tags(writer.prefix("Tags"), tags);
    }
    if let Some(key) = &input.kms_key_id {
        writer.prefix("KmsKeyId").string(key);
    }
    if let Some(enable) = input.enable_iam_database_authentication {
        writer
            .prefix("EnableIAMDatabaseAuthentication")
            .boolean(enable);
    }
    if let Some(window) = input.backtrack_window {
        write_i64(writer.prefix("BacktrackWindow"), window);
    }
    if let Some(exports) = &input.enable_cloudwatch_logs_exports {
        write_string_list(writer.prefix("EnableCloudwatchLogsExports"), exports, None);
    }
    if let Some(mode) = &input.engine_mode {
        writer.prefix("EngineMode").string(mode);
    }
    if let Some(config) = &input.scaling_configuration {
        write_scaling_configuration(writer.prefix("ScalingConfiguration"), config);
    }
    if let Some(name) = &input.db_cluster_parameter_group_name {
        writer.prefix("DBClusterParameterGroupName").string(name);
    }
    if let Some(protection) = input.deletion_protection {
        writer.prefix("DeletionProtection").boolean(protection);
    }
    if let Some(copy) = input.copy_tags_to_snapshot {
        writer.prefix("CopyTagsToSnapshot").boolean(copy);
    }
    if let Some(domain) = &input.domain {
        writer.prefix("Domain").string(domain);
    }
    if let Some(role) = &input.domain_iam_role_name {
        writer.prefix("DomainIAMRoleName").string(role);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_restore_db_cluster_from_s3(
    input: &RestoreDbClusterFromS3Input,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "RestoreDBClusterFromS3", API_VERSION);
    if let Some(zones) = &input.availability_zones {
        write_string_list(
            writer.prefix("AvailabilityZones"),
            zones,
            Some("AvailabilityZone"),
        );
    }
    if let Some(period) = input.backup_retention_period {
        write_i32(writer.prefix("BackupRetentionPeriod"), period);
    }
    if let Some(charset) = &input.character_set_name {
        writer.prefix("CharacterSetName").string(charset);
    }
    if let Some(name) = &input.database_name {
        writer.prefix("DatabaseName").string(name);
    }
    if let Some(id) = &input.db_cluster_identifier {
        writer.prefix("DBClusterIdentifier").string(id);
    }
    if let Some(name) = &input.db_cluster_parameter_group_name {
        writer.prefix("DBClusterParameterGroupName").string(name);
    }
    if let Some(ids) = &input.vpc_security_group_ids {
        write_string_list(
            writer.prefix("VpcSecurityGroupIds"),
            ids,
            Some("VpcSecurityGroupId"),
        );
    }
    if let Some(name) = &input.db_subnet_group_name {
        writer.prefix("DBSubnetGroupName").string(name);
    }
    if let Some(engine) = &input.engine {
        writer.prefix("Engine").string(engine);
    }
    if let Some(version) = &input.engine_version {
        writer.prefix("EngineVersion").string(version);
    }
    if let Some(port) = input.port {
        write_i32(writer.prefix("Port"), port);
    }
    if let Some(username) = &input.master_username {
        writer.prefix("MasterUsername").string(username);
    }
    if let Some(password) = &input.master_user_password {
        writer.prefix("MasterUserPassword").string(password);
    }
    if let Some(name) = &input.option_group_name {
        writer.prefix("OptionGroupName").string(name);
    }
    if let Some(window) = &input.preferred_backup_window {
        writer.prefix("PreferredBackupWindow").string(window);
    }
    if let Some(window) = &input.preferred_maintenance_window {
        writer.prefix("PreferredMaintenanceWindow").string(window);
    }
    if let Some(tags) = &input.tags {
        write_tags(writer.prefix("Tags"), tags);
    }
    if let Some(encrypted) = input.storage_encrypted {
        writer.prefix("StorageEncrypted").boolean(encrypted);
    }
    if let Some(key) = &input.kms_key_id {
        writer.prefix("KmsKeyId").string(key);
    }
    if let Some(enable) = input.enable_iam_database_authentication {
        writer
            .prefix("EnableIAMDatabaseAuthentication")
            .boolean(enable);
    }
    if let Some(engine) = &input.source_engine {
        writer.prefix("SourceEngine").string(engine);
    }
    if let Some(version) = &input.source_engine_version {
        writer.prefix("SourceEngineVersion").string(version);
    }
    if let Some(bucket) = &input.s3_bucket_name {
        writer.prefix("S3BucketName").string(bucket);
    }
    if let Some(prefix) = &input.s3_prefix {
        writer.prefix("S3Prefix").string(prefix);
    }
    if let Some(arn) = &input.s3_ingestion_role_arn {
        writer.prefix("S3IngestionRoleArn").string(arn);
    }
    if let Some(window) = input.backtrack_window {
        write_i64(writer.prefix("BacktrackWindow"), window);
    }
    if let Some(exports) = &input.enable_cloudwatch_logs_exports {
        write_string_list(writer.prefix("EnableCloudwatchLogsExports"), exports, None);
    }
    if let Some(protection) = input.deletion_protection {
        writer.prefix("DeletionProtection").boolean(protection);
    }
    if let Some(copy) = input.copy_tags_to_snapshot {
        writer.prefix("CopyTagsToSnapshot").boolean(copy);
    }
    if let Some(domain) = &input.domain {
        writer.prefix("Domain").string(domain);
    }
    if let Some(role) = &input.domain_iam_role_name {
        writer.prefix("DomainIAMRoleName").string(role);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_restore_db_cluster_to_point_in_time(
    input: &RestoreDbClusterToPointInTimeInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "RestoreDBClusterToPointInTime", API_VERSION);
    if let Some(id) = &input.db_cluster_identifier {
        writer.prefix("DBClusterIdentifier").string(id);
    }
    if let Some(restore_type) = &input.restore_type {
        writer.prefix("RestoreType").string(restore_type);
    }
    if let Some(id) = &input.source_db_cluster_identifier {
        writer.prefix("SourceDBClusterIdentifier").string(id);
    }
    if let Some(time) = &input.restore_to_time {
        writer
            .prefix("RestoreToTime")
            .date_time(time, Format::DateTime)?;
    }
    if let Some(latest) = input.use_latest_restorable_time {
        writer.prefix("UseLatestRestorableTime").boolean(latest);
    }
    if let Some(port) = input.port {
        write_i32(writer.prefix("Port"), port);
    }
    if let Some(name) = &input.db_subnet_group_name {
        writer.prefix("DBSubnetGroupName").string(name);
    }
    if let Some(name) = &input.option_group_name {
        writer.prefix("OptionGroupName").string(name);
    }
    if let Some(ids) = &input.vpc_security_group_ids {
        write_string_list(
            writer.prefix("VpcSecurityGroupIds"),
            ids,
            Some("VpcSecurityGroupId"),
        );
    }
    if let Some(tags) = &input.tags {
        write_tags(writer.prefix("Tags"), tags);
    }
    if let Some(key) = &input.kms_key_id {
        writer.prefix("KmsKeyId").string(key);
    }
    if let Some(enable) = input.enable_iam_database_authentication {
        writer
            .prefix("EnableIAMDatabaseAuthentication")
            .boolean(enable);
    }
    if let Some(window) = input.backtrack_window {
        write_i64(writer.prefix("BacktrackWindow"), window);
    }
    if let Some(exports) = &input.enable_cloudwatch_logs_exports {
        write_string_list(writer.prefix("EnableCloudwatchLogsExports"), exports, None);
    }
    if let Some(name) = &input.db_cluster_parameter_group_name {
        writer.prefix("DBClusterParameterGroupName").string(name);
    }
    if let Some(protection) = input.deletion_protection {
        writer.prefix("DeletionProtection").boolean(protection);
    }
    if let Some(copy) = input.copy_tags_to_snapshot {
        writer.prefix("CopyTagsToSnapshot").boolean(copy);
    }
    if let Some(domain) = &input.domain {
        writer.prefix("Domain").string(domain);
    }
    if let Some(role) = &input.domain_iam_role_name {
        writer.prefix("DomainIAMRoleName").string(role);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_create_db_snapshot(
    input: &CreateDbSnapshotInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "CreateDBSnapshot", API_VERSION);
    if let Some(id) = &input.db_snapshot_identifier {
        writer.prefix("DBSnapshotIdentifier").string(id);
    }
    if let Some(id) = &input.db_instance_identifier {
        writer.prefix("DBInstanceIdentifier").string(id);
    }
    if let Some(tags) = &input.tags {
        write_tags(writer.prefix("Tags"), tags);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_delete_db_snapshot(
    input: &DeleteDbSnapshotInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "DeleteDBSnapshot", API_VERSION);
    if let Some(id) = &input.db_snapshot_identifier {
        writer.prefix("DBSnapshotIdentifier").string(id);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_describe_db_snapshots(
    input: &DescribeDbSnapshotsInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "DescribeDBSnapshots", API_VERSION);
    if let Some(id) = &input.db_instance_identifier {
        writer.prefix("DBInstanceIdentifier").string(id);
    }
    if let Some(id) = &input.db_snapshot_identifier {
        writer.prefix("DBSnapshotIdentifier").string(id);
    }
    if let Some(snapshot_type) = &input.snapshot_type {
        writer.prefix("SnapshotType").string(snapshot_type);
    }
    if let Some(filters) = &input.filters {
        write_filters(writer.prefix("Filters"), filters);
    }
    if let Some(max_records) = input.max_records {
        write_i32(writer.prefix("MaxRecords"), max_records);
    }
    if let Some(marker) = &input.marker {
        writer.prefix("Marker").string(marker);
    }
    if let Some(shared) = input.include_shared {
        writer.prefix("IncludeShared").boolean(shared);
    }
    if let Some(public) = input.include_public {
        writer.prefix("IncludePublic").boolean(public);
    }
    if let Some(id) = &input.dbi_resource_id {
        writer.prefix("DbiResourceId").string(id);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_create_db_cluster_snapshot(
    input: &CreateDbClusterSnapshotInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "CreateDBClusterSnapshot", API_VERSION);
    if let Some(id) = &input.db_cluster_snapshot_identifier {
        writer.prefix("DBClusterSnapshotIdentifier").string(id);
    }
    if let Some(id) = &input.db_cluster_identifier {
        writer.prefix("DBClusterIdentifier").string(id);
    }
    if let Some(tags) = &input.tags {
        write_tags(writer.prefix("Tags"), tags);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_copy_db_cluster_snapshot(
    input: &CopyDbClusterSnapshotInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "CopyDBClusterSnapshot", API_VERSION);
    if let Some(id) = &input.source_db_cluster_snapshot_identifier {
        writer
            .prefix("SourceDBClusterSnapshotIdentifier")
            .string(id);
    }
    if let Some(id) = &input.target_db_cluster_snapshot_identifier {
        writer
            .prefix("TargetDBClusterSnapshotIdentifier")
            .string(id);
    }
    if let Some(key) = &input.kms_key_id {
        writer.prefix("KmsKeyId").string(key);
    }
    if let Some(url) = &input.pre_signed_url {
        writer.prefix("PreSignedUrl").string(url);
    }
    if let Some(copy) = input.copy_tags {
        writer.prefix("CopyTags").boolean(copy);
    }
    if let Some(tags) = &input.tags {
        write_tags(writer.prefix("Tags"), tags);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_delete_db_cluster_snapshot(
    input: &DeleteDbClusterSnapshotInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "DeleteDBClusterSnapshot", API_VERSION);
    if let Some(id) = &input.db_cluster_snapshot_identifier {
        writer.prefix("DBClusterSnapshotIdentifier").string(id);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_describe_db_cluster_snapshots(
    input: &DescribeDbClusterSnapshotsInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "DescribeDBClusterSnapshots", API_VERSION);
    if let Some(id) = &input.db_cluster_identifier {
        writer.prefix("DBClusterIdentifier").string(id);
    }
    if let Some(id) = &input.db_cluster_snapshot_identifier {
        writer.prefix("DBClusterSnapshotIdentifier").string(id);
    }
    if let Some(snapshot_type) = &input.snapshot_type {
        writer.prefix("SnapshotType").string(snapshot_type);
    }
    if let Some(filters) = &input.filters {
        write_filters(writer.prefix("Filters"), filters);
    }
    if let Some(max_records) = input.max_records {
        write_i32(writer.prefix("MaxRecords"), max_records);
    }
    if let Some(marker) = &input.marker {
        writer.prefix("Marker").string(marker);
    }
    if let Some(shared) = input.include_shared {
        writer.prefix("IncludeShared").boolean(shared);
    }
    if let Some(public) = input.include_public {
        writer.prefix("IncludePublic").boolean(public);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_create_db_cluster_endpoint(
    input: &CreateDbClusterEndpointInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "CreateDBClusterEndpoint", API_VERSION);
    if let Some(id) = &input.db_cluster_identifier {
        writer.prefix("DBClusterIdentifier").string(id);
    }
    if let Some(id) = &input.db_cluster_endpoint_identifier {
        writer.prefix("DBClusterEndpointIdentifier").string(id);
    }
    if let Some(endpoint_type) = &input.endpoint_type {
        writer.prefix("EndpointType").string(endpoint_type);
    }
    if let Some(members) = &input.static_members {
        write_string_list(writer.prefix("StaticMembers"), members, None);
    }
    if let Some(members) = &input.excluded_members {
        write_string_list(writer.prefix("ExcludedMembers"), members, None);
    }
    if let Some(tags) = &input.tags {
        write_tags(writer.prefix("Tags"), tags);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_describe_db_cluster_endpoints(
    input: &DescribeDbClusterEndpointsInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "DescribeDBClusterEndpoints", API_VERSION);
    if let Some(id) = &input.db_cluster_identifier {
        writer.prefix("DBClusterIdentifier").string(id);
    }
    if let Some(id) = &input.db_cluster_endpoint_identifier {
        writer.prefix("DBClusterEndpointIdentifier").string(id);
    }
    if let Some(filters) = &input.filters {
        write_filters(writer.prefix("Filters"), filters);
    }
    if let Some(max_records) = input.max_records {
        write_i32(writer.prefix("MaxRecords"), max_records);
    }
    if let Some(marker) = &input.marker {
        writer.prefix("Marker").string(marker);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_modify_db_cluster_endpoint(
    input: &ModifyDbClusterEndpointInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "ModifyDBClusterEndpoint", API_VERSION);
    if let Some(id) = &input.db_cluster_endpoint_identifier {
        writer.prefix("DBClusterEndpointIdentifier").string(id);
    }
    if let Some(endpoint_type) = &input.endpoint_type {
        writer.prefix("EndpointType").string(endpoint_type);
    }
    if let Some(members) = &input.static_members {
        write_string_list(writer.prefix("StaticMembers"), members, None);
    }
    if let Some(members) = &input.excluded_members {
        write_string_list(writer.prefix("ExcludedMembers"), members, None);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_delete_db_cluster_endpoint(
    input: &DeleteDbClusterEndpointInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "DeleteDBClusterEndpoint", API_VERSION);
    if let Some(id) = &input.db_cluster_endpoint_identifier {
        writer.prefix("DBClusterEndpointIdentifier").string(id);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_describe_orderable_db_instance_options(
    input: &DescribeOrderableDbInstanceOptionsInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "DescribeOrderableDBInstanceOptions", API_VERSION);
    if let Some(engine) = &input.engine {
        writer.prefix("Engine").string(engine);
    }
    if let Some(version) = &input.engine_version {
        writer.prefix("EngineVersion").string(version);
    }
    if let Some(class) = &input.db_instance_class {
        writer.prefix("DBInstanceClass").string(class);
    }
    if let Some(model) = &input.license_model {
        writer.prefix("LicenseModel").string(model);
    }
    if let Some(vpc) = input.vpc {
        writer.prefix("Vpc").boolean(vpc);
    }
    if let Some(filters) = &input.filters {
        write_filters(writer.prefix("Filters"), filters);
    }
    if let Some(max_records) = input.max_records {
        write_i32(writer.prefix("MaxRecords"), max_records);
    }
    if let Some(marker) = &input.marker {
        writer.prefix("Marker").string(marker);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_describe_valid_db_instance_modifications(
    input: &DescribeValidDbInstanceModificationsInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "DescribeValidDBInstanceModifications", API_VERSION);
    if let Some(id) = &input.db_instance_identifier {
        writer.prefix("DBInstanceIdentifier").string(id);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_describe_db_security_groups(
    input: &DescribeDbSecurityGroupsInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "DescribeDBSecurityGroups", API_VERSION);
    if let Some(name) = &input.db_security_group_name {
        writer.prefix("DBSecurityGroupName").string(name);
    }
    if let Some(filters) = &input.filters {
        write_filters(writer.prefix("Filters"), filters);
    }
    if let Some(max_records) = input.max_records {
        write_i32(writer.prefix("MaxRecords"), max_records);
    }
    if let Some(marker) = &input.marker {
        writer.prefix("Marker").string(marker);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_describe_db_proxy_targets(
    input: &DescribeDbProxyTargetsInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "DescribeDBProxyTargets", API_VERSION);
    if let Some(name) = &input.db_proxy_name {
        writer.prefix("DBProxyName").string(name);
    }
    if let Some(name) = &input.target_group_name {
        writer.prefix("TargetGroupName").string(name);
    }
    if let Some(filters) = &input.filters {
        write_filters(writer.prefix("Filters"), filters);
    }
    if let Some(marker) = &input.marker {
        writer.prefix("Marker").string(marker);
    }
    if let Some(max_records) = input.max_records {
        write_i32(writer.prefix("MaxRecords"), max_records);
    }
    writer.finish();
    Ok(out)
}

pub(crate) fn serialize_describe_custom_availability_zones(
    input: &DescribeCustomAvailabilityZonesInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, "DescribeCustomAvailabilityZones", API_VERSION);
    if let Some(id) = &input.custom_availability_zone_id {
        writer.prefix("CustomAvailabilityZoneId").string(id);
    }
    if let Some(filters) = &input.filters {
        write_filters(writer.prefix("Filters"), filters);
    }
    if let Some(max_records) = input.max_records {
        write_i32(writer.prefix("MaxRecords"), max_records);
    }
    if let Some(marker) = &input.marker {
        writer.prefix("Marker").string(marker);
    }
    writer.finish();
    Ok(out)
}
