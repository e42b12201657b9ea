/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Modeled service faults and per-operation error types.
//!
//! Every operation has an error type with a `kind` enum listing the faults
//! the service documents for it, plus an `Unhandled` fallback that keeps the
//! raw error metadata so no information is dropped for codes this crate does
//! not model. Faults themselves carry only a message, mirroring the wire
//! shape of the Query error envelope.

use aws_smithy_types::error::metadata::{ErrorMetadata, ProvideErrorMetadata};

/// Stamps out a message-only service fault with its wire error code.
macro_rules! service_fault {
    ($(#[$docs:meta])* $name:ident, $code:literal) => {
        $(#[$docs])*
        #[derive(Clone, Debug, Default, PartialEq)]
        #[non_exhaustive]
        pub struct $name {
            /// Message returned by the service.
            pub message: Option<String>,
        }

        impl $name {
            /// Wire error code of this fault.
            pub const CODE: &'static str = $code;

            pub(crate) fn with_message(message: Option<&str>) -> Self {
                Self {
                    message: message.map(str::to_owned),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", Self::CODE)?;
                if let Some(message) = &self.message {
                    write!(f, ": {}", message)?;
                }
                Ok(())
            }
        }

        impl std::error::Error for $name {}
    };
}

service_fault!(
    /// No DB instance with the given identifier exists.
    DbInstanceNotFoundFault, "DBInstanceNotFound");
service_fault!(
    /// A DB instance with the given identifier already exists.
    DbInstanceAlreadyExistsFault, "DBInstanceAlreadyExists");
service_fault!(
    /// The DB instance is not in a state the operation can run in.
    InvalidDbInstanceStateFault, "InvalidDBInstanceState");
service_fault!(
    /// No DB cluster with the given identifier exists.
    DbClusterNotFoundFault, "DBClusterNotFoundFault");
service_fault!(
    /// A DB cluster with the given identifier already exists.
    DbClusterAlreadyExistsFault, "DBClusterAlreadyExistsFault");
service_fault!(
    /// The DB cluster is not in a state the operation can run in.
    InvalidDbClusterStateFault, "InvalidDBClusterStateFault");
service_fault!(
    /// The account has reached its DB cluster quota.
    DbClusterQuotaExceededFault, "DBClusterQuotaExceededFault");
service_fault!(
    /// No DB snapshot with the given identifier exists.
    DbSnapshotNotFoundFault, "DBSnapshotNotFound");
service_fault!(
    /// A DB snapshot with the given identifier already exists.
    DbSnapshotAlreadyExistsFault, "DBSnapshotAlreadyExists");
service_fault!(
    /// The DB snapshot is not in a state the operation can run in.
    InvalidDbSnapshotStateFault, "InvalidDBSnapshotState");
service_fault!(
    /// No DB cluster snapshot with the given identifier exists.
    DbClusterSnapshotNotFoundFault, "DBClusterSnapshotNotFoundFault");
service_fault!(
    /// A DB cluster snapshot with the given identifier already exists.
    DbClusterSnapshotAlreadyExistsFault, "DBClusterSnapshotAlreadyExistsFault");
service_fault!(
    /// The DB cluster snapshot is not in a state the operation can run in.
    InvalidDbClusterSnapshotStateFault, "InvalidDBClusterSnapshotStateFault");
service_fault!(
    /// The account has reached its snapshot quota.
    SnapshotQuotaExceededFault, "SnapshotQuotaExceeded");
service_fault!(
    /// The account has reached its quota of shared snapshots.
    SharedSnapshotQuotaExceededFault, "SharedSnapshotQuotaExceeded");
service_fault!(
    /// The account has reached its DB instance quota.
    InstanceQuotaExceededFault, "InstanceQuotaExceeded");
service_fault!(
    /// The account has reached its allocated-storage quota.
    StorageQuotaExceededFault, "StorageQuotaExceeded");
service_fault!(
    /// The requested instance class is not available in the requested
    /// Availability Zone.
    InsufficientDbInstanceCapacityFault, "InsufficientDBInstanceCapacity");
service_fault!(
    /// The DB cluster does not have enough capacity for the operation.
    InsufficientDbClusterCapacityFault, "InsufficientDBClusterCapacityFault");
service_fault!(
    /// The cluster does not have enough storage capacity for the operation.
    InsufficientStorageClusterCapacityFault, "InsufficientStorageClusterCapacity");
service_fault!(
    /// No DB security group with the given name exists.
    DbSecurityGroupNotFoundFault, "DBSecurityGroupNotFound");
service_fault!(
    /// No DB subnet group with the given name exists.
    DbSubnetGroupNotFoundFault, "DBSubnetGroupNotFoundFault");
service_fault!(
    /// The subnet group does not cover enough Availability Zones.
    DbSubnetGroupDoesNotCoverEnoughAZs, "DBSubnetGroupDoesNotCoverEnoughAZs");
service_fault!(
    /// No DB parameter group with the given name exists.
    DbParameterGroupNotFoundFault, "DBParameterGroupNotFound");
service_fault!(
    /// No DB cluster parameter group with the given name exists.
    DbClusterParameterGroupNotFoundFault, "DBClusterParameterGroupNotFound");
service_fault!(
    /// No option group with the given name exists.
    OptionGroupNotFoundFault, "OptionGroupNotFoundFault");
service_fault!(
    /// The VPC is not in a valid state for the operation.
    InvalidVpcNetworkStateFault, "InvalidVPCNetworkStateFault");
service_fault!(
    /// The requested subnet is invalid, or multiple subnets share an
    /// Availability Zone.
    InvalidSubnet, "InvalidSubnet");
service_fault!(
    /// The KMS key is not accessible to RDS.
    KmsKeyNotAccessibleFault, "KMSKeyNotAccessibleFault");
service_fault!(
    /// The requested storage type is not supported for this configuration.
    StorageTypeNotSupportedFault, "StorageTypeNotSupported");
service_fault!(
    /// The referenced CIDR or EC2 security group authorization does not
    /// exist.
    AuthorizationNotFoundFault, "AuthorizationNotFound");
service_fault!(
    /// Provisioned IOPS are not available in the requested Availability
    /// Zone.
    ProvisionedIopsNotAvailableInAzFault, "ProvisionedIopsNotAvailableInAZFault");
service_fault!(
    /// No Active Directory domain with the given identifier exists.
    DomainNotFoundFault, "DomainNotFoundFault");
service_fault!(
    /// The upgrade failed because a resource the instance depends on could
    /// not be modified.
    DbUpgradeDependencyFailureFault, "DBUpgradeDependencyFailure");
service_fault!(
    /// No CA certificate with the given identifier exists.
    CertificateNotFoundFault, "CertificateNotFound");
service_fault!(
    /// The restore cannot be performed as requested.
    InvalidRestoreFault, "InvalidRestoreFault");
service_fault!(
    /// Point-in-time restore is not enabled for the source.
    PointInTimeRestoreNotEnabledFault, "PointInTimeRestoreNotEnabled");
service_fault!(
    /// The S3 bucket is missing or not accessible with the provided role.
    InvalidS3BucketFault, "InvalidS3BucketFault");
service_fault!(
    /// The account has reached its quota of automated backups.
    DbInstanceAutomatedBackupQuotaExceededFault,
    "DBInstanceAutomatedBackupQuotaExceeded");
service_fault!(
    /// A custom endpoint with the given identifier already exists.
    DbClusterEndpointAlreadyExistsFault, "DBClusterEndpointAlreadyExistsFault");
service_fault!(
    /// No custom endpoint with the given identifier exists.
    DbClusterEndpointNotFoundFault, "DBClusterEndpointNotFoundFault");
service_fault!(
    /// The cluster has reached its custom endpoint quota.
    DbClusterEndpointQuotaExceededFault, "DBClusterEndpointQuotaExceededFault");
service_fault!(
    /// The custom endpoint is not in a state the operation can run in.
    InvalidDbClusterEndpointStateFault, "InvalidDBClusterEndpointStateFault");
service_fault!(
    /// No DB proxy with the given name exists.
    DbProxyNotFoundFault, "DBProxyNotFoundFault");
service_fault!(
    /// No target group with the given name exists for the proxy.
    DbProxyTargetGroupNotFoundFault, "DBProxyTargetGroupNotFoundFault");
service_fault!(
    /// The proxy does not track the given target.
    DbProxyTargetNotFoundFault, "DBProxyTargetNotFoundFault");
service_fault!(
    /// The DB proxy is not in a state the operation can run in.
    InvalidDbProxyStateFault, "InvalidDBProxyStateFault");
service_fault!(
    /// No custom Availability Zone with the given identifier exists.
    CustomAvailabilityZoneNotFoundFault, "CustomAvailabilityZoneNotFound");
service_fault!(
    /// No global cluster with the given identifier exists.
    GlobalClusterNotFoundFault, "GlobalClusterNotFoundFault");
service_fault!(
    /// The global cluster is not in a state the operation can run in.
    InvalidGlobalClusterStateFault, "InvalidGlobalClusterStateFault");

/// Stamps out a per-operation error type: a `kind` enum of the operation's
/// modeled faults plus `Unhandled`, with classification from parsed error
/// metadata.
macro_rules! operation_error {
    (
        $(#[$docs:meta])* $name:ident, $kind:ident {
            $($variant:ident($fault:ty),)*
        }
    ) => {
        $(#[$docs])*
        #[derive(Debug)]
        #[non_exhaustive]
        pub struct $name {
            /// What kind of error occurred.
            pub kind: $kind,
            meta: ErrorMetadata,
        }

        /// Kinds of error the operation returns.
        #[derive(Debug)]
        #[non_exhaustive]
        pub enum $kind {
            $(
                /// A fault modeled for this operation.
                $variant($fault),
            )*
            /// An error code this crate does not model, or a failure that
            /// produced no parseable error envelope.
            Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
        }

        impl $name {
            /// Creates an error from a kind and its metadata.
            pub fn new(kind: $kind, meta: ErrorMetadata) -> Self {
                Self { kind, meta }
            }

            /// Wraps an arbitrary failure as an unhandled error.
            pub fn unhandled(
                err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
            ) -> Self {
                Self {
                    kind: $kind::Unhandled(err.into()),
                    meta: ErrorMetadata::builder().build(),
                }
            }

            /// Wraps error metadata whose code is not modeled.
            pub fn generic(meta: ErrorMetadata) -> Self {
                let message = meta
                    .message()
                    .or_else(|| meta.code())
                    .unwrap_or("unknown service error")
                    .to_owned();
                Self {
                    kind: $kind::Unhandled(message.into()),
                    meta,
                }
            }

            /// Classifies parsed error metadata against the modeled faults.
            pub(crate) fn from_metadata(meta: ErrorMetadata) -> Self {
                match meta.code() {
                    $(
                        Some(code) if code == <$fault>::CODE => {
                            let fault = <$fault>::with_message(meta.message());
                            Self::new($kind::$variant(fault), meta)
                        }
                    )*
                    _ => {
                        tracing::debug!(code = ?meta.code(), "unmodeled service error code");
                        Self::generic(meta)
                    }
                }
            }

            /// Returns the raw error metadata.
            pub fn meta(&self) -> &ErrorMetadata {
                &self.meta
            }

            /// Returns the error code, if one was parsed.
            pub fn code(&self) -> Option<&str> {
                self.meta.code()
            }

            /// Returns the error message, if one was parsed.
            pub fn message(&self) -> Option<&str> {
                self.meta.message()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match &self.kind {
                    $($kind::$variant(inner) => inner.fmt(f),)*
                    $kind::Unhandled(inner) => inner.fmt(f),
                }
            }
        }

        impl std::error::Error for $name {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                match &self.kind {
                    $($kind::$variant(inner) => Some(inner as _),)*
                    $kind::Unhandled(inner) => {
                        Some(inner.as_ref() as &(dyn std::error::Error + 'static))
                    }
                }
            }
        }

        impl ProvideErrorMetadata for $name {
            fn meta(&self) -> &ErrorMetadata {
                &self.meta
            }
        }
    };
}

operation_error!(
    /// Errors returned by `AddTagsToResource`.
    AddTagsToResourceError, AddTagsToResourceErrorKind {
        DbInstanceNotFoundFault(DbInstanceNotFoundFault),
        DbSnapshotNotFoundFault(DbSnapshotNotFoundFault),
        DbClusterNotFoundFault(DbClusterNotFoundFault),
    }
);

operation_error!(
    /// Errors returned by `RemoveTagsFromResource`.
    RemoveTagsFromResourceError, RemoveTagsFromResourceErrorKind {
        DbInstanceNotFoundFault(DbInstanceNotFoundFault),
        DbSnapshotNotFoundFault(DbSnapshotNotFoundFault),
        DbClusterNotFoundFault(DbClusterNotFoundFault),
    }
);

operation_error!(
    /// Errors returned by `ListTagsForResource`.
    ListTagsForResourceError, ListTagsForResourceErrorKind {
        DbInstanceNotFoundFault(DbInstanceNotFoundFault),
        DbSnapshotNotFoundFault(DbSnapshotNotFoundFault),
        DbClusterNotFoundFault(DbClusterNotFoundFault),
    }
);

operation_error!(
    /// Errors returned by `CreateDBInstance`.
    CreateDbInstanceError, CreateDbInstanceErrorKind {
        DbInstanceAlreadyExistsFault(DbInstanceAlreadyExistsFault),
        InsufficientDbInstanceCapacityFault(InsufficientDbInstanceCapacityFault),
        DbParameterGroupNotFoundFault(DbParameterGroupNotFoundFault),
        DbSecurityGroupNotFoundFault(DbSecurityGroupNotFoundFault),
        InstanceQuotaExceededFault(InstanceQuotaExceededFault),
        StorageQuotaExceededFault(StorageQuotaExceededFault),
        DbSubnetGroupNotFoundFault(DbSubnetGroupNotFoundFault),
        DbSubnetGroupDoesNotCoverEnoughAZs(DbSubnetGroupDoesNotCoverEnoughAZs),
        InvalidDbClusterStateFault(InvalidDbClusterStateFault),
        InvalidSubnet(InvalidSubnet),
        InvalidVpcNetworkStateFault(InvalidVpcNetworkStateFault),
        ProvisionedIopsNotAvailableInAzFault(ProvisionedIopsNotAvailableInAzFault),
        OptionGroupNotFoundFault(OptionGroupNotFoundFault),
        DbClusterNotFoundFault(DbClusterNotFoundFault),
        StorageTypeNotSupportedFault(StorageTypeNotSupportedFault),
        AuthorizationNotFoundFault(AuthorizationNotFoundFault),
        KmsKeyNotAccessibleFault(KmsKeyNotAccessibleFault),
        DomainNotFoundFault(DomainNotFoundFault),
    }
);

operation_error!(
    /// Errors returned by `DescribeDBInstances`.
    DescribeDbInstancesError, DescribeDbInstancesErrorKind {
        DbInstanceNotFoundFault(DbInstanceNotFoundFault),
    }
);

operation_error!(
    /// Errors returned by `ModifyDBInstance`.
    ModifyDbInstanceError, ModifyDbInstanceErrorKind {
        InvalidDbInstanceStateFault(InvalidDbInstanceStateFault),
        DbInstanceAlreadyExistsFault(DbInstanceAlreadyExistsFault),
        DbInstanceNotFoundFault(DbInstanceNotFoundFault),
        DbSecurityGroupNotFoundFault(DbSecurityGroupNotFoundFault),
        DbParameterGroupNotFoundFault(DbParameterGroupNotFoundFault),
        InsufficientDbInstanceCapacityFault(InsufficientDbInstanceCapacityFault),
        StorageQuotaExceededFault(StorageQuotaExceededFault),
        InvalidVpcNetworkStateFault(InvalidVpcNetworkStateFault),
        ProvisionedIopsNotAvailableInAzFault(ProvisionedIopsNotAvailableInAzFault),
        OptionGroupNotFoundFault(OptionGroupNotFoundFault),
        DbUpgradeDependencyFailureFault(DbUpgradeDependencyFailureFault),
        StorageTypeNotSupportedFault(StorageTypeNotSupportedFault),
        AuthorizationNotFoundFault(AuthorizationNotFoundFault),
        CertificateNotFoundFault(CertificateNotFoundFault),
        DomainNotFoundFault(DomainNotFoundFault),
        KmsKeyNotAccessibleFault(KmsKeyNotAccessibleFault),
    }
);

operation_error!(
    /// Errors returned by `DeleteDBInstance`.
    DeleteDbInstanceError, DeleteDbInstanceErrorKind {
        DbInstanceNotFoundFault(DbInstanceNotFoundFault),
        InvalidDbInstanceStateFault(InvalidDbInstanceStateFault),
        DbSnapshotAlreadyExistsFault(DbSnapshotAlreadyExistsFault),
        SnapshotQuotaExceededFault(SnapshotQuotaExceededFault),
        InvalidDbClusterStateFault(InvalidDbClusterStateFault),
        DbInstanceAutomatedBackupQuotaExceededFault(DbInstanceAutomatedBackupQuotaExceededFault),
    }
);

operation_error!(
    /// Errors returned by `RebootDBInstance`.
    RebootDbInstanceError, RebootDbInstanceErrorKind {
        InvalidDbInstanceStateFault(InvalidDbInstanceStateFault),
        DbInstanceNotFoundFault(DbInstanceNotFoundFault),
    }
);

operation_error!(
    /// Errors returned by `StartDBInstance`.
    StartDbInstanceError, StartDbInstanceErrorKind {
        DbInstanceNotFoundFault(DbInstanceNotFoundFault),
        InvalidDbInstanceStateFault(InvalidDbInstanceStateFault),
        InsufficientDbInstanceCapacityFault(InsufficientDbInstanceCapacityFault),
        DbSubnetGroupNotFoundFault(DbSubnetGroupNotFoundFault),
        DbSubnetGroupDoesNotCoverEnoughAZs(DbSubnetGroupDoesNotCoverEnoughAZs),
        InvalidDbClusterStateFault(InvalidDbClusterStateFault),
        InvalidSubnet(InvalidSubnet),
        InvalidVpcNetworkStateFault(InvalidVpcNetworkStateFault),
        DbClusterNotFoundFault(DbClusterNotFoundFault),
        AuthorizationNotFoundFault(AuthorizationNotFoundFault),
        KmsKeyNotAccessibleFault(KmsKeyNotAccessibleFault),
    }
);

operation_error!(
    /// Errors returned by `StopDBInstance`.
    StopDbInstanceError, StopDbInstanceErrorKind {
        DbInstanceNotFoundFault(DbInstanceNotFoundFault),
        InvalidDbInstanceStateFault(InvalidDbInstanceStateFault),
        DbSnapshotAlreadyExistsFault(DbSnapshotAlreadyExistsFault),
        SnapshotQuotaExceededFault(SnapshotQuotaExceededFault),
        InvalidDbClusterStateFault(InvalidDbClusterStateFault),
    }
);

operation_error!(
    /// Errors returned by `RestoreDBInstanceFromDBSnapshot`.
    RestoreDbInstanceFromDbSnapshotError, RestoreDbInstanceFromDbSnapshotErrorKind {
        DbInstanceAlreadyExistsFault(DbInstanceAlreadyExistsFault),
        DbSnapshotNotFoundFault(DbSnapshotNotFoundFault),
        InstanceQuotaExceededFault(InstanceQuotaExceededFault),
        InsufficientDbInstanceCapacityFault(InsufficientDbInstanceCapacityFault),
        InvalidDbSnapshotStateFault(InvalidDbSnapshotStateFault),
        StorageQuotaExceededFault(StorageQuotaExceededFault),
        InvalidVpcNetworkStateFault(InvalidVpcNetworkStateFault),
        InvalidRestoreFault(InvalidRestoreFault),
        DbSubnetGroupNotFoundFault(DbSubnetGroupNotFoundFault),
        DbSubnetGroupDoesNotCoverEnoughAZs(DbSubnetGroupDoesNotCoverEnoughAZs),
        InvalidSubnet(InvalidSubnet),
        ProvisionedIopsNotAvailableInAzFault(ProvisionedIopsNotAvailableInAzFault),
        OptionGroupNotFoundFault(OptionGroupNotFoundFault),
        StorageTypeNotSupportedFault(StorageTypeNotSupportedFault),
        AuthorizationNotFoundFault(AuthorizationNotFoundFault),
        KmsKeyNotAccessibleFault(KmsKeyNotAccessibleFault),
        DbSecurityGroupNotFoundFault(DbSecurityGroupNotFoundFault),
        DomainNotFoundFault(DomainNotFoundFault),
        DbParameterGroupNotFoundFault(DbParameterGroupNotFoundFault),
    }
);

operation_error!(
    /// Errors returned by `RestoreDBInstanceFromS3`.
    RestoreDbInstanceFromS3Error, RestoreDbInstanceFromS3ErrorKind {
        DbInstanceAlreadyExistsFault(DbInstanceAlreadyExistsFault),
        InsufficientDbInstanceCapacityFault(InsufficientDbInstanceCapacityFault),
        DbParameterGroupNotFoundFault(DbParameterGroupNotFoundFault),
        DbSecurityGroupNotFoundFault(DbSecurityGroupNotFoundFault),
        InstanceQuotaExceededFault(InstanceQuotaExceededFault),
        StorageQuotaExceededFault(StorageQuotaExceededFault),
        DbSubnetGroupNotFoundFault(DbSubnetGroupNotFoundFault),
        DbSubnetGroupDoesNotCoverEnoughAZs(DbSubnetGroupDoesNotCoverEnoughAZs),
        InvalidS3BucketFault(InvalidS3BucketFault),
        ProvisionedIopsNotAvailableInAzFault(ProvisionedIopsNotAvailableInAzFault),
        OptionGroupNotFoundFault(OptionGroupNotFoundFault),
        StorageTypeNotSupportedFault(StorageTypeNotSupportedFault),
        AuthorizationNotFoundFault(AuthorizationNotFoundFault),
        KmsKeyNotAccessibleFault(KmsKeyNotAccessibleFault),
        InvalidSubnet(InvalidSubnet),
        InvalidVpcNetworkStateFault(InvalidVpcNetworkStateFault),
    }
);

operation_error!(
    /// Errors returned by `CreateDBCluster`.
    CreateDbClusterError, CreateDbClusterErrorKind {
        DbClusterAlreadyExistsFault(DbClusterAlreadyExistsFault),
        InsufficientStorageClusterCapacityFault(InsufficientStorageClusterCapacityFault),
        DbClusterQuotaExceededFault(DbClusterQuotaExceededFault),
        StorageQuotaExceededFault(StorageQuotaExceededFault),
        DbSubnetGroupNotFoundFault(DbSubnetGroupNotFoundFault),
        InvalidVpcNetworkStateFault(InvalidVpcNetworkStateFault),
        InvalidDbClusterStateFault(InvalidDbClusterStateFault),
        InvalidSubnet(InvalidSubnet),
        InvalidDbInstanceStateFault(InvalidDbInstanceStateFault),
        DbClusterParameterGroupNotFoundFault(DbClusterParameterGroupNotFoundFault),
        KmsKeyNotAccessibleFault(KmsKeyNotAccessibleFault),
        DbClusterNotFoundFault(DbClusterNotFoundFault),
        DbInstanceNotFoundFault(DbInstanceNotFoundFault),
        DbSubnetGroupDoesNotCoverEnoughAZs(DbSubnetGroupDoesNotCoverEnoughAZs),
        GlobalClusterNotFoundFault(GlobalClusterNotFoundFault),
        InvalidGlobalClusterStateFault(InvalidGlobalClusterStateFault),
        DomainNotFoundFault(DomainNotFoundFault),
    }
);

operation_error!(
    /// Errors returned by `DescribeDBClusters`.
    DescribeDbClustersError, DescribeDbClustersErrorKind {
        DbClusterNotFoundFault(DbClusterNotFoundFault),
    }
);

operation_error!(
    /// Errors returned by `ModifyDBCluster`.
    ModifyDbClusterError, ModifyDbClusterErrorKind {
        DbClusterNotFoundFault(DbClusterNotFoundFault),
        InvalidDbClusterStateFault(InvalidDbClusterStateFault),
        StorageQuotaExceededFault(StorageQuotaExceededFault),
        DbSubnetGroupNotFoundFault(DbSubnetGroupNotFoundFault),
        InvalidVpcNetworkStateFault(InvalidVpcNetworkStateFault),
        InvalidSubnet(InvalidSubnet),
        DbClusterParameterGroupNotFoundFault(DbClusterParameterGroupNotFoundFault),
        InvalidDbInstanceStateFault(InvalidDbInstanceStateFault),
        DbClusterAlreadyExistsFault(DbClusterAlreadyExistsFault),
        DomainNotFoundFault(DomainNotFoundFault),
    }
);

operation_error!(
    /// Errors returned by `DeleteDBCluster`.
    DeleteDbClusterError, DeleteDbClusterErrorKind {
        DbClusterNotFoundFault(DbClusterNotFoundFault),
        InvalidDbClusterStateFault(InvalidDbClusterStateFault),
        DbClusterSnapshotAlreadyExistsFault(DbClusterSnapshotAlreadyExistsFault),
        SnapshotQuotaExceededFault(SnapshotQuotaExceededFault),
        InvalidDbClusterSnapshotStateFault(InvalidDbClusterSnapshotStateFault),
    }
);

operation_error!(
    /// Errors returned by `RestoreDBClusterFromSnapshot`.
    RestoreDbClusterFromSnapshotError, RestoreDbClusterFromSnapshotErrorKind {
        DbClusterAlreadyExistsFault(DbClusterAlreadyExistsFault),
        DbClusterQuotaExceededFault(DbClusterQuotaExceededFault),
        StorageQuotaExceededFault(StorageQuotaExceededFault),
        DbSubnetGroupNotFoundFault(DbSubnetGroupNotFoundFault),
        DbSnapshotNotFoundFault(DbSnapshotNotFoundFault),
        DbClusterSnapshotNotFoundFault(DbClusterSnapshotNotFoundFault),
        InsufficientDbClusterCapacityFault(InsufficientDbClusterCapacityFault),
        InsufficientStorageClusterCapacityFault(InsufficientStorageClusterCapacityFault),
        InvalidDbSnapshotStateFault(InvalidDbSnapshotStateFault),
        InvalidDbClusterSnapshotStateFault(InvalidDbClusterSnapshotStateFault),
        InvalidVpcNetworkStateFault(InvalidVpcNetworkStateFault),
        InvalidRestoreFault(InvalidRestoreFault),
        InvalidSubnet(InvalidSubnet),
        OptionGroupNotFoundFault(OptionGroupNotFoundFault),
        KmsKeyNotAccessibleFault(KmsKeyNotAccessibleFault),
        DomainNotFoundFault(DomainNotFoundFault),
        DbClusterParameterGroupNotFoundFault(DbClusterParameterGroupNotFoundFault),
    }
);

operation_error!(
    /// Errors returned by `RestoreDBClusterFromS3`.
    RestoreDbClusterFromS3Error, RestoreDbClusterFromS3ErrorKind {
        DbClusterAlreadyExistsFault(DbClusterAlreadyExistsFault),
        DbClusterQuotaExceededFault(DbClusterQuotaExceededFault),
        StorageQuotaExceededFault(StorageQuotaExceededFault),
        DbSubnetGroupNotFoundFault(DbSubnetGroupNotFoundFault),
        InvalidVpcNetworkStateFault(InvalidVpcNetworkStateFault),
        InvalidDbClusterStateFault(InvalidDbClusterStateFault),
        InvalidSubnet(InvalidSubnet),
        InvalidS3BucketFault(InvalidS3BucketFault),
        DbClusterParameterGroupNotFoundFault(DbClusterParameterGroupNotFoundFault),
        KmsKeyNotAccessibleFault(KmsKeyNotAccessibleFault),
        DbClusterNotFoundFault(DbClusterNotFoundFault),
        DomainNotFoundFault(DomainNotFoundFault),
        InsufficientStorageClusterCapacityFault(InsufficientStorageClusterCapacityFault),
    }
);

operation_error!(
    /// Errors returned by `RestoreDBClusterToPointInTime`.
    RestoreDbClusterToPointInTimeError, RestoreDbClusterToPointInTimeErrorKind {
        DbClusterAlreadyExistsFault(DbClusterAlreadyExistsFault),
        DbClusterNotFoundFault(DbClusterNotFoundFault),
        DbClusterQuotaExceededFault(DbClusterQuotaExceededFault),
        DbClusterSnapshotNotFoundFault(DbClusterSnapshotNotFoundFault),
        DbSubnetGroupNotFoundFault(DbSubnetGroupNotFoundFault),
        InsufficientDbClusterCapacityFault(InsufficientDbClusterCapacityFault),
        InsufficientStorageClusterCapacityFault(InsufficientStorageClusterCapacityFault),
        InvalidDbClusterSnapshotStateFault(InvalidDbClusterSnapshotStateFault),
        InvalidDbClusterStateFault(InvalidDbClusterStateFault),
        InvalidDbSnapshotStateFault(InvalidDbSnapshotStateFault),
        InvalidRestoreFault(InvalidRestoreFault),
        InvalidSubnet(InvalidSubnet),
        InvalidVpcNetworkStateFault(InvalidVpcNetworkStateFault),
        KmsKeyNotAccessibleFault(KmsKeyNotAccessibleFault),
        OptionGroupNotFoundFault(OptionGroupNotFoundFault),
        StorageQuotaExceededFault(StorageQuotaExceededFault),
        DomainNotFoundFault(DomainNotFoundFault),
        PointInTimeRestoreNotEnabledFault(PointInTimeRestoreNotEnabledFault),
    }
);

operation_error!(
    /// Errors returned by `CreateDBSnapshot`.
    CreateDbSnapshotError, CreateDbSnapshotErrorKind {
        DbSnapshotAlreadyExistsFault(DbSnapshotAlreadyExistsFault),
        InvalidDbInstanceStateFault(InvalidDbInstanceStateFault),
        DbInstanceNotFoundFault(DbInstanceNotFoundFault),
        SnapshotQuotaExceededFault(SnapshotQuotaExceededFault),
    }
);

operation_error!(
    /// Errors returned by `DeleteDBSnapshot`.
    DeleteDbSnapshotError, DeleteDbSnapshotErrorKind {
        InvalidDbSnapshotStateFault(InvalidDbSnapshotStateFault),
        DbSnapshotNotFoundFault(DbSnapshotNotFoundFault),
    }
);

operation_error!(
    /// Errors returned by `DescribeDBSnapshots`.
    DescribeDbSnapshotsError, DescribeDbSnapshotsErrorKind {
        DbSnapshotNotFoundFault(DbSnapshotNotFoundFault),
    }
);

operation_error!(
    /// Errors returned by `CreateDBClusterSnapshot`.
    CreateDbClusterSnapshotError, CreateDbClusterSnapshotErrorKind {
        DbClusterSnapshotAlreadyExistsFault(DbClusterSnapshotAlreadyExistsFault),
        InvalidDbClusterStateFault(InvalidDbClusterStateFault),
        DbClusterNotFoundFault(DbClusterNotFoundFault),
        SnapshotQuotaExceededFault(SnapshotQuotaExceededFault),
        InvalidDbClusterSnapshotStateFault(InvalidDbClusterSnapshotStateFault),
    }
);

operation_error!(
    /// Errors returned by `CopyDBClusterSnapshot`.
    CopyDbClusterSnapshotError, CopyDbClusterSnapshotErrorKind {
        DbClusterSnapshotAlreadyExistsFault(DbClusterSnapshotAlreadyExistsFault),
        DbClusterSnapshotNotFoundFault(DbClusterSnapshotNotFoundFault),
        InvalidDbClusterStateFault(InvalidDbClusterStateFault),
        InvalidDbClusterSnapshotStateFault(InvalidDbClusterSnapshotStateFault),
        SnapshotQuotaExceededFault(SnapshotQuotaExceededFault),
        KmsKeyNotAccessibleFault(KmsKeyNotAccessibleFault),
    }
);

operation_error!(
    /// Errors returned by `DeleteDBClusterSnapshot`.
    DeleteDbClusterSnapshotError, DeleteDbClusterSnapshotErrorKind {
        InvalidDbClusterSnapshotStateFault(InvalidDbClusterSnapshotStateFault),
        DbClusterSnapshotNotFoundFault(DbClusterSnapshotNotFoundFault),
    }
);

operation_error!(
    /// Errors returned by `DescribeDBClusterSnapshots`.
    DescribeDbClusterSnapshotsError, DescribeDbClusterSnapshotsErrorKind {
        DbClusterSnapshotNotFoundFault(DbClusterSnapshotNotFoundFault),
    }
);

operation_error!(
    /// Errors returned by `CreateDBClusterEndpoint`.
    CreateDbClusterEndpointError, CreateDbClusterEndpointErrorKind {
        DbClusterEndpointQuotaExceededFault(DbClusterEndpointQuotaExceededFault),
        DbClusterEndpointAlreadyExistsFault(DbClusterEndpointAlreadyExistsFault),
        DbClusterNotFoundFault(DbClusterNotFoundFault),
        InvalidDbClusterStateFault(InvalidDbClusterStateFault),
        DbInstanceNotFoundFault(DbInstanceNotFoundFault),
        InvalidDbInstanceStateFault(InvalidDbInstanceStateFault),
    }
);

operation_error!(
    /// Errors returned by `DescribeDBClusterEndpoints`.
    DescribeDbClusterEndpointsError, DescribeDbClusterEndpointsErrorKind {
        DbClusterNotFoundFault(DbClusterNotFoundFault),
    }
);

operation_error!(
    /// Errors returned by `ModifyDBClusterEndpoint`.
    ModifyDbClusterEndpointError, ModifyDbClusterEndpointErrorKind {
        InvalidDbClusterStateFault(InvalidDbClusterStateFault),
        InvalidDbClusterEndpointStateFault(InvalidDbClusterEndpointStateFault),
        DbClusterEndpointNotFoundFault(DbClusterEndpointNotFoundFault),
        DbInstanceNotFoundFault(DbInstanceNotFoundFault),
        InvalidDbInstanceStateFault(InvalidDbInstanceStateFault),
    }
);

operation_error!(
    /// Errors returned by `DeleteDBClusterEndpoint`.
    DeleteDbClusterEndpointError, DeleteDbClusterEndpointErrorKind {
        InvalidDbClusterEndpointStateFault(InvalidDbClusterEndpointStateFault),
        DbClusterEndpointNotFoundFault(DbClusterEndpointNotFoundFault),
        InvalidDbClusterStateFault(InvalidDbClusterStateFault),
    }
);

operation_error!(
    /// Errors returned by `DescribeOrderableDBInstanceOptions`. The service
    /// models no faults for this operation.
    DescribeOrderableDbInstanceOptionsError, DescribeOrderableDbInstanceOptionsErrorKind {}
);

operation_error!(
    /// Errors returned by `DescribeValidDBInstanceModifications`.
    DescribeValidDbInstanceModificationsError, DescribeValidDbInstanceModificationsErrorKind {
        DbInstanceNotFoundFault(DbInstanceNotFoundFault),
        InvalidDbInstanceStateFault(InvalidDbInstanceStateFault),
    }
);

operation_error!(
    /// Errors returned by `DescribeDBSecurityGroups`.
    DescribeDbSecurityGroupsError, DescribeDbSecurityGroupsErrorKind {
        DbSecurityGroupNotFoundFault(DbSecurityGroupNotFoundFault),
    }
);

operation_error!(
    /// Errors returned by `DescribeDBProxyTargets`.
    DescribeDbProxyTargetsError, DescribeDbProxyTargetsErrorKind {
        DbProxyNotFoundFault(DbProxyNotFoundFault),
        DbProxyTargetNotFoundFault(DbProxyTargetNotFoundFault),
        DbProxyTargetGroupNotFoundFault(DbProxyTargetGroupNotFoundFault),
        InvalidDbProxyStateFault(InvalidDbProxyStateFault),
    }
);

operation_error!(
    /// Errors returned by `DescribeCustomAvailabilityZones`.
    DescribeCustomAvailabilityZonesError, DescribeCustomAvailabilityZonesErrorKind {
        CustomAvailabilityZoneNotFoundFault(CustomAvailabilityZoneNotFoundFault),
    }
);

#[cfg(test)]
mod test {
    use super::*;

    fn meta(code: &str, message: &str) -> ErrorMetadata {
        ErrorMetadata::builder().code(code).message(message).build()
    }

    #[test]
    fn known_code_maps_to_modeled_fault() {
        let err = DescribeDbInstancesError::from_metadata(meta(
            "DBInstanceNotFound",
            "database-1 not found",
        ));
        match &err.kind {
            DescribeDbInstancesErrorKind::DbInstanceNotFoundFault(fault) => {
                assert_eq!(fault.message.as_deref(), Some("database-1 not found"));
            }
            other => panic!("expected modeled fault, got {:?}", other),
        }
        assert_eq!(err.code(), Some("DBInstanceNotFound"));
        assert_eq!(
            err.to_string(),
            "DBInstanceNotFound: database-1 not found"
        );
    }

    #[test]
    fn unknown_code_falls_back_to_unhandled_and_keeps_metadata() {
        let err = DescribeDbInstancesError::from_metadata(meta("Throttling", "slow down"));
        assert!(matches!(
            err.kind,
            DescribeDbInstancesErrorKind::Unhandled(_)
        ));
        assert_eq!(err.code(), Some("Throttling"));
        assert_eq!(err.message(), Some("slow down"));
    }

    #[test]
    fn cluster_fault_codes_keep_their_fault_suffix() {
        let err = DeleteDbClusterError::from_metadata(meta(
            "DBClusterNotFoundFault",
            "no such cluster",
        ));
        assert!(matches!(
            err.kind,
            DeleteDbClusterErrorKind::DbClusterNotFoundFault(_)
        ));
    }

    #[test]
    fn error_source_is_the_fault() {
        use std::error::Error as _;
        let err = RebootDbInstanceError::from_metadata(meta("InvalidDBInstanceState", "stopped"));
        let source = err.source().expect("has source");
        assert!(source.to_string().contains("InvalidDBInstanceState"));
    }
}
