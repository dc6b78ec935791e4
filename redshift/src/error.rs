/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Faults returned by the Redshift service.
//!
//! Parsing the error response is the transport's job; this module maps the parsed
//! error code onto [`ErrorKind`] and carries it with the message and request id.

use smithy_types::retry::{self, ProvideErrorKind};
use std::fmt;

macro_rules! service_errors {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $code:literal,
        )+
    ) => {
        /// Every fault the Redshift API documents, keyed by wire error code.
        #[non_exhaustive]
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub enum ErrorKind {
            $(
                $(#[$meta])*
                $variant,
            )+
            /// An error code this crate does not model.
            Unhandled(String),
        }

        impl ErrorKind {
            /// Every modeled kind.
            pub const MODELED: &'static [ErrorKind] = &[$(ErrorKind::$variant),+];

            /// Maps a wire error code to its kind. Unknown codes become [`ErrorKind::Unhandled`].
            pub fn from_code(code: &str) -> Self {
                match code {
                    $($code => ErrorKind::$variant,)+
                    other => {
                        tracing::debug!(code = other, "unmodeled Redshift error code");
                        ErrorKind::Unhandled(other.to_owned())
                    }
                }
            }

            /// Returns the wire error code.
            pub fn code(&self) -> &str {
                match self {
                    $(ErrorKind::$variant => $code,)+
                    ErrorKind::Unhandled(code) => code,
                }
            }

            /// Returns the variant name, e.g. `SnsInvalidTopic`. Use [`code`](Self::code) for
            /// the error code sent on the wire.
            pub fn name(&self) -> &str {
                match self {
                    $(ErrorKind::$variant => stringify!($variant),)+
                    ErrorKind::Unhandled(code) => code,
                }
            }
        }
    };
}

service_errors! {
    /// The owner of the specified snapshot has not authorized your account to access the snapshot.
    AccessToSnapshotDenied => "AccessToSnapshotDenied",
    /// The specified CIDR block or EC2 security group is already authorized for the specified cluster security group.
    AuthorizationAlreadyExists => "AuthorizationAlreadyExists",
    /// The specified CIDR IP range or EC2 security group is not authorized for the specified cluster security group.
    AuthorizationNotFound => "AuthorizationNotFound",
    /// The authorization quota for the cluster security group has been reached.
    AuthorizationQuotaExceeded => "AuthorizationQuotaExceeded",
    /// The maximum number for a batch delete of snapshots has been reached. The limit is 100.
    BatchDeleteRequestSizeExceeded => "BatchDeleteRequestSizeExceeded",
    /// The maximum number for snapshot identifiers has been reached. The limit is 100.
    BatchModifyClusterSnapshotsLimitExceeded => "BatchModifyClusterSnapshotsLimitExceededFault",
    /// Could not find the specified S3 bucket.
    BucketNotFound => "BucketNotFoundFault",
    /// The account already has a cluster with the given identifier.
    ClusterAlreadyExists => "ClusterAlreadyExists",
    /// The `ClusterIdentifier` parameter does not refer to an existing cluster.
    ClusterNotFound => "ClusterNotFound",
    /// Cluster is already on the latest database revision.
    ClusterOnLatestRevision => "ClusterOnLatestRevision",
    ClusterParameterGroupAlreadyExists => "ClusterParameterGroupAlreadyExists",
    ClusterParameterGroupNotFound => "ClusterParameterGroupNotFound",
    ClusterParameterGroupQuotaExceeded => "ClusterParameterGroupQuotaExceeded",
    /// The request would exceed the allowed number of cluster instances for this account.
    ClusterQuotaExceeded => "ClusterQuotaExceeded",
    ClusterSecurityGroupAlreadyExists => "ClusterSecurityGroupAlreadyExists",
    ClusterSecurityGroupNotFound => "ClusterSecurityGroupNotFound",
    ClusterSecurityGroupQuotaExceeded => "QuotaExceeded.ClusterSecurityGroup",
    ClusterSnapshotAlreadyExists => "ClusterSnapshotAlreadyExists",
    ClusterSnapshotNotFound => "ClusterSnapshotNotFound",
    ClusterSnapshotQuotaExceeded => "ClusterSnapshotQuotaExceeded",
    ClusterSubnetGroupAlreadyExists => "ClusterSubnetGroupAlreadyExists",
    ClusterSubnetGroupNotFound => "ClusterSubnetGroupNotFoundFault",
    ClusterSubnetGroupQuotaExceeded => "ClusterSubnetGroupQuotaExceeded",
    ClusterSubnetQuotaExceeded => "ClusterSubnetQuotaExceededFault",
    /// Cross-region snapshot copy was temporarily disabled.
    CopyToRegionDisabled => "CopyToRegionDisabledFault",
    /// The request cannot be completed because a dependent service is throttling requests.
    DependentServiceRequestThrottling => "DependentServiceRequestThrottlingFault",
    /// Your request cannot be completed because a dependent internal service is temporarily unavailable.
    DependentServiceUnavailable => "DependentServiceUnavailableFault",
    EventSubscriptionQuotaExceeded => "EventSubscriptionQuotaExceeded",
    HsmClientCertificateAlreadyExists => "HsmClientCertificateAlreadyExistsFault",
    HsmClientCertificateNotFound => "HsmClientCertificateNotFoundFault",
    HsmClientCertificateQuotaExceeded => "HsmClientCertificateQuotaExceededFault",
    HsmConfigurationAlreadyExists => "HsmConfigurationAlreadyExistsFault",
    HsmConfigurationNotFound => "HsmConfigurationNotFoundFault",
    HsmConfigurationQuotaExceeded => "HsmConfigurationQuotaExceededFault",
    /// You have exceeded the allowed number of table restore requests.
    InProgressTableRestoreQuotaExceeded => "InProgressTableRestoreQuotaExceededFault",
    /// The specified options are incompatible.
    IncompatibleOrderableOptions => "IncompatibleOrderableOptions",
    /// The number of nodes specified exceeds the allotted capacity of the cluster.
    InsufficientClusterCapacity => "InsufficientClusterCapacity",
    /// The cluster does not have read bucket or put object permissions on the S3 bucket.
    InsufficientS3BucketPolicy => "InsufficientS3BucketPolicyFault",
    InvalidClusterParameterGroupState => "InvalidClusterParameterGroupState",
    InvalidClusterSecurityGroupState => "InvalidClusterSecurityGroupState",
    InvalidClusterSnapshotScheduleState => "InvalidClusterSnapshotScheduleState",
    InvalidClusterSnapshotState => "InvalidClusterSnapshotState",
    /// The specified cluster is not in the `available` state.
    InvalidClusterState => "InvalidClusterState",
    InvalidClusterSubnetGroupState => "InvalidClusterSubnetGroupStateFault",
    InvalidClusterSubnetState => "InvalidClusterSubnetStateFault",
    /// The provided cluster track name is not valid.
    InvalidClusterTrack => "InvalidClusterTrack",
    InvalidElasticIp => "InvalidElasticIpFault",
    InvalidHsmClientCertificateState => "InvalidHsmClientCertificateStateFault",
    InvalidHsmConfigurationState => "InvalidHsmConfigurationStateFault",
    /// Indicates that the Reserved Node being exchanged is not in an active state.
    InvalidReservedNodeState => "InvalidReservedNodeState",
    /// The restore is invalid.
    InvalidRestore => "InvalidRestore",
    /// The retention period specified is either in the past or is not a valid value.
    InvalidRetentionPeriod => "InvalidRetentionPeriodFault",
    InvalidS3BucketName => "InvalidS3BucketNameFault",
    InvalidS3KeyPrefix => "InvalidS3KeyPrefixFault",
    /// The schedule you submitted isn't valid.
    InvalidSchedule => "InvalidSchedule",
    /// The scheduled action is not valid.
    InvalidScheduledAction => "InvalidScheduledAction",
    InvalidSnapshotCopyGrantState => "InvalidSnapshotCopyGrantStateFault",
    /// The requested subnet is not valid, or not all of the subnets are in the same VPC.
    InvalidSubnet => "InvalidSubnet",
    InvalidSubscriptionState => "InvalidSubscriptionStateFault",
    /// The value specified for the table restore request is not valid.
    InvalidTableRestoreArgument => "InvalidTableRestoreArgument",
    /// The tag is invalid.
    InvalidTag => "InvalidTagFault",
    /// The usage limit is not valid.
    InvalidUsageLimit => "InvalidUsageLimit",
    /// The cluster subnet group does not cover all Availability Zones.
    InvalidVpcNetworkState => "InvalidVPCNetworkStateFault",
    /// The encryption key has exceeded its grant limit in AWS KMS.
    LimitExceeded => "LimitExceededFault",
    NumberOfNodesPerClusterLimitExceeded => "NumberOfNodesPerClusterLimitExceeded",
    NumberOfNodesQuotaExceeded => "NumberOfNodesQuotaExceeded",
    ReservedNodeAlreadyExists => "ReservedNodeAlreadyExists",
    /// Indicates that the reserved node has already been exchanged.
    ReservedNodeAlreadyMigrated => "ReservedNodeAlreadyMigrated",
    ReservedNodeNotFound => "ReservedNodeNotFound",
    ReservedNodeOfferingNotFound => "ReservedNodeOfferingNotFound",
    ReservedNodeQuotaExceeded => "ReservedNodeQuotaExceeded",
    /// A resize operation for the specified cluster is not found.
    ResizeNotFound => "ResizeNotFound",
    /// The resource could not be found.
    ResourceNotFound => "ResourceNotFoundFault",
    /// Amazon SNS has responded that there is a problem with the specified Amazon SNS topic.
    SnsInvalidTopic => "SNSInvalidTopic",
    /// You do not have permission to publish to the specified Amazon SNS topic.
    SnsNoAuthorization => "SNSNoAuthorization",
    /// An Amazon SNS topic with the specified Amazon Resource Name (ARN) does not exist.
    SnsTopicArnNotFound => "SNSTopicArnNotFound",
    /// The definition you submitted is not supported.
    ScheduleDefinitionTypeUnsupported => "ScheduleDefinitionTypeUnsupported",
    ScheduledActionAlreadyExists => "ScheduledActionAlreadyExists",
    ScheduledActionNotFound => "ScheduledActionNotFound",
    ScheduledActionQuotaExceeded => "ScheduledActionQuotaExceeded",
    /// The action type specified for a scheduled action is not supported.
    ScheduledActionTypeUnsupported => "ScheduledActionTypeUnsupported",
    SnapshotCopyAlreadyDisabled => "SnapshotCopyAlreadyDisabledFault",
    SnapshotCopyAlreadyEnabled => "SnapshotCopyAlreadyEnabledFault",
    /// Cross-region snapshot copy was temporarily disabled.
    SnapshotCopyDisabled => "SnapshotCopyDisabledFault",
    SnapshotCopyGrantAlreadyExists => "SnapshotCopyGrantAlreadyExistsFault",
    SnapshotCopyGrantNotFound => "SnapshotCopyGrantNotFoundFault",
    SnapshotCopyGrantQuotaExceeded => "SnapshotCopyGrantQuotaExceededFault",
    SnapshotScheduleAlreadyExists => "SnapshotScheduleAlreadyExists",
    SnapshotScheduleNotFound => "SnapshotScheduleNotFound",
    SnapshotScheduleQuotaExceeded => "SnapshotScheduleQuotaExceeded",
    /// The specified snapshot schedule is already being updated.
    SnapshotScheduleUpdateInProgress => "SnapshotScheduleUpdateInProgress",
    /// The specified Amazon Redshift event source could not be found.
    SourceNotFound => "SourceNotFound",
    /// A specified subnet is already in use by another cluster.
    SubnetAlreadyInUse => "SubnetAlreadyInUse",
    /// There is already an existing event notification subscription with the specified name.
    SubscriptionAlreadyExist => "SubscriptionAlreadyExist",
    SubscriptionCategoryNotFound => "SubscriptionCategoryNotFound",
    SubscriptionEventIdNotFound => "SubscriptionEventIdNotFound",
    SubscriptionNotFound => "SubscriptionNotFound",
    SubscriptionSeverityNotFound => "SubscriptionSeverityNotFound",
    /// The number of tables in the cluster exceeds the limit for the requested new cluster node type.
    TableLimitExceeded => "TableLimitExceeded",
    /// The specified `TableRestoreRequestId` value was not found.
    TableRestoreNotFound => "TableRestoreNotFoundFault",
    /// You have exceeded the number of tags allowed.
    TagLimitExceeded => "TagLimitExceededFault",
    /// Your account is not authorized to perform the requested operation.
    UnauthorizedOperation => "UnauthorizedOperation",
    /// The specified region is incorrect or does not exist.
    UnknownSnapshotCopyRegion => "UnknownSnapshotCopyRegionFault",
    /// The requested operation isn't supported.
    UnsupportedOperation => "UnsupportedOperation",
    /// A request option was specified that is not supported.
    UnsupportedOption => "UnsupportedOptionFault",
    UsageLimitAlreadyExists => "UsageLimitAlreadyExists",
    UsageLimitNotFound => "UsageLimitNotFound",
}

impl ErrorKind {
    /// Coarse retry classification. `None` for unmodeled codes.
    pub fn retry_class(&self) -> Option<retry::ErrorKind> {
        match self {
            ErrorKind::DependentServiceRequestThrottling => Some(retry::ErrorKind::ThrottlingError),
            ErrorKind::DependentServiceUnavailable => Some(retry::ErrorKind::ServerError),
            ErrorKind::Unhandled(_) => None,
            _ => Some(retry::ErrorKind::ClientError),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A fault returned by the service, as parsed from an error response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {}", .message.as_deref().unwrap_or("no message"))]
pub struct ServiceError {
    kind: ErrorKind,
    message: Option<String>,
    request_id: Option<String>,
}

impl ServiceError {
    pub fn new(kind: ErrorKind) -> Self {
        ServiceError {
            kind,
            message: None,
            request_id: None,
        }
    }

    /// Builds an error from the `Code` element of an error response.
    pub fn from_code(code: &str) -> Self {
        Self::new(ErrorKind::from_code(code))
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn is_retryable(&self) -> bool {
        self.kind
            .retry_class()
            .map(retry::ErrorKind::is_retryable)
            .unwrap_or(false)
    }
}

impl ProvideErrorKind for ServiceError {
    fn retryable_error_kind(&self) -> Option<retry::ErrorKind> {
        self.kind.retry_class()
    }

    fn code(&self) -> Option<&str> {
        Some(self.kind.code())
    }
}

#[cfg(test)]
mod test {
    use super::{ErrorKind, ServiceError};
    use smithy_types::retry::{self, ProvideErrorKind};
    use std::collections::HashSet;

    #[test]
    fn codes_parse_back() {
        for kind in ErrorKind::MODELED {
            assert_eq!(&ErrorKind::from_code(kind.code()), kind);
        }
    }

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<_> = ErrorKind::MODELED.iter().map(ErrorKind::code).collect();
        assert_eq!(codes.len(), ErrorKind::MODELED.len());
    }

    #[test]
    fn irregular_codes() {
        assert_eq!(
            ErrorKind::from_code("QuotaExceeded.ClusterSecurityGroup"),
            ErrorKind::ClusterSecurityGroupQuotaExceeded
        );
        assert_eq!(
            ErrorKind::from_code("InvalidVPCNetworkStateFault"),
            ErrorKind::InvalidVpcNetworkState
        );
        assert_eq!(ErrorKind::SnsInvalidTopic.code(), "SNSInvalidTopic");
        assert_eq!(ErrorKind::InvalidTag.name(), "InvalidTag");
    }

    #[test]
    fn name_is_the_variant_and_code_is_the_wire_value() {
        assert_eq!(ErrorKind::SnsInvalidTopic.name(), "SnsInvalidTopic");
        assert_eq!(ErrorKind::SnsInvalidTopic.code(), "SNSInvalidTopic");
        assert_eq!(
            ErrorKind::from_code(ErrorKind::SnsInvalidTopic.code()),
            ErrorKind::SnsInvalidTopic
        );
        assert_eq!(ErrorKind::Unhandled("Throttling".into()).name(), "Throttling");
    }

    #[test]
    fn unknown_codes_are_unhandled() {
        let kind = ErrorKind::from_code("SomethingNew");
        assert_eq!(kind, ErrorKind::Unhandled("SomethingNew".to_owned()));
        assert_eq!(kind.code(), "SomethingNew");
        assert_eq!(kind.retry_class(), None);
    }

    #[test]
    fn service_error_display() {
        let err = ServiceError::from_code("ClusterNotFound")
            .with_message("Cluster example not found.")
            .with_request_id("a1b2");
        assert_eq!(err.to_string(), "ClusterNotFound: Cluster example not found.");
        assert_eq!(err.kind(), &ErrorKind::ClusterNotFound);
        assert_eq!(err.request_id(), Some("a1b2"));
        assert_eq!(
            ServiceError::new(ErrorKind::ResizeNotFound).to_string(),
            "ResizeNotFound: no message"
        );
    }

    #[test]
    fn retry_classification() {
        let throttled = ServiceError::from_code("DependentServiceRequestThrottlingFault");
        assert_eq!(
            throttled.retryable_error_kind(),
            Some(retry::ErrorKind::ThrottlingError)
        );
        assert!(throttled.is_retryable());
        assert_eq!(throttled.code(), Some("DependentServiceRequestThrottlingFault"));

        let not_found = ServiceError::from_code("ClusterNotFound");
        assert!(!not_found.is_retryable());
        assert!(!ServiceError::from_code("Mystery").is_retryable());
    }
}
