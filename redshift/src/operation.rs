/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Catalog of Redshift API actions.
//!
//! Every `*Request` shape implements [`RedshiftRequest`], which ties it to its
//! [`Operation`] and the result shape the action returns.

use crate::error::ErrorKind;
use crate::input::*;
use crate::output::*;
use crate::shape::Shape;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// A request shape sent as the parameters of one API action.
pub trait RedshiftRequest: Shape {
    /// The parsed response body; `()` for actions with an empty response.
    type Output;

    const OPERATION: Operation;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown Redshift operation `{0}`")]
pub struct UnknownOperation(String);

impl UnknownOperation {
    pub fn name(&self) -> &str {
        &self.0
    }
}

macro_rules! operations {
    (
        $(
            $op:ident($input:ident) -> $output:ty [$($error:ident),* $(,)?],
        )+
    ) => {
        /// A Redshift API action.
        #[non_exhaustive]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Operation {
            $($op,)+
        }

        impl Operation {
            /// Every action, in alphabetical order.
            pub const ALL: &'static [Operation] = &[$(Operation::$op),+];

            /// Returns the wire action name.
            pub fn name(self) -> &'static str {
                match self {
                    $(Operation::$op => stringify!($op),)+
                }
            }

            /// Returns the modeled faults the action is documented to raise.
            pub fn errors(self) -> &'static [ErrorKind] {
                match self {
                    $(
                        Operation::$op => {
                            const ERRORS: &[ErrorKind] = &[$(ErrorKind::$error),*];
                            ERRORS
                        }
                    )+
                }
            }

            /// Returns the wire name of the request shape.
            pub fn input_name(self) -> &'static str {
                match self {
                    $(Operation::$op => <$input as Shape>::NAME,)+
                }
            }
        }

        impl FromStr for Operation {
            type Err = UnknownOperation;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($op) => Ok(Operation::$op),)+
                    other => {
                        tracing::debug!(operation = other, "unknown Redshift operation name");
                        Err(UnknownOperation(other.to_owned()))
                    }
                }
            }
        }

        $(
            impl RedshiftRequest for $input {
                type Output = $output;

                const OPERATION: Operation = Operation::$op;
            }
        )+
    };
}

operations! {
    AcceptReservedNodeExchange(AcceptReservedNodeExchangeRequest) -> AcceptReservedNodeExchangeResult [
        ReservedNodeNotFound, InvalidReservedNodeState, ReservedNodeAlreadyMigrated,
        ReservedNodeOfferingNotFound, UnsupportedOperation, DependentServiceUnavailable,
        ReservedNodeAlreadyExists,
    ],
    AuthorizeClusterSecurityGroupIngress(AuthorizeClusterSecurityGroupIngressRequest) -> AuthorizeClusterSecurityGroupIngressResult [
        ClusterSecurityGroupNotFound, InvalidClusterSecurityGroupState, AuthorizationAlreadyExists,
        AuthorizationQuotaExceeded,
    ],
    AuthorizeSnapshotAccess(AuthorizeSnapshotAccessRequest) -> AuthorizeSnapshotAccessResult [
        ClusterSnapshotNotFound, AuthorizationAlreadyExists, AuthorizationQuotaExceeded,
        DependentServiceRequestThrottling, InvalidClusterSnapshotState, LimitExceeded,
    ],
    BatchDeleteClusterSnapshots(BatchDeleteClusterSnapshotsRequest) -> BatchDeleteClusterSnapshotsResult [
        BatchDeleteRequestSizeExceeded,
    ],
    BatchModifyClusterSnapshots(BatchModifyClusterSnapshotsRequest) -> BatchModifyClusterSnapshotsResult [
        InvalidRetentionPeriod, BatchModifyClusterSnapshotsLimitExceeded,
    ],
    CancelResize(CancelResizeRequest) -> CancelResizeResult [
        ClusterNotFound, ResizeNotFound, InvalidClusterState, UnsupportedOperation,
    ],
    CopyClusterSnapshot(CopyClusterSnapshotRequest) -> CopyClusterSnapshotResult [
        ClusterSnapshotAlreadyExists, ClusterSnapshotNotFound, InvalidClusterSnapshotState,
        ClusterSnapshotQuotaExceeded, InvalidRetentionPeriod,
    ],
    CreateCluster(CreateClusterRequest) -> CreateClusterResult [
        ClusterAlreadyExists, InsufficientClusterCapacity, ClusterParameterGroupNotFound,
        ClusterSecurityGroupNotFound, ClusterQuotaExceeded, NumberOfNodesQuotaExceeded,
        NumberOfNodesPerClusterLimitExceeded, ClusterSubnetGroupNotFound, InvalidVpcNetworkState,
        InvalidClusterSubnetGroupState, InvalidSubnet, UnauthorizedOperation,
        HsmClientCertificateNotFound, HsmConfigurationNotFound, InvalidElasticIp, TagLimitExceeded,
        InvalidTag, LimitExceeded, DependentServiceRequestThrottling, InvalidClusterTrack,
        SnapshotScheduleNotFound, InvalidRetentionPeriod,
    ],
    CreateClusterParameterGroup(CreateClusterParameterGroupRequest) -> CreateClusterParameterGroupResult [
        ClusterParameterGroupQuotaExceeded, ClusterParameterGroupAlreadyExists, TagLimitExceeded,
        InvalidTag,
    ],
    CreateClusterSecurityGroup(CreateClusterSecurityGroupRequest) -> CreateClusterSecurityGroupResult [
        ClusterSecurityGroupAlreadyExists, ClusterSecurityGroupQuotaExceeded, TagLimitExceeded,
        InvalidTag,
    ],
    CreateClusterSnapshot(CreateClusterSnapshotRequest) -> CreateClusterSnapshotResult [
        ClusterSnapshotAlreadyExists, InvalidClusterState, ClusterNotFound,
        ClusterSnapshotQuotaExceeded, TagLimitExceeded, InvalidTag, InvalidRetentionPeriod,
    ],
    CreateClusterSubnetGroup(CreateClusterSubnetGroupRequest) -> CreateClusterSubnetGroupResult [
        ClusterSubnetGroupAlreadyExists, ClusterSubnetGroupQuotaExceeded,
        ClusterSubnetQuotaExceeded, InvalidSubnet, UnauthorizedOperation, TagLimitExceeded,
        InvalidTag, DependentServiceRequestThrottling,
    ],
    CreateEventSubscription(CreateEventSubscriptionRequest) -> CreateEventSubscriptionResult [
        EventSubscriptionQuotaExceeded, SubscriptionAlreadyExist, SnsInvalidTopic,
        SnsNoAuthorization, SnsTopicArnNotFound, SubscriptionEventIdNotFound,
        SubscriptionCategoryNotFound, SubscriptionSeverityNotFound, SourceNotFound,
        TagLimitExceeded, InvalidTag,
    ],
    CreateHsmClientCertificate(CreateHsmClientCertificateRequest) -> CreateHsmClientCertificateResult [
        HsmClientCertificateAlreadyExists, HsmClientCertificateQuotaExceeded, TagLimitExceeded,
        InvalidTag,
    ],
    CreateHsmConfiguration(CreateHsmConfigurationRequest) -> CreateHsmConfigurationResult [
        HsmConfigurationAlreadyExists, HsmConfigurationQuotaExceeded, TagLimitExceeded, InvalidTag,
    ],
    CreateScheduledAction(CreateScheduledActionRequest) -> CreateScheduledActionResult [
        ScheduledActionAlreadyExists, ScheduledActionQuotaExceeded, ScheduledActionTypeUnsupported,
        InvalidSchedule, InvalidScheduledAction, UnauthorizedOperation,
    ],
    CreateSnapshotCopyGrant(CreateSnapshotCopyGrantRequest) -> CreateSnapshotCopyGrantResult [
        SnapshotCopyGrantAlreadyExists, SnapshotCopyGrantQuotaExceeded, LimitExceeded,
        TagLimitExceeded, InvalidTag, DependentServiceRequestThrottling,
    ],
    CreateSnapshotSchedule(CreateSnapshotScheduleRequest) -> CreateSnapshotScheduleResult [
        SnapshotScheduleAlreadyExists, InvalidSchedule, SnapshotScheduleQuotaExceeded,
        TagLimitExceeded, ScheduleDefinitionTypeUnsupported,
    ],
    CreateTags(CreateTagsRequest) -> () [TagLimitExceeded, ResourceNotFound, InvalidTag],
    CreateUsageLimit(CreateUsageLimitRequest) -> CreateUsageLimitResult [
        ClusterNotFound, InvalidClusterState, LimitExceeded, UsageLimitAlreadyExists,
        InvalidUsageLimit, TagLimitExceeded, UnsupportedOperation,
    ],
    DeleteCluster(DeleteClusterRequest) -> DeleteClusterResult [
        ClusterNotFound, InvalidClusterState, ClusterSnapshotAlreadyExists,
        ClusterSnapshotQuotaExceeded, InvalidRetentionPeriod,
    ],
    DeleteClusterParameterGroup(DeleteClusterParameterGroupRequest) -> () [
        InvalidClusterParameterGroupState, ClusterParameterGroupNotFound,
    ],
    DeleteClusterSecurityGroup(DeleteClusterSecurityGroupRequest) -> () [
        InvalidClusterSecurityGroupState, ClusterSecurityGroupNotFound,
    ],
    DeleteClusterSnapshot(DeleteClusterSnapshotRequest) -> DeleteClusterSnapshotResult [
        InvalidClusterSnapshotState, ClusterSnapshotNotFound,
    ],
    DeleteClusterSubnetGroup(DeleteClusterSubnetGroupRequest) -> () [
        InvalidClusterSubnetGroupState, InvalidClusterSubnetState, ClusterSubnetGroupNotFound,
    ],
    DeleteEventSubscription(DeleteEventSubscriptionRequest) -> () [
        SubscriptionNotFound, InvalidSubscriptionState,
    ],
    DeleteHsmClientCertificate(DeleteHsmClientCertificateRequest) -> () [
        InvalidHsmClientCertificateState, HsmClientCertificateNotFound,
    ],
    DeleteHsmConfiguration(DeleteHsmConfigurationRequest) -> () [
        InvalidHsmConfigurationState, HsmConfigurationNotFound,
    ],
    DeleteScheduledAction(DeleteScheduledActionRequest) -> () [
        ScheduledActionNotFound, UnauthorizedOperation,
    ],
    DeleteSnapshotCopyGrant(DeleteSnapshotCopyGrantRequest) -> () [
        InvalidSnapshotCopyGrantState, SnapshotCopyGrantNotFound,
    ],
    DeleteSnapshotSchedule(DeleteSnapshotScheduleRequest) -> () [
        InvalidClusterSnapshotScheduleState, SnapshotScheduleNotFound,
    ],
    DeleteTags(DeleteTagsRequest) -> () [ResourceNotFound, InvalidTag],
    DeleteUsageLimit(DeleteUsageLimitRequest) -> () [UsageLimitNotFound, UnsupportedOperation],
    DescribeAccountAttributes(DescribeAccountAttributesRequest) -> DescribeAccountAttributesResult [

    ],
    DescribeClusterDbRevisions(DescribeClusterDbRevisionsRequest) -> DescribeClusterDbRevisionsResult [
        ClusterNotFound, InvalidClusterState,
    ],
    DescribeClusterParameterGroups(DescribeClusterParameterGroupsRequest) -> DescribeClusterParameterGroupsResult [
        ClusterParameterGroupNotFound, InvalidTag,
    ],
    DescribeClusterParameters(DescribeClusterParametersRequest) -> DescribeClusterParametersResult [
        ClusterParameterGroupNotFound,
    ],
    DescribeClusterSecurityGroups(DescribeClusterSecurityGroupsRequest) -> DescribeClusterSecurityGroupsResult [
        ClusterSecurityGroupNotFound, InvalidTag,
    ],
    DescribeClusterSnapshots(DescribeClusterSnapshotsRequest) -> DescribeClusterSnapshotsResult [
        ClusterNotFound, ClusterSnapshotNotFound, InvalidTag,
    ],
    DescribeClusterSubnetGroups(DescribeClusterSubnetGroupsRequest) -> DescribeClusterSubnetGroupsResult [
        ClusterSubnetGroupNotFound, InvalidTag,
    ],
    DescribeClusterTracks(DescribeClusterTracksRequest) -> DescribeClusterTracksResult [
        InvalidClusterTrack, UnauthorizedOperation,
    ],
    DescribeClusterVersions(DescribeClusterVersionsRequest) -> DescribeClusterVersionsResult [],
    DescribeClusters(DescribeClustersRequest) -> DescribeClustersResult [
        ClusterNotFound, InvalidTag,
    ],
    DescribeDefaultClusterParameters(DescribeDefaultClusterParametersRequest) -> DescribeDefaultClusterParametersResult [

    ],
    DescribeEventCategories(DescribeEventCategoriesRequest) -> DescribeEventCategoriesResult [],
    DescribeEventSubscriptions(DescribeEventSubscriptionsRequest) -> DescribeEventSubscriptionsResult [
        SubscriptionNotFound, InvalidTag,
    ],
    DescribeEvents(DescribeEventsRequest) -> DescribeEventsResult [],
    DescribeHsmClientCertificates(DescribeHsmClientCertificatesRequest) -> DescribeHsmClientCertificatesResult [
        HsmClientCertificateNotFound, InvalidTag,
    ],
    DescribeHsmConfigurations(DescribeHsmConfigurationsRequest) -> DescribeHsmConfigurationsResult [
        HsmConfigurationNotFound, InvalidTag,
    ],
    DescribeLoggingStatus(DescribeLoggingStatusRequest) -> DescribeLoggingStatusResult [
        ClusterNotFound,
    ],
    DescribeNodeConfigurationOptions(DescribeNodeConfigurationOptionsRequest) -> DescribeNodeConfigurationOptionsResult [
        ClusterSnapshotNotFound, InvalidClusterSnapshotState, ClusterNotFound,
        AccessToSnapshotDenied,
    ],
    DescribeOrderableClusterOptions(DescribeOrderableClusterOptionsRequest) -> DescribeOrderableClusterOptionsResult [

    ],
    DescribeReservedNodeOfferings(DescribeReservedNodeOfferingsRequest) -> DescribeReservedNodeOfferingsResult [
        ReservedNodeOfferingNotFound, UnsupportedOperation, DependentServiceUnavailable,
    ],
    DescribeReservedNodes(DescribeReservedNodesRequest) -> DescribeReservedNodesResult [
        ReservedNodeNotFound, DependentServiceUnavailable,
    ],
    DescribeResize(DescribeResizeRequest) -> DescribeResizeResult [ClusterNotFound, ResizeNotFound],
    DescribeScheduledActions(DescribeScheduledActionsRequest) -> DescribeScheduledActionsResult [
        ScheduledActionNotFound, UnauthorizedOperation,
    ],
    DescribeSnapshotCopyGrants(DescribeSnapshotCopyGrantsRequest) -> DescribeSnapshotCopyGrantsResult [
        SnapshotCopyGrantNotFound, InvalidTag,
    ],
    DescribeSnapshotSchedules(DescribeSnapshotSchedulesRequest) -> DescribeSnapshotSchedulesResult [

    ],
    DescribeStorage(DescribeStorageRequest) -> DescribeStorageResult [],
    DescribeTableRestoreStatus(DescribeTableRestoreStatusRequest) -> DescribeTableRestoreStatusResult [
        TableRestoreNotFound, ClusterNotFound,
    ],
    DescribeTags(DescribeTagsRequest) -> DescribeTagsResult [ResourceNotFound, InvalidTag],
    DescribeUsageLimits(DescribeUsageLimitsRequest) -> DescribeUsageLimitsResult [
        ClusterNotFound, UnsupportedOperation,
    ],
    DisableLogging(DisableLoggingRequest) -> DisableLoggingResult [ClusterNotFound],
    DisableSnapshotCopy(DisableSnapshotCopyRequest) -> DisableSnapshotCopyResult [
        ClusterNotFound, SnapshotCopyAlreadyDisabled, InvalidClusterState, UnauthorizedOperation,
    ],
    EnableLogging(EnableLoggingRequest) -> EnableLoggingResult [
        ClusterNotFound, BucketNotFound, InsufficientS3BucketPolicy, InvalidS3KeyPrefix,
        InvalidS3BucketName, InvalidClusterState,
    ],
    EnableSnapshotCopy(EnableSnapshotCopyRequest) -> EnableSnapshotCopyResult [
        IncompatibleOrderableOptions, InvalidClusterState, ClusterNotFound, CopyToRegionDisabled,
        SnapshotCopyAlreadyEnabled, UnknownSnapshotCopyRegion, UnauthorizedOperation,
        SnapshotCopyGrantNotFound, LimitExceeded, DependentServiceRequestThrottling,
        InvalidRetentionPeriod,
    ],
    GetClusterCredentials(GetClusterCredentialsRequest) -> GetClusterCredentialsResult [
        ClusterNotFound, UnsupportedOperation,
    ],
    GetReservedNodeExchangeOfferings(GetReservedNodeExchangeOfferingsRequest) -> GetReservedNodeExchangeOfferingsResult [
        ReservedNodeNotFound, InvalidReservedNodeState, ReservedNodeAlreadyMigrated,
        ReservedNodeOfferingNotFound, UnsupportedOperation, DependentServiceUnavailable,
    ],
    ModifyCluster(ModifyClusterRequest) -> ModifyClusterResult [
        InvalidClusterState, InvalidClusterSecurityGroupState, ClusterNotFound,
        NumberOfNodesQuotaExceeded, NumberOfNodesPerClusterLimitExceeded,
        ClusterSecurityGroupNotFound, ClusterParameterGroupNotFound, InsufficientClusterCapacity,
        UnsupportedOption, UnauthorizedOperation, HsmClientCertificateNotFound,
        HsmConfigurationNotFound, ClusterAlreadyExists, LimitExceeded,
        DependentServiceRequestThrottling, InvalidElasticIp, TableLimitExceeded,
        InvalidClusterTrack, InvalidRetentionPeriod,
    ],
    ModifyClusterDbRevision(ModifyClusterDbRevisionRequest) -> ModifyClusterDbRevisionResult [
        ClusterNotFound, ClusterOnLatestRevision, InvalidClusterState,
    ],
    ModifyClusterIamRoles(ModifyClusterIamRolesRequest) -> ModifyClusterIamRolesResult [
        InvalidClusterState, ClusterNotFound,
    ],
    ModifyClusterMaintenance(ModifyClusterMaintenanceRequest) -> ModifyClusterMaintenanceResult [
        ClusterNotFound, InvalidClusterState,
    ],
    ModifyClusterParameterGroup(ModifyClusterParameterGroupRequest) -> ModifyClusterParameterGroupResult [
        ClusterParameterGroupNotFound, InvalidClusterParameterGroupState,
    ],
    ModifyClusterSnapshot(ModifyClusterSnapshotRequest) -> ModifyClusterSnapshotResult [
        InvalidClusterSnapshotState, ClusterSnapshotNotFound, InvalidRetentionPeriod,
    ],
    ModifyClusterSnapshotSchedule(ModifyClusterSnapshotScheduleRequest) -> () [
        ClusterNotFound, SnapshotScheduleNotFound, InvalidClusterSnapshotScheduleState,
    ],
    ModifyClusterSubnetGroup(ModifyClusterSubnetGroupRequest) -> ModifyClusterSubnetGroupResult [
        ClusterSubnetGroupNotFound, ClusterSubnetQuotaExceeded, SubnetAlreadyInUse, InvalidSubnet,
        UnauthorizedOperation, DependentServiceRequestThrottling,
    ],
    ModifyEventSubscription(ModifyEventSubscriptionRequest) -> ModifyEventSubscriptionResult [
        SubscriptionNotFound, SnsInvalidTopic, SnsNoAuthorization, SnsTopicArnNotFound,
        SubscriptionEventIdNotFound, SubscriptionCategoryNotFound, SubscriptionSeverityNotFound,
        SourceNotFound, InvalidSubscriptionState,
    ],
    ModifyScheduledAction(ModifyScheduledActionRequest) -> ModifyScheduledActionResult [
        ScheduledActionNotFound, ScheduledActionTypeUnsupported, InvalidSchedule,
        InvalidScheduledAction, UnauthorizedOperation,
    ],
    ModifySnapshotCopyRetentionPeriod(ModifySnapshotCopyRetentionPeriodRequest) -> ModifySnapshotCopyRetentionPeriodResult [
        ClusterNotFound, SnapshotCopyDisabled, UnauthorizedOperation, InvalidClusterState,
        InvalidRetentionPeriod,
    ],
    ModifySnapshotSchedule(ModifySnapshotScheduleRequest) -> ModifySnapshotScheduleResult [
        InvalidSchedule, SnapshotScheduleNotFound, SnapshotScheduleUpdateInProgress,
    ],
    ModifyUsageLimit(ModifyUsageLimitRequest) -> ModifyUsageLimitResult [
        InvalidUsageLimit, UsageLimitNotFound, UnsupportedOperation,
    ],
    PauseCluster(PauseClusterRequest) -> PauseClusterResult [ClusterNotFound, InvalidClusterState],
    PurchaseReservedNodeOffering(PurchaseReservedNodeOfferingRequest) -> PurchaseReservedNodeOfferingResult [
        ReservedNodeOfferingNotFound, ReservedNodeAlreadyExists, ReservedNodeQuotaExceeded,
        UnsupportedOperation,
    ],
    RebootCluster(RebootClusterRequest) -> RebootClusterResult [
        InvalidClusterState, ClusterNotFound,
    ],
    ResetClusterParameterGroup(ResetClusterParameterGroupRequest) -> ResetClusterParameterGroupResult [
        InvalidClusterParameterGroupState, ClusterParameterGroupNotFound,
    ],
    ResizeCluster(ResizeClusterRequest) -> ResizeClusterResult [
        InvalidClusterState, ClusterNotFound, NumberOfNodesQuotaExceeded,
        NumberOfNodesPerClusterLimitExceeded, InsufficientClusterCapacity, UnsupportedOption,
        UnsupportedOperation, UnauthorizedOperation, LimitExceeded,
    ],
    RestoreFromClusterSnapshot(RestoreFromClusterSnapshotRequest) -> RestoreFromClusterSnapshotResult [
        AccessToSnapshotDenied, ClusterAlreadyExists, ClusterSnapshotNotFound, ClusterQuotaExceeded,
        InsufficientClusterCapacity, InvalidClusterSnapshotState, InvalidRestore,
        NumberOfNodesQuotaExceeded, NumberOfNodesPerClusterLimitExceeded, InvalidVpcNetworkState,
        InvalidClusterSubnetGroupState, InvalidSubnet, ClusterSubnetGroupNotFound,
        UnauthorizedOperation, HsmClientCertificateNotFound, HsmConfigurationNotFound,
        InvalidElasticIp, ClusterParameterGroupNotFound, ClusterSecurityGroupNotFound,
        LimitExceeded, DependentServiceRequestThrottling, InvalidClusterTrack,
        SnapshotScheduleNotFound, TagLimitExceeded, InvalidTag,
    ],
    RestoreTableFromClusterSnapshot(RestoreTableFromClusterSnapshotRequest) -> RestoreTableFromClusterSnapshotResult [
        ClusterSnapshotNotFound, InProgressTableRestoreQuotaExceeded, InvalidClusterSnapshotState,
        InvalidTableRestoreArgument, ClusterNotFound, InvalidClusterState, UnsupportedOperation,
    ],
    ResumeCluster(ResumeClusterRequest) -> ResumeClusterResult [
        ClusterNotFound, InvalidClusterState,
    ],
    RevokeClusterSecurityGroupIngress(RevokeClusterSecurityGroupIngressRequest) -> RevokeClusterSecurityGroupIngressResult [
        ClusterSecurityGroupNotFound, AuthorizationNotFound, InvalidClusterSecurityGroupState,
    ],
    RevokeSnapshotAccess(RevokeSnapshotAccessRequest) -> RevokeSnapshotAccessResult [
        AccessToSnapshotDenied, AuthorizationNotFound, ClusterSnapshotNotFound,
    ],
    RotateEncryptionKey(RotateEncryptionKeyRequest) -> RotateEncryptionKeyResult [
        ClusterNotFound, InvalidClusterState, DependentServiceRequestThrottling,
    ],
}

impl TryFrom<&str> for Operation {
    type Error = UnknownOperation;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::{Operation, RedshiftRequest, UnknownOperation};
    use crate::error::ErrorKind;
    use crate::input::{CreateTagsRequest, DescribeClustersRequest};
    use crate::output::DescribeClustersResult;

    #[test]
    fn names_parse_back() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>(), Ok(*op));
        }
        assert_eq!(Operation::ALL.len(), 92);
    }

    #[test]
    fn all_is_sorted() {
        let mut sorted = Operation::ALL.to_vec();
        sorted.sort_by_key(|op| op.name());
        assert_eq!(sorted, Operation::ALL);
    }

    #[test]
    fn unknown_names_fail() {
        let err = "DescribeEverything".parse::<Operation>().unwrap_err();
        assert_eq!(err, UnknownOperation("DescribeEverything".to_owned()));
        assert_eq!(err.name(), "DescribeEverything");
        assert_eq!(
            err.to_string(),
            "unknown Redshift operation `DescribeEverything`"
        );
    }

    #[test]
    fn requests_know_their_operation() {
        fn operation_of<R: RedshiftRequest>() -> Operation {
            R::OPERATION
        }
        assert_eq!(
            operation_of::<DescribeClustersRequest>(),
            Operation::DescribeClusters
        );
        assert_eq!(
            Operation::DescribeClusters.input_name(),
            "DescribeClustersRequest"
        );
        let _: Option<<DescribeClustersRequest as RedshiftRequest>::Output> =
            Some(DescribeClustersResult::new());
        let _: <CreateTagsRequest as RedshiftRequest>::Output = ();
    }

    #[test]
    fn input_shapes_follow_action_names() {
        for op in Operation::ALL {
            assert_eq!(op.input_name(), format!("{}Request", op.name()));
        }
    }

    #[test]
    fn documented_errors() {
        assert!(Operation::DescribeClusters
            .errors()
            .contains(&ErrorKind::ClusterNotFound));
        assert!(Operation::DescribeStorage.errors().is_empty());
        assert_eq!(
            Operation::CreateTags.errors(),
            &[
                ErrorKind::TagLimitExceeded,
                ErrorKind::ResourceNotFound,
                ErrorKind::InvalidTag
            ]
        );
    }
}
