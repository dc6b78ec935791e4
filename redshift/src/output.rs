/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Result shapes returned by the API actions that have a response body.

use crate::model::*;
use redshift_macros::shape;
use smithy_types::Instant;

/// Declares result shapes that wrap a single nested resource.
macro_rules! single_member_results {
    ($($result:ident { $member:ident: $ty:ty }),+ $(,)?) => {
        $(
            #[shape]
            pub struct $result {
                $member: $ty,
            }
        )+
    };
}

single_member_results! {
    AcceptReservedNodeExchangeResult { exchanged_reserved_node: ReservedNode },
    AuthorizeClusterSecurityGroupIngressResult { cluster_security_group: ClusterSecurityGroup },
    AuthorizeSnapshotAccessResult { snapshot: Snapshot },
    CopyClusterSnapshotResult { snapshot: Snapshot },
    CreateClusterResult { cluster: Cluster },
    CreateClusterParameterGroupResult { cluster_parameter_group: ClusterParameterGroup },
    CreateClusterSecurityGroupResult { cluster_security_group: ClusterSecurityGroup },
    CreateClusterSnapshotResult { snapshot: Snapshot },
    CreateClusterSubnetGroupResult { cluster_subnet_group: ClusterSubnetGroup },
    CreateEventSubscriptionResult { event_subscription: EventSubscription },
    CreateHsmClientCertificateResult { hsm_client_certificate: HsmClientCertificate },
    CreateHsmConfigurationResult { hsm_configuration: HsmConfiguration },
    CreateSnapshotCopyGrantResult { snapshot_copy_grant: SnapshotCopyGrant },
    DeleteClusterResult { cluster: Cluster },
    DeleteClusterSnapshotResult { snapshot: Snapshot },
    DisableSnapshotCopyResult { cluster: Cluster },
    EnableSnapshotCopyResult { cluster: Cluster },
    ModifyClusterResult { cluster: Cluster },
    ModifyClusterDbRevisionResult { cluster: Cluster },
    ModifyClusterIamRolesResult { cluster: Cluster },
    ModifyClusterMaintenanceResult { cluster: Cluster },
    ModifyClusterSnapshotResult { snapshot: Snapshot },
    ModifyClusterSubnetGroupResult { cluster_subnet_group: ClusterSubnetGroup },
    ModifyEventSubscriptionResult { event_subscription: EventSubscription },
    ModifySnapshotCopyRetentionPeriodResult { cluster: Cluster },
    PauseClusterResult { cluster: Cluster },
    PurchaseReservedNodeOfferingResult { reserved_node: ReservedNode },
    RebootClusterResult { cluster: Cluster },
    ResizeClusterResult { cluster: Cluster },
    RestoreFromClusterSnapshotResult { cluster: Cluster },
    RestoreTableFromClusterSnapshotResult { table_restore_status: TableRestoreStatus },
    ResumeClusterResult { cluster: Cluster },
    RevokeClusterSecurityGroupIngressResult { cluster_security_group: ClusterSecurityGroup },
    RevokeSnapshotAccessResult { snapshot: Snapshot },
    RotateEncryptionKeyResult { cluster: Cluster },
}

#[shape]
pub struct BatchDeleteClusterSnapshotsResult {
    /// <p>A list of the snapshot identifiers that were deleted.</p>
    resources: Vec<String>,
    /// <p>A list of any errors returned.</p>
    errors: Vec<SnapshotErrorMessage>,
}

#[shape]
pub struct BatchModifyClusterSnapshotsResult {
    /// <p>A list of the snapshots that were modified.</p>
    resources: Vec<String>,
    errors: Vec<SnapshotErrorMessage>,
}

/// Generates the two result shapes that describe resize progress.
macro_rules! resize_progress_results {
    ($($result:ident),+) => {
        $(
            /// <p>Describes the result of a cluster resize operation.</p>
            #[shape]
            pub struct $result {
                /// <p>The node type that the cluster will have after the resize operation is
                /// complete.</p>
                target_node_type: String,
                /// <p>The number of nodes that the cluster will have after the resize
                /// operation is complete.</p>
                target_number_of_nodes: i32,
                /// <p>The cluster type after the resize operation is complete.</p>
                target_cluster_type: String,
                /// <p>The status of the resize operation: <code>NONE</code>,
                /// <code>IN_PROGRESS</code>, <code>FAILED</code>, <code>SUCCEEDED</code> or
                /// <code>CANCELLING</code>.</p>
                status: String,
                import_tables_completed: Vec<String>,
                import_tables_in_progress: Vec<String>,
                import_tables_not_started: Vec<String>,
                avg_resize_rate_in_mega_bytes_per_second: f64,
                total_resize_data_in_mega_bytes: i64,
                progress_in_mega_bytes: i64,
                elapsed_time_in_seconds: i64,
                estimated_time_to_completion_in_seconds: i64,
                /// <p>An enum with possible values of <code>ClassicResize</code> and
                /// <code>ElasticResize</code>.</p>
                resize_type: String,
                /// <p>An optional string to provide additional details about the resize
                /// action.</p>
                message: String,
                /// <p>The type of encryption for the cluster after the resize is
                /// complete.</p>
                target_encryption_type: String,
                /// <p>The percent of data transferred from source cluster to target
                /// cluster.</p>
                data_transfer_progress_percent: f64,
            }
        )+
    };
}

resize_progress_results!(CancelResizeResult, DescribeResizeResult);

/// Generates the three result shapes that describe a scheduled action.
macro_rules! scheduled_action_results {
    ($($result:ident),+) => {
        $(
            #[shape]
            pub struct $result {
                scheduled_action_name: String,
                target_action: ScheduledActionType,
                schedule: String,
                iam_role: String,
                scheduled_action_description: String,
                state: ScheduledActionState,
                next_invocations: Vec<Instant>,
                start_time: Instant,
                end_time: Instant,
            }
        )+
    };
}

scheduled_action_results!(CreateScheduledActionResult, ModifyScheduledActionResult);

macro_rules! snapshot_schedule_results {
    ($($result:ident),+) => {
        $(
            #[shape]
            pub struct $result {
                schedule_definitions: Vec<String>,
                schedule_identifier: String,
                schedule_description: String,
                tags: Vec<Tag>,
                next_invocations: Vec<Instant>,
                associated_cluster_count: i32,
                associated_clusters: Vec<ClusterAssociatedToSchedule>,
            }
        )+
    };
}

snapshot_schedule_results!(CreateSnapshotScheduleResult, ModifySnapshotScheduleResult);

macro_rules! usage_limit_results {
    ($($result:ident),+) => {
        $(
            #[shape]
            pub struct $result {
                usage_limit_id: String,
                cluster_identifier: String,
                feature_type: UsageLimitFeatureType,
                limit_type: UsageLimitLimitType,
                amount: i64,
                period: UsageLimitPeriod,
                breach_action: UsageLimitBreachAction,
                tags: Vec<Tag>,
            }
        )+
    };
}

usage_limit_results!(CreateUsageLimitResult, ModifyUsageLimitResult);

macro_rules! logging_status_results {
    ($($result:ident),+) => {
        $(
            /// <p>Describes the status of logging for a cluster.</p>
            #[shape]
            pub struct $result {
                /// <p><code>true</code> if logging is on, <code>false</code> if logging is
                /// off.</p>
                logging_enabled: bool,
                /// <p>The name of the S3 bucket where the log files are stored.</p>
                bucket_name: String,
                /// <p>The prefix applied to the log file names.</p>
                s3_key_prefix: String,
                /// <p>The last time that logs were delivered.</p>
                last_successful_delivery_time: Instant,
                /// <p>The last time when logs failed to be delivered.</p>
                last_failure_time: Instant,
                /// <p>The message indicating that logs failed to be delivered.</p>
                last_failure_message: String,
            }
        )+
    };
}

logging_status_results!(DescribeLoggingStatusResult, DisableLoggingResult, EnableLoggingResult);

macro_rules! parameter_group_name_results {
    ($($result:ident),+) => {
        $(
            #[shape]
            pub struct $result {
                /// <p>The name of the cluster parameter group.</p>
                parameter_group_name: String,
                /// <p>The status of the parameter group. For example, if you made a change to
                /// a parameter group name-value pair, then the change could be pending a reboot
                /// of an associated cluster.</p>
                parameter_group_status: String,
            }
        )+
    };
}

parameter_group_name_results!(ModifyClusterParameterGroupResult, ResetClusterParameterGroupResult);

#[shape]
pub struct DescribeAccountAttributesResult {
    /// <p>A list of attributes assigned to an account.</p>
    account_attributes: Vec<AccountAttribute>,
}

#[shape]
pub struct DescribeClusterDbRevisionsResult {
    /// <p>A string representing the starting point for the next set of revisions. If a
    /// value is returned in a response, you can retrieve the next set of revisions by
    /// providing the value in the <code>marker</code> parameter and retrying the
    /// command.</p>
    marker: String,
    cluster_db_revisions: Vec<ClusterDbRevision>,
}

#[shape]
pub struct DescribeClusterParameterGroupsResult {
    marker: String,
    parameter_groups: Vec<ClusterParameterGroup>,
}

#[shape]
pub struct DescribeClusterParametersResult {
    /// <p>A list of <a>Parameter</a> instances. Each instance lists the parameters of one
    /// cluster parameter group.</p>
    parameters: Vec<Parameter>,
    marker: String,
}

#[shape]
pub struct DescribeClusterSecurityGroupsResult {
    marker: String,
    cluster_security_groups: Vec<ClusterSecurityGroup>,
}

#[shape]
pub struct DescribeClusterSnapshotsResult {
    marker: String,
    /// <p>A list of <a>Snapshot</a> instances.</p>
    snapshots: Vec<Snapshot>,
}

#[shape]
pub struct DescribeClusterSubnetGroupsResult {
    marker: String,
    cluster_subnet_groups: Vec<ClusterSubnetGroup>,
}

#[shape]
pub struct DescribeClusterTracksResult {
    /// <p>A list of maintenance tracks output by the <code>DescribeClusterTracks</code>
    /// operation.</p>
    maintenance_tracks: Vec<MaintenanceTrack>,
    marker: String,
}

#[shape]
pub struct DescribeClusterVersionsResult {
    marker: String,
    cluster_versions: Vec<ClusterVersion>,
}

/// <p>Contains the output from the <code>DescribeClusters</code> action.</p>
#[shape]
pub struct DescribeClustersResult {
    /// <p>A value that indicates the starting point for the next set of response records
    /// in a subsequent request. If a value is returned in a response, you can retrieve
    /// the next set of records by providing this returned marker value in the
    /// <code>Marker</code> parameter and retrying the command. If the <code>Marker</code>
    /// field is empty, all response records have been retrieved for the request.</p>
    marker: String,
    /// <p>A list of <code>Cluster</code> objects, where each object describes one
    /// cluster.</p>
    clusters: Vec<Cluster>,
}

#[shape]
pub struct DescribeDefaultClusterParametersResult {
    default_cluster_parameters: DefaultClusterParameters,
}

#[shape]
pub struct DescribeEventCategoriesResult {
    /// <p>A list of event categories descriptions.</p>
    event_categories_map_list: Vec<EventCategoriesMap>,
}

#[shape]
pub struct DescribeEventSubscriptionsResult {
    marker: String,
    event_subscriptions_list: Vec<EventSubscription>,
}

#[shape]
pub struct DescribeEventsResult {
    marker: String,
    events: Vec<Event>,
}

#[shape]
pub struct DescribeHsmClientCertificatesResult {
    marker: String,
    /// <p>A list of the identifiers for one or more HSM client certificates used by Amazon
    /// Redshift clusters to store and retrieve database encryption keys in an HSM.</p>
    hsm_client_certificates: Vec<HsmClientCertificate>,
}

#[shape]
pub struct DescribeHsmConfigurationsResult {
    marker: String,
    hsm_configurations: Vec<HsmConfiguration>,
}

#[shape]
pub struct DescribeNodeConfigurationOptionsResult {
    node_configuration_option_list: Vec<NodeConfigurationOption>,
    marker: String,
}

#[shape]
pub struct DescribeOrderableClusterOptionsResult {
    /// <p>An <code>OrderableClusterOption</code> structure containing information about
    /// orderable options for the cluster.</p>
    orderable_cluster_options: Vec<OrderableClusterOption>,
    marker: String,
}

#[shape]
pub struct DescribeReservedNodeOfferingsResult {
    marker: String,
    reserved_node_offerings: Vec<ReservedNodeOffering>,
}

#[shape]
pub struct DescribeReservedNodesResult {
    marker: String,
    reserved_nodes: Vec<ReservedNode>,
}

#[shape]
pub struct DescribeScheduledActionsResult {
    marker: String,
    scheduled_actions: Vec<ScheduledAction>,
}

#[shape]
pub struct DescribeSnapshotCopyGrantsResult {
    marker: String,
    snapshot_copy_grants: Vec<SnapshotCopyGrant>,
}

#[shape]
pub struct DescribeSnapshotSchedulesResult {
    snapshot_schedules: Vec<SnapshotSchedule>,
    marker: String,
}

#[shape]
pub struct DescribeStorageResult {
    /// <p>The total amount of storage currently used for snapshots.</p>
    total_backup_size_in_mega_bytes: f64,
    /// <p>The total amount of storage currently provisioned.</p>
    total_provisioned_storage_in_mega_bytes: f64,
}

#[shape]
pub struct DescribeTableRestoreStatusResult {
    /// <p>A list of status details for one or more table restore requests.</p>
    table_restore_status_details: Vec<TableRestoreStatus>,
    marker: String,
}

#[shape]
pub struct DescribeTagsResult {
    /// <p>A list of tags with their associated resources.</p>
    tagged_resources: Vec<TaggedResource>,
    marker: String,
}

#[shape]
pub struct DescribeUsageLimitsResult {
    /// <p>Contains the output from the <a>DescribeUsageLimits</a> action.</p>
    usage_limits: Vec<UsageLimit>,
    marker: String,
}

/// <p>Temporary credentials with authorization to log on to an Amazon Redshift
/// database.</p>
#[shape]
pub struct GetClusterCredentialsResult {
    /// <p>A database user name that is authorized to log on to the database
    /// <code>DbName</code> using the password <code>DbPassword</code>.</p>
    db_user: String,
    /// <p>A temporary password that authorizes the user name returned by
    /// <code>DbUser</code> to log on to the database <code>DbName</code>.</p>
    #[shape(sensitive)]
    db_password: String,
    /// <p>The date and time the password in <code>DbPassword</code> expires.</p>
    expiration: Instant,
}

#[shape]
pub struct GetReservedNodeExchangeOfferingsResult {
    marker: String,
    /// <p>Returns an array of <a>ReservedNodeOffering</a> objects.</p>
    reserved_node_offerings: Vec<ReservedNodeOffering>,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shape::Shape;

    #[test]
    fn generated_results_share_member_layout() {
        assert_eq!(
            CancelResizeResult::MEMBER_NAMES,
            DescribeResizeResult::MEMBER_NAMES
        );
        assert_eq!(CancelResizeResult::NAME, "CancelResizeResult");
        assert_eq!(DescribeResizeResult::NAME, "DescribeResizeResult");
        assert_eq!(
            DisableLoggingResult::MEMBER_NAMES,
            &[
                "LoggingEnabled",
                "BucketName",
                "S3KeyPrefix",
                "LastSuccessfulDeliveryTime",
                "LastFailureTime",
                "LastFailureMessage"
            ]
        );
    }

    #[test]
    fn single_member_results_wrap_resources() {
        let result = RebootClusterResult::new()
            .with_cluster(Cluster::new().with_cluster_identifier("c1").with_cluster_status("rebooting"));
        assert_eq!(
            result.cluster().and_then(|cluster| cluster.cluster_status()),
            Some("rebooting")
        );
        assert_eq!(
            result.to_string(),
            "{Cluster: {ClusterIdentifier: c1,ClusterStatus: rebooting}}"
        );
    }

    #[test]
    fn credentials_password_is_redacted() {
        let credentials = GetClusterCredentialsResult::new()
            .with_db_user("IAM:awsuser")
            .with_db_password("AMAFUyyuros/QjxPTtgzcsuQsqzIasdzJEN04aCtWDzXx1O9d6UmpkBtvEeqFly/EXAMPLE==")
            .with_expiration(Instant::from_epoch_seconds(1_500_000_000));
        let display = credentials.to_string();
        assert_eq!(
            display,
            "{DbUser: IAM:awsuser,\
             DbPassword: *** Sensitive Data Redacted ***,\
             Expiration: 2017-07-14T02:40:00Z}"
        );
        assert!(!format!("{:?}", credentials).contains("EXAMPLE=="));
    }

    #[test]
    fn paginated_results_carry_marker() {
        let page = DescribeClustersResult::new()
            .with_marker("token-2")
            .with_clusters([Cluster::new().with_cluster_identifier("c1")])
            .with_clusters([Cluster::new().with_cluster_identifier("c2")]);
        assert_eq!(page.marker(), Some("token-2"));
        let ids: Vec<_> = page
            .clusters()
            .unwrap_or_default()
            .iter()
            .filter_map(|cluster| cluster.cluster_identifier())
            .collect();
        assert_eq!(ids, vec!["c1", "c2"]);
    }
}
