/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Request shapes, one per API action.

use crate::model::*;
use redshift_macros::shape;
use smithy_types::Instant;

#[shape]
pub struct AcceptReservedNodeExchangeRequest {
    /// <p>A string representing the node identifier of the DC1 Reserved Node to be
    /// exchanged.</p>
    reserved_node_id: String,
    /// <p>The unique identifier of the DC2 Reserved Node offering to be used for the
    /// exchange.</p>
    target_reserved_node_offering_id: String,
}

#[shape]
pub struct AuthorizeClusterSecurityGroupIngressRequest {
    /// <p>The name of the security group to which the ingress rule is added.</p>
    cluster_security_group_name: String,
    /// <p>The IP range to be added the Amazon Redshift security group.</p>
    #[shape(name = "CIDRIP")]
    cidrip: String,
    /// <p>The EC2 security group to be added the Amazon Redshift security group.</p>
    #[shape(name = "EC2SecurityGroupName")]
    ec2_security_group_name: String,
    /// <p>The AWS account number of the owner of the security group specified by the
    /// <i>EC2SecurityGroupName</i> parameter.</p>
    #[shape(name = "EC2SecurityGroupOwnerId")]
    ec2_security_group_owner_id: String,
}

#[shape]
pub struct AuthorizeSnapshotAccessRequest {
    snapshot_identifier: String,
    snapshot_cluster_identifier: String,
    /// <p>The identifier of the AWS customer account authorized to restore the specified
    /// snapshot. To share a snapshot with AWS support, specify
    /// amazon-redshift-support.</p>
    account_with_restore_access: String,
}

#[shape]
pub struct BatchDeleteClusterSnapshotsRequest {
    /// <p>A list of identifiers for the snapshots that you want to delete.</p>
    identifiers: Vec<DeleteClusterSnapshotMessage>,
}

#[shape]
pub struct BatchModifyClusterSnapshotsRequest {
    /// <p>A list of snapshot identifiers you want to modify.</p>
    snapshot_identifier_list: Vec<String>,
    /// <p>The number of days that a manual snapshot is retained. If you specify the value
    /// -1, the manual snapshot is retained indefinitely.</p>
    manual_snapshot_retention_period: i32,
    /// <p>A boolean value indicating whether to override an exception if the retention
    /// period has passed.</p>
    force: bool,
}

#[shape]
pub struct CancelResizeRequest {
    /// <p>The unique identifier for the cluster that you want to cancel a resize
    /// operation for.</p>
    cluster_identifier: String,
}

#[shape]
pub struct CopyClusterSnapshotRequest {
    /// <p>The identifier for the source snapshot.</p>
    source_snapshot_identifier: String,
    source_snapshot_cluster_identifier: String,
    /// <p>The identifier given to the new manual snapshot.</p>
    target_snapshot_identifier: String,
    manual_snapshot_retention_period: i32,
}

/// <p>Creates a new cluster with the specified parameters.</p>
#[shape]
pub struct CreateClusterRequest {
    /// <p>The name of the first database to be created when the cluster is created. If you
    /// do not provide a value, Amazon Redshift creates a database named
    /// <code>dev</code>.</p>
    #[shape(name = "DBName")]
    db_name: String,
    /// <p>A unique identifier for the cluster. You use this identifier to refer to the
    /// cluster for any subsequent cluster operations such as deleting or modifying.</p>
    cluster_identifier: String,
    /// <p>The type of the cluster: <code>single-node</code> or
    /// <code>multi-node</code>.</p>
    cluster_type: String,
    /// <p>The node type to be provisioned for the cluster.</p>
    node_type: String,
    /// <p>The user name associated with the master user account for the cluster that is
    /// being created.</p>
    master_username: String,
    /// <p>The password associated with the master user account for the cluster that is
    /// being created.</p>
    #[shape(sensitive)]
    master_user_password: String,
    /// <p>A list of security groups to be associated with this cluster.</p>
    cluster_security_groups: Vec<String>,
    /// <p>A list of Virtual Private Cloud (VPC) security groups to be associated with the
    /// cluster.</p>
    vpc_security_group_ids: Vec<String>,
    /// <p>The name of a cluster subnet group to be associated with this cluster.</p>
    cluster_subnet_group_name: String,
    /// <p>The EC2 Availability Zone (AZ) in which you want Amazon Redshift to provision the
    /// cluster.</p>
    availability_zone: String,
    /// <p>The weekly time range (in UTC) during which automated cluster maintenance can
    /// occur. Format: <code>ddd:hh24:mi-ddd:hh24:mi</code></p>
    preferred_maintenance_window: String,
    /// <p>The name of the parameter group to be associated with this cluster.</p>
    cluster_parameter_group_name: String,
    /// <p>The number of days that automated snapshots are retained. If the value is 0,
    /// automated snapshots are disabled.</p>
    automated_snapshot_retention_period: i32,
    /// <p>The default number of days to retain a manual snapshot. The value must be either
    /// -1 or an integer between 1 and 3,653.</p>
    manual_snapshot_retention_period: i32,
    /// <p>The port number on which the cluster accepts incoming connections.</p>
    port: i32,
    /// <p>The version of the Amazon Redshift engine software that you want to deploy on
    /// the cluster.</p>
    cluster_version: String,
    /// <p>If <code>true</code>, major version upgrades can be applied during the
    /// maintenance window to the Amazon Redshift engine that is running on the
    /// cluster.</p>
    allow_version_upgrade: bool,
    /// <p>The number of compute nodes in the cluster. This parameter is required when the
    /// <b>ClusterType</b> parameter is specified as <code>multi-node</code>.</p>
    number_of_nodes: i32,
    /// <p>If <code>true</code>, the cluster can be accessed from a public network.</p>
    publicly_accessible: bool,
    /// <p>If <code>true</code>, the data in the cluster is encrypted at rest.</p>
    encrypted: bool,
    /// <p>Specifies the name of the HSM client certificate the Amazon Redshift cluster uses
    /// to retrieve the data encryption keys stored in an HSM.</p>
    hsm_client_certificate_identifier: String,
    /// <p>Specifies the name of the HSM configuration that contains the information the
    /// Amazon Redshift cluster can use to retrieve and store keys in an HSM.</p>
    hsm_configuration_identifier: String,
    /// <p>The Elastic IP (EIP) address for the cluster.</p>
    elastic_ip: String,
    /// <p>A list of tag instances.</p>
    tags: Vec<Tag>,
    /// <p>The AWS Key Management Service (KMS) key ID of the encryption key that you want
    /// to use to encrypt data in the cluster.</p>
    kms_key_id: String,
    /// <p>An option that specifies whether to create the cluster with enhanced VPC routing
    /// enabled.</p>
    enhanced_vpc_routing: bool,
    /// <p>Reserved.</p>
    additional_info: String,
    /// <p>A list of AWS Identity and Access Management (IAM) roles that can be used by the
    /// cluster to access other AWS services.</p>
    iam_roles: Vec<String>,
    /// <p>An optional parameter for the name of the maintenance track for the
    /// cluster.</p>
    maintenance_track_name: String,
    /// <p>A unique identifier for the snapshot schedule.</p>
    snapshot_schedule_identifier: String,
}

#[shape]
pub struct CreateClusterParameterGroupRequest {
    /// <p>The name of the cluster parameter group. Must be unique within your AWS
    /// account.</p>
    parameter_group_name: String,
    /// <p>The Amazon Redshift engine version to which the cluster parameter group
    /// applies.</p>
    parameter_group_family: String,
    description: String,
    tags: Vec<Tag>,
}

#[shape]
pub struct CreateClusterSecurityGroupRequest {
    cluster_security_group_name: String,
    description: String,
    tags: Vec<Tag>,
}

#[shape]
pub struct CreateClusterSnapshotRequest {
    /// <p>A unique identifier for the snapshot that you are requesting. This identifier
    /// must be unique for all snapshots within the AWS account.</p>
    snapshot_identifier: String,
    /// <p>The cluster identifier for which you want a snapshot.</p>
    cluster_identifier: String,
    manual_snapshot_retention_period: i32,
    tags: Vec<Tag>,
}

#[shape]
pub struct CreateClusterSubnetGroupRequest {
    cluster_subnet_group_name: String,
    description: String,
    /// <p>An array of VPC subnet IDs. A maximum of 20 subnets can be modified in a single
    /// request.</p>
    subnet_ids: Vec<String>,
    tags: Vec<Tag>,
}

#[shape]
pub struct CreateEventSubscriptionRequest {
    /// <p>The name of the event subscription to be created.</p>
    subscription_name: String,
    /// <p>The Amazon Resource Name (ARN) of the Amazon SNS topic used to transmit the event
    /// notifications.</p>
    sns_topic_arn: String,
    /// <p>The type of source that will be generating the events.</p>
    source_type: String,
    /// <p>A list of one or more identifiers of Amazon Redshift source objects.</p>
    source_ids: Vec<String>,
    /// <p>Specifies the Amazon Redshift event categories to be published by the event
    /// notification subscription.</p>
    event_categories: Vec<String>,
    /// <p>Specifies the Amazon Redshift event severity to be published by the event
    /// notification subscription. Values: ERROR, INFO</p>
    severity: String,
    /// <p>A boolean value; set to <code>true</code> to activate the subscription.</p>
    enabled: bool,
    tags: Vec<Tag>,
}

#[shape]
pub struct CreateHsmClientCertificateRequest {
    hsm_client_certificate_identifier: String,
    tags: Vec<Tag>,
}

#[shape]
pub struct CreateHsmConfigurationRequest {
    hsm_configuration_identifier: String,
    description: String,
    /// <p>The IP address that the Amazon Redshift cluster must use to access the HSM.</p>
    hsm_ip_address: String,
    hsm_partition_name: String,
    /// <p>The password required to access the HSM partition.</p>
    #[shape(sensitive)]
    hsm_partition_password: String,
    /// <p>The HSMs public certificate file. When using Cloud HSM, the file name is
    /// server.pem.</p>
    hsm_server_public_certificate: String,
    tags: Vec<Tag>,
}

#[shape]
pub struct CreateScheduledActionRequest {
    /// <p>The name of the scheduled action. The name must be unique within an
    /// account.</p>
    scheduled_action_name: String,
    /// <p>A JSON format string of the Amazon Redshift API operation with input
    /// parameters.</p>
    target_action: ScheduledActionType,
    schedule: String,
    iam_role: String,
    scheduled_action_description: String,
    start_time: Instant,
    end_time: Instant,
    /// <p>If true, the schedule is enabled. If false, the scheduled action does not
    /// trigger.</p>
    enable: bool,
}

#[shape]
pub struct CreateSnapshotCopyGrantRequest {
    snapshot_copy_grant_name: String,
    kms_key_id: String,
    tags: Vec<Tag>,
}

#[shape]
pub struct CreateSnapshotScheduleRequest {
    /// <p>The definition of the snapshot schedule. The definition is made up of schedule
    /// expressions, for example "cron(30 12 *)" or "rate(12 hours)".</p>
    schedule_definitions: Vec<String>,
    schedule_identifier: String,
    schedule_description: String,
    tags: Vec<Tag>,
    dry_run: bool,
    next_invocations: i32,
}

#[shape]
pub struct CreateTagsRequest {
    /// <p>The Amazon Resource Name (ARN) to which you want to add the tag or tags.</p>
    resource_name: String,
    /// <p>One or more name/value pairs to add as tags to the specified resource.</p>
    tags: Vec<Tag>,
}

#[shape]
pub struct CreateUsageLimitRequest {
    cluster_identifier: String,
    feature_type: UsageLimitFeatureType,
    limit_type: UsageLimitLimitType,
    /// <p>The limit amount. If time-based, this amount is in minutes. If data-based, this
    /// amount is in terabytes (TB). The value must be a positive number.</p>
    amount: i64,
    period: UsageLimitPeriod,
    breach_action: UsageLimitBreachAction,
    tags: Vec<Tag>,
}

#[shape]
pub struct DeleteClusterRequest {
    /// <p>The identifier of the cluster to be deleted.</p>
    cluster_identifier: String,
    /// <p>Determines whether a final snapshot of the cluster is created before Amazon
    /// Redshift deletes the cluster. If <code>true</code>, a final cluster snapshot is
    /// not created.</p>
    skip_final_cluster_snapshot: bool,
    final_cluster_snapshot_identifier: String,
    final_cluster_snapshot_retention_period: i32,
}

#[shape]
pub struct DeleteClusterParameterGroupRequest {
    parameter_group_name: String,
}

#[shape]
pub struct DeleteClusterSecurityGroupRequest {
    cluster_security_group_name: String,
}

#[shape]
pub struct DeleteClusterSnapshotRequest {
    snapshot_identifier: String,
    snapshot_cluster_identifier: String,
}

#[shape]
pub struct DeleteClusterSubnetGroupRequest {
    cluster_subnet_group_name: String,
}

#[shape]
pub struct DeleteEventSubscriptionRequest {
    subscription_name: String,
}

#[shape]
pub struct DeleteHsmClientCertificateRequest {
    hsm_client_certificate_identifier: String,
}

#[shape]
pub struct DeleteHsmConfigurationRequest {
    hsm_configuration_identifier: String,
}

#[shape]
pub struct DeleteScheduledActionRequest {
    scheduled_action_name: String,
}

#[shape]
pub struct DeleteSnapshotCopyGrantRequest {
    snapshot_copy_grant_name: String,
}

#[shape]
pub struct DeleteSnapshotScheduleRequest {
    schedule_identifier: String,
}

#[shape]
pub struct DeleteTagsRequest {
    resource_name: String,
    /// <p>The tag key that you want to delete.</p>
    tag_keys: Vec<String>,
}

#[shape]
pub struct DeleteUsageLimitRequest {
    usage_limit_id: String,
}

#[shape]
pub struct DescribeAccountAttributesRequest {
    /// <p>A list of attribute names.</p>
    attribute_names: Vec<String>,
}

#[shape]
pub struct DescribeClusterDbRevisionsRequest {
    cluster_identifier: String,
    max_records: i32,
    marker: String,
}

#[shape]
pub struct DescribeClusterParameterGroupsRequest {
    parameter_group_name: String,
    max_records: i32,
    marker: String,
    tag_keys: Vec<String>,
    tag_values: Vec<String>,
}

#[shape]
pub struct DescribeClusterParametersRequest {
    parameter_group_name: String,
    /// <p>The parameter types to return: <code>user</code> or
    /// <code>engine-default</code>.</p>
    source: String,
    max_records: i32,
    marker: String,
}

#[shape]
pub struct DescribeClusterSecurityGroupsRequest {
    cluster_security_group_name: String,
    max_records: i32,
    marker: String,
    tag_keys: Vec<String>,
    tag_values: Vec<String>,
}

#[shape]
pub struct DescribeClusterSnapshotsRequest {
    /// <p>The identifier of the cluster which generated the requested snapshots.</p>
    cluster_identifier: String,
    /// <p>The snapshot identifier of the snapshot about which to return
    /// information.</p>
    snapshot_identifier: String,
    /// <p>The type of snapshots for which you are requesting information:
    /// <code>automated</code> or <code>manual</code>.</p>
    snapshot_type: String,
    /// <p>A value that requests only snapshots created at or after the specified
    /// time.</p>
    start_time: Instant,
    /// <p>A time value that requests only snapshots created at or before the specified
    /// time.</p>
    end_time: Instant,
    /// <p>The maximum number of response records to return in each call.</p>
    max_records: i32,
    /// <p>An optional parameter that specifies the starting point to return a set of
    /// response records.</p>
    marker: String,
    /// <p>The AWS customer account used to create or copy the snapshot.</p>
    owner_account: String,
    tag_keys: Vec<String>,
    tag_values: Vec<String>,
    /// <p>A value that indicates whether to return snapshots only for an existing
    /// cluster.</p>
    cluster_exists: bool,
    sorting_entities: Vec<SnapshotSortingEntity>,
}

#[shape]
pub struct DescribeClusterSubnetGroupsRequest {
    cluster_subnet_group_name: String,
    max_records: i32,
    marker: String,
    tag_keys: Vec<String>,
    tag_values: Vec<String>,
}

#[shape]
pub struct DescribeClusterTracksRequest {
    maintenance_track_name: String,
    max_records: i32,
    marker: String,
}

#[shape]
pub struct DescribeClusterVersionsRequest {
    cluster_version: String,
    cluster_parameter_group_family: String,
    max_records: i32,
    marker: String,
}

/// <p>Returns properties of provisioned clusters.</p>
#[shape]
pub struct DescribeClustersRequest {
    /// <p>The unique identifier of a cluster whose properties you are requesting.</p>
    cluster_identifier: String,
    /// <p>The maximum number of response records to return in each call. If the number of
    /// remaining response records exceeds the specified value, a marker is included in
    /// the response.</p>
    max_records: i32,
    /// <p>An optional parameter that specifies the starting point to return a set of
    /// response records.</p>
    marker: String,
    /// <p>A tag key or keys for which you want to return all matching clusters that are
    /// associated with the specified key or keys.</p>
    tag_keys: Vec<String>,
    /// <p>A tag value or values for which you want to return all matching clusters that
    /// are associated with the specified tag value or values.</p>
    tag_values: Vec<String>,
}

#[shape]
pub struct DescribeDefaultClusterParametersRequest {
    parameter_group_family: String,
    max_records: i32,
    marker: String,
}

#[shape]
pub struct DescribeEventCategoriesRequest {
    /// <p>The source type, such as cluster or parameter group, to which the described
    /// event categories apply.</p>
    source_type: String,
}

#[shape]
pub struct DescribeEventSubscriptionsRequest {
    subscription_name: String,
    max_records: i32,
    marker: String,
    tag_keys: Vec<String>,
    tag_values: Vec<String>,
}

#[shape]
pub struct DescribeEventsRequest {
    source_identifier: String,
    source_type: SourceType,
    start_time: Instant,
    end_time: Instant,
    /// <p>The number of minutes prior to the time of the request for which to retrieve
    /// events. Default: <code>60</code></p>
    duration: i32,
    max_records: i32,
    marker: String,
}

#[shape]
pub struct DescribeHsmClientCertificatesRequest {
    hsm_client_certificate_identifier: String,
    max_records: i32,
    marker: String,
    tag_keys: Vec<String>,
    tag_values: Vec<String>,
}

#[shape]
pub struct DescribeHsmConfigurationsRequest {
    hsm_configuration_identifier: String,
    max_records: i32,
    marker: String,
    tag_keys: Vec<String>,
    tag_values: Vec<String>,
}

#[shape]
pub struct DescribeLoggingStatusRequest {
    cluster_identifier: String,
}

#[shape]
pub struct DescribeNodeConfigurationOptionsRequest {
    /// <p>The action type to evaluate for possible node configurations.</p>
    action_type: ActionType,
    cluster_identifier: String,
    snapshot_identifier: String,
    owner_account: String,
    /// <p>A set of name, operator, and value items to filter the results.</p>
    filters: Vec<NodeConfigurationOptionsFilter>,
    marker: String,
    max_records: i32,
}

#[shape]
pub struct DescribeOrderableClusterOptionsRequest {
    cluster_version: String,
    node_type: String,
    max_records: i32,
    marker: String,
}

#[shape]
pub struct DescribeReservedNodeOfferingsRequest {
    reserved_node_offering_id: String,
    max_records: i32,
    marker: String,
}

#[shape]
pub struct DescribeReservedNodesRequest {
    reserved_node_id: String,
    max_records: i32,
    marker: String,
}

#[shape]
pub struct DescribeResizeRequest {
    cluster_identifier: String,
}

#[shape]
pub struct DescribeScheduledActionsRequest {
    scheduled_action_name: String,
    target_action_type: ScheduledActionTypeValues,
    start_time: Instant,
    end_time: Instant,
    /// <p>If true, retrieve only active scheduled actions. If false, retrieve only
    /// disabled scheduled actions.</p>
    active: bool,
    filters: Vec<ScheduledActionFilter>,
    marker: String,
    max_records: i32,
}

#[shape]
pub struct DescribeSnapshotCopyGrantsRequest {
    snapshot_copy_grant_name: String,
    max_records: i32,
    marker: String,
    tag_keys: Vec<String>,
    tag_values: Vec<String>,
}

#[shape]
pub struct DescribeSnapshotSchedulesRequest {
    cluster_identifier: String,
    schedule_identifier: String,
    tag_keys: Vec<String>,
    tag_values: Vec<String>,
    marker: String,
    max_records: i32,
}

#[shape]
pub struct DescribeStorageRequest {}

#[shape]
pub struct DescribeTableRestoreStatusRequest {
    cluster_identifier: String,
    table_restore_request_id: String,
    max_records: i32,
    marker: String,
}

#[shape]
pub struct DescribeTagsRequest {
    resource_name: String,
    /// <p>The type of resource with which you want to view tags, for example
    /// <code>Cluster</code> or <code>Snapshot copy grant</code>.</p>
    resource_type: String,
    max_records: i32,
    marker: String,
    tag_keys: Vec<String>,
    tag_values: Vec<String>,
}

#[shape]
pub struct DescribeUsageLimitsRequest {
    usage_limit_id: String,
    cluster_identifier: String,
    feature_type: UsageLimitFeatureType,
    max_records: i32,
    marker: String,
    tag_keys: Vec<String>,
    tag_values: Vec<String>,
}

#[shape]
pub struct DisableLoggingRequest {
    cluster_identifier: String,
}

#[shape]
pub struct DisableSnapshotCopyRequest {
    cluster_identifier: String,
}

#[shape]
pub struct EnableLoggingRequest {
    cluster_identifier: String,
    /// <p>The name of an existing S3 bucket where the log files are to be stored.</p>
    bucket_name: String,
    /// <p>The prefix applied to the log file names.</p>
    s3_key_prefix: String,
}

#[shape]
pub struct EnableSnapshotCopyRequest {
    cluster_identifier: String,
    /// <p>The destination AWS Region that you want to copy snapshots to.</p>
    destination_region: String,
    /// <p>The number of days to retain automated snapshots in the destination region after
    /// they are copied from the source region. Default is 7.</p>
    retention_period: i32,
    snapshot_copy_grant_name: String,
    manual_snapshot_retention_period: i32,
}

#[shape]
pub struct GetClusterCredentialsRequest {
    /// <p>The name of a database user. If a user name matching <code>DbUser</code> exists
    /// in the database, the temporary user credentials have the same permissions as the
    /// existing user.</p>
    db_user: String,
    /// <p>The name of a database that <code>DbUser</code> is authorized to log on to.</p>
    db_name: String,
    cluster_identifier: String,
    /// <p>The number of seconds until the returned temporary password expires. Range:
    /// 900-3600. Default: 900.</p>
    duration_seconds: i32,
    /// <p>Create a database user with the name specified for the user named in
    /// <code>DbUser</code> if one does not exist.</p>
    auto_create: bool,
    db_groups: Vec<String>,
}

#[shape]
pub struct GetReservedNodeExchangeOfferingsRequest {
    /// <p>A string representing the node identifier for the DC1 Reserved Node to be
    /// exchanged.</p>
    reserved_node_id: String,
    max_records: i32,
    marker: String,
}

/// <p>Modifies the settings for a cluster.</p>
#[shape]
pub struct ModifyClusterRequest {
    /// <p>The unique identifier of the cluster to be modified.</p>
    cluster_identifier: String,
    /// <p>The new cluster type.</p>
    cluster_type: String,
    /// <p>The new node type of the cluster.</p>
    node_type: String,
    /// <p>The new number of nodes of the cluster.</p>
    number_of_nodes: i32,
    cluster_security_groups: Vec<String>,
    vpc_security_group_ids: Vec<String>,
    /// <p>The new password for the cluster master user.</p>
    #[shape(sensitive)]
    master_user_password: String,
    cluster_parameter_group_name: String,
    automated_snapshot_retention_period: i32,
    manual_snapshot_retention_period: i32,
    preferred_maintenance_window: String,
    cluster_version: String,
    allow_version_upgrade: bool,
    hsm_client_certificate_identifier: String,
    hsm_configuration_identifier: String,
    /// <p>The new identifier for the cluster.</p>
    new_cluster_identifier: String,
    publicly_accessible: bool,
    elastic_ip: String,
    enhanced_vpc_routing: bool,
    maintenance_track_name: String,
    /// <p>Indicates whether the cluster is encrypted. If the value is encrypted (true) and
    /// you provide a value for the <code>KmsKeyId</code> parameter, we encrypt the cluster
    /// with the provided <code>KmsKeyId</code>.</p>
    encrypted: bool,
    kms_key_id: String,
}

#[shape]
pub struct ModifyClusterDbRevisionRequest {
    cluster_identifier: String,
    /// <p>The identifier of the database revision. You can retrieve this value from the
    /// response to the <code>DescribeClusterDbRevisions</code> request.</p>
    revision_target: String,
}

#[shape]
pub struct ModifyClusterIamRolesRequest {
    cluster_identifier: String,
    /// <p>Zero or more IAM roles to associate with the cluster. You can associate up to 10
    /// IAM roles with a single cluster in a single request.</p>
    add_iam_roles: Vec<String>,
    /// <p>Zero or more IAM roles in ARN format to disassociate from the cluster.</p>
    remove_iam_roles: Vec<String>,
}

#[shape]
pub struct ModifyClusterMaintenanceRequest {
    cluster_identifier: String,
    /// <p>A boolean indicating whether to enable the deferred maintenance window.</p>
    defer_maintenance: bool,
    defer_maintenance_identifier: String,
    defer_maintenance_start_time: Instant,
    defer_maintenance_end_time: Instant,
    /// <p>An integer indicating the duration of the maintenance window in days.</p>
    defer_maintenance_duration: i32,
}

#[shape]
pub struct ModifyClusterParameterGroupRequest {
    parameter_group_name: String,
    /// <p>An array of parameters to be modified. A maximum of 20 parameters can be modified
    /// in a single request.</p>
    parameters: Vec<Parameter>,
}

#[shape]
pub struct ModifyClusterSnapshotRequest {
    snapshot_identifier: String,
    manual_snapshot_retention_period: i32,
    force: bool,
}

#[shape]
pub struct ModifyClusterSnapshotScheduleRequest {
    cluster_identifier: String,
    schedule_identifier: String,
    /// <p>A boolean to indicate whether to remove the assoiciation between the cluster and
    /// the schedule.</p>
    disassociate_schedule: bool,
}

#[shape]
pub struct ModifyClusterSubnetGroupRequest {
    cluster_subnet_group_name: String,
    description: String,
    subnet_ids: Vec<String>,
}

#[shape]
pub struct ModifyEventSubscriptionRequest {
    subscription_name: String,
    sns_topic_arn: String,
    source_type: String,
    source_ids: Vec<String>,
    event_categories: Vec<String>,
    severity: String,
    enabled: bool,
}

#[shape]
pub struct ModifyScheduledActionRequest {
    scheduled_action_name: String,
    target_action: ScheduledActionType,
    schedule: String,
    iam_role: String,
    scheduled_action_description: String,
    start_time: Instant,
    end_time: Instant,
    enable: bool,
}

#[shape]
pub struct ModifySnapshotCopyRetentionPeriodRequest {
    cluster_identifier: String,
    /// <p>The number of days to retain automated snapshots in the destination AWS Region
    /// after they are copied from the source AWS Region.</p>
    retention_period: i32,
    /// <p>Indicates whether to apply the snapshot retention period to newly copied manual
    /// snapshots instead of automated snapshots.</p>
    manual: bool,
}

#[shape]
pub struct ModifySnapshotScheduleRequest {
    schedule_identifier: String,
    schedule_definitions: Vec<String>,
}

#[shape]
pub struct ModifyUsageLimitRequest {
    usage_limit_id: String,
    amount: i64,
    breach_action: UsageLimitBreachAction,
}

#[shape]
pub struct PauseClusterRequest {
    cluster_identifier: String,
}

#[shape]
pub struct PurchaseReservedNodeOfferingRequest {
    /// <p>The unique identifier of the reserved node offering you want to purchase.</p>
    reserved_node_offering_id: String,
    /// <p>The number of reserved nodes that you want to purchase. Default:
    /// <code>1</code></p>
    node_count: i32,
}

#[shape]
pub struct RebootClusterRequest {
    cluster_identifier: String,
}

#[shape]
pub struct ResetClusterParameterGroupRequest {
    parameter_group_name: String,
    /// <p>If <code>true</code>, all parameters in the specified parameter group will be
    /// reset to their default values.</p>
    reset_all_parameters: bool,
    parameters: Vec<Parameter>,
}

#[shape]
pub struct ResizeClusterRequest {
    cluster_identifier: String,
    cluster_type: String,
    node_type: String,
    number_of_nodes: i32,
    /// <p>A boolean value indicating whether the resize operation is using the classic
    /// resize process.</p>
    classic: bool,
}

#[shape]
pub struct RestoreFromClusterSnapshotRequest {
    /// <p>The identifier of the cluster that will be created from restoring the
    /// snapshot.</p>
    cluster_identifier: String,
    /// <p>The name of the snapshot from which to create the new cluster. This parameter
    /// isn't case sensitive.</p>
    snapshot_identifier: String,
    snapshot_cluster_identifier: String,
    port: i32,
    availability_zone: String,
    allow_version_upgrade: bool,
    cluster_subnet_group_name: String,
    publicly_accessible: bool,
    /// <p>The AWS customer account used to create or copy the snapshot. Required if you
    /// are restoring a snapshot you do not own.</p>
    owner_account: String,
    hsm_client_certificate_identifier: String,
    hsm_configuration_identifier: String,
    elastic_ip: String,
    cluster_parameter_group_name: String,
    cluster_security_groups: Vec<String>,
    vpc_security_group_ids: Vec<String>,
    preferred_maintenance_window: String,
    automated_snapshot_retention_period: i32,
    manual_snapshot_retention_period: i32,
    kms_key_id: String,
    /// <p>The node type that the restored cluster will be provisioned with.</p>
    node_type: String,
    enhanced_vpc_routing: bool,
    /// <p>Reserved.</p>
    additional_info: String,
    iam_roles: Vec<String>,
    maintenance_track_name: String,
    snapshot_schedule_identifier: String,
    number_of_nodes: i32,
}

#[shape]
pub struct RestoreTableFromClusterSnapshotRequest {
    cluster_identifier: String,
    snapshot_identifier: String,
    source_database_name: String,
    source_schema_name: String,
    source_table_name: String,
    target_database_name: String,
    target_schema_name: String,
    /// <p>The name of the table to create as a result of the current request.</p>
    new_table_name: String,
}

#[shape]
pub struct ResumeClusterRequest {
    cluster_identifier: String,
}

#[shape]
pub struct RevokeClusterSecurityGroupIngressRequest {
    cluster_security_group_name: String,
    /// <p>The IP range for which to revoke access. This range must be a valid Classless
    /// Inter-Domain Routing (CIDR) block of IP addresses.</p>
    #[shape(name = "CIDRIP")]
    cidrip: String,
    #[shape(name = "EC2SecurityGroupName")]
    ec2_security_group_name: String,
    #[shape(name = "EC2SecurityGroupOwnerId")]
    ec2_security_group_owner_id: String,
}

#[shape]
pub struct RevokeSnapshotAccessRequest {
    snapshot_identifier: String,
    snapshot_cluster_identifier: String,
    account_with_restore_access: String,
}

#[shape]
pub struct RotateEncryptionKeyRequest {
    /// <p>The unique identifier of the cluster that you want to rotate the encryption keys
    /// for.</p>
    cluster_identifier: String,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shape::Shape;

    #[test]
    fn ingress_request_lists_only_set_members() {
        let request = AuthorizeClusterSecurityGroupIngressRequest::new()
            .with_cluster_security_group_name("examplesecuritygroup");
        assert_eq!(
            request.cluster_security_group_name(),
            Some("examplesecuritygroup")
        );
        assert_eq!(request.cidrip(), None);
        assert_eq!(
            request.to_string(),
            "{ClusterSecurityGroupName: examplesecuritygroup}"
        );
        assert_eq!(
            AuthorizeClusterSecurityGroupIngressRequest::MEMBER_NAMES,
            &[
                "ClusterSecurityGroupName",
                "CIDRIP",
                "EC2SecurityGroupName",
                "EC2SecurityGroupOwnerId"
            ]
        );
    }

    #[test]
    fn empty_request() {
        let request = DescribeStorageRequest::new();
        assert_eq!(request, DescribeStorageRequest::default());
        assert_eq!(request.to_string(), "{}");
        assert!(DescribeStorageRequest::MEMBER_NAMES.is_empty());
    }

    #[test]
    fn list_setter_replaces_and_fluent_appends() {
        let mut request = DeleteTagsRequest::new()
            .with_tag_keys(["owner"])
            .with_tag_keys(["team"]);
        assert_eq!(
            request.tag_keys(),
            Some(&["owner".to_owned(), "team".to_owned()][..])
        );
        request = request.with_tag_keys(vec!["env"]);
        assert_eq!(request.tag_keys(), Some(&["env".to_owned()][..]));
        request.set_tag_keys(Some(vec!["cost-center".to_owned()]));
        assert_eq!(request.tag_keys(), Some(&["cost-center".to_owned()][..]));
        request.set_tag_keys(None);
        assert_eq!(request.tag_keys(), None);
    }

    #[test]
    fn empty_list_is_set() {
        let request = DescribeAccountAttributesRequest::new().with_attribute_names(Vec::<String>::new());
        assert_eq!(request.attribute_names(), Some(&[][..]));
        assert_ne!(request, DescribeAccountAttributesRequest::new());
        assert_eq!(request.to_string(), "{AttributeNames: []}");
    }

    #[test]
    fn credentials_request_keeps_api_casing() {
        assert_eq!(
            GetClusterCredentialsRequest::MEMBER_NAMES[1],
            "DbName"
        );
        assert_eq!(CreateClusterRequest::MEMBER_NAMES[0], "DBName");
    }

    #[test]
    fn master_password_is_redacted() {
        let request = CreateClusterRequest::new()
            .with_cluster_identifier("examplecluster")
            .with_master_user_password("Passw0rd!");
        let display = request.to_string();
        let debug = format!("{:?}", request);
        assert!(display.contains("MasterUserPassword: *** Sensitive Data Redacted ***"));
        assert!(!display.contains("Passw0rd!"));
        assert!(!debug.contains("Passw0rd!"));
        assert_eq!(request.master_user_password(), Some("Passw0rd!"));
    }

    #[test]
    fn false_is_distinct_from_unset() {
        let unset = DeleteClusterRequest::new().with_cluster_identifier("c1");
        let no = unset.clone().with_skip_final_cluster_snapshot(false);
        assert_eq!(unset.skip_final_cluster_snapshot(), None);
        assert_eq!(no.skip_final_cluster_snapshot(), Some(false));
        assert_ne!(unset, no);
    }

    #[test]
    fn nested_scheduled_action_target() {
        let request = CreateScheduledActionRequest::new()
            .with_scheduled_action_name("nightly-pause")
            .with_target_action(
                ScheduledActionType::new()
                    .with_pause_cluster(PauseClusterMessage::new().with_cluster_identifier("c1")),
            )
            .with_schedule("cron(0 22 * * ? *)")
            .with_enable(true);
        assert_eq!(
            request.to_string(),
            "{ScheduledActionName: nightly-pause,\
             TargetAction: {PauseCluster: {ClusterIdentifier: c1}},\
             Schedule: cron(0 22 * * ? *),\
             Enable: true}"
        );
    }
}
