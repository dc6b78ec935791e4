/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Resources and nested structures shared by requests and results.

use redshift_macros::shape;
use smithy_types::Instant;

string_enum! {
    /// The action a node configuration estimate is computed for.
    ActionType {
        RestoreCluster => "restore-cluster",
        RecommendNodeConfig => "recommend-node-config",
        ResizeCluster => "resize-cluster",
    }
}

string_enum! {
    Mode {
        Standard => "standard",
        HighPerformance => "high-performance",
    }
}

string_enum! {
    NodeConfigurationOptionsFilterName {
        NodeType => "NodeType",
        NumberOfNodes => "NumberOfNodes",
        EstimatedDiskUtilizationPercent => "EstimatedDiskUtilizationPercent",
        Mode => "Mode",
    }
}

string_enum! {
    OperatorType {
        Eq => "eq",
        Lt => "lt",
        Gt => "gt",
        Le => "le",
        Ge => "ge",
        In => "in",
        Between => "between",
    }
}

string_enum! {
    /// Whether a parameter change takes effect immediately or after a reboot.
    ParameterApplyType {
        Static => "static",
        Dynamic => "dynamic",
    }
}

string_enum! {
    ReservedNodeOfferingType {
        Regular => "Regular",
        Upgradable => "Upgradable",
    }
}

string_enum! {
    ScheduleState {
        Modifying => "MODIFYING",
        Active => "ACTIVE",
        Failed => "FAILED",
    }
}

string_enum! {
    ScheduledActionFilterName {
        ClusterIdentifier => "cluster-identifier",
        IamRole => "iam-role",
    }
}

string_enum! {
    ScheduledActionState {
        Active => "ACTIVE",
        Disabled => "DISABLED",
    }
}

string_enum! {
    ScheduledActionTypeValues {
        ResizeCluster => "ResizeCluster",
        PauseCluster => "PauseCluster",
        ResumeCluster => "ResumeCluster",
    }
}

string_enum! {
    SnapshotAttributeToSortBy {
        SourceType => "SOURCE_TYPE",
        TotalSize => "TOTAL_SIZE",
        CreateTime => "CREATE_TIME",
    }
}

string_enum! {
    SortByOrder {
        Ascending => "ASC",
        Descending => "DESC",
    }
}

string_enum! {
    /// The kind of resource an event originates from.
    SourceType {
        Cluster => "cluster",
        ClusterParameterGroup => "cluster-parameter-group",
        ClusterSecurityGroup => "cluster-security-group",
        ClusterSnapshot => "cluster-snapshot",
        ScheduledAction => "scheduled-action",
    }
}

string_enum! {
    TableRestoreStatusType {
        Pending => "PENDING",
        InProgress => "IN_PROGRESS",
        Succeeded => "SUCCEEDED",
        Failed => "FAILED",
        Canceled => "CANCELED",
    }
}

string_enum! {
    /// What happens when a usage limit is reached.
    UsageLimitBreachAction {
        Log => "log",
        EmitMetric => "emit-metric",
        Disable => "disable",
    }
}

string_enum! {
    UsageLimitFeatureType {
        Spectrum => "spectrum",
        ConcurrencyScaling => "concurrency-scaling",
    }
}

string_enum! {
    UsageLimitLimitType {
        Time => "time",
        DataScanned => "data-scanned",
    }
}

string_enum! {
    UsageLimitPeriod {
        Daily => "daily",
        Weekly => "weekly",
        Monthly => "monthly",
    }
}

/// <p>A name value pair that describes an aspect of an account.</p>
#[shape]
pub struct AccountAttribute {
    /// <p>The name of the attribute.</p>
    attribute_name: String,
    /// <p>A list of attribute values.</p>
    attribute_values: Vec<AttributeValueTarget>,
}

/// <p>Describes an AWS customer account authorized to restore a snapshot.</p>
#[shape]
pub struct AccountWithRestoreAccess {
    /// <p>The identifier of an AWS customer account authorized to restore a snapshot.</p>
    account_id: String,
    /// <p>The identifier of an AWS support account authorized to restore a snapshot.
    /// For AWS support, the identifier is <code>amazon-redshift-support</code>.</p>
    account_alias: String,
}

#[shape]
pub struct AttributeValueTarget {
    attribute_value: String,
}

/// <p>Describes an availability zone.</p>
#[shape]
pub struct AvailabilityZone {
    name: String,
    supported_platforms: Vec<SupportedPlatform>,
}

/// <p>Describes a cluster.</p>
#[shape]
pub struct Cluster {
    /// <p>The unique identifier of the cluster.</p>
    cluster_identifier: String,
    /// <p>The node type for the nodes in the cluster.</p>
    node_type: String,
    /// <p>The current state of the cluster, for example <code>available</code>,
    /// <code>modifying</code> or <code>resizing</code>.</p>
    cluster_status: String,
    /// <p>The availability status of the cluster for queries.</p>
    cluster_availability_status: String,
    /// <p>The status of a modify operation, if any, initiated for the cluster.</p>
    modify_status: String,
    /// <p>The master user name for the cluster. This name is used to connect to the
    /// database that is specified in the <b>DBName</b> parameter.</p>
    master_username: String,
    /// <p>The name of the initial database that was created when the cluster was created.</p>
    #[shape(name = "DBName")]
    db_name: String,
    /// <p>The connection endpoint.</p>
    endpoint: Endpoint,
    /// <p>The date and time that the cluster was created.</p>
    cluster_create_time: Instant,
    /// <p>The number of days that automatic cluster snapshots are retained.</p>
    automated_snapshot_retention_period: i32,
    /// <p>The default number of days to retain a manual snapshot. If the value is -1,
    /// the snapshot is retained indefinitely.</p>
    manual_snapshot_retention_period: i32,
    /// <p>A list of cluster security group that are associated with the cluster.</p>
    cluster_security_groups: Vec<ClusterSecurityGroupMembership>,
    /// <p>A list of Amazon Virtual Private Cloud (Amazon VPC) security groups that are
    /// associated with the cluster.</p>
    vpc_security_groups: Vec<VpcSecurityGroupMembership>,
    /// <p>The list of cluster parameter groups that are associated with this cluster.</p>
    cluster_parameter_groups: Vec<ClusterParameterGroupStatus>,
    /// <p>The name of the subnet group that is associated with the cluster.</p>
    cluster_subnet_group_name: String,
    /// <p>The identifier of the VPC the cluster is in, if the cluster is in a VPC.</p>
    vpc_id: String,
    /// <p>The name of the Availability Zone in which the cluster is located.</p>
    availability_zone: String,
    /// <p>The weekly time range, in Universal Coordinated Time (UTC), during which system
    /// maintenance can occur.</p>
    preferred_maintenance_window: String,
    /// <p>A value that, if present, indicates that changes to the cluster are pending.</p>
    pending_modified_values: PendingModifiedValues,
    /// <p>The version ID of the Amazon Redshift engine that is running on the cluster.</p>
    cluster_version: String,
    /// <p>If true, major version upgrades are applied automatically to the cluster during
    /// the maintenance window.</p>
    allow_version_upgrade: bool,
    /// <p>The number of compute nodes in the cluster.</p>
    number_of_nodes: i32,
    /// <p>If true, the cluster can be accessed from a public network.</p>
    publicly_accessible: bool,
    /// <p>If true, data in the cluster is encrypted at rest.</p>
    encrypted: bool,
    /// <p>A value that describes the status of a cluster restore action. This parameter
    /// returns null if the cluster was not created by restoring a snapshot.</p>
    restore_status: RestoreStatus,
    data_transfer_progress: DataTransferProgress,
    /// <p>Reports whether the cluster has finished applying any hardware security module
    /// (HSM) settings changes specified in a modify cluster command.</p>
    hsm_status: HsmStatus,
    /// <p>The destination region and retention period that are configured for
    /// cross-region snapshot copy.</p>
    cluster_snapshot_copy_status: ClusterSnapshotCopyStatus,
    /// <p>The public key for the cluster.</p>
    cluster_public_key: String,
    /// <p>The nodes in the cluster.</p>
    cluster_nodes: Vec<ClusterNode>,
    /// <p>The status of the elastic IP (EIP) address.</p>
    elastic_ip_status: ElasticIpStatus,
    /// <p>The specific revision number of the database in the cluster.</p>
    cluster_revision_number: String,
    /// <p>The list of tags for the cluster.</p>
    tags: Vec<Tag>,
    /// <p>The AWS Key Management Service (AWS KMS) key ID of the encryption key used to
    /// encrypt data in the cluster.</p>
    kms_key_id: String,
    /// <p>Whether the cluster was created with enhanced VPC routing enabled.</p>
    enhanced_vpc_routing: bool,
    /// <p>A list of AWS Identity and Access Management (IAM) roles that can be used by the
    /// cluster to access other AWS services.</p>
    iam_roles: Vec<ClusterIamRole>,
    /// <p>Cluster operations that are waiting to be started.</p>
    pending_actions: Vec<String>,
    /// <p>The name of the maintenance track for the cluster.</p>
    maintenance_track_name: String,
    /// <p>The number of nodes that you can resize the cluster to with the elastic resize
    /// method.</p>
    elastic_resize_number_of_node_options: String,
    /// <p>Describes a group of <code>DeferredMaintenanceWindow</code> objects.</p>
    deferred_maintenance_windows: Vec<DeferredMaintenanceWindow>,
    /// <p>A unique identifier for the cluster snapshot schedule.</p>
    snapshot_schedule_identifier: String,
    /// <p>The current state of the cluster snapshot schedule.</p>
    snapshot_schedule_state: ScheduleState,
    /// <p>The date and time when the next snapshot is expected to be taken for clusters with
    /// a valid snapshot schedule and backups enabled.</p>
    expected_next_snapshot_schedule_time: Instant,
    /// <p>The status of next expected snapshot for clusters having a valid snapshot
    /// schedule and backups enabled: <code>OnTrack</code> or <code>Pending</code>.</p>
    expected_next_snapshot_schedule_time_status: String,
    /// <p>The date and time in UTC when system maintenance can begin.</p>
    next_maintenance_window_start_time: Instant,
    /// <p>Whether the current resize can be cancelled, and the type of resize.</p>
    resize_info: ResizeInfo,
}

#[shape]
pub struct ClusterAssociatedToSchedule {
    cluster_identifier: String,
    schedule_association_state: ScheduleState,
}

/// <p>Describes a <code>ClusterDbRevision</code>.</p>
#[shape]
pub struct ClusterDbRevision {
    /// <p>The unique identifier of the cluster.</p>
    cluster_identifier: String,
    /// <p>A string representing the current cluster version.</p>
    current_database_revision: String,
    /// <p>The date on which the database revision was released.</p>
    database_revision_release_date: Instant,
    /// <p>A list of <code>RevisionTarget</code> objects, where each object describes the
    /// database revision that a cluster can be updated to.</p>
    revision_targets: Vec<RevisionTarget>,
}

/// <p>An AWS Identity and Access Management (IAM) role that can be used by the associated
/// Amazon Redshift cluster to access other AWS services.</p>
#[shape]
pub struct ClusterIamRole {
    /// <p>The Amazon Resource Name (ARN) of the IAM role.</p>
    iam_role_arn: String,
    /// <p>The status of the IAM role's association: <code>in-sync</code>,
    /// <code>adding</code> or <code>removing</code>.</p>
    apply_status: String,
}

/// <p>The identifier of a node in a cluster.</p>
#[shape]
pub struct ClusterNode {
    /// <p>Whether the node is a leader node or a compute node.</p>
    node_role: String,
    #[shape(name = "PrivateIPAddress")]
    private_ip_address: String,
    #[shape(name = "PublicIPAddress")]
    public_ip_address: String,
}

/// <p>Describes a parameter group.</p>
#[shape]
pub struct ClusterParameterGroup {
    parameter_group_name: String,
    /// <p>The name of the cluster parameter group family that this cluster parameter
    /// group is compatible with.</p>
    parameter_group_family: String,
    description: String,
    tags: Vec<Tag>,
}

/// <p>Describes the status of a parameter group.</p>
#[shape]
pub struct ClusterParameterGroupStatus {
    /// <p>The name of the cluster parameter group.</p>
    parameter_group_name: String,
    /// <p>The status of parameter updates.</p>
    parameter_apply_status: String,
    /// <p>The list of parameter statuses.</p>
    cluster_parameter_status_list: Vec<ClusterParameterStatus>,
}

/// <p>Describes the status of a parameter.</p>
#[shape]
pub struct ClusterParameterStatus {
    /// <p>The name of the parameter.</p>
    parameter_name: String,
    /// <p>The status of the parameter that indicates whether the parameter is in sync
    /// with the database, waiting for a cluster reboot, or encountered an error when
    /// being applied.</p>
    parameter_apply_status: String,
    /// <p>The error that prevented the parameter from being applied to the database.</p>
    parameter_apply_error_description: String,
}

/// <p>Describes a security group.</p>
#[shape]
pub struct ClusterSecurityGroup {
    cluster_security_group_name: String,
    description: String,
    /// <p>A list of EC2 security groups that are permitted to access clusters associated
    /// with this cluster security group.</p>
    #[shape(name = "EC2SecurityGroups")]
    ec2_security_groups: Vec<Ec2SecurityGroup>,
    /// <p>A list of IP ranges (CIDR blocks) that are permitted to access clusters
    /// associated with this cluster security group.</p>
    #[shape(name = "IPRanges")]
    ip_ranges: Vec<IpRange>,
    tags: Vec<Tag>,
}

/// <p>Describes a cluster security group.</p>
#[shape]
pub struct ClusterSecurityGroupMembership {
    cluster_security_group_name: String,
    status: String,
}

/// <p>Returns the destination region and retention period that are configured for
/// cross-region snapshot copy.</p>
#[shape]
pub struct ClusterSnapshotCopyStatus {
    /// <p>The destination region that snapshots are automatically copied to when
    /// cross-region snapshot copy is enabled.</p>
    destination_region: String,
    /// <p>The number of days that automated snapshots are retained in the destination
    /// region after they are copied from a source region.</p>
    retention_period: i64,
    /// <p>The number of days that manual snapshots are retained in the destination region
    /// after they are copied from a source region. If the value is -1, the manual
    /// snapshot is retained indefinitely.</p>
    manual_snapshot_retention_period: i32,
    /// <p>The name of the snapshot copy grant.</p>
    snapshot_copy_grant_name: String,
}

/// <p>Describes a subnet group.</p>
#[shape]
pub struct ClusterSubnetGroup {
    cluster_subnet_group_name: String,
    description: String,
    vpc_id: String,
    /// <p>The status of the cluster subnet group: <code>Complete</code>,
    /// <code>Incomplete</code> or <code>Invalid</code>.</p>
    subnet_group_status: String,
    subnets: Vec<Subnet>,
    tags: Vec<Tag>,
}

/// <p>Describes a cluster version, including the parameter group family and description
/// of the version.</p>
#[shape]
pub struct ClusterVersion {
    cluster_version: String,
    cluster_parameter_group_family: String,
    description: String,
}

/// <p>Describes the status of a cluster while it is in the process of resizing with an
/// incremental resize.</p>
#[shape]
pub struct DataTransferProgress {
    /// <p>Describes the status of the cluster. While the transfer is in progress the
    /// status is <code>transferringdata</code>.</p>
    status: String,
    current_rate_in_mega_bytes_per_second: f64,
    total_data_in_mega_bytes: i64,
    data_transferred_in_mega_bytes: i64,
    estimated_time_to_completion_in_seconds: i64,
    elapsed_time_in_seconds: i64,
}

/// <p>Describes the default cluster parameters for a parameter group family.</p>
#[shape]
pub struct DefaultClusterParameters {
    parameter_group_family: String,
    /// <p>A value that indicates the starting point for the next set of response records
    /// in a subsequent request.</p>
    marker: String,
    parameters: Vec<Parameter>,
}

/// <p>Describes a deferred maintenance window.</p>
#[shape]
pub struct DeferredMaintenanceWindow {
    defer_maintenance_identifier: String,
    defer_maintenance_start_time: Instant,
    defer_maintenance_end_time: Instant,
}

#[shape]
pub struct DeleteClusterSnapshotMessage {
    /// <p>The unique identifier of the manual snapshot to be deleted.</p>
    snapshot_identifier: String,
    /// <p>The unique identifier of the cluster the snapshot was created from. Required if
    /// your IAM user has a policy containing a snapshot resource element that specifies
    /// anything other than * for the cluster name.</p>
    snapshot_cluster_identifier: String,
}

/// <p>Describes an Amazon EC2 security group.</p>
#[shape(name = "EC2SecurityGroup")]
pub struct Ec2SecurityGroup {
    status: String,
    #[shape(name = "EC2SecurityGroupName")]
    ec2_security_group_name: String,
    #[shape(name = "EC2SecurityGroupOwnerId")]
    ec2_security_group_owner_id: String,
    tags: Vec<Tag>,
}

/// <p>Describes the status of the elastic IP (EIP) address.</p>
#[shape]
pub struct ElasticIpStatus {
    elastic_ip: String,
    status: String,
}

/// <p>Describes a connection endpoint.</p>
#[shape]
pub struct Endpoint {
    /// <p>The DNS address of the Cluster.</p>
    address: String,
    /// <p>The port that the database engine is listening on.</p>
    port: i32,
}

/// <p>Describes an event.</p>
#[shape]
pub struct Event {
    source_identifier: String,
    source_type: SourceType,
    message: String,
    /// <p>Values: Configuration, Management, Monitoring, Security.</p>
    event_categories: Vec<String>,
    /// <p>Values: ERROR, INFO.</p>
    severity: String,
    date: Instant,
    event_id: String,
}

/// <p>Describes event categories.</p>
#[shape]
pub struct EventCategoriesMap {
    /// <p>The source type, such as cluster or cluster-snapshot, that the returned
    /// categories belong to.</p>
    source_type: String,
    events: Vec<EventInfoMap>,
}

/// <p>Describes event information.</p>
#[shape]
pub struct EventInfoMap {
    event_id: String,
    event_categories: Vec<String>,
    event_description: String,
    severity: String,
}

/// <p>Describes event subscriptions.</p>
#[shape]
pub struct EventSubscription {
    /// <p>The AWS customer account associated with the Amazon Redshift event notification
    /// subscription.</p>
    customer_aws_id: String,
    /// <p>The name of the Amazon Redshift event notification subscription.</p>
    cust_subscription_id: String,
    sns_topic_arn: String,
    /// <p>The status of the Amazon Redshift event notification subscription:
    /// <code>active</code>, <code>no-permission</code> or
    /// <code>topic-not-exist</code>.</p>
    status: String,
    subscription_creation_time: Instant,
    source_type: String,
    source_ids_list: Vec<String>,
    event_categories_list: Vec<String>,
    severity: String,
    enabled: bool,
    tags: Vec<Tag>,
}

/// <p>Returns information about an HSM client certificate. The certificate is stored in
/// a secure Hardware Storage Module (HSM), and used by the Amazon Redshift cluster to
/// encrypt data files.</p>
#[shape]
pub struct HsmClientCertificate {
    hsm_client_certificate_identifier: String,
    /// <p>The public key that the Amazon Redshift cluster will use to connect to the HSM.
    /// You must register the public key in the HSM.</p>
    hsm_client_certificate_public_key: String,
    tags: Vec<Tag>,
}

/// <p>Returns information about an HSM configuration, which is an object that describes
/// to Amazon Redshift clusters the information they require to connect to an HSM where
/// they can store database encryption keys.</p>
#[shape]
pub struct HsmConfiguration {
    hsm_configuration_identifier: String,
    description: String,
    hsm_ip_address: String,
    hsm_partition_name: String,
    tags: Vec<Tag>,
}

/// <p>Describes the status of changes to HSM settings.</p>
#[shape]
pub struct HsmStatus {
    hsm_client_certificate_identifier: String,
    hsm_configuration_identifier: String,
    /// <p>Reports whether the cluster has finished applying any HSM settings changes
    /// specified in a modify cluster command: <code>active</code> or
    /// <code>applying</code>.</p>
    status: String,
}

/// <p>Describes an IP range used in a security group.</p>
#[shape(name = "IPRange")]
pub struct IpRange {
    status: String,
    /// <p>The IP range in Classless Inter-Domain Routing (CIDR) notation.</p>
    #[shape(name = "CIDRIP")]
    cidrip: String,
    tags: Vec<Tag>,
}

/// <p>Defines a maintenance track that determines which Amazon Redshift version to apply
/// during a maintenance window.</p>
#[shape]
pub struct MaintenanceTrack {
    maintenance_track_name: String,
    /// <p>The version number for the cluster release.</p>
    database_version: String,
    /// <p>An array of <code>UpdateTarget</code> objects to update with the maintenance
    /// track.</p>
    update_targets: Vec<UpdateTarget>,
}

/// <p>A list of node configurations.</p>
#[shape]
pub struct NodeConfigurationOption {
    node_type: String,
    number_of_nodes: i32,
    /// <p>The estimated disk utilization percentage.</p>
    estimated_disk_utilization_percent: f64,
    mode: Mode,
}

/// <p>A set of elements to filter the returned node configurations.</p>
#[shape]
pub struct NodeConfigurationOptionsFilter {
    name: NodeConfigurationOptionsFilterName,
    operator: OperatorType,
    /// <p>List of values. Compare <code>Name</code> using <code>Operator</code> to
    /// <code>Values</code>. If filter <code>Name</code> is <code>NumberOfNodes</code>,
    /// then values can range from 0 to 200.</p>
    values: Vec<String>,
}

/// <p>Describes an orderable cluster option.</p>
#[shape]
pub struct OrderableClusterOption {
    cluster_version: String,
    /// <p>The cluster type, for example <code>multi-node</code>.</p>
    cluster_type: String,
    node_type: String,
    availability_zones: Vec<AvailabilityZone>,
}

/// <p>Describes a parameter in a cluster parameter group.</p>
#[shape]
pub struct Parameter {
    parameter_name: String,
    parameter_value: String,
    description: String,
    /// <p>The source of the parameter value, such as "engine-default" or "user".</p>
    source: String,
    data_type: String,
    /// <p>The valid range of values for the parameter.</p>
    allowed_values: String,
    /// <p>Specifies how to apply the WLM configuration parameter. Some properties can be
    /// applied dynamically, while other properties require that any associated clusters
    /// be rebooted for the configuration changes to be applied.</p>
    apply_type: ParameterApplyType,
    /// <p>If true, the parameter can be modified. Some parameters have security or
    /// operational implications that prevent them from being changed.</p>
    is_modifiable: bool,
    minimum_engine_version: String,
}

#[shape]
pub struct PauseClusterMessage {
    /// <p>The identifier of the cluster to be paused.</p>
    cluster_identifier: String,
}

/// <p>Describes cluster attributes that are in a pending state. A change to one or more
/// the attributes was requested and is in progress or will be applied.</p>
#[shape]
pub struct PendingModifiedValues {
    /// <p>The pending or in-progress change of the master user password for the
    /// cluster.</p>
    #[shape(sensitive)]
    master_user_password: String,
    node_type: String,
    number_of_nodes: i32,
    cluster_type: String,
    cluster_version: String,
    automated_snapshot_retention_period: i32,
    /// <p>The pending or in-progress change of the new identifier for the cluster.</p>
    cluster_identifier: String,
    publicly_accessible: bool,
    enhanced_vpc_routing: bool,
    maintenance_track_name: String,
    /// <p>The encryption type for a cluster. Possible values are: KMS and None.</p>
    encryption_type: String,
}

/// <p>Describes a recurring charge.</p>
#[shape]
pub struct RecurringCharge {
    /// <p>The amount charged per the period of time specified by the recurring charge
    /// frequency.</p>
    recurring_charge_amount: f64,
    /// <p>The frequency at which the recurring charge amount is applied.</p>
    recurring_charge_frequency: String,
}

/// <p>Describes a reserved node. You can call the
/// <code>DescribeReservedNodeOfferings</code> API to obtain the available reserved node
/// offerings.</p>
#[shape]
pub struct ReservedNode {
    /// <p>The unique identifier for the reservation.</p>
    reserved_node_id: String,
    /// <p>The identifier for the reserved node offering.</p>
    reserved_node_offering_id: String,
    node_type: String,
    /// <p>The time the reservation started. You purchase a reserved node offering for a
    /// duration. This is the start time of that duration.</p>
    start_time: Instant,
    /// <p>The duration of the node reservation in seconds.</p>
    duration: i32,
    /// <p>The fixed cost Amazon Redshift charges you for this reserved node.</p>
    fixed_price: f64,
    /// <p>The hourly rate Amazon Redshift charges you for this reserved node.</p>
    usage_price: f64,
    currency_code: String,
    node_count: i32,
    /// <p>The state of the reserved compute node, for example <code>pending-payment</code>,
    /// <code>active</code> or <code>retired</code>.</p>
    state: String,
    /// <p>The anticipated utilization of the reserved node, as defined in the reserved
    /// node offering.</p>
    offering_type: String,
    recurring_charges: Vec<RecurringCharge>,
    reserved_node_offering_type: ReservedNodeOfferingType,
}

/// <p>Describes a reserved node offering.</p>
#[shape]
pub struct ReservedNodeOffering {
    reserved_node_offering_id: String,
    node_type: String,
    /// <p>The duration, in seconds, for which the offering will reserve the node.</p>
    duration: i32,
    fixed_price: f64,
    usage_price: f64,
    currency_code: String,
    offering_type: String,
    recurring_charges: Vec<RecurringCharge>,
    reserved_node_offering_type: ReservedNodeOfferingType,
}

/// <p>Describes a resize cluster operation. For example, a scheduled action to run the
/// <code>ResizeCluster</code> API operation.</p>
#[shape]
pub struct ResizeClusterMessage {
    cluster_identifier: String,
    cluster_type: String,
    node_type: String,
    number_of_nodes: i32,
    /// <p>A boolean value indicating whether the resize operation is using the classic
    /// resize process. If you don't provide this parameter or set the value to
    /// <code>false</code>, the resize type is elastic.</p>
    classic: bool,
}

/// <p>Describes a resize operation.</p>
#[shape]
pub struct ResizeInfo {
    /// <p>Returns the value <code>ClassicResize</code>.</p>
    resize_type: String,
    /// <p>A boolean value indicating if the resize operation can be cancelled.</p>
    allow_cancel_resize: bool,
}

/// <p>Describes the status of a cluster restore action. Returns null if the cluster was
/// not created by restoring a snapshot.</p>
#[shape]
pub struct RestoreStatus {
    /// <p>The status of the restore action. Returns starting, restoring, completed, or
    /// failed.</p>
    status: String,
    current_restore_rate_in_mega_bytes_per_second: f64,
    snapshot_size_in_mega_bytes: i64,
    progress_in_mega_bytes: i64,
    elapsed_time_in_seconds: i64,
    estimated_time_to_completion_in_seconds: i64,
}

#[shape]
pub struct ResumeClusterMessage {
    /// <p>The identifier of the cluster to be resumed.</p>
    cluster_identifier: String,
}

/// <p>Describes a <code>RevisionTarget</code>.</p>
#[shape]
pub struct RevisionTarget {
    /// <p>A unique string that identifies the version to update the cluster to. You can use
    /// this value in <code>ModifyClusterDbRevision</code>.</p>
    database_revision: String,
    description: String,
    database_revision_release_date: Instant,
}

/// <p>Describes a scheduled action. You can use a scheduled action to trigger some
/// Amazon Redshift API operations on a schedule.</p>
#[shape]
pub struct ScheduledAction {
    /// <p>The name of the scheduled action.</p>
    scheduled_action_name: String,
    /// <p>A JSON format string of the Amazon Redshift API operation with input
    /// parameters.</p>
    target_action: ScheduledActionType,
    /// <p>The schedule for a one-time (at format) or recurring (cron format) scheduled
    /// action, for example <code>at(2016-03-04T17:27:00)</code> or
    /// <code>cron(0 10 ? * MON *)</code>.</p>
    schedule: String,
    /// <p>The IAM role to assume to run the scheduled action.</p>
    iam_role: String,
    scheduled_action_description: String,
    /// <p>The state of the scheduled action.</p>
    state: ScheduledActionState,
    /// <p>List of times when the scheduled action will run.</p>
    next_invocations: Vec<Instant>,
    start_time: Instant,
    end_time: Instant,
}

/// <p>A set of elements to filter the returned scheduled actions.</p>
#[shape]
pub struct ScheduledActionFilter {
    name: ScheduledActionFilterName,
    values: Vec<String>,
}

/// <p>The action type that specifies an Amazon Redshift API operation that is supported
/// by the Amazon Redshift scheduler.</p>
#[shape]
pub struct ScheduledActionType {
    resize_cluster: ResizeClusterMessage,
    pause_cluster: PauseClusterMessage,
    resume_cluster: ResumeClusterMessage,
}

/// <p>Describes a snapshot.</p>
#[shape]
pub struct Snapshot {
    /// <p>The snapshot identifier that is provided in the request.</p>
    snapshot_identifier: String,
    /// <p>The identifier of the cluster for which the snapshot was taken.</p>
    cluster_identifier: String,
    /// <p>The time (in UTC format) when Amazon Redshift began the snapshot. A snapshot
    /// contains a copy of the cluster data as of this exact time.</p>
    snapshot_create_time: Instant,
    /// <p>The snapshot status: <code>available</code>, <code>creating</code>,
    /// <code>deleted</code> or <code>failed</code>.</p>
    status: String,
    /// <p>The port that the cluster is listening on.</p>
    port: i32,
    /// <p>The Availability Zone in which the cluster was created.</p>
    availability_zone: String,
    /// <p>The time (UTC) when the cluster was originally created.</p>
    cluster_create_time: Instant,
    /// <p>The master user name for the cluster.</p>
    master_username: String,
    /// <p>The version ID of the Amazon Redshift engine that is running on the cluster.</p>
    cluster_version: String,
    /// <p>The snapshot type. Snapshots created using <code>CreateClusterSnapshot</code> and
    /// <code>CopyClusterSnapshot</code> are of type "manual".</p>
    snapshot_type: String,
    /// <p>The node type of the nodes in the cluster.</p>
    node_type: String,
    /// <p>The number of nodes in the cluster.</p>
    number_of_nodes: i32,
    /// <p>The name of the database that was created when the cluster was created.</p>
    #[shape(name = "DBName")]
    db_name: String,
    /// <p>The VPC identifier of the cluster if the snapshot is from a cluster in a VPC.
    /// Otherwise, this field is not in the output.</p>
    vpc_id: String,
    /// <p>If true, the data in the snapshot is encrypted at rest.</p>
    encrypted: bool,
    /// <p>The AWS Key Management Service (KMS) key ID of the encryption key that was used
    /// to encrypt data in the cluster from which the snapshot was taken.</p>
    kms_key_id: String,
    /// <p>Whether the snapshot data is encrypted using the HSM keys of the source
    /// cluster.</p>
    #[shape(name = "EncryptedWithHSM")]
    encrypted_with_hsm: bool,
    /// <p>A list of the AWS customer accounts authorized to restore the snapshot. Returns
    /// <code>null</code> if no accounts are authorized.</p>
    accounts_with_restore_access: Vec<AccountWithRestoreAccess>,
    /// <p>For manual snapshots, the AWS customer account used to create or copy the
    /// snapshot. For automatic snapshots, the owner of the cluster.</p>
    owner_account: String,
    /// <p>The size of the complete set of backup data that would be used to restore the
    /// cluster.</p>
    total_backup_size_in_mega_bytes: f64,
    /// <p>The size of the incremental backup.</p>
    actual_incremental_backup_size_in_mega_bytes: f64,
    /// <p>The number of megabytes that have been transferred to the snapshot backup.</p>
    backup_progress_in_mega_bytes: f64,
    /// <p>The number of megabytes per second being transferred to the snapshot backup.
    /// Returns <code>0</code> for a completed backup.</p>
    current_backup_rate_in_mega_bytes_per_second: f64,
    /// <p>The estimate of the time remaining before the snapshot backup will complete.
    /// Returns <code>0</code> for a completed backup.</p>
    estimated_seconds_to_completion: i64,
    /// <p>The amount of time an in-progress snapshot backup has been running, or the
    /// amount of time it took a completed backup to finish.</p>
    elapsed_time_in_seconds: i64,
    /// <p>The source region from which the snapshot was copied.</p>
    source_region: String,
    /// <p>The list of tags for the cluster snapshot.</p>
    tags: Vec<Tag>,
    /// <p>The list of node types that this cluster snapshot is able to restore into.</p>
    restorable_node_types: Vec<String>,
    /// <p>Whether the cluster was created with enhanced VPC routing enabled.</p>
    enhanced_vpc_routing: bool,
    /// <p>The name of the maintenance track for the snapshot.</p>
    maintenance_track_name: String,
    /// <p>The number of days that a manual snapshot is retained. If the value is -1, the
    /// manual snapshot is retained indefinitely.</p>
    manual_snapshot_retention_period: i32,
    /// <p>The number of days until a manual snapshot will pass its retention period.</p>
    manual_snapshot_remaining_days: i32,
    /// <p>A timestamp representing the start of the retention period for the
    /// snapshot.</p>
    snapshot_retention_start_time: Instant,
}

/// <p>The snapshot copy grant that grants Amazon Redshift permission to encrypt copied
/// snapshots with the specified customer master key (CMK) from AWS KMS in the destination
/// region.</p>
#[shape]
pub struct SnapshotCopyGrant {
    snapshot_copy_grant_name: String,
    /// <p>The unique identifier of the customer master key (CMK) in AWS KMS to which
    /// Amazon Redshift is granted permission.</p>
    kms_key_id: String,
    tags: Vec<Tag>,
}

/// <p>Describes the errors returned by a snapshot.</p>
#[shape]
pub struct SnapshotErrorMessage {
    snapshot_identifier: String,
    snapshot_cluster_identifier: String,
    failure_code: String,
    failure_reason: String,
}

/// <p>Describes a snapshot schedule. You can set a regular interval for creating
/// snapshots of a cluster. You can also schedule snapshots for specific dates.</p>
#[shape]
pub struct SnapshotSchedule {
    /// <p>A list of ScheduleDefinitions.</p>
    schedule_definitions: Vec<String>,
    /// <p>A unique identifier for the schedule.</p>
    schedule_identifier: String,
    schedule_description: String,
    tags: Vec<Tag>,
    next_invocations: Vec<Instant>,
    /// <p>The number of clusters associated with the schedule.</p>
    associated_cluster_count: i32,
    associated_clusters: Vec<ClusterAssociatedToSchedule>,
}

/// <p>Describes a sorting entity.</p>
#[shape]
pub struct SnapshotSortingEntity {
    /// <p>The category for sorting the snapshots.</p>
    attribute: SnapshotAttributeToSortBy,
    /// <p>The order for listing the attributes.</p>
    sort_order: SortByOrder,
}

/// <p>Describes a subnet.</p>
#[shape]
pub struct Subnet {
    subnet_identifier: String,
    subnet_availability_zone: AvailabilityZone,
    subnet_status: String,
}

/// <p>A list of supported platforms for orderable clusters.</p>
#[shape]
pub struct SupportedPlatform {
    name: String,
}

/// <p>Describes the operations that are allowed on a maintenance track.</p>
#[shape]
pub struct SupportedOperation {
    /// <p>A list of the supported operations.</p>
    operation_name: String,
}

/// <p>Describes the status of a <code>RestoreTableFromClusterSnapshot</code>
/// operation.</p>
#[shape]
pub struct TableRestoreStatus {
    /// <p>The unique identifier for the table restore request.</p>
    table_restore_request_id: String,
    /// <p>A value that describes the current state of the table restore request.</p>
    status: TableRestoreStatusType,
    /// <p>A description of the status of the table restore request.</p>
    message: String,
    /// <p>The time that the table restore request was made, in Universal Coordinated Time
    /// (UTC).</p>
    request_time: Instant,
    /// <p>The amount of data restored to the new table so far, in megabytes (MB).</p>
    progress_in_mega_bytes: i64,
    /// <p>The total amount of data to restore to the new table, in megabytes (MB).</p>
    total_data_in_mega_bytes: i64,
    cluster_identifier: String,
    snapshot_identifier: String,
    source_database_name: String,
    source_schema_name: String,
    source_table_name: String,
    target_database_name: String,
    target_schema_name: String,
    new_table_name: String,
}

/// <p>A tag consisting of a name/value pair for a resource.</p>
#[shape]
pub struct Tag {
    /// <p>The key, or name, for the resource tag.</p>
    key: String,
    /// <p>The value for the resource tag.</p>
    value: String,
}

/// <p>A tag and its associated resource.</p>
#[shape]
pub struct TaggedResource {
    tag: Tag,
    /// <p>The Amazon Resource Name (ARN) with which the tag is associated, for example:
    /// <code>arn:aws:redshift:us-east-2:123456789:cluster:t1</code>.</p>
    resource_name: String,
    /// <p>The type of resource with which the tag is associated, for example
    /// <code>Cluster</code> or <code>Snapshot</code>.</p>
    resource_type: String,
}

/// <p>A maintenance track that you can switch the current track to.</p>
#[shape]
pub struct UpdateTarget {
    maintenance_track_name: String,
    database_version: String,
    supported_operations: Vec<SupportedOperation>,
}

/// <p>Describes a usage limit object for a cluster.</p>
#[shape]
pub struct UsageLimit {
    usage_limit_id: String,
    cluster_identifier: String,
    feature_type: UsageLimitFeatureType,
    /// <p>The type of limit. Depending on the feature type, this can be based on a time
    /// duration or data size.</p>
    limit_type: UsageLimitLimitType,
    /// <p>The limit amount. If time-based, this amount is in minutes. If data-based, this
    /// amount is in terabytes (TB).</p>
    amount: i64,
    /// <p>The time period that the amount applies to. A weekly period begins on Sunday.
    /// The default is <code>monthly</code>.</p>
    period: UsageLimitPeriod,
    breach_action: UsageLimitBreachAction,
    tags: Vec<Tag>,
}

/// <p>Describes the members of a VPC security group.</p>
#[shape]
pub struct VpcSecurityGroupMembership {
    vpc_security_group_id: String,
    status: String,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shape::Shape;

    #[test]
    fn wire_names_follow_the_api() {
        assert_eq!(Ec2SecurityGroup::NAME, "EC2SecurityGroup");
        assert_eq!(IpRange::NAME, "IPRange");
        assert_eq!(
            ClusterSecurityGroup::MEMBER_NAMES,
            &[
                "ClusterSecurityGroupName",
                "Description",
                "EC2SecurityGroups",
                "IPRanges",
                "Tags"
            ]
        );
        assert_eq!(Cluster::MEMBER_NAMES.len(), 46);
        assert_eq!(Cluster::MEMBER_NAMES[6], "DBName");
        assert_eq!(Snapshot::MEMBER_NAMES.len(), 33);
        assert!(Snapshot::MEMBER_NAMES.contains(&"EncryptedWithHSM"));
    }

    #[test]
    fn enums_round_trip_documented_values() {
        for value in SourceType::values() {
            let parsed = SourceType::from(*value);
            assert!(!matches!(parsed, SourceType::Unknown(_)));
            assert_eq!(parsed.as_str(), *value);
        }
        assert_eq!(SortByOrder::from("ASC"), SortByOrder::Ascending);
        assert_eq!(
            "emit-metric".parse::<UsageLimitBreachAction>(),
            Ok(UsageLimitBreachAction::EmitMetric)
        );
    }

    #[test]
    fn enums_keep_unknown_values() {
        let mode = Mode::from("turbo");
        assert_eq!(mode, Mode::Unknown("turbo".to_owned()));
        assert_eq!(mode.as_str(), "turbo");
        assert_eq!(mode.to_string(), "turbo");
    }

    #[test]
    fn nested_display() {
        let cluster = Cluster::new()
            .with_cluster_identifier("examplecluster")
            .with_endpoint(Endpoint::new().with_address("example.com").with_port(5439))
            .with_snapshot_schedule_state(ScheduleState::Active)
            .with_cluster_nodes([
                ClusterNode::new().with_node_role("LEADER"),
                ClusterNode::new().with_node_role("COMPUTE-0"),
            ]);
        assert_eq!(
            cluster.to_string(),
            "{ClusterIdentifier: examplecluster,\
             Endpoint: {Address: example.com,Port: 5439},\
             ClusterNodes: [{NodeRole: LEADER}, {NodeRole: COMPUTE-0}],\
             SnapshotScheduleState: ACTIVE}"
        );
    }

    #[test]
    fn doubles_render_with_a_fraction() {
        let snapshot = Snapshot::new()
            .with_total_backup_size_in_mega_bytes(1024.0)
            .with_estimated_seconds_to_completion(0);
        assert_eq!(
            snapshot.to_string(),
            "{TotalBackupSizeInMegaBytes: 1024.0,EstimatedSecondsToCompletion: 0}"
        );
    }

    #[test]
    fn pending_password_is_redacted() {
        let pending = PendingModifiedValues::new()
            .with_master_user_password("hunter2")
            .with_node_type("ra3.4xlarge");
        assert_eq!(
            pending.to_string(),
            "{MasterUserPassword: *** Sensitive Data Redacted ***,NodeType: ra3.4xlarge}"
        );
        assert!(!format!("{:?}", pending).contains("hunter2"));
        assert_eq!(pending.master_user_password(), Some("hunter2"));
    }

    #[test]
    fn timestamps_render_as_rfc3339() {
        let window = DeferredMaintenanceWindow::new()
            .with_defer_maintenance_identifier("dfm-1")
            .with_defer_maintenance_start_time(Instant::from_epoch_seconds(1576540098));
        assert_eq!(
            window.to_string(),
            "{DeferMaintenanceIdentifier: dfm-1,DeferMaintenanceStartTime: 2019-12-16T23:48:18Z}"
        );
    }
}
