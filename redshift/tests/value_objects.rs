/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use proptest::prelude::*;
use redshift::input::{
    AuthorizeClusterSecurityGroupIngressRequest, BatchModifyClusterSnapshotsRequest,
    CreateClusterRequest, CreateTagsRequest, DescribeClusterSnapshotsRequest, DescribeClustersRequest,
};
use redshift::model::{
    Cluster, SnapshotAttributeToSortBy, SnapshotSortingEntity, SortByOrder, Tag,
};
use redshift::output::DescribeClustersResult;
use redshift::{Instant, Shape};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn tag(key: &str, value: &str) -> Tag {
    Tag::new().with_key(key).with_value(value)
}

#[test]
fn equal_to_itself_with_stable_hash() {
    let request = DescribeClusterSnapshotsRequest::new()
        .with_cluster_identifier("examplecluster")
        .with_start_time(Instant::from_epoch_seconds(1_600_000_000))
        .with_sorting_entities([SnapshotSortingEntity::new()
            .with_attribute(SnapshotAttributeToSortBy::CreateTime)
            .with_sort_order(SortByOrder::Descending)]);
    assert_eq!(request, request);
    assert_eq!(hash_of(&request), hash_of(&request));
}

#[test]
fn assignment_order_does_not_matter() {
    let a = Cluster::new()
        .with_cluster_identifier("c1")
        .with_number_of_nodes(4)
        .with_encrypted(true);
    let b = Cluster::new()
        .with_encrypted(true)
        .with_number_of_nodes(4)
        .with_cluster_identifier("c1");
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn unset_member_breaks_equality_both_ways() {
    let unset = Cluster::new().with_cluster_identifier("c1");
    let set = unset.clone().with_vpc_id("vpc-1");
    assert_ne!(unset, set);
    assert_ne!(set, unset);

    let empty_string = unset.clone().with_vpc_id("");
    assert_ne!(unset, empty_string);
}

#[test]
fn setter_takes_ownership_of_the_list() {
    let mut tags = vec![tag("owner", "analytics")];
    let mut request = CreateTagsRequest::new();
    request.set_tags(Some(tags.clone()));
    tags.push(tag("team", "data"));
    tags[0] = tag("owner", "finance");

    assert_eq!(request.tags(), Some(&[tag("owner", "analytics")][..]));
}

#[test]
fn fluent_list_methods_append() {
    let first = tag("owner", "analytics");
    let second = tag("team", "data");
    let request = CreateTagsRequest::new()
        .with_tags([first.clone()])
        .with_tags([second.clone()]);
    assert_eq!(request.tags(), Some(&[first, second][..]));
}

#[test]
fn fluent_collection_replaces_the_list() {
    let replaced = CreateClusterRequest::new()
        .with_iam_roles(vec!["arn:a"])
        .with_iam_roles(vec!["arn:b"]);
    assert_eq!(replaced.iam_roles(), Some(&["arn:b".to_owned()][..]));

    let mut from_setter = CreateClusterRequest::new();
    from_setter.set_iam_roles(Some(vec!["arn:b".to_owned()]));
    assert_eq!(replaced, from_setter);

    let appended = CreateClusterRequest::new()
        .with_iam_roles(["arn:a"])
        .with_iam_roles(["arn:b"]);
    assert_eq!(
        appended.iam_roles(),
        Some(&["arn:a".to_owned(), "arn:b".to_owned()][..])
    );
    assert_ne!(appended, replaced);
}

#[test]
fn display_omits_unset_members() {
    let request = DescribeClustersRequest::new().with_cluster_identifier("cluster1");
    let display = request.to_string();
    assert!(display.contains("ClusterIdentifier: cluster1"));
    for name in DescribeClustersRequest::MEMBER_NAMES
        .iter()
        .filter(|name| **name != "ClusterIdentifier")
    {
        assert!(!display.contains(name), "{} should be omitted", name);
    }
    assert_eq!(DescribeClustersRequest::new().to_string(), "{}");
}

#[test]
fn ingress_request_without_cidr() {
    let request = AuthorizeClusterSecurityGroupIngressRequest::new()
        .with_cluster_security_group_name("examplesecuritygroup");
    assert_eq!(
        request.cluster_security_group_name(),
        Some("examplesecuritygroup")
    );
    assert_eq!(request.cidrip(), None);
    assert_eq!(request.ec2_security_group_name(), None);
    assert_eq!(request.ec2_security_group_owner_id(), None);
    let display = request.to_string();
    assert!(display.contains("ClusterSecurityGroupName: examplesecuritygroup"));
    assert!(!display.contains("CIDRIP"));
}

#[test]
fn list_forms_are_interchangeable() {
    let from_items = BatchModifyClusterSnapshotsRequest::new().with_snapshot_identifier_list(["a", "b"]);
    let from_vec = BatchModifyClusterSnapshotsRequest::new()
        .with_snapshot_identifier_list(vec!["a".to_owned(), "b".to_owned()]);
    let mut from_setter = BatchModifyClusterSnapshotsRequest::new();
    from_setter.set_snapshot_identifier_list(Some(vec!["a".to_owned(), "b".to_owned()]));

    assert_eq!(from_items, from_vec);
    assert_eq!(from_vec, from_setter);
    assert_eq!(hash_of(&from_items), hash_of(&from_setter));
}

#[test]
fn shapes_work_as_set_keys() {
    let mut seen = HashSet::new();
    assert!(seen.insert(tag("owner", "analytics")));
    assert!(!seen.insert(Tag::new().with_value("analytics").with_key("owner")));
    assert!(seen.insert(Tag::new().with_key("owner")));
    assert_eq!(seen.len(), 2);
}

#[cfg(feature = "serde")]
mod wire_format {
    use super::*;

    #[test]
    fn serializes_wire_names_and_skips_unset() {
        let request = AuthorizeClusterSecurityGroupIngressRequest::new()
            .with_cluster_security_group_name("examplesecuritygroup")
            .with_ec2_security_group_name("default");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "ClusterSecurityGroupName": "examplesecuritygroup",
                "EC2SecurityGroupName": "default"
            })
        );
    }

    #[test]
    fn deserializes_nested_result() {
        let result: DescribeClustersResult = serde_json::from_str(
            r#"{
                "Marker": "next",
                "Clusters": [{
                    "ClusterIdentifier": "examplecluster",
                    "DBName": "dev",
                    "ClusterCreateTime": "2019-12-16T23:48:18Z",
                    "SnapshotScheduleState": "PAUSED",
                    "Endpoint": {"Address": "example.com", "Port": 5439}
                }]
            }"#,
        )
        .unwrap();

        let cluster = &result.clusters().unwrap()[0];
        assert_eq!(result.marker(), Some("next"));
        assert_eq!(cluster.db_name(), Some("dev"));
        assert_eq!(
            cluster.cluster_create_time(),
            Some(Instant::from_epoch_seconds(1576540098))
        );
        assert_eq!(
            cluster.snapshot_schedule_state().map(|state| state.as_str()),
            Some("PAUSED")
        );
        assert_eq!(cluster.endpoint().and_then(|e| e.port()), Some(5439));
        assert_eq!(cluster.vpc_id(), None);
    }
}

proptest! {
    #[test]
    fn equality_ignores_assignment_order(
        key in "[a-z]{0,8}",
        value in proptest::option::of("[a-z0-9]{0,8}"),
        nodes in proptest::option::of(1..128i32),
    ) {
        let mut forward = Cluster::new().with_tags([Tag::new().with_key(key.clone())]);
        forward.set_number_of_nodes(nodes);
        forward.set_kms_key_id(value.clone());

        let mut backward = Cluster::new();
        backward.set_kms_key_id(value);
        backward.set_number_of_nodes(nodes);
        let backward = backward.with_tags([Tag::new().with_key(key)]);

        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(hash_of(&forward), hash_of(&backward));
    }

    #[test]
    fn clearing_a_member_restores_equality(id in "[a-z][a-z0-9-]{0,62}") {
        let mut request = DescribeClustersRequest::new().with_cluster_identifier(id);
        prop_assert_ne!(&request, &DescribeClustersRequest::new());
        request.set_cluster_identifier(None);
        prop_assert_eq!(request, DescribeClustersRequest::new());
    }
}
