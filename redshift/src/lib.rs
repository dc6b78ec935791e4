/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Shapes of the Amazon Redshift control-plane API.
//!
//! Every request parameter set ([`input`]), response payload ([`output`]) and nested
//! resource ([`model`]) is a value object: independently optional members, getters,
//! `set_*` setters, fluent `with_*` methods, structural equality and hashing, and a
//! `Display` form that lists only the members that are set.
//!
//! ```
//! use redshift::input::DescribeClustersRequest;
//! use redshift::model::Tag;
//!
//! let request = DescribeClustersRequest::new()
//!     .with_cluster_identifier("examplecluster")
//!     .with_tag_keys(["owner"])
//!     .with_max_records(20);
//! assert_eq!(request.cluster_identifier(), Some("examplecluster"));
//! assert_eq!(
//!     request.to_string(),
//!     "{ClusterIdentifier: examplecluster,MaxRecords: 20,TagKeys: [owner]}"
//! );
//!
//! let tag = Tag::new().with_key("owner").with_value("analytics");
//! assert_eq!(tag, Tag::new().with_value("analytics").with_key("owner"));
//! ```
//!
//! Sending requests is out of scope: transport, signing and the Query/XML codec live
//! outside this crate.

#[macro_use]
mod macros;

pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;
pub mod shape;

pub use smithy_types::Instant;

pub use crate::error::{ErrorKind, ServiceError};
pub use crate::operation::{Operation, RedshiftRequest};
pub use crate::shape::Shape;

/// Service metadata.
pub mod meta {
    /// Version of the API these shapes describe.
    pub const API_VERSION: &str = "2012-12-01";
    pub const SERVICE_ID: &str = "Redshift";
    pub const ENDPOINT_PREFIX: &str = "redshift";
    pub const SIGNING_NAME: &str = "redshift";
    pub const XML_NAMESPACE: &str = "http://redshift.amazonaws.com/doc/2012-12-01/";
    /// Crate version.
    pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}
