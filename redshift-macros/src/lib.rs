/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! `#[shape]` turns a plain field list into a Redshift model value object.
//!
//! ```ignore
//! #[shape]
//! pub struct Endpoint {
//!     /// The DNS address of the cluster.
//!     address: String,
//!     port: i32,
//! }
//! ```
//!
//! Every field becomes optional and gains a getter, a `set_*` setter and a fluent `with_*`
//! method. The struct gains structural `PartialEq`/`Eq`/`Hash`, a redacting `Debug`, a
//! `Display` listing only the members that are set, and optional serde derives keyed by
//! wire name. Field attributes:
//!
//! - `#[shape(name = "DBName")]` overrides the wire name, which otherwise is the
//!   PascalCase form of the field name.
//! - `#[shape(sensitive)]` redacts the value in `Debug` and `Display`.
//!
//! The generated code refers to `crate::shape`, so the macro is only usable inside the
//! `redshift` crate.

extern crate proc_macro;

use proc_macro::TokenStream;
use syn::Item;

use crate::shape_impl::{shape_impl, ShapeStructAttrs};

mod shape_impl;

#[proc_macro_attribute]
pub fn shape(attr: TokenStream, input: TokenStream) -> TokenStream {
    let item = syn::parse_macro_input!(input as Item);

    let Item::Struct(item_struct) = item else {
        return syn::Error::new_spanned(item, "expected `struct`")
            .to_compile_error()
            .into();
    };

    let mut attributes = ShapeStructAttrs::default();
    let parser = syn::meta::parser(|meta| attributes.parse(meta));
    syn::parse_macro_input!(attr with parser);

    shape_impl(attributes, item_struct).into()
}
