/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::meta::ParseNestedMeta;
use syn::Attribute;
use syn::Ident;
use syn::ItemStruct;
use syn::LitStr;
use syn::Type;

const REDACTED: &str = "*** Sensitive Data Redacted ***";

/// Arguments of the struct-level `#[shape(...)]` attribute.
#[derive(Default)]
pub(crate) struct ShapeStructAttrs {
    name: Option<LitStr>,
}

impl ShapeStructAttrs {
    pub(crate) fn parse(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("name") {
            self.name = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported shape attribute, expected `name`"))
        }
    }
}

/// How a member is exposed through its getter and fluent method.
#[derive(Debug, PartialEq)]
enum MemberKind {
    /// `String`: borrowed as `&str`.
    Text,
    /// Integers, booleans, doubles and timestamps: returned by value.
    Copy,
    /// `Vec<T>`: borrowed as a slice, updated through a `ListUpdate` by `with_*`.
    List(Type),
    /// Enums and nested shapes: borrowed.
    Other,
}

struct ShapeMember {
    ident: Ident,
    ty: Type,
    kind: MemberKind,
    wire_name: String,
    sensitive: bool,
    docs: Vec<Attribute>,
}

/// Implementation of the `#[shape]` attribute.
///
/// 1. Wraps every field type in `Option`, stripping `#[shape(...)]` field attributes.
/// 2. Adds `Clone`/`Default` derives and, behind the `serde` feature, serde derives keyed
///    by wire name.
/// 3. Generates accessors, `Debug`, `Display`, `PartialEq`, `Eq`, `Hash`, and the
///    `crate::shape::{Member, Shape}` impls.
pub(crate) fn shape_impl(attrs: ShapeStructAttrs, mut shape: ItemStruct) -> TokenStream2 {
    if !shape.generics.params.is_empty() {
        return syn::Error::new_spanned(&shape.generics, "shapes cannot be generic")
            .to_compile_error();
    }

    let members = match collect_members(&mut shape) {
        Ok(members) => members,
        Err(e) => return e.to_compile_error(),
    };

    shape.attrs.push(syn::parse_quote!(#[derive(Clone, Default)]));
    shape.attrs.push(syn::parse_quote!(
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    ));

    let shape_name = attrs
        .name
        .map(|name| name.value())
        .unwrap_or_else(|| shape.ident.to_string());
    let ident = &shape.ident;

    let accessors = members.iter().map(generate_accessors);
    let debug_impl = generate_debug(ident, &members);
    let display_impl = generate_display(ident, &members);
    let eq_hash_impls = generate_eq_hash(ident, &members);
    let wire_names = members.iter().map(|member| &member.wire_name);

    quote! {
        #shape

        impl #ident {
            /// Creates an instance with every member unset.
            pub fn new() -> Self {
                Self::default()
            }

            #(#accessors)*
        }

        #debug_impl
        #display_impl
        #eq_hash_impls

        impl crate::shape::Shape for #ident {
            const NAME: &'static str = #shape_name;
            const MEMBER_NAMES: &'static [&'static str] = &[#(#wire_names),*];
        }
    }
}

fn collect_members(shape: &mut ItemStruct) -> Result<Vec<ShapeMember>, syn::Error> {
    let syn::Fields::Named(ref mut fields) = shape.fields else {
        return Err(syn::Error::new_spanned(
            &shape.fields,
            "only named fields are supported",
        ));
    };

    let mut members = Vec::with_capacity(fields.named.len());
    for field in &mut fields.named {
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "shape members must be named"));
        };

        let mut wire_name = None;
        let mut sensitive = false;
        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("shape")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let name: LitStr = meta.value()?.parse()?;
                    wire_name = Some(name.value());
                    Ok(())
                } else if meta.path.is_ident("sensitive") {
                    sensitive = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported member attribute, expected `name` or `sensitive`"))
                }
            })?;
        }
        field.attrs = clean_attrs(&field.attrs);

        if extract_option(&field.ty) {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "members are optional already and should not be wrapped in Option",
            ));
        }

        let wire_name = wire_name.unwrap_or_else(|| pascal_case(&ident.to_string()));
        let ty = field.ty.clone();
        field.ty = syn::parse_quote!(Option<#ty>);
        field.attrs.push(syn::parse_quote!(
            #[cfg_attr(
                feature = "serde",
                serde(rename = #wire_name, default, skip_serializing_if = "Option::is_none")
            )]
        ));

        members.push(ShapeMember {
            kind: classify(&ty),
            docs: field
                .attrs
                .iter()
                .filter(|attr| attr.path().is_ident("doc"))
                .cloned()
                .collect(),
            ident,
            ty,
            wire_name,
            sensitive,
        });
    }
    Ok(members)
}

fn generate_accessors(member: &ShapeMember) -> TokenStream2 {
    let ShapeMember {
        ident, ty, docs, ..
    } = member;
    let set_ident = format_ident!("set_{}", ident);
    let with_ident = format_ident!("with_{}", ident);
    let set_doc = format!(
        "Sets [`{ident}`](Self::{ident}). Passing `None` clears the member."
    );

    let getter = match &member.kind {
        MemberKind::Text => quote! {
            #(#docs)*
            pub fn #ident(&self) -> Option<&str> {
                self.#ident.as_deref()
            }
        },
        MemberKind::Copy => quote! {
            #(#docs)*
            pub fn #ident(&self) -> Option<#ty> {
                self.#ident
            }
        },
        MemberKind::List(element) => quote! {
            #(#docs)*
            pub fn #ident(&self) -> Option<&[#element]> {
                self.#ident.as_deref()
            }
        },
        MemberKind::Other => quote! {
            #(#docs)*
            pub fn #ident(&self) -> Option<&#ty> {
                self.#ident.as_ref()
            }
        },
    };

    let fluent = match &member.kind {
        MemberKind::Text | MemberKind::Other => {
            let doc = format!("Sets [`{ident}`](Self::{ident}) and returns the shape.");
            quote! {
                #[doc = #doc]
                pub fn #with_ident(mut self, input: impl Into<#ty>) -> Self {
                    self.#ident = Some(input.into());
                    self
                }
            }
        }
        MemberKind::Copy => {
            let doc = format!("Sets [`{ident}`](Self::{ident}) and returns the shape.");
            quote! {
                #[doc = #doc]
                pub fn #with_ident(mut self, input: #ty) -> Self {
                    self.#ident = Some(input);
                    self
                }
            }
        }
        MemberKind::List(element) => {
            let doc = format!(
                "Updates [`{ident}`](Self::{ident}) and returns the shape. An array of \
                 elements is appended, allocating the list if it is unset; a `Vec` replaces \
                 the list like [`{set_ident}`](Self::{set_ident})."
            );
            quote! {
                #[doc = #doc]
                pub fn #with_ident(mut self, input: impl Into<crate::shape::ListUpdate<#element>>) -> Self {
                    input.into().apply(&mut self.#ident);
                    self
                }
            }
        }
    };

    quote! {
        #getter

        #[doc = #set_doc]
        pub fn #set_ident(&mut self, input: Option<#ty>) {
            self.#ident = input;
        }

        #fluent
    }
}

fn generate_debug(ident: &Ident, members: &[ShapeMember]) -> TokenStream2 {
    let name = ident.to_string();
    let fields = members.iter().map(|member| {
        let field = &member.ident;
        let label = field.to_string();
        if member.sensitive {
            quote! { formatter.field(#label, &#REDACTED); }
        } else {
            quote! { formatter.field(#label, &self.#field); }
        }
    });
    quote! {
        impl ::std::fmt::Debug for #ident {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut formatter = f.debug_struct(#name);
                #(#fields)*
                formatter.finish()
            }
        }
    }
}

fn generate_display(ident: &Ident, members: &[ShapeMember]) -> TokenStream2 {
    let fields = members.iter().map(|member| {
        let field = &member.ident;
        let wire_name = &member.wire_name;
        if member.sensitive {
            quote! { members.sensitive(#wire_name, &self.#field)?; }
        } else {
            quote! { members.member(#wire_name, &self.#field)?; }
        }
    });
    quote! {
        impl ::std::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                #[allow(unused_mut)]
                let mut members = crate::shape::DisplayMembers::new(f)?;
                #(#fields)*
                members.finish()
            }
        }
    }
}

fn generate_eq_hash(ident: &Ident, members: &[ShapeMember]) -> TokenStream2 {
    let fields: Vec<_> = members.iter().map(|member| &member.ident).collect();
    quote! {
        impl ::std::cmp::PartialEq for #ident {
            #[allow(unused_variables)]
            fn eq(&self, other: &Self) -> bool {
                true #(&& crate::shape::Member::member_eq(&self.#fields, &other.#fields))*
            }
        }

        impl ::std::cmp::Eq for #ident {}

        impl ::std::hash::Hash for #ident {
            #[allow(unused_variables)]
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                #(crate::shape::Member::member_hash(&self.#fields, state);)*
            }
        }

        impl crate::shape::Member for #ident {
            fn member_eq(&self, other: &Self) -> bool {
                self == other
            }

            fn member_hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(self, state)
            }
        }

        impl crate::shape::Render for #ident {
            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }
    }
}

/// Removes all `#[shape(...)]` attributes from a field.
fn clean_attrs(attrs: &[Attribute]) -> Vec<Attribute> {
    attrs
        .iter()
        .filter(|attr| !attr.path().is_ident("shape"))
        .cloned()
        .collect()
}

fn classify(ty: &Type) -> MemberKind {
    let Type::Path(type_path) = ty else {
        return MemberKind::Other;
    };
    let Some(last) = type_path.path.segments.last() else {
        return MemberKind::Other;
    };
    match last.ident.to_string().as_str() {
        "String" => MemberKind::Text,
        "i32" | "i64" | "bool" | "f64" | "Instant" => MemberKind::Copy,
        "Vec" => {
            let syn::PathArguments::AngleBracketed(args) = &last.arguments else {
                return MemberKind::Other;
            };
            match args.args.first() {
                Some(syn::GenericArgument::Type(element)) => MemberKind::List(element.clone()),
                _ => MemberKind::Other,
            }
        }
        _ => MemberKind::Other,
    }
}

fn extract_option(ty: &Type) -> bool {
    let Type::Path(type_path) = ty else {
        return false;
    };
    type_path
        .path
        .segments
        .last()
        .map(|segment| segment.ident == "Option")
        .unwrap_or(false)
}

/// `cluster_identifier` -> `ClusterIdentifier`
fn pascal_case(field: &str) -> String {
    let field = field.strip_prefix("r#").unwrap_or(field);
    let mut out = String::with_capacity(field.len());
    for part in field.split('_').filter(|part| !part.is_empty()) {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(input: ItemStruct) -> TokenStream2 {
        shape_impl(ShapeStructAttrs::default(), input)
    }

    /// Helper to extract the generated struct from macro output
    fn get_generated_struct(output: TokenStream2) -> syn::ItemStruct {
        let file: syn::File = syn::parse2(output).expect("should parse generated code");
        file.items
            .iter()
            .find_map(|item| match item {
                syn::Item::Struct(s) => Some(s.clone()),
                _ => None,
            })
            .expect("should have generated struct")
    }

    fn field_type(struct_item: &syn::ItemStruct, field_name: &str) -> String {
        let syn::Fields::Named(fields) = &struct_item.fields else {
            panic!("should have named fields");
        };
        let field = fields
            .named
            .iter()
            .find(|f| f.ident.as_ref().unwrap() == field_name)
            .unwrap_or_else(|| panic!("should have field {}", field_name));
        let ty = &field.ty;
        quote!(#ty).to_string()
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("cluster_identifier"), "ClusterIdentifier");
        assert_eq!(pascal_case("marker"), "Marker");
        assert_eq!(pascal_case("s3_key_prefix"), "S3KeyPrefix");
        assert_eq!(pascal_case("r#type"), "Type");
        assert_eq!(
            pascal_case("total_backup_size_in_mega_bytes"),
            "TotalBackupSizeInMegaBytes"
        );
    }

    #[test]
    fn test_wraps_members_in_option() {
        let output = expand(syn::parse_quote! {
            pub struct Endpoint {
                address: String,
                port: i32,
                tags: Vec<Tag>,
            }
        });
        let generated = get_generated_struct(output);
        assert_eq!(
            field_type(&generated, "address"),
            quote!(Option<String>).to_string()
        );
        assert_eq!(field_type(&generated, "port"), quote!(Option<i32>).to_string());
        assert_eq!(
            field_type(&generated, "tags"),
            quote!(Option<Vec<Tag>>).to_string()
        );
    }

    #[test]
    fn test_strips_member_attributes() {
        let output = expand(syn::parse_quote! {
            pub struct Cluster {
                #[shape(name = "DBName")]
                db_name: String,
            }
        });
        let generated = get_generated_struct(output);
        let syn::Fields::Named(fields) = &generated.fields else {
            panic!("should have named fields");
        };
        let field = fields.named.first().unwrap();
        assert!(field.attrs.iter().all(|attr| !attr.path().is_ident("shape")));
    }

    #[test]
    fn test_wire_names() {
        let output = expand(syn::parse_quote! {
            pub struct Cluster {
                cluster_identifier: String,
                #[shape(name = "DBName")]
                db_name: String,
            }
        })
        .to_string();
        assert!(output.contains("\"ClusterIdentifier\""));
        assert!(output.contains("\"DBName\""));
        assert!(!output.contains("\"DbName\""));
    }

    #[test]
    fn test_shape_name_override() {
        let attrs = ShapeStructAttrs {
            name: Some(syn::parse_quote!("ClusterMessage")),
        };
        let output = shape_impl(attrs, syn::parse_quote!(pub struct Foo {})).to_string();
        assert!(output.contains("\"ClusterMessage\""));
    }

    #[test]
    fn test_sensitive_members_are_redacted() {
        let output = expand(syn::parse_quote! {
            pub struct Credentials {
                #[shape(sensitive)]
                db_password: String,
            }
        })
        .to_string();
        assert!(output.contains(REDACTED));
        assert!(output.contains("sensitive"));
    }

    #[test]
    fn test_list_members_take_list_update() {
        let output = expand(syn::parse_quote! {
            pub struct Request {
                snapshot_identifier_list: Vec<String>,
            }
        })
        .to_string();
        assert!(output.contains("with_snapshot_identifier_list"));
        assert!(output.contains("ListUpdate < String >"));
        assert!(output.contains("set_snapshot_identifier_list"));
        assert!(!output.contains("unwrap_or_default"));
    }

    #[test]
    fn test_render_is_separate_from_member() {
        let output = expand(syn::parse_quote! {
            pub struct Tag {
                key: String,
            }
        })
        .to_string();
        assert!(output.contains("impl crate :: shape :: Member for Tag"));
        assert!(output.contains("impl crate :: shape :: Render for Tag"));
    }

    #[test]
    fn test_empty_shape() {
        let output = expand(syn::parse_quote!(pub struct DescribeStorageRequest {}));
        let file: syn::File = syn::parse2(output).expect("should parse generated code");
        assert!(file.items.len() > 1);
    }

    #[test]
    fn test_tuple_struct_errors() {
        let output = expand(syn::parse_quote!(pub struct Wrapper(String);)).to_string();
        assert!(output.contains("compile_error"));
        assert!(output.contains("only named fields are supported"));
    }

    #[test]
    fn test_option_member_errors() {
        let output = expand(syn::parse_quote! {
            pub struct Request {
                marker: Option<String>,
            }
        })
        .to_string();
        assert!(output.contains("compile_error"));
        assert!(output.contains("should not be wrapped in Option"));
    }

    #[test]
    fn test_unknown_member_attribute_errors() {
        let output = expand(syn::parse_quote! {
            pub struct Request {
                #[shape(flatten)]
                marker: String,
            }
        })
        .to_string();
        assert!(output.contains("compile_error"));
        assert!(output.contains("unsupported member attribute"));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(&syn::parse_quote!(String)), MemberKind::Text);
        assert_eq!(classify(&syn::parse_quote!(bool)), MemberKind::Copy);
        assert_eq!(
            classify(&syn::parse_quote!(smithy_types::Instant)),
            MemberKind::Copy
        );
        assert_eq!(
            classify(&syn::parse_quote!(Vec<Tag>)),
            MemberKind::List(syn::parse_quote!(Tag))
        );
        assert_eq!(classify(&syn::parse_quote!(SortByOrder)), MemberKind::Other);
    }
}
