/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Shared behavior of every request, result and model shape.
//!
//! Shapes are declared with `#[shape]` (from `redshift-macros`), which generates the
//! accessors and trait impls on top of the [`Member`] impls in this module.

use smithy_types::Instant;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Static metadata of a generated shape.
pub trait Shape {
    /// Wire name of the shape, e.g. `Cluster` or `DescribeClustersRequest`.
    const NAME: &'static str;

    /// Wire names of every member, in declaration order.
    const MEMBER_NAMES: &'static [&'static str];
}

const REDACTED: &str = "*** Sensitive Data Redacted ***";

/// Equality and hashing of a single member value.
///
/// Doubles have no total equality, so members go through this trait rather than
/// `PartialEq`/`Hash` directly.
#[doc(hidden)]
pub trait Member {
    fn member_eq(&self, other: &Self) -> bool;

    fn member_hash<H: Hasher>(&self, state: &mut H);
}

/// Rendering of a set member value in the `Display` form of a shape.
#[doc(hidden)]
pub trait Render {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Argument of the fluent `with_*` method of a list member.
///
/// An array is a list of individual elements and is appended to the current list. A
/// `Vec` is a whole collection and replaces it, like `set_*`.
///
/// ```
/// use redshift::input::CreateClusterRequest;
///
/// let request = CreateClusterRequest::new()
///     .with_iam_roles(["arn:a"])
///     .with_iam_roles(["arn:b"]);
/// assert_eq!(request.iam_roles().map(|roles| roles.len()), Some(2));
///
/// let request = request.with_iam_roles(vec!["arn:c"]);
/// assert_eq!(request.iam_roles(), Some(&["arn:c".to_owned()][..]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListUpdate<T> {
    /// Appends the elements, allocating the list if it is unset.
    Append(Vec<T>),
    /// Replaces the list.
    Replace(Vec<T>),
}

impl<T> ListUpdate<T> {
    /// Applies the update to a list member.
    pub fn apply(self, list: &mut Option<Vec<T>>) {
        match self {
            ListUpdate::Append(items) => list.get_or_insert_with(Vec::new).extend(items),
            ListUpdate::Replace(items) => *list = Some(items),
        }
    }
}

impl<T, U: Into<T>, const N: usize> From<[U; N]> for ListUpdate<T> {
    fn from(items: [U; N]) -> Self {
        ListUpdate::Append(items.into_iter().map(Into::into).collect())
    }
}

impl<T, U: Into<T>> From<Vec<U>> for ListUpdate<T> {
    fn from(items: Vec<U>) -> Self {
        ListUpdate::Replace(items.into_iter().map(Into::into).collect())
    }
}

macro_rules! total_eq_member {
    ($($ty:ty),*) => {
        $(
            impl Member for $ty {
                fn member_eq(&self, other: &Self) -> bool {
                    self == other
                }

                fn member_hash<H: Hasher>(&self, state: &mut H) {
                    Hash::hash(self, state)
                }
            }

            impl Render for $ty {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

total_eq_member!(String, i32, i64, bool, Instant);

impl Member for f64 {
    // Bit patterns keep equality reflexive for NaN and consistent with hashing.
    fn member_eq(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }

    fn member_hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.to_bits())
    }
}

impl Render for f64 {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl<T: Member> Member for Vec<T> {
    fn member_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.member_eq(b))
    }

    fn member_hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in self {
            item.member_hash(state);
        }
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}

impl<T: Member> Member for Option<T> {
    fn member_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.member_eq(b),
            _ => false,
        }
    }

    fn member_hash<H: Hasher>(&self, state: &mut H) {
        match self {
            None => state.write_u8(0),
            Some(value) => {
                state.write_u8(1);
                value.member_hash(state);
            }
        }
    }
}

/// Writes `{Name: value,Name: value}` over the members that are set.
#[doc(hidden)]
pub struct DisplayMembers<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    empty: bool,
}

impl<'a, 'b> DisplayMembers<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Result<Self, fmt::Error> {
        f.write_str("{")?;
        Ok(DisplayMembers { f, empty: true })
    }

    pub fn member<T: Render>(&mut self, name: &str, value: &Option<T>) -> fmt::Result {
        match value {
            Some(value) => {
                self.name(name)?;
                value.render(self.f)
            }
            None => Ok(()),
        }
    }

    pub fn sensitive<T>(&mut self, name: &str, value: &Option<T>) -> fmt::Result {
        match value {
            Some(_) => {
                self.name(name)?;
                self.f.write_str(REDACTED)
            }
            None => Ok(()),
        }
    }

    pub fn finish(self) -> fmt::Result {
        self.f.write_str("}")
    }

    fn name(&mut self, name: &str) -> fmt::Result {
        if !self.empty {
            self.f.write_str(",")?;
        }
        self.empty = false;
        write!(self.f, "{}: ", name)
    }
}

#[cfg(test)]
mod test {
    use super::{ListUpdate, Member, Render};
    use std::collections::hash_map::DefaultHasher;
    use std::fmt;
    use std::hash::Hasher;

    fn hash_of<T: Member>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.member_hash(&mut hasher);
        hasher.finish()
    }

    struct Rendered<'a, T>(&'a T);

    impl<T: Render> fmt::Display for Rendered<'_, T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.render(f)
        }
    }

    #[test]
    fn unset_differs_from_set() {
        let unset: Option<String> = None;
        let set = Some(String::new());
        assert!(unset.member_eq(&None));
        assert!(!unset.member_eq(&set));
        assert!(!set.member_eq(&unset));
        assert_ne!(hash_of(&unset), hash_of(&set));
    }

    #[test]
    fn nan_doubles_equal_themselves() {
        let nan = Some(f64::NAN);
        assert!(nan.member_eq(&nan));
        assert_eq!(hash_of(&nan), hash_of(&Some(f64::NAN)));
        assert!(!Some(0.0).member_eq(&Some(-0.0)));
    }

    #[test]
    fn lists_compare_element_wise() {
        let a = vec!["a".to_owned(), "b".to_owned()];
        let b = vec!["b".to_owned(), "a".to_owned()];
        assert!(a.member_eq(&a.clone()));
        assert!(!a.member_eq(&b));
        assert!(!a.member_eq(&vec!["a".to_owned()]));
    }

    #[test]
    fn render_lists_and_doubles() {
        let list = vec![1, 2, 3];
        assert_eq!(Rendered(&list).to_string(), "[1, 2, 3]");
        assert_eq!(Rendered(&Vec::<i32>::new()).to_string(), "[]");
        assert_eq!(Rendered(&1.0f64).to_string(), "1.0");
    }

    #[test]
    fn arrays_append_and_vecs_replace() {
        let mut list: Option<Vec<String>> = None;
        ListUpdate::from(["a"]).apply(&mut list);
        ListUpdate::from(["b", "c"]).apply(&mut list);
        assert_eq!(list, Some(vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]));

        ListUpdate::from(vec!["d"]).apply(&mut list);
        assert_eq!(list, Some(vec!["d".to_owned()]));

        ListUpdate::<String>::from(Vec::<String>::new()).apply(&mut list);
        assert_eq!(list, Some(vec![]));
    }
}
