/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use super::{Format, Instant};
use serde::de::{Error, Visitor};
use std::fmt;

impl serde::Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.fmt(Format::DateTime))
    }
}

struct InstantVisitor;

impl<'de> Visitor<'de> for InstantVisitor {
    type Value = Instant;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an RFC 3339 date-time or epoch-seconds string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        v.parse::<Instant>().map_err(Error::custom)
    }
}

impl<'de> serde::Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(InstantVisitor)
    }
}

#[cfg(test)]
mod test {
    use crate::Instant;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Test {
        instant: Instant,
    }

    #[test]
    fn serializes_as_rfc3339() {
        let test = Test {
            instant: Instant::from_epoch_seconds(1576540098),
        };
        assert_eq!(
            serde_json::to_string(&test).unwrap(),
            r#"{"instant":"2019-12-16T23:48:18Z"}"#
        );
    }

    #[test]
    fn deserializes_rfc3339() {
        let test: Test = serde_json::from_str(r#"{"instant":"2019-12-16T23:48:18.52Z"}"#).unwrap();
        assert_eq!(test.instant, Instant::from_fractional_seconds(1576540098, 0.52));
        assert!(serde_json::from_str::<Test>(r#"{"instant":"yesterday"}"#).is_err());
    }

    #[test]
    fn out_of_range_instant_round_trips() {
        let test = Test {
            instant: Instant::from_epoch_seconds(i64::MAX / 2),
        };
        let json = serde_json::to_string(&test).unwrap();
        assert_eq!(json, r#"{"instant":"4611686018427387903"}"#);
        assert_eq!(serde_json::from_str::<Test>(&json).unwrap(), test);
    }
}
