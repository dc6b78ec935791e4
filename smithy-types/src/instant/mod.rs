/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! A point in time with nanosecond precision, used for every timestamp member of the model.

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(feature = "serde")]
mod serde_impl;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Seconds since the Unix epoch plus a sub-second nanosecond offset.
///
/// `subsecond_nanos` always counts forward from `seconds`, so `-1.5` is stored
/// as `seconds = -2, subsecond_nanos = 500_000_000`. Ordering follows the timeline.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

/// Textual timestamp formats understood by [`Instant::fmt`] and [`Instant::from_str`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Format {
    /// RFC 3339 in UTC, e.g. `2019-12-16T23:48:18.52Z`.
    DateTime,
    /// Decimal seconds since the epoch, e.g. `1576540098.52`.
    EpochSeconds,
}

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum DateParseError {
    #[error("`{input}` is not an RFC 3339 date-time: {reason}")]
    InvalidDateTime { input: String, reason: String },
    #[error("`{0}` is not a valid epoch-seconds value")]
    InvalidEpochSeconds(String),
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        let nanos = (fraction * NANOS_PER_SECOND as f64).round() as u32;
        Instant::from_secs_and_nanos(epoch_seconds, nanos)
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds: seconds + (subsecond_nanos / NANOS_PER_SECOND) as i64,
            subsecond_nanos: subsecond_nanos % NANOS_PER_SECOND,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds as i64, epoch_seconds - seconds)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(after) => Instant {
                seconds: after.as_secs() as i64,
                subsecond_nanos: after.subsec_nanos(),
            },
            Err(before) => {
                let before = before.duration();
                if before.subsec_nanos() == 0 {
                    Instant::from_epoch_seconds(-(before.as_secs() as i64))
                } else {
                    Instant {
                        seconds: -(before.as_secs() as i64) - 1,
                        subsecond_nanos: NANOS_PER_SECOND - before.subsec_nanos(),
                    }
                }
            }
        }
    }

    pub fn from_str(s: &str, format: Format) -> Result<Self, DateParseError> {
        match format {
            Format::DateTime => {
                let parsed = DateTime::parse_from_rfc3339(s.trim()).map_err(|e| {
                    DateParseError::InvalidDateTime {
                        input: s.to_owned(),
                        reason: e.to_string(),
                    }
                })?;
                Ok(Instant::from_secs_and_nanos(
                    parsed.timestamp(),
                    parsed.timestamp_subsec_nanos(),
                ))
            }
            Format::EpochSeconds => parse_epoch_seconds(s.trim())
                .ok_or_else(|| DateParseError::InvalidEpochSeconds(s.to_owned())),
        }
    }

    fn to_chrono(self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.seconds, self.subsecond_nanos)
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => match self.to_chrono() {
                Some(date_time) => {
                    let rfc3339 = date_time.to_rfc3339_opts(SecondsFormat::AutoSi, true);
                    if !rfc3339.contains('.') {
                        return rfc3339;
                    }
                    // AutoSi pads to milli/micro/nano precision; trim to the significant digits
                    let mut trimmed = rfc3339
                        .trim_end_matches('Z')
                        .trim_end_matches('0')
                        .trim_end_matches('.')
                        .to_owned();
                    trimmed.push('Z');
                    trimmed
                }
                // Outside chrono's calendar range: fall back to the lossless numeric form
                None => self.fmt(Format::EpochSeconds),
            },
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    return self.seconds.to_string();
                }
                let (sign, whole, nanos) = if self.seconds < 0 {
                    ("-", -(self.seconds + 1), NANOS_PER_SECOND - self.subsecond_nanos)
                } else {
                    ("", self.seconds, self.subsecond_nanos)
                };
                let fraction = format!("{:0>9}", nanos);
                format!("{}{}.{}", sign, whole, fraction.trim_end_matches('0'))
            }
        }
    }
}

fn parse_epoch_seconds(s: &str) -> Option<Instant> {
    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };
    if whole.is_empty()
        || fraction.len() > 9
        || !whole.bytes().all(|b| b.is_ascii_digit())
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let whole: i64 = whole.parse().ok()?;
    let nanos: u32 = if fraction.is_empty() {
        0
    } else {
        format!("{:0<9}", fraction).parse().ok()?
    };
    Some(match (negative, nanos) {
        (false, _) => Instant::from_secs_and_nanos(whole, nanos),
        (true, 0) => Instant::from_epoch_seconds(-whole),
        (true, _) => Instant::from_secs_and_nanos(-whole - 1, NANOS_PER_SECOND - nanos),
    })
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Instant::fmt(self, Format::DateTime))
    }
}

/// Parses the `Display` form: an RFC 3339 date-time, or the epoch-seconds form that
/// `Display` writes for instants outside the calendar range.
impl FromStr for Instant {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Instant::from_str(s, Format::DateTime)
            .or_else(|err| Instant::from_str(s, Format::EpochSeconds).map_err(|_| err))
    }
}

impl From<SystemTime> for Instant {
    fn from(system_time: SystemTime) -> Self {
        Instant::from_system_time(system_time)
    }
}

#[cfg(test)]
mod test {
    use super::{DateParseError, Format, Instant};
    use proptest::prelude::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn whole_seconds_are_not_trimmed() {
        let instant = Instant::from_epoch_seconds(1576540100);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:20Z");
    }

    #[test]
    fn parse_date_time() {
        let instant = Instant::from_str("2019-12-16T23:48:18.52Z", Format::DateTime).unwrap();
        assert_eq!(instant, Instant::from_secs_and_nanos(1576540098, 520_000_000));

        let offset = Instant::from_str("2019-12-17T00:48:18+01:00", Format::DateTime).unwrap();
        assert_eq!(offset, Instant::from_epoch_seconds(1576540098));

        let parsed: Instant = "2019-12-16T23:48:18Z".parse().unwrap();
        assert_eq!(parsed.epoch_seconds(), 1576540098);
    }

    #[test]
    fn parse_date_time_rejects_garbage() {
        let err = Instant::from_str("16 Dec 2019", Format::DateTime).unwrap_err();
        assert!(matches!(err, DateParseError::InvalidDateTime { .. }));
        assert!(err.to_string().contains("16 Dec 2019"));
    }

    #[test]
    fn parse_epoch_seconds() {
        assert_eq!(
            Instant::from_str("1576540098.52", Format::EpochSeconds).unwrap(),
            Instant::from_secs_and_nanos(1576540098, 520_000_000)
        );
        assert_eq!(
            Instant::from_str("-1.5", Format::EpochSeconds).unwrap(),
            Instant::from_secs_and_nanos(-2, 500_000_000)
        );
        assert_eq!(
            Instant::from_str("1.", Format::EpochSeconds).unwrap(),
            Instant::from_epoch_seconds(1)
        );
        assert_eq!(
            Instant::from_str("1.0000000001", Format::EpochSeconds),
            Err(DateParseError::InvalidEpochSeconds("1.0000000001".to_owned()))
        );
        assert!(Instant::from_str("abc", Format::EpochSeconds).is_err());
        assert!(Instant::from_str(".5", Format::EpochSeconds).is_err());
    }

    #[test]
    fn out_of_range_display_parses_back() {
        let far = Instant::from_secs_and_nanos(i64::MAX / 2, 250_000_000);
        let displayed = far.to_string();
        assert_eq!(displayed, "4611686018427387903.25");
        assert_eq!(displayed.parse::<Instant>(), Ok(far));

        let err = "16 Dec 2019".parse::<Instant>().unwrap_err();
        assert!(matches!(err, DateParseError::InvalidDateTime { .. }));
    }

    #[test]
    fn negative_fractional_epoch_seconds() {
        let instant = Instant::from_f64(-1.5);
        assert_eq!(instant.epoch_seconds(), -2);
        assert_eq!(instant.subsec_nanos(), 500_000_000);
        assert_eq!(instant.fmt(Format::EpochSeconds), "-1.5");
    }

    #[test]
    fn system_time_before_epoch() {
        let before = UNIX_EPOCH - Duration::from_millis(1500);
        assert_eq!(
            Instant::from_system_time(before),
            Instant::from_secs_and_nanos(-2, 500_000_000)
        );
    }

    #[test]
    fn instants_order_on_the_timeline() {
        let earlier = Instant::from_secs_and_nanos(-2, 900_000_000);
        let later = Instant::from_epoch_seconds(-1);
        assert!(earlier < later);
    }

    proptest! {
        #[test]
        fn date_time_format_parses_back(seconds in -62_135_596_800i64..253_402_300_799i64, nanos in 0u32..1_000_000_000u32) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos);
            let formatted = instant.fmt(Format::DateTime);
            prop_assert_eq!(Instant::from_str(&formatted, Format::DateTime), Ok(instant));
        }

        #[test]
        fn epoch_seconds_format_parses_back(seconds in any::<i32>(), nanos in 0u32..1_000_000_000u32) {
            let instant = Instant::from_secs_and_nanos(seconds as i64, nanos);
            let formatted = instant.fmt(Format::EpochSeconds);
            prop_assert_eq!(Instant::from_str(&formatted, Format::EpochSeconds), Ok(instant));
        }
    }
}
