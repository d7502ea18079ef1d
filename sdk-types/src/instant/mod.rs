/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{SecondsFormat, TimeZone, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

mod de;
mod ser;

/// An instant in time, stored as seconds (and subsecond nanos) since the
/// Unix epoch.
///
/// Timestamp fields on generated shapes use this type. On the wire it is an
/// epoch-seconds number; diagnostic rendering uses [`Format::DateTime`].
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Instant {
    pub(crate) seconds: i64,
    pub(crate) subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: (fraction * 1_000_000_000_f64) as u32,
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let rem = epoch_seconds - epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds, rem)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        let duration = system_time
            .duration_since(UNIX_EPOCH)
            .expect("SystemTime can never represent a time before the Unix Epoch");
        Instant {
            seconds: duration.as_secs() as i64,
            subsecond_nanos: duration.subsec_nanos(),
        }
    }

    fn to_datetime(self) -> Option<chrono::DateTime<Utc>> {
        Utc.timestamp_opt(self.seconds, self.subsecond_nanos).single()
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / 1_000_000_000_f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => match self.to_datetime() {
                Some(datetime) => {
                    let rfc3339 = datetime.to_rfc3339_opts(SecondsFormat::AutoSi, true);
                    // AutoSi pads the fractional part with trailing zeros
                    let mut rfc3339 = rfc3339.trim_end_matches('Z').to_owned();
                    if rfc3339.contains('.') {
                        rfc3339 = rfc3339
                            .trim_end_matches('0')
                            .trim_end_matches('.')
                            .to_owned();
                    }
                    rfc3339.push('Z');
                    rfc3339
                }
                // out of range for a calendar date
                None => self.fmt(Format::EpochSeconds),
            },
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    format!("{}", self.seconds)
                } else {
                    let fraction = format!("{:0>9}", self.subsecond_nanos);
                    format!("{}.{}", self.seconds, fraction.trim_end_matches('0'))
                }
            }
        }
    }
}

/// Formats `Instant` can be written out as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    DateTime,
    EpochSeconds,
}

#[cfg(test)]
mod test {
    use crate::instant::Format;
    use crate::Instant;

    #[test]
    fn test_instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098");

        let instant = Instant::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.52Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098.52");
    }

    #[test]
    fn whole_seconds_ending_in_zero_are_not_truncated() {
        let instant = Instant::from_epoch_seconds(1576540090);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:10Z");
    }

    #[test]
    fn fractional_seconds_round_trip() {
        let instant = Instant::from_f64(1576540098.52);
        assert_eq!(instant.epoch_seconds(), 1576540098);
        assert!(instant.has_nanos());
    }
}
