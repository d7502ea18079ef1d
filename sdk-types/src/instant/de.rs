/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::*;
use serde::de::Visitor;
use std::fmt;

struct InstantVisitor;

impl<'de> Visitor<'de> for InstantVisitor {
    type Value = Instant;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("epoch seconds as a number")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Instant::from_epoch_seconds(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Instant::from_epoch_seconds(v as i64))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Instant::from_f64(v))
    }
}

impl<'de> serde::Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(InstantVisitor)
    }
}

#[test]
fn deserializes_integer_epoch_seconds() {
    let instant: Instant = serde_json::from_str("1576540098").unwrap();
    assert_eq!(instant, Instant::from_epoch_seconds(1576540098));
}

#[test]
fn deserializes_fractional_epoch_seconds() {
    let instant: Instant = serde_json::from_str("1576540098.5").unwrap();
    assert_eq!(instant.epoch_seconds(), 1576540098);
    assert!(instant.has_nanos());
}

#[test]
fn rejects_non_numeric_timestamps() {
    let result: Result<Instant, _> = serde_json::from_str(r#""2019-12-16T23:48:18Z""#);
    assert!(result.is_err());
}
