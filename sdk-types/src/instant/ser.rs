/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::*;

impl serde::Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if self.subsecond_nanos == 0 {
            serializer.serialize_i64(self.seconds)
        } else {
            serializer.serialize_f64(self.epoch_fractional_seconds())
        }
    }
}

#[test]
fn whole_seconds_serialize_as_integers() {
    let instant = Instant::from_epoch_seconds(1576540098);
    assert_eq!(serde_json::to_string(&instant).unwrap(), "1576540098");
}

#[test]
fn fractional_seconds_serialize_as_floats() {
    let instant = Instant::from_fractional_seconds(1576540098, 0.5);
    assert_eq!(serde_json::to_string(&instant).unwrap(), "1576540098.5");
}
