/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Shared value types and model contracts for generated AWS service crates.
//!
//! Generated shapes are inert records: every field is optional, equality is
//! structural, and nothing in this layer performs I/O. This crate holds the
//! pieces those shapes share: the timestamp and binary value types, the
//! structural-hash and diagnostic-rendering contracts, strict insertion for
//! builder map fields, and the two errors the model layer can produce.

pub mod error;
pub mod instant;
pub mod map;
pub mod render;
pub mod structural;

pub use crate::error::{DuplicateEntryError, UnknownEnumValueError};
pub use crate::instant::Instant;
pub use crate::map::insert_strict;
pub use crate::render::{Render, ShapeFormatter};
pub use crate::structural::StructuralHash;

use std::fmt;

/// Binary data offered to or returned from a service.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Blob {
    inner: Vec<u8>,
}

impl Blob {
    pub fn new<T: Into<Vec<u8>>>(inp: T) -> Self {
        Blob { inner: inp.into() }
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl serde::Serialize for Blob {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&base64::encode(&self.inner))
    }
}

struct BlobVisitor;

impl<'de> serde::de::Visitor<'de> for BlobVisitor {
    type Value = Blob;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("base64 encoded binary data")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        base64::decode(v).map(Blob::new).map_err(E::custom)
    }
}

impl<'de> serde::Deserialize<'de> for Blob {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(BlobVisitor)
    }
}

#[cfg(test)]
mod test {
    use crate::Blob;

    #[test]
    fn blob_serde_is_base64() {
        let blob = Blob::new("hello world");
        let json = serde_json::to_string(&blob).unwrap();
        assert_eq!(json, r#""aGVsbG8gd29ybGQ=""#);
        let back: Blob = serde_json::from_str(&json).unwrap();
        assert_eq!(back, blob);
    }

    #[test]
    fn blob_rejects_invalid_base64() {
        let result: Result<Blob, _> = serde_json::from_str(r#""not base64!!""#);
        assert!(result.is_err());
    }
}
