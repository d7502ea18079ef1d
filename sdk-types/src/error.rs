/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors the model layer can produce.
//!
//! The taxonomy is deliberately narrow: strict enum coercion and strict map
//! insertion are the only fallible operations on generated shapes. Reading
//! an unset field is not an error, it yields `None`.

use std::fmt;

/// Returned by strict enum coercion when a token is not a member of the
/// enumeration.
///
/// The lenient conversion path (`From<&str>`) never produces this error; it
/// stores unrecognized tokens in the enum's `Unknown` variant instead so
/// that responses carrying values added after code generation still
/// deserialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEnumValueError {
    enum_name: &'static str,
    value: String,
}

impl UnknownEnumValueError {
    pub fn new(enum_name: &'static str, value: impl Into<String>) -> Self {
        UnknownEnumValueError {
            enum_name,
            value: value.into(),
        }
    }

    /// The enumeration the token was coerced into.
    pub fn enum_name(&self) -> &'static str {
        self.enum_name
    }

    /// The unrecognized token.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for UnknownEnumValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized value `{}` for enum `{}`",
            self.value, self.enum_name
        )
    }
}

impl std::error::Error for UnknownEnumValueError {}

/// Returned by builder map methods when a key is inserted twice.
///
/// Map fields are strict-insert: the second insert of a key fails and
/// leaves the stored map unchanged. Replacing a whole map goes through the
/// builder's `set_` method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateEntryError {
    field: &'static str,
    key: String,
}

impl DuplicateEntryError {
    pub fn new(field: &'static str, key: impl Into<String>) -> Self {
        DuplicateEntryError {
            field,
            key: key.into(),
        }
    }

    /// The map field the duplicate insert targeted.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The duplicated key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for DuplicateEntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "duplicate key `{}` inserted into map field `{}`",
            self.key, self.field
        )
    }
}

impl std::error::Error for DuplicateEntryError {}

#[cfg(test)]
mod test {
    use crate::error::{DuplicateEntryError, UnknownEnumValueError};

    #[test]
    fn unknown_enum_value_names_token_and_enum() {
        let err = UnknownEnumValueError::new("JobStatus", "PAUSED");
        assert_eq!(
            err.to_string(),
            "unrecognized value `PAUSED` for enum `JobStatus`"
        );
        assert_eq!(err.enum_name(), "JobStatus");
        assert_eq!(err.value(), "PAUSED");
    }

    #[test]
    fn duplicate_entry_names_key_and_field() {
        let err = DuplicateEntryError::new("attributes", "color");
        assert_eq!(
            err.to_string(),
            "duplicate key `color` inserted into map field `attributes`"
        );
        assert_eq!(err.field(), "attributes");
        assert_eq!(err.key(), "color");
    }
}
