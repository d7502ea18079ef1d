/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Strict insertion for builder map fields.

use crate::error::DuplicateEntryError;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Inserts `key -> value` into an optional map field, initializing the map
/// when it is unset.
///
/// Map fields on generated builders are strict-insert: inserting a key that
/// is already present fails with [`DuplicateEntryError`] and leaves the map
/// exactly as it was. `field` is the wire name of the map field, used in
/// the error.
pub fn insert_strict<K, V>(
    map: &mut Option<HashMap<K, V>>,
    field: &'static str,
    key: K,
    value: V,
) -> Result<(), DuplicateEntryError>
where
    K: Eq + Hash + fmt::Display,
{
    let entries = map.get_or_insert_with(HashMap::new);
    match entries.entry(key) {
        Entry::Occupied(existing) => Err(DuplicateEntryError::new(field, existing.key().to_string())),
        Entry::Vacant(slot) => {
            slot.insert(value);
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use crate::map::insert_strict;
    use std::collections::HashMap;

    #[test]
    fn insert_into_unset_field_initializes_the_map() {
        let mut field: Option<HashMap<String, i32>> = None;
        insert_strict(&mut field, "counts", "a".to_string(), 1).unwrap();
        assert_eq!(field.as_ref().unwrap().get("a"), Some(&1));
    }

    #[test]
    fn duplicate_key_fails_and_leaves_map_unchanged() {
        let mut field: Option<HashMap<String, i32>> = None;
        insert_strict(&mut field, "counts", "k".to_string(), 1).unwrap();
        let err = insert_strict(&mut field, "counts", "k".to_string(), 2).unwrap_err();
        assert_eq!(err.key(), "k");
        assert_eq!(err.field(), "counts");
        let map = field.unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("k"), Some(&1));
    }

    #[test]
    fn distinct_keys_accumulate() {
        let mut field: Option<HashMap<String, i32>> = None;
        insert_strict(&mut field, "counts", "a".to_string(), 1).unwrap();
        insert_strict(&mut field, "counts", "b".to_string(), 2).unwrap();
        assert_eq!(field.unwrap().len(), 2);
    }
}
