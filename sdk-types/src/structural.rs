/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Structural hashing for generated shapes.
//!
//! Shapes with `f64` fields cannot derive `std::hash::Hash`, so generated
//! code implements [`StructuralHash`] instead: per-field hashes are folded
//! in declaration order with a multiplicative accumulator seeded at 1. An
//! unset field contributes the fixed sentinel 0 as a folded step, never a
//! skipped step, so shapes differing only in which of two same-typed fields
//! is set still hash apart. Equal shapes always hash equal.

use crate::{Blob, Instant};
use std::collections::HashMap;
use std::hash::Hash;

/// Folds one per-field hash into the running accumulator.
pub fn fold(hash: u64, field_hash: u64) -> u64 {
    hash.wrapping_mul(31).wrapping_add(field_hash)
}

/// A stable, structure-derived hash.
///
/// `a == b` must imply `a.structural_hash() == b.structural_hash()`.
pub trait StructuralHash {
    fn structural_hash(&self) -> u64;
}

impl StructuralHash for bool {
    fn structural_hash(&self) -> u64 {
        u64::from(*self)
    }
}

impl StructuralHash for i32 {
    fn structural_hash(&self) -> u64 {
        *self as u64
    }
}

impl StructuralHash for i64 {
    fn structural_hash(&self) -> u64 {
        *self as u64
    }
}

impl StructuralHash for f64 {
    fn structural_hash(&self) -> u64 {
        self.to_bits()
    }
}

impl StructuralHash for str {
    fn structural_hash(&self) -> u64 {
        self.as_bytes()
            .iter()
            .fold(0, |hash, byte| fold(hash, u64::from(*byte)))
    }
}

impl StructuralHash for String {
    fn structural_hash(&self) -> u64 {
        self.as_str().structural_hash()
    }
}

impl StructuralHash for Instant {
    fn structural_hash(&self) -> u64 {
        fold(self.seconds as u64, u64::from(self.subsecond_nanos))
    }
}

impl StructuralHash for Blob {
    fn structural_hash(&self) -> u64 {
        self.as_ref()
            .iter()
            .fold(0, |hash, byte| fold(hash, u64::from(*byte)))
    }
}

impl<T> StructuralHash for Option<T>
where
    T: StructuralHash,
{
    fn structural_hash(&self) -> u64 {
        match self {
            Some(value) => value.structural_hash(),
            None => 0,
        }
    }
}

impl<T> StructuralHash for Vec<T>
where
    T: StructuralHash,
{
    fn structural_hash(&self) -> u64 {
        self.iter()
            .fold(1, |hash, item| fold(hash, item.structural_hash()))
    }
}

impl<K, V> StructuralHash for HashMap<K, V>
where
    K: StructuralHash + Eq + Hash,
    V: StructuralHash,
{
    // entry hashes combine with a wrapping sum so iteration order cannot
    // affect the result
    fn structural_hash(&self) -> u64 {
        self.iter()
            .map(|(key, value)| fold(key.structural_hash(), value.structural_hash()))
            .fold(0, |total, entry| total.wrapping_add(entry))
    }
}

#[cfg(test)]
mod test {
    use crate::structural::{fold, StructuralHash};
    use proptest::prelude::*;
    use std::collections::HashMap;

    #[test]
    fn absent_contributes_zero() {
        let unset: Option<String> = None;
        assert_eq!(unset.structural_hash(), 0);
        assert_eq!(fold(1, unset.structural_hash()), 31);
    }

    #[test]
    fn absent_is_a_folded_step_not_a_skipped_one() {
        // two same-typed fields, only one set: the accumulations differ
        let first_set = fold(fold(1, "x".structural_hash()), 0);
        let second_set = fold(fold(1, 0), "x".structural_hash());
        assert_ne!(first_set, second_set);
    }

    #[test]
    fn vec_hash_depends_on_order() {
        let forward = vec!["a".to_string(), "b".to_string()];
        let backward = vec!["b".to_string(), "a".to_string()];
        assert_ne!(forward.structural_hash(), backward.structural_hash());
    }

    #[test]
    fn float_hash_uses_bit_pattern() {
        assert_eq!(10.5_f64.structural_hash(), 10.5_f64.to_bits());
        assert_ne!(10.5_f64.structural_hash(), 10.0_f64.structural_hash());
    }

    proptest! {
        #[test]
        fn map_hash_is_iteration_order_independent(entries: Vec<(String, i32)>) {
            let map: HashMap<String, i32> = entries.into_iter().collect();
            let mut reversed: Vec<(String, i32)> =
                map.iter().map(|(k, v)| (k.clone(), *v)).collect();
            reversed.reverse();
            let rebuilt: HashMap<String, i32> = reversed.into_iter().collect();
            prop_assert_eq!(map.structural_hash(), rebuilt.structural_hash());
        }

        #[test]
        fn equal_strings_hash_equal(s: String) {
            prop_assert_eq!(s.structural_hash(), s.clone().structural_hash());
        }
    }
}
