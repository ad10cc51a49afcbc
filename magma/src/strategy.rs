/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Property-based generators for example sets.
//!
//! The checker wants examples that are pairwise distinct and small
//! enough that the all-triples laws stay cheap. [`distinct`] builds
//! such a set from any element strategy; [`sequences`] builds one of
//! short symbol sequences over a three-letter alphabet, sometimes
//! including the annihilator, so that prefixes and common prefixes
//! actually occur.
//!
//! This module is only included in test builds (`#[cfg(test)]`).

use std::collections::BTreeSet;
use std::fmt::Debug;

use proptest::prelude::*;

use crate::Sequence;

/// Between 1 and `max` pairwise distinct elements drawn from
/// `element`.
pub fn distinct<T, S>(element: S, max: usize) -> impl Strategy<Value = Vec<T>>
where
    T: Ord + Debug + Clone,
    S: Strategy<Value = T>,
{
    proptest::collection::btree_set(element, 1..=max.max(1))
        .prop_map(|set: BTreeSet<T>| set.into_iter().collect())
}

/// Between 1 and `max` distinct sequences over `{a, b, c}`, each at
/// most 3 symbols long, the annihilator included about one time in
/// four.
pub fn sequences(max: usize) -> impl Strategy<Value = Vec<Sequence<char>>> {
    let sequence = prop_oneof![
        3 => proptest::collection::vec(proptest::char::range('a', 'c'), 0..=3)
            .prop_map(Sequence::Symbols),
        1 => Just(Sequence::Annihilator),
    ];
    distinct(sequence, max)
}

#[cfg(test)]
mod tests {
    use proptest::strategy::ValueTree;
    use proptest::test_runner::TestRunner;

    use super::*;

    #[test]
    fn distinct_sets_are_distinct_and_non_empty() {
        let mut runner = TestRunner::default();
        for _ in 0..64 {
            let values = distinct(0i32..10, 5)
                .new_tree(&mut runner)
                .unwrap()
                .current();
            assert!(!values.is_empty() && values.len() <= 5);
            let unique: BTreeSet<_> = values.iter().collect();
            assert_eq!(unique.len(), values.len());
        }
    }

    proptest! {
        #[test]
        fn sequences_are_short(examples in sequences(4)) {
            prop_assert!(examples.len() <= 4);
            for example in &examples {
                prop_assert!(example.symbols().map_or(true, |s| s.len() <= 3));
            }
        }
    }
}
