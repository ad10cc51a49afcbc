/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::collections::hash_map::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

use super::laws::EqualityProperty;
use super::laws::HashProperty;
use crate::checklist::Checklist;
use crate::registry::Magma;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

pub(crate) fn check_equality<M: Magma>(checklist: &mut Checklist<EqualityProperty>, examples: &[M]) {
    use EqualityProperty::*;

    if M::native_equality().is_none() {
        checklist.not_applicable(Native);
    }
    for (i, a) in examples.iter().enumerate() {
        checklist.check(Reflexive, a.equal(a), || format!("{} is not equal to itself", a));
        for (j, b) in examples.iter().enumerate() {
            let equal = a.equal(b);
            if i != j {
                checklist.check(DistinctExamples, !equal, || {
                    format!("examples #{} ({}) and #{} ({}) compare equal", i, a, j, b)
                });
            }
            checklist.check(NotEqual, a.not_equal(b) != equal, || {
                format!("equal({}, {}) and not_equal({}, {}) agree", a, b, a, b)
            });
            if let Some(native) = M::native_equality() {
                checklist.check(Native, native(a, b) == equal, || {
                    format!("equal({}, {}) is {} but == says {}", a, b, equal, !equal)
                });
            }
        }
    }
    // A single example has no distinct pair to compare.
    if examples.len() == 1 {
        checklist.not_applicable(DistinctExamples);
    }
}

pub(crate) fn check_hash<M, R>(
    checklist: &mut Checklist<HashProperty>,
    examples: &[M],
    convert: impl Fn(&M) -> R,
) where
    M: Magma + Hash,
    R: Magma + Hash,
{
    use HashProperty::*;

    let converted: Vec<R> = examples.iter().map(&convert).collect();
    for (a, ra) in examples.iter().zip(&converted) {
        checklist.check(CastPreservesMembership, ra.is_member() == a.is_member(), || {
            format!("{} converts to {} with different membership", a, ra)
        });
        checklist.check(CastPreservesHash, hash_of(a) == hash_of(ra), || {
            format!("{} and its conversion {} hash differently", a, ra)
        });
        for (b, rb) in examples.iter().zip(&converted) {
            let equal = a.equal(b);
            if equal {
                checklist.check(EqualValuesHashEqual, hash_of(a) == hash_of(b), || {
                    format!("{} and {} are equal but hash differently", a, b)
                });
            } else {
                checklist.tick_off(EqualValuesHashEqual);
            }
            checklist.check(CastPreservesEquality, ra.equal(rb) == equal, || {
                format!(
                    "equal({}, {}) is {} but equal({}, {}) is {}",
                    a, b, equal, ra, rb, !equal
                )
            });
        }
    }
}
