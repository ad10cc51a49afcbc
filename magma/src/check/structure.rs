/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Type-level checks: membership, equality, order, reversal and
//! printing, independent of any operation.

use super::laws::MagmaProperty;
use crate::checklist::Checklist;
use crate::config::CheckerConfig;
use crate::registry::Magma;
use crate::tag::same_magma;
use crate::tag::tag_name;

pub(crate) fn check_structure<M: Magma>(
    checklist: &mut Checklist<MagmaProperty>,
    examples: &[M],
    config: &CheckerConfig,
) {
    check_static::<M>(checklist);
    for a in examples {
        check_one(checklist, a, config);
    }
    for a in examples {
        for b in examples {
            check_two(checklist, a, b);
        }
    }
    for a in examples {
        for b in examples {
            for c in examples {
                check_three(checklist, a, b, c);
            }
        }
    }
}

fn check_static<M: Magma>(checklist: &mut Checklist<MagmaProperty>) {
    use MagmaProperty::*;

    let qualified =
        same_magma::<M, &M>() && same_magma::<M, &mut M>() && same_magma::<M, Box<M>>();
    checklist.check(Qualifiers, qualified, || {
        format!("qualified forms of {} carry a different tag", tag_name::<M>())
    });

    match M::non_member() {
        Some(sentinel) => {
            checklist.check(NonMember, !sentinel.is_member(), || {
                format!("non-member sentinel {} is a member", sentinel)
            });
        }
        None => checklist.not_applicable(NonMember),
    }
    if M::native_equality().is_none() {
        checklist.not_applicable(NativeEquality);
    }
    if M::native_inequality().is_none() {
        checklist.not_applicable(NativeInequality);
    }
    if M::compare().is_none() {
        checklist.not_applicable(CompareAsymmetric);
        checklist.not_applicable(CompareTransitive);
        checklist.not_applicable(CompareEquality);
    }
    if M::reverse().is_none() {
        checklist.not_applicable(ReverseInvolution);
        checklist.not_applicable(ReverseMembership);
    }
    if M::print().is_none() {
        checklist.not_applicable(Print);
    }
}

fn check_one<M: Magma>(checklist: &mut Checklist<MagmaProperty>, a: &M, config: &CheckerConfig) {
    use MagmaProperty::*;

    checklist.check(Membership, a.is_member(), || {
        format!("example {} is not a member of {}", a, tag_name::<M>())
    });
    checklist.check(EqualityReflexive, a.equal(a), || {
        format!("{} is not equal to itself", a)
    });
    checklist.check(ApproximateEquality, a.approximately_equal(a, config.tolerance), || {
        format!("{} is not approximately equal to itself", a)
    });
    if let Some(less) = M::compare() {
        checklist.check(CompareAsymmetric, !less(a, a), || {
            format!("{} sorts before itself", a)
        });
    }
    if let Some(reverse) = M::reverse() {
        let reversed = reverse(a);
        checklist.check(ReverseMembership, reversed.is_member(), || {
            format!("reverse({}) = {} is not a member", a, reversed)
        });
        let back = reverse(&reversed);
        checklist.check(ReverseInvolution, back.equal(a), || {
            format!("reverse(reverse({})) = {}", a, back)
        });
    }
    if let Some(print) = M::print() {
        let printed = print(a);
        let displayed = a.to_string();
        checklist.check(Print, printed == displayed, || {
            format!("print gives {:?}, Display gives {:?}", printed, displayed)
        });
    }
}

fn check_two<M: Magma>(checklist: &mut Checklist<MagmaProperty>, a: &M, b: &M) {
    use MagmaProperty::*;

    let equal = a.equal(b);
    let unequal = a.not_equal(b);
    checklist.check(NotEqual, unequal != equal, || {
        format!("equal({}, {}) and not_equal({}, {}) agree", a, b, a, b)
    });
    if let Some(native) = M::native_equality() {
        checklist.check(NativeEquality, native(a, b) == equal, || {
            format!("equal({}, {}) is {} but == says {}", a, b, equal, !equal)
        });
    }
    if let Some(native) = M::native_inequality() {
        checklist.check(NativeInequality, native(a, b) == unequal, || {
            format!("not_equal({}, {}) is {} but != says {}", a, b, unequal, !unequal)
        });
    }
    if let Some(less) = M::compare() {
        let (ab, ba) = (less(a, b), less(b, a));
        checklist.check(CompareAsymmetric, !(ab && ba), || {
            format!("{} and {} each sort before the other", a, b)
        });
        checklist.check(CompareEquality, (!ab && !ba) == equal, || {
            if equal {
                format!("{} and {} are equal but one sorts before the other", a, b)
            } else {
                format!("{} and {} are unequal but neither sorts first", a, b)
            }
        });
    }
}

fn check_three<M: Magma>(checklist: &mut Checklist<MagmaProperty>, a: &M, b: &M, c: &M) {
    use MagmaProperty::*;

    if a.equal(b) && a.equal(c) {
        checklist.check(EqualityTransitive, b.equal(c), || {
            format!("{} equals {} and {} but they differ", a, b, c)
        });
    } else {
        checklist.tick_off(EqualityTransitive);
    }
    if let Some(less) = M::compare() {
        checklist.check(CompareTransitive, strict_weak_order(less, a, b, c), || {
            format!("compare is not a strict weak order on {}, {}, {}", a, b, c)
        });
    }
}

/// Transitivity of `less` and of its incomparability on one triple.
pub(crate) fn strict_weak_order<M>(less: fn(&M, &M) -> bool, a: &M, b: &M, c: &M) -> bool {
    let transitive = !(less(a, b) && less(b, c)) || less(a, c);
    let incomparable = |x: &M, y: &M| !less(x, y) && !less(y, x);
    let incomparability = !(incomparable(a, b) && incomparable(b, c)) || incomparable(a, c);
    transitive && incomparability
}
