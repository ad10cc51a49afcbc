/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Checks of one operation (outer) distributing over another
//! (inner).

use super::Comparison;
use super::laws::DistributivityProperty;
use crate::checklist::Checklist;
use crate::operation::Direction;
use crate::operation::Operation;
use crate::operation::Side;
use crate::property::is_semiring;
use crate::registry::Implements;

pub(crate) fn check_distributive<M, Outer, Inner>(
    checklist: &mut Checklist<DistributivityProperty>,
    examples: &[M],
    compare: Comparison,
    semiring: Option<Direction>,
) where
    M: Implements<Outer> + Implements<Inner>,
    Outer: Operation,
    Inner: Operation,
{
    use DistributivityProperty::*;

    let outer = |a: &M, b: &M| <M as Implements<Outer>>::apply(a, b);
    let inner = |a: &M, b: &M| <M as Implements<Inner>>::apply(a, b);
    let (outer_name, inner_name) = (Outer::ID.name(), Inner::ID.name());

    let sides: Vec<(Side, DistributivityProperty)> =
        [(Side::Left, DistributiveLeft), (Side::Right, DistributiveRight)]
            .into_iter()
            .filter(|(side, law)| {
                let declared = <M as Implements<Outer>>::distributes_over(Inner::ID, *side);
                if !declared {
                    checklist.not_applicable(*law);
                }
                declared
            })
            .collect();

    match semiring {
        Some(direction) => {
            checklist.check(Semiring, is_semiring::<M, Outer, Inner>(direction), || {
                format!(
                    "{} and {} do not declare a {} semiring",
                    outer_name, inner_name, direction
                )
            });
        }
        None => checklist.not_applicable(Semiring),
    }

    let absorbing = match <M as Implements<Inner>>::identity() {
        Some(e) if !sides.is_empty() => Some(e),
        _ => {
            checklist.not_applicable(IdentityAnnihilates);
            None
        }
    };
    if let Some(e) = &absorbing {
        if <M as Implements<Outer>>::annihilator().is_some() {
            checklist.check(
                IdentityAnnihilates,
                <M as Implements<Outer>>::is_annihilator(e),
                || {
                    format!(
                        "the identity {} of {} is not the annihilator of {}",
                        e, inner_name, outer_name
                    )
                },
            );
        }
    }

    for a in examples {
        if let Some(e) = &absorbing {
            for (l, r) in [(e, a), (a, e)] {
                let product = outer(l, r);
                checklist.check(IdentityAnnihilates, compare.same(&product, e), || {
                    format!(
                        "{}({}, {}) = {}, expected the identity {} of {}",
                        outer_name, l, r, product, e, inner_name
                    )
                });
            }
        }
        for b in examples {
            for c in examples {
                for (side, law) in &sides {
                    let (lhs, rhs) = match side {
                        Side::Left => (
                            outer(a, &inner(b, c)),
                            inner(&outer(a, b), &outer(a, c)),
                        ),
                        Side::Right => (
                            outer(&inner(b, c), a),
                            inner(&outer(b, a), &outer(c, a)),
                        ),
                    };
                    checklist.check(*law, compare.same(&lhs, &rhs), || match side {
                        Side::Left => format!(
                            "{o}({a}, {i}({b}, {c})) = {lhs} but {i}({o}({a}, {b}), {o}({a}, {c})) = {rhs}",
                            o = outer_name,
                            i = inner_name,
                        ),
                        Side::Right => format!(
                            "{o}({i}({b}, {c}), {a}) = {lhs} but {i}({o}({b}, {a}), {o}({c}, {a})) = {rhs}",
                            o = outer_name,
                            i = inner_name,
                        ),
                    });
                }
            }
        }
    }
}
