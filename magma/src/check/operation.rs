/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Checks of a single operation.
//!
//! Laws that need no example (identity accessor, annihilator
//! recognition) run once. The rest run on every example, every pair
//! and every triple. Undoing an annihilator is expected to signal
//! "undefined" when the implementation claims it does; otherwise the
//! check is skipped.

use std::fmt::Display;

use super::Comparison;
use super::laws::OperationProperty;
use super::structure::strict_weak_order;
use crate::checklist::Checklist;
use crate::error::OperationError;
use crate::operation::Operation;
use crate::operation::Side;
use crate::property;
use crate::registry::Implements;
use crate::registry::Magma;
use crate::registry::identity_accessor;

fn call<M: Display>(name: &str, a: &M, b: &M) -> String {
    format!("{}({}, {})", name, a, b)
}

/// One operation under test: its implementation and the comparison
/// its laws use.
struct Subject<M, Op> {
    compare: Comparison,
    identity: Option<M>,
    annihilator: Option<M>,
    _op: std::marker::PhantomData<Op>,
}

impl<M: Implements<Op>, Op: Operation> Subject<M, Op> {
    fn new(compare: Comparison) -> Self {
        Self {
            compare,
            identity: <M as Implements<Op>>::identity(),
            annihilator: <M as Implements<Op>>::annihilator(),
            _op: std::marker::PhantomData,
        }
    }

    fn name(&self) -> &'static str {
        Op::ID.name()
    }

    fn apply(&self, a: &M, b: &M) -> M {
        <M as Implements<Op>>::apply(a, b)
    }

    fn same(&self, a: &M, b: &M) -> bool {
        self.compare.same(a, b)
    }

    fn is_annihilator(&self, a: &M) -> bool {
        <M as Implements<Op>>::is_annihilator(a)
    }

    fn inverse_declared(&self, side: Side) -> bool {
        <M as Implements<Op>>::inverse_direction().is_some_and(|d| d.includes(side))
    }

    fn invert_declared(&self, side: Side) -> bool {
        <M as Implements<Op>>::invert_direction().is_some_and(|d| d.includes(side))
    }

    /// Expect `attempt`, an inverse or inversion involving an
    /// annihilator, to signal "undefined".
    fn expect_undefined(
        &self,
        checklist: &mut Checklist<OperationProperty>,
        what: String,
        attempt: impl FnOnce() -> Result<M, OperationError>,
    ) {
        let law = OperationProperty::InverseOfAnnihilator;
        if !property::signals_undefined::<M, Op>() {
            checklist.skip(law);
            return;
        }
        match attempt() {
            Err(e) if e.is_undefined() => {
                checklist.tick_off(law);
            }
            Err(e) => checklist.fail(law, format!("{} failed with {}, expected undefined", what, e)),
            Ok(value) => checklist.fail(law, format!("{} = {}, expected undefined", what, value)),
        }
    }
}

pub(crate) fn check_operation<M, Op>(
    checklist: &mut Checklist<OperationProperty>,
    examples: &[M],
    compare: Comparison,
) where
    M: Implements<Op>,
    Op: Operation,
{
    let subject = Subject::<M, Op>::new(compare);
    check_static(&subject, checklist);
    for a in examples {
        check_one(&subject, checklist, a);
    }
    for a in examples {
        for b in examples {
            check_two(&subject, checklist, a, b);
        }
    }
    for a in examples {
        for b in examples {
            for c in examples {
                check_three(&subject, checklist, a, b, c);
            }
        }
    }
}

fn check_static<M: Implements<Op>, Op: Operation>(
    subject: &Subject<M, Op>,
    checklist: &mut Checklist<OperationProperty>,
) {
    use OperationProperty::*;

    if !property::is_idempotent::<M, Op>() {
        checklist.not_applicable(Idempotent);
    }
    if !property::is_path_operation::<M, Op>() {
        checklist.not_applicable(PathOperation);
    }
    if !property::is_associative::<M, Op>() {
        checklist.not_applicable(Associative);
    }
    if !property::is_commutative::<M, Op>() {
        checklist.not_applicable(Commutative);
    } else if property::is_order_driven::<M, Op>() {
        // Ties between unequal operands resolve to the left operand,
        // so commutativity only holds up to the order's equivalence.
        checklist.skip(Commutative);
    }
    if M::reverse().is_none() {
        checklist.not_applicable(Reverse);
    }
    if <M as Implements<Op>>::native().is_none() {
        checklist.not_applicable(Native);
    }
    if <M as Implements<Op>>::native_inverse().is_none() || !subject.inverse_declared(Side::Right) {
        checklist.not_applicable(NativeInverse);
    }
    if <M as Implements<Op>>::order().is_none() {
        checklist.not_applicable(OrderAsymmetric);
        checklist.not_applicable(OrderTransitive);
        checklist.not_applicable(OrderPreferred);
    }

    match (&subject.identity, identity_accessor::<M, Op>()) {
        (_, None) => checklist.not_applicable(IdentityAccessor),
        (None, Some(accessor)) => checklist.fail(
            IdentityAccessor,
            format!(
                "{} returns {} but {} has no identity",
                Op::ID.identity_accessor().unwrap_or("identity"),
                accessor,
                subject.name()
            ),
        ),
        (Some(identity), Some(accessor)) => {
            checklist.check(IdentityAccessor, accessor.equal(identity), || {
                format!(
                    "{} returns {}, but the identity of {} is {}",
                    Op::ID.identity_accessor().unwrap_or("identity"),
                    accessor,
                    subject.name(),
                    identity
                )
            });
        }
    }
    if subject.identity.is_none() {
        checklist.not_applicable(IdentityLeft);
        checklist.not_applicable(IdentityRight);
    }

    match &subject.annihilator {
        Some(z) => {
            checklist.check(AnnihilatorRecognized, subject.is_annihilator(z), || {
                format!("the annihilator {} of {} is not recognized", z, subject.name())
            });
        }
        None => {
            checklist.not_applicable(AnnihilatorLeft);
            checklist.not_applicable(AnnihilatorRight);
            checklist.not_applicable(AnnihilatorRecognized);
        }
    }

    for (side, law) in [(Side::Left, InverseLeft), (Side::Right, InverseRight)] {
        if !subject.inverse_declared(side) {
            checklist.not_applicable(law);
        }
    }
    for (side, law) in [(Side::Left, InvertLeft), (Side::Right, InvertRight)] {
        if !subject.invert_declared(side) {
            checklist.not_applicable(law);
        } else if subject.identity.is_none() {
            checklist.fail(
                law,
                format!(
                    "{} is declared on the {} but {} has no identity",
                    Op::ID.invert_name(),
                    side,
                    subject.name()
                ),
            );
        }
    }
    let undoes = <M as Implements<Op>>::inverse_direction().is_some()
        || <M as Implements<Op>>::invert_direction().is_some();
    if subject.annihilator.is_none() || !undoes {
        checklist.not_applicable(InverseOfAnnihilator);
    } else if !property::signals_undefined::<M, Op>() {
        checklist.skip(InverseOfAnnihilator);
    }
}

fn check_one<M: Implements<Op>, Op: Operation>(
    subject: &Subject<M, Op>,
    checklist: &mut Checklist<OperationProperty>,
    a: &M,
) {
    use OperationProperty::*;
    let name = subject.name();

    if property::is_idempotent::<M, Op>() {
        let r = subject.apply(a, a);
        checklist.check(Idempotent, subject.same(&r, a), || {
            format!("{} = {}, expected {}", call(name, a, a), r, a)
        });
    }

    if let Some(e) = &subject.identity {
        let r = subject.apply(e, a);
        checklist.check(IdentityLeft, subject.same(&r, a), || {
            format!("{} = {}, expected {}", call(name, e, a), r, a)
        });
        let r = subject.apply(a, e);
        checklist.check(IdentityRight, subject.same(&r, a), || {
            format!("{} = {}, expected {}", call(name, a, e), r, a)
        });
    }

    if let Some(z) = &subject.annihilator {
        let r = subject.apply(z, a);
        checklist.check(AnnihilatorLeft, subject.same(&r, z), || {
            format!("{} = {}, expected {}", call(name, z, a), r, z)
        });
        let r = subject.apply(a, z);
        checklist.check(AnnihilatorRight, subject.same(&r, z), || {
            format!("{} = {}, expected {}", call(name, a, z), r, z)
        });
    }

    if let Some(order) = <M as Implements<Op>>::order() {
        checklist.check(OrderAsymmetric, !order(a, a), || {
            format!("{} is preferred over itself", a)
        });
    }

    let Some(e) = &subject.identity else {
        return;
    };
    for (side, law) in [(Side::Left, InvertLeft), (Side::Right, InvertRight)] {
        if !subject.invert_declared(side) {
            continue;
        }
        let what = format!("{}({}, {})", Op::ID.invert_name(), side, a);
        let attempt = || <M as Implements<Op>>::invert(side, a);
        if subject.is_annihilator(a) {
            subject.expect_undefined(checklist, what, attempt);
            continue;
        }
        match attempt() {
            Ok(x) => {
                let r = match side {
                    Side::Left => subject.apply(&x, a),
                    Side::Right => subject.apply(a, &x),
                };
                checklist.check(law, subject.same(&r, e), || {
                    let operands = match side {
                        Side::Left => call(name, &x, a),
                        Side::Right => call(name, a, &x),
                    };
                    format!("{} = {}, {} = {}, expected {}", what, x, operands, r, e)
                });
            }
            Err(err) => checklist.fail(law, format!("{} failed: {}", what, err)),
        }
    }
}

fn check_two<M: Implements<Op>, Op: Operation>(
    subject: &Subject<M, Op>,
    checklist: &mut Checklist<OperationProperty>,
    a: &M,
    b: &M,
) {
    use OperationProperty::*;
    let name = subject.name();
    let r = subject.apply(a, b);

    checklist.check(Closed, r.is_member(), || {
        format!("{} = {} is not a member", call(name, a, b), r)
    });

    for operand in [a, b] {
        if !subject.same(&r, operand) && subject.is_annihilator(operand) {
            checklist.fail(
                AnnihilatorObserved,
                format!(
                    "{} is reported as an annihilator but {} = {}",
                    operand,
                    call(name, a, b),
                    r
                ),
            );
        } else {
            checklist.tick_off(AnnihilatorObserved);
        }
    }

    if let Some(native) = <M as Implements<Op>>::native() {
        let n = native(a, b);
        checklist.check(Native, subject.same(&n, &r), || {
            format!("{} = {} but the native operator gives {}", call(name, a, b), r, n)
        });
    }

    if property::is_path_operation::<M, Op>() {
        checklist.check(PathOperation, r.equal(a) || r.equal(b), || {
            format!("{} = {} is neither operand", call(name, a, b), r)
        });
    }

    if property::is_commutative::<M, Op>() && !property::is_order_driven::<M, Op>() {
        let s = subject.apply(b, a);
        checklist.check(Commutative, subject.same(&r, &s), || {
            format!("{} = {} but {} = {}", call(name, a, b), r, call(name, b, a), s)
        });
    }

    if let Some(reverse) = M::reverse() {
        let s = reverse(&subject.apply(&reverse(b), &reverse(a)));
        checklist.check(Reverse, subject.same(&r, &s), || {
            format!(
                "{} = {} but reversing the reversed operands gives {}",
                call(name, a, b),
                r,
                s
            )
        });
    }

    check_inverse(subject, checklist, a, b, &r);

    if let Some(order) = <M as Implements<Op>>::order() {
        let (ab, ba) = (order(a, b), order(b, a));
        checklist.check(OrderAsymmetric, !(ab && ba), || {
            format!("{} and {} are each preferred over the other", a, b)
        });
        let preferred = if ab {
            r.equal(a)
        } else if ba {
            r.equal(b)
        } else {
            r.equal(a) || r.equal(b)
        };
        checklist.check(OrderPreferred, preferred, || {
            format!("{} = {} is not the preferred operand", call(name, a, b), r)
        });
    }
}

/// Inverse laws for `r = op(a, b)`, including the native inverse.
fn check_inverse<M: Implements<Op>, Op: Operation>(
    subject: &Subject<M, Op>,
    checklist: &mut Checklist<OperationProperty>,
    a: &M,
    b: &M,
    r: &M,
) {
    use OperationProperty::*;
    let inverse = Op::ID.inverse_name();

    for (side, law) in [(Side::Left, InverseLeft), (Side::Right, InverseRight)] {
        if !subject.inverse_declared(side) {
            continue;
        }
        // Left: remove `a` from the left of `r`, expecting `b`.
        // Right: remove `b` from the right of `r`, expecting `a`.
        let (removed, expected) = match side {
            Side::Left => (a, b),
            Side::Right => (b, a),
        };
        let what = format!("{}({}, {}, {})", inverse, side, r, removed);
        let attempt = || <M as Implements<Op>>::inverse(side, r, removed);
        if subject.is_annihilator(removed) {
            subject.expect_undefined(checklist, what, attempt);
            continue;
        }
        match attempt() {
            Ok(x) => {
                checklist.check(law, subject.same(&x, expected), || {
                    format!("{} = {}, expected {}", what, x, expected)
                });
            }
            Err(err) => checklist.fail(law, format!("{} failed: {}", what, err)),
        }
    }

    let Some(native_inverse) = <M as Implements<Op>>::native_inverse() else {
        return;
    };
    if !subject.inverse_declared(Side::Right) || subject.is_annihilator(b) {
        return;
    }
    if let Ok(x) = <M as Implements<Op>>::inverse(Side::Right, r, b) {
        let n = native_inverse(r, b);
        checklist.check(NativeInverse, subject.same(&x, &n), || {
            format!(
                "{}(right, {}, {}) = {} but the native operator gives {}",
                inverse, r, b, x, n
            )
        });
    }
}

fn check_three<M: Implements<Op>, Op: Operation>(
    subject: &Subject<M, Op>,
    checklist: &mut Checklist<OperationProperty>,
    a: &M,
    b: &M,
    c: &M,
) {
    use OperationProperty::*;

    if property::is_associative::<M, Op>() {
        let left = subject.apply(&subject.apply(a, b), c);
        let right = subject.apply(a, &subject.apply(b, c));
        checklist.check(Associative, subject.same(&left, &right), || {
            let name = subject.name();
            format!(
                "{}({}, {}) = {} but {}({}, {}) = {}",
                name,
                call(name, a, b),
                c,
                left,
                name,
                a,
                call(name, b, c),
                right
            )
        });
    }

    if let Some(order) = <M as Implements<Op>>::order() {
        checklist.check(OrderTransitive, strict_weak_order(order, a, b, c), || {
            format!(
                "the order of {} is not a strict weak order on {}, {}, {}",
                subject.name(),
                a,
                b,
                c
            )
        });
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;
    use crate::Markers;
    use crate::Multiply;
    use crate::config::CheckerConfig;
    use crate::operation::Direction;
    use crate::tag::Tagged;

    // Multiplication modulo 7 with division, 0 the annihilator.
    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Mod7(u8);

    impl fmt::Display for Mod7 {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl Tagged for Mod7 {
        type Tag = Mod7;
    }

    impl Magma for Mod7 {
        fn is_member(&self) -> bool {
            self.0 < 7
        }

        fn equal(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    fn reciprocal(a: u8) -> Option<u8> {
        (1..7).find(|x| (x * a) % 7 == 1)
    }

    impl Implements<Multiply> for Mod7 {
        const MARKERS: Markers = Markers::NONE
            .associative()
            .commutative()
            .signals_undefined();

        fn apply(a: &Self, b: &Self) -> Self {
            Mod7((a.0 * b.0) % 7)
        }

        fn identity() -> Option<Self> {
            Some(Mod7(1))
        }

        fn annihilator() -> Option<Self> {
            Some(Mod7(0))
        }

        fn inverse_direction() -> Option<Direction> {
            Some(Direction::Either)
        }

        fn inverse_two_sided(c: &Self, a: &Self) -> Result<Self, OperationError> {
            match reciprocal(a.0) {
                Some(x) => Ok(Mod7((c.0 * x) % 7)),
                None => Err(OperationError::InverseOfAnnihilator { operation: "divide" }),
            }
        }

        fn invert_direction() -> Option<Direction> {
            Some(Direction::Either)
        }
    }

    // Mod7 without the signals-undefined marker; dividing by zero is a
    // caller error.
    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Unmarked(Mod7);

    impl fmt::Display for Unmarked {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt::Display::fmt(&self.0, f)
        }
    }

    impl Tagged for Unmarked {
        type Tag = Unmarked;
    }

    impl Magma for Unmarked {
        fn is_member(&self) -> bool {
            self.0.is_member()
        }

        fn equal(&self, other: &Self) -> bool {
            self.0.equal(&other.0)
        }
    }

    impl Implements<Multiply> for Unmarked {
        const MARKERS: Markers = Markers::NONE.associative().commutative();

        fn apply(a: &Self, b: &Self) -> Self {
            Unmarked(<Mod7 as Implements<Multiply>>::apply(&a.0, &b.0))
        }

        fn identity() -> Option<Self> {
            Some(Unmarked(Mod7(1)))
        }

        fn annihilator() -> Option<Self> {
            Some(Unmarked(Mod7(0)))
        }

        fn inverse_direction() -> Option<Direction> {
            Some(Direction::Either)
        }

        fn inverse_two_sided(c: &Self, a: &Self) -> Result<Self, OperationError> {
            assert_ne!(a.0, Mod7(0), "divided by the annihilator");
            <Mod7 as Implements<Multiply>>::inverse_two_sided(&c.0, &a.0).map(Unmarked)
        }
    }

    fn run(examples: &[Mod7]) -> Checklist<OperationProperty> {
        let mut checklist = Checklist::logging();
        let compare = Comparison::new(false, &CheckerConfig::default());
        check_operation::<Mod7, Multiply>(&mut checklist, examples, compare);
        checklist
    }

    #[test]
    fn field_multiplication_passes() {
        let examples: Vec<Mod7> = (0..7).map(Mod7).collect();
        let checklist = run(&examples);
        assert!(checklist.success(), "{checklist}");
        assert!(checklist.is_done(OperationProperty::InverseOfAnnihilator));
        assert!(checklist.is_done(OperationProperty::InverseLeft));
        assert!(checklist.is_done(OperationProperty::InvertRight));
    }

    #[test]
    fn without_an_annihilator_example_the_probe_stays_pending() {
        let checklist = run(&[Mod7(2), Mod7(3)]);
        assert_eq!(
            checklist.pending().collect::<Vec<_>>(),
            vec![OperationProperty::InverseOfAnnihilator]
        );
    }

    #[test]
    fn unmarked_inverses_are_never_called_on_the_annihilator() {
        let examples: Vec<Unmarked> = (0..7).map(|i| Unmarked(Mod7(i))).collect();
        let mut checklist = Checklist::logging();
        let compare = Comparison::new(false, &CheckerConfig::default());
        check_operation::<Unmarked, Multiply>(&mut checklist, &examples, compare);
        assert!(checklist.success(), "{checklist}");
        assert_eq!(
            checklist.state(OperationProperty::InverseOfAnnihilator),
            &crate::checklist::PropertyState::Skipped
        );
    }
}
