/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! The operation registry.
//!
//! A value type joins a magma by implementing [`Magma`]; it supports
//! a binary operation by implementing [`Implements<Op>`] for that
//! operation. Everything optional is an explicit capability query
//! returning `Option`: `None` means "not implemented", and generic
//! code (the checker in particular) branches on it rather than
//! failing to compile or failing at run time.
//!
//! Default derivations:
//!
//! - `not_equal` is the negation of `equal`;
//! - `approximately_equal` is `equal`;
//! - `is_annihilator(v)` is `equal(v, annihilator())` when an
//!   annihilator exists, and `false` otherwise;
//! - a one-sided inverse falls back to the two-sided form;
//! - `invert(side, a)` is `inverse(side.mirror(), identity(), a)`;
//! - every [`Ordered`] type implements [`Choose`] by picking the
//!   preferred of its operands.
//!
//! The inverse of [`Multiply`] is [`divide`]; the inverse of [`Add`]
//! is [`subtract`].
//!
//! # Example
//!
//! ```
//! use magma::Side;
//!
//! assert_eq!(magma::multiply(&3i64, &4i64), 12);
//! assert_eq!(magma::subtract(Side::Right, &12i64, &4i64), Ok(8));
//! assert_eq!(magma::one::<i64>(), Some(1));
//! assert!(magma::is_annihilator::<i64, magma::Multiply>(&0));
//! ```

use std::fmt;

use crate::error::OperationError;
use crate::operation::Add;
use crate::operation::Choose;
use crate::operation::Direction;
use crate::operation::Markers;
use crate::operation::Multiply;
use crate::operation::Operation;
use crate::operation::OperationId;
use crate::operation::Side;
use crate::tag::Tagged;
use crate::tag::tag_name;

/// A value type that is a member of a magma.
///
/// Only membership and equality are required; every other capability
/// defaults to "not implemented".
pub trait Magma: Tagged + Clone + fmt::Debug + fmt::Display + 'static {
    /// Whether this value is a member of the magma. A value type may
    /// be able to represent things outside the magma (NaN, say).
    fn is_member(&self) -> bool;

    /// Equality within the magma.
    fn equal(&self, other: &Self) -> bool;

    /// Inequality; the negation of [`Magma::equal`] unless overridden.
    fn not_equal(&self, other: &Self) -> bool {
        !self.equal(other)
    }

    /// Equality up to `tolerance`; [`Magma::equal`] unless overridden.
    fn approximately_equal(&self, other: &Self, _tolerance: f64) -> bool {
        self.equal(other)
    }

    /// The native `==` operator, if the type has one.
    fn native_equality() -> Option<fn(&Self, &Self) -> bool> {
        None
    }

    /// The native `!=` operator, if the type has one.
    fn native_inequality() -> Option<fn(&Self, &Self) -> bool> {
        None
    }

    /// A value of this type that is not a member of the magma.
    fn non_member() -> Option<Self> {
        None
    }

    /// A strict weak order on the magma: `compare(a, b)` is "a sorts
    /// before b".
    fn compare() -> Option<fn(&Self, &Self) -> bool> {
        None
    }

    /// Reversal, an involution with `reverse(a * b) == reverse(b) *
    /// reverse(a)`.
    fn reverse() -> Option<fn(&Self) -> Self> {
        None
    }

    /// Textual form; must agree with `Display`.
    fn print() -> Option<fn(&Self) -> String> {
        None
    }

    /// A dedicated accessor for the multiplicative identity. Must be
    /// exactly equal to the identity of [`Multiply`].
    fn one() -> Option<Self> {
        None
    }

    /// A dedicated accessor for the additive identity. Must be
    /// exactly equal to the identity of [`Add`].
    fn zero() -> Option<Self> {
        None
    }
}

/// The implementation of operation `Op` for a magma.
///
/// [`Implements::MARKERS`] declares the laws the implementation
/// claims. Optional parts (identity, annihilator, inverse, inversion,
/// order, native operators) are capability queries.
///
/// # Inverses
///
/// `inverse(Side::Left, c, a)` removes `a` from the left of `c`, so
/// `inverse(Side::Left, &apply(a, b), a) == b`. Symmetrically
/// `inverse(Side::Right, &apply(a, b), b) == a`.
/// [`Implements::inverse_direction`] says which sides exist.
///
/// `invert(Side::Left, a)` is the value `x` with `apply(x, a) ==
/// identity`, `invert(Side::Right, a)` the value with `apply(a, x) ==
/// identity`.
pub trait Implements<Op: Operation>: Magma {
    /// Laws this implementation claims.
    const MARKERS: Markers;

    /// Apply the operation.
    fn apply(a: &Self, b: &Self) -> Self;

    /// The identity element.
    fn identity() -> Option<Self> {
        None
    }

    /// The annihilator (absorbing element).
    fn annihilator() -> Option<Self> {
        None
    }

    /// Whether `a` is an annihilator. Override for magmas with more
    /// than one annihilator representation, or for speed.
    fn is_annihilator(a: &Self) -> bool {
        <Self as Implements<Op>>::annihilator().is_some_and(|z| a.equal(&z))
    }

    /// Which sides [`Implements::inverse`] is defined for.
    fn inverse_direction() -> Option<Direction> {
        None
    }

    /// Remove `a` from `side` of `c`.
    fn inverse(_side: Side, c: &Self, a: &Self) -> Result<Self, OperationError> {
        <Self as Implements<Op>>::inverse_two_sided(c, a)
    }

    /// The inverse for commutative operations, where the side does
    /// not matter.
    fn inverse_two_sided(_c: &Self, _a: &Self) -> Result<Self, OperationError> {
        Err(OperationError::Unimplemented {
            operation: Op::ID.inverse_name(),
            magma: tag_name::<Self>(),
        })
    }

    /// Which sides [`Implements::invert`] is defined for.
    fn invert_direction() -> Option<Direction> {
        None
    }

    /// The inverse element of `a` on `side`. The left inverse `x`
    /// solves `apply(x, a) == identity`, which removes `a` from the
    /// right of the identity.
    fn invert(side: Side, a: &Self) -> Result<Self, OperationError> {
        match <Self as Implements<Op>>::identity() {
            Some(identity) => <Self as Implements<Op>>::inverse(side.mirror(), &identity, a),
            None => Err(OperationError::Unimplemented {
                operation: Op::ID.invert_name(),
                magma: tag_name::<Self>(),
            }),
        }
    }

    /// The order the operation is defined by, if it is order-driven:
    /// `order(a, b)` is "a is strictly preferred over b", and the
    /// operation returns the preferred operand.
    fn order() -> Option<fn(&Self, &Self) -> bool> {
        None
    }

    /// The native operator form (`*`, `+`), if the type has one.
    fn native() -> Option<fn(&Self, &Self) -> Self> {
        None
    }

    /// The native inverse operator (`/`, `-`) with the argument order
    /// of [`Side::Right`]: `native_inverse(c, b)` removes `b`.
    fn native_inverse() -> Option<fn(&Self, &Self) -> Self> {
        None
    }

    /// Whether this operation distributes over `other` on `side`:
    /// `a * (b + c) == a * b + a * c` on the left,
    /// `(b + c) * a == b * a + c * a` on the right.
    fn distributes_over(_other: OperationId, _side: Side) -> bool {
        false
    }
}

/// A magma with a strict weak order of preference.
///
/// Every `Ordered` type implements [`Choose`]: the operation returns
/// whichever operand the order prefers, and the left operand on a
/// tie. Two values that are mutually not preferred are
/// interchangeable for `choose` even if they are not
/// [`Magma::equal`].
pub trait Ordered: Magma {
    /// Whether `a` is strictly preferred over `b`.
    fn precedes(a: &Self, b: &Self) -> bool;

    /// The preferred of the two values.
    fn choose(a: &Self, b: &Self) -> Self {
        if Self::precedes(b, a) {
            b.clone()
        } else {
            a.clone()
        }
    }

    /// The value every other value is preferred over; the identity of
    /// [`Choose`].
    fn least_preferred() -> Option<Self> {
        None
    }

    /// The value preferred over every other value; the annihilator of
    /// [`Choose`].
    fn most_preferred() -> Option<Self> {
        None
    }
}

impl<M: Ordered> Implements<Choose> for M {
    const MARKERS: Markers = Markers::NONE
        .associative()
        .commutative()
        .idempotent()
        .path_operation();

    fn apply(a: &Self, b: &Self) -> Self {
        M::choose(a, b)
    }

    fn identity() -> Option<Self> {
        M::least_preferred()
    }

    fn annihilator() -> Option<Self> {
        M::most_preferred()
    }

    fn order() -> Option<fn(&Self, &Self) -> bool> {
        Some(M::precedes)
    }
}

// Calls

/// Apply `Op`.
pub fn apply<M: Implements<Op>, Op: Operation>(a: &M, b: &M) -> M {
    <M as Implements<Op>>::apply(a, b)
}

/// `a * b`.
pub fn multiply<M: Implements<Multiply>>(a: &M, b: &M) -> M {
    apply::<M, Multiply>(a, b)
}

/// `a + b`.
pub fn add<M: Implements<Add>>(a: &M, b: &M) -> M {
    apply::<M, Add>(a, b)
}

/// The preferred of `a` and `b`.
pub fn choose<M: Implements<Choose>>(a: &M, b: &M) -> M {
    apply::<M, Choose>(a, b)
}

/// The inverse of `Op`, if it is declared for `side`.
pub fn inverse<M: Implements<Op>, Op: Operation>(
    side: Side,
    c: &M,
    a: &M,
) -> Result<M, OperationError> {
    if !has_inverse::<M, Op>(side.into()) {
        return Err(OperationError::Unimplemented {
            operation: Op::ID.inverse_name(),
            magma: tag_name::<M>(),
        });
    }
    <M as Implements<Op>>::inverse(side, c, a)
}

/// Divide `a` out of `side` of `c`: the inverse of [`multiply`].
pub fn divide<M: Implements<Multiply>>(side: Side, c: &M, a: &M) -> Result<M, OperationError> {
    inverse::<M, Multiply>(side, c, a)
}

/// Subtract `a` from `side` of `c`: the inverse of [`add`].
pub fn subtract<M: Implements<Add>>(side: Side, c: &M, a: &M) -> Result<M, OperationError> {
    inverse::<M, Add>(side, c, a)
}

/// The inverse element of `a` under `Op`, if inversion is declared
/// for `side`.
pub fn invert<M: Implements<Op>, Op: Operation>(side: Side, a: &M) -> Result<M, OperationError> {
    if !has_invert::<M, Op>(side.into()) {
        return Err(OperationError::Unimplemented {
            operation: Op::ID.invert_name(),
            magma: tag_name::<M>(),
        });
    }
    <M as Implements<Op>>::invert(side, a)
}

/// The identity of `Op`.
pub fn identity<M: Implements<Op>, Op: Operation>() -> Option<M> {
    <M as Implements<Op>>::identity()
}

/// The annihilator of `Op`.
pub fn annihilator<M: Implements<Op>, Op: Operation>() -> Option<M> {
    <M as Implements<Op>>::annihilator()
}

/// Whether `a` is an annihilator of `Op`.
pub fn is_annihilator<M: Implements<Op>, Op: Operation>(a: &M) -> bool {
    <M as Implements<Op>>::is_annihilator(a)
}

/// The multiplicative identity, from the dedicated accessor if there
/// is one.
pub fn one<M: Implements<Multiply>>() -> Option<M> {
    M::one().or_else(identity::<M, Multiply>)
}

/// The additive identity, from the dedicated accessor if there is
/// one.
pub fn zero<M: Implements<Add>>() -> Option<M> {
    M::zero().or_else(identity::<M, Add>)
}

/// The dedicated identity accessor for `Op` (`one` for multiply,
/// `zero` for add), if the magma overrides it.
pub fn identity_accessor<M: Magma, Op: Operation>() -> Option<M> {
    match Op::ID {
        OperationId::Multiply => M::one(),
        OperationId::Add => M::zero(),
        OperationId::Choose => None,
    }
}

/// Negation of [`Magma::equal`].
pub fn not_equal<M: Magma>(a: &M, b: &M) -> bool {
    a.not_equal(b)
}

/// [`Magma::approximately_equal`].
pub fn approximately_equal<M: Magma>(a: &M, b: &M, tolerance: f64) -> bool {
    a.approximately_equal(b, tolerance)
}

/// Whether `a` sorts before `b`, if the magma is ordered.
pub fn compare<M: Magma>(a: &M, b: &M) -> Option<bool> {
    M::compare().map(|less| less(a, b))
}

/// The reversal of `a`, if the magma has one.
pub fn reverse<M: Magma>(a: &M) -> Option<M> {
    M::reverse().map(|reverse| reverse(a))
}

/// The textual form of `a`, if the magma prints.
pub fn print<M: Magma>(a: &M) -> Option<String> {
    M::print().map(|print| print(a))
}

// Capability queries

/// Whether `Op` has an identity on `M`.
pub fn has_identity<M: Implements<Op>, Op: Operation>() -> bool {
    identity::<M, Op>().is_some()
}

/// Whether `Op` has an annihilator on `M`.
pub fn has_annihilator<M: Implements<Op>, Op: Operation>() -> bool {
    annihilator::<M, Op>().is_some()
}

/// Whether the inverse of `Op` is defined on every side of
/// `direction`.
pub fn has_inverse<M: Implements<Op>, Op: Operation>(direction: Direction) -> bool {
    <M as Implements<Op>>::inverse_direction().is_some_and(|declared| declared.covers(direction))
}

/// Whether inversion under `Op` is defined on every side of
/// `direction`.
pub fn has_invert<M: Implements<Op>, Op: Operation>(direction: Direction) -> bool {
    <M as Implements<Op>>::invert_direction().is_some_and(|declared| declared.covers(direction))
}

/// Whether `Op` is driven by an order.
pub fn has_order<M: Implements<Op>, Op: Operation>() -> bool {
    <M as Implements<Op>>::order().is_some()
}

/// Whether `Op` has a native operator form.
pub fn has_native<M: Implements<Op>, Op: Operation>() -> bool {
    <M as Implements<Op>>::native().is_some()
}

/// Whether the magma has a strict weak order.
pub fn has_compare<M: Magma>() -> bool {
    M::compare().is_some()
}

/// Whether the magma has a native `==`.
pub fn has_native_equality<M: Magma>() -> bool {
    M::native_equality().is_some()
}

/// Whether the magma has a native `!=`.
pub fn has_native_inequality<M: Magma>() -> bool {
    M::native_inequality().is_some()
}

/// Whether the magma can be reversed.
pub fn has_reverse<M: Magma>() -> bool {
    M::reverse().is_some()
}

/// Whether the magma prints.
pub fn has_print<M: Magma>() -> bool {
    M::print().is_some()
}

/// Whether the magma has a non-member sentinel.
pub fn has_non_member<M: Magma>() -> bool {
    M::non_member().is_some()
}
