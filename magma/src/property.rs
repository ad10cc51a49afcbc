/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Property predicates.
//!
//! Facts about an operation restricted to a magma, read from the
//! implementation's [`Markers`](crate::Markers) or derived:
//!
//! - a path operation is idempotent;
//! - a monoid is an associative operation with an identity;
//! - distributivity on [`Direction::Either`] is distributivity on
//!   both sides;
//! - a semiring has a commutative additive monoid, a multiplicative
//!   monoid, and multiplication distributing over addition.
//!
//! The semiring predicate cannot decide that the additive identity
//! annihilates multiplication; that depends on values, and the
//! checker confirms it at run time.
//!
//! ```
//! use magma::Add;
//! use magma::Direction;
//! use magma::Multiply;
//! use magma::property;
//!
//! assert!(property::is_semiring::<i64, Multiply, Add>(Direction::Either));
//! assert!(property::is_monoid::<i64, Add>());
//! assert!(!property::is_idempotent::<i64, Add>());
//! ```

use crate::operation::Direction;
use crate::operation::Operation;
use crate::registry::Implements;
use crate::registry::has_identity;
use crate::registry::has_order;
use crate::tag::Tagged;
use crate::tag::same_magma;

/// Whether any result of `Op` is only approximately exact.
pub fn is_approximate<M: Implements<Op>, Op: Operation>() -> bool {
    <M as Implements<Op>>::MARKERS.approximate
}

/// Whether `Op` is associative on `M`.
pub fn is_associative<M: Implements<Op>, Op: Operation>() -> bool {
    <M as Implements<Op>>::MARKERS.associative
}

/// Whether `Op` is commutative on `M`.
pub fn is_commutative<M: Implements<Op>, Op: Operation>() -> bool {
    <M as Implements<Op>>::MARKERS.commutative
}

/// Whether `Op` always returns one of its operands.
pub fn is_path_operation<M: Implements<Op>, Op: Operation>() -> bool {
    <M as Implements<Op>>::MARKERS.path_operation
}

/// Whether `Op` is idempotent on `M`. Path operations are.
pub fn is_idempotent<M: Implements<Op>, Op: Operation>() -> bool {
    <M as Implements<Op>>::MARKERS.idempotent || is_path_operation::<M, Op>()
}

/// Whether undoing an annihilator under `Op` signals "undefined".
pub fn signals_undefined<M: Implements<Op>, Op: Operation>() -> bool {
    <M as Implements<Op>>::MARKERS.signals_undefined
}

/// Whether `Op` is defined through an order.
pub fn is_order_driven<M: Implements<Op>, Op: Operation>() -> bool {
    has_order::<M, Op>()
}

/// Whether `Op` forms a monoid on `M`.
pub fn is_monoid<M: Implements<Op>, Op: Operation>() -> bool {
    is_associative::<M, Op>() && has_identity::<M, Op>()
}

/// Whether `Op` forms a commutative monoid on `M`.
pub fn is_commutative_monoid<M: Implements<Op>, Op: Operation>() -> bool {
    is_monoid::<M, Op>() && is_commutative::<M, Op>()
}

/// Whether `Mul` distributes over `Add` on every side of `direction`.
pub fn is_distributive<M, Mul, Add>(direction: Direction) -> bool
where
    M: Implements<Mul> + Implements<Add>,
    Mul: Operation,
    Add: Operation,
{
    direction
        .sides()
        .iter()
        .all(|side| <M as Implements<Mul>>::distributes_over(Add::ID, *side))
}

/// Whether `(M, Mul, Add)` is a semiring in `direction`, as far as
/// types can tell.
pub fn is_semiring<M, Mul, Add>(direction: Direction) -> bool
where
    M: Implements<Mul> + Implements<Add>,
    Mul: Operation,
    Add: Operation,
{
    is_commutative_monoid::<M, Add>()
        && is_monoid::<M, Mul>()
        && is_distributive::<M, Mul, Add>(direction)
}

/// Evaluate `predicate` for operands of types `A` and `B` combined in
/// magma `M`. When the operand types do not both belong to `M`, the
/// predicate does not hold; this is not an error.
///
/// ```
/// use magma::Multiply;
/// use magma::property;
///
/// let associative = property::is_associative::<i64, Multiply>;
/// assert!(property::holds_over::<i64, &i64, Box<i64>>(associative));
/// assert!(!property::holds_over::<i64, i64, i32>(associative));
/// ```
pub fn holds_over<M, A, B>(predicate: fn() -> bool) -> bool
where
    M: Tagged,
    A: Tagged + ?Sized,
    B: Tagged + ?Sized,
{
    same_magma::<M, A>() && same_magma::<M, B>() && predicate()
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;
    use crate::Add;
    use crate::Markers;
    use crate::Multiply;
    use crate::OperationId;
    use crate::Side;
    use crate::registry::Magma;

    // Tropical numbers: `Multiply` is `+`, `Add` is `min`. Left
    // distributive only, to exercise the direction logic.
    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Tropical(i32);

    impl fmt::Display for Tropical {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl Tagged for Tropical {
        type Tag = Tropical;
    }

    impl Magma for Tropical {
        fn is_member(&self) -> bool {
            true
        }

        fn equal(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl Implements<Multiply> for Tropical {
        const MARKERS: Markers = Markers::NONE.associative().commutative();

        fn apply(a: &Self, b: &Self) -> Self {
            Tropical(a.0 + b.0)
        }

        fn identity() -> Option<Self> {
            Some(Tropical(0))
        }

        fn distributes_over(other: OperationId, side: Side) -> bool {
            other == OperationId::Add && side == Side::Left
        }
    }

    impl Implements<Add> for Tropical {
        const MARKERS: Markers = Markers::NONE.commutative().associative().path_operation();

        fn apply(a: &Self, b: &Self) -> Self {
            Tropical(a.0.min(b.0))
        }
    }

    #[test]
    fn path_operation_implies_idempotent() {
        assert!(is_path_operation::<Tropical, Add>());
        assert!(is_idempotent::<Tropical, Add>());
        assert!(!is_idempotent::<Tropical, Multiply>());
    }

    #[test]
    fn monoid_needs_identity() {
        assert!(is_monoid::<Tropical, Multiply>());
        assert!(!is_monoid::<Tropical, Add>());
        assert!(is_commutative_monoid::<Tropical, Multiply>());
    }

    #[test]
    fn either_distributivity_needs_both_sides() {
        assert!(is_distributive::<Tropical, Multiply, Add>(Direction::Left));
        assert!(!is_distributive::<Tropical, Multiply, Add>(Direction::Right));
        assert!(!is_distributive::<Tropical, Multiply, Add>(Direction::Either));
        assert!(!is_distributive::<Tropical, Add, Multiply>(Direction::Left));
    }

    #[test]
    fn semiring_needs_additive_identity() {
        // `min` over i32 has no identity here, so this is not a
        // semiring even though it distributes.
        assert!(!is_semiring::<Tropical, Multiply, Add>(Direction::Left));
    }

    #[test]
    fn predicates_over_mixed_tags_are_false() {
        let associative = is_associative::<Tropical, Multiply>;
        assert!(holds_over::<Tropical, Tropical, &Tropical>(associative));
        assert!(!holds_over::<Tropical, Tropical, i64>(associative));
        assert!(!holds_over::<Tropical, Tropical, Tropical>(|| false));
    }
}
