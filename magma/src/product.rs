/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Cartesian products of magmas.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::operation::Add;
use crate::operation::Markers;
use crate::operation::Multiply;
use crate::operation::OperationId;
use crate::operation::Side;
use crate::registry::Implements;
use crate::registry::Magma;
use crate::tag::Tagged;

/// The Cartesian product of two magmas, with componentwise
/// operations.
///
/// A law holds for the product when it holds for both components;
/// the identity and annihilator exist when both components have
/// them. Inverses are not composed: an element with one absorbing
/// component has no inverse, but is not an annihilator of the
/// product either.
///
/// ```
/// use magma::Product;
///
/// let p = magma::multiply(&Product(3i64, true), &Product(4i64, false));
/// assert_eq!(p, Product(12, false));
/// assert_eq!(magma::one::<Product<i64, bool>>(), Some(Product(1, true)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product<A, B>(pub A, pub B);

impl<A: Tagged, B: Tagged> Tagged for Product<A, B> {
    type Tag = (A::Tag, B::Tag);
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Product<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl<A: Magma, B: Magma> Magma for Product<A, B> {
    fn is_member(&self) -> bool {
        self.0.is_member() && self.1.is_member()
    }

    fn equal(&self, other: &Self) -> bool {
        self.0.equal(&other.0) && self.1.equal(&other.1)
    }

    fn approximately_equal(&self, other: &Self, tolerance: f64) -> bool {
        self.0.approximately_equal(&other.0, tolerance)
            && self.1.approximately_equal(&other.1, tolerance)
    }

    fn one() -> Option<Self> {
        Some(Product(A::one()?, B::one()?))
    }

    fn zero() -> Option<Self> {
        Some(Product(A::zero()?, B::zero()?))
    }
}

macro_rules! impl_product {
    ($($op:ty),* $(,)?) => {$(
        impl<A, B> Implements<$op> for Product<A, B>
        where
            A: Implements<$op>,
            B: Implements<$op>,
        {
            const MARKERS: Markers =
                <A as Implements<$op>>::MARKERS.both(<B as Implements<$op>>::MARKERS);

            fn apply(a: &Self, b: &Self) -> Self {
                Product(
                    <A as Implements<$op>>::apply(&a.0, &b.0),
                    <B as Implements<$op>>::apply(&a.1, &b.1),
                )
            }

            fn identity() -> Option<Self> {
                Some(Product(
                    <A as Implements<$op>>::identity()?,
                    <B as Implements<$op>>::identity()?,
                ))
            }

            fn annihilator() -> Option<Self> {
                Some(Product(
                    <A as Implements<$op>>::annihilator()?,
                    <B as Implements<$op>>::annihilator()?,
                ))
            }

            fn is_annihilator(a: &Self) -> bool {
                <A as Implements<$op>>::is_annihilator(&a.0)
                    && <B as Implements<$op>>::is_annihilator(&a.1)
            }

            fn distributes_over(other: OperationId, side: Side) -> bool {
                <A as Implements<$op>>::distributes_over(other, side)
                    && <B as Implements<$op>>::distributes_over(other, side)
            }
        }
    )*};
}

impl_product!(Multiply, Add);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Checker;
    use crate::DistributivityProperty;
    use crate::OperationProperty;
    use crate::checklist::PropertyState;
    use crate::operation::Direction;
    use crate::property;
    use crate::tag::same_magma;

    #[test]
    fn markers_are_conjunctions() {
        assert!(property::is_idempotent::<Product<bool, bool>, Multiply>());
        assert!(!property::is_idempotent::<Product<i64, bool>, Multiply>());
        assert!(property::is_approximate::<Product<i64, f64>, Add>());
        assert!(!property::signals_undefined::<Product<i64, f64>, Multiply>());
    }

    #[test]
    fn tags_pair_component_tags() {
        assert!(same_magma::<Product<i64, bool>, &Product<i64, bool>>());
        assert!(!same_magma::<Product<i64, bool>, Product<bool, i64>>());
    }

    #[test]
    fn annihilator_needs_both_components() {
        assert_eq!(
            crate::annihilator::<Product<i64, bool>, Multiply>(),
            Some(Product(0, false))
        );
        assert!(!crate::is_annihilator::<Product<i64, bool>, Multiply>(&Product(0, true)));
        assert_eq!(crate::annihilator::<Product<i64, bool>, Add>(), None);
    }

    #[test]
    fn product_semiring() {
        let examples = [
            Product(-1i64, false),
            Product(0, false),
            Product(0, true),
            Product(2, true),
        ];
        let report = Checker::default().check_semiring::<Product<i64, bool>, Multiply, Add>(
            Direction::Either,
            &examples,
        );
        assert!(report.success(), "{report}");
        assert_eq!(
            report.add.state(OperationProperty::InverseLeft),
            &PropertyState::NotApplicable
        );
        assert!(
            report
                .multiply_over_add
                .is_done(DistributivityProperty::IdentityAnnihilates)
        );
    }
}
