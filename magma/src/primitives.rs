/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Primitive magmas: integers, reals, booleans, Max and Min.
//!
//! - `i32`, `i64`: wrapping `*` and `+`, a semiring on both sides;
//!   addition has a two-sided inverse.
//! - `f64`: approximate `*` and `+`; division by zero signals
//!   "undefined"; NaN is not a member.
//! - `bool`: `&&` as multiply and `||` as add, each distributing over
//!   the other.
//! - [`Max<T>`], [`Min<T>`]: [`Ordered`] wrappers whose `choose` is
//!   `max` / `min`.

use std::fmt;
use std::num::Wrapping;

use serde::Deserialize;
use serde::Serialize;

use crate::error::OperationError;
use crate::operation::Add;
use crate::operation::Direction;
use crate::operation::Markers;
use crate::operation::Multiply;
use crate::operation::OperationId;
use crate::operation::Side;
use crate::registry::Implements;
use crate::registry::Magma;
use crate::registry::Ordered;
use crate::tag::Tagged;

// Integers

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {$(
        impl Tagged for $t {
            type Tag = $t;
        }

        impl Magma for $t {
            fn is_member(&self) -> bool {
                true
            }

            fn equal(&self, other: &Self) -> bool {
                self == other
            }

            fn native_equality() -> Option<fn(&Self, &Self) -> bool> {
                Some(<$t as PartialEq>::eq)
            }

            fn native_inequality() -> Option<fn(&Self, &Self) -> bool> {
                Some(<$t as PartialEq>::ne)
            }

            fn compare() -> Option<fn(&Self, &Self) -> bool> {
                Some(<$t as PartialOrd>::lt)
            }

            fn reverse() -> Option<fn(&Self) -> Self> {
                Some(|a: &Self| *a)
            }

            fn print() -> Option<fn(&Self) -> String> {
                Some(<$t as ToString>::to_string)
            }

            fn one() -> Option<Self> {
                Some(1)
            }

            fn zero() -> Option<Self> {
                Some(0)
            }
        }

        impl Implements<Multiply> for $t {
            const MARKERS: Markers = Markers::NONE.associative().commutative();

            fn apply(a: &Self, b: &Self) -> Self {
                a.wrapping_mul(*b)
            }

            fn identity() -> Option<Self> {
                Some(1)
            }

            fn annihilator() -> Option<Self> {
                Some(0)
            }

            fn native() -> Option<fn(&Self, &Self) -> Self> {
                Some(|a: &Self, b: &Self| (Wrapping(*a) * Wrapping(*b)).0)
            }

            fn distributes_over(other: OperationId, _side: Side) -> bool {
                other == OperationId::Add
            }
        }

        impl Implements<Add> for $t {
            const MARKERS: Markers = Markers::NONE.associative().commutative();

            fn apply(a: &Self, b: &Self) -> Self {
                a.wrapping_add(*b)
            }

            fn identity() -> Option<Self> {
                Some(0)
            }

            fn inverse_direction() -> Option<Direction> {
                Some(Direction::Either)
            }

            fn inverse_two_sided(c: &Self, a: &Self) -> Result<Self, OperationError> {
                Ok(c.wrapping_sub(*a))
            }

            fn invert_direction() -> Option<Direction> {
                Some(Direction::Either)
            }

            fn native() -> Option<fn(&Self, &Self) -> Self> {
                Some(|a: &Self, b: &Self| (Wrapping(*a) + Wrapping(*b)).0)
            }

            fn native_inverse() -> Option<fn(&Self, &Self) -> Self> {
                Some(|c: &Self, b: &Self| (Wrapping(*c) - Wrapping(*b)).0)
            }
        }
    )*};
}

impl_integer!(i32, i64);

// Reals

impl Tagged for f64 {
    type Tag = f64;
}

impl Magma for f64 {
    fn is_member(&self) -> bool {
        !self.is_nan()
    }

    fn equal(&self, other: &Self) -> bool {
        self == other
    }

    /// Relative to the larger magnitude, and absolute below 1.
    /// Infinities are only close to themselves.
    fn approximately_equal(&self, other: &Self, tolerance: f64) -> bool {
        if self == other {
            return true;
        }
        if !self.is_finite() || !other.is_finite() {
            return false;
        }
        let scale = self.abs().max(other.abs()).max(1.0);
        (self - other).abs() <= tolerance * scale
    }

    fn native_equality() -> Option<fn(&Self, &Self) -> bool> {
        Some(<f64 as PartialEq>::eq)
    }

    fn native_inequality() -> Option<fn(&Self, &Self) -> bool> {
        Some(<f64 as PartialEq>::ne)
    }

    fn non_member() -> Option<Self> {
        Some(f64::NAN)
    }

    fn compare() -> Option<fn(&Self, &Self) -> bool> {
        Some(<f64 as PartialOrd>::lt)
    }

    fn reverse() -> Option<fn(&Self) -> Self> {
        Some(|a: &Self| *a)
    }

    fn print() -> Option<fn(&Self) -> String> {
        Some(<f64 as ToString>::to_string)
    }

    fn one() -> Option<Self> {
        Some(1.0)
    }

    fn zero() -> Option<Self> {
        Some(0.0)
    }
}

impl Implements<Multiply> for f64 {
    const MARKERS: Markers = Markers::NONE
        .approximate()
        .associative()
        .commutative()
        .signals_undefined();

    fn apply(a: &Self, b: &Self) -> Self {
        a * b
    }

    fn identity() -> Option<Self> {
        Some(1.0)
    }

    fn annihilator() -> Option<Self> {
        Some(0.0)
    }

    fn inverse_direction() -> Option<Direction> {
        Some(Direction::Either)
    }

    fn inverse_two_sided(c: &Self, a: &Self) -> Result<Self, OperationError> {
        if *a == 0.0 {
            return Err(OperationError::InverseOfAnnihilator {
                operation: "divide",
            });
        }
        Ok(c / a)
    }

    fn invert_direction() -> Option<Direction> {
        Some(Direction::Either)
    }

    fn native() -> Option<fn(&Self, &Self) -> Self> {
        Some(|a: &f64, b: &f64| a * b)
    }

    fn native_inverse() -> Option<fn(&Self, &Self) -> Self> {
        Some(|c: &f64, b: &f64| c / b)
    }

    fn distributes_over(other: OperationId, _side: Side) -> bool {
        other == OperationId::Add
    }
}

impl Implements<Add> for f64 {
    const MARKERS: Markers = Markers::NONE.approximate().associative().commutative();

    fn apply(a: &Self, b: &Self) -> Self {
        a + b
    }

    fn identity() -> Option<Self> {
        Some(0.0)
    }

    fn inverse_direction() -> Option<Direction> {
        Some(Direction::Either)
    }

    fn inverse_two_sided(c: &Self, a: &Self) -> Result<Self, OperationError> {
        Ok(c - a)
    }

    fn invert_direction() -> Option<Direction> {
        Some(Direction::Either)
    }

    fn native() -> Option<fn(&Self, &Self) -> Self> {
        Some(|a: &f64, b: &f64| a + b)
    }

    fn native_inverse() -> Option<fn(&Self, &Self) -> Self> {
        Some(|c: &f64, b: &f64| c - b)
    }
}

// Booleans

impl Tagged for bool {
    type Tag = bool;
}

impl Magma for bool {
    fn is_member(&self) -> bool {
        true
    }

    fn equal(&self, other: &Self) -> bool {
        self == other
    }

    fn native_equality() -> Option<fn(&Self, &Self) -> bool> {
        Some(<bool as PartialEq>::eq)
    }

    fn native_inequality() -> Option<fn(&Self, &Self) -> bool> {
        Some(<bool as PartialEq>::ne)
    }

    fn compare() -> Option<fn(&Self, &Self) -> bool> {
        Some(<bool as PartialOrd>::lt)
    }

    fn print() -> Option<fn(&Self) -> String> {
        Some(<bool as ToString>::to_string)
    }

    fn one() -> Option<Self> {
        Some(true)
    }

    fn zero() -> Option<Self> {
        Some(false)
    }
}

impl Implements<Multiply> for bool {
    const MARKERS: Markers = Markers::NONE.associative().commutative().idempotent();

    fn apply(a: &Self, b: &Self) -> Self {
        *a && *b
    }

    fn identity() -> Option<Self> {
        Some(true)
    }

    fn annihilator() -> Option<Self> {
        Some(false)
    }

    fn native() -> Option<fn(&Self, &Self) -> Self> {
        Some(|a: &bool, b: &bool| a & b)
    }

    fn distributes_over(other: OperationId, _side: Side) -> bool {
        other == OperationId::Add
    }
}

impl Implements<Add> for bool {
    const MARKERS: Markers = Markers::NONE.associative().commutative().idempotent();

    fn apply(a: &Self, b: &Self) -> Self {
        *a || *b
    }

    fn identity() -> Option<Self> {
        Some(false)
    }

    fn annihilator() -> Option<Self> {
        Some(true)
    }

    fn native() -> Option<fn(&Self, &Self) -> Self> {
        Some(|a: &bool, b: &bool| a | b)
    }

    fn distributes_over(other: OperationId, _side: Side) -> bool {
        other == OperationId::Multiply
    }
}

// Max<T>: choose = max

/// Newtype wrapper for an `Ord` type whose `choose` is `max`.
///
/// - `choose = max(a, b)`
/// - identity = `T::min_value()`, annihilator = `T::max_value()`
///   (when `T: Bounded`)
///
/// # Example
/// ```
/// use magma::Max;
///
/// assert_eq!(magma::choose(&Max(5), &Max(10)), Max(10));
/// assert_eq!(magma::identity::<Max<u8>, magma::Choose>(), Some(Max(0)));
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize
)]
pub struct Max<T>(pub T);

impl<T: 'static> Tagged for Max<T> {
    type Tag = Max<T>;
}

impl<T: fmt::Display> fmt::Display for Max<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "max({})", self.0)
    }
}

impl<T> Magma for Max<T>
where
    T: Ord + Clone + fmt::Debug + fmt::Display + 'static,
{
    fn is_member(&self) -> bool {
        true
    }

    fn equal(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn native_equality() -> Option<fn(&Self, &Self) -> bool> {
        Some(<Self as PartialEq>::eq)
    }

    fn native_inequality() -> Option<fn(&Self, &Self) -> bool> {
        Some(<Self as PartialEq>::ne)
    }

    fn compare() -> Option<fn(&Self, &Self) -> bool> {
        Some(<Self as PartialOrd>::lt)
    }

    fn print() -> Option<fn(&Self) -> String> {
        Some(<Self as ToString>::to_string)
    }
}

impl<T> Ordered for Max<T>
where
    T: Ord + Clone + fmt::Debug + fmt::Display + num_traits::Bounded + 'static,
{
    fn precedes(a: &Self, b: &Self) -> bool {
        a.0 > b.0
    }

    fn least_preferred() -> Option<Self> {
        Some(Max(num_traits::Bounded::min_value()))
    }

    fn most_preferred() -> Option<Self> {
        Some(Max(num_traits::Bounded::max_value()))
    }
}

impl<T> From<T> for Max<T> {
    fn from(value: T) -> Self {
        Max(value)
    }
}

impl<T: num_traits::Bounded> Default for Max<T> {
    fn default() -> Self {
        Max(num_traits::Bounded::min_value())
    }
}

impl<T> Max<T> {
    /// Get the inner value.
    pub fn get(&self) -> &T {
        &self.0
    }
}

// Min<T>: choose = min

/// Newtype wrapper for an `Ord` type whose `choose` is `min`.
///
/// - `choose = min(a, b)`
/// - identity = `T::max_value()`, annihilator = `T::min_value()`
///   (when `T: Bounded`)
///
/// # Example
/// ```
/// use magma::Min;
///
/// assert_eq!(magma::choose(&Min(5), &Min(10)), Min(5));
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize
)]
pub struct Min<T>(pub T);

impl<T: 'static> Tagged for Min<T> {
    type Tag = Min<T>;
}

impl<T: fmt::Display> fmt::Display for Min<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "min({})", self.0)
    }
}

impl<T> Magma for Min<T>
where
    T: Ord + Clone + fmt::Debug + fmt::Display + 'static,
{
    fn is_member(&self) -> bool {
        true
    }

    fn equal(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn native_equality() -> Option<fn(&Self, &Self) -> bool> {
        Some(<Self as PartialEq>::eq)
    }

    fn native_inequality() -> Option<fn(&Self, &Self) -> bool> {
        Some(<Self as PartialEq>::ne)
    }

    fn compare() -> Option<fn(&Self, &Self) -> bool> {
        Some(<Self as PartialOrd>::lt)
    }

    fn print() -> Option<fn(&Self) -> String> {
        Some(<Self as ToString>::to_string)
    }
}

impl<T> Ordered for Min<T>
where
    T: Ord + Clone + fmt::Debug + fmt::Display + num_traits::Bounded + 'static,
{
    fn precedes(a: &Self, b: &Self) -> bool {
        a.0 < b.0
    }

    fn least_preferred() -> Option<Self> {
        Some(Min(num_traits::Bounded::max_value()))
    }

    fn most_preferred() -> Option<Self> {
        Some(Min(num_traits::Bounded::min_value()))
    }
}

impl<T> From<T> for Min<T> {
    fn from(value: T) -> Self {
        Min(value)
    }
}

impl<T: num_traits::Bounded> Default for Min<T> {
    fn default() -> Self {
        Min(num_traits::Bounded::max_value())
    }
}

impl<T> Min<T> {
    /// Get the inner value.
    pub fn get(&self) -> &T {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::Checker;
    use crate::Choose;
    use crate::DistributivityProperty;
    use crate::OperationProperty;
    use crate::checklist::PropertyState;
    use crate::registry::add;
    use crate::registry::divide;
    use crate::registry::invert;
    use crate::registry::multiply;
    use crate::registry::subtract;
    use crate::strategy::distinct;

    #[test]
    fn integer_arithmetic_wraps() {
        assert_eq!(multiply(&i32::MAX, &2), -2);
        assert_eq!(add(&i64::MAX, &1), i64::MIN);
        assert_eq!(subtract(Side::Left, &5i32, &7), Ok(-2));
        assert_eq!(invert::<i64, Add>(Side::Right, &9), Ok(-9));
    }

    #[test]
    fn integers_have_no_division() {
        let err = divide(Side::Left, &6i64, &3).unwrap_err();
        assert_eq!(err.to_string(), "divide is not implemented for i64");
    }

    #[test]
    fn real_division_by_zero_is_undefined() {
        assert_eq!(divide(Side::Right, &6.0f64, &3.0), Ok(2.0));
        assert!(divide(Side::Right, &6.0f64, &0.0).unwrap_err().is_undefined());
        assert!(invert::<f64, Multiply>(Side::Left, &0.0).unwrap_err().is_undefined());
    }

    #[test]
    fn reals_compare_approximately() {
        assert!(1.0f64.approximately_equal(&(1.0 + 1e-9), 1e-6));
        assert!(!1.0f64.approximately_equal(&1.1, 1e-6));
        assert!(1e9f64.approximately_equal(&(1e9 + 1.0), 1e-6));
        assert!(!f64::NAN.is_member());
    }

    #[test]
    fn real_examples_pass() {
        let report = Checker::default().check_magma_pair::<f64, Multiply, Add>(&[
            -2.5, -1.0, 0.0, 0.5, 1.0, 3.0,
        ]);
        assert!(report.success(), "{report}");
        assert!(
            report
                .multiply
                .is_done(OperationProperty::InverseOfAnnihilator)
        );
    }

    #[test]
    fn booleans_are_a_semiring_both_ways() {
        let report = Checker::default()
            .check_semiring::<bool, Multiply, Add>(Direction::Either, &[false, true]);
        assert!(report.success(), "{report}");
        assert!(
            report
                .add_over_multiply
                .is_done(DistributivityProperty::IdentityAnnihilates)
        );
    }

    #[test]
    fn max_and_min_choose() {
        assert_eq!(crate::choose(&Max(3), &Max(7)), Max(7));
        assert_eq!(crate::choose(&Min(3), &Min(7)), Min(3));
        assert_eq!(Max::<i32>::default(), Max(i32::MIN));
        assert_eq!(Min::<u8>::default(), Min(u8::MAX));
        assert_eq!(*Max::from(4).get(), 4);
    }

    #[test]
    fn max_serde_round_trip() -> anyhow::Result<()> {
        let json = serde_json::to_string(&Max(5u32))?;
        assert_eq!(json, "5");
        assert_eq!(serde_json::from_str::<Min<u32>>("9")?, Min(9));
        Ok(())
    }

    #[test]
    fn ordered_choose_skips_commutativity() {
        let report = Checker::default().check_magma::<Max<u8>, Choose>(&[
            Max(0),
            Max(1),
            Max(200),
            Max(255),
        ]);
        assert!(report.success(), "{report}");
        assert_eq!(
            report.operation.state(OperationProperty::Commutative),
            &PropertyState::Skipped
        );
        assert!(report.operation.is_done(OperationProperty::OrderPreferred));
    }

    proptest! {
        #[test]
        fn integer_semiring_holds_for_random_examples(examples in distinct(any::<i32>(), 6)) {
            let report = Checker::default()
                .check_semiring::<i32, Multiply, Add>(Direction::Either, &examples);
            prop_assert!(report.success(), "{}", report);
        }

        #[test]
        fn min_choose_returns_an_operand(examples in distinct(any::<i64>(), 5)) {
            let examples: Vec<Min<i64>> = examples.into_iter().map(Min).collect();
            let report = Checker::default().check_magma::<Min<i64>, Choose>(&examples);
            prop_assert!(report.success(), "{}", report);
            prop_assert!(report.operation.is_done(OperationProperty::PathOperation));
        }
    }
}
