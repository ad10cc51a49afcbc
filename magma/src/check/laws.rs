/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! The property sets tracked by the checker's checklists.

use crate::checklist::Property;

/// Properties of raw equality over distinguishable examples.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    strum::Display
)]
pub enum EqualityProperty {
    /// `equal(a, a)`.
    Reflexive,
    /// Distinct examples compare unequal.
    DistinctExamples,
    /// `not_equal` is the negation of `equal`.
    NotEqual,
    /// `equal` agrees with the native `==`.
    Native,
}

impl Property for EqualityProperty {
    const CHECKLIST: &'static str = "equality";

    fn description(self) -> &'static str {
        match self {
            EqualityProperty::Reflexive => "equal is reflexive",
            EqualityProperty::DistinctExamples => "distinct examples compare unequal",
            EqualityProperty::NotEqual => "not_equal is the negation of equal",
            EqualityProperty::Native => "equal agrees with the native ==",
        }
    }
}

/// Properties of hashing, including across representations.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    strum::Display
)]
pub enum HashProperty {
    /// Equal values have equal hashes.
    EqualValuesHashEqual,
    /// Conversion to the other representation keeps membership.
    CastPreservesMembership,
    /// Conversion to the other representation keeps equality.
    CastPreservesEquality,
    /// Conversion to the other representation keeps the hash.
    CastPreservesHash,
}

impl Property for HashProperty {
    const CHECKLIST: &'static str = "hash";

    fn description(self) -> &'static str {
        match self {
            HashProperty::EqualValuesHashEqual => "equal values have equal hashes",
            HashProperty::CastPreservesMembership => "conversion preserves membership",
            HashProperty::CastPreservesEquality => "conversion preserves equality",
            HashProperty::CastPreservesHash => "conversion preserves the hash",
        }
    }
}

/// Type-level properties of a magma, independent of any operation.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    strum::Display
)]
pub enum MagmaProperty {
    /// `&M`, `&mut M` and `Box<M>` share `M`'s tag.
    Qualifiers,
    /// Every example is a member.
    Membership,
    /// The non-member sentinel is not a member.
    NonMember,
    /// `equal(a, a)`.
    EqualityReflexive,
    /// `equal` is transitive.
    EqualityTransitive,
    /// `not_equal` is the negation of `equal`.
    NotEqual,
    /// `equal` agrees with the native `==`.
    NativeEquality,
    /// `not_equal` agrees with the native `!=`.
    NativeInequality,
    /// `approximately_equal(a, a)`.
    ApproximateEquality,
    /// `compare` is irreflexive and asymmetric.
    CompareAsymmetric,
    /// `compare` and incomparability are transitive.
    CompareTransitive,
    /// Neither sorting before the other is equality.
    CompareEquality,
    /// `reverse(reverse(a)) == a`.
    ReverseInvolution,
    /// `reverse(a)` is a member.
    ReverseMembership,
    /// `print` agrees with `Display`.
    Print,
}

impl Property for MagmaProperty {
    const CHECKLIST: &'static str = "magma";

    fn description(self) -> &'static str {
        match self {
            MagmaProperty::Qualifiers => "qualified forms share the magma's tag",
            MagmaProperty::Membership => "examples are members of the magma",
            MagmaProperty::NonMember => "the non-member sentinel is not a member",
            MagmaProperty::EqualityReflexive => "equal is reflexive",
            MagmaProperty::EqualityTransitive => "equal is transitive",
            MagmaProperty::NotEqual => "not_equal is the negation of equal",
            MagmaProperty::NativeEquality => "equal agrees with the native ==",
            MagmaProperty::NativeInequality => "not_equal agrees with the native !=",
            MagmaProperty::ApproximateEquality => "approximately_equal is reflexive",
            MagmaProperty::CompareAsymmetric => "compare is irreflexive and asymmetric",
            MagmaProperty::CompareTransitive => "compare is a strict weak order",
            MagmaProperty::CompareEquality => "compare agrees with equal",
            MagmaProperty::ReverseInvolution => "reverse is an involution",
            MagmaProperty::ReverseMembership => "reverse stays in the magma",
            MagmaProperty::Print => "print agrees with Display",
        }
    }
}

/// Properties of one operation on a magma.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    strum::Display
)]
pub enum OperationProperty {
    /// Results are members.
    Closed,
    /// `op(a, a) == a`.
    Idempotent,
    /// `op(identity, a) == a`.
    IdentityLeft,
    /// `op(a, identity) == a`.
    IdentityRight,
    /// `one`/`zero` is exactly the identity.
    IdentityAccessor,
    /// `op(annihilator, a) == annihilator`.
    AnnihilatorLeft,
    /// `op(a, annihilator) == annihilator`.
    AnnihilatorRight,
    /// `is_annihilator(annihilator())`.
    AnnihilatorRecognized,
    /// An operand that does not absorb is not reported as an
    /// annihilator.
    AnnihilatorObserved,
    /// `op(invert(Left, a), a) == identity`.
    InvertLeft,
    /// `op(a, invert(Right, a)) == identity`.
    InvertRight,
    /// `inverse(Left, op(a, b), a) == b`.
    InverseLeft,
    /// `inverse(Right, op(a, b), b) == a`.
    InverseRight,
    /// Undoing an annihilator signals "undefined".
    InverseOfAnnihilator,
    /// Agrees with the native operator.
    Native,
    /// The inverse agrees with the native inverse operator.
    NativeInverse,
    /// `op(a, b)` is `a` or `b`.
    PathOperation,
    /// `op(a, b) == op(b, a)`.
    Commutative,
    /// `reverse(op(reverse(b), reverse(a))) == op(a, b)`.
    Reverse,
    /// `op(op(a, b), c) == op(a, op(b, c))`.
    Associative,
    /// The operation's order is irreflexive and asymmetric.
    OrderAsymmetric,
    /// The operation's order is a strict weak order.
    OrderTransitive,
    /// The operation returns the operand its order prefers.
    OrderPreferred,
}

impl Property for OperationProperty {
    const CHECKLIST: &'static str = "operation";

    fn description(self) -> &'static str {
        match self {
            OperationProperty::Closed => "results stay in the magma",
            OperationProperty::Idempotent => "idempotent",
            OperationProperty::IdentityLeft => "identity is a left identity",
            OperationProperty::IdentityRight => "identity is a right identity",
            OperationProperty::IdentityAccessor => "one/zero is exactly the identity",
            OperationProperty::AnnihilatorLeft => "annihilator absorbs from the left",
            OperationProperty::AnnihilatorRight => "annihilator absorbs from the right",
            OperationProperty::AnnihilatorRecognized => "is_annihilator recognizes the annihilator",
            OperationProperty::AnnihilatorObserved => {
                "operands that do not absorb are not annihilators"
            }
            OperationProperty::InvertLeft => "left inversion yields the identity",
            OperationProperty::InvertRight => "right inversion yields the identity",
            OperationProperty::InverseLeft => "left inverse recovers the right operand",
            OperationProperty::InverseRight => "right inverse recovers the left operand",
            OperationProperty::InverseOfAnnihilator => {
                "undoing an annihilator signals undefined"
            }
            OperationProperty::Native => "agrees with the native operator",
            OperationProperty::NativeInverse => "inverse agrees with the native operator",
            OperationProperty::PathOperation => "result is one of the operands",
            OperationProperty::Commutative => "commutative",
            OperationProperty::Reverse => "reverse is an anti-homomorphism",
            OperationProperty::Associative => "associative",
            OperationProperty::OrderAsymmetric => "order is irreflexive and asymmetric",
            OperationProperty::OrderTransitive => "order is a strict weak order",
            OperationProperty::OrderPreferred => "result is the preferred operand",
        }
    }
}

/// Properties of one operation (outer) distributing over another
/// (inner).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    strum::Display
)]
pub enum DistributivityProperty {
    /// The inner identity annihilates the outer operation.
    IdentityAnnihilates,
    /// `outer(a, inner(b, c)) == inner(outer(a, b), outer(a, c))`.
    DistributiveLeft,
    /// `outer(inner(b, c), a) == inner(outer(b, a), outer(c, a))`.
    DistributiveRight,
    /// The pair claims to be a semiring.
    Semiring,
}

impl Property for DistributivityProperty {
    const CHECKLIST: &'static str = "distributivity";

    fn description(self) -> &'static str {
        match self {
            DistributivityProperty::IdentityAnnihilates => {
                "identity of the inner operation annihilates the outer"
            }
            DistributivityProperty::DistributiveLeft => "left distributive",
            DistributivityProperty::DistributiveRight => "right distributive",
            DistributivityProperty::Semiring => "semiring",
        }
    }
}
