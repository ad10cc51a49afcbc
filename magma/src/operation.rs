/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Operation identities, markers and directions.
//!
//! An operation is a zero-sized marker type ([`Multiply`], [`Add`],
//! [`Choose`]) naming a binary capability. What a given magma does
//! for that operation lives in its
//! [`Implements`](crate::Implements) impl, together with the
//! [`Markers`] that declare which algebraic laws the implementation
//! claims.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Identity of a binary operation, usable as a value.
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
    Deserialize,
    strum::EnumIter,
    strum::Display
)]
#[strum(serialize_all = "snake_case")]
pub enum OperationId {
    /// Multiplication ("times").
    Multiply,
    /// Addition ("plus").
    Add,
    /// Choosing the preferred of two values under an order.
    Choose,
}

impl OperationId {
    /// The operation's name.
    pub const fn name(self) -> &'static str {
        match self {
            OperationId::Multiply => "multiply",
            OperationId::Add => "add",
            OperationId::Choose => "choose",
        }
    }

    /// The name of the operation's inverse.
    pub const fn inverse_name(self) -> &'static str {
        match self {
            OperationId::Multiply => "divide",
            OperationId::Add => "subtract",
            OperationId::Choose => "inverse of choose",
        }
    }

    /// The name of the unary inversion derived from the inverse.
    pub const fn invert_name(self) -> &'static str {
        match self {
            OperationId::Multiply => "reciprocal",
            OperationId::Add => "negate",
            OperationId::Choose => "invert of choose",
        }
    }

    /// The name of the convenience accessor for the identity, if the
    /// operation has one.
    pub const fn identity_accessor(self) -> Option<&'static str> {
        match self {
            OperationId::Multiply => Some("one"),
            OperationId::Add => Some("zero"),
            OperationId::Choose => None,
        }
    }
}

/// A binary operation, as a type.
///
/// Operations carry no data; they exist to select an
/// [`Implements`](crate::Implements) impl.
pub trait Operation: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// The operation's identity.
    const ID: OperationId;
}

/// Multiplication.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Multiply;

impl Operation for Multiply {
    const ID: OperationId = OperationId::Multiply;
}

/// Addition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Add;

impl Operation for Add {
    const ID: OperationId = OperationId::Add;
}

/// Choose the preferred of two values under a strict weak order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Choose;

impl Operation for Choose {
    const ID: OperationId = OperationId::Choose;
}

/// Laws an operation implementation claims.
///
/// Markers are declarations, not proofs: the checker exercises each
/// claimed law on example values.
///
/// ```
/// use magma::Markers;
///
/// const CONCATENATION: Markers = Markers::NONE.associative().signals_undefined();
/// assert!(CONCATENATION.associative);
/// assert!(!CONCATENATION.commutative);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Markers {
    /// Results are only approximately equal to their exact value;
    /// laws are compared with a tolerance.
    pub approximate: bool,
    /// `op(op(a, b), c) == op(a, op(b, c))`.
    pub associative: bool,
    /// `op(a, b) == op(b, a)`.
    pub commutative: bool,
    /// `op(a, a) == a`.
    pub idempotent: bool,
    /// `op(a, b)` is always `a` or `b`.
    pub path_operation: bool,
    /// The inverse and inversion return an "undefined" error rather
    /// than a value when asked to undo an annihilator.
    pub signals_undefined: bool,
}

impl Markers {
    /// No markers.
    pub const NONE: Markers = Markers {
        approximate: false,
        associative: false,
        commutative: false,
        idempotent: false,
        path_operation: false,
        signals_undefined: false,
    };

    /// Add the approximate marker.
    pub const fn approximate(self) -> Self {
        Markers {
            approximate: true,
            ..self
        }
    }

    /// Add the associative marker.
    pub const fn associative(self) -> Self {
        Markers {
            associative: true,
            ..self
        }
    }

    /// Add the commutative marker.
    pub const fn commutative(self) -> Self {
        Markers {
            commutative: true,
            ..self
        }
    }

    /// Add the idempotent marker.
    pub const fn idempotent(self) -> Self {
        Markers {
            idempotent: true,
            ..self
        }
    }

    /// Add the path-operation marker.
    pub const fn path_operation(self) -> Self {
        Markers {
            path_operation: true,
            ..self
        }
    }

    /// Add the signals-undefined marker.
    pub const fn signals_undefined(self) -> Self {
        Markers {
            signals_undefined: true,
            ..self
        }
    }

    /// Markers of a componentwise composition: a law holds for the
    /// composition when it holds for both components, and the
    /// composition is approximate when either component is.
    pub const fn both(self, other: Markers) -> Self {
        Markers {
            approximate: self.approximate || other.approximate,
            associative: self.associative && other.associative,
            commutative: self.commutative && other.commutative,
            idempotent: self.idempotent && other.idempotent,
            path_operation: false,
            signals_undefined: self.signals_undefined && other.signals_undefined,
        }
    }
}

/// Which side of an asymmetric operation an inverse applies to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display
)]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    /// The operand on the left.
    Left,
    /// The operand on the right.
    Right,
}

impl Side {
    /// The other side.
    pub const fn mirror(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A direction: one side, or both.
///
/// `Either` expands into checks of both sides.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display
)]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    /// Left only.
    Left,
    /// Right only.
    Right,
    /// Both sides.
    Either,
}

impl Direction {
    /// The sides this direction covers.
    pub fn sides(self) -> &'static [Side] {
        match self {
            Direction::Left => &[Side::Left],
            Direction::Right => &[Side::Right],
            Direction::Either => &[Side::Left, Side::Right],
        }
    }

    /// Whether this direction covers `side`.
    pub fn includes(self, side: Side) -> bool {
        self.sides().contains(&side)
    }

    /// Whether this direction covers every side of `other`.
    pub fn covers(self, other: Direction) -> bool {
        other.sides().iter().all(|side| self.includes(*side))
    }
}

impl From<Side> for Direction {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => Direction::Left,
            Side::Right => Direction::Right,
        }
    }
}
