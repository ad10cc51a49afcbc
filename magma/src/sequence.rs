/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Symbol sequences.
//!
//! [`Sequence<S>`] is a finite sequence of symbols, or a
//! distinguished annihilator. Multiplication is concatenation, with
//! the empty sequence as identity and the annihilator absorbing;
//! division strips a prefix (left) or suffix (right). Addition is the
//! longest common prefix, with the annihilator as identity and the
//! empty sequence absorbing. Concatenation distributes over longest
//! common prefix from the left only, so sequences form a left
//! semiring.
//!
//! [`Symbol<S>`] is a narrower representation of a one-symbol
//! sequence. It shares the sequence's tag, converts into it, and
//! hashes like it.
//!
//! ```
//! use magma::Sequence;
//! use magma::Side;
//!
//! let ab = magma::multiply(&Sequence::from("a"), &Sequence::from("b"));
//! assert_eq!(ab, Sequence::from("ab"));
//! assert_eq!(magma::divide(Side::Left, &ab, &Sequence::from("a")), Ok(Sequence::from("b")));
//! assert_eq!(magma::add(&Sequence::from("abc"), &Sequence::from("abd")), Sequence::from("ab"));
//! ```

use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;

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
use crate::tag::Tagged;

/// A sequence of symbols, or the annihilator of concatenation.
///
/// Sequences sort lexicographically, with the annihilator after every
/// symbol sequence.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sequence<S> {
    /// A finite sequence of symbols.
    Symbols(Vec<S>),
    /// The absorbing element of concatenation.
    Annihilator,
}

/// A single symbol, a narrower representation of [`Sequence`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol<S>(pub S);

impl<S> Sequence<S> {
    /// The empty sequence.
    pub fn empty() -> Self {
        Sequence::Symbols(Vec::new())
    }

    /// The symbols, unless this is the annihilator.
    pub fn symbols(&self) -> Option<&[S]> {
        match self {
            Sequence::Symbols(symbols) => Some(symbols),
            Sequence::Annihilator => None,
        }
    }

    /// Whether this is the annihilator.
    pub fn is_annihilator(&self) -> bool {
        matches!(self, Sequence::Annihilator)
    }
}

impl From<&str> for Sequence<char> {
    fn from(s: &str) -> Self {
        Sequence::Symbols(s.chars().collect())
    }
}

impl<S> From<Vec<S>> for Sequence<S> {
    fn from(symbols: Vec<S>) -> Self {
        Sequence::Symbols(symbols)
    }
}

impl<S> From<Symbol<S>> for Sequence<S> {
    fn from(symbol: Symbol<S>) -> Self {
        Sequence::Symbols(vec![symbol.0])
    }
}

// Hashing must agree between a symbol and its one-symbol sequence.

impl<S: Hash> Hash for Sequence<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Sequence::Symbols(symbols) => {
                0u8.hash(state);
                symbols.as_slice().hash(state);
            }
            Sequence::Annihilator => 1u8.hash(state),
        }
    }
}

impl<S: Hash> Hash for Symbol<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        0u8.hash(state);
        std::slice::from_ref(&self.0).hash(state);
    }
}

impl<S: fmt::Display> fmt::Display for Sequence<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sequence::Symbols(symbols) => {
                write!(f, "\"")?;
                for symbol in symbols {
                    write!(f, "{}", symbol)?;
                }
                write!(f, "\"")
            }
            Sequence::Annihilator => write!(f, "annihilator"),
        }
    }
}

impl<S: fmt::Display> fmt::Display for Symbol<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0)
    }
}

impl<S: 'static> Tagged for Sequence<S> {
    type Tag = Sequence<S>;
}

impl<S: 'static> Tagged for Symbol<S> {
    type Tag = Sequence<S>;
}

impl<S> Magma for Sequence<S>
where
    S: Ord + Clone + fmt::Debug + fmt::Display + 'static,
{
    fn is_member(&self) -> bool {
        true
    }

    fn equal(&self, other: &Self) -> bool {
        self == other
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

    fn one() -> Option<Self> {
        Some(Sequence::empty())
    }

    fn zero() -> Option<Self> {
        Some(Sequence::Annihilator)
    }
}

impl<S> Magma for Symbol<S>
where
    S: Ord + Clone + fmt::Debug + fmt::Display + 'static,
{
    fn is_member(&self) -> bool {
        true
    }

    fn equal(&self, other: &Self) -> bool {
        self == other
    }

    fn native_equality() -> Option<fn(&Self, &Self) -> bool> {
        Some(<Self as PartialEq>::eq)
    }

    fn native_inequality() -> Option<fn(&Self, &Self) -> bool> {
        Some(<Self as PartialEq>::ne)
    }
}

impl<S> Implements<Multiply> for Sequence<S>
where
    S: Ord + Clone + fmt::Debug + fmt::Display + 'static,
{
    const MARKERS: Markers = Markers::NONE.associative().signals_undefined();

    fn apply(a: &Self, b: &Self) -> Self {
        match (a, b) {
            (Sequence::Symbols(a), Sequence::Symbols(b)) => {
                Sequence::Symbols(a.iter().chain(b).cloned().collect())
            }
            _ => Sequence::Annihilator,
        }
    }

    fn identity() -> Option<Self> {
        Some(Sequence::empty())
    }

    fn annihilator() -> Option<Self> {
        Some(Sequence::Annihilator)
    }

    fn is_annihilator(a: &Self) -> bool {
        a.is_annihilator()
    }

    fn inverse_direction() -> Option<Direction> {
        Some(Direction::Either)
    }

    fn inverse(side: Side, c: &Self, a: &Self) -> Result<Self, OperationError> {
        let (c, a) = match (c, a) {
            (_, Sequence::Annihilator) => {
                return Err(OperationError::InverseOfAnnihilator {
                    operation: "divide",
                });
            }
            (Sequence::Annihilator, _) => return Ok(Sequence::Annihilator),
            (Sequence::Symbols(c), Sequence::Symbols(a)) => (c, a),
        };
        let rest = match side {
            Side::Left => c.strip_prefix(a.as_slice()),
            Side::Right => c.strip_suffix(a.as_slice()),
        };
        match rest {
            Some(rest) => Ok(Sequence::Symbols(rest.to_vec())),
            None => Err(OperationError::Undefined {
                operation: "divide",
                operands: format!(
                    "({}, {}, {})",
                    side,
                    Sequence::Symbols(c.clone()),
                    Sequence::Symbols(a.clone())
                ),
            }),
        }
    }

    fn distributes_over(other: OperationId, side: Side) -> bool {
        other == OperationId::Add && side == Side::Left
    }
}

impl<S> Implements<Add> for Sequence<S>
where
    S: Ord + Clone + fmt::Debug + fmt::Display + 'static,
{
    const MARKERS: Markers = Markers::NONE.associative().commutative().idempotent();

    fn apply(a: &Self, b: &Self) -> Self {
        match (a, b) {
            (Sequence::Annihilator, other) | (other, Sequence::Annihilator) => other.clone(),
            (Sequence::Symbols(a), Sequence::Symbols(b)) => Sequence::Symbols(
                a.iter()
                    .zip(b)
                    .take_while(|(x, y)| x == y)
                    .map(|(x, _)| x.clone())
                    .collect(),
            ),
        }
    }

    fn identity() -> Option<Self> {
        Some(Sequence::Annihilator)
    }

    fn annihilator() -> Option<Self> {
        Some(Sequence::empty())
    }
}
