/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Non-negative reals in the log domain.
//!
//! A [`LogFloat`] stores `ln(x)` for `x >= 0`, so products of tiny
//! probabilities do not underflow. Multiplication adds exponents,
//! division subtracts them, and addition is log-sum-exp. Zero is
//! `ln(0) = -inf`: the identity of addition and the annihilator of
//! multiplication. Both operations are approximate.

use std::fmt;

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

/// A non-negative real stored as its natural logarithm.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct LogFloat {
    log: f64,
}

impl LogFloat {
    /// Zero.
    pub const ZERO: LogFloat = LogFloat {
        log: f64::NEG_INFINITY,
    };

    /// One.
    pub const ONE: LogFloat = LogFloat { log: 0.0 };

    /// The log-domain form of `value`. Negative values are not
    /// members.
    pub fn new(value: f64) -> Self {
        Self { log: value.ln() }
    }

    /// Directly from the logarithm.
    pub fn from_log(log: f64) -> Self {
        Self { log }
    }

    /// The logarithm.
    pub fn log(&self) -> f64 {
        self.log
    }

    /// The linear value.
    pub fn value(&self) -> f64 {
        self.log.exp()
    }
}

impl fmt::Display for LogFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exp({})", self.log)
    }
}

impl Tagged for LogFloat {
    type Tag = LogFloat;
}

impl Magma for LogFloat {
    /// Finite logarithms and `-inf` (zero). NaN and `+inf` are not
    /// members.
    fn is_member(&self) -> bool {
        !self.log.is_nan() && self.log != f64::INFINITY
    }

    fn equal(&self, other: &Self) -> bool {
        self.log == other.log
    }

    /// Compares logarithms, which bounds the relative error of the
    /// linear values.
    fn approximately_equal(&self, other: &Self, tolerance: f64) -> bool {
        self.log.approximately_equal(&other.log, tolerance)
    }

    fn non_member() -> Option<Self> {
        Some(LogFloat::from_log(f64::NAN))
    }

    fn compare() -> Option<fn(&Self, &Self) -> bool> {
        Some(|a: &LogFloat, b: &LogFloat| a.log < b.log)
    }

    fn print() -> Option<fn(&Self) -> String> {
        Some(<LogFloat as ToString>::to_string)
    }

    fn one() -> Option<Self> {
        Some(LogFloat::ONE)
    }

    fn zero() -> Option<Self> {
        Some(LogFloat::ZERO)
    }
}

impl Implements<Multiply> for LogFloat {
    const MARKERS: Markers = Markers::NONE
        .approximate()
        .associative()
        .commutative()
        .signals_undefined();

    fn apply(a: &Self, b: &Self) -> Self {
        LogFloat::from_log(a.log + b.log)
    }

    fn identity() -> Option<Self> {
        Some(LogFloat::ONE)
    }

    fn annihilator() -> Option<Self> {
        Some(LogFloat::ZERO)
    }

    fn inverse_direction() -> Option<Direction> {
        Some(Direction::Either)
    }

    fn inverse_two_sided(c: &Self, a: &Self) -> Result<Self, OperationError> {
        if a.log == f64::NEG_INFINITY {
            return Err(OperationError::InverseOfAnnihilator {
                operation: "divide",
            });
        }
        Ok(LogFloat::from_log(c.log - a.log))
    }

    fn invert_direction() -> Option<Direction> {
        Some(Direction::Either)
    }

    fn distributes_over(other: OperationId, _side: Side) -> bool {
        other == OperationId::Add
    }
}

impl Implements<Add> for LogFloat {
    const MARKERS: Markers = Markers::NONE.approximate().associative().commutative();

    fn apply(a: &Self, b: &Self) -> Self {
        if a.log == f64::NEG_INFINITY {
            return *b;
        }
        if b.log == f64::NEG_INFINITY {
            return *a;
        }
        let (hi, lo) = if a.log >= b.log {
            (a.log, b.log)
        } else {
            (b.log, a.log)
        };
        LogFloat::from_log(hi + (lo - hi).exp().ln_1p())
    }

    fn identity() -> Option<Self> {
        Some(LogFloat::ZERO)
    }
}
