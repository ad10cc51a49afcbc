/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Errors produced by registry operations.

/// Failure of a partial operation (an inverse or an inversion).
///
/// The "undefined" kinds ([`OperationError::InverseOfAnnihilator`] and
/// [`OperationError::Undefined`]) are part of an operation's contract:
/// an implementation carrying the signals-undefined marker must
/// return one of them when asked to undo an annihilator. The checker
/// branches on [`OperationError::is_undefined`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OperationError {
    /// The operand to be removed is an annihilator, so no inverse
    /// exists. Division by zero is the real-number instance.
    #[error("{operation}: inverse of an annihilator is undefined")]
    InverseOfAnnihilator {
        /// Name of the inverse operation.
        operation: &'static str,
    },

    /// The operation is undefined for the given operands.
    #[error("{operation} is undefined for {operands}")]
    Undefined {
        /// Name of the operation.
        operation: &'static str,
        /// The operands, formatted for diagnostics.
        operands: String,
    },

    /// The magma does not implement the requested operation.
    #[error("{operation} is not implemented for {magma}")]
    Unimplemented {
        /// Name of the operation.
        operation: &'static str,
        /// Name of the magma's tag.
        magma: &'static str,
    },
}

impl OperationError {
    /// Whether this error is the distinguished "undefined" signal.
    pub fn is_undefined(&self) -> bool {
        matches!(
            self,
            OperationError::InverseOfAnnihilator { .. } | OperationError::Undefined { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_kinds() {
        assert!(OperationError::InverseOfAnnihilator { operation: "divide" }.is_undefined());
        assert!(
            OperationError::Undefined {
                operation: "subtract",
                operands: "(1, 2)".to_string(),
            }
            .is_undefined()
        );
        assert!(
            !OperationError::Unimplemented {
                operation: "divide",
                magma: "i64",
            }
            .is_undefined()
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            OperationError::InverseOfAnnihilator { operation: "divide" }.to_string(),
            "divide: inverse of an annihilator is undefined"
        );
        assert_eq!(
            OperationError::Unimplemented {
                operation: "subtract",
                magma: "bool",
            }
            .to_string(),
            "subtract is not implemented for bool"
        );
    }
}
