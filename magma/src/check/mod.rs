/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! The conformance checker.
//!
//! A [`Checker`] exercises a magma implementation against example
//! values and records the outcome in [`Checklist`]s. Each law is
//! gated on the registry's capability queries and the
//! implementation's markers: what the magma does not implement or
//! claim is marked not applicable; what it claims is exercised on
//! every single example, every pair and every triple.
//!
//! ```
//! use magma::Checker;
//! use magma::Multiply;
//!
//! let report = Checker::default().check_magma::<i64, Multiply>(&[-2, -1, 0, 1, 2]);
//! assert!(report.success(), "{report}");
//! ```

mod distributive;
mod equality;
pub mod laws;
mod operation;
mod structure;

use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use crate::checklist::Checklist;
use crate::checklist::Failure;
use crate::checklist::Reporter;
use crate::checklist::logging_reporter;
use crate::config::CheckerConfig;
use crate::operation::Direction;
use crate::operation::Operation;
use crate::property::is_approximate;
use crate::registry::Implements;
use crate::registry::Magma;
use crate::tag::Tagged;
use crate::tag::tag_name;
use laws::DistributivityProperty;
use laws::EqualityProperty;
use laws::HashProperty;
use laws::MagmaProperty;
use laws::OperationProperty;

/// How law results are compared: exactly, or within a relative
/// tolerance when an approximate operation is involved.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Comparison {
    tolerance: Option<f64>,
}

impl Comparison {
    pub(crate) fn new(approximate: bool, config: &CheckerConfig) -> Self {
        Self {
            tolerance: approximate.then_some(config.tolerance),
        }
    }

    pub(crate) fn same<M: Magma>(&self, a: &M, b: &M) -> bool {
        match self.tolerance {
            Some(tolerance) => a.approximately_equal(b, tolerance),
            None => a.equal(b),
        }
    }
}

/// Runs checking sessions.
///
/// Every session gets fresh checklists sharing the checker's
/// reporter. The default reporter logs each violation at error
/// level.
#[derive(Clone)]
pub struct Checker {
    config: CheckerConfig,
    reporter: Reporter,
}

impl Default for Checker {
    fn default() -> Self {
        Self::new(CheckerConfig::default())
    }
}

impl fmt::Debug for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checker")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Checker {
    /// A checker with the given configuration and the logging
    /// reporter.
    pub fn new(config: CheckerConfig) -> Self {
        Self {
            config,
            reporter: logging_reporter(),
        }
    }

    /// A checker configured from the environment.
    pub fn from_env() -> Self {
        Self::new(CheckerConfig::from_env())
    }

    /// Report violations to `reporter` instead.
    pub fn with_reporter(self, reporter: impl Fn(&Failure) + 'static) -> Self {
        Self {
            reporter: Rc::new(reporter),
            ..self
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    fn checklist<P: crate::checklist::Property>(&self) -> Checklist<P> {
        Checklist::new(self.reporter.clone())
    }

    fn finish(&self, session: &str, success: bool, report: &dyn fmt::Display) {
        tracing::debug!(success, "finished {}", session);
        if self.config.log_reports {
            tracing::info!("{} report:\n{}", session, report);
        }
    }

    /// Check raw equality. Examples must be pairwise distinct.
    pub fn check_equality<M: Magma>(&self, examples: &[M]) -> Checklist<EqualityProperty> {
        let _span = tracing::debug_span!(
            "check_equality",
            magma = tag_name::<M>(),
            examples = examples.len()
        )
        .entered();
        let mut checklist = self.checklist();
        equality::check_equality(&mut checklist, examples);
        self.finish("equality", checklist.success(), &checklist);
        checklist
    }

    /// Check hashing of `M`, and that `convert` into the alternative
    /// representation `R` of the same magma preserves membership,
    /// equality and hashes.
    pub fn check_hash<M, R>(
        &self,
        examples: &[M],
        convert: impl Fn(&M) -> R,
    ) -> Checklist<HashProperty>
    where
        M: Magma + Hash,
        R: Magma + Hash + Tagged<Tag = M::Tag>,
    {
        let _span = tracing::debug_span!(
            "check_hash",
            magma = tag_name::<M>(),
            examples = examples.len()
        )
        .entered();
        let mut checklist = self.checklist();
        equality::check_hash(&mut checklist, examples, convert);
        self.finish("hash", checklist.success(), &checklist);
        checklist
    }

    /// Check `M` and its operation `Op`.
    pub fn check_magma<M, Op>(&self, examples: &[M]) -> MagmaChecklists
    where
        M: Implements<Op>,
        Op: Operation,
    {
        let _span = tracing::debug_span!(
            "check_magma",
            magma = tag_name::<M>(),
            operation = Op::ID.name(),
            examples = examples.len()
        )
        .entered();
        let mut report = MagmaChecklists {
            magma: self.checklist(),
            operation: self.checklist(),
        };
        structure::check_structure(&mut report.magma, examples, &self.config);
        self.check_operation::<M, Op>(&mut report.operation, examples);
        self.finish("magma", report.success(), &report);
        report
    }

    /// Check `M` with two operations, including distributivity of
    /// each over the other.
    pub fn check_magma_pair<M, Mul, Add>(&self, examples: &[M]) -> PairChecklists
    where
        M: Implements<Mul> + Implements<Add>,
        Mul: Operation,
        Add: Operation,
    {
        self.check_pair::<M, Mul, Add>(examples, None)
    }

    /// Check that `(M, Mul, Add)` is a semiring in `direction`, on top
    /// of everything [`Checker::check_magma_pair`] checks.
    pub fn check_semiring<M, Mul, Add>(&self, direction: Direction, examples: &[M]) -> PairChecklists
    where
        M: Implements<Mul> + Implements<Add>,
        Mul: Operation,
        Add: Operation,
    {
        self.check_pair::<M, Mul, Add>(examples, Some(direction))
    }

    fn check_pair<M, Mul, Add>(&self, examples: &[M], semiring: Option<Direction>) -> PairChecklists
    where
        M: Implements<Mul> + Implements<Add>,
        Mul: Operation,
        Add: Operation,
    {
        let _span = tracing::debug_span!(
            "check_magma_pair",
            magma = tag_name::<M>(),
            multiply = Mul::ID.name(),
            add = Add::ID.name(),
            semiring = ?semiring,
            examples = examples.len()
        )
        .entered();
        let mut report = PairChecklists {
            magma: self.checklist(),
            multiply: self.checklist(),
            add: self.checklist(),
            multiply_over_add: self.checklist(),
            add_over_multiply: self.checklist(),
        };
        structure::check_structure(&mut report.magma, examples, &self.config);
        self.check_operation::<M, Mul>(&mut report.multiply, examples);
        self.check_operation::<M, Add>(&mut report.add, examples);

        let compare = Comparison::new(
            is_approximate::<M, Mul>() || is_approximate::<M, Add>(),
            &self.config,
        );
        distributive::check_distributive::<M, Mul, Add>(
            &mut report.multiply_over_add,
            examples,
            compare,
            semiring,
        );
        distributive::check_distributive::<M, Add, Mul>(
            &mut report.add_over_multiply,
            examples,
            compare,
            None,
        );
        self.finish("magma pair", report.success(), &report);
        report
    }

    fn check_operation<M, Op>(&self, checklist: &mut Checklist<OperationProperty>, examples: &[M])
    where
        M: Implements<Op>,
        Op: Operation,
    {
        let compare = Comparison::new(is_approximate::<M, Op>(), &self.config);
        operation::check_operation::<M, Op>(checklist, examples, compare);
    }
}

/// Result of [`Checker::check_magma`].
#[derive(Debug)]
pub struct MagmaChecklists {
    /// Type-level properties.
    pub magma: Checklist<MagmaProperty>,
    /// Properties of the operation.
    pub operation: Checklist<OperationProperty>,
}

impl MagmaChecklists {
    /// Whether both checklists succeeded.
    pub fn success(&self) -> bool {
        self.magma.success() && self.operation.success()
    }
}

impl fmt::Display for MagmaChecklists {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[magma]")?;
        write!(f, "{}", self.magma)?;
        writeln!(f, "[operation]")?;
        write!(f, "{}", self.operation)
    }
}

/// Result of [`Checker::check_magma_pair`] and
/// [`Checker::check_semiring`].
#[derive(Debug)]
pub struct PairChecklists {
    /// Type-level properties.
    pub magma: Checklist<MagmaProperty>,
    /// Properties of the first ("multiplicative") operation.
    pub multiply: Checklist<OperationProperty>,
    /// Properties of the second ("additive") operation.
    pub add: Checklist<OperationProperty>,
    /// The first operation distributing over the second.
    pub multiply_over_add: Checklist<DistributivityProperty>,
    /// The second operation distributing over the first.
    pub add_over_multiply: Checklist<DistributivityProperty>,
}

impl PairChecklists {
    /// Whether every checklist succeeded.
    pub fn success(&self) -> bool {
        self.magma.success()
            && self.multiply.success()
            && self.add.success()
            && self.multiply_over_add.success()
            && self.add_over_multiply.success()
    }
}

impl fmt::Display for PairChecklists {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[magma]")?;
        write!(f, "{}", self.magma)?;
        writeln!(f, "[multiply]")?;
        write!(f, "{}", self.multiply)?;
        writeln!(f, "[add]")?;
        write!(f, "{}", self.add)?;
        writeln!(f, "[multiply over add]")?;
        write!(f, "{}", self.multiply_over_add)?;
        writeln!(f, "[add over multiply]")?;
        write!(f, "{}", self.add_over_multiply)
    }
}
