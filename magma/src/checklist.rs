/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Per-session property checklists.
//!
//! A [`Checklist`] tracks one [`PropertyState`] per property of an
//! enumerated property set. Every property starts as
//! [`PropertyState::ToDo`] and moves at most once to `Done`,
//! `NotApplicable` or `Skipped` (a skipped property can still be
//! ticked off later). Any property can fail at any time; failure is
//! sticky.
//!
//! The checklist succeeds when nothing failed and nothing is left to
//! do.
//!
//! ```
//! use magma::Checklist;
//! use magma::OperationProperty;
//!
//! let mut checklist = Checklist::<OperationProperty>::logging();
//! assert!(checklist.tick_off(OperationProperty::Associative));
//! assert!(!checklist.tick_off(OperationProperty::Associative));
//! assert!(!checklist.success());
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use enum_as_inner::EnumAsInner;
use strum::IntoEnumIterator;

/// An enumerated set of properties that a checklist tracks.
pub trait Property: Copy + Ord + fmt::Debug + IntoEnumIterator + 'static {
    /// Name of the checklist this property set belongs to.
    const CHECKLIST: &'static str;

    /// One-line description of the property for reports.
    fn description(self) -> &'static str;
}

/// The state of one property in a checklist.
#[derive(Clone, Debug, PartialEq, Eq, EnumAsInner)]
pub enum PropertyState {
    /// Not yet exercised.
    ToDo,
    /// The magma does not implement what the property is about.
    NotApplicable,
    /// Applicable, but deliberately not performed.
    Skipped,
    /// Exercised, with no failure.
    Done,
    /// Exercised and violated, with one message per violation.
    Failed(Vec<String>),
}

impl PropertyState {
    /// The word used for this state in reports.
    pub fn status(&self) -> &'static str {
        match self {
            PropertyState::ToDo => "NOT PERFORMED",
            PropertyState::NotApplicable => "not applicable",
            PropertyState::Skipped => "skipped",
            PropertyState::Done => "success",
            PropertyState::Failed(_) => "FAILED",
        }
    }
}

/// A single observed violation, as handed to a [`Reporter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    /// The checklist the property belongs to.
    pub checklist: &'static str,
    /// The property's description.
    pub property: &'static str,
    /// What was observed.
    pub message: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.checklist, self.property, self.message)
    }
}

/// Callback invoked once per observed violation.
///
/// Checklists are single-session, single-thread objects; the reporter
/// is shared between the checklists of one session.
pub type Reporter = Rc<dyn Fn(&Failure)>;

/// The default reporter: log the failure at error level.
pub fn log_failure(failure: &Failure) {
    tracing::error!(
        checklist = failure.checklist,
        property = failure.property,
        "{}",
        failure.message
    );
}

/// The default [`Reporter`].
pub fn logging_reporter() -> Reporter {
    Rc::new(log_failure)
}

/// States of every property in `P` for one checking session.
pub struct Checklist<P: Property> {
    states: BTreeMap<P, PropertyState>,
    reporter: Reporter,
}

impl<P: Property> Checklist<P> {
    /// A checklist with every property to do, reporting failures to
    /// `reporter`.
    pub fn new(reporter: Reporter) -> Self {
        Self {
            states: P::iter().map(|p| (p, PropertyState::ToDo)).collect(),
            reporter,
        }
    }

    /// A checklist that logs failures.
    pub fn logging() -> Self {
        Self::new(logging_reporter())
    }

    /// The current state of `property`.
    pub fn state(&self, property: P) -> &PropertyState {
        static TO_DO: PropertyState = PropertyState::ToDo;
        self.states.get(&property).unwrap_or(&TO_DO)
    }

    fn entry(&mut self, property: P) -> &mut PropertyState {
        self.states.entry(property).or_insert(PropertyState::ToDo)
    }

    /// Mark `property` as exercised. Returns true only the first time
    /// in the session; later calls, and calls on a failed or
    /// not-applicable property, change nothing and return false.
    pub fn tick_off(&mut self, property: P) -> bool {
        let state = self.entry(property);
        match state {
            PropertyState::ToDo | PropertyState::Skipped => {
                *state = PropertyState::Done;
                true
            }
            _ => false,
        }
    }

    /// Mark a property that is still to do as not applicable.
    pub fn not_applicable(&mut self, property: P) {
        let state = self.entry(property);
        if state.is_to_do() {
            *state = PropertyState::NotApplicable;
        }
    }

    /// Mark a property that is still to do as skipped.
    pub fn skip(&mut self, property: P) {
        let state = self.entry(property);
        if state.is_to_do() {
            *state = PropertyState::Skipped;
        }
    }

    /// Record a violation of `property` and report it.
    pub fn fail(&mut self, property: P, message: impl Into<String>) {
        let message = message.into();
        let failure = Failure {
            checklist: P::CHECKLIST,
            property: property.description(),
            message: message.clone(),
        };
        let state = self.entry(property);
        match state {
            PropertyState::Failed(messages) => messages.push(message),
            _ => *state = PropertyState::Failed(vec![message]),
        }
        (self.reporter)(&failure);
    }

    /// Tick off `property` and, unless `holds`, fail it with the
    /// message produced by `message`. Returns `holds`.
    pub fn check(&mut self, property: P, holds: bool, message: impl FnOnce() -> String) -> bool {
        self.tick_off(property);
        if !holds {
            self.fail(property, message());
        }
        holds
    }

    /// Whether `property` has failed.
    pub fn is_failed(&self, property: P) -> bool {
        self.state(property).is_failed()
    }

    /// Whether `property` was exercised without failure.
    pub fn is_done(&self, property: P) -> bool {
        self.state(property).is_done()
    }

    /// True iff no property failed and no property is left to do.
    pub fn success(&self) -> bool {
        self.states
            .values()
            .all(|state| !state.is_failed() && !state.is_to_do())
    }

    /// Failed properties with their messages.
    pub fn failures(&self) -> impl Iterator<Item = (P, &[String])> + '_ {
        self.states
            .iter()
            .filter_map(|(p, state)| state.as_failed().map(|m| (*p, m.as_slice())))
    }

    /// Properties still to do.
    pub fn pending(&self) -> impl Iterator<Item = P> + '_ {
        self.states
            .iter()
            .filter(|(_, state)| state.is_to_do())
            .map(|(p, _)| *p)
    }

    /// The reporter this checklist reports to.
    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }
}

impl<P: Property> fmt::Display for Checklist<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (property, state) in &self.states {
            writeln!(f, "{}: {}", property.description(), state.status())?;
        }
        Ok(())
    }
}

impl<P: Property> fmt::Debug for Checklist<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checklist")
            .field("checklist", &P::CHECKLIST)
            .field("states", &self.states)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use tracing_test::traced_test;

    use super::*;

    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        strum::EnumIter
    )]
    enum Law {
        Left,
        Right,
        Both,
    }

    impl Property for Law {
        const CHECKLIST: &'static str = "law";

        fn description(self) -> &'static str {
            match self {
                Law::Left => "left law",
                Law::Right => "right law",
                Law::Both => "both laws",
            }
        }
    }

    fn recording() -> (Checklist<Law>, Rc<RefCell<Vec<Failure>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let checklist = Checklist::new(Rc::new(move |f: &Failure| sink.borrow_mut().push(f.clone())));
        (checklist, seen)
    }

    #[test]
    fn tick_off_is_true_exactly_once() {
        let (mut checklist, seen) = recording();
        assert!(checklist.tick_off(Law::Left));
        assert!(!checklist.tick_off(Law::Left));
        assert!(!checklist.tick_off(Law::Left));
        assert!(checklist.is_done(Law::Left));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn skipped_can_still_be_ticked_off() {
        let (mut checklist, _) = recording();
        checklist.skip(Law::Right);
        assert_eq!(checklist.state(Law::Right), &PropertyState::Skipped);
        assert!(checklist.tick_off(Law::Right));
        checklist.skip(Law::Right);
        assert!(checklist.is_done(Law::Right));
    }

    #[test]
    fn not_applicable_only_from_to_do() {
        let (mut checklist, _) = recording();
        checklist.tick_off(Law::Left);
        checklist.not_applicable(Law::Left);
        assert!(checklist.is_done(Law::Left));
        checklist.not_applicable(Law::Right);
        assert!(!checklist.tick_off(Law::Right));
        assert_eq!(checklist.state(Law::Right), &PropertyState::NotApplicable);
    }

    #[test]
    fn failure_is_sticky() {
        let (mut checklist, seen) = recording();
        checklist.fail(Law::Both, "first");
        assert!(!checklist.tick_off(Law::Both));
        checklist.not_applicable(Law::Both);
        checklist.tick_off(Law::Left);
        checklist.tick_off(Law::Right);
        assert!(checklist.is_failed(Law::Both));
        assert!(!checklist.success());

        checklist.fail(Law::Both, "second");
        let failures: Vec<_> = checklist.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, Law::Both);
        assert_eq!(failures[0].1, &["first".to_string(), "second".to_string()]);
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(seen.borrow()[1].property, "both laws");
        assert_eq!(seen.borrow()[1].checklist, "law");
    }

    #[test]
    fn success_requires_every_property_resolved() {
        let (mut checklist, _) = recording();
        assert!(!checklist.success());
        checklist.tick_off(Law::Left);
        checklist.not_applicable(Law::Right);
        assert!(!checklist.success());
        assert_eq!(checklist.pending().collect::<Vec<_>>(), vec![Law::Both]);
        checklist.skip(Law::Both);
        assert!(checklist.success());
    }

    #[test]
    fn success_is_false_with_any_failure() {
        let (mut checklist, _) = recording();
        checklist.tick_off(Law::Left);
        checklist.tick_off(Law::Right);
        checklist.tick_off(Law::Both);
        assert!(checklist.success());
        checklist.fail(Law::Left, "late");
        assert!(!checklist.success());
    }

    #[test]
    fn check_ticks_and_fails() {
        let (mut checklist, seen) = recording();
        assert!(checklist.check(Law::Left, true, || unreachable!()));
        assert!(!checklist.check(Law::Right, false, || "nope".to_string()));
        assert!(checklist.is_done(Law::Left));
        assert!(checklist.is_failed(Law::Right));
        assert_eq!(seen.borrow()[0].to_string(), "law: right law: nope");
    }

    #[test]
    fn report_has_one_line_per_property() {
        let (mut checklist, _) = recording();
        checklist.tick_off(Law::Left);
        checklist.fail(Law::Right, "broken");
        assert_eq!(
            checklist.to_string(),
            "left law: success\nright law: FAILED\nboth laws: NOT PERFORMED\n"
        );
        checklist.skip(Law::Both);
        assert!(checklist.to_string().ends_with("both laws: skipped\n"));
    }

    #[traced_test]
    #[test]
    fn logging_reporter_logs() {
        let mut checklist = Checklist::<Law>::logging();
        checklist.fail(Law::Left, "left identity broken");
        assert!(logs_contain("left identity broken"));
        assert!(logs_contain("left law"));
    }
}
