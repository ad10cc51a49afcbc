/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Conforming magmas pass their checks.

use magma::Add;
use magma::Checker;
use magma::Direction;
use magma::DistributivityProperty;
use magma::EqualityProperty;
use magma::LogFloat;
use magma::MagmaProperty;
use magma::Multiply;
use magma::OperationProperty;
use magma::PropertyState;
use magma::Sequence;
use magma::Side;
use magma::Symbol;

fn seq(s: &str) -> Sequence<char> {
    Sequence::from(s)
}

#[test]
fn small_integers_form_a_semiring() {
    let examples = [-2i64, -1, 0, 1, 2];
    let report = Checker::default().check_semiring::<i64, Multiply, Add>(Direction::Either, &examples);
    assert!(report.success(), "{report}");
    assert!(report.multiply_over_add.is_done(DistributivityProperty::Semiring));
    assert!(report.multiply.is_done(OperationProperty::IdentityAccessor));
    assert!(report.add.is_done(OperationProperty::NativeInverse));
    assert!(report.magma.is_done(MagmaProperty::Qualifiers));
    assert!(report.magma.is_done(MagmaProperty::NativeEquality));
    assert!(report.magma.is_done(MagmaProperty::NativeInequality));

    let equality = Checker::default().check_equality(&examples);
    assert!(equality.success(), "{equality}");
    assert!(equality.is_done(EqualityProperty::DistinctExamples));
}

#[test]
fn either_inverse_checks_both_sides() {
    let report = Checker::default().check_magma::<i32, Add>(&[-7, 0, 3, 12]);
    assert!(report.success(), "{report}");
    for law in [
        OperationProperty::InverseLeft,
        OperationProperty::InverseRight,
        OperationProperty::InvertLeft,
        OperationProperty::InvertRight,
    ] {
        assert!(report.operation.is_done(law), "{law}: {report}");
    }
    assert_eq!(magma::subtract(Side::Left, &15i32, &3), Ok(12));
    assert_eq!(magma::subtract(Side::Right, &15i32, &12), Ok(3));
}

#[test]
fn distributivity_over_one_two_three() {
    assert_eq!(magma::multiply(&1i64, &magma::add(&2i64, &3i64)), 5);
    let report = Checker::default().check_magma_pair::<i64, Multiply, Add>(&[1, 2, 3]);
    assert!(report.success(), "{report}");
    assert!(report.multiply_over_add.is_done(DistributivityProperty::DistributiveLeft));
    assert!(report.multiply_over_add.is_done(DistributivityProperty::DistributiveRight));
    assert_eq!(
        report.multiply_over_add.state(DistributivityProperty::Semiring),
        &PropertyState::NotApplicable
    );
    assert_eq!(
        report.add_over_multiply.state(DistributivityProperty::DistributiveLeft),
        &PropertyState::NotApplicable
    );
}

#[test]
fn division_by_the_annihilator_is_undefined() {
    let err = magma::divide(Side::Left, &6.0f64, &0.0).unwrap_err();
    assert!(err.is_undefined());

    let report = Checker::default().check_magma::<f64, Multiply>(&[0.0, 0.5, 2.0, -3.0]);
    assert!(report.success(), "{report}");
    assert!(report.operation.is_done(OperationProperty::InverseOfAnnihilator));
    assert!(report.magma.is_done(MagmaProperty::NonMember));
}

#[test]
fn concatenation_is_associative_not_commutative() {
    assert_eq!(magma::multiply(&seq("a"), &seq("b")), seq("ab"));
    assert!(magma::property::is_associative::<Sequence<char>, Multiply>());
    assert!(!magma::property::is_commutative::<Sequence<char>, Multiply>());

    let report = Checker::default()
        .check_magma::<Sequence<char>, Multiply>(&[seq(""), seq("a"), seq("b"), seq("ab")]);
    assert!(report.operation.is_done(OperationProperty::Associative));
    assert_eq!(
        report.operation.state(OperationProperty::Commutative),
        &PropertyState::NotApplicable
    );
    // No annihilator among the examples, so the undefined check never ran.
    assert_eq!(
        report.operation.pending().collect::<Vec<_>>(),
        vec![OperationProperty::InverseOfAnnihilator]
    );
}

#[test]
fn narrow_representations_hash_like_general_ones() {
    let checklist = Checker::default().check_hash(&[Symbol('x'), Symbol('y'), Symbol('z')], |s| {
        Sequence::from(s.clone())
    });
    assert!(checklist.success(), "{checklist}");
    assert!(magma::same_magma::<Symbol<char>, Sequence<char>>());
}

#[test]
fn log_floats_under_a_tight_tolerance() {
    let checker = Checker::new(magma::CheckerConfig::default().with_tolerance(1e-9));
    let examples: Vec<LogFloat> = [0.0, 0.001, 1.0, 7.5].into_iter().map(LogFloat::new).collect();
    let report = checker.check_magma_pair::<LogFloat, Multiply, Add>(&examples);
    assert!(report.success(), "{report}");
}
