/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Logging, reports and configuration.

use magma::Add;
use magma::Checker;
use magma::CheckerConfig;
use magma::Checklist;
use magma::LOG_REPORTS_ENV;
use magma::Multiply;
use magma::OperationProperty;
use magma::TOLERANCE_ENV;
use tracing_test::traced_test;

#[traced_test]
#[test]
fn violations_are_logged_by_default() {
    let mut checklist = Checklist::<OperationProperty>::logging();
    checklist.fail(OperationProperty::Associative, "add(add(1, 2), 3) = 7");
    assert!(logs_contain("add(add(1, 2), 3) = 7"));
    assert!(logs_contain("checklist"));
}

#[traced_test]
#[test]
fn reports_are_logged_on_request() {
    let config = CheckerConfig {
        log_reports: true,
        ..CheckerConfig::default()
    };
    let report = Checker::new(config).check_magma::<i64, Add>(&[0, 1, 5]);
    assert!(report.success(), "{report}");
    assert!(logs_contain("magma report"));
}

#[traced_test]
#[test]
fn reports_are_quiet_by_default() {
    let report = Checker::default().check_magma::<i64, Multiply>(&[0, 1, 5]);
    assert!(report.success(), "{report}");
    assert!(!logs_contain("magma report"));
}

#[test]
fn report_sections_name_their_checklists() {
    let report = Checker::default().check_magma_pair::<bool, Multiply, Add>(&[false, true]);
    assert!(report.success(), "{report}");
    let text = report.to_string();
    for section in [
        "[magma]",
        "[multiply]",
        "[add]",
        "[multiply over add]",
        "[add over multiply]",
    ] {
        assert!(text.contains(section), "{section} missing from:\n{text}");
    }
}

#[traced_test]
#[test]
fn environment_overrides_defaults() {
    // The only test in this binary touching these variables.
    std::env::set_var(TOLERANCE_ENV, "0.125");
    std::env::set_var(LOG_REPORTS_ENV, "not a flag");
    let checker = Checker::from_env();
    std::env::remove_var(TOLERANCE_ENV);
    std::env::remove_var(LOG_REPORTS_ENV);

    assert_eq!(checker.config().tolerance, 0.125);
    assert!(!checker.config().log_reports);
    assert!(logs_contain("MAGMA_CHECK_LOG_REPORTS"));
}

#[test]
fn configuration_embeds_in_json() -> anyhow::Result<()> {
    let config: CheckerConfig = serde_json::from_str(r#"{"log_reports": true}"#)?;
    assert!(config.log_reports);
    assert_eq!(config.tolerance, CheckerConfig::default().tolerance);

    let json = serde_json::to_string(&CheckerConfig::default().with_tolerance(0.5))?;
    assert_eq!(json, r#"{"tolerance":0.5,"log_reports":false}"#);
    Ok(())
}
