// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for the behavioral specs.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Once;

use steep::{Outcome, RunConfig, RunReport, Runner, SpecGroup};

static INIT: Once = Once::new();

/// Install a tracing subscriber once, honoring `RUST_LOG`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Run one suite with defaults.
pub fn run(suite: SpecGroup) -> RunReport {
    init_tracing();
    Runner::default().run(&[suite])
}

/// Run one suite with a short async timeout, for timeout specs.
pub fn run_with_timeout_ms(suite: SpecGroup, timeout_ms: u64) -> RunReport {
    init_tracing();
    Runner::new(RunConfig { timeout_ms, ..RunConfig::default() }).run(&[suite])
}

/// `(case name, outcome)` pairs in execution order.
pub fn outcomes(report: &RunReport) -> Vec<(String, Outcome)> {
    report.cases.iter().map(|c| (c.name.clone(), c.outcome)).collect()
}

/// Assert that every case in the report passed, with a useful message.
pub fn assert_all_passed(report: &RunReport) {
    let failures: Vec<String> = report
        .cases
        .iter()
        .filter(|c| c.outcome == Outcome::Failed)
        .map(|c| {
            let mut lines = vec![c.full_name()];
            if let Some(failure) = &c.failure {
                lines.push(format!("  {failure}"));
            }
            for e in c.expectations.iter().filter(|e| !e.passed) {
                lines.push(format!("  {}", e.message));
            }
            lines.join("\n")
        })
        .collect();
    assert!(failures.is_empty(), "unexpected failures:\n{}", failures.join("\n"));
}
