// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run results and report rendering.
//!
//! The runner produces a [`RunReport`]: one [`CaseReport`] per registered
//! case, in execution order, plus run-level diagnostics. Formatters render
//! it for humans (text) or machines (JSON).

mod json;
mod text;

use serde::Serialize;

use crate::matcher::ExpectationResult;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Exactly one outcome is recorded per case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed,
    Pending,
}

/// The result of one spec case.
#[derive(Clone, Debug, Serialize)]
pub struct CaseReport {
    /// Names of the enclosing groups, outermost first.
    pub path: Vec<String>,
    pub name: String,
    pub outcome: Outcome,
    /// Expectations recorded by the case body and its hooks, in order.
    pub expectations: Vec<ExpectationResult>,
    /// Panic or timeout message, when the case failed outside a matcher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
    /// Why a pending case is pending ("no body", "disabled", ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CaseReport {
    /// `"outer > inner > case name"` for display and sorting.
    pub fn full_name(&self) -> String {
        let mut parts = self.path.clone();
        parts.push(self.name.clone());
        parts.join(" > ")
    }
}

/// The complete result of one suite run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RunReport {
    pub cases: Vec<CaseReport>,
    /// Framework-misuse diagnostics (expectations outside a case, etc.).
    pub diagnostics: Vec<String>,
}

impl RunReport {
    pub fn passed(&self) -> usize {
        self.count(Outcome::Passed)
    }

    pub fn failed(&self) -> usize {
        self.count(Outcome::Failed)
    }

    pub fn pending(&self) -> usize {
        self.count(Outcome::Pending)
    }

    /// True when no case failed.
    pub fn ok(&self) -> bool {
        self.failed() == 0
    }

    fn count(&self, outcome: Outcome) -> usize {
        self.cases.iter().filter(|c| c.outcome == outcome).count()
    }
}

/// Renders a [`RunReport`] as a string.
pub trait ReportFormatter {
    fn format(&self, report: &RunReport) -> anyhow::Result<String>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
