// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-run execution context, threaded into every hook and case body.
//!
//! The context replaces the ambient "current case" global a typical spec
//! framework keeps: the runner hands each closure a `&mut ExecContext`, and
//! expectations, `pending()`, and the virtual clock all go through it. The
//! clock slot is shared across the whole run, so a clock installed in one
//! case and never uninstalled is still there for the next (that leak is the
//! test author's bug to fix with an `after_each`).

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::expect::{Expectation, Subject};
use crate::matcher::ExpectationResult;
use crate::spy::Spy;
use crate::value::Value;

/// State for the case currently executing.
#[derive(Default)]
pub(crate) struct ActiveCase {
    pub expectations: Vec<ExpectationResult>,
    pub pending: bool,
}

/// Execution context handed to hooks and case bodies.
#[derive(Default)]
pub struct ExecContext {
    active: Option<ActiveCase>,
    clock: Option<Clock>,
    diagnostics: Vec<String>,
}

impl ExecContext {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Open an expectation on a plain value.
    pub fn expect(&mut self, value: impl Into<Value>) -> Expectation<'_> {
        Expectation::new(self, Subject::Value(value.into()))
    }

    /// Open an expectation on a spy's call log.
    pub fn expect_spy(&mut self, spy: &Spy) -> Expectation<'_> {
        Expectation::new(self, Subject::Spy(spy.clone()))
    }

    /// Mark the current case pending. The rest of the body still runs, but
    /// the case's outcome is Pending regardless of recorded expectations.
    pub fn pending(&mut self) {
        match self.active.as_mut() {
            Some(case) => case.pending = true,
            None => self.misuse(Error::Context("pending() with no case executing".into())),
        }
    }

    /// Install the virtual clock for this run.
    pub fn install_clock(&mut self) -> Result<Clock> {
        if self.clock.is_some() {
            return Err(Error::State("clock already installed".into()));
        }
        let clock = Clock::new();
        self.clock = Some(clock.clone());
        Ok(clock)
    }

    /// The installed clock, if any.
    pub fn clock(&self) -> Option<Clock> {
        self.clock.clone()
    }

    /// Uninstall the clock, discarding its pending timers.
    pub fn uninstall_clock(&mut self) -> Result<()> {
        match self.clock.take() {
            Some(clock) => {
                clock.discard_pending();
                Ok(())
            }
            None => Err(Error::State("clock not installed".into())),
        }
    }

    /// Record an evaluated expectation on the current case. With no case
    /// executing (a `before_all` hook, say) the result is dropped and a
    /// context diagnostic is kept for the report.
    pub(crate) fn record(&mut self, result: ExpectationResult) {
        match self.active.as_mut() {
            Some(case) => case.expectations.push(result),
            None => self.misuse(Error::Context(format!(
                "expectation {:?} with no case executing",
                result.matcher
            ))),
        }
    }

    pub(crate) fn begin_case(&mut self) {
        self.active = Some(ActiveCase::default());
    }

    pub(crate) fn end_case(&mut self) -> ActiveCase {
        self.active.take().unwrap_or_default()
    }

    pub(crate) fn clock_installed(&self) -> bool {
        self.clock.is_some()
    }

    pub(crate) fn take_diagnostics(&mut self) -> Vec<String> {
        std::mem::take(&mut self.diagnostics)
    }

    fn misuse(&mut self, err: Error) {
        tracing::warn!(%err, "framework misuse");
        self.diagnostics.push(err.to_string());
    }
}
