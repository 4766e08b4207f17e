// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spec runner with per-case error isolation.
//!
//! Walks the declared tree depth-first in declaration order, executing
//! lifecycle hooks around each case. A panic in a hook or case body is
//! caught and marks that case failed; the case's remaining `after_each`
//! hooks and every other case still run. Cases execute strictly
//! sequentially; the only suspension point is the wait for an async
//! case's completion signal, bounded by the configured timeout.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam_channel::{Receiver, Sender, bounded};

use crate::config::RunConfig;
use crate::context::ExecContext;
use crate::error::Error;
use crate::registry::{CaseBody, Node, SpecCase, SpecGroup};
use crate::report::{CaseReport, Outcome, RunReport};

/// One-shot completion signal for async cases.
///
/// Cloneable and `Send`, so the body can hand it to another thread. Only
/// the first [`signal`](Self::signal) counts; later calls (including any
/// that arrive after the runner has timed out) are ignored.
#[derive(Clone)]
pub struct Done {
    tx: Sender<()>,
    fired: Arc<AtomicBool>,
}

impl Done {
    fn new() -> (Self, Receiver<()>) {
        let (tx, rx) = bounded(1);
        (Self { tx, fired: Arc::new(AtomicBool::new(false)) }, rx)
    }

    /// Signal completion. Idempotent.
    pub fn signal(&self) {
        if !self.fired.swap(true, Ordering::SeqCst) {
            let _ = self.tx.send(());
        }
    }
}

/// Executes declared groups and produces a [`RunReport`].
pub struct Runner {
    config: RunConfig,
}

struct RunState {
    cx: ExecContext,
    report: RunReport,
    stop: bool,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(RunConfig::default())
    }
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Run every group in declaration order and collect the results.
    pub fn run(&self, roots: &[SpecGroup]) -> RunReport {
        let mut state =
            RunState { cx: ExecContext::new(), report: RunReport::default(), stop: false };
        let mut ancestors = Vec::new();
        for group in roots {
            if state.stop {
                break;
            }
            self.run_group(group, &mut ancestors, &mut state, false);
        }
        let diagnostics = state.cx.take_diagnostics();
        state.report.diagnostics.extend(diagnostics);
        state.report
    }

    fn run_group<'g>(
        &self,
        group: &'g SpecGroup,
        ancestors: &mut Vec<&'g SpecGroup>,
        state: &mut RunState,
        excluded: bool,
    ) {
        let excluded = excluded || group.excluded;
        tracing::debug!(group = %group.name, excluded, "entering group");
        ancestors.push(group);

        if !excluded {
            for hook in &group.hooks.before_all {
                if let Err(msg) = guarded(|| hook(&mut state.cx)) {
                    state
                        .report
                        .diagnostics
                        .push(format!("before_all hook in {:?} panicked: {msg}", group.name));
                }
            }
        }

        for child in &group.children {
            if state.stop {
                break;
            }
            match child {
                Node::Group(sub) => self.run_group(sub, ancestors, state, excluded),
                Node::Case(case) => self.run_case(case, ancestors, state, excluded),
            }
        }

        if !excluded {
            for hook in &group.hooks.after_all {
                if let Err(msg) = guarded(|| hook(&mut state.cx)) {
                    state
                        .report
                        .diagnostics
                        .push(format!("after_all hook in {:?} panicked: {msg}", group.name));
                }
            }
        }

        ancestors.pop();
    }

    fn run_case(
        &self,
        case: &SpecCase,
        ancestors: &[&SpecGroup],
        state: &mut RunState,
        excluded: bool,
    ) {
        let path: Vec<String> = ancestors.iter().map(|g| g.name.clone()).collect();

        // Disabled cases are skipped entirely: no hooks, no body.
        if excluded || case.excluded {
            state.report.cases.push(CaseReport {
                path,
                name: case.name.clone(),
                outcome: Outcome::Pending,
                expectations: Vec::new(),
                failure: None,
                note: Some("disabled".to_string()),
            });
            return;
        }

        state.cx.begin_case();
        let mut failure: Option<String> = None;
        let mut note: Option<String> = None;

        // before_each hooks, outermost to innermost. A panic fails the
        // case and skips the body, but after_each hooks still run.
        'hooks: for group in ancestors {
            for hook in &group.hooks.before_each {
                if let Err(msg) = guarded(|| hook(&mut state.cx)) {
                    failure = Some(format!("before_each hook panicked: {msg}"));
                    break 'hooks;
                }
            }
        }

        if failure.is_none() {
            match &case.body {
                None => note = Some("no body".to_string()),
                Some(CaseBody::Sync(body)) => {
                    if let Err(msg) = guarded(|| body(&mut state.cx)) {
                        failure = Some(msg);
                    }
                }
                Some(CaseBody::Async(body)) => {
                    let (done, rx) = Done::new();
                    match guarded(|| body(&mut state.cx, done)) {
                        Err(msg) => failure = Some(msg),
                        Ok(()) => {
                            if rx.recv_timeout(self.config.timeout()).is_err() {
                                failure = Some(Error::Timeout(self.config.timeout_ms).to_string());
                            }
                        }
                    }
                }
            }
        }

        // after_each hooks, innermost to outermost, regardless of what
        // happened above. The first failure wins.
        for group in ancestors.iter().rev() {
            for hook in &group.hooks.after_each {
                if let Err(msg) = guarded(|| hook(&mut state.cx)) {
                    failure.get_or_insert_with(|| format!("after_each hook panicked: {msg}"));
                }
            }
        }

        // The clock contract asks for a matching uninstall per install
        // (afterEach discipline). Leaks carry virtual time into later
        // cases, so flag them.
        if state.cx.clock_installed() {
            tracing::warn!(case = %case.name, "virtual clock still installed at end of case");
        }

        let active = state.cx.end_case();
        if active.pending {
            note = Some("pending".to_string());
        }
        let pending = active.pending || (case.body.is_none() && failure.is_none());
        let outcome = if pending {
            Outcome::Pending
        } else if failure.is_some() || active.expectations.iter().any(|e| !e.passed) {
            Outcome::Failed
        } else {
            Outcome::Passed
        };

        if outcome == Outcome::Failed && self.config.fail_fast {
            state.stop = true;
        }

        state.report.cases.push(CaseReport {
            path,
            name: case.name.clone(),
            outcome,
            expectations: active.expectations,
            failure,
            note,
        });
    }
}

/// Invoke a closure, converting a panic into its message.
fn guarded(f: impl FnOnce()) -> std::result::Result<(), String> {
    catch_unwind(AssertUnwindSafe(f)).map_err(panic_message)
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
