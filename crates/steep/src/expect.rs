// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `expect(value)` binding.
//!
//! [`ExecContext::expect`](crate::context::ExecContext::expect) opens an
//! [`Expectation`]; calling a matcher method on it evaluates the predicate
//! immediately and records the result on the currently executing case.

use crate::context::ExecContext;
use crate::matcher::Matcher;
use crate::spy::Spy;
use crate::value::{Kind, Value};

/// What an expectation is bound over: a plain value, or a spy whose call
/// log the spy matchers read.
pub enum Subject {
    Value(Value),
    Spy(Spy),
}

impl Subject {
    pub(crate) fn render(&self) -> String {
        match self {
            Subject::Value(v) => v.to_string(),
            Subject::Spy(spy) => format!("spy {}", spy.name()),
        }
    }
}

/// A binding over a value under test. Each matcher method consumes the
/// binding, evaluates, and records.
pub struct Expectation<'cx> {
    cx: &'cx mut ExecContext,
    subject: Subject,
    negated: bool,
}

impl<'cx> Expectation<'cx> {
    pub(crate) fn new(cx: &'cx mut ExecContext, subject: Subject) -> Self {
        Self { cx, subject, negated: false }
    }

    /// Invert the sense of the matcher that follows:
    /// `cx.expect_spy(&spy).not().to_have_been_called()`.
    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    fn apply(self, matcher: Matcher) {
        let result = matcher.evaluate(&self.subject, self.negated);
        self.cx.record(result);
    }

    /// Strict comparison (`===`): type-and-value for primitives,
    /// reference identity for arrays and objects.
    pub fn to_be(self, expected: impl Into<Value>) {
        self.apply(Matcher::ToBe(expected.into()));
    }

    /// Deep structural equality regardless of reference identity.
    pub fn to_equal(self, expected: impl Into<Value>) {
        self.apply(Matcher::ToEqual(expected.into()));
    }

    /// Approximate equality: passes when
    /// `|actual - expected| < 0.5 * 10^-precision`.
    pub fn to_be_close_to(self, expected: f64, precision: i32) {
        self.apply(Matcher::ToBeCloseTo { expected, precision });
    }

    pub fn to_be_truthy(self) {
        self.apply(Matcher::ToBeTruthy);
    }

    pub fn to_be_falsy(self) {
        self.apply(Matcher::ToBeFalsy);
    }

    pub fn to_be_defined(self) {
        self.apply(Matcher::ToBeDefined);
    }

    pub fn to_be_greater_than(self, bound: f64) {
        self.apply(Matcher::ToBeGreaterThan(bound));
    }

    pub fn to_be_less_than(self, bound: f64) {
        self.apply(Matcher::ToBeLessThan(bound));
    }

    /// Arrays: some element deep-equals `needle`. Strings: substring.
    pub fn to_contain(self, needle: impl Into<Value>) {
        self.apply(Matcher::ToContain(needle.into()));
    }

    /// Type/shape membership, e.g. `to_be_any(Kind::Array)`.
    pub fn to_be_any(self, kind: Kind) {
        self.apply(Matcher::ToBeAny(kind));
    }

    /// Object containment: every entry of `expected` is present and
    /// deep-equal in the actual object.
    pub fn to_contain_entries(self, expected: impl Into<Value>) {
        self.apply(Matcher::ToContainEntries(expected.into()));
    }

    /// Spy matcher: the call log is non-empty.
    pub fn to_have_been_called(self) {
        self.apply(Matcher::ToHaveBeenCalled);
    }

    /// Spy matcher: some logged invocation's arguments deep-equal `args`.
    pub fn to_have_been_called_with(self, args: Vec<Value>) {
        self.apply(Matcher::ToHaveBeenCalledWith(args));
    }

    /// Spy matcher: the call log length equals `count`.
    pub fn to_have_been_called_times(self, count: usize) {
        self.apply(Matcher::ToHaveBeenCalledTimes(count));
    }
}

#[cfg(test)]
#[path = "expect_tests.rs"]
mod tests;
