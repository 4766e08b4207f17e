// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The closed set of comparison matchers.
//!
//! Each [`Matcher`] variant carries its expected operand(s) and knows how
//! to check itself against a [`Subject`]. Evaluation is immediate and
//! produces an [`ExpectationResult`]; a failed matcher is recorded, never
//! thrown, so the rest of the case body keeps running.

use serde::Serialize;

use crate::expect::Subject;
use crate::value::{Kind, Value};

/// One evaluated expectation, recorded on its spec case.
#[derive(Clone, Debug, Serialize)]
pub struct ExpectationResult {
    /// Matcher name, e.g. `to_be`.
    pub matcher: String,
    /// Rendering of the actual value (or spy) under test.
    pub actual: String,
    /// Rendering of the expected operand(s), empty for nullary matchers.
    pub expected: String,
    pub passed: bool,
    /// Human-readable failure message; empty when the expectation passed.
    pub message: String,
}

/// A named comparison rule with its expected operands.
#[derive(Clone, Debug)]
pub enum Matcher {
    /// Strict comparison: type-and-value for primitives, reference
    /// identity for arrays and objects.
    ToBe(Value),
    /// Deep structural equality.
    ToEqual(Value),
    /// `|actual - expected| < 0.5 * 10^-precision`.
    ToBeCloseTo { expected: f64, precision: i32 },
    ToBeTruthy,
    ToBeFalsy,
    ToBeDefined,
    ToBeGreaterThan(f64),
    ToBeLessThan(f64),
    /// Arrays: some element deep-equals the operand. Strings: substring.
    ToContain(Value),
    /// Type/shape membership.
    ToBeAny(Kind),
    /// Every entry of the operand object is present and deep-equal.
    ToContainEntries(Value),
    ToHaveBeenCalled,
    /// Some logged invocation's arguments deep-equal the operand list.
    ToHaveBeenCalledWith(Vec<Value>),
    ToHaveBeenCalledTimes(usize),
}

impl Matcher {
    pub fn name(&self) -> &'static str {
        match self {
            Matcher::ToBe(_) => "to_be",
            Matcher::ToEqual(_) => "to_equal",
            Matcher::ToBeCloseTo { .. } => "to_be_close_to",
            Matcher::ToBeTruthy => "to_be_truthy",
            Matcher::ToBeFalsy => "to_be_falsy",
            Matcher::ToBeDefined => "to_be_defined",
            Matcher::ToBeGreaterThan(_) => "to_be_greater_than",
            Matcher::ToBeLessThan(_) => "to_be_less_than",
            Matcher::ToContain(_) => "to_contain",
            Matcher::ToBeAny(_) => "to_be_any",
            Matcher::ToContainEntries(_) => "to_contain_entries",
            Matcher::ToHaveBeenCalled => "to_have_been_called",
            Matcher::ToHaveBeenCalledWith(_) => "to_have_been_called_with",
            Matcher::ToHaveBeenCalledTimes(_) => "to_have_been_called_times",
        }
    }

    /// Evaluate against `subject`, applying negation, and produce the
    /// record for the current case.
    pub fn evaluate(&self, subject: &Subject, negated: bool) -> ExpectationResult {
        let raw = self.check(subject);
        let passed = raw != negated;
        let message = if passed {
            String::new()
        } else {
            let not = if negated { "not " } else { "" };
            format!("expected {} {not}{}", subject.render(), self.describe())
        };
        ExpectationResult {
            matcher: self.name().to_string(),
            actual: subject.render(),
            expected: self.expected_operands(),
            passed,
            message,
        }
    }

    fn check(&self, subject: &Subject) -> bool {
        match (self, subject) {
            (Matcher::ToBe(expected), Subject::Value(actual)) => actual.same_ref(expected),
            (Matcher::ToEqual(expected), Subject::Value(actual)) => actual == expected,
            (Matcher::ToBeCloseTo { expected, precision }, Subject::Value(actual)) => actual
                .as_number()
                .is_some_and(|a| (a - expected).abs() < 0.5 * 10f64.powi(-precision)),
            (Matcher::ToBeTruthy, Subject::Value(actual)) => actual.truthy(),
            (Matcher::ToBeFalsy, Subject::Value(actual)) => !actual.truthy(),
            (Matcher::ToBeDefined, Subject::Value(actual)) => {
                !matches!(actual, Value::Undefined)
            }
            (Matcher::ToBeGreaterThan(bound), Subject::Value(actual)) => {
                actual.as_number().is_some_and(|a| a > *bound)
            }
            (Matcher::ToBeLessThan(bound), Subject::Value(actual)) => {
                actual.as_number().is_some_and(|a| a < *bound)
            }
            (Matcher::ToContain(needle), Subject::Value(actual)) => match (actual, needle) {
                (Value::Array(items), _) => items.iter().any(|item| item == needle),
                (Value::Str(hay), Value::Str(sub)) => hay.contains(sub.as_str()),
                _ => false,
            },
            (Matcher::ToBeAny(kind), Subject::Value(actual)) => actual.kind() == *kind,
            (Matcher::ToContainEntries(expected), Subject::Value(actual)) => {
                match (actual, expected) {
                    (Value::Object(have), Value::Object(want)) => {
                        want.iter().all(|(k, v)| have.get(k) == Some(v))
                    }
                    _ => false,
                }
            }
            (Matcher::ToHaveBeenCalled, Subject::Spy(spy)) => spy.called(),
            (Matcher::ToHaveBeenCalledWith(args), Subject::Spy(spy)) => {
                spy.calls().iter().any(|call| call.args == *args)
            }
            (Matcher::ToHaveBeenCalledTimes(n), Subject::Spy(spy)) => spy.call_count() == *n,
            // Spy matchers on plain values, or value matchers on spies,
            // never pass.
            _ => false,
        }
    }

    fn describe(&self) -> String {
        match self {
            Matcher::ToBe(v) => format!("to be {v}"),
            Matcher::ToEqual(v) => format!("to equal {v}"),
            Matcher::ToBeCloseTo { expected, precision } => {
                format!("to be close to {expected} (precision {precision})")
            }
            Matcher::ToBeTruthy => "to be truthy".to_string(),
            Matcher::ToBeFalsy => "to be falsy".to_string(),
            Matcher::ToBeDefined => "to be defined".to_string(),
            Matcher::ToBeGreaterThan(bound) => format!("to be greater than {bound}"),
            Matcher::ToBeLessThan(bound) => format!("to be less than {bound}"),
            Matcher::ToContain(v) => format!("to contain {v}"),
            Matcher::ToBeAny(kind) => format!("to be any {kind}"),
            Matcher::ToContainEntries(v) => format!("to contain entries {v}"),
            Matcher::ToHaveBeenCalled => "to have been called".to_string(),
            Matcher::ToHaveBeenCalledWith(args) => {
                format!("to have been called with {}", render_args(args))
            }
            Matcher::ToHaveBeenCalledTimes(n) => format!("to have been called {n} times"),
        }
    }

    fn expected_operands(&self) -> String {
        match self {
            Matcher::ToBe(v) | Matcher::ToEqual(v) | Matcher::ToContain(v)
            | Matcher::ToContainEntries(v) => v.to_string(),
            Matcher::ToBeCloseTo { expected, precision } => {
                format!("{expected} (precision {precision})")
            }
            Matcher::ToBeTruthy | Matcher::ToBeFalsy | Matcher::ToBeDefined
            | Matcher::ToHaveBeenCalled => String::new(),
            Matcher::ToBeGreaterThan(bound) | Matcher::ToBeLessThan(bound) => bound.to_string(),
            Matcher::ToBeAny(kind) => kind.to_string(),
            Matcher::ToHaveBeenCalledWith(args) => render_args(args),
            Matcher::ToHaveBeenCalledTimes(n) => n.to_string(),
        }
    }
}

fn render_args(args: &[Value]) -> String {
    let rendered: Vec<String> = args.iter().map(ToString::to_string).collect();
    format!("({})", rendered.join(", "))
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
