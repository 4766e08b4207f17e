// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit tests for matcher evaluation.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use yare::parameterized;

use super::*;
use crate::spy::Spy;
use crate::{array, object, values};

fn value(v: impl Into<Value>) -> Subject {
    Subject::Value(v.into())
}

fn passes(matcher: Matcher, subject: &Subject) -> bool {
    matcher.evaluate(subject, false).passed
}

#[test]
fn to_be_is_strict_on_primitives() {
    assert!(passes(Matcher::ToBe(Value::from(2)), &value(2)));
    assert!(!passes(Matcher::ToBe(Value::from(2)), &value(3)));
    assert!(!passes(Matcher::ToBe(Value::from(0)), &value(false)));
}

#[test]
fn to_be_is_identity_on_arrays() {
    let shared = array![1, 2, 3];
    assert!(passes(Matcher::ToBe(shared.clone()), &Subject::Value(shared.clone())));
    // Structurally equal but a distinct reference.
    assert!(!passes(Matcher::ToBe(array![1, 2, 3]), &Subject::Value(shared)));
}

#[test]
fn to_equal_is_deep() {
    assert!(passes(Matcher::ToEqual(array![1, 2, 3]), &value(array![1, 2, 3])));
    assert!(!passes(Matcher::ToEqual(array![1, 2, 3]), &value(array![1, 2])));
    assert!(passes(
        Matcher::ToEqual(object! { "name" => "Elie" }),
        &value(object! { "name" => "Elie" }),
    ));
}

#[parameterized(
    precision_two_passes = { 3.1415, 3.14, 2, true },
    precision_three_fails = { 3.1415, 3.14, 3, false },
    exact = { 1.0, 1.0, 8, true },
    negative_precision = { 120.0, 100.0, -2, true },
)]
fn to_be_close_to(actual: f64, expected: f64, precision: i32, should_pass: bool) {
    let matcher = Matcher::ToBeCloseTo { expected, precision };
    assert_eq!(passes(matcher, &value(actual)), should_pass);
}

#[test]
fn to_be_close_to_requires_a_number() {
    let matcher = Matcher::ToBeCloseTo { expected: 3.14, precision: 2 };
    assert!(!passes(matcher, &value("3.14")));
}

#[test]
fn truthy_and_falsy() {
    assert!(passes(Matcher::ToBeFalsy, &value(0)));
    assert!(passes(Matcher::ToBeTruthy, &value(array![])));
    assert!(!passes(Matcher::ToBeTruthy, &value("")));
}

#[test]
fn to_be_defined() {
    assert!(passes(Matcher::ToBeDefined, &value(0)));
    assert!(passes(Matcher::ToBeDefined, &Subject::Value(Value::Null)));
    assert!(!passes(Matcher::ToBeDefined, &Subject::Value(Value::Undefined)));
}

#[test]
fn ordering_matchers() {
    assert!(passes(Matcher::ToBeGreaterThan(1.0), &value(2)));
    assert!(!passes(Matcher::ToBeGreaterThan(2.0), &value(2)));
    assert!(passes(Matcher::ToBeLessThan(3.0), &value(2)));
    assert!(!passes(Matcher::ToBeLessThan(3.0), &value("2")));
}

#[test]
fn to_contain_searches_arrays_deeply() {
    assert!(passes(Matcher::ToContain(Value::from(1)), &value(array![1, 2, 3])));
    assert!(!passes(Matcher::ToContain(Value::from(4)), &value(array![1, 2, 3])));
    assert!(passes(
        Matcher::ToContain(object! { "a" => 1 }),
        &value(Value::array([object! { "a" => 1 }])),
    ));
}

#[test]
fn to_contain_searches_strings_as_substrings() {
    assert!(passes(Matcher::ToContain(Value::from("struct")), &value("instructor")));
    assert!(!passes(Matcher::ToContain(Value::from("z")), &value("instructor")));
}

#[test]
fn to_be_any_checks_kind() {
    assert!(passes(Matcher::ToBeAny(Kind::Array), &value(array![])));
    assert!(passes(Matcher::ToBeAny(Kind::Str), &value("s")));
    assert!(!passes(Matcher::ToBeAny(Kind::Array), &value(object! {})));
}

#[test]
fn to_contain_entries_checks_a_subset_of_keys() {
    let actual = object! { "name" => "Elie", "job" => "Instructor" };
    assert!(passes(Matcher::ToContainEntries(object! { "name" => "Elie" }), &value(actual.clone())));
    assert!(!passes(Matcher::ToContainEntries(object! { "name" => "Matt" }), &value(actual.clone())));
    assert!(!passes(Matcher::ToContainEntries(object! { "age" => 30 }), &value(actual)));
}

#[test]
fn spy_matchers_read_the_call_log() {
    let spy = Spy::new("sample");
    assert!(!passes(Matcher::ToHaveBeenCalled, &Subject::Spy(spy.clone())));

    spy.call(&values![1, 2, 3]);
    spy.call(&values![4, 5, 6]);

    let subject = Subject::Spy(spy);
    assert!(passes(Matcher::ToHaveBeenCalled, &subject));
    assert!(passes(Matcher::ToHaveBeenCalledWith(values![1, 2, 3]), &subject));
    assert!(passes(Matcher::ToHaveBeenCalledWith(values![4, 5, 6]), &subject));
    assert!(!passes(Matcher::ToHaveBeenCalledWith(values![7]), &subject));
    assert!(passes(Matcher::ToHaveBeenCalledTimes(2), &subject));
    assert!(!passes(Matcher::ToHaveBeenCalledTimes(1), &subject));
}

#[test]
fn spy_matchers_never_pass_on_plain_values() {
    assert!(!passes(Matcher::ToHaveBeenCalled, &value(1)));
}

#[test]
fn value_matchers_never_pass_on_spies() {
    let spy = Spy::new("s");
    assert!(!passes(Matcher::ToBeTruthy, &Subject::Spy(spy)));
}

#[test]
fn negation_flips_the_result() {
    let result = Matcher::ToBe(Value::from(2)).evaluate(&value(2), true);
    assert!(!result.passed);
    assert_eq!(result.message, "expected 2 not to be 2");

    let result = Matcher::ToHaveBeenCalled.evaluate(&Subject::Spy(Spy::new("sample")), true);
    assert!(result.passed);
    assert!(result.message.is_empty());
}

#[test]
fn failure_messages_name_the_comparison() {
    let result = Matcher::ToEqual(array![1, 2]).evaluate(&value(array![1]), false);
    assert!(!result.passed);
    assert_eq!(result.message, "expected [1] to equal [1, 2]");
    assert_eq!(result.matcher, "to_equal");
    assert_eq!(result.actual, "[1]");
    assert_eq!(result.expected, "[1, 2]");
}
