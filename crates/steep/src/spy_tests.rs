// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit tests for spies.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::values;

fn add(args: &[Value]) -> Value {
    let sum: f64 = args.iter().filter_map(Value::as_number).sum();
    Value::Number(sum)
}

#[test]
fn stub_spy_returns_undefined() {
    let spy = Spy::new("sample");
    assert_eq!(spy.call(&values![1, 2, 3]), Value::Undefined);
}

#[test]
fn stub_mode_never_invokes_the_original() {
    let spy = Spy::wrapping("add", add);
    assert_eq!(spy.call(&values![1, 2, 3]), Value::Undefined);
    assert_eq!(spy.call_count(), 1);
}

#[test]
fn call_through_records_the_real_return_value() {
    let spy = Spy::wrapping("second_add", add).and_call_through();
    let result = spy.call(&values![1, 2, 3]);
    assert_eq!(result, Value::from(6));
    assert_eq!(spy.calls()[0].returned, Value::from(6));
}

#[test]
fn canned_return_value() {
    let spy = Spy::new("stub").and_return_value(42);
    assert_eq!(spy.call(&[]), Value::from(42));
}

#[test]
fn call_log_keeps_invocation_order() {
    let spy = Spy::new("sample");
    spy.call(&values![1, 2, 3]);
    spy.call(&values![4, 5, 6]);

    assert_eq!(spy.call_count(), 2);
    assert!(spy.called());
    let first = spy.first_call().unwrap();
    assert_eq!(first.args, values![1, 2, 3]);
    assert_eq!(spy.calls()[1].args, values![4, 5, 6]);
}

#[test]
fn clones_share_one_log() {
    let spy = Spy::new("shared");
    let handle = spy.clone();
    handle.call(&values![1]);
    assert_eq!(spy.call_count(), 1);
}

#[test]
fn reset_clears_the_log_but_keeps_the_mode() {
    let spy = Spy::wrapping("third_add", add).and_call_through();
    spy.call(&values![1, 2, 3]);
    spy.reset();
    assert!(!spy.called());
    assert_eq!(spy.call(&values![2, 2, 2]), Value::from(6));
}

#[test]
fn into_original_recovers_the_wrapped_callable() {
    let spy = Spy::wrapping("add", add);
    spy.call(&values![1, 2, 3]);
    let original = spy.into_original().unwrap();
    // The pre-spy implementation, not the stub.
    assert_eq!(original(&values![1, 2, 3]), Value::from(6));
}

#[test]
fn into_original_fails_while_other_handles_exist() {
    let spy = Spy::wrapping("add", add);
    let _handle = spy.clone();
    assert!(spy.into_original().is_none());
}

#[test]
fn the_original_stays_callable_outside_the_spy() {
    // Injection never patches anything: the author's own reference to the
    // real function is unaffected by the spy's existence or death.
    let spy = Spy::wrapping("add", add);
    spy.call(&values![9]);
    drop(spy);
    assert_eq!(add(&values![1, 2, 3]), Value::from(6));
}
