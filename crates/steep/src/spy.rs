// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recording spies.
//!
//! A [`Spy`] is a callable wrapper the test author injects at the call site
//! in place of a real function. Unlike the classic monkey-patching spy, it
//! never mutates anything it wraps: the original callable is moved (or
//! referenced) into the spy, stays untouched, and is trivially "restored"
//! by dropping the spy. Handles are cheap clones over shared state, so the
//! code under test can call one handle while a matcher reads another.

use std::cell::RefCell;
use std::rc::Rc;

use crate::value::Value;

/// The wrapped callable type.
pub type NativeFn = Box<dyn Fn(&[Value]) -> Value>;

/// One recorded invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct SpyCall {
    pub args: Vec<Value>,
    pub returned: Value,
}

enum Mode {
    /// Never invoke the original. Returns `Undefined` unless a canned
    /// return value is configured.
    Stub,
    /// Invoke the original and record its real return value.
    CallThrough,
}

struct SpyState {
    name: String,
    calls: Vec<SpyCall>,
    mode: Mode,
    canned: Option<Value>,
    original: Option<NativeFn>,
}

/// A recording wrapper around a callable.
#[derive(Clone)]
pub struct Spy {
    state: Rc<RefCell<SpyState>>,
}

impl Spy {
    /// A bare spy with no implementation behind it.
    pub fn new(name: impl Into<String>) -> Self {
        Self::build(name, None)
    }

    /// A spy wrapping `original`. Stub mode by default; switch with
    /// [`and_call_through`](Self::and_call_through).
    pub fn wrapping(name: impl Into<String>, original: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Self::build(name, Some(Box::new(original) as NativeFn))
    }

    fn build(name: impl Into<String>, original: Option<NativeFn>) -> Self {
        Self {
            state: Rc::new(RefCell::new(SpyState {
                name: name.into(),
                calls: Vec::new(),
                mode: Mode::Stub,
                canned: None,
                original,
            })),
        }
    }

    /// Switch to passthrough: calls invoke the original and record its
    /// return value.
    pub fn and_call_through(self) -> Self {
        self.state.borrow_mut().mode = Mode::CallThrough;
        self
    }

    /// Configure the value stub-mode calls return.
    pub fn and_return_value(self, value: impl Into<Value>) -> Self {
        self.state.borrow_mut().canned = Some(value.into());
        self
    }

    /// Invoke the spy, appending to the call log.
    pub fn call(&self, args: &[Value]) -> Value {
        // Take the original out for the duration of the call so the state
        // cell is not borrowed while user code runs.
        let (call_through, canned, original) = {
            let mut state = self.state.borrow_mut();
            (
                matches!(state.mode, Mode::CallThrough),
                state.canned.clone(),
                state.original.take(),
            )
        };
        let returned = match (&original, call_through) {
            (Some(f), true) => f(args),
            _ => canned.unwrap_or(Value::Undefined),
        };
        let mut state = self.state.borrow_mut();
        if state.original.is_none() {
            state.original = original;
        }
        state.calls.push(SpyCall { args: args.to_vec(), returned: returned.clone() });
        returned
    }

    pub fn name(&self) -> String {
        self.state.borrow().name.clone()
    }

    /// True if the spy has been called at least once.
    pub fn called(&self) -> bool {
        !self.state.borrow().calls.is_empty()
    }

    /// Number of recorded invocations.
    pub fn call_count(&self) -> usize {
        self.state.borrow().calls.len()
    }

    /// Snapshot of the call log, in invocation order.
    pub fn calls(&self) -> Vec<SpyCall> {
        self.state.borrow().calls.clone()
    }

    /// The first recorded invocation, if any.
    pub fn first_call(&self) -> Option<SpyCall> {
        self.state.borrow().calls.first().cloned()
    }

    /// Clear the call log; mode and canned return value are kept.
    pub fn reset(&self) {
        self.state.borrow_mut().calls.clear();
    }

    /// Recover the wrapped original. Fails (returning `None`) while other
    /// handles to this spy are alive.
    pub fn into_original(self) -> Option<NativeFn> {
        Rc::try_unwrap(self.state).ok().and_then(|cell| cell.into_inner().original)
    }
}

#[cfg(test)]
#[path = "spy_tests.rs"]
mod tests;
