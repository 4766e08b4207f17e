// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Virtual clock for timer-driven specs.
//!
//! Registered callbacks never run against real time; [`Clock::tick`]
//! advances a virtual tick counter and fires everything that comes due,
//! synchronously, in due-tick order (ties in registration order). A
//! repeating timer reschedules itself at `due + interval` after firing.
//!
//! A [`Clock`] handle is a cheap clone over shared state, so a hook can
//! install it while the case body schedules and ticks.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{Error, Result};

/// Identifies a scheduled timer, for [`Clock::clear_timer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerId(u64);

struct Timer {
    id: TimerId,
    due: u64,
    /// `Some(interval)` for repeating timers.
    every: Option<u64>,
    seq: u64,
    callback: Rc<dyn Fn()>,
}

#[derive(Default)]
struct ClockState {
    now: u64,
    next_id: u64,
    next_seq: u64,
    timers: Vec<Timer>,
}

/// A handle on the virtual clock.
#[derive(Clone, Default)]
pub struct Clock {
    state: Rc<RefCell<ClockState>>,
}

impl Clock {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Current virtual tick.
    pub fn now(&self) -> u64 {
        self.state.borrow().now
    }

    /// Schedule `callback` to fire once, `delay` ticks from now.
    pub fn set_timeout(&self, callback: impl Fn() + 'static, delay: u64) -> TimerId {
        self.schedule(Rc::new(callback), delay, None)
    }

    /// Schedule `callback` to fire every `interval` ticks. A zero interval
    /// would fire forever within a single tick and is rejected.
    pub fn set_interval(&self, callback: impl Fn() + 'static, interval: u64) -> Result<TimerId> {
        if interval == 0 {
            return Err(Error::State("interval of 0 ticks".into()));
        }
        Ok(self.schedule(Rc::new(callback), interval, Some(interval)))
    }

    fn schedule(&self, callback: Rc<dyn Fn()>, delay: u64, every: Option<u64>) -> TimerId {
        let mut state = self.state.borrow_mut();
        let id = TimerId(state.next_id);
        state.next_id += 1;
        let seq = state.next_seq;
        state.next_seq += 1;
        let due = state.now + delay;
        state.timers.push(Timer { id, due, every, seq, callback });
        id
    }

    /// Cancel a pending timer. Unknown ids are ignored.
    pub fn clear_timer(&self, id: TimerId) {
        self.state.borrow_mut().timers.retain(|t| t.id != id);
    }

    /// Advance virtual time by `ticks`, firing every callback that comes
    /// due within the window, in due order. Callbacks may schedule or
    /// clear timers; newly scheduled timers fire in the same `tick` call
    /// if they come due within the window.
    pub fn tick(&self, ticks: u64) {
        let target = self.state.borrow().now + ticks;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let idx = state
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.seq))
                    .map(|(i, _)| i);
                match idx {
                    Some(i) => {
                        let due = state.timers[i].due;
                        let every = state.timers[i].every;
                        let callback = Rc::clone(&state.timers[i].callback);
                        match every {
                            Some(interval) => {
                                // Reschedule before firing; ties at the new
                                // due tick rank behind existing timers.
                                let seq = state.next_seq;
                                state.next_seq += 1;
                                let timer = &mut state.timers[i];
                                timer.due = due + interval;
                                timer.seq = seq;
                            }
                            None => {
                                state.timers.remove(i);
                            }
                        }
                        state.now = due;
                        Some(callback)
                    }
                    None => None,
                }
            };
            match next {
                // Fire outside the borrow; the callback may use the clock.
                Some(callback) => callback(),
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
        tracing::debug!(now = target, "virtual clock advanced");
    }

    /// Number of timers still pending.
    pub fn pending(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Drop all pending timers. Called on uninstall.
    pub(crate) fn discard_pending(&self) {
        self.state.borrow_mut().timers.clear();
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
