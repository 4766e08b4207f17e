// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A small behavior-driven spec framework.
//!
//! Suites are declared as nested groups of named cases with lifecycle
//! hooks, then handed to a [`Runner`] that executes them strictly
//! sequentially and produces a [`RunReport`]. Expectations evaluate
//! immediately and aggregate on the executing case; a failed matcher never
//! aborts the rest of the case body. Spies record invocations of injected
//! callables, and a virtual [`Clock`] drives timer-based code without real
//! delays.
//!
//! ```
//! use steep::{Runner, describe};
//!
//! let suite = describe("arithmetic", |s| {
//!     s.it("adds", |cx| {
//!         cx.expect(2 + 2).to_be(4);
//!     });
//!
//!     s.it("compares structurally", |cx| {
//!         cx.expect(steep::array![1, 2, 3]).to_equal(steep::array![1, 2, 3]);
//!     });
//! });
//!
//! let report = Runner::default().run(&[suite]);
//! assert!(report.ok());
//! ```

pub mod clock;
pub mod config;
pub mod context;
pub mod error;
pub mod expect;
pub mod matcher;
pub mod registry;
pub mod report;
pub mod runner;
pub mod spy;
pub mod value;

pub use clock::{Clock, TimerId};
pub use config::RunConfig;
pub use context::ExecContext;
pub use error::{Error, Result};
pub use expect::Expectation;
pub use matcher::{ExpectationResult, Matcher};
pub use registry::{Registry, SpecCase, SpecGroup, describe};
pub use report::{CaseReport, JsonFormatter, Outcome, ReportFormatter, RunReport, TextFormatter};
pub use runner::{Done, Runner};
pub use spy::{Spy, SpyCall};
pub use value::{Kind, Value};

/// Run `roots` with the default configuration.
pub fn run(roots: &[SpecGroup]) -> RunReport {
    Runner::default().run(roots)
}
