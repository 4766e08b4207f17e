// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for declaration, execution, and clock misuse.
//!
//! Assertion failures are deliberately *not* an error variant: a failed
//! matcher is recorded on its spec case and the run continues. The variants
//! here cover framework misuse and the async timeout.

/// Errors surfaced by the declaration API, execution context, and clock.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A case or hook was declared outside any group.
    #[error("malformed declaration: {0}")]
    Structure(String),

    /// An expectation was recorded while no spec case was executing.
    #[error("no active spec case: {0}")]
    Context(String),

    /// Clock install/uninstall called in the wrong state.
    #[error("clock state: {0}")]
    State(String),

    /// An async case never signaled completion.
    #[error("spec did not signal completion within {0}ms")]
    Timeout(u64),
}

pub type Result<T> = std::result::Result<T, Error>;
