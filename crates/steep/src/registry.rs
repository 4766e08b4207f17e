// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite declaration: nested groups, cases, and lifecycle hooks.
//!
//! The [`Registry`] keeps a group-declaration stack. `declare_group` pushes
//! a group, runs the builder closure against the registry, and pops; cases
//! and hooks attach to the top of the stack. The ergonomic `describe`/`it`
//! methods wrap the low-level `declare_*` contract, which reports
//! [`Error::Structure`] when a case or hook is declared outside any group.
//!
//! Groups own their children exclusively. There are no parent
//! back-references; the runner tracks the ancestor chain during traversal.

use crate::context::ExecContext;
use crate::error::{Error, Result};
use crate::runner::Done;

/// A hook closure. Hooks are `Fn` and re-invoked for every case they apply
/// to; per-case mutable state lives in captured `Rc<RefCell<_>>` cells.
pub type HookFn = Box<dyn Fn(&mut ExecContext)>;

/// The executable body of a spec case.
pub enum CaseBody {
    /// Runs to completion on the runner thread.
    Sync(Box<dyn Fn(&mut ExecContext)>),
    /// Receives a [`Done`] signal; the runner waits for it (or times out)
    /// before moving on.
    Async(Box<dyn Fn(&mut ExecContext, Done)>),
}

/// Lifecycle hook kinds accepted by [`Registry::declare_hook`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HookKind {
    BeforeEach,
    AfterEach,
    BeforeAll,
    AfterAll,
}

/// Hook lists for one group, in declaration order.
#[derive(Default)]
pub struct Hooks {
    pub before_each: Vec<HookFn>,
    pub after_each: Vec<HookFn>,
    pub before_all: Vec<HookFn>,
    pub after_all: Vec<HookFn>,
}

/// A single named spec. A missing body marks the case inherently pending.
pub struct SpecCase {
    pub name: String,
    pub body: Option<CaseBody>,
    pub excluded: bool,
}

/// A child of a group, in declaration order.
pub enum Node {
    Group(SpecGroup),
    Case(SpecCase),
}

/// A named collection of cases and nested groups with its own hooks.
pub struct SpecGroup {
    pub name: String,
    pub children: Vec<Node>,
    pub hooks: Hooks,
    pub excluded: bool,
}

impl SpecGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), children: Vec::new(), hooks: Hooks::default(), excluded: false }
    }
}

/// Collects declarations into a tree of root groups.
#[derive(Default)]
pub struct Registry {
    stack: Vec<SpecGroup>,
    roots: Vec<SpecGroup>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the registry, yielding the declared root groups.
    pub fn into_roots(self) -> Vec<SpecGroup> {
        self.roots
    }

    /// Create a group, run `builder` with it on top of the stack, then pop
    /// and attach it to the enclosing group (or the root list).
    pub fn declare_group(&mut self, name: impl Into<String>, builder: impl FnOnce(&mut Registry)) {
        self.declare_group_inner(name, false, builder);
    }

    /// Like [`declare_group`](Self::declare_group), but the group and
    /// everything in it is disabled: never executed, reported as pending.
    pub fn declare_excluded_group(
        &mut self,
        name: impl Into<String>,
        builder: impl FnOnce(&mut Registry),
    ) {
        self.declare_group_inner(name, true, builder);
    }

    fn declare_group_inner(
        &mut self,
        name: impl Into<String>,
        excluded: bool,
        builder: impl FnOnce(&mut Registry),
    ) {
        let mut group = SpecGroup::new(name);
        group.excluded = excluded;
        self.stack.push(group);
        builder(self);
        if let Some(group) = self.stack.pop() {
            match self.stack.last_mut() {
                Some(parent) => parent.children.push(Node::Group(group)),
                None => self.roots.push(group),
            }
        }
    }

    /// Append a case to the current group. `body: None` declares an
    /// inherently pending case.
    pub fn declare_case(&mut self, name: impl Into<String>, body: Option<CaseBody>) -> Result<()> {
        self.declare_case_inner(name, body, false)
    }

    /// Append a disabled case (`xit`): never executed, reported as pending.
    pub fn declare_excluded_case(&mut self, name: impl Into<String>, body: CaseBody) -> Result<()> {
        self.declare_case_inner(name, Some(body), true)
    }

    fn declare_case_inner(
        &mut self,
        name: impl Into<String>,
        body: Option<CaseBody>,
        excluded: bool,
    ) -> Result<()> {
        let name = name.into();
        let group = self
            .stack
            .last_mut()
            .ok_or_else(|| Error::Structure(format!("case {name:?} declared outside any group")))?;
        group.children.push(Node::Case(SpecCase { name, body, excluded }));
        Ok(())
    }

    /// Append a hook to the current group's list for `kind`.
    pub fn declare_hook(&mut self, kind: HookKind, hook: HookFn) -> Result<()> {
        let group = self.stack.last_mut().ok_or_else(|| {
            Error::Structure(format!("{kind:?} hook declared outside any group"))
        })?;
        let list = match kind {
            HookKind::BeforeEach => &mut group.hooks.before_each,
            HookKind::AfterEach => &mut group.hooks.after_each,
            HookKind::BeforeAll => &mut group.hooks.before_all,
            HookKind::AfterAll => &mut group.hooks.after_all,
        };
        list.push(hook);
        Ok(())
    }

    // Ergonomic layer. Structure errors abort only the offending
    // declaration: they are logged and the declaration is dropped.

    pub fn describe(&mut self, name: impl Into<String>, builder: impl FnOnce(&mut Registry)) {
        self.declare_group(name, builder);
    }

    pub fn xdescribe(&mut self, name: impl Into<String>, builder: impl FnOnce(&mut Registry)) {
        self.declare_excluded_group(name, builder);
    }

    pub fn it(&mut self, name: impl Into<String>, body: impl Fn(&mut ExecContext) + 'static) {
        log_misuse(self.declare_case_inner(name, Some(CaseBody::Sync(Box::new(body))), false));
    }

    /// An `it` with no body: inherently pending.
    pub fn it_pending(&mut self, name: impl Into<String>) {
        log_misuse(self.declare_case_inner(name, None, false));
    }

    /// An async case; the body receives a [`Done`] completion signal.
    pub fn it_async(
        &mut self,
        name: impl Into<String>,
        body: impl Fn(&mut ExecContext, Done) + 'static,
    ) {
        log_misuse(self.declare_case_inner(name, Some(CaseBody::Async(Box::new(body))), false));
    }

    /// A disabled case: never executed, reported as pending.
    pub fn xit(&mut self, name: impl Into<String>, body: impl Fn(&mut ExecContext) + 'static) {
        log_misuse(self.declare_case_inner(name, Some(CaseBody::Sync(Box::new(body))), true));
    }

    pub fn before_each(&mut self, hook: impl Fn(&mut ExecContext) + 'static) {
        log_misuse(self.declare_hook(HookKind::BeforeEach, Box::new(hook)));
    }

    pub fn after_each(&mut self, hook: impl Fn(&mut ExecContext) + 'static) {
        log_misuse(self.declare_hook(HookKind::AfterEach, Box::new(hook)));
    }

    pub fn before_all(&mut self, hook: impl Fn(&mut ExecContext) + 'static) {
        log_misuse(self.declare_hook(HookKind::BeforeAll, Box::new(hook)));
    }

    pub fn after_all(&mut self, hook: impl Fn(&mut ExecContext) + 'static) {
        log_misuse(self.declare_hook(HookKind::AfterAll, Box::new(hook)));
    }
}

fn log_misuse(result: Result<()>) {
    if let Err(err) = result {
        tracing::warn!(%err, "ignoring malformed declaration");
    }
}

/// Declare a root group and return it, ready to hand to the runner.
pub fn describe(name: impl Into<String>, builder: impl FnOnce(&mut Registry)) -> SpecGroup {
    let name = name.into();
    let mut registry = Registry::new();
    registry.declare_group(name.clone(), builder);
    registry.into_roots().pop().unwrap_or_else(|| SpecGroup::new(name))
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
