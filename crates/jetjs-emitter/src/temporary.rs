//! Temporary variables introduced by lowering.
//!
//! A temporary caches a sub-expression that must be evaluated exactly once
//! but referenced more than once:
//!
//! ```text
//! (_a = f()) !== null && _a !== void 0 ? _a : 0
//! ```
//!
//! The declaration (`var _a;`) is hoisted by the caller that owns the scope.

use crate::ir::IRNode;
use rustc_hash::FxHashSet;

/// A generated binding plus the expression it caches.
#[derive(Debug, Clone, PartialEq)]
pub struct TemporaryVariable {
    name: String,
    value: IRNode,
}

impl TemporaryVariable {
    pub fn new(name: impl Into<String>, value: IRNode) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `_a`
    pub fn reference(&self) -> IRNode {
        IRNode::id(&self.name)
    }

    /// `_a = value`
    pub fn assignment_expression(&self) -> IRNode {
        IRNode::assign(self.reference(), self.value.clone())
    }

    pub fn value(&self) -> &IRNode {
        &self.value
    }
}

/// Allocates temporary names for one lowering scope.
///
/// Names run `_a` .. `_z`, then `_a1` .. `_z1` and so on, skipping every name
/// that already appears in the source program.
#[derive(Debug, Default)]
pub struct TemporaryScope {
    reserved: FxHashSet<String>,
    declared: Vec<String>,
    counter: u32,
}

impl TemporaryScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope that never hands out any of `reserved`.
    pub fn with_reserved<I, S>(reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reserved: reserved.into_iter().map(Into::into).collect(),
            declared: Vec::new(),
            counter: 0,
        }
    }

    /// Get next temporary variable name
    fn next_temp_var(&mut self) -> String {
        loop {
            let letter = (b'a' + (self.counter % 26) as u8) as char;
            let round = self.counter / 26;
            self.counter += 1;
            let name = if round == 0 {
                format!("_{letter}")
            } else {
                format!("_{letter}{round}")
            };
            if !self.reserved.contains(&name) {
                return name;
            }
        }
    }

    /// Declare a fresh temporary caching `value`.
    pub fn declare(&mut self, value: IRNode) -> TemporaryVariable {
        let name = self.next_temp_var();
        tracing::debug!(%name, "declared temporary");
        self.declared.push(name.clone());
        TemporaryVariable::new(name, value)
    }

    pub fn len(&self) -> usize {
        self.declared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }

    /// Drain the names declared so far.
    ///
    /// The counter keeps running so later temporaries never reuse a name that
    /// was already hoisted.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.declared)
    }

    /// `var _a, _b;` for the names declared so far, or `None` when there are none.
    pub fn declaration(&mut self) -> Option<IRNode> {
        let names = self.take();
        if names.is_empty() {
            return None;
        }
        Some(IRNode::VarDeclList(
            names
                .into_iter()
                .map(|name| IRNode::var_decl(name, None))
                .collect(),
        ))
    }
}
