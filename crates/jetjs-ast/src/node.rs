//! Source expression nodes.

use crate::operation::OperationToken;
use serde::{Deserialize, Serialize};

/// Index of a node in a `NodeArena`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Compile-time constant appearing in source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Constant {
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Null,
}

/// One argument of a call. The expression is optional because recovery in
/// the upstream parser can leave an argument slot empty; lowering such a call
/// is a contract violation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueArgument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub expression: Option<NodeIndex>,
}

impl ValueArgument {
    pub const fn positional(expression: NodeIndex) -> Self {
        Self {
            name: None,
            expression: Some(expression),
        }
    }

    pub fn argument_expression(&self) -> Option<NodeIndex> {
        self.expression
    }
}

/// A resolved source expression or declaration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    /// `foo`
    SimpleName { name: String },

    /// `this`
    This,

    /// `42`, `"text"`, `true`, `null`
    Constant(Constant),

    /// `receiver.selector` where the selector is a name or a call.
    DotQualified {
        receiver: NodeIndex,
        selector: NodeIndex,
    },

    /// `receiver?.selector`
    SafeQualified {
        receiver: NodeIndex,
        selector: NodeIndex,
    },

    /// `callee(arguments)`; the callee is a simple name.
    Call {
        callee: NodeIndex,
        arguments: Vec<ValueArgument>,
    },

    /// `left op right`
    Binary {
        left: NodeIndex,
        operation: OperationToken,
        right: Option<NodeIndex>,
    },

    /// `op base`
    Prefix {
        operation: OperationToken,
        base: Option<NodeIndex>,
    },

    /// `base op`
    Postfix {
        operation: OperationToken,
        base: Option<NodeIndex>,
    },

    /// `(expression)`
    Parenthesized { expression: Option<NodeIndex> },

    /// `val name = initializer` / `var name = initializer`
    Property {
        name: String,
        #[serde(default)]
        mutable: bool,
        initializer: Option<NodeIndex>,
    },
}

impl Node {
    /// Binary, prefix and postfix expressions resolve to an operator function.
    pub const fn is_operation_expression(&self) -> bool {
        matches!(
            self,
            Self::Binary { .. } | Self::Prefix { .. } | Self::Postfix { .. }
        )
    }

    pub const fn operation_token(&self) -> Option<OperationToken> {
        match self {
            Self::Binary { operation, .. }
            | Self::Prefix { operation, .. }
            | Self::Postfix { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    pub const fn is_declaration(&self) -> bool {
        matches!(self, Self::Property { .. })
    }
}
