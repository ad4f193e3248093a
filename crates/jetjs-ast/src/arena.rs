//! `NodeArena` - flat storage for resolved source expressions.

use crate::node::{Constant, Node, NodeIndex, ValueArgument};
use crate::operation::OperationToken;
use serde::{Deserialize, Serialize};

/// Flat, append-only storage of source nodes.
///
/// Children are always added before their parents, so a `NodeIndex` only ever
/// refers backwards.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: NodeIndex) -> Option<&Node> {
        self.nodes.get(idx.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeIndex(i as u32), node))
    }

    pub fn add(&mut self, node: Node) -> NodeIndex {
        let idx = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(node);
        idx
    }

    // =========================================================================
    // Builders
    // =========================================================================

    pub fn add_name(&mut self, name: impl Into<String>) -> NodeIndex {
        self.add(Node::SimpleName { name: name.into() })
    }

    pub fn add_this(&mut self) -> NodeIndex {
        self.add(Node::This)
    }

    pub fn add_constant(&mut self, constant: Constant) -> NodeIndex {
        self.add(Node::Constant(constant))
    }

    pub fn add_int(&mut self, value: i64) -> NodeIndex {
        self.add_constant(Constant::Int(value))
    }

    pub fn add_string(&mut self, value: impl Into<String>) -> NodeIndex {
        self.add_constant(Constant::String(value.into()))
    }

    pub fn add_dot_qualified(&mut self, receiver: NodeIndex, selector: NodeIndex) -> NodeIndex {
        self.add(Node::DotQualified { receiver, selector })
    }

    pub fn add_safe_qualified(&mut self, receiver: NodeIndex, selector: NodeIndex) -> NodeIndex {
        self.add(Node::SafeQualified { receiver, selector })
    }

    /// Adds `callee(args)` with positional arguments, creating the callee name node.
    pub fn add_call(&mut self, callee: impl Into<String>, args: &[NodeIndex]) -> NodeIndex {
        let callee = self.add_name(callee);
        let arguments = args.iter().copied().map(ValueArgument::positional).collect();
        self.add(Node::Call { callee, arguments })
    }

    pub fn add_call_with_arguments(
        &mut self,
        callee: NodeIndex,
        arguments: Vec<ValueArgument>,
    ) -> NodeIndex {
        self.add(Node::Call { callee, arguments })
    }

    pub fn add_binary(
        &mut self,
        left: NodeIndex,
        operation: OperationToken,
        right: NodeIndex,
    ) -> NodeIndex {
        self.add(Node::Binary {
            left,
            operation,
            right: Some(right),
        })
    }

    pub fn add_prefix(&mut self, operation: OperationToken, base: NodeIndex) -> NodeIndex {
        self.add(Node::Prefix {
            operation,
            base: Some(base),
        })
    }

    pub fn add_postfix(&mut self, operation: OperationToken, base: NodeIndex) -> NodeIndex {
        self.add(Node::Postfix {
            operation,
            base: Some(base),
        })
    }

    pub fn add_parenthesized(&mut self, expression: NodeIndex) -> NodeIndex {
        self.add(Node::Parenthesized {
            expression: Some(expression),
        })
    }

    pub fn add_property(
        &mut self,
        name: impl Into<String>,
        mutable: bool,
        initializer: Option<NodeIndex>,
    ) -> NodeIndex {
        self.add(Node::Property {
            name: name.into(),
            mutable,
            initializer,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Text of a `SimpleName` node.
    pub fn name_text(&self, idx: NodeIndex) -> Option<&str> {
        match self.get(idx)? {
            Node::SimpleName { name } => Some(name),
            _ => None,
        }
    }

    /// All identifier texts appearing in the arena (property names included).
    pub fn identifier_texts(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|node| match node {
            Node::SimpleName { name } | Node::Property { name, .. } => Some(name.as_str()),
            _ => None,
        })
    }
}
