//! Resolution results keyed by source node.

use crate::descriptor::DescriptorId;
use jetjs_ast::NodeIndex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// What the resolver decided about individual source nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingContext {
    /// Simple names and call callees → referenced declaration.
    #[serde(default)]
    references: FxHashMap<NodeIndex, DescriptorId>,
    /// Operation expressions → operator function they call.
    #[serde(default)]
    operations: FxHashMap<NodeIndex, DescriptorId>,
}

impl BindingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_reference(&mut self, node: NodeIndex, target: DescriptorId) {
        self.references.insert(node, target);
    }

    pub fn record_operation(&mut self, node: NodeIndex, function: DescriptorId) {
        self.operations.insert(node, function);
    }

    pub fn reference_target(&self, node: NodeIndex) -> Option<DescriptorId> {
        self.references.get(&node).copied()
    }

    /// Operator function resolved for an operation expression, if any.
    ///
    /// Built-in operators on primitives (`&&`, `=`, `===`) have none.
    pub fn function_for_operation(&self, node: NodeIndex) -> Option<DescriptorId> {
        self.operations.get(&node).copied()
    }

    pub(crate) fn all_bindings(&self) -> impl Iterator<Item = (NodeIndex, DescriptorId)> + '_ {
        self.references
            .iter()
            .chain(self.operations.iter())
            .map(|(node, descriptor)| (*node, *descriptor))
    }
}
