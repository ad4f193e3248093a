//! A fully resolved compilation unit.

use crate::arena::DescriptorArena;
use crate::binding::BindingContext;
use crate::error::ProgramError;
use jetjs_ast::{NodeArena, NodeIndex};
use serde::{Deserialize, Serialize};

/// Source nodes, declarations and bindings of one compilation unit.
///
/// `roots` lists the top-level statements in source order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ResolvedProgram {
    pub nodes: NodeArena,
    pub descriptors: DescriptorArena,
    #[serde(default)]
    pub bindings: BindingContext,
    #[serde(default)]
    pub roots: Vec<NodeIndex>,
}

impl ResolvedProgram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a program serialized as JSON.
    pub fn from_json(text: &str) -> Result<Self, ProgramError> {
        let program: Self = serde_json::from_str(text)?;
        program.validate()?;
        tracing::debug!(
            nodes = program.nodes.len(),
            descriptors = program.descriptors.len(),
            roots = program.roots.len(),
            "loaded resolved program"
        );
        Ok(program)
    }

    pub fn to_json_pretty(&self) -> Result<String, ProgramError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every root and binding must point at existing nodes and descriptors.
    pub fn validate(&self) -> Result<(), ProgramError> {
        if let Some(root) = self.roots.iter().find(|r| self.nodes.get(**r).is_none()) {
            return Err(ProgramError::DanglingNode(*root));
        }
        for (node, descriptor) in self.bindings.all_bindings() {
            if self.nodes.get(node).is_none() {
                return Err(ProgramError::DanglingNode(node));
            }
            if self.descriptors.get(descriptor).is_none() {
                return Err(ProgramError::DanglingBinding { node, descriptor });
            }
        }
        Ok(())
    }
}
