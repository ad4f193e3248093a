//! Translation context - state owned by one lowering pass.

use crate::error::LoweringError;
use crate::intrinsics::IntrinsicRegistry;
use crate::ir::IRNode;
use crate::temporary::{TemporaryScope, TemporaryVariable};
use jetjs_ast::NodeArena;
use jetjs_common::limits::MAX_EXPRESSION_DEPTH;
use jetjs_descriptors::{
    BindingContext, Descriptor, DescriptorArena, DescriptorId, DescriptorKind, ResolvedProgram,
};

/// Prefix of backing fields of class properties (`this.$x`).
pub const BACKING_FIELD_PREFIX: &str = "$";

/// Read-only views of the resolved program plus the mutable state of the
/// current lowering scope (temporaries, recursion depth).
pub struct TranslationContext<'a> {
    program: &'a ResolvedProgram,
    intrinsics: &'a IntrinsicRegistry,
    temporaries: TemporaryScope,
    depth: u32,
}

impl<'a> TranslationContext<'a> {
    /// Context whose temporaries never collide with a name of `program`.
    pub fn new(program: &'a ResolvedProgram, intrinsics: &'a IntrinsicRegistry) -> Self {
        let reserved = program
            .nodes
            .identifier_texts()
            .chain(program.descriptors.iter().map(|(_, d)| d.name.as_str()));
        Self {
            program,
            intrinsics,
            temporaries: TemporaryScope::with_reserved(reserved),
            depth: 0,
        }
    }

    #[inline]
    pub fn program(&self) -> &'a ResolvedProgram {
        self.program
    }

    #[inline]
    pub fn nodes(&self) -> &'a NodeArena {
        &self.program.nodes
    }

    #[inline]
    pub fn descriptors(&self) -> &'a DescriptorArena {
        &self.program.descriptors
    }

    #[inline]
    pub fn bindings(&self) -> &'a BindingContext {
        &self.program.bindings
    }

    #[inline]
    pub fn intrinsics(&self) -> &'a IntrinsicRegistry {
        self.intrinsics
    }

    /// Descriptor bound by the resolver; an id outside the arena is an error.
    pub fn descriptor(&self, id: DescriptorId) -> Result<&'a Descriptor, LoweringError> {
        self.descriptors()
            .get(id)
            .ok_or(LoweringError::UnknownDescriptor(id))
    }

    // =========================================================================
    // Temporaries
    // =========================================================================

    pub fn declare_temporary(&mut self, value: IRNode) -> TemporaryVariable {
        self.temporaries.declare(value)
    }

    pub fn temporary_count(&self) -> usize {
        self.temporaries.len()
    }

    /// `var _a, _b;` for every temporary declared since the last call.
    pub fn take_temporaries(&mut self) -> Option<IRNode> {
        self.temporaries.declaration()
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// JavaScript name of a declaration.
    ///
    /// Extension property accessors become `get_x` / `set_x` (an extension
    /// property itself is only reachable through its getter), class
    /// properties live in a `$x` backing field and everything else keeps its
    /// source name.
    pub fn name_for_descriptor(&self, id: DescriptorId) -> Result<String, LoweringError> {
        let descriptors = self.descriptors();
        let descriptor = self.descriptor(id)?;
        Ok(match descriptor.kind {
            DescriptorKind::Property | DescriptorKind::PropertyGetter
                if descriptor.is_extension() =>
            {
                format!("get_{}", descriptor.name)
            }
            DescriptorKind::PropertySetter if descriptor.is_extension() => {
                format!("set_{}", descriptor.name)
            }
            DescriptorKind::Property if descriptors.is_class_member(id) => {
                format!("{BACKING_FIELD_PREFIX}{}", descriptor.name)
            }
            _ => descriptor.name.clone(),
        })
    }

    /// Namespace path a top-level declaration is reached through (`a.b` for
    /// `a.b.f`).
    ///
    /// `None` for declarations of the root namespace, class members and
    /// locals: those are referenced by bare name or through a receiver.
    pub fn qualifier_for_descriptor(&self, id: DescriptorId) -> Option<IRNode> {
        let descriptors = self.descriptors();
        let owner = descriptors.containing_declaration(id)?;
        if descriptors.is_root_namespace(owner) {
            return None;
        }
        if descriptors.get(owner)?.kind != DescriptorKind::Namespace {
            return None;
        }
        let path = descriptors.fq_name(owner).ok()?;
        Some(IRNode::dotted(&path.to_string()))
    }

    // =========================================================================
    // Recursion guard
    // =========================================================================

    pub(crate) fn enter_expression(&mut self) -> Result<(), LoweringError> {
        if self.depth >= MAX_EXPRESSION_DEPTH {
            return Err(LoweringError::TooDeep {
                limit: MAX_EXPRESSION_DEPTH,
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave_expression(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
