//! Descriptor and program loading errors.

use crate::descriptor::DescriptorId;
use jetjs_ast::NodeIndex;
use thiserror::Error;

/// Failure to extract a fully-qualified path from a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("descriptor {0:?} does not exist")]
    UnknownDescriptor(DescriptorId),

    #[error("descriptor {id:?} is declared locally inside {owner:?} and has no qualified name")]
    LocalDeclaration { id: DescriptorId, owner: DescriptorId },

    #[error("descriptor {0:?} is not attached to the root namespace")]
    Detached(DescriptorId),

    #[error("containing-declaration chain of {0:?} exceeds the depth limit")]
    ChainTooDeep(DescriptorId),

    #[error("descriptor table must start with the root namespace")]
    MissingRoot,
}

/// Failure to load a serialized `ResolvedProgram`.
#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("malformed program: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error("node {0:?} referenced by the program does not exist")]
    DanglingNode(NodeIndex),

    #[error("binding of node {node:?} targets missing descriptor {descriptor:?}")]
    DanglingBinding {
        node: NodeIndex,
        descriptor: DescriptorId,
    },
}
