//! Lowering and intrinsic registry errors.

use jetjs_ast::{NodeIndex, OperationToken};
use jetjs_descriptors::DescriptorId;
use thiserror::Error;

/// Failure to lower a source expression.
///
/// Contract violations (a binary expression without a right operand, an
/// argument without an expression) are not represented here: they panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoweringError {
    #[error("node {0:?} does not exist")]
    UnknownNode(NodeIndex),

    #[error("descriptor {0:?} does not exist")]
    UnknownDescriptor(DescriptorId),

    #[error("node {0:?} is a declaration, not an expression")]
    NotAnExpression(NodeIndex),

    #[error("expression nesting exceeds {limit} levels")]
    TooDeep { limit: u32 },

    #[error("intrinsic `{intrinsic}` expects {expected} argument(s), found {found}")]
    IntrinsicArity {
        intrinsic: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("operator `{}` has no lowering for node {node:?}", token.as_str())]
    UnsupportedOperator {
        token: OperationToken,
        node: NodeIndex,
    },

    #[error("callee of call {0:?} is not a simple name")]
    UnsupportedCallee(NodeIndex),

    #[error("selector {0:?} is neither a name nor a call")]
    UnsupportedSelector(NodeIndex),

    #[error("declaration {0:?} cannot be lowered as a statement")]
    UnsupportedDeclaration(NodeIndex),
}

/// Failure to load or register intrinsic rules.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("malformed intrinsic rule: {0}")]
    Json(#[from] serde_json::Error),

    #[error("receiver pattern must name at least one declaration")]
    EmptyReceiverPattern,

    #[error("pattern `{0}` contains an empty segment")]
    EmptySegment(String),
}
