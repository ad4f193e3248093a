//! Deciding between an intrinsic and a generic call.

use super::function_intrinsic::FunctionIntrinsic;
use crate::context::TranslationContext;
use jetjs_ast::NodeIndex;
use jetjs_descriptors::DescriptorId;
use tracing::debug;

/// Whether an operation expression must be lowered through a built-in
/// instead of a call to its operator function.
///
/// An operation whose function descriptor cannot be resolved is a built-in
/// operator on primitives, so the answer is `true` in that case.
pub fn has_corresponding_intrinsic(context: &TranslationContext<'_>, operation: NodeIndex) -> bool {
    let Some(function) = context.bindings().function_for_operation(operation) else {
        debug!(?operation, "operator function unresolved, assuming intrinsic");
        return true;
    };
    let found = context
        .intrinsics()
        .contains_match(context.descriptors(), function);
    debug!(?operation, ?function, found, "intrinsic lookup");
    found
}

/// Intrinsic registered for a resolved function, if any.
pub fn intrinsic_for_descriptor<'r>(
    context: &TranslationContext<'r>,
    function: DescriptorId,
) -> Option<&'r FunctionIntrinsic> {
    let intrinsic = context
        .intrinsics()
        .get_intrinsic(context.descriptors(), function);
    if let Some(intrinsic) = intrinsic {
        debug!(?function, intrinsic = intrinsic.name(), "using intrinsic");
    }
    intrinsic
}
