//! Null-safety lowering.
//!
//! Nullable values of the source language map to both `null` and `undefined`
//! in JavaScript, so every null test checks both:
//!
//! ```text
//! x === null || x === void 0          // is_null_check(x)
//! x !== null && x !== void 0          // is_not_null_check(x)
//! ```
//!
//! A tested expression that is referenced again afterwards is evaluated only
//! once: anything other than a bare identifier is cached in a temporary.
//!
//! ```text
//! a.b ?: c    →   (_a = a.b) !== null && _a !== void 0 ? _a : c
//! ```

use crate::context::TranslationContext;
use crate::error::LoweringError;
use crate::ir::IRNode;
use crate::temporary::TemporaryVariable;
use crate::translation::translate_as_expression;
use jetjs_ast::NodeIndex;

/// Whether `expression` must be cached before it is referenced twice.
///
/// Only a bare, unqualified identifier can be repeated without evaluating
/// anything again.
pub fn needs_caching(expression: &IRNode) -> bool {
    !expression.is_simple_name()
}

/// `e === null || e === void 0`, or `e !== null && e !== void 0` when negated.
pub fn null_check(expression: IRNode, negated: bool) -> IRNode {
    null_test_pair(expression.clone(), expression, negated)
}

pub fn is_null_check(expression: IRNode) -> IRNode {
    null_check(expression, false)
}

pub fn is_not_null_check(expression: IRNode) -> IRNode {
    null_check(expression, true)
}

/// Null test that evaluates the cached value exactly once:
/// `(_a = e) === null || _a === void 0`.
pub fn cached_null_check(cached: &TemporaryVariable, negated: bool) -> IRNode {
    null_test_pair(cached.assignment_expression(), cached.reference(), negated)
}

/// `(_a = e) !== null && _a !== void 0`
pub fn not_null_conditional_test_expression(cached: &TemporaryVariable) -> IRNode {
    cached_null_check(cached, true)
}

fn null_test_pair(first: IRNode, second: IRNode, negated: bool) -> IRNode {
    let operator = if negated { "!==" } else { "===" };
    let null_test = IRNode::binary(first, operator, IRNode::NullLiteral);
    let undefined_test = IRNode::binary(second, operator, IRNode::Undefined);
    if negated {
        IRNode::logical_and(null_test, undefined_test)
    } else {
        IRNode::logical_or(null_test, undefined_test)
    }
}

/// Declare a temporary for `expression` unless it is a bare identifier.
///
/// Returns the temporary (if one was declared) and the expression to use for
/// every later reference.
pub fn temporary_if_needed(
    expression: IRNode,
    context: &mut TranslationContext<'_>,
) -> (Option<TemporaryVariable>, IRNode) {
    if needs_caching(&expression) {
        let temporary = context.declare_temporary(expression);
        let reference = temporary.reference();
        (Some(temporary), reference)
    } else {
        (None, expression)
    }
}

/// `e !== null && e !== void 0 ? e : else_expression`, caching `e` when needed.
pub fn not_null_conditional(
    expression: IRNode,
    else_expression: IRNode,
    context: &mut TranslationContext<'_>,
) -> IRNode {
    let (test, then) = match temporary_if_needed(expression, context) {
        (Some(cached), reference) => (not_null_conditional_test_expression(&cached), reference),
        (None, expression) => (is_not_null_check(expression.clone()), expression),
    };
    IRNode::conditional(test, then, else_expression)
}

/// `not_null_conditional` on a source expression, lowered first.
pub fn not_null_conditional_source(
    expression: NodeIndex,
    else_expression: IRNode,
    context: &mut TranslationContext<'_>,
) -> Result<IRNode, LoweringError> {
    let expression = translate_as_expression(context, expression)?;
    Ok(not_null_conditional(expression, else_expression, context))
}

/// Safe access `r?.selector`: `access` is applied to a reference to the
/// receiver and the whole expression is `null` when the receiver is.
///
/// ```text
/// f()?.g   →   (_a = f()) !== null && _a !== void 0 ? _a.g : null
/// ```
pub fn safe_access<F>(
    receiver: IRNode,
    context: &mut TranslationContext<'_>,
    access: F,
) -> Result<IRNode, LoweringError>
where
    F: FnOnce(IRNode, &mut TranslationContext<'_>) -> Result<IRNode, LoweringError>,
{
    let (cached, reference) = temporary_if_needed(receiver, context);
    let test = match &cached {
        Some(cached) => not_null_conditional_test_expression(cached),
        None => is_not_null_check(reference.clone()),
    };
    let then = access(reference, context)?;
    Ok(IRNode::conditional(test, then, IRNode::NullLiteral))
}
