//! Expression translator.
//!
//! Lowers one resolved source expression into an `IRNode` tree. Calls and
//! operation expressions are dispatched through the intrinsic registry first
//! and fall back to a generic call of the resolved function.

use crate::call_site::{
    generate_call_argument_list, qualified_reference, translate_argument_list,
    translate_base_expression, translate_left_expression, translate_right_expression,
};
use crate::context::TranslationContext;
use crate::error::LoweringError;
use crate::intrinsics::{
    FunctionIntrinsic, IntrinsicCall, RUNTIME_OBJECT, has_corresponding_intrinsic,
    intrinsic_for_descriptor,
};
use crate::ir::IRNode;
use crate::null_safety::{
    cached_null_check, not_null_conditional, null_check, safe_access, temporary_if_needed,
};
use jetjs_ast::{Constant, Node, NodeIndex, OperationToken, ValueArgument};
use jetjs_descriptors::DescriptorId;
use tracing::{debug, trace};

/// Lower a source expression.
///
/// # Panics
///
/// Panics when a required sub-expression is missing (a binary expression
/// without a right side, an argument or unary expression without an operand,
/// empty parentheses).
#[tracing::instrument(level = "trace", skip(context))]
pub fn translate_as_expression(
    context: &mut TranslationContext<'_>,
    node: NodeIndex,
) -> Result<IRNode, LoweringError> {
    context.enter_expression()?;
    let result = translate_node(context, node);
    context.leave_expression();
    result
}

fn translate_node(
    context: &mut TranslationContext<'_>,
    idx: NodeIndex,
) -> Result<IRNode, LoweringError> {
    let nodes = context.nodes();
    let node = nodes.get(idx).ok_or(LoweringError::UnknownNode(idx))?;

    match node {
        Node::SimpleName { name } => translate_reference(context, idx, name),
        Node::This => Ok(IRNode::this()),
        Node::Constant(constant) => Ok(translate_constant(constant)),
        Node::DotQualified { receiver, selector } => {
            let receiver = translate_as_expression(context, *receiver)?;
            translate_selector(context, receiver, *selector)
        }
        Node::SafeQualified { receiver, selector } => {
            let receiver = translate_as_expression(context, *receiver)?;
            let selector = *selector;
            safe_access(receiver, context, |reference, context| {
                translate_selector(context, reference, selector)
            })
        }
        Node::Call { callee, arguments } => translate_call(context, idx, None, *callee, arguments),
        Node::Binary { operation, .. } => translate_binary(context, idx, *operation),
        Node::Prefix { operation, .. } => translate_prefix(context, idx, *operation),
        Node::Postfix { operation, .. } => translate_postfix(context, idx, *operation),
        Node::Parenthesized { expression } => {
            let Some(expression) = expression else {
                panic!("parenthesized expression should have contents");
            };
            Ok(translate_as_expression(context, *expression)?.paren())
        }
        Node::Property { .. } => Err(LoweringError::NotAnExpression(idx)),
    }
}

// =============================================================================
// Leaves
// =============================================================================

fn translate_constant(constant: &Constant) -> IRNode {
    match constant {
        Constant::Int(value) if *value < 0 => {
            IRNode::prefix("-", IRNode::number(value.unsigned_abs().to_string()))
        }
        Constant::Int(value) => IRNode::number(value.to_string()),
        Constant::Float(value) if value.is_nan() => IRNode::id("NaN"),
        Constant::Float(value) if value.is_infinite() => {
            if value.is_sign_negative() {
                IRNode::prefix("-", IRNode::id("Infinity"))
            } else {
                IRNode::id("Infinity")
            }
        }
        Constant::Float(value) if value.is_sign_negative() => {
            IRNode::prefix("-", IRNode::number(format!("{}", -value)))
        }
        Constant::Float(value) => IRNode::number(format!("{value}")),
        Constant::String(value) => IRNode::string(value.as_str()),
        Constant::Bool(value) => IRNode::BooleanLiteral(*value),
        Constant::Null => IRNode::NullLiteral,
    }
}

/// A bare name: class members are reached through `this`, top-level
/// declarations through their namespace, unresolved names stay as written.
fn translate_reference(
    context: &TranslationContext<'_>,
    idx: NodeIndex,
    name: &str,
) -> Result<IRNode, LoweringError> {
    let Some(target) = context.bindings().reference_target(idx) else {
        return Ok(IRNode::id(name));
    };
    if context.descriptors().is_class_member(target) {
        let member = context.descriptor(target)?.name.as_str();
        return Ok(IRNode::prop(IRNode::this(), member));
    }
    qualified_reference(context, target)
}

/// `receiver.selector` once the receiver is lowered.
fn translate_selector(
    context: &mut TranslationContext<'_>,
    receiver: IRNode,
    selector: NodeIndex,
) -> Result<IRNode, LoweringError> {
    let nodes = context.nodes();
    match nodes.get(selector) {
        Some(Node::SimpleName { name }) => {
            let Some(target) = context.bindings().reference_target(selector) else {
                return Ok(IRNode::prop(receiver, name.as_str()));
            };
            if let Some(intrinsic) = intrinsic_for_descriptor(context, target) {
                return intrinsic.apply(IntrinsicCall::new(Some(receiver), Vec::new()));
            }
            if context.descriptors().is_extension(target) {
                let getter = qualified_reference(context, target)?;
                return Ok(IRNode::call(
                    getter,
                    generate_call_argument_list(receiver, Vec::new()),
                ));
            }
            Ok(IRNode::prop(receiver, name.as_str()))
        }
        Some(Node::Call { callee, arguments }) => {
            translate_call(context, selector, Some(receiver), *callee, arguments)
        }
        Some(_) => Err(LoweringError::UnsupportedSelector(selector)),
        None => Err(LoweringError::UnknownNode(selector)),
    }
}

// =============================================================================
// Calls
// =============================================================================

fn translate_call(
    context: &mut TranslationContext<'_>,
    call: NodeIndex,
    receiver: Option<IRNode>,
    callee: NodeIndex,
    arguments: &[ValueArgument],
) -> Result<IRNode, LoweringError> {
    let Some(name) = context.nodes().name_text(callee) else {
        return Err(LoweringError::UnsupportedCallee(call));
    };
    let target = context
        .bindings()
        .reference_target(callee)
        .or_else(|| context.bindings().reference_target(call));
    let arguments = translate_argument_list(context, arguments)?;

    let Some(function) = target else {
        trace!(%name, "unresolved call");
        let callee = match receiver {
            Some(receiver) => IRNode::prop(receiver, name),
            None => IRNode::id(name),
        };
        return Ok(IRNode::call(callee, arguments));
    };

    if let Some(intrinsic) = intrinsic_for_descriptor(context, function) {
        return intrinsic.apply(IntrinsicCall::new(receiver, arguments));
    }

    let descriptors = context.descriptors();
    if descriptors.is_extension(function) {
        // Extension functions take their receiver as the first argument.
        let receiver = receiver.unwrap_or_else(IRNode::this);
        return Ok(IRNode::call(
            qualified_reference(context, function)?,
            generate_call_argument_list(receiver, arguments),
        ));
    }
    let callee = match receiver {
        Some(receiver) => IRNode::prop(receiver, name),
        None if descriptors.is_class_member(function) => IRNode::prop(IRNode::this(), name),
        None => qualified_reference(context, function)?,
    };
    Ok(IRNode::call(callee, arguments))
}

/// Generic call of a resolved operator function: `a.plus(b)`, or
/// `plus(a, b)` for an extension.
fn call_operator_function(
    context: &TranslationContext<'_>,
    function: DescriptorId,
    receiver: IRNode,
    arguments: Vec<IRNode>,
) -> Result<IRNode, LoweringError> {
    if context.descriptors().is_extension(function) {
        return Ok(IRNode::call(
            qualified_reference(context, function)?,
            generate_call_argument_list(receiver, arguments),
        ));
    }
    let name = context.descriptor(function)?.name.as_str();
    Ok(IRNode::call(IRNode::prop(receiver, name), arguments))
}

/// Lower an operation whose operands are already translated.
///
/// `raw` builds the plain JavaScript form used when the operator function is
/// unresolved.
fn translate_operation(
    context: &TranslationContext<'_>,
    idx: NodeIndex,
    token: OperationToken,
    mut operands: Vec<IRNode>,
    raw: impl FnOnce(Vec<IRNode>) -> Result<IRNode, LoweringError>,
) -> Result<IRNode, LoweringError> {
    let Some(function) = context.bindings().function_for_operation(idx) else {
        return raw(operands);
    };
    if let Some(intrinsic) = intrinsic_for_descriptor(context, function) {
        let receiver = operands.remove(0);
        return intrinsic
            .apply(IntrinsicCall::new(Some(receiver), operands).with_operation(token));
    }
    debug!(?idx, ?function, "generic operator call");
    let receiver = operands.remove(0);
    call_operator_function(context, function, receiver, operands)
}

// =============================================================================
// Operators
// =============================================================================

fn translate_binary(
    context: &mut TranslationContext<'_>,
    idx: NodeIndex,
    token: OperationToken,
) -> Result<IRNode, LoweringError> {
    match token {
        OperationToken::AndAnd | OperationToken::OrOr => {
            let left = translate_left_expression(context, idx)?;
            let right = translate_right_expression(context, idx)?;
            Ok(if token == OperationToken::AndAnd {
                IRNode::logical_and(left, right)
            } else {
                IRNode::logical_or(left, right)
            })
        }
        OperationToken::Elvis => {
            let left = translate_left_expression(context, idx)?;
            let right = translate_right_expression(context, idx)?;
            Ok(not_null_conditional(left, right, context))
        }
        OperationToken::Assign => {
            let left = translate_left_expression(context, idx)?;
            let right = translate_right_expression(context, idx)?;
            Ok(IRNode::assign(left, right))
        }
        OperationToken::Identity | OperationToken::NotIdentity => {
            let left = translate_left_expression(context, idx)?;
            let right = translate_right_expression(context, idx)?;
            let operator = if token == OperationToken::Identity { "===" } else { "!==" };
            Ok(IRNode::binary(left, operator, right))
        }
        OperationToken::Eq | OperationToken::NotEq => translate_equality(context, idx, token),
        _ if token.is_assignment() => translate_compound_assignment(context, idx, token),
        _ => {
            let left = translate_left_expression(context, idx)?;
            let right = translate_right_expression(context, idx)?;
            if token.is_comparison() && !has_corresponding_intrinsic(context, idx) {
                if let Some(function) = context.bindings().function_for_operation(idx) {
                    // a.compareTo(b) < 0
                    let compare = call_operator_function(context, function, left, vec![right])?;
                    let operator = token.js_operator().unwrap_or("<");
                    return Ok(IRNode::binary(compare, operator, IRNode::number("0")));
                }
            }
            translate_operation(context, idx, token, vec![left, right], |operands| {
                let [left, right]: [IRNode; 2] = operands
                    .try_into()
                    .map_err(|_| LoweringError::UnsupportedOperator { token, node: idx })?;
                match token.js_operator() {
                    Some(operator) => Ok(IRNode::binary(left, operator, right)),
                    None => Err(LoweringError::UnsupportedOperator { token, node: idx }),
                }
            })
        }
    }
}

/// `==` / `!=`: null literals test both `null` and `undefined`, resolved
/// `equals` functions go through the intrinsic table, everything else is
/// compared strictly.
fn translate_equality(
    context: &mut TranslationContext<'_>,
    idx: NodeIndex,
    token: OperationToken,
) -> Result<IRNode, LoweringError> {
    let negated = token == OperationToken::NotEq;
    let left = translate_left_expression(context, idx)?;
    let right = translate_right_expression(context, idx)?;

    let tested = match (&left, &right) {
        (_, IRNode::NullLiteral) => Some(left.clone()),
        (IRNode::NullLiteral, _) => Some(right.clone()),
        _ => None,
    };
    if let Some(tested) = tested {
        return Ok(match temporary_if_needed(tested, context) {
            (Some(cached), _) => cached_null_check(&cached, negated),
            (None, reference) => null_check(reference, negated),
        });
    }

    translate_operation(context, idx, token, vec![left, right], |operands| {
        let [left, right]: [IRNode; 2] = operands
            .try_into()
            .map_err(|_| LoweringError::UnsupportedOperator { token, node: idx })?;
        Ok(IRNode::binary(left, if negated { "!==" } else { "===" }, right))
    })
    .map(|lowered| match lowered {
        // A user-defined `equals` call still needs negating for `!=`.
        IRNode::CallExpr { .. } if negated => IRNode::prefix("!", lowered),
        other => other,
    })
}

/// `a += b`.
///
/// Unresolved operators and intrinsics that are the JavaScript operator
/// itself keep the compound form. Any other intrinsic, or a resolved
/// function, rebinds the target: `a = a / b | 0`, `a = a.plus(b)`; an
/// operator function named `*Assign` is called in place: `a.plusAssign(b)`.
fn translate_compound_assignment(
    context: &mut TranslationContext<'_>,
    idx: NodeIndex,
    token: OperationToken,
) -> Result<IRNode, LoweringError> {
    let left = translate_left_expression(context, idx)?;
    let right = translate_right_expression(context, idx)?;
    let Some(function) = context.bindings().function_for_operation(idx) else {
        return Ok(IRNode::binary(left, token.as_str(), right));
    };
    let operation =
        compound_operation(token).ok_or(LoweringError::UnsupportedOperator { token, node: idx })?;

    if let Some(intrinsic) = intrinsic_for_descriptor(context, function) {
        if matches!(intrinsic, FunctionIntrinsic::BinaryOperator { operator } if operator == operation.as_str())
        {
            return Ok(IRNode::binary(left, token.as_str(), right));
        }
        let (target, current) = stable_target(left, context);
        let value = intrinsic
            .apply(IntrinsicCall::new(Some(current), vec![right]).with_operation(operation))?;
        return Ok(IRNode::assign(target, value));
    }

    let in_place = context.descriptor(function)?.name.ends_with("Assign");
    if in_place {
        return call_operator_function(context, function, left, vec![right]);
    }
    let (target, current) = stable_target(left, context);
    let value = call_operator_function(context, function, current, vec![right])?;
    Ok(IRNode::assign(target, value))
}

/// Arithmetic operator a compound assignment applies.
const fn compound_operation(token: OperationToken) -> Option<OperationToken> {
    match token {
        OperationToken::PlusAssign => Some(OperationToken::Plus),
        OperationToken::MinusAssign => Some(OperationToken::Minus),
        OperationToken::MulAssign => Some(OperationToken::Mul),
        OperationToken::DivAssign => Some(OperationToken::Div),
        OperationToken::PercAssign => Some(OperationToken::Perc),
        _ => None,
    }
}

/// Splits an assignment target into its first use and the reference used
/// afterwards, so the target's qualifier is evaluated once:
/// `f().x` becomes `(_a = f()).x` then `_a.x`.
fn stable_target(target: IRNode, context: &mut TranslationContext<'_>) -> (IRNode, IRNode) {
    match target {
        IRNode::PropertyAccess { object, property } => {
            let (first, later) = cache_operand(*object, context);
            (IRNode::prop(first, property.as_str()), IRNode::prop(later, property))
        }
        IRNode::ElementAccess { object, index } => {
            let (object_first, object_later) = cache_operand(*object, context);
            let (index_first, index_later) = cache_operand(*index, context);
            (
                IRNode::elem(object_first, index_first),
                IRNode::elem(object_later, index_later),
            )
        }
        other => (other.clone(), other),
    }
}

/// `(_a = e, _a)` split in two, unless `e` can be repeated as is.
fn cache_operand(operand: IRNode, context: &mut TranslationContext<'_>) -> (IRNode, IRNode) {
    match operand {
        IRNode::Identifier(_)
        | IRNode::This
        | IRNode::NumericLiteral(_)
        | IRNode::StringLiteral(_) => (operand.clone(), operand),
        operand => {
            let cached = context.declare_temporary(operand);
            (cached.assignment_expression(), cached.reference())
        }
    }
}

/// `++` / `--` whose intrinsic is the JavaScript operator itself.
fn is_native_step(intrinsic: &FunctionIntrinsic, token: OperationToken) -> bool {
    let step = if token == OperationToken::PlusPlus { "+" } else { "-" };
    matches!(intrinsic, FunctionIntrinsic::Increment { operator } if operator == step)
}

/// Next value of `operand` for `++` / `--`: the intrinsic, or `operand.inc()`.
fn step_value(
    context: &TranslationContext<'_>,
    intrinsic: Option<&FunctionIntrinsic>,
    function: DescriptorId,
    token: OperationToken,
    operand: IRNode,
) -> Result<IRNode, LoweringError> {
    match intrinsic {
        Some(intrinsic) => {
            intrinsic.apply(IntrinsicCall::new(Some(operand), Vec::new()).with_operation(token))
        }
        None => call_operator_function(context, function, operand, Vec::new()),
    }
}

fn translate_prefix(
    context: &mut TranslationContext<'_>,
    idx: NodeIndex,
    token: OperationToken,
) -> Result<IRNode, LoweringError> {
    let base = translate_base_expression(context, idx)?;
    match token {
        OperationToken::PlusPlus | OperationToken::MinusMinus => {
            let Some(function) = context.bindings().function_for_operation(idx) else {
                return Ok(IRNode::prefix(token.as_str(), base));
            };
            let intrinsic = intrinsic_for_descriptor(context, function);
            if intrinsic.is_some_and(|intrinsic| is_native_step(intrinsic, token)) {
                return Ok(IRNode::prefix(token.as_str(), base));
            }
            // x = x.inc()
            let (target, current) = stable_target(base, context);
            let updated = step_value(context, intrinsic, function, token, current)?;
            Ok(IRNode::assign(target, updated))
        }
        OperationToken::Excl | OperationToken::Minus | OperationToken::Plus => {
            translate_operation(context, idx, token, vec![base], |mut operands| {
                Ok(IRNode::prefix(token.as_str(), operands.remove(0)))
            })
        }
        _ => Err(LoweringError::UnsupportedOperator { token, node: idx }),
    }
}

fn translate_postfix(
    context: &mut TranslationContext<'_>,
    idx: NodeIndex,
    token: OperationToken,
) -> Result<IRNode, LoweringError> {
    let base = translate_base_expression(context, idx)?;
    match token {
        OperationToken::ExclExcl => {
            // x!! → x !== null && x !== void 0 ? x : jet.throwNPE()
            let failure = IRNode::call(IRNode::prop(IRNode::id(RUNTIME_OBJECT), "throwNPE"), Vec::new());
            Ok(not_null_conditional(base, failure, context))
        }
        OperationToken::PlusPlus | OperationToken::MinusMinus => {
            let Some(function) = context.bindings().function_for_operation(idx) else {
                return Ok(IRNode::postfix(base, token.as_str()));
            };
            let intrinsic = intrinsic_for_descriptor(context, function);
            if intrinsic.is_some_and(|intrinsic| is_native_step(intrinsic, token)) {
                return Ok(IRNode::postfix(base, token.as_str()));
            }
            // (_a = x, x = _a.inc(), _a)
            let (first, later) = stable_target(base, context);
            let old = context.declare_temporary(first);
            let updated = step_value(context, intrinsic, function, token, old.reference())?;
            Ok(IRNode::CommaExpr(vec![
                old.assignment_expression(),
                IRNode::assign(later, updated),
                old.reference(),
            ])
            .paren())
        }
        _ => Err(LoweringError::UnsupportedOperator { token, node: idx }),
    }
}
