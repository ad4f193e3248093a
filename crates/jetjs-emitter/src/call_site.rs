//! Call-site lowering: argument lists, property descriptors and backing fields.

use crate::context::TranslationContext;
use crate::error::LoweringError;
use crate::ir::{IRNode, IRParam, IRProperty};
use crate::translation::translate_as_expression;
use jetjs_ast::{Node, NodeIndex, ValueArgument};
use jetjs_descriptors::{DescriptorId, DescriptorKind};

// =============================================================================
// Arguments
// =============================================================================

/// Lower call arguments in source order.
///
/// # Panics
///
/// Panics when an argument has no expression.
pub fn translate_argument_list(
    context: &mut TranslationContext<'_>,
    arguments: &[ValueArgument],
) -> Result<Vec<IRNode>, LoweringError> {
    if arguments.is_empty() {
        return Ok(Vec::new());
    }
    let mut lowered = Vec::with_capacity(arguments.len());
    for argument in arguments {
        lowered.push(translate_argument(context, argument)?);
    }
    Ok(lowered)
}

fn translate_argument(
    context: &mut TranslationContext<'_>,
    argument: &ValueArgument,
) -> Result<IRNode, LoweringError> {
    let Some(expression) = argument.argument_expression() else {
        panic!("argument with no expression");
    };
    translate_as_expression(context, expression)
}

/// `[receiver, args...]` for calls that pass the receiver explicitly.
pub fn generate_call_argument_list(receiver: IRNode, arguments: Vec<IRNode>) -> Vec<IRNode> {
    if arguments.is_empty() {
        return vec![receiver];
    }
    let mut list = Vec::with_capacity(1 + arguments.len());
    list.push(receiver);
    list.extend(arguments);
    list
}

pub fn translate_expression_list(
    context: &mut TranslationContext<'_>,
    expressions: &[NodeIndex],
) -> Result<Vec<IRNode>, LoweringError> {
    expressions
        .iter()
        .map(|expression| translate_as_expression(context, *expression))
        .collect()
}

// =============================================================================
// Operands
// =============================================================================

/// Operand of a prefix or postfix expression.
///
/// # Panics
///
/// Panics when `unary` is not a unary expression or has no operand.
pub fn translate_base_expression(
    context: &mut TranslationContext<'_>,
    unary: NodeIndex,
) -> Result<IRNode, LoweringError> {
    let base = match context.nodes().get(unary) {
        Some(Node::Prefix { base, .. } | Node::Postfix { base, .. }) => *base,
        Some(_) => panic!("node {unary:?} is not a unary expression"),
        None => return Err(LoweringError::UnknownNode(unary)),
    };
    let Some(base) = base else {
        panic!("unary expression should have a base expression");
    };
    translate_as_expression(context, base)
}

/// # Panics
///
/// Panics when `binary` is not a binary expression.
pub fn translate_left_expression(
    context: &mut TranslationContext<'_>,
    binary: NodeIndex,
) -> Result<IRNode, LoweringError> {
    let (left, _) = binary_operands(context, binary)?;
    translate_as_expression(context, left)
}

/// # Panics
///
/// Panics when `binary` is not a binary expression or has no right side.
pub fn translate_right_expression(
    context: &mut TranslationContext<'_>,
    binary: NodeIndex,
) -> Result<IRNode, LoweringError> {
    let (_, right) = binary_operands(context, binary)?;
    let Some(right) = right else {
        panic!("binary expression should have a right expression");
    };
    translate_as_expression(context, right)
}

fn binary_operands(
    context: &TranslationContext<'_>,
    binary: NodeIndex,
) -> Result<(NodeIndex, Option<NodeIndex>), LoweringError> {
    match context.nodes().get(binary) {
        Some(Node::Binary { left, right, .. }) => Ok((*left, *right)),
        Some(_) => panic!("node {binary:?} is not a binary expression"),
        None => Err(LoweringError::UnknownNode(binary)),
    }
}

// =============================================================================
// References
// =============================================================================

/// `name` or `qualifier.name` for a declaration.
pub fn qualified_reference(
    context: &TranslationContext<'_>,
    descriptor: DescriptorId,
) -> Result<IRNode, LoweringError> {
    let name = context.name_for_descriptor(descriptor)?;
    Ok(match context.qualifier_for_descriptor(descriptor) {
        Some(qualifier) => IRNode::prop(qualifier, name),
        None => IRNode::id(name),
    })
}

/// `this.$x`
pub fn backing_field_reference(
    context: &TranslationContext<'_>,
    property: DescriptorId,
) -> Result<IRNode, LoweringError> {
    Ok(IRNode::prop(IRNode::this(), context.name_for_descriptor(property)?))
}

/// `this.$x = value`
pub fn assign_to_backing_field(
    context: &TranslationContext<'_>,
    property: DescriptorId,
    value: IRNode,
) -> Result<IRNode, LoweringError> {
    Ok(IRNode::assign(backing_field_reference(context, property)?, value))
}

/// Lowered initializer of a property declaration, if it has one.
pub fn translate_initializer_for_property(
    context: &mut TranslationContext<'_>,
    declaration: NodeIndex,
) -> Result<Option<IRNode>, LoweringError> {
    let initializer = match context.nodes().get(declaration) {
        Some(Node::Property { initializer, .. }) => *initializer,
        Some(_) => return Err(LoweringError::NotAnExpression(declaration)),
        None => return Err(LoweringError::UnknownNode(declaration)),
    };
    initializer
        .map(|initializer| translate_as_expression(context, initializer))
        .transpose()
}

// =============================================================================
// Property descriptors
// =============================================================================

/// `{ value: v, writable: w }`
pub fn create_data_descriptor(value: IRNode, writable: bool) -> IRNode {
    IRNode::object(vec![
        IRProperty::init("value", value),
        IRProperty::init("writable", IRNode::BooleanLiteral(writable)),
    ])
}

/// Entry of an ES5 property descriptor for an accessor function.
///
/// Extension accessors are plain functions stored as a data descriptor,
/// writable when the accessor can be overridden:
/// `get_x: { value: function (receiver) { ... }, writable: false }`.
/// Member accessors become `"get": function () { ... }` / `"set": ...`.
pub fn translate_property_as_descriptor(
    context: &TranslationContext<'_>,
    accessor: DescriptorId,
    function: IRNode,
) -> Result<IRProperty, LoweringError> {
    let descriptor = context.descriptor(accessor)?;
    if descriptor.is_extension() {
        let writable = descriptor.modality.is_overridable();
        return Ok(IRProperty::init(
            context.name_for_descriptor(accessor)?,
            create_data_descriptor(function, writable),
        ));
    }
    let key = if descriptor.is_getter() { "get" } else { "set" };
    Ok(IRProperty::init_string(key, function))
}

/// Getter and setter descriptors created for a property, in that order.
pub fn accessors_of(context: &TranslationContext<'_>, property: DescriptorId) -> Vec<DescriptorId> {
    let mut accessors: Vec<_> = context
        .descriptors()
        .iter()
        .filter(|(_, d)| d.accessor_of == Some(property))
        .map(|(id, d)| (id, d.kind))
        .collect();
    accessors.sort_by_key(|(_, kind)| *kind != DescriptorKind::PropertyGetter);
    accessors.into_iter().map(|(id, _)| id).collect()
}

/// Descriptor object with default accessors reading and writing the
/// backing field:
///
/// ```text
/// { "get": function () { return this.$x; }, "set": function (value) { this.$x = value; } }
/// ```
pub fn default_accessor_descriptor(
    context: &TranslationContext<'_>,
    property: DescriptorId,
) -> Result<IRNode, LoweringError> {
    let properties = accessors_of(context, property)
        .into_iter()
        .map(|accessor| {
            let function = if context.descriptor(accessor)?.is_getter() {
                IRNode::func_expr(
                    None,
                    Vec::new(),
                    vec![IRNode::ret(Some(backing_field_reference(context, property)?))],
                )
            } else {
                IRNode::func_expr(
                    None,
                    vec![IRParam::new("value")],
                    vec![IRNode::expr_stmt(assign_to_backing_field(
                        context,
                        property,
                        IRNode::id("value"),
                    )?)],
                )
            };
            translate_property_as_descriptor(context, accessor, function)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(IRNode::object(properties))
}

/// `Object.defineProperty(this, "x", descriptor)`
pub fn define_property(
    context: &TranslationContext<'_>,
    property: DescriptorId,
    descriptor: IRNode,
) -> Result<IRNode, LoweringError> {
    let name = context.descriptor(property)?.name.as_str();
    Ok(IRNode::call(
        IRNode::dotted("Object.defineProperty"),
        vec![IRNode::this(), IRNode::string(name), descriptor],
    ))
}
