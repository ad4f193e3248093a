//! Whole-program lowering.
//!
//! Every top-level root becomes one or more statements. Temporaries declared
//! while lowering a root are hoisted into a single `var` statement in front
//! of it:
//!
//! ```text
//! var _a;
//! (_a = f()) !== null && _a !== void 0 ? _a : g();
//! ```

use crate::call_site::{
    assign_to_backing_field, default_accessor_descriptor, define_property, qualified_reference,
    translate_initializer_for_property,
};
use crate::context::TranslationContext;
use crate::error::LoweringError;
use crate::intrinsics::IntrinsicRegistry;
use crate::ir::IRNode;
use crate::ir_printer::IRPrinter;
use crate::translation::translate_as_expression;
use jetjs_ast::{Node, NodeIndex};
use jetjs_descriptors::ResolvedProgram;
use tracing::debug;

/// Lower every root of `program` into JavaScript statements.
#[tracing::instrument(level = "debug", skip_all, fields(roots = program.roots.len()))]
pub fn lower_program(
    program: &ResolvedProgram,
    intrinsics: &IntrinsicRegistry,
) -> Result<Vec<IRNode>, LoweringError> {
    let mut context = TranslationContext::new(program, intrinsics);
    let mut statements = Vec::with_capacity(program.roots.len());
    for &root in &program.roots {
        let lowered = lower_statement(&mut context, root)?;
        if let Some(declaration) = context.take_temporaries() {
            statements.push(declaration);
        }
        statements.extend(lowered);
    }
    debug!(statements = statements.len(), "lowered program");
    Ok(statements)
}

/// Lower and print `program`.
pub fn emit_program(
    program: &ResolvedProgram,
    intrinsics: &IntrinsicRegistry,
    indent_width: usize,
) -> Result<String, LoweringError> {
    let statements = lower_program(program, intrinsics)?;
    let mut printer = IRPrinter::with_indent_width(indent_width);
    for statement in &statements {
        printer.emit_statement(statement);
    }
    Ok(printer.finish())
}

/// Lower one top-level root.
pub fn lower_statement(
    context: &mut TranslationContext<'_>,
    root: NodeIndex,
) -> Result<Vec<IRNode>, LoweringError> {
    match context.nodes().get(root) {
        Some(Node::Property { .. }) => lower_property_declaration(context, root),
        Some(_) => Ok(vec![IRNode::expr_stmt(translate_as_expression(context, root)?)]),
        None => Err(LoweringError::UnknownNode(root)),
    }
}

/// `val x = init`
///
/// - class member: `this.$x = init;` plus default accessors on `this`
/// - namespace member: `ns.x = init;`
/// - top-level or unresolved: `var x = init;`
fn lower_property_declaration(
    context: &mut TranslationContext<'_>,
    declaration: NodeIndex,
) -> Result<Vec<IRNode>, LoweringError> {
    let Some(Node::Property { name, .. }) = context.nodes().get(declaration) else {
        return Err(LoweringError::NotAnExpression(declaration));
    };
    let initializer = translate_initializer_for_property(context, declaration)?;

    let Some(property) = context.bindings().reference_target(declaration) else {
        return Ok(vec![IRNode::var_decl(name.as_str(), initializer)]);
    };
    let descriptors = context.descriptors();
    if descriptors.is_extension(property) {
        return Err(LoweringError::UnsupportedDeclaration(declaration));
    }

    if descriptors.is_class_member(property) {
        let mut statements = Vec::with_capacity(2);
        if let Some(initializer) = initializer {
            statements.push(IRNode::expr_stmt(assign_to_backing_field(
                context,
                property,
                initializer,
            )?));
        }
        let accessors = default_accessor_descriptor(context, property)?;
        statements.push(IRNode::expr_stmt(define_property(context, property, accessors)?));
        return Ok(statements);
    }

    match qualified_reference(context, property)? {
        IRNode::Identifier(name) => Ok(vec![IRNode::var_decl(name, initializer)]),
        reference => Ok(vec![IRNode::expr_stmt(IRNode::assign(
            reference,
            initializer.unwrap_or(IRNode::Undefined),
        ))]),
    }
}
