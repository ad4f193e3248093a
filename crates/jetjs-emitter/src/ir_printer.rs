//! IR Printer - emits JavaScript text from `IRNode` trees.
//!
//! Operator precedence is handled here: lowering builds nodes without caring
//! about parentheses, and the printer wraps an operand whenever its own
//! precedence is lower than its position requires.
//!
//! ```text
//! (_a = f()) !== null && _a !== void 0 ? _a : 0
//! ```

#[path = "ir_printer_helpers.rs"]
mod ir_printer_helpers;

use crate::ir::{IRNode, IRParam, IRProperty, IRPropertyKey};
use std::fmt::Write as _;

/// Default indentation width in spaces.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Precedence levels, loosely following the ECMAScript grammar.
pub(crate) mod precedence {
    pub const COMMA: u8 = 0;
    pub const ASSIGNMENT: u8 = 2;
    pub const CONDITIONAL: u8 = 3;
    pub const LOGICAL_OR: u8 = 4;
    pub const LOGICAL_AND: u8 = 5;
    pub const BITWISE_OR: u8 = 6;
    pub const BITWISE_XOR: u8 = 7;
    pub const BITWISE_AND: u8 = 8;
    pub const EQUALITY: u8 = 9;
    pub const RELATIONAL: u8 = 10;
    pub const SHIFT: u8 = 11;
    pub const ADDITIVE: u8 = 12;
    pub const MULTIPLICATIVE: u8 = 13;
    pub const EXPONENT: u8 = 14;
    pub const PREFIX: u8 = 15;
    pub const POSTFIX: u8 = 16;
    pub const MEMBER: u8 = 18;
    pub const PRIMARY: u8 = 20;
}

/// Writes JavaScript for IR trees.
pub struct IRPrinter {
    output: String,
    indent_level: u32,
    indent_str: String,
}

impl Default for IRPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl IRPrinter {
    pub fn new() -> Self {
        Self::with_indent_width(DEFAULT_INDENT_WIDTH)
    }

    pub fn with_indent_width(width: usize) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_str: " ".repeat(width),
        }
    }

    /// Print a single node with default settings.
    pub fn emit_to_string(node: &IRNode) -> String {
        let mut printer = Self::new();
        printer.emit(node);
        printer.finish()
    }

    /// Append a node to the output.
    pub fn emit(&mut self, node: &IRNode) {
        self.emit_node(node);
    }

    /// Append a top-level statement followed by a newline.
    pub fn emit_statement(&mut self, node: &IRNode) {
        self.write_indent();
        self.emit_node(node);
        self.write_line();
    }

    pub fn get_output(&self) -> &str {
        &self.output
    }

    pub fn finish(self) -> String {
        self.output
    }

    pub(crate) fn emit_node(&mut self, node: &IRNode) {
        match node {
            IRNode::NumericLiteral(n) => self.write(n),
            IRNode::StringLiteral(s) => {
                self.write("\"");
                self.write_escaped(s);
                self.write("\"");
            }
            IRNode::BooleanLiteral(b) => self.write(if *b { "true" } else { "false" }),
            IRNode::NullLiteral => self.write("null"),
            IRNode::Undefined => self.write("void 0"),
            IRNode::Identifier(name) => self.write(name),
            IRNode::This => self.write("this"),

            IRNode::BinaryExpr {
                left,
                operator,
                right,
            } => {
                let prec = Self::binary_operator_precedence(operator);
                let right_assoc = prec == precedence::ASSIGNMENT || operator == "**";
                let (left_min, right_min) = if right_assoc {
                    (prec + 1, prec)
                } else {
                    (prec, prec + 1)
                };
                self.emit_operand(left, left_min);
                self.write(" ");
                self.write(operator);
                self.write(" ");
                self.emit_operand(right, right_min);
            }
            IRNode::LogicalOr { left, right } => {
                self.emit_operand(left, precedence::LOGICAL_OR);
                self.write(" || ");
                self.emit_operand(right, precedence::LOGICAL_OR + 1);
            }
            IRNode::LogicalAnd { left, right } => {
                self.emit_operand(left, precedence::LOGICAL_AND);
                self.write(" && ");
                self.emit_operand(right, precedence::LOGICAL_AND + 1);
            }
            IRNode::PrefixUnaryExpr { operator, operand } => {
                self.write(operator);
                if operator.chars().all(char::is_alphabetic)
                    || Self::starts_with_same_sign(operator, operand)
                {
                    self.write(" ");
                }
                self.emit_operand(operand, precedence::PREFIX);
            }
            IRNode::PostfixUnaryExpr { operand, operator } => {
                self.emit_operand(operand, precedence::POSTFIX);
                self.write(operator);
            }
            IRNode::CallExpr { callee, arguments } => {
                self.emit_operand(callee, precedence::MEMBER);
                self.write("(");
                self.emit_comma_separated(arguments);
                self.write(")");
            }
            IRNode::NewExpr { callee, arguments } => {
                self.write("new ");
                if matches!(**callee, IRNode::CallExpr { .. }) {
                    self.write("(");
                    self.emit_node(callee);
                    self.write(")");
                } else {
                    self.emit_operand(callee, precedence::MEMBER);
                }
                self.write("(");
                self.emit_comma_separated(arguments);
                self.write(")");
            }
            IRNode::PropertyAccess { object, property } => {
                if Self::is_bare_integer(object) {
                    self.write("(");
                    self.emit_node(object);
                    self.write(")");
                } else {
                    self.emit_operand(object, precedence::MEMBER);
                }
                self.write(".");
                self.write(property);
            }
            IRNode::ElementAccess { object, index } => {
                self.emit_operand(object, precedence::MEMBER);
                self.write("[");
                self.emit_node(index);
                self.write("]");
            }
            IRNode::ConditionalExpr {
                condition,
                when_true,
                when_false,
            } => {
                self.emit_operand(condition, precedence::CONDITIONAL + 1);
                self.write(" ? ");
                self.emit_operand(when_true, precedence::ASSIGNMENT);
                self.write(" : ");
                self.emit_operand(when_false, precedence::ASSIGNMENT);
            }
            IRNode::Parenthesized(inner) => {
                self.write("(");
                self.emit_node(inner);
                self.write(")");
            }
            IRNode::CommaExpr(exprs) => {
                for (i, expr) in exprs.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.emit_operand(expr, precedence::ASSIGNMENT);
                }
            }
            IRNode::ArrayLiteral(elements) => {
                self.write("[");
                self.emit_comma_separated(elements);
                self.write("]");
            }
            IRNode::ObjectLiteral { properties } => {
                if properties.is_empty() {
                    self.write("{}");
                } else if properties.iter().any(|p| Self::is_block_like(&p.value)) {
                    self.emit_object_literal_multiline(properties);
                } else {
                    self.write("{ ");
                    for (i, prop) in properties.iter().enumerate() {
                        if i > 0 {
                            self.write(", ");
                        }
                        self.emit_property(prop);
                    }
                    self.write(" }");
                }
            }
            IRNode::FunctionExpr {
                name,
                parameters,
                body,
            } => {
                self.write("function ");
                if let Some(name) = name {
                    self.write(name);
                }
                self.write("(");
                self.emit_parameters(parameters);
                self.write(") ");
                self.emit_block(body);
            }

            IRNode::VarDecl { name, initializer } => {
                self.write("var ");
                self.emit_binding(name, initializer.as_deref());
                self.write(";");
            }
            IRNode::VarDeclList(decls) => {
                self.write("var ");
                let mut first = true;
                for decl in decls {
                    if let IRNode::VarDecl { name, initializer } = decl {
                        if !first {
                            self.write(", ");
                        }
                        first = false;
                        self.emit_binding(name, initializer.as_deref());
                    }
                }
                self.write(";");
            }
            IRNode::ExpressionStatement(expr) => {
                if Self::needs_statement_parens(expr) {
                    self.write("(");
                    self.emit_node(expr);
                    self.write(")");
                } else {
                    self.emit_node(expr);
                }
                self.write(";");
            }
            IRNode::ReturnStatement(expr) => {
                self.write("return");
                if let Some(expr) = expr {
                    self.write(" ");
                    self.emit_node(expr);
                }
                self.write(";");
            }
            IRNode::Block(stmts) => self.emit_block(stmts),
        }
    }

    fn emit_binding(&mut self, name: &str, initializer: Option<&IRNode>) {
        self.write(name);
        if let Some(init) = initializer {
            self.write(" = ");
            self.emit_operand(init, precedence::ASSIGNMENT);
        }
    }

    /// Emit `node`, parenthesized when it binds looser than `min_precedence`.
    fn emit_operand(&mut self, node: &IRNode, min_precedence: u8) {
        if Self::precedence_of(node) < min_precedence {
            self.write("(");
            self.emit_node(node);
            self.write(")");
        } else {
            self.emit_node(node);
        }
    }

    /// Precedence of the outermost operator of an expression node.
    pub(crate) fn precedence_of(node: &IRNode) -> u8 {
        match node {
            IRNode::CommaExpr(_) => precedence::COMMA,
            IRNode::BinaryExpr { operator, .. } => Self::binary_operator_precedence(operator),
            IRNode::ConditionalExpr { .. } => precedence::CONDITIONAL,
            IRNode::LogicalOr { .. } => precedence::LOGICAL_OR,
            IRNode::LogicalAnd { .. } => precedence::LOGICAL_AND,
            IRNode::PrefixUnaryExpr { .. } => precedence::PREFIX,
            IRNode::PostfixUnaryExpr { .. } => precedence::POSTFIX,
            IRNode::CallExpr { .. }
            | IRNode::NewExpr { .. }
            | IRNode::PropertyAccess { .. }
            | IRNode::ElementAccess { .. } => precedence::MEMBER,
            _ => precedence::PRIMARY,
        }
    }

    pub(crate) fn binary_operator_precedence(operator: &str) -> u8 {
        match operator {
            "=" | "+=" | "-=" | "*=" | "/=" | "%=" | "**=" | "<<=" | ">>=" | ">>>=" | "&="
            | "|=" | "^=" | "&&=" | "||=" | "??=" => precedence::ASSIGNMENT,
            "||" | "??" => precedence::LOGICAL_OR,
            "&&" => precedence::LOGICAL_AND,
            "|" => precedence::BITWISE_OR,
            "^" => precedence::BITWISE_XOR,
            "&" => precedence::BITWISE_AND,
            "==" | "!=" | "===" | "!==" => precedence::EQUALITY,
            "<" | ">" | "<=" | ">=" | "instanceof" | "in" => precedence::RELATIONAL,
            "<<" | ">>" | ">>>" => precedence::SHIFT,
            "+" | "-" => precedence::ADDITIVE,
            "*" | "/" | "%" => precedence::MULTIPLICATIVE,
            "**" => precedence::EXPONENT,
            _ => precedence::COMMA,
        }
    }
}

#[cfg(test)]
#[path = "../tests/ir_printer.rs"]
mod tests;
