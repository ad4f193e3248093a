//! Helper methods for the IR printer.
//!
//! Blocks, object literal layout, string escaping and the write/indent
//! primitives.

use super::*;

impl IRPrinter {
    /// `{ }` when empty, otherwise one indented statement per line.
    pub(super) fn emit_block(&mut self, statements: &[IRNode]) {
        if statements.is_empty() {
            self.write("{ }");
            return;
        }
        self.write("{");
        self.write_line();
        self.increase_indent();
        for statement in statements {
            self.write_indent();
            self.emit_node(statement);
            self.write_line();
        }
        self.decrease_indent();
        self.write_indent();
        self.write("}");
    }

    pub(super) fn emit_comma_separated(&mut self, nodes: &[IRNode]) {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_operand(node, precedence::ASSIGNMENT);
        }
    }

    pub(super) fn emit_object_literal_multiline(&mut self, properties: &[IRProperty]) {
        self.write("{");
        self.write_line();
        self.increase_indent();
        for (i, prop) in properties.iter().enumerate() {
            self.write_indent();
            self.emit_property(prop);
            if i < properties.len() - 1 {
                self.write(",");
            }
            self.write_line();
        }
        self.decrease_indent();
        self.write_indent();
        self.write("}");
    }

    pub(super) fn emit_parameters(&mut self, params: &[IRParam]) {
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.write(&param.name);
        }
    }

    pub(super) fn emit_property(&mut self, prop: &IRProperty) {
        match &prop.key {
            IRPropertyKey::Identifier(name) => self.write(name),
            IRPropertyKey::StringLiteral(s) => {
                self.write("\"");
                self.write_escaped(s);
                self.write("\"");
            }
        }
        self.write(": ");
        self.emit_operand(&prop.value, precedence::ASSIGNMENT);
    }

    /// Values that force an object literal onto multiple lines.
    pub(super) fn is_block_like(node: &IRNode) -> bool {
        match node {
            IRNode::FunctionExpr { body, .. } => !body.is_empty(),
            IRNode::ObjectLiteral { properties } => {
                properties.iter().any(|p| Self::is_block_like(&p.value))
            }
            _ => false,
        }
    }

    /// `{` or `function` at statement start would be parsed as a declaration.
    pub(super) fn needs_statement_parens(expr: &IRNode) -> bool {
        let mut leftmost = expr;
        loop {
            match leftmost {
                IRNode::ObjectLiteral { .. } | IRNode::FunctionExpr { .. } => return true,
                IRNode::BinaryExpr { left, .. }
                | IRNode::LogicalOr { left, .. }
                | IRNode::LogicalAnd { left, .. } => leftmost = left,
                IRNode::ConditionalExpr { condition, .. } => leftmost = condition,
                IRNode::CallExpr { callee, .. } => leftmost = callee,
                IRNode::PropertyAccess { object, .. } | IRNode::ElementAccess { object, .. } => {
                    leftmost = object;
                }
                IRNode::PostfixUnaryExpr { operand, .. } => leftmost = operand,
                IRNode::CommaExpr(exprs) => match exprs.first() {
                    Some(first) => leftmost = first,
                    None => return false,
                },
                _ => return false,
            }
        }
    }

    /// `1.toString()` is a syntax error; integer literals need parens before `.`.
    pub(super) fn is_bare_integer(node: &IRNode) -> bool {
        matches!(node, IRNode::NumericLiteral(n) if n.bytes().all(|b| b.is_ascii_digit()))
    }

    /// `- -x` and `+ +x` must not collapse into `--x` / `++x`.
    pub(super) fn starts_with_same_sign(operator: &str, operand: &IRNode) -> bool {
        match operand {
            IRNode::PrefixUnaryExpr {
                operator: inner, ..
            } => inner.starts_with(operator) && (operator == "-" || operator == "+"),
            IRNode::NumericLiteral(n) => n.starts_with(operator),
            _ => false,
        }
    }

    pub(super) fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    pub(super) fn write_escaped(&mut self, s: &str) {
        for c in s.chars() {
            match c {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\0' => self.output.push_str("\\0"),
                c if (c as u32) < 0x20 || c == '\x7F' => {
                    let _ = write!(self.output, "\\u{:04X}", c as u32);
                }
                _ => self.output.push(c),
            }
        }
    }

    pub(super) fn write_line(&mut self) {
        self.output.push('\n');
    }

    pub(super) fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(&self.indent_str);
        }
    }

    pub(super) const fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub(super) const fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }
}
