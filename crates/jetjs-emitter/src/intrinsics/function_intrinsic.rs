//! Built-in lowerings that replace a generic function call.

use crate::error::LoweringError;
use crate::ir::IRNode;
use jetjs_ast::OperationToken;
use serde::{Deserialize, Serialize};

/// Runtime helper object that hosts library intrinsics (`jet.equals(a, b)`).
pub const RUNTIME_OBJECT: &str = "jet";

/// Operands of an intrinsic call site.
///
/// The receiver, when present, is the first operand: `a.plus(b)` and `a + b`
/// both lower from `[a, b]`.
#[derive(Debug, Clone, PartialEq)]
pub struct IntrinsicCall {
    pub receiver: Option<IRNode>,
    pub arguments: Vec<IRNode>,
    /// Operator token when the call site is an operation expression.
    pub operation: Option<OperationToken>,
}

impl IntrinsicCall {
    pub const fn new(receiver: Option<IRNode>, arguments: Vec<IRNode>) -> Self {
        Self {
            receiver,
            arguments,
            operation: None,
        }
    }

    #[must_use]
    pub const fn with_operation(mut self, operation: OperationToken) -> Self {
        self.operation = Some(operation);
        self
    }

    fn into_operands(self) -> Vec<IRNode> {
        self.receiver.into_iter().chain(self.arguments).collect()
    }
}

/// How a matched descriptor is lowered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FunctionIntrinsic {
    /// `a <operator> b`
    BinaryOperator { operator: String },
    /// `a / b | 0`
    TruncatingDivision,
    /// `<operator>a`
    PrefixOperator { operator: String },
    /// `a <operator> 1`
    Increment { operator: String },
    /// `a.<property>`
    PropertyAccess { property: String },
    /// `a[i]`
    ElementGet,
    /// `a[i] = v`
    ElementSet,
    /// `a.<method>(args)`
    MethodCall { method: String },
    /// `jet.<function>(a, args)`
    LibraryCall { function: String },
    /// `<function>(a, args)` where `function` may be dotted (`console.log`)
    GlobalCall { function: String },
    /// `new <constructor>(a, args)`
    Constructor { constructor: String },
    /// `[args]`
    ArrayOf,
    /// `a < b` for comparison operators, `jet.compare(a, b)` for explicit calls
    PrimitiveComparison,
    /// `a === b` on primitives, `jet.equals(a, b)` otherwise; negated for `!=`
    Equals { primitive: bool },
}

impl FunctionIntrinsic {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BinaryOperator { .. } => "binary_operator",
            Self::TruncatingDivision => "truncating_division",
            Self::PrefixOperator { .. } => "prefix_operator",
            Self::Increment { .. } => "increment",
            Self::PropertyAccess { .. } => "property_access",
            Self::ElementGet => "element_get",
            Self::ElementSet => "element_set",
            Self::MethodCall { .. } => "method_call",
            Self::LibraryCall { .. } => "library_call",
            Self::GlobalCall { .. } => "global_call",
            Self::Constructor { .. } => "constructor",
            Self::ArrayOf => "array_of",
            Self::PrimitiveComparison => "primitive_comparison",
            Self::Equals { .. } => "equals",
        }
    }

    /// Lower a call site.
    pub fn apply(&self, call: IntrinsicCall) -> Result<IRNode, LoweringError> {
        let operation = call.operation;
        let operands = call.into_operands();
        match self {
            Self::BinaryOperator { operator } => {
                let [left, right] = self.exact(operands)?;
                Ok(IRNode::binary(left, operator.as_str(), right))
            }
            Self::TruncatingDivision => {
                let [left, right] = self.exact(operands)?;
                Ok(IRNode::binary(
                    IRNode::binary(left, "/", right),
                    "|",
                    IRNode::number("0"),
                ))
            }
            Self::PrefixOperator { operator } => {
                let [operand] = self.exact(operands)?;
                Ok(IRNode::prefix(operator.as_str(), operand))
            }
            Self::Increment { operator } => {
                let [operand] = self.exact(operands)?;
                Ok(IRNode::binary(operand, operator.as_str(), IRNode::number("1")))
            }
            Self::PropertyAccess { property } => {
                let [object] = self.exact(operands)?;
                Ok(IRNode::prop(object, property.as_str()))
            }
            Self::ElementGet => {
                let [array, index] = self.exact(operands)?;
                Ok(IRNode::elem(array, index))
            }
            Self::ElementSet => {
                let [array, index, value] = self.exact(operands)?;
                Ok(IRNode::assign(IRNode::elem(array, index), value))
            }
            Self::MethodCall { method } => {
                let mut operands = operands.into_iter();
                let Some(object) = operands.next() else {
                    return Err(self.arity_error(1, 0));
                };
                Ok(IRNode::call(
                    IRNode::prop(object, method.as_str()),
                    operands.collect(),
                ))
            }
            Self::LibraryCall { function } => Ok(IRNode::call(
                IRNode::prop(IRNode::id(RUNTIME_OBJECT), function.as_str()),
                operands,
            )),
            Self::GlobalCall { function } => Ok(IRNode::call(IRNode::dotted(function), operands)),
            Self::Constructor { constructor } => {
                Ok(IRNode::new_expr(IRNode::dotted(constructor), operands))
            }
            Self::ArrayOf => Ok(IRNode::array(operands)),
            Self::PrimitiveComparison => {
                let [left, right] = self.exact(operands)?;
                match operation.and_then(comparison_operator) {
                    Some(operator) => Ok(IRNode::binary(left, operator, right)),
                    None => Ok(IRNode::call(
                        IRNode::prop(IRNode::id(RUNTIME_OBJECT), "compare"),
                        vec![left, right],
                    )),
                }
            }
            Self::Equals { primitive } => {
                let [left, right] = self.exact(operands)?;
                let negated = operation == Some(OperationToken::NotEq);
                if *primitive {
                    let operator = if negated { "!==" } else { "===" };
                    return Ok(IRNode::binary(left, operator, right));
                }
                let equals = IRNode::call(
                    IRNode::prop(IRNode::id(RUNTIME_OBJECT), "equals"),
                    vec![left, right],
                );
                Ok(if negated {
                    IRNode::prefix("!", equals)
                } else {
                    equals
                })
            }
        }
    }

    fn exact<const N: usize>(&self, operands: Vec<IRNode>) -> Result<[IRNode; N], LoweringError> {
        let found = operands.len();
        operands
            .try_into()
            .map_err(|_| self.arity_error(N, found))
    }

    const fn arity_error(&self, expected: usize, found: usize) -> LoweringError {
        LoweringError::IntrinsicArity {
            intrinsic: self.name(),
            expected,
            found,
        }
    }
}

const fn comparison_operator(token: OperationToken) -> Option<&'static str> {
    match token {
        OperationToken::Lt => Some("<"),
        OperationToken::Gt => Some(">"),
        OperationToken::LtEq => Some("<="),
        OperationToken::GtEq => Some(">="),
        _ => None,
    }
}
