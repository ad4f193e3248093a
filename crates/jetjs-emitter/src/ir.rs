//! JavaScript output tree.
//!
//! Every lowering operation returns an `IRNode` that the caller owns; nothing
//! here refers back to the source program. `IRPrinter` turns the tree into
//! text and decides where parentheses are needed, so builders never add them
//! for precedence reasons.

/// One JavaScript expression or statement.
#[derive(Debug, Clone, PartialEq)]
pub enum IRNode {
    // =========================================================================
    // Literals
    // =========================================================================
    /// Already formatted number text, `-` excluded (`1`, `2.5`).
    NumericLiteral(String),
    /// Unescaped string contents; the printer adds quotes and escapes.
    StringLiteral(String),
    BooleanLiteral(bool),
    NullLiteral,
    /// `void 0`
    Undefined,

    // =========================================================================
    // Names
    // =========================================================================
    Identifier(String),
    This,

    // =========================================================================
    // Expressions
    // =========================================================================
    /// `left op right`, assignment and compound assignment included.
    BinaryExpr {
        left: Box<Self>,
        operator: String,
        right: Box<Self>,
    },
    PrefixUnaryExpr {
        operator: String,
        operand: Box<Self>,
    },
    PostfixUnaryExpr {
        operand: Box<Self>,
        operator: String,
    },
    CallExpr {
        callee: Box<Self>,
        arguments: Vec<Self>,
    },
    /// `new Callee(arguments)`
    NewExpr {
        callee: Box<Self>,
        arguments: Vec<Self>,
    },
    /// `object.property`
    PropertyAccess { object: Box<Self>, property: String },
    /// `object[index]`
    ElementAccess { object: Box<Self>, index: Box<Self> },
    /// `condition ? when_true : when_false`
    ConditionalExpr {
        condition: Box<Self>,
        when_true: Box<Self>,
        when_false: Box<Self>,
    },
    /// Parentheses required by meaning rather than precedence, e.g. the
    /// value of a postfix increment `(_a = x, x = _a.inc(), _a)`.
    Parenthesized(Box<Self>),
    CommaExpr(Vec<Self>),
    ArrayLiteral(Vec<Self>),
    /// `{ key: value }`, printed over several lines when a value is a
    /// function with a body.
    ObjectLiteral { properties: Vec<IRProperty> },
    FunctionExpr {
        name: Option<String>,
        parameters: Vec<IRParam>,
        body: Vec<Self>,
    },
    LogicalOr { left: Box<Self>, right: Box<Self> },
    LogicalAnd { left: Box<Self>, right: Box<Self> },

    // =========================================================================
    // Statements
    // =========================================================================
    /// `var name = initializer;`
    VarDecl {
        name: String,
        initializer: Option<Box<Self>>,
    },
    /// `var _a, _b;`, holding `VarDecl` entries.
    VarDeclList(Vec<Self>),
    ExpressionStatement(Box<Self>),
    ReturnStatement(Option<Box<Self>>),
    Block(Vec<Self>),
}

/// `key: value` entry of an object literal.
#[derive(Debug, Clone, PartialEq)]
pub struct IRProperty {
    pub key: IRPropertyKey,
    pub value: IRNode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IRPropertyKey {
    /// `key`
    Identifier(String),
    /// `"key"`
    StringLiteral(String),
}

impl IRPropertyKey {
    pub fn text(&self) -> &str {
        match self {
            Self::Identifier(text) | Self::StringLiteral(text) => text,
        }
    }
}

/// Parameter of a function expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IRParam {
    pub name: String,
}

impl IRNode {
    pub fn id(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    pub fn string(text: impl Into<String>) -> Self {
        Self::StringLiteral(text.into())
    }

    pub fn number(text: impl Into<String>) -> Self {
        Self::NumericLiteral(text.into())
    }

    pub const fn this() -> Self {
        Self::This
    }

    pub fn call(callee: Self, arguments: Vec<Self>) -> Self {
        Self::CallExpr {
            callee: Box::new(callee),
            arguments,
        }
    }

    pub fn new_expr(callee: Self, arguments: Vec<Self>) -> Self {
        Self::NewExpr {
            callee: Box::new(callee),
            arguments,
        }
    }

    /// `object.property`
    pub fn prop(object: Self, property: impl Into<String>) -> Self {
        Self::PropertyAccess {
            object: Box::new(object),
            property: property.into(),
        }
    }

    /// `object[index]`
    pub fn elem(object: Self, index: Self) -> Self {
        Self::ElementAccess {
            object: Box::new(object),
            index: Box::new(index),
        }
    }

    /// `a.b.c` from a dotted path.
    pub fn dotted(path: &str) -> Self {
        let mut segments = path.split('.');
        let head = segments.next().unwrap_or_default();
        segments.fold(Self::id(head), Self::prop)
    }

    pub fn binary(left: Self, operator: impl Into<String>, right: Self) -> Self {
        Self::BinaryExpr {
            left: Box::new(left),
            operator: operator.into(),
            right: Box::new(right),
        }
    }

    /// `target = value`
    pub fn assign(target: Self, value: Self) -> Self {
        Self::binary(target, "=", value)
    }

    pub fn prefix(operator: impl Into<String>, operand: Self) -> Self {
        Self::PrefixUnaryExpr {
            operator: operator.into(),
            operand: Box::new(operand),
        }
    }

    pub fn postfix(operand: Self, operator: impl Into<String>) -> Self {
        Self::PostfixUnaryExpr {
            operand: Box::new(operand),
            operator: operator.into(),
        }
    }

    pub fn logical_or(left: Self, right: Self) -> Self {
        Self::LogicalOr {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn logical_and(left: Self, right: Self) -> Self {
        Self::LogicalAnd {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn conditional(condition: Self, when_true: Self, when_false: Self) -> Self {
        Self::ConditionalExpr {
            condition: Box::new(condition),
            when_true: Box::new(when_true),
            when_false: Box::new(when_false),
        }
    }

    pub fn paren(self) -> Self {
        Self::Parenthesized(Box::new(self))
    }

    pub const fn array(elements: Vec<Self>) -> Self {
        Self::ArrayLiteral(elements)
    }

    pub const fn object(properties: Vec<IRProperty>) -> Self {
        Self::ObjectLiteral { properties }
    }

    pub const fn func_expr(name: Option<String>, parameters: Vec<IRParam>, body: Vec<Self>) -> Self {
        Self::FunctionExpr {
            name,
            parameters,
            body,
        }
    }

    pub fn var_decl(name: impl Into<String>, initializer: Option<Self>) -> Self {
        Self::VarDecl {
            name: name.into(),
            initializer: initializer.map(Box::new),
        }
    }

    pub fn expr_stmt(expression: Self) -> Self {
        Self::ExpressionStatement(Box::new(expression))
    }

    pub fn ret(expression: Option<Self>) -> Self {
        Self::ReturnStatement(expression.map(Box::new))
    }

    pub const fn block(statements: Vec<Self>) -> Self {
        Self::Block(statements)
    }

    /// A bare identifier: the only shape that can be repeated without
    /// evaluating anything twice.
    pub const fn is_simple_name(&self) -> bool {
        matches!(self, Self::Identifier(_))
    }
}

impl IRParam {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl IRProperty {
    /// `key: value`
    pub fn init(key: impl Into<String>, value: IRNode) -> Self {
        Self {
            key: IRPropertyKey::Identifier(key.into()),
            value,
        }
    }

    /// `"key": value`
    pub fn init_string(key: impl Into<String>, value: IRNode) -> Self {
        Self {
            key: IRPropertyKey::StringLiteral(key.into()),
            value,
        }
    }
}
