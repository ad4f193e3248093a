//! Operator tokens of operation expressions.

use serde::{Deserialize, Serialize};

/// Operator token of a binary, prefix or postfix expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationToken {
    Plus,
    Minus,
    Mul,
    Div,
    Perc,
    RangeTo,
    Eq,
    NotEq,
    Identity,
    NotIdentity,
    Lt,
    Gt,
    LtEq,
    GtEq,
    AndAnd,
    OrOr,
    Elvis,
    Assign,
    PlusAssign,
    MinusAssign,
    MulAssign,
    DivAssign,
    PercAssign,
    Excl,
    ExclExcl,
    PlusPlus,
    MinusMinus,
}

impl OperationToken {
    /// Source spelling of the token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Perc => "%",
            Self::RangeTo => "..",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Identity => "===",
            Self::NotIdentity => "!==",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::AndAnd => "&&",
            Self::OrOr => "||",
            Self::Elvis => "?:",
            Self::Assign => "=",
            Self::PlusAssign => "+=",
            Self::MinusAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
            Self::PercAssign => "%=",
            Self::Excl => "!",
            Self::ExclExcl => "!!",
            Self::PlusPlus => "++",
            Self::MinusMinus => "--",
        }
    }

    /// JavaScript operator with the same meaning on primitive operands.
    ///
    /// `None` for tokens without a direct JavaScript counterpart (`..`, `?:`, `!!`).
    pub const fn js_operator(self) -> Option<&'static str> {
        match self {
            Self::RangeTo | Self::Elvis | Self::ExclExcl => None,
            Self::Identity => Some("==="),
            Self::NotIdentity => Some("!=="),
            other => Some(other.as_str()),
        }
    }

    /// Conventional name of the operator function the token resolves to.
    pub const fn function_name(self) -> Option<&'static str> {
        match self {
            Self::Plus => Some("plus"),
            Self::Minus => Some("minus"),
            Self::Mul => Some("times"),
            Self::Div => Some("div"),
            Self::Perc => Some("mod"),
            Self::RangeTo => Some("rangeTo"),
            Self::Eq | Self::NotEq => Some("equals"),
            Self::Lt | Self::Gt | Self::LtEq | Self::GtEq => Some("compareTo"),
            Self::Excl => Some("not"),
            Self::PlusPlus => Some("inc"),
            Self::MinusMinus => Some("dec"),
            Self::PlusAssign => Some("plusAssign"),
            Self::MinusAssign => Some("minusAssign"),
            Self::MulAssign => Some("timesAssign"),
            Self::DivAssign => Some("divAssign"),
            Self::PercAssign => Some("modAssign"),
            _ => None,
        }
    }

    pub const fn is_assignment(self) -> bool {
        matches!(
            self,
            Self::Assign
                | Self::PlusAssign
                | Self::MinusAssign
                | Self::MulAssign
                | Self::DivAssign
                | Self::PercAssign
        )
    }

    /// Comparison tokens lowered through `compareTo`.
    pub const fn is_comparison(self) -> bool {
        matches!(self, Self::Lt | Self::Gt | Self::LtEq | Self::GtEq)
    }

    pub const fn is_equality(self) -> bool {
        matches!(
            self,
            Self::Eq | Self::NotEq | Self::Identity | Self::NotIdentity
        )
    }
}
