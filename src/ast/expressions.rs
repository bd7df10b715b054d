use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

use super::ast::Expr;

// OPERATORS

/// Binary operators, loosest to tightest: `==`, `+ -`, `* % /`, `**`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Equals,
    Plus,
    Minus,
    Multiply,
    Modulo,
    Divide,
    Power,
}

impl BinaryOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Equals => Some(BinaryOperator::Equals),
            TokenKind::Plus => Some(BinaryOperator::Plus),
            TokenKind::Dash => Some(BinaryOperator::Minus),
            TokenKind::Star => Some(BinaryOperator::Multiply),
            TokenKind::Percent => Some(BinaryOperator::Modulo),
            TokenKind::Slash => Some(BinaryOperator::Divide),
            TokenKind::StarStar => Some(BinaryOperator::Power),
            _ => None,
        }
    }

    /// The operator exactly as written in source.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Equals => "==",
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Divide => "/",
            BinaryOperator::Power => "**",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Negate,
    Abs,
    Sqrt,
}

impl UnaryOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Dash => Some(UnaryOperator::Negate),
            TokenKind::Abs => Some(UnaryOperator::Abs),
            TokenKind::Sqrt => Some(UnaryOperator::Sqrt),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOperator::Negate => "-",
            UnaryOperator::Abs => "abs",
            UnaryOperator::Sqrt => "sqrt",
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// LITERALS

/// Literal
/// Represents a numeric constant in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: f64,
}

/// Identifier Expression
/// A variable reference, either read as a value or written as an assignment target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierExpression {
    pub name: String,
}

// OPERATIONS

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub operator: BinaryOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

impl BinaryExpression {
    pub fn new(operator: BinaryOperator, left: Expr, right: Expr) -> Self {
        BinaryExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub operand: Box<Expr>,
}

impl UnaryExpression {
    pub fn new(operator: UnaryOperator, operand: Expr) -> Self {
        UnaryExpression {
            operator,
            operand: Box::new(operand),
        }
    }
}
