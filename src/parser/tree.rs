//! The concrete parse tree produced by the grammar.
//!
//! Unlike the AST, the tree keeps every token it consumed (keywords, `=`,
//! parentheses) so each node can report the exact source span it covers.

use crate::{
    ast::expressions::{BinaryOperator, UnaryOperator},
    lexer::tokens::Token,
    Span,
};

/// A successful match of `Program = Statement+` over the whole input.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseTree {
    pub statements: Vec<StmtNode>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StmtNode {
    /// `let name = value`
    Declaration {
        keyword: Token,
        name: Token,
        equals: Token,
        value: ExprNode,
    },
    /// `name = value`
    Assignment {
        name: Token,
        equals: Token,
        value: ExprNode,
    },
    /// `print value`
    Print { keyword: Token, value: ExprNode },
}

impl StmtNode {
    pub fn get_span(&self) -> Span {
        let (start, value) = match self {
            StmtNode::Declaration { keyword, value, .. } => (keyword, value),
            StmtNode::Assignment { name, value, .. } => (name, value),
            StmtNode::Print { keyword, value } => (keyword, value),
        };

        Span {
            start: start.span.start.clone(),
            end: value.get_span().end,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprNode {
    Binary {
        left: Box<ExprNode>,
        operator: BinaryOperator,
        operator_token: Token,
        right: Box<ExprNode>,
    },
    Unary {
        operator: UnaryOperator,
        operator_token: Token,
        operand: Box<ExprNode>,
    },
    Grouping {
        open: Token,
        inner: Box<ExprNode>,
        close: Token,
    },
    Number {
        token: Token,
        value: f64,
    },
    Identifier(Token),
}

impl ExprNode {
    pub fn get_span(&self) -> Span {
        match self {
            ExprNode::Binary { left, right, .. } => Span {
                start: left.get_span().start,
                end: right.get_span().end,
            },
            ExprNode::Unary {
                operator_token,
                operand,
                ..
            } => Span {
                start: operator_token.span.start.clone(),
                end: operand.get_span().end,
            },
            ExprNode::Grouping { open, close, .. } => Span {
                start: open.span.start.clone(),
                end: close.span.end.clone(),
            },
            ExprNode::Number { token, .. } | ExprNode::Identifier(token) => token.span.clone(),
        }
    }
}
