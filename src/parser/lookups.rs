use std::collections::HashMap;

use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{
    expr::*,
    parser::Parser,
    stmt::*,
    tree::{ExprNode, StmtNode},
};

/// Precedence levels, loosest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Comparison,
    Additive,
    Multiplicative,
    Unary,
    Power,
    Primary,
}

pub type StmtHandler = fn(&mut Parser) -> Result<StmtNode, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<ExprNode, Error>;
pub type LEDHandler = fn(&mut Parser, ExprNode, BindingPower) -> Result<ExprNode, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Comparison
    parser.led(TokenKind::Equals, BindingPower::Comparison, parse_binary_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Percent, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);

    // Exponentiation groups to the right
    parser.led(TokenKind::StarStar, BindingPower::Power, parse_power_expr);

    // Literals and symbols
    parser.nud(TokenKind::Number, BindingPower::Primary, parse_primary_expr);
    parser.nud(TokenKind::Identifier, BindingPower::Primary, parse_primary_expr);
    parser.nud(TokenKind::OpenParen, BindingPower::Primary, parse_grouping_expr);

    // Prefix operators
    parser.nud(TokenKind::Dash, BindingPower::Unary, parse_prefix_expr);
    parser.nud(TokenKind::Abs, BindingPower::Unary, parse_prefix_expr);
    parser.nud(TokenKind::Sqrt, BindingPower::Unary, parse_prefix_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_var_decl_stmt);
    parser.stmt(TokenKind::Identifier, parse_assignment_stmt);
    parser.stmt(TokenKind::Print, parse_print_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, (BindingPower, NUDHandler)>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
