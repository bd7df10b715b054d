use crate::{errors::errors::Error, lexer::tokens::TokenKind, parser::{expr::parse_expr, lookups::BindingPower}};

use super::{parser::Parser, tree::StmtNode};

pub fn parse_stmt(parser: &mut Parser) -> Result<StmtNode, Error> {
    let handler = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied();

    match handler {
        Some(stmt_fn) => stmt_fn(parser),
        None => Err(parser.unexpected("a statement")),
    }
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<StmtNode, Error> {
    let keyword = parser.advance();
    let name = parser.expect_identifier()?;
    let equals = parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(StmtNode::Declaration {
        keyword,
        name,
        equals,
        value,
    })
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<StmtNode, Error> {
    let name = parser.advance();
    let equals = parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(StmtNode::Assignment {
        name,
        equals,
        value,
    })
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<StmtNode, Error> {
    let keyword = parser.advance();
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(StmtNode::Print { keyword, value })
}
