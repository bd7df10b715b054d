use crate::{
    ast::expressions::{BinaryOperator, UnaryOperator},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{lookups::BindingPower, parser::Parser, tree::ExprNode};

fn expected_operand(bp: BindingPower) -> &'static str {
    if bp >= BindingPower::Unary {
        "an identifier, number or `(`"
    } else {
        "an expression"
    }
}

fn misplaced_operator(token: &Token, expected: &str) -> Error {
    Error::new(
        ErrorImpl::UnexpectedToken {
            token: token.describe(),
            expected: String::from(expected),
        },
        token.span.start.clone(),
    )
}

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<ExprNode, Error> {
    parser.enter_nesting()?;
    let mut levels = 1;

    // First parse NUD, if one is allowed at this binding power
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some((nud_bp, nud_fn)) if *nud_bp > bp => *nud_fn,
        _ => return Err(parser.unexpected(expected_operand(bp))),
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than the current context, keep extending lhs
    loop {
        let token_kind = parser.current_token_kind();
        let led_bp = *parser
            .get_bp_lookup()
            .get(&token_kind)
            .unwrap_or(&BindingPower::Default);

        if led_bp <= bp {
            break;
        }

        let Some(led) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Err(parser.unexpected("an operator"));
        };

        // Every operator folded into `left` deepens the tree by one
        parser.enter_nesting()?;
        levels += 1;

        left = led(parser, left, led_bp)?;
    }

    parser.leave_nesting(levels);
    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<ExprNode, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.advance();
            let value = token.value.parse::<f64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                    token.span.start.clone(),
                )
            })?;

            Ok(ExprNode::Number { token, value })
        }
        TokenKind::Identifier => Ok(ExprNode::Identifier(parser.advance())),
        _ => Err(parser.unexpected("an expression")),
    }
}

/// Left-associative: the right operand is parsed at the operator's own binding power.
pub fn parse_binary_expr(
    parser: &mut Parser,
    left: ExprNode,
    bp: BindingPower,
) -> Result<ExprNode, Error> {
    let operator_token = parser.advance();
    let operator = BinaryOperator::from_token_kind(operator_token.kind)
        .ok_or_else(|| misplaced_operator(&operator_token, "a binary operator"))?;

    let right = parse_expr(parser, bp)?;

    Ok(ExprNode::Binary {
        left: Box::new(left),
        operator,
        operator_token,
        right: Box::new(right),
    })
}

/// `**` is right-associative and its right operand cannot start with a prefix operator.
pub fn parse_power_expr(
    parser: &mut Parser,
    left: ExprNode,
    _bp: BindingPower,
) -> Result<ExprNode, Error> {
    let operator_token = parser.advance();
    let operator = BinaryOperator::from_token_kind(operator_token.kind)
        .ok_or_else(|| misplaced_operator(&operator_token, "`**`"))?;

    let right = parse_expr(parser, BindingPower::Unary)?;

    Ok(ExprNode::Binary {
        left: Box::new(left),
        operator,
        operator_token,
        right: Box::new(right),
    })
}

/// Prefix `-`, `abs` and `sqrt` apply to a power expression, never to another prefix operator.
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<ExprNode, Error> {
    let operator_token = parser.advance();
    let operator = UnaryOperator::from_token_kind(operator_token.kind)
        .ok_or_else(|| misplaced_operator(&operator_token, "a prefix operator"))?;

    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(ExprNode::Unary {
        operator,
        operator_token,
        operand: Box::new(operand),
    })
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<ExprNode, Error> {
    let open = parser.advance();
    let inner = parse_expr(parser, BindingPower::Default)?;
    let close = parser.expect(TokenKind::CloseParen)?;

    Ok(ExprNode::Grouping {
        open,
        inner: Box::new(inner),
        close,
    })
}
