//! Parser implementation.
//!
//! The parser walks the token stream with a Pratt loop driven by lookup
//! tables:
//! - Statement handlers, keyed by the token that starts the statement
//! - NUD (null denotation) handlers for operands and prefix operators,
//!   each with the binding power it occupies
//! - LED (left denotation) handlers for infix operators
//! - Binding powers for infix precedence
//!
//! It produces a [`ParseTree`] and fails on the first token the grammar
//! cannot accept, including anything left over after the last statement.
//! Expressions may nest at most [`MAX_NESTING_DEPTH`] levels, counting
//! parentheses, prefix operators and chained infix operators alike, so the
//! recursive parser, builder and tree drop stay within a thread's stack.

use std::{collections::HashMap, sync::Arc};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
    tree::ParseTree,
};

pub const MAX_NESTING_DEPTH: usize = 256;

/// Parsing state: the token stream, the cursor and the handler tables.
pub struct Parser {
    /// The list of tokens to parse, always terminated by `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (operand and prefix) handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Expression levels currently open
    depth: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>, file: Arc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(|| Position::start(file));

            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span {
                    start: end.clone(),
                    end
                }
            ));
        }

        Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous one. Stays put on `EOF`.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if token.kind != TokenKind::EOF {
            self.pos += 1;
        }

        token
    }

    /// Consumes a token of `expected_kind` or fails naming what was expected.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.unexpected(expected_kind.describe()));
        }

        Ok(self.advance())
    }

    /// Like `expect(TokenKind::Identifier)`, with a dedicated error for reserved words.
    pub fn expect_identifier(&mut self) -> Result<Token, Error> {
        let token = self.current_token();

        if token.kind.is_reserved() {
            return Err(Error::new(
                ErrorImpl::ReservedKeyword {
                    keyword: token.value.clone(),
                },
                token.span.start.clone(),
            ));
        }

        self.expect(TokenKind::Identifier)
    }

    /// An error at the current token saying `expected` was wanted instead.
    pub fn unexpected(&self, expected: &str) -> Error {
        let token = self.current_token();

        Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.describe(),
                expected: String::from(expected),
            },
            token.span.start.clone(),
        )
    }

    /// Opens one expression level, failing at the current token past [`MAX_NESTING_DEPTH`].
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        self.depth += 1;

        if self.depth > MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        Ok(())
    }

    pub fn leave_nesting(&mut self, levels: usize) {
        self.depth = self.depth.saturating_sub(levels);
    }

    /// Returns true while the current token is not `EOF`.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation handler for a token.
    ///
    /// The handler only applies where the surrounding binding power is
    /// looser than `binding_power`, which is how prefix operators are kept
    /// out of unary operands and exponentiation.
    pub fn nud(&mut self, kind: TokenKind, binding_power: BindingPower, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, (binding_power, nud_fn));
    }

    /// Registers a statement handler for the token that begins it.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }
}

/// Parses a stream of tokens into a [`ParseTree`].
///
/// A program is one or more statements with nothing after the last one.
pub fn parse_tokens(tokens: Vec<Token>, file: Arc<String>) -> Result<ParseTree, Error> {
    let mut parser = Parser::new(tokens, Arc::clone(&file));
    create_token_lookups(&mut parser);

    let mut statements = vec![parse_stmt(&mut parser)?];

    while parser.has_tokens() {
        statements.push(parse_stmt(&mut parser)?);
    }

    tracing::trace!(statements = statements.len(), "parsed token stream");

    Ok(ParseTree {
        statements,
        span: Span {
            start: Position::start(file),
            end: parser.get_position(),
        },
    })
}
