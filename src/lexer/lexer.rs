use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Called with the byte length of the text the pattern matched at the lexer's position.
pub type RegexHandler = fn(&mut Lexer, usize);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(regex).expect("token patterns are valid regexes"),
        handler,
    }
}

lazy_static! {
    // Anchored, tried in order; the first pattern that matches wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern(r"^\p{L}[\p{L}0-9]*", symbol_handler),
        pattern(r"^[0-9]+(\.[0-9]+)?", number_handler),
        // Every control character and the ASCII space; nothing above U+0020.
        pattern(r"^[\x00-\x20]+", skip_handler),
        pattern(r"^//[^\n]*", skip_handler),
        pattern(r"^\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        pattern(r"^\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        pattern(r"^==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        pattern(r"^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        pattern(r"^\*\*", MK_DEFAULT_HANDLER!(TokenKind::StarStar, "**")),
        pattern(r"^\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
        pattern(r"^\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        pattern(r"^-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        pattern(r"^/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        pattern(r"^%", MK_DEFAULT_HANDLER!(TokenKind::Percent, "%")),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: usize,
    column: usize,
    file: Arc<String>,
}

impl Lexer {
    pub fn new(source: &str, file: Arc<String>) -> Lexer {
        Lexer {
            tokens: vec![],
            source: source.to_string(),
            pos: 0,
            line: 1,
            column: 1,
            file,
        }
    }

    /// Moves past the next `n` bytes, keeping line and column in step.
    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());

        for c in self.source[self.pos..end].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.pos = end;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
            column: self.column,
            file: Arc::clone(&self.file),
        }
    }

    /// Span of `text` starting at the current position. Tokens never contain newlines.
    pub fn span_for(&self, text: &str) -> Span {
        let start = self.position();
        let end = Position {
            offset: start.offset + text.len(),
            column: start.column + text.chars().count(),
            ..start.clone()
        };

        Span { start, end }
    }

    fn slice(&self, len: usize) -> String {
        self.remainder()[..len].to_string()
    }
}

fn number_handler(lexer: &mut Lexer, len: usize) {
    let matched = lexer.slice(len);
    let span = lexer.span_for(&matched);

    lexer.push(MK_TOKEN!(TokenKind::Number, matched, span));
    lexer.advance_n(len);
}

fn skip_handler(lexer: &mut Lexer, len: usize) {
    lexer.advance_n(len);
}

// Identifiers are matched maximally before the reserved check, so `lets` and
// `let1` stay identifiers and only a bare `let` is the keyword.
fn symbol_handler(lexer: &mut Lexer, len: usize) {
    let value = lexer.slice(len);
    let span = lexer.span_for(&value);

    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.push(MK_TOKEN!(kind, value, span));
    lexer.advance_n(len);
}

/// Lexing never fails on its own. A character no pattern accepts becomes an
/// `Unrecognised` token followed by EOF, and the parser reports it where the
/// grammar fails, so an earlier syntax error still wins.
pub fn tokenize(source: &str, file: Arc<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let matched = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(lex.remainder())
                .map(|found| (pattern.handler, found.end()))
        });

        match matched {
            Some((handler, len)) => handler(&mut lex, len),
            None => {
                let value = lex.at().map(String::from).unwrap_or_default();
                let span = lex.span_for(&value);
                lex.push(MK_TOKEN!(TokenKind::Unrecognised, value, span));
                break;
            }
        }
    }

    let span = lex.span_for("");
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), span));

    tracing::trace!(count = lex.tokens.len(), "tokenized source");
    lex.tokens
}
