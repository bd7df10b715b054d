#![allow(clippy::module_inception)]

use std::{fmt::Display, sync::Arc};

use crate::{
    ast::statements::Program,
    builder::builder::build_program,
    errors::errors::Error,
    lexer::lexer::tokenize,
    parser::{parser::parse_tokens, tree::ParseTree},
};

pub mod ast;
pub mod builder;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Source name used when the caller does not provide one.
pub const DEFAULT_SOURCE_NAME: &str = "input";

/// A location in the source text.
///
/// `offset` is a byte offset, `line` and `column` are 1-based and count characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    pub file: Arc<String>,
}

impl Position {
    pub fn start(file: Arc<String>) -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
            file,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Parses a complete program into its AST.
pub fn parse(source: &str) -> Result<Program, Error> {
    parse_named(source, None)
}

/// Parses a complete program, attributing positions in diagnostics to `file`.
pub fn parse_named(source: &str, file: Option<String>) -> Result<Program, Error> {
    let tree = recognize(source, file)?;
    let program = build_program(&tree);

    tracing::debug!(statements = program.len(), "parsed program");
    Ok(program)
}

/// Runs the grammar over `source` without building the AST.
///
/// Succeeds only if the whole input is consumed.
pub fn recognize(source: &str, file: Option<String>) -> Result<ParseTree, Error> {
    let file = Arc::new(file.unwrap_or_else(|| String::from(DEFAULT_SOURCE_NAME)));
    tracing::debug!(file = %file, bytes = source.len(), "recognizing source");

    let tokens = tokenize(source, Arc::clone(&file));
    let result = parse_tokens(tokens, file);

    if let Err(error) = &result {
        tracing::debug!(%error, "syntax error");
    }

    result
}

/// Returns the 1-based line number, the text of the line and the byte offset
/// within that line for a byte `position` in `content`.
///
/// A position at the very end of the input maps onto the last line.
pub fn get_line_at_position(content: &str, pos: usize) -> Option<(usize, String, usize)> {
    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // End of input: either past a trailing newline or on an unterminated last line
    if content.is_empty() || content.ends_with('\n') {
        Some((line_number, String::new(), 0))
    } else {
        let last = content.split_inclusive('\n').last().unwrap_or_default();
        Some((line_number - 1, last.to_string(), last.len()))
    }
}
