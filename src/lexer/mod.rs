//! Lexical analysis.
//!
//! Converts source text into a stream of tokens using anchored regex
//! patterns tried in order. Whitespace and `//` line comments are skipped,
//! identifiers are checked against the reserved words, and every token
//! records its span for diagnostics.

pub mod lexer;
pub mod tokens;
