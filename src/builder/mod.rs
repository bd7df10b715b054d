//! Maps a parse tree onto the AST, one match arm per node kind.
//!
//! Parenthesised expressions are lifted to their inner expression and
//! keywords, `=` and parentheses are dropped; everything else maps one to one.

pub mod builder;

#[cfg(test)]
mod tests;
