//! Error types for the front-end.
//!
//! Every failure is a syntax error: an unrecognised character, a token the
//! grammar did not expect, or a reserved keyword in identifier position.
//! Errors carry the position of the first unmatched input and can render
//! themselves against the source with a caret under the offending column.

pub mod errors;

#[cfg(test)]
mod tests;
