//! Parser module: the grammar of the language.
//!
//! This module turns a token stream into a [`tree::ParseTree`]. Expressions
//! are parsed with a Pratt parser (NUD and LED handlers plus binding powers)
//! encoding the precedence ladder, loosest to tightest:
//!
//! `==` < `+ -` < `* % /` < prefix `- abs sqrt` < `**` < atoms and `( )`
//!
//! Every binary operator groups to the left except `**`.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod tree;
