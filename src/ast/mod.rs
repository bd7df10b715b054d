/// AST (Abstract Syntax Tree) module
///
/// Submodules:
/// - ast: The closed statement and expression unions
/// - expressions: Expression nodes and operators
/// - statements: Statement nodes and the program root
pub mod ast;
pub mod expressions;
pub mod statements;
