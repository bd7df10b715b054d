use super::{
    expressions::{BinaryExpression, IdentifierExpression, Literal, UnaryExpression},
    statements::{Assignment, PrintStatement, VariableDeclaration},
};

/// Statement Types
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum StmtType {
    VariableDeclaration,
    Assignment,
    PrintStatement,
}

/// A statement. There are no other statement forms.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VariableDeclaration(VariableDeclaration),
    Assignment(Assignment),
    Print(PrintStatement),
}

impl Stmt {
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Stmt::VariableDeclaration(_) => StmtType::VariableDeclaration,
            Stmt::Assignment(_) => StmtType::Assignment,
            Stmt::Print(_) => StmtType::PrintStatement,
        }
    }
}

impl From<VariableDeclaration> for Stmt {
    fn from(stmt: VariableDeclaration) -> Self {
        Stmt::VariableDeclaration(stmt)
    }
}

impl From<Assignment> for Stmt {
    fn from(stmt: Assignment) -> Self {
        Stmt::Assignment(stmt)
    }
}

impl From<PrintStatement> for Stmt {
    fn from(stmt: PrintStatement) -> Self {
        Stmt::Print(stmt)
    }
}

/// An expression.
///
/// Parenthesised source has no node of its own: `(x)` and `x` build the same tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(BinaryExpression),
    Unary(UnaryExpression),
    Identifier(IdentifierExpression),
    Literal(Literal),
}

impl From<BinaryExpression> for Expr {
    fn from(expr: BinaryExpression) -> Self {
        Expr::Binary(expr)
    }
}

impl From<UnaryExpression> for Expr {
    fn from(expr: UnaryExpression) -> Self {
        Expr::Unary(expr)
    }
}

impl From<IdentifierExpression> for Expr {
    fn from(expr: IdentifierExpression) -> Self {
        Expr::Identifier(expr)
    }
}

impl From<Literal> for Expr {
    fn from(expr: Literal) -> Self {
        Expr::Literal(expr)
    }
}
