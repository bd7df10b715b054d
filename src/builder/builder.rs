use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::{BinaryExpression, IdentifierExpression, Literal, UnaryExpression},
        statements::{Assignment, PrintStatement, Program, VariableDeclaration},
    },
    parser::tree::{ExprNode, ParseTree, StmtNode},
};

/// Builds the AST for a successful parse.
///
/// Every parse tree maps onto an AST, so this cannot fail. No checks beyond
/// the grammar are made here; whether an assigned name was declared is left
/// to later phases.
pub fn build_program(tree: &ParseTree) -> Program {
    let statements: Vec<Stmt> = tree.statements.iter().map(build_stmt).collect();

    tracing::trace!(statements = statements.len(), "built program");
    Program { statements }
}

pub fn build_stmt(node: &StmtNode) -> Stmt {
    match node {
        StmtNode::Declaration { name, value, .. } => VariableDeclaration {
            name: name.value.clone(),
            initializer: build_expr(value),
        }
        .into(),
        // The target is a bare name token, but it is still wrapped as an identifier expression
        StmtNode::Assignment { name, value, .. } => Assignment {
            target: IdentifierExpression {
                name: name.value.clone(),
            },
            value: build_expr(value),
        }
        .into(),
        StmtNode::Print { value, .. } => PrintStatement {
            value: build_expr(value),
        }
        .into(),
    }
}

pub fn build_expr(node: &ExprNode) -> Expr {
    match node {
        ExprNode::Binary {
            left,
            operator,
            right,
            ..
        } => BinaryExpression::new(*operator, build_expr(left), build_expr(right)).into(),
        ExprNode::Unary {
            operator, operand, ..
        } => UnaryExpression::new(*operator, build_expr(operand)).into(),
        ExprNode::Grouping { inner, .. } => build_expr(inner),
        ExprNode::Number { value, .. } => Literal { value: *value }.into(),
        ExprNode::Identifier(token) => IdentifierExpression {
            name: token.value.clone(),
        }
        .into(),
    }
}
