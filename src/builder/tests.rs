//! Unit tests for the AST builder.

use crate::ast::{
    ast::{Expr, Stmt, StmtType},
    expressions::{BinaryExpression, BinaryOperator, IdentifierExpression, Literal, UnaryExpression, UnaryOperator},
    statements::{Assignment, PrintStatement, VariableDeclaration},
};
use crate::recognize;

use super::builder::{build_expr, build_program};

fn num(value: f64) -> Expr {
    Literal { value }.into()
}

fn ident(name: &str) -> Expr {
    IdentifierExpression {
        name: name.to_string(),
    }
    .into()
}

fn binary(operator: BinaryOperator, left: Expr, right: Expr) -> Expr {
    BinaryExpression::new(operator, left, right).into()
}

#[test]
fn test_build_each_statement_form() {
    let tree = recognize("let x = 1 x = 2 print x", None).unwrap();
    let program = build_program(&tree);

    assert_eq!(
        program.statements,
        vec![
            Stmt::from(VariableDeclaration {
                name: "x".to_string(),
                initializer: num(1.0),
            }),
            Stmt::from(Assignment {
                target: IdentifierExpression {
                    name: "x".to_string()
                },
                value: num(2.0),
            }),
            Stmt::from(PrintStatement { value: ident("x") }),
        ]
    );

    let types: Vec<StmtType> = program.iter().map(Stmt::get_stmt_type).collect();
    assert_eq!(
        types,
        vec![
            StmtType::VariableDeclaration,
            StmtType::Assignment,
            StmtType::PrintStatement
        ]
    );
}

#[test]
fn test_build_lifts_groupings() {
    let tree = recognize("print ((x))", None).unwrap();
    let program = build_program(&tree);

    assert_eq!(program.statements, vec![Stmt::from(PrintStatement { value: ident("x") })]);
}

#[test]
fn test_build_nested_expression() {
    let tree = recognize("print -(a + 2) * b ** 0.5", None).unwrap();
    let program = build_program(&tree);

    let Stmt::Print(PrintStatement { value }) = &program.statements[0] else {
        panic!("Expected print statement");
    };

    let expected = binary(
        BinaryOperator::Multiply,
        UnaryExpression::new(
            UnaryOperator::Negate,
            binary(BinaryOperator::Plus, ident("a"), num(2.0)),
        )
        .into(),
        binary(BinaryOperator::Power, ident("b"), num(0.5)),
    );

    assert_eq!(value, &expected);
}

#[test]
fn test_build_expr_is_deterministic() {
    let tree = recognize("print abs x == sqrt y % 3", None).unwrap();
    let program = build_program(&tree);

    let Stmt::Print(PrintStatement { value }) = &program.statements[0] else {
        panic!("Expected print statement");
    };

    let crate::parser::tree::StmtNode::Print { value: node, .. } = &tree.statements[0] else {
        panic!("Expected print node");
    };

    assert_eq!(&build_expr(node), value);
    assert_eq!(build_expr(node), build_expr(node));
}

#[test]
fn test_operator_text_is_preserved() {
    let tree = recognize("print a == b + c - d * e % f / g ** h", None).unwrap();
    let program = build_program(&tree);

    fn collect(expr: &Expr, out: &mut Vec<&'static str>) {
        match expr {
            Expr::Binary(binary) => {
                collect(&binary.left, out);
                out.push(binary.operator.as_str());
                collect(&binary.right, out);
            }
            Expr::Unary(unary) => {
                out.push(unary.operator.as_str());
                collect(&unary.operand, out);
            }
            Expr::Identifier(_) | Expr::Literal(_) => {}
        }
    }

    let Stmt::Print(PrintStatement { value }) = &program.statements[0] else {
        panic!("Expected print statement");
    };

    let mut operators = vec![];
    collect(value, &mut operators);
    assert_eq!(operators, vec!["==", "+", "-", "*", "%", "/", "**"]);
}
