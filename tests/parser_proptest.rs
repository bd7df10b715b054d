//! Property-based tests for the parser.
//!
//! Programs are generated from the grammar itself, so every generated
//! program is valid and the properties below must hold for all of them.

use ael::parse;
use proptest::prelude::*;

const KEYWORDS: [&str; 4] = ["let", "print", "abs", "sqrt"];

fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,6}".prop_filter("keywords are not identifiers", |name| {
        !KEYWORDS.contains(&name.as_str())
    })
}

fn number() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..10_000).prop_map(|n| n.to_string()),
        (0u32..1_000, 0u32..1_000).prop_map(|(whole, fraction)| format!("{}.{}", whole, fraction)),
    ]
}

fn atom() -> impl Strategy<Value = String> {
    prop_oneof![identifier(), number()]
}

fn expression() -> impl Strategy<Value = String> {
    atom().prop_recursive(4, 32, 2, |inner| {
        let operator = prop_oneof![
            Just("=="),
            Just("+"),
            Just("-"),
            Just("*"),
            Just("%"),
            Just("/"),
            Just("**"),
        ];
        let prefix = prop_oneof![Just("-"), Just("abs "), Just("sqrt ")];

        prop_oneof![
            (inner.clone(), operator, inner.clone()).prop_map(|(left, op, right)| {
                // The right side of `**` cannot start with a prefix operator
                if op == "**" && ["-", "abs", "sqrt"].iter().any(|p| right.starts_with(p)) {
                    format!("{} {} ({})", left, op, right)
                } else {
                    format!("{} {} {}", left, op, right)
                }
            }),
            // The operand of a prefix operator cannot start with another one
            (prefix, inner.clone()).prop_map(|(op, operand)| format!("{}({})", op, operand)),
            inner.prop_map(|expr| format!("({})", expr)),
        ]
    })
}

fn statement() -> impl Strategy<Value = String> {
    prop_oneof![
        (identifier(), expression()).prop_map(|(name, expr)| format!("let {} = {}", name, expr)),
        (identifier(), expression()).prop_map(|(name, expr)| format!("{} = {}", name, expr)),
        expression().prop_map(|expr| format!("print {}", expr)),
    ]
}

proptest! {
    #[test]
    fn statement_count_is_preserved(statements in prop::collection::vec(statement(), 1..8)) {
        let source = statements.join("\n");
        let program = parse(&source).unwrap();

        prop_assert_eq!(program.len(), statements.len());
    }

    #[test]
    fn comments_do_not_change_the_tree(statements in prop::collection::vec(statement(), 1..5)) {
        let plain = statements.join(" ");
        let commented = statements
            .iter()
            .map(|stmt| format!("{} // {}", stmt, stmt))
            .collect::<Vec<_>>()
            .join("\n");

        prop_assert_eq!(parse(&commented).unwrap(), parse(&plain).unwrap());
    }

    #[test]
    fn parentheses_do_not_change_the_tree(expr in expression()) {
        let plain = parse(&format!("print {}", expr)).unwrap();
        let wrapped = parse(&format!("print (({}))", expr)).unwrap();

        prop_assert_eq!(wrapped, plain);
    }

    #[test]
    fn keyword_prefixed_names_are_identifiers(suffix in "[a-z0-9]{1,4}", keyword in prop::sample::select(KEYWORDS.to_vec())) {
        let name = format!("{}{}", keyword, suffix);
        let program = parse(&format!("let {} = 1", name)).unwrap();

        prop_assert_eq!(program.len(), 1);
    }
}
