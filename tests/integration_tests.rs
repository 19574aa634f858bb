//! Integration tests for the front end.
//!
//! These tests run source text through the whole pipeline, lexing and then
//! parsing, and check the printed syntax tree or the rendered diagnostic.

use dflat::{
    ast::ast::{ExprType, Expression, Statement, StmtType},
    format_error,
    lexer::lexer::{tokenize, Lexer},
    parser::parser::{parse, parse_expression_str},
};

fn parse_to_string(source: &str) -> String {
    parse_expression_str(source, true).to_string()
}

#[test]
fn test_arithmetic_programs() {
    assert_eq!(parse_to_string("69"), "69");
    assert_eq!(parse_to_string("2 + 2"), "(2 + 2)");
    assert_eq!(parse_to_string("2 * 2 / 2 + 1 - 2"), "((((2 * 2) / 2) + 1) - 2)");
    assert_eq!(
        parse_to_string("1 * 2 + 3 * 4 + add(1, 2)"),
        "(((1 * 2) + (3 * 4)) + add(1, 2))"
    );
    assert_eq!(parse_to_string("1 + 2 + 3 + 4"), "(((1 + 2) + 3) + 4)");
    assert_eq!(parse_to_string("1 ** 2 ** 3 ** 4"), "(1 ** (2 ** (3 ** 4)))");
    assert_eq!(parse_to_string("1 --- 4"), "(1 - (- (- 4)))");
}

#[test]
fn test_literal_programs() {
    assert_eq!(parse_to_string("abc123"), "abc123");
    assert_eq!(parse_to_string("123.456"), "123.456");
    assert_eq!(parse_to_string("'a'"), "'a'");
    assert_eq!(parse_to_string("a = \"hello world\""), "(a = \"hello world\")");
    assert_eq!(
        parse_expression_str("\"\\\"\\'\\n\"", true),
        Expression::String("\"'\n".to_string())
    );
}

#[test]
fn test_unterminated_string_program() {
    let expression = parse_expression_str("\"hello world\\\"", true);
    let error = expression.as_error().expect("unterminated string");

    assert_eq!(error.message(), "expected `\"` at end of string literal");
    assert_eq!((error.line(), error.column()), (1, 1));
}

#[test]
fn test_postfix_programs() {
    assert_eq!(parse_to_string("abc[123 + abc]"), "abc[(123 + abc)]");
    assert_eq!(parse_to_string("abc.abc"), "abc.abc");
    assert_eq!(parse_to_string("abc(abc, abc + 123)"), "abc(abc, (abc + 123))");
    assert_eq!(parse_to_string("abc[1][1]"), "abc[1][1]");
    assert_eq!(parse_to_string("abc.abc.abc"), "abc.abc.abc");
    assert_eq!(parse_to_string("abc(123)(123)(abc)"), "abc(123)(123)(abc)");
}

#[test]
fn test_control_flow_programs() {
    assert_eq!(
        parse_to_string("if true { print(\"bruh\"); }"),
        "if true { print(\"bruh\"); }"
    );
    assert_eq!(
        parse_to_string("if true { 123 } else { 456 }"),
        "if true { 123 } else { 456 }"
    );
    assert_eq!(
        parse_to_string("for i in items { a = b = i; print(i) }"),
        "for i in items { (a = (b = i)); print(i) }"
    );
    assert_eq!(parse_to_string("while true {  }"), "while true { }");
    assert_eq!(parse_to_string("{ let a = 5; }"), "{ let a = 5; }");
}

#[test]
fn test_full_program() {
    let source = r#"
        {

            fn main(a: int) -> int {
                print(a);
                a + 4
            }

            let a = 5;
            let b = a + 5;
            for a in b {
                break 1234;
            };

            while a < b {
                print(a);
            };

            let a = if a == b {
                a
            } else {
                print("bruhbruh");
            };
        }
    "#;

    let expression = parse_expression_str(source, true);
    assert_eq!(expression.get_expr_type(), ExprType::Block);

    let Expression::Block(block) = &expression else {
        unreachable!()
    };
    assert_eq!(
        block
            .statements
            .iter()
            .map(Statement::get_stmt_type)
            .collect::<Vec<_>>(),
        vec![
            StmtType::Fn,
            StmtType::Let,
            StmtType::Let,
            StmtType::Expression,
            StmtType::Expression,
            StmtType::Let,
        ]
    );
    assert!(block.result.is_none());

    assert_eq!(
        expression.to_string(),
        "{ fn main(a: int) -> int { print(a); (a + 4) } let a = 5; let b = (a + 5); \
         for a in b { break 1234; }; while (a < b) { print(a); }; \
         let a = if (a == b) { a } else { print(\"bruhbruh\"); }; }"
    );
}

#[test]
fn test_program_statements() {
    let source = "let total = 0;\n\
                  for x in xs { total += x; };\n\
                  fn mean(xs) { total / len(xs) }\n";
    let statements = parse(source);

    let printed = statements
        .iter()
        .map(|statement| statement.to_string())
        .collect::<Vec<_>>();

    assert_eq!(
        printed,
        vec![
            "let total = 0;",
            "for x in xs { (total += x); };",
            "fn mean(xs) { (total / len(xs)) }",
        ]
    );
}

#[test]
fn test_rendered_syntax_error() {
    let source = "let a = 1;\nlet b = a +;\n";
    let statements = parse(source);

    assert_eq!(statements.len(), 1);
    let error = statements[0].as_error().expect("syntax error");

    assert_eq!(
        format_error(error, source),
        "error: expected value at 2:12\n  |\n2 | let b = a +;\n  | -----------^"
    );
}

#[test]
fn test_rendered_lexical_error() {
    let source = "let a = 1;\n  let b = a # 2;";
    let statements = parse(source);
    let error = statements[0].as_error().expect("lexical error");

    assert_eq!(error.message(), "unexpected char '#'");
    assert_eq!(
        format_error(error, source),
        "error: unexpected char '#' at 2:13\n  |\n2 | let b = a # 2;\n  | ----------^"
    );
}

#[test]
fn test_token_listing() {
    let tokens = tokenize("a = 1")
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<_>>();

    assert_eq!(tokens, vec!["Identifier(a)", "Assignment(=)", "Int(1)", "EOF()"]);
    assert_eq!(Lexer::new("a = 1").collect().len(), 3);
}
