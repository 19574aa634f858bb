//! Unit tests for the parser module.
//!
//! This module contains tests for parsing:
//! - Operator precedence and associativity
//! - Prefix and postfix forms
//! - Literals and escapes
//! - Blocks, control flow and statements
//! - Error values and their positions

use crate::{
    ast::{
        ast::{ExprType, Expression, Statement, StmtType},
        types::{PatternType, Type, TypeType},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{stream::TokenReplay, tokens::TokenKind},
    Position,
};

use super::parser::{parse, parse_expression_str, Parser};

fn assert_expr(source: &str, expected: &str) {
    let expression = parse_expression_str(source, true);
    assert_eq!(expression.to_string(), expected, "source: {}", source);
}

fn expr_error(source: &str) -> Error {
    match parse_expression_str(source, true) {
        Expression::Error(error) => error,
        other => panic!("expected an error for `{}`, got {}", source, other),
    }
}

fn stmt_error(source: &str) -> Error {
    let statements = parse(source);
    assert_eq!(statements.len(), 1, "source: {}", source);

    match &statements[0] {
        Statement::Error(error) => error.clone(),
        other => panic!("expected an error for `{}`, got {}", source, other),
    }
}

#[test]
fn test_parse_precedence() {
    assert_expr("1 * 2 + 3 * 4", "((1 * 2) + (3 * 4))");
    assert_expr("1 + 2 * 3 % 4", "(1 + ((2 * 3) % 4))");
    assert_expr("a or b and c", "(a or (b and c))");
    assert_expr("a == b and c != d", "((a == b) and (c != d))");
    assert_expr("a < b == c >= d", "((a < b) == (c >= d))");
    assert_expr("x in xs or y <= 2", "((x in xs) or (y <= 2))");
}

#[test]
fn test_parse_left_associative() {
    assert_expr("1 - 2 - 3", "((1 - 2) - 3)");
    assert_expr("8 / 4 / 2", "((8 / 4) / 2)");
}

#[test]
fn test_parse_right_associative() {
    assert_expr("1 ** 2 ** 3", "(1 ** (2 ** 3))");
    assert_expr("a = b = 1", "(a = (b = 1))");
    assert_expr("a += b -= 2 * 3", "(a += (b -= (2 * 3)))");
}

#[test]
fn test_parse_prefix() {
    assert_expr("not a and b", "((not a) and b)");
    assert_expr("-a ** 2", "((- a) ** 2)");
    assert_expr("- -a", "(- (- a))");
    assert_expr("-a.b", "(- a.b)");
    assert_expr("not not true", "(not (not true))");
}

#[test]
fn test_parse_postfix() {
    assert_expr("a.b[c](d, e)", "a.b[c](d, e)");
    assert_expr("f()", "f()");
    assert_expr("f(1,)", "f(1)");
    assert_expr("f(1)(2)", "f(1)(2)");
    assert_expr("xs[i + 1] * 2", "(xs[(i + 1)] * 2)");
}

#[test]
fn test_parse_grouping() {
    assert_expr("(1 + 2) * 3", "((1 + 2) * 3)");
    assert_expr("((a))", "a");
}

#[test]
fn test_parse_literals() {
    assert_eq!(parse_expression_str("42", true), Expression::Int(42));
    assert_eq!(parse_expression_str("1.5", true), Expression::Float(1.5));
    assert_eq!(parse_expression_str("2.", true), Expression::Float(2.0));
    assert_eq!(parse_expression_str("true", true), Expression::Bool(true));
    assert_eq!(parse_expression_str("false", true), Expression::Bool(false));
    assert_eq!(parse_expression_str("null", true), Expression::Null);
    assert_eq!(
        parse_expression_str("blåbær", true),
        Expression::Id("blåbær".to_string())
    );
}

#[test]
fn test_parse_char_escapes() {
    assert_eq!(parse_expression_str("'a'", true), Expression::Char('a'));
    assert_eq!(parse_expression_str("'\\n'", true), Expression::Char('\n'));
    assert_eq!(parse_expression_str("'\\t'", true), Expression::Char('\t'));
    assert_eq!(parse_expression_str("'\\''", true), Expression::Char('\''));
    assert_eq!(parse_expression_str("'\\q'", true), Expression::Char('q'));
}

#[test]
fn test_parse_string_escapes() {
    assert_eq!(
        parse_expression_str("\"a\\nb\"", true),
        Expression::String("a\nb".to_string())
    );
    assert_eq!(
        parse_expression_str("\"say \\\"hi\\\"\\v\"", true),
        Expression::String("say \"hi\"\u{0B}".to_string())
    );
    assert_eq!(parse_expression_str("\"\"", true), Expression::String(String::new()));
}

#[test]
fn test_parse_int_overflow() {
    let error = expr_error("99999999999999999999");

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string()
        }
    );
    assert_eq!(*error.get_position(), Position::new(1, 1));
}

#[test]
fn test_parse_expected_value() {
    let error = expr_error("1 + )");

    assert_eq!(error.message(), "expected value");
    assert_eq!(*error.get_position(), Position::new(1, 5));
    assert_eq!(error.to_string(), "error: expected value at 1:5");
}

#[test]
fn test_parse_unclosed_delimiters() {
    let error = expr_error("(1 + 2");
    assert_eq!(error.message(), "expected ')'");
    assert_eq!(*error.get_position(), Position::new(1, 7));

    assert_eq!(expr_error("a[1").message(), "expected ']'");
    assert_eq!(expr_error("f(1, 2").message(), "expected ')'");
    assert_eq!(expr_error("a.1").message(), "expected identifier");
}

#[test]
fn test_parse_assignment_not_allowed() {
    let error = expr_error("f(a = 1)");
    assert_eq!(error.get_impl(), &ErrorImpl::AssignmentNotAllowed);
    assert_eq!(*error.get_position(), Position::new(1, 5));

    assert_eq!(expr_error("(a = 1)").message(), "assignment not allowed");
    assert_eq!(expr_error("xs[i += 1]").message(), "assignment not allowed");

    match parse_expression_str("a = 1", false) {
        Expression::Error(error) => assert_eq!(*error.get_position(), Position::new(1, 3)),
        other => panic!("expected an error, got {}", other),
    }
}

#[test]
fn test_parse_trailing_input() {
    let error = expr_error("1 2");

    assert_eq!(error.message(), "expected end of input");
    assert_eq!(*error.get_position(), Position::new(1, 3));
}

#[test]
fn test_parse_reports_lexical_error() {
    let error = expr_error("1 + @");
    assert_eq!(error.message(), "unexpected char '@'");
    assert_eq!(*error.get_position(), Position::new(1, 5));

    let error = expr_error("\"abc");
    assert_eq!(error.message(), "expected `\"` at end of string literal");
    assert_eq!(*error.get_position(), Position::new(1, 1));
}

#[test]
fn test_parse_block_result() {
    match parse_expression_str("{ 1; 2 }", true) {
        Expression::Block(block) => {
            assert_eq!(block.statements.len(), 1);
            assert_eq!(block.result.as_deref(), Some(&Expression::Int(2)));
        }
        other => panic!("expected a block, got {}", other),
    }

    match parse_expression_str("{ 1; 2; }", true) {
        Expression::Block(block) => {
            assert_eq!(block.statements.len(), 2);
            assert!(block.result.is_none());
        }
        other => panic!("expected a block, got {}", other),
    }

    assert_expr("{ }", "{ }");
}

#[test]
fn test_parse_block_errors() {
    let error = expr_error("{ 1 2 }");
    assert_eq!(error.message(), "expected ';' or '}'");
    assert_eq!(*error.get_position(), Position::new(1, 5));

    assert_eq!(expr_error("{ 1;").message(), "expected '}'");
    assert_eq!(expr_error("{ return }").message(), "expected ';'");
}

#[test]
fn test_parse_block_statements() {
    assert_expr(
        "{ let a: int = 1; return a; }",
        "{ let a: int = 1; return a; }",
    );
    assert_expr("{ break 1; continue; return; }", "{ break 1; continue; return; }");
    assert_expr(
        "{ fn twice(x) { x * 2 } twice(2) }",
        "{ fn twice(x) { (x * 2) } twice(2) }",
    );
}

#[test]
fn test_parse_control_flow() {
    assert_expr("if a { 1 } else { 2 }", "if a { 1 } else { 2 }");
    assert_expr("if a > b { a }", "if (a > b) { a }");
    assert_expr("while i < 10 { i += 1; }", "while (i < 10) { (i += 1); }");
    assert_expr("for x in xs { f(x); }", "for x in xs { f(x); }");
    assert_expr("1 + if c { 2 } else { 3 }", "(1 + if c { 2 } else { 3 })");
}

#[test]
fn test_parse_control_flow_errors() {
    let error = expr_error("if a 1");
    assert_eq!(error.message(), "expected '{'");
    assert_eq!(*error.get_position(), Position::new(1, 6));

    assert_eq!(expr_error("if a { 1 } else 2").message(), "expected '{'");
    assert_eq!(expr_error("for 1 in xs { }").message(), "expected pattern");
    assert_eq!(expr_error("for x xs { }").message(), "expected 'in'");
}

#[test]
fn test_parse_statements() {
    let statements = parse("let a = 1; a = a + 1; a;");

    assert_eq!(
        statements.iter().map(Statement::get_stmt_type).collect::<Vec<_>>(),
        vec![StmtType::Let, StmtType::Expression, StmtType::Expression]
    );
    assert_eq!(statements[1].to_string(), "(a = (a + 1));");
}

#[test]
fn test_parse_empty_program() {
    assert!(parse("").is_empty());
    assert!(parse("// nothing here\n/* at /* all */ */").is_empty());
}

#[test]
fn test_parse_fn_stmt() {
    let statements = parse("fn add(a: int, b: int = 2) -> int { a + b }");

    assert_eq!(statements.len(), 1);
    assert_eq!(
        statements[0].to_string(),
        "fn add(a: int, b: int = 2) -> int { (a + b) }"
    );

    let statements = parse("fn noop() { }");
    assert_eq!(statements[0].to_string(), "fn noop() { }");
}

#[test]
fn test_parse_statement_errors() {
    let error = stmt_error("a = 1");
    assert_eq!(error.message(), "expected ';'");
    assert_eq!(*error.get_position(), Position::new(1, 6));

    assert_eq!(stmt_error("let = 1;").message(), "expected pattern");
    assert_eq!(stmt_error("let a: 1;").message(), "expected type");
    assert_eq!(stmt_error("fn (a) { }").message(), "expected identifier");
    assert_eq!(stmt_error("fn f a { }").message(), "expected '('");
}

#[test]
fn test_parse_stops_at_first_error() {
    let error = stmt_error("a; 1 +; b;");

    assert_eq!(error.message(), "expected value");
    assert_eq!(*error.get_position(), Position::new(1, 7));
}

#[test]
fn test_parse_class_not_implemented() {
    let error = stmt_error("class Point { }");

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::NotImplemented { construct: "class" }
    );
    assert_eq!(error.message(), "class not implemented");
    assert_eq!(*error.get_position(), Position::new(1, 1));
}

#[test]
fn test_parse_from_replay() {
    let tokens = TokenReplay::from_kinds(&[
        (TokenKind::Int, "1"),
        (TokenKind::Plus, "+"),
        (TokenKind::Int, "2"),
        (TokenKind::Star, "*"),
        (TokenKind::Int, "3"),
    ]);
    let mut parser = Parser::new(tokens);

    let expression = parser.parse_expression(true);
    assert_eq!(expression.get_expr_type(), ExprType::Binary);
    assert_eq!(expression.to_string(), "(1 + (2 * 3))");
    assert!(!parser.has_tokens());
}

#[test]
fn test_parse_replay_errors() {
    let mut parser = Parser::new(TokenReplay::from_kinds(&[
        (TokenKind::Identifier, "f"),
        (TokenKind::OpenParen, "("),
    ]));
    match parser.parse_expression(true) {
        Expression::Error(error) => {
            assert_eq!(error.message(), "expected value");
            assert_eq!(*error.get_position(), Position::new(1, 2));
        }
        other => panic!("expected an error, got {}", other),
    }

    let mut parser = Parser::new(TokenReplay::from_kinds(&[
        (TokenKind::Int, "1"),
        (TokenKind::Plus, "+"),
        (TokenKind::Error, "unterminated comment"),
    ]));
    let expression = parser.parse_expression(true);
    assert_eq!(
        expression.as_error().map(Error::message),
        Some("unterminated comment".to_string())
    );
}

#[test]
fn test_parse_stops_before_unknown_token() {
    let mut parser = Parser::new(TokenReplay::from_kinds(&[
        (TokenKind::Int, "1"),
        (TokenKind::Int, "2"),
    ]));

    assert_eq!(parser.parse_expression(true), Expression::Int(1));
    assert_eq!(parser.current_token_kind(), TokenKind::Int);
}

#[test]
fn test_parse_type_and_pattern() {
    let mut parser = Parser::new(TokenReplay::from_kinds(&[
        (TokenKind::Identifier, "int"),
        (TokenKind::Int, "1"),
    ]));

    let explicit_type = parser.parse_type();
    assert_eq!(explicit_type, Type::Id("int".to_string()));
    assert_eq!(explicit_type.get_type_type(), TypeType::Id);

    let pattern = parser.parse_pattern();
    assert_eq!(pattern.get_pattern_type(), PatternType::Error);
    assert!(pattern.is_error());
}
