use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{
        ast::Expression,
        expressions::{
            AssignExpr, BinaryExpr, CallExpr, ForExpr, IfExpr, IndexExpr, MemberExpr, UnaryExpr,
            WhileExpr,
        },
    },
    errors::errors::ErrorImpl,
    lexer::{
        stream::TokenStream,
        tokens::{Token, TokenKind},
    },
    MK_ERROR,
};

use super::{
    parser::{ParseResult, Parser},
    stmt::parse_block_expr,
    types::parse_pattern,
};

lazy_static! {
    static ref ESCAPE_LOOKUP: HashMap<char, char> = {
        let mut map = HashMap::new();
        map.insert('n', '\n');
        map.insert('r', '\r');
        map.insert('t', '\t');
        map.insert('f', '\u{0C}');
        map.insert('v', '\u{0B}');
        map
    };
}

/// Parses an expression whose operators all bind at least as tightly as
/// `min_bp`.
///
/// Postfix forms bind tightest. For an infix operator with powers
/// `(left, right)` the loop stops once `left < min_bp`; otherwise the right
/// operand is parsed at `right`, which gives left association when
/// `right > left` and right association when `right < left`.
pub fn parse_expr<T: TokenStream>(
    parser: &mut Parser<T>,
    min_bp: u8,
    allow_assignment: bool,
) -> ParseResult<Expression> {
    let mut left = parse_left(parser)?;

    loop {
        let kind = parser.current_token_kind();

        if let Some((bp, led_fn)) = parser.get_led(kind) {
            if bp < min_bp {
                break;
            }

            left = led_fn(parser, left)?;
            continue;
        }

        let Some((left_bp, right_bp)) = parser.get_infix_bp(kind) else {
            break;
        };
        if left_bp < min_bp {
            break;
        }

        let operator_token = parser.advance();
        let right = parse_expr(parser, right_bp, allow_assignment)?;

        left = match parser.get_assignment_operator(kind) {
            Some(_) if !allow_assignment => {
                return Err(MK_ERROR!(ErrorImpl::AssignmentNotAllowed, operator_token.position));
            }
            Some(operator) => Expression::Assign(AssignExpr {
                subject: Box::new(left),
                value: Box::new(right),
                operator,
            }),
            None => Expression::Binary(BinaryExpr {
                left: Box::new(left),
                right: Box::new(right),
                operator: parser.get_binary_operator(kind),
            }),
        };
    }

    Ok(left)
}

/// Parses the left-hand side: a prefix operation or an operand.
fn parse_left<T: TokenStream>(parser: &mut Parser<T>) -> ParseResult<Expression> {
    let kind = parser.current_token_kind();

    if let Some((bp, operator)) = parser.get_prefix(kind) {
        parser.advance();
        let subject = parse_expr(parser, bp, false)?;

        return Ok(Expression::Unary(UnaryExpr {
            subject: Box::new(subject),
            operator,
        }));
    }

    match parser.get_nud(kind) {
        Some(nud_fn) => nud_fn(parser),
        None => parse_atom(parser),
    }
}

pub fn parse_grouping_expr<T: TokenStream>(parser: &mut Parser<T>) -> ParseResult<Expression> {
    parser.advance();
    let expression = parse_expr(parser, 0, false)?;
    parser.expect(TokenKind::CloseParen, "')'")?;

    Ok(expression)
}

pub fn parse_if_expr<T: TokenStream>(parser: &mut Parser<T>) -> ParseResult<Expression> {
    parser.advance();

    let condition = parse_expr(parser, 0, false)?;
    let truthy = parse_block_expr(parser)?;

    let falsy = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(Box::new(parse_block_expr(parser)?))
    } else {
        None
    };

    Ok(Expression::If(IfExpr {
        condition: Box::new(condition),
        truthy: Box::new(truthy),
        falsy,
    }))
}

pub fn parse_while_expr<T: TokenStream>(parser: &mut Parser<T>) -> ParseResult<Expression> {
    parser.advance();

    let condition = parse_expr(parser, 0, false)?;
    let body = parse_block_expr(parser)?;

    Ok(Expression::While(WhileExpr {
        condition: Box::new(condition),
        body: Box::new(body),
    }))
}

pub fn parse_for_expr<T: TokenStream>(parser: &mut Parser<T>) -> ParseResult<Expression> {
    parser.advance();

    let subject = parse_pattern(parser)?;
    parser.expect(TokenKind::In, "'in'")?;
    let iterable = parse_expr(parser, 0, false)?;
    let body = parse_block_expr(parser)?;

    Ok(Expression::For(ForExpr {
        subject,
        iterable: Box::new(iterable),
        body: Box::new(body),
    }))
}

/// `subject.name`
pub fn parse_member_expr<T: TokenStream>(
    parser: &mut Parser<T>,
    left: Expression,
) -> ParseResult<Expression> {
    parser.advance();
    let name = parser.expect(TokenKind::Identifier, "identifier")?.value;

    Ok(Expression::Member(MemberExpr {
        subject: Box::new(left),
        name,
    }))
}

/// `subject[key]`
pub fn parse_index_expr<T: TokenStream>(
    parser: &mut Parser<T>,
    left: Expression,
) -> ParseResult<Expression> {
    parser.advance();
    let key = parse_expr(parser, 0, false)?;
    parser.expect(TokenKind::CloseBracket, "']'")?;

    Ok(Expression::Index(IndexExpr {
        subject: Box::new(left),
        key: Box::new(key),
    }))
}

/// `subject(a, b, ..)`, a trailing comma is accepted.
pub fn parse_call_expr<T: TokenStream>(
    parser: &mut Parser<T>,
    left: Expression,
) -> ParseResult<Expression> {
    parser.advance();

    let mut arguments = vec![];

    while parser.current_token_kind() != TokenKind::CloseParen {
        arguments.push(parse_expr(parser, 0, false)?);

        if parser.current_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance();
    }

    parser.expect(TokenKind::CloseParen, "')'")?;

    Ok(Expression::Call(CallExpr {
        subject: Box::new(left),
        arguments,
    }))
}

/// Parses a single-token operand.
pub fn parse_atom<T: TokenStream>(parser: &mut Parser<T>) -> ParseResult<Expression> {
    let token = parser.current_token();

    let expression = match token.kind {
        TokenKind::Identifier => Expression::Id(token.value.clone()),
        TokenKind::Int => Expression::Int(parse_number(token)?),
        TokenKind::Float => Expression::Float(parse_number(token)?),
        TokenKind::Char => match parse_char_value(&token.value) {
            Some(value) => Expression::Char(value),
            None => return Err(parser.error(ErrorImpl::ExpectedValue)),
        },
        TokenKind::String => Expression::String(parse_string_value(&token.value)),
        TokenKind::True => Expression::Bool(true),
        TokenKind::False => Expression::Bool(false),
        TokenKind::Null => Expression::Null,
        _ => return Err(parser.error(ErrorImpl::ExpectedValue)),
    };

    parser.advance();
    Ok(expression)
}

fn parse_number<N: std::str::FromStr>(token: &Token) -> ParseResult<N> {
    token.value.parse().map_err(|_| {
        MK_ERROR!(
            ErrorImpl::NumberParseError {
                token: token.value.clone()
            },
            token.position
        )
    })
}

/// Resolves the character after a backslash. Unknown escapes stand for
/// themselves, so `\\`, `\'` and `\"` need no entry.
pub fn unescape(escaped: char) -> char {
    ESCAPE_LOOKUP.get(&escaped).copied().unwrap_or(escaped)
}

/// Decodes the raw text of a char literal, quotes included.
pub fn parse_char_value(literal: &str) -> Option<char> {
    let mut chars = literal.strip_prefix('\'')?.strip_suffix('\'')?.chars();

    let value = match chars.next()? {
        '\\' => unescape(chars.next()?),
        value => value,
    };

    match chars.next() {
        Some(_) => None,
        None => Some(value),
    }
}

/// Decodes the raw text of a string literal, quotes included.
pub fn parse_string_value(literal: &str) -> String {
    let inner = literal
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(literal);

    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }

        if let Some(escaped) = chars.next() {
            value.push(unescape(escaped));
        }
    }

    value
}
