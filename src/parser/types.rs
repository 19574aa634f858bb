//! Type, pattern and parameter parsing.
//!
//! Types and patterns are plain identifiers for now; both are kept as their
//! own AST families so annotations can grow without touching expressions.

use crate::{
    ast::types::{Parameter, Pattern, Type},
    errors::errors::ErrorImpl,
    lexer::{stream::TokenStream, tokens::TokenKind},
};

use super::{
    expr::parse_expr,
    parser::{ParseResult, Parser},
};

pub fn parse_type<T: TokenStream>(parser: &mut Parser<T>) -> ParseResult<Type> {
    let name = parser.expect(TokenKind::Identifier, "type")?.value;
    Ok(Type::Id(name))
}

pub fn parse_pattern<T: TokenStream>(parser: &mut Parser<T>) -> ParseResult<Pattern> {
    let name = parser.expect(TokenKind::Identifier, "pattern")?.value;
    Ok(Pattern::Id(name))
}

/// `pattern [: type] [= value]`
pub fn parse_parameter<T: TokenStream>(parser: &mut Parser<T>) -> ParseResult<Parameter> {
    let subject = parse_pattern(parser)?;

    let explicit_type = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        Some(parse_type(parser)?)
    } else {
        None
    };

    let value = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        Some(parse_expr(parser, 0, false)?)
    } else {
        None
    };

    Ok(Parameter {
        subject,
        explicit_type,
        value,
    })
}
