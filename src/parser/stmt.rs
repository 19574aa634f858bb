use crate::{
    ast::{
        ast::{Expression, Statement},
        expressions::BlockExpr,
        statements::FnStmt,
    },
    errors::errors::ErrorImpl,
    lexer::{stream::TokenStream, tokens::TokenKind},
    parser::expr::parse_expr,
};

use super::{
    parser::{ParseResult, Parser},
    types::{parse_parameter, parse_type},
};

/// Parses one top-level statement. Expression statements must end in `;`.
pub fn parse_stmt<T: TokenStream>(parser: &mut Parser<T>) -> ParseResult<Statement> {
    if let Some(stmt_fn) = parser.get_stmt(parser.current_token_kind()) {
        return stmt_fn(parser);
    }

    let expression = parse_expr(parser, 0, true)?;
    parser.expect(TokenKind::Semicolon, "';'")?;

    Ok(Statement::Expression(expression))
}

/// Parses `{ statements [result] }`.
///
/// An expression directly followed by `}` becomes the block's result; every
/// other expression needs a `;` and is kept as a statement.
pub fn parse_block_expr<T: TokenStream>(parser: &mut Parser<T>) -> ParseResult<Expression> {
    parser.expect(TokenKind::OpenCurly, "'{'")?;

    let mut statements = vec![];
    let mut result = None;

    while !matches!(
        parser.current_token_kind(),
        TokenKind::CloseCurly | TokenKind::EOF
    ) {
        if let Some(stmt_fn) = parser.get_stmt(parser.current_token_kind()) {
            statements.push(stmt_fn(parser)?);
            continue;
        }

        let expression = parse_expr(parser, 0, true)?;

        match parser.current_token_kind() {
            TokenKind::Semicolon => {
                parser.advance();
                statements.push(Statement::Expression(expression));
            }
            TokenKind::CloseCurly => result = Some(Box::new(expression)),
            _ => return Err(parser.error(ErrorImpl::expected("';' or '}'"))),
        }
    }

    parser.expect(TokenKind::CloseCurly, "'}'")?;

    Ok(Expression::Block(BlockExpr { statements, result }))
}

pub fn parse_let_stmt<T: TokenStream>(parser: &mut Parser<T>) -> ParseResult<Statement> {
    parser.advance();

    let parameter = parse_parameter(parser)?;
    parser.expect(TokenKind::Semicolon, "';'")?;

    Ok(Statement::Let(parameter))
}

/// The optional value of `return`, `break` and `continue`, and the `;` after it.
fn parse_jump_value<T: TokenStream>(parser: &mut Parser<T>) -> ParseResult<Option<Expression>> {
    parser.advance();

    let value = if parser
        .current_token()
        .is_one_of_many(&[TokenKind::Semicolon, TokenKind::CloseCurly])
    {
        None
    } else {
        Some(parse_expr(parser, 0, false)?)
    };

    parser.expect(TokenKind::Semicolon, "';'")?;
    Ok(value)
}

pub fn parse_return_stmt<T: TokenStream>(parser: &mut Parser<T>) -> ParseResult<Statement> {
    Ok(Statement::Return(parse_jump_value(parser)?))
}

pub fn parse_break_stmt<T: TokenStream>(parser: &mut Parser<T>) -> ParseResult<Statement> {
    Ok(Statement::Break(parse_jump_value(parser)?))
}

pub fn parse_continue_stmt<T: TokenStream>(parser: &mut Parser<T>) -> ParseResult<Statement> {
    Ok(Statement::Continue(parse_jump_value(parser)?))
}

/// `fn name(parameters) [-> type] { .. }`
pub fn parse_fn_stmt<T: TokenStream>(parser: &mut Parser<T>) -> ParseResult<Statement> {
    parser.advance();

    let name = parser.expect(TokenKind::Identifier, "identifier")?.value;
    parser.expect(TokenKind::OpenParen, "'('")?;

    let mut parameters = vec![];
    while parser.current_token_kind() != TokenKind::CloseParen {
        parameters.push(parse_parameter(parser)?);

        if parser.current_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance();
    }
    parser.expect(TokenKind::CloseParen, "')'")?;

    let return_type = if parser.current_token_kind() == TokenKind::Arrow {
        parser.advance();
        Some(parse_type(parser)?)
    } else {
        None
    };

    let body = parse_block_expr(parser)?;

    Ok(Statement::Fn(FnStmt {
        name,
        parameters,
        return_type,
        body: Box::new(body),
    }))
}

pub fn parse_class_stmt<T: TokenStream>(parser: &mut Parser<T>) -> ParseResult<Statement> {
    Err(parser.error(ErrorImpl::NotImplemented { construct: "class" }))
}
