use std::collections::HashMap;

use crate::{
    ast::{
        ast::{Expression, Statement},
        expressions::{AssignOperator, BinaryOperator, UnaryOperator},
    },
    lexer::{stream::TokenStream, tokens::TokenKind},
};

use super::{
    expr::*,
    parser::{ParseResult, Parser},
    stmt::*,
};

/// Left and right binding power of an infix operator.
///
/// Higher binds tighter. Equal values associate to the left; a right power
/// below the left one makes the operator right associative.
pub type InfixBindingPower = (u8, u8);

pub const ASSIGNMENT: InfixBindingPower = (4, 3);
pub const LOGICAL_OR: InfixBindingPower = (5, 6);
pub const LOGICAL_AND: InfixBindingPower = (7, 8);
pub const EQUALITY: InfixBindingPower = (15, 16);
pub const RELATIONAL: InfixBindingPower = (17, 18);
pub const ADDITIVE: InfixBindingPower = (21, 22);
pub const MULTIPLICATIVE: InfixBindingPower = (23, 24);
pub const EXPONENT: InfixBindingPower = (26, 25);
pub const PREFIX: u8 = 27;
pub const POSTFIX: u8 = 33;

pub type StmtHandler<T> = fn(&mut Parser<T>) -> ParseResult<Statement>;
pub type NUDHandler<T> = fn(&mut Parser<T>) -> ParseResult<Expression>;
pub type LEDHandler<T> = fn(&mut Parser<T>, Expression) -> ParseResult<Expression>;

pub fn create_token_lookups<T: TokenStream>(parser: &mut Parser<T>) {
    // Assignment
    parser.assignment(TokenKind::Assignment, AssignOperator::Assign);
    parser.assignment(TokenKind::PlusEquals, AssignOperator::Add);
    parser.assignment(TokenKind::MinusEquals, AssignOperator::Subtract);
    parser.assignment(TokenKind::StarEquals, AssignOperator::Multiply);
    parser.assignment(TokenKind::SlashEquals, AssignOperator::Divide);
    parser.assignment(TokenKind::PercentEquals, AssignOperator::Modulus);

    // Logical
    parser.infix(TokenKind::Or, LOGICAL_OR, BinaryOperator::Or);
    parser.infix(TokenKind::And, LOGICAL_AND, BinaryOperator::And);

    // Equality and relational
    parser.infix(TokenKind::Equals, EQUALITY, BinaryOperator::Equal);
    parser.infix(TokenKind::NotEquals, EQUALITY, BinaryOperator::NotEqual);
    parser.infix(TokenKind::Less, RELATIONAL, BinaryOperator::Lt);
    parser.infix(TokenKind::LessEquals, RELATIONAL, BinaryOperator::LtEqual);
    parser.infix(TokenKind::Greater, RELATIONAL, BinaryOperator::Gt);
    parser.infix(TokenKind::GreaterEquals, RELATIONAL, BinaryOperator::GtEqual);
    parser.infix(TokenKind::In, RELATIONAL, BinaryOperator::In);

    // Additive, multiplicative and exponent
    parser.infix(TokenKind::Plus, ADDITIVE, BinaryOperator::Add);
    parser.infix(TokenKind::Dash, ADDITIVE, BinaryOperator::Subtract);
    parser.infix(TokenKind::Star, MULTIPLICATIVE, BinaryOperator::Multiply);
    parser.infix(TokenKind::Slash, MULTIPLICATIVE, BinaryOperator::Divide);
    parser.infix(TokenKind::Percent, MULTIPLICATIVE, BinaryOperator::Modulus);
    parser.infix(TokenKind::StarStar, EXPONENT, BinaryOperator::Exponentiation);

    // Prefix
    parser.prefix(TokenKind::Not, PREFIX, UnaryOperator::Not);
    parser.prefix(TokenKind::Dash, PREFIX, UnaryOperator::Negate);

    // Member, index and call
    parser.led(TokenKind::Dot, POSTFIX, parse_member_expr);
    parser.led(TokenKind::OpenBracket, POSTFIX, parse_index_expr);
    parser.led(TokenKind::OpenParen, POSTFIX, parse_call_expr);

    // Operands with their own syntax; everything else is an atom
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
    parser.nud(TokenKind::If, parse_if_expr);
    parser.nud(TokenKind::While, parse_while_expr);
    parser.nud(TokenKind::For, parse_for_expr);
    parser.nud(TokenKind::OpenCurly, parse_block_expr);

    // Statements
    parser.stmt(TokenKind::Class, parse_class_stmt);
    parser.stmt(TokenKind::Fn, parse_fn_stmt);
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
    parser.stmt(TokenKind::Break, parse_break_stmt);
    parser.stmt(TokenKind::Continue, parse_continue_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup<T> = HashMap<TokenKind, StmtHandler<T>>;
pub type NUDLookup<T> = HashMap<TokenKind, NUDHandler<T>>;
pub type LEDLookup<T> = HashMap<TokenKind, (u8, LEDHandler<T>)>;
pub type PrefixLookup = HashMap<TokenKind, (u8, UnaryOperator)>;
pub type InfixLookup = HashMap<TokenKind, InfixBindingPower>;
pub type BinaryLookup = HashMap<TokenKind, BinaryOperator>;
pub type AssignmentLookup = HashMap<TokenKind, AssignOperator>;
