//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! Expressions are parsed by precedence climbing over binding powers; the
//! handlers for operands with their own syntax and for statements are
//! registered in lookup tables keyed by token kind.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for bracketed and keyword operands
//! - LED (left denotation) handlers for postfix member, index and call
//! - Prefix, infix and assignment operators with their binding powers
//!
//! Internally every parse function returns `Result<_, Error>` and stops at the
//! first problem. The public entry points fold that error into the `Error`
//! variant of the family being parsed.

use std::collections::HashMap;

use crate::{
    ast::{
        ast::{Expression, Statement},
        expressions::{AssignOperator, BinaryOperator, UnaryOperator},
        types::{Pattern, Type},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        stream::TokenStream,
        tokens::{Token, TokenKind},
    },
    Position, MK_ERROR,
};

use super::{
    expr::parse_expr,
    lookups::{
        create_token_lookups, AssignmentLookup, BinaryLookup, InfixBindingPower, InfixLookup,
        LEDHandler, LEDLookup, NUDHandler, NUDLookup, PrefixLookup, StmtHandler, StmtLookup,
        ASSIGNMENT,
    },
    stmt::parse_stmt,
    types,
};

pub type ParseResult<R> = Result<R, Error>;

/// The main parser structure that maintains parsing state.
///
/// This struct owns the token stream and the lookup tables for parsing
/// statements and expressions. Tokens are consumed strictly left to right
/// with a single token of lookahead.
pub struct Parser<T: TokenStream> {
    /// The tokens to parse
    tokens: T,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup<T>,
    /// Lookup table for operands with their own syntax
    nud_lookup: NUDLookup<T>,
    /// Lookup table for postfix handlers and their binding power
    led_lookup: LEDLookup<T>,
    /// Lookup table for prefix operators and their binding power
    prefix_lookup: PrefixLookup,
    /// Lookup table for infix binding powers
    infix_lookup: InfixLookup,
    /// Infix tokens producing a binary expression
    binary_lookup: BinaryLookup,
    /// Infix tokens producing an assignment
    assignment_lookup: AssignmentLookup,
}

impl<T: TokenStream> Parser<T> {
    /// Creates a new Parser over the given token stream with all lookup
    /// tables populated.
    pub fn new(tokens: T) -> Self {
        let mut parser = Parser {
            tokens,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            prefix_lookup: HashMap::new(),
            infix_lookup: HashMap::new(),
            binary_lookup: HashMap::new(),
            assignment_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.tokens.peek()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens.peek().kind
    }

    /// Consumes the current token and returns it.
    pub fn advance(&mut self) -> Token {
        self.tokens.next()
    }

    /// Expects a token of the specified kind, failing with `error` otherwise.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an Error
    /// positioned at the current token.
    pub fn expect_error(&mut self, expected_kind: TokenKind, error: ErrorImpl) -> ParseResult<Token> {
        if self.current_token_kind() != expected_kind {
            return Err(self.error(error));
        }

        Ok(self.advance())
    }

    /// Expects a token of the specified kind, failing with `expected {expected}`.
    pub fn expect(&mut self, expected_kind: TokenKind, expected: &'static str) -> ParseResult<Token> {
        self.expect_error(expected_kind, ErrorImpl::expected(expected))
    }

    /// Builds an error at the current token.
    ///
    /// When the current token is a lexer error its message replaces `error`,
    /// so malformed input is reported as what it is rather than as a
    /// grammar mismatch.
    pub fn error(&self, error: ErrorImpl) -> Error {
        let token = self.current_token();
        if token.is(TokenKind::Error) {
            return MK_ERROR!(
                ErrorImpl::Lexical {
                    message: token.value.clone()
                },
                token.position
            );
        }

        MK_ERROR!(error, token.position)
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().position
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    pub fn get_stmt(&self, kind: TokenKind) -> Option<StmtHandler<T>> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn get_nud(&self, kind: TokenKind) -> Option<NUDHandler<T>> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn get_led(&self, kind: TokenKind) -> Option<(u8, LEDHandler<T>)> {
        self.led_lookup.get(&kind).copied()
    }

    pub fn get_prefix(&self, kind: TokenKind) -> Option<(u8, UnaryOperator)> {
        self.prefix_lookup.get(&kind).copied()
    }

    pub fn get_infix_bp(&self, kind: TokenKind) -> Option<InfixBindingPower> {
        self.infix_lookup.get(&kind).copied()
    }

    pub fn get_assignment_operator(&self, kind: TokenKind) -> Option<AssignOperator> {
        self.assignment_lookup.get(&kind).copied()
    }

    /// Maps an infix token to its binary operator.
    ///
    /// # Panics
    ///
    /// Panics if `kind` has an infix binding power but no operator. The two
    /// tables are filled together, so this is a parser bug.
    pub fn get_binary_operator(&self, kind: TokenKind) -> BinaryOperator {
        match self.binary_lookup.get(&kind) {
            Some(operator) => *operator,
            None => panic!("no binary operator registered for {}", kind),
        }
    }

    /// Registers a postfix (left denotation) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - How tightly the postfix form binds to its subject
    /// * `led_fn` - The handler, called with the current token still unconsumed
    pub fn led(&mut self, kind: TokenKind, binding_power: u8, led_fn: LEDHandler<T>) {
        self.led_lookup.insert(kind, (binding_power, led_fn));
    }

    /// Registers a null denotation handler for an operand with its own syntax.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler<T>) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler<T>) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a prefix operator.
    pub fn prefix(&mut self, kind: TokenKind, binding_power: u8, operator: UnaryOperator) {
        self.prefix_lookup.insert(kind, (binding_power, operator));
    }

    /// Registers an infix operator producing a binary expression.
    pub fn infix(
        &mut self,
        kind: TokenKind,
        binding_power: InfixBindingPower,
        operator: BinaryOperator,
    ) {
        self.infix_lookup.insert(kind, binding_power);
        self.binary_lookup.insert(kind, operator);
    }

    /// Registers an assignment operator. All of them share one binding power.
    pub fn assignment(&mut self, kind: TokenKind, operator: AssignOperator) {
        self.infix_lookup.insert(kind, ASSIGNMENT);
        self.assignment_lookup.insert(kind, operator);
    }

    /// Parses a single expression.
    ///
    /// Assignment forms are only accepted at the top of the expression when
    /// `allow_assignment` is set; anywhere else they produce an
    /// `assignment not allowed` error. On failure the returned expression is
    /// `Expression::Error`.
    pub fn parse_expression(&mut self, allow_assignment: bool) -> Expression {
        parse_expr(self, 0, allow_assignment).unwrap_or_else(Expression::Error)
    }

    /// Parses statements until the end of input.
    ///
    /// On failure the result holds a single `Statement::Error` and nothing
    /// that was parsed before it.
    pub fn parse_statements(&mut self) -> Vec<Statement> {
        let mut body = vec![];

        while self.has_tokens() {
            match parse_stmt(self) {
                Ok(stmt) => body.push(stmt),
                Err(error) => return vec![Statement::Error(error)],
            }
        }

        body
    }

    /// Parses a type annotation, folding failure into `Type::Error`.
    pub fn parse_type(&mut self) -> Type {
        types::parse_type(self).unwrap_or_else(Type::Error)
    }

    /// Parses a binding pattern, folding failure into `Pattern::Error`.
    pub fn parse_pattern(&mut self) -> Pattern {
        types::parse_pattern(self).unwrap_or_else(Pattern::Error)
    }
}

/// Parses a whole program.
///
/// This is the main entry point for parsing. It tokenizes `source`, then
/// parses statements until EOF.
///
/// # Returns
///
/// The statements of the program, or a single `Statement::Error` describing
/// the first lexical or syntax error.
pub fn parse(source: &str) -> Vec<Statement> {
    let mut parser = Parser::new(Lexer::new(source));
    parser.parse_statements()
}

/// Parses `source` as exactly one expression.
///
/// Anything left over after the expression is reported as
/// `expected end of input`.
pub fn parse_expression_str(source: &str, allow_assignment: bool) -> Expression {
    let mut parser = Parser::new(Lexer::new(source));
    let expression = parser.parse_expression(allow_assignment);

    if expression.is_error() || !parser.has_tokens() {
        return expression;
    }

    Expression::Error(parser.error(ErrorImpl::expected("end of input")))
}
