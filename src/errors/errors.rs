use thiserror::Error;

use crate::Position;

/// A diagnostic with the position it was detected at.
///
/// This is the payload of every `Error` variant in the AST. Failures are
/// returned as values, never raised.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("error: {internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The short human readable message, e.g. `expected ')'`.
    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::Lexical { .. } => "Lexical",
            ErrorImpl::Expected { .. } => "Expected",
            ErrorImpl::ExpectedValue => "ExpectedValue",
            ErrorImpl::AssignmentNotAllowed => "AssignmentNotAllowed",
            ErrorImpl::NotImplemented { .. } => "NotImplemented",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    /// Carries the message of a lexer `Error` token.
    #[error("{message}")]
    Lexical { message: String },
    #[error("expected {expected}")]
    Expected { expected: &'static str },
    #[error("expected value")]
    ExpectedValue,
    #[error("assignment not allowed")]
    AssignmentNotAllowed,
    #[error("{construct} not implemented")]
    NotImplemented { construct: &'static str },
    #[error("invalid number literal `{token}`")]
    NumberParseError { token: String },
}

impl ErrorImpl {
    pub fn expected(expected: &'static str) -> Self {
        ErrorImpl::Expected { expected }
    }
}

/// Malformed input found by the lexer. Rendered into the text of an
/// `Error` token.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    #[error("unexpected char '{0}'")]
    UnexpectedChar(char),
    #[error("unexpected end of char literal")]
    UnexpectedEndOfChar,
    #[error("expected `'` at end of char literal")]
    UnclosedChar,
    #[error("expected `\"` at end of string literal")]
    UnclosedString,
    #[error("unterminated comment")]
    UnterminatedComment,
}
