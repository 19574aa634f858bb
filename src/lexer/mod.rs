//! Lexical analysis.
//!
//! This module contains the lexer that converts source text into tokens
//! for the parser. It handles:
//!
//! - Keywords, identifiers and numeric literals (regex pattern table)
//! - Char and string literals, with escapes kept verbatim
//! - One and two character operators
//! - Line comments and nested block comments
//! - Line and column tracking for diagnostics
//!
//! Tokens are handed out through the `TokenStream` capability, which the
//! parser consumes.

pub mod lexer;
pub mod stream;
pub mod tokens;
