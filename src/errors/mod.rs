//! Diagnostics produced while turning source text into an AST.
//!
//! - `Error` pairs a message with the line and column it was found at
//! - `ErrorImpl` is the closed set of parser messages
//! - `LexError` is the closed set of lexer messages, carried by `Error` tokens

pub mod errors;
