//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. Expressions are parsed by precedence
//! climbing over numeric binding powers and it handles:
//!
//! - Statement parsing (let, fn, return/break/continue, expression statements)
//! - Expression parsing (binary, prefix and postfix operators, literals)
//! - Blocks and control flow, which are expressions
//! - Type annotations, patterns and parameters
//!
//! Operands with their own syntax use NUD (null denotation) handlers and
//! postfix forms use LED (left denotation) handlers, all registered in
//! `lookups`. Parsing stops at the first error, which is returned as the
//! `Error` variant of the family being parsed.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
