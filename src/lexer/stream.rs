use std::collections::VecDeque;

use crate::{Position, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// A pull-based source of tokens with one token of lookahead.
///
/// Both operations keep answering with an `EOF` token once the stream is
/// exhausted.
pub trait TokenStream {
    /// Returns the current token without consuming it.
    fn peek(&self) -> &Token;
    /// Consumes and returns the current token.
    fn next(&mut self) -> Token;
}

/// A fixed list of tokens replayed in order.
#[derive(Debug, Clone)]
pub struct TokenReplay {
    tokens: VecDeque<Token>,
    eof: Token,
}

impl TokenReplay {
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens.last().map(|token| token.position).unwrap_or_else(Position::start);

        TokenReplay {
            tokens: tokens.into(),
            eof: MK_TOKEN!(TokenKind::EOF, String::new(), end),
        }
    }

    /// Builds a replay from bare kinds, one column apart, for parser tests.
    pub fn from_kinds(kinds: &[(TokenKind, &str)]) -> Self {
        let tokens = kinds
            .iter()
            .enumerate()
            .map(|(index, (kind, value))| {
                MK_TOKEN!(*kind, value.to_string(), Position::new(1, index as u32 + 1))
            })
            .collect();

        TokenReplay::new(tokens)
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl TokenStream for TokenReplay {
    fn peek(&self) -> &Token {
        self.tokens.front().unwrap_or(&self.eof)
    }

    fn next(&mut self) -> Token {
        self.tokens.pop_front().unwrap_or_else(|| self.eof.clone())
    }
}
