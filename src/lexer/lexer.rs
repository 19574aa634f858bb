use std::collections::VecDeque;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::LexError, Position, MK_TOKEN};

use super::{
    stream::TokenStream,
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

/// Called with the byte length of a pattern match at the current position.
pub type RegexHandler = fn(&mut Lexer, usize);

pub struct RegexPattern {
    regex: &'static Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new("^[ \t\r\n]+").unwrap();
    static ref IDENTIFIER: Regex = Regex::new("^[a-zA-ZæøåÆØÅ_][a-zA-ZæøåÆØÅ_0-9]*").unwrap();
    // At most one dot; a second one is left for the next token.
    static ref NUMBER: Regex = Regex::new("^[0-9]+(\\.[0-9]*)?").unwrap();
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: &WHITESPACE, handler: skip_handler },
        RegexPattern { regex: &IDENTIFIER, handler: symbol_handler },
        RegexPattern { regex: &NUMBER, handler: number_handler },
    ];
}

/// Scans the whole source up front and hands the tokens out one at a time.
///
/// Scanning stops at the first malformed token, which is queued as an
/// `Error` token. The queue always ends with exactly one `EOF`.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    tokens: VecDeque<Token>,
    eof: Token,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        let mut lexer = Lexer {
            source: source.to_string(),
            pos: 0,
            line: 1,
            column: 1,
            tokens: VecDeque::new(),
            eof: MK_TOKEN!(TokenKind::EOF, String::new(), Position::start()),
        };

        lexer.scan();
        lexer
    }

    /// Drains the remaining tokens up to, but not including, `EOF`.
    pub fn collect(&mut self) -> Vec<Token> {
        let mut tokens = vec![];
        while !self.peek().is(TokenKind::EOF) {
            tokens.push(self.next());
        }
        tokens
    }

    fn scan(&mut self) {
        'scan: while !self.at_eof() {
            for pattern in PATTERNS.iter() {
                let matched = pattern.regex.find(self.remainder()).map(|m| m.end());
                if let Some(len) = matched {
                    (pattern.handler)(self, len);
                    continue 'scan;
                }
            }

            let start = self.position();
            if let Err(error) = self.scan_symbol() {
                self.push(MK_TOKEN!(TokenKind::Error, error.to_string(), start));
                break;
            }
        }

        self.eof = MK_TOKEN!(TokenKind::EOF, String::new(), self.position());
        self.tokens.push_back(self.eof.clone());
    }

    fn scan_symbol(&mut self) -> Result<(), LexError> {
        let Some(c) = self.at() else {
            return Ok(());
        };

        match c {
            '\'' => self.scan_char(),
            '"' => self.scan_string(),
            '/' => self.scan_slash_or_comment(),
            '+' => self.operator(TokenKind::Plus, &[('=', TokenKind::PlusEquals)]),
            '-' => self.operator(
                TokenKind::Dash,
                &[('=', TokenKind::MinusEquals), ('>', TokenKind::Arrow)],
            ),
            '*' => self.operator(
                TokenKind::Star,
                &[('=', TokenKind::StarEquals), ('*', TokenKind::StarStar)],
            ),
            '%' => self.operator(TokenKind::Percent, &[('=', TokenKind::PercentEquals)]),
            // `not` is the negation operator, a lone `!` is never valid
            '!' if self.second() == Some('=') => self.double(TokenKind::NotEquals),
            '<' => self.operator(TokenKind::Less, &[('=', TokenKind::LessEquals)]),
            '>' => self.operator(TokenKind::Greater, &[('=', TokenKind::GreaterEquals)]),
            '=' => self.operator(TokenKind::Assignment, &[('=', TokenKind::Equals)]),
            '&' => self.single(TokenKind::Ampersand),
            '(' => self.single(TokenKind::OpenParen),
            ')' => self.single(TokenKind::CloseParen),
            '{' => self.single(TokenKind::OpenCurly),
            '}' => self.single(TokenKind::CloseCurly),
            '[' => self.single(TokenKind::OpenBracket),
            ']' => self.single(TokenKind::CloseBracket),
            ',' => self.single(TokenKind::Comma),
            ':' => self.single(TokenKind::Colon),
            ';' => self.single(TokenKind::Semicolon),
            '.' => self.single(TokenKind::Dot),
            _ => Err(LexError::UnexpectedChar(c)),
        }
    }

    fn single(&mut self, kind: TokenKind) -> Result<(), LexError> {
        let start = self.position();
        if let Some(c) = self.step() {
            self.push(MK_TOKEN!(kind, c.to_string(), start));
        }
        Ok(())
    }

    fn double(&mut self, kind: TokenKind) -> Result<(), LexError> {
        let start = self.position();
        let value = self.remainder().chars().take(2).collect::<String>();
        self.advance_n(2);
        self.push(MK_TOKEN!(kind, value, start));
        Ok(())
    }

    /// Scans a one character operator, or a two character one when the
    /// following character is listed in `doubles`.
    fn operator(&mut self, single: TokenKind, doubles: &[(char, TokenKind)]) -> Result<(), LexError> {
        let start = self.position();
        let Some(first) = self.step() else {
            return Ok(());
        };

        let double = self
            .at()
            .and_then(|second| doubles.iter().find(|(c, _)| *c == second));

        match double {
            Some((second, kind)) => {
                let value = format!("{}{}", first, second);
                self.step();
                self.push(MK_TOKEN!(*kind, value, start));
            }
            None => self.push(MK_TOKEN!(single, first.to_string(), start)),
        }

        Ok(())
    }

    fn scan_char(&mut self) -> Result<(), LexError> {
        let start = self.position();
        let mut value = String::new();

        self.step();
        value.push('\'');

        match self.step() {
            None => return Err(LexError::UnexpectedEndOfChar),
            Some('\\') => {
                value.push('\\');
                value.push(self.step().ok_or(LexError::UnexpectedEndOfChar)?);
            }
            Some(c) => value.push(c),
        }

        match self.at() {
            None => return Err(LexError::UnexpectedEndOfChar),
            Some('\'') => {
                self.step();
                value.push('\'');
            }
            Some(_) => return Err(LexError::UnclosedChar),
        }

        self.push(MK_TOKEN!(TokenKind::Char, value, start));
        Ok(())
    }

    /// Escapes are kept verbatim; they are interpreted when the literal
    /// becomes an AST node.
    fn scan_string(&mut self) -> Result<(), LexError> {
        let start = self.position();
        let mut value = String::new();
        let mut escaped = false;

        self.step();
        value.push('"');

        loop {
            match self.step() {
                None => return Err(LexError::UnclosedString),
                Some('"') if !escaped => break,
                Some(c) => {
                    escaped = !escaped && c == '\\';
                    value.push(c);
                }
            }
        }

        value.push('"');
        self.push(MK_TOKEN!(TokenKind::String, value, start));
        Ok(())
    }

    fn scan_slash_or_comment(&mut self) -> Result<(), LexError> {
        let start = self.position();
        self.step();

        match self.at() {
            Some('/') => {
                while self.at().is_some_and(|c| c != '\n') {
                    self.step();
                }
            }
            Some('*') => {
                self.step();
                self.skip_block_comment()?;
            }
            Some('=') => {
                self.step();
                self.push(MK_TOKEN!(TokenKind::SlashEquals, String::from("/="), start));
            }
            _ => self.push(MK_TOKEN!(TokenKind::Slash, String::from("/"), start)),
        }

        Ok(())
    }

    /// Block comments nest; the opening `/*` has already been consumed.
    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let mut depth = 1;

        while depth > 0 {
            match (self.at(), self.second()) {
                (None, _) => return Err(LexError::UnterminatedComment),
                (Some('/'), Some('*')) => {
                    depth += 1;
                    self.advance_n(2);
                }
                (Some('*'), Some('/')) => {
                    depth -= 1;
                    self.advance_n(2);
                }
                _ => {
                    self.step();
                }
            }
        }

        Ok(())
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push_back(token);
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn second(&self) -> Option<char> {
        self.remainder().chars().nth(1)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Consumes one character, keeping line and column up to date.
    fn step(&mut self) -> Option<char> {
        let c = self.at()?;
        self.pos += c.len_utf8();

        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    fn advance_bytes(&mut self, len: usize) {
        let end = self.pos + len;
        while self.pos < end && self.step().is_some() {}
    }
}

impl TokenStream for Lexer {
    fn peek(&self) -> &Token {
        self.tokens.front().unwrap_or(&self.eof)
    }

    fn next(&mut self) -> Token {
        self.tokens.pop_front().unwrap_or_else(|| self.eof.clone())
    }
}

fn skip_handler(lexer: &mut Lexer, len: usize) {
    lexer.advance_bytes(len);
}

fn number_handler(lexer: &mut Lexer, len: usize) {
    let start = lexer.position();
    let value = lexer.remainder()[..len].to_string();
    let kind = if value.contains('.') {
        TokenKind::Float
    } else {
        TokenKind::Int
    };

    lexer.advance_bytes(len);
    lexer.push(MK_TOKEN!(kind, value, start));
}

fn symbol_handler(lexer: &mut Lexer, len: usize) {
    let start = lexer.position();
    let value = lexer.remainder()[..len].to_string();
    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.advance_bytes(len);
    lexer.push(MK_TOKEN!(kind, value, start));
}

/// Tokenizes the whole source, including the final `EOF` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokens.into()
}
