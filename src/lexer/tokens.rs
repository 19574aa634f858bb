use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("while", TokenKind::While);
        map.insert("break", TokenKind::Break);
        map.insert("fn", TokenKind::Fn);
        map.insert("for", TokenKind::For);
        map.insert("else", TokenKind::Else);
        map.insert("continue", TokenKind::Continue);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("in", TokenKind::In);
        map.insert("not", TokenKind::Not);
        map.insert("pub", TokenKind::Pub);
        map.insert("new", TokenKind::New);
        map.insert("class", TokenKind::Class);
        map.insert("return", TokenKind::Return);
        map.insert("let", TokenKind::Let);
        map.insert("mut", TokenKind::Mut);
        map.insert("false", TokenKind::False);
        map.insert("true", TokenKind::True);
        map.insert("null", TokenKind::Null);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    /// Malformed input; the token's value is the message.
    Error,

    Identifier,
    Int,
    Float,
    Char,
    String,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,

    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Dot,
    Comma,
    Colon,
    Semicolon,
    Arrow,     // ->
    Ampersand, // &

    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,
    PercentEquals,

    Plus,
    Dash,
    Star,
    StarStar, // **
    Slash,
    Percent,

    // Reserved
    Null,
    False,
    True,
    If,
    Else,
    While,
    For,
    Break,
    Continue,
    Fn,
    Return,
    Let,
    Mut,
    Class,
    New,
    Pub,
    Not,
    And,
    Or,
    In,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text of the token; for `Error` tokens, the diagnostic message.
    pub value: String,
    /// Where the token starts.
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind, self.value)
    }
}

impl Token {
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }
}
