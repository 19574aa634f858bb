use std::fmt::Display;

use crate::errors::errors::Error;

use super::{
    expressions::{
        AssignExpr, BinaryExpr, BlockExpr, CallExpr, ForExpr, IfExpr, IndexExpr, MemberExpr,
        UnaryExpr, WhileExpr,
    },
    statements::{ClassStmt, FnStmt},
    types::Parameter,
};

/// Expression Types
///
/// Discriminant of an `Expression`.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Error,
    If,
    While,
    For,
    Block,
    Assign,
    Binary,
    Unary,
    Call,
    Member,
    Index,
    Id,
    Int,
    Float,
    Char,
    String,
    Bool,
    Null,
}

/// Expression
///
/// Every construct in the language is an expression except the items
/// listed in `Statement`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Error(Error),
    If(IfExpr),
    While(WhileExpr),
    For(ForExpr),
    Block(BlockExpr),
    Assign(AssignExpr),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Call(CallExpr),
    Member(MemberExpr),
    Index(IndexExpr),
    Id(String),
    Int(i64),
    Float(f64),
    Char(char),
    String(String),
    Bool(bool),
    Null,
}

impl Expression {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expression::Error(_) => ExprType::Error,
            Expression::If(_) => ExprType::If,
            Expression::While(_) => ExprType::While,
            Expression::For(_) => ExprType::For,
            Expression::Block(_) => ExprType::Block,
            Expression::Assign(_) => ExprType::Assign,
            Expression::Binary(_) => ExprType::Binary,
            Expression::Unary(_) => ExprType::Unary,
            Expression::Call(_) => ExprType::Call,
            Expression::Member(_) => ExprType::Member,
            Expression::Index(_) => ExprType::Index,
            Expression::Id(_) => ExprType::Id,
            Expression::Int(_) => ExprType::Int,
            Expression::Float(_) => ExprType::Float,
            Expression::Char(_) => ExprType::Char,
            Expression::String(_) => ExprType::String,
            Expression::Bool(_) => ExprType::Bool,
            Expression::Null => ExprType::Null,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Expression::Error(_))
    }

    pub fn as_error(&self) -> Option<&Error> {
        match self {
            Expression::Error(error) => Some(error),
            _ => None,
        }
    }
}

impl From<Error> for Expression {
    fn from(error: Error) -> Self {
        Expression::Error(error)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Error(error) => write!(f, "{}", error),
            Expression::If(expr) => write!(f, "{}", expr),
            Expression::While(expr) => write!(f, "{}", expr),
            Expression::For(expr) => write!(f, "{}", expr),
            Expression::Block(expr) => write!(f, "{}", expr),
            Expression::Assign(expr) => write!(f, "{}", expr),
            Expression::Binary(expr) => write!(f, "{}", expr),
            Expression::Unary(expr) => write!(f, "{}", expr),
            Expression::Call(expr) => write!(f, "{}", expr),
            Expression::Member(expr) => write!(f, "{}", expr),
            Expression::Index(expr) => write!(f, "{}", expr),
            Expression::Id(name) => write!(f, "{}", name),
            Expression::Int(value) => write!(f, "{}", value),
            // Debug keeps the decimal point on whole numbers
            Expression::Float(value) => write!(f, "{:?}", value),
            Expression::Char(value) => write!(f, "'{}'", value.escape_debug()),
            Expression::String(value) => write!(f, "\"{}\"", value.escape_debug()),
            Expression::Bool(value) => write!(f, "{}", value),
            Expression::Null => write!(f, "null"),
        }
    }
}

/// Statement Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StmtType {
    Error,
    Expression,
    Class,
    Fn,
    Let,
    Return,
    Break,
    Continue,
}

/// Statement
///
/// Items that may only appear in a statement position: inside a block or
/// at the top level of a program.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Error(Error),
    Expression(Expression),
    Class(ClassStmt),
    Fn(FnStmt),
    Let(Parameter),
    Return(Option<Expression>),
    Break(Option<Expression>),
    Continue(Option<Expression>),
}

impl Statement {
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Statement::Error(_) => StmtType::Error,
            Statement::Expression(_) => StmtType::Expression,
            Statement::Class(_) => StmtType::Class,
            Statement::Fn(_) => StmtType::Fn,
            Statement::Let(_) => StmtType::Let,
            Statement::Return(_) => StmtType::Return,
            Statement::Break(_) => StmtType::Break,
            Statement::Continue(_) => StmtType::Continue,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Statement::Error(_))
    }

    pub fn as_error(&self) -> Option<&Error> {
        match self {
            Statement::Error(error) => Some(error),
            _ => None,
        }
    }
}

impl From<Error> for Statement {
    fn from(error: Error) -> Self {
        Statement::Error(error)
    }
}

fn write_jump(
    f: &mut std::fmt::Formatter<'_>,
    keyword: &str,
    value: &Option<Expression>,
) -> std::fmt::Result {
    match value {
        Some(value) => write!(f, "{} {};", keyword, value),
        None => write!(f, "{};", keyword),
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Error(error) => write!(f, "{}", error),
            Statement::Expression(expression) => write!(f, "{};", expression),
            Statement::Class(class) => write!(f, "{}", class),
            Statement::Fn(function) => write!(f, "{}", function),
            Statement::Let(parameter) => write!(f, "let {};", parameter),
            Statement::Return(value) => write_jump(f, "return", value),
            Statement::Break(value) => write_jump(f, "break", value),
            Statement::Continue(value) => write_jump(f, "continue", value),
        }
    }
}
