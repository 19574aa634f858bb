use std::fmt::Display;

use crate::errors::errors::Error;

use super::ast::Expression;

/// Type Types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeType {
    Error,
    Id,
}

/// A type annotation, e.g. the `int` in `let a: int`.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Error(Error),
    Id(String),
}

impl Type {
    pub fn get_type_type(&self) -> TypeType {
        match self {
            Type::Error(_) => TypeType::Error,
            Type::Id(_) => TypeType::Id,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Type::Error(_))
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Error(error) => write!(f, "{}", error),
            Type::Id(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternType {
    Error,
    Id,
}

/// The binding side of a `let`, a parameter or a `for` loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    Error(Error),
    Id(String),
}

impl Pattern {
    pub fn get_pattern_type(&self) -> PatternType {
        match self {
            Pattern::Error(_) => PatternType::Error,
            Pattern::Id(_) => PatternType::Id,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Pattern::Error(_))
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pattern::Error(error) => write!(f, "{}", error),
            Pattern::Id(name) => write!(f, "{}", name),
        }
    }
}

/// `pattern [: type] [= value]`, used by `let` and function parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub subject: Pattern,
    pub explicit_type: Option<Type>,
    pub value: Option<Expression>,
}

impl Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.subject)?;
        if let Some(explicit_type) = &self.explicit_type {
            write!(f, ": {}", explicit_type)?;
        }
        if let Some(value) = &self.value {
            write!(f, " = {}", value)?;
        }
        Ok(())
    }
}
