use std::fmt::Display;

use super::{
    ast::{Expression, Statement},
    types::Pattern,
};

// OPERATORS

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Exponentiation,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
    Lt,
    LtEqual,
    Gt,
    GtEqual,
    In,
    Equal,
    NotEqual,
    And,
    Or,
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Exponentiation => "**",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulus => "%",
            BinaryOperator::Lt => "<",
            BinaryOperator::LtEqual => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::GtEqual => ">=",
            BinaryOperator::In => "in",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::And => "and",
            BinaryOperator::Or => "or",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOperator {
    Assign,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
}

impl AssignOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            AssignOperator::Assign => "=",
            AssignOperator::Add => "+=",
            AssignOperator::Subtract => "-=",
            AssignOperator::Multiply => "*=",
            AssignOperator::Divide => "/=",
            AssignOperator::Modulus => "%=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Not,
    Negate,
}

impl UnaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOperator::Not => "not",
            UnaryOperator::Negate => "-",
        }
    }
}

// CONTROL FLOW

/// If Expression
/// `if condition { .. }` with an optional `else { .. }`. Both branches are
/// block expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub condition: Box<Expression>,
    pub truthy: Box<Expression>,
    pub falsy: Option<Box<Expression>>,
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "if {} {}", self.condition, self.truthy)?;
        if let Some(falsy) = &self.falsy {
            write!(f, " else {}", falsy)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileExpr {
    pub condition: Box<Expression>,
    pub body: Box<Expression>,
}

impl Display for WhileExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "while {} {}", self.condition, self.body)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForExpr {
    pub subject: Pattern,
    pub iterable: Box<Expression>,
    pub body: Box<Expression>,
}

impl Display for ForExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "for {} in {} {}", self.subject, self.iterable, self.body)
    }
}

/// Block Expression
/// `result` holds the final expression when it is not followed by `;`.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockExpr {
    pub statements: Vec<Statement>,
    pub result: Option<Box<Expression>>,
}

impl Display for BlockExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for statement in &self.statements {
            write!(f, " {}", statement)?;
        }
        if let Some(result) = &self.result {
            write!(f, " {}", result)?;
        }
        write!(f, " }}")
    }
}

// OPERATIONS

#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpr {
    pub subject: Box<Expression>,
    pub value: Box<Expression>,
    pub operator: AssignOperator,
}

impl Display for AssignExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.subject, self.operator.symbol(), self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub operator: BinaryOperator,
}

impl Display for BinaryExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator.symbol(), self.right)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub subject: Box<Expression>,
    pub operator: UnaryOperator,
}

impl Display for UnaryExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {})", self.operator.symbol(), self.subject)
    }
}

// POSTFIX

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub subject: Box<Expression>,
    pub arguments: Vec<Expression>,
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arguments = self
            .arguments
            .iter()
            .map(|argument| argument.to_string())
            .collect::<Vec<_>>();

        write!(f, "{}({})", self.subject, arguments.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    pub subject: Box<Expression>,
    pub name: String,
}

impl Display for MemberExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.subject, self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpr {
    pub subject: Box<Expression>,
    pub key: Box<Expression>,
}

impl Display for IndexExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]", self.subject, self.key)
    }
}
