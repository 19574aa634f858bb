use std::fmt::Display;

use super::{
    ast::Expression,
    types::{Parameter, Type},
};

fn join_parameters(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(|parameter| parameter.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Function Statement
/// `fn name(params) -> type { .. }`; `body` is always a block expression.
#[derive(Debug, Clone, PartialEq)]
pub struct FnStmt {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<Type>,
    pub body: Box<Expression>,
}

impl Display for FnStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fn {}({})", self.name, join_parameters(&self.parameters))?;
        if let Some(return_type) = &self.return_type {
            write!(f, " -> {}", return_type)?;
        }
        write!(f, " {}", self.body)
    }
}

/// Class Statement
/// Reserved syntax; the parser reports `class not implemented` for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassStmt {
    pub name: String,
    pub fields: Vec<Parameter>,
    pub methods: Vec<FnStmt>,
}

impl Display for ClassStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "class {} {{", self.name)?;
        for field in &self.fields {
            write!(f, " {};", field)?;
        }
        for method in &self.methods {
            write!(f, " {}", method)?;
        }
        write!(f, " }}")
    }
}
