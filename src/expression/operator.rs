//! Operator tokens carried by compound expressions.

use crate::expression::ExpressionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operator token of a compound expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Logical
    And,
    Or,

    // Relational
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

/// The family an operator belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    Arithmetic,
    Logical,
    Relational,
}

impl Operator {
    pub fn kind(&self) -> OperatorKind {
        match self {
            Operator::Add | Operator::Sub | Operator::Mul | Operator::Div => {
                OperatorKind::Arithmetic
            }
            Operator::And | Operator::Or => OperatorKind::Logical,
            Operator::Lt
            | Operator::Le
            | Operator::Gt
            | Operator::Ge
            | Operator::Eq
            | Operator::Ne => OperatorKind::Relational,
        }
    }

    /// The source token for this operator
    pub fn token(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::And => "&",
            Operator::Or => "|",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Eq => "=",
            Operator::Ne => "<>",
        }
    }
}

impl FromStr for Operator {
    type Err = ExpressionError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            "&" => Ok(Operator::And),
            "|" => Ok(Operator::Or),
            "<" => Ok(Operator::Lt),
            "<=" => Ok(Operator::Le),
            ">" => Ok(Operator::Gt),
            ">=" => Ok(Operator::Ge),
            "=" => Ok(Operator::Eq),
            "<>" => Ok(Operator::Ne),
            other => Err(ExpressionError::UnknownOperatorToken(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
