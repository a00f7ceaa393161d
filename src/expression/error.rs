//! Error types for expression evaluation.

use crate::access::{DataType, Value};
use crate::expression::{ColumnName, Operator};
use thiserror::Error;

/// Which compound node evaluated an operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionKind {
    Arithmetic,
    Logical,
    Relational,
}

impl std::fmt::Display for ExpressionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpressionKind::Arithmetic => f.write_str("arithmetic"),
            ExpressionKind::Logical => f.write_str("logical"),
            ExpressionKind::Relational => f.write_str("relational"),
        }
    }
}

/// Errors that can occur during expression evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Operator '{operator}' is not supported in {kind} expressions")]
    UnsupportedOperator {
        operator: Operator,
        kind: ExpressionKind,
    },

    #[error("Column {column} is not bound to a row")]
    UnboundColumn { column: ColumnName },

    #[error("Unknown operator token: {0}")]
    UnknownOperatorToken(String),
}

impl ExpressionError {
    pub(crate) fn type_mismatch(expected: DataType, actual: &Value) -> Self {
        ExpressionError::TypeMismatch {
            expected: expected.to_string(),
            actual: describe(actual),
        }
    }

    /// Two operands that have no common comparable type
    pub(crate) fn incomparable(left: &Value, right: &Value) -> Self {
        ExpressionError::TypeMismatch {
            expected: format!("a value comparable with {}", describe(left)),
            actual: describe(right),
        }
    }
}

fn describe(value: &Value) -> String {
    value
        .data_type()
        .map(|t| t.to_string())
        .unwrap_or_else(|| "NULL".to_string())
}

/// Result type for expression operations
pub type ExpressionResult<T> = Result<T, ExpressionError>;
