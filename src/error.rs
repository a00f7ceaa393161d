//! Errors surfaced to callers of statement execution.

use crate::expression::ExpressionError;
use crate::storage::StorageError;
use thiserror::Error;

/// Failure kinds a caller can branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TypeMismatch,
    DivisionByZero,
    UnsupportedOperator,
    UnboundColumn,
    DuplicateTable,
    UnknownTable,
    SchemaMismatch,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExecutionError {
    #[error(transparent)]
    Expression(#[from] ExpressionError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Executor not initialized. Call init() first.")]
    NotInitialized,
}

impl ExecutionError {
    /// The failure kind, if this error is one callers are expected to handle
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            ExecutionError::Expression(err) => match err {
                ExpressionError::TypeMismatch { .. } => Some(ErrorKind::TypeMismatch),
                ExpressionError::DivisionByZero => Some(ErrorKind::DivisionByZero),
                ExpressionError::UnsupportedOperator { .. }
                | ExpressionError::UnknownOperatorToken(_) => {
                    Some(ErrorKind::UnsupportedOperator)
                }
                ExpressionError::UnboundColumn { .. } => Some(ErrorKind::UnboundColumn),
            },
            ExecutionError::Storage(err) => match err {
                StorageError::DuplicateTable { .. } => Some(ErrorKind::DuplicateTable),
                StorageError::UnknownTable { .. } => Some(ErrorKind::UnknownTable),
                StorageError::SchemaMismatch { .. } | StorageError::UnknownType { .. } => {
                    Some(ErrorKind::SchemaMismatch)
                }
            },
            ExecutionError::NotInitialized => None,
        }
    }
}

pub type ExecutionResult<T> = Result<T, ExecutionError>;
