//! Row contexts column accesses are resolved against.

use crate::access::{Tuple, Value};
use crate::catalog::RowSchema;
use crate::expression::{ColumnName, ExpressionError, ExpressionResult};

/// Source of column values for the row currently being evaluated
pub trait RowContext {
    fn column_value(&self, column: &ColumnName) -> ExpressionResult<Value>;
}

/// Context with no row bound; every column access fails
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyContext;

impl RowContext for EmptyContext {
    fn column_value(&self, column: &ColumnName) -> ExpressionResult<Value> {
        Err(ExpressionError::UnboundColumn {
            column: column.clone(),
        })
    }
}

/// A materialized tuple together with the schema describing its positions.
///
/// Scans bind their current row through this type, and joined rows that no
/// longer belong to a single table are evaluated the same way.
#[derive(Debug, Clone, Copy)]
pub struct TupleContext<'a> {
    schema: &'a RowSchema,
    tuple: &'a Tuple,
}

impl<'a> TupleContext<'a> {
    pub fn new(schema: &'a RowSchema, tuple: &'a Tuple) -> Self {
        Self { schema, tuple }
    }
}

impl RowContext for TupleContext<'_> {
    fn column_value(&self, column: &ColumnName) -> ExpressionResult<Value> {
        self.schema
            .resolve(column)
            .and_then(|idx| self.tuple.get(idx))
            .cloned()
            .ok_or_else(|| ExpressionError::UnboundColumn {
                column: column.clone(),
            })
    }
}
