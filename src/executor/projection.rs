//! Projection executor implementation.
//!
//! This executor keeps the listed columns of each child tuple, in the order
//! they are listed. A column may be listed more than once.

use crate::access::Tuple;
use crate::catalog::RowSchema;
use crate::error::{ExecutionError, ExecutionResult};
use crate::executor::Executor;
use crate::expression::{ColumnName, ExpressionError};

/// Executor that projects specific columns from child tuples
pub struct ProjectionExecutor<'a> {
    /// Child executor that produces tuples
    child: Box<dyn Executor + 'a>,
    /// Columns to keep, in output order
    columns: &'a [ColumnName],
    /// Positions of `columns` in the child's output, set by `init()`
    column_indices: Vec<usize>,
    /// Output schema (projected columns)
    output_schema: RowSchema,
    initialized: bool,
}

impl<'a> ProjectionExecutor<'a> {
    /// Create a new projection executor
    ///
    /// # Example
    /// ```ignore
    /// // If child produces columns [id, name, age]
    /// // columns [age, id] would produce [age, id]
    /// ```
    pub fn new(child: Box<dyn Executor + 'a>, columns: &'a [ColumnName]) -> Self {
        Self {
            child,
            columns,
            column_indices: Vec::new(),
            output_schema: RowSchema::default(),
            initialized: false,
        }
    }
}

impl Executor for ProjectionExecutor<'_> {
    fn init(&mut self) -> ExecutionResult<()> {
        self.child.init()?;

        let child_schema = self.child.output_schema();
        self.column_indices = self
            .columns
            .iter()
            .map(|column| {
                child_schema
                    .resolve(column)
                    .ok_or_else(|| ExpressionError::UnboundColumn {
                        column: column.clone(),
                    })
            })
            .collect::<Result<_, _>>()?;
        self.output_schema = child_schema.project(&self.column_indices);

        self.initialized = true;
        Ok(())
    }

    fn next(&mut self) -> ExecutionResult<Option<Tuple>> {
        if !self.initialized {
            return Err(ExecutionError::NotInitialized);
        }

        let Some(tuple) = self.child.next()? else {
            return Ok(None);
        };

        // A tuple shorter than its schema fails here instead of losing columns
        let values = self
            .columns
            .iter()
            .zip(&self.column_indices)
            .map(|(column, &idx)| {
                tuple
                    .get(idx)
                    .cloned()
                    .ok_or_else(|| ExpressionError::UnboundColumn {
                        column: column.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(Tuple::new(values)))
    }

    fn output_schema(&self) -> &RowSchema {
        &self.output_schema
    }
}
