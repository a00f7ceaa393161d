//! Sort executor implementation.
//!
//! This executor materializes every tuple of its child, then returns them
//! ordered by a single column. The sort is stable: tuples with equal keys
//! keep the order the child produced them in.

use crate::access::Tuple;
use crate::catalog::RowSchema;
use crate::error::{ExecutionError, ExecutionResult};
use crate::executor::Executor;
use crate::expression::{ColumnName, ExpressionError};
use std::collections::VecDeque;

/// Executor that sorts tuples ascending by one column
pub struct SortExecutor<'a> {
    /// Child executor that produces tuples
    child: Box<dyn Executor + 'a>,
    /// Column to sort by, resolved against the child's schema
    key: &'a ColumnName,
    /// Output schema (same as child's schema)
    output_schema: RowSchema,
    /// Materialized and sorted tuples, consumed from the front
    sorted_tuples: VecDeque<Tuple>,
    initialized: bool,
}

impl<'a> SortExecutor<'a> {
    pub fn new(child: Box<dyn Executor + 'a>, key: &'a ColumnName) -> Self {
        Self {
            child,
            key,
            output_schema: RowSchema::default(),
            sorted_tuples: VecDeque::new(),
            initialized: false,
        }
    }
}

impl Executor for SortExecutor<'_> {
    fn init(&mut self) -> ExecutionResult<()> {
        self.child.init()?;
        self.output_schema = self.child.output_schema().clone();

        let key_index =
            self.output_schema
                .resolve(self.key)
                .ok_or_else(|| ExpressionError::UnboundColumn {
                    column: self.key.clone(),
                })?;

        // Materialize all tuples from child, each paired with its sort key
        let mut keyed = Vec::new();
        while let Some(tuple) = self.child.next()? {
            let key = tuple
                .get(key_index)
                .cloned()
                .ok_or_else(|| ExpressionError::UnboundColumn {
                    column: self.key.clone(),
                })?;
            keyed.push((key, tuple));
        }

        keyed.sort_by(|(a, _), (b, _)| a.natural_cmp(b));
        self.sorted_tuples = keyed.into_iter().map(|(_, tuple)| tuple).collect();

        self.initialized = true;
        Ok(())
    }

    fn next(&mut self) -> ExecutionResult<Option<Tuple>> {
        if !self.initialized {
            return Err(ExecutionError::NotInitialized);
        }
        Ok(self.sorted_tuples.pop_front())
    }

    fn output_schema(&self) -> &RowSchema {
        &self.output_schema
    }
}
