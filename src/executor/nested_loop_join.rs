//! Nested Loop Join executor implementation.
//!
//! This executor forms the cross product of two child executors. For each
//! tuple from the left child it re-initializes the right child and pairs the
//! left tuple with every right tuple, so the right side varies fastest.
//! Join conditions are applied by a filter above the join.

use crate::access::Tuple;
use crate::catalog::RowSchema;
use crate::error::{ExecutionError, ExecutionResult};
use crate::executor::Executor;

/// Executor that performs a nested loop cross product
pub struct NestedLoopJoinExecutor<'a> {
    /// Left (outer) child executor
    left_child: Box<dyn Executor + 'a>,
    /// Right (inner) child executor, restarted for every left tuple
    right_child: Box<dyn Executor + 'a>,
    /// Output schema (left schema + right schema)
    output_schema: RowSchema,
    /// Current left tuple (if any)
    current_left_tuple: Option<Tuple>,
    initialized: bool,
}

impl<'a> NestedLoopJoinExecutor<'a> {
    pub fn new(left_child: Box<dyn Executor + 'a>, right_child: Box<dyn Executor + 'a>) -> Self {
        Self {
            left_child,
            right_child,
            output_schema: RowSchema::default(),
            current_left_tuple: None,
            initialized: false,
        }
    }
}

impl Executor for NestedLoopJoinExecutor<'_> {
    fn init(&mut self) -> ExecutionResult<()> {
        self.left_child.init()?;
        self.right_child.init()?;

        self.output_schema = self
            .left_child
            .output_schema()
            .join(self.right_child.output_schema());

        self.current_left_tuple = None;
        self.initialized = true;
        Ok(())
    }

    fn next(&mut self) -> ExecutionResult<Option<Tuple>> {
        if !self.initialized {
            return Err(ExecutionError::NotInitialized);
        }

        loop {
            let left_tuple = match self.current_left_tuple.take() {
                Some(tuple) => tuple,
                None => match self.left_child.next()? {
                    Some(tuple) => {
                        // Reset right child to start scanning from beginning
                        self.right_child.init()?;
                        tuple
                    }
                    None => return Ok(None),
                },
            };

            match self.right_child.next()? {
                Some(right_tuple) => {
                    let combined = left_tuple.concat(&right_tuple);
                    self.current_left_tuple = Some(left_tuple);
                    return Ok(Some(combined));
                }
                // Right side exhausted, move on to the next left tuple
                None => continue,
            }
        }
    }

    fn output_schema(&self) -> &RowSchema {
        &self.output_schema
    }
}
