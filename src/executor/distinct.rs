//! Distinct executor implementation.

use crate::access::Tuple;
use crate::catalog::RowSchema;
use crate::error::{ExecutionError, ExecutionResult};
use crate::executor::Executor;
use std::collections::HashSet;

/// Executor that drops tuples equal to one already returned.
///
/// The first occurrence of each tuple is kept, so the child's order is
/// preserved among the survivors.
pub struct DistinctExecutor<'a> {
    child: Box<dyn Executor + 'a>,
    seen: HashSet<Tuple>,
    output_schema: RowSchema,
    initialized: bool,
}

impl<'a> DistinctExecutor<'a> {
    pub fn new(child: Box<dyn Executor + 'a>) -> Self {
        Self {
            child,
            seen: HashSet::new(),
            output_schema: RowSchema::default(),
            initialized: false,
        }
    }
}

impl Executor for DistinctExecutor<'_> {
    fn init(&mut self) -> ExecutionResult<()> {
        self.child.init()?;
        self.output_schema = self.child.output_schema().clone();
        self.seen.clear();
        self.initialized = true;
        Ok(())
    }

    fn next(&mut self) -> ExecutionResult<Option<Tuple>> {
        if !self.initialized {
            return Err(ExecutionError::NotInitialized);
        }

        while let Some(tuple) = self.child.next()? {
            if !self.seen.contains(&tuple) {
                self.seen.insert(tuple.clone());
                return Ok(Some(tuple));
            }
        }
        Ok(None)
    }

    fn output_schema(&self) -> &RowSchema {
        &self.output_schema
    }
}
