//! Filter executor implementation.
//!
//! This executor passes on the tuples of a child executor for which every
//! predicate evaluates to true. Predicates are borrowed from the statement
//! tree and resolve column accesses against the child's output schema.

use crate::access::Tuple;
use crate::catalog::RowSchema;
use crate::error::{ExecutionError, ExecutionResult};
use crate::executor::Executor;
use crate::expression::Expression;
use log::trace;

/// Executor that filters tuples based on boolean expressions
pub struct FilterExecutor<'a> {
    /// Child executor that produces tuples
    child: Box<dyn Executor + 'a>,
    /// Predicates that must all hold, evaluated in order
    predicates: Vec<&'a Expression>,
    /// Output schema (same as child's schema)
    output_schema: RowSchema,
    initialized: bool,
}

impl<'a> FilterExecutor<'a> {
    pub fn new(child: Box<dyn Executor + 'a>, predicate: &'a Expression) -> Self {
        Self::with_predicates(child, vec![predicate])
    }

    pub fn with_predicates(child: Box<dyn Executor + 'a>, predicates: Vec<&'a Expression>) -> Self {
        Self {
            child,
            predicates,
            output_schema: RowSchema::default(),
            initialized: false,
        }
    }

    fn matches(&self, tuple: &Tuple) -> ExecutionResult<bool> {
        for predicate in &self.predicates {
            if !predicate.evaluate_predicate(tuple, &self.output_schema)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl Executor for FilterExecutor<'_> {
    fn init(&mut self) -> ExecutionResult<()> {
        self.child.init()?;
        self.output_schema = self.child.output_schema().clone();
        self.initialized = true;
        Ok(())
    }

    fn next(&mut self) -> ExecutionResult<Option<Tuple>> {
        if !self.initialized {
            return Err(ExecutionError::NotInitialized);
        }

        // Keep pulling from the child until a tuple satisfies every predicate
        while let Some(tuple) = self.child.next()? {
            if self.matches(&tuple)? {
                return Ok(Some(tuple));
            }
            trace!("filtered out {}", tuple);
        }
        Ok(None)
    }

    fn output_schema(&self) -> &RowSchema {
        &self.output_schema
    }
}
