//! Executor layer for statement execution.
//!
//! SELECT runs through Volcano-style operators: each executor produces
//! tuples one at a time via `next()`, and operators compose by owning their
//! children. The statement entry point drains the pipeline eagerly, so
//! callers receive the full ordered result. DDL, INSERT and DELETE are
//! forwarded to the storage collaborator.

use crate::access::Tuple;
use crate::catalog::RowSchema;
use crate::error::ExecutionResult;
use crate::planner::PlannerConfig;
use crate::sql::Statement;
use crate::storage::Storage;
use log::debug;

pub mod ddl;
pub mod delete;
pub mod distinct;
pub mod filter;
pub mod insert;
pub mod nested_loop_join;
pub mod projection;
pub mod select;
pub mod seq_scan;
pub mod sort;

// Re-export executors
pub use distinct::DistinctExecutor;
pub use filter::FilterExecutor;
pub use nested_loop_join::NestedLoopJoinExecutor;
pub use projection::ProjectionExecutor;
pub use select::build_select_executor;
pub use seq_scan::SeqScanExecutor;
pub use sort::SortExecutor;

/// Trait for all query executors
pub trait Executor: Send {
    /// Initialize the executor. This must be called before `next()`.
    ///
    /// Calling `init()` again restarts the executor from its first tuple.
    fn init(&mut self) -> ExecutionResult<()>;

    /// Get the next tuple from the executor.
    /// Returns None when there are no more tuples.
    fn next(&mut self) -> ExecutionResult<Option<Tuple>>;

    /// Get the output schema of this executor. Empty until `init()`.
    fn output_schema(&self) -> &RowSchema;
}

/// Initialize `executor` and collect everything it produces
pub fn drain(executor: &mut dyn Executor) -> ExecutionResult<Vec<Tuple>> {
    executor.init()?;
    let mut tuples = Vec::new();
    while let Some(tuple) = executor.next()? {
        tuples.push(tuple);
    }
    Ok(tuples)
}

/// Execute one statement against `storage`.
///
/// SELECT returns its result tuples in order; every other statement returns
/// an empty vector.
pub fn execute_statement(
    statement: &Statement,
    storage: &dyn Storage,
    config: &PlannerConfig,
) -> ExecutionResult<Vec<Tuple>> {
    debug!("executing {} statement", statement.kind());

    match statement {
        Statement::CreateTable(create) => {
            ddl::execute_create_table(create, storage)?;
            Ok(Vec::new())
        }
        Statement::DropTable(drop) => {
            ddl::execute_drop_table(drop, storage)?;
            Ok(Vec::new())
        }
        Statement::Select(select) => select::execute_select(select, storage, config),
        Statement::Insert(insert) => {
            insert::execute_insert(insert, storage, config)?;
            Ok(Vec::new())
        }
        Statement::Delete(delete) => {
            delete::execute_delete(delete, storage)?;
            Ok(Vec::new())
        }
    }
}

impl Statement {
    /// Execute with the default planner configuration
    pub fn execute(&self, storage: &dyn Storage) -> ExecutionResult<Vec<Tuple>> {
        execute_statement(self, storage, &PlannerConfig::default())
    }
}
