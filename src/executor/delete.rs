//! DELETE execution.

use crate::error::ExecutionResult;
use crate::executor::{drain, Executor, FilterExecutor, SeqScanExecutor};
use crate::sql::DeleteStatement;
use crate::storage::Storage;
use log::debug;

/// Delete the tuples of a table matching the condition, or all of them.
///
/// Matches are collected from a complete scan first and only then removed,
/// one storage call per tuple.
pub fn execute_delete(delete: &DeleteStatement, storage: &dyn Storage) -> ExecutionResult<()> {
    let scan: Box<dyn Executor + '_> = Box::new(SeqScanExecutor::new(storage, &delete.table_name));
    let mut executor: Box<dyn Executor + '_> = match &delete.condition {
        Some(condition) => Box::new(FilterExecutor::new(scan, condition)),
        None => scan,
    };

    let tuples_to_delete = drain(executor.as_mut())?;
    for tuple in &tuples_to_delete {
        storage.delete_tuple(&delete.table_name, tuple)?;
    }

    debug!(
        "deleted {} tuple(s) from {}",
        tuples_to_delete.len(),
        delete.table_name
    );
    Ok(())
}
