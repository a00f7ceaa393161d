//! Sequential scan executor implementation.

use crate::access::Tuple;
use crate::catalog::RowSchema;
use crate::error::{ExecutionError, ExecutionResult};
use crate::executor::Executor;
use crate::storage::{Storage, TableScan};

/// Executor for sequential table scans.
///
/// Each `init()` opens a fresh storage scan, so the executor can serve as
/// the inner side of a nested loop join.
pub struct SeqScanExecutor<'a> {
    storage: &'a dyn Storage,
    table_name: String,
    scan: Option<TableScan<'a>>,
    output_schema: RowSchema,
}

impl<'a> SeqScanExecutor<'a> {
    /// Create a new sequential scan executor
    pub fn new(storage: &'a dyn Storage, table_name: impl Into<String>) -> Self {
        Self {
            storage,
            table_name: table_name.into(),
            scan: None,
            output_schema: RowSchema::default(),
        }
    }
}

impl Executor for SeqScanExecutor<'_> {
    fn init(&mut self) -> ExecutionResult<()> {
        let schema = self.storage.table_schema(&self.table_name)?;
        self.output_schema = RowSchema::for_table(&schema);
        self.scan = Some(self.storage.open_scan(&self.table_name)?);
        Ok(())
    }

    fn next(&mut self) -> ExecutionResult<Option<Tuple>> {
        let scan = self.scan.as_mut().ok_or(ExecutionError::NotInitialized)?;
        Ok(scan.next())
    }

    fn output_schema(&self) -> &RowSchema {
        &self.output_schema
    }
}
