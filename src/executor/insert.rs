//! INSERT execution.

use crate::access::{Tuple, Value};
use crate::catalog::TableSchema;
use crate::error::ExecutionResult;
use crate::executor::select::execute_select;
use crate::planner::PlannerConfig;
use crate::sql::{InsertSource, InsertStatement};
use crate::storage::{Storage, StorageError, StorageResult};
use log::debug;

/// Insert every source tuple into the target table, in source order.
///
/// A nested SELECT is run to completion before the first tuple is written,
/// so `INSERT INTO t SELECT ... FROM t` never sees its own inserts.
pub fn execute_insert(
    insert: &InsertStatement,
    storage: &dyn Storage,
    config: &PlannerConfig,
) -> ExecutionResult<()> {
    let source = match &insert.source {
        InsertSource::Values(tuples) => tuples.clone(),
        InsertSource::Select(select) => execute_select(select, storage, config)?,
    };

    let mapping = match &insert.columns {
        Some(columns) => {
            let schema = storage.table_schema(&insert.table_name)?;
            Some(ColumnMapping::new(&schema, columns)?)
        }
        None => None,
    };

    let mut insert_count = 0;
    for tuple in source {
        let tuple = match &mapping {
            Some(mapping) => mapping.apply(&insert.table_name, tuple)?,
            None => tuple,
        };
        storage.insert_tuple(&insert.table_name, tuple)?;
        insert_count += 1;
    }

    debug!("inserted {} tuple(s) into {}", insert_count, insert.table_name);
    Ok(())
}

/// Places the values of a column-list INSERT at their schema positions
struct ColumnMapping {
    positions: Vec<usize>,
    width: usize,
}

impl ColumnMapping {
    fn new(schema: &TableSchema, columns: &[String]) -> StorageResult<Self> {
        let mut positions = Vec::with_capacity(columns.len());
        for column in columns {
            let position =
                schema
                    .column_index(column)
                    .ok_or_else(|| StorageError::SchemaMismatch {
                        table: schema.table_name.clone(),
                        reason: format!("unknown column {}", column),
                    })?;
            if positions.contains(&position) {
                return Err(StorageError::SchemaMismatch {
                    table: schema.table_name.clone(),
                    reason: format!("duplicate column {}", column),
                });
            }
            positions.push(position);
        }

        Ok(Self {
            positions,
            width: schema.column_count(),
        })
    }

    fn apply(&self, table: &str, tuple: Tuple) -> StorageResult<Tuple> {
        if tuple.len() != self.positions.len() {
            return Err(StorageError::SchemaMismatch {
                table: table.to_string(),
                reason: format!(
                    "expected {} values for the listed columns, got {}",
                    self.positions.len(),
                    tuple.len()
                ),
            });
        }

        // Unlisted columns stay NULL
        let mut values = vec![Value::Null; self.width];
        for (&position, value) in self.positions.iter().zip(tuple.into_values()) {
            values[position] = value;
        }
        Ok(Tuple::new(values))
    }
}
