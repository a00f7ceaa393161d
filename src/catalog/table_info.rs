//! Table schema as handed out by the storage collaborator.

use crate::access::{DataType, Tuple};
use crate::catalog::ColumnInfo;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    pub table_name: String,
    pub columns: Vec<ColumnInfo>,
}

impl TableSchema {
    pub fn new(table_name: impl Into<String>, columns: Vec<ColumnInfo>) -> Self {
        Self {
            table_name: table_name.into(),
            columns,
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|col| col.column_name == name)
    }

    pub fn column_types(&self) -> Vec<DataType> {
        self.columns.iter().map(|col| col.column_type).collect()
    }

    /// Describe why `tuple` does not fit this schema, or `None` if it does
    pub fn mismatch(&self, tuple: &Tuple) -> Option<String> {
        if tuple.len() != self.columns.len() {
            return Some(format!(
                "expected {} values, got {}",
                self.columns.len(),
                tuple.len()
            ));
        }

        self.columns
            .iter()
            .zip(tuple.values())
            .find(|(col, value)| !value.is_compatible_with(col.column_type))
            .map(|(col, value)| {
                format!(
                    "value {} is not compatible with column {} of type {}",
                    value, col.column_name, col.column_type
                )
            })
    }
}
