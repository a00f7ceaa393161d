//! Schema mapping for positional tuples produced during execution.

use crate::access::DataType;
use crate::catalog::TableSchema;
use crate::expression::ColumnName;

/// A column of an intermediate row, remembering which table it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundColumn {
    pub table: String,
    pub column: String,
    pub data_type: DataType,
}

/// Maps positions of a (possibly joined) tuple to table-qualified columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSchema {
    columns: Vec<BoundColumn>,
}

impl RowSchema {
    pub fn new(columns: Vec<BoundColumn>) -> Self {
        Self { columns }
    }

    pub fn for_table(schema: &TableSchema) -> Self {
        Self {
            columns: schema
                .columns
                .iter()
                .map(|col| BoundColumn {
                    table: schema.table_name.clone(),
                    column: col.column_name.clone(),
                    data_type: col.column_type,
                })
                .collect(),
        }
    }

    pub fn columns(&self) -> &[BoundColumn] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Schema of `self` followed by `other`, matching `Tuple::concat`
    pub fn join(&self, other: &RowSchema) -> RowSchema {
        RowSchema {
            columns: self
                .columns
                .iter()
                .chain(other.columns.iter())
                .cloned()
                .collect(),
        }
    }

    pub fn project(&self, indices: &[usize]) -> RowSchema {
        RowSchema {
            columns: indices
                .iter()
                .filter_map(|&idx| self.columns.get(idx).cloned())
                .collect(),
        }
    }

    /// Position of `column` in this schema.
    ///
    /// A qualified name must match table and column. An unqualified name
    /// resolves to the first column carrying that name; rejecting ambiguous
    /// names is left to whoever built the tree.
    pub fn resolve(&self, column: &ColumnName) -> Option<usize> {
        self.columns.iter().position(|bound| {
            bound.column == column.column
                && column.table().map_or(true, |table| bound.table == table)
        })
    }
}
