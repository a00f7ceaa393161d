//! In-memory storage collaborator.

use crate::access::{DataType, Tuple};
use crate::catalog::{Attribute, ColumnInfo, TableSchema};
use crate::storage::{Storage, StorageError, StorageResult, TableScan};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::Arc;

struct Table {
    schema: TableSchema,
    rows: RwLock<Vec<Tuple>>,
}

/// Tables held in process memory.
///
/// Cloning is cheap and every clone sees the same tables. Scans read a
/// snapshot of the rows taken when the scan is opened, so changes made while
/// a scan is being consumed do not show up in it.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    tables: Arc<DashMap<String, Arc<Table>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self, name: &str) -> StorageResult<Arc<Table>> {
        self.tables
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StorageError::UnknownTable {
                table: name.to_string(),
            })
    }

    /// Number of rows currently stored in `name`
    pub fn row_count(&self, name: &str) -> StorageResult<usize> {
        Ok(self.table(name)?.rows.read().len())
    }
}

impl Storage for MemoryStorage {
    fn create_table(&self, name: &str, attributes: &[Attribute]) -> StorageResult<()> {
        let columns = attributes
            .iter()
            .map(|attr| {
                DataType::from_name(&attr.type_name)
                    .map(|data_type| ColumnInfo::new(attr.name.clone(), data_type))
                    .ok_or_else(|| StorageError::UnknownType {
                        column: attr.name.clone(),
                        type_name: attr.type_name.clone(),
                    })
            })
            .collect::<StorageResult<Vec<_>>>()?;

        match self.tables.entry(name.to_string()) {
            Entry::Occupied(_) => Err(StorageError::DuplicateTable {
                table: name.to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Table {
                    schema: TableSchema::new(name, columns),
                    rows: RwLock::new(Vec::new()),
                }));
                Ok(())
            }
        }
    }

    fn drop_table(&self, name: &str) -> StorageResult<()> {
        self.tables
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| StorageError::UnknownTable {
                table: name.to_string(),
            })
    }

    fn table_schema(&self, name: &str) -> StorageResult<TableSchema> {
        Ok(self.table(name)?.schema.clone())
    }

    fn open_scan(&self, name: &str) -> StorageResult<TableScan<'_>> {
        let rows = self.table(name)?.rows.read().clone();
        Ok(Box::new(rows.into_iter()))
    }

    fn insert_tuple(&self, name: &str, tuple: Tuple) -> StorageResult<()> {
        let table = self.table(name)?;
        if let Some(reason) = table.schema.mismatch(&tuple) {
            return Err(StorageError::SchemaMismatch {
                table: name.to_string(),
                reason,
            });
        }
        table.rows.write().push(tuple);
        Ok(())
    }

    fn delete_tuple(&self, name: &str, tuple: &Tuple) -> StorageResult<()> {
        let table = self.table(name)?;
        let mut rows = table.rows.write();
        if let Some(pos) = rows.iter().position(|row| row == tuple) {
            rows.remove(pos);
        }
        Ok(())
    }

    fn list_tables(&self) -> StorageResult<Vec<String>> {
        let mut names: Vec<String> = self.tables.iter().map(|entry| entry.key().clone()).collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::Value;

    fn create_users(storage: &MemoryStorage) -> StorageResult<()> {
        storage.create_table(
            "users",
            &[Attribute::new("id", "int"), Attribute::new("name", "varchar")],
        )
    }

    fn user(id: i64, name: &str) -> Tuple {
        Tuple::new(vec![Value::Integer(id), Value::Text(name.to_string())])
    }

    #[test]
    fn test_create_and_drop_table() -> StorageResult<()> {
        let storage = MemoryStorage::new();
        create_users(&storage)?;

        let schema = storage.table_schema("users")?;
        assert_eq!(schema.column_types(), vec![DataType::Integer, DataType::Text]);
        assert_eq!(storage.list_tables()?, vec!["users".to_string()]);

        assert_eq!(
            create_users(&storage),
            Err(StorageError::DuplicateTable {
                table: "users".to_string()
            })
        );

        storage.drop_table("users")?;
        assert!(storage.list_tables()?.is_empty());
        assert_eq!(
            storage.drop_table("users"),
            Err(StorageError::UnknownTable {
                table: "users".to_string()
            })
        );
        Ok(())
    }

    #[test]
    fn test_unknown_type_rejected() {
        let storage = MemoryStorage::new();
        let result = storage.create_table("t", &[Attribute::new("x", "float")]);
        assert!(matches!(result, Err(StorageError::UnknownType { .. })));
        assert!(storage.list_tables().unwrap().is_empty());
    }

    #[test]
    fn test_insert_and_scan_preserve_order() -> StorageResult<()> {
        let storage = MemoryStorage::new();
        create_users(&storage)?;

        storage.insert_tuple("users", user(2, "bob"))?;
        storage.insert_tuple("users", user(1, "ann"))?;

        let rows: Vec<Tuple> = storage.open_scan("users")?.collect();
        assert_eq!(rows, vec![user(2, "bob"), user(1, "ann")]);
        Ok(())
    }

    #[test]
    fn test_insert_schema_mismatch() -> StorageResult<()> {
        let storage = MemoryStorage::new();
        create_users(&storage)?;

        let result = storage.insert_tuple("users", Tuple::new(vec![Value::Integer(1)]));
        assert!(matches!(result, Err(StorageError::SchemaMismatch { .. })));

        let result = storage.insert_tuple(
            "users",
            Tuple::new(vec![Value::Text("1".into()), Value::Text("x".into())]),
        );
        assert!(matches!(result, Err(StorageError::SchemaMismatch { .. })));

        // NULL fits any column
        storage.insert_tuple("users", Tuple::new(vec![Value::Null, Value::Null]))?;
        assert_eq!(storage.row_count("users")?, 1);
        Ok(())
    }

    #[test]
    fn test_delete_removes_one_copy() -> StorageResult<()> {
        let storage = MemoryStorage::new();
        create_users(&storage)?;
        storage.insert_tuple("users", user(1, "ann"))?;
        storage.insert_tuple("users", user(1, "ann"))?;
        storage.insert_tuple("users", user(2, "bob"))?;

        storage.delete_tuple("users", &user(1, "ann"))?;
        assert_eq!(storage.row_count("users")?, 2);

        // Deleting a tuple that is not stored is not an error
        storage.delete_tuple("users", &user(9, "zed"))?;
        assert_eq!(storage.row_count("users")?, 2);
        Ok(())
    }

    #[test]
    fn test_scan_is_a_snapshot() -> StorageResult<()> {
        let storage = MemoryStorage::new();
        create_users(&storage)?;
        storage.insert_tuple("users", user(1, "ann"))?;

        let scan = storage.open_scan("users")?;
        storage.insert_tuple("users", user(2, "bob"))?;
        assert_eq!(scan.count(), 1);
        assert_eq!(storage.open_scan("users")?.count(), 2);
        Ok(())
    }

    #[test]
    fn test_unknown_table_operations() {
        let storage = MemoryStorage::new();
        assert!(matches!(
            storage.open_scan("nope"),
            Err(StorageError::UnknownTable { .. })
        ));
        assert!(matches!(
            storage.insert_tuple("nope", Tuple::default()),
            Err(StorageError::UnknownTable { .. })
        ));
        assert!(matches!(
            storage.table_schema("nope"),
            Err(StorageError::UnknownTable { .. })
        ));
    }
}
