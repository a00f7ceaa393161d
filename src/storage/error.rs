//! Storage layer error types.

use thiserror::Error;

/// Errors reported by the storage collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Table already exists: {table}")]
    DuplicateTable { table: String },

    #[error("Table does not exist: {table}")]
    UnknownTable { table: String },

    #[error("Tuple does not match schema of {table}: {reason}")]
    SchemaMismatch { table: String, reason: String },

    #[error("Unknown type {type_name} for column {column}")]
    UnknownType { column: String, type_name: String },
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
