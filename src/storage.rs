//! Storage collaborator interface.
//!
//! The query core never touches pages, indexes or the catalog directly. It
//! talks to a [`Storage`] implementation that owns table contents and schemas:
//!
//! - **create_table / drop_table**: catalog changes
//! - **open_scan**: a finite, one-shot sequence of tuples for a table
//! - **insert_tuple / delete_tuple**: single-row changes, each one opaque
//!
//! The core does no locking of its own; whatever atomicity the
//! implementation promises for a single call is what callers get.
//! [`MemoryStorage`] is the in-process implementation used by tests and
//! embedders that need no persistence.

pub mod error;
pub mod memory;

pub use error::{StorageError, StorageResult};
pub use memory::MemoryStorage;

use crate::access::Tuple;
use crate::catalog::{Attribute, TableSchema};

/// A scan over one table. Not restartable: reopen the scan to read again.
pub type TableScan<'a> = Box<dyn Iterator<Item = Tuple> + Send + 'a>;

pub trait Storage: Send + Sync {
    /// Register a table; fails with `DuplicateTable` if the name is taken
    fn create_table(&self, name: &str, attributes: &[Attribute]) -> StorageResult<()>;

    /// Remove a table and its contents; fails with `UnknownTable` if absent
    fn drop_table(&self, name: &str) -> StorageResult<()>;

    fn table_schema(&self, name: &str) -> StorageResult<TableSchema>;

    fn open_scan(&self, name: &str) -> StorageResult<TableScan<'_>>;

    /// Append a tuple; fails with `SchemaMismatch` on arity or type errors
    fn insert_tuple(&self, name: &str, tuple: Tuple) -> StorageResult<()>;

    /// Remove one stored tuple equal to `tuple`
    fn delete_tuple(&self, name: &str, tuple: &Tuple) -> StorageResult<()>;

    fn list_tables(&self) -> StorageResult<Vec<String>>;
}
