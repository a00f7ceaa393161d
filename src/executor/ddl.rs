//! CREATE TABLE / DROP TABLE.

use crate::error::ExecutionResult;
use crate::sql::{CreateTableStatement, DropTableStatement};
use crate::storage::Storage;
use log::info;

pub fn execute_create_table(
    create: &CreateTableStatement,
    storage: &dyn Storage,
) -> ExecutionResult<()> {
    storage.create_table(&create.table_name, &create.attributes)?;
    info!(
        "created table {} with {} column(s)",
        create.table_name,
        create.attributes.len()
    );
    Ok(())
}

pub fn execute_drop_table(drop: &DropTableStatement, storage: &dyn Storage) -> ExecutionResult<()> {
    storage.drop_table(&drop.table_name)?;
    info!("dropped table {}", drop.table_name);
    Ok(())
}
