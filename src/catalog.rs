//! Schema types shared between the executor and the storage collaborator.
//!
//! The catalog itself (schema persistence) lives behind the `Storage` trait;
//! this module only holds the shapes that cross that boundary.

pub mod column_info;
pub mod row_schema;
pub mod table_info;

pub use column_info::{Attribute, ColumnInfo};
pub use row_schema::{BoundColumn, RowSchema};
pub use table_info::TableSchema;
