//! Column information and metadata structures.

use crate::access::DataType;
use serde::{Deserialize, Serialize};

/// Field declaration as written in CREATE TABLE: a name and a type name.
///
/// The type name is kept verbatim; the storage layer decides which names it
/// understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub type_name: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// A resolved column of a stored table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub column_name: String,
    pub column_type: DataType,
}

impl ColumnInfo {
    pub fn new(column_name: impl Into<String>, column_type: DataType) -> Self {
        Self {
            column_name: column_name.into(),
            column_type,
        }
    }
}
