//! Statement trees handed over by the parser.
//!
//! Each statement owns its identifiers and sub-expressions. Trees are built
//! once, executed once and never modified in between.

use crate::access::Tuple;
use crate::catalog::Attribute;
use crate::expression::{ColumnName, Expression};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    CreateTable(CreateTableStatement),
    DropTable(DropTableStatement),
    Select(SelectStatement),
    Insert(InsertStatement),
    Delete(DeleteStatement),
}

impl Statement {
    /// Statement keyword, for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::CreateTable(_) => "CREATE TABLE",
            Statement::DropTable(_) => "DROP TABLE",
            Statement::Select(_) => "SELECT",
            Statement::Insert(_) => "INSERT",
            Statement::Delete(_) => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTableStatement {
    pub table_name: String,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropTableStatement {
    pub table_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Projection {
    /// `SELECT *`
    All,
    Columns(Vec<ColumnName>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectStatement {
    /// Tables in FROM order; more than one forms a cross product
    pub tables: Vec<String>,
    pub projection: Projection,
    pub distinct: bool,
    pub condition: Option<Expression>,
    pub order_by: Option<ColumnName>,
}

impl SelectStatement {
    /// `SELECT * FROM tables`
    pub fn new(tables: Vec<String>) -> Self {
        Self {
            tables,
            projection: Projection::All,
            distinct: false,
            condition: None,
            order_by: None,
        }
    }

    pub fn columns(mut self, columns: Vec<ColumnName>) -> Self {
        self.projection = Projection::Columns(columns);
        self
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn filter(mut self, condition: Expression) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn order_by(mut self, column: ColumnName) -> Self {
        self.order_by = Some(column);
        self
    }
}

/// Where the rows of an INSERT come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InsertSource {
    /// Literal `VALUES (...), (...)`
    Values(Vec<Tuple>),
    /// `INSERT ... SELECT`
    Select(Box<SelectStatement>),
}

impl InsertSource {
    /// Wrap a nested statement as an insert source.
    ///
    /// # Panics
    ///
    /// Panics if `statement` is not a SELECT. A parser producing anything else
    /// here has built an invalid tree.
    pub fn from_statement(statement: Statement) -> Self {
        match statement {
            Statement::Select(select) => InsertSource::Select(Box::new(select)),
            other => panic!(
                "INSERT source must be a SELECT statement, got {}",
                other.kind()
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertStatement {
    pub table_name: String,
    /// Target columns; `None` means every column in schema order
    pub columns: Option<Vec<String>>,
    pub source: InsertSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteStatement {
    pub table_name: String,
    /// `None` deletes every row
    pub condition: Option<Expression>,
}
