//! Expression AST definitions.

use crate::access::Value;
use crate::expression::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column reference, optionally qualified by a table name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnName {
    /// Table qualifier; `None` leaves resolution to the row context
    pub table: Option<String>,
    pub column: String,
}

impl ColumnName {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            table: None,
            column: column.into(),
        }
    }

    pub fn qualified(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            column: column.into(),
        }
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// True only for references explicitly qualified to `table`
    pub fn is_qualified_to(&self, table: &str) -> bool {
        self.table.as_deref() == Some(table)
    }
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.table {
            Some(table) => write!(f, "{}.{}", table, self.column),
            None => f.write_str(&self.column),
        }
    }
}

/// Expression tree node
///
/// Compound nodes own both children. Trees are built once and only read
/// afterwards, so one tree can be evaluated from several threads at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Integer, text, boolean or NULL constant
    Constant(Value),

    /// Column access resolved through the row context
    ColumnAccess(ColumnName),

    /// `+ - * /` over integers
    Arithmetic {
        op: Operator,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// `&` and `|` over booleans
    Logical {
        op: Operator,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// `< <= > >= = <>` producing a boolean
    Relational {
        op: Operator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

impl Expression {
    pub fn constant(value: impl Into<Value>) -> Self {
        Expression::Constant(value.into())
    }

    pub fn integer(val: i64) -> Self {
        Expression::Constant(Value::Integer(val))
    }

    pub fn text(val: impl Into<String>) -> Self {
        Expression::Constant(Value::Text(val.into()))
    }

    pub fn boolean(val: bool) -> Self {
        Expression::Constant(Value::Boolean(val))
    }

    pub fn null() -> Self {
        Expression::Constant(Value::Null)
    }

    /// Unqualified column access
    pub fn column(column: impl Into<String>) -> Self {
        Expression::ColumnAccess(ColumnName::new(column))
    }

    /// Column access qualified by table
    pub fn qualified(table: impl Into<String>, column: impl Into<String>) -> Self {
        Expression::ColumnAccess(ColumnName::qualified(table, column))
    }

    pub fn arithmetic(op: Operator, left: Expression, right: Expression) -> Self {
        Expression::Arithmetic {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn logical(op: Operator, left: Expression, right: Expression) -> Self {
        Expression::Logical {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn relational(op: Operator, left: Expression, right: Expression) -> Self {
        Expression::Relational {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn add(left: Expression, right: Expression) -> Self {
        Self::arithmetic(Operator::Add, left, right)
    }

    pub fn sub(left: Expression, right: Expression) -> Self {
        Self::arithmetic(Operator::Sub, left, right)
    }

    pub fn mul(left: Expression, right: Expression) -> Self {
        Self::arithmetic(Operator::Mul, left, right)
    }

    pub fn div(left: Expression, right: Expression) -> Self {
        Self::arithmetic(Operator::Div, left, right)
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Self::logical(Operator::And, left, right)
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Self::logical(Operator::Or, left, right)
    }

    pub fn eq(left: Expression, right: Expression) -> Self {
        Self::relational(Operator::Eq, left, right)
    }

    pub fn ne(left: Expression, right: Expression) -> Self {
        Self::relational(Operator::Ne, left, right)
    }

    pub fn lt(left: Expression, right: Expression) -> Self {
        Self::relational(Operator::Lt, left, right)
    }

    pub fn le(left: Expression, right: Expression) -> Self {
        Self::relational(Operator::Le, left, right)
    }

    pub fn gt(left: Expression, right: Expression) -> Self {
        Self::relational(Operator::Gt, left, right)
    }

    pub fn ge(left: Expression, right: Expression) -> Self {
        Self::relational(Operator::Ge, left, right)
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Expression::Constant(_))
    }

    pub fn as_column_access(&self) -> Option<&ColumnName> {
        match self {
            Expression::ColumnAccess(column) => Some(column),
            _ => None,
        }
    }

    /// True if this node is a column access qualified to `table`
    pub fn is_column_access_of(&self, table: &str) -> bool {
        self.as_column_access()
            .is_some_and(|column| column.is_qualified_to(table))
    }

    /// Operator and children of a compound node
    pub fn as_compound(&self) -> Option<(Operator, &Expression, &Expression)> {
        match self {
            Expression::Arithmetic { op, left, right }
            | Expression::Logical { op, left, right }
            | Expression::Relational { op, left, right } => Some((*op, left, right)),
            Expression::Constant(_) | Expression::ColumnAccess(_) => None,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Constant(value) => write!(f, "{}", value),
            Expression::ColumnAccess(column) => write!(f, "{}", column),
            Expression::Arithmetic { op, left, right }
            | Expression::Logical { op, left, right }
            | Expression::Relational { op, left, right } => {
                write!(f, "({} {} {})", left, op, right)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_name() {
        let unqualified = ColumnName::new("age");
        assert_eq!(unqualified.table(), None);
        assert!(!unqualified.is_qualified_to("users"));

        let qualified = ColumnName::qualified("users", "age");
        assert_eq!(qualified.table(), Some("users"));
        assert!(qualified.is_qualified_to("users"));
        assert!(!qualified.is_qualified_to("orders"));
        assert_eq!(qualified.to_string(), "users.age");
    }

    #[test]
    fn test_expression_builders() {
        let expr = Expression::add(Expression::column("a"), Expression::integer(5));
        assert!(matches!(
            expr,
            Expression::Arithmetic {
                op: Operator::Add,
                ..
            }
        ));

        let expr = Expression::gt(Expression::column("age"), Expression::integer(18));
        assert!(matches!(
            expr,
            Expression::Relational { op: Operator::Gt, .. }
        ));

        let expr = Expression::or(Expression::boolean(true), Expression::boolean(false));
        assert!(matches!(expr, Expression::Logical { op: Operator::Or, .. }));
    }

    #[test]
    fn test_node_predicates() {
        assert!(Expression::integer(1).is_constant());
        assert!(Expression::null().is_constant());
        assert!(!Expression::column("a").is_constant());

        assert!(Expression::qualified("t1", "x").is_column_access_of("t1"));
        assert!(!Expression::qualified("t1", "x").is_column_access_of("t2"));
        // An unqualified access belongs to no table in particular
        assert!(!Expression::column("x").is_column_access_of("t1"));
        assert!(!Expression::integer(1).is_column_access_of("t1"));
    }

    #[test]
    fn test_display() {
        let expr = Expression::and(
            Expression::gt(Expression::column("age"), Expression::integer(18)),
            Expression::eq(Expression::qualified("u", "name"), Expression::text("ann")),
        );
        assert_eq!(expr.to_string(), "((age > 18) & (u.name = 'ann'))");
    }
}
