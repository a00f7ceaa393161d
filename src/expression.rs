//! Expression trees and everything that reads them.
//!
//! This module provides:
//! - Expression AST representation (constants, column accesses, compound nodes)
//! - Row contexts column accesses are resolved against
//! - Expression evaluation against tuples
//! - Predicate analysis for the planner (pushdown, join keys, referenced fields)

pub mod analyzer;
pub mod context;
pub mod error;
pub mod eval;
pub mod expr;
pub mod operator;

pub use analyzer::{
    collect_join_attributes, collect_referenced_fields, disjunction_present,
    extract_all_pushable, extract_pushable,
};
pub use context::{EmptyContext, RowContext, TupleContext};
pub use error::{ExpressionError, ExpressionKind, ExpressionResult};
pub use eval::{evaluate_expression, ExpressionEvaluator};
pub use expr::{ColumnName, Expression};
pub use operator::{Operator, OperatorKind};
