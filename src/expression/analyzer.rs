//! Read-only predicate analysis used by the planner.
//!
//! Every routine walks the tree without modifying it. Results either borrow
//! nodes of the analysed tree or are fresh collections owned by the caller.

use crate::expression::{ColumnName, Expression, Operator};
use std::collections::HashSet;

/// True iff an OR appears anywhere in the tree
pub fn disjunction_present(expr: &Expression) -> bool {
    match expr.as_compound() {
        Some((op, left, right)) => {
            op == Operator::Or || disjunction_present(left) || disjunction_present(right)
        }
        None => false,
    }
}

/// True for a relational node comparing a column of `table` against a constant
fn is_pushable_comparison(expr: &Expression, table: &str) -> bool {
    match expr {
        Expression::Relational { left, right, .. } => {
            (left.is_column_access_of(table) && right.is_constant())
                || (right.is_column_access_of(table) && left.is_constant())
        }
        _ => false,
    }
}

/// First sub-expression that can be evaluated against `table` alone.
///
/// A relational node qualifies when one side is a column access qualified
/// to `table` and the other side is a constant. Otherwise logical and
/// relational nodes are searched left child first, then right child.
/// Arithmetic nodes are never predicates and end the search on that branch.
///
/// At most one candidate is returned per call. The search descends through
/// OR nodes as well, so a candidate found under a disjunction is not safe to
/// apply on its own; callers check [`disjunction_present`] first.
pub fn extract_pushable<'e>(expr: &'e Expression, table: &str) -> Option<&'e Expression> {
    if is_pushable_comparison(expr, table) {
        return Some(expr);
    }

    match expr {
        Expression::Logical { left, right, .. } | Expression::Relational { left, right, .. } => {
            extract_pushable(left, table).or_else(|| extract_pushable(right, table))
        }
        Expression::Arithmetic { .. } | Expression::Constant(_) | Expression::ColumnAccess(_) => {
            None
        }
    }
}

/// Every sub-expression [`extract_pushable`] would accept, in the order it
/// would find them. A qualifying node is not searched further.
pub fn extract_all_pushable<'e>(expr: &'e Expression, table: &str) -> Vec<&'e Expression> {
    let mut found = Vec::new();
    collect_pushable(expr, table, &mut found);
    found
}

fn collect_pushable<'e>(expr: &'e Expression, table: &str, found: &mut Vec<&'e Expression>) {
    if is_pushable_comparison(expr, table) {
        found.push(expr);
        return;
    }

    if let Expression::Logical { left, right, .. } | Expression::Relational { left, right, .. } =
        expr
    {
        collect_pushable(left, table, found);
        collect_pushable(right, table, found);
    }
}

/// Append column pairs compared across two different tables.
///
/// Each relational node whose sides are both column accesses, qualified to
/// two distinct tables, contributes its left column then its right column.
/// Any relational operator qualifies; checking for equality is up to the
/// caller. Duplicates are kept.
pub fn collect_join_attributes<'e>(expr: &'e Expression, out: &mut Vec<&'e ColumnName>) {
    if let Expression::Relational { left, right, .. } = expr {
        if let (Some(l), Some(r)) = (left.as_column_access(), right.as_column_access()) {
            if let (Some(lt), Some(rt)) = (l.table(), r.table()) {
                if lt != rt {
                    out.push(l);
                    out.push(r);
                }
            }
        }
    }

    if let Some((_, left, right)) = expr.as_compound() {
        collect_join_attributes(left, out);
        collect_join_attributes(right, out);
    }
}

/// Insert the name of every column qualified to `table`
pub fn collect_referenced_fields(expr: &Expression, table: &str, out: &mut HashSet<String>) {
    match expr {
        Expression::ColumnAccess(column) => {
            if column.is_qualified_to(table) {
                out.insert(column.column.clone());
            }
        }
        Expression::Constant(_) => {}
        Expression::Arithmetic { left, right, .. }
        | Expression::Logical { left, right, .. }
        | Expression::Relational { left, right, .. } => {
            collect_referenced_fields(left, table, out);
            collect_referenced_fields(right, table, out);
        }
    }
}
