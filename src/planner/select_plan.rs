//! Per-query predicate analysis for SELECT.

use crate::expression::{
    collect_join_attributes, collect_referenced_fields, disjunction_present,
    extract_all_pushable, extract_pushable, ColumnName, Expression, Operator,
};
use crate::planner::{PlannerConfig, PushdownPolicy};
use crate::sql::{Projection, SelectStatement};
use log::{debug, warn};
use std::collections::HashSet;

/// What the executor needs to know about one table of the FROM list
#[derive(Debug, Clone, PartialEq)]
pub struct TablePlan<'s> {
    pub table: &'s str,
    /// Comparisons applied to this table's rows before the join
    pub pushed: Vec<&'s Expression>,
    /// Columns of this table the query mentions by qualified name
    pub referenced_fields: HashSet<String>,
}

/// Analysis of a SELECT statement, borrowing from the statement tree
#[derive(Debug, Clone, PartialEq)]
pub struct SelectPlan<'s> {
    pub tables: Vec<TablePlan<'s>>,
    /// Column pairs compared across tables, left then right
    pub join_attributes: Vec<&'s ColumnName>,
    pub has_disjunction: bool,
}

impl<'s> SelectPlan<'s> {
    pub fn build(select: &'s SelectStatement, config: &PlannerConfig) -> Self {
        let condition = select.condition.as_ref();
        let has_disjunction = condition.is_some_and(disjunction_present);

        let mut join_attributes = Vec::new();
        if let Some(condition) = condition {
            collect_join_attributes(condition, &mut join_attributes);
        }

        // Without a join there is nothing for pushed comparisons to shrink
        let pushdown = if select.tables.len() < 2 {
            PushdownPolicy::Disabled
        } else {
            config.pushdown
        };

        let tables = select
            .tables
            .iter()
            .map(|table| {
                let pushed = match condition {
                    Some(condition) => pushable_for(condition, table, pushdown),
                    None => Vec::new(),
                };
                if has_disjunction && !pushed.is_empty() {
                    warn!(
                        "pushing {} predicate(s) on {} through a disjunction",
                        pushed.len(),
                        table
                    );
                }

                TablePlan {
                    table: table.as_str(),
                    pushed,
                    referenced_fields: referenced_fields(select, table),
                }
            })
            .collect();

        let plan = SelectPlan {
            tables,
            join_attributes,
            has_disjunction,
        };
        debug!("select plan: {}", plan.describe());
        plan
    }

    pub fn table(&self, name: &str) -> Option<&TablePlan<'s>> {
        self.tables.iter().find(|plan| plan.table == name)
    }

    fn describe(&self) -> String {
        let tables: Vec<String> = self
            .tables
            .iter()
            .map(|plan| {
                let pushed: Vec<String> = plan.pushed.iter().map(|e| e.to_string()).collect();
                let mut fields: Vec<&str> =
                    plan.referenced_fields.iter().map(String::as_str).collect();
                fields.sort_unstable();
                format!(
                    "{} [pushed: {}; fields: {}]",
                    plan.table,
                    pushed.join(", "),
                    fields.join(", ")
                )
            })
            .collect();
        let joins: Vec<String> = self.join_attributes.iter().map(|c| c.to_string()).collect();
        format!("{}; join keys: {}", tables.join(" x "), joins.join(", "))
    }
}

fn pushable_for<'s>(
    condition: &'s Expression,
    table: &str,
    policy: PushdownPolicy,
) -> Vec<&'s Expression> {
    match policy {
        PushdownPolicy::Disabled => Vec::new(),
        PushdownPolicy::Literal => extract_all_pushable(condition, table),
        PushdownPolicy::Conjunctive => {
            if disjunction_present(condition) {
                return Vec::new();
            }
            // Only a comparison that is itself a conjunct can filter early
            conjuncts(condition)
                .into_iter()
                .filter(|conjunct| {
                    extract_pushable(conjunct, table).is_some_and(|found| std::ptr::eq(found, *conjunct))
                })
                .collect()
        }
    }
}

/// Split a condition on its top-level ANDs
fn conjuncts(expr: &Expression) -> Vec<&Expression> {
    match expr {
        Expression::Logical {
            op: Operator::And,
            left,
            right,
        } => {
            let mut parts = conjuncts(left);
            parts.extend(conjuncts(right));
            parts
        }
        other => vec![other],
    }
}

fn referenced_fields(select: &SelectStatement, table: &str) -> HashSet<String> {
    let mut fields = HashSet::new();
    if let Some(condition) = &select.condition {
        collect_referenced_fields(condition, table, &mut fields);
    }
    if let Projection::Columns(columns) = &select.projection {
        fields.extend(
            columns
                .iter()
                .filter(|column| column.is_qualified_to(table))
                .map(|column| column.column.clone()),
        );
    }
    if let Some(order_by) = select.order_by.as_ref().filter(|c| c.is_qualified_to(table)) {
        fields.insert(order_by.column.clone());
    }
    fields
}
