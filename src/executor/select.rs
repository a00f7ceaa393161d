//! SELECT pipeline construction.
//!
//! The pipeline is, from the bottom up:
//!
//! 1. one sequential scan per FROM table, in listed order, each wrapped in a
//!    filter when the planner pushed comparisons down to that table
//! 2. a left-deep chain of nested loop joins over those scans, so the
//!    rightmost table varies fastest
//! 3. a filter applying the full WHERE condition
//! 4. a stable sort on the ORDER BY column
//! 5. the projection
//! 6. duplicate elimination for DISTINCT
//!
//! The full condition is applied after the joins even when parts of it were
//! pushed down. Pushed comparisons only shrink the join input.

use crate::access::Tuple;
use crate::error::ExecutionResult;
use crate::executor::{
    drain, DistinctExecutor, Executor, FilterExecutor, NestedLoopJoinExecutor,
    ProjectionExecutor, SeqScanExecutor, SortExecutor,
};
use crate::planner::{PlannerConfig, SelectPlan};
use crate::sql::{Projection, SelectStatement};
use crate::storage::Storage;
use log::debug;

/// Build the executor tree for `select`.
///
/// Returns `None` when the statement lists no tables.
pub fn build_select_executor<'a>(
    select: &'a SelectStatement,
    plan: &SelectPlan<'a>,
    storage: &'a dyn Storage,
) -> Option<Box<dyn Executor + 'a>> {
    let mut executor = select
        .tables
        .iter()
        .map(|table| table_input(table, plan, storage))
        .reduce(|left, right| -> Box<dyn Executor + 'a> {
            Box::new(NestedLoopJoinExecutor::new(left, right))
        })?;

    if let Some(condition) = &select.condition {
        executor = Box::new(FilterExecutor::new(executor, condition));
    }

    if let Some(order_by) = &select.order_by {
        executor = Box::new(SortExecutor::new(executor, order_by));
    }

    if let Projection::Columns(columns) = &select.projection {
        executor = Box::new(ProjectionExecutor::new(executor, columns));
    }

    if select.distinct {
        executor = Box::new(DistinctExecutor::new(executor));
    }

    Some(executor)
}

fn table_input<'a>(
    table: &'a str,
    plan: &SelectPlan<'a>,
    storage: &'a dyn Storage,
) -> Box<dyn Executor + 'a> {
    let scan: Box<dyn Executor + 'a> = Box::new(SeqScanExecutor::new(storage, table));

    match plan.table(table) {
        Some(table_plan) if !table_plan.pushed.is_empty() => Box::new(
            FilterExecutor::with_predicates(scan, table_plan.pushed.clone()),
        ),
        _ => scan,
    }
}

pub fn execute_select(
    select: &SelectStatement,
    storage: &dyn Storage,
    config: &PlannerConfig,
) -> ExecutionResult<Vec<Tuple>> {
    let plan = SelectPlan::build(select, config);

    let Some(mut executor) = build_select_executor(select, &plan, storage) else {
        debug!("select without tables produces no rows");
        return Ok(Vec::new());
    };

    let tuples = drain(executor.as_mut())?;
    debug!("select produced {} tuple(s)", tuples.len());
    Ok(tuples)
}
