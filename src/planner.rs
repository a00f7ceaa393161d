//! Query planning.
//!
//! Planning here is rule-based and shallow: the predicate analyzer runs once
//! per SELECT to decide which comparisons can filter single tables before
//! the join, which columns join the tables, and which columns each scan
//! needs. There is no cost model.

pub mod config;
pub mod select_plan;

pub use config::{PlannerConfig, PushdownPolicy};
pub use select_plan::{SelectPlan, TablePlan};
