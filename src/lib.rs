pub mod access;
pub mod catalog;
pub mod error;
pub mod executor;
pub mod expression;
pub mod planner;
pub mod sql;
pub mod storage;

pub use error::{ErrorKind, ExecutionError, ExecutionResult};
pub use executor::execute_statement;
pub use planner::{PlannerConfig, PushdownPolicy};
