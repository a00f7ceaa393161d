//! Planner settings.

use serde::{Deserialize, Serialize};

/// When single-table comparisons may be applied before tables are joined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PushdownPolicy {
    /// Filter only after the cross product
    Disabled,
    /// Push comparisons that are top-level conjuncts of an OR-free condition
    #[default]
    Conjunctive,
    /// Push every comparison the analyzer finds, even under OR.
    ///
    /// Rows matching only the other branch of a disjunction are dropped
    /// before the join; use only when callers accept that.
    Literal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub pushdown: PushdownPolicy,
}

impl PlannerConfig {
    pub fn with_pushdown(pushdown: PushdownPolicy) -> Self {
        Self { pushdown }
    }
}
