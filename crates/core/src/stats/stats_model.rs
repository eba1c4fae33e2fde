use serde::{Deserialize, Serialize};

/// Simple counting aggregates for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Every goal ever created, including soft-deleted ones.
    pub total_goals: i64,
    pub active_goals: i64,
    pub total_completions: i64,
    pub completions_this_month: i64,
}
