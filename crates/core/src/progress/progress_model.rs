use serde::{Deserialize, Serialize};

/// Current and longest consecutive-day runs for a goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Progress of a goal for the current period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    /// All-time number of completions recorded for the goal.
    pub completion_count: u32,
    /// Whole percentage in `0..=100`.
    pub progress: u8,
    pub current_value: Option<f64>,
    pub starting_value: Option<f64>,
    pub target_value: Option<f64>,
    pub unit: Option<String>,
}
