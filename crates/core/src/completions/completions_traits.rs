use async_trait::async_trait;

use super::completions_model::{DateRange, GoalCompletion, NewGoalCompletion};
use crate::errors::Result;

/// Trait for completion repository operations
#[async_trait]
pub trait CompletionRepositoryTrait: Send + Sync {
    async fn insert(&self, completion: NewGoalCompletion) -> Result<GoalCompletion>;
    /// Completions of one goal, newest `completed_at` first.
    fn list_by_goal(&self, goal_id: &str) -> Result<Vec<GoalCompletion>>;
    /// Completions of one user, optionally restricted to an inclusive date range.
    fn list_by_user(&self, user_id: &str, range: Option<DateRange>)
        -> Result<Vec<GoalCompletion>>;
}
