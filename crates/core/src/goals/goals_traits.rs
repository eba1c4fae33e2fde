use crate::completions::{CompletionRequest, DateRange, GoalCompletion};
use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
use crate::progress::{GoalProgress, StreakSummary};
use async_trait::async_trait;

/// Trait for goal repository operations.
///
/// Every lookup and mutation is scoped to the owner; a goal belonging to
/// another user is reported exactly like a missing one.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    /// Active goals of a user, newest first.
    fn list_active(&self, user_id: &str) -> Result<Vec<Goal>>;
    fn get_by_id(&self, goal_id: &str, user_id: &str) -> Result<Option<Goal>>;
    async fn insert(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal>;
    async fn update(&self, goal_id: &str, user_id: &str, update: GoalUpdate)
        -> Result<Option<Goal>>;
    /// Marks the goal inactive. Returns whether a row was affected.
    async fn soft_delete(&self, goal_id: &str, user_id: &str) -> Result<bool>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_active_goals(&self, user_id: &str) -> Result<Vec<Goal>>;
    async fn create_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(
        &self,
        goal_id: &str,
        user_id: &str,
        update: GoalUpdate,
    ) -> Result<Option<Goal>>;
    async fn delete_goal(&self, goal_id: &str, user_id: &str) -> Result<bool>;
    async fn record_completion(
        &self,
        goal_id: &str,
        user_id: &str,
        request: CompletionRequest,
    ) -> Result<Option<GoalCompletion>>;
    fn get_completions(&self, goal_id: &str, user_id: &str)
        -> Result<Option<Vec<GoalCompletion>>>;
    fn get_user_completions(
        &self,
        user_id: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<GoalCompletion>>;
    fn get_streak(&self, goal_id: &str, user_id: &str) -> Result<Option<StreakSummary>>;
    fn get_progress(&self, goal_id: &str, user_id: &str) -> Result<Option<GoalProgress>>;
}
