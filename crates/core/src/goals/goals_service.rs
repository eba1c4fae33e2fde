use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use log::debug;
use std::sync::Arc;

use crate::completions::{
    CompletionRepositoryTrait, CompletionRequest, DateRange, GoalCompletion, NewGoalCompletion,
};
use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::progress::{calculate_progress, calculate_streaks, GoalProgress, StreakSummary};
use crate::utils::time_utils::evaluation_date_today;

/// Goal CRUD plus the derived streak/progress views.
///
/// Ownership is checked through the owner-scoped `get_by_id` lookup before any
/// completion is read or written.
pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
    completion_repo: Arc<dyn CompletionRepositoryTrait>,
    timezone: Tz,
}

impl GoalService {
    pub fn new(
        goal_repo: Arc<dyn GoalRepositoryTrait>,
        completion_repo: Arc<dyn CompletionRepositoryTrait>,
        timezone: Tz,
    ) -> Self {
        GoalService {
            goal_repo,
            completion_repo,
            timezone,
        }
    }

    fn today(&self) -> NaiveDate {
        evaluation_date_today(self.timezone)
    }

    /// Completions of an owned goal together with the goal itself.
    fn load_owned(
        &self,
        goal_id: &str,
        user_id: &str,
    ) -> Result<Option<(Goal, Vec<GoalCompletion>)>> {
        let Some(goal) = self.goal_repo.get_by_id(goal_id, user_id)? else {
            return Ok(None);
        };
        let completions = self.completion_repo.list_by_goal(&goal.id)?;
        Ok(Some((goal, completions)))
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_active_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        self.goal_repo.list_active(user_id)
    }

    async fn create_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;
        let new_goal = new_goal.normalized();
        debug!("Creating goal '{}' for user {}", new_goal.title, user_id);
        self.goal_repo.insert(user_id, new_goal).await
    }

    async fn update_goal(
        &self,
        goal_id: &str,
        user_id: &str,
        update: GoalUpdate,
    ) -> Result<Option<Goal>> {
        update.validate()?;

        // The update must leave the tracking fields consistent once merged.
        let Some(mut merged) = self.goal_repo.get_by_id(goal_id, user_id)? else {
            return Ok(None);
        };
        merged.apply_update(update.clone(), Utc::now().naive_utc());
        merged.validate_tracking()?;

        self.goal_repo.update(goal_id, user_id, update).await
    }

    async fn delete_goal(&self, goal_id: &str, user_id: &str) -> Result<bool> {
        self.goal_repo.soft_delete(goal_id, user_id).await
    }

    async fn record_completion(
        &self,
        goal_id: &str,
        user_id: &str,
        request: CompletionRequest,
    ) -> Result<Option<GoalCompletion>> {
        request.validate()?;
        let Some(goal) = self.goal_repo.get_by_id(goal_id, user_id)? else {
            return Ok(None);
        };

        let completion = NewGoalCompletion {
            goal_id: goal.id,
            user_id: user_id.to_string(),
            completed_date: request.completed_date.unwrap_or_else(|| self.today()),
            value: request.value,
        };
        debug!(
            "Recording completion for goal {} on {}",
            completion.goal_id, completion.completed_date
        );
        self.completion_repo.insert(completion).await.map(Some)
    }

    fn get_completions(
        &self,
        goal_id: &str,
        user_id: &str,
    ) -> Result<Option<Vec<GoalCompletion>>> {
        Ok(self
            .load_owned(goal_id, user_id)?
            .map(|(_, completions)| completions))
    }

    fn get_user_completions(
        &self,
        user_id: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<GoalCompletion>> {
        self.completion_repo.list_by_user(user_id, range)
    }

    fn get_streak(&self, goal_id: &str, user_id: &str) -> Result<Option<StreakSummary>> {
        let today = self.today();
        Ok(self
            .load_owned(goal_id, user_id)?
            .map(|(_, completions)| calculate_streaks(&completions, today)))
    }

    fn get_progress(&self, goal_id: &str, user_id: &str) -> Result<Option<GoalProgress>> {
        let today = self.today();
        Ok(self
            .load_owned(goal_id, user_id)?
            .map(|(goal, completions)| calculate_progress(&goal, &completions, today)))
    }
}
