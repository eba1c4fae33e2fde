use chrono_tz::Tz;
use std::sync::Arc;

use super::stats_model::UserStats;
use super::stats_traits::{StatsRepositoryTrait, StatsServiceTrait};
use crate::completions::{CompletionRepositoryTrait, DateRange};
use crate::errors::Result;
use crate::goals::GoalRepositoryTrait;
use crate::progress::{
    current_streak, distinct_completion_dates, motivational_message, MotivationalMessage,
};
use crate::users::User;
use crate::utils::time_utils::{evaluation_date_today, start_of_month};

pub struct StatsService {
    stats_repo: Arc<dyn StatsRepositoryTrait>,
    goal_repo: Arc<dyn GoalRepositoryTrait>,
    completion_repo: Arc<dyn CompletionRepositoryTrait>,
    timezone: Tz,
}

impl StatsService {
    pub fn new(
        stats_repo: Arc<dyn StatsRepositoryTrait>,
        goal_repo: Arc<dyn GoalRepositoryTrait>,
        completion_repo: Arc<dyn CompletionRepositoryTrait>,
        timezone: Tz,
    ) -> Self {
        Self {
            stats_repo,
            goal_repo,
            completion_repo,
            timezone,
        }
    }
}

impl StatsServiceTrait for StatsService {
    fn get_user_stats(&self, user_id: &str) -> Result<UserStats> {
        let today = evaluation_date_today(self.timezone);
        self.stats_repo
            .get_user_stats(user_id, start_of_month(today))
    }

    /// Encouragement based on the best current streak over active goals and
    /// on how many completions were logged today.
    fn get_motivation(&self, user: &User) -> Result<MotivationalMessage> {
        let today = evaluation_date_today(self.timezone);

        let mut best_streak = 0;
        for goal in self.goal_repo.list_active(&user.id)? {
            let completions = self.completion_repo.list_by_goal(&goal.id)?;
            let dates = distinct_completion_dates(&completions);
            best_streak = best_streak.max(current_streak(&dates, today));
        }

        let completions_today = self
            .completion_repo
            .list_by_user(&user.id, Some(DateRange::single_day(today)))?
            .len();

        Ok(motivational_message(
            best_streak,
            u32::try_from(completions_today).unwrap_or(u32::MAX),
            user.display_name().as_deref(),
        ))
    }
}
