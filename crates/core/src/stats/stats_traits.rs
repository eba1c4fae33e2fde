use chrono::NaiveDate;

use super::stats_model::UserStats;
use crate::errors::Result;
use crate::progress::MotivationalMessage;
use crate::users::User;

/// Trait for stats repository operations
pub trait StatsRepositoryTrait: Send + Sync {
    /// Counts for `user_id`; completions on or after `month_start` count as "this month".
    fn get_user_stats(&self, user_id: &str, month_start: NaiveDate) -> Result<UserStats>;
}

/// Trait for stats service operations
pub trait StatsServiceTrait: Send + Sync {
    fn get_user_stats(&self, user_id: &str) -> Result<UserStats>;
    fn get_motivation(&self, user: &User) -> Result<MotivationalMessage>;
}
