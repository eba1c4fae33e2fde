use chrono::NaiveDate;
use diesel::dsl::count_star;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::{goal_completions, goals};
use streakwise_core::errors::Result;
use streakwise_core::stats::{StatsRepositoryTrait, UserStats};

/// Read-only aggregate queries; never goes through the writer.
pub struct StatsRepository {
    pool: Arc<DbPool>,
}

impl StatsRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        StatsRepository { pool }
    }
}

impl StatsRepositoryTrait for StatsRepository {
    fn get_user_stats(&self, user_id: &str, month_start: NaiveDate) -> Result<UserStats> {
        let mut conn = get_connection(&self.pool)?;

        let total_goals = goals::table
            .filter(goals::user_id.eq(user_id))
            .select(count_star())
            .first::<i64>(&mut conn)
            .map_err(StorageError::from)?;
        let active_goals = goals::table
            .filter(goals::user_id.eq(user_id))
            .filter(goals::is_active.eq(true))
            .select(count_star())
            .first::<i64>(&mut conn)
            .map_err(StorageError::from)?;
        let total_completions = goal_completions::table
            .filter(goal_completions::user_id.eq(user_id))
            .select(count_star())
            .first::<i64>(&mut conn)
            .map_err(StorageError::from)?;
        let completions_this_month = goal_completions::table
            .filter(goal_completions::user_id.eq(user_id))
            .filter(goal_completions::completed_date.ge(month_start))
            .select(count_star())
            .first::<i64>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(UserStats {
            total_goals,
            active_goals,
            total_completions,
            completions_this_month,
        })
    }
}
