use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use super::model::GoalCompletionDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::goal_completions;
use streakwise_core::completions::{
    CompletionRepositoryTrait, DateRange, GoalCompletion, NewGoalCompletion,
};
use streakwise_core::errors::Result;

pub struct CompletionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CompletionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CompletionRepository { pool, writer }
    }
}

#[async_trait]
impl CompletionRepositoryTrait for CompletionRepository {
    async fn insert(&self, completion: NewGoalCompletion) -> Result<GoalCompletion> {
        self.writer
            .exec(move |conn| -> Result<GoalCompletion> {
                let row = GoalCompletionDB {
                    id: Uuid::new_v4().to_string(),
                    goal_id: completion.goal_id,
                    user_id: completion.user_id,
                    completed_date: completion.completed_date,
                    value: completion.value,
                    completed_at: Utc::now().naive_utc(),
                };
                let stored = diesel::insert_into(goal_completions::table)
                    .values(&row)
                    .returning(GoalCompletionDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(GoalCompletion::from(stored))
            })
            .await
    }

    fn list_by_goal(&self, goal_id: &str) -> Result<Vec<GoalCompletion>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = goal_completions::table
            .filter(goal_completions::goal_id.eq(goal_id))
            .order(goal_completions::completed_at.desc())
            .select(GoalCompletionDB::as_select())
            .load::<GoalCompletionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(GoalCompletion::from).collect())
    }

    fn list_by_user(
        &self,
        user_id: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<GoalCompletion>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = goal_completions::table
            .filter(goal_completions::user_id.eq(user_id))
            .select(GoalCompletionDB::as_select())
            .into_boxed();
        if let Some(range) = range {
            query = query
                .filter(goal_completions::completed_date.ge(range.start))
                .filter(goal_completions::completed_date.le(range.end));
        }
        let rows = query
            .order(goal_completions::completed_at.desc())
            .load::<GoalCompletionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(GoalCompletion::from).collect())
    }
}
