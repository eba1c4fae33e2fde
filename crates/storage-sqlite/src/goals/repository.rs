use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::model::{GoalDB, NewGoalDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::goals;
use streakwise_core::errors::Result;
use streakwise_core::goals::{Goal, GoalRepositoryTrait, GoalUpdate, NewGoal};

pub struct GoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GoalRepository { pool, writer }
    }
}

fn find_owned(conn: &mut SqliteConnection, goal_id: &str, user_id: &str) -> Result<Option<Goal>> {
    let row = goals::table
        .filter(goals::id.eq(goal_id))
        .filter(goals::user_id.eq(user_id))
        .select(GoalDB::as_select())
        .first::<GoalDB>(conn)
        .optional()
        .map_err(StorageError::from)?;
    row.map(Goal::try_from).transpose()
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn list_active(&self, user_id: &str) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = goals::table
            .filter(goals::user_id.eq(user_id))
            .filter(goals::is_active.eq(true))
            .order((goals::created_at.desc(), goals::id.desc()))
            .select(GoalDB::as_select())
            .load::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter().map(Goal::try_from).collect()
    }

    fn get_by_id(&self, goal_id: &str, user_id: &str) -> Result<Option<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        find_owned(&mut conn, goal_id, user_id)
    }

    async fn insert(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal> {
        let owner = user_id.to_string();
        self.writer
            .exec(move |conn| -> Result<Goal> {
                let row = NewGoalDB::from_domain(
                    Uuid::new_v4().to_string(),
                    owner,
                    new_goal,
                    Utc::now().naive_utc(),
                );
                let stored = diesel::insert_into(goals::table)
                    .values(&row)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Goal::try_from(stored)
            })
            .await
    }

    async fn update(
        &self,
        goal_id: &str,
        user_id: &str,
        update: GoalUpdate,
    ) -> Result<Option<Goal>> {
        let goal_id = goal_id.to_string();
        let owner = user_id.to_string();
        self.writer
            .exec(move |conn| -> Result<Option<Goal>> {
                let Some(mut goal) = find_owned(conn, &goal_id, &owner)? else {
                    return Ok(None);
                };
                goal.apply_update(update, Utc::now().naive_utc());

                let row = GoalDB::from(goal);
                let stored = diesel::update(goals::table.find(&goal_id))
                    .set(&row)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Goal::try_from(stored).map(Some)
            })
            .await
    }

    async fn soft_delete(&self, goal_id: &str, user_id: &str) -> Result<bool> {
        let goal_id = goal_id.to_string();
        let owner = user_id.to_string();
        self.writer
            .exec(move |conn| -> Result<bool> {
                let affected = diesel::update(
                    goals::table
                        .filter(goals::id.eq(&goal_id))
                        .filter(goals::user_id.eq(&owner)),
                )
                .set((
                    goals::is_active.eq(false),
                    goals::updated_at.eq(Utc::now().naive_utc()),
                ))
                .execute(conn)
                .map_err(StorageError::from)?;
                Ok(affected > 0)
            })
            .await
    }
}
