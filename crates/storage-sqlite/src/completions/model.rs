//! Database model for goal completions.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use streakwise_core::completions::GoalCompletion;

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::goal_completions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GoalCompletionDB {
    pub id: String,
    pub goal_id: String,
    pub user_id: String,
    pub completed_date: NaiveDate,
    pub value: Option<f64>,
    pub completed_at: NaiveDateTime,
}

impl From<GoalCompletionDB> for GoalCompletion {
    fn from(db: GoalCompletionDB) -> Self {
        Self {
            id: db.id,
            goal_id: db.goal_id,
            user_id: db.user_id,
            completed_date: db.completed_date,
            value: db.value,
            completed_at: db.completed_at,
        }
    }
}
