//! Database models for goals.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::errors::StorageError;
use streakwise_core::goals::{Goal, NewGoal};
use streakwise_core::Error;

/// Database model for goals. Enum fields are stored as their snake_case text.
#[derive(Queryable, Identifiable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct GoalDB {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub category: String,
    pub target_date: Option<NaiveDate>,
    pub status: String,
    pub priority: String,
    pub unit: Option<String>,
    pub starting_value: Option<f64>,
    pub target_value: Option<f64>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new goal
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
pub struct NewGoalDB {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub category: String,
    pub target_date: Option<NaiveDate>,
    pub status: String,
    pub priority: String,
    pub unit: Option<String>,
    pub starting_value: Option<f64>,
    pub target_value: Option<f64>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewGoalDB {
    pub fn from_domain(id: String, user_id: String, goal: NewGoal, now: NaiveDateTime) -> Self {
        Self {
            id,
            user_id,
            title: goal.title,
            category: goal.category.as_str().to_string(),
            target_date: goal.target_date,
            status: goal.status.as_str().to_string(),
            priority: goal.priority.as_str().to_string(),
            unit: goal.unit,
            starting_value: goal.starting_value,
            target_value: goal.target_value,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

impl TryFrom<GoalDB> for Goal {
    type Error = Error;

    fn try_from(db: GoalDB) -> Result<Self, Self::Error> {
        let invalid = |e: Error| Error::from(StorageError::InvalidData(e.to_string()));
        Ok(Self {
            category: db.category.parse().map_err(invalid)?,
            status: db.status.parse().map_err(invalid)?,
            priority: db.priority.parse().map_err(invalid)?,
            id: db.id,
            user_id: db.user_id,
            title: db.title,
            target_date: db.target_date,
            unit: db.unit,
            starting_value: db.starting_value,
            target_value: db.target_value,
            is_active: db.is_active,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<Goal> for GoalDB {
    fn from(goal: Goal) -> Self {
        Self {
            id: goal.id,
            user_id: goal.user_id,
            title: goal.title,
            category: goal.category.as_str().to_string(),
            target_date: goal.target_date,
            status: goal.status.as_str().to_string(),
            priority: goal.priority.as_str().to_string(),
            unit: goal.unit,
            starting_value: goal.starting_value,
            target_value: goal.target_value,
            is_active: goal.is_active,
            created_at: goal.created_at,
            updated_at: goal.updated_at,
        }
    }
}
