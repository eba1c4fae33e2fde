//! Goals domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{GOAL_TITLE_MAX_LEN, GOAL_UNIT_MAX_LEN};
use crate::errors::{FieldError, ValidationError};
use crate::{Error, Result};

/// Broad bucket a goal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    Health,
    Finance,
    Learning,
    Personal,
    #[default]
    General,
}

impl GoalCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalCategory::Health => "health",
            GoalCategory::Finance => "finance",
            GoalCategory::Learning => "learning",
            GoalCategory::Personal => "personal",
            GoalCategory::General => "general",
        }
    }
}

impl FromStr for GoalCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "health" => Ok(GoalCategory::Health),
            "finance" => Ok(GoalCategory::Finance),
            "learning" => Ok(GoalCategory::Learning),
            "personal" => Ok(GoalCategory::Personal),
            "general" => Ok(GoalCategory::General),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown goal category '{}'",
                other
            )))),
        }
    }
}

/// Lifecycle state chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "not_started",
            GoalStatus::InProgress => "in_progress",
            GoalStatus::Completed => "completed",
        }
    }
}

impl FromStr for GoalStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "not_started" => Ok(GoalStatus::NotStarted),
            "in_progress" => Ok(GoalStatus::InProgress),
            "completed" => Ok(GoalStatus::Completed),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown goal status '{}'",
                other
            )))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoalPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl GoalPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalPriority::Low => "low",
            GoalPriority::Medium => "medium",
            GoalPriority::High => "high",
        }
    }
}

impl FromStr for GoalPriority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "low" => Ok(GoalPriority::Low),
            "medium" => Ok(GoalPriority::Medium),
            "high" => Ok(GoalPriority::High),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown goal priority '{}'",
                other
            )))),
        }
    }
}

macro_rules! impl_display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

impl_display_as_str!(GoalCategory, GoalStatus, GoalPriority);

/// Domain model representing a goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub category: GoalCategory,
    pub target_date: Option<NaiveDate>,
    pub status: GoalStatus,
    pub priority: GoalPriority,
    pub unit: Option<String>,
    pub starting_value: Option<f64>,
    pub target_value: Option<f64>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Numeric configuration of a value-tracked goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueTracking<'a> {
    pub unit: &'a str,
    pub starting_value: f64,
    pub target_value: f64,
}

impl Goal {
    /// Returns the value-tracking configuration when unit, starting value
    /// and target value are all present.
    pub fn value_tracking(&self) -> Option<ValueTracking<'_>> {
        match (&self.unit, self.starting_value, self.target_value) {
            (Some(unit), Some(starting_value), Some(target_value)) => Some(ValueTracking {
                unit: unit.as_str(),
                starting_value,
                target_value,
            }),
            _ => None,
        }
    }

    /// Applies a partial update in place. Fields absent from the update are left untouched.
    pub fn apply_update(&mut self, update: GoalUpdate, now: NaiveDateTime) {
        if let Some(title) = update.title {
            self.title = title.trim().to_string();
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(target_date) = update.target_date {
            self.target_date = target_date;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(unit) = update.unit {
            self.unit = normalize_unit(unit);
        }
        if let Some(starting_value) = update.starting_value {
            self.starting_value = starting_value;
        }
        if let Some(target_value) = update.target_value {
            self.target_value = target_value;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        self.updated_at = now;
    }

    /// Checks that the goal's tracking fields are mutually consistent.
    pub fn validate_tracking(&self) -> Result<()> {
        let mut errors = Vec::new();
        check_tracking(
            self.unit.as_deref(),
            self.starting_value,
            self.target_value,
            &mut errors,
        );
        into_result(errors)
    }
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub title: String,
    #[serde(default)]
    pub category: GoalCategory,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: GoalStatus,
    #[serde(default, alias = "priorityLevel")]
    pub priority: GoalPriority,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub starting_value: Option<f64>,
    #[serde(default)]
    pub target_value: Option<f64>,
}

impl NewGoal {
    /// Validates the new goal, collecting every field problem at once.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        check_title(&self.title, &mut errors);
        check_values(self.starting_value, self.target_value, &mut errors);
        check_unit(self.unit.as_deref(), &mut errors);
        if errors.is_empty() {
            check_tracking(
                normalize_unit(self.unit.clone()).as_deref(),
                self.starting_value,
                self.target_value,
                &mut errors,
            );
        }
        into_result(errors)
    }

    /// Trims free-text fields; blank units become `None`.
    pub fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.unit = normalize_unit(self.unit);
        self
    }
}

/// Partial update of a goal.
///
/// For nullable fields the outer `Option` distinguishes "not provided" from an
/// explicit `null`, which clears the stored value.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<GoalCategory>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub target_date: Option<Option<NaiveDate>>,
    #[serde(default)]
    pub status: Option<GoalStatus>,
    #[serde(default, alias = "priorityLevel")]
    pub priority: Option<GoalPriority>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub unit: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub starting_value: Option<Option<f64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub target_value: Option<Option<f64>>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl GoalUpdate {
    /// Validates the fields present in the update on their own.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        if let Some(title) = &self.title {
            check_title(title, &mut errors);
        }
        check_values(
            self.starting_value.flatten(),
            self.target_value.flatten(),
            &mut errors,
        );
        if let Some(unit) = &self.unit {
            check_unit(unit.as_deref(), &mut errors);
        }
        into_result(errors)
    }
}

fn normalize_unit(unit: Option<String>) -> Option<String> {
    unit.map(|u| u.trim().to_string()).filter(|u| !u.is_empty())
}

fn check_title(title: &str, errors: &mut Vec<FieldError>) {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new("title", "Title is required"));
    } else if trimmed.chars().count() > GOAL_TITLE_MAX_LEN {
        errors.push(FieldError::new(
            "title",
            format!("Title must be at most {} characters", GOAL_TITLE_MAX_LEN),
        ));
    }
}

fn check_values(starting: Option<f64>, target: Option<f64>, errors: &mut Vec<FieldError>) {
    if starting.is_some_and(|v| !v.is_finite()) {
        errors.push(FieldError::new("startingValue", "Must be a finite number"));
    }
    if target.is_some_and(|v| !v.is_finite()) {
        errors.push(FieldError::new("targetValue", "Must be a finite number"));
    }
}

fn check_unit(unit: Option<&str>, errors: &mut Vec<FieldError>) {
    if unit.is_some_and(|u| u.trim().chars().count() > GOAL_UNIT_MAX_LEN) {
        errors.push(FieldError::new(
            "unit",
            format!("Unit must be at most {} characters", GOAL_UNIT_MAX_LEN),
        ));
    }
}

/// Unit, starting value and target value are all-or-nothing, and a
/// value-tracked goal must have a non-empty range.
fn check_tracking(
    unit: Option<&str>,
    starting: Option<f64>,
    target: Option<f64>,
    errors: &mut Vec<FieldError>,
) {
    let unit = unit.map(str::trim).filter(|u| !u.is_empty());
    match (starting, target) {
        (Some(_), None) => errors.push(FieldError::new(
            "targetValue",
            "Target value is required when a starting value is set",
        )),
        (None, Some(_)) => errors.push(FieldError::new(
            "startingValue",
            "Starting value is required when a target value is set",
        )),
        (Some(start), Some(target)) => {
            if start == target {
                errors.push(FieldError::new(
                    "targetValue",
                    "Target value must differ from the starting value",
                ));
            }
            if unit.is_none() {
                errors.push(FieldError::new(
                    "unit",
                    "Unit is required for value-tracked goals",
                ));
            }
        }
        (None, None) => {
            if unit.is_some() {
                errors.push(FieldError::new(
                    "targetValue",
                    "Starting and target values are required when a unit is set",
                ));
            }
        }
    }
}

fn into_result(errors: Vec<FieldError>) -> Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation(ValidationError::Fields(errors)))
    }
}
