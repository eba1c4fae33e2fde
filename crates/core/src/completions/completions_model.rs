//! Completion domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::{FieldError, ValidationError};
use crate::{Error, Result};

/// A recorded completion (or progress reading) for a goal.
///
/// `completed_date` drives streak math; `completed_at` only breaks ties when
/// looking up the latest logged value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalCompletion {
    pub id: String,
    pub goal_id: String,
    pub user_id: String,
    pub completed_date: NaiveDate,
    pub value: Option<f64>,
    pub completed_at: NaiveDateTime,
}

/// Body of a "complete goal" request. Both fields are optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRequest {
    #[serde(default)]
    pub completed_date: Option<NaiveDate>,
    #[serde(default)]
    pub value: Option<f64>,
}

impl CompletionRequest {
    pub fn validate(&self) -> Result<()> {
        if self.value.is_some_and(|v| !v.is_finite()) {
            return Err(Error::Validation(ValidationError::Fields(vec![
                FieldError::new("value", "Must be a finite number"),
            ])));
        }
        Ok(())
    }
}

/// Fully resolved completion ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGoalCompletion {
    pub goal_id: String,
    pub user_id: String,
    pub completed_date: NaiveDate,
    pub value: Option<f64>,
}

/// Inclusive range of completion dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Start date {} is after end date {}",
                start, end
            ))));
        }
        Ok(Self { start, end })
    }

    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_date_range_rejects_inverted_bounds() {
        assert!(DateRange::new(d(2024, 1, 2), d(2024, 1, 1)).is_err());
        let range = DateRange::new(d(2024, 1, 1), d(2024, 1, 31)).unwrap();
        assert_eq!(range.start, d(2024, 1, 1));
        assert_eq!(range.end, d(2024, 1, 31));
    }

    #[test]
    fn test_completion_request_deserializes_partial_body() {
        let req: CompletionRequest = serde_json::from_str("{}").unwrap();
        assert!(req.completed_date.is_none());
        assert!(req.value.is_none());

        let req: CompletionRequest =
            serde_json::from_str(r#"{"completedDate":"2024-03-05","value":172.5}"#).unwrap();
        assert_eq!(req.completed_date, Some(d(2024, 3, 5)));
        assert_eq!(req.value, Some(172.5));
        assert!(req.validate().is_ok());
    }
}
