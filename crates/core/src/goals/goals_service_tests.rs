//! Unit tests for the goal service.

use super::*;
use crate::completions::{
    CompletionRepositoryTrait, CompletionRequest, DateRange, GoalCompletion, NewGoalCompletion,
};
use crate::errors::{Error, Result, ValidationError};
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use std::sync::{Arc, RwLock};

// ============================================================================
// Mock Implementations
// ============================================================================

#[derive(Default)]
struct MockGoalRepository {
    goals: RwLock<Vec<Goal>>,
}

#[async_trait]
impl GoalRepositoryTrait for MockGoalRepository {
    fn list_active(&self, user_id: &str) -> Result<Vec<Goal>> {
        let mut goals: Vec<Goal> = self
            .goals
            .read()
            .unwrap()
            .iter()
            .filter(|g| g.user_id == user_id && g.is_active)
            .cloned()
            .collect();
        goals.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(goals)
    }

    fn get_by_id(&self, goal_id: &str, user_id: &str) -> Result<Option<Goal>> {
        Ok(self
            .goals
            .read()
            .unwrap()
            .iter()
            .find(|g| g.id == goal_id && g.user_id == user_id)
            .cloned())
    }

    async fn insert(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal> {
        let mut goals = self.goals.write().unwrap();
        let now = Utc::now().naive_utc() + Duration::seconds(goals.len() as i64);
        let goal = Goal {
            id: format!("goal-{}", goals.len() + 1),
            user_id: user_id.to_string(),
            title: new_goal.title,
            category: new_goal.category,
            target_date: new_goal.target_date,
            status: new_goal.status,
            priority: new_goal.priority,
            unit: new_goal.unit,
            starting_value: new_goal.starting_value,
            target_value: new_goal.target_value,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        goals.push(goal.clone());
        Ok(goal)
    }

    async fn update(
        &self,
        goal_id: &str,
        user_id: &str,
        update: GoalUpdate,
    ) -> Result<Option<Goal>> {
        let mut goals = self.goals.write().unwrap();
        let Some(goal) = goals
            .iter_mut()
            .find(|g| g.id == goal_id && g.user_id == user_id)
        else {
            return Ok(None);
        };
        goal.apply_update(update, Utc::now().naive_utc());
        Ok(Some(goal.clone()))
    }

    async fn soft_delete(&self, goal_id: &str, user_id: &str) -> Result<bool> {
        let mut goals = self.goals.write().unwrap();
        match goals
            .iter_mut()
            .find(|g| g.id == goal_id && g.user_id == user_id)
        {
            Some(goal) => {
                goal.is_active = false;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[derive(Default)]
struct MockCompletionRepository {
    completions: RwLock<Vec<GoalCompletion>>,
}

#[async_trait]
impl CompletionRepositoryTrait for MockCompletionRepository {
    async fn insert(&self, completion: NewGoalCompletion) -> Result<GoalCompletion> {
        let mut completions = self.completions.write().unwrap();
        let created = GoalCompletion {
            id: format!("completion-{}", completions.len() + 1),
            goal_id: completion.goal_id,
            user_id: completion.user_id,
            completed_date: completion.completed_date,
            value: completion.value,
            completed_at: Utc::now().naive_utc() + Duration::seconds(completions.len() as i64),
        };
        completions.push(created.clone());
        Ok(created)
    }

    fn list_by_goal(&self, goal_id: &str) -> Result<Vec<GoalCompletion>> {
        let mut list: Vec<GoalCompletion> = self
            .completions
            .read()
            .unwrap()
            .iter()
            .filter(|c| c.goal_id == goal_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        Ok(list)
    }

    fn list_by_user(
        &self,
        user_id: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<GoalCompletion>> {
        Ok(self
            .completions
            .read()
            .unwrap()
            .iter()
            .filter(|c| c.user_id == user_id)
            .filter(|c| range.map_or(true, |r| r.start <= c.completed_date && c.completed_date <= r.end))
            .cloned()
            .collect())
    }
}

// ============================================================================
// Helpers
// ============================================================================

const OWNER: &str = "user-owner";
const STRANGER: &str = "user-stranger";

fn setup() -> (GoalService, Arc<MockGoalRepository>, Arc<MockCompletionRepository>) {
    let goals = Arc::new(MockGoalRepository::default());
    let completions = Arc::new(MockCompletionRepository::default());
    let service = GoalService::new(goals.clone(), completions.clone(), chrono_tz::UTC);
    (service, goals, completions)
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn simple_goal(title: &str) -> NewGoal {
    NewGoal {
        title: title.to_string(),
        ..Default::default()
    }
}

fn weight_goal() -> NewGoal {
    NewGoal {
        title: "Lose weight".to_string(),
        category: GoalCategory::Health,
        unit: Some("lbs".to_string()),
        starting_value: Some(200.0),
        target_value: Some(150.0),
        ..Default::default()
    }
}

fn on(date: NaiveDate) -> CompletionRequest {
    CompletionRequest {
        completed_date: Some(date),
        value: None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_create_then_get_round_trips_fields() {
    let (service, goals, _) = setup();
    let mut input = weight_goal();
    input.title = "  Lose weight  ".to_string();
    input.priority = GoalPriority::High;
    input.target_date = NaiveDate::from_ymd_opt(2025, 6, 1);

    let created = service.create_goal(OWNER, input).await.unwrap();
    let fetched = goals.get_by_id(&created.id, OWNER).unwrap().unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.title, "Lose weight");
    assert_eq!(fetched.priority, GoalPriority::High);
    assert_eq!(fetched.target_date, NaiveDate::from_ymd_opt(2025, 6, 1));
    assert!(fetched.is_active);
}

#[tokio::test]
async fn test_create_rejects_invalid_goal() {
    let (service, goals, _) = setup();
    let err = service.create_goal(OWNER, simple_goal(" ")).await.unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationError::Fields(_))));
    assert!(goals.goals.read().unwrap().is_empty());
}

#[tokio::test]
async fn test_active_goals_exclude_soft_deleted() {
    let (service, goals, _) = setup();
    let first = service.create_goal(OWNER, simple_goal("Walk")).await.unwrap();
    let second = service.create_goal(OWNER, simple_goal("Read")).await.unwrap();
    service.create_goal(STRANGER, simple_goal("Other")).await.unwrap();

    assert!(service.delete_goal(&first.id, OWNER).await.unwrap());

    let active = service.get_active_goals(OWNER).unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, second.id);

    // Still reachable by id for history.
    let deleted = goals.get_by_id(&first.id, OWNER).unwrap().unwrap();
    assert!(!deleted.is_active);
}

#[tokio::test]
async fn test_foreign_goal_behaves_as_missing() {
    let (service, goals, completions) = setup();
    let goal = service.create_goal(OWNER, simple_goal("Private")).await.unwrap();

    assert!(goals.get_by_id(&goal.id, STRANGER).unwrap().is_none());
    assert!(service
        .update_goal(&goal.id, STRANGER, GoalUpdate {
            title: Some("Hijacked".to_string()),
            ..Default::default()
        })
        .await
        .unwrap()
        .is_none());
    assert!(!service.delete_goal(&goal.id, STRANGER).await.unwrap());
    assert!(service
        .record_completion(&goal.id, STRANGER, CompletionRequest::default())
        .await
        .unwrap()
        .is_none());
    assert!(service.get_completions(&goal.id, STRANGER).unwrap().is_none());
    assert!(service.get_streak(&goal.id, STRANGER).unwrap().is_none());
    assert!(service.get_progress(&goal.id, STRANGER).unwrap().is_none());

    let untouched = goals.get_by_id(&goal.id, OWNER).unwrap().unwrap();
    assert_eq!(untouched.title, "Private");
    assert!(untouched.is_active);
    assert!(completions.completions.read().unwrap().is_empty());
}

#[tokio::test]
async fn test_update_rejects_inconsistent_merge() {
    let (service, goals, _) = setup();
    let goal = service.create_goal(OWNER, weight_goal()).await.unwrap();

    let update: GoalUpdate = serde_json::from_str(r#"{"targetValue":null}"#).unwrap();
    let err = service.update_goal(&goal.id, OWNER, update).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let stored = goals.get_by_id(&goal.id, OWNER).unwrap().unwrap();
    assert_eq!(stored.target_value, Some(150.0));
}

#[tokio::test]
async fn test_update_applies_partial_fields() {
    let (service, _, _) = setup();
    let goal = service.create_goal(OWNER, weight_goal()).await.unwrap();

    let update = GoalUpdate {
        status: Some(GoalStatus::InProgress),
        target_value: Some(Some(160.0)),
        ..Default::default()
    };
    let updated = service
        .update_goal(&goal.id, OWNER, update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, GoalStatus::InProgress);
    assert_eq!(updated.target_value, Some(160.0));
    assert_eq!(updated.title, goal.title);
}

#[tokio::test]
async fn test_completion_defaults_to_today() {
    let (service, _, _) = setup();
    let goal = service.create_goal(OWNER, simple_goal("Stretch")).await.unwrap();

    let completion = service
        .record_completion(&goal.id, OWNER, CompletionRequest::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(completion.completed_date, today());
    assert_eq!(completion.user_id, OWNER);
    assert_eq!(completion.goal_id, goal.id);
}

#[tokio::test]
async fn test_completion_rejects_non_finite_value() {
    let (service, _, _) = setup();
    let goal = service.create_goal(OWNER, weight_goal()).await.unwrap();
    let err = service
        .record_completion(&goal.id, OWNER, CompletionRequest {
            completed_date: None,
            value: Some(f64::NAN),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn test_streak_counts_distinct_days() {
    let (service, _, _) = setup();
    let goal = service.create_goal(OWNER, simple_goal("Journal")).await.unwrap();
    let today = today();

    for date in [today, today, today - Duration::days(1), today - Duration::days(3)] {
        service
            .record_completion(&goal.id, OWNER, on(date))
            .await
            .unwrap();
    }

    let streak = service.get_streak(&goal.id, OWNER).unwrap().unwrap();
    assert_eq!(streak.current_streak, 2);
    assert_eq!(streak.longest_streak, 2);
}

#[tokio::test]
async fn test_progress_for_value_goal_uses_latest_reading() {
    let (service, _, _) = setup();
    let goal = service.create_goal(OWNER, weight_goal()).await.unwrap();
    let today = today();

    for (offset, value) in [(2, 190.0), (1, 175.0)] {
        service
            .record_completion(&goal.id, OWNER, CompletionRequest {
                completed_date: Some(today - Duration::days(offset)),
                value: Some(value),
            })
            .await
            .unwrap();
    }

    let progress = service.get_progress(&goal.id, OWNER).unwrap().unwrap();
    assert_eq!(progress.progress, 50);
    assert_eq!(progress.current_value, Some(175.0));
    assert_eq!(progress.completion_count, 2);
    assert_eq!(progress.starting_value, Some(200.0));
    assert_eq!(progress.target_value, Some(150.0));
}

#[tokio::test]
async fn test_completions_of_deleted_goal_are_retained() {
    let (service, _, _) = setup();
    let goal = service.create_goal(OWNER, simple_goal("Floss")).await.unwrap();
    service
        .record_completion(&goal.id, OWNER, on(today()))
        .await
        .unwrap();
    service.delete_goal(&goal.id, OWNER).await.unwrap();

    let history = service.get_completions(&goal.id, OWNER).unwrap().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(service.get_user_completions(OWNER, None).unwrap().len(), 1);
}

#[tokio::test]
async fn test_user_completions_respect_range() {
    let (service, _, _) = setup();
    let goal = service.create_goal(OWNER, simple_goal("Swim")).await.unwrap();
    let today = today();
    for offset in 0..5 {
        service
            .record_completion(&goal.id, OWNER, on(today - Duration::days(offset)))
            .await
            .unwrap();
    }

    let range = DateRange::new(today - Duration::days(2), today).unwrap();
    assert_eq!(service.get_user_completions(OWNER, Some(range)).unwrap().len(), 3);
    assert!(service.get_user_completions(STRANGER, None).unwrap().is_empty());
}
