use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Extension, Json, Router,
};
use streakwise_core::{
    completions::{CompletionRequest, GoalCompletion},
    goals::{Goal, GoalUpdate, NewGoal},
    progress::{GoalProgress, StreakSummary},
};

use crate::{
    auth::CurrentUser,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

async fn get_goals(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<Goal>>> {
    let goals = state.goal_service.get_active_goals(&user.id)?;
    Ok(Json(goals))
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    payload: Result<Json<NewGoal>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Goal>)> {
    let Json(new_goal) = payload?;
    let goal = state.goal_service.create_goal(&user.id, new_goal).await?;
    Ok((StatusCode::CREATED, Json(goal)))
}

async fn update_goal(
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    payload: Result<Json<GoalUpdate>, JsonRejection>,
) -> ApiResult<Json<Goal>> {
    let Json(update) = payload?;
    state
        .goal_service
        .update_goal(&goal_id, &user.id, update)
        .await?
        .map(Json)
        .ok_or_else(ApiError::goal_not_found)
}

async fn delete_goal(
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<StatusCode> {
    if state.goal_service.delete_goal(&goal_id, &user.id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::goal_not_found())
    }
}

/// The body is optional; an empty one records a plain completion for today.
async fn complete_goal(
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<GoalCompletion>)> {
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        CompletionRequest::default()
    } else {
        let de = &mut serde_json::Deserializer::from_slice(&body);
        let request: CompletionRequest =
            serde_path_to_error::deserialize(&mut *de).map_err(ApiError::from_json_error)?;
        de.end()
            .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {e}")))?;
        request
    };

    state
        .goal_service
        .record_completion(&goal_id, &user.id, request)
        .await?
        .map(|completion| (StatusCode::CREATED, Json(completion)))
        .ok_or_else(ApiError::goal_not_found)
}

async fn get_completions(
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<GoalCompletion>>> {
    state
        .goal_service
        .get_completions(&goal_id, &user.id)?
        .map(Json)
        .ok_or_else(ApiError::goal_not_found)
}

async fn get_streak(
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<StreakSummary>> {
    state
        .goal_service
        .get_streak(&goal_id, &user.id)?
        .map(Json)
        .ok_or_else(ApiError::goal_not_found)
}

async fn get_progress(
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<GoalProgress>> {
    state
        .goal_service
        .get_progress(&goal_id, &user.id)?
        .map(Json)
        .ok_or_else(ApiError::goal_not_found)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(get_goals).post(create_goal))
        .route("/goals/{goal_id}", put(update_goal).delete(delete_goal))
        .route("/goals/{goal_id}/complete", post(complete_goal))
        .route("/goals/{goal_id}/completions", get(get_completions))
        .route("/goals/{goal_id}/streak", get(get_streak))
        .route("/goals/{goal_id}/progress", get(get_progress))
}
