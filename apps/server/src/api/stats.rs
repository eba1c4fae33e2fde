use std::sync::Arc;

use axum::{extract::State, routing::get, Extension, Json, Router};
use streakwise_core::{progress::MotivationalMessage, stats::UserStats};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn get_stats(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<UserStats>> {
    let stats = state.stats_service.get_user_stats(&user.id)?;
    Ok(Json(stats))
}

async fn get_motivation(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<MotivationalMessage>> {
    let message = state.stats_service.get_motivation(&user)?;
    Ok(Json(message))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stats", get(get_stats))
        .route("/motivation", get(get_motivation))
}
