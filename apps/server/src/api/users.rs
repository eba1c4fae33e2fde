use std::sync::Arc;

use axum::{extract::State, routing::get, Extension, Json, Router};
use streakwise_core::users::User;

use crate::{
    auth::CurrentUser,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

async fn get_current_user(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<User>> {
    state
        .user_service
        .get_user(&user.id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/auth/user", get(get_current_user))
}
