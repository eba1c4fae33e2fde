use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Extension, Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use streakwise_core::completions::{DateRange, GoalCompletion};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompletionsQuery {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl CompletionsQuery {
    /// An open end on either side is unbounded.
    fn range(&self) -> streakwise_core::Result<Option<DateRange>> {
        match (self.start_date, self.end_date) {
            (None, None) => Ok(None),
            (start, end) => DateRange::new(
                start.unwrap_or(NaiveDate::MIN),
                end.unwrap_or(NaiveDate::MAX),
            )
            .map(Some),
        }
    }
}

async fn list_user_completions(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    query: Result<Query<CompletionsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<GoalCompletion>>> {
    let Query(query) = query?;
    let completions = state
        .goal_service
        .get_user_completions(&user.id, query.range()?)?;
    Ok(Json(completions))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/completions", get(list_user_completions))
}
