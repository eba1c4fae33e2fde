use std::sync::Arc;

use streakwise_core::{
    goals::{GoalService, GoalServiceTrait},
    stats::{StatsService, StatsServiceTrait},
    users::{UserService, UserServiceTrait},
};
use streakwise_storage_sqlite::{
    completions::CompletionRepository,
    db::{self, write_actor},
    goals::GoalRepository,
    stats::StatsRepository,
    users::UserRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{auth::AuthManager, config::Config};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub stats_service: Arc<dyn StatsServiceTrait>,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_json {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let user_repo = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let goal_repo = Arc::new(GoalRepository::new(pool.clone(), writer.clone()));
    let completion_repo = Arc::new(CompletionRepository::new(pool.clone(), writer.clone()));
    let stats_repo = Arc::new(StatsRepository::new(pool.clone()));

    let user_service = Arc::new(UserService::new(user_repo));
    let goal_service = Arc::new(GoalService::new(
        goal_repo.clone(),
        completion_repo.clone(),
        config.timezone,
    ));
    let stats_service = Arc::new(StatsService::new(
        stats_repo,
        goal_repo,
        completion_repo,
        config.timezone,
    ));

    tracing::info!("Evaluating streaks in timezone {}", config.timezone);

    Ok(Arc::new(AppState {
        user_service,
        goal_service,
        stats_service,
        auth: Arc::new(AuthManager::new(&config.auth)),
    }))
}
