//! Stats module - per-user counters and dashboard encouragement.

mod stats_model;
mod stats_service;
mod stats_traits;

pub use stats_model::UserStats;
pub use stats_service::StatsService;
pub use stats_traits::{StatsRepositoryTrait, StatsServiceTrait};
