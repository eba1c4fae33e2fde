//! Goals module - domain models, services, and traits.

mod goals_model;
mod goals_service;
mod goals_traits;

pub use goals_model::{
    Goal, GoalCategory, GoalPriority, GoalStatus, GoalUpdate, NewGoal, ValueTracking,
};
pub use goals_service::GoalService;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};


#[cfg(test)]
mod goals_service_tests;
