//! Completions module - append-only completion events for goals.

mod completions_model;
mod completions_traits;

pub use completions_model::{CompletionRequest, DateRange, GoalCompletion, NewGoalCompletion};
pub use completions_traits::CompletionRepositoryTrait;
