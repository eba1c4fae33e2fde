mod model;
mod repository;

pub use model::GoalCompletionDB;
pub use repository::CompletionRepository;
