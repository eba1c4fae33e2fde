//! Streakwise Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for Streakwise: goal and completion
//! models, their validation, the repository traits implemented by the
//! `storage-sqlite` crate, and the pure progress/streak engine.
//! It is database-agnostic.

pub mod completions;
pub mod constants;
pub mod errors;
pub mod goals;
pub mod progress;
pub mod stats;
pub mod users;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
