//! SQLite storage implementation for Streakwise.
//!
//! This crate is the only place where Diesel dependencies exist. It implements
//! the repository traits defined in `streakwise-core` and contains:
//! - Database connection pooling and the single writer actor
//! - Embedded Diesel migrations
//! - Repository implementations and their Diesel row types
//!
//! ```text
//!   streakwise-server
//!          │
//!          ▼
//!   core (domain, traits)
//!          ▲
//!          │ implements
//!   storage-sqlite (this crate) ──▶ SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod completions;
pub mod goals;
pub mod stats;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from streakwise-core for convenience
pub use streakwise_core::errors::{DatabaseError, Error, Result};
